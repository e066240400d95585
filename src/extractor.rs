//! Record wrapper with memoized extraction results.
//!
//! [`MetadataExtractor`] owns a record and computes each kind of metadata at
//! most once, on first request. Later calls return the cached value. Caches
//! are [`OnceLock`]s, so an extractor over a `Sync` record can be shared
//! between threads.

use crate::config::ExtractorConfig;
use crate::container::{extract_container_info, ContainerInfo};
use crate::error::Result;
use crate::meetings::{extract_meetings, Meeting};
use crate::names::{extract_names_for_tags, CslNameRole, Name, RoleBuckets};
use crate::publication::{extract_publication_info, PublicationInfo};
use crate::query::RecordAccess;
use crate::record::Record;
use std::sync::OnceLock;
use tracing::debug;

/// Extracts CSL-oriented metadata from a MARC record.
///
/// # Examples
///
/// ```
/// use marc_csl::{CslNameRole, Field, MetadataExtractor, Record};
///
/// let record = Record::builder()
///     .field(Field::builder("100", '1', ' ').subfield('a', "Austen, Jane").build())
///     .field(
///         Field::builder("700", '1', ' ')
///             .subfield('a', "Chapman, R. W.")
///             .subfield('e', "editor.")
///             .build(),
///     )
///     .build();
///
/// let extractor = MetadataExtractor::new(record);
/// let editors = extractor.names_for(CslNameRole::Editor);
/// assert_eq!(editors[0].family, "Chapman, R. W.");
/// assert_eq!(extractor.all_names().get("aut")[0].family, "Austen, Jane");
/// ```
#[derive(Debug)]
pub struct MetadataExtractor<R: RecordAccess = Record> {
    record: R,
    config: ExtractorConfig,
    names: OnceLock<RoleBuckets>,
    series_names: OnceLock<RoleBuckets>,
    meetings: OnceLock<Vec<Meeting>>,
    container: OnceLock<ContainerInfo>,
    publication: OnceLock<PublicationInfo>,
}

impl<R: RecordAccess> MetadataExtractor<R> {
    /// Wrap a record using the default configuration.
    #[must_use]
    pub fn new(record: R) -> Self {
        Self::build(record, ExtractorConfig::default())
    }

    /// Wrap a record using a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration names a malformed tag.
    pub fn with_config(record: R, config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(record, config))
    }

    fn build(record: R, config: ExtractorConfig) -> Self {
        MetadataExtractor {
            record,
            config,
            names: OnceLock::new(),
            series_names: OnceLock::new(),
            meetings: OnceLock::new(),
            container: OnceLock::new(),
            publication: OnceLock::new(),
        }
    }

    /// The wrapped record.
    #[must_use]
    pub fn record(&self) -> &R {
        &self.record
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Unwrap the record, discarding cached results.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.record
    }

    /// All personal, corporate and uncontrolled names, keyed by relator code.
    ///
    /// Excludes meetings and series names.
    #[must_use]
    pub fn all_names(&self) -> &RoleBuckets {
        self.names.get_or_init(|| {
            let names = extract_names_for_tags(&self.record, &self.config.name_tags);
            debug!(roles = names.len(), "extracted names");
            names
        })
    }

    /// All series names, keyed by relator code.
    #[must_use]
    pub fn all_series_names(&self) -> &RoleBuckets {
        self.series_names.get_or_init(|| {
            let names = extract_names_for_tags(&self.record, &self.config.series_name_tags);
            debug!(roles = names.len(), "extracted series names");
            names
        })
    }

    /// All meetings, in tag order then field order.
    #[must_use]
    pub fn all_meetings(&self) -> &[Meeting] {
        self.meetings.get_or_init(|| {
            let meetings = extract_meetings(&self.record, &self.config.meeting_tags);
            debug!(meetings = meetings.len(), "extracted meetings");
            meetings
        })
    }

    /// Information about the host item, from the first 773 field.
    #[must_use]
    pub fn container_info(&self) -> &ContainerInfo {
        self.container.get_or_init(|| {
            let container = extract_container_info(&self.record);
            debug!(empty = container.is_empty(), "extracted container info");
            container
        })
    }

    /// Publication statements grouped by function, latest first.
    #[must_use]
    pub fn all_publication_info(&self) -> &PublicationInfo {
        self.publication.get_or_init(|| {
            let publication = extract_publication_info(&self.record);
            debug!(
                functions = publication.functions().count(),
                "extracted publication info"
            );
            publication
        })
    }

    /// Names filling a CSL name variable.
    ///
    /// The collection editor is read from the series names; every other role
    /// from the names of the work itself.
    #[must_use]
    pub fn names_for(&self, role: CslNameRole) -> Vec<&Name> {
        match role {
            CslNameRole::CollectionEditor => self.all_series_names().names_for(role),
            _ => self.all_names().names_for(role),
        }
    }
}
