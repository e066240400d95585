//! Configuration options for metadata extraction.
//!
//! This module provides the [`ExtractorConfig`] struct which controls which
//! tags feed the name, series name and meeting extractors.

use crate::error::Result;
use crate::meetings::MEETING_TAGS;
use crate::names::{NAME_TAGS, SERIES_NAME_TAGS};
use crate::query::validate_tag;

/// Configuration for a [`MetadataExtractor`](crate::MetadataExtractor).
///
/// Tag lists are read in order; the order of the resulting names and meetings
/// follows it.
///
/// # Examples
///
/// ```
/// use marc_csl::ExtractorConfig;
///
/// // Only main and added entries, no subject names
/// let config = ExtractorConfig::new().with_name_tags(["100", "110", "700", "710"]);
/// assert_eq!(config.name_tags, vec!["100", "110", "700", "710"]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Tags read for personal, corporate and uncontrolled names.
    pub name_tags: Vec<String>,

    /// Tags read for series names.
    pub series_name_tags: Vec<String>,

    /// Tags read for meetings.
    pub meeting_tags: Vec<String>,
}

fn owned_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tags.into_iter().map(Into::into).collect()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            name_tags: owned_tags(NAME_TAGS),
            series_name_tags: owned_tags(SERIES_NAME_TAGS),
            meeting_tags: owned_tags(MEETING_TAGS),
        }
    }
}

impl ExtractorConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tags read for names.
    #[must_use]
    pub fn with_name_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.name_tags = owned_tags(tags);
        self
    }

    /// Sets the tags read for series names.
    #[must_use]
    pub fn with_series_name_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.series_name_tags = owned_tags(tags);
        self
    }

    /// Sets the tags read for meetings.
    #[must_use]
    pub fn with_meeting_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meeting_tags = owned_tags(tags);
        self
    }

    /// Check that every configured tag is a three character MARC tag.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::InvalidTag`](crate::MarcError::InvalidTag) for the
    /// first malformed tag.
    pub fn validate(&self) -> Result<()> {
        self.name_tags
            .iter()
            .chain(&self.series_name_tags)
            .chain(&self.meeting_tags)
            .try_for_each(|tag| validate_tag(tag))
    }
}
