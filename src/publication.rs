//! Publication, distribution and manufacture statements.
//!
//! MARC:
//! - 260 - Publication, Distribution, etc. (Imprint)
//!     - `$a/$b/$c` - place, name and date of publication
//!     - `$e/$f/$g` - place, name and date of manufacture
//! - 264 - Production, Publication, Distribution, Manufacture, and Copyright
//!   Notice; the second indicator selects the function of the entity and
//!   `$a/$b/$c` hold place, name and date
//!
//! Statements are grouped by [`PublicationFunction`] and each group is ranked
//! so that the current/latest entity comes first: by the first indicator
//! (sequence of statements) descending, then by date descending. Repeated
//! subfields are not supported; only the first occurrence is read.
//!
//! See <https://www.loc.gov/marc/bibliographic/bd260.html> and
//! <https://www.loc.gov/marc/bibliographic/bd264.html>.

use crate::query::{FieldAccess, RecordAccess};
use crate::text::trim_non_word_characters;
use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Imprint tag.
pub const IMPRINT_TAG: &str = "260";
/// Production/publication/distribution/manufacture/copyright tag.
pub const PRODUCTION_TAG: &str = "264";

/// The function of the entity named in a publication statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationFunction {
    /// Production (unpublished works)
    Producer,
    /// Publication
    Publisher,
    /// Distribution
    Distributor,
    /// Manufacture
    Manufacturer,
    /// Copyright notice date
    Copyright,
}

impl PublicationFunction {
    /// Map a 264 second indicator to a function.
    ///
    /// Missing or invalid indicators mean publication.
    #[must_use]
    pub fn from_indicator(indicator: char) -> Self {
        match indicator {
            '0' => Self::Producer,
            '2' => Self::Distributor,
            '3' => Self::Manufacturer,
            '4' => Self::Copyright,
            _ => Self::Publisher,
        }
    }

    /// Lower-case name of the function.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Producer => "producer",
            Self::Publisher => "publisher",
            Self::Distributor => "distributor",
            Self::Manufacturer => "manufacturer",
            Self::Copyright => "copyright",
        }
    }
}

impl fmt::Display for PublicationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Place, name and date of one publication statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublicationStatement {
    /// Place of publication, manufacture, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    /// Name of the publisher, manufacturer, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Date, as catalogued
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl PublicationStatement {
    /// Build a statement from raw subfield values.
    ///
    /// Values are trimmed of surrounding punctuation; values left empty are
    /// dropped. Returns `None` when nothing is left.
    #[must_use]
    pub fn from_parts(place: Option<&str>, name: Option<&str>, date: Option<&str>) -> Option<Self> {
        let statement = PublicationStatement {
            place: cleaned(place),
            name: cleaned(name),
            date: cleaned(date),
        };
        (!statement.is_empty()).then_some(statement)
    }

    /// True when place, name and date are all absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.place.is_none() && self.name.is_none() && self.date.is_none()
    }
}

fn cleaned(value: Option<&str>) -> Option<String> {
    let value = trim_non_word_characters(value?);
    (!value.is_empty()).then(|| value.to_string())
}

/// A statement with its sequence priority, used only while ranking.
#[derive(Debug)]
struct RankedStatement {
    priority: u32,
    statement: PublicationStatement,
}

impl RankedStatement {
    fn date(&self) -> &str {
        self.statement.date.as_deref().unwrap_or_default()
    }

    /// Current/latest first: higher priority, then later date string.
    fn rank(a: &Self, b: &Self) -> Ordering {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.date().cmp(a.date()))
    }
}

/// First indicator as a sequence priority.
///
/// `#` earliest, `2` intervening, `3` current/latest. Anything that is not a
/// digit counts as 0.
fn sequence_priority<F: FieldAccess + ?Sized>(field: &F) -> u32 {
    field.indicator1().to_digit(10).unwrap_or(0)
}

/// Publication statements grouped by function, each group ranked latest
/// first.
///
/// Functions appear in the order they were first encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PublicationInfo(IndexMap<PublicationFunction, Vec<PublicationStatement>>);

impl PublicationInfo {
    /// Ranked statements for a function; empty when there are none.
    #[must_use]
    pub fn get(&self, function: PublicationFunction) -> &[PublicationStatement] {
        self.0.get(&function).map_or(&[], Vec::as_slice)
    }

    /// Ranked publisher statements.
    #[must_use]
    pub fn publishers(&self) -> &[PublicationStatement] {
        self.get(PublicationFunction::Publisher)
    }

    /// The current/latest publisher, if any.
    #[must_use]
    pub fn publisher(&self) -> Option<&PublicationStatement> {
        self.publishers().first()
    }

    /// Functions present, in first-seen order.
    pub fn functions(&self) -> impl Iterator<Item = PublicationFunction> + '_ {
        self.0.keys().copied()
    }

    /// Iterate over `(function, statements)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PublicationFunction, &[PublicationStatement])> {
        self.0
            .iter()
            .map(|(function, statements)| (*function, statements.as_slice()))
    }

    /// True when the record has no publication statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Default)]
struct Collector(IndexMap<PublicationFunction, Vec<RankedStatement>>);

impl Collector {
    fn add(
        &mut self,
        function: PublicationFunction,
        priority: u32,
        statement: Option<PublicationStatement>,
    ) {
        if let Some(statement) = statement {
            self.0
                .entry(function)
                .or_default()
                .push(RankedStatement { priority, statement });
        }
    }

    fn finish(self) -> PublicationInfo {
        PublicationInfo(
            self.0
                .into_iter()
                .map(|(function, mut ranked)| {
                    // Vec::sort_by is stable, so ties keep field order.
                    ranked.sort_by(RankedStatement::rank);
                    let statements = ranked.into_iter().map(|r| r.statement).collect();
                    (function, statements)
                })
                .collect(),
        )
    }
}

/// Collect and rank the publication statements of a record.
pub fn extract_publication_info<R: RecordAccess + ?Sized>(record: &R) -> PublicationInfo {
    let mut collector = Collector::default();

    for field in record.fields_by_tag(IMPRINT_TAG) {
        let priority = sequence_priority(field);
        collector.add(
            PublicationFunction::Publisher,
            priority,
            PublicationStatement::from_parts(
                field.subfield('a'),
                field.subfield('b'),
                field.subfield('c'),
            ),
        );
        collector.add(
            PublicationFunction::Manufacturer,
            priority,
            PublicationStatement::from_parts(
                field.subfield('e'),
                field.subfield('f'),
                field.subfield('g'),
            ),
        );
    }

    for field in record.fields_by_tag(PRODUCTION_TAG) {
        collector.add(
            PublicationFunction::from_indicator(field.indicator2()),
            sequence_priority(field),
            PublicationStatement::from_parts(
                field.subfield('a'),
                field.subfield('b'),
                field.subfield('c'),
            ),
        );
    }

    collector.finish()
}
