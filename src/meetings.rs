//! Meeting names (conferences, congresses, treaty signings).
//!
//! MARC: X11 fields
//! - `$a` - Meeting name or jurisdiction name as entry element (NR)
//! - `$c` - Location of meeting (R)
//! - `$d` - Date of meeting or treaty signing (R)
//!
//! These feed the CSL `event`, `event-place` and `event-date` variables.
//!
//! See <https://www.loc.gov/marc/bibliographic/bdx11.html>.

use crate::query::{FieldAccess, RecordAccess};
use serde::Serialize;
use tracing::trace;

/// Tags holding meeting names, in the order meetings are collected.
pub const MEETING_TAGS: [&str; 4] = [
    // Main Entry - Meeting Name
    "111",
    // Subject Added Entry - Meeting Name
    "611",
    // Added Entry - Meeting Name
    "711",
    // Series Added Entry - Meeting Name
    "811",
];

/// A meeting named in a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meeting {
    /// Meeting name
    pub name: String,
    /// Locations of the meeting, in field order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<String>,
    /// Dates of the meeting, in field order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<String>,
}

impl Meeting {
    fn from_field<F: FieldAccess>(field: &F) -> Option<Self> {
        let Some(name) = field.subfield('a').filter(|a| !a.is_empty()) else {
            trace!(tag = field.tag(), "skipping meeting field without $a");
            return None;
        };
        Some(Meeting {
            name: name.to_string(),
            locations: owned(field.subfield_values('c')),
            dates: owned(field.subfield_values('d')),
        })
    }
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values
        .into_iter()
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collect the meetings of every field with the given tags, in tag order then
/// field order.
pub fn extract_meetings<R, T>(record: &R, tags: &[T]) -> Vec<Meeting>
where
    R: RecordAccess + ?Sized,
    T: AsRef<str>,
{
    tags.iter()
        .flat_map(|tag| record.fields_by_tag(tag.as_ref()))
        .filter_map(Meeting::from_field)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Field, Record};

    #[test]
    fn test_extract_meetings_across_tags() {
        let record = Record::builder()
            .field(
                Field::builder("711", '2', ' ')
                    .subfield('a', "Added meeting")
                    .build(),
            )
            .field(
                Field::builder("111", '2', ' ')
                    .subfield('a', "DrupalCon")
                    .subfield('c', "Amsterdam")
                    .subfield('d', "2019")
                    .subfield('c', "Online")
                    .build(),
            )
            .build();

        let meetings = extract_meetings(&record, &MEETING_TAGS);
        assert_eq!(meetings.len(), 2);
        assert_eq!(meetings[0].name, "DrupalCon");
        assert_eq!(meetings[0].locations, vec!["Amsterdam", "Online"]);
        assert_eq!(meetings[0].dates, vec!["2019"]);
        assert_eq!(meetings[1].name, "Added meeting");
        assert!(meetings[1].locations.is_empty());
    }

    #[test]
    fn test_meeting_without_name_is_skipped() {
        let record = Record::builder()
            .field(
                Field::builder("611", '2', '0')
                    .subfield('c', "Somewhere")
                    .subfield('d', "1999")
                    .build(),
            )
            .build();
        assert!(extract_meetings(&record, &MEETING_TAGS).is_empty());
    }

    #[test]
    fn test_empty_subfields_are_dropped() {
        let record = Record::builder()
            .field(
                Field::builder("111", '2', ' ')
                    .subfield('a', "Meet")
                    .subfield('c', "")
                    .subfield('d', "")
                    .subfield('d', "2001")
                    .build(),
            )
            .field(Field::builder("711", '2', ' ').subfield('a', "").build())
            .build();

        let meetings = extract_meetings(&record, &MEETING_TAGS);
        assert_eq!(meetings.len(), 1);
        assert!(meetings[0].locations.is_empty());
        assert_eq!(meetings[0].dates, vec!["2001"]);
    }

    #[test]
    fn test_only_requested_tags_are_read() {
        let record = Record::builder()
            .field(Field::builder("811", '2', ' ').subfield('a', "Series meeting").build())
            .build();
        assert!(extract_meetings(&record, &["111"]).is_empty());
        assert_eq!(extract_meetings(&record, &["811"]).len(), 1);
    }
}
