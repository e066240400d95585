//! Host item ("container") information, e.g. the journal an article appears
//! in.
//!
//! MARC: 773 - Host Item Entry (first field only)
//! - `$t` - Title -> `title`
//! - `$p` - Abbreviated title -> `title_short`
//! - `$g` - Related parts -> pages, number, volume, part, date
//! - `$q` - Enumeration and first page -> first page, number, volume, part
//! - `$b` - Edition -> `edition`
//! - `$a` - Main entry heading -> `author`
//!
//! `$q` has a fixed format and is preferred for number, volume and part.
//! Page ranges only exist in the free-text `$g`, so it wins for `pages`.
//!
//! See <https://www.loc.gov/marc/bibliographic/bd773.html>.

use crate::names::Name;
use crate::query::{QueryPath, RecordAccess};
use crate::text::{parse_enumeration_and_first_page, parse_related_parts};
use serde::Serialize;

/// Host item entry tag.
pub const HOST_ITEM_TAG: &str = "773";

/// Information about the item a record is part of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContainerInfo {
    /// Title of the host item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Abbreviated title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_short: Option<String>,
    /// Page range, or the first page when no range is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    /// First page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_page: Option<String>,
    /// Volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    /// Issue number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Part
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part: Option<String>,
    /// Date of the issue, as written in `$g`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Edition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    /// Main entry heading of the host item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Name>,
}

impl ContainerInfo {
    /// True when no container information was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn host_subfield<R: RecordAccess + ?Sized>(record: &R, code: char) -> Option<String> {
    record.query_text(&QueryPath::subfield_of(HOST_ITEM_TAG, 0, code))
}

/// Extract container information from the first 773 field.
pub fn extract_container_info<R: RecordAccess + ?Sized>(record: &R) -> ContainerInfo {
    let related = host_subfield(record, 'g')
        .map(|g| parse_related_parts(&g))
        .unwrap_or_default();
    let enumeration = host_subfield(record, 'q')
        .map(|q| parse_enumeration_and_first_page(&q))
        .unwrap_or_default();

    ContainerInfo {
        title: host_subfield(record, 't'),
        title_short: host_subfield(record, 'p'),
        pages: related.pages.or_else(|| enumeration.page.clone()),
        first_page: enumeration.page,
        volume: enumeration.volume.or(related.volume),
        number: enumeration.number.or(related.number),
        part: enumeration.part.or(related.part),
        date: related.date,
        edition: host_subfield(record, 'b'),
        author: host_subfield(record, 'a').map(Name::family),
    }
}
