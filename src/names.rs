//! Personal, corporate and uncontrolled names, bucketed by role.
//!
//! MARC: X00 (personal names), X10 (corporate names) and 720 (uncontrolled
//! names)
//! - `$a` - Personal name / corporate name or jurisdiction (NR)
//! - `$c` - Titles and other words associated with a name (R)
//! - `$e` - Relator term (R)
//! - `$4` - Relator code (R)
//!
//! Each field with a `$a` becomes one [`Name`], appended to the bucket of
//! every relator code the field declares (or [`relator::AUTHOR`] when it
//! declares none).
//!
//! See <https://www.loc.gov/marc/bibliographic/bdx00.html> and
//! <https://www.loc.gov/marc/bibliographic/bdx10.html>.

use crate::query::{FieldAccess, RecordAccess};
use crate::relator;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::trace;

/// Tags holding names of contributors, subjects and added entries, in the
/// order their names are collected.
pub const NAME_TAGS: [&str; 7] = [
    // Main Entry - Personal Name
    "100",
    // Main Entry - Corporate Name
    "110",
    // Subject Added Entry - Personal Name
    "600",
    // Subject Added Entry - Corporate Name
    "610",
    // Added Entry - Personal Name
    "700",
    // Added Entry - Corporate Name
    "710",
    // Added Entry - Uncontrolled Name
    "720",
];

/// Tags holding series names.
pub const SERIES_NAME_TAGS: [&str; 2] = [
    // Series Added Entry - Personal Name
    "800",
    // Series Added Entry - Corporate Name
    "810",
];

const LEGITIMATE_AUTHORS: &[&str] = &[
    relator::AUTHOR,
    relator::AUTHOR_IN_QUOTATIONS_OR_TEXT_ABSTRACTS,
    relator::AUTHOR_OF_AFTERWORD_COLOPHON_ETC,
    relator::AUTHOR_OF_DIALOG,
    relator::AUTHOR_OF_INTRODUCTION_ETC,
];

const EDITORS: &[&str] = &[
    relator::EDITOR,
    relator::EDITOR_OF_COMPILATION,
    relator::EDITOR_OF_MOVING_IMAGE_WORK,
    relator::FILM_EDITOR,
    relator::MARKUP_EDITOR,
];

const DIRECTORS: &[&str] = &[
    relator::DIRECTOR,
    relator::ART_DIRECTOR,
    relator::ARTISTIC_DIRECTOR,
    relator::FIELD_DIRECTOR,
    relator::FILM_DIRECTOR,
    relator::LABORATORY_DIRECTOR,
    relator::MUSICAL_DIRECTOR,
    relator::PROJECT_DIRECTOR,
    relator::RADIO_DIRECTOR,
    relator::STAGE_DIRECTOR,
    relator::TECHNICAL_DIRECTOR,
    relator::TELEVISION_DIRECTOR,
];

/// A name in the shape of a CSL name variable.
///
/// MARC rarely lets a name be split reliably, so the whole heading is kept in
/// `family` and `given` stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name {
    /// The name heading as catalogued
    pub family: String,
    /// Given name, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    /// Titles and other words associated with the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl Name {
    /// A name with only a family part.
    #[must_use]
    pub fn family(family: impl Into<String>) -> Self {
        Name {
            family: family.into(),
            given: None,
            suffix: None,
        }
    }

    /// Set the suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

/// Names keyed by relator code.
///
/// Roles appear in the order they were first seen; names within a role keep
/// field order. A role is only present if it holds at least one name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoleBuckets(IndexMap<String, Vec<Name>>);

impl RoleBuckets {
    /// Create an empty set of buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a name to a role's bucket.
    pub fn push(&mut self, role: impl Into<String>, name: Name) {
        self.0.entry(role.into()).or_default().push(name);
    }

    /// Names with the given relator code.
    #[must_use]
    pub fn get(&self, role: &str) -> &[Name] {
        self.0.get(role).map_or(&[], Vec::as_slice)
    }

    /// Relator codes present, in first-seen order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over `(relator code, names)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Name])> {
        self.0.iter().map(|(role, names)| (role.as_str(), names.as_slice()))
    }

    /// Number of roles present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no names were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of several roles, concatenated in the order of `roles`.
    #[must_use]
    pub fn names_for_codes(&self, roles: &[&str]) -> Vec<&Name> {
        roles.iter().flat_map(|role| self.get(role)).collect()
    }

    /// The authors of the work.
    ///
    /// Dubious authors are only returned when there is no other author.
    #[must_use]
    pub fn authors(&self) -> Vec<&Name> {
        let authors = self.names_for_codes(LEGITIMATE_AUTHORS);
        if authors.is_empty() {
            self.names_for_codes(&[relator::DUBIOUS_AUTHOR])
        } else {
            authors
        }
    }

    /// The editors of the work.
    #[must_use]
    pub fn editors(&self) -> Vec<&Name> {
        self.names_for_codes(EDITORS)
    }

    /// Names filling a CSL name variable.
    #[must_use]
    pub fn names_for(&self, role: CslNameRole) -> Vec<&Name> {
        match role {
            CslNameRole::Author => self.authors(),
            CslNameRole::CollectionEditor => {
                let editors = self.editors();
                if editors.is_empty() {
                    self.names_for_codes(LEGITIMATE_AUTHORS)
                } else {
                    editors
                }
            },
            other => self.names_for_codes(other.relator_codes()),
        }
    }
}

/// CSL name variables that can be filled from relator buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CslNameRole {
    /// `author`
    Author,
    /// `collection-editor`, read from series name buckets
    CollectionEditor,
    /// `composer`
    Composer,
    /// `director`
    Director,
    /// `editor`
    Editor,
    /// `editorial-director`
    EditorialDirector,
    /// `illustrator`
    Illustrator,
    /// `interviewer`
    Interviewer,
    /// `recipient`
    Recipient,
    /// `translator`
    Translator,
}

impl CslNameRole {
    /// Every role, in CSL variable name order.
    pub const ALL: [CslNameRole; 10] = [
        Self::Author,
        Self::CollectionEditor,
        Self::Composer,
        Self::Director,
        Self::Editor,
        Self::EditorialDirector,
        Self::Illustrator,
        Self::Interviewer,
        Self::Recipient,
        Self::Translator,
    ];

    /// The CSL variable name.
    #[must_use]
    pub const fn csl_variable(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::CollectionEditor => "collection-editor",
            Self::Composer => "composer",
            Self::Director => "director",
            Self::Editor => "editor",
            Self::EditorialDirector => "editorial-director",
            Self::Illustrator => "illustrator",
            Self::Interviewer => "interviewer",
            Self::Recipient => "recipient",
            Self::Translator => "translator",
        }
    }

    /// Relator codes whose names fill this variable, in priority order.
    ///
    /// Fallbacks (dubious authors, series authors) are applied by
    /// [`RoleBuckets::names_for`], not listed here.
    #[must_use]
    pub fn relator_codes(self) -> &'static [&'static str] {
        match self {
            Self::Author => LEGITIMATE_AUTHORS,
            Self::CollectionEditor | Self::Editor => EDITORS,
            Self::Composer => &[relator::COMPOSER],
            Self::Director => DIRECTORS,
            Self::EditorialDirector => &[relator::PUBLISHING_DIRECTOR],
            Self::Illustrator => &[relator::ILLUSTRATOR],
            Self::Interviewer => &[relator::INTERVIEWER],
            Self::Recipient => &[relator::ADDRESSEE],
            Self::Translator => &[relator::TRANSLATOR],
        }
    }
}

fn name_from_field<F: FieldAccess>(field: &F) -> Option<Name> {
    let Some(family) = field.subfield('a').filter(|a| !a.is_empty()) else {
        trace!(tag = field.tag(), "skipping name field without $a");
        return None;
    };
    let mut name = Name::family(family);
    // Titles and words associated with a name (X00), or the location of a
    // meeting (X10).
    name.suffix = field
        .subfield('c')
        .filter(|c| !c.is_empty())
        .map(ToString::to_string);
    Some(name)
}

/// Collect the names of every field with the given tag.
pub fn extract_names<R: RecordAccess + ?Sized>(record: &R, tag: &str) -> RoleBuckets {
    let mut buckets = RoleBuckets::new();
    collect_names(record, tag, &mut buckets);
    buckets
}

/// Collect names over several tags, in tag order then field order.
pub fn extract_names_for_tags<R, T>(record: &R, tags: &[T]) -> RoleBuckets
where
    R: RecordAccess + ?Sized,
    T: AsRef<str>,
{
    let mut buckets = RoleBuckets::new();
    for tag in tags {
        collect_names(record, tag.as_ref(), &mut buckets);
    }
    buckets
}

fn collect_names<R: RecordAccess + ?Sized>(record: &R, tag: &str, buckets: &mut RoleBuckets) {
    for field in record.fields_by_tag(tag) {
        let Some(name) = name_from_field(field) else {
            continue;
        };

        let mut roles = field.relator_terms();
        if roles.is_empty() {
            roles.push(relator::AUTHOR.to_string());
        }

        for role in roles {
            buckets.push(role, name.clone());
        }
    }
}
