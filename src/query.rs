//! The record access contract the extractors are written against.
//!
//! Extraction only needs a small read-only view of a record: fields by tag in
//! document order, indicators, and subfield values. [`RecordAccess`] and
//! [`FieldAccess`] capture that view so the extractors can run over this
//! crate's [`Record`] or over any other MARC record type that implements them.
//!
//! The contract also owns two conveniences:
//!
//! - [`FieldAccess::relator_terms`] merges textual (`$e`) and coded (`$4`)
//!   relator subfields into one ordered list of relator codes.
//! - [`RecordAccess::query_text`] evaluates a [`QueryPath`] such as `773[0]$t`.
//!
//! # Examples
//!
//! ```
//! use marc_csl::{Field, QueryPath, Record, RecordAccess};
//!
//! let record = Record::builder()
//!     .field(
//!         Field::builder("245", '1', '0')
//!             .subfield('a', "Robot /")
//!             .subfield('c', "Jan Pieńkowski.")
//!             .build(),
//!     )
//!     .build();
//!
//! let path: QueryPath = "245[0]$a$c".parse()?;
//! assert_eq!(record.query_text(&path).as_deref(), Some("Robot /Jan Pieńkowski."));
//! # Ok::<(), marc_csl::MarcError>(())
//! ```

use crate::error::{MarcError, Result};
use crate::record::{Field, Record};
use crate::relator;
use indexmap::IndexSet;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Read-only access to one data field.
pub trait FieldAccess {
    /// The field tag, e.g. `"100"`.
    fn tag(&self) -> &str;

    /// First indicator; `' '` when unset.
    fn indicator1(&self) -> char;

    /// Second indicator; `' '` when unset.
    fn indicator2(&self) -> char;

    /// First value of a subfield.
    fn subfield(&self, code: char) -> Option<&str>;

    /// All values of a subfield, in field order.
    fn subfield_values(&self, code: char) -> Vec<&str>;

    /// All values of any of the given subfields, in field order.
    fn subfields_with_codes(&self, codes: &[char]) -> Vec<&str>;

    /// Relator codes declared by the field.
    ///
    /// Textual terms from `$e` come first, normalized to codes through the
    /// [`relator`] vocabulary, followed by the codes in `$4`. Duplicates are
    /// dropped, keeping the first occurrence, so a field with both
    /// `$eeditor.` and `$4edt` yields `["edt"]` once.
    fn relator_terms(&self) -> Vec<String> {
        let terms = self
            .subfield_values('e')
            .into_iter()
            .filter_map(relator::normalize_term);
        let codes = self
            .subfield_values('4')
            .into_iter()
            .filter_map(relator::normalize_code);
        terms
            .chain(codes)
            .collect::<IndexSet<String>>()
            .into_iter()
            .collect()
    }
}

/// Read-only access to the data fields of a record.
pub trait RecordAccess {
    /// The field type handed out by this record.
    type Field: FieldAccess;

    /// Iterate over the fields with a given tag, in document order.
    fn fields_by_tag<'a>(&'a self, tag: &str) -> Box<dyn Iterator<Item = &'a Self::Field> + 'a>;

    /// Evaluate a query path and return the concatenated subfield text.
    ///
    /// With an occurrence index only that field is consulted; without one the
    /// first field that yields any text wins. Returns `None` when no value
    /// matched.
    fn query_text(&self, path: &QueryPath) -> Option<String> {
        let mut fields = self.fields_by_tag(path.tag());
        let text = match path.occurrence() {
            Some(index) => fields.nth(index).map(|field| path.text_of(field)),
            None => fields
                .map(|field| path.text_of(field))
                .find(|text| !text.is_empty()),
        }?;
        (!text.is_empty()).then_some(text)
    }
}

impl FieldAccess for Field {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn indicator1(&self) -> char {
        self.indicator1
    }

    fn indicator2(&self) -> char {
        self.indicator2
    }

    fn subfield(&self, code: char) -> Option<&str> {
        self.get_subfield(code)
    }

    fn subfield_values(&self, code: char) -> Vec<&str> {
        self.get_subfield_values(code)
    }

    fn subfields_with_codes(&self, codes: &[char]) -> Vec<&str> {
        self.get_subfields(codes)
    }
}

impl RecordAccess for Record {
    type Field = Field;

    fn fields_by_tag<'a>(&'a self, tag: &str) -> Box<dyn Iterator<Item = &'a Field> + 'a> {
        Box::new(Record::fields_by_tag(self, tag))
    }
}

/// Check that a tag is three ASCII alphanumeric characters.
///
/// # Errors
///
/// Returns [`MarcError::InvalidTag`] otherwise.
pub fn validate_tag(tag: &str) -> Result<()> {
    if tag.len() == 3 && tag.bytes().all(|b| b.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(MarcError::InvalidTag(tag.to_string()))
    }
}

/// A path selecting subfield text from a record, e.g. `773[0]$t` or `245$a$b`.
///
/// Syntax: a three character tag, an optional zero-based field occurrence in
/// square brackets, then one or more `$` + subfield code pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPath {
    tag: String,
    occurrence: Option<usize>,
    codes: SmallVec<[char; 4]>,
}

impl QueryPath {
    /// Build a path from its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is malformed or no subfield code is given.
    pub fn new(tag: &str, occurrence: Option<usize>, codes: &[char]) -> Result<Self> {
        validate_tag(tag)?;
        if codes.is_empty() {
            return Err(MarcError::query_path(tag, "at least one subfield code is required"));
        }
        Ok(QueryPath {
            tag: tag.to_string(),
            occurrence,
            codes: codes.iter().copied().collect(),
        })
    }

    /// Path to one subfield of a specific field occurrence.
    ///
    /// Used for paths known at compile time; the tag is not validated.
    #[must_use]
    pub fn subfield_of(tag: &str, occurrence: usize, code: char) -> Self {
        let mut codes = SmallVec::new();
        codes.push(code);
        QueryPath {
            tag: tag.to_string(),
            occurrence: Some(occurrence),
            codes,
        }
    }

    /// The selected tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The selected field occurrence, if any.
    #[must_use]
    pub fn occurrence(&self) -> Option<usize> {
        self.occurrence
    }

    /// The selected subfield codes.
    #[must_use]
    pub fn codes(&self) -> &[char] {
        &self.codes
    }

    /// Concatenate the selected subfield values of one field, no separator.
    #[must_use]
    pub fn text_of<F: FieldAccess + ?Sized>(&self, field: &F) -> String {
        field.subfields_with_codes(&self.codes).concat()
    }
}

impl FromStr for QueryPath {
    type Err = MarcError;

    fn from_str(path: &str) -> Result<Self> {
        let tag = path
            .get(..3)
            .ok_or_else(|| MarcError::query_path(path, "tag must be three characters"))?;
        validate_tag(tag)?;

        let mut rest = &path[3..];
        let mut occurrence = None;
        if let Some(after_bracket) = rest.strip_prefix('[') {
            let (index, after) = after_bracket
                .split_once(']')
                .ok_or_else(|| MarcError::query_path(path, "unclosed occurrence index"))?;
            let index = index
                .parse::<usize>()
                .map_err(|_| MarcError::query_path(path, "occurrence index must be a number"))?;
            occurrence = Some(index);
            rest = after;
        }

        let mut codes = SmallVec::<[char; 4]>::new();
        let mut chars = rest.chars();
        while let Some(c) = chars.next() {
            if c != '$' {
                return Err(MarcError::query_path(path, format!("expected '$', found '{c}'")));
            }
            match chars.next() {
                Some(code) if code.is_ascii_alphanumeric() => codes.push(code),
                Some(code) => {
                    return Err(MarcError::query_path(
                        path,
                        format!("invalid subfield code '{code}'"),
                    ))
                },
                None => return Err(MarcError::query_path(path, "missing subfield code after '$'")),
            }
        }

        if codes.is_empty() {
            return Err(MarcError::query_path(path, "at least one subfield code is required"));
        }

        Ok(QueryPath {
            tag: tag.to_string(),
            occurrence,
            codes,
        })
    }
}

impl fmt::Display for QueryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)?;
        if let Some(index) = self.occurrence {
            write!(f, "[{index}]")?;
        }
        for code in &self.codes {
            write!(f, "${code}")?;
        }
        Ok(())
    }
}
