//! In-memory MARC record structures.
//!
//! This module provides a minimal record model that satisfies the
//! [`RecordAccess`](crate::query::RecordAccess) contract used by the
//! extractors:
//! - [`Record`] - fields grouped by tag, in document order
//! - [`Field`] - a data field with two indicators and subfields
//! - [`Subfield`] - a coded data element within a field
//!
//! Decoding ISO 2709 or MARCXML is left to other crates; records are built
//! directly or converted from another record library.
//!
//! # Examples
//!
//! ```
//! use marc_csl::{Field, Record};
//!
//! let record = Record::builder()
//!     .field(
//!         Field::builder("100", '1', ' ')
//!             .subfield('a', "Moule, C. F. D.")
//!             .subfield('e', "editor.")
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(record.get_field("100").and_then(|f| f.get_subfield('a')), Some("Moule, C. F. D."));
//! ```

use indexmap::IndexMap;
use smallvec::SmallVec;

/// A MARC bibliographic record.
///
/// Fields are stored per tag using `IndexMap`, so fields sharing a tag keep
/// the order in which they were added (document order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Data fields - tag -> fields, preserves insertion order
    pub fields: IndexMap<String, Vec<Field>>,
}

/// A data field in a MARC record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field tag (3 characters)
    pub tag: String,
    /// First indicator, `' '` when unset
    pub indicator1: char,
    /// Second indicator, `' '` when unset
    pub indicator2: char,
    /// Subfields, stored inline for fields with 4 or fewer
    pub subfields: SmallVec<[Subfield; 4]>,
}

/// A subfield within a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subfield {
    /// Subfield code (single character)
    pub code: char,
    /// Subfield value
    pub value: String,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for fluently constructing records.
    #[must_use]
    pub fn builder() -> RecordBuilder {
        RecordBuilder {
            record: Record::new(),
        }
    }

    /// Append a data field after any existing fields with the same tag.
    pub fn add_field(&mut self, field: Field) {
        self.fields
            .entry(field.tag.clone())
            .or_default()
            .push(field);
    }

    /// Get all fields with a given tag.
    #[must_use]
    pub fn get_fields(&self, tag: &str) -> Option<&[Field]> {
        self.fields.get(tag).map(Vec::as_slice)
    }

    /// Get the first field with a given tag.
    #[must_use]
    pub fn get_field(&self, tag: &str) -> Option<&Field> {
        self.fields.get(tag).and_then(|v| v.first())
    }

    /// Iterate over all fields, grouped by tag in first-seen tag order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values().flat_map(|v| v.iter())
    }

    /// Iterate over fields matching a specific tag, in document order.
    pub fn fields_by_tag(&self, tag: &str) -> impl Iterator<Item = &Field> {
        self.fields.get(tag).map(|v| v.iter()).into_iter().flatten()
    }
}

/// Builder for fluently constructing records.
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Add a data field to the record being built.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.record.add_field(field);
        self
    }

    /// Build the record.
    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}

impl Field {
    /// Create a new data field without subfields.
    #[must_use]
    pub fn new(tag: impl Into<String>, indicator1: char, indicator2: char) -> Self {
        Field {
            tag: tag.into(),
            indicator1,
            indicator2,
            subfields: SmallVec::new(),
        }
    }

    /// Create a builder for constructing fields fluently.
    ///
    /// # Examples
    ///
    /// ```
    /// use marc_csl::Field;
    ///
    /// let field = Field::builder("773", '0', ' ')
    ///     .subfield('t', "The Journal of Theological Studies")
    ///     .subfield('q', "49:2<553")
    ///     .build();
    /// assert_eq!(field.get_subfield('q'), Some("49:2<553"));
    /// ```
    #[must_use]
    pub fn builder(tag: impl Into<String>, indicator1: char, indicator2: char) -> FieldBuilder {
        FieldBuilder {
            field: Field::new(tag, indicator1, indicator2),
        }
    }

    /// Append a subfield.
    pub fn add_subfield(&mut self, code: char, value: impl Into<String>) {
        self.subfields.push(Subfield {
            code,
            value: value.into(),
        });
    }

    /// Get the first value for a subfield code.
    #[must_use]
    pub fn get_subfield(&self, code: char) -> Option<&str> {
        self.subfields
            .iter()
            .find(|sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Get all values for a subfield code, in field order.
    #[must_use]
    pub fn get_subfield_values(&self, code: char) -> Vec<&str> {
        self.subfields_by_code(code).collect()
    }

    /// Iterate over subfields with a specific code.
    pub fn subfields_by_code(&self, code: char) -> impl Iterator<Item = &str> {
        self.subfields
            .iter()
            .filter(move |sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Get all subfield values matching any of the given codes.
    ///
    /// Values are returned in the order they appear in the field, not in the
    /// order of `codes`.
    #[must_use]
    pub fn get_subfields(&self, codes: &[char]) -> Vec<&str> {
        self.subfields
            .iter()
            .filter(|sf| codes.contains(&sf.code))
            .map(|sf| sf.value.as_str())
            .collect()
    }
}

/// Builder for fluently constructing fields.
#[derive(Debug)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    /// Add a subfield to the field being built.
    #[must_use]
    pub fn subfield(mut self, code: char, value: impl Into<String>) -> Self {
        self.field.add_subfield(code, value);
        self
    }

    /// Build the field.
    #[must_use]
    pub fn build(self) -> Field {
        self.field
    }
}
