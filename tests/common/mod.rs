//! Common test helpers and utilities shared across test suite.

use marc_csl::{Field, MetadataExtractor, Record};
use serde::Serialize;
use serde_json::Value;

/// Creates a field with blank indicators.
#[allow(dead_code)]
pub fn field(tag: &str, subfields: &[(char, &str)]) -> Field {
    field_with_indicators(tag, ' ', ' ', subfields)
}

/// Creates a field with the given indicators.
#[allow(dead_code)]
pub fn field_with_indicators(
    tag: &str,
    indicator1: char,
    indicator2: char,
    subfields: &[(char, &str)],
) -> Field {
    let mut field = Field::new(tag, indicator1, indicator2);
    for (code, value) in subfields {
        field.add_subfield(*code, *value);
    }
    field
}

/// Creates a record holding the given fields, in order.
#[allow(dead_code)]
pub fn record(fields: Vec<Field>) -> Record {
    fields
        .into_iter()
        .fold(Record::builder(), |builder, field| builder.field(field))
        .build()
}

/// Wraps the given fields in an extractor with the default configuration.
#[allow(dead_code)]
pub fn extractor(fields: Vec<Field>) -> MetadataExtractor {
    MetadataExtractor::new(record(fields))
}

/// Serializes an extraction result for comparison with a `json!` fixture.
#[allow(dead_code)]
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).expect("extraction results serialize")
}
