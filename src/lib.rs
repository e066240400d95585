#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # marc-csl: MARC to CSL metadata extraction
//!
//! Pulls contributor names, meetings, host item details and publication
//! statements out of MARC bibliographic records, in shapes ready to be copied
//! into CSL-JSON variables.
//!
//! ## Quick Start
//!
//! ```
//! use marc_csl::{CslNameRole, Field, MetadataExtractor, PublicationFunction, Record};
//!
//! let record = Record::builder()
//!     .field(Field::builder("100", '1', ' ').subfield('a', "Moule, C. F. D.").build())
//!     .field(
//!         Field::builder("264", ' ', '1')
//!             .subfield('a', "Cambridge :")
//!             .subfield('b', "Cambridge University Press,")
//!             .subfield('c', "1998.")
//!             .build(),
//!     )
//!     .field(
//!         Field::builder("773", '0', ' ')
//!             .subfield('t', "The Journal of Theological Studies")
//!             .subfield('g', "Vol. 49, no. 2 (October 1998), p. 553-581")
//!             .subfield('q', "49:2<553")
//!             .build(),
//!     )
//!     .build();
//!
//! let extractor = MetadataExtractor::new(record);
//!
//! assert_eq!(extractor.names_for(CslNameRole::Author)[0].family, "Moule, C. F. D.");
//!
//! let container = extractor.container_info();
//! assert_eq!(container.volume.as_deref(), Some("49"));
//! assert_eq!(container.pages.as_deref(), Some("553-581"));
//!
//! let publishers = extractor.all_publication_info().get(PublicationFunction::Publisher);
//! let publisher = &publishers[0];
//! assert_eq!(publisher.name.as_deref(), Some("Cambridge University Press"));
//! assert_eq!(publisher.date.as_deref(), Some("1998"));
//! ```
//!
//! ## Modules
//!
//! - [`record`] - In-memory MARC record structures (`Record`, `Field`, `Subfield`)
//! - [`query`] - Record access traits and `TAG[n]$a` query paths
//! - [`relator`] - Relator codes and term normalization
//! - [`text`] - Parsers for free-text subfield conventions
//! - [`names`] - Names bucketed by relator code, and CSL name roles
//! - [`meetings`] - Meeting names, places and dates
//! - [`publication`] - Ranked publication statements (260/264)
//! - [`container`] - Host item information (773)
//! - [`config`] - Extraction configuration
//! - [`extractor`] - Record wrapper with memoized results
//! - [`error`] - Error types and result type

pub mod config;
pub mod container;
pub mod error;
pub mod extractor;
pub mod meetings;
pub mod names;
pub mod publication;
pub mod query;
pub mod record;
pub mod relator;
pub mod text;

pub use config::ExtractorConfig;
pub use container::ContainerInfo;
pub use error::{MarcError, Result};
pub use extractor::MetadataExtractor;
pub use meetings::Meeting;
pub use names::{CslNameRole, Name, RoleBuckets};
pub use publication::{PublicationFunction, PublicationInfo, PublicationStatement};
pub use query::{FieldAccess, QueryPath, RecordAccess};
pub use record::{Field, FieldBuilder, Record, RecordBuilder, Subfield};
pub use text::{Enumeration, RelatedParts};
