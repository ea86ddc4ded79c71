//! Shared types for the Coursepack workshop packager: the workshop metadata
//! record with its strict and lenient load policies, and the preformatted
//! timestamp value used by the report generators.

pub mod metadata;
pub mod timestamp;

pub use metadata::{MetadataError, WorkshopMetadata, load_lenient, load_strict};
pub use timestamp::Timestamp;
