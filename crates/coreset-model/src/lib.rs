pub mod document;
pub mod error;
pub mod field_spec;
pub mod raw;

pub use document::{
    CONTRIBUTOR, CanonicalDocument, CanonicalExample, CanonicalInstance, DEFAULT_DOMAIN,
    DEFAULT_LANGUAGE, DatasetIdentity, Metadata,
};
pub use error::{ErrorKind, ModelError, Result};
pub use field_spec::{FieldSelector, FieldSpec, RecordFilter};
pub use raw::{RawRecord, RawValue};
