//! Normalization of raw records into the canonical document.
//!
//! 1. **Filter**: keep records matching an optional key/value pair
//! 2. **Sample**: draw two positive examples with a seeded generator
//! 3. **Project**: render input text from the field spec and output text
//!    from the output key
//! 4. **Assemble**: attach metadata and sequential instance ids

mod error;
mod normalizer;
mod projection;
mod sampling;

pub use error::{NormalizeError, ProjectionError, Result};
pub use normalizer::DatasetNormalizer;
pub use projection::{format_input, format_output};
pub use sampling::{DEFAULT_SEED, EXAMPLE_COUNT, ExampleSampler};
