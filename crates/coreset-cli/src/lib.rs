//! Library components of the coreset collector CLI.

#![allow(missing_docs)]

pub mod job;
pub mod logging;
pub mod pipeline;
pub mod types;
