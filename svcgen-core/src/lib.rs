//! Core types for the svcgen service generator.
//!
//! This crate provides the pieces every other svcgen crate builds on:
//! the resolved [`ServiceDescriptor`], the [`OutputTarget`] a run writes to,
//! the canonical capitalization routine and the shared [`Error`] type.

mod descriptor;
mod error;
mod output;
mod utils;

pub use descriptor::{DEFAULT_PACKAGE, DEFAULT_PROTO_ROOT, DescriptorInput, ServiceDescriptor};
pub use error::{Error, Result};
pub use output::{Output, OutputTarget};
// String utilities
pub use utils::to_title_case;
