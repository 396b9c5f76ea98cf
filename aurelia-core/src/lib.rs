//! Shared primitives and traits for the Aurelia sequence toolkit.
//!
//! `aurelia-core` provides the foundation the domain crates build on:
//!
//! - **Error types** — [`AureliaError`] and [`Result`] for structured error handling
//! - **Traits** — the [`Sequence`] record contract and [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{AureliaError, Result};
pub use traits::*;
