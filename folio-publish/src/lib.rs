//! # folio-publish
//!
//! Turns a validated [`folio_core::PortfolioConfig`] into files on disk: the
//! rendered page plus a normalized copy of the config next to it.
//!
//! Call [`publish`] for the whole render-and-write step, or
//! [`write_outputs`] when the page text is already in hand.

pub mod error;
pub mod paths;
pub mod pipeline;
pub mod writer;

pub use error::PublishError;
pub use paths::OutputPaths;
pub use pipeline::{publish, PublishOptions, PublishReport};
pub use writer::{write_outputs, WriteResult};
