//! File-Bundler: concatenate a directory's source files into one bundle
//!
//! The library exposes the bundling core (`bundle::bundle`) together with the
//! configuration-building step and the response-file model the CLI uses.

pub mod bundle;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod rsp;
pub mod scan;
pub mod utils;

pub use bundle::{bundle, try_bundle, BundleSummary};
pub use config::BundleOptions;
pub use domain::{BundleConfig, BundleResult, BundleStatus, LanguageFilter, SortKey, SourceFile};
pub use error::{BundleError, ErrorKind};
