//! # zip-bundle: Named Streams In, One ZIP Archive Out
//!
//! `zip-bundle` packs an ordered collection of named byte streams (typically
//! files) into a single ZIP archive held entirely in memory, and returns a
//! cursor positioned at the start of the finished archive. Container
//! encoding is delegated to the `zip` crate (and `async_zip` on Tokio); the
//! crate itself only does entry iteration, name derivation, and validation.
//!
//! ## Features
//!
//! - **In-memory output**: the finished archive is a rewound
//!   `Cursor<Vec<u8>>`, ready to serve over HTTP or hand to any reader
//! - **Three entry points**: file paths, a single named stream, or explicit
//!   `(name, stream)` pairs
//! - **Order preserving**: one archive entry per input, in input order
//! - **Sync and async**: the same operations as blocking calls or as Tokio
//!   tasks (`async` feature), with identical semantics
//!
//! ## Quick Start
//!
//! ### Bundling in-memory pairs
//!
//! ```no_run
//! use std::io::Cursor;
//! use zip_bundle::bundle_entries;
//!
//! let entries = vec![
//!     ("a.txt", Cursor::new(b"hello".to_vec())),
//!     ("b.txt", Cursor::new(b"world".to_vec())),
//! ];
//! let archive = bundle_entries(entries)?;
//! // `archive` reads as a complete ZIP from offset 0.
//! # Ok::<(), zip_bundle::BundleError>(())
//! ```
//!
//! ### Bundling files from disk
//!
//! ```no_run
//! use zip_bundle::bundle_paths;
//!
//! // Entries are named "report.pdf" and "data.csv".
//! let archive = bundle_paths(&["out/report.pdf", "out/data.csv"])?;
//! # Ok::<(), zip_bundle::BundleError>(())
//! ```
//!
//! ### Keeping full paths as entry names
//!
//! ```no_run
//! use zip_bundle::{bundle_paths_with_options, BundleOptions};
//!
//! let options = BundleOptions {
//!     remove_full_paths: false,
//!     ..BundleOptions::default()
//! };
//! // The entry is named "out/report.pdf", separators included.
//! let archive = bundle_paths_with_options(&["out/report.pdf"], &options)?;
//! # Ok::<(), zip_bundle::BundleError>(())
//! ```

pub mod bundle;
pub mod error;

#[cfg(feature = "async")]
pub mod async_bundle;

pub use bundle::{
    bundle_entries, bundle_entries_with_options, bundle_paths, bundle_paths_with_options,
    bundle_reader, bundle_reader_with_options, BundleOptions, CompressionMethod,
};
pub use error::{BundleError, Result};
