//! Blocking archive builder
//!
//! Packs an ordered collection of named byte streams into a single ZIP
//! archive held in memory and returns a cursor rewound to the start of the
//! finished archive. Container encoding (entry headers, compression, CRC,
//! central directory) is delegated to the `zip` crate; this module only does
//! entry iteration, name derivation, and input validation.
//!
//! Entries are written strictly one at a time, in input order. The first
//! error aborts the whole build and no archive is returned.

use crate::error::{BundleError, Result};
use std::fs::File;
use std::io::{self, Cursor, Read, Seek, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Compression method applied to every entry in a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    /// No compression (stored)
    Stored,
    /// DEFLATE compression (most common)
    Deflate,
}

impl CompressionMethod {
    pub(crate) fn to_zip_method(self) -> zip::CompressionMethod {
        match self {
            CompressionMethod::Stored => zip::CompressionMethod::Stored,
            CompressionMethod::Deflate => zip::CompressionMethod::Deflated,
        }
    }

    #[cfg(feature = "async")]
    pub(crate) fn to_async_method(self) -> async_zip::Compression {
        match self {
            CompressionMethod::Stored => async_zip::Compression::Stored,
            CompressionMethod::Deflate => async_zip::Compression::Deflate,
        }
    }
}

/// Options controlling how a bundle is built
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// Reduce entry names to the final path component. Only consulted by the
    /// path-based entry points; when false the full path string becomes the
    /// entry name, separator characters included.
    pub remove_full_paths: bool,
    /// Compression method applied to every entry
    pub method: CompressionMethod,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            remove_full_paths: true,
            method: CompressionMethod::Deflate,
        }
    }
}

/// Derive the archive entry name for an input path.
///
/// Non-UTF-8 path components are converted lossily.
pub(crate) fn entry_name(path: &Path, remove_full_paths: bool) -> Result<String> {
    let name = if remove_full_paths {
        path.file_name()
            .ok_or(BundleError::InvalidArgument(
                "path has no file name component",
            ))?
            .to_string_lossy()
            .into_owned()
    } else {
        path.to_string_lossy().into_owned()
    };
    if name.is_empty() {
        return Err(BundleError::InvalidArgument("entry name must not be empty"));
    }
    Ok(name)
}

/// Bundle the files at `paths` into an in-memory ZIP archive.
///
/// Entry names are the final path component of each input path. Each file is
/// opened when its entry is written and closed as soon as its content has
/// been copied, on success and failure alike.
///
/// An empty `paths` slice produces a valid archive with zero entries.
pub fn bundle_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Cursor<Vec<u8>>> {
    bundle_paths_with_options(paths, &BundleOptions::default())
}

/// Bundle the files at `paths` with explicit [`BundleOptions`].
///
/// With `remove_full_paths` disabled, the full path string is passed through
/// to the archive writer unchanged.
pub fn bundle_paths_with_options<P: AsRef<Path>>(
    paths: &[P],
    options: &BundleOptions,
) -> Result<Cursor<Vec<u8>>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let file_options = file_options_for(options);

    for path in paths {
        let path = path.as_ref();
        let name = entry_name(path, options.remove_full_paths)?;
        // File handle lives only for the duration of this copy step.
        let mut file = File::open(path)?;
        write_entry(&mut zip, &name, &mut file, file_options)?;
    }

    finish_and_rewind(zip)
}

/// Bundle a single readable stream into an archive with one entry named
/// `name`.
///
/// Fails with [`BundleError::InvalidArgument`] before any I/O if `name` is
/// empty.
pub fn bundle_reader<R: Read>(reader: R, name: &str) -> Result<Cursor<Vec<u8>>> {
    bundle_reader_with_options(reader, name, &BundleOptions::default())
}

/// Bundle a single readable stream with explicit [`BundleOptions`].
pub fn bundle_reader_with_options<R: Read>(
    reader: R,
    name: &str,
    options: &BundleOptions,
) -> Result<Cursor<Vec<u8>>> {
    if name.is_empty() {
        return Err(BundleError::InvalidArgument("entry name must not be empty"));
    }
    bundle_entries_with_options([(name, reader)], options)
}

/// Bundle an ordered sequence of `(name, stream)` pairs into an in-memory
/// ZIP archive.
///
/// One archive entry is written per pair, in input order, with the exact
/// byte content of the source stream read to exhaustion at call time.
/// Duplicate names are passed through to the archive writer unchecked.
///
/// The returned cursor is positioned at offset 0 and owns the complete,
/// finalized archive.
pub fn bundle_entries<I, S, R>(entries: I) -> Result<Cursor<Vec<u8>>>
where
    I: IntoIterator<Item = (S, R)>,
    S: AsRef<str>,
    R: Read,
{
    bundle_entries_with_options(entries, &BundleOptions::default())
}

/// Bundle an ordered sequence of `(name, stream)` pairs with explicit
/// [`BundleOptions`].
pub fn bundle_entries_with_options<I, S, R>(
    entries: I,
    options: &BundleOptions,
) -> Result<Cursor<Vec<u8>>>
where
    I: IntoIterator<Item = (S, R)>,
    S: AsRef<str>,
    R: Read,
{
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let file_options = file_options_for(options);

    for (name, mut reader) in entries {
        write_entry(&mut zip, name.as_ref(), &mut reader, file_options)?;
    }

    finish_and_rewind(zip)
}

fn file_options_for(options: &BundleOptions) -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(options.method.to_zip_method())
}

/// Write one entry: create it, copy the source to exhaustion, let the
/// writer finalize the entry's size and CRC bookkeeping.
fn write_entry<W, R>(
    zip: &mut ZipWriter<W>,
    name: &str,
    reader: &mut R,
    options: SimpleFileOptions,
) -> Result<()>
where
    W: Write + Seek,
    R: Read,
{
    if name.is_empty() {
        return Err(BundleError::InvalidArgument("entry name must not be empty"));
    }
    zip.start_file(name, options)?;
    io::copy(reader, zip)?;
    Ok(())
}

/// Close the writer session (writes the central directory) and hand the
/// buffer back rewound to offset 0.
fn finish_and_rewind(zip: ZipWriter<Cursor<Vec<u8>>>) -> Result<Cursor<Vec<u8>>> {
    let mut cursor = zip.finish()?;
    cursor.set_position(0);
    Ok(cursor)
}
