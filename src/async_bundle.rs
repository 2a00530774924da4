//! Task-based archive builder for the Tokio runtime
//!
//! Async/await counterpart of [`crate::bundle`] with identical semantics:
//! entries are still written strictly one at a time, in input order, because
//! the archive-writer session is single-writer and append-only. The only
//! difference is that byte copies suspend instead of blocking the calling
//! thread.
//!
//! Container encoding is delegated to `async_zip` through its Tokio
//! integration.
//!
//! ## Example
//!
//! ```no_run
//! use zip_bundle::async_bundle;
//!
//! # async fn demo() -> zip_bundle::Result<()> {
//! let archive = async_bundle::bundle_paths(&["report.pdf", "data.csv"]).await?;
//! # Ok(())
//! # }
//! ```

use crate::bundle::{entry_name, BundleOptions};
use crate::error::{BundleError, Result};
use async_zip::tokio::write::ZipFileWriter;
use async_zip::ZipEntryBuilder;
use futures_util::io::copy;
use std::io::Cursor;
use std::path::Path;
use tokio::io::AsyncRead;
use tokio_util::compat::TokioAsyncReadCompatExt;

/// Bundle the files at `paths` into an in-memory ZIP archive.
///
/// Entry names are the final path component of each input path. Each file is
/// opened when its entry is written and closed as soon as its content has
/// been copied, on success and failure alike.
///
/// An empty `paths` slice produces a valid archive with zero entries.
pub async fn bundle_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Cursor<Vec<u8>>> {
    bundle_paths_with_options(paths, &BundleOptions::default()).await
}

/// Bundle the files at `paths` with explicit [`BundleOptions`].
pub async fn bundle_paths_with_options<P: AsRef<Path>>(
    paths: &[P],
    options: &BundleOptions,
) -> Result<Cursor<Vec<u8>>> {
    let mut writer = ZipFileWriter::with_tokio(Cursor::new(Vec::new()));

    for path in paths {
        let path = path.as_ref();
        let name = entry_name(path, options.remove_full_paths)?;
        // File handle lives only for the duration of this copy step.
        let mut file = tokio::fs::File::open(path).await?;
        write_entry(&mut writer, &name, &mut file, options).await?;
    }

    finish_and_rewind(writer).await
}

/// Bundle a single readable stream into an archive with one entry named
/// `name`.
///
/// Fails with [`BundleError::InvalidArgument`] before any I/O if `name` is
/// empty.
pub async fn bundle_reader<R: AsyncRead + Unpin>(
    reader: R,
    name: &str,
) -> Result<Cursor<Vec<u8>>> {
    bundle_reader_with_options(reader, name, &BundleOptions::default()).await
}

/// Bundle a single readable stream with explicit [`BundleOptions`].
pub async fn bundle_reader_with_options<R: AsyncRead + Unpin>(
    reader: R,
    name: &str,
    options: &BundleOptions,
) -> Result<Cursor<Vec<u8>>> {
    if name.is_empty() {
        return Err(BundleError::InvalidArgument("entry name must not be empty"));
    }
    bundle_entries_with_options([(name, reader)], options).await
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
pub async fn bundle_entries<I, S, R>(entries: I) -> Result<Cursor<Vec<u8>>>
where
    I: IntoIterator<Item = (S, R)>,
    S: AsRef<str>,
    R: AsyncRead + Unpin,
{
    bundle_entries_with_options(entries, &BundleOptions::default()).await
}

/// Bundle an ordered sequence of `(name, stream)` pairs with explicit
/// [`BundleOptions`].
pub async fn bundle_entries_with_options<I, S, R>(
    entries: I,
    options: &BundleOptions,
) -> Result<Cursor<Vec<u8>>>
where
    I: IntoIterator<Item = (S, R)>,
    S: AsRef<str>,
    R: AsyncRead + Unpin,
{
    let mut writer = ZipFileWriter::with_tokio(Cursor::new(Vec::new()));

    for (name, mut reader) in entries {
        write_entry(&mut writer, name.as_ref(), &mut reader, options).await?;
    }

    finish_and_rewind(writer).await
}

/// Write one entry: open its stream writer, copy the source to exhaustion,
/// then close the stream writer so the backend finalizes the entry's size
/// and CRC bookkeeping.
async fn write_entry<R: AsyncRead + Unpin>(
    writer: &mut ZipFileWriter<Cursor<Vec<u8>>>,
    name: &str,
    reader: &mut R,
    options: &BundleOptions,
) -> Result<()> {
    if name.is_empty() {
        return Err(BundleError::InvalidArgument("entry name must not be empty"));
    }
    let builder = ZipEntryBuilder::new(name.into(), options.method.to_async_method());
    let mut entry_writer = writer.write_entry_stream(builder).await?;
    copy(reader.compat(), &mut entry_writer).await?;
    entry_writer.close().await?;
    Ok(())
}

/// Close the writer session (writes the central directory) and hand the
/// buffer back rewound to offset 0.
async fn finish_and_rewind(writer: ZipFileWriter<Cursor<Vec<u8>>>) -> Result<Cursor<Vec<u8>>> {
    let mut cursor = writer.close().await?.into_inner();
    cursor.set_position(0);
    Ok(cursor)
}
