//! Tests for the blocking archive builder

use std::io::{Cursor, Read, Write};
use zip_bundle::{
    bundle_entries, bundle_entries_with_options, bundle_paths, bundle_paths_with_options,
    bundle_reader, BundleError, BundleOptions, CompressionMethod, Result,
};

fn read_entry(archive: &mut zip::ZipArchive<Cursor<Vec<u8>>>, index: usize) -> (String, Vec<u8>) {
    let mut entry = archive.by_index(index).unwrap();
    let name = entry.name().to_string();
    let mut content = Vec::new();
    entry.read_to_end(&mut content).unwrap();
    (name, content)
}

#[test]
fn two_pairs_round_trip() -> Result<()> {
    let entries = vec![
        ("a.txt", Cursor::new(b"hello".to_vec())),
        ("b.txt", Cursor::new(b"world".to_vec())),
    ];
    let bundled = bundle_entries(entries)?;

    let mut archive = zip::ZipArchive::new(bundled).unwrap();
    assert_eq!(archive.len(), 2);

    let (name, content) = read_entry(&mut archive, 0);
    assert_eq!(name, "a.txt");
    assert_eq!(content, b"hello");

    let (name, content) = read_entry(&mut archive, 1);
    assert_eq!(name, "b.txt");
    assert_eq!(content, b"world");

    Ok(())
}

#[test]
fn cursor_position_is_zero_after_build() -> Result<()> {
    let bundled = bundle_entries(vec![("pos.txt", Cursor::new(b"data".to_vec()))])?;
    assert_eq!(bundled.position(), 0);

    // Also with several entries.
    let entries = (0..10).map(|i| (format!("file{}.txt", i), Cursor::new(vec![b'x'; 100])));
    let bundled = bundle_entries(entries)?;
    assert_eq!(bundled.position(), 0);

    Ok(())
}

#[test]
fn empty_input_yields_valid_empty_archive() -> Result<()> {
    let entries: Vec<(&str, Cursor<Vec<u8>>)> = Vec::new();
    let bundled = bundle_entries(entries)?;

    // A standard reader accepts the archive and reports zero entries.
    let archive = zip::ZipArchive::new(bundled).unwrap();
    assert_eq!(archive.len(), 0);

    Ok(())
}

#[test]
fn entry_order_matches_input_order() -> Result<()> {
    let entries: Vec<(String, Cursor<Vec<u8>>)> = (0..5)
        .map(|i| (format!("entry{}.bin", i), Cursor::new(vec![i as u8; 16])))
        .collect();
    let bundled = bundle_entries(entries)?;

    let mut archive = zip::ZipArchive::new(bundled).unwrap();
    assert_eq!(archive.len(), 5);
    for i in 0..5 {
        let (name, content) = read_entry(&mut archive, i);
        assert_eq!(name, format!("entry{}.bin", i));
        assert_eq!(content, vec![i as u8; 16]);
    }

    Ok(())
}

#[test]
fn empty_entry_name_is_rejected() {
    let entries = vec![("", Cursor::new(b"data".to_vec()))];
    let err = bundle_entries(entries).unwrap_err();
    assert!(matches!(err, BundleError::InvalidArgument(_)));
}

#[test]
fn bundle_reader_basic() -> Result<()> {
    let bundled = bundle_reader(Cursor::new(b"single stream".to_vec()), "only.txt")?;

    let mut archive = zip::ZipArchive::new(bundled).unwrap();
    assert_eq!(archive.len(), 1);
    let (name, content) = read_entry(&mut archive, 0);
    assert_eq!(name, "only.txt");
    assert_eq!(content, b"single stream");

    Ok(())
}

#[test]
fn bundle_reader_rejects_empty_name() {
    let err = bundle_reader(Cursor::new(b"data".to_vec()), "").unwrap_err();
    assert!(matches!(err, BundleError::InvalidArgument(_)));
}

#[test]
fn bundle_paths_strips_to_file_name() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();
    let path = nested.join("c.txt");
    std::fs::write(&path, b"stripped").unwrap();

    let bundled = bundle_paths(&[&path])?;

    let mut archive = zip::ZipArchive::new(bundled).unwrap();
    assert_eq!(archive.len(), 1);
    let (name, content) = read_entry(&mut archive, 0);
    assert_eq!(name, "c.txt");
    assert_eq!(content, b"stripped");

    Ok(())
}

#[test]
fn bundle_paths_can_keep_full_paths() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("full.txt");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, b"full path").unwrap();

    let options = BundleOptions {
        remove_full_paths: false,
        ..BundleOptions::default()
    };
    let bundled = bundle_paths_with_options(&[&path], &options)?;

    let mut archive = zip::ZipArchive::new(bundled).unwrap();
    let (name, content) = read_entry(&mut archive, 0);
    assert_eq!(name, path.to_string_lossy());
    assert_eq!(content, b"full path");

    Ok(())
}

#[test]
fn bundle_paths_preserves_input_order() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = Vec::new();
    // Names chosen so that input order differs from lexicographic order.
    for name in ["zeta.txt", "alpha.txt", "mid.txt"] {
        let path = dir.path().join(name);
        std::fs::write(&path, name.as_bytes()).unwrap();
        paths.push(path);
    }

    let bundled = bundle_paths(&paths)?;

    let mut archive = zip::ZipArchive::new(bundled).unwrap();
    assert_eq!(archive.len(), 3);
    for (i, expected) in ["zeta.txt", "alpha.txt", "mid.txt"].iter().enumerate() {
        let (name, _) = read_entry(&mut archive, i);
        assert_eq!(&name, expected);
    }

    Ok(())
}

#[test]
fn missing_input_file_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does_not_exist.txt");
    let err = bundle_paths(&[&missing]).unwrap_err();
    assert!(matches!(err, BundleError::Io(_)));
}

#[test]
fn stored_method_round_trip() -> Result<()> {
    let options = BundleOptions {
        method: CompressionMethod::Stored,
        ..BundleOptions::default()
    };
    let entries = vec![("raw.bin", Cursor::new(vec![0xAAu8; 4096]))];
    let bundled = bundle_entries_with_options(entries, &options)?;

    let mut archive = zip::ZipArchive::new(bundled).unwrap();
    let entry = archive.by_index(0).unwrap();
    assert_eq!(entry.compression(), zip::CompressionMethod::Stored);
    drop(entry);

    let (_, content) = read_entry(&mut archive, 0);
    assert_eq!(content, vec![0xAAu8; 4096]);

    Ok(())
}

#[test]
fn empty_content_entry() -> Result<()> {
    let bundled = bundle_entries(vec![("empty.txt", Cursor::new(Vec::new()))])?;

    let mut archive = zip::ZipArchive::new(bundled).unwrap();
    let (name, content) = read_entry(&mut archive, 0);
    assert_eq!(name, "empty.txt");
    assert!(content.is_empty());

    Ok(())
}

#[test]
fn binary_content_is_byte_exact() -> Result<()> {
    // Non-UTF-8, non-compressible-looking bytes.
    let mut data = Vec::with_capacity(2048);
    let mut state = 0x2545F491u32;
    for _ in 0..2048 {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        data.push((state >> 16) as u8);
    }

    let bundled = bundle_entries(vec![("blob.bin", Cursor::new(data.clone()))])?;

    let mut archive = zip::ZipArchive::new(bundled).unwrap();
    let (_, content) = read_entry(&mut archive, 0);
    assert_eq!(content, data);

    Ok(())
}

#[test]
fn bundle_from_file_handle() -> Result<()> {
    // The pair-based entry point accepts any reader, including an open file.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("source.log");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"log line 1\nlog line 2\n").unwrap();
    drop(file);

    let file = std::fs::File::open(&path).unwrap();
    let bundled = bundle_entries(vec![("source.log", file)])?;

    let mut archive = zip::ZipArchive::new(bundled).unwrap();
    let (name, content) = read_entry(&mut archive, 0);
    assert_eq!(name, "source.log");
    assert_eq!(content, b"log line 1\nlog line 2\n");

    Ok(())
}
