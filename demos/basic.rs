//! Basic usage example for zip-bundle

use std::io::{Cursor, Read};
use zip_bundle::bundle_entries;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== zip-bundle Basic Example ===\n");

    // Bundle a few in-memory streams
    println!("Bundling three entries...");
    let entries = vec![
        ("hello.txt", Cursor::new(b"Hello, zip-bundle!".to_vec())),
        (
            "folder/nested.txt",
            Cursor::new(b"This is a nested file.".to_vec()),
        ),
        ("data.txt", Cursor::new(b"Line 1\nLine 2\nLine 3\n".to_vec())),
    ];
    let bundled = bundle_entries(entries)?;
    println!("✓ Built a {} byte archive in memory\n", bundled.get_ref().len());

    // Read it back with a standard ZIP reader
    println!("Entries in archive:");
    let mut archive = zip::ZipArchive::new(bundled)?;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        println!("  - {} ({} bytes)", entry.name(), entry.size());
        if entry.name() == "hello.txt" {
            let mut content = String::new();
            entry.read_to_string(&mut content)?;
            println!("    Content: {}", content);
        }
    }
    println!();

    println!("✓ All done!");

    Ok(())
}
