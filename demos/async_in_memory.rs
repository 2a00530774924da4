//! Async in-memory bundling example
//!
//! Builds a ZIP archive entirely in memory using async/await, which is
//! useful for:
//! - Web applications (send the archive as an HTTP response)
//! - Cloud storage uploads
//! - Any scenario where you don't want to write to disk
//!
//! Run with:
//! ```
//! cargo run --example async_in_memory --features async
//! ```

use std::io::Cursor;
use zip_bundle::{async_bundle, Result};

#[tokio::main]
async fn main() -> Result<()> {
    println!("Async in-memory bundling example\n");

    println!("1. Bundling two streams...");
    let entries = vec![
        (
            "readme.txt",
            Cursor::new(b"This archive was built entirely in memory!\n".to_vec()),
        ),
        (
            "data/config.json",
            Cursor::new(br#"{"app": "zip-bundle", "in_memory": true}"#.to_vec()),
        ),
    ];
    let bundled = async_bundle::bundle_entries(entries).await?;
    let zip_bytes = bundled.into_inner();
    println!("   Built {} bytes in memory", zip_bytes.len());

    // Write to a file so the result can be inspected with external tools.
    std::fs::write("async_in_memory.zip", &zip_bytes)?;
    println!("   Saved to async_in_memory.zip");

    println!("\nDone. Verify with: unzip -l async_in_memory.zip");

    Ok(())
}
