//! Decoding lines as they arrive from an async source.
//!
//! Run with: cargo run --example incremental

use futures::channel::mpsc;
use futures::StreamExt;
use std::error::Error;
use std::time::Duration;
use toon_stream::{decode_stream, DecodeOptions};

const LINES: [&str; 7] = [
    "items[2]:",
    "  - name: first",
    "    data:",
    "      key: value1",
    "  - name: second",
    "    data:",
    "      key: value2",
];

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let (tx, rx) = mpsc::unbounded::<String>();

    tokio::spawn(async move {
        for line in LINES {
            tokio::time::sleep(Duration::from_millis(200)).await;
            println!("<- {}", line);
            if tx.unbounded_send(line.to_string()).is_err() {
                break;
            }
        }
    });

    let mut events = decode_stream(rx, DecodeOptions::default());
    while let Some(event) = events.next().await {
        println!("   -> {:?}", event?);
    }

    Ok(())
}
