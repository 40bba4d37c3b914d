//! Decoding a TOON document into structural events.
//!
//! Run with: cargo run --example events

use std::error::Error;
use toon_stream::{decode_lines, decode_str, DecodeOptions, Event};

fn main() -> Result<(), Box<dyn Error>> {
    let toon = "\
order:
  id: 0042
  total: -0.5
  customer:
    name: Ada
  lines[2]{sku,qty}:
    A-1,2
    B-7,1
  tags[3]: rush,gift,-05";

    // Eager decoding
    let events = decode_str(toon, DecodeOptions::default())?;
    let mut depth = 0usize;
    for event in &events {
        if event.is_end() {
            depth = depth.saturating_sub(1);
        }
        println!("{}{}", "  ".repeat(depth), serde_json::to_string(event)?);
        if event.is_start() {
            depth += 1;
        }
    }

    // Lazy decoding stops at the first error
    println!("\nWith a short array:");
    for item in decode_lines(["tags[3]: a,b"], DecodeOptions::default()) {
        match item {
            Ok(Event::Scalar { value }) => println!("  scalar {}", value),
            Ok(event) => println!("  {:?}", event),
            Err(err) => println!("  error: {}", err),
        }
    }

    Ok(())
}
