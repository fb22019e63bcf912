//! Serializing errors and frames for structured logs.
//!
//! Run with: cargo run --example serde_logging --features serde

use error_trace::{wrap_code, Error};
use std::io;

fn charge(amount: u64) -> Result<(), Error> {
    let upstream = io::Error::new(io::ErrorKind::ConnectionRefused, "card gateway unreachable");
    Err(wrap_code(Some(upstream), 402, format!("charging {} cents", amount))
        .expect("present error stays present"))
}

fn main() {
    let err = charge(1299).unwrap_err();

    match serde_json::to_string_pretty(&err) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("failed to serialize error: {}", e),
    }

    if let Some(frame) = err.stack().trace().first() {
        if let Ok(json) = serde_json::to_string(frame) {
            println!("top frame: {}", json);
        }
    }
}
