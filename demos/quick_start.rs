//! Quick start: build, wrap, inspect and render errors.
//!
//! Run with: cargo run --example quick_start

use error_trace::prelude::*;
use error_trace::{chain, render};

fn read_config(path: &str) -> TracedResult<String> {
    std::fs::read_to_string(path).wrap_code_with(500, || format!("reading {}", path))
}

fn find_user(id: u64) -> TracedResult<String> {
    if id == 0 {
        return Err(with_code!(404, "user {} not found", id));
    }
    Ok(format!("user_{}", id))
}

fn lookup(id: u64) -> TracedResult<String> {
    find_user(id).wrap_with(|| format!("looking up account {}", id))
}

fn call_backend() -> TracedResult<()> {
    Err(with_code!(14, "backend restarting")).wrap("calling billing")
}

fn main() {
    println!("=== Wrapping keeps the code ===");
    let err = lookup(0).unwrap_err();
    println!("text : {}", err);
    println!("code : {}", code(Some(&err)));
    println!("root : {}", cause(&err));

    println!("\n=== Replacing the code ===");
    let err = read_config("missing.toml").unwrap_err();
    println!("text : {}", err);
    println!("code : {}", code(Some(&err)));

    println!("\n=== Matching and walking the chain ===");
    let err = call_backend().unwrap_err();
    println!("code : {}", code(Some(&err)));
    println!("is restarting: {}", is(&err, &with_code!(14, "backend restarting")));
    for (depth, node) in chain(&err).enumerate() {
        println!("  [{}] {}", depth, node);
    }

    #[cfg(feature = "grpc")]
    {
        use error_trace::rpc::Status;

        println!("\n=== gRPC status codes ===");
        let err = wrap!(Some(Status::unavailable("shard moving")), "reading ledger")
            .expect("present error stays present");
        println!("code : {}", code(Some(&err)));
        println!("is unavailable: {}", is(&err, &Status::unavailable("shard moving")));
    }

    println!("\n=== Frames ===");
    let err = new!("disk full");
    if let Some(frame) = err.stack().trace().first() {
        for spec in ["%s", "%d", "%n", "%v", "%+s"] {
            if let Ok(text) = render(frame, spec) {
                println!("{:>4} -> {}", spec, text);
            }
        }
    }

    println!("\n=== Detailed trace ===");
    let err = wrap!(Some(err), "flushing journal").expect("present error stays present");
    println!("{:#}", err);
}
