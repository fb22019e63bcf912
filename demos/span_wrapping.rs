//! Wrapping errors with tracing spans and emitting them as events.
//!
//! Run with: cargo run --example span_wrapping --features tracing

use error_trace::tracing_ext::{emit, ResultSpanExt};
use error_trace::{with_code, Error};

fn connect(host: &str) -> Result<(), Error> {
    Err(with_code!(503, "{} refused the connection", host))
}

fn sync_inventory() -> Result<(), Error> {
    let span = tracing::info_span!("sync_inventory");
    let _guard = span.enter();
    connect("db-primary").wrap_current_span()
}

fn main() {
    tracing_subscriber::fmt().init();

    if let Err(err) = sync_inventory() {
        println!("{}", err);
        emit(&err);
    }

    let span = tracing::info_span!("reindex");
    if let Err(err) = Err::<(), _>("index locked").wrap_span(&span) {
        emit(&err);
    }
}
