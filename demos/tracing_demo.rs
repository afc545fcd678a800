//! Demonstrates recording validation outcomes with tracing
//!
//! Run with: cargo run --example tracing_demo --features tracing

use accrete::prelude::*;

fn validate_port(raw: &str) -> Validated<Vec<String>, u16> {
    raw.parse::<u16>()
        .map(Validated::valid)
        .unwrap_or_else(|_| Validated::invalid(vec![format!("port {:?} is not a number", raw)]))
        .trace_outcome("port")
}

fn validate_host(raw: &str) -> Validated<Vec<String>, String> {
    let host = if raw.is_empty() {
        Validated::invalid(vec!["host is empty".to_string()])
    } else {
        Validated::valid(raw.to_string())
    };
    host.trace_outcome("host")
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    let config = validate_host("")
        .zip(validate_port("80a"))
        .trace_outcome("config");

    match config {
        Validated::Valid((host, port)) => tracing::info!("listening on {}:{}", host, port),
        Validated::Invalid(errors) => tracing::error!("{} problems in config", errors.len()),
    }
}
