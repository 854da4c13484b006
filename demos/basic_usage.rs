//! Basic logger usage example
//!
//! Demonstrates the root logger, level filtering and nested scopes.
//!
//! Run with: cargo run --example basic_usage

use rust_scoped_logger::prelude::*;
use rust_scoped_logger::info;

fn main() -> Result<()> {
    println!("=== Rust Scoped Logger - Basic Usage Example ===\n");

    let root = Logger::instance();
    root.configure(LoggerConfigPatch::new().prefix("[APP]"));

    println!("1. Logging at different levels:");
    root.error("This is an error message");
    root.warn("This is a warning message");
    root.info("This is an info message");
    root.debug("This is a debug message");

    println!("\n2. Scoped loggers:");
    let db = root.scope("db");
    let pool = db.scope("pool");
    db.info("connected");
    pool.debug_with("checked out connection", &[&3, &"primary"]);
    info!(pool, "{} connections idle", 5);

    println!("\n3. Raising the threshold on the root only:");
    root.configure(LoggerConfigPatch::new().level(LogLevel::Warn));
    root.info("Info message (hidden)");
    root.warn("Warning message (visible)");
    db.info("Scopes taken earlier keep their level (visible)");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
