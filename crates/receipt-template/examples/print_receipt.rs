//! Compose a receipt and print its plain-text preview
//! Run with: cargo run --example print_receipt -- [registry.json] [data.json] [layout]
//!
//! Defaults to the bundled fixtures and the `receipt` layout.
//! Set `RUST_LOG=debug` to see skipped sections and ignored operators.

use anyhow::Context;
use receipt_template::{build_receipt, parse_registry};
use std::fs;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let registry_path = args
        .next()
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/registry.json").into());
    let data_path = args
        .next()
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/sale.json").into());
    let layout = args.next().unwrap_or_else(|| "receipt".into());

    let registry_json = fs::read_to_string(&registry_path)
        .with_context(|| format!("reading layouts from {registry_path}"))?;
    let data_json = fs::read_to_string(&data_path)
        .with_context(|| format!("reading data from {data_path}"))?;

    let registry = parse_registry(&registry_json)?;
    let data: serde_json::Value = serde_json::from_str(&data_json)?;

    let receipt = build_receipt(&layout, &registry, &data)?;

    print!("{}", receipt.to_plain_text());
    for warning in &receipt.warnings {
        eprintln!("warning: {warning}");
    }

    Ok(())
}
