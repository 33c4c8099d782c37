//! Barcode decoding utility
//! Decodes barcodes given on the command line (or one per line on stdin)
//! and prints each result as a JSON line

use scale_barcode::{ScanConfig, Scanner};
use std::env;
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut tz_override = None;
    let mut config_path = None;
    let mut barcodes = Vec::new();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage(&args[0]);
                return Ok(());
            }
            "--tz" => {
                let tz = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--tz needs a time zone name"))?;
                tz_override = Some(tz.clone());
            }
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config needs a file path"))?;
                config_path = Some(path.clone());
            }
            _ => barcodes.push(arg.clone()),
        }
    }

    let mut config = match config_path {
        Some(path) => ScanConfig::load(path)?,
        None => ScanConfig::from_env(),
    };
    if let Some(tz) = tz_override {
        config.time_zone = tz;
    }

    let scanner = Scanner::new(&config)?;
    tracing::debug!("Scanning in time zone {}", scanner.time_zone());

    if barcodes.is_empty() {
        // One barcode per line from stdin
        for line in io::stdin().lock().lines() {
            let line = line?;
            let barcode = line.trim();
            if barcode.is_empty() {
                continue;
            }
            println!("{}", scanner.scan(barcode).to_json()?);
        }
    } else {
        for barcode in &barcodes {
            println!("{}", scanner.scan(barcode).to_json()?);
        }
    }

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [--tz ZONE] [--config FILE.json] [BARCODE...]", program);
    eprintln!("\nExamples:");
    eprintln!(
        "  {} 2001234012348                  # Decode one barcode",
        program
    );
    eprintln!(
        "  {} --tz UTC 00012345240301000125777  # Dates in UTC",
        program
    );
    eprintln!(
        "  cat scans.txt | {}                # Decode one barcode per line",
        program
    );
}
