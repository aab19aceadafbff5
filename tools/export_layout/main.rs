//! Export the Arabic key table and diacritics to JSON or CSV format
//!
//! Usage:
//!   cargo run -p export_layout -- --format json
//!   cargo run -p export_layout -- --format csv --output layout.csv

use clap::Parser;
use libarabic::ArabicLayout;
use libkeyboard_core::{DiacriticEntry, KeyMapping, Layout};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "export_layout")]
#[command(about = "Export the Arabic keyboard layout to JSON or CSV format")]
struct Args {
    /// Output format: json or csv
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Leave the diacritics out
    #[arg(long)]
    keys_only: bool,
}

#[derive(Serialize)]
struct LayoutExport<'a> {
    name: &'static str,
    lang: &'static str,
    direction: &'static str,
    keys: &'a [KeyMapping],
    diacritics: &'a [DiacriticEntry],
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let layout = ArabicLayout;

    let diacritics: &[DiacriticEntry] = if args.keys_only {
        &[]
    } else {
        layout.diacritics()
    };

    let output = match args.format.as_str() {
        "json" => export_json(&layout, diacritics)?,
        "csv" => export_csv(layout.mappings(), diacritics),
        _ => anyhow::bail!("Unsupported format: {}. Use 'json' or 'csv'", args.format),
    };

    // Write to file or stdout
    if let Some(path) = args.output {
        std::fs::write(path, output)?;
    } else {
        print!("{}", output);
    }

    Ok(())
}

fn export_json(layout: &ArabicLayout, diacritics: &[DiacriticEntry]) -> anyhow::Result<String> {
    let export = LayoutExport {
        name: layout.name(),
        lang: layout.lang_tag(),
        direction: layout.direction().as_str(),
        keys: layout.mappings(),
        diacritics,
    };
    let mut json = serde_json::to_string_pretty(&export)?;
    json.push('\n');
    Ok(json)
}

fn export_csv(keys: &[KeyMapping], diacritics: &[DiacriticEntry]) -> String {
    let mut output = String::from("kind,key,glyph,name\n");
    for mapping in keys {
        output.push_str(&format!(
            "key,{},{},\n",
            csv_field(&mapping.latin_key.to_string()),
            csv_field(mapping.glyph)
        ));
    }
    for mark in diacritics {
        output.push_str(&format!(
            "mark,{},{},{}\n",
            csv_field(&mark.shortcut.to_string()),
            csv_field(&mark.glyph.to_string()),
            csv_field(mark.name)
        ));
    }
    output
}

fn csv_field(value: &str) -> String {
    // Quote everything; keys include `,` `'` and space
    format!("\"{}\"", value.replace('"', "\"\""))
}
