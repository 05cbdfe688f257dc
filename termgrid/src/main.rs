//! # termgrid
//!
//! A CLI that renders JSON data as aligned text tables.
//!
//! ## Overview
//!
//! termgrid is built on top of termgridlib and maps command-line flags onto
//! the engine's settings. Input is JSON, either an explicit table or a list
//! of records whose schema is inferred:
//!
//! ```bash
//! # Render a file of records
//! termgrid people.json
//!
//! # Read from stdin
//! cat people.json | termgrid
//!
//! # Explicit header and body
//! echo '{"header":["a","b"],"body":[["1","2"]]}' | termgrid --border ascii
//!
//! # Fit pages to the terminal
//! termgrid people.json --max-width auto
//!
//! # Transposed, right-aligned, spaced out
//! termgrid people.json -o horizontal -a right -m 1
//! ```

use std::io::Read;
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde_json::Value;
use termgridlib::{Border, RawMaxWidth, RawSettings, Serializer, Settings, Table};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("termgrid")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render JSON data as an aligned text table")
        .arg(
            Arg::new("input")
                .help("JSON file to render, or '-' for stdin")
                .default_value("-"),
        )
        .arg(
            Arg::new("align")
                .short('a')
                .long("align")
                .value_parser(["left", "center", "right"])
                .help("Horizontal cell alignment"),
        )
        .arg(
            Arg::new("valign")
                .long("valign")
                .value_parser(["top", "center", "bottom"])
                .help("Vertical cell alignment"),
        )
        .arg(
            Arg::new("orientation")
                .short('o')
                .long("orientation")
                .value_parser(["vertical", "horizontal"])
                .help("Fields as columns (vertical) or as rows (horizontal)"),
        )
        .arg(
            Arg::new("margin")
                .short('m')
                .long("margin")
                .value_parser(clap::value_parser!(i64))
                .help("Extra padding around every cell"),
        )
        .arg(
            Arg::new("max-width")
                .short('w')
                .long("max-width")
                .help("Page width budget: a number >= 10, 'auto' or 'Infinity'"),
        )
        .arg(
            Arg::new("border")
                .short('b')
                .long("border")
                .value_parser(["none", "ascii", "light"])
                .default_value("none")
                .help("Border preset"),
        )
        .arg(
            Arg::new("depth")
                .short('d')
                .long("depth")
                .value_parser(clap::value_parser!(i64))
                .help("Recursion limit for nested records"),
        )
        .arg(
            Arg::new("pages")
                .long("pages")
                .action(ArgAction::SetTrue)
                .help("Separate width-budgeted pages with a blank line"),
        )
}

/// Map flags onto the library's loose settings surface and resolve them
fn build_settings(matches: &ArgMatches) -> anyhow::Result<Settings> {
    let raw = RawSettings {
        horizontal_alignment: matches.get_one::<String>("align").cloned(),
        vertical_alignment: matches.get_one::<String>("valign").cloned(),
        orientation: matches.get_one::<String>("orientation").cloned(),
        margin: matches.get_one::<i64>("margin").copied(),
        wrap: None,
        max_width: matches.get_one::<String>("max-width").map(|value| {
            match value.parse::<i64>() {
                Ok(columns) => RawMaxWidth::Columns(columns),
                Err(_) => RawMaxWidth::Keyword(value.clone()),
            }
        }),
        max_deep: matches.get_one::<i64>("depth").copied(),
    };
    Ok(raw.resolve()?)
}

fn build_border(matches: &ArgMatches) -> Border {
    match matches
        .get_one::<String>("border")
        .map(|s| s.as_str())
        .unwrap_or("none")
    {
        "ascii" => Border::ascii(),
        "light" => Border::light(),
        _ => Border::blank(),
    }
}

/// Read the input payload from a file or stdin
fn read_input(path: &str) -> anyhow::Result<Value> {
    let text = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file '{}'", path))?
    };
    serde_json::from_str(&text).context("input is not valid JSON")
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Turn the payload into a header/body pair.
///
/// An object with `header` and `body` is rendered as-is; an array of
/// records goes through schema inference.
fn extract_table(
    payload: &Value,
    settings: &Settings,
    border: &Border,
) -> anyhow::Result<(Vec<String>, Vec<Vec<String>>)> {
    match payload {
        Value::Object(fields) if fields.contains_key("header") => {
            let header = fields
                .get("header")
                .and_then(Value::as_array)
                .ok_or_else(|| anyhow!("'header' must be a JSON array"))?
                .iter()
                .map(value_to_cell)
                .collect();
            let body = fields
                .get("body")
                .and_then(Value::as_array)
                .map(|rows| {
                    rows.iter()
                        .map(|row| {
                            row.as_array()
                                .map(|cells| cells.iter().map(value_to_cell).collect())
                                .ok_or_else(|| anyhow!("every 'body' row must be a JSON array"))
                        })
                        .collect::<anyhow::Result<Vec<Vec<String>>>>()
                })
                .transpose()?
                .unwrap_or_default();
            Ok((header, body))
        }
        Value::Array(records) => {
            Ok(Serializer::with_border(*settings, border.clone()).to_table(records))
        }
        _ => Err(anyhow!(
            "input must be a JSON array of records or an object with 'header' and 'body'"
        )),
    }
}

fn run() -> anyhow::Result<()> {
    let matches = build_command().get_matches();

    let settings = build_settings(&matches)?;
    let border = build_border(&matches);
    let payload = read_input(
        matches
            .get_one::<String>("input")
            .map(|s| s.as_str())
            .unwrap_or("-"),
    )?;

    let (header, body) = extract_table(&payload, &settings, &border)?;
    let table = Table::with_border(&header, &body, &settings, &border)?;

    if matches.get_flag("pages") {
        for chunk in table.chunks() {
            println!("{}\n", chunk);
        }
    } else {
        println!("{}", table.get());
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}
