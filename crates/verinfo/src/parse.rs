use crate::prelude::{eprintln, print, println, *};
use serde::Serialize;
use std::io::BufRead;
use verinfo_core::tag::strip_tag_prefix;
use verinfo_core::version::{parse, VersionRecord};

#[derive(Debug, clap::Args, Clone)]
pub struct ParseOptions {
    /// Version strings to parse. Read one per line from stdin when omitted
    #[arg(value_name = "VERSION")]
    pub versions: Vec<String>,

    /// Strip a leading 'v' (as in "v1.2.3") before parsing
    #[arg(long, env = "VERINFO_STRIP_PREFIX", default_value = "false")]
    pub strip_prefix: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// A version string together with what it parsed into
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ParsedVersion {
    pub input: String,
    #[serde(flatten)]
    pub version: VersionRecord,
}

pub fn run(options: ParseOptions, global: crate::Global) -> Result<()> {
    let inputs = if options.versions.is_empty() {
        if global.verbose {
            eprintln!("Reading versions from stdin...");
        }
        read_versions(std::io::stdin().lock())?
    } else {
        options.versions.clone()
    };

    if inputs.is_empty() {
        return Err(Error::NoInput.into());
    }

    let parsed = parse_versions(&inputs, options.strip_prefix);
    log::debug!("parsed {} version(s)", parsed.len());

    if options.json {
        println!("{}", format_json(&parsed)?);
    } else {
        print!("{}", format_table(&parsed));
    }

    Ok(())
}

/// Read one version per line, skipping blank lines
pub fn read_versions(reader: impl BufRead) -> Result<Vec<String>> {
    let mut versions = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read version from input")?;
        let line = line.trim();
        if !line.is_empty() {
            versions.push(line.to_string());
        }
    }
    Ok(versions)
}

pub fn parse_versions(inputs: &[String], strip_prefix: bool) -> Vec<ParsedVersion> {
    inputs
        .iter()
        .map(|input| {
            let source = if strip_prefix {
                strip_tag_prefix(input)
            } else {
                input.as_str()
            };
            ParsedVersion {
                input: input.clone(),
                version: parse(source),
            }
        })
        .collect()
}

fn format_json(parsed: &[ParsedVersion]) -> Result<String> {
    serde_json::to_string_pretty(parsed).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_table(parsed: &[ParsedVersion]) -> String {
    let mut table = new_table();
    table.add_row(prettytable::row![
        "Input",
        "Major",
        "Minor",
        "Patch",
        "Build",
        "Qualifier"
    ]);

    for entry in parsed {
        let version = &entry.version;
        table.add_row(prettytable::row![
            &entry.input,
            version.major(),
            version.minor(),
            version.patch(),
            version.build_number(),
            version.qualifier().unwrap_or("-")
        ]);
    }

    table.to_string()
}
