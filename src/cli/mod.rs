//! Command-line interface layer.
//!
//! Wires the collaborators together: config, loader, core pipeline, report
//! writing, and the terminal summary. The core itself never touches the
//! filesystem or the terminal.

use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

mod args;
mod exit_status;

pub use args::{Arguments, HideSection};
pub use exit_status::ExitStatus;

use crate::config::{self, Config};
use crate::core::{self, Category, Comparison, Outcome};
use crate::loader;
use crate::reporter;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let config = config::load_config(Path::new("."))?;
    let hide_mask = hide_mask(&args, &config)?;

    let side_a = loader::load_side(&args.file_a, args.verbose)?;
    let side_b = loader::load_side(&args.file_b, args.verbose)?;

    // Two sides named "user.js" would make the report ambiguous; fall back
    // to the full specs.
    let (label_a, label_b) = if side_a.label == side_b.label {
        (args.file_a.clone(), args.file_b.clone())
    } else {
        (side_a.label.clone(), side_b.label.clone())
    };

    let comment_aware_a = !(args.no_comments_a || config.no_comments_a);
    let comment_aware_b = !(args.no_comments_b || config.no_comments_b);
    let prefs_a = core::parse_prefs(&side_a.text, comment_aware_a);
    let prefs_b = core::parse_prefs(&side_b.text, comment_aware_b);

    if args.verbose {
        for (label, side, prefs) in [(&label_a, &side_a, &prefs_a), (&label_b, &side_b, &prefs_b)] {
            eprintln!(
                "{}",
                format!(
                    "{label}: {} file(s), {} unique prefs",
                    side.file_count,
                    prefs.len()
                )
                .dimmed()
            );
        }
    }

    let cmp = core::compare(&prefs_a, &prefs_b);

    if args.json {
        print_json(&cmp, &label_a, &label_b)?;
    } else {
        let report = core::report::render(&cmp, &label_a, &label_b, hide_mask);
        let destination = args.output.as_deref().unwrap_or(&config.output);
        write_report(&report, destination, args.append)?;
        if destination != "-" {
            reporter::print_summary(&cmp, &label_a, &label_b);
            println!("{}", format!("report written to {destination}").dimmed());
        }
    }

    Ok(if cmp.has_differences() {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}

/// Combines `--hide` flags with the config file's `hide` list.
fn hide_mask(args: &Arguments, config: &Config) -> Result<u32> {
    let mut mask = 0;
    for section in &args.hide {
        mask |= section.mask_bit();
    }
    for name in &config.hide {
        let section = HideSection::from_str(name, true)
            .map_err(|_| anyhow!("Unknown report section in config 'hide': \"{name}\""))?;
        mask |= section.mask_bit();
    }
    Ok(mask)
}

fn write_report(report: &str, destination: &str, append: bool) -> Result<()> {
    if destination == "-" {
        print!("{report}");
        return Ok(());
    }

    let mut options = OpenOptions::new();
    if append {
        options.append(true).create(true);
    } else {
        options.write(true).create(true).truncate(true);
    }
    let mut file = options
        .open(destination)
        .with_context(|| format!("Failed to open report file: {destination}"))?;
    file.write_all(report.as_bytes())
        .with_context(|| format!("Failed to write report file: {destination}"))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    file_a: &'a str,
    file_b: &'a str,
    unique_a: usize,
    unique_b: usize,
    unique_total: usize,
    broken_a: usize,
    broken_b: usize,
    counts: serde_json::Map<String, serde_json::Value>,
    prefs: &'a [Outcome],
}

fn print_json(cmp: &Comparison, label_a: &str, label_b: &str) -> Result<()> {
    let mut counts = serde_json::Map::new();
    for category in Category::ALL {
        let key = serde_json::to_value(category)?
            .as_str()
            .unwrap_or_default()
            .to_string();
        counts.insert(key, cmp.count(category).into());
    }

    let report = JsonReport {
        file_a: label_a,
        file_b: label_b,
        unique_a: cmp.unique_a,
        unique_b: cmp.unique_b,
        unique_total: cmp.total_unique(),
        broken_a: cmp.broken_count(core::Side::A),
        broken_b: cmp.broken_count(core::Side::B),
        counts,
        prefs: &cmp.outcomes,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
