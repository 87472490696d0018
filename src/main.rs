//! datareport - Summary-statistics PDF reports for tabular data

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use datareport::analyze::summarize;
use datareport::config::Config;
use datareport::parser::load_table;
use datareport::report::generate_report;

/// Generate a summary-statistics PDF report from a CSV file
#[derive(Parser, Debug)]
#[command(name = "datareport")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file to analyze; prompted for interactively when omitted
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(path) => {
            print_status(
                Color::Green,
                &format!("Report successfully generated at: {}", path.display()),
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_status(Color::Red, &format!("{e:#}"));
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<PathBuf> {
    let cli = Cli::parse();

    let input_file = match cli.file {
        Some(path) => path,
        None => prompt_for_path()?,
    };
    let config = Config::new(input_file);

    let table = load_table(&config.input_file)?;
    let summary = summarize(&table);

    let output_path = config.output_path()?;
    let final_path = generate_report(&summary, &output_path)?;

    Ok(final_path)
}

/// Ask for the input path on stdout and read one line from stdin
fn prompt_for_path() -> Result<PathBuf> {
    print!("Enter the path to your CSV file: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read input path")?;
    if line.trim().is_empty() {
        anyhow::bail!("No input path given");
    }

    Ok(clean_path_input(&line))
}

/// Trim whitespace and surrounding quote characters from a pasted path
fn clean_path_input(raw: &str) -> PathBuf {
    let trimmed = raw.trim().trim_matches(|c| c == '"' || c == '\'');
    PathBuf::from(trimmed)
}

fn print_status(color: Color, message: &str) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    let _ = writeln!(stdout, "{message}");
    let _ = stdout.reset();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_path_input() {
        assert_eq!(clean_path_input("data.csv"), PathBuf::from("data.csv"));
        assert_eq!(
            clean_path_input("  \"/tmp/data.csv\"  \n"),
            PathBuf::from("/tmp/data.csv")
        );
        assert_eq!(
            clean_path_input("'quoted path.csv'"),
            PathBuf::from("quoted path.csv")
        );
    }
}
