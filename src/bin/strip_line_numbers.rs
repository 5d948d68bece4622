//! Strip margin line numbers from a tokenized document
//!
//! Reads a JSON document (`{"blocks": [...]}`), removes detected line
//! numbers and writes the cleaned document back out as JSON.
//!
//! Usage:
//!   cargo run --release --bin strip_line_numbers -- document.json
//!   cargo run --release --bin strip_line_numbers -- document.json --output clean.json
//!   cargo run --release --bin strip_line_numbers -- document.json --detect-only
//!   cargo run --release --bin strip_line_numbers -- document.json --config filters.json --min-ratio 0.7

use margin_oxide::{Document, FilterConfig, FilterPipeline, LineNumberFilter};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

struct CliConfig {
    input: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    min_line_numbers: Option<usize>,
    min_ratio: Option<f64>,
    detect_only: bool,
}

impl CliConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut output = None;
        let mut config_path = None;
        let mut min_line_numbers = None;
        let mut min_ratio = None;
        let mut detect_only = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    i += 1;
                    output = Some(PathBuf::from(value_of(&args, i, "--output")?));
                },
                "--config" => {
                    i += 1;
                    config_path = Some(PathBuf::from(value_of(&args, i, "--config")?));
                },
                "--min-line-numbers" => {
                    i += 1;
                    let value = value_of(&args, i, "--min-line-numbers")?;
                    min_line_numbers = Some(
                        value
                            .parse()
                            .map_err(|e| format!("invalid --min-line-numbers {}: {}", value, e))?,
                    );
                },
                "--min-ratio" => {
                    i += 1;
                    let value = value_of(&args, i, "--min-ratio")?;
                    min_ratio = Some(
                        value
                            .parse()
                            .map_err(|e| format!("invalid --min-ratio {}: {}", value, e))?,
                    );
                },
                "--detect-only" => {
                    detect_only = true;
                },
                other if input.is_none() && !other.starts_with('-') => {
                    input = Some(PathBuf::from(other));
                },
                other => return Err(format!("unexpected argument: {}", other)),
            }
            i += 1;
        }

        Ok(Self {
            input: input.ok_or_else(|| "missing input document".to_string())?,
            output,
            config_path,
            min_line_numbers,
            min_ratio,
            detect_only,
        })
    }

    fn filter_config(&self) -> margin_oxide::Result<FilterConfig> {
        let mut config = match &self.config_path {
            Some(path) => FilterConfig::from_json_file(path)?,
            None => FilterConfig::default(),
        };
        if let Some(min_line_numbers) = self.min_line_numbers {
            config = config.with_min_line_numbers(min_line_numbers);
        }
        if let Some(min_ratio) = self.min_ratio {
            config = config.with_min_ratio(min_ratio);
        }
        config.validate()?;
        Ok(config)
    }
}

fn value_of<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn run(cli: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let config = cli.filter_config()?;
    let mut document = Document::from_json_str(&fs::read_to_string(&cli.input)?)?;
    log::info!(
        "loaded {} blocks, {} tokens from {}",
        document.blocks.len(),
        document.tokenization.len(),
        cli.input.display()
    );

    let json = if cli.detect_only {
        let filter = LineNumberFilter::with_config(config.line_numbers)?;
        serde_json::to_string_pretty(&filter.detect(&document.blocks))?
    } else {
        let outcomes = FilterPipeline::with_config(config)?.process(&mut document)?;
        for (name, outcome) in &outcomes {
            log::info!(
                "{}: removed {} tokens, cleared {} blocks",
                name,
                outcome.removed_tokens,
                outcome.cleared_blocks
            );
        }
        serde_json::to_string_pretty(&document)?
    };

    match &cli.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{}", json),
    }
    log::info!("done in {:.1}ms", start.elapsed().as_secs_f64() * 1000.0);
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = match CliConfig::from_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!(
                "Usage: strip_line_numbers <document.json> [--output <path>] [--config <path>] \
                 [--min-line-numbers N] [--min-ratio R] [--detect-only]"
            );
            std::process::exit(2);
        },
    };

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
