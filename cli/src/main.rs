//! nitf CLI - NITF news article extraction tool

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use nitf::{parse_file, to_json, to_text, JsonFormat, NitfDocument};

#[derive(Parser)]
#[command(name = "nitf")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract NITF news article content to text and JSON", long_about = None)]
struct Cli {
    /// Input NITF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Separator between article parts in text output
    #[arg(long, default_value = "\n")]
    separator: String,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Human-readable article text
    Text,
    /// Structured document model as JSON
    Json,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> nitf::Result<()> {
    log::debug!("parsing {}", cli.input.display());
    let doc = parse_file(&cli.input)?;

    let rendered = render(&doc, cli)?;
    match &cli.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{}", rendered),
    }
    Ok(())
}

fn render(doc: &NitfDocument, cli: &Cli) -> nitf::Result<String> {
    match cli.format {
        Format::Text => Ok(to_text(doc, &cli.separator)),
        Format::Json => {
            let format = if cli.compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            to_json(doc, format)
        }
    }
}
