mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mapa",
    version,
    about = "Convert operating-room schedule PDFs into one activity spreadsheet"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log per-page parsing details to stderr
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert schedule PDFs (files or directories) into one spreadsheet
    Convert {
        /// PDF files or directories containing PDFs
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (default: surgical_map_YYYY_MM_DD.xlsx next to the inputs)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format: xlsx or csv (default: from the output extension, else xlsx)
        #[arg(short, long)]
        format: Option<String>,

        /// Built-in vocabulary preset
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,

        /// Custom JSON vocabulary file (overrides --preset)
        #[arg(long, value_name = "FILE")]
        vocab: Option<PathBuf>,
    },
    /// Parse one schedule PDF and print its records
    Parse {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Built-in vocabulary preset
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,

        /// Custom JSON vocabulary file (overrides --preset)
        #[arg(long, value_name = "FILE")]
        vocab: Option<PathBuf>,
    },
    /// Read records back from an exported xlsx sheet
    Inspect {
        /// Path to the xlsx file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// List, show and validate vocabularies
    Vocab {
        #[command(subcommand)]
        action: VocabAction,
    },
}

#[derive(Subcommand)]
enum VocabAction {
    /// List built-in presets
    List,
    /// Print a preset as JSON
    Show {
        /// Preset name (e.g., "mater-dei")
        name: String,
    },
    /// Validate a custom vocabulary file
    Validate {
        /// Path to JSON vocabulary file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("mapa_core={default_level},mapa={default_level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let result = match cli.command {
        Commands::Convert {
            inputs,
            output,
            format,
            preset,
            vocab,
        } => commands::convert::run(
            &inputs,
            output,
            format.as_deref(),
            preset.as_deref(),
            vocab,
        ),
        Commands::Parse {
            input_file,
            output,
            preset,
            vocab,
        } => commands::parse::run(&input_file, &output, preset.as_deref(), vocab),
        Commands::Inspect { input_file, output } => commands::inspect::run(&input_file, &output),
        Commands::Vocab { action } => match action {
            VocabAction::List => commands::vocab::list(),
            VocabAction::Show { name } => commands::vocab::show(&name),
            VocabAction::Validate { file } => commands::vocab::validate(&file),
        },
    };

    match result {
        Ok(commands::Outcome::Done) => ExitCode::SUCCESS,
        Ok(commands::Outcome::NoRecords) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
