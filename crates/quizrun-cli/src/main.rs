//! quizrun CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

/// Exit code when a session is terminated by the cancellation signal.
const EXIT_INTERRUPTED: i32 = 130;

#[derive(Parser)]
#[command(name = "quizrun", version, about = "Interactive multiple-choice quiz runner")]
struct Cli {
    /// Data directory holding the quiz and results subdirectories
    /// (overrides quizrun.toml and QUIZRUN_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive quiz session
    Run {
        /// Quiz name (catalog file without extension)
        #[arg(short, long, default_value = "quiz")]
        quiz: String,

        /// Result name (result file without extension)
        #[arg(short, long, default_value = "result")]
        output: String,

        /// Resume on the questions not yet answered correctly
        #[arg(short, long)]
        resume: bool,
    },

    /// Validate a quiz catalog and report audit warnings
    Validate {
        /// Quiz name (catalog file without extension)
        #[arg(short, long)]
        quiz: String,
    },

    /// Rewrite plain data files in obfuscated form
    Migrate,

    /// Create a starter config and example quiz
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizrun_core=info".parse().unwrap())
                .add_directive("quizrun_term=info".parse().unwrap())
                .add_directive("quizrun_cli=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            quiz,
            output,
            resume,
        } => commands::run::execute(cli.data_dir, quiz, output, resume),
        Commands::Validate { quiz } => commands::validate::execute(cli.data_dir, quiz).map(|()| 0),
        Commands::Migrate => commands::migrate::execute(cli.data_dir).map(|()| 0),
        Commands::Init => commands::init::execute().map(|()| 0),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
