use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use k8up_docs::cli::check_orphans::CheckOrphansArgs;
use k8up_docs::cli::customize::CustomizeArgs;
use k8up_docs::Result;
use std::io;

#[derive(Parser)]
#[command(name = "k8up-docs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tooling for the K8up documentation", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every page is referenced from k8up.adoc and nav.adoc
    #[command(name = "check-orphans")]
    CheckOrphans(CheckOrphansArgs),

    /// Print a restore manifest with its snapshot ID replaced
    Customize(CustomizeArgs),

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red());
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::CheckOrphans(args) => k8up_docs::cli::check_orphans::run(&args),

        Commands::Customize(args) => {
            k8up_docs::cli::customize::run(&args)?;
            Ok(0)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "k8up-docs", &mut io::stdout());
            Ok(0)
        }
    }
}
