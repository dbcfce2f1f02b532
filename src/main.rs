use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pedigree::prelude::*;

#[derive(Parser)]
#[command(name = "pedigree")]
#[command(version)]
#[command(about = "Genotype probabilities for a family, and bracket-notation word expansion")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute AA/Aa/aa probabilities for every member of a family file
    Solve {
        /// Family file, one `Name[0|1]` or `Name[0|1]=Parent+Parent` per line
        #[arg(short, long, default_value = "input.txt")]
        input: PathBuf,
    },

    /// Expand bracket-notation words such as "1[h2[ol2[a]]]"
    Expand {
        /// Words to expand, one result is printed per line
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { input } => {
            let records = RecordReaderBuilder::new()
                .from_path(&input)
                .with_context(|| format!("Failed to open {}", input.display()))?;
            let mut family = FamilyGraph::from_records(records)
                .with_context(|| format!("Failed to read family from {}", input.display()))?;
            family
                .solve()
                .context("Failed to compute genotype probabilities")?;
            println!("{}", family);
        }
        Commands::Expand { words } => {
            for word in &words {
                let expanded =
                    translate(word).with_context(|| format!("Failed to expand '{}'", word))?;
                println!("{}", expanded);
            }
        }
    }

    Ok(())
}
