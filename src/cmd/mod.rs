use std::path::PathBuf;

use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod import;

#[derive(Parser)]
#[command(about = "job listing importer and api")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Serve the job listing api
    Listen,
    /// Replace the jobs collection with the rows of a csv file
    Import { path: PathBuf },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Import { path }) => {
            import::apply(&path).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
