//! designrep CLI: the `designrep` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::VerifyDs {
            name,
            catalog,
            index,
            json,
        } => commands::verify::run_ds(name, catalog, index, json),

        Commands::VerifySds {
            name,
            catalog,
            index,
            json,
        } => commands::verify::run_sds(name, catalog, index, json),

        Commands::VerifyCw {
            name,
            catalog,
            index,
            json,
        } => commands::verify::run_cw(name, catalog, index, json),

        Commands::VerifyCover { name, blocks, json } => {
            commands::verify::run_cover(name, blocks, json)
        }

        Commands::Check {
            family,
            catalog,
            json,
        } => commands::check::run(family, catalog, json),

        Commands::CheckCover { blocks, json } => commands::check::run_cover(blocks, json),
    }
}
