//! CLI for nearsite, the nearest-site ranking tool.

mod commands;
mod logging;

use clap::Parser;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    println!("Args: {args:?}");

    let (_guard, log_path) = logging::configure_logger("nearsite")?;
    println!("Log file: {log_path:?}");

    ftlog::info!("{args:?}");

    match args.command {
        Commands::Rank {
            catalog,
            queries,
            k,
            precision,
            out,
            map,
            parallel,
        } => commands::rank::rank(catalog, queries, k, precision, out, map, parallel)?,
        Commands::Lookup {
            catalog,
            lat,
            lon,
            id,
            k,
            precision,
        } => commands::lookup::lookup(catalog, lat, lon, &id, k, precision)?,
    }

    Ok(())
}
