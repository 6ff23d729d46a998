//! The commands under the `nearsite` CLI.

pub mod lookup;
pub mod rank;

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank every query site against the catalog and export a wide table.
    Rank {
        /// The path to the catalog `.csv` file.
        #[arg(short('c'), long)]
        catalog: PathBuf,

        /// The path to the query `.csv` file.
        #[arg(short('q'), long)]
        queries: PathBuf,

        /// How many nearest sites to keep per query.
        #[arg(short('k'), long, default_value_t = nearsite::DEFAULT_K)]
        k: usize,

        /// Decimal places for exported distances.
        #[arg(short('p'), long, default_value_t = nearsite::export::DEFAULT_PRECISION)]
        precision: usize,

        /// The path of the output `.csv` table.
        #[arg(short('o'), long)]
        out: PathBuf,

        /// Where to write the map model `.json`, if anywhere.
        #[arg(short('m'), long)]
        map: Option<PathBuf>,

        /// Whether to rank queries across threads.
        #[arg(long, default_value_t = false)]
        parallel: bool,
    },
    /// Rank one ad-hoc coordinate against the catalog and print the result.
    Lookup {
        /// The path to the catalog `.csv` file.
        #[arg(short('c'), long)]
        catalog: PathBuf,

        /// The latitude of the query point, in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// The longitude of the query point, in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// An id to report for the query point.
        #[arg(long, default_value = "")]
        id: String,

        /// How many nearest sites to print.
        #[arg(short('k'), long, default_value_t = nearsite::DEFAULT_K)]
        k: usize,

        /// Decimal places for printed distances.
        #[arg(short('p'), long, default_value_t = nearsite::export::DEFAULT_PRECISION)]
        precision: usize,
    },
}
