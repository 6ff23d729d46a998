#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod export;
pub mod map;
pub mod search;
pub mod site;

pub use catalog::{read_query_csv, Catalog};
pub use search::{nearest_k, par_rank_batch, rank_batch, DEFAULT_K};
pub use site::{Neighbor, Neighbors, QuerySite, ReferenceSite};

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
