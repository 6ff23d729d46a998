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

mod coords;
mod great_circle;

pub use coords::LatLon;
pub use great_circle::{haversine, EARTH_RADIUS_KM};

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
