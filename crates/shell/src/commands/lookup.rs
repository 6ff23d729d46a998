//! Ranking one ad-hoc coordinate.

use std::path::Path;

use geodesic::LatLon;
use nearsite::{nearest_k, Catalog, QuerySite};

/// Ranks a single coordinate against the catalog and prints the result.
pub fn lookup<P: AsRef<Path>>(
    catalog: P,
    lat: f64,
    lon: f64,
    id: &str,
    k: usize,
    precision: usize,
) -> Result<(), String> {
    let catalog = Catalog::read_csv(catalog)?;
    ftlog::info!(
        "Catalog '{}': {} sites, {} rankable.",
        catalog.name(),
        catalog.len(),
        catalog.rankable()
    );
    if catalog.rankable() < catalog.len() {
        ftlog::warn!(
            "{} rows in catalog '{}' have unusable coordinates and will not rank.",
            catalog.len() - catalog.rankable(),
            catalog.name()
        );
    }

    let query = QuerySite::new(id, "", LatLon::new(lat, lon));
    let result = nearest_k(&query, catalog.sites(), k)?;

    if result.ranked.is_empty() {
        println!("No rankable sites in catalog '{}'.", catalog.name());
    }
    for (rank, neighbor) in result.ranked.iter().enumerate() {
        let label = if neighbor.site.label.is_empty() {
            String::new()
        } else {
            format!(" ({})", neighbor.site.label)
        };
        println!(
            "{}. {}{} at {:.precision$} km",
            rank + 1,
            neighbor.site.id,
            label,
            neighbor.distance_km,
        );
    }

    Ok(())
}
