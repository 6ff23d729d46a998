//! Ranking a batch of query sites from files.

use std::path::Path;

use nearsite::{export, map::MapModel, par_rank_batch, rank_batch, read_query_csv, Catalog};

/// Reads the catalog and queries, ranks, and writes the wide table and the
/// optional map model.
pub fn rank<P: AsRef<Path>>(
    catalog: P,
    queries: P,
    k: usize,
    precision: usize,
    out: P,
    map: Option<P>,
    parallel: bool,
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

    let queries = read_query_csv(queries)?;
    ftlog::info!("Read {} queries.", queries.len());

    let results = if parallel {
        par_rank_batch(&queries, catalog.sites(), k)?
    } else {
        rank_batch(&queries, catalog.sites(), k)?
    };

    export::write_csv(&out, &results, k, precision)?;
    println!("Rankings: {:?}", out.as_ref());

    if let Some(map_path) = map {
        match MapModel::from_rankings(&results) {
            Some(model) => {
                model.write_json(&map_path)?;
                println!("Map model: {:?}", map_path.as_ref());
            }
            None => println!("Nothing to draw; skipped the map model."),
        }
    }

    Ok(())
}
