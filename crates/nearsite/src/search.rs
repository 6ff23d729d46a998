//! Linear nearest-k ranking of queries against a catalog snapshot.

use std::{cmp::Ordering, collections::BinaryHeap};

use geodesic::haversine;
use rayon::prelude::*;

use crate::{Neighbor, Neighbors, QuerySite, ReferenceSite};

/// How many nearest sites a ranking reports when the caller does not choose.
pub const DEFAULT_K: usize = 3;

/// Ranks every catalog site by great-circle distance from `query` and
/// returns the `k` nearest.
///
/// The ranking is ascending by distance. When two sites are exactly
/// equidistant from the query, the one appearing earlier in the catalog
/// ranks first, regardless of how the selection is performed internally.
/// Catalog rows whose computed distance is not finite (a NaN or infinite
/// coordinate) are unrankable and are skipped, not treated as fatal.
///
/// The result holds `min(k, rankable rows)` entries: fewer than `k` when
/// the catalog is small, and none at all for an empty catalog. The core
/// never pads short results; rendering blanks for missing ranks belongs to
/// the caller.
///
/// Nothing is mutated and no state survives the call, so any number of
/// rankings may run concurrently against the same catalog slice.
///
/// # Errors
///
/// * If either query coordinate is not a finite number.
pub fn nearest_k(query: &QuerySite, catalog: &[ReferenceSite], k: usize) -> Result<Neighbors, String> {
    if !query.coords.is_finite() {
        return Err(format!(
            "query '{}' has a non-finite coordinate: ({}, {})",
            query.id, query.coords.latitude, query.coords.longitude
        ));
    }

    let mut hits = TopK::new(k.min(catalog.len()));
    for (i, site) in catalog.iter().enumerate() {
        let d = haversine(query.coords, site.coords);
        if d.is_finite() {
            hits.push(d, i);
        }
    }

    let ranked = hits
        .into_ranked()
        .into_iter()
        .map(|(distance_km, i)| Neighbor {
            site: catalog[i].clone(),
            distance_km,
        })
        .collect();

    Ok(Neighbors {
        query: query.clone(),
        ranked,
    })
}

/// Ranks a batch of queries against one catalog snapshot.
///
/// Output order matches query order. The batch fails on the first query
/// with a non-finite coordinate; the error message names that query.
///
/// # Errors
///
/// * If any query coordinate is not a finite number.
pub fn rank_batch(
    queries: &[QuerySite],
    catalog: &[ReferenceSite],
    k: usize,
) -> Result<Vec<Neighbors>, String> {
    queries.iter().map(|q| nearest_k(q, catalog, k)).collect()
}

/// Parallel version of [`rank_batch`].
///
/// Rankings are independent and the catalog is only read, so queries map
/// across threads with no synchronization. Output order still matches
/// query order.
///
/// # Errors
///
/// * If any query coordinate is not a finite number.
pub fn par_rank_batch(
    queries: &[QuerySite],
    catalog: &[ReferenceSite],
    k: usize,
) -> Result<Vec<Neighbors>, String> {
    queries
        .par_iter()
        .map(|q| nearest_k(q, catalog, k))
        .collect()
}

/// A bounded max-heap that keeps the `k` smallest `(distance, index)` pairs
/// pushed into it.
///
/// The pair is ordered lexicographically, so among equal distances the
/// smaller catalog index is the smaller pair and survives eviction. Only
/// finite distances may be pushed; finiteness is what makes the pair
/// ordering total.
struct TopK {
    /// The worst kept pair sits at the top, ready for eviction.
    heap: BinaryHeap<Hit>,
    /// The maximum number of pairs to keep.
    k: usize,
}

impl TopK {
    /// Creates a selector that keeps at most `k` pairs.
    fn new(k: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(k),
            k,
        }
    }

    /// Offers a pair, evicting the current worst if this one ranks better.
    fn push(&mut self, distance: f64, index: usize) {
        let hit = Hit { distance, index };
        if self.heap.len() < self.k {
            self.heap.push(hit);
        } else if let Some(top) = self.heap.peek() {
            if hit.cmp(top) == Ordering::Less {
                self.heap.pop();
                self.heap.push(hit);
            }
        }
    }

    /// Consumes the selector and returns the kept pairs in ranked order.
    fn into_ranked(self) -> Vec<(f64, usize)> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|hit| (hit.distance, hit.index))
            .collect()
    }
}

/// A `(distance, catalog index)` pair with a total, tie-aware ordering.
struct Hit {
    /// Great-circle distance from the query in kilometers; always finite.
    distance: f64,
    /// Position of the site in the catalog.
    index: usize,
}

impl PartialEq for Hit {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hit {}

impl PartialOrd for Hit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.index.cmp(&other.index))
    }
}
