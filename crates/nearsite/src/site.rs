//! Site records for catalogs, queries, and ranked results.

use geodesic::LatLon;
use serde::{Deserialize, Serialize};

/// An entry in the reference catalog.
///
/// The `id` is opaque to the ranking logic and unique by convention only;
/// duplicate ids are legal and rank independently. The `label` is a
/// free-form pass-through field (a site name or controller grouping in the
/// source data) that travels into results unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSite {
    /// Opaque identifier.
    pub id: String,
    /// Pass-through descriptive field; may be empty.
    pub label: String,
    /// Position in signed decimal degrees.
    pub coords: LatLon,
}

impl ReferenceSite {
    /// Creates a reference site.
    #[must_use]
    pub fn new(id: &str, label: &str, coords: LatLon) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            coords,
        }
    }
}

/// A site to resolve neighbors for.
///
/// Same shape as a [`ReferenceSite`], but the `id` is caller-supplied and
/// carries no uniqueness expectation; both `id` and `label` may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySite {
    /// Caller-supplied identifier; may be empty.
    pub id: String,
    /// Pass-through descriptive field; may be empty.
    pub label: String,
    /// Position in signed decimal degrees.
    pub coords: LatLon,
}

impl QuerySite {
    /// Creates a query site.
    #[must_use]
    pub fn new(id: &str, label: &str, coords: LatLon) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            coords,
        }
    }
}

/// One ranked catalog entry: the site plus its distance from the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// The catalog site, unchanged.
    pub site: ReferenceSite,
    /// Great-circle distance from the query in kilometers, full double
    /// precision. Rounding for display happens at the export boundary.
    pub distance_km: f64,
}

/// The ranked nearest catalog sites for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbors {
    /// The query the ranking was computed for.
    pub query: QuerySite,
    /// Up to `k` entries, ascending by distance; exact ties keep catalog
    /// order. Shorter than `k` when the catalog (minus unrankable rows) is
    /// smaller; padding short results is the presentation layer's concern.
    pub ranked: Vec<Neighbor>,
}
