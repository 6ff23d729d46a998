//! A renderer-agnostic map model for rankings.
//!
//! The model carries everything a map layer needs and nothing it does not:
//! deduplicated markers, one connector line per ranked neighbor, and an
//! initial view centered on the markers. Coordinates are `[longitude,
//! latitude]` pairs, the order map renderers expect, which is the reverse
//! of the `LatLon` order used everywhere else in this crate.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Neighbors;

/// RGB fill for query-site markers.
pub const INPUT_COLOR: [u8; 3] = [0, 116, 217];

/// RGB fill for nearest-site markers.
pub const NEAREST_COLOR: [u8; 3] = [34, 139, 34];

/// Initial zoom level of the view.
pub const DEFAULT_ZOOM: f64 = 11.0;

/// Which role a marker plays on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    /// A query site.
    Input,
    /// A ranked neighbor from the catalog.
    Nearest,
}

/// A single point to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// The id of the site the marker stands for.
    pub id: String,
    /// The pass-through label of the site.
    pub label: String,
    /// The role of the marker.
    pub kind: MarkerKind,
    /// The position as `[longitude, latitude]`.
    pub coordinates: [f64; 2],
    /// The RGB fill color.
    pub color: [u8; 3],
}

/// A straight connector from a query to one of its ranked neighbors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// The query end as `[longitude, latitude]`.
    pub from: [f64; 2],
    /// The neighbor end as `[longitude, latitude]`.
    pub to: [f64; 2],
}

/// The initial camera position over the markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// The latitude of the view center.
    pub latitude: f64,
    /// The longitude of the view center.
    pub longitude: f64,
    /// The zoom level.
    pub zoom: f64,
}

/// Markers, connector lines, and a view, ready for any map renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapModel {
    /// Deduplicated markers in first-seen order.
    pub markers: Vec<Marker>,
    /// One connector per ranked neighbor.
    pub lines: Vec<Line>,
    /// The initial camera position.
    pub view: ViewState,
}

impl MapModel {
    /// Builds a map model from rankings.
    ///
    /// Every query with finite coordinates gets an `Input` marker; every
    /// ranked neighbor gets a `Nearest` marker and a connector line from
    /// its query. Markers are deduplicated on identity, role, and exact
    /// position, keeping the first occurrence, so a site ranked for many
    /// queries is drawn once while its lines are all kept.
    ///
    /// Returns `None` when there is nothing to draw, so callers can skip
    /// the map instead of rendering an empty one.
    #[must_use]
    pub fn from_rankings(rankings: &[Neighbors]) -> Option<Self> {
        let mut markers = Markers::default();
        let mut lines = Vec::new();

        for ranking in rankings {
            let query = &ranking.query;
            if !query.coords.is_finite() {
                continue;
            }
            let from = lonlat(query.coords);
            markers.push_unique(&query.id, &query.label, MarkerKind::Input, from);
            for neighbor in &ranking.ranked {
                let to = lonlat(neighbor.site.coords);
                markers.push_unique(&neighbor.site.id, &neighbor.site.label, MarkerKind::Nearest, to);
                lines.push(Line { from, to });
            }
        }

        let view = markers.view()?;
        Some(Self {
            markers: markers.into_inner(),
            lines,
            view,
        })
    }

    /// Writes the model to a `.json` file, pretty-printed.
    ///
    /// # Errors
    ///
    /// * If the model cannot be serialized or the file cannot be written.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(path, json).map_err(|e| e.to_string())
    }
}

/// Converts coordinates to the `[longitude, latitude]` order maps use.
fn lonlat(coords: geodesic::LatLon) -> [f64; 2] {
    [coords.longitude, coords.latitude]
}

/// Markers in first-seen order with the set of keys already drawn.
#[derive(Default)]
struct Markers {
    /// The markers accepted so far.
    inner: Vec<Marker>,
    /// Identity keys of accepted markers, with positions as raw bits so
    /// the key is hashable.
    seen: HashSet<(String, String, MarkerKind, u64, u64)>,
}

impl Markers {
    /// Appends a marker unless an identical one was already accepted.
    fn push_unique(&mut self, id: &str, label: &str, kind: MarkerKind, coordinates: [f64; 2]) {
        let key = (
            id.to_string(),
            label.to_string(),
            kind,
            coordinates[0].to_bits(),
            coordinates[1].to_bits(),
        );
        if self.seen.insert(key) {
            let color = match kind {
                MarkerKind::Input => INPUT_COLOR,
                MarkerKind::Nearest => NEAREST_COLOR,
            };
            self.inner.push(Marker {
                id: id.to_string(),
                label: label.to_string(),
                kind,
                coordinates,
                color,
            });
        }
    }

    /// The view centered on the mean of the accepted markers, or `None`
    /// when there are none.
    #[allow(clippy::cast_precision_loss)]
    fn view(&self) -> Option<ViewState> {
        if self.inner.is_empty() {
            return None;
        }
        let count = self.inner.len() as f64;
        let (lon, lat) = self
            .inner
            .iter()
            .fold((0.0, 0.0), |(lon, lat), m| {
                (lon + m.coordinates[0], lat + m.coordinates[1])
            });
        Some(ViewState {
            latitude: lat / count,
            longitude: lon / count,
            zoom: DEFAULT_ZOOM,
        })
    }

    /// The accepted markers, in first-seen order.
    fn into_inner(self) -> Vec<Marker> {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use geodesic::LatLon;

    use crate::{Neighbor, QuerySite, ReferenceSite};

    use super::*;

    /// A ranking of `neighbors` for a query at `(lat, lon)`.
    fn ranking(id: &str, lat: f64, lon: f64, neighbors: &[(&str, f64, f64)]) -> Neighbors {
        Neighbors {
            query: QuerySite::new(id, "", LatLon::new(lat, lon)),
            ranked: neighbors
                .iter()
                .map(|&(nid, nlat, nlon)| Neighbor {
                    site: ReferenceSite::new(nid, "", LatLon::new(nlat, nlon)),
                    distance_km: 0.0,
                })
                .collect(),
        }
    }

    #[test]
    fn shared_neighbors_are_drawn_once() -> Result<(), String> {
        let rankings = vec![
            ranking("Q1", 0.0, 0.0, &[("A", 1.0, 1.0)]),
            ranking("Q2", 2.0, 2.0, &[("A", 1.0, 1.0)]),
        ];

        let model = MapModel::from_rankings(&rankings).ok_or("expected a model")?;
        let nearest = model
            .markers
            .iter()
            .filter(|m| m.kind == MarkerKind::Nearest)
            .count();
        assert_eq!(nearest, 1);
        assert_eq!(model.lines.len(), 2);
        Ok(())
    }

    #[test]
    fn roles_get_their_own_colors() -> Result<(), String> {
        let rankings = vec![ranking("Q", 0.0, 0.0, &[("A", 1.0, 1.0)])];

        let model = MapModel::from_rankings(&rankings).ok_or("expected a model")?;
        assert_eq!(model.markers[0].kind, MarkerKind::Input);
        assert_eq!(model.markers[0].color, INPUT_COLOR);
        assert_eq!(model.markers[1].kind, MarkerKind::Nearest);
        assert_eq!(model.markers[1].color, NEAREST_COLOR);
        Ok(())
    }

    #[test]
    fn a_site_may_appear_in_both_roles() -> Result<(), String> {
        let rankings = vec![ranking("A", 1.0, 1.0, &[("A", 1.0, 1.0)])];

        let model = MapModel::from_rankings(&rankings).ok_or("expected a model")?;
        assert_eq!(model.markers.len(), 2);
        Ok(())
    }

    #[test]
    fn view_centers_on_the_markers() -> Result<(), String> {
        let rankings = vec![ranking("Q", 0.0, 0.0, &[("A", 2.0, 4.0)])];

        let model = MapModel::from_rankings(&rankings).ok_or("expected a model")?;
        assert!((model.view.latitude - 1.0).abs() < 1e-12);
        assert!((model.view.longitude - 2.0).abs() < 1e-12);
        assert!((model.view.zoom - DEFAULT_ZOOM).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn coordinates_are_longitude_first() -> Result<(), String> {
        let rankings = vec![ranking("Q", -6.2, 106.8, &[])];

        let model = MapModel::from_rankings(&rankings).ok_or("expected a model")?;
        assert_eq!(model.markers[0].coordinates, [106.8, -6.2]);
        Ok(())
    }

    #[test]
    fn queries_without_neighbors_still_get_markers() -> Result<(), String> {
        let rankings = vec![ranking("Q", 0.0, 0.0, &[])];

        let model = MapModel::from_rankings(&rankings).ok_or("expected a model")?;
        assert_eq!(model.markers.len(), 1);
        assert!(model.lines.is_empty());
        Ok(())
    }

    #[test]
    fn nothing_to_draw_yields_none() {
        assert!(MapModel::from_rankings(&[]).is_none());

        let unplottable = vec![ranking("Q", f64::NAN, 0.0, &[])];
        assert!(MapModel::from_rankings(&unplottable).is_none());
    }

    #[test]
    fn lines_run_from_query_to_neighbor() -> Result<(), String> {
        let rankings = vec![ranking("Q", 1.0, 2.0, &[("A", 3.0, 4.0)])];

        let model = MapModel::from_rankings(&rankings).ok_or("expected a model")?;
        assert_eq!(model.lines, vec![Line { from: [2.0, 1.0], to: [4.0, 3.0] }]);
        Ok(())
    }

    #[test]
    fn json_uses_lowercase_roles() -> Result<(), String> {
        let rankings = vec![ranking("Q", 0.0, 0.0, &[("A", 1.0, 1.0)])];
        let model = MapModel::from_rankings(&rankings).ok_or("expected a model")?;

        let dir = tempdir::TempDir::new("map-tests").map_err(|e| e.to_string())?;
        let path = dir.path().join("map.json");
        model.write_json(&path)?;

        let contents = std::fs::read_to_string(&path).map_err(|e| e.to_string())?;
        assert!(contents.contains("\"markers\""));
        assert!(contents.contains("\"input\""));
        assert!(contents.contains("\"nearest\""));

        let back: MapModel = serde_json::from_str(&contents).map_err(|e| e.to_string())?;
        assert_eq!(back, model);
        Ok(())
    }
}
