//! Flattening rankings into a wide table.
//!
//! One output row per query, with a fixed column group per rank so the
//! table always has the same shape for a given `k`. Rounding distances for
//! display and padding short rankings with empty cells happen here and
//! only here; the rankings themselves keep full precision.

use std::path::Path;

use crate::Neighbors;

/// Decimal places used for displayed distances unless a caller asks
/// otherwise.
pub const DEFAULT_PRECISION: usize = 2;

/// The header row for a table of rankings truncated or padded to `k`
/// neighbors per query.
#[must_use]
pub fn header(k: usize) -> Vec<String> {
    let mut columns = vec![
        "query_id".to_string(),
        "query_latitude".to_string(),
        "query_longitude".to_string(),
    ];
    for n in 1..=k {
        columns.push(format!("nearest_{n}_id"));
        columns.push(format!("nearest_{n}_label"));
        columns.push(format!("nearest_{n}_distance_km"));
    }
    columns
}

/// One table row for a ranking, padded with empty cells when the ranking
/// holds fewer than `k` neighbors.
///
/// Distances are rounded to `precision` decimal places for display.
#[must_use]
pub fn row(result: &Neighbors, k: usize, precision: usize) -> Vec<String> {
    let mut cells = vec![
        result.query.id.clone(),
        result.query.coords.latitude.to_string(),
        result.query.coords.longitude.to_string(),
    ];
    for n in 0..k {
        match result.ranked.get(n) {
            Some(neighbor) => {
                cells.push(neighbor.site.id.clone());
                cells.push(neighbor.site.label.clone());
                cells.push(format!("{:.precision$}", neighbor.distance_km));
            }
            None => cells.extend(std::iter::repeat(String::new()).take(3)),
        }
    }
    cells
}

/// Writes rankings to a `.csv` file as a wide table.
///
/// # Errors
///
/// * If the file cannot be created or a row cannot be written.
pub fn write_csv<P: AsRef<Path>>(
    path: P,
    results: &[Neighbors],
    k: usize,
    precision: usize,
) -> Result<(), String> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(|e| e.to_string())?;
    writer.write_record(header(k)).map_err(|e| e.to_string())?;
    for result in results {
        writer
            .write_record(row(result, k, precision))
            .map_err(|e| e.to_string())?;
    }
    writer.flush().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use geodesic::LatLon;

    use crate::{Neighbor, QuerySite, ReferenceSite};

    use super::*;

    /// A ranking with two neighbors at hand-picked distances.
    fn two_neighbor_ranking() -> Neighbors {
        Neighbors {
            query: QuerySite::new("Q", "Demo", LatLon::new(0.5, -1.25)),
            ranked: vec![
                Neighbor {
                    site: ReferenceSite::new("A", "North", LatLon::new(0.0, 0.0)),
                    distance_km: 55.59746332227937,
                },
                Neighbor {
                    site: ReferenceSite::new("B", "South", LatLon::new(0.0, 1.0)),
                    distance_km: 1045.123,
                },
            ],
        }
    }

    #[test]
    fn header_repeats_the_rank_group() {
        let columns = header(2);
        assert_eq!(
            columns,
            vec![
                "query_id",
                "query_latitude",
                "query_longitude",
                "nearest_1_id",
                "nearest_1_label",
                "nearest_1_distance_km",
                "nearest_2_id",
                "nearest_2_label",
                "nearest_2_distance_km",
            ]
        );
    }

    #[test]
    fn rows_round_distances_for_display() {
        let cells = row(&two_neighbor_ranking(), 2, 2);
        assert_eq!(cells[0], "Q");
        assert_eq!(cells[1], "0.5");
        assert_eq!(cells[2], "-1.25");
        assert_eq!(cells[3..6], ["A", "North", "55.60"]);
        assert_eq!(cells[6..9], ["B", "South", "1045.12"]);
    }

    #[test]
    fn short_rankings_pad_with_empty_cells() {
        let cells = row(&two_neighbor_ranking(), 3, 2);
        assert_eq!(cells.len(), 3 + 3 * 3);
        assert_eq!(cells[9..12], ["", "", ""]);
    }

    #[test]
    fn precision_is_caller_controlled() {
        let cells = row(&two_neighbor_ranking(), 1, 4);
        assert_eq!(cells[5], "55.5975");
    }

    #[test]
    fn rows_and_header_always_agree_on_width() {
        for k in 0..5 {
            assert_eq!(header(k).len(), row(&two_neighbor_ranking(), k, 2).len());
        }
    }

    #[test]
    fn write_csv_round_trips_through_a_file() -> Result<(), String> {
        let dir = tempdir::TempDir::new("export-tests").map_err(|e| e.to_string())?;
        let path = dir.path().join("rankings.csv");

        write_csv(&path, &[two_neighbor_ranking()], 2, DEFAULT_PRECISION)?;

        let contents = std::fs::read_to_string(&path).map_err(|e| e.to_string())?;
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some(
                "query_id,query_latitude,query_longitude,\
                 nearest_1_id,nearest_1_label,nearest_1_distance_km,\
                 nearest_2_id,nearest_2_label,nearest_2_distance_km"
            )
        );
        assert_eq!(
            lines.next(),
            Some("Q,0.5,-1.25,A,North,55.60,B,South,1045.12")
        );
        assert_eq!(lines.next(), None);
        Ok(())
    }
}
