//! Reading and holding a catalog of reference sites.
//!
//! Site tables arrive as CSV exports from a variety of tools, so column
//! names are matched case-insensitively against a set of accepted
//! spellings rather than one fixed schema. Coordinate fields that fail to
//! parse are coerced to NaN: the row is carried but unrankable, and the
//! selector skips it instead of the whole import failing.

use std::path::Path;

use geodesic::LatLon;
use serde::{Deserialize, Serialize};

use crate::{QuerySite, ReferenceSite};

/// Accepted spellings for the id column.
const ID_ALIASES: &[&str] = &["site_id", "site id", "siteid", "id"];

/// Accepted spellings for the optional pass-through label column.
const LABEL_ALIASES: &[&str] = &[
    "label",
    "name",
    "sitename",
    "site name",
    "name/bsc",
    "bsc",
    "cluster",
];

/// Accepted spellings for the latitude column.
const LAT_ALIASES: &[&str] = &["latitude", "lat"];

/// Accepted spellings for the longitude column.
const LON_ALIASES: &[&str] = &["longitude", "lon", "long", "lng"];

/// An in-memory snapshot of reference sites, in source order.
///
/// A catalog is read-only once constructed. Rankings borrow it and never
/// mutate it, so one snapshot can serve any number of concurrent rankings;
/// replacing the catalog mid-batch is prevented by the borrow, not by
/// locking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// The sites, in the order they appeared in the source.
    sites: Vec<ReferenceSite>,
    /// A human-readable name for logs and reports.
    name: String,
}

impl Catalog {
    /// Creates a catalog from already-validated sites.
    ///
    /// An empty catalog is legal; rankings against it are simply empty.
    #[must_use]
    pub fn new(sites: Vec<ReferenceSite>) -> Self {
        Self {
            sites,
            name: "catalog".to_string(),
        }
    }

    /// Changes the name of the catalog.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// The name of the catalog.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sites in source order.
    #[must_use]
    pub fn sites(&self) -> &[ReferenceSite] {
        &self.sites
    }

    /// The number of sites, including unrankable rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Whether the catalog holds no sites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// The number of rows whose coordinates are finite and rankable.
    #[must_use]
    pub fn rankable(&self) -> usize {
        self.sites.iter().filter(|s| s.coords.is_finite()).count()
    }

    /// Reads a catalog from a `.csv` file with a header row.
    ///
    /// Required columns, matched case-insensitively against the accepted
    /// spellings: an id (`site_id`, `site id`, `siteid`, `id`), a latitude
    /// (`latitude`, `lat`), and a longitude (`longitude`, `lon`, `long`,
    /// `lng`). A label column (`label`, `name`, `sitename`, `site name`,
    /// `name/bsc`, `bsc`, `cluster`) is optional and passes through
    /// unchanged. The catalog takes its name from the file stem.
    ///
    /// # Errors
    ///
    /// * If the file cannot be opened or a record cannot be read.
    /// * If a required column is missing from the header.
    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let name = path
            .as_ref()
            .file_stem()
            .map_or_else(|| "catalog".to_string(), |s| s.to_string_lossy().into_owned());

        let mut reader = csv::ReaderBuilder::new()
            .from_path(&path)
            .map_err(|e| e.to_string())?;
        let headers = reader.headers().map_err(|e| e.to_string())?.clone();
        let columns = Columns::resolve(&headers, IdColumn::Required)?;

        let mut sites = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| format!("row {}: {e}", row + 2))?;
            sites.push(ReferenceSite {
                id: field(&record, columns.id).to_string(),
                label: field(&record, columns.label).to_string(),
                coords: coords_from(&record, &columns),
            });
        }

        Ok(Self::new(sites).with_name(&name))
    }
}

/// Reads query sites from a `.csv` file with a header row.
///
/// Column rules match [`Catalog::read_csv`], except that the id column is
/// optional for queries: without one, every query gets an empty id.
///
/// # Errors
///
/// * If the file cannot be opened or a record cannot be read.
/// * If the latitude or longitude column is missing from the header.
pub fn read_query_csv<P: AsRef<Path>>(path: P) -> Result<Vec<QuerySite>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .from_path(&path)
        .map_err(|e| e.to_string())?;
    let headers = reader.headers().map_err(|e| e.to_string())?.clone();
    let columns = Columns::resolve(&headers, IdColumn::Optional)?;

    let mut queries = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| format!("row {}: {e}", row + 2))?;
        queries.push(QuerySite {
            id: field(&record, columns.id).to_string(),
            label: field(&record, columns.label).to_string(),
            coords: coords_from(&record, &columns),
        });
    }

    Ok(queries)
}

/// Whether a resolved header must include an id column.
#[derive(Clone, Copy, PartialEq, Eq)]
enum IdColumn {
    /// Catalog rows need an id.
    Required,
    /// Query rows may omit it.
    Optional,
}

/// Resolved positions of the recognized columns in a header row.
struct Columns {
    /// The id column, when present.
    id: Option<usize>,
    /// The optional pass-through label column.
    label: Option<usize>,
    /// The latitude column.
    lat: usize,
    /// The longitude column.
    lon: usize,
}

impl Columns {
    /// Matches the header row against the accepted column spellings.
    fn resolve(headers: &csv::StringRecord, id: IdColumn) -> Result<Self, String> {
        let id_col = find_column(headers, ID_ALIASES);
        if id == IdColumn::Required && id_col.is_none() {
            return Err(missing_column("id", ID_ALIASES, headers));
        }
        let lat = find_column(headers, LAT_ALIASES)
            .ok_or_else(|| missing_column("latitude", LAT_ALIASES, headers))?;
        let lon = find_column(headers, LON_ALIASES)
            .ok_or_else(|| missing_column("longitude", LON_ALIASES, headers))?;

        Ok(Self {
            id: id_col,
            label: find_column(headers, LABEL_ALIASES),
            lat,
            lon,
        })
    }
}

/// Finds the first header matching one of the aliases, ignoring case and
/// surrounding whitespace.
fn find_column(headers: &csv::StringRecord, aliases: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let h = h.trim().to_lowercase();
        aliases.contains(&h.as_str())
    })
}

/// Builds the error for a required column that no header matched.
fn missing_column(kind: &str, aliases: &[&str], headers: &csv::StringRecord) -> String {
    format!(
        "missing a {kind} column: accepted headers are {aliases:?}, found {:?}",
        headers.iter().collect::<Vec<_>>()
    )
}

/// Returns the trimmed field at `index`, or an empty string when the column
/// is absent or the row is short.
fn field<'a>(record: &'a csv::StringRecord, index: Option<usize>) -> &'a str {
    index.and_then(|i| record.get(i)).unwrap_or("").trim()
}

/// Parses the coordinate columns of one row, coercing anything unparseable
/// to NaN so the row stays in the catalog as unrankable.
fn coords_from(record: &csv::StringRecord, columns: &Columns) -> LatLon {
    LatLon::new(
        parse_coord(field(record, Some(columns.lat))),
        parse_coord(field(record, Some(columns.lon))),
    )
}

/// Parses one coordinate field; NaN marks a value that is not a number.
fn parse_coord(value: &str) -> f64 {
    value.parse().unwrap_or(f64::NAN)
}
