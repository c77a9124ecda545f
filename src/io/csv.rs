use crate::cell::HexCell;
use crate::collection::CellCollection;
use crate::coord::GeoPoint;
use crate::error::HexFogError;
use crate::geom::parse_geojson_points;
use crate::index::{WORKING_RESOLUTION, parse_cell_index};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

/// Name of the id column written by [`csv_to_cell_csv`].
pub const CELL_INDEX_COLUMN: &str = "cell_index";
/// Name of the optional geometry column written by [`csv_to_cell_csv`].
pub const CELL_GEOMETRY_COLUMN: &str = "cell_geometry";

enum SourceIndices {
    Geometry(usize),
    Coordinates { lat_idx: usize, lng_idx: usize },
}

impl SourceIndices {
    /// Reads the check-in position(s) of one record.
    fn points(&self, record: &csv::StringRecord) -> Result<Vec<GeoPoint>, HexFogError> {
        match self {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    HexFogError::Csv(format!("Missing geometry column at index {idx}"))
                })?;
                parse_geojson_points(geom_str)
            }
            SourceIndices::Coordinates { lat_idx, lng_idx } => {
                let lat = parse_degrees(record, *lat_idx, "latitude")?;
                let lng = parse_degrees(record, *lng_idx, "longitude")?;
                Ok(vec![GeoPoint::new(lat, lng)?])
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing a GeoJSON Point or MultiPoint
    GeometryColumn(String),
    /// Separate latitude and longitude columns in degrees
    CoordinateColumns {
        lat_column: String,
        lng_column: String,
    },
}

#[derive(Debug, Clone)]
pub struct CsvCellConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub resolution: u8,
    pub include_cell_geometry: bool,
}

impl CsvCellConfig {
    /// Create config for a CSV with separate latitude/longitude columns.
    ///
    /// # Example
    /// ```
    /// use hexfog::CsvCellConfig;
    ///
    /// let config = CsvCellConfig::from_coords("latitude", "longitude")
    ///     .with_cell_geometry();
    /// assert_eq!(config.resolution, 9);
    /// ```
    pub fn from_coords(lat_column: impl Into<String>, lng_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lat_column: lat_column.into(),
                lng_column: lng_column.into(),
            },
            exclude_columns: Vec::new(),
            resolution: WORKING_RESOLUTION,
            include_cell_geometry: false,
        }
    }

    /// Create config for a CSV with a GeoJSON geometry column.
    pub fn from_geometry(geometry_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            resolution: WORKING_RESOLUTION,
            include_cell_geometry: false,
        }
    }

    pub fn resolution(mut self, resolution: u8) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the cell outline as a GeoJSON Polygon column.
    pub fn with_cell_geometry(mut self) -> Self {
        self.include_cell_geometry = true;
        self
    }
}

fn column_index(headers: &csv::StringRecord, name: &str, role: &str) -> Result<usize, HexFogError> {
    if name.is_empty() {
        return Err(HexFogError::Csv(format!("{role} column name cannot be empty")));
    }
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| HexFogError::Csv(format!("{role} column '{name}' not found")))
}

fn parse_degrees(record: &csv::StringRecord, idx: usize, role: &str) -> Result<f64, HexFogError> {
    let raw = record
        .get(idx)
        .ok_or_else(|| HexFogError::Csv(format!("Missing {role} column at index {idx}")))?
        .trim();
    raw.parse()
        .map_err(|_| HexFogError::Csv(format!("Invalid {role}: '{raw}'")))
}

fn polygon_to_geojson(cell: &HexCell) -> String {
    geojson::Geometry::from(&cell.to_polygon()).to_string()
}

/// Converts a CSV of check-in locations into a CSV keyed by cell index.
///
/// Streams rows so large files never sit in memory. Each output row starts
/// with `cell_index` (and `cell_geometry` when requested), followed by every
/// input column that is neither a source column nor excluded. A geometry
/// column holding a MultiPoint produces one output row per point.
///
/// # Example
///
/// ```no_run
/// use hexfog::{csv_to_cell_csv, CsvCellConfig};
///
/// let config = CsvCellConfig::from_coords("lat", "lng")
///     .exclude(vec!["device_id".into()]);
///
/// csv_to_cell_csv("checkins.csv", "cells.csv", &config).unwrap();
/// ```
#[tracing::instrument(skip_all, fields(resolution = config.resolution))]
pub fn csv_to_cell_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvCellConfig,
) -> Result<(), HexFogError> {
    let file = File::open(csv_path)?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers()?.clone();

    // Source columns never reach the output.
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = column_index(&headers, col, "Geometry")?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns {
            lat_column,
            lng_column,
        } => {
            let lat_idx = column_index(&headers, lat_column, "Latitude")?;
            let lng_idx = column_index(&headers, lng_column, "Longitude")?;
            (
                SourceIndices::Coordinates { lat_idx, lng_idx },
                HashSet::from([lat_idx, lng_idx]),
            )
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path)?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec![CELL_INDEX_COLUMN];
    if config.include_cell_geometry {
        header_row.push(CELL_GEOMETRY_COLUMN);
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer.write_record(&header_row)?;

    let mut rows = 0usize;
    for (line, result) in reader.records().enumerate() {
        let record = result?;

        let points = source_indices
            .points(&record)
            .inspect_err(|e| tracing::warn!(record = line + 1, error = %e, "rejected row"))?;

        for point in points {
            let cell = HexCell::from_point(&point, config.resolution)?;
            let mut row: Vec<String> = vec![cell.id.clone()];

            if config.include_cell_geometry {
                row.push(polygon_to_geojson(&cell));
            }

            for (i, field) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(field.to_string());
                }
            }
            writer.write_record(&row)?;
            rows += 1;
        }
    }

    writer.flush()?;
    tracing::debug!(rows, "wrote cell csv");

    Ok(())
}

/// Reads a column of cell ids into a [`CellCollection`].
///
/// Blank cells are skipped; malformed ids fail with
/// [`HexFogError::InvalidCellIndex`].
pub fn read_cells_from_csv(
    csv_path: impl AsRef<Path>,
    column: &str,
    name: impl Into<String>,
) -> Result<CellCollection, HexFogError> {
    let file = File::open(csv_path)?;
    let mut reader = csv::Reader::from_reader(file);
    let idx = column_index(reader.headers()?, column, "Cell index")?;

    let mut collection = CellCollection::new(name);
    for result in reader.records() {
        let record = result?;
        let id = record.get(idx).unwrap_or_default().trim();
        if !id.is_empty() {
            collection.insert(parse_cell_index(id)?);
        }
    }
    Ok(collection)
}
