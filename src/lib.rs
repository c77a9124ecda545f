//! # hexfog
//!
//! Hexagonal cell indexing for fog-of-war territory maps, built on the H3
//! global tessellation. Everything here is pure and synchronous, so it can be
//! called from any thread without coordination.
//!
//! There are currently four main entry points.
//!
//! ### 1. Free functions - Point ↔ Cell
//!
//! ```
//! use hexfog::{cell_to_boundary, cell_to_center, point_to_cell, GeoPoint, WORKING_RESOLUTION};
//!
//! # fn main() -> Result<(), hexfog::HexFogError> {
//! let point = GeoPoint::new(38.9907, -77.0261)?;
//! let cell = point_to_cell(&point, WORKING_RESOLUTION)?;
//! let center = cell_to_center(cell);
//! assert!(point.distance_m(&center)? < 350.0);
//! assert_eq!(cell_to_boundary(cell).len(), 6);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `HexCell` - Single Cell Operations
//!
//! ```
//! use hexfog::HexCell;
//!
//! # fn main() -> Result<(), hexfog::HexFogError> {
//! let cell = HexCell::from_lat_lng(38.9907, -77.0261)?;
//! println!("{}", cell.id);
//! let feature = cell.to_feature();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CellCollection` - Revealed Territory
//!
//! ```
//! use hexfog::{CellCollection, GeoPoint, to_geojson_string};
//!
//! # fn main() -> Result<(), hexfog::HexFogError> {
//! let mut team = CellCollection::new("blue");
//! team.reveal(&GeoPoint::new(38.9907, -77.0261)?)?;
//! let json = to_geojson_string(&team.to_region_collection())?;
//! assert!(json.contains(r#""type":"FeatureCollection""#));
//! # Ok(())
//! # }
//! ```
//!
//! ### 4. `csv_to_cell_csv` - CSV File Conversion
//!
//! ```no_run
//! use hexfog::{csv_to_cell_csv, CsvCellConfig};
//!
//! let config = CsvCellConfig::from_coords("latitude", "longitude").with_cell_geometry();
//! csv_to_cell_csv("checkins.csv", "cells.csv", &config).unwrap();
//! ```
//!

pub mod cell;
pub mod collection;
pub mod coord;
pub mod error;
pub mod geom;
pub mod index;
pub mod io;

pub use cell::HexCell;
pub use collection::CellCollection;
pub use coord::{Coordinate, GeoPoint};
pub use error::HexFogError;
pub use geom::{cell_polygon, cell_ring};
pub use index::{
    CELL_DIAMETER_M, CELL_INDEX_LEN, MAX_RESOLUTION, PROPERTY_CELL_INDEX, WORKING_RESOLUTION,
    cell_index_from_u64, cell_resolution, cell_to_boundary, cell_to_boundary_str, cell_to_center,
    cell_to_center_str, format_cell_index, grid_disk, parse_cell_index, point_to_cell,
};
pub use io::{
    CellsToGeoJson, CsvCellConfig, cell_feature, cells_to_region_collection,
    cells_to_region_collection_str, csv_to_cell_csv, read_cells_from_csv, to_geojson_string,
};

pub use geo_types;
pub use geojson;
pub use h3o;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_point_scenario() -> Result<(), HexFogError> {
        let point = GeoPoint::new(38.9907, -77.0261)?;
        let cell = point_to_cell(&point, WORKING_RESOLUTION)?;
        let id = format_cell_index(cell);

        assert_eq!(id.len(), CELL_INDEX_LEN);
        assert!(point.distance_m(&cell_to_center(cell))? < 350.0);

        let ring = cell_ring(cell);
        assert!((6..=7).contains(&ring.0.len()));
        assert_eq!(ring.0.first(), ring.0.last());

        // Walk 50 m toward the center: still inside the same cell.
        let center = cell_to_center(cell);
        let dist = point.distance_m(&center)?;
        let t = if dist > 0.0 { (50.0 / dist).min(1.0) } else { 0.0 };
        let nearby = GeoPoint::new(
            point.latitude + (center.latitude - point.latitude) * t,
            point.longitude + (center.longitude - point.longitude) * t,
        )?;
        assert_eq!(point_to_cell(&nearby, WORKING_RESOLUTION)?, cell);
        Ok(())
    }

    #[test]
    fn test_end_to_end_workflow() -> Result<(), HexFogError> {
        let mut team = CellCollection::new("blue");
        team.reveal(&GeoPoint::new(38.9907, -77.0261)?)?;
        team.reveal(&GeoPoint::new(38.8977, -77.0365)?)?;

        let fc = team.to_region_collection();
        assert_eq!(fc.features.len(), 2);

        for feature in &fc.features {
            let id = feature
                .property(PROPERTY_CELL_INDEX)
                .and_then(|v| v.as_str())
                .ok_or_else(|| HexFogError::Serialization("missing cellIndex".into()))?;
            let cell = HexCell::from_id(id)?;
            assert!(team.contains(cell.index));
        }
        Ok(())
    }

    #[test]
    fn test_hexcell_consistency_with_free_functions() -> Result<(), HexFogError> {
        let cell = HexCell::from_lat_lng(51.5007, -0.1246)?;
        let index = point_to_cell(&GeoPoint::new(51.5007, -0.1246)?, WORKING_RESOLUTION)?;

        assert_eq!(cell.index, index);
        assert_eq!(cell.id, format_cell_index(index));
        assert_eq!(cell.center, cell_to_center(index));
        assert_eq!(cell.to_polygon(), cell_polygon(index));
        Ok(())
    }

    #[test]
    fn test_concurrent_calls_agree() -> Result<(), HexFogError> {
        let point = GeoPoint::new(38.9907, -77.0261)?;
        let expected = point_to_cell(&point, WORKING_RESOLUTION)?;

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(move || point_to_cell(&point, WORKING_RESOLUTION)))
                .collect();
            for handle in handles {
                let result = handle.join().map_err(|_| HexFogError::Io("thread panicked".into()));
                assert_eq!(result.and_then(|r| r), Ok(expected));
            }
        });
        Ok(())
    }
}
