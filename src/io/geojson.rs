use crate::cell::HexCell;
use crate::error::HexFogError;
use crate::geom::cell_polygon;
use crate::index::{PROPERTY_CELL_INDEX, format_cell_index, parse_cell_index};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue};
use h3o::CellIndex;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Converts one cell to a GeoJSON `Feature`.
///
/// # Shape
///
/// ```json
/// {
///   "type": "Feature",
///   "properties": { "cellIndex": "892aa8d6d1bffff" },
///   "geometry": { "type": "Polygon", "coordinates": [[[lng, lat], ..., [lng, lat]]] }
/// }
/// ```
///
/// The ring is closed and positions are `[longitude, latitude]`.
pub fn cell_feature(cell: CellIndex) -> Feature {
    let polygon = cell_polygon(cell);

    let mut properties = JsonObject::new();
    properties.insert(
        PROPERTY_CELL_INDEX.to_string(),
        JsonValue::String(format_cell_index(cell)),
    );

    Feature {
        bbox: None,
        geometry: Some(Geometry::from(&polygon)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Converts a set of cells into a renderable `FeatureCollection`.
///
/// Input is treated as a set: duplicates collapse and input order is ignored.
/// Features come out sorted by cell index, which for the fixed-length
/// lowercase ids is also lexicographic order, so output is reproducible.
/// An empty input yields a collection with an empty `features` array.
///
/// # Example
/// ```
/// use hexfog::{cells_to_region_collection, point_to_cell, GeoPoint};
///
/// # fn main() -> Result<(), hexfog::HexFogError> {
/// let cell = point_to_cell(&GeoPoint::new(38.9907, -77.0261)?, 9)?;
/// let fc = cells_to_region_collection([cell, cell]);
/// assert_eq!(fc.features.len(), 1);
///
/// let empty = cells_to_region_collection(Vec::new());
/// assert!(empty.features.is_empty());
/// # Ok(())
/// # }
/// ```
#[tracing::instrument(skip_all, name = "io::cells_to_region_collection")]
pub fn cells_to_region_collection(cells: impl IntoIterator<Item = CellIndex>) -> FeatureCollection {
    let unique: Vec<CellIndex> = cells.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    let features: Vec<Feature> = unique.par_iter().map(|&cell| cell_feature(cell)).collect();
    tracing::debug!(features = features.len(), "built region collection");

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// [`cells_to_region_collection`] for string ids.
///
/// Fails with [`HexFogError::InvalidCellIndex`] on the first malformed id.
pub fn cells_to_region_collection_str<'a>(
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<FeatureCollection, HexFogError> {
    let cells = ids
        .into_iter()
        .map(parse_cell_index)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(cells_to_region_collection(cells))
}

/// Serializes a `FeatureCollection` to a JSON string.
pub fn to_geojson_string(collection: &FeatureCollection) -> Result<String, HexFogError> {
    Ok(serde_json::to_string(collection)?)
}

/// Trait for converting collections of [`HexCell`]s to GeoJSON.
///
/// Implemented for `[HexCell]` and `Vec<HexCell>`.
pub trait CellsToGeoJson {
    /// Converts cells to a deduplicated, sorted `FeatureCollection`.
    fn to_feature_collection(&self) -> FeatureCollection;
}

impl CellsToGeoJson for [HexCell] {
    fn to_feature_collection(&self) -> FeatureCollection {
        cells_to_region_collection(self.iter().map(|c| c.index))
    }
}

impl CellsToGeoJson for Vec<HexCell> {
    fn to_feature_collection(&self) -> FeatureCollection {
        self.as_slice().to_feature_collection()
    }
}
