use crate::cell::HexCell;
use crate::coord::Coordinate;
use crate::error::HexFogError;
use crate::index::{
    WORKING_RESOLUTION, format_cell_index, grid_disk, parse_cell_index, point_to_cell,
};
use crate::io::geojson::cells_to_region_collection;
use geojson::FeatureCollection;
use h3o::CellIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named, grow-only set of revealed cells.
///
/// Cells can only be added, matching how territory is revealed and never
/// hidden again. Iteration is in ascending cell index order, so rendering the
/// same membership always produces the same output.
///
/// # Example
///
/// ```
/// use hexfog::{CellCollection, GeoPoint};
///
/// # fn main() -> Result<(), hexfog::HexFogError> {
/// let mut party = CellCollection::new("blue-team");
/// assert!(party.reveal(&GeoPoint::new(38.9907, -77.0261)?)?);
/// // Checking in again in the same cell reveals nothing new.
/// assert!(!party.reveal(&GeoPoint::new(38.9907, -77.0261)?)?);
///
/// let fc = party.to_region_collection();
/// assert_eq!(fc.features.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CollectionRecord", into = "CollectionRecord")]
pub struct CellCollection {
    name: String,
    cells: BTreeSet<CellIndex>,
}

impl CellCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeSet::new(),
        }
    }

    /// Builds a collection from string ids, failing on the first malformed one.
    pub fn from_ids<'a>(
        name: impl Into<String>,
        ids: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, HexFogError> {
        let mut collection = Self::new(name);
        for id in ids {
            collection.insert(parse_cell_index(id)?);
        }
        Ok(collection)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: CellIndex) -> bool {
        self.cells.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells.iter().copied()
    }

    /// Canonical string ids in ascending order.
    pub fn ids(&self) -> Vec<String> {
        self.iter().map(format_cell_index).collect()
    }

    /// Adds a cell. Returns true if it was not already revealed.
    pub fn insert(&mut self, cell: CellIndex) -> bool {
        self.cells.insert(cell)
    }

    /// Reveals the working-resolution cell containing `coord`.
    ///
    /// Returns true if the cell was newly revealed.
    pub fn reveal(&mut self, coord: &impl Coordinate) -> Result<bool, HexFogError> {
        let cell = point_to_cell(coord, WORKING_RESOLUTION)?;
        Ok(self.insert(cell))
    }

    /// Reveals every cell within `k` grid steps of the cell containing `coord`.
    ///
    /// Returns how many cells were newly revealed.
    #[tracing::instrument(skip(self, coord), fields(collection = %self.name))]
    pub fn reveal_around(&mut self, coord: &impl Coordinate, k: u32) -> Result<usize, HexFogError> {
        let origin = point_to_cell(coord, WORKING_RESOLUTION)?;
        let before = self.cells.len();
        self.cells.extend(grid_disk(origin, k));

        let added = self.cells.len() - before;
        tracing::debug!(added, total = self.cells.len(), "revealed disk");
        Ok(added)
    }

    /// Adds every cell of `other`. Returns how many were new.
    pub fn merge(&mut self, other: &CellCollection) -> usize {
        let before = self.cells.len();
        self.cells.extend(other.iter());
        self.cells.len() - before
    }

    /// Materialises the revealed cells as [`HexCell`]s.
    pub fn to_hex_cells(&self) -> Vec<HexCell> {
        self.iter().map(HexCell::from).collect()
    }

    /// Renders every revealed cell as a GeoJSON `FeatureCollection`.
    pub fn to_region_collection(&self) -> FeatureCollection {
        cells_to_region_collection(self.iter())
    }
}

impl Extend<CellIndex> for CellCollection {
    fn extend<T: IntoIterator<Item = CellIndex>>(&mut self, iter: T) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CellCollection {
    type Item = CellIndex;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, CellIndex>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().copied()
    }
}

/// Serialized form: cells as canonical string ids.
#[derive(Serialize, Deserialize)]
struct CollectionRecord {
    name: String,
    cells: Vec<String>,
}

impl From<CellCollection> for CollectionRecord {
    fn from(collection: CellCollection) -> Self {
        Self {
            cells: collection.ids(),
            name: collection.name,
        }
    }
}

impl TryFrom<CollectionRecord> for CellCollection {
    type Error = HexFogError;

    fn try_from(record: CollectionRecord) -> Result<Self, Self::Error> {
        CellCollection::from_ids(record.name, record.cells.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::GeoPoint;

    #[test]
    fn test_reveal_is_idempotent() -> Result<(), HexFogError> {
        let mut collection = CellCollection::new("red");
        let point = GeoPoint::new(38.9907, -77.0261)?;

        assert!(collection.reveal(&point)?);
        assert!(!collection.reveal(&point)?);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.name(), "red");
        Ok(())
    }

    #[test]
    fn test_reveal_invalid_point() {
        let mut collection = CellCollection::new("red");
        let point = GeoPoint {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(collection.reveal(&point).is_err());
        assert!(collection.is_empty());
    }

    #[test]
    fn test_reveal_around() -> Result<(), HexFogError> {
        let mut collection = CellCollection::new("red");
        let point = GeoPoint::new(38.9907, -77.0261)?;

        assert_eq!(collection.reveal_around(&point, 1)?, 7);
        assert_eq!(collection.reveal_around(&point, 1)?, 0);
        // Radius 2 adds the next ring of 12.
        assert_eq!(collection.reveal_around(&point, 2)?, 12);
        assert_eq!(collection.len(), 19);
        Ok(())
    }

    #[test]
    fn test_merge_is_union() -> Result<(), HexFogError> {
        let mut a = CellCollection::new("a");
        let mut b = CellCollection::new("b");
        a.reveal(&GeoPoint::new(38.9907, -77.0261)?)?;
        b.reveal(&GeoPoint::new(38.9907, -77.0261)?)?;
        b.reveal(&GeoPoint::new(40.7484, -73.9857)?)?;

        assert_eq!(a.merge(&b), 1);
        assert_eq!(a.len(), 2);
        assert_eq!(a.merge(&b), 0);
        Ok(())
    }

    #[test]
    fn test_iteration_sorted() -> Result<(), HexFogError> {
        let mut collection = CellCollection::new("red");
        collection.reveal(&GeoPoint::new(51.5007, -0.1246)?)?;
        collection.reveal(&GeoPoint::new(-33.8568, 151.2153)?)?;
        collection.reveal(&GeoPoint::new(38.9907, -77.0261)?)?;

        let ids = collection.ids();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        Ok(())
    }

    #[test]
    fn test_from_ids() -> Result<(), HexFogError> {
        let collection =
            CellCollection::from_ids("x", ["8a1fb46622dffff", "8a1fb46622dffff"])?;
        assert_eq!(collection.len(), 1);

        let bad = CellCollection::from_ids("x", ["8a1fb46622dffff", "bogus"]);
        assert!(matches!(bad, Err(HexFogError::InvalidCellIndex(_))));
        Ok(())
    }

    #[test]
    fn test_serde_roundtrip() -> Result<(), HexFogError> {
        let mut collection = CellCollection::new("green");
        collection.reveal_around(&GeoPoint::new(38.9907, -77.0261)?, 1)?;

        let json = serde_json::to_string(&collection)?;
        assert!(json.contains("\"name\":\"green\""));

        let restored: CellCollection = serde_json::from_str(&json)?;
        assert_eq!(restored, collection);
        Ok(())
    }

    #[test]
    fn test_deserialize_rejects_bad_ids() {
        let json = r#"{"name":"green","cells":["zzz"]}"#;
        let result: Result<CellCollection, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_region_collection() {
        let collection = CellCollection::new("empty");
        let fc = collection.to_region_collection();
        assert!(fc.features.is_empty());
    }

    #[test]
    fn test_to_hex_cells() -> Result<(), HexFogError> {
        let mut collection = CellCollection::new("red");
        collection.reveal(&GeoPoint::new(38.9907, -77.0261)?)?;
        let cells = collection.to_hex_cells();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].resolution, WORKING_RESOLUTION);
        Ok(())
    }
}
