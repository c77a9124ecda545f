use crate::coord::{Coordinate, GeoPoint};
use crate::error::HexFogError;
use crate::geom::cell_polygon;
use crate::index::{
    WORKING_RESOLUTION, cell_resolution, cell_to_boundary, cell_to_center, format_cell_index,
    grid_disk, parse_cell_index, point_to_cell,
};
use crate::io::geojson::cell_feature;
use geo_types::Polygon;
use geojson::Feature;
use h3o::CellIndex;

/// A single hexagonal cell of the global tessellation.
///
/// Each `HexCell` bundles the canonical string id, the raw index, the center
/// point and the resolution, so map code can hold one value instead of
/// re-deriving them.
///
/// # Example
///
/// ```
/// use hexfog::HexCell;
///
/// # fn main() -> Result<(), hexfog::HexFogError> {
/// let cell = HexCell::from_lat_lng(38.9907, -77.0261)?;
/// println!("Cell ID: {}", cell.id);
/// println!("Center: ({}, {})", cell.latitude(), cell.longitude());
///
/// // Closed outline ready for rendering
/// let polygon = cell.to_polygon();
/// assert_eq!(polygon.exterior().coords().count(), 7);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HexCell {
    /// Canonical 15 character hexadecimal id
    pub id: String,
    /// Raw tessellation index
    pub index: CellIndex,
    /// Center point of the cell
    pub center: GeoPoint,
    /// Resolution (0-15), where higher values mean smaller cells
    pub resolution: u8,
}

impl HexCell {
    pub(crate) fn new(index: CellIndex) -> Self {
        Self {
            id: format_cell_index(index),
            index,
            center: cell_to_center(index),
            resolution: cell_resolution(index),
        }
    }

    /// Create a HexCell from a point at an explicit resolution.
    ///
    /// # Example
    /// ```
    /// use hexfog::{GeoPoint, HexCell};
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), hexfog::HexFogError> {
    /// let cell = HexCell::from_point(&GeoPoint::new(38.9907, -77.0261)?, 9)?;
    /// // geo_types points are (x = lng, y = lat)
    /// let same = HexCell::from_point(&Point::new(-77.0261, 38.9907), 9)?;
    /// assert_eq!(cell.id, same.id);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_point(coord: &impl Coordinate, resolution: u8) -> Result<Self, HexFogError> {
        let index = point_to_cell(coord, resolution)?;
        Ok(Self::new(index))
    }

    /// Create a HexCell at the working resolution.
    pub fn from_lat_lng(latitude: f64, longitude: f64) -> Result<Self, HexFogError> {
        let point = GeoPoint::new(latitude, longitude)?;
        Self::from_point(&point, WORKING_RESOLUTION)
    }

    /// Create a HexCell from its string id
    ///
    /// # Example
    /// ```
    /// use hexfog::HexCell;
    ///
    /// # fn main() -> Result<(), hexfog::HexFogError> {
    /// let cell = HexCell::from_lat_lng(38.9907, -77.0261)?;
    /// let restored = HexCell::from_id(&cell.id)?;
    /// assert_eq!(cell, restored);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_id(id: &str) -> Result<Self, HexFogError> {
        parse_cell_index(id).map(Self::new)
    }

    pub fn latitude(&self) -> f64 {
        self.center.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.center.longitude
    }

    pub fn is_pentagon(&self) -> bool {
        self.index.is_pentagon()
    }

    /// Distinct boundary vertices, open ring.
    pub fn boundary(&self) -> Vec<GeoPoint> {
        cell_to_boundary(self.index)
    }

    /// Converts this cell to a closed, counter-clockwise polygon in
    /// `(x = lng, y = lat)` order, suitable for spatial operations or GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        cell_polygon(self.index)
    }

    /// Converts this cell to a GeoJSON Feature tagged with its id.
    pub fn to_feature(&self) -> Feature {
        cell_feature(self.index)
    }

    /// Cells within `k` grid steps of this one, including itself.
    pub fn neighbors(&self, k: u32) -> Vec<HexCell> {
        grid_disk(self.index, k)
            .into_iter()
            .map(HexCell::new)
            .collect()
    }

    /// Great-circle distance from the cell center to `coord`, in meters.
    pub fn distance_to(&self, coord: &impl Coordinate) -> Result<f64, HexFogError> {
        self.center.distance_m(coord)
    }

    /// True when `coord` falls inside this cell.
    pub fn contains(&self, coord: &impl Coordinate) -> Result<bool, HexFogError> {
        Ok(point_to_cell(coord, self.resolution)? == self.index)
    }
}

impl From<CellIndex> for HexCell {
    fn from(index: CellIndex) -> Self {
        Self::new(index)
    }
}

impl std::fmt::Display for HexCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}
