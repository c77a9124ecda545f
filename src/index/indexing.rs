use crate::coord::{Coordinate, GeoPoint};
use crate::error::HexFogError;
use crate::index::constants::MAX_RESOLUTION;
use crate::index::identifier::parse_cell_index;
use h3o::{CellIndex, LatLng, Resolution};

/// Validates a resolution level and converts it to the tessellation's type.
pub fn resolution_from_u8(resolution: u8) -> Result<Resolution, HexFogError> {
    if resolution > MAX_RESOLUTION {
        return Err(HexFogError::UnsupportedResolution(resolution));
    }
    Resolution::try_from(resolution).map_err(|_| HexFogError::UnsupportedResolution(resolution))
}

/// Returns the cell containing a point at the given resolution.
///
/// Pure and deterministic: identical inputs always yield the identical cell.
///
/// # Errors
///
/// - [`HexFogError::InvalidCoordinate`] - latitude/longitude non-finite or out of range
/// - [`HexFogError::UnsupportedResolution`] - resolution above 15
pub fn point_to_cell<C: Coordinate>(coord: &C, resolution: u8) -> Result<CellIndex, HexFogError> {
    let res = resolution_from_u8(resolution)?;
    let point = GeoPoint::from_coordinate(coord)?;
    Ok(point.to_lat_lng()?.to_cell(res))
}

/// Returns the geometric center of a cell.
pub fn cell_to_center(cell: CellIndex) -> GeoPoint {
    GeoPoint::from(LatLng::from(cell))
}

/// Returns the topological vertices of a cell, in ring order.
///
/// Always 6 for a hexagon and 5 for a pentagon, at every resolution. The
/// extra points `CellIndex::boundary` inserts where a class III cell bends
/// across an icosahedron edge are left out.
/// The ring is open here; [`crate::geom::cell_ring`] closes it.
pub fn cell_to_boundary(cell: CellIndex) -> Vec<GeoPoint> {
    cell.vertexes().map(LatLng::from).map(GeoPoint::from).collect()
}

/// [`cell_to_center`] for a cell given by its string id.
pub fn cell_to_center_str(identifier: &str) -> Result<GeoPoint, HexFogError> {
    parse_cell_index(identifier).map(cell_to_center)
}

/// [`cell_to_boundary`] for a cell given by its string id.
pub fn cell_to_boundary_str(identifier: &str) -> Result<Vec<GeoPoint>, HexFogError> {
    parse_cell_index(identifier).map(cell_to_boundary)
}

/// Returns the resolution of a cell as a plain integer.
pub fn cell_resolution(cell: CellIndex) -> u8 {
    u8::from(cell.resolution())
}

/// Returns all cells within `k` grid steps of `cell`, including `cell` itself.
pub fn grid_disk(cell: CellIndex, k: u32) -> Vec<CellIndex> {
    cell.grid_disk::<Vec<_>>(k)
}
