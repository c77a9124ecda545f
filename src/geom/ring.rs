use crate::coord::GeoPoint;
use crate::index::cell_to_boundary;
use geo::Winding;
use geo_types::{Coord, LineString, Polygon};
use h3o::CellIndex;

/// Builds the closed outline ring of a cell in `(x = lng, y = lat)` order.
///
/// This is the one place where the latitude-first [`GeoPoint`] is swapped into
/// the longitude-first axis order GeoJSON uses. The ring is explicitly closed
/// (first vertex repeated as the last) and wound counter-clockwise.
pub fn cell_ring(cell: CellIndex) -> LineString<f64> {
    let boundary = cell_to_boundary(cell);
    let mut coords: Vec<Coord<f64>> = Vec::with_capacity(boundary.len() + 1);

    for vertex in &boundary {
        coords.push(to_coord(vertex));
    }
    if let Some(first) = coords.first().copied() {
        coords.push(first);
    }

    let mut ring = LineString::from(coords);
    // Planar winding is meaningless once the ring wraps across ±180°; there we
    // keep the tessellation's own order, which is already counter-clockwise.
    if !crosses_antimeridian(&ring) {
        ring.make_ccw_winding();
    }
    ring
}

/// Builds the cell outline as a `geo_types::Polygon` with no interior rings.
pub fn cell_polygon(cell: CellIndex) -> Polygon<f64> {
    Polygon::new(cell_ring(cell), vec![])
}

/// True when consecutive vertices jump by more than half the globe in longitude.
pub fn crosses_antimeridian(ring: &LineString<f64>) -> bool {
    ring.0.windows(2).any(|w| (w[1].x - w[0].x).abs() > 180.0)
}

fn to_coord(point: &GeoPoint) -> Coord<f64> {
    Coord {
        x: point.longitude,
        y: point.latitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::point_to_cell;
    use h3o::Resolution;

    fn reference_cell() -> CellIndex {
        let point = GeoPoint {
            latitude: 38.9907,
            longitude: -77.0261,
        };
        point_to_cell(&point, 9).unwrap()
    }

    #[test]
    fn test_ring_is_closed() {
        let ring = cell_ring(reference_cell());
        assert_eq!(ring.0.len(), 7); // 6 vertices + 1 to close
        assert_eq!(ring.0[0], ring.0[6]);
        assert!(ring.is_closed());
    }

    #[test]
    fn test_ring_axis_order() {
        let ring = cell_ring(reference_cell());
        for c in ring.coords() {
            assert!((c.x - -77.0261).abs() < 0.01, "x must be longitude");
            assert!((c.y - 38.9907).abs() < 0.01, "y must be latitude");
        }
    }

    #[test]
    fn test_ring_is_counter_clockwise() {
        let ring = cell_ring(reference_cell());
        assert!(ring.is_ccw());
    }

    #[test]
    fn test_pentagon_ring() {
        for res in [Resolution::Two, Resolution::Nine] {
            for pentagon in res.pentagons() {
                let ring = cell_ring(pentagon);
                assert_eq!(ring.0.len(), 6); // 5 vertices + 1 to close
                assert_eq!(ring.0.first(), ring.0.last());
            }
        }
    }

    #[test]
    fn test_polygon_has_no_holes() {
        let polygon = cell_polygon(reference_cell());
        assert!(polygon.interiors().is_empty());
        assert_eq!(polygon.exterior().coords().count(), 7);
    }

    #[test]
    fn test_antimeridian_detection() {
        let wrapped = LineString::from(vec![(179.9, 0.0), (-179.9, 0.1), (179.9, 0.0)]);
        assert!(crosses_antimeridian(&wrapped));

        let ring = cell_ring(reference_cell());
        assert!(!crosses_antimeridian(&ring));
    }
}
