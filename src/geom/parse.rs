use crate::coord::GeoPoint;
use crate::error::HexFogError;
use geo_types::Geometry;
use geojson::GeoJson;

/// Parses check-in locations from a GeoJSON string.
///
/// Accepts a bare geometry or a `Feature`. `Point` yields one location and
/// `MultiPoint` one per member; every other geometry type is rejected because
/// a check-in is always a position.
pub fn parse_geojson_points(s: &str) -> Result<Vec<GeoPoint>, HexFogError> {
    let geojson: GeoJson = s
        .trim()
        .parse()
        .map_err(|e: geojson::Error| {
            HexFogError::GeometryParse(format!("invalid GeoJSON: {e}"))
        })?;

    let geometry = match geojson {
        GeoJson::Geometry(geom) => geom,
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| HexFogError::GeometryParse("Feature has no geometry".to_string()))?,
        GeoJson::FeatureCollection(_) => {
            return Err(HexFogError::GeometryParse(
                "FeatureCollection not supported, use individual geometries".to_string(),
            ));
        }
    };

    let geometry = Geometry::<f64>::try_from(geometry)
        .map_err(|e| HexFogError::GeometryParse(format!("invalid GeoJSON geometry: {e}")))?;

    match geometry {
        Geometry::Point(pt) => Ok(vec![GeoPoint::new(pt.y(), pt.x())?]),
        Geometry::MultiPoint(mp) => mp
            .0
            .iter()
            .map(|pt| GeoPoint::new(pt.y(), pt.x()))
            .collect(),
        _ => Err(HexFogError::GeometryParse(
            "Unsupported geometry type, expected Point or MultiPoint".to_string(),
        )),
    }
}
