mod parse;
mod ring;

pub use parse::parse_geojson_points;
pub use ring::{cell_polygon, cell_ring, crosses_antimeridian};
