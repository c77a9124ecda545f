pub mod csv;
pub mod geojson;

pub use self::csv::{
    CELL_GEOMETRY_COLUMN, CELL_INDEX_COLUMN, CoordinateSource, CsvCellConfig, csv_to_cell_csv,
    read_cells_from_csv,
};
pub use self::geojson::{
    CellsToGeoJson, cell_feature, cells_to_region_collection, cells_to_region_collection_str,
    to_geojson_string,
};
