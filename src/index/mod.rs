pub mod constants;
mod identifier;
mod indexing;

pub use constants::{
    CELL_DIAMETER_M, CELL_INDEX_LEN, MAX_RESOLUTION, PROPERTY_CELL_INDEX, WORKING_RESOLUTION,
};
pub use identifier::{cell_index_from_u64, format_cell_index, parse_cell_index};
pub use indexing::{
    cell_resolution, cell_to_boundary, cell_to_boundary_str, cell_to_center, cell_to_center_str,
    grid_disk, point_to_cell, resolution_from_u8,
};
