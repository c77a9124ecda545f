/// Resolution every convenience entry point uses.
///
/// Fixed for the lifetime of the process: mixing resolutions would map the same
/// point to different cells and break deduplicated territory reveal.
pub const WORKING_RESOLUTION: u8 = 9;

/// Finest resolution of the tessellation.
pub const MAX_RESOLUTION: u8 = 15;

/// Length of the canonical hexadecimal cell index string.
pub const CELL_INDEX_LEN: usize = 15;

/// GeoJSON property key carrying the originating cell index of a feature.
pub const PROPERTY_CELL_INDEX: &str = "cellIndex";

/// Approximate cell diameter in meters for each resolution (0-15).
///
/// Twice the average hexagon edge length. A regular hexagon's circumradius
/// equals its edge, so this is the across-corners width.
pub const CELL_DIAMETER_M: [f64; 16] = [
    2_562_512.0,
    966_114.0,
    365_026.0,
    137_958.0,
    52_144.0,
    19_708.0,
    7_450.0,
    2_812.0,
    1_062.0,
    402.0,
    151.8,
    57.4,
    21.7,
    8.2,
    3.1,
    1.2,
];
