//! hexfog - hexagonal cell indexing from the command line
//!
//! Prints cell ids, centers and GeoJSON outlines, and converts check-in CSV
//! files into cell-keyed CSV files.

use clap::{Parser, Subcommand};
use hexfog::{
    CsvCellConfig, GeoPoint, HexCell, HexFogError, WORKING_RESOLUTION, cell_to_center_str,
    cells_to_region_collection_str, csv_to_cell_csv, to_geojson_string,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "hexfog", version, about = "Hexagonal cell indexing for territory maps")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the cell id containing a point
    Cell {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        #[arg(short, long, default_value_t = WORKING_RESOLUTION)]
        resolution: u8,
    },
    /// Print the center of a cell as `lat,lng`
    Center { cell: String },
    /// Print the outline of a cell as a GeoJSON Feature
    Boundary { cell: String },
    /// Print a GeoJSON FeatureCollection for a set of cells
    Region { cells: Vec<String> },
    /// Add a cell_index column to a CSV of check-ins
    Csv {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, default_value = "latitude")]
        lat_column: String,
        #[arg(long, default_value = "longitude")]
        lng_column: String,
        #[arg(short, long, default_value_t = WORKING_RESOLUTION)]
        resolution: u8,
        /// Include the cell outline as a GeoJSON column
        #[arg(long)]
        geometry: bool,
    },
}

fn run(command: Command) -> Result<String, HexFogError> {
    match command {
        Command::Cell {
            lat,
            lng,
            resolution,
        } => {
            let cell = HexCell::from_point(&GeoPoint::new(lat, lng)?, resolution)?;
            Ok(cell.id)
        }
        Command::Center { cell } => {
            let center = cell_to_center_str(&cell)?;
            Ok(format!("{},{}", center.latitude, center.longitude))
        }
        Command::Boundary { cell } => {
            let feature = HexCell::from_id(&cell)?.to_feature();
            Ok(serde_json::to_string(&feature)?)
        }
        Command::Region { cells } => {
            let collection = cells_to_region_collection_str(cells.iter().map(String::as_str))?;
            to_geojson_string(&collection)
        }
        Command::Csv {
            input,
            output,
            lat_column,
            lng_column,
            resolution,
            geometry,
        } => {
            let mut config = CsvCellConfig::from_coords(lat_column, lng_column).resolution(resolution);
            if geometry {
                config = config.with_cell_geometry();
            }
            csv_to_cell_csv(&input, &output, &config)?;
            Ok(format!("wrote {}", output.display()))
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args.command) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
