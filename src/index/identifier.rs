use crate::error::HexFogError;
use crate::index::constants::CELL_INDEX_LEN;
use h3o::CellIndex;
use std::str::FromStr;

/// Formats a cell index as its canonical string.
///
/// # Format
///
/// The string is the 64-bit H3 index written as lowercase hexadecimal without
/// a prefix. The top bit of a cell index is always zero and the mode nibble is
/// always `1`, so every resolution produces exactly [`CELL_INDEX_LEN`] (15)
/// characters:
///
/// | Bits  | Field       | Description                                  |
/// |-------|-------------|----------------------------------------------|
/// | 63    | Reserved    | Always 0                                     |
/// | 59-62 | Mode        | 1 for a cell                                 |
/// | 56-58 | Reserved    | Always 0 for a cell                          |
/// | 52-55 | Resolution  | 0-15                                         |
/// | 45-51 | Base cell   | One of the 122 base cells                    |
/// | 0-44  | Digits      | 15 three-bit child digits, unused ones are 7 |
///
/// This string is the deduplication key for revealed territory, so it must
/// match any other H3 implementation bit for bit.
///
/// # Example
/// ```
/// use hexfog::{format_cell_index, point_to_cell, GeoPoint};
///
/// # fn main() -> Result<(), hexfog::HexFogError> {
/// let cell = point_to_cell(&GeoPoint::new(38.9907, -77.0261)?, 9)?;
/// let id = format_cell_index(cell);
/// assert_eq!(id.len(), 15);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
/// # Ok(())
/// # }
/// ```
pub fn format_cell_index(cell: CellIndex) -> String {
    format!("{:015x}", u64::from(cell))
}

/// Parses a canonical cell index string.
///
/// Accepts exactly [`CELL_INDEX_LEN`] hexadecimal characters. Upper-case digits
/// are accepted and normalised, since the numeric value is what identifies the
/// cell. Anything else (wrong length, prefixes, whitespace, non-cell modes,
/// invalid base cells or digits) fails with [`HexFogError::InvalidCellIndex`].
///
/// # Example
/// ```
/// use hexfog::{format_cell_index, parse_cell_index};
///
/// # fn main() -> Result<(), hexfog::HexFogError> {
/// let cell = parse_cell_index("8a1fb46622dffff")?;
/// assert_eq!(format_cell_index(cell), "8a1fb46622dffff");
/// assert!(parse_cell_index("not-a-cell").is_err());
/// # Ok(())
/// # }
/// ```
pub fn parse_cell_index(identifier: &str) -> Result<CellIndex, HexFogError> {
    if identifier.len() != CELL_INDEX_LEN || !identifier.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexFogError::InvalidCellIndex(identifier.to_string()));
    }

    CellIndex::from_str(identifier)
        .map_err(|_| HexFogError::InvalidCellIndex(identifier.to_string()))
}

/// Converts a raw 64-bit value into a cell index.
pub fn cell_index_from_u64(value: u64) -> Result<CellIndex, HexFogError> {
    CellIndex::try_from(value).map_err(|_| HexFogError::InvalidCellIndex(format!("{value:#x}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_parse_identifier() -> Result<(), HexFogError> {
        let cell = parse_cell_index("8a1fb46622dffff")?;
        let id = format_cell_index(cell);

        assert_eq!(id, "8a1fb46622dffff");
        assert_eq!(id.len(), CELL_INDEX_LEN);
        assert_eq!(parse_cell_index(&id)?, cell);
        Ok(())
    }

    #[test]
    fn test_uppercase_normalised() -> Result<(), HexFogError> {
        let cell = parse_cell_index("8A1FB46622DFFFF")?;
        assert_eq!(format_cell_index(cell), "8a1fb46622dffff");
        Ok(())
    }

    #[test]
    fn test_invalid_identifier() {
        for bad in [
            "",
            "invalid",
            "0x8a1fb46622dff",
            " 8a1fb46622dfff",
            "8a1fb46622dffffff",
            "8a1fb46622dfffg",
        ] {
            let result = parse_cell_index(bad);
            assert!(
                matches!(result, Err(HexFogError::InvalidCellIndex(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_cell_mode_rejected() {
        // Right length and all hex, but mode 0 is not a cell.
        assert!(parse_cell_index("0a1fb46622dffff").is_err());
    }

    #[test]
    fn test_from_u64() -> Result<(), HexFogError> {
        let cell = cell_index_from_u64(0x8a1fb46622dffff)?;
        assert_eq!(format_cell_index(cell), "8a1fb46622dffff");
        assert!(cell_index_from_u64(0).is_err());
        Ok(())
    }
}
