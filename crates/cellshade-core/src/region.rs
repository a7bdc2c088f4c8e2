//! Rectangular regions and multi-region selections

use std::fmt;
use std::str::FromStr;

use crate::address::CellAddress;
use crate::error::{Error, Result};

/// A rectangular block of cells, identified by its corner addresses.
///
/// Regions are always normalized: `start` is the top-left corner and `end`
/// the bottom-right, so parsing "B2:A1" yields the same region as "A1:B2".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Top-left corner
    pub start: CellAddress,
    /// Bottom-right corner (inclusive)
    pub end: CellAddress,
}

impl Region {
    /// Create a region from two corners, normalizing their order
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        Self {
            start: CellAddress::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellAddress::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Create a single-cell region
    pub fn cell(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Parse from A1 notation: "A1:B2", or "B3" for a single cell
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once(':') {
            Some((a, b)) => {
                if a.is_empty() || b.is_empty() {
                    return Err(Error::InvalidRange(s.to_string()));
                }
                Ok(Self::new(CellAddress::parse(a)?, CellAddress::parse(b)?))
            }
            None => Ok(Self::cell(CellAddress::parse(s)?)),
        }
    }

    /// Number of rows in the region
    pub fn rows(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Number of columns in the region
    pub fn cols(&self) -> u16 {
        self.end.col - self.start.col + 1
    }

    /// Total number of cells
    pub fn cell_count(&self) -> u64 {
        self.rows() as u64 * self.cols() as u64
    }

    /// Whether the address falls inside the region
    pub fn contains(&self, addr: CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Whether two regions share at least one cell
    pub fn overlaps(&self, other: &Region) -> bool {
        self.start.row <= other.end.row
            && other.start.row <= self.end.row
            && self.start.col <= other.end.col
            && other.start.col <= self.end.col
    }

    /// Iterate over every cell address in the region, row-major
    pub fn cells(&self) -> impl Iterator<Item = CellAddress> + '_ {
        (self.start.row..=self.end.row).flat_map(move |row| {
            (self.start.col..=self.end.col).map(move |col| CellAddress::new(row, col))
        })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// The set of regions currently selected in the active sheet.
///
/// Ordered, non-empty, and pairwise disjoint. A selection is read fresh from
/// the host per command invocation and never cached across invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    regions: Vec<Region>,
}

impl Selection {
    /// Create a selection from one or more regions, validating disjointness
    pub fn new(regions: Vec<Region>) -> Result<Self> {
        if regions.is_empty() {
            return Err(Error::EmptySelection);
        }
        for (i, a) in regions.iter().enumerate() {
            for b in &regions[i + 1..] {
                if a.overlaps(b) {
                    return Err(Error::OverlappingRegions(a.to_string(), b.to_string()));
                }
            }
        }
        Ok(Self { regions })
    }

    /// Create a single-region selection
    pub fn single(region: Region) -> Self {
        Self {
            regions: vec![region],
        }
    }

    /// Parse from a comma-separated list of A1 ranges: "A1:A2,C1:C2"
    pub fn parse(s: &str) -> Result<Self> {
        let regions = s
            .split(',')
            .map(Region::parse)
            .collect::<Result<Vec<_>>>()?;
        Self::new(regions)
    }

    /// The regions in selection order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of regions (areas) in the selection
    pub fn area_count(&self) -> usize {
        self.regions.len()
    }

    /// Total number of cells across all regions
    pub fn cell_count(&self) -> u64 {
        self.regions.iter().map(Region::cell_count).sum()
    }

    /// Iterate over every cell address across all regions
    pub fn cells(&self) -> impl Iterator<Item = CellAddress> + '_ {
        self.regions.iter().flat_map(Region::cells)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, region) in self.regions.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{region}")?;
        }
        Ok(())
    }
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_range() {
        let r = Region::parse("A1:B2").unwrap();
        assert_eq!(r.start, CellAddress::new(0, 0));
        assert_eq!(r.end, CellAddress::new(1, 1));
        assert_eq!(r.cell_count(), 4);
    }

    #[test]
    fn test_parse_single_cell() {
        let r = Region::parse("B3").unwrap();
        assert_eq!(r.start, r.end);
        assert_eq!(r.to_string(), "B3");
    }

    #[test]
    fn test_reversed_corners_normalize() {
        assert_eq!(Region::parse("B2:A1").unwrap(), Region::parse("A1:B2").unwrap());
    }

    #[test]
    fn test_parse_invalid_range() {
        assert!(Region::parse("A1:").is_err());
        assert!(Region::parse(":B2").is_err());
        assert!(Region::parse("A0:B2").is_err());
    }

    #[test]
    fn test_cells_iteration_row_major() {
        let r = Region::parse("A1:B2").unwrap();
        let cells: Vec<String> = r.cells().map(|a| a.to_string()).collect();
        assert_eq!(cells, vec!["A1", "B1", "A2", "B2"]);
    }

    #[test]
    fn test_selection_disjoint() {
        let sel = Selection::parse("A1:A2,C1:C2").unwrap();
        assert_eq!(sel.area_count(), 2);
        assert_eq!(sel.cell_count(), 4);
    }

    #[test]
    fn test_selection_overlap_rejected() {
        let err = Selection::parse("A1:B2,B2:C3").unwrap_err();
        assert!(matches!(err, Error::OverlappingRegions(_, _)));
    }

    #[test]
    fn test_selection_empty_rejected() {
        assert!(matches!(Selection::new(vec![]), Err(Error::EmptySelection)));
    }

    #[test]
    fn test_selection_display() {
        let sel = Selection::parse("A1:A2,C1:C2").unwrap();
        assert_eq!(sel.to_string(), "A1:A2,C1:C2");
    }
}
