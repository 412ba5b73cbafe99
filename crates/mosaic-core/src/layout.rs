use serde::{Deserialize, Serialize};

use crate::error::{MosaicError, Result};

/// Grid geometry derived from the source dimensions, column count and spacing.
///
/// Every slot shares one cell size: the elementwise maximum of all source
/// dimensions. Sources smaller than the cell sit at the cell's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Number of sources placed in the grid.
    pub count: usize,
    pub cols: u32,
    pub rows: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub spacing: u32,
    pub total_width: u32,
    pub total_height: u32,
}

impl GridLayout {
    /// Compute the layout for sources of the given `(width, height)` sizes.
    pub fn from_sizes(sizes: &[(u32, u32)], cols: u32, spacing: u32) -> Result<Self> {
        check_inputs(sizes.len(), cols)?;

        let cell_width = sizes.iter().map(|&(w, _)| w).max().unwrap_or(0);
        let cell_height = sizes.iter().map(|&(_, h)| h).max().unwrap_or(0);

        let rows = u32::try_from(sizes.len().div_ceil(cols as usize))
            .map_err(|_| MosaicError::InvalidLayout(format!("too many images ({})", sizes.len())))?;

        let total_width = span(cell_width, cols, spacing).ok_or_else(|| {
            MosaicError::InvalidLayout(format!(
                "output width overflows: {cols} columns of {cell_width} px"
            ))
        })?;
        let total_height = span(cell_height, rows, spacing).ok_or_else(|| {
            MosaicError::InvalidLayout(format!(
                "output height overflows: {rows} rows of {cell_height} px"
            ))
        })?;

        Ok(Self {
            count: sizes.len(),
            cols,
            rows,
            cell_width,
            cell_height,
            spacing,
            total_width,
            total_height,
        })
    }

    /// Top-left pixel of slot `index`, filling rows left to right.
    ///
    /// `index` must be below `rows * cols`.
    pub fn slot_origin(&self, index: usize) -> (u32, u32) {
        debug_assert!(index < self.rows as usize * self.cols as usize);
        let col = (index % self.cols as usize) as u32;
        let row = (index / self.cols as usize) as u32;
        (
            self.spacing + col * (self.cell_width + self.spacing),
            self.spacing + row * (self.cell_height + self.spacing),
        )
    }

    /// Number of slots in the last row left empty.
    pub fn empty_slots(&self) -> usize {
        self.rows as usize * self.cols as usize - self.count
    }
}

/// Default column count for `count` images: `round(sqrt(count))`, at least 1.
pub fn auto_columns(count: usize) -> u32 {
    ((count as f64).sqrt().round() as u32).max(1)
}

/// Reject an empty input set or a zero column count.
pub fn check_inputs(count: usize, cols: u32) -> Result<()> {
    if count == 0 {
        return Err(MosaicError::InvalidLayout("no input images".into()));
    }
    if cols == 0 {
        return Err(MosaicError::InvalidLayout(
            "column count must be at least 1".into(),
        ));
    }
    Ok(())
}

/// `(cell + spacing) * n + spacing`, or `None` on overflow.
fn span(cell: u32, n: u32, spacing: u32) -> Option<u32> {
    cell.checked_add(spacing)?
        .checked_mul(n)?
        .checked_add(spacing)
}
