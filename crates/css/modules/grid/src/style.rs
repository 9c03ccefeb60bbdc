//! Read-only style inputs to placement resolution.
//!
//! The resolver never mutates these; a layout pass freezes the container
//! style for its duration and every resolution call borrows from it.
//!
//! Spec: CSS Grid Layout Module Level 2, §7 Defining the Grid
//! <https://www.w3.org/TR/css-grid-2/#grid-definition>

use std::collections::HashMap;

use crate::types::{GridAxis, GridPosition};

/// Line name to ascending line indices where that name applies.
///
/// Built by scanning the explicit grid left to right, so the index lists are
/// always sorted. One map per axis covers lines declared outside any
/// auto-repeat; a second covers lines declared inside the (single allowed)
/// auto-repeat pattern, keyed by repeat-local indices 0 (before the repeated
/// track) and 1 (after it).
pub type NamedLineMap = HashMap<String, Vec<usize>>;

/// Grid container style slice consumed by placement resolution.
#[derive(Debug, Clone, Default)]
pub struct GridContainerStyle {
    /// Tracks declared by `grid-template-columns` (auto-repeat unexpanded).
    pub column_count: usize,
    /// Tracks declared by `grid-template-rows` (auto-repeat unexpanded).
    pub row_count: usize,
    /// Named lines of the column axis declared outside auto-repeat.
    pub named_column_lines: NamedLineMap,
    /// Named lines of the row axis declared outside auto-repeat.
    pub named_row_lines: NamedLineMap,
    /// Named lines declared inside the column-axis auto-repeat pattern.
    pub auto_repeat_named_column_lines: NamedLineMap,
    /// Named lines declared inside the row-axis auto-repeat pattern.
    pub auto_repeat_named_row_lines: NamedLineMap,
    /// First column line affected by auto-repeat expansion.
    pub auto_repeat_columns_insertion_point: usize,
    /// First row line affected by auto-repeat expansion.
    pub auto_repeat_rows_insertion_point: usize,
    /// Column tracks implied by `grid-template-areas`.
    pub named_area_column_count: usize,
    /// Row tracks implied by `grid-template-areas`.
    pub named_area_row_count: usize,
}

impl GridContainerStyle {
    /// Declared track count for the given axis (auto-repeat unexpanded).
    pub fn track_count(&self, axis: GridAxis) -> usize {
        match axis {
            GridAxis::Column => self.column_count,
            GridAxis::Row => self.row_count,
        }
    }

    /// Named-line map of the given axis for lines outside auto-repeat.
    pub fn named_lines(&self, axis: GridAxis) -> &NamedLineMap {
        match axis {
            GridAxis::Column => &self.named_column_lines,
            GridAxis::Row => &self.named_row_lines,
        }
    }

    /// Named-line map of the given axis for lines inside auto-repeat.
    pub fn auto_repeat_named_lines(&self, axis: GridAxis) -> &NamedLineMap {
        match axis {
            GridAxis::Column => &self.auto_repeat_named_column_lines,
            GridAxis::Row => &self.auto_repeat_named_row_lines,
        }
    }

    /// Auto-repeat insertion point for the given axis.
    pub fn auto_repeat_insertion_point(&self, axis: GridAxis) -> usize {
        match axis {
            GridAxis::Column => self.auto_repeat_columns_insertion_point,
            GridAxis::Row => self.auto_repeat_rows_insertion_point,
        }
    }

    /// Track count implied by `grid-template-areas` for the given axis.
    pub fn named_area_track_count(&self, axis: GridAxis) -> usize {
        match axis {
            GridAxis::Column => self.named_area_column_count,
            GridAxis::Row => self.named_area_row_count,
        }
    }
}

/// Grid item style slice consumed by placement resolution.
#[derive(Debug, Clone)]
pub struct GridItemStyle {
    /// `grid-column-start`
    pub column_start: GridPosition,
    /// `grid-column-end`
    pub column_end: GridPosition,
    /// `grid-row-start`
    pub row_start: GridPosition,
    /// `grid-row-end`
    pub row_end: GridPosition,
    /// Whether the item is out-of-flow positioned (absolute/fixed).
    pub out_of_flow: bool,
}

impl Default for GridItemStyle {
    fn default() -> Self {
        Self {
            column_start: GridPosition::Auto,
            column_end: GridPosition::Auto,
            row_start: GridPosition::Auto,
            row_end: GridPosition::Auto,
            out_of_flow: false,
        }
    }
}

impl GridItemStyle {
    /// Start-edge position for the given axis.
    pub fn start_position(&self, axis: GridAxis) -> &GridPosition {
        match axis {
            GridAxis::Column => &self.column_start,
            GridAxis::Row => &self.row_start,
        }
    }

    /// End-edge position for the given axis.
    pub fn end_position(&self, axis: GridAxis) -> &GridPosition {
        match axis {
            GridAxis::Column => &self.column_end,
            GridAxis::Row => &self.row_end,
        }
    }
}
