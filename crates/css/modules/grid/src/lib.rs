//! CSS Grid Layout Module Level 2 — grid item placement resolution.
//! Spec: <https://www.w3.org/TR/css-grid-2/#placement>
//!
//! This module resolves an item's four `grid-row/column-start/end` position
//! specifications into concrete per-axis line spans. Style parsing and track
//! sizing live elsewhere: the parser hands in validated positions, and the
//! track-sizing algorithm consumes the resolved (or indefinite) spans.

// Placement and span types
mod types;
pub use types::{GridAxis, GridPosition, GridPositionSide, GridSpan, MAX_TRACKS};

// Read-only style inputs
mod style;
pub use style::{GridContainerStyle, GridItemStyle, NamedLineMap};

// Named-line lookup and search
mod named_lines;
pub use named_lines::NamedLineCollection;

// Position resolution
mod placement;
pub use placement::{
    explicit_grid_column_count, explicit_grid_row_count, resolve_grid_positions,
    span_size_for_auto_placed_item,
};
