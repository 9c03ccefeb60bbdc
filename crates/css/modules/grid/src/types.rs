//! Grid placement type definitions.
//!
//! Spec: CSS Grid Layout Module Level 2
//! <https://www.w3.org/TR/css-grid-2/#placement>

/// Hard upper bound on explicit track counts.
///
/// Protects the placement machinery against pathological track lists; explicit
/// grid sizes are clamped to this value before any line arithmetic runs.
pub const MAX_TRACKS: usize = 1_000_000;

/// Axis identifier (row or column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    /// Row axis (inline in horizontal writing mode)
    Row,
    /// Column axis (block in horizontal writing mode)
    Column,
}

/// One of the four edges a grid position can apply to.
///
/// Spec: §8.3 Line-based Placement
/// <https://www.w3.org/TR/css-grid-2/#line-placement>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPositionSide {
    /// `grid-column-start`
    ColumnStart,
    /// `grid-column-end`
    ColumnEnd,
    /// `grid-row-start`
    RowStart,
    /// `grid-row-end`
    RowEnd,
}

impl GridPositionSide {
    /// The start side of the given axis.
    pub fn initial_side(axis: GridAxis) -> Self {
        match axis {
            GridAxis::Column => Self::ColumnStart,
            GridAxis::Row => Self::RowStart,
        }
    }

    /// The end side of the given axis.
    pub fn final_side(axis: GridAxis) -> Self {
        match axis {
            GridAxis::Column => Self::ColumnEnd,
            GridAxis::Row => Self::RowEnd,
        }
    }

    /// Axis this side belongs to.
    pub fn axis(self) -> GridAxis {
        match self {
            Self::ColumnStart | Self::ColumnEnd => GridAxis::Column,
            Self::RowStart | Self::RowEnd => GridAxis::Row,
        }
    }

    /// Whether this is a start (as opposed to end) side.
    pub fn is_start_side(self) -> bool {
        matches!(self, Self::ColumnStart | Self::RowStart)
    }

    /// Implicit named line derived from a named area for this side.
    ///
    /// `grid-*-start` edges match `<name>-start` lines, `grid-*-end` edges
    /// match `<name>-end` lines.
    ///
    /// Spec: §8.3 Line-based Placement (named-area edge matching)
    pub fn implicit_named_line(self, name: &str) -> String {
        if self.is_start_side() {
            format!("{name}-start")
        } else {
            format!("{name}-end")
        }
    }
}

/// One edge of a grid item's placement on one axis.
///
/// Produced by the property-value parser; values arriving here are already
/// validated (`Explicit` lines are non-zero, `Span` counts are positive).
///
/// Spec: §8.3 Line-based Placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridPosition {
    /// `auto` — placement deferred to the opposite edge or auto-placement.
    Auto,
    /// `<integer> <custom-ident>?` — an explicit line, counted from the grid
    /// start when positive and from the grid end when negative. Never zero.
    Explicit {
        /// One-based line number; sign selects the counting direction.
        line: i32,
        /// Optional line name the integer counts occurrences of.
        name: Option<String>,
    },
    /// `span <integer> <custom-ident>?` — a distance from the opposite edge.
    Span {
        /// Number of tracks (or named-line matches) to span. Always positive.
        count: u32,
        /// Optional line name the span counts occurrences of.
        name: Option<String>,
    },
    /// `<custom-ident>` — a named grid area reference.
    NamedArea {
        /// Area (or bare line) name.
        name: String,
    },
}

impl GridPosition {
    /// Check if this is an `auto` position.
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Check if this is a `span` position.
    pub fn is_span(&self) -> bool {
        matches!(self, Self::Span { .. })
    }

    /// Check if this is a named-area position.
    pub fn is_named_area(&self) -> bool {
        matches!(self, Self::NamedArea { .. })
    }

    /// Line or area name carried by this position, if any.
    pub fn named_line(&self) -> Option<&str> {
        match self {
            Self::Auto => None,
            Self::Explicit { name, .. } | Self::Span { name, .. } => name.as_deref(),
            Self::NamedArea { name } => Some(name),
        }
    }

    /// Span count, or 0 for non-span positions.
    pub fn span_count(&self) -> u32 {
        match self {
            Self::Span { count, .. } => *count,
            _ => 0,
        }
    }

    /// Whether resolving this edge requires the opposite edge's line.
    ///
    /// `auto` and `span` have no standalone meaning; both are interpreted
    /// relative to whatever the opposite edge resolves to.
    pub fn should_resolve_against_opposite(&self) -> bool {
        matches!(self, Self::Auto | Self::Span { .. })
    }
}

/// Resolved placement of one item on one axis.
///
/// A definite span is a half-open `[start, end)` range of *untranslated*
/// line indices: `start < end` always holds, but either bound may be
/// negative until the grid translates spans into non-negative track space.
///
/// Spec: §8.3.1 Grid Placement Conflict Handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridSpan {
    /// Placement cannot be determined without the auto-placement cursor.
    Indefinite,
    /// Concrete half-open line range.
    Definite {
        /// First line of the span.
        start: i32,
        /// One past the last line of the span.
        end: i32,
    },
}

impl GridSpan {
    /// Create a definite untranslated span.
    ///
    /// Callers must supply a non-empty range (`start < end`).
    pub fn untranslated_definite(start: i32, end: i32) -> Self {
        debug_assert!(start < end);
        Self::Definite { start, end }
    }

    /// Create the indefinite marker.
    pub fn indefinite() -> Self {
        Self::Indefinite
    }

    /// Check if this span is indefinite.
    pub fn is_indefinite(&self) -> bool {
        matches!(self, Self::Indefinite)
    }

    /// Start line of a definite span.
    pub fn start_line(&self) -> Option<i32> {
        match self {
            Self::Indefinite => None,
            Self::Definite { start, .. } => Some(*start),
        }
    }

    /// End line of a definite span.
    pub fn end_line(&self) -> Option<i32> {
        match self {
            Self::Indefinite => None,
            Self::Definite { end, .. } => Some(*end),
        }
    }

    /// Number of tracks covered by a definite span.
    pub fn integer_span(&self) -> Option<u32> {
        match self {
            Self::Indefinite => None,
            Self::Definite { start, end } => Some((end - start) as u32),
        }
    }
}
