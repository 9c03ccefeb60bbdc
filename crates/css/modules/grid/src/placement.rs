//! Grid item placement resolution.
//!
//! Turns the four `grid-row/column-start/end` position specifications of an
//! item into a concrete half-open line range per axis, or an indefinite
//! marker when placement requires the auto-placement cursor.
//!
//! Spec: §8.3 Line-based Placement
//! <https://www.w3.org/TR/css-grid-2/#line-placement>

use core::mem;

use crate::named_lines::{
    NamedLineCollection, look_ahead_for_named_line, look_back_for_named_line,
};
use crate::style::{GridContainerStyle, GridItemStyle};
use crate::types::{GridAxis, GridPosition, GridPositionSide, GridSpan, MAX_TRACKS};

/// Number of explicit column tracks, auto-repeat expanded.
///
/// The larger of the declared-plus-repeated track count and the track count
/// implied by `grid-template-areas`, clamped to [`MAX_TRACKS`].
///
/// Spec: §7.1 The Explicit Grid
pub fn explicit_grid_column_count(
    style: &GridContainerStyle,
    auto_repeat_tracks: usize,
) -> usize {
    (style.column_count + auto_repeat_tracks)
        .max(style.named_area_column_count)
        .min(MAX_TRACKS)
}

/// Number of explicit row tracks, auto-repeat expanded.
///
/// Spec: §7.1 The Explicit Grid
pub fn explicit_grid_row_count(style: &GridContainerStyle, auto_repeat_tracks: usize) -> usize {
    (style.row_count + auto_repeat_tracks)
        .max(style.named_area_row_count)
        .min(MAX_TRACKS)
}

fn explicit_grid_size_for_side(
    style: &GridContainerStyle,
    side: GridPositionSide,
    auto_repeat_tracks: usize,
) -> usize {
    match side.axis() {
        GridAxis::Column => explicit_grid_column_count(style, auto_repeat_tracks),
        GridAxis::Row => explicit_grid_row_count(style, auto_repeat_tracks),
    }
}

/// Cross-edge normalization applied before resolving an axis.
///
/// Handles the placement error-handling rules here rather than during style
/// building so the specified values stay untouched.
///
/// Spec: §8.3.1 Grid Placement Conflict Handling
fn adjust_grid_positions(
    style: &GridContainerStyle,
    item: &GridItemStyle,
    axis: GridAxis,
) -> (GridPosition, GridPosition) {
    let mut initial_position = item.start_position(axis).clone();
    let mut final_position = item.end_position(axis).clone();

    // A span cannot be opposed by another span.
    if initial_position.is_span() && final_position.is_span() {
        final_position = GridPosition::Auto;
    }

    if item.out_of_flow {
        // Early detect nonexistent named lines for positioned items; the
        // reference degrades to auto instead of erroring.
        if let GridPosition::NamedArea { name } = &initial_position {
            if !NamedLineCollection::is_valid_named_line_or_area(
                name,
                style,
                GridPositionSide::initial_side(axis),
            ) {
                initial_position = GridPosition::Auto;
            }
        }
        if let GridPosition::NamedArea { name } = &final_position {
            if !NamedLineCollection::is_valid_named_line_or_area(
                name,
                style,
                GridPositionSide::final_side(axis),
            ) {
                final_position = GridPosition::Auto;
            }
        }
    }

    // An automatic position opposite a grid span for a named line treats the
    // grid span as one.
    if initial_position.is_auto()
        && final_position.is_span()
        && final_position.named_line().is_some()
    {
        final_position = GridPosition::Span {
            count: 1,
            name: None,
        };
    }
    if final_position.is_auto()
        && initial_position.is_span()
        && initial_position.named_line().is_some()
    {
        initial_position = GridPosition::Span {
            count: 1,
            name: None,
        };
    }

    (initial_position, final_position)
}

fn resolve_named_grid_line_position(
    style: &GridContainerStyle,
    line: i32,
    name: &str,
    side: GridPositionSide,
    auto_repeat_tracks: usize,
) -> i32 {
    let last_line = explicit_grid_size_for_side(style, side, auto_repeat_tracks);
    let collection = NamedLineCollection::new(style, name, side.axis(), last_line, auto_repeat_tracks);

    if line > 0 {
        look_ahead_for_named_line(0, line.unsigned_abs(), last_line, &collection)
    } else {
        look_back_for_named_line(last_line as i32, line.unsigned_abs(), last_line, &collection)
    }
}

/// Resolve one independently-resolvable position to a line index.
///
/// `Auto` and `Span` positions never reach this function; they are resolved
/// against the opposite edge instead.
fn resolve_grid_position(
    style: &GridContainerStyle,
    position: &GridPosition,
    side: GridPositionSide,
    auto_repeat_tracks: usize,
) -> i32 {
    match position {
        GridPosition::Explicit { line, name } => {
            debug_assert!(*line != 0);

            if let Some(line_name) = name {
                return resolve_named_grid_line_position(
                    style,
                    *line,
                    line_name,
                    side,
                    auto_repeat_tracks,
                );
            }

            // Handle <integer> explicit position.
            if *line > 0 {
                return line - 1;
            }

            let resolved_position = line.unsigned_abs() as i32 - 1;
            let end_of_track = explicit_grid_size_for_side(style, side, auto_repeat_tracks) as i32;
            end_of_track - resolved_position
        }
        GridPosition::NamedArea { name } => {
            let last_line = explicit_grid_size_for_side(style, side, auto_repeat_tracks);

            // First attempt to match the area's edge to an implicit named
            // line: a `<name>-start` (for grid-*-start) / `<name>-end` (for
            // grid-*-end) line contributes the first such line to the item's
            // placement.
            let implicit_lines = NamedLineCollection::new(
                style,
                &side.implicit_named_line(name),
                side.axis(),
                last_line,
                auto_repeat_tracks,
            );
            if implicit_lines.has_named_lines() {
                return implicit_lines.first_position() as i32;
            }

            // Otherwise, the first line carrying the specified name itself
            // contributes.
            let explicit_lines =
                NamedLineCollection::new(style, name, side.axis(), last_line, auto_repeat_tracks);
            if explicit_lines.has_named_lines() {
                return explicit_lines.first_position() as i32;
            }

            debug_assert!(!NamedLineCollection::is_valid_named_line_or_area(
                name, style, side
            ));
            // If none of the above works, every line in the implicit grid is
            // assumed to have this name.
            last_line as i32 + 1
        }
        GridPosition::Auto | GridPosition::Span { .. } => {
            // auto and span depend on the opposite position for resolution
            // (e.g. grid-row: auto / 1 or grid-column: span 3 / "myHeader").
            debug_assert!(
                !position.should_resolve_against_opposite(),
                "auto and span positions resolve against the opposite edge"
            );
            0
        }
    }
}

fn definite_span_with_named_line_against_opposite(
    opposite_line: i32,
    span_count: u32,
    side: GridPositionSide,
    last_line: usize,
    collection: &NamedLineCollection<'_>,
) -> GridSpan {
    if side.is_start_side() {
        let start = look_back_for_named_line(opposite_line - 1, span_count, last_line, collection);
        GridSpan::untranslated_definite(start, opposite_line)
    } else {
        let end = look_ahead_for_named_line(opposite_line + 1, span_count, last_line, collection);
        GridSpan::untranslated_definite(opposite_line, end)
    }
}

/// Resolve an `Auto` or `Span` position relative to the opposite edge's
/// already-resolved line.
fn resolve_grid_position_against_opposite(
    style: &GridContainerStyle,
    opposite_line: i32,
    position: &GridPosition,
    side: GridPositionSide,
    auto_repeat_tracks: usize,
) -> GridSpan {
    match position {
        GridPosition::Auto => {
            if side.is_start_side() {
                GridSpan::untranslated_definite(opposite_line - 1, opposite_line)
            } else {
                GridSpan::untranslated_definite(opposite_line, opposite_line + 1)
            }
        }
        GridPosition::Span { count, name } => {
            debug_assert!(*count > 0);

            if let Some(line_name) = name {
                // span 2 'c': find the matching grid line before / after the
                // opposite position.
                let last_line = explicit_grid_size_for_side(style, side, auto_repeat_tracks);
                let collection = NamedLineCollection::new(
                    style,
                    line_name,
                    side.axis(),
                    last_line,
                    auto_repeat_tracks,
                );
                return definite_span_with_named_line_against_opposite(
                    opposite_line,
                    *count,
                    side,
                    last_line,
                    &collection,
                );
            }

            // 'span 1' is contained inside a single grid track regardless of
            // the direction, so the CSS span value equals the offset applied.
            let position_offset = *count as i32;
            if side.is_start_side() {
                GridSpan::untranslated_definite(opposite_line - position_offset, opposite_line)
            } else {
                GridSpan::untranslated_definite(opposite_line, opposite_line + position_offset)
            }
        }
        GridPosition::Explicit { .. } | GridPosition::NamedArea { .. } => {
            debug_assert!(
                position.should_resolve_against_opposite(),
                "only auto and span positions resolve against the opposite edge"
            );
            GridSpan::untranslated_definite(opposite_line, opposite_line + 1)
        }
    }
}

/// Track count occupied on `axis` by an item whose placement is fully
/// deferred to the auto-placement cursor.
///
/// Precondition: after adjustment both edges resolve against each other
/// (`auto`/`auto`, `auto`/`span` or `span`/`auto`).
pub fn span_size_for_auto_placed_item(
    style: &GridContainerStyle,
    item: &GridItemStyle,
    axis: GridAxis,
) -> u32 {
    let (initial_position, final_position) = adjust_grid_positions(style, item, axis);

    // Only used when both positions need to be resolved against the opposite
    // one.
    debug_assert!(
        initial_position.should_resolve_against_opposite()
            && final_position.should_resolve_against_opposite()
    );

    if initial_position.is_auto() && final_position.is_auto() {
        return 1;
    }

    let position = if initial_position.is_span() {
        initial_position
    } else {
        final_position
    };
    debug_assert!(position.is_span());

    let count = position.span_count();
    debug_assert!(count > 0);
    count
}

/// Resolve an item's placement on `axis` to an untranslated span.
///
/// Returns [`GridSpan::Indefinite`] when both edges depend on each other;
/// the caller must then run the auto-placement algorithm. Definite results
/// are normalized: reversed edges swap, degenerate ranges widen to one
/// track.
pub fn resolve_grid_positions(
    style: &GridContainerStyle,
    item: &GridItemStyle,
    axis: GridAxis,
    auto_repeat_tracks: usize,
) -> GridSpan {
    let (initial_position, final_position) = adjust_grid_positions(style, item, axis);

    let initial_side = GridPositionSide::initial_side(axis);
    let final_side = GridPositionSide::final_side(axis);

    tracing::debug!(
        "resolve_grid_positions: axis={:?}, initial={:?}, final={:?}, auto_repeat_tracks={}",
        axis,
        initial_position,
        final_position,
        auto_repeat_tracks
    );

    // We can't get the item's positions without running the auto placement
    // algorithm.
    if initial_position.should_resolve_against_opposite()
        && final_position.should_resolve_against_opposite()
    {
        return GridSpan::indefinite();
    }

    if initial_position.should_resolve_against_opposite() {
        // Infer the position from the final one ('auto / 1' or 'span 2 / 3').
        let end_line = resolve_grid_position(style, &final_position, final_side, auto_repeat_tracks);
        return resolve_grid_position_against_opposite(
            style,
            end_line,
            &initial_position,
            initial_side,
            auto_repeat_tracks,
        );
    }

    if final_position.should_resolve_against_opposite() {
        // Infer the position from the initial one ('1 / auto' or '3 / span 2').
        let start_line =
            resolve_grid_position(style, &initial_position, initial_side, auto_repeat_tracks);
        return resolve_grid_position_against_opposite(
            style,
            start_line,
            &final_position,
            final_side,
            auto_repeat_tracks,
        );
    }

    let mut start_line =
        resolve_grid_position(style, &initial_position, initial_side, auto_repeat_tracks);
    let mut end_line = resolve_grid_position(style, &final_position, final_side, auto_repeat_tracks);

    if start_line > end_line {
        mem::swap(&mut start_line, &mut end_line);
    } else if start_line == end_line {
        end_line = start_line + 1;
    }

    GridSpan::untranslated_definite(start_line, start_line.max(end_line))
}
