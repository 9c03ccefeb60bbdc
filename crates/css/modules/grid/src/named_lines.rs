//! Named grid line lookup.
//!
//! Spec: §8.3 Line-based Placement, named lines and spans
//! <https://www.w3.org/TR/css-grid-2/#line-placement>

use crate::style::GridContainerStyle;
use crate::types::{GridAxis, GridPositionSide};

/// Read-only index over the lines of one axis carrying one name.
///
/// Borrows the container style's named-line tables for the duration of a
/// single resolution call and folds in the effect of the axis's auto-repeated
/// track run. Only one auto-repeat group per axis is supported; the folding
/// arithmetic assumes it.
#[derive(Debug)]
pub struct NamedLineCollection<'style> {
    /// Line indices declared outside auto-repeat, ascending.
    named_indexes: Option<&'style [usize]>,
    /// Repeat-local line indices (0 before the repeated track, 1 after).
    auto_repeat_indexes: Option<&'style [usize]>,
    /// First line index affected by auto-repeat expansion.
    insertion_point: usize,
    /// Last explicit line index of the axis.
    last_line: usize,
    /// Number of auto-repeat track repetitions.
    repetitions: usize,
}

fn find_in(indexes: &[usize], line: usize) -> Option<usize> {
    indexes.iter().position(|&candidate| candidate == line)
}

impl<'style> NamedLineCollection<'style> {
    /// Build the collection for `name` on `axis`.
    ///
    /// Absence of the name in one or both maps is valid; see
    /// [`Self::has_named_lines`].
    pub fn new(
        style: &'style GridContainerStyle,
        name: &str,
        axis: GridAxis,
        last_line: usize,
        auto_repeat_tracks: usize,
    ) -> Self {
        Self {
            named_indexes: style.named_lines(axis).get(name).map(Vec::as_slice),
            auto_repeat_indexes: style
                .auto_repeat_named_lines(axis)
                .get(name)
                .map(Vec::as_slice),
            insertion_point: style.auto_repeat_insertion_point(axis),
            last_line,
            repetitions: auto_repeat_tracks,
        }
    }

    /// Whether `name` is usable as a line or area reference on `side`.
    ///
    /// True when the bare name or its side-qualified implicit form
    /// (`<name>-start` / `<name>-end`) appears in either named-line map of
    /// the side's axis. Out-of-flow items referencing names failing this
    /// check degrade to `auto` during position adjustment.
    pub fn is_valid_named_line_or_area(
        name: &str,
        style: &GridContainerStyle,
        side: GridPositionSide,
    ) -> bool {
        let axis = side.axis();
        let named = style.named_lines(axis);
        let auto_repeat = style.auto_repeat_named_lines(axis);

        if named.contains_key(name) || auto_repeat.contains_key(name) {
            return true;
        }

        let implicit = side.implicit_named_line(name);
        named.contains_key(&implicit) || auto_repeat.contains_key(&implicit)
    }

    /// Whether this name applies to any line at all on this axis.
    pub fn has_named_lines(&self) -> bool {
        self.named_indexes.is_some() || self.auto_repeat_indexes.is_some()
    }

    /// Position of `line` among this name's stored occurrences.
    ///
    /// Returns `None` when the name does not apply to `line`.
    pub fn find(&self, line: usize) -> Option<usize> {
        if line > self.last_line {
            return None;
        }

        let Some(auto_repeat_indexes) = self.auto_repeat_indexes else {
            return self.named_indexes.and_then(|indexes| find_in(indexes, line));
        };

        if line < self.insertion_point {
            return self.named_indexes.and_then(|indexes| find_in(indexes, line));
        }

        if line <= self.insertion_point + self.repetitions {
            let local_index = line - self.insertion_point;

            // The line names defined in the last line are also present in the
            // first line of the next repetition (if any). Same for the line
            // names defined in the first line. Note that there is only one
            // auto-repeated track allowed by the syntax, so storing
            // repeat-local indexes 0 and 1 (before and after the track size)
            // covers every repeated line.
            if local_index == self.repetitions {
                return find_in(auto_repeat_indexes, 1);
            }
            let position = find_in(auto_repeat_indexes, 0);
            if position.is_some() {
                return position;
            }
            if local_index == 0 {
                return None;
            }
            return find_in(auto_repeat_indexes, 1);
        }

        if self.repetitions == 0 {
            return None;
        }
        // Past the repeated region the repetitions collapse to a single slot
        // for outer-map indexing purposes.
        self.named_indexes
            .and_then(|indexes| find_in(indexes, line - (self.repetitions - 1)))
    }

    /// Whether this name applies to `line`.
    ///
    /// Requires [`Self::has_named_lines`].
    pub fn contains(&self, line: usize) -> bool {
        debug_assert!(self.has_named_lines());
        self.find(line).is_some()
    }

    /// Smallest line index this name applies to.
    ///
    /// Requires [`Self::has_named_lines`]. Used for named-area resolution.
    pub fn first_position(&self) -> usize {
        debug_assert!(self.has_named_lines());

        match (self.named_indexes, self.auto_repeat_indexes) {
            (Some(named), None) => {
                let first = named.first().copied().unwrap_or_default();
                if self.insertion_point == 0 || self.insertion_point < first {
                    first + self.repetitions.saturating_sub(1)
                } else {
                    first
                }
            }
            (None, Some(auto_repeat)) => {
                auto_repeat.first().copied().unwrap_or_default() + self.insertion_point
            }
            (Some(named), Some(auto_repeat)) => {
                let first_repeated = auto_repeat.first().copied().unwrap_or_default();
                if self.insertion_point == 0 {
                    first_repeated
                } else {
                    let first_named = named.first().copied().unwrap_or_default();
                    first_named.min(first_repeated + self.insertion_point)
                }
            }
            (None, None) => 0,
        }
    }
}

/// Count off `number_of_lines` matching lines forward from `start`.
///
/// A line matches when it lies past the last explicit line (implicit lines
/// are assumed to carry every name) or the collection contains it. Only
/// implicit lines in the search direction match, so the walk starts no
/// earlier than line 0.
///
/// Spec: <https://drafts.csswg.org/css-grid/#grid-placement-span-int>
pub(crate) fn look_ahead_for_named_line(
    start: i32,
    number_of_lines: u32,
    last_line: usize,
    collection: &NamedLineCollection<'_>,
) -> i32 {
    debug_assert!(number_of_lines > 0);

    let mut end = start.max(0);

    if !collection.has_named_lines() {
        return end.max(last_line as i32 + 1) + number_of_lines as i32 - 1;
    }

    let mut remaining = number_of_lines;
    while remaining > 0 {
        if end > last_line as i32 || collection.contains(end as usize) {
            remaining -= 1;
        }
        end += 1;
    }

    debug_assert!(end > 0);
    end - 1
}

/// Count off `number_of_lines` matching lines backward from `end`.
///
/// Mirror of [`look_ahead_for_named_line`]: lines below 0 are implicit and
/// match every name, and the walk starts no later than the last explicit
/// line.
///
/// Spec: <https://drafts.csswg.org/css-grid/#grid-placement-span-int>
pub(crate) fn look_back_for_named_line(
    end: i32,
    number_of_lines: u32,
    last_line: usize,
    collection: &NamedLineCollection<'_>,
) -> i32 {
    debug_assert!(number_of_lines > 0);

    let mut start = end.min(last_line as i32);

    if !collection.has_named_lines() {
        return start.min(-1) - number_of_lines as i32 + 1;
    }

    let mut remaining = number_of_lines;
    while remaining > 0 {
        if start < 0 || collection.contains(start as usize) {
            remaining -= 1;
        }
        start -= 1;
    }

    start + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_with_named_columns(entries: &[(&str, &[usize])]) -> GridContainerStyle {
        let mut style = GridContainerStyle {
            column_count: 4,
            ..GridContainerStyle::default()
        };
        for (name, indexes) in entries {
            style
                .named_column_lines
                .insert((*name).to_owned(), indexes.to_vec());
        }
        style
    }

    /// Test direct lookup when no auto-repeat is involved.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_find_without_auto_repeat() {
        let style = style_with_named_columns(&[("foo", &[1, 3])]);
        let collection = NamedLineCollection::new(&style, "foo", GridAxis::Column, 4, 0);

        assert!(collection.has_named_lines());
        assert_eq!(collection.find(1), Some(0));
        assert_eq!(collection.find(3), Some(1));
        assert_eq!(collection.find(2), None);
        // Lines beyond the last explicit line never match stored names.
        assert_eq!(collection.find(5), None);
    }

    /// Test the auto-repeat region folding rules.
    ///
    /// One repeated track inserted at line 2 with 3 repetitions; "bar" is
    /// declared before the repeated track (repeat-local 0) and at outer
    /// index 5.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_find_with_auto_repeat_region() {
        let mut style = style_with_named_columns(&[("bar", &[5])]);
        style
            .auto_repeat_named_column_lines
            .insert("bar".to_owned(), vec![0]);
        style.auto_repeat_columns_insertion_point = 2;

        let collection = NamedLineCollection::new(&style, "bar", GridAxis::Column, 8, 3);

        // Interior and first repeated lines match via repeat-local index 0.
        assert!(collection.find(2).is_some());
        assert!(collection.find(3).is_some());
        assert!(collection.find(4).is_some());
        // The region's last boundary only matches repeat-local index 1,
        // which "bar" does not carry.
        assert_eq!(collection.find(5), None);
        // Past the region the repetitions collapse to one slot: line 6 probes
        // the outer map at 6 - (3 - 1) = 4 and misses, line 7 probes 5 and
        // hits.
        assert_eq!(collection.find(6), None);
        assert!(collection.find(7).is_some());
    }

    /// Test the after-track fallback for lines past the first repeated line.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_find_after_track_name() {
        let mut style = GridContainerStyle {
            column_count: 5,
            auto_repeat_columns_insertion_point: 1,
            ..GridContainerStyle::default()
        };
        style
            .auto_repeat_named_column_lines
            .insert("after".to_owned(), vec![1]);

        let collection = NamedLineCollection::new(&style, "after", GridAxis::Column, 6, 2);

        // The very first repeated line carries only before-track names.
        assert_eq!(collection.find(1), None);
        // Later lines in the region fall back to the after-track entry, and
        // the last boundary maps to it directly.
        assert!(collection.find(2).is_some());
        assert!(collection.find(3).is_some());
    }

    /// Test `first_position` across map combinations.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_first_position() {
        // Outer map only, no auto-repeat anywhere.
        let style = style_with_named_columns(&[("foo", &[3])]);
        let outer_only = NamedLineCollection::new(&style, "foo", GridAxis::Column, 4, 0);
        assert_eq!(outer_only.first_position(), 3);

        // Outer map only, insertion point before the first occurrence: the
        // stored index shifts by repetitions - 1.
        let mut shifted_style = style_with_named_columns(&[("foo", &[3])]);
        shifted_style.auto_repeat_columns_insertion_point = 1;
        let shifted = NamedLineCollection::new(&shifted_style, "foo", GridAxis::Column, 7, 4);
        assert_eq!(shifted.first_position(), 6);

        // Auto-repeat map only: repeat-local index offset by the insertion
        // point.
        let mut repeat_style = GridContainerStyle {
            column_count: 4,
            auto_repeat_columns_insertion_point: 2,
            ..GridContainerStyle::default()
        };
        repeat_style
            .auto_repeat_named_column_lines
            .insert("bar".to_owned(), vec![0]);
        let repeat_only = NamedLineCollection::new(&repeat_style, "bar", GridAxis::Column, 6, 2);
        assert_eq!(repeat_only.first_position(), 2);

        // Both maps: minimum of the two candidates.
        let mut both_style = style_with_named_columns(&[("baz", &[1])]);
        both_style.auto_repeat_columns_insertion_point = 3;
        both_style
            .auto_repeat_named_column_lines
            .insert("baz".to_owned(), vec![0]);
        let both = NamedLineCollection::new(&both_style, "baz", GridAxis::Column, 6, 2);
        assert_eq!(both.first_position(), 1);
    }

    /// Test bare and implicit name validation.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_is_valid_named_line_or_area() {
        let style = style_with_named_columns(&[("header-start", &[0]), ("edge", &[2])]);

        assert!(NamedLineCollection::is_valid_named_line_or_area(
            "edge",
            &style,
            GridPositionSide::ColumnEnd
        ));
        // "header" is valid on a start side through its implicit form only.
        assert!(NamedLineCollection::is_valid_named_line_or_area(
            "header",
            &style,
            GridPositionSide::ColumnStart
        ));
        assert!(!NamedLineCollection::is_valid_named_line_or_area(
            "header",
            &style,
            GridPositionSide::ColumnEnd
        ));
        assert!(!NamedLineCollection::is_valid_named_line_or_area(
            "ghost",
            &style,
            GridPositionSide::ColumnStart
        ));
        // Row-axis maps are independent of the column-axis ones.
        assert!(!NamedLineCollection::is_valid_named_line_or_area(
            "edge",
            &style,
            GridPositionSide::RowStart
        ));
    }

    /// Test forward search counting named and implicit lines.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_look_ahead() {
        let style = style_with_named_columns(&[("foo", &[1, 3])]);
        let collection = NamedLineCollection::new(&style, "foo", GridAxis::Column, 4, 0);

        assert_eq!(look_ahead_for_named_line(0, 1, 4, &collection), 1);
        assert_eq!(look_ahead_for_named_line(0, 2, 4, &collection), 3);
        // The third occurrence only exists among implicit lines past the
        // grid.
        assert_eq!(look_ahead_for_named_line(0, 3, 4, &collection), 5);

        // No named lines at all: every implicit line past the grid matches.
        let missing = NamedLineCollection::new(&style, "missing", GridAxis::Column, 4, 0);
        assert_eq!(look_ahead_for_named_line(0, 2, 4, &missing), 6);
        assert_eq!(look_ahead_for_named_line(7, 2, 4, &missing), 8);
    }

    /// Test backward search counting named and implicit lines.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_look_back() {
        let style = style_with_named_columns(&[("foo", &[1, 3])]);
        let collection = NamedLineCollection::new(&style, "foo", GridAxis::Column, 4, 0);

        assert_eq!(look_back_for_named_line(4, 1, 4, &collection), 3);
        assert_eq!(look_back_for_named_line(4, 2, 4, &collection), 1);
        // The third occurrence only exists among implicit lines before the
        // grid.
        assert_eq!(look_back_for_named_line(4, 3, 4, &collection), -1);

        let missing = NamedLineCollection::new(&style, "missing", GridAxis::Column, 4, 0);
        assert_eq!(look_back_for_named_line(4, 2, 4, &missing), -2);
    }
}
