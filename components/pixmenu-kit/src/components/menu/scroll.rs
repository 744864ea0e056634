//! Viewport scrolling for variable-height menu rows
//!
//! Given the measured rows, the selected index and the viewport height, the
//! planner decides which rows are drawn and how far the first one is shifted
//! above the top of the viewport. Scrolling only kicks in when the selected
//! row, or the row right after it, runs past the bottom of the viewport; the
//! lookahead row keeps a hint of "more below" on screen.

use std::ops::Range;

use tracing::trace;

use crate::common::Dimension;

/// Which rows to draw and where the first one starts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollPlan {
    pub first_index: usize,
    /// Exclusive
    pub last_index: usize,
    /// Top of the first drawn row; zero or negative
    pub initial_y_offset: i32,
}

impl ScrollPlan {
    pub fn new(first_index: usize, last_index: usize, initial_y_offset: i32) -> Self {
        Self {
            first_index,
            last_index,
            initial_y_offset,
        }
    }

    /// Draw every row from the top
    pub fn all(row_count: usize) -> Self {
        Self::new(0, row_count, 0)
    }

    /// Plan a whole list at once
    pub fn plan(
        rows: &[Dimension],
        selected_index: usize,
        available_height: i32,
        y_padding: i32,
    ) -> Self {
        let mut detector =
            ScrollDetector::new(rows.len(), selected_index, available_height, y_padding);
        for (index, row) in rows.iter().enumerate() {
            detector.observe(index, *row);
        }
        detector.finish(rows)
    }

    pub fn visible(&self) -> Range<usize> {
        self.first_index..self.last_index
    }

    pub fn is_empty(&self) -> bool {
        self.first_index >= self.last_index
    }
}

/// Overflow detection that runs alongside row measurement
///
/// Feed every measured row to [`observe`](Self::observe) in display order,
/// then call [`finish`](Self::finish) with the same rows.
#[derive(Clone, Debug)]
pub struct ScrollDetector {
    row_count: usize,
    selected_index: usize,
    available_height: i32,
    y_padding: i32,
    total_height: i32,
    scroll_needed: bool,
}

impl ScrollDetector {
    /// `selected_index` is clamped to the last row
    pub fn new(
        row_count: usize,
        selected_index: usize,
        available_height: i32,
        y_padding: i32,
    ) -> Self {
        Self {
            row_count,
            selected_index: selected_index.min(row_count.saturating_sub(1)),
            available_height,
            y_padding,
            total_height: 0,
            scroll_needed: false,
        }
    }

    pub fn observe(&mut self, index: usize, row: Dimension) {
        self.total_height += row.height + self.y_padding;

        let near_selection = index == self.selected_index || index == self.selected_index + 1;
        if near_selection && self.total_height > self.available_height {
            self.scroll_needed = true;
        }
    }

    pub fn total_height(&self) -> i32 {
        self.total_height
    }

    pub fn scroll_needed(&self) -> bool {
        self.scroll_needed
    }

    pub fn finish(self, rows: &[Dimension]) -> ScrollPlan {
        let row_count = self.row_count.min(rows.len());
        if row_count == 0 {
            return ScrollPlan::default();
        }

        let selected = self.selected_index.min(row_count - 1);
        if self.available_height <= 0 {
            return ScrollPlan::new(selected, selected, 0);
        }

        if !self.scroll_needed {
            return ScrollPlan::all(row_count);
        }

        // Show one row past the selection when there is one
        let last_index = (selected + 2).min(row_count);

        // Walk back to find how many earlier rows still fit
        let mut plan = ScrollPlan::new(0, last_index, 0);
        let mut height_left_to_use = self.available_height;
        for index in (0..last_index).rev() {
            height_left_to_use -= rows[index].height;
            if height_left_to_use <= 0 {
                plan.first_index = index + 1;
                plan.initial_y_offset = height_left_to_use;
                break;
            }
        }

        if plan.first_index > selected {
            // the lookahead row alone filled the viewport
            plan.first_index = selected;
            plan.initial_y_offset = 0;
        }
        self.keep_selection_visible(&mut plan, rows, selected);

        trace!(
            total_height = self.total_height,
            available_height = self.available_height,
            ?plan,
            "menu scrolled"
        );
        plan
    }

    /// Shift the plan so the selected row is not cut off, top edge first
    fn keep_selection_visible(&self, plan: &mut ScrollPlan, rows: &[Dimension], selected: usize) {
        let above: i32 = rows[plan.first_index..selected]
            .iter()
            .map(|row| row.height + self.y_padding)
            .sum();
        let height = rows[selected].height;

        let top = plan.initial_y_offset + above;
        let overflow = top + height - self.available_height;
        if overflow > 0 {
            plan.initial_y_offset -= overflow;
        }

        let top = plan.initial_y_offset + above;
        if top < 0 {
            plan.initial_y_offset -= top;
        }
    }
}
