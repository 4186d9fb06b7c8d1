//! Selection state shared by the list based prompt modes.
//!
//! The state tracks which candidates are visible (all of them, unless an
//! autocomplete filter narrows them down), where the cursor is within the
//! visible ones, which candidates are checked and in what order, and which
//! page of the visible list is on screen.

use indexmap::IndexSet;

use crate::tokenizer::Candidate;

/// Logical actions the prompts react to.
///
/// Raw key codes are mapped to these by the caller, so the prompts can be
/// driven without a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveUp,
    MoveDown,
    ToggleCurrent,
    ToggleAll,
    InvertSelection,
    /// A printable character typed into the filter or the edit buffer.
    FilterInput(char),
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearLine,
    Submit,
    Cancel,
}

/// Lifecycle of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first key.
    Idle,
    Navigating,
    Submitted,
    Cancelled,
}

impl Phase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Submitted | Phase::Cancelled)
    }
}

/// Indices of the candidates whose value contains `query`, ignoring case.
///
/// An empty query keeps every candidate.
#[must_use]
pub fn filter_candidates(candidates: &[Candidate], query: &str) -> Vec<usize> {
    let query = query.to_lowercase();
    candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| candidate.value().to_lowercase().contains(&query))
        .map(|(i, _)| i)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    /// Position within `visible`.
    cursor: usize,
    /// Checked candidate indices, kept in the order they were checked.
    checked: IndexSet<usize>,
    filter_text: String,
    /// Candidate indices currently shown, in list order.
    visible: Vec<usize>,
    /// First visible row on screen.
    offset: usize,
    page_size: usize,
    phase: Phase,
}

impl SelectionState {
    #[must_use]
    pub fn new(candidate_count: usize, page_size: usize) -> Self {
        Self {
            cursor: 0,
            checked: IndexSet::new(),
            filter_text: String::new(),
            visible: (0..candidate_count).collect(),
            offset: 0,
            page_size: page_size.max(1),
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Candidate index under the cursor, if any candidate is visible.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.visible.get(self.cursor).copied()
    }

    #[must_use]
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    #[must_use]
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.contains(&index)
    }

    /// Checked candidate indices in ascending order.
    #[must_use]
    pub fn checked(&self) -> Vec<usize> {
        let mut checked: Vec<usize> = self.checked.iter().copied().collect();
        checked.sort_unstable();
        checked
    }

    /// Checked candidate indices in the order they were checked.
    #[must_use]
    pub fn order(&self) -> Vec<usize> {
        self.checked.iter().copied().collect()
    }

    /// 1-based position of `index` in the check order.
    #[must_use]
    pub fn order_position(&self, index: usize) -> Option<usize> {
        self.checked.get_index_of(&index).map(|position| position + 1)
    }

    /// Leaves `Idle` once the user starts interacting.
    pub fn begin(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Navigating;
        }
    }

    pub fn move_up(&mut self) {
        let len = self.visible.len();
        if len <= 1 {
            return;
        }

        self.cursor = if self.cursor == 0 {
            len - 1
        } else {
            self.cursor - 1
        };
        self.scroll_to_cursor();
    }

    pub fn move_down(&mut self) {
        let len = self.visible.len();
        if len <= 1 {
            return;
        }

        self.cursor = (self.cursor + 1) % len;
        self.scroll_to_cursor();
    }

    /// Puts the cursor on candidate `index` if it is visible.
    pub fn move_to(&mut self, index: usize) -> bool {
        match self.visible.iter().position(|&i| i == index) {
            Some(position) => {
                self.cursor = position;
                self.scroll_to_cursor();
                true
            }
            None => false,
        }
    }

    /// Flips the candidate under the cursor.
    ///
    /// Unchecking keeps the relative order of the remaining checked
    /// candidates; checking appends.
    pub fn toggle_current(&mut self) {
        let Some(index) = self.current() else {
            return;
        };

        if !self.checked.shift_remove(&index) {
            self.checked.insert(index);
        }
        self.check_invariants();
    }

    /// Checks candidate `index` unless it already is.
    pub fn check(&mut self, index: usize) {
        self.checked.insert(index);
    }

    /// Unchecks every visible candidate if all of them are checked, otherwise
    /// checks the unchecked ones in list order.
    pub fn toggle_all(&mut self) {
        let all_checked = self.visible.iter().all(|i| self.checked.contains(i));

        for &index in &self.visible {
            if all_checked {
                self.checked.shift_remove(&index);
            } else {
                self.checked.insert(index);
            }
        }
    }

    /// Flips every visible candidate; newly checked ones are appended in list order.
    pub fn invert(&mut self) {
        for &index in &self.visible {
            if !self.checked.shift_remove(&index) {
                self.checked.insert(index);
            }
        }
    }

    /// Appends `c` to the filter and narrows the visible candidates.
    pub fn push_filter(&mut self, c: char, candidates: &[Candidate]) {
        self.filter_text.push(c);
        self.refilter(candidates);
    }

    /// Removes the last filter character and widens the visible candidates.
    pub fn pop_filter(&mut self, candidates: &[Candidate]) {
        if self.filter_text.pop().is_some() {
            self.refilter(candidates);
        }
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.scroll_to_cursor();
    }

    pub fn submit(&mut self) {
        self.phase = Phase::Submitted;
    }

    /// Drops all selection state; the prompt produces no result afterwards.
    pub fn cancel(&mut self) {
        self.checked.clear();
        self.filter_text.clear();
        self.phase = Phase::Cancelled;
    }

    fn refilter(&mut self, candidates: &[Candidate]) {
        self.visible = filter_candidates(candidates, &self.filter_text);
        if self.cursor >= self.visible.len() {
            self.cursor = 0;
        }
        self.scroll_to_cursor();
        self.check_invariants();
    }

    fn scroll_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.page_size {
            self.offset = self.cursor + 1 - self.page_size;
        }
        // Keep the page full when it grew or the list shrank
        self.offset = self
            .offset
            .min(self.visible.len().saturating_sub(self.page_size));
        self.check_invariants();
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.visible.is_empty() || self.cursor < self.visible.len(),
            "cursor {} outside of {} visible candidates",
            self.cursor,
            self.visible.len()
        );
        debug_assert!(self.offset <= self.cursor || self.visible.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(values: &[&str]) -> Vec<Candidate> {
        values.iter().map(|v| Candidate::new(*v)).collect()
    }

    #[test]
    fn test_move_down_wraps_around() {
        for count in 1..6 {
            let mut state = SelectionState::new(count, 3);
            state.move_down();
            let start = state.cursor();
            for _ in 0..count {
                state.move_down();
            }
            assert_eq!(state.cursor(), start, "count {count}");
        }
    }

    #[test]
    fn test_move_up_from_first_goes_to_last() {
        let mut state = SelectionState::new(4, 10);
        state.move_up();
        assert_eq!(state.cursor(), 3);
        state.move_down();
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_move_is_noop_for_single_candidate() {
        let mut state = SelectionState::new(1, 10);
        state.move_down();
        state.move_up();
        assert_eq!(state.cursor(), 0);

        let mut empty = SelectionState::new(0, 10);
        empty.move_down();
        assert_eq!(empty.current(), None);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut state = SelectionState::new(4, 10);
        state.toggle_current();
        state.move_down();
        state.move_down();

        let before = state.clone();
        state.toggle_current();
        state.toggle_current();
        assert_eq!(state, before);
        assert_eq!(state.checked(), [0]);
        assert_eq!(state.order(), [0]);
    }

    #[test]
    fn test_untoggle_keeps_remaining_order() {
        let mut state = SelectionState::new(4, 10);
        for index in [2, 0, 3] {
            state.move_to(index);
            state.toggle_current();
        }
        assert_eq!(state.order(), [2, 0, 3]);

        state.move_to(0);
        state.toggle_current();
        assert_eq!(state.order(), [2, 3]);

        state.move_to(1);
        state.toggle_current();
        assert_eq!(state.order(), [2, 3, 1]);
        assert_eq!(state.checked(), [1, 2, 3]);
        assert_eq!(state.order_position(3), Some(2));
    }

    #[test]
    fn test_toggle_all_and_invert() {
        let mut state = SelectionState::new(3, 10);
        state.move_to(1);
        state.toggle_current();

        state.toggle_all();
        assert_eq!(state.order(), [1, 0, 2]);

        state.toggle_all();
        assert!(state.checked().is_empty());

        state.move_to(2);
        state.toggle_current();
        state.invert();
        assert_eq!(state.order(), [0, 1]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let items = candidates(&["foo", "bar", "LOREM", "ipsum"]);
        assert_eq!(filter_candidates(&items, "lorem"), [2]);
        assert_eq!(filter_candidates(&items, "O"), [0, 2]);
        assert_eq!(filter_candidates(&items, ""), [0, 1, 2, 3]);
        // Subsequences do not match.
        assert!(filter_candidates(&items, "lrm").is_empty());
    }

    #[test]
    fn test_filter_resets_cursor_outside_subset() {
        let items = candidates(&["foo", "bar", "lorem", "ipsum"]);
        let mut state = SelectionState::new(items.len(), 10);
        state.move_to(3);

        state.push_filter('o', &items);
        assert_eq!(state.visible(), [0, 2]);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.current(), Some(0));

        state.move_down();
        state.push_filter('r', &items);
        assert_eq!(state.visible(), [2]);
        assert_eq!(state.current(), Some(2));

        state.pop_filter(&items);
        assert_eq!(state.filter_text(), "o");
        assert_eq!(state.visible(), [0, 2]);
    }

    #[test]
    fn test_filter_without_matches() {
        let items = candidates(&["foo", "bar"]);
        let mut state = SelectionState::new(items.len(), 10);
        state.push_filter('z', &items);
        assert_eq!(state.current(), None);
        state.move_down();
        state.toggle_current();
        assert!(state.checked().is_empty());
    }

    #[test]
    fn test_viewport_follows_cursor() {
        let mut state = SelectionState::new(10, 3);
        for _ in 0..4 {
            state.move_down();
        }
        assert_eq!(state.cursor(), 4);
        assert_eq!(state.offset(), 2);

        state.move_to(0);
        assert_eq!(state.offset(), 0);

        state.move_up();
        assert_eq!(state.cursor(), 9);
        assert_eq!(state.offset(), 7);

        state.set_page_size(1);
        assert_eq!(state.offset(), 9);
    }

    #[test]
    fn test_viewport_fills_page_after_growing() {
        let mut state = SelectionState::new(10, 3);
        state.move_up();
        assert_eq!(state.offset(), 7);

        state.set_page_size(8);
        assert_eq!(state.cursor(), 9);
        assert_eq!(state.offset(), 2);
    }

    #[test]
    fn test_viewport_fills_page_after_filtering() {
        let items = candidates(&["ax", "bx", "cx", "dx", "ex", "f"]);
        let mut state = SelectionState::new(items.len(), 2);
        state.move_to(5);
        state.move_up();
        assert_eq!(state.cursor(), 4);
        assert_eq!(state.offset(), 4);

        state.push_filter('x', &items);
        assert_eq!(state.visible(), [0, 1, 2, 3, 4]);
        assert_eq!(state.cursor(), 4);
        assert_eq!(state.offset(), 3);
    }

    #[test]
    fn test_phase_transitions() {
        let mut state = SelectionState::new(2, 10);
        assert_eq!(state.phase(), Phase::Idle);
        state.begin();
        assert_eq!(state.phase(), Phase::Navigating);
        state.submit();
        assert!(state.phase().is_terminal());
    }

    #[test]
    fn test_cancel_discards_selection() {
        let items = candidates(&["foo", "bar"]);
        let mut state = SelectionState::new(items.len(), 10);
        state.toggle_current();
        state.push_filter('f', &items);
        state.cancel();
        assert_eq!(state.phase(), Phase::Cancelled);
        assert!(state.checked().is_empty());
        assert_eq!(state.filter_text(), "");
    }
}
