//! End-of-list paging trigger.

/// Decides when reaching the tail of the rendered list should load the
/// next page.
///
/// A client reports which row indices become visible as the user scrolls.
/// When the final row of the current list comes into view the pager fires
/// once; it will not fire for that tail again until the list grows (or
/// the pager is reset by a filter change).
#[derive(Debug, Clone, Default)]
pub struct EndPager {
    /// Tail index we already fired for.
    fired_at: Option<usize>,
}

impl EndPager {
    /// Create a pager with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report that the row at `visible_index` (0-based) of a list with
    /// `item_count` rows became visible. Returns whether the caller
    /// should load the next page.
    pub fn observe(&mut self, visible_index: usize, item_count: usize) -> bool {
        if item_count == 0 || visible_index + 1 != item_count {
            return false;
        }
        if self.fired_at == Some(visible_index) {
            return false;
        }
        self.fired_at = Some(visible_index);
        true
    }

    /// Forget the firing history, e.g. after a filter change replaced
    /// the list.
    pub fn reset(&mut self) {
        self.fired_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_on_the_tail_row() {
        let mut pager = EndPager::new();
        assert!(!pager.observe(0, 24));
        assert!(!pager.observe(10, 24));
        assert!(pager.observe(23, 24));
    }

    #[test]
    fn fires_once_per_tail() {
        let mut pager = EndPager::new();
        assert!(pager.observe(23, 24));
        assert!(!pager.observe(23, 24), "same tail must not re-fire");

        // List grew by a page; the new tail fires again.
        assert!(pager.observe(47, 48));
    }

    #[test]
    fn reset_allows_refiring() {
        let mut pager = EndPager::new();
        assert!(pager.observe(23, 24));
        pager.reset();
        assert!(pager.observe(23, 24));
    }

    #[test]
    fn empty_list_never_fires() {
        let mut pager = EndPager::new();
        assert!(!pager.observe(0, 0));
    }
}
