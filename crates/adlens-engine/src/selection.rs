//! The preview / drill-down state machine.
//!
//! A rendered table has one selection lifecycle: clicking a row opens a
//! preview of it, the preview can expand into the full detail modal, and
//! closing the modal clears the selection entirely (it does not fall back
//! to the preview). The machine is pure: [`Selection::apply`] maps a state
//! and an event to the next state, and every event is total over every
//! state so an out-of-place event is a no-op rather than a failure.
//!
//! The machine is generic over the row handle `R`. The table surface uses
//! the row's `creative_id` so the selection never owns or copies a record;
//! tests may use `&AdRecord` directly.

/// Drill-down state: nothing selected, a row previewed, or a row expanded
/// into the detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<R> {
    /// No preview is shown.
    Closed,
    /// The preview panel shows this row.
    Previewing(R),
    /// The detail modal shows this row.
    Expanded(R),
}

impl<R> Default for Selection<R> {
    fn default() -> Self {
        Selection::Closed
    }
}

/// Events driving the selection machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent<R> {
    /// A table row was clicked.
    RowClicked(R),
    /// The preview panel was dismissed.
    ClosePreview,
    /// The preview's "view full details" affordance was activated.
    Expand,
    /// The detail modal was dismissed.
    CloseModal,
}

impl<R> Selection<R> {
    /// Applies one event, returning the next state.
    ///
    /// Transitions:
    ///
    /// ```text
    /// Closed        --RowClicked(r)--> Previewing(r)
    /// Previewing(_) --RowClicked(r)--> Previewing(r)   (replaces the row)
    /// Previewing(r) --Expand--------->  Expanded(r)
    /// Previewing(_) --ClosePreview--->  Closed
    /// Expanded(_)   --CloseModal----->  Closed         (selection cleared)
    /// ```
    ///
    /// Everything else is a no-op: expanding with nothing previewed,
    /// clicking a row while the modal covers the table, or closing a panel
    /// that is not open all leave the state unchanged.
    pub fn apply(self, event: SelectionEvent<R>) -> Self {
        match (self, event) {
            (Selection::Expanded(row), SelectionEvent::RowClicked(_)) => Selection::Expanded(row),
            (_, SelectionEvent::RowClicked(row)) => Selection::Previewing(row),
            (Selection::Previewing(_), SelectionEvent::ClosePreview) => Selection::Closed,
            (Selection::Previewing(row), SelectionEvent::Expand) => Selection::Expanded(row),
            (Selection::Expanded(_), SelectionEvent::CloseModal) => Selection::Closed,
            (state, SelectionEvent::ClosePreview)
            | (state, SelectionEvent::Expand)
            | (state, SelectionEvent::CloseModal) => state,
        }
    }

    /// Convenience for [`SelectionEvent::RowClicked`].
    pub fn row_clicked(self, row: R) -> Self {
        self.apply(SelectionEvent::RowClicked(row))
    }

    /// Convenience for [`SelectionEvent::ClosePreview`].
    pub fn close_preview(self) -> Self {
        self.apply(SelectionEvent::ClosePreview)
    }

    /// Convenience for [`SelectionEvent::Expand`].
    pub fn expand(self) -> Self {
        self.apply(SelectionEvent::Expand)
    }

    /// Convenience for [`SelectionEvent::CloseModal`].
    pub fn close_modal(self) -> Self {
        self.apply(SelectionEvent::CloseModal)
    }

    /// The selected row handle, in either the previewing or expanded state.
    pub fn selected(&self) -> Option<&R> {
        match self {
            Selection::Closed => None,
            Selection::Previewing(row) | Selection::Expanded(row) => Some(row),
        }
    }

    /// `true` when nothing is selected.
    pub fn is_closed(&self) -> bool {
        matches!(self, Selection::Closed)
    }

    /// `true` when the preview panel is shown.
    pub fn is_previewing(&self) -> bool {
        matches!(self, Selection::Previewing(_))
    }

    /// `true` when the detail modal is shown.
    pub fn is_expanded(&self) -> bool {
        matches!(self, Selection::Expanded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let selection: Selection<&str> = Selection::default();
        assert!(selection.is_closed());
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn click_previews_row() {
        let selection = Selection::Closed.row_clicked("a");
        assert_eq!(selection, Selection::Previewing("a"));
        assert_eq!(selection.selected(), Some(&"a"));
    }

    #[test]
    fn click_while_previewing_replaces_row() {
        let selection = Selection::Closed.row_clicked("a").row_clicked("b");
        assert_eq!(selection, Selection::Previewing("b"));
    }

    #[test]
    fn close_preview_clears_selection() {
        let selection = Selection::Closed.row_clicked("a").close_preview();
        assert!(selection.is_closed());
    }

    #[test]
    fn expand_moves_to_modal() {
        let selection = Selection::Closed.row_clicked("a").expand();
        assert_eq!(selection, Selection::Expanded("a"));
        assert!(selection.is_expanded());
    }

    #[test]
    fn close_modal_returns_to_closed_not_previewing() {
        let selection = Selection::Closed.row_clicked("a").expand().close_modal();
        assert!(selection.is_closed());
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn expand_from_closed_is_noop() {
        let selection: Selection<&str> = Selection::Closed.expand();
        assert!(selection.is_closed());
    }

    #[test]
    fn click_while_expanded_is_noop() {
        let selection = Selection::Closed.row_clicked("a").expand().row_clicked("b");
        assert_eq!(selection, Selection::Expanded("a"));
    }

    #[test]
    fn close_preview_while_expanded_is_noop() {
        let selection = Selection::Closed.row_clicked("a").expand().close_preview();
        assert_eq!(selection, Selection::Expanded("a"));
    }

    #[test]
    fn close_modal_while_previewing_is_noop() {
        let selection = Selection::Closed.row_clicked("a").close_modal();
        assert_eq!(selection, Selection::Previewing("a"));
    }

    #[test]
    fn apply_matches_convenience_methods() {
        let via_apply = Selection::Closed
            .apply(SelectionEvent::RowClicked("a"))
            .apply(SelectionEvent::Expand)
            .apply(SelectionEvent::CloseModal);
        let via_methods = Selection::Closed.row_clicked("a").expand().close_modal();
        assert_eq!(via_apply, via_methods);
    }
}
