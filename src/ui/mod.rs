//! UI components module.
//!
//! Contains ratatui widgets for displaying the application interface.

pub mod dialog;
pub mod pager;
pub mod search;
pub mod table;

pub use dialog::{render_alert, render_form, render_loading};
pub use pager::render_pager;
pub use search::render_search;
pub use table::{TABLE_HEADER_ROWS, render_detail, render_table};

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas of the main view.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppLayout {
    pub search: Rect,
    pub table: Rect,
    pub detail: Rect,
    pub pager: Rect,
    pub status: Rect,
    /// Page index of the first product row drawn in the table
    pub table_offset: usize,
}

impl AppLayout {
    /// Split the terminal area into the main view sections.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(5),    // Product table
                Constraint::Length(5), // Details
                Constraint::Length(4), // Pagination
                Constraint::Length(1), // Status bar
            ])
            .split(area);
        Self {
            search: chunks[0],
            table: chunks[1],
            detail: chunks[2],
            pager: chunks[3],
            status: chunks[4],
            table_offset: 0,
        }
    }

    /// Page row under a terminal position inside the table, if any.
    ///
    /// # Details
    /// Accounts for the scroll offset of the last drawn frame.
    pub fn table_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.table;
        let first_row = area.y + TABLE_HEADER_ROWS;
        let last_row = area.y + area.height.saturating_sub(1); // bottom border
        if column < area.x || column >= area.x + area.width || row < first_row || row >= last_row
        {
            return None;
        }
        Some((row - first_row) as usize + self.table_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_row_at() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 40));
        let table = layout.table;
        assert_eq!(table.y, 3);
        assert_eq!(layout.table_row_at(10, table.y), None);
        assert_eq!(layout.table_row_at(10, table.y + 1), None);
        assert_eq!(layout.table_row_at(10, table.y + 2), Some(0));
        assert_eq!(layout.table_row_at(10, table.y + 5), Some(3));
        assert_eq!(layout.table_row_at(10, table.y + table.height - 1), None);
        assert_eq!(layout.table_row_at(100, table.y + 2), None);
    }

    #[test]
    fn test_table_row_at_adds_scroll_offset() {
        let mut layout = AppLayout::new(Rect::new(0, 0, 100, 40));
        layout.table_offset = 7;
        let table = layout.table;
        assert_eq!(layout.table_row_at(10, table.y + 2), Some(7));
        assert_eq!(layout.table_row_at(10, table.y + 4), Some(9));
        assert_eq!(layout.table_row_at(10, table.y + 1), None);
    }
}
