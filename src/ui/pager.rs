//! Pagination bar rendering.
//!
//! Displays previous/next controls, the page window, and view settings.

use crate::app::App;
use crate::pagination::PageLink;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

fn link_style(link: &PageLink) -> Style {
    if link.active {
        Style::default()
            .fg(Color::Yellow)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else if link.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Render the pagination bar.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Line 1: `« Prev  1 [2] 3 4  Next »` and the "Showing a-b of n items" summary.
/// Line 2: page size and sort settings.
pub fn render_pager(app: &App, area: Rect, buf: &mut Buffer) {
    let len = app.view.len();
    let mut controls_line = Vec::new();

    match app.pagination.controls(len) {
        Some(controls) => {
            controls_line.push(Span::styled("« Prev ", link_style(&controls.prev)));
            for link in &controls.pages {
                let text = if link.active {
                    format!("[{}]", link.page)
                } else {
                    format!(" {} ", link.page)
                };
                controls_line.push(Span::styled(text, link_style(link)));
            }
            controls_line.push(Span::styled(" Next »", link_style(&controls.next)));
        }
        None => controls_line.push(Span::styled(
            "No pages",
            Style::default().fg(Color::DarkGray),
        )),
    }

    if let Some(summary) = app.pagination.summary(len) {
        controls_line.push(Span::raw("   "));
        controls_line.push(Span::styled(summary, Style::default().fg(Color::Gray)));
    }

    let settings_line = Line::from(vec![
        Span::styled("Page size: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            app.pagination.page_size().to_string(),
            Style::default().fg(Color::White),
        ),
        Span::styled("   Sort: ", Style::default().fg(Color::Cyan)),
        Span::styled(app.sort.describe(), Style::default().fg(Color::Magenta)),
    ]);

    let paragraph = Paragraph::new(vec![Line::from(controls_line), settings_line])
        .block(Block::default().title("Pages").borders(Borders::ALL));

    Widget::render(paragraph, area, buf);
}
