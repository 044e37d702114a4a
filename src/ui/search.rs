//! Title filter bar above the product table.

use crate::app::{App, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Right-hand block title: how many products the title filter keeps.
fn match_summary(app: &App) -> Line<'static> {
    if app.search_query.is_empty() {
        return Line::from(format!(" {} products ", app.dataset.len())).right_aligned();
    }
    if app.view.is_empty() && !app.dataset.is_empty() {
        return Line::from(Span::styled(
            " no title matches ",
            Style::default().fg(Color::Red),
        ))
        .right_aligned();
    }
    Line::from(format!(
        " {} of {} match ",
        app.view.len(),
        app.dataset.len()
    ))
    .right_aligned()
}

/// Render the title filter bar.
///
/// # Details
/// While typing, the bar shows a cursor and the editing keys. Otherwise it
/// shows the current term, or how to start filtering when there is none.
pub fn render_search(app: &App, area: Rect, buf: &mut Buffer) {
    let editing = app.mode == UiMode::Search;

    let mut spans = vec![Span::styled(
        "Title contains ",
        Style::default().fg(Color::Yellow),
    )];
    if editing {
        spans.push(Span::styled(
            app.search_query.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            "  Enter/Esc done · Ctrl-u clear",
            Style::default().fg(Color::DarkGray),
        ));
    } else if app.search_query.is_empty() {
        spans.push(Span::styled(
            "anything (press '/' to filter)",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            format!("\"{}\"", app.search_query),
            Style::default().fg(Color::Gray),
        ));
    }

    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Filter")
            .title(match_summary(app))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    Widget::render(paragraph, area, buf);
}
