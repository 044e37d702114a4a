//! Overlay rendering: form dialog, alert box, and loading indicator.

use crate::form::{FormField, ProductForm};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Rectangle of at most `width` x `height` centered in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render the create/edit form dialog.
///
/// # Details
/// One line per field; the focused field is marked and shows a cursor.
pub fn render_form(form: &ProductForm, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(area.width.saturating_mul(3) / 4, 11, area);
    Clear.render(popup, buf);

    let mut lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| {
            let focused = field == form.focus;
            let marker = if focused { "▶ " } else { "  " };
            let label_style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(format!("{:<12}", field.label()), label_style),
                Span::styled(form.value(field), Style::default().fg(Color::White)),
                Span::styled(
                    if focused { "_" } else { "" },
                    Style::default().fg(Color::Yellow),
                ),
            ])
        })
        .collect();

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!(
            "Tab/↓ next field · Shift-Tab/↑ previous · Enter {} · Esc cancel",
            form.submit_label()
        ),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(form.heading.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    Widget::render(paragraph, popup, buf);
}

/// Render a blocking message box.
pub fn render_alert(message: &str, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(60, 7, area);
    Clear.render(popup, buf);

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::raw(""),
        Line::from(Span::styled(
            "Press Enter to close",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title("Notice")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );

    Widget::render(paragraph, popup, buf);
}

/// Render the loading indicator shown while a request is in flight.
pub fn render_loading(message: &str, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(40, 3, area);
    Clear.render(popup, buf);

    let paragraph = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    Widget::render(paragraph, popup, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 7, area);
        assert_eq!(popup, Rect::new(20, 16, 60, 7));

        let small = Rect::new(5, 5, 30, 4);
        let popup = centered_rect(60, 7, small);
        assert_eq!(popup, small);
    }

    #[test]
    fn test_render_form_shows_heading_and_values() {
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        let mut form = ProductForm::create();
        form.title = "Desk Lamp".to_string();
        render_form(&form, area, &mut buf);

        let text: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Create new product"));
        assert!(text.contains("Desk Lamp"));
        assert!(text.contains("Enter Create"));
    }
}
