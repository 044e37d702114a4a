//! Product table and detail pane rendering.

use crate::app::App;
use crate::view::SortColumn;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget, Wrap,
    },
};

/// Rows taken by the top border and the header before the first product row.
pub const TABLE_HEADER_ROWS: u16 = 2;

/// Header cell text, with the sort key and the direction arrow when active.
fn header_label(app: &App, column: SortColumn, key: char) -> String {
    match app.sort.column {
        Some(active) if active == column => {
            format!("{} {} [{}]", column.label(), app.sort.direction.arrow(), key)
        }
        _ => format!("{} [{}]", column.label(), key),
    }
}

/// Render the product table for the current page.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Returns
/// * `usize` - Page index of the first visible row after scrolling
///
/// # Details
/// Shows ID, title, price, category and image columns and highlights the
/// selected row. An empty page shows "No data found". When the selection is
/// below the visible rows the table scrolls, so the returned offset is needed
/// to map screen rows back to products.
pub fn render_table(app: &App, area: Rect, buf: &mut Buffer) -> usize {
    let block = Block::default()
        .title(format!(
            "Products (page {}/{})",
            app.pagination.current_page(),
            app.total_pages().max(1)
        ))
        .borders(Borders::ALL);

    let products = app.page_products();
    if products.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No data found",
            Style::default().fg(Color::Gray),
        )))
        .alignment(ratatui::layout::Alignment::Center)
        .block(block);
        Widget::render(empty, area, buf);
        return 0;
    }

    let header_style = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from(header_label(app, SortColumn::Id, '1')),
        Cell::from(header_label(app, SortColumn::Title, '2')),
        Cell::from(header_label(app, SortColumn::Price, '3')),
        Cell::from(header_label(app, SortColumn::Category, '4')),
        Cell::from("Image"),
    ])
    .style(header_style)
    .height(1);

    let rows: Vec<Row> = products
        .iter()
        .map(|product| {
            Row::new(vec![
                Cell::from(product.id.to_string()),
                Cell::from(product.title.as_str()).style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::from(product.format_price()).style(Style::default().fg(Color::Green)),
                Cell::from(product.category_name()).style(Style::default().fg(Color::Yellow)),
                Cell::from(product.display_image()).style(Style::default().fg(Color::DarkGray)),
            ])
            .height(1)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(18),
            Constraint::Min(16),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(
        Style::default()
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = TableState::default();
    state.select(Some(app.selected_row.min(products.len() - 1)));

    StatefulWidget::render(table, area, buf, &mut state);
    state.offset()
}

/// Render details of the selected product.
///
/// # Details
/// Shows the description, the cleaned image URL and the last update time.
pub fn render_detail(app: &App, area: Rect, buf: &mut Buffer) {
    let lines = match app.selected_product() {
        Some(product) => {
            let mut lines = vec![Line::from(vec![
                Span::styled("Image: ", Style::default().fg(Color::Cyan)),
                Span::raw(product.display_image()),
            ])];
            if let Some(updated) = product.format_updated() {
                lines.push(Line::from(vec![
                    Span::styled("Updated: ", Style::default().fg(Color::Cyan)),
                    Span::raw(updated),
                ]));
            }
            let description = if product.description.is_empty() {
                "No description"
            } else {
                product.description.as_str()
            };
            lines.push(Line::from(Span::styled(
                description,
                Style::default().fg(Color::White),
            )));
            lines
        }
        None => vec![Line::from(Span::styled(
            "Nothing selected",
            Style::default().fg(Color::Gray),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Details").borders(Borders::ALL));

    Widget::render(paragraph, area, buf);
}
