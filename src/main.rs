//! Catalog TUI - Terminal User Interface for managing a REST product catalog.
//!
//! Main entry point and event loop for the application.

mod app;
mod catalog;
mod cli;
mod config;
mod export;
mod form;
mod logging;
mod pagination;
mod ui;
mod view;

use anyhow::Result;
use app::{App, UiMode};
use catalog::CatalogClient;
use clap::Parser;
use cli::Cli;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use form::FormAction;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use ui::AppLayout;
use view::SortColumn;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

const HELP_TEXT: &str = "q quit · / search · 1-4 sort · ←/→ page · z page size · n new · Enter edit · x export · r reload";

/// Work the event loop has to do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    None,
    Quit,
    Reload,
    Save,
    Export,
}

/// Main application entry point.
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Loads configuration, sets up logging and the terminal, then runs the
/// event loop. The product list is fetched once the UI is visible.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    if cli.init_config {
        let path = config.save(cli.config.as_deref())?;
        println!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    let _log_guard = logging::init_logging(&config.log_dir_path()?)?;
    tracing::info!(api_url = %config.api_url, page_size = config.page_size, "starting");

    let client = CatalogClient::new(&config)?;
    let mut app = App::new(config.page_size);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &client, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %format!("{:#}", e), "exiting with error");
    }
    result
}

/// Render the complete UI.
///
/// # Details
/// Draws the main view, then whichever overlay is active: form, alert, or
/// the loading indicator on top of everything. Records the layout and the
/// table scroll offset for mouse hit-testing.
fn render_ui(f: &mut ratatui::Frame, app: &App, layout: &mut AppLayout) {
    *layout = AppLayout::new(f.area());
    ui::render_search(app, layout.search, f.buffer_mut());
    layout.table_offset = ui::render_table(app, layout.table, f.buffer_mut());
    ui::render_detail(app, layout.detail, f.buffer_mut());
    ui::render_pager(app, layout.pager, f.buffer_mut());

    let status_text = app.status_message.as_deref().unwrap_or(HELP_TEXT);
    let status = ratatui::widgets::Paragraph::new(ratatui::text::Line::from(status_text));
    f.render_widget(status, layout.status);

    let area = f.area();
    if let Some(form) = &app.form {
        ui::render_form(form, area, f.buffer_mut());
    }
    if let Some(message) = &app.alert {
        ui::render_alert(message, area, f.buffer_mut());
    }
    if let Some(message) = &app.loading {
        ui::render_loading(message, area, f.buffer_mut());
    }
}

/// Draw one frame and remember the layout for mouse hit-testing.
fn draw(terminal: &mut Tui, app: &App, layout: &mut AppLayout) -> Result<()> {
    terminal.draw(|f| render_ui(f, app, layout))?;
    Ok(())
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `app` - Application state
/// * `client` - Catalog service client
/// * `config` - Configuration
///
/// # Returns
/// * `Result<()>` - Success or error
async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    client: &CatalogClient,
    config: &Config,
) -> Result<()> {
    let mut layout = AppLayout::default();

    reload_products(terminal, app, client, &mut layout).await?;

    loop {
        draw(terminal, app, &mut layout)?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let command = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(key, app),
            Event::Mouse(mouse) => {
                handle_mouse_event(mouse, app, &layout);
                Command::None
            }
            _ => Command::None,
        };

        match command {
            Command::None => {}
            Command::Quit => break,
            Command::Reload => reload_products(terminal, app, client, &mut layout).await?,
            Command::Save => save_form(terminal, app, client, &mut layout).await?,
            Command::Export => export_view(app, config),
        }
    }

    tracing::info!("quit");
    Ok(())
}

/// Map a key press to a state change or a command for the event loop.
fn handle_key(key: KeyEvent, app: &mut App) -> Command {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Command::Quit;
    }

    match app.mode {
        UiMode::List => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Command::Quit,
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Left | KeyCode::Char('h') => {
                app.prev_page();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                app.next_page();
            }
            KeyCode::Home | KeyCode::Char('g') => {
                app.first_page();
            }
            KeyCode::End | KeyCode::Char('G') => {
                app.last_page();
            }
            KeyCode::Char('/') => app.mode = UiMode::Search,
            KeyCode::Char('1') => sort_by(app, SortColumn::Id),
            KeyCode::Char('2') => sort_by(app, SortColumn::Title),
            KeyCode::Char('3') => sort_by(app, SortColumn::Price),
            KeyCode::Char('4') => sort_by(app, SortColumn::Category),
            KeyCode::Char('z') => {
                app.cycle_page_size();
                app.set_status(format!("Page size: {}", app.pagination.page_size()));
            }
            KeyCode::Char('n') => app.open_create_form(),
            KeyCode::Enter => {
                app.open_edit_form();
            }
            KeyCode::Char('x') => return Command::Export,
            KeyCode::Char('r') => return Command::Reload,
            _ => {}
        },
        UiMode::Search => match key.code {
            KeyCode::Enter | KeyCode::Esc => app.mode = UiMode::List,
            KeyCode::Backspace => app.remove_search_char(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.clear_search()
            }
            KeyCode::Char(c) => app.add_search_char(c),
            _ => {}
        },
        UiMode::Form => match key.code {
            KeyCode::Esc => app.close_form(),
            KeyCode::Enter => return Command::Save,
            KeyCode::Tab | KeyCode::Down => {
                if let Some(form) = app.form.as_mut() {
                    form.focus_next();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(form) = app.form.as_mut() {
                    form.focus_prev();
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = app.form.as_mut() {
                    form.pop_char();
                }
            }
            KeyCode::Char(c) => {
                if let Some(form) = app.form.as_mut() {
                    form.push_char(c);
                }
            }
            _ => {}
        },
        UiMode::Alert => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.dismiss_alert();
            }
        }
    }

    Command::None
}

fn sort_by(app: &mut App, column: SortColumn) {
    app.sort_by(column);
    app.set_status(format!("Sort: {}", app.sort.describe()));
}

/// Handle mouse events (scroll and click).
///
/// # Details
/// Scrolling moves the selection; a left click on a table row selects it and
/// opens the edit form.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, layout: &AppLayout) {
    if app.mode != UiMode::List {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => app.move_up(),
        MouseEventKind::ScrollDown => app.move_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(row) = layout.table_row_at(mouse.column, mouse.row)
                && app.select_row(row)
            {
                app.open_edit_form();
            }
        }
        _ => {}
    }
}

/// Fetch the full product list and replace the dataset.
///
/// # Details
/// On failure an alert is shown and the dataset is left as it was (empty on
/// startup).
async fn reload_products(
    terminal: &mut Tui,
    app: &mut App,
    client: &CatalogClient,
    layout: &mut AppLayout,
) -> Result<()> {
    app.set_loading("Loading products...");
    draw(terminal, app, layout)?;
    let result = client.fetch_products().await;
    app.clear_loading();

    match result {
        Ok(products) => {
            let count = products.len();
            app.set_products(products);
            app.set_status(format!("Loaded {} products", count));
        }
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "failed to load products");
            app.show_alert(format!("Failed to load data: {:#}", e));
        }
    }
    Ok(())
}

/// Submit the open form as a create or update call.
///
/// # Details
/// The dataset changes only after the service answered successfully. On
/// failure the form stays open behind the alert.
async fn save_form(
    terminal: &mut Tui,
    app: &mut App,
    client: &CatalogClient,
    layout: &mut AppLayout,
) -> Result<()> {
    let Some(form) = app.form.as_ref() else {
        return Ok(());
    };
    let action = form.action;
    let payload = match form.to_payload() {
        Ok(payload) => payload,
        Err(e) => {
            app.show_alert(e.to_string());
            return Ok(());
        }
    };

    app.set_loading("Saving...");
    draw(terminal, app, layout)?;
    let result = match action {
        FormAction::Create => client.create_product(&payload).await,
        FormAction::Update(id) => client.update_product(id, &payload).await,
    };
    app.clear_loading();

    match result {
        Ok(product) => {
            let message = match action {
                FormAction::Create => {
                    app.insert_created(product);
                    "Created successfully!"
                }
                FormAction::Update(id) => {
                    if !app.replace_updated(id, product) {
                        tracing::warn!(id, "updated product not found in dataset");
                    }
                    "Updated successfully!"
                }
            };
            app.close_form();
            app.show_alert(message.to_string());
        }
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), ?action, "failed to save product");
            app.show_alert(format!("An error occurred: {:#}", e));
        }
    }
    Ok(())
}

/// Write the current view to the export file.
fn export_view(app: &mut App, config: &Config) {
    if app.view.is_empty() {
        app.show_alert("No data to export!".to_string());
        return;
    }

    let path = config.export_file_path();
    match export::export_to_file(&app.view, &path) {
        Ok(rows) => app.set_status(format!("Exported {} products to {}", rows, path.display())),
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "export failed");
            app.show_alert(format!("Export failed: {:#}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn products(count: i64) -> Vec<Product> {
        (1..=count)
            .map(|id| {
                serde_json::from_value(serde_json::json!({
                    "id": id,
                    "title": format!("Item {}", id),
                    "price": id * 3,
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_list_keys() {
        let mut app = App::new(10);
        app.set_products(products(25));
        assert_eq!(handle_key(press(KeyCode::Right), &mut app), Command::None);
        assert_eq!(app.pagination.current_page(), 2);
        handle_key(press(KeyCode::Char('3')), &mut app);
        handle_key(press(KeyCode::Char('3')), &mut app);
        assert_eq!(app.view[0].id, 25);
        assert_eq!(handle_key(press(KeyCode::Char('x')), &mut app), Command::Export);
        assert_eq!(handle_key(press(KeyCode::Char('r')), &mut app), Command::Reload);
        assert_eq!(handle_key(press(KeyCode::Char('q')), &mut app), Command::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_c, &mut app), Command::Quit);
    }

    #[test]
    fn test_search_keys() {
        let mut app = App::new(10);
        app.set_products(products(12));
        handle_key(press(KeyCode::Char('/')), &mut app);
        assert_eq!(app.mode, UiMode::Search);
        handle_key(press(KeyCode::Char('1')), &mut app);
        handle_key(press(KeyCode::Char('2')), &mut app);
        assert_eq!(app.search_query, "12");
        assert_eq!(app.view.len(), 1);
        handle_key(press(KeyCode::Backspace), &mut app);
        assert_eq!(app.view.len(), 4); // 1, 10, 11, 12
        handle_key(press(KeyCode::Enter), &mut app);
        assert_eq!(app.mode, UiMode::List);
    }

    #[test]
    fn test_form_keys() {
        let mut app = App::new(10);
        app.set_products(products(2));
        handle_key(press(KeyCode::Enter), &mut app);
        assert_eq!(app.mode, UiMode::Form);
        handle_key(press(KeyCode::Char('!')), &mut app);
        assert_eq!(app.form.as_ref().map(|f| f.title.as_str()), Some("Item 1!"));
        handle_key(press(KeyCode::Tab), &mut app);
        handle_key(press(KeyCode::Backspace), &mut app);
        assert_eq!(app.form.as_ref().map(|f| f.price.as_str()), Some(""));
        assert_eq!(handle_key(press(KeyCode::Enter), &mut app), Command::Save);
        handle_key(press(KeyCode::Esc), &mut app);
        assert_eq!(app.mode, UiMode::List);
        assert!(app.form.is_none());
    }

    #[test]
    fn test_mouse_click_opens_edit_form() {
        let mut app = App::new(10);
        app.set_products(products(5));
        let layout = AppLayout::new(ratatui::layout::Rect::new(0, 0, 100, 40));
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: layout.table.y + 4,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(click, &mut app, &layout);
        assert_eq!(app.selected_row, 2);
        assert_eq!(app.mode, UiMode::Form);
        assert_eq!(app.form.as_ref().map(|f| f.action), Some(FormAction::Update(3)));
    }

    #[test]
    fn test_mouse_click_on_scrolled_table_opens_visible_product() {
        let mut app = App::new(50);
        app.set_products(products(50));
        for _ in 0..30 {
            app.move_down();
        }
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut layout = AppLayout::default();
        terminal
            .draw(|f| render_ui(f, &app, &mut layout))
            .unwrap();
        assert!(layout.table_offset > 0);

        let first_row = layout.table.y + ui::TABLE_HEADER_ROWS;
        let buffer = terminal.backend().buffer();
        let shown_id: String = (layout.table.x + 1..layout.table.x + 9)
            .map(|x| buffer[(x, first_row)].symbol())
            .collect::<String>()
            .trim()
            .to_string();

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: first_row,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(click, &mut app, &layout);
        let expected = shown_id.parse::<i64>().unwrap();
        assert_eq!(
            app.form.as_ref().map(|f| f.action),
            Some(FormAction::Update(expected))
        );
        assert_eq!(expected, layout.table_offset as i64 + 1);
    }

    #[test]
    fn test_export_empty_view_alerts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let config = Config {
            export_path: path.to_string_lossy().into_owned(),
            ..Config::default()
        };
        let mut app = App::new(10);
        export_view(&mut app, &config);
        assert_eq!(app.alert.as_deref(), Some("No data to export!"));
        assert!(!path.exists());

        app.dismiss_alert();
        app.set_products(products(3));
        export_view(&mut app, &config);
        assert!(app.alert.is_none());
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 4);
    }
}
