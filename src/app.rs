//! Application state management.
//!
//! Manages the product dataset, the derived view, paging, selection, the
//! edit form, and UI mode.

use crate::catalog::Product;
use crate::form::ProductForm;
use crate::pagination::Pagination;
use crate::view::{SortColumn, SortState, derive_view};
use std::cmp;

/// Application UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal table view
    List,
    /// Typing into the search bar
    Search,
    /// Create/edit form dialog
    Form,
    /// Blocking message box
    Alert,
}

/// Main application state.
///
/// The view is always recomputed from the dataset; nothing patches it in place.
#[derive(Debug)]
pub struct App {
    /// All products from the last fetch, create, or update
    pub dataset: Vec<Product>,
    /// Filtered and sorted products
    pub view: Vec<Product>,
    /// Selected row within the current page
    pub selected_row: usize,
    /// Search term matched against titles
    pub search_query: String,
    /// Active sort
    pub sort: SortState,
    /// Current page and page size
    pub pagination: Pagination,
    /// Current UI mode
    pub mode: UiMode,
    /// Open form dialog, if any
    pub form: Option<ProductForm>,
    /// Message shown in the alert box
    pub alert: Option<String>,
    /// Status message to display
    pub status_message: Option<String>,
    /// Message for the loading overlay while a request is in flight
    pub loading: Option<String>,
}

impl App {
    /// Create a new application state.
    ///
    /// # Arguments
    /// * `page_size` - Initial rows per page
    ///
    /// # Returns
    /// * `App` - New application state with an empty dataset
    pub fn new(page_size: usize) -> Self {
        Self {
            dataset: Vec::new(),
            view: Vec::new(),
            selected_row: 0,
            search_query: String::new(),
            sort: SortState::default(),
            pagination: Pagination::new(page_size),
            mode: UiMode::List,
            form: None,
            alert: None,
            status_message: None,
            loading: None,
        }
    }

    /// Replace the dataset and re-apply the current search.
    ///
    /// # Arguments
    /// * `products` - Freshly fetched products
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.dataset = products;
        self.apply_search();
    }

    /// Re-apply the search term from page 1.
    pub fn apply_search(&mut self) {
        self.pagination.reset();
        self.selected_row = 0;
        self.refresh_view();
    }

    /// Recompute the view from the dataset and clamp page and selection.
    pub fn refresh_view(&mut self) {
        self.view = derive_view(&self.dataset, &self.search_query, &self.sort);
        self.pagination.clamp(self.view.len());
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected_row = cmp::min(
            self.selected_row,
            self.page_products().len().saturating_sub(1),
        );
    }

    /// Add a character to the search query.
    ///
    /// # Details
    /// Only works in Search mode.
    pub fn add_search_char(&mut self, ch: char) {
        if self.mode == UiMode::Search {
            self.search_query.push(ch);
            self.apply_search();
        }
    }

    /// Remove last character from search query.
    ///
    /// # Details
    /// Only works in Search mode.
    pub fn remove_search_char(&mut self) {
        if self.mode == UiMode::Search {
            self.search_query.pop();
            self.apply_search();
        }
    }

    /// Clear search query.
    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.apply_search();
    }

    /// Sort by a column, flipping direction if it is already active.
    ///
    /// # Details
    /// Keeps the current page (clamped) rather than jumping back to page 1.
    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort.toggle(column);
        self.refresh_view();
    }

    /// Move to the next page size choice and back to page 1.
    pub fn cycle_page_size(&mut self) {
        self.pagination.cycle_page_size();
        self.selected_row = 0;
        self.refresh_view();
    }

    /// Go to a page; out-of-range pages are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let changed = self.pagination.go_to(page, self.view.len());
        if changed {
            self.selected_row = 0;
        }
        changed
    }

    pub fn next_page(&mut self) -> bool {
        let changed = self.pagination.next(self.view.len());
        if changed {
            self.selected_row = 0;
        }
        changed
    }

    pub fn prev_page(&mut self) -> bool {
        let changed = self.pagination.prev(self.view.len());
        if changed {
            self.selected_row = 0;
        }
        changed
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages())
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.view.len())
    }

    /// Products on the current page.
    pub fn page_products(&self) -> &[Product] {
        &self.view[self.pagination.range(self.view.len())]
    }

    /// Get the currently selected product.
    ///
    /// # Returns
    /// * `Option<&Product>` - Selected product or None if the page is empty
    pub fn selected_product(&self) -> Option<&Product> {
        self.page_products().get(self.selected_row)
    }

    /// Move selection up.
    ///
    /// # Details
    /// Wraps to the bottom of the current page.
    pub fn move_up(&mut self) {
        let len = self.page_products().len();
        if len == 0 {
            return;
        }
        if self.selected_row == 0 {
            self.selected_row = len - 1;
        } else {
            self.selected_row -= 1;
        }
    }

    /// Move selection down.
    ///
    /// # Details
    /// Wraps to the top of the current page.
    pub fn move_down(&mut self) {
        let len = self.page_products().len();
        if len == 0 {
            return;
        }
        self.selected_row = (self.selected_row + 1) % len;
    }

    /// Select a row on the current page.
    ///
    /// # Returns
    /// * `bool` - False if the row does not exist
    pub fn select_row(&mut self, row: usize) -> bool {
        if row < self.page_products().len() {
            self.selected_row = row;
            true
        } else {
            false
        }
    }

    /// Open an empty form for a new product.
    pub fn open_create_form(&mut self) {
        self.form = Some(ProductForm::create());
        self.mode = UiMode::Form;
    }

    /// Open the form pre-filled from the selected product.
    ///
    /// # Returns
    /// * `bool` - False if nothing is selected
    pub fn open_edit_form(&mut self) -> bool {
        let Some(product) = self.selected_product() else {
            return false;
        };
        self.form = Some(ProductForm::edit(product));
        self.mode = UiMode::Form;
        true
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.mode = UiMode::List;
    }

    /// Put a product returned by a create call at the front of the dataset.
    pub fn insert_created(&mut self, product: Product) {
        self.dataset.insert(0, product);
        self.apply_search();
    }

    /// Replace the dataset entry that an update call was sent for.
    ///
    /// # Arguments
    /// * `id` - ID the update was addressed to
    /// * `product` - Product returned by the service
    ///
    /// # Returns
    /// * `bool` - False if no entry had that ID (dataset unchanged)
    ///
    /// # Details
    /// Matching uses `id`, not the ID echoed back in `product`.
    pub fn replace_updated(&mut self, id: i64, product: Product) -> bool {
        let found = match self.dataset.iter().position(|p| p.id == id) {
            Some(index) => {
                self.dataset[index] = product;
                true
            }
            None => false,
        };
        self.apply_search();
        found
    }

    /// Show a blocking message box.
    pub fn show_alert(&mut self, message: String) {
        self.alert = Some(message);
        self.mode = UiMode::Alert;
    }

    /// Close the message box, returning to the form if one is open.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.mode = if self.form.is_some() {
            UiMode::Form
        } else {
            UiMode::List
        };
    }

    /// Set status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn set_loading(&mut self, message: &str) {
        self.loading = Some(message.to_string());
    }

    pub fn clear_loading(&mut self) {
        self.loading = None;
    }
}
