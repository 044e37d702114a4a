//! Filtering and sorting of the product dataset.
//!
//! The filtered view is always derived from scratch: filter on title, then
//! an optional stable sort.

use crate::catalog::Product;
use std::cmp::Ordering;

/// Column the view can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Title,
    Price,
    Category,
}

impl SortColumn {
    /// Header label for the column.
    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Title => "Title",
            SortColumn::Price => "Price",
            SortColumn::Category => "Category",
        }
    }

    /// Compare two products on this column, case-insensitive for text.
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            // NaN never comes from the service; treat it as equal
            SortColumn::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
            SortColumn::Category => a
                .category_name()
                .to_lowercase()
                .cmp(&b.category_name().to_lowercase()),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Arrow shown next to the active column header.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: None,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortState {
    /// Select a column.
    ///
    /// # Details
    /// Selecting the active column flips the direction; selecting a new
    /// column resets to ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Human-readable description, e.g. "Price ▼".
    pub fn describe(&self) -> String {
        match self.column {
            Some(column) => format!("{} {}", column.label(), self.direction.arrow()),
            None => "none".to_string(),
        }
    }

    /// Stable in-place sort; a no-op when no column is active.
    pub fn apply(&self, products: &mut [Product]) {
        let Some(column) = self.column else {
            return;
        };
        match self.direction {
            SortDirection::Ascending => products.sort_by(|a, b| column.compare(a, b)),
            SortDirection::Descending => products.sort_by(|a, b| column.compare(b, a)),
        }
    }
}

/// Whether a product title contains the (already lowercased) search term.
fn title_matches(product: &Product, term_lower: &str) -> bool {
    term_lower.is_empty() || product.title.to_lowercase().contains(term_lower)
}

/// Derive the filtered and sorted view from the dataset.
///
/// # Arguments
/// * `dataset` - All products
/// * `search` - Search term, matched case-insensitively against titles
/// * `sort` - Sort to apply after filtering
///
/// # Returns
/// * `Vec<Product>` - The derived view
pub fn derive_view(dataset: &[Product], search: &str, sort: &SortState) -> Vec<Product> {
    let term = search.to_lowercase();
    let mut view: Vec<Product> = dataset
        .iter()
        .filter(|p| title_matches(p, &term))
        .cloned()
        .collect();
    sort.apply(&mut view);
    view
}
