//! Create/edit form state.
//!
//! Holds the raw text of each field and coerces it into a request payload.

use crate::catalog::models::DEFAULT_UPLOAD_IMAGE;
use crate::catalog::{Product, ProductPayload};
use thiserror::Error;

/// What saving the form will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Create,
    /// Update the product with this ID
    Update(i64),
}

/// Editable form fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Price,
    Description,
    CategoryId,
    Image,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Price,
        FormField::Description,
        FormField::CategoryId,
        FormField::Image,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Price => "Price",
            FormField::Description => "Description",
            FormField::CategoryId => "Category ID",
            FormField::Image => "Image URL",
        }
    }

    fn index(self) -> usize {
        match self {
            FormField::Title => 0,
            FormField::Price => 1,
            FormField::Description => 2,
            FormField::CategoryId => 3,
            FormField::Image => 4,
        }
    }
}

/// Type coercion failures when building a payload.
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Price must be a number, got '{0}'")]
    InvalidPrice(String),
    #[error("Category ID must be a whole number, got '{0}'")]
    InvalidCategoryId(String),
}

/// Form dialog state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub action: FormAction,
    /// Dialog heading
    pub heading: String,
    pub title: String,
    pub price: String,
    pub description: String,
    pub category_id: String,
    pub image: String,
    pub focus: FormField,
}

impl ProductForm {
    /// Empty form for a new product.
    pub fn create() -> Self {
        Self {
            action: FormAction::Create,
            heading: "Create new product".to_string(),
            title: String::new(),
            price: String::new(),
            description: String::new(),
            category_id: String::new(),
            image: String::new(),
            focus: FormField::Title,
        }
    }

    /// Form pre-filled from an existing product.
    ///
    /// # Details
    /// The category ID defaults to 1 when the product has no category, and
    /// the image field holds the cleaned first image.
    pub fn edit(product: &Product) -> Self {
        Self {
            action: FormAction::Update(product.id),
            heading: format!("Edit: {}", product.title),
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category_id: product.category_id().to_string(),
            image: product.first_image().unwrap_or_default(),
            focus: FormField::Title,
        }
    }

    /// Label of the save button.
    pub fn submit_label(&self) -> &'static str {
        match self.action {
            FormAction::Create => "Create",
            FormAction::Update(_) => "Update",
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Price => &self.price,
            FormField::Description => &self.description,
            FormField::CategoryId => &self.category_id,
            FormField::Image => &self.image,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Price => &mut self.price,
            FormField::Description => &mut self.description,
            FormField::CategoryId => &mut self.category_id,
            FormField::Image => &mut self.image,
        }
    }

    pub fn push_char(&mut self, ch: char) {
        let focus = self.focus;
        self.value_mut(focus).push(ch);
    }

    pub fn pop_char(&mut self) {
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    /// Move focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % FormField::ALL.len();
        self.focus = FormField::ALL[next];
    }

    /// Move focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        let len = FormField::ALL.len();
        let prev = (self.focus.index() + len - 1) % len;
        self.focus = FormField::ALL[prev];
    }

    /// Coerce the field text into a request payload.
    ///
    /// # Returns
    /// * `Result<ProductPayload, FormError>` - Payload, or the first field that failed to parse
    ///
    /// # Details
    /// Title and description are sent as typed. An empty image URL is
    /// replaced by a stock image.
    pub fn to_payload(&self) -> Result<ProductPayload, FormError> {
        let price_text = self.price.trim();
        let price: f64 = price_text
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite())
            .ok_or_else(|| FormError::InvalidPrice(price_text.to_string()))?;

        let category_text = self.category_id.trim();
        let category_id: i64 = category_text
            .parse()
            .map_err(|_| FormError::InvalidCategoryId(category_text.to_string()))?;

        let image = self.image.trim();
        let image = if image.is_empty() {
            DEFAULT_UPLOAD_IMAGE.to_string()
        } else {
            image.to_string()
        };

        Ok(ProductPayload {
            title: self.title.clone(),
            price,
            description: self.description.clone(),
            category_id,
            images: vec![image],
        })
    }
}
