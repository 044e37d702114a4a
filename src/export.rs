//! Export of the visible products to a comma-separated file.
//!
//! Text fields never get quoted: commas and line breaks are replaced with
//! spaces instead, so every product is exactly one line.

use crate::catalog::Product;
use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header row of every export.
pub const HEADER: [&str; 5] = ["ID", "Title", "Price", "Category", "Description"];

/// Replace characters that would break the one-line-per-row layout.
pub fn sanitize_field(text: &str) -> String {
    text.replace([',', '\n', '\r'], " ")
}

/// Write the header and one row per product.
///
/// # Arguments
/// * `products` - Products to export, in display order
/// * `writer` - Destination
///
/// # Returns
/// * `Result<usize>` - Number of product rows written (header not counted)
pub fn write_csv<W: Write>(products: &[Product], writer: W) -> Result<usize> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .context("Failed to write export header")?;

    for product in products {
        csv_writer
            .write_record([
                product.id.to_string(),
                sanitize_field(&product.title),
                product.price.to_string(),
                product
                    .category
                    .as_ref()
                    .map(|category| sanitize_field(&category.name))
                    .unwrap_or_default(),
                sanitize_field(&product.description),
            ])
            .with_context(|| format!("Failed to write export row for product {}", product.id))?;
    }

    csv_writer.flush().context("Failed to flush export")?;
    Ok(products.len())
}

/// Export products to a file, replacing any existing file.
///
/// # Returns
/// * `Result<usize>` - Number of product rows written
pub fn export_to_file(products: &[Product], path: &Path) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    let rows = write_csv(products, file)?;
    tracing::info!(rows, path = %path.display(), "exported products");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Category;
    use std::fs;
    use tempfile::TempDir;

    fn product(id: i64, title: &str, description: &str, category: Option<&str>) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 10.5,
            description: description.to_string(),
            category: category.map(|name| Category {
                id: 1,
                name: name.to_string(),
                image: None,
            }),
            images: Vec::new(),
            creation_at: None,
            updated_at: None,
        }
    }

    fn export_string(products: &[Product]) -> String {
        let mut buf = Vec::new();
        write_csv(products, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_only_for_empty_view() {
        assert_eq!(export_string(&[]), "ID,Title,Price,Category,Description\n");
    }

    #[test]
    fn test_commas_and_newlines_become_spaces() {
        let products = [product(
            7,
            "Chair, oak",
            "Sturdy,\nsmooth\r\nfinish",
            Some("Home, Garden"),
        )];
        let out = export_string(&products);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "7,Chair  oak,10.5,Home  Garden,Sturdy  smooth  finish");
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        let products = [product(1, "The \"Best\" Mug", "", None)];
        let out = export_string(&products);
        assert_eq!(out.lines().nth(1), Some("1,The \"Best\" Mug,10.5,,"));
    }

    #[test]
    fn test_missing_category_is_empty_field() {
        let json = r#"{"id":1,"title":"T","price":2,"description":"d"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        let out = export_string(&[product]);
        assert_eq!(out.lines().nth(1), Some("1,T,2,,d"));
    }

    #[test]
    fn test_row_count_is_view_plus_header() {
        let products: Vec<Product> = (1..=4)
            .map(|id| product(id, "Item", "multi\nline", Some("Misc")))
            .collect();
        let out = export_string(&products);
        assert_eq!(out.lines().count(), products.len() + 1);
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("products_export.csv");
        let rows = export_to_file(&[product(3, "Lamp", "Bright", Some("Home"))], &path).unwrap();
        assert_eq!(rows, 1);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("ID,Title,Price,Category,Description\n"));
        assert!(content.contains("3,Lamp,10.5,Home,Bright"));
    }
}
