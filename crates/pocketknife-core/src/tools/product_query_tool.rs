//! Product query tool for natural-language product questions.
//!
//! Four read-only queries over the product store. Every entry point
//! returns human-readable text and never fails: invalid input and backend
//! failures come back as `Error: ...` strings.

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use super::args;
use crate::domain::{Product, format_price};
use crate::ports::{CoreError, ParameterKind, ToolDefinition, ToolSet};
use crate::services::ProductService;
use crate::validation::{MAX_PRICE_FIELD, MIN_PRICE_FIELD, ValidationError, check_non_negative};

const FIND_BY_NAME: &str = "find_product_by_name";
const LIST_ALL: &str = "list_all_products";
const FILTER_BY_MAX_PRICE: &str = "filter_products_by_max_price";
const FILTER_BY_PRICE_RANGE: &str = "filter_products_by_price_range";

/// Read-only product queries exposed to the language model.
pub struct ProductQueryTool {
    products: ProductService,
}

impl ProductQueryTool {
    pub const fn new(products: ProductService) -> Self {
        Self { products }
    }

    /// Look up a product by case-insensitive name.
    pub async fn find_product_by_name(&self, name: &str) -> String {
        if name.trim().is_empty() {
            return "Error: name must be a non-empty string".to_string();
        }

        match self.products.find_by_name(name).await {
            Ok(Some(product)) => format!(
                "Product found: {} - {}",
                product.name,
                product.formatted_price()
            ),
            Ok(None) => format!(
                "No product found with name '{name}'. \
                 Use 'list all products' to see available products."
            ),
            Err(e) => describe_error(&e),
        }
    }

    /// List every stored product.
    pub async fn list_all_products(&self) -> String {
        match self.products.all().await {
            Ok(products) if products.is_empty() => {
                "No products stored yet. Use \"store-product\" command to add products."
                    .to_string()
            }
            Ok(products) => {
                let header = format!("All products ({} total)", products.len());
                format_product_list(&products, &header)
            }
            Err(e) => describe_error(&e),
        }
    }

    /// Products priced at or below `max_price`.
    pub async fn filter_products_by_max_price(&self, max_price: f64) -> String {
        if let Err(e) = check_non_negative(MAX_PRICE_FIELD, max_price) {
            return format!("Error: {e}");
        }

        match self.products.filter_by_max_price(max_price).await {
            Ok(products) if products.is_empty() => format!(
                "No products found under {}. \
                 Try a higher price or use 'list all products' to see what's available.",
                format_price(max_price)
            ),
            Ok(products) => {
                let header = format!(
                    "Found {} product(s) under {}",
                    products.len(),
                    format_price(max_price)
                );
                format_product_list(&products, &header)
            }
            Err(e) => describe_error(&e),
        }
    }

    /// Products priced within `[min_price, max_price]`.
    pub async fn filter_products_by_price_range(&self, min_price: f64, max_price: f64) -> String {
        if let Err(e) = check_non_negative(MIN_PRICE_FIELD, min_price)
            .and_then(|_| check_non_negative(MAX_PRICE_FIELD, max_price))
        {
            return format!("Error: {e}");
        }

        match self
            .products
            .filter_by_price_range(min_price, max_price)
            .await
        {
            Ok(products) if products.is_empty() => format!(
                "No products found between {} and {}. \
                 Try expanding the range or use 'list all products' to see what's available.",
                format_price(min_price),
                format_price(max_price)
            ),
            Ok(products) => {
                let header = format!(
                    "Found {} product(s) between {} and {}",
                    products.len(),
                    format_price(min_price),
                    format_price(max_price)
                );
                format_product_list(&products, &header)
            }
            Err(CoreError::InvalidInput(ValidationError::InvertedRange { .. })) => format!(
                "Error: Minimum price ({}) cannot be greater than maximum price ({}).",
                format_price(min_price),
                format_price(max_price)
            ),
            Err(e) => describe_error(&e),
        }
    }
}

#[async_trait]
impl ToolSet for ProductQueryTool {
    fn definitions(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition::new(
                FIND_BY_NAME,
                "Find a stored product by its name (case-insensitive).",
            )
            .param(
                "name",
                ParameterKind::String,
                "Product name to search for, e.g. \"Banana\"",
            ),
            ToolDefinition::new(LIST_ALL, "List every stored product with its price."),
            ToolDefinition::new(
                FILTER_BY_MAX_PRICE,
                "Find products priced at or below a maximum price.",
            )
            .param(
                "max_price",
                ParameterKind::Number,
                "Maximum price threshold, e.g. 10.00",
            ),
            ToolDefinition::new(
                FILTER_BY_PRICE_RANGE,
                "Find products priced between a minimum and maximum price (inclusive).",
            )
            .param("min_price", ParameterKind::Number, "Minimum price, e.g. 5.00")
            .param("max_price", ParameterKind::Number, "Maximum price, e.g. 15.00"),
        ]
    }

    async fn call(&self, name: &str, args: &Value) -> String {
        let outcome = match name {
            FIND_BY_NAME => match args::string(args, "name") {
                Ok(product_name) => Ok(self.find_product_by_name(product_name).await),
                Err(e) => Err(e),
            },
            LIST_ALL => Ok(self.list_all_products().await),
            FILTER_BY_MAX_PRICE => match args::number(args, "max_price") {
                Ok(max) => Ok(self.filter_products_by_max_price(max).await),
                Err(e) => Err(e),
            },
            FILTER_BY_PRICE_RANGE => {
                match (args::number(args, "min_price"), args::number(args, "max_price")) {
                    (Ok(min), Ok(max)) => Ok(self.filter_products_by_price_range(min, max).await),
                    (Err(e), _) | (_, Err(e)) => Err(e),
                }
            }
            unknown => Err(format!("unknown function '{unknown}'")),
        };

        outcome.unwrap_or_else(|e| format!("Error: {e}"))
    }
}

/// Render products as a header followed by numbered `name - price` lines.
fn format_product_list(products: &[Product], header: &str) -> String {
    let mut lines = Vec::with_capacity(products.len() + 1);
    lines.push(header.to_string());
    for (index, product) in products.iter().enumerate() {
        lines.push(format!(
            "{}. {} - {}",
            index + 1,
            product.name,
            product.formatted_price()
        ));
    }
    lines.join("\n")
}

fn describe_error(err: &CoreError) -> String {
    match err {
        CoreError::InvalidInput(e) => format!("Error: {e}"),
        other => {
            warn!(error = %other, "Product query failed");
            format!("Error: Database error occurred. Please try again. ({other})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RepositoryError;
    use crate::test_support::{MockRepo, product};
    use mockall::predicate::eq;
    use serde_json::json;
    use std::sync::Arc;

    fn tool(repo: MockRepo) -> ProductQueryTool {
        ProductQueryTool::new(ProductService::new(Arc::new(repo)))
    }

    #[tokio::test]
    async fn test_find_product_by_name_found() {
        let mut repo = MockRepo::new();
        repo.expect_find_by_name()
            .with(eq("banana"))
            .returning(|_| Ok(Some(product(1, "Banana", 1.99))));

        let text = tool(repo).find_product_by_name("banana").await;
        assert_eq!(text, "Product found: Banana - $1.99");
    }

    #[tokio::test]
    async fn test_find_product_by_name_missing_suggests_listing() {
        let mut repo = MockRepo::new();
        repo.expect_find_by_name().returning(|_| Ok(None));

        let text = tool(repo).find_product_by_name("Mango").await;
        assert!(text.starts_with("No product found with name 'Mango'"));
        assert!(text.contains("list all products"));
    }

    #[tokio::test]
    async fn test_find_product_by_name_blank_is_error_text() {
        let mut repo = MockRepo::new();
        repo.expect_find_by_name().never();

        let text = tool(repo).find_product_by_name("  ").await;
        assert_eq!(text, "Error: name must be a non-empty string");
    }

    #[tokio::test]
    async fn test_list_all_products_numbered() {
        let mut repo = MockRepo::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                product(1, "Apple", 1.5),
                product(2, "Banana", 1.99),
                product(3, "Orange", 2.99),
            ])
        });

        let text = tool(repo).list_all_products().await;
        assert_eq!(
            text,
            "All products (3 total)\n1. Apple - $1.50\n2. Banana - $1.99\n3. Orange - $2.99"
        );
    }

    #[tokio::test]
    async fn test_list_all_products_empty() {
        let mut repo = MockRepo::new();
        repo.expect_list().returning(|| Ok(Vec::new()));

        let text = tool(repo).list_all_products().await;
        assert!(text.starts_with("No products stored yet."));
    }

    #[tokio::test]
    async fn test_filter_by_max_price() {
        let mut repo = MockRepo::new();
        repo.expect_list_by_price()
            .with(eq(0.0), eq(3.0))
            .returning(|_, _| Ok(vec![product(1, "Apple", 1.5), product(2, "Banana", 1.99)]));

        let text = tool(repo).filter_products_by_max_price(3.0).await;
        assert_eq!(
            text,
            "Found 2 product(s) under $3.00\n1. Apple - $1.50\n2. Banana - $1.99"
        );
    }

    #[tokio::test]
    async fn test_filter_by_max_price_no_results_and_negative() {
        let mut repo = MockRepo::new();
        repo.expect_list_by_price().returning(|_, _| Ok(Vec::new()));
        let tool = tool(repo);

        let text = tool.filter_products_by_max_price(0.5).await;
        assert!(text.starts_with("No products found under $0.50."));

        let text = tool.filter_products_by_max_price(-1.0).await;
        assert!(text.starts_with("Error: max_price must be a positive number"));
    }

    #[tokio::test]
    async fn test_filter_by_price_range_inverted() {
        let mut repo = MockRepo::new();
        repo.expect_list_by_price().never();

        let text = tool(repo).filter_products_by_price_range(4.0, 2.0).await;
        assert_eq!(
            text,
            "Error: Minimum price ($4.00) cannot be greater than maximum price ($2.00)."
        );
    }

    #[tokio::test]
    async fn test_filter_by_price_range_found() {
        let mut repo = MockRepo::new();
        repo.expect_list_by_price()
            .with(eq(2.0), eq(4.0))
            .returning(|_, _| Ok(vec![product(3, "Orange", 2.99), product(4, "Mango", 3.5)]));

        let text = tool(repo).filter_products_by_price_range(2.0, 4.0).await;
        assert!(text.starts_with("Found 2 product(s) between $2.00 and $4.00"));
        assert!(text.ends_with("2. Mango - $3.50"));
    }

    #[tokio::test]
    async fn test_backend_failure_is_described_not_raised() {
        let mut repo = MockRepo::new();
        repo.expect_list()
            .returning(|| Err(RepositoryError::Storage("database is locked".to_string())));

        let text = tool(repo).list_all_products().await;
        assert!(text.starts_with("Error: Database error occurred."));
        assert!(text.contains("database is locked"));
    }

    #[tokio::test]
    async fn test_call_dispatches_json_arguments() {
        let mut repo = MockRepo::new();
        repo.expect_list_by_price()
            .with(eq(0.0), eq(10.0))
            .returning(|_, _| Ok(vec![product(1, "Coffee", 9.5)]));
        let tool = tool(repo);

        let text = tool
            .call(FILTER_BY_MAX_PRICE, &json!({"max_price": "10"}))
            .await;
        assert!(text.starts_with("Found 1 product(s) under $10.00"));

        let text = tool
            .call(FILTER_BY_MAX_PRICE, &json!({"max_price": "lots"}))
            .await;
        assert!(text.starts_with("Error: max_price must be a numeric value"));

        let text = tool.call("drop_table", &json!({})).await;
        assert_eq!(text, "Error: unknown function 'drop_table'");
    }

    #[test]
    fn test_definitions_cover_all_queries() {
        let tool = tool(MockRepo::new());
        let names: Vec<String> = tool.definitions().into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![FIND_BY_NAME, LIST_ALL, FILTER_BY_MAX_PRICE, FILTER_BY_PRICE_RANGE]
        );
    }
}
