//! Subcommand definitions.
//!
//! Positional arguments are optional at the parser level so handlers can
//! report missing values with their own usage hints and exit codes.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate a percentage of an amount
    Calc {
        /// <amount> <percentage>, e.g. `calc 100 20`
        #[arg(allow_negative_numbers = true, value_name = "ARGS")]
        args: Vec<String>,
    },

    /// Ask a natural-language arithmetic question
    Ask {
        /// The question, e.g. "What is 20% of 100?"
        #[arg(allow_negative_numbers = true)]
        query: Vec<String>,
    },

    /// Ask a natural-language question about stored products
    AskProduct {
        /// The question, e.g. "Show me products under $10"
        #[arg(allow_negative_numbers = true)]
        query: Vec<String>,
    },

    /// Store a new product
    StoreProduct {
        /// Product name (unique, case-insensitive)
        #[arg(allow_hyphen_values = true)]
        name: Option<String>,
        /// Price, zero or positive
        #[arg(allow_negative_numbers = true)]
        price: Option<String>,
    },

    /// List all stored products ordered by name
    ListProducts,

    /// Show a single product
    GetProduct {
        /// Product name (case-insensitive)
        #[arg(allow_hyphen_values = true)]
        name: Option<String>,
    },

    /// Change the price of a product
    UpdateProduct {
        /// Product name (case-insensitive)
        #[arg(allow_hyphen_values = true)]
        name: Option<String>,
        /// New price, zero or positive
        #[arg(allow_negative_numbers = true)]
        new_price: Option<String>,
    },

    /// Delete a product after confirmation
    DeleteProduct {
        /// Product name (case-insensitive)
        #[arg(allow_hyphen_values = true)]
        name: Option<String>,
    },
}
