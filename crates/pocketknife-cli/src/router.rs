//! Command router.
//!
//! Opens storage only for verbs that need it, before any argument
//! checks, and always closes it again before returning.

use tracing::debug;

use pocketknife_core::CoreError;

use crate::bootstrap::{CliConfig, CliContext, bootstrap};
use crate::commands::Commands;
use crate::error::CliError;
use crate::handlers;
use crate::utils::input::ConfirmationProvider;

/// Run one parsed command to completion.
pub async fn run(
    command: Option<Commands>,
    confirm: &dyn ConfirmationProvider,
) -> Result<(), CliError> {
    let Some(command) = command else {
        return Err(CliError::usage(
            "Missing subcommand",
            [
                "Use: pocket-knife calc <amount> <percentage>",
                "Run 'pocket-knife --help' to see every command.",
            ],
        ));
    };

    match command {
        Commands::Calc { args } => handlers::calc::execute(&args),
        Commands::Ask { query } => handlers::ask::execute(&query).await,
        command => {
            let ctx = open_storage().await?;
            let result = dispatch_product(&ctx, command, confirm).await;
            ctx.shutdown().await;
            result
        }
    }
}

async fn open_storage() -> Result<CliContext, CliError> {
    let config = CliConfig::with_defaults().map_err(|e| storage_unavailable(&e))?;
    let ctx = bootstrap(&config)
        .await
        .map_err(|e| storage_unavailable(&e))?;
    debug!(path = %config.database_path.display(), "Storage opened");
    Ok(ctx)
}

/// Any failure to resolve or open the database.
fn storage_unavailable(err: &anyhow::Error) -> CliError {
    CoreError::BackendUnavailable(format!("{err:#}")).into()
}

/// Route a storage-backed verb to its handler.
pub(crate) async fn dispatch_product(
    ctx: &CliContext,
    command: Commands,
    confirm: &dyn ConfirmationProvider,
) -> Result<(), CliError> {
    match command {
        Commands::StoreProduct { name, price } => {
            handlers::store::execute(ctx, name.as_deref(), price.as_deref()).await
        }
        Commands::ListProducts => handlers::list::execute(ctx).await,
        Commands::GetProduct { name } => handlers::get::execute(ctx, name.as_deref()).await,
        Commands::UpdateProduct { name, new_price } => {
            handlers::update::execute(ctx, name.as_deref(), new_price.as_deref()).await
        }
        Commands::DeleteProduct { name } => {
            handlers::delete::execute(ctx, name.as_deref(), confirm).await
        }
        Commands::AskProduct { query } => handlers::ask_product::execute(ctx, &query).await,
        Commands::Calc { .. } | Commands::Ask { .. } => Err(CliError::Unexpected(
            "command does not use product storage".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;
    use crate::parser::Cli;
    use crate::utils::input::ScriptedConfirmation;
    use clap::Parser;

    fn command(args: &[&str]) -> Commands {
        let mut argv = vec!["pocket-knife"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv).command.unwrap()
    }

    #[tokio::test]
    async fn test_missing_subcommand() {
        let err = run(None, &ScriptedConfirmation::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing subcommand");
        assert_eq!(err.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_open_failure_is_storage_unavailable() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();
        let config = CliConfig {
            database_path: blocker.join("products.db"),
        };

        let err = storage_unavailable(&bootstrap(&config).await.err().unwrap());
        assert!(matches!(err, CliError::StorageUnavailable(_)));
        assert_eq!(err.exit_code(), 1);
        assert!(err.suggestions()[0].starts_with("Details: Failed to open product database"));
    }

    #[tokio::test]
    async fn test_calc_does_not_need_storage() {
        run(Some(command(&["calc", "100", "20"])), &ScriptedConfirmation::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_product_lifecycle() {
        let (_db, ctx) = context().await;
        let confirm = ScriptedConfirmation::new(["n", "y"]);

        for args in [
            &["store-product", "Coffee", "12.99"][..],
            &["list-products"][..],
            &["update-product", "COFFEE", "15.99"][..],
            &["get-product", "coffee"][..],
            &["delete-product", "Coffee"][..],
        ] {
            dispatch_product(&ctx, command(args), &confirm).await.unwrap();
        }
        let product = ctx.products().find_by_name("Coffee").await.unwrap().unwrap();
        assert_eq!(product.formatted_price(), "$15.99");

        dispatch_product(&ctx, command(&["delete-product", "Coffee"]), &confirm)
            .await
            .unwrap();
        let err = dispatch_product(&ctx, command(&["get-product", "Coffee"]), &confirm)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::NotFound { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
