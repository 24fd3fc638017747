//! End-to-end tests for the `pocket-knife` binary.
//!
//! Each test points the data directory at a fresh temp dir, so the
//! product database never touches the real home directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("pocket-knife").unwrap();
        cmd.args(args)
            .current_dir(self.dir.path())
            .env("POCKET_KNIFE_DATA_DIR", self.dir.path().join("data"))
            .env_remove("GEMINI_API_KEY")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn test_product_scenario() {
    let sb = Sandbox::new();

    sb.cmd(&["store-product", "Coffee", "12.99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Product stored successfully"))
        .stdout(predicate::str::contains("  Price: $12.99"));

    sb.cmd(&["list-products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID   Name                 Price"))
        .stdout(predicate::str::contains("Coffee               $12.99"));

    sb.cmd(&["update-product", "COFFEE", "15.99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  Old Price: $12.99"))
        .stdout(predicate::str::contains("  New Price: $15.99"));

    sb.cmd(&["get-product", "coffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product: Coffee"))
        .stdout(predicate::str::contains("Price: $15.99"));

    sb.cmd(&["delete-product", "Coffee"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete product 'Coffee' ($15.99)?"))
        .stdout(predicate::str::contains("Deletion cancelled"));

    sb.cmd(&["get-product", "Coffee"]).assert().success();

    sb.cmd(&["delete-product", "Coffee"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Product deleted successfully"));

    sb.cmd(&["get-product", "Coffee"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Product 'Coffee' not found"));
}

#[test]
fn test_list_empty_store() {
    let sb = Sandbox::new();

    sb.cmd(&["list-products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products stored yet."));
}

#[test]
fn test_delete_at_end_of_input_cancels() {
    let sb = Sandbox::new();
    sb.cmd(&["store-product", "Milk", "3.50"]).assert().success();

    sb.cmd(&["delete-product", "milk"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled"));

    sb.cmd(&["get-product", "Milk"]).assert().success();
}

#[test]
fn test_delete_with_non_utf8_answer_cancels() {
    let sb = Sandbox::new();
    sb.cmd(&["store-product", "Coffee", "12.99"]).assert().success();

    sb.cmd(&["delete-product", "Coffee"])
        .write_stdin(vec![0xff, 0xfe, b'\n'])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled"));

    sb.cmd(&["get-product", "Coffee"]).assert().success();
}

#[test]
fn test_hyphen_prefixed_name() {
    let sb = Sandbox::new();

    sb.cmd(&["store-product", "-Special", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  Name:  -Special"));

    sb.cmd(&["get-product", "-special"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product: -Special"));
}

#[test]
fn test_duplicate_and_invalid_price_exit_codes() {
    let sb = Sandbox::new();
    sb.cmd(&["store-product", "Coffee", "12.99"]).assert().success();

    sb.cmd(&["store-product", "coffee", "1.00"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains(
            "Use a different name or update the existing product.",
        ));

    sb.cmd(&["store-product", "Tea", "-5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must be a positive number"));

    sb.cmd(&["update-product", "Coffee", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must be a valid number"));
}

#[test]
fn test_missing_arguments_exit_one() {
    let sb = Sandbox::new();

    sb.cmd(&["store-product"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing product name"));

    sb.cmd(&["update-product", "Coffee"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("New price required"));

    sb.cmd(&["delete-product"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Product name required"));
}

#[test]
fn test_storage_unavailable_is_reported_first() {
    let sb = Sandbox::new();
    let blocker = sb.dir.path().join("data");
    std::fs::write(&blocker, b"not a directory").unwrap();

    sb.cmd(&["get-product"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Storage features are not available"));

    sb.cmd(&["ask-product", "anything under $5?"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Storage features are not available"));
}

#[test]
fn test_calc() {
    let sb = Sandbox::new();

    sb.cmd(&["calc", "150", "20"])
        .assert()
        .success()
        .stdout("30.00\n");

    sb.cmd(&["calc", "100", "20%"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("without the % symbol"));

    sb.cmd(&["calc", "100", "-5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Percentage cannot be negative"));

    sb.cmd(&["calc", "100"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing arguments"));
}

#[test]
fn test_ask_without_key() {
    let sb = Sandbox::new();

    sb.cmd(&["ask", "What is 20% of 100?"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No API key configured"));

    sb.cmd(&["ask-product", "Is there coffee?"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No API key configured"));
}

#[test]
fn test_no_subcommand_exits_one() {
    let sb = Sandbox::new();

    sb.cmd(&[])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing subcommand"));
}
