//! Argument extraction for JSON tool calls.

use serde_json::Value;

/// Read a numeric argument. Numeric strings are accepted.
pub(super) fn number(args: &Value, key: &str) -> Result<f64, String> {
    match args.get(key) {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| format!("{key} must be a numeric value (got {n})")),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("{key} must be a numeric value (got \"{s}\")")),
        Some(Value::Null) | None => Err(format!("missing required argument '{key}'")),
        Some(other) => Err(format!("{key} must be a numeric value (got {other})")),
    }
}

/// Read a non-empty string argument.
pub(super) fn string<'a>(args: &'a Value, key: &str) -> Result<&'a str, String> {
    match args.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s),
        _ => Err(format!("{key} must be a non-empty string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_accepts_numbers_and_numeric_strings() {
        let args = json!({"a": 3, "b": 2.5, "c": " 4.25 "});
        assert_eq!(number(&args, "a"), Ok(3.0));
        assert_eq!(number(&args, "b"), Ok(2.5));
        assert_eq!(number(&args, "c"), Ok(4.25));
    }

    #[test]
    fn test_number_rejects_other_shapes() {
        let args = json!({"a": "ten", "b": true});
        assert!(number(&args, "a").unwrap_err().contains("numeric value"));
        assert!(number(&args, "b").unwrap_err().contains("numeric value"));
        assert!(number(&args, "missing").unwrap_err().contains("missing"));
    }

    #[test]
    fn test_string_requires_non_blank() {
        let args = json!({"name": "Banana", "blank": "  ", "num": 1});
        assert_eq!(string(&args, "name"), Ok("Banana"));
        assert!(string(&args, "blank").is_err());
        assert!(string(&args, "num").is_err());
    }
}
