//! The module contains functions and a trait that simplify reading [`Value`] objects holding
//! syntax trees or configuration data encoded in JSON.
use crate::error::PepperError;
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;

/// Reads the contents of the JSON in the file named by `file_name`.
///
/// # Arguments
///
/// * `file_name` - The string slice containing the path to the file in the file system.
///
/// # Errors
///
/// The function may return [`PepperError::IO`] if the file cannot be read, or
/// [`PepperError::JSON`] if the file does not contain valid JSON.
pub fn load_json_from_file_with_name(file_name: &str) -> Result<Value, PepperError> {
    let file = File::open(file_name)?;
    let mut de = serde_json::Deserializer::from_reader(BufReader::new(file));
    de.disable_recursion_limit();
    let v = Value::deserialize(&mut de)?;
    de.end()?;
    Ok(v)
}

/// Parse the JSON text in `bytes` without serde_json's nesting limit.
///
/// Syntax trees for long operator chains nest far deeper than serde_json's default limit of
/// 128.  The depth of the tree itself is checked when it is loaded.
///
/// # Arguments
///
/// * `bytes` - The JSON text.
pub fn json_from_slice(bytes: &[u8]) -> Result<Value, PepperError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let v = Value::deserialize(&mut de)?;
    de.end()?;
    Ok(v)
}

/// Parse the JSON text in `text` without serde_json's nesting limit.
///
/// # Arguments
///
/// * `text` - The JSON text.
pub fn json_from_str(text: &str) -> Result<Value, PepperError> {
    json_from_slice(text.as_bytes())
}

/// Return `value` formatted as indented, human readable JSON text.
///
/// # Arguments
///
/// * `value` - The JSON value to format.
pub fn pretty_json_string(value: &Value) -> Result<String, PepperError> {
    let standard_json = format!("{value}");
    match jsonxf::pretty_print(&standard_json) {
        Ok(s) => Ok(s),
        Err(e) => Err(PepperError::MalformedTree(e)),
    }
}

/// Trait for use with the [`Value`] type that adds keyed accessors for JSON objects.
///
/// Every accessor returns `None` when the receiver is not an object, when the key is absent, or
/// when the value stored for the key has a different JSON type.
pub trait JSONAccess {
    fn borrow_value_for_key(&self, key: &str) -> Option<&Value>;
    fn get_str_for_key(&self, key: &str) -> Option<&str>;
    fn get_int_for_key(&self, key: &str) -> Option<i64>;
    fn contains_key(&self, key: &str) -> bool;
}

impl JSONAccess for Value {
    /// Return a reference to the value stored for `key`.  A JSON `null` counts as absent.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    fn borrow_value_for_key(&self, key: &str) -> Option<&Value> {
        match self.as_object()?.get(key) {
            Some(Value::Null) | None => None,
            Some(v) => Some(v),
        }
    }

    /// Return the string stored for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    fn get_str_for_key(&self, key: &str) -> Option<&str> {
        self.borrow_value_for_key(key)?.as_str()
    }

    /// Return the integer stored for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    fn get_int_for_key(&self, key: &str) -> Option<i64> {
        self.borrow_value_for_key(key)?.as_i64()
    }

    /// Return true if the object has a non-null value for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    fn contains_key(&self, key: &str) -> bool {
        self.borrow_value_for_key(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_counts_as_absent() {
        let node = json!({"ast_type": "Return", "value": null});
        assert!(node.contains_key("ast_type"));
        assert!(!node.contains_key("value"));
        assert_eq!(node.borrow_value_for_key("value"), None);
    }

    #[test]
    fn test_typed_accessors() {
        let node = json!({"level": 2, "module": "os", "is_async": 1.5});
        assert_eq!(node.get_int_for_key("level"), Some(2));
        assert_eq!(node.get_int_for_key("is_async"), None);
        assert_eq!(node.get_str_for_key("module"), Some("os"));
        assert_eq!(node.get_str_for_key("level"), None);
    }

    #[test]
    fn test_accessors_on_non_object() {
        let node = json!([1, 2, 3]);
        assert!(!node.contains_key("0"));
        assert_eq!(node.get_str_for_key("0"), None);
    }

    #[test]
    fn test_pretty_json_string() {
        let node = json!({"ast_type": "Module", "body": []});
        let text = pretty_json_string(&node).unwrap();
        assert!(text.contains('\n'));
        let reparsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, node);
    }

    #[test]
    fn test_deep_nesting_is_accepted() {
        let depth = 600;
        let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
        assert!(serde_json::from_str::<Value>(&text).is_err());

        let mut value = &json_from_str(&text).unwrap();
        let mut levels = 1;
        while let Some(inner) = value.as_array().and_then(|a| a.first()) {
            value = inner;
            levels += 1;
        }
        assert_eq!(levels, depth);
    }

    #[test]
    fn test_trailing_text_is_rejected() {
        assert!(matches!(
            json_from_slice(b"{} {}"),
            Err(PepperError::JSON(_))
        ));
    }

    #[test]
    fn test_load_deep_file() {
        let dir = std::env::temp_dir().join(format!("pepper-json-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("deep.json");
        let depth = 300;
        let text = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
        std::fs::write(&file, text).unwrap();
        let value = load_json_from_file_with_name(file.to_str().unwrap()).unwrap();
        assert!(value.is_array());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
