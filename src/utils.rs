use crate::error::{Error, Result};
use serde_json::Value;

/// Walks `map` one key at a time and returns the value at the end of `path`.
///
/// Each step must land on a JSON object that contains the next key. The
/// first key that cannot be resolved is reported in [`Error::MissingKey`];
/// stepping into a scalar or array counts as the key being absent. An empty
/// path returns `map` itself.
pub fn access_nested_map<'a>(map: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = map;
    for key in path {
        current = current
            .as_object()
            .and_then(|obj| obj.get(*key))
            .ok_or_else(|| Error::MissingKey((*key).to_string()))?;
    }
    Ok(current)
}

/// Splits a dotted key path (`"license.key"`) into its segments.
pub fn parse_key_path(path: &str) -> Vec<&str> {
    path.split('.').filter(|segment| !segment.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn access_single_key() {
        let map = json!({"a": 1});
        assert_eq!(access_nested_map(&map, &["a"]).unwrap(), &json!(1));
    }

    #[test]
    fn access_returns_inner_mapping() {
        let map = json!({"a": {"b": 2}});
        assert_eq!(access_nested_map(&map, &["a"]).unwrap(), &json!({"b": 2}));
    }

    #[test]
    fn access_two_levels() {
        let map = json!({"a": {"b": 2}});
        assert_eq!(access_nested_map(&map, &["a", "b"]).unwrap(), &json!(2));
    }

    #[test]
    fn access_empty_path_returns_map() {
        let map = json!({"a": 1});
        assert_eq!(access_nested_map(&map, &[]).unwrap(), &map);
    }

    #[test]
    fn missing_key_on_empty_map() {
        let err = access_nested_map(&json!({}), &["a"]).unwrap_err();
        assert!(matches!(&err, Error::MissingKey(k) if k == "a"));
        assert_eq!(err.to_string(), r#"missing key: "a""#);
    }

    #[test]
    fn missing_key_below_scalar() {
        let err = access_nested_map(&json!({"a": 1}), &["a", "b"]).unwrap_err();
        assert!(matches!(&err, Error::MissingKey(k) if k == "b"));
        assert_eq!(err.to_string(), r#"missing key: "b""#);
    }

    #[test]
    fn missing_key_reports_first_failure_only() {
        let map = json!({"a": {"b": {"c": 3}}});
        let err = access_nested_map(&map, &["a", "x", "c"]).unwrap_err();
        assert_eq!(err.to_string(), r#"missing key: "x""#);
    }

    #[test]
    fn parse_key_path_skips_empty_segments() {
        assert_eq!(parse_key_path("license.key"), vec!["license", "key"]);
        assert_eq!(parse_key_path(".a..b."), vec!["a", "b"]);
        assert!(parse_key_path("").is_empty());
    }
}
