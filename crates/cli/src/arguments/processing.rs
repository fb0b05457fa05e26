use argot_core::argument_set::ArgumentSet;
use argot_core::error::Error::ValueFormat;
use argot_core::error::Result;
use argot_core::merge::merge;
use argot_core::name_format::set_option_value;
use log::debug;
use serde_yaml::Value;

/// Parses `key=value` pairs into an argument set.
///
/// Later pairs for the same option overwrite earlier ones.
///
/// # Errors
///
/// Returns [`ValueFormat`] if a pair has no `=` or an empty key.
pub fn parse_values(pairs: &[String]) -> Result<ArgumentSet> {
    let mut fragments = Vec::with_capacity(pairs.len());

    for pair in pairs {
        let Some((key, raw)) = pair.split_once('=') else {
            return Err(ValueFormat(pair.to_string()));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(ValueFormat(pair.to_string()));
        }

        debug!("Option \"{}\" given on the command line", key);
        fragments.push(set_option_value(key, parse_scalar(raw)));
    }

    Ok(merge(&fragments))
}

/// Reads a raw value as a YAML scalar, keeping it as a string when it is not
/// one.
fn parse_scalar(raw: &str) -> Value {
    match serde_yaml::from_str::<Value>(raw) {
        Ok(value @ (Value::Bool(_) | Value::Number(_) | Value::String(_))) => value,
        _ => Value::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_values_both_spellings() {
        let values = parse_values(&pairs(&["reject-unauthorized=false", "host=example.com"])).unwrap();

        assert_eq!(values.get("rejectUnauthorized"), Some(&Value::Bool(false)));
        assert_eq!(values.get("reject-unauthorized"), Some(&Value::Bool(false)));
        assert_eq!(values.get("host"), Some(&Value::from("example.com")));
    }

    #[test]
    fn test_parse_values_keeps_equals_in_value() {
        let values = parse_values(&pairs(&["filter=a=b"])).unwrap();
        assert_eq!(values.get("filter"), Some(&Value::from("a=b")));
    }

    #[test]
    fn test_parse_values_non_scalar_kept_as_string() {
        let values = parse_values(&pairs(&["list=[a, b]", "empty="])).unwrap();
        assert_eq!(values.get("list"), Some(&Value::from("[a, b]")));
        assert_eq!(values.get("empty"), Some(&Value::from("")));
    }

    #[test]
    fn test_parse_values_later_wins() {
        let values = parse_values(&pairs(&["port=1", "port=2"])).unwrap();
        assert_eq!(values.get("port"), Some(&Value::from(2)));
    }

    #[test]
    fn test_parse_values_format_errors() {
        assert!(matches!(parse_values(&pairs(&["novalue"])), Err(ValueFormat(_))));
        assert!(matches!(parse_values(&pairs(&["=value"])), Err(ValueFormat(_))));
    }
}
