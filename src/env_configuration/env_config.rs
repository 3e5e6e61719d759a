use crate::common::*;

use crate::errors::app_errors::*;

pub const ENV_API_URL: &str = "API_URL";
pub const ENV_TEMPERATURE: &str = "TEMPERATURE";
pub const ENV_TOP_K: &str = "TOP_K";
pub const ENV_MAX_TOKENS: &str = "MAX_TOKENS";
pub const ENV_OUTPUT_DIR: &str = "OUTPUT_DIR";
pub const ENV_HTML_TEMPLATE_DIR: &str = "HTML_TEMPLATE_DIR";
pub const ENV_DEBUG: &str = "DEBUG";
pub const ENV_VERBOSE: &str = "VERBOSE";

#[doc = r#"
    Read a required variable through the given lookup.
    An absent or empty value is a startup-fatal configuration error.
"#]
pub fn required_var<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(ConfigError::new(key, String::from("missing"))),
    }
}

#[doc = "Read an optional variable, falling back to its documented default when absent."]
pub fn var_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

#[doc = "Coerce a raw variable value into a numeric type; a present-but-malformed value fails the load."]
pub fn parse_var<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigError::new(key, format!("invalid value '{}'", raw)))
}

#[doc = "Boolean coercion: only the literal 'true' (case-insensitive) counts as true."]
pub fn parse_bool_var(raw: &str) -> bool {
    raw.trim().to_lowercase() == "true"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_none(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn required_var_reports_the_missing_field() {
        let err: ConfigError = required_var(&lookup_none, ENV_API_URL).unwrap_err();
        assert_eq!(err.field, "API_URL");
        assert_eq!(err.reason, "missing");
    }

    #[test]
    fn empty_required_var_counts_as_missing() {
        let lookup = |_: &str| Some(String::from("   "));
        assert!(required_var(&lookup, ENV_API_URL).is_err());
    }

    #[test]
    fn parse_var_coerces_and_rejects() {
        assert_eq!(parse_var::<f64>(ENV_TEMPERATURE, "0.7").unwrap(), 0.7);
        assert!(parse_var::<f64>(ENV_TEMPERATURE, "warm").is_err());
        assert!(parse_var::<u32>(ENV_MAX_TOKENS, "-3").is_err());
    }

    #[test]
    fn bool_coercion_only_accepts_true() {
        assert!(parse_bool_var("TRUE"));
        assert!(!parse_bool_var("yes"));
        assert!(!parse_bool_var(""));
    }
}
