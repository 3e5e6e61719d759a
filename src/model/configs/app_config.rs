use crate::common::*;

use crate::env_configuration::env_config::*;
use crate::errors::app_errors::*;

#[doc = r#"
    Immutable application configuration, loaded once per process invocation
    and passed by reference to every component that needs it.
    Never mutated after load; tests fabricate instances directly or via `from_lookup`.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct AppConfig {
    pub api_url: String,
    pub temperature: f64,
    pub top_k: f64,
    pub max_tokens: u32,
    pub output_dir: PathBuf,
    pub template_dir: PathBuf,
    pub debug: bool,
    pub verbose: bool,
}

impl AppConfig {
    #[doc = "Load the configuration from process environment variables."]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    #[doc = r#"
        Load the configuration through an injected variable lookup.
        Absent optional variables take their documented defaults; present but
        malformed values fail the load with the offending field named.
    "#]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url: String = required_var(&lookup, ENV_API_URL)?;

        let temperature: f64 =
            parse_var(ENV_TEMPERATURE, &var_or_default(&lookup, ENV_TEMPERATURE, "0.1"))?;
        let top_k: f64 = parse_var(ENV_TOP_K, &var_or_default(&lookup, ENV_TOP_K, "0.1"))?;
        let max_tokens: u32 =
            parse_var(ENV_MAX_TOKENS, &var_or_default(&lookup, ENV_MAX_TOKENS, "2048"))?;

        let output_dir: PathBuf =
            PathBuf::from(var_or_default(&lookup, ENV_OUTPUT_DIR, "outputs"));
        let template_dir: PathBuf =
            PathBuf::from(var_or_default(&lookup, ENV_HTML_TEMPLATE_DIR, "templates"));

        let debug: bool = parse_bool_var(&var_or_default(&lookup, ENV_DEBUG, "false"));
        let verbose: bool = parse_bool_var(&var_or_default(&lookup, ENV_VERBOSE, "true"));

        let config: AppConfig = AppConfig::new(
            api_url,
            temperature,
            top_k,
            max_tokens,
            output_dir,
            template_dir,
            debug,
            verbose,
        );

        config.validate()?;

        Ok(config)
    }

    #[doc = "Range checks on the sampling parameters; the remote model rejects values outside these bounds."]
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::new(
                ENV_TEMPERATURE,
                format!("must be between 0 and 2, got {}", self.temperature),
            ));
        }

        if !(0.0..=1.0).contains(&self.top_k) {
            return Err(ConfigError::new(
                ENV_TOP_K,
                format!("must be between 0 and 1, got {}", self.top_k),
            ));
        }

        if self.max_tokens < 1 {
            return Err(ConfigError::new(
                ENV_MAX_TOKENS,
                String::from("must be a positive integer"),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: Vec<(&'static str, &'static str)>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_apply_when_only_api_url_is_set() {
        let config: AppConfig =
            AppConfig::from_lookup(lookup_from(vec![("API_URL", "http://localhost:9100/v1")]))
                .unwrap();

        assert_eq!(config.api_url(), "http://localhost:9100/v1");
        assert_eq!(*config.temperature(), 0.1);
        assert_eq!(*config.top_k(), 0.1);
        assert_eq!(*config.max_tokens(), 2048);
        assert_eq!(config.output_dir(), &PathBuf::from("outputs"));
        assert_eq!(config.template_dir(), &PathBuf::from("templates"));
        assert!(!*config.debug());
        assert!(*config.verbose());
    }

    #[test]
    fn coerced_values_match_their_environment() {
        let config: AppConfig = AppConfig::from_lookup(lookup_from(vec![
            ("API_URL", "http://api.example.com"),
            ("TEMPERATURE", "0.8"),
            ("TOP_K", "0.4"),
            ("MAX_TOKENS", "512"),
            ("OUTPUT_DIR", "charts"),
            ("DEBUG", "true"),
            ("VERBOSE", "false"),
        ]))
        .unwrap();

        assert_eq!(*config.temperature(), 0.8);
        assert_eq!(*config.top_k(), 0.4);
        assert_eq!(*config.max_tokens(), 512);
        assert_eq!(config.output_dir(), &PathBuf::from("charts"));
        assert!(*config.debug());
        assert!(!*config.verbose());
    }

    #[test]
    fn missing_api_url_fails_the_load() {
        let err: ConfigError =
            AppConfig::from_lookup(lookup_from(vec![("TEMPERATURE", "0.5")])).unwrap_err();
        assert_eq!(err.field, "API_URL");
        assert_eq!(err.reason, "missing");
    }

    #[test]
    fn malformed_numeric_value_fails_the_load() {
        let err: ConfigError = AppConfig::from_lookup(lookup_from(vec![
            ("API_URL", "http://api.example.com"),
            ("TEMPERATURE", "hot"),
        ]))
        .unwrap_err();
        assert_eq!(err.field, "TEMPERATURE");
    }

    #[test]
    fn out_of_range_sampling_values_fail_the_load() {
        let err: ConfigError = AppConfig::from_lookup(lookup_from(vec![
            ("API_URL", "http://api.example.com"),
            ("TOP_K", "3.5"),
        ]))
        .unwrap_err();
        assert_eq!(err.field, "TOP_K");
    }
}
