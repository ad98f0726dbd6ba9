use std::collections::HashMap;

pub const DEFAULT_PATH: &str = "/etc/sparkmail/sparkmail.toml";
const ENV_PREFIX: &str = "SPARKMAIL_";

/// Key holding the SparkPost API key. The one setting this crate
/// requires.
pub const API_KEY: &str = "api_key";

/// Loads sparkmail config from filesystem and merges it with any
/// environment variables prefixed with SPARKMAIL_.
///
/// This function will panic on error.
pub fn load_config(path: Option<&str>) -> HashMap<String, String> {
    let mut settings = config::Config::default();

    settings
        .merge(config::File::with_name(path.unwrap_or(DEFAULT_PATH)))
        .unwrap()
        .merge(config::Environment::with_prefix(ENV_PREFIX))
        .unwrap();

    settings.try_into::<HashMap<String, String>>().unwrap()
}
