use config::{Config, Environment};
use serde::Deserialize;
use tracing::warn;

const ENV_PREFIX: &str = "HIGHLIGHTS";

/// Runtime knobs, read from `HIGHLIGHTS_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Review count at which scoring fans out across threads.
    pub parallel_threshold: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            parallel_threshold: 2048,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Self {
        let built = Config::builder()
            .add_source(env.try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize::<Settings>());
        match built {
            Ok(settings) => settings,
            Err(e) => {
                warn!("ignoring invalid {}_* settings: {}", ENV_PREFIX, e);
                Settings::default()
            }
        }
    }
}
