//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const PROJECT_FILES: [&str; 2] = ["assess.toml", ".assess.toml"];

/// Prefix for structured environment overrides (`ASSESS_JUDGES__A__MODEL`)
pub const ENV_PREFIX: &str = "ASSESS_";

/// Unprefixed variables still honoured, with the key each one sets
const LEGACY_ENV: [(&str, &str); 4] = [
    ("SILICONFLOW_BASE_URL", "judges.base_url"),
    ("SILICONFLOW_MODEL_CHAT_A", "judges.a.model"),
    ("SILICONFLOW_MODEL_CHAT_B", "judges.b.model"),
    ("MAX_QUESTIONS", "assessment.max_questions"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ASSESS_*` environment variables (`__` separates sections)
    /// 2. Legacy environment variables (`SILICONFLOW_*`, `MAX_QUESTIONS`)
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./assess.toml` or `./.assess.toml`
    /// 5. Global: `$XDG_CONFIG_HOME/creativity-assess/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// The merged provider chain, before extraction
    pub fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Self::legacy_env())
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn legacy_env() -> Env {
        Env::raw()
            .only(&LEGACY_ENV.map(|(var, _)| var))
            .map(|key| {
                LEGACY_ENV
                    .iter()
                    .find(|(var, _)| key.as_str().eq_ignore_ascii_case(var))
                    .map(|(_, target)| (*target).into())
                    .unwrap_or_else(|| key.as_str().into())
            })
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("creativity-assess").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Env:     {}* (use __ between sections)", ENV_PREFIX);
        for (var, target) in LEGACY_ENV {
            let mark = if std::env::var(var).is_ok() { "SET  " } else { "     " };
            println!("  [{}] Env:     {} -> {}", mark, var, target);
        }

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./assess.toml or ./.assess.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
