//! Project configuration file discovery and reading

use crate::config::value::ConfigValue;
use crate::error::{ConfigError, ConfigResult};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "elz.config.yml";

/// Key of sources that are not placed under a prefix
pub const NO_PREFIX: &str = "$";

/// A project's `elz.config.yml`
#[derive(Debug, Clone, Default)]
pub struct ProjectConfig {
    root: ConfigValue,
}

impl ProjectConfig {
    /// Read a configuration file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_text(&text)
    }

    /// Parse configuration from a string
    pub fn from_text(text: &str) -> ConfigResult<Self> {
        Ok(ProjectConfig {
            root: ConfigValue::from_text(text)?,
        })
    }

    /// Source files, by prefix
    ///
    /// A plain string or list is placed under [`NO_PREFIX`].
    pub fn sources(&self) -> ConfigResult<HashMap<String, Vec<String>>> {
        let sources = self.root.get("sources");

        if let Some(by_prefix) = sources.bind_map(ConfigValue::bind_str_seq) {
            return Ok(by_prefix);
        }

        match sources.bind_str_seq() {
            Some(files) => Ok(HashMap::from([(NO_PREFIX.to_string(), files)])),
            None => Err(ConfigError::Invalid(
                "sources should be a string, a list of strings or a mapping".to_string(),
            )),
        }
    }

    /// Patterns of files to leave out
    pub fn ignore(&self) -> ConfigResult<Vec<String>> {
        self.root.get("ignore").bind_str_seq().ok_or_else(|| {
            ConfigError::Invalid("ignore should be a string or a list of strings".to_string())
        })
    }

    /// Directory of the translation files
    pub fn translations(&self) -> ConfigResult<String> {
        self.root
            .get("translations")
            .bind_str()
            .ok_or_else(|| ConfigError::Invalid("translations should be a string".to_string()))
    }
}

/// Find the configuration file by searching current and parent directories
pub fn find_config_file() -> ConfigResult<PathBuf> {
    let cwd = env::current_dir().map_err(|e| ConfigError::Read {
        path: ".".to_string(),
        error: e.to_string(),
    })?;
    find_config_file_from(&cwd)
}

/// Find the configuration file starting from a specific directory
pub fn find_config_file_from(start_dir: &Path) -> ConfigResult<PathBuf> {
    let start_dir = if start_dir.is_absolute() {
        start_dir.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(start_dir))
            .unwrap_or_else(|_| start_dir.to_path_buf())
    };

    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        tracing::debug!("looking for {}", candidate.display());
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(ConfigError::NotFound(CONFIG_FILE_NAME.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_full_config() {
        let cfg = ProjectConfig::from_text(
            r#"
sources:
  a: src/a
  b:
    - src/b/index.ts
    - src/b/other.ts
ignore: src/**.jsx
translations: src/lang
"#,
        )
        .unwrap();

        let sources = cfg.sources().unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources["a"], vec!["src/a"]);
        assert_eq!(sources["b"], vec!["src/b/index.ts", "src/b/other.ts"]);

        assert_eq!(cfg.ignore().unwrap(), vec!["src/**.jsx"]);
        assert_eq!(cfg.translations().unwrap(), "src/lang");
    }

    #[test]
    fn test_partial_config() {
        let cfg = ProjectConfig::from_text("sources: src/\ntranslations: src/lang\n").unwrap();

        let sources = cfg.sources().unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[NO_PREFIX], vec!["src/"]);
        assert!(cfg.ignore().unwrap().is_empty());
        assert_eq!(cfg.translations().unwrap(), "src/lang");
    }

    #[test]
    fn test_invalid_shapes() {
        let cfg = ProjectConfig::from_text(
            "sources:\n  a: {nested: map}\nignore: {a: b}\ntranslations: [a, b]\n",
        )
        .unwrap();

        assert!(matches!(cfg.sources(), Err(ConfigError::Invalid(_))));
        assert!(matches!(cfg.ignore(), Err(ConfigError::Invalid(_))));
        assert!(matches!(cfg.translations(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "translations: lang\n").unwrap();

        let found = find_config_file_from(temp_dir.path()).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        let nested = temp_dir.path().join("nested").join("dir");

        fs::create_dir_all(&nested).unwrap();
        fs::write(&config_path, "translations: lang\n").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = ProjectConfig::load(&temp_dir.path().join(CONFIG_FILE_NAME));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
