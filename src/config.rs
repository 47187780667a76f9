use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Переменная окружения с путём к TOML-файлу конфигурации
pub const CONFIG_PATH_VAR: &str = "ORDER_LABELS_CONFIG";

/// Конфигурация программы
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Файл раскроя с заказами (.xls или .xlsx)
    pub orders_file: Option<PathBuf>,
    /// Куда сохранить лист с этикетками
    pub output_file: PathBuf,
    /// Каталог, внутри которого лежит папка images/
    pub assets_dir: PathBuf,
    /// Имя листа с этикетками
    pub sheet_name: String,
    /// Подробный лог
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orders_file: None,
            output_file: PathBuf::from("labels.xlsx"),
            assets_dir: PathBuf::from("."),
            sheet_name: "Этикетки".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// Загружает конфигурацию: TOML-файл из `ORDER_LABELS_CONFIG` (если задан),
    /// поверх него переменные окружения.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::from_toml_file(Path::new(&path))?.with_env_overrides(),
            None => Self::from_env(),
        }
    }

    /// Конфигурация только из переменных окружения
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Читает конфигурацию из TOML-файла; отсутствующие ключи берутся по умолчанию
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn with_env_overrides(self) -> Result<Self, ConfigError> {
        Ok(Self {
            orders_file: env_path("ORDERS_FILE").or(self.orders_file),
            output_file: env_path("LABELS_OUTPUT_FILE").unwrap_or(self.output_file),
            assets_dir: env_path("LABEL_ASSETS_DIR").unwrap_or(self.assets_dir),
            sheet_name: std::env::var("LABEL_SHEET_NAME").unwrap_or(self.sheet_name),
            verbose_logging: match std::env::var("VERBOSE_LOGGING") {
                Ok(value) => parse_bool("VERBOSE_LOGGING", &value)?,
                Err(_) => self.verbose_logging,
            },
        })
    }
}

fn env_path(var_name: &str) -> Option<PathBuf> {
    std::env::var_os(var_name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn parse_bool(var_name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: "bool".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_fills_missing_keys_with_defaults() {
        let config = Config::from_toml_str(
            r#"
            orders_file = "raskroy.xls"
            verbose_logging = true
            "#,
        )
        .unwrap();

        assert_eq!(config.orders_file, Some(PathBuf::from("raskroy.xls")));
        assert!(config.verbose_logging);
        assert_eq!(config.output_file, PathBuf::from("labels.xlsx"));
        assert_eq!(config.sheet_name, "Этикетки");
    }

    #[test]
    fn toml_file_read_error_names_the_path() {
        let err = Config::from_toml_file(Path::new("no/such/config.toml")).unwrap_err();
        assert!(err.to_string().contains("no/such/config.toml"));
    }

    #[test]
    fn env_overrides_defaults() {
        std::env::set_var("LABEL_SHEET_NAME", "Упаковка");
        std::env::set_var("VERBOSE_LOGGING", "on");
        let config = Config::from_env();
        std::env::set_var("VERBOSE_LOGGING", "maybe");
        let invalid = Config::from_env();
        std::env::remove_var("LABEL_SHEET_NAME");
        std::env::remove_var("VERBOSE_LOGGING");

        let config = config.unwrap();
        assert_eq!(config.sheet_name, "Упаковка");
        assert!(config.verbose_logging);
        assert_eq!(config.output_file, PathBuf::from("labels.xlsx"));
        assert!(matches!(
            invalid,
            Err(ConfigError::EnvVarParseFailed { ref var_name, .. }) if var_name == "VERBOSE_LOGGING"
        ));
    }

    #[test]
    fn bool_values_are_parsed_leniently() {
        assert!(parse_bool("X", "Yes").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        assert!(parse_bool("X", "maybe").is_err());
    }
}
