use std::path::PathBuf;

use thiserror::Error;

/// Ошибка приложения
#[derive(Debug, Error)]
pub enum AppError {
    /// Ошибка загрузки таблицы заказов
    #[error("Ошибка загрузки: {0}")]
    Load(#[from] LoadError),
    /// Ошибка конфигурации
    #[error("Ошибка конфигурации: {0}")]
    Config(#[from] ConfigError),
    /// Не удалось сохранить файл этикеток
    #[error("Не удалось сохранить файл {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
    /// Неверные аргументы командной строки
    #[error("{0}")]
    Usage(String),
}

/// Ошибки источника данных
#[derive(Debug, Error)]
pub enum LoadError {
    /// Путь к файлу раскроя не указан и не настроен по умолчанию
    #[error("Не указан файл Раскроя для загрузки")]
    MissingPath,
    /// Файл не существует
    #[error("Файл \"{}\" не найден", .path.display())]
    NotFound { path: PathBuf },
    /// В книге нет ни одного листа
    #[error("В файле \"{}\" нет листов", .path.display())]
    EmptyWorkbook { path: PathBuf },
    /// Любая другая ошибка разбора
    #[error("Ошибка при загрузке данных {message}")]
    Parse { path: PathBuf, message: String },
}

impl LoadError {
    /// Оборачивает ошибку библиотеки чтения с сохранением исходного сообщения
    pub fn parse(path: impl Into<PathBuf>, source: impl std::fmt::Display) -> Self {
        LoadError::Parse {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

/// Ошибки конфигурации
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Не удалось прочитать файл конфигурации
    #[error("Не удалось прочитать конфигурацию {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Файл конфигурации не является корректным TOML
    #[error("Ошибка разбора TOML {}: {source}", .path.display())]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Значение переменной окружения не удалось разобрать
    #[error("Переменная окружения {var_name}: значение '{value}' не является {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// Ошибки операций над листом этикеток
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SheetError {
    /// Новая область объединения пересекается с уже существующей
    #[error("Область {requested} пересекается с объединённой областью {existing}")]
    MergeOverlap { requested: String, existing: String },
}

/// Результат операций приложения
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_contains_path() {
        let err = LoadError::NotFound {
            path: PathBuf::from("orders/missing.xlsx"),
        };
        assert!(err.to_string().contains("orders/missing.xlsx"));
    }

    #[test]
    fn parse_error_keeps_original_message() {
        let err = LoadError::parse("a.xlsx", "zip error: invalid archive");
        assert_eq!(
            err.to_string(),
            "Ошибка при загрузке данных zip error: invalid archive"
        );
    }

    #[test]
    fn load_error_converts_into_app_error() {
        let app: AppError = LoadError::MissingPath.into();
        assert!(matches!(app, AppError::Load(LoadError::MissingPath)));
    }
}
