//! Загрузка таблицы заказов из файла раскроя
//!
//! Каждый формат книги реализует [`DataLoader`]; [`ExcelDataLoader`]
//! выбирает реализацию по расширению файла.

use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{open_workbook, Reader, Xls, Xlsx};
use tracing::{debug, info, warn};

use crate::error::LoadError;
use crate::models::cell::CellValue;
use crate::models::table::Table;

/// Источник табличных данных о заказах
pub trait DataLoader {
    /// Загружает таблицу из файла
    ///
    /// # Аргументы
    /// - `path`: путь к файлу; если `None`, используется сохранённый путь (если есть)
    fn load_data(&self, path: Option<&Path>) -> Result<Table, LoadError>;
}

/// Старый двоичный формат Excel (.xls)
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsLoader;

/// Формат Office Open XML (.xlsx и родственные)
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxLoader;

impl DataLoader for XlsLoader {
    fn load_data(&self, path: Option<&Path>) -> Result<Table, LoadError> {
        let path = path.ok_or(LoadError::MissingPath)?;
        read_first_sheet::<Xls<BufReader<File>>>(path)
    }
}

impl DataLoader for XlsxLoader {
    fn load_data(&self, path: Option<&Path>) -> Result<Table, LoadError> {
        let path = path.ok_or(LoadError::MissingPath)?;
        read_first_sheet::<Xlsx<BufReader<File>>>(path)
    }
}

/// Загрузчик Excel с путём по умолчанию
#[derive(Debug, Clone, Default)]
pub struct ExcelDataLoader {
    default_path: Option<PathBuf>,
}

impl ExcelDataLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Загрузчик, который при отсутствии пути читает указанный файл
    pub fn with_default_path(path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: Some(path.into()),
        }
    }
}

impl DataLoader for ExcelDataLoader {
    fn load_data(&self, path: Option<&Path>) -> Result<Table, LoadError> {
        let path = path
            .or(self.default_path.as_deref())
            .ok_or(LoadError::MissingPath)?;

        if is_legacy_xls(path) {
            debug!("📂 {}: формат xls", path.display());
            XlsLoader.load_data(Some(path))
        } else {
            debug!("📂 {}: формат xlsx", path.display());
            XlsxLoader.load_data(Some(path))
        }
    }
}

fn is_legacy_xls(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xls"))
}

/// Читает первый лист книги: первая строка содержит заголовки, остальные строки это данные
fn read_first_sheet<R>(path: &Path) -> Result<Table, LoadError>
where
    R: Reader<BufReader<File>>,
    R::Error: Display,
{
    if !path.is_file() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut workbook: R = open_workbook(path).map_err(|e| LoadError::parse(path, e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?
        .map_err(|e| LoadError::parse(path, e))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|header| {
            header
                .iter()
                .map(|cell| CellValue::from(cell).as_text())
                .collect()
        })
        .unwrap_or_default();
    let data: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(CellValue::from).collect())
        .collect();

    let table = Table::new(headers, data);
    if table.is_empty() {
        warn!("⚠️ В файле {} нет строк с заказами", path.display());
    }
    info!(
        "✓ Загружено строк: {} из {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_not_found_with_path() {
        let err = ExcelDataLoader::new()
            .load_data(Some(Path::new("nowhere/Раскрой.xlsx")))
            .unwrap_err();

        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().contains("nowhere/Раскрой.xlsx"));
    }

    #[test]
    fn missing_legacy_file_reports_not_found() {
        let err = ExcelDataLoader::new()
            .load_data(Some(Path::new("nowhere/old.XLS")))
            .unwrap_err();
        assert!(err.to_string().contains("nowhere/old.XLS"));
    }

    #[test]
    fn no_path_and_no_default_is_an_error() {
        let err = ExcelDataLoader::new().load_data(None).unwrap_err();
        assert!(matches!(err, LoadError::MissingPath));
    }

    #[test]
    fn default_path_is_used_when_none_given() {
        let loader = ExcelDataLoader::with_default_path("configured/orders.xls");
        let err = loader.load_data(None).unwrap_err();
        match err {
            LoadError::NotFound { path } => {
                assert_eq!(path, PathBuf::from("configured/orders.xls"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_legacy_xls(Path::new("a.xls")));
        assert!(is_legacy_xls(Path::new("a.XLS")));
        assert!(!is_legacy_xls(Path::new("a.xlsx")));
        assert!(!is_legacy_xls(Path::new("a")));
    }

    #[test]
    fn header_only_workbook_loads_as_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("headers.xlsx");
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "№ Заказа").unwrap();
        sheet.write_string(0, 1, "Клиент").unwrap();
        workbook.save(&path).unwrap();

        let table = ExcelDataLoader::new().load_data(Some(&path)).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.headers(), ["№ Заказа", "Клиент"]);
    }

    #[test]
    fn garbage_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"not a zip archive").unwrap();

        let err = ExcelDataLoader::new().load_data(Some(&path)).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().starts_with("Ошибка при загрузке данных"));
    }
}
