//! Приложение печати этикеток - слой оркестрации
//!
//! Конфигурация → поиск заказа → лист с этикетками по числу упаковок → сохранение

use std::path::PathBuf;

use tracing::warn;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::LabelSheet;
use crate::models::{ExcelDataLoader, LabelData, OrderInfo};
use crate::orchestrator::order_processor::{OrderOutcome, OrderProcessor};
use crate::services::{start_row_for, LabelRenderer};
use crate::utils::logging::{log_labels_saved, log_order_summary, log_startup};

pub const DEFAULT_LABEL_TYPE: &str = "КОРПУС";

/// Что напечатать: заказ, тип этикетки и число упаковок
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelJob {
    pub order_number: String,
    pub label_type: String,
    pub packages: u32,
}

impl LabelJob {
    /// Разбирает позиционные аргументы `<ORDER_NUMBER> [LABEL_TYPE] [PACKAGES]`
    pub fn from_args<I>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let order_number = args
            .next()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::Usage(usage_text()))?;
        let label_type = args.next().unwrap_or_else(|| DEFAULT_LABEL_TYPE.to_string());
        let packages = match args.next() {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(AppError::Usage(format!(
                        "Число упаковок должно быть положительным целым: {raw}"
                    )))
                }
            },
            None => 1,
        };
        if let Some(extra) = args.next() {
            return Err(AppError::Usage(format!(
                "Лишний аргумент: {extra}\n\n{}",
                usage_text()
            )));
        }

        Ok(Self {
            order_number: order_number.trim().to_string(),
            label_type,
            packages,
        })
    }
}

pub fn usage_text() -> String {
    "Использование: order-labels <НОМЕР_ЗАКАЗА> [ТИП_ЭТИКЕТКИ] [УПАКОВОК]\n\
     Типы: КОРПУС (по умолчанию), ОРГАЛИТ, ФАСАДЫ МДФ, ФАСАДЫ ПЛАСТИК, любой другой - доп. элементы\n\
     Переменные окружения: ORDERS_FILE, LABELS_OUTPUT_FILE, LABEL_ASSETS_DIR, LABEL_SHEET_NAME, VERBOSE_LOGGING, ORDER_LABELS_CONFIG"
        .to_string()
}

/// Основная структура приложения
pub struct App {
    config: Config,
    processor: OrderProcessor<ExcelDataLoader>,
    renderer: LabelRenderer,
}

impl App {
    pub fn new(config: Config) -> Self {
        let loader = match &config.orders_file {
            Some(path) => ExcelDataLoader::with_default_path(path),
            None => ExcelDataLoader::new(),
        };
        Self {
            processor: OrderProcessor::new(loader),
            renderer: LabelRenderer::new(&config.assets_dir),
            config,
        }
    }

    /// Выполняет задание
    ///
    /// # Возвращает
    /// Путь к сохранённому файлу или `None`, если заказ не найден
    pub fn run(&self, job: &LabelJob) -> AppResult<Option<PathBuf>> {
        log_startup(&job.order_number, &job.label_type, job.packages);

        let info = match self.processor.process_order(&job.order_number)? {
            OrderOutcome::Found(info) => info,
            OrderOutcome::NotFound(not_found) => {
                warn!("❌ {}", not_found);
                return Ok(None);
            }
        };
        log_order_summary(&info);

        let sheet = self.build_sheet(&info, job);
        sheet.save(&self.config.output_file)?;
        log_labels_saved(job.packages, &self.config.output_file);

        Ok(Some(self.config.output_file.clone()))
    }

    /// Лист с этикетками всех упаковок заказа, одна под другой
    pub fn build_sheet(&self, info: &OrderInfo, job: &LabelJob) -> LabelSheet {
        let mut sheet = LabelSheet::new(self.config.sheet_name.as_str());
        self.renderer.prepare_sheet(&mut sheet);

        for package_num in 1..=job.packages {
            let data = LabelData::from_order(info, job.label_type.as_str())
                .with_order_number(job.order_number.as_str())
                .with_store_number(info.store_application_number.as_str())
                .with_package(package_num, job.packages);
            self.renderer
                .render(&mut sheet, start_row_for(package_num), &data);
        }
        sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::coords::cell;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn job_defaults() {
        let job = LabelJob::from_args(args(&["1207"])).unwrap();
        assert_eq!(job.label_type, DEFAULT_LABEL_TYPE);
        assert_eq!(job.packages, 1);
    }

    #[test]
    fn job_with_all_arguments() {
        let job = LabelJob::from_args(args(&["1207", "ФАСАДЫ МДФ", "3"])).unwrap();
        assert_eq!(job.order_number, "1207");
        assert_eq!(job.label_type, "ФАСАДЫ МДФ");
        assert_eq!(job.packages, 3);
    }

    #[test]
    fn job_rejects_bad_arguments() {
        assert!(LabelJob::from_args(args(&[])).is_err());
        assert!(LabelJob::from_args(args(&["1207", "КОРПУС", "0"])).is_err());
        assert!(LabelJob::from_args(args(&["1207", "КОРПУС", "два"])).is_err());
        assert!(LabelJob::from_args(args(&["1207", "КОРПУС", "2", "лишний"])).is_err());
    }

    #[test]
    fn build_sheet_numbers_packages() {
        let app = App::new(Config {
            assets_dir: PathBuf::from("no-assets-here"),
            ..Config::default()
        });
        let info = OrderInfo {
            client: "Иванов".to_string(),
            store_application_number: "15".to_string(),
            ..Default::default()
        };
        let job = LabelJob::from_args(args(&["1207", "КОРПУС", "3"])).unwrap();

        let sheet = app.build_sheet(&info, &job);

        assert_eq!(sheet.name(), "Этикетки");
        assert_eq!(sheet.text(cell("P13")), Some("1"));
        assert_eq!(sheet.text(cell("P30")), Some("2"));
        assert_eq!(sheet.text(cell("P47")), Some("3"));
        assert_eq!(sheet.text(cell("P39")), Some("3"));
        assert_eq!(sheet.text(cell("M26")), Some("Иванов/15"));
        assert_eq!(sheet.text(cell("M35")), Some("№ 1207"));
    }
}
