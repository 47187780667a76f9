//! # Order Labels
//!
//! Печать этикеток упаковок по файлу раскроя заказов
//!
//! ## Архитектура
//!
//! ### ① Модели (Models)
//! - `models/` - ячейки, таблица, строка заказа, `OrderInfo`, `LabelData`
//! - `models/loaders` - загрузка .xls / .xlsx через calamine
//!
//! ### ② Инфраструктура (Infrastructure)
//! - `LabelSheet` - единственный изменяемый лист, выгружается через rust_xlsxwriter
//!
//! ### ③ Разметка (Layout)
//! - `layout/coords` - ячейки A1 и сдвиг по строкам
//! - `layout/template` - шаблон этикетки как данные
//!
//! ### ④ Сервисы (Services)
//! - `find` - поиск заказа по номеру
//! - `InfoExtractor` - извлечение полей регулярными выражениями
//! - `LabelRenderer` - отрисовка этикетки в блоке из 17 строк
//!
//! ### ⑤ Оркестрация (Orchestration)
//! - `OrderProcessor` - загрузка → поиск → извлечение
//! - `App` - лист этикеток для всех упаковок и сохранение

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod layout;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// Часто используемые типы
pub use config::Config;
pub use error::{AppError, AppResult, LoadError};
pub use infrastructure::LabelSheet;
pub use models::{DataLoader, ExcelDataLoader, LabelData, LabelKind, OrderInfo, Table};
pub use orchestrator::{App, LabelJob, OrderOutcome, OrderProcessor};
pub use services::{find, start_row_for, InfoExtractor, LabelRenderer, OrderNotFound};
