//! Слой оркестрации
//!
//! ## Модули
//!
//! ### `order_processor` - обработка одного заказа
//! - загружает таблицу через [`crate::models::DataLoader`]
//! - ищет строку заказа и извлекает [`crate::models::OrderInfo`]
//! - отсутствие заказа возвращается значением, а не ошибкой
//!
//! ### `app` - приложение
//! - собирает лист с этикетками для всех упаковок заказа
//! - сохраняет лист в файл из конфигурации
//!
//! ## Зависимости слоёв
//!
//! ```text
//! app
//!     ↓
//! order_processor
//!     ↓
//! services (lookup / extractor / renderer)
//!     ↓
//! infrastructure (LabelSheet) + layout (шаблон)
//! ```

pub mod app;
pub mod order_processor;

pub use app::{App, LabelJob};
pub use order_processor::{OrderOutcome, OrderProcessor};
