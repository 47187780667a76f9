//! Обработка заказа: загрузка таблицы → поиск → извлечение полей

use std::fmt::Display;

use tracing::info;

use crate::error::LoadError;
use crate::models::{DataLoader, OrderInfo};
use crate::services::{find, InfoExtractor, OrderNotFound};

/// Результат обработки заказа
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    Found(OrderInfo),
    /// Заказа нет в таблице; это не ошибка
    NotFound(OrderNotFound),
}

impl OrderOutcome {
    pub fn found(self) -> Option<OrderInfo> {
        match self {
            OrderOutcome::Found(info) => Some(info),
            OrderOutcome::NotFound(_) => None,
        }
    }
}

/// Обработчик заказов поверх любого источника данных
pub struct OrderProcessor<L: DataLoader> {
    data_loader: L,
}

impl<L: DataLoader> OrderProcessor<L> {
    pub fn new(data_loader: L) -> Self {
        Self { data_loader }
    }

    /// Загружает таблицу (путь по умолчанию у загрузчика) и извлекает заказ
    ///
    /// # Возвращает
    /// Ошибку только при сбое загрузки; отсутствие заказа даёт [`OrderOutcome::NotFound`]
    pub fn process_order(&self, order_number: impl Display) -> Result<OrderOutcome, LoadError> {
        let table = self.data_loader.load_data(None)?;

        match find(&table, order_number) {
            Ok(row) => {
                let info = InfoExtractor::new(&row).extract();
                info!("✓ Заказ найден: {}", info.full_name);
                Ok(OrderOutcome::Found(info))
            }
            Err(not_found) => {
                info!("⚠️ {}", not_found);
                Ok(OrderOutcome::NotFound(not_found))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CellValue, Table};
    use std::path::Path;

    struct InMemoryLoader(Table);

    impl DataLoader for InMemoryLoader {
        fn load_data(&self, _path: Option<&Path>) -> Result<Table, LoadError> {
            Ok(self.0.clone())
        }
    }

    struct FailingLoader;

    impl DataLoader for FailingLoader {
        fn load_data(&self, _path: Option<&Path>) -> Result<Table, LoadError> {
            Err(LoadError::MissingPath)
        }
    }

    fn table() -> Table {
        Table::new(
            vec!["№ Заказа".to_string(), "Наименование".to_string()],
            vec![vec![
                CellValue::Number(77.0),
                CellValue::Text("Комод 800х850х450".to_string()),
            ]],
        )
    }

    #[test]
    fn found_order_is_extracted() {
        let processor = OrderProcessor::new(InMemoryLoader(table()));
        let info = processor.process_order(77).unwrap().found().unwrap();
        assert_eq!(info.item_name, "Комод");
    }

    #[test]
    fn missing_order_is_reported_as_value() {
        let processor = OrderProcessor::new(InMemoryLoader(table()));
        match processor.process_order("78").unwrap() {
            OrderOutcome::NotFound(msg) => assert_eq!(msg.to_string(), "Заказ № 78 не найден!"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn load_failures_propagate() {
        let processor = OrderProcessor::new(FailingLoader);
        assert!(matches!(
            processor.process_order(1),
            Err(LoadError::MissingPath)
        ));
    }
}
