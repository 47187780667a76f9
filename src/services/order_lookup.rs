//! Поиск заказа в таблице по номеру

use std::fmt::{self, Display};

use tracing::debug;

use crate::models::{OrderRow, Table};

/// Колонка с номером заказа
pub const ORDER_NUMBER_COLUMN: &str = "№ Заказа";

/// Заказ с таким номером в таблице отсутствует
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderNotFound {
    pub order_number: String,
}

impl Display for OrderNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Заказ № {} не найден!", self.order_number)
    }
}

/// Находит первую строку, у которой номер заказа совпадает с `order_number`
///
/// Номера сравниваются как текст, поэтому числовой `1024` в таблице совпадает
/// со строкой `"1024"`. Остальные совпадения игнорируются.
pub fn find(table: &Table, order_number: impl Display) -> Result<OrderRow, OrderNotFound> {
    let wanted = order_number.to_string();
    let not_found = || OrderNotFound {
        order_number: wanted.clone(),
    };

    let Some(mut column) = table.column(ORDER_NUMBER_COLUMN) else {
        debug!("В таблице нет колонки \"{}\"", ORDER_NUMBER_COLUMN);
        return Err(not_found());
    };
    let index = column
        .position(|value| value.as_text() == wanted)
        .ok_or_else(not_found)?;

    debug!("🔎 Заказ № {} найден в строке {}", wanted, index + 1);
    table.row(index).ok_or_else(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CellValue;

    fn orders() -> Table {
        Table::new(
            vec![ORDER_NUMBER_COLUMN.to_string(), "Клиент".to_string()],
            vec![
                vec![CellValue::Number(1024.0), CellValue::Text("Первый".to_string())],
                vec![CellValue::Text("A-7".to_string()), CellValue::Text("Второй".to_string())],
                vec![CellValue::Number(1024.0), CellValue::Text("Дубль".to_string())],
            ],
        )
    }

    #[test]
    fn numeric_cell_matches_textual_request() {
        let row = find(&orders(), "1024").unwrap();
        assert_eq!(row.text("Клиент"), "Первый");

        let row = find(&orders(), 1024).unwrap();
        assert_eq!(row.text("Клиент"), "Первый");
    }

    #[test]
    fn first_of_several_matches_wins() {
        let row = find(&orders(), 1024).unwrap();
        assert_ne!(row.text("Клиент"), "Дубль");
    }

    #[test]
    fn textual_order_numbers_match() {
        assert_eq!(find(&orders(), "A-7").unwrap().text("Клиент"), "Второй");
    }

    #[test]
    fn miss_is_a_value_with_message() {
        let err = find(&orders(), 99).unwrap_err();
        assert_eq!(err.to_string(), "Заказ № 99 не найден!");
    }

    #[test]
    fn table_without_order_column_finds_nothing() {
        let table = Table::new(vec!["Клиент".to_string()], vec![vec![CellValue::Empty]]);
        assert!(find(&table, 1).is_err());
        assert!(find(&Table::default(), 1).is_err());
    }
}
