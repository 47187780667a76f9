use std::collections::HashMap;

use super::cell::CellValue;

/// Таблица заказов в памяти: заголовки и строки значений
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Создаёт таблицу; короткие строки дополняются пустыми значениями
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Индекс колонки по имени; при повторяющихся заголовках берётся первая
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Значения одной колонки в порядке строк
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a CellValue> + 'a> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Строка по индексу в виде отображения "колонка → значение"
    pub fn row(&self, index: usize) -> Option<OrderRow> {
        let values = self.rows.get(index)?;
        let mut cells = HashMap::with_capacity(self.headers.len());
        for (header, value) in self.headers.iter().zip(values) {
            cells.entry(header.clone()).or_insert_with(|| value.clone());
        }
        Some(OrderRow { cells })
    }
}

/// Одна строка таблицы с доступом по имени колонки
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderRow {
    cells: HashMap<String, CellValue>,
}

impl OrderRow {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Текст колонки или пустая строка, если колонки нет
    pub fn text(&self, column: &str) -> String {
        self.get(column).map(CellValue::as_text).unwrap_or_default()
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for OrderRow {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
