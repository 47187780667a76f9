//! Извлечение информации о заказе из строки таблицы
//!
//! Каждое поле разбирается независимо; неудачный разбор даёт значение по
//! умолчанию и не мешает остальным полям.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::models::{CellValue, Dimensions, OrderInfo, OrderRow};
use crate::utils::logging::truncate_text;

pub const STORE_APPLICATION_COLUMN: &str = "№ магазина / заявка";
pub const CLIENT_COLUMN: &str = "Клиент";
pub const FULL_NAME_COLUMN: &str = "Наименование";
pub const CARCASE_COLUMN: &str = "Корпус";
/// Пробелы внутри названия входят в формат файла раскроя
pub const EXTRA_COMPONENT_COLUMN: &str = "Профиль /            Доп. Элементы";
pub const FACADE_COLUMN: &str = "Фасад";
pub const WEIGHT_COLUMN: &str = "ВЕС, КГ";

/// Знаки умножения в габаритах: латинская x, кириллические х/Х, звёздочка, ×
const DIMENSION_SEPARATORS: &str = "[xхХ*×]";

fn item_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^(.*?)([0-9]+){DIMENSION_SEPARATORS}")).expect("valid regex")
    })
}

fn dimensions_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let sep = DIMENSION_SEPARATORS;
        Regex::new(&format!(
            r"([0-9]+)\s*{sep}\s*([0-9]+)\s*{sep}\s*([0-9]+)"
        ))
        .expect("valid regex")
    })
}

fn leading_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^0-9]+").expect("valid regex"))
}

/// Извлекатель полей заказа из одной строки
pub struct InfoExtractor<'a> {
    row: &'a OrderRow,
}

impl<'a> InfoExtractor<'a> {
    pub fn new(row: &'a OrderRow) -> Self {
        Self { row }
    }

    /// Собирает [`OrderInfo`] из строки; никогда не завершается ошибкой
    pub fn extract(&self) -> OrderInfo {
        let full_name = self.row.text(FULL_NAME_COLUMN);
        debug!("🧩 Разбор наименования: {}", truncate_text(&full_name, 60));

        OrderInfo {
            store_application_number: self.row.text(STORE_APPLICATION_COLUMN),
            client: self.row.text(CLIENT_COLUMN),
            item_name: extract_item_name(&full_name),
            dimensions: extract_dimensions(&full_name),
            carcase: extract_carcase(&self.row.text(CARCASE_COLUMN)),
            extra_component: optional_text(self.row.get(EXTRA_COMPONENT_COLUMN)),
            facade: optional_text(self.row.get(FACADE_COLUMN)),
            weight: self.row.get(WEIGHT_COLUMN).and_then(CellValue::as_number),
            full_name,
        }
    }
}

/// Текст перед первым числом, за которым идёт знак умножения
pub fn extract_item_name(full_name: &str) -> String {
    item_name_re()
        .captures(full_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Первая тройка `Ш×В×Г`; `None`, если её нет или число не помещается в u32
pub fn extract_dimensions(full_name: &str) -> Option<Dimensions> {
    let caps = dimensions_re().captures(full_name)?;
    let number = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
    Some(Dimensions::new(number(1)?, number(2)?, number(3)?))
}

/// Уникальные материалы корпуса через "/"
///
/// От каждой части берётся начальный нецифровой фрагмент. Порядок частей
/// в результате определяется множеством и не гарантируется.
pub fn extract_carcase(raw: &str) -> String {
    let words: HashSet<String> = raw
        .split('/')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| leading_word_re().find(part))
        .map(|m| m.as_str().trim().to_string())
        .collect();
    words.into_iter().collect::<Vec<_>>().join("/")
}

/// Значение колонки, если оно не пустое и не прочерк
fn optional_text(value: Option<&CellValue>) -> Option<String> {
    let text = value?.as_text();
    match text.as_str() {
        "" | "-" => None,
        _ => Some(text),
    }
}
