//! Шаблон этикетки в относительных координатах блока из 17 строк
//!
//! Только данные: сдвиг по строкам выполняет [`super::coords`], заполнение выполняет
//! рендерер.

use phf::phf_map;

use super::coords::{cell, range, CellRange, CellRef};

/// Высота блока одной этикетки в строках
pub const ROWS_PER_LABEL: u32 = 17;

pub const FONT_NAME: &str = "Times New Roman";

/// Области объединения ячеек
pub const MERGE_REGIONS: [CellRange; 26] = [
    range("A1:E8"),
    range("A9:B12"),
    range("C9:E12"),
    range("A13:E16"),
    range("F1:L4"),
    range("M1:O4"),
    range("P1:R4"),
    range("S1:S16"),
    range("F5:I8"),
    range("J5:L8"),
    range("M5:O8"),
    range("P5:R8"),
    range("F9:I12"),
    range("J9:L12"),
    range("M9:O12"),
    range("P9:R12"),
    range("F13:G14"),
    range("H13:I14"),
    range("J13:K14"),
    range("F15:G16"),
    range("H15:I16"),
    range("J15:K16"),
    range("L13:M16"),
    range("N13:N16"),
    range("O13:O16"),
    range("P13:R16"),
];

/// Картинка, привязанная к левому верхнему углу ячейки
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSlot {
    /// Путь относительно каталога ресурсов
    pub path: &'static str,
    pub anchor: CellRef,
    /// Размер в пикселях
    pub width: f64,
    pub height: f64,
}

pub const IMAGES: [ImageSlot; 3] = [
    ImageSlot {
        path: "images/Logo.png",
        anchor: cell("A2"),
        width: 323.62,
        height: 108.4615384615385,
    },
    ImageSlot {
        path: "images/EAC.png",
        anchor: cell("A9"),
        width: 77.214,
        height: 61.53856,
    },
    ImageSlot {
        path: "images/Contacts.png",
        anchor: cell("C9"),
        width: 193.035,
        height: 65.38455,
    },
];

/// Откуда берётся текст ячейки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    Literal(&'static str),
    ItemName,
    /// Тип этикетки заглавными буквами
    LabelType,
    /// Цвет: зависит от вида этикетки
    KindValue,
    Height,
    Width,
    Depth,
    Weight,
    OrderNumber,
    /// "клиент/магазин"
    ClientStore,
    PackageTotal,
    PackageNum,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextCell {
    pub at: CellRef,
    pub source: TextSource,
    pub font_size: f64,
}

const fn text(at: &str, source: TextSource, font_size: f64) -> TextCell {
    TextCell {
        at: cell(at),
        source,
        font_size,
    }
}

pub const TEXT_CELLS: [TextCell; 22] = [
    text("A13", TextSource::Literal("ГОСТ 16371-2014"), 16.0),
    text("F1", TextSource::ItemName, 16.0),
    text("F9", TextSource::LabelType, 24.0),
    text("J9", TextSource::KindValue, 16.0),
    text("F15", TextSource::Height, 14.0),
    text("H15", TextSource::Width, 14.0),
    text("J15", TextSource::Depth, 14.0),
    text("N13", TextSource::Weight, 14.0),
    text("M1", TextSource::OrderNumber, 20.0),
    text("M9", TextSource::ClientStore, 14.0),
    text("P5", TextSource::PackageTotal, 20.0),
    text("P13", TextSource::PackageNum, 20.0),
    text("F5", TextSource::Literal("Наименование упаковки"), 16.0),
    text("J5", TextSource::Literal("Цвет"), 20.0),
    text("M5", TextSource::Literal("ЗАКАЗЧИК"), 20.0),
    text("P1", TextSource::Literal("ВСЕГО УПАКОВОК"), 14.0),
    text("P9", TextSource::Literal("№ УПАКОВКИ"), 14.0),
    text("F13", TextSource::Literal("ВЫСОТА"), 14.0),
    text("H13", TextSource::Literal("ШИРИНА"), 14.0),
    text("J13", TextSource::Literal("ГЛУБИНА"), 14.0),
    text("L13", TextSource::Literal("ВЕС"), 14.0),
    text("O13", TextSource::Literal("КГ"), 14.0),
];

/// Ячейка с датой отгрузки (повёрнута на 90°)
pub const DATE_CELL: CellRef = cell("S1");
pub const DATE_FONT_SIZE: f64 = 26.0;
pub const DATE_ROTATION: i16 = 90;
/// Через сколько дней от печати ставится дата
pub const DATE_LEAD_DAYS: i64 = 7;
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Высота строк блока в пунктах; строка 17 это промежуток между этикетками
pub static ROW_HEIGHTS: phf::Map<u32, f64> = phf_map! {
    1u32 => 21.0,
    2u32 => 21.0,
    3u32 => 21.0,
    4u32 => 21.0,
    5u32 => 18.75,
    6u32 => 18.75,
    7u32 => 18.75,
    8u32 => 18.75,
    9u32 => 13.5,
    10u32 => 13.5,
    11u32 => 13.5,
    12u32 => 13.5,
    13u32 => 15.75,
    14u32 => 15.75,
    15u32 => 15.75,
    16u32 => 15.75,
    17u32 => 30.0,
};

/// Ширина колонок листа в символах
pub static COLUMN_WIDTHS: phf::Map<&'static str, f64> = phf_map! {
    "A" => 8.43,
    "B" => 8.43,
    "C" => 8.43,
    "D" => 8.43,
    "E" => 8.43,
    "F" => 9.14,
    "G" => 9.14,
    "H" => 9.14,
    "I" => 9.14,
    "J" => 9.14,
    "K" => 9.14,
    "L" => 9.14,
    "M" => 9.14,
    "N" => 9.14,
    "O" => 6.71,
    "P" => 8.43,
    "Q" => 8.43,
    "R" => 8.43,
    "S" => 12.57,
};
