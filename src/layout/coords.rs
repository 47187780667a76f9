//! Координаты ячеек в нотации A1 (строки и колонки с единицы)

use std::fmt;

/// Адрес ячейки: строка и колонка, обе с 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellRef {
    pub row: u32,
    pub col: u16,
}

/// Прямоугольная область от `first` до `last` включительно
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub first: CellRef,
    pub last: CellRef,
}

/// Разбирает ссылку вида `"P13"` на этапе компиляции
///
/// Некорректная ссылка в константе шаблона останавливает сборку. Для текста,
/// пришедшего во время работы, есть [`try_cell`].
pub(crate) const fn cell(a1: &str) -> CellRef {
    match try_cell(a1) {
        Some(at) => at,
        None => panic!("invalid A1 cell reference"),
    }
}

/// Разбирает диапазон вида `"A1:E8"` на этапе компиляции
pub(crate) const fn range(a1: &str) -> CellRange {
    match try_range(a1) {
        Some(region) => region,
        None => panic!("invalid A1 range"),
    }
}

/// Ссылка вида `"P13"`; `None`, если строка не является адресом ячейки
pub const fn try_cell(a1: &str) -> Option<CellRef> {
    let bytes = a1.as_bytes();
    parse_cell(bytes, 0, bytes.len())
}

/// Диапазон вида `"A1:E8"`; `None` без двоеточия или при перепутанных углах
pub const fn try_range(a1: &str) -> Option<CellRange> {
    let bytes = a1.as_bytes();
    let mut colon = 0;
    while colon < bytes.len() && bytes[colon] != b':' {
        colon += 1;
    }
    if colon == bytes.len() {
        return None;
    }
    let Some(first) = parse_cell(bytes, 0, colon) else {
        return None;
    };
    let Some(last) = parse_cell(bytes, colon + 1, bytes.len()) else {
        return None;
    };
    if first.row > last.row || first.col > last.col {
        return None;
    }
    Some(CellRange { first, last })
}

const fn parse_cell(bytes: &[u8], start: usize, end: usize) -> Option<CellRef> {
    let mut i = start;
    let mut col: u32 = 0;
    while i < end && bytes[i].is_ascii_uppercase() {
        col = col * 26 + (bytes[i] - b'A' + 1) as u32;
        if col > u16::MAX as u32 {
            return None;
        }
        i += 1;
    }
    let digits = i;
    let mut row: u32 = 0;
    while i < end && bytes[i].is_ascii_digit() {
        row = match row.checked_mul(10) {
            Some(r) => match r.checked_add((bytes[i] - b'0') as u32) {
                Some(r) => r,
                None => return None,
            },
            None => return None,
        };
        i += 1;
    }
    if col == 0 || digits == i || i != end || row == 0 {
        return None;
    }
    Some(CellRef {
        row,
        col: col as u16,
    })
}

impl CellRef {
    pub const fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Та же ячейка, сдвинутая вниз на `offset` строк (с насыщением на `u32::MAX`)
    pub const fn shift(self, offset: u32) -> Self {
        Self {
            row: self.row.saturating_add(offset),
            col: self.col,
        }
    }

    /// Нулевые координаты (строка, колонка) для rust_xlsxwriter
    pub fn zero_based(self) -> (u32, u16) {
        (self.row - 1, self.col - 1)
    }
}

impl CellRange {
    pub const fn shift(self, offset: u32) -> Self {
        Self {
            first: self.first.shift(offset),
            last: self.last.shift(offset),
        }
    }

    pub fn contains(&self, cell: CellRef) -> bool {
        (self.first.row..=self.last.row).contains(&cell.row)
            && (self.first.col..=self.last.col).contains(&cell.col)
    }

    pub fn overlaps(&self, other: &CellRange) -> bool {
        self.first.row <= other.last.row
            && other.first.row <= self.last.row
            && self.first.col <= other.last.col
            && other.first.col <= self.last.col
    }

    /// Все ячейки области построчно
    pub fn cells(&self) -> impl Iterator<Item = CellRef> {
        let (first, last) = (self.first, self.last);
        (first.row..=last.row)
            .flat_map(move |row| (first.col..=last.col).map(move |col| CellRef::new(row, col)))
    }
}

/// Буквенное имя колонки: 1 → "A", 27 → "AA"
pub fn column_name(col: u16) -> String {
    let mut n = u32::from(col);
    let mut name = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        name.push(char::from(b'A' + rem));
        n = (n - 1) / 26;
    }
    name.iter().rev().collect()
}

/// Номер колонки по буквенному имени: "A" → 1; `None` для пустой строки и не-букв
pub fn column_index(name: &str) -> Option<u16> {
    if name.is_empty() {
        return None;
    }
    name.bytes().try_fold(0u16, |acc, b| {
        if !b.is_ascii_uppercase() {
            return None;
        }
        acc.checked_mul(26)?.checked_add(u16::from(b - b'A' + 1))
    })
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_name(self.col), self.row)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a1_references() {
        assert_eq!(cell("A1"), CellRef::new(1, 1));
        assert_eq!(cell("S16"), CellRef::new(16, 19));
        assert_eq!(cell("AA3"), CellRef::new(3, 27));
        assert_eq!(range("F13:G14").last, CellRef::new(14, 7));
    }

    #[test]
    fn display_round_trips_through_a1() {
        assert_eq!(cell("P13").to_string(), "P13");
        assert_eq!(range("A1:E8").shift(17).to_string(), "A18:E25");
        assert_eq!(column_name(27), "AA");
        assert_eq!(column_index("S"), Some(19));
        assert_eq!(column_index("AA"), Some(27));
        assert_eq!(column_index("a"), None);
        assert_eq!(column_index(""), None);
    }

    #[test]
    fn shift_moves_rows_only() {
        let shifted = cell("J9").shift(34);
        assert_eq!(shifted, CellRef::new(43, 10));
        assert_eq!(cell("J9").shift(0), cell("J9"));
    }

    #[test]
    fn overlap_and_containment() {
        let a = range("A1:E8");
        assert!(a.overlaps(&range("E8:F9")));
        assert!(!a.overlaps(&range("F1:L4")));
        assert!(!a.overlaps(&a.shift(17)));
        assert!(a.contains(cell("C4")));
        assert!(!a.contains(cell("F4")));
        assert_eq!(range("F13:G14").cells().count(), 4);
    }

    #[test]
    fn runtime_text_is_parsed_without_panicking() {
        assert_eq!(try_cell("C9"), Some(CellRef::new(9, 3)));
        assert_eq!(try_cell(""), None);
        assert_eq!(try_cell("9C"), None);
        assert_eq!(try_cell("A0"), None);
        assert_eq!(try_cell("a1"), None);
        assert_eq!(try_cell("A99999999999"), None);
        assert_eq!(try_cell("ZZZZ1"), None);
        assert_eq!(try_range("A1:E8"), Some(range("A1:E8")));
        assert_eq!(try_range("A1"), None);
        assert_eq!(try_range("E8:A1"), None);
        assert_eq!(try_range(":"), None);
    }

    #[test]
    fn shift_saturates_instead_of_overflowing() {
        assert_eq!(cell("A2").shift(u32::MAX).row, u32::MAX);
        assert_eq!(range("A1:E8").shift(u32::MAX - 3).last.row, u32::MAX);
    }

    #[test]
    fn zero_based_conversion() {
        assert_eq!(cell("A1").zero_based(), (0, 0));
        assert_eq!(cell("S18").zero_based(), (17, 18));
    }
}
