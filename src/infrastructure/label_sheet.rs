//! Лист с этикетками - слой инфраструктуры
//!
//! Единственный изменяемый объект, на котором рисуются этикетки. Хранит
//! разметку в памяти и выгружает её в `rust_xlsxwriter` при сохранении.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Image, Workbook, Worksheet, XlsxError};
use tracing::debug;

use crate::error::{AppError, AppResult, SheetError};
use crate::layout::coords::{CellRange, CellRef};

/// Шрифт текста ячейки
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub name: String,
    pub size: f64,
    pub bold: bool,
}

impl Font {
    pub fn bold(name: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            size,
            bold: true,
        }
    }
}

/// Выравнивание и поворот текста
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Alignment {
    /// По центру по горизонтали и вертикали
    pub center: bool,
    /// Поворот в градусах
    pub rotation: i16,
}

impl Alignment {
    pub const CENTER: Alignment = Alignment {
        center: true,
        rotation: 0,
    };

    pub const fn rotated(self, rotation: i16) -> Self {
        Self {
            center: self.center,
            rotation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Thick,
}

/// Оформление ячейки
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellStyle {
    /// Рамка со всех четырёх сторон
    pub border: Option<Border>,
    pub font: Option<Font>,
    pub alignment: Alignment,
}

impl CellStyle {
    fn to_format(&self) -> Format {
        let mut format = Format::new();
        if let Some(Border::Thick) = self.border {
            format = format.set_border(FormatBorder::Thick);
        }
        if let Some(font) = &self.font {
            format = format
                .set_font_name(font.name.as_str())
                .set_font_size(font.size);
            if font.bold {
                format = format.set_bold();
            }
        }
        if self.alignment.center {
            format = format
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter);
        }
        if self.alignment.rotation != 0 {
            format = format.set_rotation(self.alignment.rotation);
        }
        format
    }
}

/// Содержимое ячейки
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetCell {
    pub text: Option<String>,
    pub style: CellStyle,
}

/// Картинка, размещённая на листе
pub struct PlacedImage {
    pub anchor: CellRef,
    pub source: PathBuf,
    image: Image,
}

impl PlacedImage {
    /// Загружает картинку и масштабирует её к размеру в пикселях
    pub fn load(
        anchor: CellRef,
        source: impl Into<PathBuf>,
        width: f64,
        height: f64,
    ) -> Result<Self, XlsxError> {
        let source = source.into();
        let image = Image::new(&source)?.set_scale_to_size(width, height, false);
        Ok(Self {
            anchor,
            source,
            image,
        })
    }
}

impl fmt::Debug for PlacedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacedImage")
            .field("anchor", &self.anchor)
            .field("source", &self.source)
            .finish()
    }
}

/// Лист с этикетками
///
/// Все операции идемпотентны: повторная отрисовка той же этикетки не
/// дублирует объединения и картинки.
#[derive(Debug, Default)]
pub struct LabelSheet {
    name: String,
    row_heights: BTreeMap<u32, f64>,
    column_widths: BTreeMap<u16, f64>,
    merges: Vec<CellRange>,
    cells: BTreeMap<CellRef, SheetCell>,
    images: Vec<PlacedImage>,
}

impl LabelSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_heights.insert(row, height);
    }

    pub fn row_height(&self, row: u32) -> Option<f64> {
        self.row_heights.get(&row).copied()
    }

    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    pub fn column_width(&self, col: u16) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    /// Объединяет область
    ///
    /// Повтор той же области ничего не меняет; пересечение с другой
    /// объединённой областью возвращает ошибку.
    pub fn merge(&mut self, region: CellRange) -> Result<(), SheetError> {
        if self.merges.contains(&region) {
            return Ok(());
        }
        if let Some(existing) = self.merges.iter().find(|m| m.overlaps(&region)) {
            return Err(SheetError::MergeOverlap {
                requested: region.to_string(),
                existing: existing.to_string(),
            });
        }
        self.merges.push(region);
        Ok(())
    }

    pub fn merges(&self) -> &[CellRange] {
        &self.merges
    }

    pub fn set_border(&mut self, at: CellRef, border: Border) {
        self.cells.entry(at).or_default().style.border = Some(border);
    }

    /// Записывает текст со шрифтом и выравниванием, не трогая рамку
    pub fn write_text(
        &mut self,
        at: CellRef,
        text: impl Into<String>,
        font: Font,
        alignment: Alignment,
    ) {
        let cell = self.cells.entry(at).or_default();
        cell.text = Some(text.into());
        cell.style.font = Some(font);
        cell.style.alignment = alignment;
    }

    pub fn cell(&self, at: CellRef) -> Option<&SheetCell> {
        self.cells.get(&at)
    }

    pub fn text(&self, at: CellRef) -> Option<&str> {
        self.cells.get(&at).and_then(|c| c.text.as_deref())
    }

    pub fn cells(&self) -> impl Iterator<Item = (&CellRef, &SheetCell)> {
        self.cells.iter()
    }

    /// Вставляет картинку; картинка из того же файла в той же ячейке заменяется
    pub fn insert_image(&mut self, image: PlacedImage) {
        self.images
            .retain(|i| !(i.anchor == image.anchor && i.source == image.source));
        self.images.push(image);
    }

    pub fn images(&self) -> &[PlacedImage] {
        &self.images
    }

    /// Переносит разметку на лист rust_xlsxwriter
    pub fn write_to(&self, worksheet: &mut Worksheet) -> Result<(), XlsxError> {
        if !self.name.is_empty() {
            worksheet.set_name(&self.name)?;
        }
        for (&row, &height) in &self.row_heights {
            worksheet.set_row_height(row - 1, height)?;
        }
        for (&col, &width) in &self.column_widths {
            worksheet.set_column_width(col - 1, width)?;
        }

        for region in &self.merges {
            let anchor = self.cells.get(&region.first);
            let text = anchor.and_then(|c| c.text.as_deref()).unwrap_or("");
            let format = anchor
                .map(|c| c.style.to_format())
                .unwrap_or_else(Format::new);
            let (first_row, first_col) = region.first.zero_based();
            let (last_row, last_col) = region.last.zero_based();
            worksheet.merge_range(first_row, first_col, last_row, last_col, text, &format)?;
        }

        for (at, cell) in &self.cells {
            if self.merges.iter().any(|m| m.contains(*at)) {
                continue;
            }
            let (row, col) = at.zero_based();
            let format = cell.style.to_format();
            match &cell.text {
                Some(text) => worksheet.write_string_with_format(row, col, text, &format)?,
                None => worksheet.write_blank(row, col, &format)?,
            };
        }

        for placed in &self.images {
            let (row, col) = placed.anchor.zero_based();
            worksheet.insert_image(row, col, &placed.image)?;
        }
        Ok(())
    }

    /// Сохраняет лист в новую книгу .xlsx
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let save_error = |source: XlsxError| AppError::Save {
            path: path.to_path_buf(),
            source,
        };

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        self.write_to(worksheet).map_err(save_error)?;
        workbook.save(path).map_err(save_error)?;
        debug!(
            "💾 {}: объединений {}, ячеек {}, картинок {}",
            path.display(),
            self.merges.len(),
            self.cells.len(),
            self.images.len()
        );
        Ok(())
    }
}
