//! Отрисовка этикетки на листе - слой бизнес-возможностей
//!
//! Этикетка занимает блок из 17 строк. Все координаты шаблона сдвигаются на
//! `start_row - 1`, поэтому этикетки можно ставить одну под другой.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::infrastructure::label_sheet::{Alignment, Border, Font, LabelSheet, PlacedImage};
use crate::layout::coords::column_index;
use crate::layout::template::{
    TextSource, COLUMN_WIDTHS, DATE_CELL, DATE_FONT_SIZE, DATE_FORMAT, DATE_LEAD_DAYS,
    DATE_ROTATION, FONT_NAME, IMAGES, MERGE_REGIONS, ROWS_PER_LABEL, ROW_HEIGHTS, TEXT_CELLS,
};
use crate::models::{Dimensions, LabelData, LabelKind};

/// Первая строка блока этикетки с номером `label_index` (с 1)
pub fn start_row_for(label_index: u32) -> u32 {
    label_index
        .saturating_sub(1)
        .saturating_mul(ROWS_PER_LABEL)
        .saturating_add(1)
}

/// Что было сделано при отрисовке одной этикетки
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub merged: usize,
    pub images_inserted: usize,
    pub images_skipped: usize,
    pub text_cells: usize,
}

/// Рендерер этикеток
///
/// Картинки ищутся относительно `asset_root` (`images/Logo.png` и т.д.).
#[derive(Debug, Clone)]
pub struct LabelRenderer {
    asset_root: PathBuf,
}

impl Default for LabelRenderer {
    fn default() -> Self {
        Self::new(".")
    }
}

impl LabelRenderer {
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: asset_root.into(),
        }
    }

    /// Ширина колонок листа; достаточно одного раза на лист
    pub fn prepare_sheet(&self, sheet: &mut LabelSheet) {
        for (name, &width) in COLUMN_WIDTHS.entries() {
            if let Some(col) = column_index(name) {
                sheet.set_column_width(col, width);
            }
        }
    }

    /// Рисует этикетку с датой отгрузки от сегодняшнего дня
    pub fn render(&self, sheet: &mut LabelSheet, start_row: u32, data: &LabelData) -> RenderSummary {
        self.render_on(sheet, start_row, data, Local::now().date_naive())
    }

    /// Рисует этикетку, начиная со строки `start_row`
    ///
    /// # Аргументы
    /// - `sheet`: лист, на котором рисуется этикетка
    /// - `start_row`: первая строка блока (с 1)
    /// - `data`: данные этикетки
    /// - `issued`: дата печати; на этикетку ставится `issued + 7 дней`
    ///
    /// Шаги независимы: ошибка одного шага записывается в лог, остальные
    /// выполняются. Повторный вызов с теми же аргументами ничего не ломает.
    pub fn render_on(
        &self,
        sheet: &mut LabelSheet,
        start_row: u32,
        data: &LabelData,
        issued: NaiveDate,
    ) -> RenderSummary {
        let offset = start_row.saturating_sub(1);
        debug!(
            "🏷️ Этикетка {} / {}: строки {}-{}",
            data.package_num,
            data.package_total,
            offset.saturating_add(1),
            offset.saturating_add(ROWS_PER_LABEL)
        );

        apply_row_heights(sheet, offset);
        let merged = apply_merges_and_borders(sheet, offset);
        let (images_inserted, images_skipped) = self.insert_images(sheet, offset);
        let text_cells = set_text_cells(sheet, offset, data);
        set_date(sheet, offset, issued);

        RenderSummary {
            merged,
            images_inserted,
            images_skipped,
            text_cells,
        }
    }

    fn insert_images(&self, sheet: &mut LabelSheet, offset: u32) -> (usize, usize) {
        let mut inserted = 0;
        let mut skipped = 0;
        for slot in &IMAGES {
            let path = self.asset_root.join(slot.path);
            if !path.exists() {
                skipped += 1;
                continue;
            }
            match PlacedImage::load(slot.anchor.shift(offset), &path, slot.width, slot.height) {
                Ok(image) => {
                    sheet.insert_image(image);
                    inserted += 1;
                }
                Err(e) => {
                    warn!("Ошибка при вставке изображения {}: {}", path.display(), e);
                    skipped += 1;
                }
            }
        }
        (inserted, skipped)
    }
}

fn apply_row_heights(sheet: &mut LabelSheet, offset: u32) {
    for (&row, &height) in ROW_HEIGHTS.entries() {
        sheet.set_row_height(row.saturating_add(offset), height);
    }
}

fn apply_merges_and_borders(sheet: &mut LabelSheet, offset: u32) -> usize {
    let mut merged = 0;
    for region in MERGE_REGIONS.iter().map(|r| r.shift(offset)) {
        if let Err(e) = sheet.merge(region) {
            warn!("⚠️ Пропуск объединения: {}", e);
            continue;
        }
        for at in region.cells() {
            sheet.set_border(at, Border::Thick);
        }
        merged += 1;
    }
    merged
}

fn set_text_cells(sheet: &mut LabelSheet, offset: u32, data: &LabelData) -> usize {
    let mut written = 0;
    for text_cell in &TEXT_CELLS {
        let text = resolve_text(text_cell.source, data);
        if text.is_empty() {
            continue;
        }
        sheet.write_text(
            text_cell.at.shift(offset),
            text,
            Font::bold(FONT_NAME, text_cell.font_size),
            Alignment::CENTER,
        );
        written += 1;
    }
    written
}

fn set_date(sheet: &mut LabelSheet, offset: u32, issued: NaiveDate) {
    let label_date = issued + chrono::Duration::days(DATE_LEAD_DAYS);
    sheet.write_text(
        DATE_CELL.shift(offset),
        label_date.format(DATE_FORMAT).to_string(),
        Font::bold(FONT_NAME, DATE_FONT_SIZE),
        Alignment::CENTER.rotated(DATE_ROTATION),
    );
}

/// Текст ячейки шаблона для конкретной этикетки; пустую строку не пишем
fn resolve_text(source: TextSource, data: &LabelData) -> String {
    let dimension = |pick: fn(&Dimensions) -> u32| {
        data.dimensions
            .as_ref()
            .map(|d| pick(d).to_string())
            .unwrap_or_default()
    };

    match source {
        TextSource::Literal(text) => text.to_string(),
        TextSource::ItemName => data.item_name.clone(),
        TextSource::LabelType => data.label_type.to_uppercase(),
        TextSource::KindValue => kind_value(data),
        TextSource::Height => dimension(|d| d.height),
        TextSource::Width => dimension(|d| d.width),
        TextSource::Depth => dimension(|d| d.depth),
        TextSource::Weight => match data.weight {
            Some(w) if w.is_finite() && w != 0.0 => (w.trunc() as i64).to_string(),
            _ => String::new(),
        },
        TextSource::OrderNumber => format!("№ {}", data.order_number),
        TextSource::ClientStore => format!("{}/{}", data.client, data.store_number),
        TextSource::PackageTotal => data.package_total.to_string(),
        TextSource::PackageNum => data.package_num.to_string(),
    }
}

/// Значение поля "Цвет" в зависимости от вида этикетки
fn kind_value(data: &LabelData) -> String {
    match data.kind() {
        LabelKind::Carcase => data.carcase.clone(),
        LabelKind::Hardboard => "БЕЛЫЙ".to_string(),
        LabelKind::MdfFacades | LabelKind::PlasticFacades => {
            data.facade.clone().unwrap_or_default()
        }
        LabelKind::ExtraComponent => data.extra_component.clone().unwrap_or_default(),
    }
}
