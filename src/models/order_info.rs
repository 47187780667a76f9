use serde::{Deserialize, Serialize};

/// Габариты изделия в миллиметрах, в порядке записи в наименовании
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

/// Информация о заказе, извлечённая из строки таблицы
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderInfo {
    pub store_application_number: String,
    pub client: String,
    pub full_name: String,
    pub item_name: String,
    /// `None`, если в наименовании нет трёх размеров
    pub dimensions: Option<Dimensions>,
    /// Уникальные материалы корпуса через "/"
    pub carcase: String,
    pub extra_component: Option<String>,
    pub facade: Option<String>,
    /// Только если в таблице вес записан числом
    pub weight: Option<f64>,
}

impl OrderInfo {
    /// Форматирует информацию о заказе для вывода
    ///
    /// # Возвращает
    /// Строки вида `✅ Поле: значение`, разделённые переводом строки.
    /// Габариты и вес выводятся, только если они известны.
    pub fn format_output(&self) -> String {
        let mut output = vec![
            format!("✅ Номер заказа: {}", self.store_application_number),
            format!("✅ Магазин / Заявка: {}", self.client),
            format!("✅ Полное наименование: {}", self.full_name),
            format!("✅ Наименование изделия: {}", self.item_name),
        ];
        if let Some(d) = self.dimensions {
            output.push(format!("✅ Ширина: {} мм", d.width));
            output.push(format!("✅ Высота: {} мм", d.height));
            output.push(format!("✅ Глубина: {} мм", d.depth));
        }
        output.push(format!("✅ Корпус: {}", self.carcase));
        output.push(format!(
            "✅ Дополнительный компонент: {}",
            self.extra_component.as_deref().unwrap_or("нет данных")
        ));
        output.push(format!(
            "✅ Фасад: {}",
            self.facade.as_deref().unwrap_or("нет данных")
        ));
        if let Some(weight) = self.weight {
            output.push(format!("✅ Вес: {} кг", weight.trunc() as i64));
        }

        output.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_documented_empty_values() {
        let info = OrderInfo::default();
        assert_eq!(info.item_name, "");
        assert_eq!(info.carcase, "");
        assert!(info.dimensions.is_none());
        assert!(info.extra_component.is_none());
        assert!(info.facade.is_none());
        assert!(info.weight.is_none());
    }

    #[test]
    fn format_output_skips_unknown_dimensions_and_weight() {
        let info = OrderInfo {
            store_application_number: "15/2231".to_string(),
            client: "Петров".to_string(),
            ..Default::default()
        };
        let text = info.format_output();

        assert!(text.contains("✅ Номер заказа: 15/2231"));
        assert!(text.contains("✅ Фасад: нет данных"));
        assert!(!text.contains("Ширина"));
        assert!(!text.contains("Вес"));
    }

    #[test]
    fn format_output_truncates_weight() {
        let info = OrderInfo {
            dimensions: Some(Dimensions::new(600, 720, 300)),
            weight: Some(45.9),
            facade: Some("МДФ белый глянец".to_string()),
            ..Default::default()
        };
        let text = info.format_output();

        assert!(text.contains("✅ Ширина: 600 мм"));
        assert!(text.contains("✅ Высота: 720 мм"));
        assert!(text.contains("✅ Глубина: 300 мм"));
        assert!(text.contains("✅ Фасад: МДФ белый глянец"));
        assert!(text.ends_with("✅ Вес: 45 кг"));
    }
}
