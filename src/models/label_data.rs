use serde::{Deserialize, Serialize};

use super::order_info::{Dimensions, OrderInfo};

/// Вид этикетки: определяет, что печатается в поле "Цвет"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKind {
    /// КОРПУС
    Carcase,
    /// ОРГАЛИТ
    Hardboard,
    /// ФАСАДЫ МДФ
    MdfFacades,
    /// ФАСАДЫ ПЛАСТИК
    PlasticFacades,
    /// Любой другой тип: профиль / доп. элементы
    ExtraComponent,
}

impl LabelKind {
    /// Определяет вид по строке типа без учёта регистра
    pub fn parse(label_type: &str) -> Self {
        match label_type.to_uppercase().as_str() {
            "КОРПУС" => LabelKind::Carcase,
            "ОРГАЛИТ" => LabelKind::Hardboard,
            "ФАСАДЫ МДФ" => LabelKind::MdfFacades,
            "ФАСАДЫ ПЛАСТИК" => LabelKind::PlasticFacades,
            _ => LabelKind::ExtraComponent,
        }
    }
}

fn one() -> u32 {
    1
}

/// Данные одной этикетки, которые передаёт вызывающая сторона
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelData {
    pub label_type: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub store_number: String,
    #[serde(default = "one")]
    pub package_total: u32,
    #[serde(default = "one")]
    pub package_num: u32,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub carcase: String,
    #[serde(default)]
    pub extra_component: Option<String>,
    #[serde(default)]
    pub facade: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl LabelData {
    pub fn new(label_type: impl Into<String>) -> Self {
        Self {
            label_type: label_type.into(),
            order_number: String::new(),
            store_number: String::new(),
            package_total: 1,
            package_num: 1,
            client: String::new(),
            item_name: String::new(),
            dimensions: None,
            carcase: String::new(),
            extra_component: None,
            facade: None,
            weight: None,
        }
    }

    /// Заполняет поля этикетки из информации о заказе
    pub fn from_order(info: &OrderInfo, label_type: impl Into<String>) -> Self {
        Self {
            client: info.client.clone(),
            item_name: info.item_name.clone(),
            dimensions: info.dimensions,
            carcase: info.carcase.clone(),
            extra_component: info.extra_component.clone(),
            facade: info.facade.clone(),
            weight: info.weight,
            ..Self::new(label_type)
        }
    }

    pub fn with_order_number(mut self, order_number: impl Into<String>) -> Self {
        self.order_number = order_number.into();
        self
    }

    pub fn with_store_number(mut self, store_number: impl Into<String>) -> Self {
        self.store_number = store_number.into();
        self
    }

    /// Номер упаковки и общее число упаковок
    pub fn with_package(mut self, package_num: u32, package_total: u32) -> Self {
        self.package_num = package_num;
        self.package_total = package_total;
        self
    }

    pub fn kind(&self) -> LabelKind {
        LabelKind::parse(&self.label_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_kind_is_case_insensitive() {
        assert_eq!(LabelKind::parse("корпус"), LabelKind::Carcase);
        assert_eq!(LabelKind::parse("Оргалит"), LabelKind::Hardboard);
        assert_eq!(LabelKind::parse("фасады мдф"), LabelKind::MdfFacades);
        assert_eq!(LabelKind::parse("ФАСАДЫ пластик"), LabelKind::PlasticFacades);
    }

    #[test]
    fn unknown_or_padded_types_fall_back_to_extra_component() {
        assert_eq!(LabelKind::parse("ПРОФИЛЬ"), LabelKind::ExtraComponent);
        assert_eq!(LabelKind::parse(" КОРПУС"), LabelKind::ExtraComponent);
        assert_eq!(LabelKind::parse(""), LabelKind::ExtraComponent);
    }

    #[test]
    fn deserialize_applies_package_defaults() {
        let data: LabelData = toml::from_str(
            r#"
            label_type = "Корпус"
            carcase = "ЛДСП бел"
            "#,
        )
        .unwrap();
        assert_eq!(data.package_total, 1);
        assert_eq!(data.package_num, 1);
        assert_eq!(data.kind(), LabelKind::Carcase);
        assert!(data.weight.is_none());
    }

    #[test]
    fn from_order_copies_label_fields() {
        let info = OrderInfo {
            client: "Сидоров".to_string(),
            item_name: "Тумба".to_string(),
            dimensions: Some(Dimensions::new(400, 500, 450)),
            weight: Some(12.0),
            ..Default::default()
        };
        let data = LabelData::from_order(&info, "КОРПУС")
            .with_order_number("1207")
            .with_package(2, 3);

        assert_eq!(data.client, "Сидоров");
        assert_eq!(data.dimensions, info.dimensions);
        assert_eq!(data.order_number, "1207");
        assert_eq!((data.package_num, data.package_total), (2, 3));
    }
}
