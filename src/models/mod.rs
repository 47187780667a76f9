pub mod cell;
pub mod label_data;
pub mod loaders;
pub mod order_info;
pub mod table;

pub use cell::CellValue;
pub use label_data::{LabelData, LabelKind};
pub use loaders::{DataLoader, ExcelDataLoader, XlsLoader, XlsxLoader};
pub use order_info::{Dimensions, OrderInfo};
pub use table::{OrderRow, Table};
