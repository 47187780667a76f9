pub mod excel_loader;

pub use excel_loader::{DataLoader, ExcelDataLoader, XlsLoader, XlsxLoader};
