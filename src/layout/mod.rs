pub mod coords;
pub mod template;

pub use coords::{try_cell, try_range, CellRange, CellRef};
pub use template::ROWS_PER_LABEL;
