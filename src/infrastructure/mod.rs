pub mod label_sheet;

pub use label_sheet::{Alignment, Border, Font, LabelSheet, PlacedImage};
