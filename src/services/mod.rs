pub mod info_extractor;
pub mod label_renderer;
pub mod order_lookup;

pub use info_extractor::InfoExtractor;
pub use label_renderer::{start_row_for, LabelRenderer, RenderSummary};
pub use order_lookup::{find, OrderNotFound};
