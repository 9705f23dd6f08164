//! 类型定义模块

mod entry;
mod feedback;
mod view;

pub use entry::{MessageEntry, RowAction, RowState};
pub use feedback::{Banner, FeedbackKind, Indicator};
pub use view::{CatalogueView, RowStripe};
