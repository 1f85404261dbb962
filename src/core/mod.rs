pub mod codec;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{Params, Product, SavedValue};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
