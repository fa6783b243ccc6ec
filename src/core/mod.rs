pub mod dataset;
pub mod query;

pub use crate::domain::model::{DailyRecord, MessageResponse, MonthlyRecord};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
