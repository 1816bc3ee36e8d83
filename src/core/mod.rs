pub mod aggregator;
pub mod codec;
pub mod etl;
pub mod filter;
pub mod normalizer;

pub use crate::domain::model::{EligibleRecord, FundingAmount, RawRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
