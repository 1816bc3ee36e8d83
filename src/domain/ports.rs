use crate::domain::model::{RawRecord, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn template_path(&self) -> &str;
    fn ranked_output(&self) -> bool;
    fn summary_path(&self) -> Option<&str>;
    fn top_locations(&self) -> usize;
    fn top_funded(&self) -> usize;
}

pub trait Pipeline {
    fn has_input(&self) -> bool;
    fn write_template(&self) -> Result<String>;
    fn extract(&self) -> Result<Vec<RawRecord>>;
    fn transform(&self, data: Vec<RawRecord>) -> Result<TransformResult>;
    fn load(&self, result: &TransformResult) -> Result<String>;
}
