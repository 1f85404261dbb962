use crate::domain::model::{Params, Product};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn var_a(&self) -> i64;
    fn var_b(&self) -> i64;
    fn save_name(&self) -> &str;
}

pub trait Pipeline {
    fn compute(&self) -> Result<Product>;
    /// Returns the path the product was written to.
    fn persist(&self, product: &Product) -> Result<String>;
}

impl ConfigProvider for Params {
    fn var_a(&self) -> i64 {
        self.var_a
    }

    fn var_b(&self) -> i64 {
        self.var_b
    }

    fn save_name(&self) -> &str {
        &self.save_name
    }
}
