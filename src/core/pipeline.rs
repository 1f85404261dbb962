use crate::core::codec;
use crate::core::{ConfigProvider, Pipeline, Product, Storage};
use crate::utils::error::{MulError, Result};

pub struct MultiplyPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MultiplyPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for MultiplyPipeline<S, C> {
    fn compute(&self) -> Result<Product> {
        let a = self.config.var_a();
        let b = self.config.var_b();

        let value = a
            .checked_mul(b)
            .ok_or(MulError::OverflowError { a, b })?;

        tracing::debug!("Computed {} * {} = {}", a, b, value);

        Ok(Product {
            var_a: a,
            var_b: b,
            value,
        })
    }

    fn persist(&self, product: &Product) -> Result<String> {
        let path = codec::file_name(self.config.save_name());
        let data = codec::encode(product.value)?;

        tracing::debug!("Writing {} bytes to {}", data.len(), path);
        self.storage.write_file(&path, &data)?;

        Ok(path)
    }
}
