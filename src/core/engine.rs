use crate::core::Pipeline;
use crate::utils::error::Result;
use std::io::Write;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub value: i64,
    pub output_path: String,
}

pub struct Engine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Engine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// compute → print → persist. Nothing is printed or written when
    /// the computation fails.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunOutcome> {
        let product = self.pipeline.compute()?;

        writeln!(out, "{}", product.value)?;
        out.flush()?;

        let output_path = self.pipeline.persist(&product)?;
        tracing::info!("💾 Result {} saved to {}", product.value, output_path);

        Ok(RunOutcome {
            value: product.value,
            output_path,
        })
    }
}
