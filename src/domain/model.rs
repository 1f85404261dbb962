use serde::{Deserialize, Serialize};

/// Resolved invocation parameters, defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    pub var_a: i64,
    pub var_b: i64,
    pub save_name: String,
}

impl Params {
    pub const DEFAULT_VAR_A: i64 = 1;
    pub const DEFAULT_VAR_B: i64 = 2;

    pub fn new(save_name: impl Into<String>) -> Self {
        Self {
            var_a: Self::DEFAULT_VAR_A,
            var_b: Self::DEFAULT_VAR_B,
            save_name: save_name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub var_a: i64,
    pub var_b: i64,
    pub value: i64,
}

/// On-disk envelope of a serialized value file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedValue {
    pub magic: [u8; 4],
    pub version: u16,
    pub value: i64,
}
