use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_OUTPUT_FILE, DEFAULT_SPACING};
use crate::error::{MosaicError, Result};
use crate::layout::auto_columns;

/// A complete compose job: which files, how to lay them out, where to write.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    /// Column count. `None` picks `round(sqrt(N))`.
    pub columns: Option<u32>,
    pub spacing: u32,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            columns: None,
            spacing: DEFAULT_SPACING,
        }
    }
}

impl ComposeConfig {
    pub fn resolve_columns(&self) -> u32 {
        self.columns.unwrap_or_else(|| auto_columns(self.inputs.len()))
    }

    /// Resolve relative input and output paths against `base`.
    pub fn rebase(&mut self, base: &Path) {
        for input in &mut self.inputs {
            if input.is_relative() {
                *input = base.join(&*input);
            }
        }
        if self.output.is_relative() {
            self.output = base.join(&self.output);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == Some(0) {
            return Err(MosaicError::InvalidLayout(
                "column count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
