use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Newline-delimited interaction records
    pub input: PathBuf,
    /// None writes to stdout
    pub output: Option<PathBuf>,
    pub unichem: UniChemConfig,
    /// Lookups kept in flight at once; output order is unaffected
    pub concurrency: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniChemConfig {
    pub base_url: String,
}

impl Default for UniChemConfig {
    fn default() -> Self {
        Self {
            base_url: resolve::unichem::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            output: None,
            unichem: UniChemConfig::default(),
            concurrency: 1,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            anyhow::bail!("concurrency must be at least 1");
        }
        if self.unichem.base_url.is_empty() {
            anyhow::bail!("UniChem base URL must not be empty");
        }
        Ok(())
    }
}
