use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HostError;

// ce kernel ruleaza nucleul (bitul mode_select)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelMode {
    // mode = 0, margini orizontale
    RowGradient,
    // mode = 1, margini verticale; cadrul demo are o margine verticala
    #[default]
    ColumnGradient,
}

impl KernelMode {
    pub fn select_bit(self) -> bool {
        matches!(self, KernelMode::ColumnGradient)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    // latimea line buffer-ului; daca lipseste se ia latimea cadrului
    pub row_width: Option<usize>,
    pub mode: KernelMode,
    // true = magnitudinea convolutiei, false = pixelul din centru
    pub convolution: bool,
    // o bula dupa fiecare `bubble_period` esantioane acceptate
    pub bubble_period: Option<usize>,
    pub reset_cycles: usize,
    // fara input se genereaza cadrul demo
    pub input: Option<PathBuf>,
    pub output: PathBuf,
    pub log_level: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            row_width: None,
            mode: KernelMode::default(),
            convolution: true,
            bubble_period: None,
            reset_cycles: 1,
            input: None,
            output: PathBuf::from("data/edges.csv"),
            log_level: "info".to_string(),
        }
    }
}

impl HostConfig {
    pub fn load(path: &Path) -> Result<Self, HostError> {
        if !path.exists() {
            return Err(HostError::MissingFile(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        let config: HostConfig = serde_yml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HostError> {
        if self.row_width == Some(0) {
            return Err(HostError::ZeroRowWidth);
        }
        if self.bubble_period == Some(0) {
            return Err(HostError::ZeroBubblePeriod);
        }
        if self.reset_cycles == 0 {
            return Err(HostError::NoResetCycles);
        }
        Ok(())
    }
}
