use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory where corrected article text is written
    pub dir: PathBuf,
}

impl OutputConfig {
    pub fn new() -> Self {
        let dir = env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("article_output"));

        OutputConfig { dir }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new()
    }
}
