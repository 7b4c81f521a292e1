use serde::{Deserialize, Serialize};

use self::glossary::GlossaryConfig;
use self::output::OutputConfig;

pub mod glossary;
pub mod output;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub glossary: GlossaryConfig,
    pub output: OutputConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            glossary: GlossaryConfig::new(),
            output: OutputConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
