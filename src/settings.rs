use serde::{Deserialize, Serialize};

/// How the cards are run, filled from the command line
#[derive(Debug, Clone, Copy, Hash, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Dump the inputs of every card to stderr
    pub verbose: bool,
    /// Worker threads for the cards, defaults to the number of CPUs
    pub threads: Option<usize>,
}

pub const DEFAULT_SETTINGS: Settings = Settings {
    verbose: false,
    threads: None,
};

impl Default for Settings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

impl Settings {
    /// Size of the worker pool, never 0
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }
}
