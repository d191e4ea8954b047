use serde::{Deserialize, Serialize};

/// Language codes looked up by the demonstration, in output order.
pub const DEMO_CODES: [&str; 4] = ["es", "fr", "de", "it"];

/// One emitted greeting.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct GreetingLine {
    pub code: String,
    pub greeting: String,
    pub fallback: bool,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Plain,
    JsonLines,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct DemoConfig {
    /// Codes looked up after the default greeting.
    pub codes: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            codes: DEMO_CODES.iter().map(ToString::to_string).collect(),
        }
    }
}
