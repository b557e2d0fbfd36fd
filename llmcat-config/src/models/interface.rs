use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability tags advertised by a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModelInterface {
    /// OpenAI-compatible chat completions
    #[serde(rename = "oai-chat")]
    Chat,
    /// Function / tool calling
    #[serde(rename = "oai-chat-fn")]
    FunctionCalling,
    /// Image inputs
    #[serde(rename = "oai-chat-vision")]
    Vision,
}

impl ModelInterface {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelInterface::Chat => "oai-chat",
            ModelInterface::FunctionCalling => "oai-chat-fn",
            ModelInterface::Vision => "oai-chat-vision",
        }
    }

    /// Short label used in listings
    pub fn short_label(&self) -> &'static str {
        match self {
            ModelInterface::Chat => "chat",
            ModelInterface::FunctionCalling => "fn",
            ModelInterface::Vision => "vision",
        }
    }
}

impl fmt::Display for ModelInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
