//! Mistral models, from https://docs.mistral.ai/getting-started/models/
//! with pricing from https://mistral.ai/technology/#pricing

use crate::models::ModelInterface::{Chat, FunctionCalling, Vision};
use crate::models::{AliasRecord, CatalogEntry, ModelRecord};

pub const VENDOR: &str = "mistral";
pub const FALLBACK_DESCRIPTION: &str = "New Mistral Model";

pub const OPEN_MISTRAL_NEMO_2407: &str = "open-mistral-nemo-2407";
pub const MISTRAL_LARGE_2407: &str = "mistral-large-2407";
pub const MISTRAL_LARGE_2402: &str = "mistral-large-2402";
pub const MISTRAL_SMALL_2409: &str = "mistral-small-2409";
pub const MISTRAL_SMALL_2402: &str = "mistral-small-2402";
pub const MISTRAL_SMALL_2312: &str = "mistral-small-2312";
pub const CODESTRAL_2405: &str = "codestral-2405";
pub const CODESTRAL_MAMBA_2407: &str = "codestral-mamba-2407";
pub const PIXTRAL_12B_2409: &str = "pixtral-12b-2409";
pub const MISTRAL_EMBED: &str = "mistral-embed";
pub const OPEN_MIXTRAL_8X22B_2404: &str = "open-mixtral-8x22b-2404";
pub const OPEN_MIXTRAL_8X7B: &str = "open-mixtral-8x7b";
pub const MATHSTRAL_V0_1: &str = "mathstral-v0.1";
pub const MISTRAL_MEDIUM_2312: &str = "mistral-medium-2312";
pub const MISTRAL_TINY_2312: &str = "mistral-tiny-2312";
pub const MISTRAL_TINY_2407: &str = "mistral-tiny-2407";
pub const OPEN_MISTRAL_7B: &str = "open-mistral-7b";

/// Product families in display order
pub const FAMILY_ORDER: &[&str] = &[
    "codestral",
    "mistral-large",
    "open-mixtral-8x22b",
    "mistral-medium",
    "open-mixtral-8x7b",
    "mistral-small",
    "open-mistral-7b",
    "mistral-tiny",
    "mistral-embed",
];

const NEMO_DESCRIPTION: &str = "Mistral NeMo is a state-of-the-art 12B model developed with NVIDIA.";
const TINY_DESCRIPTION: &str = "Aka open-mistral-7b. Used for large batch processing tasks where cost is a significant factor but reasoning capabilities are not crucial.";

/// Authored Mistral catalog entries.
pub fn entries() -> Vec<CatalogEntry> {
    vec![
        // General-purpose models
        ModelRecord::new(OPEN_MISTRAL_NEMO_2407, "Mistral NeMo (2407)", NEMO_DESCRIPTION, 131_072)
            .interfaces(&[Chat])
            .price(0.15, 0.15)
            .into(),
        AliasRecord::new("open-mistral-nemo", "Mistral NeMo (latest)", OPEN_MISTRAL_NEMO_2407).into(),
        ModelRecord::new(
            MISTRAL_LARGE_2407,
            "Mistral Large 2 (2407)",
            "Top-tier reasoning for high-complexity tasks, for your most sophisticated needs.",
            131_072,
        )
        .interfaces(&[Chat, FunctionCalling])
        .price(2.0, 6.0)
        .into(),
        AliasRecord::new("mistral-large-latest", "Mistral Large (latest)", MISTRAL_LARGE_2407).into(),
        ModelRecord::new(
            MISTRAL_LARGE_2402,
            "Mistral Large (2402)",
            "Top-tier reasoning for high-complexity tasks.",
            32_768,
        )
        .interfaces(&[Chat, FunctionCalling])
        .price(4.0, 12.0)
        .legacy()
        .hidden()
        .into(),
        ModelRecord::new(
            MISTRAL_SMALL_2409,
            "Mistral Small (24.09)",
            "Cost-efficient, fast, and reliable option for use cases such as translation, summarization, and sentiment analysis.",
            131_072,
        )
        .interfaces(&[Chat])
        .price(0.2, 0.6)
        .into(),
        AliasRecord::new("mistral-small-latest", "Mistral Small (latest)", MISTRAL_SMALL_2409).into(),
        ModelRecord::new(
            MISTRAL_SMALL_2402,
            "Mistral Small (2402) [legacy]",
            "Suitable for simple tasks that one can do in bulk (Classification, Customer Support, or Text Generation).",
            32_768,
        )
        .interfaces(&[Chat, FunctionCalling])
        .price(1.0, 3.0)
        .legacy()
        .hidden()
        .into(),
        ModelRecord::new(
            MISTRAL_SMALL_2312,
            "Mistral Small (2312) [legacy]",
            "Aka open-mixtral-8x7b. Suitable for simple tasks that one can do in bulk (Classification, Customer Support, or Text Generation).",
            32_768,
        )
        .interfaces(&[Chat])
        .price(1.0, 3.0)
        .legacy()
        .hidden()
        .into(),
        AliasRecord::new("mistral-small", "Mistral Small", MISTRAL_SMALL_2409).into(),
        // Specialist models
        ModelRecord::new(
            CODESTRAL_2405,
            "Codestral (2405)",
            "State-of-the-art Mistral model trained specifically for code tasks.",
            32_768,
        )
        .interfaces(&[Chat])
        .price(0.2, 0.6)
        .into(),
        AliasRecord::new("codestral-latest", "Codestral (latest)", CODESTRAL_2405).into(),
        // Placeholder pricing, not listed in the pricing table
        ModelRecord::new(
            CODESTRAL_MAMBA_2407,
            "Codestral Mamba (2407)",
            "Our first Mamba 2 open-source model released July 2024.",
            262_144,
        )
        .interfaces(&[Chat])
        .price(0.5, 0.5)
        .hidden()
        .into(),
        AliasRecord::new(
            "codestral-mamba-latest",
            "Codestral Mamba (latest)",
            CODESTRAL_MAMBA_2407,
        )
        .into(),
        AliasRecord::new("open-codestral-mamba", "Codestral Mamba", CODESTRAL_MAMBA_2407).into(),
        ModelRecord::new(PIXTRAL_12B_2409, "Pixtral 12B (24.09)", "Vision-capable model.", 131_072)
            .interfaces(&[Chat, Vision])
            .price(0.15, 0.15)
            .into(),
        AliasRecord::new("pixtral-latest", "Pixtral (latest)", PIXTRAL_12B_2409).into(),
        AliasRecord::new("pixtral-12b", "Pixtral 12B", PIXTRAL_12B_2409).into(),
        AliasRecord::new("pixtral", "Pixtral", PIXTRAL_12B_2409).into(),
        // Embeddings: no output price, no chat interface
        ModelRecord::new(
            MISTRAL_EMBED,
            "Mistral Embed (23.12)",
            "State-of-the-art semantic model for extracting representations of text extracts.",
            8_192,
        )
        .max_completion_tokens(8_192)
        .price(0.1, 0.0)
        .hidden()
        .into(),
        // Research models
        ModelRecord::new(
            OPEN_MIXTRAL_8X22B_2404,
            "Open Mixtral 8x22B (2404)",
            "Mixtral 8x22B is currently the most performant open model.",
            65_536,
        )
        .interfaces(&[Chat, FunctionCalling])
        .price(2.0, 6.0)
        .legacy()
        .hidden()
        .into(),
        AliasRecord::new("open-mixtral-8x22b", "Open Mixtral 8x22B", OPEN_MIXTRAL_8X22B_2404).into(),
        ModelRecord::new(
            OPEN_MIXTRAL_8X7B,
            "Open Mixtral 8x7B (v0.1)",
            "A 7B sparse Mixture-of-Experts (SMoE) model.",
            32_768,
        )
        .interfaces(&[Chat])
        .price(0.7, 0.7)
        .legacy()
        .hidden()
        .into(),
        // Placeholder pricing, not listed in the pricing table
        ModelRecord::new(
            MATHSTRAL_V0_1,
            "Mathstral (v0.1)",
            "Variant of Mistral-7B, optimized for solving advanced mathematics problems.",
            32_768,
        )
        .interfaces(&[Chat])
        .price(0.25, 0.25)
        .hidden()
        .into(),
        // Legacy models
        ModelRecord::new(
            MISTRAL_MEDIUM_2312,
            "Mistral Medium (2312)",
            "Our first commercial model.",
            32_768,
        )
        .interfaces(&[Chat])
        .price(2.75, 8.1)
        .legacy()
        .hidden()
        .into(),
        AliasRecord::new(
            "mistral-medium-latest",
            "Mistral Medium (latest)",
            MISTRAL_MEDIUM_2312,
        )
        .into(),
        AliasRecord::new("mistral-medium", "Mistral Medium", MISTRAL_MEDIUM_2312).into(),
        ModelRecord::new(MISTRAL_TINY_2312, "Mistral Tiny (2312)", TINY_DESCRIPTION, 32_768)
            .interfaces(&[Chat])
            .legacy()
            .hidden()
            .into(),
        ModelRecord::new(MISTRAL_TINY_2407, "Mistral Tiny (2407)", TINY_DESCRIPTION, 32_768)
            .interfaces(&[Chat])
            .legacy()
            .hidden()
            .into(),
        AliasRecord::new("mistral-tiny-latest", "Mistral Tiny (latest)", MISTRAL_TINY_2407).into(),
        AliasRecord::new("mistral-tiny", "Mistral Tiny", MISTRAL_TINY_2312).into(),
        ModelRecord::new(
            OPEN_MISTRAL_7B,
            "Mistral 7B (v0.3)",
            "A 7B transformer model, fast-deployed and easily customizable.",
            32_768,
        )
        .interfaces(&[Chat])
        .price(0.25, 0.25)
        .legacy()
        .hidden()
        .into(),
    ]
}
