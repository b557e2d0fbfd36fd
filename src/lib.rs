//! # llmcat
//!
//! Command-line front end for the `llmcat-config` model catalog and the
//! `llmcat-ui` code renderer.
//!
//! ```bash
//! # Describe a vendor `/v1/models` listing, in display order
//! curl -s https://api.mistral.ai/v1/models -H "Authorization: Bearer $MISTRAL_API_KEY" \
//!     | llmcat models list
//!
//! # Resolve one identifier against the built-in catalog
//! llmcat models info mistral-large-latest
//!
//! # Render a source file as a highlighted code container
//! llmcat highlight src/main.rs --theme InspiredGitHub
//! ```
//!
//! Persistent defaults live in `llmcat.toml`:
//!
//! ```toml
//! [catalog]
//! show_hidden = false
//!
//! [catalog.price_overrides."mistral-large-2407"]
//! input = 2.0
//! output = 6.0
//!
//! [syntax_highlighting]
//! theme = "base16-ocean.dark"
//! ```

pub mod cli;
pub mod startup;
pub mod utils;

pub use startup::StartupContext;
