use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::DateTime;
use llmcat_config::models::wire::parse_model_list;
use llmcat_config::{ChatPrice, ModelDescription, Visibility};

use crate::StartupContext;
use crate::cli::args::ModelCommands;
use crate::utils::colors::{bold, cyan, dimmed, green, magenta, underline, yellow};

pub fn handle_models_command(startup: &StartupContext, command: &ModelCommands) -> Result<()> {
    match command {
        ModelCommands::List { input, all, json } => {
            handle_list_models(startup, input.as_deref(), *all, *json)
        }
        ModelCommands::Info { id, created, json } => {
            handle_model_info(startup, id, *created, *json)
        }
        ModelCommands::Catalog { json } => handle_catalog(startup, *json),
    }
}

fn handle_list_models(
    startup: &StartupContext,
    input: Option<&Path>,
    all: bool,
    json: bool,
) -> Result<()> {
    let body = read_input(input)?;
    let list = parse_model_list(&body).context("Invalid model listing")?;
    let overrides = startup.config.catalog.price_overrides();
    let visibility = if all {
        Visibility::all()
    } else {
        startup.config.catalog.visibility()
    };

    let models: Vec<ModelDescription> = startup
        .catalog
        .refresh(&list, &overrides)
        .into_iter()
        .filter(|model| visibility.allows(model))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    println!(
        "{}",
        underline(&bold(&format!("{} models", startup.catalog.vendor())))
    );
    println!();
    for model in &models {
        println!("{}", format_model_row(model));
    }
    let skipped = list.data.len() - models.len();
    if skipped > 0 {
        println!();
        println!(
            "{}",
            dimmed(&format!("{skipped} hidden or legacy models (use --all to show)"))
        );
    }
    Ok(())
}

fn handle_model_info(startup: &StartupContext, id: &str, created: i64, json: bool) -> Result<()> {
    let overrides = startup.config.catalog.price_overrides();
    let price = startup.catalog.price_override_for(id, &overrides);
    let model = startup.catalog.resolve(id, created, price);

    if json {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    let matched = startup.catalog.lookup(id).is_some();
    for line in format_model_details(&model, matched) {
        println!("{line}");
    }
    Ok(())
}

fn handle_catalog(startup: &StartupContext, json: bool) -> Result<()> {
    let models = startup.catalog.known_models();
    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    println!(
        "{}",
        underline(&bold(&format!(
            "{} catalog ({} entries)",
            startup.catalog.vendor(),
            models.len()
        )))
    );
    println!();
    for model in &models {
        println!("{}", format_model_row(model));
    }
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read model listing: {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read model listing from stdin")?;
            Ok(buffer)
        }
    }
}

/// One listing line: label, id, context window, interfaces, price, flags.
pub fn format_model_row(model: &ModelDescription) -> String {
    let label = if model.is_alias() {
        magenta(&model.label)
    } else {
        bold(&model.label)
    };
    let mut row = format!(
        "{label}  {}  {}  {}  {}",
        dimmed(&model.id),
        cyan(&format_tokens(model.context_window)),
        format_interfaces(model),
        format_price(model.chat_price.as_ref()),
    );
    if model.is_legacy {
        row.push_str(&format!("  {}", yellow("legacy")));
    }
    if model.hidden && !model.is_alias() {
        row.push_str(&format!("  {}", dimmed("hidden")));
    }
    row
}

pub fn format_model_details(model: &ModelDescription, matched: bool) -> Vec<String> {
    let mut lines = vec![
        format!("{} {}", cyan("・"), underline(&bold(&model.label))),
        String::new(),
        format!("Id: {}", cyan(&model.id)),
    ];
    if matched {
        lines.push(format!("Catalog prefix: {}", model.id_prefix));
    } else {
        lines.push(format!("Catalog prefix: {}", yellow("none (fallback)")));
    }
    if let Some(target) = &model.sym_link {
        lines.push(format!("Alias of: {}", green(target)));
    }
    lines.push(format!("Description: {}", model.description));
    lines.push(format!(
        "Context window: {} tokens",
        format_tokens(model.context_window)
    ));
    if let Some(max) = model.max_completion_tokens {
        lines.push(format!("Max completion tokens: {}", format_tokens(max)));
    }
    lines.push(format!("Interfaces: {}", format_interfaces(model)));
    lines.push(format!("Price: {}", format_price(model.chat_price.as_ref())));
    lines.push(format!("Legacy: {}", yes_no(model.is_legacy)));
    lines.push(format!("Hidden: {}", yes_no(model.hidden)));
    lines.push(format!("Created: {}", format_created(model.created)));
    lines
}

/// `131072` → `128K`; values that are not whole KiB are printed as-is.
pub fn format_tokens(tokens: u32) -> String {
    if tokens >= 1024 && tokens % 1024 == 0 {
        format!("{}K", tokens / 1024)
    } else {
        tokens.to_string()
    }
}

pub fn format_price(price: Option<&ChatPrice>) -> String {
    match price {
        Some(price) => format!("${:.2}/${:.2} per 1M", price.input, price.output),
        None => "-".to_string(),
    }
}

pub fn format_created(created: i64) -> String {
    if created <= 0 {
        return "-".to_string();
    }
    DateTime::from_timestamp(created, 0)
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| created.to_string())
}

fn format_interfaces(model: &ModelDescription) -> String {
    if model.interfaces.is_empty() {
        return "-".to_string();
    }
    model
        .interfaces
        .iter()
        .map(|interface| interface.short_label())
        .collect::<Vec<_>>()
        .join(",")
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llmcat_config::ModelCatalog;

    #[test]
    fn tokens_are_shown_in_kib_when_exact() {
        assert_eq!(format_tokens(131_072), "128K");
        assert_eq!(format_tokens(32_768), "32K");
        assert_eq!(format_tokens(1000), "1000");
        assert_eq!(format_tokens(0), "0");
    }

    #[test]
    fn price_uses_two_decimals() {
        assert_eq!(
            format_price(Some(&ChatPrice::new(2.0, 6.0))),
            "$2.00/$6.00 per 1M"
        );
        assert_eq!(format_price(None), "-");
    }

    #[test]
    fn created_formats_as_date() {
        assert_eq!(format_created(1_721_260_800), "2024-07-18");
        assert_eq!(format_created(0), "-");
    }

    #[test]
    fn details_mark_fallback_and_alias() {
        let catalog = ModelCatalog::mistral();

        let unknown = catalog.resolve("mistral-ultra-2501", 0, None);
        let lines = format_model_details(&unknown, false);
        assert!(lines.iter().any(|line| line.contains("none (fallback)")));

        let alias = catalog.resolve("mistral-large-latest", 0, None);
        let lines = format_model_details(&alias, true);
        assert!(lines.iter().any(|line| line.contains("Alias of:") && line.contains("mistral-large-2407")));
    }
}
