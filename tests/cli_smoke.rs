use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn listing_fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("mistral_models.json")
}

/// `llmcat` isolated from the caller's home and workspace configuration.
fn llmcat(temp_dir: &TempDir) -> Result<Command> {
    let mut cmd = Command::cargo_bin("llmcat")?;
    cmd.current_dir(temp_dir.path())
        .env("NO_COLOR", "1")
        .env("HOME", temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path().join(".config"))
        .env_remove("LLMCAT_CONFIG_PATH")
        .env_remove("LLMCAT_WORKSPACE")
        .env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn llmcat_help_command_succeeds() -> Result<()> {
    let temp_dir = TempDir::new()?;
    llmcat(&temp_dir)?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("models"));
    Ok(())
}

#[test]
fn models_list_hides_hidden_models_by_default() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = llmcat(&temp_dir)?
        .args(["models", "list", "--input"])
        .arg(listing_fixture())
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let codestral = stdout.find("Codestral (2405)").expect("codestral listed");
    let large = stdout.find("Mistral Large 2 (2407)").expect("large listed");
    assert!(codestral < large, "families should follow the declared order");
    assert!(!stdout.contains("Mistral Large (2402)"));
    assert!(!stdout.contains("ministral 8b 2410"));
    assert!(stdout.contains("3 hidden or legacy models"));
    Ok(())
}

#[test]
fn models_list_all_reads_stdin_and_puts_aliases_last() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let body = fs::read_to_string(listing_fixture())?;
    let output = llmcat(&temp_dir)?
        .args(["models", "list", "--all"])
        .write_stdin(body)
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().filter(|line| !line.trim().is_empty()).collect();
    let last = lines.last().expect("at least one row");
    assert!(last.contains("🔗 Mistral Large (latest) → mistral-large-2407"));
    assert!(stdout.contains("Mistral Large (2402)"));
    assert!(stdout.contains("ministral 8b 2410"));
    Ok(())
}

#[test]
fn models_list_json_is_ordered() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = llmcat(&temp_dir)?
        .args(["models", "list", "--all", "--json", "--input"])
        .arg(listing_fixture())
        .output()?;
    assert!(output.status.success());

    let models: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let ids: Vec<&str> = models
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|model| model["id"].as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "codestral-2405",
            "mistral-large-2407",
            "mistral-large-2402",
            "ministral-8b-2410",
            "mistral-large-latest",
        ]
    );
    Ok(())
}

#[test]
fn workspace_config_applies_price_overrides() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("llmcat.toml"),
        "[catalog.price_overrides.\"codestral-2405\"]\ninput = 9.0\noutput = 9.0\n",
    )?;

    llmcat(&temp_dir)?
        .args(["models", "info", "codestral-2405"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Price: $9.00/$9.00 per 1M"));
    Ok(())
}

#[test]
fn runtime_override_shows_hidden_models() -> Result<()> {
    let temp_dir = TempDir::new()?;
    llmcat(&temp_dir)?
        .args(["--config", "catalog.show_hidden=true", "models", "list", "--input"])
        .arg(listing_fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("Mistral Large (2402)"));
    Ok(())
}

#[test]
fn models_info_describes_alias_and_fallback() -> Result<()> {
    let temp_dir = TempDir::new()?;
    llmcat(&temp_dir)?
        .args(["models", "info", "mistral-large-latest", "--created", "1721260800"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alias of: mistral-large-2407"))
        .stdout(predicate::str::contains("Created: 2024-07-18"));

    llmcat(&temp_dir)?
        .args(["models", "info", "brand-new_model"])
        .assert()
        .success()
        .stdout(predicate::str::contains("brand new model"))
        .stdout(predicate::str::contains("none (fallback)"))
        .stdout(predicate::str::contains("New Mistral Model"));
    Ok(())
}

#[test]
fn models_catalog_json_lists_every_entry() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = llmcat(&temp_dir)?
        .args(["models", "catalog", "--json"])
        .output()?;
    assert!(output.status.success());

    let models: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout)?;
    assert!(models.len() > 20);
    assert_eq!(models[0]["id"], "codestral-mamba-2407");
    let last = models.last().expect("entries");
    assert!(last["sym_link"].is_string());
    Ok(())
}

#[test]
fn invalid_listing_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    llmcat(&temp_dir)?
        .args(["models", "list"])
        .write_stdin(r#"{"data":[{"id":"","created":1}]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid model listing"));
    Ok(())
}

#[test]
fn highlight_wraps_output_in_code_container() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let source = temp_dir.path().join("main.rs");
    fs::write(&source, "fn main() {\n    println!(\"<hi>\");\n}\n")?;

    llmcat(&temp_dir)?
        .arg("highlight")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<div class=\"code-container\"><pre style=",
        ))
        .stdout(predicate::str::contains("&lt;hi&gt;"))
        .stdout(predicate::str::contains("</pre>"));
    Ok(())
}

#[test]
fn highlight_rejects_unknown_theme() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let source = temp_dir.path().join("notes.txt");
    fs::write(&source, "plain")?;

    llmcat(&temp_dir)?
        .arg("highlight")
        .arg(&source)
        .args(["--theme", "no-such-theme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown syntax theme"));
    Ok(())
}
