//! Bodies of the one-shot subcommands, written against `Write` so they can
//! be driven from tests

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use bo_core::api::{generate_order_for, generate_order_json, OrderRequest};
use bo_core::view::render_order;
use bo_core::{CAP_ADVISORY, MAX_ROSTER_SIZE, SCHEMA_VERSION};
use tracing::info;

use crate::config::{OutputFormat, RunConfig};

/// Check `--names` before any work. The message is reported as a usage
/// error, the same way clap reports a bad flag.
pub fn validate_names(names: &[String]) -> std::result::Result<(), String> {
    if names.len() > MAX_ROSTER_SIZE {
        return Err(CAP_ADVISORY.to_string());
    }
    match names.iter().position(|name| name.trim().is_empty()) {
        Some(i) => Err(format!("name {} is blank", i + 1)),
        None => Ok(()),
    }
}

/// `generate`: one order for `names`, as text rows or pretty JSON
pub fn run_generate(names: &[String], config: &RunConfig, out: &mut impl Write) -> Result<()> {
    let request = OrderRequest {
        schema_version: SCHEMA_VERSION,
        names: names.to_vec(),
        seed: config.seed,
    };
    let response = generate_order_for(&request)
        .context("Failed to generate batting order")?;
    info!("Generated order with seed {}", response.seed_used);

    match config.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&response)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Text => {
            writeln!(out, "Batting Order:")?;
            write!(out, "{}", render_order(&response.positions))?;
            writeln!(out, "(seed {})", response.seed_used)?;
        }
    }
    Ok(())
}

/// Request text for `api`: the file when given, stdin otherwise
pub fn read_request(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read request: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// `api`: answer one request. Request errors travel inside the JSON
/// envelope; only a failed write is an error here.
pub fn run_api(request: &str, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", generate_order_json(request))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn generate(list: &[&str], config: &RunConfig) -> String {
        let mut out = Vec::new();
        run_generate(&names(list), config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_validate_names() {
        assert!(validate_names(&names(&["Alice", "Bob"])).is_ok());

        let twelve = vec!["X".to_string(); 12];
        let err = validate_names(&twelve).unwrap_err();
        assert_eq!(err, CAP_ADVISORY);

        let err = validate_names(&names(&["Alice", " "])).unwrap_err();
        assert_eq!(err, "name 2 is blank");
    }

    #[test]
    fn test_generate_text_output() {
        let config = RunConfig::new(Some(42), false);
        let out = generate(&["Alice", "Bob", "Carol"], &config);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Batting Order:");
        assert!(lines[1].starts_with(" 1. "));
        assert!(lines[2].starts_with(" 2. "));
        assert!(lines[3].starts_with(" 3. "));
        assert_eq!(lines[4], "(seed 42)");

        let mut listed: Vec<&str> = lines[1..4].iter().map(|l| &l[4..]).collect();
        listed.sort_unstable();
        assert_eq!(listed, ["Alice", "Bob", "Carol"]);

        assert_eq!(out, generate(&["Alice", "Bob", "Carol"], &config));
    }

    #[test]
    fn test_generate_json_output() {
        let config = RunConfig::new(Some(7), true);
        let out = generate(&["A", "B"], &config);

        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["seed_used"], 7);
        assert_eq!(parsed["positions"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_generate_rejects_blank_name() {
        let config = RunConfig::new(Some(1), false);
        let mut out = Vec::new();
        let list = names(&["A", ""]);
        let err = run_generate(&list, &config, &mut out).unwrap_err();

        assert!(format!("{:#}", err).contains("Batsman 2 has no name"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_api_answers_in_envelope() {
        let mut out = Vec::new();
        let request = r#"{"names": ["A", "B", "C"], "seed": 3}"#;
        run_api(request, &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["data"]["seed_used"], 3);

        let mut out = Vec::new();
        run_api("{", &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["success"], false);
        assert_eq!(parsed["error"]["code"], "PARSE_ERROR");
    }

    #[test]
    fn test_read_request_from_file() {
        let path = std::env::temp_dir().join("batting_order_request.json");
        let body = r#"{"names": ["A"]}"#;
        fs::write(&path, body).unwrap();
        assert_eq!(read_request(Some(path.as_path())).unwrap(), body);
        fs::remove_file(&path).unwrap();

        let missing = Path::new("/nonexistent/batting_order_request.json");
        assert!(read_request(Some(missing)).is_err());
    }
}
