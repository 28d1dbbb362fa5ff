// File: src/commands/batch.rs
// Purpose: Validate a TOML list of fields and report the first failure
//
// [[field]]
// name = "email"
// kind = "email"
// value = "jane@example.com"      # or a list: ["a@x.com", "b@x.com"]
// title = "Work Email"            # optional, plus optional/min/max/allow

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use rusty_fields_validation::{reference_name, validate_all, ValidationResult};

use super::check::{run_check, CheckKind, CheckOptions};
use crate::context::Context;
use crate::output;

/// Parsed batch file
#[derive(Debug, Deserialize)]
pub struct BatchFile {
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldEntry>,
}

/// One `[[field]]` entry
#[derive(Debug, Deserialize)]
pub struct FieldEntry {
    pub name: String,
    pub kind: CheckKind,
    #[serde(default)]
    pub value: Option<FieldValue>,
    #[serde(flatten)]
    pub options: CheckOptions,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    One(String),
    Many(Vec<String>),
}

impl FieldEntry {
    fn values(&self) -> Vec<String> {
        match &self.value {
            None => Vec::new(),
            Some(FieldValue::One(value)) => vec![value.clone()],
            Some(FieldValue::Many(values)) => values.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FieldOutcome {
    pub name: String,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Per-field results plus the aggregate
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub fields: Vec<FieldOutcome>,
    pub result: ValidationResult,
    /// Name of the first failing field, empty when all passed
    pub failed_field: String,
}

impl BatchFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read batch file: {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse batch file: {:?}", path))
    }

    pub fn run(&self, ctx: &Context) -> BatchReport {
        let fields: Vec<FieldOutcome> = self
            .fields
            .iter()
            .map(|field| FieldOutcome {
                name: field.name.clone(),
                result: run_check(field.kind, &field.values(), &field.options, ctx),
            })
            .collect();

        let result = validate_all(fields.iter().map(|field| field.result.clone()));
        let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
        let failed_field = reference_name(&names, result.error_index).to_string();

        if result.is_err() {
            tracing::info!(field = %failed_field, index = result.error_index, "Batch failed");
        }

        BatchReport {
            fields,
            result,
            failed_field,
        }
    }
}

pub fn execute(ctx: &Context, path: &Path) -> Result<bool> {
    let batch = BatchFile::load(path)?;
    tracing::info!(path = ?path, fields = batch.fields.len(), "Running batch");

    let report = batch.run(ctx);

    if ctx.json {
        output::print_json(&report)?;
        return Ok(report.result.is_ok());
    }

    for field in &report.fields {
        println!("{:<20} {}", field.name.bold(), output::render_result(&field.result));
    }
    println!();

    if report.result.is_ok() {
        println!("{}", format!("All {} fields passed", report.fields.len()).green().bold());
    } else {
        println!(
            "{} {}: {}",
            "First failure:".red().bold(),
            report.failed_field,
            report.result.message
        );
    }

    Ok(report.result.is_ok())
}
