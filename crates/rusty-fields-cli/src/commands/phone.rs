use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use rusty_fields_phone::{CountryCode, PhoneNumber};

use crate::context::Context;
use crate::output;

/// Parse outcome as printed with `--json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneReport<'a> {
    pub input: &'a str,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    /// Every region sharing the matched calling code
    pub countries: Vec<&'a CountryCode>,
}

pub fn report<'a>(ctx: &'a Context, input: &'a str) -> PhoneReport<'a> {
    match ctx.parser().parse(input) {
        Some(number) => {
            let countries = ctx.countries.find_by_code(&number.country_code).collect();
            PhoneReport {
                input,
                valid: true,
                formatted: Some(number.formatted()),
                number: Some(number),
                countries,
            }
        }
        None => PhoneReport {
            input,
            valid: false,
            number: None,
            formatted: None,
            countries: Vec::new(),
        },
    }
}

pub fn execute(ctx: &Context, input: &str) -> Result<bool> {
    let report = report(ctx, input);

    if ctx.json {
        output::print_json(&report)?;
        return Ok(report.valid);
    }

    match (&report.number, &report.formatted) {
        (Some(number), Some(formatted)) => {
            println!("{} {}", "✓".green(), formatted.bold());
            println!("  Country code:    +{}", number.country_code.cyan());
            println!("  National number: {}", number.national_number.cyan());
            for country in &report.countries {
                println!("  Region:          {} ({})", country.name, country.name_code.to_uppercase());
            }
        }
        _ => {
            println!("{} {} is not a recognised phone number", "✗".red(), input);
        }
    }

    Ok(report.valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_lists_shared_code_regions() {
        let ctx = Context::for_tests();
        let report = report(&ctx, "+1 (202) 555-0199");

        assert!(report.valid);
        assert_eq!(report.formatted.as_deref(), Some("+1 202 555 0199"));

        let mut regions: Vec<_> = report.countries.iter().map(|c| c.name_code.as_str()).collect();
        regions.sort_unstable();
        assert_eq!(regions, vec!["ca", "us"]);
    }

    #[test]
    fn test_report_for_overseas_department() {
        let ctx = Context::for_tests();
        let report = report(&ctx, "+590 590 12 34 56");

        let number = report.number.expect("Guadeloupe number should parse");
        assert_eq!(number.country_code, "590");
        assert_eq!(number.national_number, "590123456");

        let regions: Vec<_> = report.countries.iter().map(|c| c.name_code.as_str()).collect();
        assert_eq!(regions, vec!["gp", "bl", "mf"]);
    }

    #[test]
    fn test_report_for_unknown_input() {
        let ctx = Context::for_tests();
        let report = report(&ctx, "12");
        assert!(!report.valid);
        assert!(report.countries.is_empty());
    }
}
