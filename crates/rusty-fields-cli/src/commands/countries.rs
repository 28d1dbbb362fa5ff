use anyhow::Result;
use colored::Colorize;

use rusty_fields_phone::{CountryCode, CountryTable};

use crate::context::Context;
use crate::output;

/// Entries matching `search` by name, name code, or calling code prefix
pub fn filter<'a>(table: &'a CountryTable, search: Option<&str>) -> Vec<&'a CountryCode> {
    let needle = search.map(|s| s.trim().trim_start_matches('+').to_lowercase());

    let mut matches: Vec<&CountryCode> = table
        .iter()
        .filter(|country| match needle.as_deref() {
            None | Some("") => true,
            Some(needle) => {
                country.name.to_lowercase().contains(needle)
                    || country.name_code.eq_ignore_ascii_case(needle)
                    || country.code.starts_with(needle)
            }
        })
        .collect();

    matches.sort_by(|a, b| a.name.cmp(&b.name));
    matches
}

pub fn execute(ctx: &Context, search: Option<&str>) -> Result<bool> {
    let matches = filter(&ctx.countries, search);

    if ctx.json {
        output::print_json(&matches)?;
        return Ok(!matches.is_empty());
    }

    if matches.is_empty() {
        println!("{}", "No matching countries".yellow());
        return Ok(false);
    }

    for country in &matches {
        println!(
            "{:>6}  {}  {} {}",
            format!("+{}", country.code).cyan(),
            country.name_code.to_uppercase().bold(),
            country.name,
            format!("({}-{} digits)", country.min_length, country.max_length).dimmed()
        );
    }
    println!();
    println!("{} of {} countries", matches.len(), ctx.countries.len());

    Ok(true)
}
