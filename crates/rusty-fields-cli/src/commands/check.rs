use anyhow::Result;
use serde::Deserialize;

use rusty_fields_validation::{
    validate_all, validate_date, validate_domain, validate_domain_list, validate_email,
    validate_email_list, validate_git_ssh, validate_int, validate_ip, validate_ip_list,
    validate_long_string, validate_number, validate_option, validate_option_list, validate_password,
    validate_path, validate_phone_with, validate_string, validate_url, validate_username_with, Length,
    ValidationResult,
};

use crate::context::Context;
use crate::output;

/// Field kinds the CLI knows how to check
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    /// Short text, 2-100 characters by default
    #[value(name = "string")]
    #[serde(rename = "string")]
    Text,
    /// Free text, 2-5000 characters by default
    #[value(name = "long-string")]
    #[serde(rename = "long-string")]
    LongText,
    Email,
    Domain,
    Url,
    Ip,
    Path,
    Username,
    Password,
    /// yyyy-mm-dd
    Date,
    /// SSH remote like git@github.com:user/repo.git
    Git,
    Phone,
    Number,
    Integer,
    /// One of the values given with --allow
    #[value(name = "option")]
    #[serde(rename = "option")]
    Choice,
}

impl CheckKind {
    /// Field name used in messages when no title is given
    pub fn default_title(self) -> &'static str {
        match self {
            CheckKind::Text | CheckKind::LongText => "Value",
            CheckKind::Email => "Email",
            CheckKind::Domain => "Domain",
            CheckKind::Url => "URL",
            CheckKind::Ip => "IP",
            CheckKind::Path => "Path",
            CheckKind::Username => "Username",
            CheckKind::Password => "Password",
            CheckKind::Date => "Date",
            CheckKind::Git => "Git Remote",
            CheckKind::Phone => "Phone Number",
            CheckKind::Number | CheckKind::Integer => "Number",
            CheckKind::Choice => "Option",
        }
    }
}

/// Knobs shared by `check` and batch entries
#[derive(Debug, Clone, Default, clap::Args, Deserialize)]
pub struct CheckOptions {
    /// Field name used in messages
    #[arg(long)]
    pub title: Option<String>,

    /// Accept an empty value
    #[arg(long)]
    #[serde(default)]
    pub optional: bool,

    /// Lower bound (length for text kinds, value for numbers)
    #[arg(long)]
    pub min: Option<f64>,

    /// Upper bound (length for text kinds, value for numbers)
    #[arg(long)]
    pub max: Option<f64>,

    /// Allowed values for `option`, comma separated
    #[arg(long, value_delimiter = ',')]
    #[serde(default)]
    pub allow: Vec<String>,
}

impl CheckOptions {
    fn title(&self, kind: CheckKind) -> &str {
        self.title.as_deref().unwrap_or_else(|| kind.default_title())
    }

    /// Override the bounds of a length preset
    fn length(&self, preset: Length) -> Length {
        let bound = |limit: Option<f64>, fallback: usize| limit.map_or(fallback, |l| l.max(0.0) as usize);
        Length::new(bound(self.min, preset.min), bound(self.max, preset.max))
    }

    fn allowed(&self) -> Option<Vec<&str>> {
        if self.allow.is_empty() {
            None
        } else {
            Some(self.allow.iter().map(String::as_str).collect())
        }
    }
}

/// Run one check; several values go through the list validators
pub fn run_check(kind: CheckKind, values: &[String], options: &CheckOptions, ctx: &Context) -> ValidationResult {
    tracing::debug!(?kind, count = values.len(), "Running check");

    match values {
        [] => run_single(kind, None, options, ctx),
        [value] => run_single(kind, Some(value.as_str()), options, ctx),
        many => run_list(kind, many, options, ctx),
    }
}

fn run_single(kind: CheckKind, value: Option<&str>, options: &CheckOptions, ctx: &Context) -> ValidationResult {
    let title = options.title(kind);

    match kind {
        CheckKind::Text => {
            if options.optional && value.is_none_or(|v| v.trim().is_empty()) {
                return ValidationResult::optional();
            }
            validate_string(value, title, options.length(Length::STRING))
        }
        CheckKind::LongText => {
            validate_long_string(value, title, options.length(Length::LONG_STRING), options.optional)
        }
        CheckKind::Email => validate_email(value, title, ""),
        CheckKind::Domain => validate_domain(value, title, options.optional),
        CheckKind::Url => validate_url(value, title, options.optional),
        CheckKind::Ip => validate_ip(value, title),
        CheckKind::Path => validate_path(value, title),
        CheckKind::Username => validate_username_with(value, title, options.length(Length::USERNAME)),
        CheckKind::Password => validate_password(value, title),
        CheckKind::Date => validate_date(value, title),
        CheckKind::Git => validate_git_ssh(value.unwrap_or_default(), title),
        CheckKind::Phone => validate_phone_with(value, title, options.optional, &ctx.parser()),
        CheckKind::Number => {
            let number = value.and_then(|v| v.trim().parse::<f64>().ok()).unwrap_or(f64::NAN);
            validate_number(number, title, options.min, options.max)
        }
        CheckKind::Integer => match value.and_then(|v| v.trim().parse::<i64>().ok()) {
            Some(number) => validate_int(
                number,
                title,
                options.min.map(|m| m.ceil() as i64),
                options.max.map(|m| m.floor() as i64),
            ),
            None => ValidationResult::failure(format!("Please enter {}", title)),
        },
        CheckKind::Choice => {
            let allowed = options.allowed();
            validate_option(value, title, allowed.as_deref(), "", options.optional)
        }
    }
}

fn run_list(kind: CheckKind, values: &[String], options: &CheckOptions, ctx: &Context) -> ValidationResult {
    let title = options.title(kind);

    match kind {
        CheckKind::Email => validate_email_list(values, title),
        CheckKind::Domain => validate_domain_list(values, title, options.optional),
        CheckKind::Ip => validate_ip_list(values, title),
        CheckKind::Choice if !options.allow.is_empty() => {
            let allowed = options.allowed().unwrap_or_default();
            validate_option_list(values, &allowed, title)
        }
        _ => validate_all(values.iter().map(|value| run_single(kind, Some(value.as_str()), options, ctx))),
    }
}

pub fn execute(ctx: &Context, kind: CheckKind, values: &[String], options: &CheckOptions) -> Result<bool> {
    let result = run_check(kind, values, options, ctx);
    output::print_result(&result, ctx.json)
}
