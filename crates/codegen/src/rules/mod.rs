//! Rule rendering: maps each [`FieldDescriptor`] to a [`RuleKind`] and each
//! kind to a fixed FluentValidation statement template.

use std::sync::OnceLock;

use regex::Regex;
use validgen_core::model::FieldDescriptor;

use crate::config::LineEnding;

pub const REQUIRED_MESSAGE: &str = "{PropertyName} is required";

/// The rules a single field contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Not nullable with a character limit: not-empty plus `Length(1, n)`.
    RequiredAndLength(u32),
    /// Not nullable without a character limit.
    RequiredOnly,
    /// Nullable with a character limit.
    MaxLengthOnly(u32),
    /// Nullable without a limit; nothing to validate.
    None,
}

impl RuleKind {
    pub fn classify(field: &FieldDescriptor) -> Self {
        match (field.is_nullable, field.max_length) {
            (false, 0) => RuleKind::RequiredOnly,
            (false, max) => RuleKind::RequiredAndLength(max),
            (true, 0) => RuleKind::None,
            (true, max) => RuleKind::MaxLengthOnly(max),
        }
    }
}

pub fn length_message(max: u32) -> String {
    format!("{{PropertyName}} Length of {{TotalLength}} is invalid. A maximum of {max} characters is allowed")
}

// No space after the period; downstream validators compare this text as-is.
pub fn max_length_message(max: u32) -> String {
    format!("{{PropertyName}} Length of {{TotalLength}} is invalid.Maximum length is {max} characters")
}

/// Renders one statement, or `None` when the kind emits no rule.
pub fn render_rule(name: &str, kind: RuleKind) -> Option<String> {
    let head = format!("RuleFor(u => u.{name}).Cascade(CascadeMode.StopOnFirstFailure)");

    match kind {
        RuleKind::RequiredAndLength(max) => Some(format!(
            "{head}.NotEmpty().WithMessage(\"{REQUIRED_MESSAGE}\").Length(1, {max}).WithMessage(\"{}\");",
            length_message(max)
        )),
        RuleKind::RequiredOnly => Some(format!(
            "{head}.NotEmpty().WithMessage(\"{REQUIRED_MESSAGE}\");"
        )),
        RuleKind::MaxLengthOnly(max) => Some(format!(
            "{head}.MaximumLength({max}).WithMessage(\"{}\");",
            max_length_message(max)
        )),
        RuleKind::None => None,
    }
}

/// All statements for a table, in field order.
pub fn render_rules(fields: &[FieldDescriptor]) -> Vec<String> {
    fields
        .iter()
        .filter_map(|field| render_rule(&field.name, RuleKind::classify(field)))
        .collect()
}

/// The block text for a table, statements separated by `line_ending`.
pub fn render_block(statements: &[String], line_ending: LineEnding) -> String {
    statements.join(line_ending.as_str())
}

fn member_identifier() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid"))
}

/// Field names that cannot be used as `u => u.<Name>` member access.
pub fn invalid_member_names(fields: &[FieldDescriptor]) -> Vec<String> {
    fields
        .iter()
        .filter(|field| !member_identifier().is_match(&field.name))
        .map(|field| field.name.clone())
        .collect()
}
