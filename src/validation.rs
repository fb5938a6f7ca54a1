//! Field validation for the enquiry and contact forms.
//!
//! The webview reads each input into a [`FieldDescriptor`] and renders the
//! returned [`ValidationVerdict`]. Nothing here touches the DOM.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::util::parse_leading_int;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\s\-()]{10,15}$").expect("phone pattern"));

/// Enquiry types that reveal the service-details section of the enquiry form.
const SERVICE_ENQUIRY_TYPES: &[&str] = &[
    "funeral-service",
    "cremation",
    "burial",
    "memorial-service",
    "pre-planning",
];

/// HTML input type of a form control.
///
/// Types without a rule of their own (`date`, `radio`, `url`, ...) read as
/// `Other`: they still honour `required` but skip every kind-specific check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Number,
    Checkbox,
    Select,
    Textarea,
    #[serde(other)]
    Other,
}

impl FieldKind {
    /// Whether `minLength` / `maxLength` apply to this kind.
    pub fn carries_text(self) -> bool {
        matches!(
            self,
            FieldKind::Text | FieldKind::Email | FieldKind::Tel | FieldKind::Textarea
        )
    }
}

/// Reads a `minlength`/`maxlength` value. Negative lengths are ignored, as browsers do.
fn length_attr<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.and_then(|n| usize::try_from(n).ok()))
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConstraints {
    #[serde(default, deserialize_with = "length_attr", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, deserialize_with = "length_attr", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

/// Snapshot of one form control, taken by the webview at blur or submit time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    #[serde(default)]
    pub id: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub constraints: FieldConstraints,
}

impl FieldDescriptor {
    pub fn new(kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            kind,
            required: false,
            value: value.into(),
            checked: false,
            constraints: FieldConstraints::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_constraints(mut self, constraints: FieldConstraints) -> Self {
        self.constraints = constraints;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    pub valid: bool,
    pub message: String,
}

impl ValidationVerdict {
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Validate a single field. Checks run in a fixed order and the first failure wins.
pub fn validate(field: &FieldDescriptor) -> ValidationVerdict {
    match first_failure(field) {
        Some(message) => ValidationVerdict::fail(message),
        None => ValidationVerdict::pass(),
    }
}

fn first_failure(field: &FieldDescriptor) -> Option<String> {
    let value = field.value.as_str();
    let c = &field.constraints;

    if field.required && value.trim().is_empty() {
        return Some("This field is required.".into());
    }

    if field.kind == FieldKind::Email && !value.is_empty() && !EMAIL_RE.is_match(value) {
        return Some("Please enter a valid email address.".into());
    }

    if field.kind == FieldKind::Tel && !value.is_empty() && !PHONE_RE.is_match(value) {
        return Some("Please enter a valid phone number (10-15 digits).".into());
    }

    if field.kind.carries_text() {
        let len = value.chars().count();
        if let Some(min_len) = c.min_length {
            if len < min_len {
                return Some(format!("Minimum {min_len} characters required."));
            }
        }
        if let Some(max_len) = c.max_length {
            if len > max_len {
                return Some(format!("Maximum {max_len} characters allowed."));
            }
        }
    }

    if field.kind == FieldKind::Number && !value.is_empty() {
        // Non-numeric input skips the range check instead of failing it.
        if let Some(n) = parse_leading_int(value) {
            if let Some(min) = c.min {
                if n < min {
                    return Some(format!("Value must be at least {min}."));
                }
            }
            if let Some(max) = c.max {
                if n > max {
                    return Some(format!("Value must not exceed {max}."));
                }
            }
        }
    }

    if field.kind == FieldKind::Checkbox && field.required && !field.checked {
        return Some("You must agree to continue.".into());
    }

    None
}

/// Verdict for one required field, keyed by the field's id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    pub id: String,
    pub verdict: ValidationVerdict,
}

/// Outcome of validating a whole form.
///
/// Holds a verdict for every required field, passing ones included, so the
/// webview can clear stale errors before setting the new ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    pub valid: bool,
    pub fields: Vec<FieldReport>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn failures(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields.iter().filter(|f| !f.verdict.valid)
    }
}

/// Validate every required field of a form.
pub fn validate_form_report(fields: &[FieldDescriptor]) -> FormReport {
    let fields: Vec<FieldReport> = fields
        .iter()
        .filter(|f| f.required)
        .map(|f| FieldReport {
            id: f.id.clone(),
            verdict: validate(f),
        })
        .collect();
    FormReport {
        valid: fields.iter().all(|f| f.verdict.valid),
        fields,
    }
}

/// True only if every required field passes.
pub fn validate_form(fields: &[FieldDescriptor]) -> bool {
    validate_form_report(fields).is_valid()
}

/// Colour band of the message character counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CounterLevel {
    Normal,
    Approaching,
    Critical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterThresholds {
    pub warn_at: usize,
    pub critical_at: usize,
}

impl Default for CounterThresholds {
    fn default() -> Self {
        Self {
            warn_at: 800,
            critical_at: 900,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterCount {
    pub count: usize,
    pub level: CounterLevel,
}

pub fn character_count(text: &str, thresholds: &CounterThresholds) -> CharacterCount {
    let count = text.chars().count();
    let level = if count > thresholds.critical_at {
        CounterLevel::Critical
    } else if count > thresholds.warn_at {
        CounterLevel::Approaching
    } else {
        CounterLevel::Normal
    };
    CharacterCount { count, level }
}

/// Whether the enquiry form should show its service-details section.
pub fn requires_service_details(enquiry_type: &str) -> bool {
    SERVICE_ENQUIRY_TYPES.contains(&enquiry_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: &str, min: Option<i64>, max: Option<i64>) -> FieldDescriptor {
        FieldDescriptor::new(FieldKind::Number, value).with_constraints(FieldConstraints {
            min,
            max,
            ..Default::default()
        })
    }

    #[test]
    fn test_required_empty_for_every_text_kind() {
        for kind in [
            FieldKind::Text,
            FieldKind::Email,
            FieldKind::Tel,
            FieldKind::Number,
            FieldKind::Checkbox,
            FieldKind::Select,
            FieldKind::Textarea,
            FieldKind::Other,
        ] {
            for value in ["", "   ", "\t\n"] {
                let v = validate(&FieldDescriptor::new(kind, value).required());
                assert!(!v.valid, "{kind:?} {value:?}");
                assert_eq!(v.message, "This field is required.");
            }
        }
    }

    #[test]
    fn test_optional_empty_passes() {
        assert!(validate(&FieldDescriptor::new(FieldKind::Email, "")).valid);
        assert!(validate(&FieldDescriptor::new(FieldKind::Tel, "")).valid);
        assert!(validate(&number("", Some(5), Some(8))).valid);
    }

    #[test]
    fn test_email_shape() {
        for good in ["user@domain.tld", "a.b@c.co.za", "info@grimreaperandco.co.za"] {
            assert!(validate(&FieldDescriptor::new(FieldKind::Email, good)).valid, "{good}");
        }
        for bad in ["userdomain.tld", "user@domain", "user @domain.tld", "@domain.tld", "a@@b.c"] {
            let v = validate(&FieldDescriptor::new(FieldKind::Email, bad));
            assert!(!v.valid, "{bad}");
            assert_eq!(v.message, "Please enter a valid email address.");
        }
    }

    #[test]
    fn test_phone_length_bounds() {
        assert!(validate(&FieldDescriptor::new(FieldKind::Tel, "0211234567")).valid);
        assert!(validate(&FieldDescriptor::new(FieldKind::Tel, "+27 (21) 123-45")).valid);
        assert!(validate(&FieldDescriptor::new(FieldKind::Tel, "123456789012345")).valid);

        for bad in ["021123456", "1234567890123456", "021-123-abcd"] {
            let v = validate(&FieldDescriptor::new(FieldKind::Tel, bad));
            assert!(!v.valid, "{bad}");
            assert_eq!(v.message, "Please enter a valid phone number (10-15 digits).");
        }
    }

    #[test]
    fn test_length_constraints() {
        let c = FieldConstraints {
            min_length: Some(10),
            max_length: Some(20),
            ..Default::default()
        };
        let short = FieldDescriptor::new(FieldKind::Textarea, "too short").with_constraints(c.clone());
        assert_eq!(validate(&short).message, "Minimum 10 characters required.");

        let long = FieldDescriptor::new(FieldKind::Text, "x".repeat(21)).with_constraints(c.clone());
        assert_eq!(validate(&long).message, "Maximum 20 characters allowed.");

        let ok = FieldDescriptor::new(FieldKind::Text, "just enough").with_constraints(c);
        assert!(validate(&ok).valid);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let c = FieldConstraints {
            max_length: Some(5),
            ..Default::default()
        };
        let f = FieldDescriptor::new(FieldKind::Text, "décor").with_constraints(c);
        assert!(validate(&f).valid);
    }

    #[test]
    fn test_constraints_ignored_for_other_kinds() {
        let f = FieldDescriptor::new(FieldKind::Select, "burial").with_constraints(FieldConstraints {
            min_length: Some(50),
            min: Some(100),
            ..Default::default()
        });
        assert!(validate(&f).valid);

        let n = FieldDescriptor::new(FieldKind::Number, "3").with_constraints(FieldConstraints {
            min_length: Some(5),
            ..Default::default()
        });
        assert!(validate(&n).valid);
    }

    #[test]
    fn test_number_range() {
        assert_eq!(
            validate(&number("3", Some(5), None)).message,
            "Value must be at least 5."
        );
        assert_eq!(
            validate(&number("10", None, Some(8))).message,
            "Value must not exceed 8."
        );
        assert!(validate(&number("6", Some(5), Some(8))).valid);
        assert!(validate(&number("5", Some(5), Some(8))).valid);
        assert!(validate(&number("8", Some(5), Some(8))).valid);
    }

    #[test]
    fn test_non_numeric_number_skips_range() {
        assert!(validate(&number("abc", Some(5), Some(8))).valid);
        // Leading digits are still read, so "12 guests" is 12.
        assert_eq!(
            validate(&number("12 guests", Some(5), Some(8))).message,
            "Value must not exceed 8."
        );
    }

    #[test]
    fn test_required_checkbox() {
        let unchecked = FieldDescriptor::new(FieldKind::Checkbox, "on").required();
        assert_eq!(validate(&unchecked).message, "You must agree to continue.");
        assert!(validate(&unchecked.clone().checked(true)).valid);
        // Unticked optional checkbox is fine.
        assert!(validate(&FieldDescriptor::new(FieldKind::Checkbox, "")).valid);
    }

    #[test]
    fn test_required_check_comes_first() {
        let f = FieldDescriptor::new(FieldKind::Text, "")
            .required()
            .with_constraints(FieldConstraints {
                min_length: Some(3),
                ..Default::default()
            });
        assert_eq!(validate(&f).message, "This field is required.");
    }

    #[test]
    fn test_form_with_one_empty_required_field() {
        let fields = vec![
            FieldDescriptor::new(FieldKind::Text, "Jane Doe").with_id("fullName").required(),
            FieldDescriptor::new(FieldKind::Email, "").with_id("email").required(),
            FieldDescriptor::new(FieldKind::Tel, "021 123 4567").with_id("phone").required(),
        ];
        assert!(!validate_form(&fields));

        let report = validate_form_report(&fields);
        assert_eq!(report.fields.len(), 3);
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].id, "email");
    }

    #[test]
    fn test_form_skips_optional_fields() {
        let fields = vec![
            FieldDescriptor::new(FieldKind::Text, "Jane").with_id("fullName").required(),
            FieldDescriptor::new(FieldKind::Email, "not-an-email").with_id("altEmail"),
        ];
        let report = validate_form_report(&fields);
        assert!(report.is_valid());
        assert_eq!(report.fields.len(), 1);
    }

    #[test]
    fn test_descriptor_from_webview_json() {
        let json = r#"{"id":"guests","kind":"number","required":true,"value":"12","constraints":{"min":1,"max":10}}"#;
        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(field.kind, FieldKind::Number);
        assert!(!field.checked);
        assert_eq!(validate(&field).message, "Value must not exceed 10.");
    }

    #[test]
    fn test_enquiry_form_with_date_field() {
        let json = r#"[
            {"id":"fullName","kind":"text","required":true,"value":"Jane Doe"},
            {"id":"serviceDate","kind":"date","required":true,"value":"2026-10-20"},
            {"id":"attendees","kind":"number","value":"40","constraints":{"min":1}}
        ]"#;
        let fields: Vec<FieldDescriptor> = serde_json::from_str(json).unwrap();
        assert_eq!(fields[1].kind, FieldKind::Other);
        assert!(validate_form(&fields));

        let mut empty_date = fields.clone();
        empty_date[1].value.clear();
        let report = validate_form_report(&empty_date);
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].id, "serviceDate");
        assert_eq!(failures[0].verdict.message, "This field is required.");
    }

    #[test]
    fn test_other_kinds_skip_kind_rules() {
        let f = FieldDescriptor::new(FieldKind::Other, "https://example.org").with_constraints(
            FieldConstraints {
                max_length: Some(3),
                min: Some(100),
                ..Default::default()
            },
        );
        assert!(validate(&f).valid);
    }

    #[test]
    fn test_negative_length_attributes_are_ignored() {
        let json = r#"{"kind":"text","value":"hi","constraints":{"minLength":-1,"maxLength":-5,"min":-3}}"#;
        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(field.constraints.min_length, None);
        assert_eq!(field.constraints.max_length, None);
        assert_eq!(field.constraints.min, Some(-3));
        assert!(validate(&field).valid);

        let json = r#"{"kind":"text","value":"hi","constraints":{"minLength":null,"maxLength":4}}"#;
        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(field.constraints.max_length, Some(4));
    }

    #[test]
    fn test_character_counter_levels() {
        let t = CounterThresholds::default();
        assert_eq!(character_count("", &t).level, CounterLevel::Normal);
        assert_eq!(character_count(&"a".repeat(800), &t).level, CounterLevel::Normal);
        assert_eq!(character_count(&"a".repeat(801), &t).level, CounterLevel::Approaching);
        assert_eq!(character_count(&"a".repeat(901), &t).level, CounterLevel::Critical);
        assert_eq!(character_count("héllo", &t).count, 5);
    }

    #[test]
    fn test_service_details_visibility() {
        assert!(requires_service_details("cremation"));
        assert!(requires_service_details("pre-planning"));
        assert!(!requires_service_details("volunteer"));
        assert!(!requires_service_details(""));
    }
}
