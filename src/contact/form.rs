use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub const COMPANY_SIZES: &[(&str, &str)] = &[
    ("1-10", "1-10 employees"),
    ("11-50", "11-50 employees"),
    ("51-200", "51-200 employees"),
    ("201-500", "201-500 employees"),
    ("501-1000", "501-1000 employees"),
    ("1000+", "1000+ employees"),
];

pub const ANNUAL_REVENUES: &[(&str, &str)] = &[
    ("under-1m", "Under $1M"),
    ("1m-5m", "$1M - $5M"),
    ("5m-10m", "$5M - $10M"),
    ("10m-50m", "$10M - $50M"),
    ("50m-100m", "$50M - $100M"),
    ("100m+", "$100M+"),
];

pub const PROJECT_BUDGETS: &[(&str, &str)] = &[
    ("under-10k", "Under $10K"),
    ("10k-25k", "$10K - $25K"),
    ("25k-50k", "$25K - $50K"),
    ("50k-100k", "$50K - $100K"),
    ("100k-250k", "$100K - $250K"),
    ("250k+", "$250K+"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Role,
    CompanyName,
    CompanyWebsite,
    CompanySize,
    AnnualRevenue,
    ProjectBudget,
    Services,
    Message,
}

impl Field {
    /// Fields the lead form will not submit without.
    pub const REQUIRED: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::CompanySize,
        Field::AnnualRevenue,
        Field::ProjectBudget,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Role => "Role",
            Field::CompanyName => "Company name",
            Field::CompanyWebsite => "Company website",
            Field::CompanySize => "Company size",
            Field::AnnualRevenue => "Annual revenue",
            Field::ProjectBudget => "Project budget",
            Field::Services => "Services",
            Field::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        Field::REQUIRED.contains(self)
    }
}

/// Toast title shown when either form is submitted incomplete.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Checks an email field. Blank values are reported as missing.
pub fn check_email(email: &str) -> Result<(), FormError> {
    if email.trim().is_empty() {
        Err(FormError::MissingField(Field::Email))
    } else if !is_valid_email(email) {
        Err(FormError::InvalidEmail)
    } else {
        Ok(())
    }
}

/// A lead as captured by the "Tell us where you're at" form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub role: String,
    pub company_name: String,
    pub company_website: String,
    pub company_size: String,
    pub annual_revenue: String,
    pub project_budget: String,
    pub services: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Role => &self.role,
            Field::CompanyName => &self.company_name,
            Field::CompanyWebsite => &self.company_website,
            Field::CompanySize => &self.company_size,
            Field::AnnualRevenue => &self.annual_revenue,
            Field::ProjectBudget => &self.project_budget,
            Field::Services => &self.services,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Role => &mut self.role,
            Field::CompanyName => &mut self.company_name,
            Field::CompanyWebsite => &mut self.company_website,
            Field::CompanySize => &mut self.company_size,
            Field::AnnualRevenue => &mut self.annual_revenue,
            Field::ProjectBudget => &mut self.project_budget,
            Field::Services => &mut self.services,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Validates one field on its own, as shown next to the input.
    pub fn check(&self, field: Field) -> Result<(), FormError> {
        if field == Field::Email {
            return check_email(&self.email);
        }
        if field.is_required() && self.get(field).trim().is_empty() {
            return Err(FormError::MissingField(field));
        }
        Ok(())
    }

    /// Every problem with the form, in field order.
    pub fn validate(&self) -> Result<(), Vec<FormError>> {
        let errors: Vec<FormError> = Field::REQUIRED
            .iter()
            .filter_map(|field| self.check(*field).err())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// The short "Send us a message" form in the contact section.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QuickMessage {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl QuickMessage {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField(Field::Name));
        }
        check_email(&self.email)?;
        if self.message.trim().is_empty() {
            return Err(FormError::MissingField(Field::Message));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ContactFormData {
        ContactFormData {
            name: "Ada Lovelace".into(),
            email: "ada@analytical.engine".into(),
            company_size: "11-50".into(),
            annual_revenue: "1m-5m".into(),
            project_budget: "25k-50k".into(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_form_validates() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ContactFormData::default().validate().unwrap_err();
        assert_eq!(
            errors,
            Field::REQUIRED
                .iter()
                .map(|field| FormError::MissingField(*field))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = complete();
        form.set(Field::Name, "   ".into());
        assert_eq!(form.check(Field::Name), Err(FormError::MissingField(Field::Name)));
    }

    #[test]
    fn optional_fields_never_fail() {
        let form = ContactFormData::default();
        for field in [Field::Role, Field::CompanyName, Field::CompanyWebsite, Field::Services, Field::Message] {
            assert_eq!(form.check(field), Ok(()));
        }
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["ada", "ada@", "ada@engine", "a da@engine.org", "@engine.org"] {
            assert_eq!(check_email(email), Err(FormError::InvalidEmail), "{email}");
        }
        assert_eq!(check_email(" ada@engine.org "), Ok(()));
    }

    #[test]
    fn set_then_get_each_field() {
        let mut form = ContactFormData::default();
        form.set(Field::CompanyWebsite, "https://example.org".into());
        form.set(Field::Services, "strategy".into());
        assert_eq!(form.get(Field::CompanyWebsite), "https://example.org");
        assert_eq!(form.services, "strategy");
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let json = complete().to_json();
        assert!(json.contains("\"companySize\":\"11-50\""));
        assert!(json.contains("\"projectBudget\""));
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(
            FormError::MissingField(Field::AnnualRevenue).to_string(),
            "Annual revenue is required"
        );
    }

    #[test]
    fn quick_message_requires_name_email_and_message() {
        let mut message = QuickMessage::default();
        assert_eq!(message.validate(), Err(FormError::MissingField(Field::Name)));
        message.name = "Grace".into();
        message.email = "grace@navy.mil".into();
        assert_eq!(message.validate(), Err(FormError::MissingField(Field::Message)));
        message.message = "Hello".into();
        assert_eq!(message.validate(), Ok(()));
    }
}
