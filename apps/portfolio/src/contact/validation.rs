use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Local part may not start with a dot or contain "..": checked separately
// because the regex engine has no lookaround.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("valid email regex")
});

/// Raw form input as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Input that passed the schema. Only `validate` builds one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidContact {
    name: String,
    email: String,
    message: String,
}

impl ValidContact {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Field errors in form order. Empty means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().map(|e| e.field)
    }

    fn push(&mut self, field: Field, message: &'static str) {
        self.0.push(FieldError { field, message });
    }
}

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    !local.starts_with('.') && !local.contains("..") && EMAIL_RE.is_match(email)
}

/// Applies the contact schema. Every field is checked so all errors surface at once.
pub fn validate(input: &ContactInput) -> Result<ValidContact, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if input.name.is_empty() {
        errors.push(Field::Name, "Name is required.");
    }
    if !is_valid_email(&input.email) {
        errors.push(Field::Email, "Please enter a valid email.");
    }
    if input.message.is_empty() {
        errors.push(Field::Message, "Message is required.");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidContact {
        name: input.name.clone(),
        email: input.email.clone(),
        message: input.message.clone(),
    })
}
