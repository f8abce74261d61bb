//! Lead-capture contact record.

use serde::{Deserialize, Serialize};

/// Contact details gathered between the questionnaire and the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub newsletter_opt_in: bool,
}

impl Default for ContactRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            newsletter_opt_in: true,
        }
    }
}

/// A required contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
}

/// A single edit to the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactUpdate {
    Name(String),
    Email(String),
    NewsletterOptIn(bool),
}

impl ContactRecord {
    pub fn apply(&mut self, update: ContactUpdate) {
        match update {
            ContactUpdate::Name(name) => self.name = name,
            ContactUpdate::Email(email) => self.email = email,
            ContactUpdate::NewsletterOptIn(opt_in) => self.newsletter_opt_in = opt_in,
        }
    }

    /// Required fields that are empty or whitespace-only.
    ///
    /// Presence is the only check; the email is not format-validated.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<ContactField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(ContactField::Name);
        }
        if self.email.trim().is_empty() {
            missing.push(ContactField::Email);
        }
        missing
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Copy with surrounding whitespace removed from name and email.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            newsletter_opt_in: self.newsletter_opt_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newsletter_defaults_on() {
        assert!(ContactRecord::default().newsletter_opt_in);
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut c = ContactRecord::default();
        c.apply(ContactUpdate::Name("   ".to_owned()));
        c.apply(ContactUpdate::Email("\t\n".to_owned()));
        assert_eq!(c.missing_fields(), vec![ContactField::Name, ContactField::Email]);
        assert!(!c.is_valid());
    }

    #[test]
    fn email_format_is_not_checked() {
        let mut c = ContactRecord::default();
        c.apply(ContactUpdate::Name("Ada".to_owned()));
        c.apply(ContactUpdate::Email("not-an-email".to_owned()));
        assert!(c.is_valid());
    }

    #[test]
    fn trimmed_strips_padding() {
        let mut c = ContactRecord::default();
        c.apply(ContactUpdate::Name("  Ada ".to_owned()));
        c.apply(ContactUpdate::Email(" ada@example.com ".to_owned()));
        c.apply(ContactUpdate::NewsletterOptIn(false));
        let t = c.trimmed();
        assert_eq!(t.name, "Ada");
        assert_eq!(t.email, "ada@example.com");
        assert!(!t.newsletter_opt_in);
    }
}
