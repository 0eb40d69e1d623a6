use thiserror::Error;

pub const SUBMITTED_FEEDBACK: &str = "Your email client should open with a pre-filled message.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadFormError {
    #[error("Please complete name, email, and message.")]
    MissingRequired,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Company,
    Message,
}

/// A validated inquiry with surrounding whitespace stripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

impl LeadForm {
    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Company => self.company = value,
            LeadField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<LeadSubmission, LeadFormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(LeadFormError::MissingRequired);
        }

        let company = self.company.trim();
        Ok(LeadSubmission {
            name: name.to_string(),
            email: email.to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
            message: message.to_string(),
        })
    }
}

impl LeadSubmission {
    pub fn subject(&self) -> String {
        format!("EmailStack inquiry from {}", self.name)
    }

    pub fn body(&self) -> String {
        [
            format!("Name: {}", self.name),
            format!("Email: {}", self.email),
            format!("Company: {}", self.company.as_deref().unwrap_or("Not provided")),
            String::new(),
            self.message.clone(),
        ]
        .join("\n")
    }

    pub fn mailto_uri(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, company: &str, message: &str) -> LeadForm {
        LeadForm {
            name: name.to_string(),
            email: email.to_string(),
            company: company.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let err = form("", "a@b.com", "", "hi").validate().unwrap_err();
        assert_eq!(err, LeadFormError::MissingRequired);
        assert_eq!(err.to_string(), "Please complete name, email, and message.");
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        assert!(form("Alex", "   ", "", "hi").validate().is_err());
        assert!(form("Alex", "a@b.com", "", "\n\t").validate().is_err());
    }

    #[test]
    fn test_company_is_optional() {
        let submission = form(" Alex ", "alex@company.com", "  ", " Need help ").validate().unwrap();
        assert_eq!(submission.name, "Alex");
        assert_eq!(submission.company, None);
        assert_eq!(
            submission.body(),
            "Name: Alex\nEmail: alex@company.com\nCompany: Not provided\n\nNeed help"
        );
    }

    #[test]
    fn test_mailto_uri() {
        let submission = form("Alex Morgan", "alex@company.com", "Northline", "Send volume: 20k/mo")
            .validate()
            .unwrap();
        let uri = submission.mailto_uri("sales@emailstack.ai");
        assert_eq!(
            uri,
            "mailto:sales@emailstack.ai?subject=EmailStack%20inquiry%20from%20Alex%20Morgan\
             &body=Name%3A%20Alex%20Morgan%0AEmail%3A%20alex%40company.com%0ACompany%3A%20Northline\
             %0A%0ASend%20volume%3A%2020k%2Fmo"
        );
    }

    #[test]
    fn test_set_field() {
        let mut lead = LeadForm::default();
        lead.set(LeadField::Name, "Alex".to_string());
        lead.set(LeadField::Message, "hi".to_string());
        assert_eq!(lead.name, "Alex");
        assert_eq!(lead.message, "hi");
        assert!(lead.validate().is_err());
        lead.set(LeadField::Email, "a@b.com".to_string());
        assert!(lead.validate().is_ok());
    }
}
