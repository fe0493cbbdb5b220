//! Quote requests from the "Devis gratuit" form.

use log::info;
use thiserror::Error;

use crate::config::BOOKING_URL;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadRequest {
    pub name: String,
    pub email: String,
    pub project: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeadError {
    #[error("Indiquez votre nom.")]
    MissingName,
    #[error("Adresse email invalide.")]
    InvalidEmail,
    #[error("Décrivez votre projet en quelques mots.")]
    MissingProject,
}

impl LeadRequest {
    pub fn validate(&self) -> Result<(), LeadError> {
        if self.name.trim().is_empty() {
            return Err(LeadError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(LeadError::InvalidEmail);
        }
        if self.project.trim().is_empty() {
            return Err(LeadError::MissingProject);
        }
        Ok(())
    }
}

// Same shape the browser accepts for <input type="email">: something@something,
// no whitespace, a dot somewhere in the domain.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Acknowledgment {
    pub message: String,
}

/// Where validated leads go.
pub trait LeadSubmitter {
    fn submit(&self, lead: &LeadRequest) -> Result<Acknowledgment, LeadError>;
}

/// Validates and acknowledges locally. Nothing leaves the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DemoSubmitter;

impl LeadSubmitter for DemoSubmitter {
    fn submit(&self, lead: &LeadRequest) -> Result<Acknowledgment, LeadError> {
        lead.validate()?;
        info!("Lead received from {} (demo, not sent)", lead.email.trim());
        Ok(Acknowledgment {
            message: "Merci ! Votre demande a été envoyée (démo).".to_string(),
        })
    }
}

/// Booking link, prefilled with whatever the visitor already typed.
pub fn booking_url(name: &str, email: &str) -> String {
    let mut params = Vec::new();
    if !name.trim().is_empty() {
        params.push(format!("name={}", urlencoding::encode(name.trim())));
    }
    if !email.trim().is_empty() {
        params.push(format!("email={}", urlencoding::encode(email.trim())));
    }
    if params.is_empty() {
        BOOKING_URL.to_string()
    } else {
        format!("{}?{}", BOOKING_URL, params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str, email: &str, project: &str) -> LeadRequest {
        LeadRequest {
            name: name.to_string(),
            email: email.to_string(),
            project: project.to_string(),
        }
    }

    #[test]
    fn complete_lead_is_acknowledged() {
        let ack = DemoSubmitter
            .submit(&lead("Sarah Dupont", "sarah@exemple.com", "Boutique de bougies"))
            .expect("valid lead");
        assert!(ack.message.starts_with("Merci"));
    }

    #[test]
    fn each_field_is_required() {
        assert_eq!(lead("  ", "a@b.fr", "x").validate(), Err(LeadError::MissingName));
        assert_eq!(lead("A", "", "x").validate(), Err(LeadError::InvalidEmail));
        assert_eq!(lead("A", "a@b.fr", "\n").validate(), Err(LeadError::MissingProject));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["plain", "@exemple.com", "a@", "a@b", "a@.fr", "a@b.", "a b@c.fr", "a@b@c.fr"] {
            assert!(!looks_like_email(email), "{email} accepted");
        }
        assert!(looks_like_email("vous@exemple.com"));
    }

    #[test]
    fn booking_url_is_prefilled_and_encoded() {
        assert_eq!(booking_url("", " "), BOOKING_URL);
        assert_eq!(
            booking_url("Mélissa Cohen", "m@exemple.com"),
            format!("{BOOKING_URL}?name=M%C3%A9lissa%20Cohen&email=m%40exemple.com")
        );
    }
}
