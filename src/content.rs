use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("site content is inconsistent: {0}")]
    Inconsistent(String),
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub brand: Brand,
    pub rating: Rating,
    pub projects: Vec<Project>,
    pub plans: Vec<Plan>,
    pub comparison: Comparison,
    pub steps: Vec<Step>,
    pub testimonials: Vec<Testimonial>,
    pub faq: Vec<FaqEntry>,
    pub legal: Vec<LegalArticle>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Brand {
    pub name: String,
    pub company: String,
    pub phone: String,
    pub phone_href: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Rating {
    pub value: f64,
    pub reviews: u32,
    pub projects_delivered: u32,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub key: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub fallback: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanVariant {
    Light,
    Gold,
    Dark,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Plan {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub variant: PlanVariant,
    pub features: Vec<String>,
    #[serde(default)]
    pub not_included: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Comparison {
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub feature: String,
    pub values: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Step {
    pub title: String,
    pub detail: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
    pub rating: f64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct LegalArticle {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<LegalParagraph>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub wide: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct LegalParagraph {
    #[serde(default)]
    pub label: Option<String>,
    pub text: String,
}

impl SiteContent {
    /// Parse the copy bundled into the binary.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.check()?;
        Ok(content)
    }

    fn check(&self) -> Result<(), ContentError> {
        let columns = self.comparison.columns.len();
        if let Some(row) = self.comparison.rows.iter().find(|r| r.values.len() != columns) {
            return Err(ContentError::Inconsistent(format!(
                "comparison row '{}' has {} values for {} columns",
                row.feature,
                row.values.len(),
                columns
            )));
        }
        if self.projects.is_empty() {
            return Err(ContentError::Inconsistent("no projects to show".to_string()));
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn legal_anchor_ids(&self) -> impl Iterator<Item = &str> {
        self.legal.iter().filter_map(|a| a.id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_loads() {
        let content = SiteContent::load().expect("bundled site.json parses");
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.plans.len(), 3);
        assert_eq!(content.faq.len(), 4);
        assert_eq!(
            content.plans.iter().filter(|p| p.variant == PlanVariant::Gold).count(),
            1
        );
    }

    #[test]
    fn legal_articles_expose_footer_anchors() {
        let content = SiteContent::load().expect("bundled site.json parses");
        let ids: Vec<&str> = content.legal_anchor_ids().collect();
        assert_eq!(ids, ["mentions-legales", "cgu", "cgv", "confidentialite", "cookies"]);
    }

    #[test]
    fn ragged_comparison_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(SITE_JSON).expect("valid json");
        value["comparison"]["rows"][0]["values"] = serde_json::json!(["2"]);
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Inconsistent(_)), "{err}");
    }

    #[test]
    fn broken_json_is_reported() {
        let err = SiteContent::from_json("{ \"brand\": ").unwrap_err();
        assert!(matches!(err, ContentError::Malformed(_)));
    }
}
