use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Where a posting was aggregated from. Any other value is rejected when the
/// catalog is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SourceCategory {
    Indeed,
    Glassdoor,
    Company,
}

impl SourceCategory {
    pub fn badge_color(self) -> &'static str {
        match self {
            SourceCategory::Indeed => "blue",
            SourceCategory::Glassdoor => "green",
            SourceCategory::Company => "purple",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub description: String,
    pub source: SourceCategory,
    pub posted_date: String,
    pub apply_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
}

impl Job {
    /// Placeholder glyph shown when the posting has no logo.
    pub fn logo_initial(&self) -> Option<char> {
        self.company
            .trim()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_posting() {
        let job: Job = serde_json::from_value(json!({
            "id": "7",
            "title": "Data Engineer",
            "company": "acme",
            "location": "Remote",
            "type": "Full-time",
            "skills": ["SQL"],
            "description": "Pipelines",
            "source": "Glassdoor",
            "postedDate": "2 days ago",
            "applyUrl": "https://acme.example/jobs/7"
        }))
        .unwrap();

        assert_eq!(job.employment_type, "Full-time");
        assert_eq!(job.source, SourceCategory::Glassdoor);
        assert_eq!(job.salary, None);
        assert_eq!(job.logo_initial(), Some('A'));
    }

    #[test]
    fn rejects_unknown_source_category() {
        let parsed = serde_json::from_value::<SourceCategory>(json!("LinkedIn"));
        assert!(parsed.is_err());
    }

    #[test]
    fn badge_colors_follow_category() {
        assert_eq!(SourceCategory::Indeed.badge_color(), "blue");
        assert_eq!(SourceCategory::Glassdoor.badge_color(), "green");
        assert_eq!(SourceCategory::Company.badge_color(), "purple");
    }
}
