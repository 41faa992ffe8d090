use serde::Deserialize;
use serde_json::Value;

/// Top-level shape of `experiences.json`.
///
/// `jobs` is kept as raw JSON: the document is externally supplied and a
/// missing or non-array `jobs` must degrade to zero cards, not a parse error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceDoc {
    pub jobs: Value,
}

impl ExperienceDoc {
    /// Jobs in document order. Entries that are not well-formed objects
    /// collapse to an all-defaults [`Job`] rather than aborting the render.
    pub fn jobs(&self) -> Vec<Job> {
        match self.jobs.as_array() {
            Some(entries) => entries
                .iter()
                .map(|v| serde_json::from_value(v.clone()).unwrap_or_default())
                .collect(),
            None => Vec::new(),
        }
    }
}

/// One work-experience entry. Every field is optional; rendering fills in
/// documented fallbacks instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Job {
    pub company: Option<String>,
    #[serde(rename = "companyAlias")]
    pub company_alias: Option<String>,
    #[serde(rename = "companyLogo")]
    pub company_logo: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    /// Expected to be an array of duration entries; only the first is used.
    pub duration: Value,
    /// Expected to be an array whose first element is a keyed container of
    /// task strings; keys are ignored.
    pub tasks: Value,
    /// Either a sequence of names or a keyed mapping whose values are names.
    #[serde(rename = "technologiesUsed")]
    pub technologies_used: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DurationEntry {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    /// Truthiness decides "ongoing", so any JSON type is accepted.
    #[serde(rename = "stillEmployed?")]
    pub still_employed: Value,
}

/// Shape of `navLinks.json`. Older documents used the singular `navLink` key;
/// both are accepted, plural taking precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NavDoc {
    #[serde(rename = "navLinks")]
    pub nav_links: Option<Vec<LinkEntry>>,
    #[serde(rename = "navLink")]
    pub nav_link: Option<Vec<LinkEntry>>,
}

/// Shape of `socialLinks.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SocialDoc {
    #[serde(rename = "socialLinks")]
    pub social_links: Option<Vec<LinkEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinkEntry {
    pub name: Option<String>,
    pub href: Option<String>,
    /// Space-separated icon class list (e.g. "fa-brands fa-github").
    pub icon: Option<String>,
}

/// Shape of `skills.json`. The `Skills` array mixes a `"Technical Skills"`
/// block and a `"Soft Skills"` block with loosely structured contents, so it
/// stays raw and is normalized in [`crate::skills`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SkillsDoc {
    #[serde(rename = "Skills")]
    pub skills: Vec<Value>,
}

/// Shape of `projects.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectsDoc {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "liveLink")]
    pub live_link: String,
    #[serde(rename = "sourceCode")]
    pub source_code: String,
    #[serde(rename = "techStack")]
    pub tech_stack: Vec<String>,
}

/// Work-status badge shown on the home page.
#[derive(Debug, Clone)]
pub struct StatusBadge {
    pub status: String,
    pub contact_href: String,
    pub cta: String,
}

impl Default for StatusBadge {
    fn default() -> Self {
        StatusBadge {
            status: "available".to_string(),
            contact_href: "mailto:hello@folio.example".to_string(),
            cta: "Hire Me".to_string(),
        }
    }
}
