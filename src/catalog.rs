use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

pub const WHATSAPP_BASE: &str = "https://wa.me";
pub const WHATSAPP_NUMBER: &str = "233554572904";

const CONTENT_FILE: &str = "portfolio.json";

static GLOBAL_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::load().unwrap_or_else(|e| {
        log::error!("falling back to an empty catalog: {e}");
        Catalog::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

/// A `{value, label}` pair backing an enumerated-choice field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> ChoiceOption {
    ChoiceOption { value, label }
}

pub const SERVICE_TYPES: &[ChoiceOption] = &[
    opt("web-development", "Web Development"),
    opt("mobile-development", "Mobile Development"),
    opt("cloud-architecture", "Cloud Architecture"),
    opt("consultation", "Technical Consultation"),
    opt("other", "Other"),
];

// Ghanaian cedis
pub const BUDGET_OPTIONS: &[ChoiceOption] = &[
    opt("under-5k", "Under ₵5,000"),
    opt("5k-10k", "₵5,000 - ₵10,000"),
    opt("10k-25k", "₵10,000 - ₵25,000"),
    opt("25k-50k", "₵25,000 - ₵50,000"),
    opt("50k-100k", "₵50,000 - ₵100,000"),
    opt("100k-plus", "₵100,000+"),
];

pub const TIMELINE_OPTIONS: &[ChoiceOption] = &[
    opt("asap", "ASAP"),
    opt("1-month", "1 Month"),
    opt("2-3-months", "2-3 Months"),
    opt("3-6-months", "3-6 Months"),
    opt("6-plus-months", "6+ Months"),
];

pub const NOT_SPECIFIED: &str = "Not specified";

pub fn resolve_label(options: &[ChoiceOption], value: &str) -> Option<&'static str> {
    options.iter().find(|o| o.value == value).map(|o| o.label)
}

pub fn service_type_label(value: &str) -> String {
    label_or_unspecified(SERVICE_TYPES, value)
}

pub fn budget_label(value: &str) -> String {
    label_or_unspecified(BUDGET_OPTIONS, value)
}

pub fn timeline_label(value: &str) -> String {
    label_or_unspecified(TIMELINE_OPTIONS, value)
}

fn label_or_unspecified(options: &[ChoiceOption], value: &str) -> String {
    match resolve_label(options, value) {
        Some(label) => label.to_string(),
        None if value.is_empty() => NOT_SPECIFIED.to_string(),
        None => value.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

pub const TABS: &[Tab] = &[
    Tab { id: "home", label: "Home", path: "/", icon: "🏠" },
    Tab { id: "about", label: "About", path: "/about", icon: "👤" },
    Tab { id: "portfolio", label: "Portfolio", path: "/portfolio", icon: "💼" },
    Tab { id: "services", label: "Services", path: "/services", icon: "🔧" },
    Tab { id: "contact", label: "Contact", path: "/contact", icon: "✉️" },
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("content file {0} is not embedded")]
    Missing(&'static str),
    #[error("couldn't parse portfolio content: {0}")]
    Parse(String),
    #[error("invalid portfolio content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    pub headline: String,
    pub tagline: String,
    pub location: String,
    pub phone: String,
    #[serde(default)]
    pub about: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawProject")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub tech: Vec<String>,
    pub url: Option<String>,
}

// Older entries carry a single `image`; it becomes the one-element case.
#[derive(Deserialize)]
struct RawProject {
    title: String,
    description: String,
    #[serde(default)]
    images: Vec<String>,
    image: Option<String>,
    #[serde(default)]
    tech: Vec<String>,
    url: Option<String>,
}

impl From<RawProject> for Project {
    fn from(raw: RawProject) -> Self {
        let mut images = raw.images;
        if let Some(image) = raw.image {
            images.insert(0, image);
        }
        Self {
            title: raw.title,
            description: raw.description,
            images,
            tech: raw.tech,
            url: raw.url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
}

impl Catalog {
    pub fn load() -> Result<Self, CatalogError> {
        let file = Assets::get(CONTENT_FILE).ok_or(CatalogError::Missing(CONTENT_FILE))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, CatalogError> {
        let catalog: Catalog =
            serde_json::from_slice(bytes).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if let Some(p) = self.projects.iter().find(|p| p.images.is_empty()) {
            return Err(CatalogError::Invalid(format!(
                "project '{}' has no images",
                p.title
            )));
        }
        if let Some(s) = self.skills.iter().find(|s| s.level > 100) {
            return Err(CatalogError::Invalid(format!(
                "skill '{}' has level {} over 100",
                s.name, s.level
            )));
        }
        Ok(())
    }
}

/// The site content, parsed once on first access.
pub fn catalog() -> &'static Catalog {
    &GLOBAL_CATALOG
}
