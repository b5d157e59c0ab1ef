use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const RESUME_FILE: &str = "resume.json";

pub static GLOBAL_RESUME: LazyLock<Result<Resume, ContentError>> = LazyLock::new(load_resume);

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Resume data not found")]
    NotFound,
    #[error("Couldn't parse resume data: {0}")]
    Parse(String),
}

/// Path or URL of an external document, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentReference(String);

impl DocumentReference {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, ignoring any query or fragment.
    pub fn file_name(&self) -> Option<&str> {
        let path = self.0.split(['?', '#']).next().unwrap_or_default();
        path.rsplit('/').next().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub link: String,
    #[serde(default)]
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub contact: Contact,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub projects: Vec<Project>,
    pub photo: Photo,
    pub cv: DocumentReference,
}

impl Resume {
    pub fn from_json(data: &[u8]) -> Result<Self, ContentError> {
        serde_json::from_slice(data).map_err(|e| ContentError::Parse(e.to_string()))
    }
}

pub fn load_resume() -> Result<Resume, ContentError> {
    let file = Content::get(RESUME_FILE).ok_or(ContentError::NotFound)?;
    Resume::from_json(&file.data)
}
