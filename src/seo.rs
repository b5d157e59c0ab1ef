use serde::Serialize;

use crate::content::Resume;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PostalAddress<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "addressLocality")]
    pub locality: &'a str,
}

/// schema.org `Person` description of the page owner.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    #[serde(rename = "jobTitle")]
    pub job_title: &'a str,
    pub email: &'a str,
    pub telephone: &'a str,
    pub url: &'a str,
    pub address: PostalAddress<'a>,
}

impl<'a> From<&'a Resume> for PersonSchema<'a> {
    fn from(resume: &'a Resume) -> Self {
        Self {
            context: "http://schema.org",
            kind: "Person",
            name: &resume.name,
            job_title: &resume.title,
            email: &resume.contact.email,
            telephone: &resume.contact.phone,
            url: &resume.contact.linkedin,
            address: PostalAddress {
                kind: "PostalAddress",
                locality: &resume.contact.location,
            },
        }
    }
}

impl PersonSchema<'_> {
    /// JSON body for a `<script type="application/ld+json">` element.
    ///
    /// `</` is written as `<\/` so no value can close the script early.
    pub fn to_script_body(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }
}
