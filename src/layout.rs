//! Pure mapping from the resume record to the pieces the page renders.
//!
//! Components only format what these functions return, so the page outline
//! can be checked without a rendering runtime.

use chrono::{DateTime, Datelike};

use crate::content::{Contact, DocumentReference, Project, Resume};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Resume,
    Projects,
    About,
    Contact,
}

impl Section {
    /// Links shown in the header; home is reached through the name instead.
    pub const NAV: [Section; 4] = [
        Section::Projects,
        Section::Resume,
        Section::About,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Resume => "resume",
            Section::Projects => "projects",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Resume => "Resume",
            Section::Projects => "Projects",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLine {
    pub label: &'static str,
    pub text: String,
    pub href: Option<String>,
}

impl ContactLine {
    fn plain(label: &'static str, text: &str) -> Self {
        Self {
            label,
            text: text.to_string(),
            href: None,
        }
    }

    fn link(label: &'static str, text: &str, href: String) -> Self {
        Self {
            label,
            text: text.to_string(),
            href: Some(href),
        }
    }
}

/// Full contact block of the resume sidebar.
pub fn contact_lines(contact: &Contact) -> Vec<ContactLine> {
    vec![
        ContactLine::link(
            "Email",
            &contact.email,
            format!("mailto:{}", contact.email),
        ),
        ContactLine::plain("Phone", &contact.phone),
        ContactLine::plain("Location", &contact.location),
        ContactLine::link("LinkedIn", "LinkedIn", contact.linkedin.clone()),
        ContactLine::link("GitHub", "GitHub", contact.github.clone()),
    ]
}

/// The shorter list offered in the "Get in Touch" section.
pub fn reach_out_lines(contact: &Contact) -> Vec<ContactLine> {
    vec![
        ContactLine::link(
            "Email",
            &contact.email,
            format!("mailto:{}", contact.email),
        ),
        ContactLine::link("LinkedIn", &contact.linkedin, contact.linkedin.clone()),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub href: &'a str,
    pub stack: Option<String>,
}

pub fn project_cards(projects: &[Project]) -> Vec<ProjectCard<'_>> {
    projects
        .iter()
        .map(|p| ProjectCard {
            name: &p.name,
            description: &p.description,
            href: &p.link,
            stack: if p.stack.is_empty() {
                None
            } else {
                Some(p.stack.join(" • "))
            },
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvActionKind {
    OpenInNewTab,
    Download,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvAction<'a> {
    pub kind: CvActionKind,
    pub label: &'static str,
    pub href: Option<&'a DocumentReference>,
}

impl CvAction<'_> {
    /// Only the close action touches the modal state.
    pub fn changes_visibility(&self) -> bool {
        self.kind == CvActionKind::Close
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusStop {
    Action(CvActionKind),
    Viewer,
}

/// Everything the open CV modal shows: one viewer and its toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvPreview<'a> {
    pub title: &'static str,
    pub viewer: &'a DocumentReference,
    pub download_name: Option<&'a str>,
    pub actions: [CvAction<'a>; 3],
}

impl<'a> CvPreview<'a> {
    pub fn new(document: &'a DocumentReference) -> Self {
        Self {
            title: "CV Preview",
            viewer: document,
            download_name: document.file_name(),
            actions: [
                CvAction {
                    kind: CvActionKind::OpenInNewTab,
                    label: "Open in New Tab",
                    href: Some(document),
                },
                CvAction {
                    kind: CvActionKind::Download,
                    label: "Download",
                    href: Some(document),
                },
                CvAction {
                    kind: CvActionKind::Close,
                    label: "Close",
                    href: None,
                },
            ],
        }
    }

    /// Tab order inside the dialog: the toolbar, then the embedded viewer.
    pub fn focus_order(&self) -> [FocusStop; 4] {
        let [first, second, third] = &self.actions;
        [
            FocusStop::Action(first.kind),
            FocusStop::Action(second.kind),
            FocusStop::Action(third.kind),
            FocusStop::Viewer,
        ]
    }
}

pub fn page_title(resume: &Resume) -> String {
    format!("{} - Portfolio", resume.name)
}

/// Year the site was built, taken from the timestamp `build.rs` stamps in.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|d| d.year())
}

pub fn footer_line(year: Option<i32>, name: &str) -> String {
    match year {
        Some(y) => format!("© {y} {name} — Built with Rust & Leptos"),
        None => format!("© {name} — Built with Rust & Leptos"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::load_resume;

    #[test]
    fn test_section_anchors_unique() {
        let mut ids = Section::NAV.iter().map(|s| s.id()).collect::<Vec<_>>();
        ids.push(Section::Home.id());
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Section::NAV.len() + 1);
        assert_eq!(Section::About.anchor(), "#about");
        assert!(!Section::NAV.contains(&Section::Home));
    }

    #[test]
    fn test_cv_preview_single_viewer_two_links() {
        let doc = DocumentReference::new("/resume.pdf");
        let preview = CvPreview::new(&doc);

        assert_eq!(preview.viewer.as_str(), "/resume.pdf");
        let linked = preview
            .actions
            .iter()
            .filter_map(|a| a.href.map(|h| (a.kind, h.as_str())))
            .collect::<Vec<_>>();
        assert_eq!(
            linked,
            vec![
                (CvActionKind::OpenInNewTab, "/resume.pdf"),
                (CvActionKind::Download, "/resume.pdf"),
            ]
        );
        assert_eq!(preview.download_name, Some("resume.pdf"));
    }

    #[test]
    fn test_only_close_changes_visibility() {
        let doc = DocumentReference::new("/resume.pdf");
        let preview = CvPreview::new(&doc);
        let changing = preview
            .actions
            .iter()
            .filter(|a| a.changes_visibility())
            .collect::<Vec<_>>();
        assert_eq!(changing.len(), 1);
        assert_eq!(changing[0].kind, CvActionKind::Close);
        assert_eq!(changing[0].href, None);
    }

    #[test]
    fn test_focus_order_includes_viewer() {
        let doc = DocumentReference::new("/resume.pdf");
        let order = CvPreview::new(&doc).focus_order();
        assert_eq!(
            order,
            [
                FocusStop::Action(CvActionKind::OpenInNewTab),
                FocusStop::Action(CvActionKind::Download),
                FocusStop::Action(CvActionKind::Close),
                FocusStop::Viewer,
            ]
        );
    }

    #[test]
    fn test_contact_lines() {
        let resume = load_resume().expect("embedded resume should parse");
        let lines = contact_lines(&resume.contact);
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0].href.as_deref(),
            Some("mailto:feldaega17@email.com")
        );
        assert_eq!(lines[1].href, None);
        assert_eq!(lines[2].text, "Surabaya, Indonesia");

        let short = reach_out_lines(&resume.contact);
        assert_eq!(short.len(), 2);
        assert_eq!(short[1].text, resume.contact.linkedin);
    }

    #[test]
    fn test_project_cards() {
        let resume = load_resume().expect("embedded resume should parse");
        let cards = project_cards(&resume.projects);
        assert_eq!(cards.len(), resume.projects.len());
        assert_eq!(cards[2].stack.as_deref(), Some("Rust • Leptos • Tailwind"));

        let bare = vec![Project {
            name: "x".to_string(),
            description: "y".to_string(),
            link: "#".to_string(),
            stack: Vec::new(),
        }];
        assert_eq!(project_cards(&bare)[0].stack, None);
    }

    #[test]
    fn test_footer_line() {
        assert!(build_year().is_some());
        assert_eq!(
            footer_line(Some(2025), "Felda"),
            "© 2025 Felda — Built with Rust & Leptos"
        );
        assert_eq!(footer_line(None, "Felda"), "© Felda — Built with Rust & Leptos");
    }
}
