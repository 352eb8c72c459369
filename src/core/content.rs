//! Portfolio content: navigation, hero links, projects, research, experience,
//! skills, footer
//!
//! The site's text lives in `assets/portfolio.json`, embedded at build time.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::Result;

const EMBEDDED: &str = include_str!("../../assets/portfolio.json");

/// Tech pills shown per project card
pub const VISIBLE_TECH: usize = 4;

/// Scroll targets, in page order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Intro,
    Projects,
    Ongoing,
    Internship,
    TechStack,
}

impl Section {
    pub const ALL: &'static [Section] = &[
        Section::Intro,
        Section::Projects,
        Section::Ongoing,
        Section::Internship,
        Section::TechStack,
    ];

    /// DOM-style anchor id
    pub fn id(self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::Projects => "projects",
            Section::Ongoing => "ongoing",
            Section::Internship => "internship",
            Section::TechStack => "tech-stack",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.id() == id)
    }

    /// Heading shown above the section
    pub fn heading(self) -> &'static str {
        match self {
            Section::Intro => "About Me",
            Section::Projects => "Projects",
            Section::Ongoing => "Ongoing Research",
            Section::Internship => "The Path",
            Section::TechStack => "The Engine",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub id: Section,
}

/// External profile link shown under the hero
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
}

impl Project {
    /// Tags rendered as pills on the card
    pub fn visible_tech(&self) -> &[String] {
        &self.tech_stack[..self.tech_stack.len().min(VISIBLE_TECH)]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Research {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub points: Vec<String>,
}

impl Experience {
    /// "Role · Company"
    pub fn heading(&self) -> String {
        format!("{} · {}", self.role, self.company)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub nav: Vec<NavItem>,
    /// One-line academic summary under the rotating subtitle
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub social: Vec<Link>,
    pub subtitles: Vec<String>,
    pub about: Vec<String>,
    pub projects: Vec<Project>,
    pub research: Vec<Research>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    /// Copyright holder line; the year is prefixed at render time
    #[serde(default)]
    pub footer: String,
}

impl Portfolio {
    /// Content bundled with the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let portfolio: Self = serde_json::from_str(json)?;
        debug!(
            projects = portfolio.projects.len(),
            research = portfolio.research.len(),
            skills = portfolio.skills.len(),
            "Portfolio content loaded"
        );
        Ok(portfolio)
    }

    /// Nav entry for a section id, if the page links to it
    pub fn section(&self, id: &str) -> Option<&NavItem> {
        let section = Section::from_id(id)?;
        self.nav.iter().find(|item| item.id == section)
    }

    /// "© 2026 Name. All rights reserved."; year omitted when unknown
    pub fn footer_line(&self, year: Option<i32>) -> String {
        match year {
            Some(year) => format!("© {year} {}", self.footer),
            None => format!("© {}", self.footer),
        }
    }
}
