//! Logical window kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KindError;

/// Logical category of window content, used for deduplication
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum WindowKind {
    /// Full-screen project gallery launcher
    Projects,
    /// Biography
    About,
    /// Contact form
    Contact,
    /// Article list
    Articles,
    /// Sticky note seeded at startup, exempt from dedup
    Sticky(String),
}

/// Kind without payload, used as the layout table key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KindClass {
    Projects,
    About,
    Contact,
    Articles,
    Sticky,
}

impl WindowKind {
    /// Sticky notes may coexist; every other kind is unique
    #[inline]
    pub fn is_sticky(&self) -> bool {
        matches!(self, WindowKind::Sticky(_))
    }

    /// Layout key for this kind
    pub fn class(&self) -> KindClass {
        match self {
            WindowKind::Projects => KindClass::Projects,
            WindowKind::About => KindClass::About,
            WindowKind::Contact => KindClass::Contact,
            WindowKind::Articles => KindClass::Articles,
            WindowKind::Sticky(_) => KindClass::Sticky,
        }
    }

    /// Prefix for window ids of this kind
    pub fn id_prefix(&self) -> String {
        match self {
            WindowKind::Sticky(name) => format!("sticky-{}", name),
            other => other.title().to_string(),
        }
    }

    /// Human-readable title for the window chrome
    pub fn title(&self) -> &str {
        match self {
            WindowKind::Projects => "Projects",
            WindowKind::About => "About",
            WindowKind::Contact => "Contact",
            WindowKind::Articles => "Articles",
            WindowKind::Sticky(name) => name,
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowKind::Sticky(name) => write!(f, "sticky:{}", name),
            other => f.write_str(other.title()),
        }
    }
}

impl FromStr for WindowKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(name) = s.strip_prefix("sticky:") {
            if name.is_empty() {
                return Err(KindError::Unknown(s.to_string()));
            }
            return Ok(WindowKind::Sticky(name.to_string()));
        }

        match s.to_ascii_lowercase().as_str() {
            "projects" => Ok(WindowKind::Projects),
            "about" => Ok(WindowKind::About),
            "contact" => Ok(WindowKind::Contact),
            "articles" => Ok(WindowKind::Articles),
            _ => Err(KindError::Unknown(s.to_string())),
        }
    }
}

impl From<WindowKind> for String {
    fn from(kind: WindowKind) -> Self {
        kind.to_string()
    }
}

impl TryFrom<String> for WindowKind {
    type Error = KindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
