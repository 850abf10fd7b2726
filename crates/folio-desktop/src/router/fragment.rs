//! Location fragment contract
//!
//! `#/` means no case study is open, `#/projects/<id>` addresses one case
//! study. Every other fragment belongs to someone else and is ignored.

/// Fragment for the desktop/gallery boundary
pub const ROOT_FRAGMENT: &str = "#/";

/// Prefix of case-study fragments
pub const PROJECTS_PREFIX: &str = "#/projects/";

/// A fragment the router understands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Empty, `#` or `#/`: no case study open
    Root,
    /// `#/projects/<id>`
    CaseStudy(String),
}

impl Route {
    /// Parse a location fragment, `None` for fragments the router ignores
    pub fn parse(fragment: &str) -> Option<Route> {
        match fragment {
            "" | "#" | ROOT_FRAGMENT => Some(Route::Root),
            _ => {
                let id = fragment.strip_prefix(PROJECTS_PREFIX)?.trim_end_matches('/');
                if id.is_empty() {
                    None
                } else {
                    Some(Route::CaseStudy(id.to_string()))
                }
            }
        }
    }

    /// Fragment that addresses this route
    pub fn to_fragment(&self) -> String {
        match self {
            Route::Root => ROOT_FRAGMENT.to_string(),
            Route::CaseStudy(id) => format!("{}{}", PROJECTS_PREFIX, id),
        }
    }
}
