//! Navigation state for desktop/gallery/case-study views

use serde::Serialize;

use super::Route;

/// The view currently shown
///
/// - **Desktop**: icons and floating windows
/// - **ProjectGallery**: full-screen grid of case studies
/// - **CaseStudy**: one project's detail page, over the gallery
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "id", rename_all = "camelCase")]
pub enum NavigationState {
    /// Desktop view (initial)
    #[default]
    Desktop,
    /// Full-screen project list
    ProjectGallery,
    /// Case study addressed by an opaque id
    CaseStudy(String),
}

impl NavigationState {
    /// Check if the desktop is showing
    #[inline]
    pub fn is_desktop(&self) -> bool {
        matches!(self, NavigationState::Desktop)
    }

    /// Gallery is open, possibly under a case study
    #[inline]
    pub fn is_gallery_open(&self) -> bool {
        !self.is_desktop()
    }

    /// Get the case study id if one is open
    pub fn case_study_id(&self) -> Option<&str> {
        match self {
            NavigationState::CaseStudy(id) => Some(id),
            _ => None,
        }
    }

    /// Fragment mirroring this state
    pub fn fragment(&self) -> String {
        match self {
            NavigationState::CaseStudy(id) => Route::CaseStudy(id.clone()).to_fragment(),
            _ => Route::Root.to_fragment(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_state_default() {
        let state = NavigationState::default();
        assert!(state.is_desktop());
        assert!(!state.is_gallery_open());
        assert_eq!(state.case_study_id(), None);
    }

    #[test]
    fn test_case_study_state() {
        let state = NavigationState::CaseStudy("savvo-sommelier".to_string());
        assert!(state.is_gallery_open());
        assert_eq!(state.case_study_id(), Some("savvo-sommelier"));
        assert_eq!(state.fragment(), "#/projects/savvo-sommelier");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(NavigationState::CaseStudy("x".to_string())).unwrap();
        assert_eq!(json["view"], "caseStudy");
        assert_eq!(json["id"], "x");

        let json = serde_json::to_value(NavigationState::ProjectGallery).unwrap();
        assert_eq!(json["view"], "projectGallery");
    }
}
