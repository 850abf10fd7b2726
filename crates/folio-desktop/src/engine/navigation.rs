//! Gallery and case-study navigation

use super::DesktopEngine;

impl DesktopEngine {
    /// Apply a back/forward navigation to `fragment`
    ///
    /// Returns `true` if the view changed.
    pub fn navigate(&mut self, fragment: &str) -> bool {
        let changed = self.router.reconcile(fragment);
        if changed {
            self.after_view_change();
        }
        changed
    }

    /// Open a case study from the gallery (or a link anywhere)
    pub fn select_case_study(&mut self, id: &str) -> bool {
        let changed = self.router.select_case_study(id, &self.platform);
        if changed {
            self.after_view_change();
        }
        changed
    }

    /// Return from a case study to the gallery
    pub fn close_case_study(&mut self) -> bool {
        let changed = self.router.close_case_study(&self.platform);
        if changed {
            self.after_view_change();
        }
        changed
    }

    /// Return from the gallery to the desktop
    pub fn close_gallery(&mut self) -> bool {
        let changed = self.router.close_gallery(&self.platform);
        if changed {
            self.after_view_change();
        }
        changed
    }

    /// Title for the open case study, if any
    pub fn case_study_title(&self) -> Option<&str> {
        self.router
            .state()
            .case_study_id()
            .map(|id| self.config.case_studies.label_for(id))
    }

    pub(crate) fn after_view_change(&mut self) {
        self.lightbox = None;
        self.sync_projects_window();
        self.refresh_featured_article();
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::tests::engine_at;
    use crate::engine::DesktopEngine;
    use crate::platform::History;
    use crate::router::NavigationState;
    use crate::testing::MockPlatform;
    use crate::window::WindowKind;
    use pretty_assertions::assert_eq;

    fn drain(platform: &MockPlatform, engine: &mut DesktopEngine) {
        while let Some(fragment) = platform.take_navigation() {
            engine.navigate(&fragment);
        }
    }

    #[test]
    fn test_case_study_round_trip_through_history() {
        let (mut engine, platform) = engine_at("");
        engine.open_window(WindowKind::Projects, "");
        assert!(engine.select_case_study("savvo-sommelier"));
        assert_eq!(platform.current_fragment(), "#/projects/savvo-sommelier");
        assert_eq!(engine.case_study_title(), Some("Savvo Sommelier"));

        assert!(engine.close_case_study());
        assert_eq!(engine.view(), &NavigationState::ProjectGallery);
        assert_eq!(platform.back_calls(), 1);

        // The pop produced by the back call lands on the gallery too
        drain(&platform, &mut engine);
        assert_eq!(engine.view(), &NavigationState::ProjectGallery);
        assert!(engine.windows.find_by_kind(&WindowKind::Projects).is_some());
    }

    #[test]
    fn test_deep_link_close_stays_on_site() {
        let (mut engine, platform) = engine_at("#/projects/unknown-thing");
        assert_eq!(engine.case_study_title(), Some("Case Study"));
        assert!(engine.close_case_study());
        assert_eq!(platform.back_calls(), 0);
        assert_eq!(platform.replaces(), vec!["#/".to_string()]);
        assert_eq!(engine.view(), &NavigationState::ProjectGallery);
    }

    #[test]
    fn test_back_to_entry_closes_gallery_window() {
        let (mut engine, platform) = engine_at("");
        engine.open_window(WindowKind::Projects, "");
        platform.go_back();
        drain(&platform, &mut engine);
        assert_eq!(engine.view(), &NavigationState::Desktop);
        assert!(engine.windows.find_by_kind(&WindowKind::Projects).is_none());
    }

    #[test]
    fn test_forward_into_case_study_reopens_gallery_window() {
        let (mut engine, platform) = engine_at("");
        engine.open_window(WindowKind::Projects, "");
        engine.select_case_study("field-notes");
        platform.go_back();
        platform.go_back();
        drain(&platform, &mut engine);
        assert_eq!(engine.view(), &NavigationState::Desktop);
        assert!(engine.windows.find_by_kind(&WindowKind::Projects).is_none());

        platform.go_forward();
        platform.go_forward();
        drain(&platform, &mut engine);
        assert_eq!(engine.view(), &NavigationState::CaseStudy("field-notes".into()));
        assert!(engine.windows.find_by_kind(&WindowKind::Projects).is_some());
    }

    #[test]
    fn test_navigation_closes_lightbox() {
        let (mut engine, _) = engine_at("");
        engine.open_lightbox("a.png");
        engine.navigate("#/projects/x");
        assert_eq!(engine.snapshot().lightbox, None);
    }

    #[test]
    fn test_foreign_fragment_ignored() {
        let (mut engine, _) = engine_at("");
        assert!(!engine.navigate("#contact"));
        assert_eq!(engine.view(), &NavigationState::Desktop);
    }
}
