//! View router state machine

use crate::platform::History;
use super::{NavigationState, RequestGuard, RequestToken, Route, ROOT_FRAGMENT};

/// Session history entries the router can account for
///
/// `entries[0]` is the page's entry point; `cursor` is the entry the browser
/// is on. A pop to a fragment that is neither the current entry nor an
/// adjacent one means the visitor left the known trail, so the trail
/// restarts there and nothing below it counts as in-app.
#[derive(Debug, Default)]
struct Trail {
    entries: Vec<String>,
    cursor: usize,
}

impl Trail {
    fn start(&mut self, fragment: &str) {
        self.entries = vec![fragment.to_string()];
        self.cursor = 0;
    }

    fn push(&mut self, fragment: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(fragment.to_string());
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, fragment: &str) {
        match self.entries.get_mut(self.cursor) {
            Some(entry) => *entry = fragment.to_string(),
            None => self.start(fragment),
        }
    }

    fn back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Follow a pop to `fragment`; ambiguous moves resolve towards the entry
    fn pop_to(&mut self, fragment: &str) {
        let at = |i: usize| self.entries.get(i).map(String::as_str) == Some(fragment);
        if self.cursor > 0 && at(self.cursor - 1) {
            self.cursor -= 1;
        } else if at(self.cursor) {
            // Pop produced by an in-app back, already accounted for
        } else if at(self.cursor + 1) {
            self.cursor += 1;
        } else {
            self.start(fragment);
        }
    }

    /// Entries pushed by the app below the current one
    fn depth(&self) -> usize {
        self.cursor
    }
}

/// Single-threaded state machine between the view and browser history
///
/// In-app transitions push history entries; closing a case study goes back
/// instead, so the browser back button and in-app back buttons agree.
/// Navigation events from the browser are authoritative and are reconciled
/// into memory without touching history.
#[derive(Debug, Default)]
pub struct ViewRouter {
    /// Current view
    state: NavigationState,
    /// State a pending in-app `history_back` should land on
    pending_back: Option<NavigationState>,
    /// Known history entries around the current one
    trail: Trail,
    /// Generation counter for async completions
    requests: RequestGuard,
}

impl ViewRouter {
    /// Create a router on the desktop view
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view
    #[inline]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Request generation, bumped whenever the open case study changes
    #[inline]
    pub fn generation(&self) -> u64 {
        self.requests.generation()
    }

    /// In-app history entries below the current one
    #[inline]
    pub fn depth(&self) -> usize {
        self.trail.depth()
    }

    /// Initialize from the fragment the page was loaded with
    pub fn load(&mut self, history: &dyn History) -> &NavigationState {
        let fragment = history.current_fragment();
        self.pending_back = None;
        self.trail.start(&fragment);
        if let Some(Route::CaseStudy(id)) = Route::parse(&fragment) {
            self.set_state(NavigationState::CaseStudy(id));
        }
        tracing::debug!(%fragment, state = ?self.state, "router loaded");
        &self.state
    }

    /// Desktop → ProjectGallery
    pub fn open_gallery(&mut self, history: &dyn History) -> bool {
        if !self.state.is_desktop() {
            return false;
        }
        self.set_state(NavigationState::ProjectGallery);
        self.push(history, ROOT_FRAGMENT);
        true
    }

    /// Back to the desktop from the gallery or a case study
    ///
    /// Always pushes `#/`; going back could leave the site when the gallery
    /// sits on the page's entry.
    pub fn close_gallery(&mut self, history: &dyn History) -> bool {
        if self.state.is_desktop() {
            return false;
        }
        self.set_state(NavigationState::Desktop);
        self.push(history, ROOT_FRAGMENT);
        true
    }

    /// Open a case study; ids are opaque and never validated
    pub fn select_case_study(&mut self, id: &str, history: &dyn History) -> bool {
        if self.state.case_study_id() == Some(id) {
            return false;
        }
        self.set_state(NavigationState::CaseStudy(id.to_string()));
        self.push(history, &Route::CaseStudy(id.to_string()).to_fragment());
        true
    }

    /// CaseStudy → ProjectGallery via the history-back primitive
    ///
    /// With no in-app entry below the case study (a deep link, or the visitor
    /// arrived from outside the known trail) its entry is replaced with `#/`
    /// instead.
    pub fn close_case_study(&mut self, history: &dyn History) -> bool {
        if self.state.case_study_id().is_none() {
            return false;
        }
        self.set_state(NavigationState::ProjectGallery);
        if self.trail.depth() > 0 {
            self.pending_back = Some(NavigationState::ProjectGallery);
            self.trail.back();
            history.history_back();
        } else {
            history.replace_fragment(ROOT_FRAGMENT);
            self.trail.replace(ROOT_FRAGMENT);
        }
        true
    }

    /// Apply a back/forward navigation event
    ///
    /// The fragment decides the state. Returns `true` if the view changed.
    pub fn reconcile(&mut self, fragment: &str) -> bool {
        let pending = self.pending_back.take();
        self.trail.pop_to(fragment);

        let next = match Route::parse(fragment) {
            Some(Route::CaseStudy(id)) => NavigationState::CaseStudy(id),
            Some(Route::Root) => match pending {
                Some(target) => target,
                None if self.state.case_study_id().is_some() => NavigationState::ProjectGallery,
                None => NavigationState::Desktop,
            },
            None => {
                tracing::trace!(%fragment, depth = self.trail.depth(), "ignoring foreign fragment");
                return false;
            }
        };

        tracing::debug!(%fragment, state = ?next, depth = self.trail.depth(), "navigation reconciled");
        self.set_state(next)
    }

    /// Issue a token for a request made in the current view
    pub fn begin_request(&mut self) -> RequestToken {
        let case_study = self.state.case_study_id().map(str::to_string);
        self.requests.issue(case_study.as_deref())
    }

    /// Whether a completion for `token` still matches the open case study
    pub fn is_current(&self, token: &RequestToken) -> bool {
        self.requests.is_current(token, self.state.case_study_id())
    }

    fn set_state(&mut self, next: NavigationState) -> bool {
        if self.state == next {
            return false;
        }
        if self.state.case_study_id() != next.case_study_id() {
            self.requests.bump();
        }
        self.state = next;
        true
    }

    fn push(&mut self, history: &dyn History, fragment: &str) {
        history.push_fragment(fragment);
        self.trail.push(fragment);
    }
}
