//! Article loading, contact form and lightbox state

use crate::content::articles::feed_url;
use crate::content::{ArticleListView, ArticleView, ContactMessage, ContactStatus, FeedResponse, RelayPayload};
use crate::error::{ContactError, ContentError};
use crate::router::RequestToken;
use crate::window::WindowKind;
use super::DesktopEngine;

/// A feed fetch the page should perform
#[derive(Clone, Debug, PartialEq)]
pub struct ArticleRequest {
    pub token: RequestToken,
    /// Proxy URL to GET
    pub url: String,
    /// Title keyword of the article to feature, if this view features one
    pub keyword: Option<String>,
}

/// A relay POST the page should perform
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub endpoint: String,
    /// JSON body
    pub body: String,
}

impl DesktopEngine {
    /// Start loading the article feed for the current view
    ///
    /// Inside a case study the featured article is the one matching that
    /// project's keyword (none if it has no article); elsewhere the
    /// configured keyword is used. Returns `None` if the feed URL is
    /// invalid, in which case the panels already show the failure.
    pub fn begin_article_load(&mut self) -> Option<ArticleRequest> {
        self.article_load_due = false;
        let keyword = self.featured_keyword();
        let feed = &self.config.feed;
        let url = match feed_url(&feed.endpoint, &feed.source) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(error = %e, "cannot build feed url");
                if keyword.is_some() {
                    self.article = ArticleView::failed(&feed.profile_link, &e);
                }
                self.article_list = ArticleListView::Failed(e.to_string());
                self.article_keyword = keyword;
                self.article_request = None;
                return None;
            }
        };

        let token = self.router.begin_request();
        self.article = match keyword {
            Some(_) => ArticleView::Loading,
            None => ArticleView::Idle,
        };
        self.article_keyword = keyword.clone();
        self.article_list = ArticleListView::Loading;

        let request = ArticleRequest {
            token,
            url: url.into(),
            keyword,
        };
        self.article_request = Some(request.clone());
        Some(request)
    }

    /// Feed load the current view still needs, if any
    ///
    /// Set when the open case study changes to one with an article, or when
    /// the Articles window opens on a panel that was never loaded. Taking it
    /// starts the load.
    pub fn take_article_load(&mut self) -> Option<ArticleRequest> {
        if !self.article_load_due {
            return None;
        }
        self.begin_article_load()
    }

    /// Apply a finished feed fetch
    ///
    /// Only the outstanding request is applied; a newer load replaces it.
    /// The articles list does not depend on the view and is always filled.
    /// The featured article is set only while the view still features the
    /// requested keyword. Returns `true` if applied.
    pub fn complete_article_load(&mut self, token: &RequestToken, body: Result<String, ContentError>) -> bool {
        let request = match self.article_request.take() {
            Some(request) if &request.token == token => request,
            other => {
                self.article_request = other;
                tracing::debug!(case_study = ?token.case_study(), "dropping superseded article response");
                return false;
            }
        };

        let feed = body.and_then(|body| FeedResponse::from_json(&body));
        self.article_list = ArticleListView::from_feed(feed.clone());

        let featured = self.router.is_current(token) || self.featured_keyword() == request.keyword;
        match request.keyword.as_deref() {
            Some(keyword) if featured => {
                self.article = ArticleView::from_feed(feed, keyword, &self.config.feed.profile_link, &self.rules);
            }
            _ => tracing::debug!(case_study = ?token.case_study(), "article response applied to the list only"),
        }
        true
    }

    /// Featured article state
    pub fn article(&self) -> &ArticleView {
        &self.article
    }

    /// Articles list state
    pub fn article_list(&self) -> &ArticleListView {
        &self.article_list
    }

    fn featured_keyword(&self) -> Option<String> {
        match self.router.state().case_study_id() {
            Some(id) => self.config.case_studies.keyword_for(id).map(str::to_string),
            None => Some(self.config.feed.keyword.clone()),
        }
    }

    /// Bring the article panels in line with the current view
    ///
    /// A case study with an article, or an open Articles window, schedules a
    /// load when the featured keyword changed; otherwise the featured panel
    /// goes idle.
    pub(crate) fn refresh_featured_article(&mut self) {
        let articles_open = self.windows.find_by_kind(&WindowKind::Articles).is_some();
        if articles_open && self.article_request.is_none() && self.article_list == ArticleListView::Loading {
            self.article_load_due = true;
        }

        let wanted = self.featured_keyword();
        if wanted == self.article_keyword {
            return;
        }
        let shown = self.router.state().case_study_id().is_some() || articles_open;
        if wanted.is_some() && shown {
            self.article = ArticleView::Loading;
            self.article_load_due = true;
        } else {
            self.article = ArticleView::Idle;
            self.article_keyword = None;
        }
    }

    /// Validate a contact message and build the relay request
    ///
    /// Only one message may be in flight. Validation failures are shown in
    /// the status line as well as returned.
    pub fn begin_contact(&mut self, message: &ContactMessage) -> Result<ContactSubmission, ContactError> {
        if self.contact.is_sending() {
            return Err(ContactError::Busy);
        }

        let submission = self.build_submission(message);
        match &submission {
            Ok(_) => self.contact = ContactStatus::Sending,
            Err(e) => self.contact = ContactStatus::Failed(e.to_string()),
        }
        submission
    }

    fn build_submission(&self, message: &ContactMessage) -> Result<ContactSubmission, ContactError> {
        let relay = &self.config.relay;
        let payload = RelayPayload::build(relay, &self.config.owner_name, message)?;
        if !relay.is_configured() {
            return Err(ContactError::NotConfigured);
        }
        Ok(ContactSubmission {
            endpoint: relay.endpoint.clone(),
            body: payload.to_json()?,
        })
    }

    /// Apply the relay's answer
    pub fn complete_contact(&mut self, result: Result<(), ContactError>) {
        if !self.contact.is_sending() {
            return;
        }
        if let Err(e) = &result {
            tracing::warn!(error = %e, "contact message failed");
        }
        self.contact = ContactStatus::from_result(result);
    }

    /// Clear the status line, e.g. when the contact window reopens
    pub fn reset_contact(&mut self) {
        if !self.contact.is_sending() {
            self.contact = ContactStatus::Idle;
        }
    }

    /// Contact status line
    pub fn contact_status(&self) -> &ContactStatus {
        &self.contact
    }

    /// Show an image full-size
    pub fn open_lightbox(&mut self, src: &str) {
        self.lightbox = Some(src.to_string());
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::config::SiteConfig;
    use crate::engine::tests::engine_at;
    use crate::testing::MockPlatform;
    use pretty_assertions::assert_eq;

    const FEED: &str = r#"{
        "status": "ok",
        "items": [
            { "title": "Notes on Rust", "link": "https://medium.com/@folio/rust", "content": "<p>rust</p>" },
            { "title": "Building Savvo", "link": "https://medium.com/@folio/savvo", "content": "<h3>Savvo</h3>" }
        ]
    }"#;

    fn configured() -> (DesktopEngine, Rc<MockPlatform>) {
        let mut config = SiteConfig::default();
        config.relay.service_id = "svc".into();
        config.relay.template_id = "tpl".into();
        config.relay.user_id = "pub".into();
        let platform = Rc::new(MockPlatform::new());
        let mut engine = DesktopEngine::new(config, platform.clone()).unwrap();
        engine.init(1440.0, 900.0);
        (engine, platform)
    }

    #[test]
    fn test_article_load_applies_current_response() {
        let (mut engine, _) = engine_at("");
        let request = engine.begin_article_load().unwrap();
        assert!(request.url.starts_with("https://api.rss2json.com/v1/api.json?rss_url="));
        assert_eq!(request.keyword.as_deref(), Some("savvo"));
        assert!(engine.article().is_loading());

        assert!(engine.complete_article_load(&request.token, Ok(FEED.to_string())));
        match engine.article() {
            ArticleView::Ready { title, .. } => assert_eq!(title, "Building Savvo"),
            other => panic!("expected ready, got {other:?}"),
        }
        assert!(matches!(engine.article_list(), ArticleListView::Ready(rows) if rows.len() == 2));
    }

    #[test]
    fn test_stale_article_response_dropped() {
        let (mut engine, _) = engine_at("");
        engine.select_case_study("savvo-sommelier");
        let stale = engine.begin_article_load().unwrap();

        engine.select_case_study("transit-pulse");
        let fresh = engine.begin_article_load().unwrap();

        assert_eq!(fresh.keyword, None);

        assert!(!engine.complete_article_load(&stale.token, Ok(FEED.to_string())));
        assert!(engine.article().is_idle());

        assert!(engine.complete_article_load(&fresh.token, Ok(r#"{"status":"ok","items":[]}"#.to_string())));
        assert!(engine.article().is_idle());
        assert_eq!(engine.article_list(), &ArticleListView::Ready(vec![]));
    }

    #[test]
    fn test_article_list_survives_opening_gallery() {
        let (mut engine, _) = engine_at("");
        engine.open_window(WindowKind::Articles, "");
        let request = engine.take_article_load().unwrap();
        engine.open_window(WindowKind::Projects, "");

        assert!(engine.complete_article_load(&request.token, Ok(FEED.to_string())));
        assert!(matches!(engine.article_list(), ArticleListView::Ready(rows) if rows.len() == 2));
        assert!(engine.article().is_ready());
    }

    #[test]
    fn test_list_filled_after_leaving_for_case_study_without_article() {
        let (mut engine, _) = engine_at("");
        engine.open_window(WindowKind::Articles, "");
        let request = engine.take_article_load().unwrap();
        engine.select_case_study("transit-pulse");
        assert!(engine.take_article_load().is_none());

        assert!(engine.complete_article_load(&request.token, Ok(FEED.to_string())));
        assert!(matches!(engine.article_list(), ArticleListView::Ready(_)));
        assert!(engine.article().is_idle());
    }

    #[test]
    fn test_newer_load_supersedes_older_in_same_view() {
        let (mut engine, _) = engine_at("");
        let older = engine.begin_article_load().unwrap();
        let newer = engine.begin_article_load().unwrap();
        assert_ne!(older.token, newer.token);

        assert!(!engine.complete_article_load(&older.token, Ok(FEED.to_string())));
        assert!(engine.article().is_loading());
        assert!(engine.complete_article_load(&newer.token, Ok(FEED.to_string())));
        assert!(engine.article().is_ready());
    }

    #[test]
    fn test_article_failure_offers_profile_link() {
        let (mut engine, _) = engine_at("");
        let request = engine.begin_article_load().unwrap();
        engine.complete_article_load(&request.token, Err(ContentError::HttpStatus(503)));
        assert_eq!(
            engine.article(),
            &ArticleView::Failed {
                external_link: "https://medium.com/@folio".into(),
                reason: "feed request failed with HTTP 503".into(),
            }
        );
        assert!(!engine.complete_article_load(&request.token, Ok(FEED.to_string())));
    }

    #[test]
    fn test_bad_feed_endpoint() {
        let mut config = SiteConfig::default();
        config.feed.endpoint = "::nope".into();
        let mut engine = DesktopEngine::new(config, Rc::new(MockPlatform::new())).unwrap();
        assert!(engine.begin_article_load().is_none());
        assert!(matches!(engine.article(), ArticleView::Failed { .. }));
    }

    #[test]
    fn test_contact_lifecycle() {
        let (mut engine, _) = configured();
        let message = ContactMessage::new("Ada", "ada@example.com", "Hello");

        let submission = engine.begin_contact(&message).unwrap();
        assert_eq!(submission.endpoint, "https://api.emailjs.com/api/v1.0/email/send");
        assert!(submission.body.contains(r#""to_name":"Folio""#));
        assert_eq!(engine.contact_status(), &ContactStatus::Sending);
        assert_eq!(engine.begin_contact(&message), Err(ContactError::Busy));

        engine.complete_contact(Ok(()));
        assert_eq!(engine.contact_status(), &ContactStatus::Sent);

        engine.reset_contact();
        assert_eq!(engine.contact_status(), &ContactStatus::Idle);
    }

    #[test]
    fn test_contact_failure_and_validation() {
        let (mut engine, _) = configured();
        let err = engine.begin_contact(&ContactMessage::new("", "x", "")).unwrap_err();
        assert!(matches!(err, ContactError::Invalid { field: "name", .. }));
        assert!(matches!(engine.contact_status(), ContactStatus::Failed(_)));

        engine.begin_contact(&ContactMessage::new("Ada", "ada@example.com", "Hi")).unwrap();
        engine.complete_contact(Err(ContactError::Relay(400)));
        assert!(engine.contact_status().message().starts_with("Failed to send message"));
    }

    #[test]
    fn test_contact_requires_relay_config() {
        let (mut engine, _) = engine_at("");
        let err = engine.begin_contact(&ContactMessage::new("Ada", "ada@example.com", "Hi")).unwrap_err();
        assert_eq!(err, ContactError::NotConfigured);
    }

    #[test]
    fn test_lightbox() {
        let (mut engine, _) = engine_at("");
        engine.open_lightbox("big.png");
        assert_eq!(engine.snapshot().lightbox, Some("big.png"));
        engine.close_lightbox();
        assert_eq!(engine.snapshot().lightbox, None);
    }
}
