//! Site configuration
//!
//! The page hands the controller a JSON document at startup. Every field has
//! a default, so `{}` is a valid config.

use serde::{Deserialize, Serialize};

use crate::content::CaseStudyCatalog;
use crate::error::ConfigError;
use crate::math::Vec2;
use crate::window::layout::MOBILE_BREAKPOINT;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Shown in window titles and used as the contact recipient name
    pub owner_name: String,
    pub feed: FeedConfig,
    pub relay: RelayConfig,
    /// Viewport width below which mobile layout rules apply
    pub mobile_breakpoint: f32,
    pub sticky_notes: Vec<StickyNote>,
    pub case_studies: CaseStudyCatalog,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Folio".to_string(),
            feed: FeedConfig::default(),
            relay: RelayConfig::default(),
            mobile_breakpoint: MOBILE_BREAKPOINT,
            sticky_notes: vec![StickyNote::new(
                "welcome",
                "Hi! Double-click an icon to open it. Windows can be dragged around.",
            )],
            case_studies: CaseStudyCatalog::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        if !config.mobile_breakpoint.is_finite() || config.mobile_breakpoint < 0.0 {
            return Err(ConfigError::Parse(format!(
                "mobile breakpoint must be a non-negative number, got {}",
                config.mobile_breakpoint
            )));
        }
        Ok(config)
    }
}

/// Where articles come from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedConfig {
    /// Feed-to-JSON proxy endpoint
    pub endpoint: String,
    /// RSS feed URL passed to the proxy
    pub source: String,
    /// Fallback link when the feed cannot be shown
    pub profile_link: String,
    /// Title keyword of the featured article
    pub keyword: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.rss2json.com/v1/api.json".to_string(),
            source: "https://medium.com/feed/@folio".to_string(),
            profile_link: "https://medium.com/@folio".to_string(),
            keyword: "savvo".to_string(),
        }
    }
}

/// E-mail relay account
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    /// Relay browser SDK, injected at startup when set
    pub sdk_url: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: String::new(),
            template_id: String::new(),
            user_id: String::new(),
            sdk_url: None,
        }
    }
}

impl RelayConfig {
    /// Sending is possible only with a full set of ids
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
            && !self.service_id.is_empty()
            && !self.template_id.is_empty()
            && !self.user_id.is_empty()
    }
}

/// A note seeded onto the desktop at startup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickyNote {
    pub name: String,
    pub text: String,
    #[serde(default)]
    pub position: Option<Vec2>,
}

impl StickyNote {
    pub fn new(name: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            text: text.to_string(),
            position: None,
        }
    }
}
