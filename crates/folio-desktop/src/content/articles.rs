//! Article feed model and lookup
//!
//! The articles window reads a blog's RSS feed through a feed-to-JSON proxy.
//! This module owns the response model, the keyword lookup for the featured
//! article, and the view states the page renders.

use serde::{Deserialize, Serialize};
use url::Url;

use super::rewrite::{rewrite_article_html, RuleList};
use crate::error::ContentError;

/// Status string the proxy uses for a good response
pub const FEED_OK: &str = "ok";

/// Maximum excerpt length in characters
pub const EXCERPT_CHARS: usize = 160;

/// Feed-to-JSON proxy response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub status: String,
    #[serde(default)]
    pub items: Vec<FeedItem>,
}

/// One feed entry
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    #[serde(rename = "pubDate", default)]
    pub pub_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl FeedResponse {
    /// Decode a proxy response body
    pub fn from_json(body: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Fail unless the proxy reported success
    pub fn into_items(self) -> Result<Vec<FeedItem>, ContentError> {
        if self.status != FEED_OK {
            return Err(ContentError::FeedStatus(self.status));
        }
        Ok(self.items)
    }
}

/// Build the proxy URL for a feed source
pub fn feed_url(endpoint: &str, source: &str) -> Result<Url, ContentError> {
    Url::parse(source)?;
    Ok(Url::parse_with_params(endpoint, &[("rss_url", source)])?)
}

/// First item whose title contains `keyword`, ignoring case
pub fn find_article<'a>(items: &'a [FeedItem], keyword: &str) -> Option<&'a FeedItem> {
    let needle = keyword.to_lowercase();
    items
        .iter()
        .find(|item| item.title.to_lowercase().contains(&needle))
}

/// Featured article panel state
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ArticleView {
    /// Nothing to feature in this view
    #[default]
    Idle,
    Loading,
    Ready {
        title: String,
        link: String,
        html: String,
    },
    /// Feed loaded but nothing matched; offer the external profile instead
    #[serde(rename_all = "camelCase")]
    NotFound { external_link: String },
    #[serde(rename_all = "camelCase")]
    Failed {
        external_link: String,
        reason: String,
    },
}

impl ArticleView {
    /// Resolve a finished feed load into a view
    ///
    /// Every failure degrades to a state carrying `external_link` so the
    /// visitor can still reach the article.
    pub fn from_feed(
        feed: Result<FeedResponse, ContentError>,
        keyword: &str,
        external_link: &str,
        rules: &RuleList,
    ) -> Self {
        let items = match feed.and_then(FeedResponse::into_items) {
            Ok(items) => items,
            Err(e) => return Self::failed(external_link, &e),
        };
        match find_article(&items, keyword) {
            Some(item) => ArticleView::Ready {
                title: item.title.clone(),
                link: item.link.clone(),
                html: rewrite_article_html(&item.content, rules),
            },
            None => ArticleView::NotFound {
                external_link: external_link.to_string(),
            },
        }
    }

    pub fn failed(external_link: &str, error: &ContentError) -> Self {
        ArticleView::Failed {
            external_link: external_link.to_string(),
            reason: error.to_string(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ArticleView::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ArticleView::Ready { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ArticleView::Idle)
    }
}

/// One row in the articles list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub excerpt: String,
}

impl From<&FeedItem> for ArticleSummary {
    fn from(item: &FeedItem) -> Self {
        Self {
            title: item.title.clone(),
            link: item.link.clone(),
            pub_date: item.pub_date.clone(),
            excerpt: excerpt(&item.description, EXCERPT_CHARS),
        }
    }
}

/// Articles list panel state
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "items", rename_all = "camelCase")]
pub enum ArticleListView {
    #[default]
    Loading,
    Ready(Vec<ArticleSummary>),
    Failed(String),
}

impl ArticleListView {
    pub fn from_feed(feed: Result<FeedResponse, ContentError>) -> Self {
        match feed.and_then(FeedResponse::into_items) {
            Ok(items) => ArticleListView::Ready(items.iter().map(ArticleSummary::from).collect()),
            Err(e) => ArticleListView::Failed(e.to_string()),
        }
    }
}

/// Plain-text excerpt of an HTML fragment, cut on a char boundary
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let mut text = String::with_capacity(html.len().min(max_chars * 4));
    let mut in_tag = false;
    let mut last_space = true;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                if !last_space {
                    text.push(' ');
                    last_space = true;
                }
            }
            _ if in_tag => {}
            c if c.is_whitespace() => {
                if !last_space {
                    text.push(' ');
                    last_space = true;
                }
            }
            c => {
                text.push(c);
                last_space = false;
            }
        }
    }

    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
        None => text.to_string(),
    }
}
