//! Content adapters
//!
//! Article feed lookup and HTML rewriting, contact message relay payloads,
//! and the case-study catalog. All pure data in, data out; the network
//! calls live in the wasm layer.

pub mod articles;
pub mod contact;
pub mod projects;
pub mod rewrite;

pub use articles::{ArticleListView, ArticleSummary, ArticleView, FeedItem, FeedResponse};
pub use contact::{ContactMessage, ContactStatus, RelayPayload};
pub use projects::{CaseStudy, CaseStudyCatalog};
pub use rewrite::{RewriteRule, RuleList};
