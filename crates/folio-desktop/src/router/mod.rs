//! View routing module
//!
//! Maps the location fragment to the desktop, the full-screen project
//! gallery, or one case study, and keeps browser history in step.

mod fragment;
mod request;
#[allow(clippy::module_inception)]
mod router;
mod state;

pub use fragment::{Route, PROJECTS_PREFIX, ROOT_FRAGMENT};
pub use request::{RequestGuard, RequestToken};
pub use router::ViewRouter;
pub use state::NavigationState;
