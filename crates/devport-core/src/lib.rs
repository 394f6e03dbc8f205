//! Page logic of the DevPort portfolio.
//!
//! The browser-independent part of the site: which section the navigation
//! highlights while scrolling, whether the reader reached the end of the
//! page, smooth navigation between sections and the static content model.
//! The frontend crate plugs a browser [`host::ScrollHost`] into
//! [`page::PageView`] and renders the [`content::Portfolio`].

pub mod content;
pub mod host;
pub mod navigator;
pub mod page;
pub mod section;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod tracker;

pub use content::{ContentError, Portfolio};
pub use host::{LayoutSource, ScrollHost, Viewport};
pub use navigator::Navigation;
pub use page::{PageState, PageView};
pub use section::{SectionBounds, SectionId};
pub use tracker::{ScrollState, ScrollTracker, TieBreak, TrackerConfig};
