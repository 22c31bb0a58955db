//! Scoped headless-browser pages for card screenshots.
//!
//! Exposes a small dyn-safe seam ([`PageFactory`] / [`RenderPage`]) plus
//! [`Webshot`], the chromiumoxide-backed implementation. Pages release their
//! CDP target when dropped, so a failed or cancelled render cannot leak one.

pub mod chromium;
pub mod page;

pub use chromium::Webshot;
pub use page::{PageFactory, PageParams, RenderPage, Viewport};
