use anyhow::Result;
use futures::future::BoxFuture;

/// Logical viewport in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Configuration for one scoped page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageParams {
    pub device_scale_factor: f64,
    pub viewport: Viewport,
    /// Base URI resolved against by relative asset references in the
    /// injected document.
    pub base_url: Option<String>,
}

/// One acquired browser page. Dropping it releases the underlying target.
pub trait RenderPage: Send {
    fn goto_blank(&mut self) -> BoxFuture<'_, Result<()>>;

    fn set_content(&mut self, html: String) -> BoxFuture<'_, Result<()>>;

    /// Fixed settle wait for layout/paint of already-inlined resources.
    fn wait_for_timeout(&mut self, millis: u64) -> BoxFuture<'_, Result<()>>;

    /// Full-page JPEG capture at the given quality (0–100).
    fn screenshot_jpeg(&mut self, quality: u32) -> BoxFuture<'_, Result<Vec<u8>>>;
}

/// Factory handing out scoped [`RenderPage`]s.
pub trait PageFactory: Send + Sync {
    fn new_page(&self, params: PageParams) -> BoxFuture<'_, Result<Box<dyn RenderPage>>>;
}
