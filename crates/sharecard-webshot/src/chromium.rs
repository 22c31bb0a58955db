use std::time::Duration;

use anyhow::Result;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page, ScreenshotParams};
use futures::StreamExt;
use futures::future::BoxFuture;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::page::{PageFactory, PageParams, RenderPage};

/// Chromium session driven over CDP. One instance is shared by all renders;
/// each render acquires its own page.
pub struct Webshot {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl Webshot {
    /// Launch a local headless browser process.
    pub async fn launch() -> Result<Self> {
        let config = BrowserConfig::builder().build().map_err(anyhow::Error::msg)?;
        let (browser, handler) = Browser::launch(config).await?;
        Ok(Self::with_handler(browser, handler))
    }

    /// Connect to an already-running browser exposing a CDP endpoint.
    pub async fn connect(cdp_url: &str) -> Result<Self> {
        let (browser, handler) = Browser::connect(cdp_url).await?;
        Ok(Self::with_handler(browser, handler))
    }

    fn with_handler(browser: Browser, mut handler: chromiumoxide::Handler) -> Self {
        let handler_task = tokio::spawn(async move { while handler.next().await.is_some() {} });
        Self {
            browser,
            handler_task,
        }
    }
}

impl Drop for Webshot {
    fn drop(&mut self) {
        self.handler_task.abort();
    }
}

impl PageFactory for Webshot {
    fn new_page(&self, params: PageParams) -> BoxFuture<'_, Result<Box<dyn RenderPage>>> {
        Box::pin(async move {
            let page = self.browser.new_page("about:blank").await?;
            let metrics = SetDeviceMetricsOverrideParams::builder()
                .width(i64::from(params.viewport.width))
                .height(i64::from(params.viewport.height))
                .device_scale_factor(params.device_scale_factor)
                .mobile(false)
                .build()
                .map_err(anyhow::Error::msg)?;
            page.execute(metrics).await?;
            debug!(
                width = params.viewport.width,
                height = params.viewport.height,
                scale = params.device_scale_factor,
                "acquired browser page"
            );
            Ok(Box::new(CdpPage {
                page: Some(page),
                base_url: params.base_url,
            }) as Box<dyn RenderPage>)
        })
    }
}

struct CdpPage {
    /// `None` only after the page has been handed off to the drop-time
    /// close task.
    page: Option<Page>,
    base_url: Option<String>,
}

impl CdpPage {
    fn page(&self) -> Result<&Page> {
        self.page
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("page already released"))
    }
}

impl RenderPage for CdpPage {
    fn goto_blank(&mut self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            self.page()?.goto("about:blank").await?;
            Ok(())
        })
    }

    fn set_content(&mut self, html: String) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            let html = match &self.base_url {
                Some(base) => inject_base_href(&html, base),
                None => html,
            };
            self.page()?.set_content(html).await?;
            Ok(())
        })
    }

    fn wait_for_timeout(&mut self, millis: u64) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            tokio::time::sleep(Duration::from_millis(millis)).await;
            Ok(())
        })
    }

    fn screenshot_jpeg(&mut self, quality: u32) -> BoxFuture<'_, Result<Vec<u8>>> {
        Box::pin(async move {
            let params = ScreenshotParams::builder()
                .format(CaptureScreenshotFormat::Jpeg)
                .quality(i64::from(quality))
                .full_page(true)
                .build();
            let bytes = self.page()?.screenshot(params).await?;
            debug!(bytes = bytes.len(), "captured screenshot");
            Ok(bytes)
        })
    }
}

impl Drop for CdpPage {
    fn drop(&mut self) {
        // Close happens on a spawned task; Drop itself cannot await.
        if let Some(page) = self.page.take() {
            if let Ok(handle) = tokio::runtime::Handle::try_current() {
                handle.spawn(async move {
                    let _ = page.close().await;
                });
            }
        }
    }
}

/// Insert a `<base href>` so relative asset references resolve against the
/// template directory. CDP's `Page.setDocumentContent` offers no base-URL
/// parameter of its own.
fn inject_base_href(html: &str, base: &str) -> String {
    let tag = format!("<base href=\"{base}\">");
    if html.contains("<base") {
        return html.to_string();
    }
    match html.find("<head>") {
        Some(idx) => {
            let mut out = String::with_capacity(html.len() + tag.len());
            out.push_str(&html[..idx + "<head>".len()]);
            out.push_str(&tag);
            out.push_str(&html[idx + "<head>".len()..]);
            out
        }
        None => format!("{tag}{html}"),
    }
}
