use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::BoxFuture;
use minijinja::{Environment, context, path_loader};
use sharecard_post::{ImageMerger, ImageRef, MessageSegment, PassthroughMerger, Post};
use sharecard_webshot::{PageFactory, PageParams, Viewport};
use tracing::debug;

use crate::card::PopinPartyCard;
use crate::embed::embed_svg_as_data_url;
use crate::errors::ThemeError;
use crate::normalize;

const TEMPLATE_NAME: &str = "popinparty.html.jinja";
const LOGO_FILE: &str = "logo.svg";

const CARD_WIDTH: u32 = 450;
const BASE_HEIGHT: u32 = 600;
const HEIGHT_PER_IMAGE: u32 = 50;
const RETWEET_HEIGHT: u32 = 150;
const MAX_HEIGHT: u32 = 1200;
const DEVICE_SCALE_FACTOR: f64 = 2.0;

/// Settle wait before capture, for layout/paint of inlined resources.
const SETTLE_MILLIS: u64 = 200;
const JPEG_QUALITY: u32 = 90;

/// A card theme: renders one post into outbound message segments.
pub trait Theme: Send + Sync {
    fn name(&self) -> &str;

    fn needs_browser(&self) -> bool {
        false
    }

    fn render<'a>(
        &'a self,
        post: &'a Post,
    ) -> BoxFuture<'a, Result<Vec<MessageSegment>, ThemeError>>;
}

/// The PopinParty share-card theme.
///
/// Holds no per-render state; concurrent renders are independent pipeline
/// runs sharing only the page factory.
pub struct PopinPartyTheme {
    template_dir: PathBuf,
    merger: Arc<dyn ImageMerger>,
    pages: Arc<dyn PageFactory>,
}

impl PopinPartyTheme {
    pub fn new(pages: Arc<dyn PageFactory>) -> Self {
        Self {
            template_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates"),
            merger: Arc::new(PassthroughMerger),
            pages,
        }
    }

    /// Replace the default passthrough merger.
    pub fn with_merger(mut self, merger: Arc<dyn ImageMerger>) -> Self {
        self.merger = merger;
        self
    }

    /// Point the theme at a different template directory.
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = dir.into();
        self
    }

    /// Normalize a post into the card schema plus compositing images.
    pub async fn parse(
        &self,
        post: &Post,
    ) -> Result<(PopinPartyCard, Vec<ImageRef>), ThemeError> {
        normalize::parse(post, self.merger.as_ref()).await
    }

    async fn render_card(&self, post: &Post) -> Result<Vec<MessageSegment>, ThemeError> {
        let (card, _composite_images) = self.parse(post).await?;

        // Decorative asset: a missing logo embeds as "" rather than failing.
        let logo = embed_svg_as_data_url(&self.template_dir.join(LOGO_FILE)).await;

        let html =
            render_markup(&self.template_dir, &card, &logo).map_err(ThemeError::Render)?;

        let viewport = viewport_for(&card);
        debug!(
            width = viewport.width,
            height = viewport.height,
            "rendering card screenshot"
        );
        let params = PageParams {
            device_scale_factor: DEVICE_SCALE_FACTOR,
            viewport,
            base_url: directory_uri(&self.template_dir),
        };

        let screenshot = async {
            let mut page = self.pages.new_page(params).await?;
            page.goto_blank().await?;
            page.set_content(html).await?;
            page.wait_for_timeout(SETTLE_MILLIS).await?;
            page.screenshot_jpeg(JPEG_QUALITY).await
            // page drops here, releasing the browser target on every path
        }
        .await
        .map_err(ThemeError::Render)?;

        Ok(vec![MessageSegment::Image(screenshot)])
    }
}

impl Theme for PopinPartyTheme {
    fn name(&self) -> &str {
        "popinparty"
    }

    fn needs_browser(&self) -> bool {
        true
    }

    fn render<'a>(
        &'a self,
        post: &'a Post,
    ) -> BoxFuture<'a, Result<Vec<MessageSegment>, ThemeError>> {
        Box::pin(self.render_card(post))
    }
}

/// Viewport sizing: a fixed width and a content-driven height.
///
/// Height grows 50 units per content image (repost images excluded) plus a
/// flat 150 when a repost block is present, clamped to 1200.
pub fn viewport_for(card: &PopinPartyCard) -> Viewport {
    let mut height = BASE_HEIGHT + HEIGHT_PER_IMAGE * card.content.images.len() as u32;
    if card.retweet.is_some() {
        height += RETWEET_HEIGHT;
    }
    Viewport {
        width: CARD_WIDTH,
        height: height.min(MAX_HEIGHT),
    }
}

fn render_markup(
    template_dir: &Path,
    card: &PopinPartyCard,
    logo: &str,
) -> anyhow::Result<String> {
    let mut env = Environment::new();
    env.set_loader(path_loader(template_dir));
    let template = env.get_template(TEMPLATE_NAME)?;
    let html = template.render(context! { card => card, logo => logo })?;
    Ok(html)
}

fn directory_uri(dir: &Path) -> Option<String> {
    url::Url::from_directory_path(dir)
        .ok()
        .map(|uri| uri.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Content, Retweet, UserInfo};

    fn card_with(images: usize, retweet: bool) -> PopinPartyCard {
        PopinPartyCard {
            user: UserInfo {
                name: "A".into(),
                desc: None,
                avatar: None,
            },
            content: Content {
                text: "hello".into(),
                images: (0..images).map(|i| format!("img-{i}")).collect(),
                title: None,
            },
            retweet: retweet.then(Retweet::default),
            qr_code: String::new(),
            timestamp: "2023-11-14 22:13:20".into(),
            platform: "weibo".into(),
        }
    }

    #[test]
    fn base_height_without_images() {
        let viewport = viewport_for(&card_with(0, false));
        assert_eq!(viewport.width, 450);
        assert_eq!(viewport.height, 600);
    }

    #[test]
    fn height_grows_per_content_image() {
        assert_eq!(viewport_for(&card_with(3, false)).height, 750);
    }

    #[test]
    fn height_clamps_at_1200() {
        assert_eq!(viewport_for(&card_with(20, false)).height, 1200);
    }

    #[test]
    fn retweet_adds_flat_bonus() {
        assert_eq!(viewport_for(&card_with(0, true)).height, 750);
        assert_eq!(viewport_for(&card_with(3, true)).height, 900);
    }
}
