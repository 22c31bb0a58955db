//! Field normalization: [`Post`] → ([`PopinPartyCard`], compositing images).

use chrono::{Local, TimeZone};
use reqwest::Client;
use sharecard_post::{ImageMerger, ImageRef, Post, Repost};
use tracing::debug;

use crate::aggregate::merge_pics;
use crate::card::{Content, PopinPartyCard, Retweet, UserInfo};
use crate::embed::{convert_to_qr, web_embed_image};
use crate::errors::ThemeError;

/// Shown when the author carries no description of their own.
const DESC_FALLBACK: &str = "分享美好生活～";
/// Shown when the author carries no avatar.
const AVATAR_PLACEHOLDER: &str = "https://via.placeholder.com/100x100/FFB6C1/FFFFFF?text=头像";
/// Encoded into the QR code when the post has no source URL.
const QR_FALLBACK: &str = "No URL";
/// QR light-module color.
const QR_BACKGROUND: (u8, u8, u8) = (255, 255, 255);

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Normalize a post into the card schema plus the ordered list of images
/// destined for compositing.
///
/// The compositing list and the card's display lists may diverge in count
/// after merging; no positional correspondence between the two is promised.
///
/// The only validation failure is a missing or empty nickname; every other
/// optional field degrades to a documented fallback.
pub async fn parse(
    post: &Post,
    merger: &dyn ImageMerger,
) -> Result<(PopinPartyCard, Vec<ImageRef>), ThemeError> {
    let name = post
        .nickname
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ThemeError::unsupported("post.nickname is missing"))?;
    debug!(platform = %post.platform.name, "normalizing post");

    let avatar = match &post.avatar {
        Some(image) => web_embed_image(image).await,
        None => AVATAR_PLACEHOLDER.to_string(),
    };
    let user = UserInfo {
        name: name.to_string(),
        desc: Some(
            post.description
                .clone()
                .unwrap_or_else(|| DESC_FALLBACK.to_string()),
        ),
        avatar: Some(avatar),
    };

    let client = post.platform.client_for_static().await;

    let mut images: Vec<ImageRef> = Vec::new();
    let mut image_urls: Vec<String> = Vec::new();
    if !post.images.is_empty() {
        images = merge_pics(&post.images, merger, &client).await?;
        for image in &post.images {
            image_urls.push(web_embed_image(image).await);
        }
    }

    let content = Content {
        text: compose_text(post.title.as_deref(), &post.content),
        images: image_urls,
        title: post.title.clone(),
    };

    let retweet = match &post.repost {
        Some(repost) => Some(resolve_repost(repost, merger, &client, &mut images).await?),
        None => None,
    };

    let timestamp = post
        .timestamp
        .and_then(|secs| Local.timestamp_opt(secs, 0).single())
        .unwrap_or_else(Local::now)
        .format(TIMESTAMP_FORMAT)
        .to_string();

    let qr_code = convert_to_qr(post.url.as_deref().unwrap_or(QR_FALLBACK), QR_BACKGROUND)?;

    let card = PopinPartyCard {
        user,
        content,
        retweet,
        qr_code,
        timestamp,
        platform: post.platform.name.clone(),
    };

    Ok((card, images))
}

/// Repost fields get the same avatar, text, and display-list treatment as
/// the parent; its compositing images are appended to the outer list.
async fn resolve_repost(
    repost: &Repost,
    merger: &dyn ImageMerger,
    client: &Client,
    images: &mut Vec<ImageRef>,
) -> Result<Retweet, ThemeError> {
    let mut retweet_images = Vec::new();
    if !repost.images.is_empty() {
        let merged = merge_pics(&repost.images, merger, client).await?;
        images.extend(merged);
        for image in &repost.images {
            retweet_images.push(web_embed_image(image).await);
        }
    }

    let avatar = match &repost.avatar {
        Some(image) => Some(web_embed_image(image).await),
        None => None,
    };

    Ok(Retweet {
        author: repost.nickname.clone(),
        content: Some(compose_text(repost.title.as_deref(), &repost.content)),
        images: retweet_images,
        avatar,
    })
}

/// Prepend the title as a heading block when present.
fn compose_text(title: Option<&str>, body: &str) -> String {
    match title {
        Some(title) => format!("## {title}\n\n{body}"),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::compose_text;

    #[test]
    fn title_becomes_heading() {
        assert_eq!(compose_text(Some("news"), "body"), "## news\n\nbody");
    }

    #[test]
    fn body_alone_is_untouched() {
        assert_eq!(compose_text(None, "body"), "body");
    }
}
