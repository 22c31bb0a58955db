//! Delegation layer over the image-merge collaborator.

use reqwest::Client;
use sharecard_post::{ImageMerger, ImageRef};
use tracing::debug;

use crate::errors::ThemeError;

/// Hand a post's images to the merge collaborator when they qualify,
/// otherwise pass them through unchanged. The input is never mutated;
/// ordering is preserved within the returned group.
pub async fn merge_pics(
    images: &[ImageRef],
    merger: &dyn ImageMerger,
    client: &Client,
) -> Result<Vec<ImageRef>, ThemeError> {
    if merger.is_mergeable(images) {
        debug!(count = images.len(), "merging post images");
        let merged = merger.merge(images.to_vec(), client).await?;
        Ok(merged)
    } else {
        Ok(images.to_vec())
    }
}
