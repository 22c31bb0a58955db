use futures::future::BoxFuture;
use reqwest::Client;

use crate::image_ref::ImageRef;

/// Collaborator that may tile a set of post images into fewer composites.
///
/// The merge policy (count, dimensions, uniformity) belongs entirely to the
/// implementation; themes only consult the predicate and delegate.
pub trait ImageMerger: Send + Sync {
    /// Whether this set of images qualifies for merging.
    fn is_mergeable(&self, images: &[ImageRef]) -> bool;

    /// Merge the images into a (possibly smaller) ordered set. `client` is
    /// available for fetching `Url` members.
    fn merge<'a>(
        &'a self,
        images: Vec<ImageRef>,
        client: &'a Client,
    ) -> BoxFuture<'a, anyhow::Result<Vec<ImageRef>>>;
}

/// Default merger that never merges anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughMerger;

impl ImageMerger for PassthroughMerger {
    fn is_mergeable(&self, _images: &[ImageRef]) -> bool {
        false
    }

    fn merge<'a>(
        &'a self,
        images: Vec<ImageRef>,
        _client: &'a Client,
    ) -> BoxFuture<'a, anyhow::Result<Vec<ImageRef>>> {
        Box::pin(async move { Ok(images) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passthrough_never_merges() {
        let merger = PassthroughMerger;
        let images = vec![ImageRef::from("a"), ImageRef::from("b")];
        assert!(!merger.is_mergeable(&images));
        let out = merger
            .merge(images.clone(), &Client::new())
            .await
            .expect("passthrough merge");
        assert_eq!(out, images);
    }
}
