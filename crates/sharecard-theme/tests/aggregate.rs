use futures::future::BoxFuture;
use sharecard_post::{ImageMerger, ImageRef, PassthroughMerger, Platform, Post, Repost};
use sharecard_theme::{aggregate::merge_pics, parse};

/// Merger that tiles every pair into one composite, halving the count.
struct PairwiseMerger;

impl ImageMerger for PairwiseMerger {
    fn is_mergeable(&self, images: &[ImageRef]) -> bool {
        images.len() >= 2
    }

    fn merge<'a>(
        &'a self,
        images: Vec<ImageRef>,
        _client: &'a reqwest::Client,
    ) -> BoxFuture<'a, anyhow::Result<Vec<ImageRef>>> {
        Box::pin(async move {
            let merged = images
                .chunks(2)
                .map(|pair| pair[0].clone())
                .collect::<Vec<_>>();
            Ok(merged)
        })
    }
}

fn refs(names: &[&str]) -> Vec<ImageRef> {
    names.iter().map(|name| ImageRef::from(*name)).collect()
}

#[tokio::test]
async fn passthrough_returns_input_unchanged() {
    let images = refs(&["a", "b", "c"]);
    let client = reqwest::Client::new();
    let out = merge_pics(&images, &PassthroughMerger, &client)
        .await
        .unwrap();
    assert_eq!(out, images);
}

#[tokio::test]
async fn qualifying_sets_are_merged_in_order() {
    let images = refs(&["a", "b", "c", "d"]);
    let client = reqwest::Client::new();
    let out = merge_pics(&images, &PairwiseMerger, &client).await.unwrap();
    assert_eq!(out, refs(&["a", "c"]));
}

#[tokio::test]
async fn single_image_never_qualifies() {
    let images = refs(&["only"]);
    let client = reqwest::Client::new();
    let out = merge_pics(&images, &PairwiseMerger, &client).await.unwrap();
    assert_eq!(out, images);
}

#[tokio::test]
async fn merged_compositing_count_stays_bounded() {
    let platform = Platform::new("weibo", reqwest::Client::new());
    let mut post = Post::new(platform, "hello");
    post.nickname = Some("A".to_string());
    post.images = refs(&["m1", "m2", "m3", "m4"]);
    post.repost = Some(Repost {
        nickname: Some("B".to_string()),
        title: None,
        content: "original".to_string(),
        images: refs(&["r1", "r2"]),
        avatar: None,
    });

    let (card, composite) = parse(&post, &PairwiseMerger).await.unwrap();

    // 4 main + 2 repost sources collapse to 2 + 1 composites, main first.
    assert_eq!(composite, refs(&["m1", "m3", "r1"]));
    assert!(composite.len() <= 6);

    // the display lists still enumerate every original
    assert_eq!(card.content.images.len(), 4);
    assert_eq!(card.retweet.unwrap().images.len(), 2);
}
