use reqwest::Client;

use crate::image_ref::ImageRef;

/// Origin platform descriptor: a display name plus the shared HTTP client
/// used for fetching static resources (images, avatars).
#[derive(Clone, Debug)]
pub struct Platform {
    pub name: String,
    client: Client,
}

impl Platform {
    pub fn new(name: impl Into<String>, client: Client) -> Self {
        Self {
            name: name.into(),
            client,
        }
    }

    /// Client for static-resource fetches. Clones share the connection pool.
    pub async fn client_for_static(&self) -> Client {
        self.client.clone()
    }
}

/// A single piece of aggregated content as collectors deliver it.
#[derive(Clone, Debug)]
pub struct Post {
    pub nickname: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<ImageRef>,
    pub title: Option<String>,
    pub content: String,
    pub images: Vec<ImageRef>,
    pub repost: Option<Repost>,
    /// Seconds since the Unix epoch.
    pub timestamp: Option<i64>,
    pub url: Option<String>,
    pub platform: Platform,
}

impl Post {
    pub fn new(platform: Platform, content: impl Into<String>) -> Self {
        Self {
            nickname: None,
            description: None,
            avatar: None,
            title: None,
            content: content.into(),
            images: Vec::new(),
            repost: None,
            timestamp: None,
            url: None,
            platform,
        }
    }
}

/// The reposted substructure of a [`Post`].
///
/// Deliberately a distinct, non-recursive type: a repost never carries a
/// nested repost of its own.
#[derive(Clone, Debug, Default)]
pub struct Repost {
    pub nickname: Option<String>,
    pub title: Option<String>,
    pub content: String,
    pub images: Vec<ImageRef>,
    pub avatar: Option<ImageRef>,
}
