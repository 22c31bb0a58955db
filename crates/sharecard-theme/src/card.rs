use serde::Serialize;

/// Author block of the card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    /// Display name. Always non-empty once the card is built.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Display reference: original URL or embedded data URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Main content block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Content {
    /// Body text, with the title prepended as a heading when present.
    pub text: String,
    /// Display references for every source image, in source order.
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Repost block, mirroring a subset of the post fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Retweet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// The fully normalized, render-ready card.
///
/// Every image-like field holds a display reference; raw byte forms never
/// survive normalization. Built fresh per render and consumed once by the
/// template context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PopinPartyCard {
    pub user: UserInfo,
    pub content: Content,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retweet: Option<Retweet>,
    /// Embedded QR image encoding the post's source URL.
    pub qr_code: String,
    /// Local time, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    pub platform: String,
}
