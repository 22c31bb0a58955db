use serde::{Deserialize, Serialize};

/// Outbound message segment handed back to the host dispatcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageSegment {
    Text(String),
    /// Encoded image bytes (for this workspace: JPEG screenshots).
    Image(Vec<u8>),
}

impl MessageSegment {
    pub fn text(value: impl Into<String>) -> Self {
        MessageSegment::Text(value.into())
    }

    pub fn image(bytes: impl Into<Vec<u8>>) -> Self {
        MessageSegment::Image(bytes.into())
    }
}
