use std::path::PathBuf;

use bytes::Bytes;

/// An image-like value as collectors deliver it.
///
/// Only `Url` is ready for display as-is; the other variants are transient
/// raw forms that a theme resolves into display references during
/// normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageRef {
    /// An external URL usable directly inside markup.
    Url(String),
    /// Raw image bytes, typically a downloaded body.
    Bytes(Vec<u8>),
    /// A path to an image file on local disk.
    Path(PathBuf),
    /// An in-memory buffer shared with the collector.
    Buffer(Bytes),
}

impl ImageRef {
    pub fn is_url(&self) -> bool {
        matches!(self, ImageRef::Url(_))
    }

    pub fn as_url(&self) -> Option<&str> {
        match self {
            ImageRef::Url(url) => Some(url),
            _ => None,
        }
    }
}

impl From<String> for ImageRef {
    fn from(url: String) -> Self {
        ImageRef::Url(url)
    }
}

impl From<&str> for ImageRef {
    fn from(url: &str) -> Self {
        ImageRef::Url(url.to_string())
    }
}

impl From<Vec<u8>> for ImageRef {
    fn from(bytes: Vec<u8>) -> Self {
        ImageRef::Bytes(bytes)
    }
}

impl From<PathBuf> for ImageRef {
    fn from(path: PathBuf) -> Self {
        ImageRef::Path(path)
    }
}

impl From<Bytes> for ImageRef {
    fn from(buffer: Bytes) -> Self {
        ImageRef::Buffer(buffer)
    }
}
