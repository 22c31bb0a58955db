//! Upstream data model shared by all card themes.
//!
//! Collectors hand themes a normalized [`Post`]; themes hand back outbound
//! [`MessageSegment`]s. The image-merge step is a collaborator behind the
//! [`ImageMerger`] trait so hosts can plug in their own tiling policy.

pub mod image_ref;
pub mod merge;
pub mod post;
pub mod segment;

pub use image_ref::ImageRef;
pub use merge::{ImageMerger, PassthroughMerger};
pub use post::{Platform, Post, Repost};
pub use segment::MessageSegment;
