//! The PopinParty share-card theme.
//!
//! Turns an upstream [`Post`](sharecard_post::Post) into a single composited
//! image card: normalize heterogeneous fields into [`PopinPartyCard`], render
//! the card template, and screenshot it through a scoped browser page.

pub mod aggregate;
pub mod card;
pub mod embed;
pub mod errors;
pub mod normalize;
pub mod theme;

pub use card::{Content, PopinPartyCard, Retweet, UserInfo};
pub use errors::ThemeError;
pub use normalize::parse;
pub use theme::{PopinPartyTheme, Theme, viewport_for};
