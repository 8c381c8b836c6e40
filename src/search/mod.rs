// SPDX-License-Identifier: MPL-2.0
//! Photo search domain: query/paging types, the Unsplash API client, and
//! thumbnail decoding.

pub mod client;
pub mod thumbnail;
pub mod types;

pub use client::{SearchClient, DEFAULT_ENDPOINT};
pub use thumbnail::ThumbnailImage;
pub use types::{
    Pager, Photo, PhotoTile, PresetKeyword, RequestCounter, RequestId, ResultPage, PER_PAGE,
};
