//! Image boundary: what to ask an image fetcher for.
//!
//! Loading and caching belong to the host. This module only derives the
//! request from an image-bearing [`ContentItem`] and defines the trait the
//! host's loader implements.

use crate::content::{ContentItem, ItemKind};
use serde::Serialize;

/// Target size along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Extent {
    /// Exact size in density-independent units.
    Exact(f64),
    /// Fill the available space.
    Fill,
    /// Let the image decide.
    Intrinsic,
}

/// Request handed to an [`ImageFetcher`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImageRequest {
    pub url: String,
    pub width: Extent,
    pub height: Extent,
}

impl ImageRequest {
    /// Derive a request from an item.
    ///
    /// Returns `None` for items that are not images or have no url. Full
    /// banners always fill the width; a card banner wider than
    /// `container_width` fills it instead of overflowing.
    #[must_use]
    pub fn from_item(item: &ContentItem, container_width: Option<f64>) -> Option<Self> {
        if !item.kind.is_image() {
            return None;
        }
        let url = item.url.clone()?;

        let width = match (&item.kind, item.image_width) {
            (ItemKind::FullBanner, _) => Extent::Fill,
            (_, None) => Extent::Intrinsic,
            (ItemKind::CardBanner, Some(w)) if container_width.is_some_and(|max| w > max) => {
                Extent::Fill
            }
            (_, Some(w)) => Extent::Exact(w),
        };
        let height = item.image_height.map_or(Extent::Intrinsic, Extent::Exact);

        Some(Self { url, width, height })
    }
}

/// Outcome of a fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageResource<T> {
    /// The decoded image.
    Loaded(T),
    /// Shown when the image cannot be loaded.
    Placeholder,
}

impl<T> ImageResource<T> {
    /// Whether the image loaded.
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Host-provided image loader.
pub trait ImageFetcher {
    type Image;

    /// Fetch an image, falling back to [`ImageResource::Placeholder`] on failure.
    fn fetch(&self, request: &ImageRequest) -> ImageResource<Self::Image>;
}
