//! Core types for the album service

use serde::{Deserialize, Serialize};

/// Album identifier. Opaque: compared by string equality only.
pub type AlbumId = String;

/// A single catalog record.
///
/// Field order is the serialization order: `id`, `title`, `artist`, `price`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    pub fn new(
        id: impl Into<AlbumId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }
}
