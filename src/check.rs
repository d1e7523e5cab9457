//! Gallery consistency check.
//!
//! Runs once, after every album file has been interpreted. Some problems
//! cannot be seen line by line: a forward reference is only unresolved if no
//! later file defines the album, and an album is only empty if nothing was
//! ever attached to it.
//!
//! Checks, in order, stopping at the first failure:
//! 1. no album is still only referenced (`pending` is empty)
//! 2. the gallery has at least one root album
//! 3. every album reachable from the roots has a subalbum or a photo

use crate::model::{AlbumId, Gallery};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("unresolved album references found: {}", .0.join(", "))]
    UnresolvedReference(Vec<String>),
    #[error("no root albums in gallery")]
    NoRootAlbum,
    #[error("album \"{0}\" contains no subalbums nor photos")]
    EmptyAlbum(String),
}

pub fn check(gallery: &Gallery, pending: &BTreeMap<String, AlbumId>) -> Result<(), CheckError> {
    if !pending.is_empty() {
        return Err(CheckError::UnresolvedReference(
            pending.keys().cloned().collect(),
        ));
    }

    if gallery.subalbums().is_empty() {
        return Err(CheckError::NoRootAlbum);
    }

    for id in gallery.reachable() {
        let album = gallery.album(id);
        if album.is_empty() {
            return Err(CheckError::EmptyAlbum(album.dir.clone()));
        }
    }

    Ok(())
}
