//! Shared test utilities for the danlann test suite.
//!
//! Builds sessions from inline album text and provides lookups that panic
//! with a clear message on a miss.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let session = interpret("/a; A\n/a/b\n/a/b; B\nphoto\n");
//! assert_eq!(root_dirs(session.gallery()), vec!["a"]);
//! let b = find_album(session.gallery(), "a/b");
//! assert_eq!(photo_names(b), vec!["photo"]);
//! ```

use crate::load::load_str;
use crate::model::{Album, Gallery};
use crate::session::ParserSession;

/// Empty session for a gallery titled `title` with description `desc`.
pub fn new_session() -> ParserSession {
    ParserSession::new(Gallery::new("title", "desc"))
}

/// Interpret album text into a fresh session. Panics on per-line errors;
/// the consistency check is left to the test.
pub fn interpret(text: &str) -> ParserSession {
    let mut session = new_session();
    load_str(&mut session, "test", text).unwrap_or_else(|e| panic!("interpret failed: {e}"));
    session
}

/// Album text for a chain `a0 > a1 > ... > a{depth-1}` with one photo at
/// the bottom.
pub fn deep_chain(depth: usize) -> String {
    let mut text = String::from("/a0; A\n");
    for i in 1..depth {
        text.push_str(&format!("/a{i}\n/a{i}; A\n"));
    }
    text.push_str("photo\n");
    text
}

/// Find an album by dir. Panics if not found.
pub fn find_album<'a>(gallery: &'a Gallery, dir: &str) -> &'a Album {
    let id = gallery.find(dir).unwrap_or_else(|| {
        let dirs: Vec<&str> = gallery.albums().map(|(_, a)| a.dir.as_str()).collect();
        panic!("album '{dir}' not found. Available: {dirs:?}")
    });
    gallery.album(id)
}

/// Dirs of the root albums, in order.
pub fn root_dirs(gallery: &Gallery) -> Vec<&str> {
    gallery
        .subalbums()
        .iter()
        .map(|&id| gallery.album(id).dir.as_str())
        .collect()
}

/// Dirs of an album's subalbums, in order.
pub fn subalbum_dirs<'a>(gallery: &'a Gallery, album: &Album) -> Vec<&'a str> {
    album
        .subalbums
        .iter()
        .map(|&id| gallery.album(id).dir.as_str())
        .collect()
}

/// Names of an album's photos, in order.
pub fn photo_names(album: &Album) -> Vec<&str> {
    album.photos.iter().map(|p| p.name.as_str()).collect()
}
