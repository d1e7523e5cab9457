//! JSON manifest of a checked gallery.
//!
//! The manifest is what downstream tools (page generator, image pipeline)
//! read instead of re-parsing album files. Albums are listed flat, in
//! depth-first order from the roots; edges are album dirs. An album shared
//! by several parents is listed once and named in each parent's
//! `subalbums`.
//!
//! ```json
//! {
//!   "title": "Memory Jail",
//!   "roots": ["travel"],
//!   "albums": [
//!     { "dir": "travel", "title": "Travel", "root_path": "..",
//!       "subalbums": ["travel/japan"], "photos": [] },
//!     { "dir": "travel/japan", "title": "Japan", "root_path": "../..",
//!       "photos": [{ "name": "tokyo", "title": "Tokyo", "next": "kyoto" }, ...] }
//!   ]
//! }
//! ```

use crate::model::{AlbumId, Gallery};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Dirs of the root albums
    pub roots: Vec<String>,
    pub albums: Vec<AlbumEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumEntry {
    pub dir: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Relative path from the album directory to the gallery root
    pub root_path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subalbums: Vec<String>,
    pub photos: Vec<PhotoEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl Manifest {
    pub fn from_gallery(gallery: &Gallery) -> Self {
        let dir_of = |id: AlbumId| gallery.album(id).dir.clone();

        let albums = gallery
            .reachable()
            .into_iter()
            .map(|id| {
                let album = gallery.album(id);
                let photos = album
                    .photos
                    .iter()
                    .enumerate()
                    .map(|(i, photo)| {
                        let (previous, next) = album.photo_neighbours(i);
                        PhotoEntry {
                            name: photo.name.clone(),
                            title: photo.title.clone(),
                            description: photo.description.clone(),
                            previous: previous.map(|p| p.name.clone()),
                            next: next.map(|p| p.name.clone()),
                        }
                    })
                    .collect();
                AlbumEntry {
                    dir: album.dir.clone(),
                    title: album.title.clone(),
                    description: album.description.clone(),
                    root_path: gallery.root_path(id),
                    subalbums: album.subalbums.iter().map(|&c| dir_of(c)).collect(),
                    photos,
                }
            })
            .collect();

        Manifest {
            title: gallery.title.clone(),
            description: gallery.description.clone(),
            roots: gallery.subalbums().iter().map(|&id| dir_of(id)).collect(),
            albums,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn manifest(text: &str) -> Manifest {
        let session = interpret(text);
        Manifest::from_gallery(session.gallery())
    }

    #[test]
    fn albums_listed_depth_first() {
        let m = manifest(
            "/travel; Travel\n/travel/japan\n/travel/italy\n\
             /travel/japan; Japan\ntokyo\n\
             /travel/italy; Italy\nrome\n\
             /family; Family\nlake\n",
        );
        assert_eq!(m.roots, vec!["travel", "family"]);
        let dirs: Vec<&str> = m.albums.iter().map(|a| a.dir.as_str()).collect();
        assert_eq!(dirs, vec!["travel", "travel/japan", "travel/italy", "family"]);
        assert_eq!(m.albums[0].subalbums, vec!["travel/japan", "travel/italy"]);
        assert_eq!(m.albums[1].root_path, "../..");
    }

    #[test]
    fn photos_link_to_neighbours() {
        let m = manifest("/a; A\np1; One\np2\np3; Three; last one\n");
        let photos = &m.albums[0].photos;
        assert_eq!(photos[0].previous, None);
        assert_eq!(photos[0].next.as_deref(), Some("p2"));
        assert_eq!(photos[1].previous.as_deref(), Some("p1"));
        assert_eq!(photos[2].next, None);
        assert_eq!(photos[2].description, "last one");
    }

    #[test]
    fn shared_album_listed_once() {
        let m = manifest(
            "/root; Root\n/a\n/b\n\
             /a; A\n/shared\n\
             /b; B\n/shared\n\
             /shared; Shared\nphoto\n",
        );
        let shared = m.albums.iter().filter(|a| a.dir == "shared").count();
        assert_eq!(shared, 1);
        assert_eq!(m.albums.len(), 4);
    }

    #[test]
    fn json_skips_empty_fields() {
        let m = manifest("/a; A\nphoto\n");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["title"], "title");
        assert_eq!(json["description"], "desc");
        let album = &json["albums"][0];
        assert!(album.get("description").is_none());
        assert!(album.get("subalbums").is_none());
        let photo = &album["photos"][0];
        assert_eq!(photo["name"], "photo");
        assert!(photo.get("title").is_none());
        assert!(photo.get("next").is_none());
    }

    #[test]
    fn json_round_trips() {
        let m = manifest("/a; A; about a\n/a/b\n/a/b; B\nphoto; P\n");
        let json = serde_json::to_string_pretty(&m).unwrap();
        let back: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
