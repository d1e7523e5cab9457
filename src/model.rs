//! Gallery data model.
//!
//! A [`Gallery`] owns every [`Album`] in an arena and hands out [`AlbumId`]s.
//! All structural edges (root list, `subalbums`, a photo's owning album) are
//! ids into that arena, so the placeholder created for a forward reference
//! and the album later filled in by its definition line are the same entry.
//!
//! ```text
//! Gallery
//! ├── subalbums: [AlbumId]      root albums, in discovery order
//! └── albums:    [Album]        arena, in creation order
//!     └── Album
//!         ├── subalbums: [AlbumId]
//!         └── photos:    [Photo]
//! ```
//!
//! The model does not forbid one album being listed under several parents.
//! Walkers such as [`Gallery::reachable`] visit each album once.

use crate::naming;
use std::collections::HashSet;

/// Stable handle of an album inside its gallery's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlbumId(usize);

/// Root of the album forest.
#[derive(Debug, Clone)]
pub struct Gallery {
    pub title: String,
    pub description: String,
    subalbums: Vec<AlbumId>,
    albums: Vec<Album>,
}

/// A named node of the gallery tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    /// Normalized album dir, unique within the gallery
    pub dir: String,
    /// Empty until the album's definition line is interpreted
    pub title: String,
    pub description: String,
    pub subalbums: Vec<AlbumId>,
    pub photos: Vec<Photo>,
}

/// A photo entry of an album.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    /// Base name of the photo file, no extension, no directory
    pub name: String,
    pub title: String,
    pub description: String,
    /// Album the photo was defined in
    pub album: AlbumId,
}

impl Gallery {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            subalbums: Vec::new(),
            albums: Vec::new(),
        }
    }

    /// Root albums, in the order they were first mentioned.
    pub fn subalbums(&self) -> &[AlbumId] {
        &self.subalbums
    }

    /// # Panics
    ///
    /// Panics if `id` was handed out by a different gallery. See [`Gallery::get`].
    pub fn album(&self, id: AlbumId) -> &Album {
        &self.albums[id.0]
    }

    /// # Panics
    ///
    /// Panics if `id` was handed out by a different gallery.
    pub fn album_mut(&mut self, id: AlbumId) -> &mut Album {
        &mut self.albums[id.0]
    }

    /// Album for `id`, or `None` when the id is out of range for this gallery.
    pub fn get(&self, id: AlbumId) -> Option<&Album> {
        self.albums.get(id.0)
    }

    /// All albums in creation order, reachable or not.
    pub fn albums(&self) -> impl Iterator<Item = (AlbumId, &Album)> {
        self.albums.iter().enumerate().map(|(i, a)| (AlbumId(i), a))
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    pub fn photo_count(&self) -> usize {
        self.albums.iter().map(|a| a.photos.len()).sum()
    }

    /// Look up an album by dir. The dir is normalized first.
    pub fn find(&self, dir: &str) -> Option<AlbumId> {
        let dir = naming::normalize_dir(dir);
        self.albums
            .iter()
            .position(|a| a.dir == dir)
            .map(AlbumId)
    }

    /// Create an empty album and register it as a root.
    pub(crate) fn add_album(&mut self, dir: String) -> AlbumId {
        let id = AlbumId(self.albums.len());
        self.albums.push(Album::new(dir));
        self.subalbums.push(id);
        id
    }

    /// Drop an album from the root list. Returns whether it was a root.
    pub(crate) fn demote(&mut self, id: AlbumId) -> bool {
        let before = self.subalbums.len();
        self.subalbums.retain(|&root| root != id);
        before != self.subalbums.len()
    }

    pub fn is_root(&self, id: AlbumId) -> bool {
        self.subalbums.contains(&id)
    }

    /// Albums reachable from the roots, depth-first pre-order.
    ///
    /// Every album appears once, at its first visit, so shared subalbums and
    /// reference cycles do not loop.
    pub fn reachable(&self) -> Vec<AlbumId> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        // children pushed in reverse so they pop in listed order
        let mut stack: Vec<AlbumId> = self.subalbums.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            order.push(id);
            stack.extend(self.album(id).subalbums.iter().rev().copied());
        }
        order
    }

    /// Relative path from the album's directory to the gallery root.
    pub fn root_path(&self, id: AlbumId) -> String {
        naming::root_path(&self.album(id).dir)
    }
}

impl Album {
    fn new(dir: String) -> Self {
        Self {
            dir,
            title: String::new(),
            description: String::new(),
            subalbums: Vec::new(),
            photos: Vec::new(),
        }
    }

    /// Output directory name of the album (last dir segment).
    pub fn dir_name(&self) -> &str {
        naming::dir_name(&self.dir)
    }

    pub fn is_empty(&self) -> bool {
        self.subalbums.is_empty() && self.photos.is_empty()
    }

    pub fn is_first_photo(&self, index: usize) -> bool {
        index == 0 && !self.photos.is_empty()
    }

    pub fn is_last_photo(&self, index: usize) -> bool {
        !self.photos.is_empty() && index == self.photos.len() - 1
    }

    /// Previous and next photo around `index`, for photo page navigation.
    pub fn photo_neighbours(&self, index: usize) -> (Option<&Photo>, Option<&Photo>) {
        let previous = index.checked_sub(1).and_then(|i| self.photos.get(i));
        let next = self.photos.get(index + 1);
        (previous, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(name: &str, album: AlbumId) -> Photo {
        Photo {
            name: name.to_string(),
            title: String::new(),
            description: String::new(),
            album,
        }
    }

    #[test]
    fn new_album_is_root() {
        let mut gallery = Gallery::new("title", "desc");
        let id = gallery.add_album("a".to_string());
        assert_eq!(gallery.subalbums(), &[id]);
        assert!(gallery.is_root(id));
        assert_eq!(gallery.album(id).dir, "a");
        assert!(gallery.album(id).title.is_empty());
    }

    #[test]
    fn demote_is_idempotent() {
        let mut gallery = Gallery::new("title", "");
        let a = gallery.add_album("a".to_string());
        let b = gallery.add_album("b".to_string());
        assert!(gallery.demote(a));
        assert!(!gallery.demote(a));
        assert_eq!(gallery.subalbums(), &[b]);
        // still in the arena
        assert_eq!(gallery.album_count(), 2);
    }

    #[test]
    fn find_normalizes_dir() {
        let mut gallery = Gallery::new("title", "");
        let id = gallery.add_album("travel/japan".to_string());
        assert_eq!(gallery.find("travel//japan/"), Some(id));
        assert_eq!(gallery.find("travel"), None);
    }

    #[test]
    fn reachable_visits_shared_album_once() {
        let mut gallery = Gallery::new("title", "");
        let root = gallery.add_album("root".to_string());
        let left = gallery.add_album("left".to_string());
        let right = gallery.add_album("right".to_string());
        let shared = gallery.add_album("shared".to_string());
        gallery.album_mut(root).subalbums = vec![left, right];
        gallery.album_mut(left).subalbums = vec![shared];
        gallery.album_mut(right).subalbums = vec![shared];
        for id in [left, right, shared] {
            gallery.demote(id);
        }

        assert_eq!(gallery.reachable(), vec![root, left, shared, right]);
    }

    #[test]
    fn reachable_terminates_on_cycle() {
        let mut gallery = Gallery::new("title", "");
        let root = gallery.add_album("root".to_string());
        let a = gallery.add_album("a".to_string());
        let b = gallery.add_album("b".to_string());
        gallery.album_mut(root).subalbums = vec![a];
        gallery.album_mut(a).subalbums = vec![b];
        gallery.album_mut(b).subalbums = vec![a];
        gallery.demote(a);
        gallery.demote(b);

        assert_eq!(gallery.reachable(), vec![root, a, b]);
    }

    #[test]
    fn unreachable_albums_not_walked() {
        let mut gallery = Gallery::new("title", "");
        let a = gallery.add_album("a".to_string());
        gallery.demote(a);
        assert!(gallery.reachable().is_empty());
    }

    #[test]
    fn reachable_handles_deep_chain() {
        let mut gallery = Gallery::new("title", "");
        let mut parent = gallery.add_album("a0".to_string());
        for i in 1..50_000 {
            let child = gallery.add_album(format!("a{i}"));
            gallery.demote(child);
            gallery.album_mut(parent).subalbums.push(child);
            parent = child;
        }

        let order = gallery.reachable();
        assert_eq!(order.len(), 50_000);
        assert_eq!(order.last(), Some(&parent));
    }

    #[test]
    fn get_rejects_foreign_id() {
        let mut big = Gallery::new("big", "");
        big.add_album("a".to_string());
        let foreign = big.add_album("b".to_string());
        let mut small = Gallery::new("small", "");
        let own = small.add_album("c".to_string());

        assert_eq!(small.get(own).map(|a| a.dir.as_str()), Some("c"));
        assert!(small.get(foreign).is_none());
    }

    #[test]
    fn root_path_follows_depth() {
        let mut gallery = Gallery::new("title", "");
        let id = gallery.add_album("travel/2024".to_string());
        assert_eq!(gallery.root_path(id), "../..");
        assert_eq!(gallery.album(id).dir_name(), "2024");
    }

    #[test]
    fn photo_navigation() {
        let mut gallery = Gallery::new("title", "");
        let id = gallery.add_album("a".to_string());
        let album = gallery.album_mut(id);
        album.photos = vec![photo("p1", id), photo("p2", id), photo("p3", id)];
        let album = gallery.album(id);

        assert!(album.is_first_photo(0));
        assert!(!album.is_first_photo(1));
        assert!(album.is_last_photo(2));
        assert!(!album.is_last_photo(1));

        let (prev, next) = album.photo_neighbours(0);
        assert!(prev.is_none());
        assert_eq!(next.map(|p| p.name.as_str()), Some("p2"));

        let (prev, next) = album.photo_neighbours(2);
        assert_eq!(prev.map(|p| p.name.as_str()), Some("p2"));
        assert!(next.is_none());
    }

    #[test]
    fn photo_count_sums_all_albums() {
        let mut gallery = Gallery::new("title", "");
        let a = gallery.add_album("a".to_string());
        let b = gallery.add_album("b".to_string());
        gallery.album_mut(a).photos.push(photo("p1", a));
        gallery.album_mut(b).photos.push(photo("p2", b));
        gallery.album_mut(b).photos.push(photo("p3", b));
        assert_eq!(gallery.photo_count(), 3);
    }
}
