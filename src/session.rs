//! Album file interpreter.
//!
//! A [`ParserSession`] owns the gallery being built plus the bookkeeping
//! needed to resolve forward references:
//!
//! - `defined`: albums that have had their `/dir; title` line
//! - `pending`: albums referenced with `/dir` but not defined yet
//! - `current`: the album subsequent subalbum and photo lines attach to
//!
//! ## Forward References
//!
//! An album may be referenced before it is defined, even from an earlier
//! album file. The first mention creates the album (as a root) and every
//! later mention resolves to the same [`AlbumId`]:
//!
//! ```text
//! /album1; Album 1
//! /album3                 album3 created, parked in `pending`, no longer a root
//! /album3; Album 3        same album gets its title, moves to `defined`
//! ```
//!
//! Statements are applied strictly in file order. Any error aborts the
//! session; the caller drops it along with the partially built gallery.
//!
//! ## Shared Subalbums
//!
//! Nothing stops an album from being referenced by more than one parent, so
//! the result is a DAG rather than a strict tree, and forward references can
//! even close a cycle. This is accepted as-is. Consumers walk the gallery
//! with [`Gallery::reachable`], which visits every album once.

use crate::check::{self, CheckError};
use crate::model::{AlbumId, Gallery, Photo};
use crate::naming;
use crate::syntax::Statement;
use log::{debug, trace};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    #[error("album \"{0}\" already defined")]
    DuplicateAlbum(String),
    #[error("{item} cannot exist without album")]
    NoActiveAlbum { item: String },
}

/// Interpreter state for one gallery.
#[derive(Debug)]
pub struct ParserSession {
    gallery: Gallery,
    defined: HashMap<String, AlbumId>,
    pending: BTreeMap<String, AlbumId>,
    current: Option<AlbumId>,
}

impl ParserSession {
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            defined: HashMap::new(),
            pending: BTreeMap::new(),
            current: None,
        }
    }

    /// Discard everything interpreted so far and start over with an empty
    /// gallery carrying the same title and description.
    pub fn reset(&mut self) {
        let gallery = Gallery::new(
            std::mem::take(&mut self.gallery.title),
            std::mem::take(&mut self.gallery.description),
        );
        *self = Self::new(gallery);
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Referenced but not yet defined albums, keyed by dir.
    pub fn pending(&self) -> &BTreeMap<String, AlbumId> {
        &self.pending
    }

    pub fn is_defined(&self, dir: &str) -> bool {
        self.defined.contains_key(&naming::normalize_dir(dir))
    }

    pub fn current_album(&self) -> Option<AlbumId> {
        self.current
    }

    /// Apply one parsed line.
    pub fn apply(&mut self, statement: Statement) -> Result<(), InterpretError> {
        trace!("applying {statement:?}");
        match statement {
            Statement::Album {
                dir,
                title,
                description,
            } => self.define_album(&dir, title, description).map(|_| ()),
            Statement::Subalbum { dir } => self.reference_subalbum(&dir).map(|_| ()),
            Statement::Photo {
                name,
                title,
                description,
            } => self.add_photo(name, title, description),
            Statement::Comment | Statement::Empty => Ok(()),
        }
    }

    /// `/dir; title[; description]`: define an album and make it current.
    pub fn define_album(
        &mut self,
        dir: &str,
        title: String,
        description: String,
    ) -> Result<AlbumId, InterpretError> {
        let dir = naming::normalize_dir(dir);
        if self.defined.contains_key(&dir) {
            return Err(InterpretError::DuplicateAlbum(dir));
        }
        let id = self.resolve_or_create(&dir);

        let album = self.gallery.album_mut(id);
        album.title = title;
        album.description = description;

        if self.pending.remove(&dir).is_some() {
            debug!("forward reference to album \"{dir}\" resolved");
        }
        self.defined.insert(dir, id);
        self.current = Some(id);
        Ok(id)
    }

    /// `/dir`: attach an album, defined or not, to the current album.
    pub fn reference_subalbum(&mut self, dir: &str) -> Result<AlbumId, InterpretError> {
        let dir = naming::normalize_dir(dir);
        let parent = self.current.ok_or_else(|| InterpretError::NoActiveAlbum {
            item: format!("subalbum \"{dir}\""),
        })?;
        let child = self.resolve_or_create(&dir);

        if !self.defined.contains_key(&dir) && !self.pending.contains_key(&dir) {
            debug!("forward reference to album \"{dir}\"");
            self.pending.insert(dir.clone(), child);
        }
        self.gallery.album_mut(parent).subalbums.push(child);

        if self.gallery.demote(child) {
            trace!("album \"{dir}\" is no longer a root album");
        }
        Ok(child)
    }

    /// `name[; title[; description]]`: append a photo to the current album.
    pub fn add_photo(
        &mut self,
        name: String,
        title: String,
        description: String,
    ) -> Result<(), InterpretError> {
        let Some(album) = self.current else {
            return Err(InterpretError::NoActiveAlbum {
                item: format!("photo {name}"),
            });
        };
        self.gallery.album_mut(album).photos.push(Photo {
            name,
            title,
            description,
            album,
        });
        Ok(())
    }

    fn resolve_or_create(&mut self, dir: &str) -> AlbumId {
        if let Some(&id) = self.pending.get(dir) {
            id
        } else if let Some(&id) = self.defined.get(dir) {
            id
        } else {
            self.gallery.add_album(dir.to_string())
        }
    }

    /// Run the consistency check over the current state.
    pub fn check(&self) -> Result<(), CheckError> {
        check::check(&self.gallery, &self.pending)
    }

    /// Check the gallery and hand it over.
    pub fn finish(self) -> Result<Gallery, CheckError> {
        self.check()?;
        Ok(self.gallery)
    }
}
