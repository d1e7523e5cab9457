//! CLI output formatting.
//!
//! Output is **information-centric, not file-centric**: every album and
//! photo leads with its positional index and title, and the album dir or
//! photo name follows as an indented `Source:` line.
//!
//! ```text
//! Memory Jail
//!     Photos since 2004
//!
//! Albums
//! 001 Travel (0 photos)
//!     Source: travel/
//!     001 Japan (2 photos)
//!         Source: travel/japan/
//!         001 Tokyo
//!             Source: tokyo
//!         002 (kyoto)
//!
//! 2 albums, 2 photos
//! ```
//!
//! An album listed under several parents is printed in full at its first
//! position and as `(shared)` afterwards.
//!
//! [`format_gallery_output`] is pure and returns lines for testability;
//! [`print_gallery_output`] writes them to stdout.

use crate::model::{AlbumId, Gallery};
use std::collections::HashSet;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Album header: index, title (dir name when untitled), photo count.
fn album_header(index: usize, title: &str, count: usize) -> String {
    format!("{} {} ({} photos)", format_index(index), title, count)
}

/// Photo line: titled photos show title, untitled show the name in parens.
///
/// ```text
/// 001 The Sunset        // titled
/// 001 (sunset)          // untitled: name is the identity
/// ```
fn photo_line(index: usize, title: &str, name: &str) -> String {
    if title.is_empty() {
        format!("{} ({})", format_index(index), name)
    } else {
        format!("{} {}", format_index(index), title)
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// Format the album tree of a gallery.
pub fn format_gallery_output(gallery: &Gallery) -> Vec<String> {
    let mut lines = vec![gallery.title.clone()];
    let desc = truncate_desc(gallery.description.trim(), 60);
    if !desc.is_empty() {
        lines.push(format!("    {}", desc));
    }

    lines.push(String::new());
    lines.push("Albums".to_string());
    let mut shown = HashSet::new();
    let roots = gallery.subalbums().iter().enumerate();
    let mut stack: Vec<Frame> = roots
        .rev()
        .map(|(i, &id)| Frame::Album {
            id,
            position: i + 1,
            depth: 0,
        })
        .collect();
    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Album {
                id,
                position,
                depth,
            } => format_album(gallery, id, position, depth, &mut shown, &mut stack, &mut lines),
            Frame::Photos { id, depth } => format_photos(gallery, id, depth, &mut lines),
        }
    }

    lines.push(String::new());
    let reachable = gallery.reachable();
    let photos: usize = reachable
        .iter()
        .map(|&id| gallery.album(id).photos.len())
        .sum();
    lines.push(format!("{} albums, {} photos", reachable.len(), photos));
    lines
}

/// Pending work of the tree walk: an album header, or the photos listed
/// after an album's subalbums.
enum Frame {
    Album {
        id: AlbumId,
        position: usize,
        depth: usize,
    },
    Photos {
        id: AlbumId,
        depth: usize,
    },
}

fn format_album(
    gallery: &Gallery,
    id: AlbumId,
    position: usize,
    depth: usize,
    shown: &mut HashSet<AlbumId>,
    stack: &mut Vec<Frame>,
    lines: &mut Vec<String>,
) {
    let album = gallery.album(id);
    let base_indent = indent(depth);
    let title = if album.title.is_empty() {
        album.dir_name()
    } else {
        album.title.as_str()
    };

    if !shown.insert(id) {
        lines.push(format!(
            "{}{} {} (shared)",
            base_indent,
            format_index(position),
            title
        ));
        return;
    }

    lines.push(format!(
        "{}{}",
        base_indent,
        album_header(position, title, album.photos.len())
    ));
    lines.push(format!("{}    Source: {}/", base_indent, album.dir));
    let desc = truncate_desc(album.description.trim(), 60);
    if !desc.is_empty() {
        lines.push(format!("{}    {}", base_indent, desc));
    }

    stack.push(Frame::Photos { id, depth });
    for (i, &child) in album.subalbums.iter().enumerate().rev() {
        stack.push(Frame::Album {
            id: child,
            position: i + 1,
            depth: depth + 1,
        });
    }
}

fn format_photos(gallery: &Gallery, id: AlbumId, depth: usize, lines: &mut Vec<String>) {
    let photo_indent = indent(depth + 1);
    for (i, photo) in gallery.album(id).photos.iter().enumerate() {
        lines.push(format!(
            "{}{}",
            photo_indent,
            photo_line(i + 1, &photo.title, &photo.name)
        ));
        // untitled photos already show their name
        if !photo.title.is_empty() {
            lines.push(format!("{}    Source: {}", photo_indent, photo.name));
        }
    }
}

/// Print the album tree to stdout.
pub fn print_gallery_output(gallery: &Gallery) {
    for line in format_gallery_output(gallery) {
        println!("{}", line);
    }
}
