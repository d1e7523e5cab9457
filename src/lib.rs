//! # Danlann
//!
//! Gallery description front-end for a photo gallery generator. A gallery
//! is described in plain text album files; this crate turns them into a
//! checked tree of albums and photos that page and image generators walk.
//!
//! ```text
//! # travel.txt
//! /travel; Travel; Trips abroad
//! /travel/japan                       subalbum, defined further down
//!
//! /travel/japan; Japan
//! tokyo; Tokyo; Shibuya crossing      photo of travel/japan
//! kyoto
//! ```
//!
//! # Architecture: Per-Line Pipeline, Then One Check
//!
//! ```text
//! 1. Lex       line      →  tokens        (syntax::lexer)
//! 2. Parse     tokens    →  Statement     (syntax::statement)
//! 3. Apply     Statement →  album tree    (session::ParserSession)
//!    ... for every line of every album file, in order ...
//! 4. Check     tree      →  Ok / error    (check)
//! ```
//!
//! Steps 1–3 fail fast on the first bad line, reporting file and line.
//! Step 4 can only run at the end: an album referenced in the first file
//! may be defined in the last one.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`syntax`] | Line lexer and line parser |
//! | [`session`] | Interpreter: builds the album tree, resolves forward references |
//! | [`check`] | Post-parse consistency check |
//! | [`load`] | Drives album files through the pipeline; end-to-end `load_gallery` |
//! | [`model`] | Arena-backed `Gallery`, `Album`, `Photo` |
//! | [`naming`] | Album dir normalization and path helpers |
//! | [`config`] | `danlann.toml` loading, merging, and validation |
//! | [`manifest`] | JSON view of a checked gallery for downstream tools |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Album Arena
//!
//! An album referenced before its definition must be the very same album
//! once defined. Albums therefore live in one arena owned by the
//! [`model::Gallery`] and every edge is an [`model::AlbumId`]. The
//! interpreter's `defined` and `pending` tables map normalized dirs to ids.
//!
//! ## Explicit Session
//!
//! Interpreter state lives in a [`session::ParserSession`] value owned by the
//! caller. Two galleries parsed in one process never share state.

pub mod check;
pub mod config;
pub mod load;
pub mod manifest;
pub mod model;
pub mod naming;
pub mod output;
pub mod session;
pub mod syntax;

#[cfg(test)]
pub(crate) mod test_helpers;
