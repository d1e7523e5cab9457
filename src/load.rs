//! Album file loading.
//!
//! Drives album files through the pipeline one line at a time:
//!
//! ```text
//! line ─→ syntax::parse_line ─→ ParserSession::apply
//! ```
//!
//! Files are read in the order given, lines in file order. Every per-line
//! error carries the source name and 1-based line number and stops loading
//! at once. The consistency check is a separate step: [`load_gallery`] runs
//! it after the last file, callers of [`load`] must call
//! [`ParserSession::check`] themselves.

use crate::check::CheckError;
use crate::config::{self, ConfigError, ConfigOverrides};
use crate::model::Gallery;
use crate::session::{InterpretError, ParserSession};
use crate::syntax::{self, SyntaxError};
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error reading {source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },
    #[error("{source_name}:{line}: line is not valid UTF-8")]
    Encoding { source_name: String, line: usize },
    #[error("{source_name}:{line}: syntax error: {reason}")]
    Syntax {
        source_name: String,
        line: usize,
        reason: SyntaxError,
    },
    #[error("{source_name}:{line}: album \"{dir}\" already defined")]
    DuplicateAlbum {
        source_name: String,
        line: usize,
        dir: String,
    },
    #[error("{source_name}:{line}: {item} cannot exist without album")]
    NoActiveAlbum {
        source_name: String,
        line: usize,
        item: String,
    },
}

impl ParseError {
    fn at(source_name: &str, line: usize, error: InterpretError) -> Self {
        let source_name = source_name.to_string();
        match error {
            InterpretError::DuplicateAlbum(dir) => ParseError::DuplicateAlbum {
                source_name,
                line,
                dir,
            },
            InterpretError::NoActiveAlbum { item } => ParseError::NoActiveAlbum {
                source_name,
                line,
                item,
            },
        }
    }

    /// 1-based line number, when the error belongs to a line.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Io { .. } => None,
            ParseError::Encoding { line, .. }
            | ParseError::Syntax { line, .. }
            | ParseError::DuplicateAlbum { line, .. }
            | ParseError::NoActiveAlbum { line, .. } => Some(*line),
        }
    }

    pub fn source_name(&self) -> &str {
        match self {
            ParseError::Io { source_name, .. }
            | ParseError::Encoding { source_name, .. }
            | ParseError::Syntax { source_name, .. }
            | ParseError::DuplicateAlbum { source_name, .. }
            | ParseError::NoActiveAlbum { source_name, .. } => source_name,
        }
    }
}

/// Everything that can stop [`load_gallery`].
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Check error: {0}")]
    Check(#[from] CheckError),
}

/// Interpret one album source into the session.
///
/// `source_name` is only used in error messages.
pub fn load<R: BufRead>(
    session: &mut ParserSession,
    source_name: &str,
    reader: R,
) -> Result<(), ParseError> {
    for (index, line) in reader.lines().enumerate() {
        let lineno = index + 1;
        let line = line.map_err(|error| match error.kind() {
            ErrorKind::InvalidData => ParseError::Encoding {
                source_name: source_name.to_string(),
                line: lineno,
            },
            _ => ParseError::Io {
                source_name: source_name.to_string(),
                error,
            },
        })?;

        let statement =
            syntax::parse_line(line.trim()).map_err(|reason| ParseError::Syntax {
                source_name: source_name.to_string(),
                line: lineno,
                reason,
            })?;
        session
            .apply(statement)
            .map_err(|e| ParseError::at(source_name, lineno, e))?;
    }
    Ok(())
}

/// Interpret album text held in memory.
pub fn load_str(session: &mut ParserSession, source_name: &str, text: &str) -> Result<(), ParseError> {
    load(session, source_name, text.as_bytes())
}

/// Interpret album files in order into a new session.
pub fn parse_files(gallery: Gallery, paths: &[PathBuf]) -> Result<ParserSession, ParseError> {
    let mut session = ParserSession::new(gallery);
    for path in paths {
        let source_name = path.display().to_string();
        debug!("parsing album file {source_name}");
        let file = File::open(path).map_err(|error| ParseError::Io {
            source_name: source_name.clone(),
            error,
        })?;
        load(&mut session, &source_name, BufReader::new(file))?;
    }
    Ok(session)
}

/// Load the config file, interpret its album files, and check the result.
pub fn load_gallery(config_path: &Path, overrides: &ConfigOverrides) -> Result<Gallery, LoadError> {
    let config = config::load_config_with(config_path, overrides)?;
    let base_dir = config_path.parent().unwrap_or(Path::new(""));
    let paths = config.album_paths(base_dir);

    let gallery = Gallery::new(config.title, config.description);
    let session = parse_files(gallery, &paths)?;
    let gallery = session.finish()?;

    info!(
        "parsed {} album files: {} albums, {} photos",
        paths.len(),
        gallery.album_count(),
        gallery.photo_count()
    );
    Ok(gallery)
}
