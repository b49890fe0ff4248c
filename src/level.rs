//! Level grid parsing
//!
//! A level is plain text, one character per tile:
//! `x` wall, `v` vortex, `s` star, `f` finish, space empty.
//! Text lines are read top to bottom but placed bottom to top, so the last
//! line of the file is grid row 0.

use std::path::{Path, PathBuf};

use crate::grid_to_world;
use crate::sim::entity::{EntityId, EntityKind, PlacedEntity};

/// Errors that make a level unusable
#[derive(Debug)]
pub enum LevelError {
    /// Level file missing or unreadable
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A character outside the tile alphabet (1-based text position)
    UnknownTile { tile: char, line: usize, column: usize },
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::Io { path, source } => {
                write!(f, "couldn't load level {}: {source}", path.display())
            }
            LevelError::UnknownTile { tile, line, column } => {
                write!(f, "unknown level letter {tile:?} at line {line}, column {column}")
            }
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Io { source, .. } => Some(source),
            LevelError::UnknownTile { .. } => None,
        }
    }
}

/// A parsed level: every placed tile entity, no player
#[derive(Debug, Clone, Default)]
pub struct Level {
    pub entities: Vec<PlacedEntity>,
    /// Number of text lines (including empty ones)
    pub rows: usize,
    /// Widest line in tiles
    pub cols: usize,
}

impl Level {
    /// Parse level text. One unknown tile rejects the whole level.
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        let line_count = lines.len();

        let mut entities = Vec::new();
        let mut cols = 0;
        let mut next_id = 1;

        for (row, line) in lines.iter().rev().enumerate() {
            let mut width = 0;
            for (col, tile) in line.chars().enumerate() {
                width = col + 1;
                let kind = match tile {
                    'x' => EntityKind::Wall,
                    'v' => EntityKind::Vortex,
                    's' => EntityKind::Star,
                    'f' => EntityKind::Finish,
                    ' ' => continue,
                    _ => {
                        return Err(LevelError::UnknownTile {
                            tile,
                            line: line_count - row,
                            column: col + 1,
                        });
                    }
                };
                entities.push(PlacedEntity {
                    id: EntityId(next_id),
                    kind,
                    grid_row: row,
                    grid_col: col,
                    pos: grid_to_world(row, col),
                });
                next_id += 1;
            }
            cols = cols.max(width);
        }

        Ok(Self {
            entities,
            rows: line_count,
            cols,
        })
    }

    /// Read and parse a level file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let level = Self::parse(&text)?;
        log::info!(
            "Loaded level {} ({}x{}, {} entities)",
            path.display(),
            level.cols,
            level.rows,
            level.entities.len()
        );
        Ok(level)
    }

    /// Number of placed entities of a kind
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }

    /// Largest entity id handed out by the parser
    pub fn max_id(&self) -> u32 {
        self.entities.iter().map(|e| e.id.0).max().unwrap_or(0)
    }
}
