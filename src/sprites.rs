//! Sprite loading with placeholder fallback.
//!
//! A sprite is a block of text glyphs sized in terminal cells.  Files under
//! the asset directory are cropped or padded to the size the caller asks
//! for; anything that cannot be read becomes a solid block of that size so
//! the game never stops over a missing picture.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::config::{PLAYER_SIZE, PROJECTILE_SIZE};
use crate::entities::EnemyKind;

pub const PLACEHOLDER_GLYPH: char = '█';

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot read sprite {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("sprite {path} is empty")]
    Empty { path: PathBuf },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub cols: u16,
    pub rows: u16,
    /// Exactly `rows` lines of exactly `cols` chars each.
    pub lines: Vec<String>,
    pub placeholder: bool,
}

impl Sprite {
    /// Solid block of the requested size.
    pub fn placeholder(cols: u16, rows: u16) -> Self {
        let line: String = std::iter::repeat(PLACEHOLDER_GLYPH).take(cols as usize).collect();
        Sprite {
            cols,
            rows,
            lines: vec![line; rows as usize],
            placeholder: true,
        }
    }

    fn fitted(text: &str, cols: u16, rows: u16) -> Self {
        let mut lines: Vec<String> = text
            .lines()
            .take(rows as usize)
            .map(|line| {
                let mut fitted: String = line.chars().take(cols as usize).collect();
                let width = fitted.chars().count();
                fitted.extend(std::iter::repeat(' ').take(cols as usize - width));
                fitted
            })
            .collect();
        let blank = " ".repeat(cols as usize);
        lines.resize(rows as usize, blank);
        Sprite { cols, rows, lines, placeholder: false }
    }
}

/// Read `path` and fit it to `cols`×`rows` cells.
pub fn try_load_sprite(path: &Path, cols: u16, rows: u16) -> Result<Sprite, AssetError> {
    let text = fs::read_to_string(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if text.trim().is_empty() {
        return Err(AssetError::Empty { path: path.to_path_buf() });
    }
    Ok(Sprite::fitted(&text, cols, rows))
}

/// Like `try_load_sprite`, but any failure yields a placeholder.
pub fn load_sprite(path: &Path, cols: u16, rows: u16) -> Sprite {
    match try_load_sprite(path, cols, rows) {
        Ok(sprite) => sprite,
        Err(err) => {
            warn!(error = %err, "using placeholder sprite");
            Sprite::placeholder(cols, rows)
        }
    }
}

/// Every sprite the game draws, sized for one terminal scale.
#[derive(Clone, Debug)]
pub struct SpriteSet {
    pub player: Sprite,
    pub bullet: Sprite,
    pub enemies: HashMap<EnemyKind, Sprite>,
}

impl SpriteSet {
    /// Load the full set from `dir`.  `scale` converts simulation pixels to
    /// terminal cells on each axis.
    pub fn load(dir: &Path, scale: (f32, f32)) -> Self {
        let cells = |size: (f32, f32)| -> (u16, u16) {
            (
                ((size.0 * scale.0).round() as u16).max(1),
                ((size.1 * scale.1).round() as u16).max(1),
            )
        };
        let load = |file: &str, size: (f32, f32)| {
            let (cols, rows) = cells(size);
            load_sprite(&dir.join(file), cols, rows)
        };

        let enemies = EnemyKind::ALL
            .iter()
            .map(|&kind| (kind, load(enemy_file(kind), kind.size())))
            .collect();

        SpriteSet {
            player: load("player.txt", PLAYER_SIZE),
            bullet: load("bullet.txt", PROJECTILE_SIZE),
            enemies,
        }
    }

    pub fn enemy(&self, kind: EnemyKind) -> Option<&Sprite> {
        self.enemies.get(&kind)
    }
}

fn enemy_file(kind: EnemyKind) -> &'static str {
    match kind {
        EnemyKind::Straight => "enemy1.txt",
        EnemyKind::Oscillating => "enemy2.txt",
        EnemyKind::Zigzag => "enemy3.txt",
    }
}
