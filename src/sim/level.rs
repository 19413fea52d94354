//! Level grids
//!
//! A level is a rectangular grid of integer tile codes laid out over the
//! top half of the playfield. Code 0 is empty space, 1 is an
//! indestructible solid brick, 2..=5 pick a fixed brick color, and any
//! other positive code falls back to white.

use std::fmt;

use glam::{Vec2, Vec3};

use crate::render::SpriteId;

use super::entity::Actor;

/// Parsed tile grid; rows are guaranteed rectangular
pub type TileGrid = Vec<Vec<u32>>;

/// Level text that could not be turned into a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// No rows at all
    Empty,
    /// Row `line` has a different length than the first row
    Ragged { line: usize },
    /// Token on row `line` was not a non-negative integer
    BadTile { line: usize, token: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Empty => write!(f, "level file contains no tile rows"),
            LoadError::Ragged { line } => {
                write!(f, "level row {line} does not match the first row's width")
            }
            LoadError::BadTile { line, token } => {
                write!(f, "level row {line} has a non-numeric tile {token:?}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// The bricks of one level
#[derive(Debug, Clone, Default)]
pub struct Level {
    /// Bricks in row-major grid order (iteration order matters for tests,
    /// not for gameplay)
    pub bricks: Vec<Actor>,
}

impl Level {
    /// Parse whitespace-delimited level text into a tile grid
    ///
    /// Each non-empty line is one row of space-separated non-negative
    /// integers; all rows must be the same length.
    pub fn parse(text: &str) -> Result<TileGrid, LoadError> {
        let mut grid: TileGrid = Vec::new();
        for (line, row_text) in text.lines().enumerate() {
            if row_text.trim().is_empty() {
                continue;
            }
            let mut row = Vec::new();
            for token in row_text.split_whitespace() {
                let code = token.parse::<u32>().map_err(|_| LoadError::BadTile {
                    line,
                    token: token.to_string(),
                })?;
                row.push(code);
            }
            if let Some(first) = grid.first() {
                if row.len() != first.len() {
                    return Err(LoadError::Ragged { line });
                }
            }
            grid.push(row);
        }
        if grid.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(grid)
    }

    /// Parse level text and lay the bricks out over the given area
    pub fn load(text: &str, level_width: f32, level_height: f32) -> Result<Self, LoadError> {
        let grid = Self::parse(text)?;
        log::info!(
            "loaded level: {}x{} tiles over {}x{} px",
            grid[0].len(),
            grid.len(),
            level_width,
            level_height
        );
        Ok(Self::from_grid(&grid, level_width, level_height))
    }

    /// Build bricks from an already-parsed grid
    ///
    /// The grid must be rectangular and non-empty; `load` guarantees this
    /// for parsed text, callers passing grids directly own that contract.
    pub fn from_grid(grid: &[Vec<u32>], level_width: f32, level_height: f32) -> Self {
        debug_assert!(!grid.is_empty() && !grid[0].is_empty(), "empty level grid");
        debug_assert!(
            grid.iter().all(|row| row.len() == grid[0].len()),
            "ragged level grid"
        );

        let height = grid.len();
        let width = grid[0].len();
        let unit_width = level_width / width as f32;
        let unit_height = level_height / height as f32;

        let mut bricks = Vec::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                if code == 0 {
                    continue;
                }
                let pos = Vec2::new(unit_width * x as f32, unit_height * y as f32);
                let size = Vec2::new(unit_width, unit_height);
                if code == 1 {
                    let mut brick = Actor::new(pos, size, SpriteId::BlockSolid)
                        .with_color(Vec3::new(0.8, 0.8, 0.7));
                    brick.solid = true;
                    bricks.push(brick);
                } else {
                    let color = match code {
                        2 => Vec3::new(0.2, 0.6, 1.0),
                        3 => Vec3::new(0.0, 0.7, 0.0),
                        4 => Vec3::new(0.8, 0.8, 0.4),
                        5 => Vec3::new(1.0, 0.5, 0.0),
                        _ => Vec3::ONE,
                    };
                    bricks.push(Actor::new(pos, size, SpriteId::Block).with_color(color));
                }
            }
        }
        Self { bricks }
    }

    /// A level is completed once every destructible brick is destroyed
    pub fn is_completed(&self) -> bool {
        self.bricks
            .iter()
            .all(|brick| brick.solid || brick.destroyed)
    }
}

/// The level grids shipped with the game, in menu order
pub fn default_levels() -> [&'static str; 4] {
    [
        include_str!("../../levels/one.lvl"),
        include_str!("../../levels/two.lvl"),
        include_str!("../../levels/three.lvl"),
        include_str!("../../levels/four.lvl"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_grid() {
        let grid = Level::parse("1 1 1\n2 0 2\n").unwrap();
        assert_eq!(grid, vec![vec![1, 1, 1], vec![2, 0, 2]]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let grid = Level::parse("\n1 1\n\n2 2\n").unwrap();
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert_eq!(Level::parse("  \n "), Err(LoadError::Empty));
    }

    #[test]
    fn test_parse_ragged_is_error() {
        assert_eq!(
            Level::parse("1 1 1\n2 2\n"),
            Err(LoadError::Ragged { line: 1 })
        );
    }

    #[test]
    fn test_parse_garbage_is_error() {
        let err = Level::parse("1 x 1\n").unwrap_err();
        assert!(matches!(err, LoadError::BadTile { line: 0, .. }));
    }

    #[test]
    fn test_from_grid_layout_and_colors() {
        let grid = vec![vec![1, 2, 0], vec![3, 4, 5]];
        let level = Level::from_grid(&grid, 300.0, 100.0);

        // Five non-empty tiles
        assert_eq!(level.bricks.len(), 5);

        let solid = &level.bricks[0];
        assert!(solid.solid);
        assert_eq!(solid.position, Vec2::ZERO);
        assert_eq!(solid.size, Vec2::new(100.0, 50.0));
        assert_eq!(solid.color, Vec3::new(0.8, 0.8, 0.7));

        let blue = &level.bricks[1];
        assert!(!blue.solid);
        assert_eq!(blue.position, Vec2::new(100.0, 0.0));
        assert_eq!(blue.color, Vec3::new(0.2, 0.6, 1.0));

        let orange = &level.bricks[4];
        assert_eq!(orange.position, Vec2::new(200.0, 50.0));
        assert_eq!(orange.color, Vec3::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn test_unknown_code_maps_to_white() {
        let grid = vec![vec![9]];
        let level = Level::from_grid(&grid, 100.0, 50.0);
        assert_eq!(level.bricks[0].color, Vec3::ONE);
    }

    #[test]
    fn test_completion_ignores_solid_bricks() {
        // 2 solid + 3 destructible
        let grid = vec![vec![1, 2, 2, 2, 1]];
        let mut level = Level::from_grid(&grid, 500.0, 50.0);
        assert!(!level.is_completed());

        // Destroy all but one destructible brick
        for brick in level.bricks.iter_mut().filter(|b| !b.solid).take(2) {
            brick.destroyed = true;
        }
        assert!(!level.is_completed());

        // Destroy the last one; solid bricks never count
        for brick in level.bricks.iter_mut().filter(|b| !b.solid) {
            brick.destroyed = true;
        }
        assert!(level.is_completed());
    }

    #[test]
    fn test_default_levels_parse() {
        for text in default_levels() {
            let grid = Level::parse(text).unwrap();
            assert!(!grid.is_empty());
        }
    }
}
