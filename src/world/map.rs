//! Map data structure
//!
//! The 2D grid representing a dungeon floor.

use std::collections::{HashSet, VecDeque};

use super::position::{Direction, Position};
use super::tile::TileType;

/// A dungeon floor map
#[derive(Debug, Clone, Default)]
pub struct Map {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<TileType>,
    /// Start position for the hero
    pub start_pos: Position,
}

impl Map {
    /// Create a new map filled with walls
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![TileType::Wall; (width * height) as usize],
            start_pos: Position::new(1, 1),
        }
    }

    /// A map with no cells, used before a floor is loaded
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a map from text rows (`#` wall, `,` rubble, anything else floor)
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let mut map = Map::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let tile = match ch {
                    '#' => TileType::Wall,
                    ',' => TileType::Rubble,
                    _ => TileType::Floor,
                };
                map.set_tile(x as i32, y as i32, tile);
            }
        }
        map
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of columns
    pub fn cols(&self) -> i32 {
        self.width
    }

    /// Number of rows
    pub fn rows(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    #[inline]
    pub fn idx_to_xy(&self, idx: usize) -> (i32, i32) {
        let idx = idx as i32;
        (idx % self.width, idx / self.width)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    pub fn get_tile(&self, x: i32, y: i32) -> Option<TileType> {
        if self.in_bounds(x, y) {
            Some(self.tiles[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    pub fn set_tile(&mut self, x: i32, y: i32, tile_type: TileType) {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            self.tiles[idx] = tile_type;
        }
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).is_some_and(|t| t.is_walkable())
    }

    /// Get all walkable positions
    pub fn get_walkable_positions(&self) -> Vec<Position> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_walkable())
            .map(|(idx, _)| {
                let (x, y) = self.idx_to_xy(idx);
                Position::new(x, y)
            })
            .collect()
    }

    /// Walkable cells reachable from `from` by cardinal steps, in BFS order
    pub fn reachable_from(&self, from: Position) -> Vec<Position> {
        if !self.is_walkable(from.x, from.y) {
            return Vec::new();
        }

        let mut seen = HashSet::from([from]);
        let mut queue = VecDeque::from([from]);
        let mut order = Vec::new();

        while let Some(pos) = queue.pop_front() {
            order.push(pos);
            for dir in Direction::ALL {
                let next = pos.step(dir);
                if self.is_walkable(next.x, next.y) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let map = Map::from_rows(&["####", "#.,#", "####"]);
        assert_eq!(map.cols(), 4);
        assert_eq!(map.rows(), 3);
        assert_eq!(map.get_tile(1, 1), Some(TileType::Floor));
        assert_eq!(map.get_tile(2, 1), Some(TileType::Rubble));
        assert_eq!(map.get_tile(4, 1), None);
        assert!(!map.is_walkable(-1, 0));
    }

    #[test]
    fn test_empty_map() {
        assert!(Map::empty().is_empty());
        assert!(Map::empty().get_walkable_positions().is_empty());
    }

    #[test]
    fn test_reachable_skips_sealed_rooms() {
        let map = Map::from_rows(&[
            "#######",
            "#..#..#",
            "#..#..#",
            "#######",
        ]);
        let reachable = map.reachable_from(Position::new(1, 1));
        assert_eq!(reachable.len(), 4);
        assert!(!reachable.contains(&Position::new(4, 1)));
        assert_eq!(map.get_walkable_positions().len(), 8);
    }
}
