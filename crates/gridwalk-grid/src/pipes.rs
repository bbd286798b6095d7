//! Pipe mazes: grids whose cells connect only where their shapes meet.
//!
//! Movement legality is data, not code: a [`PipeRules`] table lists every
//! allowed `(current shape, next shape, direction)` triple, and the
//! traversal core never looks at the characters itself.

use std::collections::HashSet;

use gridwalk_core::{CharGrid, Direction, Point};
use gridwalk_paths::{Graph, NodeSet, PathError, Result, bfs, bfs_map};

use crate::adapter::GridOptions;

/// Openings of the standard pipe shapes.
const STANDARD_SHAPES: [(char, [Direction; 2]); 6] = [
    ('|', [Direction::Up, Direction::Down]),
    ('-', [Direction::Left, Direction::Right]),
    ('L', [Direction::Up, Direction::Right]),
    ('J', [Direction::Up, Direction::Left]),
    ('7', [Direction::Down, Direction::Left]),
    ('F', [Direction::Down, Direction::Right]),
];

/// One allowed move between two adjacent shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipeMove {
    pub current: char,
    pub next: char,
    pub dir: Direction,
}

/// Shape compatibility table.
///
/// The `wildcard` shape (the start marker) stands in for any shape: a move
/// out of it is allowed when some shape could make it, and likewise for a
/// move into it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipeRules {
    moves: Vec<PipeMove>,
    pub wildcard: char,
}

impl Default for PipeRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl PipeRules {
    /// An empty table: nothing connects.
    pub fn new(wildcard: char) -> Self {
        Self {
            moves: Vec::new(),
            wildcard,
        }
    }

    /// The `| - L J 7 F` table with `S` as the wildcard.
    ///
    /// Moving in a direction is allowed when the current shape opens that
    /// way and the next shape opens back towards it.
    pub fn standard() -> Self {
        let mut rules = Self::new('S');
        for dir in Direction::ALL {
            for &(current, out) in &STANDARD_SHAPES {
                if !out.contains(&dir) {
                    continue;
                }
                for &(next, back) in &STANDARD_SHAPES {
                    if back.contains(&dir.opposite()) {
                        rules.allow(current, next, dir);
                    }
                }
            }
        }
        rules
    }

    /// Add `current -> next` in direction `dir`. Duplicates are ignored.
    pub fn allow(&mut self, current: char, next: char, dir: Direction) -> &mut Self {
        let m = PipeMove { current, next, dir };
        if !self.moves.contains(&m) {
            self.moves.push(m);
        }
        self
    }

    pub fn moves(&self) -> &[PipeMove] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Whether a step from `current` to `next` in direction `dir` is legal.
    pub fn allows(&self, current: char, next: char, dir: Direction) -> bool {
        let cur_any = current == self.wildcard;
        let next_any = next == self.wildcard;
        self.moves.iter().any(|m| {
            m.dir == dir && (cur_any || m.current == current) && (next_any || m.next == next)
        })
    }
}

/// A pipe maze: a grid, its options and a compatibility table.
///
/// Nodes are the non-obstacle cells; an edge exists only where
/// [`PipeRules::allows`] accepts the pair of shapes in that direction.
#[derive(Debug, Clone)]
pub struct PipeMaze<'a> {
    grid: &'a CharGrid,
    opts: GridOptions,
    rules: PipeRules,
}

impl<'a> PipeMaze<'a> {
    /// A maze with the standard table, `.` as ground and `S` as start.
    pub fn new(grid: &'a CharGrid) -> Self {
        let opts = GridOptions {
            obstacle: '.',
            ..GridOptions::default()
        };
        Self::with_rules(grid, opts, PipeRules::standard())
    }

    pub fn with_rules(grid: &'a CharGrid, opts: GridOptions, rules: PipeRules) -> Self {
        Self { grid, opts, rules }
    }

    pub fn rules(&self) -> &PipeRules {
        &self.rules
    }

    pub fn options(&self) -> GridOptions {
        self.opts
    }

    /// Position of the start marker.
    pub fn start(&self) -> Option<Point> {
        self.grid.find(self.opts.start)
    }

    fn cell(&self, p: Point) -> Option<char> {
        self.grid.at(p).filter(|&ch| ch != self.opts.obstacle)
    }

    fn require_start(&self) -> Result<Point> {
        self.start()
            .ok_or_else(|| PathError::node_not_found(&self.opts.start))
    }

    /// Every cell connected to the start (the loop, on a well-formed maze).
    pub fn loop_cells(&self) -> Result<HashSet<Point>> {
        bfs(self, &self.require_start()?)
    }

    /// The cell farthest from the start in steps, and that step count.
    ///
    /// Ties go to the cell discovered first.
    pub fn farthest(&self) -> Result<(Point, usize)> {
        let start = self.require_start()?;
        let mut best = (start, 0);
        for n in bfs_map(self, &[start], usize::MAX) {
            if n.cost > best.1 {
                best = (n.node, n.cost);
            }
        }
        log::debug!("pipe maze: farthest {} at {} steps", best.0, best.1);
        Ok(best)
    }
}

impl Graph for PipeMaze<'_> {
    type Node = Point;

    fn neighbors(&self, p: &Point, buf: &mut Vec<Point>) {
        let Some(current) = self.cell(*p) else {
            return;
        };
        for dir in Direction::ALL {
            let np = p.step(dir);
            if let Some(next) = self.cell(np) {
                if self.rules.allows(current, next, dir) {
                    buf.push(np);
                }
            }
        }
    }

    fn contains(&self, p: &Point) -> bool {
        self.cell(*p).is_some()
    }
}

impl NodeSet for PipeMaze<'_> {
    fn nodes(&self) -> Vec<Point> {
        self.grid
            .iter()
            .filter(|&(_, ch)| ch != self.opts.obstacle)
            .map(|(p, _)| p)
            .collect()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn rules_round_trip() {
        let rules = PipeRules::standard();
        let json = serde_json::to_string(&rules).unwrap();
        let back: PipeRules = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rules);
        assert_eq!(back.wildcard, 'S');
    }
}
