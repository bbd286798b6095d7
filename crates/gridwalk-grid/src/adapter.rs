//! A character grid viewed as a graph of passable cells.

use std::fmt;

use gridwalk_core::{CharGrid, Point};
use gridwalk_paths::{
    AstarGraph, Graph, NodeSet, Path, PathError, Result, WeightedGraph, bfs_path, chebyshev,
    manhattan,
};

/// How a [`CharGrid`] is read as a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GridOptions {
    /// Cells holding this character are impassable.
    pub obstacle: char,
    /// Marker of the start cell.
    pub start: char,
    /// Also step diagonally (8-connectivity).
    pub diagonal: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            obstacle: '#',
            start: 'S',
            diagonal: false,
        }
    }
}

type Passable<'a> = Box<dyn Fn(char) -> bool + Send + Sync + 'a>;

/// Grid pather: nodes are the passable cells, edges join a cell to its
/// passable orthogonal neighbours (and diagonal ones when enabled), each
/// with unit cost.
///
/// Neighbours are listed up, right, down, left (clockwise from up with
/// diagonals), so every search over a grid is deterministic.
pub struct GridGraph<'a> {
    grid: &'a CharGrid,
    opts: GridOptions,
    passable: Option<Passable<'a>>,
}

impl<'a> GridGraph<'a> {
    /// A grid graph with the default options.
    pub fn new(grid: &'a CharGrid) -> Self {
        Self::with_options(grid, GridOptions::default())
    }

    pub fn with_options(grid: &'a CharGrid, opts: GridOptions) -> Self {
        Self {
            grid,
            opts,
            passable: None,
        }
    }

    /// Replace the obstacle test with `passable(cell)`.
    pub fn with_passable(mut self, passable: impl Fn(char) -> bool + Send + Sync + 'a) -> Self {
        self.passable = Some(Box::new(passable));
        self
    }

    pub fn grid(&self) -> &'a CharGrid {
        self.grid
    }

    pub fn options(&self) -> GridOptions {
        self.opts
    }

    /// Whether `p` is in bounds and passable.
    pub fn is_passable(&self, p: Point) -> bool {
        match self.grid.at(p) {
            Some(ch) => match &self.passable {
                Some(f) => f(ch),
                None => ch != self.opts.obstacle,
            },
            None => false,
        }
    }

    /// Position of the start marker, if the grid has one.
    pub fn start(&self) -> Option<Point> {
        self.grid.find(self.opts.start)
    }

    /// Minimum-hop path between two cells.
    pub fn path(&self, from: Point, to: Point) -> Result<Option<Path<Point, usize>>> {
        bfs_path(self, &from, &to)
    }

    /// Number of steps on a shortest route from `from` to `to`.
    ///
    /// Unlike the search functions, an unreachable target is an error here:
    /// [`PathError::NoPathFound`].
    pub fn steps_between(&self, from: Point, to: Point) -> Result<usize> {
        match self.path(from, to)? {
            Some(p) => Ok(p.cost()),
            None => Err(PathError::no_path(&from, &to)),
        }
    }
}

impl fmt::Debug for GridGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridGraph")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("opts", &self.opts)
            .field("custom_passable", &self.passable.is_some())
            .finish()
    }
}

impl Graph for GridGraph<'_> {
    type Node = Point;

    fn neighbors(&self, p: &Point, buf: &mut Vec<Point>) {
        if self.opts.diagonal {
            buf.extend(p.neighbors_8().into_iter().filter(|&n| self.is_passable(n)));
        } else {
            buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_passable(n)));
        }
    }

    fn contains(&self, p: &Point) -> bool {
        self.is_passable(*p)
    }
}

impl WeightedGraph for GridGraph<'_> {
    type Weight = u32;

    fn edges(&self, p: &Point, buf: &mut Vec<(Point, u32)>) {
        let mut nbuf = Vec::new();
        self.neighbors(p, &mut nbuf);
        buf.extend(nbuf.into_iter().map(|n| (n, 1)));
    }
}

impl AstarGraph for GridGraph<'_> {
    fn estimate(&self, from: &Point, to: &Point) -> u32 {
        let d = if self.opts.diagonal {
            chebyshev(*from, *to)
        } else {
            manhattan(*from, *to)
        };
        d.unsigned_abs()
    }
}

impl NodeSet for GridGraph<'_> {
    /// Passable cells, row-major.
    fn nodes(&self) -> Vec<Point> {
        self.grid
            .iter()
            .map(|(p, _)| p)
            .filter(|&p| self.is_passable(p))
            .collect()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn options_fill_defaults() {
        let opts: GridOptions = serde_json::from_str(r#"{"diagonal": true}"#).unwrap();
        assert_eq!(
            opts,
            GridOptions {
                obstacle: '#',
                start: 'S',
                diagonal: true
            }
        );
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(serde_json::from_str::<GridOptions>(&json).unwrap(), opts);
    }
}
