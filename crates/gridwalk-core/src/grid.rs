//! The [`CharGrid`] type: a rectangular, read-only 2D array of characters.
//!
//! A grid is parsed once from text and never mutated afterwards; overlays
//! such as [`marked`](CharGrid::marked) produce a fresh grid.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Point, Range};

/// A rectangular grid of single-character cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct CharGrid {
    cells: Vec<char>,
    width: i32,
    height: i32,
}

impl CharGrid {
    /// Parse a grid from text.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. Every line must have the same width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        Self::parse_with_runes(s, "")
    }

    /// Parse a grid, rejecting any character not in `runes`.
    ///
    /// An empty `runes` string allows every character.
    pub fn parse_with_runes(s: &str, runes: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(s.len());
        let mut width: Option<usize> = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let mut x = 0;
            for ch in line.chars() {
                if !runes.is_empty() && !runes.contains(ch) {
                    return Err(GridError::InvalidRune {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    });
                }
                cells.push(ch);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(GridError::InconsistentWidth {
                        row: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        Ok(Self {
            cells,
            width: width.unwrap_or(0) as i32,
            height,
        })
    }

    /// Build a grid from already split rows.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: AsRef<[char]>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0;
        for (y, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(GridError::InconsistentWidth {
                        row: y,
                        expected: w,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            cells.extend_from_slice(row);
            height += 1;
        }
        if cells.is_empty() {
            return Err(GridError::Empty);
        }
        Ok(Self {
            cells,
            width: width.unwrap_or(0) as i32,
            height,
        })
    }

    /// Returns the bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.width, self.height)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// The character at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<char> {
        self.bounds().index_of(p).map(|i| self.cells[i])
    }

    /// Row-major iterator over every position and its character.
    pub fn iter(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// The first position (row-major) holding `ch`.
    pub fn find(&self, ch: char) -> Option<Point> {
        self.iter().find(|&(_, c)| c == ch).map(|(p, _)| p)
    }

    /// Every position holding `ch`, in row-major order.
    pub fn positions(&self, ch: char) -> Vec<Point> {
        self.iter()
            .filter(|&(_, c)| c == ch)
            .map(|(p, _)| p)
            .collect()
    }

    /// A copy of this grid with every in-bounds point of `cells` replaced by
    /// `mark`. Useful to render a visited set or a path.
    pub fn marked<'a>(&self, cells: impl IntoIterator<Item = &'a Point>, mark: char) -> Self {
        let mut out = self.clone();
        let bounds = self.bounds();
        for &p in cells {
            if let Some(i) = bounds.index_of(p) {
                out.cells[i] = mark;
            }
        }
        out
    }
}

impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width.max(1) as usize).enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for CharGrid {
    type Error = GridError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<CharGrid> for String {
    fn from(g: CharGrid) -> Self {
        g.to_string()
    }
}

impl std::str::FromStr for CharGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = CharGrid::parse("S.#\n..#").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "\"S.#\\n..#\"");
        let back: CharGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
        assert!(serde_json::from_str::<CharGrid>("\"ab\\nc\"").is_err());
    }
}
