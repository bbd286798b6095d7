//! Pairwise distances between points of interest on a grid.

use std::collections::HashMap;

use gridwalk_core::Point;
use gridwalk_paths::{DistanceMatrix, Result, bfs_distances, chebyshev, manhattan};

use crate::adapter::GridGraph;

/// How the distance between two points of interest is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Steps on a shortest route through passable cells.
    #[default]
    Steps,
    /// Manhattan distance, ignoring obstacles.
    Manhattan,
    /// Chebyshev distance, ignoring obstacles.
    Chebyshev,
}

/// Distance matrix between `pois`, closed with Floyd-Warshall.
///
/// With [`Metric::Steps`] one BFS runs per point of interest, every point
/// must be a passable cell, and unreachable pairs stay infinite. The
/// geometric metrics do not consult the grid at all. Closing the matrix
/// also lets a route through an intermediate point of interest beat a
/// direct one, which matters when the grid is read with a custom
/// passability test.
pub fn pairwise_distances(
    graph: &GridGraph<'_>,
    pois: &[Point],
    metric: Metric,
) -> Result<DistanceMatrix<Point, u32>> {
    let mut matrix = match metric {
        Metric::Steps => {
            let mut rows: HashMap<Point, HashMap<Point, usize>> = HashMap::new();
            for &p in pois {
                if !rows.contains_key(&p) {
                    rows.insert(p, bfs_distances(graph, &p)?);
                }
            }
            DistanceMatrix::from_fn(pois.iter().copied(), |a, b| {
                rows.get(a)
                    .and_then(|row| row.get(b))
                    .and_then(|&d| u32::try_from(d).ok())
            })
        }
        Metric::Manhattan => DistanceMatrix::from_fn(pois.iter().copied(), |a, b| {
            Some(manhattan(*a, *b).unsigned_abs())
        }),
        Metric::Chebyshev => DistanceMatrix::from_fn(pois.iter().copied(), |a, b| {
            Some(chebyshev(*a, *b).unsigned_abs())
        }),
    };
    matrix.close()?;
    log::debug!(
        "pairwise {metric:?} distances over {} points of interest",
        matrix.len()
    );
    Ok(matrix)
}
