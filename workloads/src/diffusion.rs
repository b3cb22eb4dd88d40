use log::debug;
use ndarray::{Array2, ArrayView2, Zip, s};

use crate::{
    Result,
    config::{Boundary, DiffusionConfig},
    error::at_least,
    timer::{Timed, measure},
};

/// A square temperature grid relaxed with Jacobi sweeps.
///
/// Two buffers are kept: every sweep reads only from `cells` and writes only into `next`, then
/// the two are swapped. The edges are written once at construction and never again.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2<f64>,
    next: Array2<f64>,
}

impl Grid {
    /// Creates a new `Grid`.
    ///
    /// # Arguments
    /// * `size` - Cells per side, at least 3 so that there's an interior.
    /// * `boundary` - The fixed edge temperatures. Corners take the left/right value.
    /// * `interior` - The starting temperature of every interior cell.
    pub fn new(size: usize, boundary: Boundary, interior: f64) -> Result<Self> {
        at_least("grid size", size as u64, 3)?;

        let last = size - 1;
        let mut cells = Array2::from_elem((size, size), interior);
        cells.row_mut(0).fill(boundary.top);
        cells.row_mut(last).fill(boundary.bottom);
        cells.column_mut(0).fill(boundary.left);
        cells.column_mut(last).fill(boundary.right);

        Ok(Self {
            next: cells.clone(),
            cells,
        })
    }

    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cells(&self) -> ArrayView2<'_, f64> {
        self.cells.view()
    }

    /// The temperature at `(size / 2, size / 2)`.
    pub fn center(&self) -> f64 {
        let mid = self.size() / 2;
        self.cells[[mid, mid]]
    }

    /// Sets every interior cell to the mean of its four neighbours from the previous sweep.
    pub fn relax(&mut self) {
        let Self { cells, next } = self;

        Zip::from(next.slice_mut(s![1..-1, 1..-1]))
            .and(cells.slice(s![..-2, 1..-1]))
            .and(cells.slice(s![2.., 1..-1]))
            .and(cells.slice(s![1..-1, ..-2]))
            .and(cells.slice(s![1..-1, 2..]))
            .for_each(|new, &up, &down, &left, &right| {
                *new = 0.25 * (up + down + left + right);
            });

        std::mem::swap(cells, next);
    }
}

/// Outcome of a diffusion run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionRun {
    pub center: f64,
    pub cell_updates: u64,
}

/// The amount of interior cell updates over `iterations` sweeps.
pub fn cell_updates(size: usize, iterations: usize) -> u64 {
    let interior = size.saturating_sub(2) as u64;
    interior * interior * iterations as u64
}

/// Runs the diffusion workload, only the sweeps are timed.
pub fn run(cfg: &DiffusionConfig) -> Result<Timed<DiffusionRun>> {
    debug!(size = cfg.size, iterations = cfg.iterations; "starting heat diffusion");

    let mut grid = Grid::new(cfg.size, cfg.boundary, cfg.interior)?;
    let timed = measure(|| {
        for _ in 0..cfg.iterations {
            grid.relax();
        }
    });

    Ok(timed.map(|()| DiffusionRun {
        center: grid.center(),
        cell_updates: cell_updates(cfg.size, cfg.iterations),
    }))
}

#[cfg(test)]
mod tests {
    use ndarray::Axis;

    use super::*;

    fn edges(grid: &Grid) -> Vec<f64> {
        let cells = grid.cells();
        let last = grid.size() - 1;

        [
            cells.row(0),
            cells.row(last),
            cells.column(0),
            cells.column(last),
        ]
        .iter()
        .flat_map(|edge| edge.to_vec())
        .collect()
    }

    #[test]
    fn boundary_never_changes() {
        let mut grid = Grid::new(12, Boundary::PLATE, 0.0).unwrap();
        let before = edges(&grid);

        for _ in 0..200 {
            grid.relax();
        }

        assert_eq!(edges(&grid), before);
    }

    #[test]
    fn corners_take_side_values() {
        let grid = Grid::new(5, Boundary::PLATE, 0.0).unwrap();
        let cells = grid.cells();

        assert_eq!(cells[[0, 0]], 50.0);
        assert_eq!(cells[[4, 4]], 50.0);
        assert_eq!(cells[[0, 2]], 100.0);
        assert_eq!(cells[[4, 2]], 0.0);
    }

    #[test]
    fn uniform_grid_is_a_fixed_point() {
        let mut grid = Grid::new(9, Boundary::uniform(37.5), 37.5).unwrap();
        let before = grid.cells().to_owned();

        grid.relax();

        assert_eq!(grid.cells(), before);
    }

    #[test]
    fn sweep_reads_only_previous_values() {
        let mut grid = Grid::new(6, Boundary::HOT_TOP, 0.0).unwrap();
        grid.relax();
        let cells = grid.cells();

        // Row 1 sees the hot edge, row 2 must not see row 1's fresh values.
        assert_eq!(cells[[1, 2]], 25.0);
        assert!(cells.index_axis(Axis(0), 2).iter().all(|&t| t == 0.0));
    }

    #[test]
    fn heat_flows_inwards() {
        let cfg = DiffusionConfig {
            size: 20,
            iterations: 300,
            boundary: Boundary::HOT_TOP,
            interior: 0.0,
        };
        let run = run(&cfg).unwrap().value;

        assert!(run.center > 0.0 && run.center < 100.0);
        assert_eq!(run.cell_updates, 18 * 18 * 300);
    }

    #[test]
    fn tiny_grid_is_rejected() {
        assert!(Grid::new(2, Boundary::HOT_TOP, 0.0).is_err());
    }
}
