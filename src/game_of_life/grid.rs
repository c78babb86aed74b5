//! Grid representation and utilities for Game of Life

use super::{Cell, GridError};
use itertools::iproduct;

/// Upper bound on `width * height`; the automaton keeps two grids of this size.
pub const MAX_CELLS: usize = 1 << 26;

/// A fixed-size toroidal grid of cells, stored row-major.
///
/// Dimensions are fixed at construction and are always at least 1x1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::filled(width, height, Cell::Dead)
    }

    /// Create a grid with every cell set to `cell`
    pub fn filled(width: usize, height: usize, cell: Cell) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![cell; width * height],
        })
    }

    /// Build a grid by calling `f(x, y)` for every coordinate, row by row
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, GridError>
    where
        F: FnMut(usize, usize) -> Cell,
    {
        check_dimensions(width, height)?;
        let cells = iproduct!(0..height, 0..width)
            .map(|(y, x)| f(x, y))
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a grid from rows of cells (outer index is y)
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions(width, height)?;

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    len: cells.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse a pattern where each line is a row, `alive` marks a live cell
    /// and `dead` a dead one. Empty lines are skipped.
    pub fn parse(pattern: &str, alive: char, dead: char) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (y, line) in pattern.lines().filter(|l| !l.is_empty()).enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(x, ch)| match ch {
                    c if c == alive => Ok(Cell::Alive),
                    c if c == dead => Ok(Cell::Dead),
                    symbol => Err(GridError::InvalidSymbol { symbol, x, y }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell value at coordinates
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Out of bounds cells read as dead
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        Ok(())
    }

    /// The eight neighbour coordinates of `(x, y)` on the torus, in the order
    /// top-left, top, top-right, left, right, bottom-left, bottom, bottom-right.
    ///
    /// Coordinates must be in range.
    pub fn neighbors(&self, x: usize, y: usize) -> [(usize, usize); 8] {
        let left = (x + self.width - 1) % self.width;
        let right = (x + 1) % self.width;
        let above = (y + self.height - 1) % self.height;
        let below = (y + 1) % self.height;

        [
            (left, above),
            (x, above),
            (right, above),
            (left, y),
            (right, y),
            (left, below),
            (x, below),
            (right, below),
        ]
    }

    /// Count living neighbours of a cell with wrap-around on both axes.
    /// On grids narrower than 3 the same cell may be counted more than once.
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        self.neighbors(x, y)
            .iter()
            .filter(|&&(nx, ny)| self.cells[self.index(nx, ny)].is_alive())
            .count() as u8
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Rows of the grid from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Get all living cell coordinates as `(x, y)`
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(y, x)| self.cells[self.index(x, y)].is_alive())
            .map(|(y, x)| (x, y))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Fraction of living cells, 0.0 to 1.0
    pub fn density(&self) -> f64 {
        self.living_count() as f64 / self.cells.len() as f64
    }

    /// No living cells left
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    pub fn same_dimensions(&self, other: &Grid) -> bool {
        self.dimensions() == other.dimensions()
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_CELLS => Ok(()),
        _ => Err(GridError::TooLarge {
            width,
            height,
            max: MAX_CELLS,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(width: usize, height: usize, x: usize, y: usize) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        grid.set(x, y, Cell::Alive).unwrap();
        grid
    }

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.cells().len(), 12);
        assert!(grid.is_extinct());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions { width: 0, height: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::from_rows(vec![]).is_err());
        assert!(Grid::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(GridError::TooLarge {
                width: usize::MAX,
                height: 2,
                max: MAX_CELLS,
            })
        );
        assert!(Grid::new(5_000_000, 5_000_000).is_err());
        assert!(Grid::from_fn(MAX_CELLS + 1, 1, |_, _| Cell::Dead).is_err());
        assert!(Grid::new(MAX_CELLS, 1).is_ok());
    }

    #[test]
    fn test_grid_from_rows() {
        let rows = vec![
            vec![Cell::Alive, Cell::Dead, Cell::Alive],
            vec![Cell::Dead, Cell::Alive, Cell::Dead],
        ];
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.living_count(), 3);
        assert_eq!(grid.get(2, 0), Some(Cell::Alive));
        assert_eq!(grid.get(2, 1), Some(Cell::Dead));
        assert_eq!(grid.get(3, 0), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec![Cell::Dead; 3], vec![Cell::Dead; 2]];
        assert_eq!(
            Grid::from_rows(rows),
            Err(GridError::RaggedRows { row: 1, len: 2, expected: 3 })
        );
    }

    #[test]
    fn test_parse() {
        let grid = Grid::parse(".#.\n#.#\n.#.\n", '#', '.').unwrap();
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.living_cells(), vec![(1, 0), (0, 1), (2, 1), (1, 2)]);

        let err = Grid::parse(".#.\n#X#\n", '#', '.').unwrap_err();
        assert_eq!(err, GridError::InvalidSymbol { symbol: 'X', x: 1, y: 1 });
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(grid.set(2, 0, Cell::Alive).is_err());
        assert!(grid.set(0, 2, Cell::Alive).is_err());
        assert!(!grid.is_alive(5, 5));
    }

    #[test]
    fn test_neighbor_counting() {
        let grid = Grid::parse("###\n#.#\n###\n", '#', '.').unwrap();
        assert_eq!(grid.count_neighbors(1, 1), 8);
    }

    #[test]
    fn test_wrap_top_left_sees_bottom_right() {
        let grid = single(5, 4, 4, 3);
        assert_eq!(grid.count_neighbors(0, 0), 1);
        assert_eq!(grid.count_neighbors(2, 1), 0);
    }

    #[test]
    fn test_wrap_all_corners() {
        let (w, h) = (6, 5);
        let corners = [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)];
        for &(cx, cy) in &corners {
            let grid = single(w, h, cx, cy);
            let diagonal = (w - 1 - cx, h - 1 - cy);
            assert_eq!(
                grid.count_neighbors(diagonal.0, diagonal.1),
                1,
                "corner {:?} not seen from {:?}",
                (cx, cy),
                diagonal
            );
        }
    }

    #[test]
    fn test_wrap_edges() {
        // left/right edge
        let grid = single(5, 5, 4, 2);
        assert_eq!(grid.count_neighbors(0, 2), 1);
        // top/bottom edge
        let grid = single(5, 5, 2, 0);
        assert_eq!(grid.count_neighbors(2, 4), 1);
    }

    #[test]
    fn test_small_grid_counts_duplicates() {
        let grid = Grid::parse("#.\n.#\n", '#', '.').unwrap();
        assert_eq!(grid.count_neighbors(0, 0), 4);

        let one = Grid::filled(1, 1, Cell::Alive).unwrap();
        assert_eq!(one.count_neighbors(0, 0), 8);
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let mut order = Vec::new();
        Grid::from_fn(2, 2, |x, y| {
            order.push((x, y));
            Cell::Dead
        })
        .unwrap();
        assert_eq!(order, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_density() {
        let grid = Grid::parse("#.\n..\n", '#', '.').unwrap();
        assert!((grid.density() - 0.25).abs() < f64::EPSILON);
        assert_eq!(grid.rows().count(), 2);
    }
}
