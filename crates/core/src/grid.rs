//! Fixed-size 2D buffer backed by one contiguous row-major allocation.

/// 2D grid of `Copy` values.
///
/// Cells are addressed as `(x, y)` with `x` the column and `y` the row.
/// Accessors are bounds-checked and return `None` / ignore writes outside the
/// grid instead of panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: u16,
    height: u16,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    pub fn new(width: u16, height: u16, fill: T) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![fill; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the grid, filling any new cells with `fill`.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16, fill: T) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, fill);
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Row-major offset of `(x, y)`, or `None` outside the grid.
    #[inline(always)]
    pub fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<T> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, value: T) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = value;
        }
    }

    /// Value at a row-major offset previously returned by [`Grid::index`].
    #[inline(always)]
    pub fn at(&self, i: usize) -> T {
        self.cells[i]
    }

    #[inline(always)]
    pub fn put(&mut self, i: usize, value: T) {
        self.cells[i] = value;
    }

    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// One row as a slice, or `None` past the last row.
    pub fn row(&self, y: u16) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = (y as usize) * w;
        Some(&self.cells[start..start + w])
    }

    /// Iterate cells with their coordinates in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (u16, u16, T)> + '_ {
        let w = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| ((i % w) as u16, (i / w) as u16, v))
    }
}

impl Grid<char> {
    /// Render rows joined with `\n`. Handy for snapshots and debugging.
    pub fn to_text(&self) -> String {
        let mut s = String::with_capacity(self.cells.len() + self.height as usize);
        for y in 0..self.height {
            if y > 0 {
                s.push('\n');
            }
            if let Some(row) = self.row(y) {
                s.extend(row.iter());
            }
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_indexing() {
        let g = Grid::new(3, 2, 0u8);
        assert_eq!(g.index(0, 0), Some(0));
        assert_eq!(g.index(2, 0), Some(2));
        assert_eq!(g.index(0, 1), Some(3));
        assert_eq!(g.index(2, 1), Some(5));
        assert_eq!(g.index(3, 0), None);
        assert_eq!(g.index(0, 2), None);
    }

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut g = Grid::new(2, 2, '.');
        g.set(5, 5, '#');
        assert_eq!(g.get(5, 5), None);
        assert!(g.cells().iter().all(|&c| c == '.'));

        g.set(1, 1, '#');
        assert_eq!(g.get(1, 1), Some('#'));
    }

    #[test]
    fn resize_keeps_capacity_when_shrinking() {
        let mut g = Grid::new(4, 4, 0.0f64);
        let cap = g.cells.capacity();
        g.resize(2, 3, 1.0);
        assert_eq!((g.width(), g.height()), (2, 3));
        assert_eq!(g.cells().len(), 6);
        assert_eq!(g.cells.capacity(), cap);
    }

    #[test]
    fn rows_and_text() {
        let mut g = Grid::new(3, 2, ' ');
        g.set(0, 0, 'a');
        g.set(2, 1, 'b');
        assert_eq!(g.row(0), Some(&['a', ' ', ' '][..]));
        assert_eq!(g.row(2), None);
        assert_eq!(g.to_text(), "a  \n  b");
    }

    #[test]
    fn iter_cells_reports_coordinates() {
        let mut g = Grid::new(2, 2, false);
        g.set(1, 1, true);
        let lit: Vec<_> = g.iter_cells().filter(|c| c.2).map(|c| (c.0, c.1)).collect();
        assert_eq!(lit, vec![(1, 1)]);
    }
}
