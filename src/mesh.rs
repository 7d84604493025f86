//! The cloth mesh: a grid of point masses joined by links, and the passes
//! that relax, integrate and cut it.

use crate::config::ClothParams;
use crate::error::ClothError;
use crate::float::Float;
use crate::link::Link;
use crate::observer::StepObserver;
use crate::point::{Interaction, PointMass};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Points and the links between them.
///
/// Point at grid cell (col, row) has index `row * cols + col`. Links only ever
/// disappear; a fresh mesh is the only way to get them back.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh<F: Float> {
    points: AllocVec<PointMass<F>>,
    links: AllocVec<Link>,
    cols: usize,
    rows: usize,
}

impl<F: Float> Mesh<F> {
    /// A mesh with no points and no links.
    pub fn empty() -> Self {
        Mesh { points: AllocVec::new(), links: AllocVec::new(), cols: 0, rows: 0 }
    }

    /// Build a `cols x rows` cloth centred horizontally in a viewport of width
    /// `viewport_width`, hanging `top_padding` below the top edge.
    ///
    /// Points are spaced `rest_distance` apart and the top row is pinned. Each
    /// point links to its left neighbour and to the point above; there are no
    /// diagonals. Output is fully determined by the inputs.
    pub fn generate(
        cols: usize,
        rows: usize,
        viewport_width: F,
        params: &ClothParams<F>,
    ) -> Result<Self, ClothError> {
        if cols == 0 || rows == 0 {
            return Err(ClothError::InvalidGridDimensions);
        }
        Ok(Self::build(cols, rows, viewport_width, params))
    }

    /// A fresh `quality x quality` cloth.
    pub fn reset(viewport_width: F, params: &ClothParams<F>) -> Self {
        // Validated params guarantee quality >= 1.
        let n = params.config.quality;
        Self::build(n, n, viewport_width, params)
    }

    fn build(cols: usize, rows: usize, viewport_width: F, params: &ClothParams<F>) -> Self {
        let spacing = params.rest_distance;
        let start_x =
            viewport_width * F::half() - F::from_usize(cols) * spacing * F::half();
        let start_y = params.config.top_padding;

        let mut points = AllocVec::with_capacity(cols * rows);
        let mut links = AllocVec::with_capacity(2 * cols * rows);

        for row in 0..rows {
            for col in 0..cols {
                let pos = Vec2::new(
                    start_x + F::from_usize(col) * spacing,
                    start_y + F::from_usize(row) * spacing,
                );
                let index = points.len();

                // Top row is the curtain rod.
                let point = if row == 0 { PointMass::pinned(pos) } else { PointMass::new(pos) };

                if col > 0 {
                    links.push(Link::new(index, index - 1));
                }
                if row > 0 {
                    links.push(Link::new(index, index - cols));
                }

                points.push(point);
            }
        }

        Mesh { points, links, cols, rows }
    }

    /// Run `params.config.solves` relaxation passes over every link, dropping
    /// links that tear. Returns the number torn.
    ///
    /// Each pass walks the links from last to first so removal never skips a
    /// link, and removal keeps the order of the survivors.
    pub fn relax<O: StepObserver>(&mut self, params: &ClothParams<F>, observer: &mut O) -> usize {
        let rest = params.rest_distance;
        let tear = params.tear_distance;
        let mut total = 0;

        for iteration in 0..params.config.solves {
            let mut torn = 0;
            for k in (0..self.links.len()).rev() {
                let link = self.links[k];
                if !link.solve(&mut self.points, rest, tear) {
                    self.links.remove(k);
                    torn += 1;
                }
            }
            observer.on_relax_iteration(iteration, torn);
            total += torn;
        }

        total
    }

    /// Update every point for one substep.
    pub fn integrate(
        &mut self,
        dt: F,
        interaction: &Interaction<F>,
        bounds: Vec2<F>,
        params: &ClothParams<F>,
    ) {
        for p in self.points.iter_mut() {
            p.update(dt, interaction, bounds, params);
        }
    }

    /// Remove every link whose midpoint is within `radius` of `at`. Returns
    /// the number removed.
    pub fn cut(&mut self, at: Vec2<F>, radius: F) -> usize {
        let before = self.links.len();
        let points = &self.points;
        self.links.retain(|link| !link.is_near(points, at, radius));
        before - self.links.len()
    }

    /// Point index for grid cell (col, row).
    pub fn index(&self, col: usize, row: usize) -> Result<usize, ClothError> {
        if col >= self.cols || row >= self.rows {
            return Err(ClothError::CellOutOfBounds { col, row, cols: self.cols, rows: self.rows });
        }
        Ok(row * self.cols + col)
    }

    pub fn position_at(&self, col: usize, row: usize) -> Result<Vec2<F>, ClothError> {
        Ok(self.points[self.index(col, row)?].pos)
    }

    pub fn pin(&mut self, col: usize, row: usize) -> Result<(), ClothError> {
        let idx = self.index(col, row)?;
        self.points[idx].pin();
        Ok(())
    }

    pub fn unpin(&mut self, col: usize, row: usize) -> Result<(), ClothError> {
        let idx = self.index(col, row)?;
        self.points[idx].unpin();
        Ok(())
    }

    /// Remove every link attached to cell (col, row). Returns the number removed.
    pub fn tear_at(&mut self, col: usize, row: usize) -> Result<usize, ClothError> {
        let idx = self.index(col, row)?;
        let before = self.links.len();
        self.links.retain(|link| !link.touches(idx));
        Ok(before - self.links.len())
    }

    pub fn points(&self) -> &[PointMass<F>] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [PointMass<F>] {
        &mut self.points
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    /// Endpoint positions of every surviving link, in link order.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.links.iter().map(move |link| link.endpoints(&self.points))
    }

    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn link_count(&self) -> usize { self.links.len() }
}

impl<F: Float> Default for Mesh<F> {
    fn default() -> Self {
        Self::empty()
    }
}
