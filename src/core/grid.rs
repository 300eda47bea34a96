//! Uniform spatial grid for the proximity pass.
//!
//! Cells are as wide as the proximity threshold, so any pair closer than the
//! threshold sits in the same cell or in adjacent ones. Only the cell itself
//! and four "forward" neighbours are scanned, which visits each unordered
//! pair of cells once.

use fnv::FnvHashMap;
use smallvec::SmallVec;

use super::field::Edge;
use super::particle::Particle;

const FORWARD_NEIGHBOURS: [(i32, i32); 4] = [(1, 0), (-1, 1), (0, 1), (1, 1)];

type Cell = (i32, i32);

#[derive(Debug, Default)]
pub struct ProximityGrid {
    cell_size: f64,
    cells: FnvHashMap<Cell, SmallVec<[usize; 8]>>,
}

impl ProximityGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-bucket every particle. `cell_size` must be positive.
    pub fn rebuild(&mut self, particles: &[Particle], cell_size: f64) {
        self.cell_size = cell_size;
        self.cells.clear();
        for (i, p) in particles.iter().enumerate() {
            let cell = self.cell_of(p);
            self.cells.entry(cell).or_default().push(i);
        }
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.len()
    }

    /// Append every pair closer than `threshold` to `out`. `threshold` must not
    /// exceed the cell size passed to [`ProximityGrid::rebuild`].
    pub fn edges(&self, particles: &[Particle], threshold: f64, out: &mut Vec<Edge>) {
        for (&(cx, cy), bucket) in &self.cells {
            for (k, &a) in bucket.iter().enumerate() {
                for &b in &bucket[k + 1..] {
                    push_if_close(particles, a, b, threshold, out);
                }
            }
            for (dx, dy) in FORWARD_NEIGHBOURS {
                let Some(other) = self.cells.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &a in bucket {
                    for &b in other {
                        push_if_close(particles, a, b, threshold, out);
                    }
                }
            }
        }
    }

    #[inline]
    fn cell_of(&self, p: &Particle) -> Cell {
        (
            (p.position.x / self.cell_size).floor() as i32,
            (p.position.y / self.cell_size).floor() as i32,
        )
    }
}

#[inline]
fn push_if_close(particles: &[Particle], a: usize, b: usize, threshold: f64, out: &mut Vec<Edge>) {
    let (a, b) = if a < b { (a, b) } else { (b, a) };
    let distance = particles[a].position.distance(particles[b].position);
    if distance < threshold {
        out.push(Edge { a, b, distance });
    }
}
