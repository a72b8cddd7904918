use motion_fast_types::{FrameError, FrameResult};

use crate::grid::GridSums;

/// Grid-space coordinate of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCoord {
    pub x: usize,
    pub y: usize,
}

/// A connected cluster of active grid cells.
#[derive(Debug, Clone)]
pub struct Segment {
    cells: Vec<CellCoord>,
}

impl Segment {
    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Directed neighbor offsets used for edge generation: right, down,
/// up-right, down-right. The set is deliberately not the full
/// 8-neighborhood; scanning row-major with these four offsets visits every
/// unordered adjacent pair at most once, and an active cell with no active
/// neighbor in any of the four directions never joins a segment, which
/// suppresses single-cell noise.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, -1), (1, 1)];

struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cursor = x;
        while self.parent[cursor] != root {
            let next = self.parent[cursor];
            self.parent[cursor] = root;
            cursor = next;
        }
        root
    }

    /// Union by size; equal sizes keep the lower root index so the merge
    /// survivor does not depend on edge order.
    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }
        let (winner, loser) = if self.size[root_a] > self.size[root_b]
            || (self.size[root_a] == self.size[root_b] && root_a < root_b)
        {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[loser] = winner;
        self.size[winner] += self.size[loser];
    }
}

/// Clusters over-threshold cells of a single-channel grid into connected
/// segments.
///
/// A cell is active when its sum is at least `threshold`. Edges between
/// adjacent active cells are generated in row-major scan order and folded
/// into a disjoint-set; cells that never participate in an edge appear in no
/// segment. Segments come back in first-encountered (row-major) order with
/// their member cells in the same order.
pub fn segment_grid(grid: &GridSums, threshold: u64) -> FrameResult<Vec<Segment>> {
    if grid.channels() != 1 {
        return Err(FrameError::invalid_argument(format!(
            "segmentation expects a single-channel grid, got {} channels",
            grid.channels()
        )));
    }

    let grid_width = grid.grid_width();
    let grid_height = grid.grid_height();
    let cell_count = grid_width * grid_height;

    let mut active = vec![false; cell_count];
    for gy in 0..grid_height {
        for gx in 0..grid_width {
            active[gy * grid_width + gx] = grid.sum(gx, gy, 0) >= threshold;
        }
    }

    let mut dsu = DisjointSet::new(cell_count);
    let mut linked = vec![false; cell_count];

    for gy in 0..grid_height {
        for gx in 0..grid_width {
            let idx = gy * grid_width + gx;
            if !active[idx] {
                continue;
            }
            for (dx, dy) in NEIGHBOR_OFFSETS {
                let nx = gx as isize + dx;
                let ny = gy as isize + dy;
                if nx < 0 || ny < 0 || nx >= grid_width as isize || ny >= grid_height as isize {
                    continue;
                }
                let neighbor = ny as usize * grid_width + nx as usize;
                if !active[neighbor] {
                    continue;
                }
                dsu.union(idx, neighbor);
                linked[idx] = true;
                linked[neighbor] = true;
            }
        }
    }

    let mut segment_of_root: Vec<Option<usize>> = vec![None; cell_count];
    let mut segments: Vec<Segment> = Vec::new();

    for gy in 0..grid_height {
        for gx in 0..grid_width {
            let idx = gy * grid_width + gx;
            if !linked[idx] {
                continue;
            }
            let root = dsu.find(idx);
            let slot = match segment_of_root[root] {
                Some(slot) => slot,
                None => {
                    segment_of_root[root] = Some(segments.len());
                    segments.push(Segment { cells: Vec::new() });
                    segments.len() - 1
                }
            };
            segments[slot].cells.push(CellCoord { x: gx, y: gy });
        }
    }

    Ok(segments)
}

/// The segment with the most cells; ties go to the first-encountered one.
pub fn dominant_segment(segments: &[Segment]) -> Option<&Segment> {
    let mut best: Option<&Segment> = None;
    for segment in segments {
        match best {
            Some(current) if segment.len() <= current.len() => {}
            _ => best = Some(segment),
        }
    }
    best
}
