//! Lattice table finding from ruling lines.
//!
//! Edges are clipped to the search region, snapped and joined, then
//! intersected. Every intersection that is the top-left corner of a closed
//! box (all four sides backed by shared edges) yields a cell, and cells that
//! share corners are grouped into tables.

use std::collections::{HashMap, VecDeque};

use crate::model::{Grid, Rect};
use crate::parser::TableSettings;

use super::page::{Ruling, Word};
use super::text::{words_to_text, DEFAULT_Y_TOLERANCE};

/// Edges shorter than this after joining are discarded.
const MIN_EDGE_LENGTH: f32 = 3.0;

/// A ruling that deviates by no more than this from its axis counts as straight.
const AXIS_SLOP: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

/// An axis-aligned ruling edge. `pos` is the fixed coordinate (y for
/// horizontal edges, x for vertical ones), `start..end` the span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Edge {
    pub axis: Axis,
    pub pos: f32,
    pub start: f32,
    pub end: f32,
}

impl Edge {
    fn horizontal(y: f32, a: f32, b: f32) -> Self {
        Self {
            axis: Axis::Horizontal,
            pos: y,
            start: a.min(b),
            end: a.max(b),
        }
    }

    fn vertical(x: f32, a: f32, b: f32) -> Self {
        Self {
            axis: Axis::Vertical,
            pos: x,
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub(crate) fn from_ruling(line: &Ruling) -> Option<Self> {
        let dx = (line.x1 - line.x0).abs();
        let dy = (line.bottom - line.top).abs();

        if dy <= AXIS_SLOP && dx > 0.0 {
            Some(Self::horizontal((line.top + line.bottom) / 2.0, line.x0, line.x1))
        } else if dx <= AXIS_SLOP && dy > 0.0 {
            Some(Self::vertical((line.x0 + line.x1) / 2.0, line.top, line.bottom))
        } else {
            None
        }
    }

    pub(crate) fn from_rect(rect: &Rect) -> [Self; 4] {
        [
            Self::horizontal(rect.y1, rect.x1, rect.x2),
            Self::horizontal(rect.y2, rect.x1, rect.x2),
            Self::vertical(rect.x1, rect.y1, rect.y2),
            Self::vertical(rect.x2, rect.y1, rect.y2),
        ]
    }

    fn length(&self) -> f32 {
        self.end - self.start
    }

    fn clip(&self, region: &Rect) -> Option<Self> {
        let (lo, hi, cross_lo, cross_hi) = match self.axis {
            Axis::Horizontal => (region.y1, region.y2, region.x1, region.x2),
            Axis::Vertical => (region.x1, region.x2, region.y1, region.y2),
        };
        if self.pos < lo || self.pos > hi {
            return None;
        }

        let start = self.start.max(cross_lo);
        let end = self.end.min(cross_hi);
        (end > start).then_some(Self { start, end, ..*self })
    }
}

/// Align edges of the same axis whose positions are within `tolerance` of
/// their neighbour to the cluster mean.
fn snap_edges(edges: Vec<Edge>, tolerance: f32) -> Vec<Edge> {
    let mut out = Vec::with_capacity(edges.len());

    for axis in [Axis::Horizontal, Axis::Vertical] {
        let mut group: Vec<Edge> = edges.iter().copied().filter(|e| e.axis == axis).collect();
        group.sort_by(|a, b| a.pos.partial_cmp(&b.pos).unwrap_or(std::cmp::Ordering::Equal));

        let mut cluster: Vec<Edge> = Vec::new();
        for edge in group {
            if let Some(last) = cluster.last() {
                if edge.pos - last.pos > tolerance {
                    flush_cluster(&mut cluster, &mut out);
                }
            }
            cluster.push(edge);
        }
        flush_cluster(&mut cluster, &mut out);
    }

    out
}

fn flush_cluster(cluster: &mut Vec<Edge>, out: &mut Vec<Edge>) {
    if cluster.is_empty() {
        return;
    }
    let mean = cluster.iter().map(|e| e.pos).sum::<f32>() / cluster.len() as f32;
    out.extend(cluster.drain(..).map(|e| Edge { pos: mean, ..e }));
}

/// Merge collinear edges that overlap or sit within `tolerance` of each other.
fn join_edges(mut edges: Vec<Edge>, tolerance: f32) -> Vec<Edge> {
    edges.sort_by(|a, b| {
        (a.axis == Axis::Vertical)
            .cmp(&(b.axis == Axis::Vertical))
            .then(a.pos.partial_cmp(&b.pos).unwrap_or(std::cmp::Ordering::Equal))
            .then(a.start.partial_cmp(&b.start).unwrap_or(std::cmp::Ordering::Equal))
    });

    let mut joined: Vec<Edge> = Vec::with_capacity(edges.len());
    for edge in edges {
        match joined.last_mut() {
            Some(last)
                if last.axis == edge.axis
                    && last.pos == edge.pos
                    && edge.start <= last.end + tolerance =>
            {
                last.end = last.end.max(edge.end);
            }
            _ => joined.push(edge),
        }
    }
    joined
}

#[derive(Debug)]
struct Intersection {
    x: f32,
    y: f32,
    horizontal: Vec<usize>,
    vertical: Vec<usize>,
}

type PointKey = (u32, u32);

fn key(x: f32, y: f32) -> PointKey {
    (x.to_bits(), y.to_bits())
}

fn intersections(edges: &[Edge], tolerance: f32) -> Vec<Intersection> {
    let mut points: Vec<Intersection> = Vec::new();
    let mut index: HashMap<PointKey, usize> = HashMap::new();

    for (vi, v) in edges.iter().enumerate().filter(|(_, e)| e.axis == Axis::Vertical) {
        for (hi, h) in edges.iter().enumerate().filter(|(_, e)| e.axis == Axis::Horizontal) {
            let meets = v.pos >= h.start - tolerance
                && v.pos <= h.end + tolerance
                && h.pos >= v.start - tolerance
                && h.pos <= v.end + tolerance;
            if !meets {
                continue;
            }

            let slot = *index.entry(key(v.pos, h.pos)).or_insert_with(|| {
                points.push(Intersection {
                    x: v.pos,
                    y: h.pos,
                    horizontal: Vec::new(),
                    vertical: Vec::new(),
                });
                points.len() - 1
            });
            let point = &mut points[slot];
            if !point.horizontal.contains(&hi) {
                point.horizontal.push(hi);
            }
            if !point.vertical.contains(&vi) {
                point.vertical.push(vi);
            }
        }
    }

    points.sort_by(|a, b| {
        a.y.partial_cmp(&b.y)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
    });
    points
}

fn connected(a: &Intersection, b: &Intersection) -> bool {
    if a.x == b.x {
        a.vertical.iter().any(|e| b.vertical.contains(e))
    } else if a.y == b.y {
        a.horizontal.iter().any(|e| b.horizontal.contains(e))
    } else {
        false
    }
}

/// The smallest closed box for each intersection taken as a top-left corner.
fn find_cells(points: &[Intersection]) -> Vec<Rect> {
    let lookup: HashMap<PointKey, usize> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (key(p.x, p.y), i))
        .collect();

    let mut cells = Vec::new();
    for (i, corner) in points.iter().enumerate() {
        let rest = &points[i + 1..];
        let below = rest.iter().filter(|p| p.x == corner.x);
        let right: Vec<&Intersection> = rest.iter().filter(|p| p.y == corner.y).collect();

        'search: for b in below {
            if !connected(corner, b) {
                continue;
            }
            for r in &right {
                if !connected(corner, r) {
                    continue;
                }
                let Some(&opposite) = lookup.get(&key(r.x, b.y)) else {
                    continue;
                };
                let opposite = &points[opposite];
                if connected(opposite, r) && connected(opposite, b) {
                    cells.push(Rect::new(corner.x, corner.y, r.x, b.y));
                    break 'search;
                }
            }
        }
    }
    cells
}

/// A group of cells forming one table.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LatticeTable {
    pub bbox: Rect,
    pub cells: Vec<Rect>,
}

impl LatticeTable {
    /// Lay the cells out as rows by distinct top and columns by distinct
    /// left edge. Positions without a cell are empty strings.
    pub(crate) fn rows(&self, words: &[&Word]) -> Grid {
        let tops = distinct(self.cells.iter().map(|c| c.y1));
        let lefts = distinct(self.cells.iter().map(|c| c.x1));

        let mut grid = vec![vec![String::new(); lefts.len()]; tops.len()];
        for cell in &self.cells {
            let (Some(r), Some(c)) = (
                tops.iter().position(|&t| t == cell.y1),
                lefts.iter().position(|&l| l == cell.x1),
            ) else {
                continue;
            };
            let inside: Vec<&Word> = words
                .iter()
                .copied()
                .filter(|w| {
                    let (x, y) = w.center();
                    cell.contains_point(x, y)
                })
                .collect();
            grid[r][c] = words_to_text(&inside, DEFAULT_Y_TOLERANCE);
        }
        grid
    }
}

fn distinct(values: impl Iterator<Item = f32>) -> Vec<f32> {
    let mut out: Vec<f32> = values.collect();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    out.dedup();
    out
}

/// Group cells that share at least one corner. Single-cell groups are dropped.
fn group_cells(cells: Vec<Rect>) -> Vec<LatticeTable> {
    let corners = |c: &Rect| {
        [
            key(c.x1, c.y1),
            key(c.x2, c.y1),
            key(c.x1, c.y2),
            key(c.x2, c.y2),
        ]
    };

    let mut by_corner: HashMap<PointKey, Vec<usize>> = HashMap::new();
    for (i, cell) in cells.iter().enumerate() {
        for k in corners(cell) {
            by_corner.entry(k).or_default().push(i);
        }
    }

    let mut seen = vec![false; cells.len()];
    let mut tables = Vec::new();
    for start in 0..cells.len() {
        if seen[start] {
            continue;
        }
        seen[start] = true;

        let mut members = Vec::new();
        let mut queue = VecDeque::from([start]);
        while let Some(i) = queue.pop_front() {
            members.push(cells[i]);
            for k in corners(&cells[i]) {
                for &j in by_corner.get(&k).into_iter().flatten() {
                    if !seen[j] {
                        seen[j] = true;
                        queue.push_back(j);
                    }
                }
            }
        }

        if members.len() > 1 {
            let bbox = members[1..]
                .iter()
                .fold(members[0], |acc, cell| acc.union(cell));
            tables.push(LatticeTable {
                bbox,
                cells: members,
            });
        }
    }

    tables.sort_by(|a, b| {
        a.bbox
            .y1
            .partial_cmp(&b.bbox.y1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.bbox.x1.partial_cmp(&b.bbox.x1).unwrap_or(std::cmp::Ordering::Equal))
    });
    tables
}

/// Find ruled tables inside `region`.
pub(crate) fn find_tables(
    edges: Vec<Edge>,
    region: &Rect,
    settings: &TableSettings,
) -> Vec<LatticeTable> {
    let clipped: Vec<Edge> = edges.iter().filter_map(|e| e.clip(region)).collect();
    let snapped = snap_edges(clipped, settings.snap_tolerance);
    let edges: Vec<Edge> = join_edges(snapped, settings.snap_tolerance)
        .into_iter()
        .filter(|e| e.length() >= MIN_EDGE_LENGTH)
        .collect();

    let points = intersections(&edges, settings.intersection_tolerance);
    let cells = find_cells(&points);
    let tables = group_cells(cells);
    log::trace!(
        "lattice: {} edges, {} intersections, {} tables",
        edges.len(),
        points.len(),
        tables.len()
    );
    tables
}
