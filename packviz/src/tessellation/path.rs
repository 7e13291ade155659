use crate::geometry::primitives::Point;
use itertools::Itertools;

/// Flat sequence of points handed to a renderer.
///
/// Disjoint sub-paths are separated by a single break marker (`None`).
/// A path never starts or ends with a break marker, and never contains two in a row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    nodes: Vec<Option<Point>>,
}

impl Path {
    pub fn new() -> Self {
        Path { nodes: vec![] }
    }

    /// Appends a new sub-path, preceded by a break marker if the path is not empty.
    /// Empty sub-paths are ignored.
    pub fn push_subpath(&mut self, points: impl IntoIterator<Item = Point>) {
        let mut points = points.into_iter().peekable();
        if points.peek().is_none() {
            return;
        }
        if !self.nodes.is_empty() {
            self.nodes.push(None);
        }
        self.nodes.extend(points.map(Some));
    }

    /// Appends all sub-paths of `other`, preceded by a break marker if both paths are non-empty.
    pub fn append(&mut self, other: Path) {
        if other.nodes.is_empty() {
            return;
        }
        if !self.nodes.is_empty() {
            self.nodes.push(None);
        }
        self.nodes.extend(other.nodes);
    }

    /// All points and break markers, in order
    pub fn nodes(&self) -> &[Option<Point>] {
        &self.nodes
    }

    pub fn subpaths(&self) -> impl Iterator<Item = Vec<Point>> + '_ {
        self.nodes
            .split(|n| n.is_none())
            .filter(|s| !s.is_empty())
            .map(|s| s.iter().flatten().copied().collect_vec())
    }

    pub fn n_subpaths(&self) -> usize {
        self.subpaths().count()
    }

    pub fn n_points(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Splits the path into parallel x and y coordinate lists, with `None` at every break.
    pub fn xs_ys(&self) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
        self.nodes
            .iter()
            .map(|n| match n {
                Some(Point(x, y)) => (Some(*x), Some(*y)),
                None => (None, None),
            })
            .unzip()
    }
}
