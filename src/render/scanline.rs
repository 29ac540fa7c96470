//! Scanline polygon fill with an edge table and an active edge list.
//!
//! # Algorithm
//!
//! 1. Every non-horizontal edge is keyed by its lower y, remembering its
//!    upper y, the x at its lower end, and its inverse slope `dx/dy`.
//!    Horizontal edges are dropped; they never divide.
//! 2. Each row from the polygon's lowest to highest vertex:
//!    - edges starting on the row join the active list,
//!    - edges whose upper y equals the row leave it,
//!    - the active list is sorted by current x and paired `(0,1), (2,3), ...`,
//!    - each pair fills `round(x_i)..=round(x_{i+1})`,
//!    - every active edge advances its x by its inverse slope.
//!
//! Removing an edge on the row where it ends keeps shared vertices from being
//! counted twice, at the cost of never filling the topmost row of a polygon
//! and leaving apexes one row short. That approximation is kept as-is.

use super::sink::PixelSink;
use crate::color::Rgba;
use crate::geometry::{Point2D, Polygon, Span};

/// One non-horizontal polygon edge as seen by the scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Row on which the edge leaves the active list.
    pub y_max: i32,
    /// x where the edge crosses the current row; starts at the lower endpoint.
    pub x: f32,
    /// Change in x per row.
    pub inverse_slope: f32,
}

impl Edge {
    /// Build the edge between two vertices, keyed by its lower y.
    ///
    /// Returns `None` for horizontal edges.
    #[must_use]
    pub fn between(a: Point2D, b: Point2D) -> Option<(i32, Self)> {
        if a.y == b.y {
            return None;
        }
        let x_at_y_min = if a.y < b.y { a.x } else { b.x };
        let dx = i64::from(b.x) - i64::from(a.x);
        let dy = i64::from(b.y) - i64::from(a.y);
        let inverse_slope = dx as f32 / dy as f32;
        Some((
            a.y.min(b.y),
            Self {
                y_max: a.y.max(b.y),
                x: x_at_y_min as f32,
                inverse_slope,
            },
        ))
    }
}

/// Edges keyed by the row on which they start, in ascending start order.
///
/// Storage is proportional to the number of edges, not to the polygon's
/// height; the scan walks the sorted entries with a cursor.
#[derive(Debug, Clone, Default)]
pub struct EdgeTable {
    y_min: i32,
    y_max: i32,
    entries: Vec<(i32, Edge)>,
}

impl EdgeTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the table for `polygon`, reusing the entry allocation.
    ///
    /// The row range spans all vertices, including those only touched by
    /// horizontal edges.
    pub fn build(&mut self, polygon: &Polygon) {
        self.entries.clear();

        let Some((y_min, y_max)) = polygon.y_range() else {
            self.y_min = 0;
            self.y_max = -1;
            return;
        };
        self.y_min = y_min;
        self.y_max = y_max;

        self.entries
            .extend(polygon.edges().filter_map(|(a, b)| Edge::between(a, b)));
        // Stable, so edges starting on the same row keep polygon order
        self.entries.sort_by_key(|&(start, _)| start);
    }

    /// First row of the scan.
    #[must_use]
    pub fn y_min(&self) -> i32 {
        self.y_min
    }

    /// Last row of the scan (inclusive).
    #[must_use]
    pub fn y_max(&self) -> i32 {
        self.y_max
    }

    /// Total number of non-horizontal edges in the table.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether no edge can produce coverage.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `(start_row, edge)` entries, sorted by start row.
    #[must_use]
    pub fn entries(&self) -> &[(i32, Edge)] {
        &self.entries
    }

    /// Edges starting on row `y`.
    pub fn starting_at(&self, y: i32) -> impl Iterator<Item = Edge> + '_ {
        let lo = self.entries.partition_point(|&(start, _)| start < y);
        let hi = self.entries.partition_point(|&(start, _)| start <= y);
        self.entries[lo..hi].iter().map(|&(_, edge)| edge)
    }
}

/// Edges crossing the row being scanned.
#[derive(Debug, Clone, Default)]
pub struct ActiveEdgeList {
    edges: Vec<Edge>,
}

impl ActiveEdgeList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add edges that start on the current row.
    pub fn extend_from(&mut self, edges: impl IntoIterator<Item = Edge>) {
        self.edges.extend(edges);
    }

    /// Drop edges that end on row `y`.
    pub fn retire(&mut self, y: i32) {
        self.edges.retain(|e| e.y_max != y);
    }

    /// Order edges by current x, left to right.
    pub fn sort(&mut self) {
        self.edges.sort_by(|a, b| a.x.total_cmp(&b.x));
    }

    /// Pair sorted edges into spans on row `y`.
    ///
    /// The list always holds an even number of edges during a fill: an edge
    /// is active exactly while `start <= y < y_max`, i.e. while it crosses the
    /// line `y + 0.5`, and a closed polygon crosses any such line an even
    /// number of times.
    pub fn spans(&self, y: i32) -> impl Iterator<Item = Span> + '_ {
        self.edges
            .chunks_exact(2)
            .map(move |pair| Span::new(y, pair[0].x.round() as i32, pair[1].x.round() as i32))
    }

    /// Step every edge to the next row.
    pub fn advance(&mut self) {
        for edge in &mut self.edges {
            edge.x += edge.inverse_slope;
        }
    }

    /// Current edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of active edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no edge is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Remove all edges.
    pub fn clear(&mut self) {
        self.edges.clear();
    }
}

/// Counters for one fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillStats {
    /// Rows visited.
    pub rows: u64,
    /// Spans emitted.
    pub spans: u64,
    /// Pixels covered by the spans.
    pub pixels: u64,
}

/// Reusable scratch space for scanline fills.
///
/// Holding one of these across calls avoids reallocating the edge table and
/// active list for every polygon. It carries no state between fills, so a
/// single instance may fill any sequence of polygons; share it across threads
/// only by giving each thread its own.
#[derive(Debug, Clone, Default)]
pub struct ScanlineFill {
    table: EdgeTable,
    active: ActiveEdgeList,
}

impl ScanlineFill {
    /// Create an empty filler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `polygon` and hand each span to `emit`, bottom row first.
    ///
    /// Degenerate polygons (fewer than three vertices, or only horizontal
    /// edges) produce no spans.
    pub fn spans<F: FnMut(Span)>(&mut self, polygon: &Polygon, mut emit: F) -> FillStats {
        let mut stats = FillStats::default();
        if polygon.is_degenerate() {
            return stats;
        }

        self.table.build(polygon);
        self.active.clear();
        if self.table.is_empty() {
            return stats;
        }

        let entries = self.table.entries();
        let mut cursor = 0;
        for y in self.table.y_min()..=self.table.y_max() {
            let first = cursor;
            while cursor < entries.len() && entries[cursor].0 == y {
                cursor += 1;
            }
            self.active
                .extend_from(entries[first..cursor].iter().map(|&(_, edge)| edge));
            self.active.retire(y);
            self.active.sort();
            debug_assert!(
                self.active.len() % 2 == 0,
                "closed polygon left {} active edges on row {y}",
                self.active.len()
            );

            for span in self.active.spans(y) {
                stats.spans += 1;
                stats.pixels += span.len();
                emit(span);
            }

            self.active.advance();
            stats.rows += 1;
        }

        tracing::trace!(
            vertices = polygon.len(),
            edges = self.table.edge_count(),
            rows = stats.rows,
            spans = stats.spans,
            pixels = stats.pixels,
            "scanline fill"
        );
        stats
    }

    /// Fill `polygon` with a constant color into `sink`.
    pub fn fill<S: PixelSink + ?Sized>(
        &mut self,
        polygon: &Polygon,
        color: Rgba,
        sink: &mut S,
    ) -> FillStats {
        self.spans(polygon, |span| {
            sink.plot_span(span.y, span.x_start, span.x_end, color);
        })
    }
}

/// Fill `polygon` with a constant color, allocating scratch for this call only.
pub fn fill_polygon<S: PixelSink + ?Sized>(sink: &mut S, polygon: &Polygon, color: Rgba) -> FillStats {
    ScanlineFill::new().fill(polygon, color, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PointSet;

    fn filled(coords: &[(i32, i32)]) -> PointSet {
        let mut set = PointSet::new();
        fill_polygon(&mut set, &Polygon::from_coords(coords), Rgba::WHITE);
        set
    }

    #[test]
    fn test_edge_between() {
        let (start, edge) = Edge::between(Point2D::new(4, 4), Point2D::new(0, 0)).unwrap();
        assert_eq!(start, 0);
        assert_eq!(edge.y_max, 4);
        assert_eq!(edge.x, 0.0);
        assert_eq!(edge.inverse_slope, 1.0);
        assert!(Edge::between(Point2D::new(0, 2), Point2D::new(9, 2)).is_none());
    }

    #[test]
    fn test_edge_table_starting_rows() {
        let mut table = EdgeTable::new();
        table.build(&Polygon::from_coords(&[(0, 0), (4, 0), (4, 4), (0, 4)]));
        assert_eq!((table.y_min(), table.y_max()), (0, 4));
        assert_eq!(table.edge_count(), 2);
        assert_eq!(table.starting_at(0).count(), 2);
        assert_eq!(table.starting_at(1).count(), 0);
        assert_eq!(table.starting_at(99).count(), 0);
    }

    #[test]
    fn test_edge_table_reuse_clears_previous() {
        let mut table = EdgeTable::new();
        table.build(&Polygon::from_coords(&[(0, 0), (8, 0), (4, 8)]));
        table.build(&Polygon::from_coords(&[(0, 0), (2, 0), (1, 2)]));
        assert_eq!(table.edge_count(), 2);
        let listed: usize = (0..=8).map(|y| table.starting_at(y).count()).sum();
        assert_eq!(listed, 2);
    }

    #[test]
    fn test_square_excludes_top_row() {
        let set = filled(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        assert_eq!(set.len(), 5 * 4);
        assert_eq!(set.rows(), vec![0, 1, 2, 3]);
        for y in 0..4 {
            for x in 0..=4 {
                assert!(set.contains(Point2D::new(x, y)));
            }
        }
    }

    #[test]
    fn test_triangle_apex_row_is_empty() {
        // Flat base at y=0, apex at (4, 4): both slanted edges retire on row 4.
        let set = filled(&[(0, 0), (8, 0), (4, 4)]);
        assert_eq!(set.rows(), vec![0, 1, 2, 3]);
        assert!(!set.contains(Point2D::new(4, 4)));
        // Row 3 is narrowed to the rounded edge crossings 3..=5
        let row3: Vec<i32> = set.points().filter(|p| p.y == 3).map(|p| p.x).collect();
        assert_eq!(row3, vec![3, 4, 5]);
    }

    #[test]
    fn test_concave_polygon_has_gap() {
        // A "U": two prongs joined at the bottom
        let set = filled(&[(0, 0), (9, 0), (9, 6), (6, 6), (6, 3), (3, 3), (3, 6), (0, 6)]);
        // Below the notch the row is solid
        assert!(set.contains(Point2D::new(4, 1)));
        // Inside the notch nothing is filled between the prongs
        assert!(!set.contains(Point2D::new(4, 4)));
        assert!(set.contains(Point2D::new(1, 4)));
        assert!(set.contains(Point2D::new(8, 4)));
    }

    #[test]
    fn test_degenerate_inputs_are_empty() {
        assert!(filled(&[]).is_empty());
        assert!(filled(&[(0, 0), (5, 5)]).is_empty());
        assert!(filled(&[(0, 3), (4, 3), (9, 3)]).is_empty());
    }

    #[test]
    fn test_stats_for_square() {
        let mut set = PointSet::new();
        let stats = fill_polygon(
            &mut set,
            &Polygon::from_coords(&[(0, 0), (4, 0), (4, 4), (0, 4)]),
            Rgba::RED,
        );
        assert_eq!(stats.rows, 5);
        assert_eq!(stats.spans, 4);
        assert_eq!(stats.pixels, 20);
    }

    #[test]
    fn test_fill_color_applied_uniformly() {
        let mut set = PointSet::new();
        let color = Rgba::new(1.0, 0.5, 0.0, 0.8);
        fill_polygon(
            &mut set,
            &Polygon::from_coords(&[(0, 0), (3, 0), (3, 3), (0, 3)]),
            color,
        );
        assert!(set.points().all(|p| set.color_at(p) == Some(color)));
    }

    #[test]
    fn test_scratch_reuse_matches_fresh() {
        let shapes = [
            Polygon::from_coords(&[(10, 10), (40, 12), (25, 30)]),
            Polygon::from_coords(&[(-5, -5), (5, -5), (5, 5), (-5, 5)]),
            Polygon::circle(0, 0, 6.0, crate::geometry::VertexRounding::Round),
        ];

        let mut filler = ScanlineFill::new();
        for shape in &shapes {
            let mut reused = PointSet::new();
            let mut fresh = PointSet::new();
            filler.fill(shape, Rgba::WHITE, &mut reused);
            fill_polygon(&mut fresh, shape, Rgba::WHITE);
            assert_eq!(reused, fresh);
        }
    }

    #[test]
    fn test_negative_coordinates() {
        let set = filled(&[(-4, -4), (0, -4), (0, 0), (-4, 0)]);
        assert_eq!(set.rows(), vec![-4, -3, -2, -1]);
        assert_eq!(set.len(), 20);
    }

    #[test]
    fn test_edge_table_sorted_by_start_row() {
        let mut table = EdgeTable::new();
        table.build(&Polygon::from_coords(&[(0, 5), (10, 0), (20, 9), (5, 2)]));
        let starts: Vec<i32> = table.entries().iter().map(|&(start, _)| start).collect();
        assert_eq!(starts, vec![0, 0, 2, 2]);
        assert_eq!(table.starting_at(2).count(), 2);
    }

    #[test]
    fn test_tall_polygon_table_is_sized_by_edges() {
        let mut table = EdgeTable::new();
        table.build(&Polygon::from_coords(&[
            (0, -1_000_000_000),
            (4, 1_000_000_000),
            (-4, 1_000_000_000),
        ]));
        assert_eq!(table.edge_count(), 2);
        assert_eq!((table.y_min(), table.y_max()), (-1_000_000_000, 1_000_000_000));
        assert!(table.entries.capacity() < 16);
    }

    #[test]
    fn test_far_apart_vertices_slope() {
        let (_, edge) =
            Edge::between(Point2D::new(-2_000_000_000, 0), Point2D::new(2_000_000_000, 4)).unwrap();
        assert_eq!(edge.inverse_slope, 1_000_000_000.0);
    }

    #[test]
    fn test_self_intersecting_rows_pair_evenly() {
        // Bow-tie and pentagram: the active list stays even on every row
        let bow_tie = filled(&[(0, 0), (10, 10), (10, 0), (0, 10)]);
        assert!(bow_tie.contains(Point2D::new(1, 3)));
        assert!(bow_tie.contains(Point2D::new(9, 3)));

        let star = filled(&[(50, 0), (79, 90), (2, 34), (98, 34), (21, 90)]);
        assert!(!star.is_empty());
        assert!(star.rows().iter().all(|&y| (0..90).contains(&y)));
    }
}
