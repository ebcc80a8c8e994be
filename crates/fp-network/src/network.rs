//! Air-route network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the `EdgeId` range:
//!
//! ```text
//! node_out_start[n] .. node_out_start[n+1]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_weight`, `edge_segment`)
//! are sorted by origin node and indexed by `EdgeId`, so the planner's
//! relaxation loop is a contiguous scan.
//!
//! Points map to dense `NodeId`s through a hash map, and endpoint pairs map
//! to their `EdgeId` the same way, giving O(1) `key` and `edge` lookups.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest network point.
//! Used to snap airport coordinates onto the network.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use fp_core::{Coordinate, EdgeId, NodeId, SegmentId};

use crate::{NetworkError, NetworkResult, Segment};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space.  Good enough to pick the
    /// closest point of a regional network; not a great-circle metric.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── AirNetwork ────────────────────────────────────────────────────────────────

/// Directed, weighted air-route graph in CSR format.
///
/// Immutable once built; do not construct directly, use
/// [`AirNetworkBuilder`].
pub struct AirNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Coordinate of each vertex.  Indexed by `NodeId`.
    pub points: Vec<Coordinate>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Length = `vertex_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Origin vertex of each edge.
    pub edge_from: Vec<NodeId>,

    /// Destination vertex of each edge.
    pub edge_to: Vec<NodeId>,

    /// Static edge weight (normally the segment length in metres).
    /// Always finite and non-negative.
    pub edge_weight: Vec<f64>,

    /// Segment traversed by each edge.
    pub edge_segment: Vec<SegmentId>,

    // ── Segment table ─────────────────────────────────────────────────────
    /// Indexed by `SegmentId`.
    pub segments: Vec<Segment>,

    keys:        FxHashMap<Coordinate, NodeId>,
    edge_index:  FxHashMap<(NodeId, NodeId), EdgeId>,
    spatial_idx: RTree<NodeEntry>,
}

impl AirNetwork {
    /// Construct a network with no vertices or edges.  Every planning
    /// request against it fails with an invalid-vertex error.
    pub fn empty() -> Self {
        AirNetworkBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    // ── Vertex lookup ─────────────────────────────────────────────────────

    /// Dense key of `point`, or `None` if it is not a vertex.
    #[inline]
    pub fn key(&self, point: Coordinate) -> Option<NodeId> {
        self.keys.get(&point).copied()
    }

    #[inline]
    pub fn contains(&self, point: Coordinate) -> bool {
        self.keys.contains_key(&point)
    }

    /// Coordinate of a vertex.
    ///
    /// # Panics
    /// If `node` is out of range.
    #[inline]
    pub fn point(&self, node: NodeId) -> Coordinate {
        self.points[node.index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s leaving `node`.  Empty for an unknown
    /// node.  No ordering is promised.
    #[inline]
    pub fn outgoing_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let (start, end) = self.out_range(node);
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node`.
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let (start, end) = self.out_range(node);
        end - start
    }

    fn out_range(&self, node: NodeId) -> (usize, usize) {
        if node.index() >= self.vertex_count() {
            return (0, 0);
        }
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start, end)
    }

    /// The endpoint of `edge` that is not `node`, or `None` when `node` is
    /// not an endpoint of `edge`.
    pub fn opposite(&self, node: NodeId, edge: EdgeId) -> Option<NodeId> {
        let from = *self.edge_from.get(edge.index())?;
        let to   = self.edge_to[edge.index()];
        if node == from {
            Some(to)
        } else if node == to {
            Some(from)
        } else {
            None
        }
    }

    /// The directed edge from `origin` to `dest`, if adjacent.
    #[inline]
    pub fn edge(&self, origin: NodeId, dest: NodeId) -> Option<EdgeId> {
        self.edge_index.get(&(origin, dest)).copied()
    }

    /// The segment flown from `origin` to `dest`, if adjacent.
    pub fn segment_between(&self, origin: NodeId, dest: NodeId) -> Option<&Segment> {
        self.edge(origin, dest)
            .map(|e| &self.segments[self.edge_segment[e.index()].index()])
    }

    #[inline]
    pub fn edge_origin(&self, edge: EdgeId) -> NodeId {
        self.edge_from[edge.index()]
    }

    #[inline]
    pub fn edge_destination(&self, edge: EdgeId) -> NodeId {
        self.edge_to[edge.index()]
    }

    #[inline]
    pub fn edge_weight(&self, edge: EdgeId) -> f64 {
        self.edge_weight[edge.index()]
    }

    #[inline]
    pub fn edge_segment_id(&self, edge: EdgeId) -> SegmentId {
        self.edge_segment[edge.index()]
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.index())
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The network point closest to `pos`.  `None` only for an empty network.
    pub fn nearest_point(&self, pos: Coordinate) -> Option<Coordinate> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| self.points[e.id.index()])
    }
}

// ── AirNetworkBuilder ─────────────────────────────────────────────────────────

/// Construct an [`AirNetwork`] incrementally, then call [`build`](Self::build).
///
/// Vertices receive `NodeId`s in insertion order.  Edges may be added in any
/// order; `build()` sorts them by origin, constructs the CSR arrays, the
/// endpoint index, and bulk-loads the R-tree.
///
/// # Example
///
/// ```
/// use fp_core::Coordinate;
/// use fp_network::{AirNetworkBuilder, Segment};
///
/// let lisbon = Coordinate::new(38.7742, -9.1342);
/// let porto  = Coordinate::new(41.2481, -8.6814);
///
/// let mut b = AirNetworkBuilder::new();
/// b.connect(lisbon, porto, Segment::between("UN725", lisbon, porto)).unwrap();
/// let net = b.build();
/// assert_eq!(net.vertex_count(), 2);
/// assert_eq!(net.edge_count(), 2); // both directions
/// ```
pub struct AirNetworkBuilder {
    points:    Vec<Coordinate>,
    keys:      FxHashMap<Coordinate, NodeId>,
    segments:  Vec<Segment>,
    raw_edges: Vec<RawEdge>,
    pairs:     FxHashSet<(NodeId, NodeId)>,
}

struct RawEdge {
    from:    NodeId,
    to:      NodeId,
    segment: SegmentId,
    weight:  f64,
}

impl AirNetworkBuilder {
    pub fn new() -> Self {
        Self {
            points:    Vec::new(),
            keys:      FxHashMap::default(),
            segments:  Vec::new(),
            raw_edges: Vec::new(),
            pairs:     FxHashSet::default(),
        }
    }

    /// Pre-allocate for the expected number of vertices and edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            points:    Vec::with_capacity(vertices),
            keys:      FxHashMap::with_capacity_and_hasher(vertices, Default::default()),
            segments:  Vec::with_capacity(edges / 2),
            raw_edges: Vec::with_capacity(edges),
            pairs:     FxHashSet::with_capacity_and_hasher(edges, Default::default()),
        }
    }

    /// Add a vertex and return its key.  Adding a point twice returns the
    /// key it already has.
    pub fn add_vertex(&mut self, point: Coordinate) -> NodeId {
        if let Some(&id) = self.keys.get(&point) {
            return id;
        }
        let id = NodeId(self.points.len() as u32);
        self.points.push(point);
        self.keys.insert(point, id);
        id
    }

    /// Key of a vertex added earlier.
    pub fn key(&self, point: Coordinate) -> Option<NodeId> {
        self.keys.get(&point).copied()
    }

    /// Register a segment and return its id.  Edges reference segments by id.
    pub fn add_segment(&mut self, segment: Segment) -> SegmentId {
        let id = SegmentId(self.segments.len() as u32);
        self.segments.push(segment);
        id
    }

    /// Add a **directed** edge, reporting why it was rejected.
    pub fn try_add_edge(
        &mut self,
        origin:  Coordinate,
        dest:    Coordinate,
        segment: SegmentId,
        weight:  f64,
    ) -> NetworkResult<()> {
        let from = self.key(origin).ok_or(NetworkError::UnknownVertex(origin))?;
        let to   = self.key(dest).ok_or(NetworkError::UnknownVertex(dest))?;
        if segment.index() >= self.segments.len() {
            return Err(NetworkError::UnknownSegment(segment));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(NetworkError::InvalidWeight(weight));
        }
        if !self.pairs.insert((from, to)) {
            return Err(NetworkError::DuplicateEdge { from: origin, to: dest });
        }
        self.raw_edges.push(RawEdge { from, to, segment, weight });
        Ok(())
    }

    /// Add a **directed** edge.  Returns `false` (and adds nothing) when an
    /// endpoint or the segment is unknown, the weight is negative or not
    /// finite, or the pair is already connected.
    pub fn add_edge(
        &mut self,
        origin:  Coordinate,
        dest:    Coordinate,
        segment: SegmentId,
        weight:  f64,
    ) -> bool {
        match self.try_add_edge(origin, dest, segment, weight) {
            Ok(()) => true,
            Err(err) => {
                debug!(%err, "edge rejected");
                false
            }
        }
    }

    /// Convenience: register `segment` and connect `a` and `b` in **both
    /// directions**, each edge weighted by the segment length.  Missing
    /// vertices are added.  Nothing but the vertices is added on error.
    pub fn connect(
        &mut self,
        a:       Coordinate,
        b:       Coordinate,
        segment: Segment,
    ) -> NetworkResult<SegmentId> {
        let ka = self.add_vertex(a);
        let kb = self.add_vertex(b);
        let weight = segment.length.value();
        if !weight.is_finite() || weight < 0.0 {
            return Err(NetworkError::InvalidWeight(weight));
        }
        if self.pairs.contains(&(ka, kb)) {
            return Err(NetworkError::DuplicateEdge { from: a, to: b });
        }
        if self.pairs.contains(&(kb, ka)) {
            return Err(NetworkError::DuplicateEdge { from: b, to: a });
        }
        let id = self.add_segment(segment);
        self.try_add_edge(a, b, id, weight)?;
        self.try_add_edge(b, a, id, weight)?;
        Ok(id)
    }

    pub fn vertex_count(&self) -> usize { self.points.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce an [`AirNetwork`].
    ///
    /// Time complexity: O(E log E) for the edge sort + O(N log N) for the
    /// R-tree bulk load.
    pub fn build(self) -> AirNetwork {
        let node_count = self.points.len();
        let edge_count = self.raw_edges.len();

        // Stable sort keeps insertion order among edges of one origin.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:    Vec<NodeId>    = raw.iter().map(|e| e.from).collect();
        let edge_to:      Vec<NodeId>    = raw.iter().map(|e| e.to).collect();
        let edge_weight:  Vec<f64>       = raw.iter().map(|e| e.weight).collect();
        let edge_segment: Vec<SegmentId> = raw.iter().map(|e| e.segment).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        let edge_index: FxHashMap<(NodeId, NodeId), EdgeId> = raw
            .iter()
            .enumerate()
            .map(|(i, e)| ((e.from, e.to), EdgeId(i as u32)))
            .collect();

        let entries: Vec<NodeEntry> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| NodeEntry {
                point: [p.lat, p.lon],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        debug!(vertices = node_count, edges = edge_count, "air network built");

        AirNetwork {
            points: self.points,
            node_out_start,
            edge_from,
            edge_to,
            edge_weight,
            edge_segment,
            segments: self.segments,
            keys: self.keys,
            edge_index,
            spatial_idx,
        }
    }
}

impl Default for AirNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
