//! Single-source path search over the CSR air network.
//!
//! # Algorithm
//!
//! A Dijkstra variant where the edge cost comes from a [`RouteMetric`] and
//! may have side effects on the flight state.  Relaxation happens in strict
//! visitation order: a vertex is marked visited, every outgoing edge is
//! priced (even towards already visited neighbours, since pricing can burn
//! fuel), then the cheapest unvisited frontier vertex is selected and handed
//! to [`RouteMetric::on_select`].
//!
//! The search stops as soon as the destination is visited or the frontier
//! runs dry.  An unreached destination is not an error at this level; the
//! assembler reports it.
//!
//! # Determinism
//!
//! Ties in tentative distance are broken by the lowest `NodeId`, so a given
//! network and metric always visit vertices in the same order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, instrument};

use fp_core::{Coordinate, NodeId};
use fp_flight::FlightState;
use fp_network::{AirNetwork, Junction};

use crate::{MetricContext, PlanError, PlanResult, RouteMetric};

// ── SearchTree ────────────────────────────────────────────────────────────────

/// Working set of one search, indexed by `NodeId`.
///
/// Returned to the caller once the search ends so the route can be
/// assembled from the parent links.
#[derive(Debug, Clone)]
pub struct SearchTree {
    visited:     Vec<bool>,
    distance:    Vec<f64>,
    parent:      Vec<NodeId>,
    origin:      NodeId,
    destination: NodeId,
    iterations:  usize,
    /// Vertices in the order they were visited, with their final distance.
    visit_order: Vec<(NodeId, f64)>,
}

impl SearchTree {
    fn new(vertex_count: usize, origin: NodeId, destination: NodeId) -> Self {
        let mut distance = vec![f64::INFINITY; vertex_count];
        distance[origin.index()] = 0.0;
        Self {
            visited: vec![false; vertex_count],
            distance,
            parent: vec![NodeId::INVALID; vertex_count],
            origin,
            destination,
            iterations: 0,
            visit_order: Vec::new(),
        }
    }

    fn visit(&mut self, node: NodeId) {
        self.visited[node.index()] = true;
        self.visit_order.push((node, self.distance[node.index()]));
        self.iterations += 1;
    }

    pub fn origin(&self) -> NodeId {
        self.origin
    }

    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited.get(node.index()).copied().unwrap_or(false)
    }

    /// Tentative (or, once visited, final) distance; `INFINITY` if never reached.
    pub fn distance(&self, node: NodeId) -> f64 {
        self.distance.get(node.index()).copied().unwrap_or(f64::INFINITY)
    }

    /// Predecessor on the best known path, `None` for the origin and for
    /// unreached vertices.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent
            .get(node.index())
            .copied()
            .filter(|p| p.is_valid())
    }

    /// `true` if the destination was visited.
    pub fn reached(&self) -> bool {
        self.is_visited(self.destination)
    }

    /// Aggregate metric at the destination.
    pub fn total(&self) -> f64 {
        self.distance(self.destination)
    }

    pub fn visit_order(&self) -> &[(NodeId, f64)] {
        &self.visit_order
    }

    /// Number of vertices visited.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

// ── Frontier ──────────────────────────────────────────────────────────────────

/// Min-heap entry: lowest weight first, then lowest `NodeId`.
#[derive(Debug, Clone, Copy)]
struct HeapItem {
    node:   NodeId,
    weight: f64,
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so `BinaryHeap` pops the cheapest entry.
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

// ── PathPlanner ───────────────────────────────────────────────────────────────

/// Stateless search engine; all per-run state lives in the [`SearchTree`]
/// and in the metric.
pub struct PathPlanner;

impl PathPlanner {
    /// Run one search from `origin` to `destination`.
    ///
    /// Fails with [`PlanError::InvalidGraphVertex`] before touching `flight`
    /// if either endpoint is not a network vertex.  Any error raised by the
    /// metric aborts the run and is returned unchanged.
    #[instrument(skip_all, fields(metric = metric.name(), %origin, %destination))]
    pub fn search<M: RouteMetric + ?Sized>(
        network:     &AirNetwork,
        origin:      Coordinate,
        destination: Coordinate,
        metric:      &mut M,
        flight:      &mut FlightState,
        junctions:   &[Junction],
    ) -> PlanResult<SearchTree> {
        let src = network.key(origin).ok_or(PlanError::InvalidGraphVertex(origin))?;
        let dst = network
            .key(destination)
            .ok_or(PlanError::InvalidGraphVertex(destination))?;

        let mut tree = SearchTree::new(network.vertex_count(), src, dst);
        let mut ctx  = MetricContext { network, flight, junctions };
        metric.begin(&mut ctx)?;

        let mut heap: BinaryHeap<HeapItem> = BinaryHeap::new();
        let mut current = src;

        loop {
            tree.visit(current);
            if current == dst {
                break;
            }

            let base = tree.distance[current.index()];
            for edge in network.outgoing_edges(current) {
                let Some(adj) = network.opposite(current, edge) else {
                    continue;
                };
                let cost = metric.edge_cost(&mut ctx, edge)?;
                if !cost.is_finite() || cost < 0.0 {
                    return Err(PlanError::FailedAnalysis(format!(
                        "metric `{}` priced {edge} at {cost}",
                        metric.name()
                    )));
                }
                if tree.visited[adj.index()] {
                    continue;
                }
                let candidate = base + cost;
                if candidate < tree.distance[adj.index()] {
                    tree.distance[adj.index()] = candidate;
                    tree.parent[adj.index()]   = current;
                    heap.push(HeapItem { node: adj, weight: candidate });
                }
            }

            let next = loop {
                match heap.pop() {
                    None => break None,
                    Some(item) => {
                        let idx = item.node.index();
                        if tree.visited[idx] || item.weight > tree.distance[idx] {
                            continue;
                        }
                        break Some(item.node);
                    }
                }
            };

            let Some(next) = next else {
                debug!(visited = tree.iterations, "frontier exhausted before destination");
                break;
            };
            metric.on_select(&mut ctx, next, tree.distance[next.index()])?;
            current = next;
        }

        debug!(
            visited = tree.iterations,
            reached = tree.reached(),
            total = tree.total(),
            "search finished"
        );
        Ok(tree)
    }
}
