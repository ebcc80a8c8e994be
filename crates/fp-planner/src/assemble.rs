//! Parent-pointer walk from a finished [`SearchTree`] to an ordered [`Leg`].

use fp_core::NodeId;
use fp_network::AirNetwork;

use crate::{Leg, PlanError, PlanResult, SearchTree};

/// Rebuild the path found by a search.
///
/// Walks `parent` links from the destination back to the origin, reverses
/// them and maps each consecutive vertex pair to the segment of the edge
/// joining them.  Fails with [`PlanError::FailedAnalysis`] if the
/// destination was never visited or a parent link does not correspond to an
/// edge of `network`.
pub fn assemble(network: &AirNetwork, tree: &SearchTree) -> PlanResult<Leg> {
    let origin      = tree.origin();
    let destination = tree.destination();

    if !tree.reached() {
        return Err(PlanError::FailedAnalysis(format!(
            "no path from {} to {}",
            network.point(origin),
            network.point(destination)
        )));
    }

    let mut nodes: Vec<NodeId> = vec![destination];
    let mut cur = destination;
    while cur != origin {
        let Some(prev) = tree.parent(cur) else {
            return Err(PlanError::FailedAnalysis(format!("broken parent chain at {cur}")));
        };
        // A chain longer than the vertex count can only be a cycle.
        if nodes.len() > network.vertex_count() {
            return Err(PlanError::FailedAnalysis(format!("parent cycle through {cur}")));
        }
        nodes.push(prev);
        cur = prev;
    }
    nodes.reverse();

    let segments = nodes
        .windows(2)
        .map(|pair| {
            network
                .edge(pair[0], pair[1])
                .map(|edge| network.edge_segment_id(edge))
                .ok_or_else(|| {
                    PlanError::FailedAnalysis(format!("no edge {} -> {}", pair[0], pair[1]))
                })
        })
        .collect::<PlanResult<Vec<_>>>()?;

    Ok(Leg {
        points: nodes.iter().map(|&n| network.point(n)).collect(),
        segments,
        total: tree.total(),
    })
}
