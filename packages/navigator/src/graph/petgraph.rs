use crate::common::config::EdgeAttribute;
use crate::common::coords::Coordinate;
use crate::common::error::{NavigationError, Result};
use crate::common::graph_data::{EdgeData, NodeData};
use crate::graph::provider::{GraphProvider, NodePath, PathIter};
use approx::relative_eq;
use geo::{Distance, Haversine, Point};
use petgraph::algo::{astar, dijkstra};
use petgraph::graph::NodeIndex;
use petgraph::visit::{EdgeRef, IntoNodeReferences};
use petgraph::{Directed, Graph};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::HashMap;
use tracing::debug;

/// The street network. Parallel edges between the same pair of nodes are
/// permitted.
pub type NavGraph = Graph<NodeData, EdgeData, Directed, u32>;

/// Based on the provided node & edge data, generate a petgraph graph which
/// can be used for navigation. Only nodes which are used by at least one
/// edge are added, and edges which refer to unknown nodes are skipped. If a
/// node ID appears more than once, the first occurrence is kept.
pub fn create_graph(nodes: Vec<NodeData>, edges: Vec<EdgeData>) -> NavGraph {
    let mut graph = NavGraph::new();

    let mut used_nodes = FxHashSet::<i64>::default();
    for edge in edges.iter() {
        used_nodes.insert(edge.src);
        used_nodes.insert(edge.dst);
    }

    // Add nodes in the order provided, so that node indexes (and by extension
    // path enumeration order) are stable between runs
    let mut node_id_inx_map = FxHashMap::<i64, NodeIndex>::default();
    for node in nodes {
        if used_nodes.contains(&node.id)
            && !node_id_inx_map.contains_key(&node.id)
        {
            let node_inx = graph.add_node(node);
            node_id_inx_map.insert(node.id, node_inx);
        }
    }

    for edge in edges {
        let src_inx = match node_id_inx_map.get(&edge.src) {
            Some(src_inx) => *src_inx,
            None => continue,
        };

        let dst_inx = match node_id_inx_map.get(&edge.dst) {
            Some(dst_inx) => *dst_inx,
            None => continue,
        };

        graph.add_edge(src_inx, dst_inx, edge);
    }

    graph
}

/// For every node reachable from the source, determine which of its
/// neighbours it can be reached from while staying on a shortest path.
/// Parallel edges only contribute a single predecessor.
fn get_shortest_path_predecessors(
    graph: &NavGraph,
    dists: &HashMap<NodeIndex, f64>,
    weight: EdgeAttribute,
) -> FxHashMap<NodeIndex, Vec<NodeIndex>> {
    let mut preds = FxHashMap::<NodeIndex, Vec<NodeIndex>>::default();

    for eref in graph.edge_references() {
        let (src, dst) = (eref.source(), eref.target());
        if src == dst {
            continue;
        }

        let (Some(src_dist), Some(dst_dist)) =
            (dists.get(&src), dists.get(&dst))
        else {
            continue;
        };

        let via_src = src_dist + eref.weight().attribute(weight);
        if relative_eq!(via_src, *dst_dist, max_relative = 1e-9) {
            let dst_preds = preds.entry(dst).or_default();
            if !dst_preds.contains(&src) {
                dst_preds.push(src);
            }
        }
    }

    preds
}

/// Walks backwards from the target through the shortest path predecessors,
/// yielding one complete path each time the source is reached. Paths are
/// generated on demand, so the iterator can only be consumed once.
pub struct AllShortestPaths<'a> {
    graph: &'a NavGraph,
    preds: FxHashMap<NodeIndex, Vec<NodeIndex>>,
    source: NodeIndex,
    // Each entry holds a node on the current partial path, and the position
    // of the next predecessor to try from it
    stack: Vec<(NodeIndex, usize)>,
    on_path: FxHashSet<NodeIndex>,
}

impl<'a> AllShortestPaths<'a> {
    fn new(
        graph: &'a NavGraph,
        preds: FxHashMap<NodeIndex, Vec<NodeIndex>>,
        source: NodeIndex,
        target: NodeIndex,
    ) -> AllShortestPaths<'a> {
        let mut on_path = FxHashSet::<NodeIndex>::default();
        on_path.insert(target);

        AllShortestPaths {
            graph,
            preds,
            source,
            stack: vec![(target, 0)],
            on_path,
        }
    }

    fn pop(&mut self) {
        if let Some((node, _)) = self.stack.pop() {
            self.on_path.remove(&node);
        }
    }
}

impl Iterator for AllShortestPaths<'_> {
    type Item = NodePath;

    fn next(&mut self) -> Option<NodePath> {
        loop {
            let (node, pos) = *self.stack.last()?;

            if node == self.source {
                let path: NodePath = self
                    .stack
                    .iter()
                    .rev()
                    .map(|(inx, _)| self.graph[*inx].id)
                    .collect();
                self.pop();
                return Some(path);
            }

            let next_pred = self
                .preds
                .get(&node)
                .and_then(|node_preds| node_preds.get(pos))
                .copied();

            match next_pred {
                Some(pred) => {
                    if let Some(last) = self.stack.last_mut() {
                        last.1 += 1;
                    }
                    // Zero-weight cycles could otherwise loop forever
                    if self.on_path.insert(pred) {
                        self.stack.push((pred, 0));
                    }
                }
                None => self.pop(),
            }
        }
    }
}

/// GraphProvider backed by an in-memory petgraph graph
#[derive(Debug, Clone)]
pub struct PetgraphProvider {
    graph: NavGraph,
    node_id_inx_map: FxHashMap<i64, NodeIndex>,
}

impl PetgraphProvider {
    pub fn new(graph: NavGraph) -> PetgraphProvider {
        let mut node_id_inx_map = FxHashMap::<i64, NodeIndex>::default();
        for (node_inx, node_data) in graph.node_references() {
            node_id_inx_map.insert(node_data.id, node_inx);
        }

        PetgraphProvider {
            graph,
            node_id_inx_map,
        }
    }

    /// Build the graph from raw node & edge data, see `create_graph`
    pub fn from_data(
        nodes: Vec<NodeData>,
        edges: Vec<EdgeData>,
    ) -> PetgraphProvider {
        PetgraphProvider::new(create_graph(nodes, edges))
    }

    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }

    fn get_index(&self, id: i64) -> Result<NodeIndex> {
        self.node_id_inx_map
            .get(&id)
            .copied()
            .ok_or(NavigationError::UnknownNode { id })
    }

    /// Where several edges join the same pair of nodes, the shortest one is
    /// taken to be the one travelled
    fn get_edge(&self, src: NodeIndex, dst: NodeIndex) -> Option<&EdgeData> {
        self.graph
            .edges_connecting(src, dst)
            .map(|eref| eref.weight())
            .min_by(|a, b| a.length.total_cmp(&b.length))
    }

    fn to_ids(&self, path: &[NodeIndex]) -> NodePath {
        path.iter().map(|inx| self.graph[*inx].id).collect()
    }

    fn check_weight(weight: EdgeAttribute) -> Result<()> {
        match weight.is_search_weight() {
            true => Ok(()),
            false => Err(NavigationError::UnsupportedWeight(weight)),
        }
    }
}

impl GraphProvider for PetgraphProvider {
    fn nearest_node(&self, coords: &Coordinate) -> Result<i64> {
        let target: Point = (*coords).into();

        // Set variables to keep track of the current closest node
        let mut smallest_dist = f64::MAX;
        let mut closest_id: Option<i64> = None;

        for (_, node_data) in self.graph.node_references() {
            let node_coords: Point = (node_data.lon, node_data.lat).into();
            let dist = Haversine::distance(target, node_coords);

            if dist < smallest_dist {
                smallest_dist = dist;
                closest_id = Some(node_data.id);
            }
        }

        closest_id.ok_or(NavigationError::NodeNotFound {
            lat: coords.lat,
            lon: coords.lon,
        })
    }

    fn shortest_path(
        &self,
        from: i64,
        to: i64,
        weight: EdgeAttribute,
    ) -> Result<NodePath> {
        PetgraphProvider::check_weight(weight)?;
        let from_inx = self.get_index(from)?;
        let to_inx = self.get_index(to)?;

        // With a zero estimate, A* is equivalent to Dijkstra but also hands
        // back the path it found
        let result = astar(
            &self.graph,
            from_inx,
            |inx| inx == to_inx,
            |eref| eref.weight().attribute(weight),
            |_| 0.0,
        );

        match result {
            Some((_, path)) => Ok(self.to_ids(&path)),
            None => Err(NavigationError::PathNotFound { from, to }),
        }
    }

    fn all_shortest_paths<'a>(
        &'a self,
        from: i64,
        to: i64,
        weight: EdgeAttribute,
    ) -> Result<PathIter<'a>> {
        PetgraphProvider::check_weight(weight)?;
        let from_inx = self.get_index(from)?;
        let to_inx = self.get_index(to)?;

        let dists: HashMap<NodeIndex, f64> =
            dijkstra(&self.graph, from_inx, None, |eref| {
                eref.weight().attribute(weight)
            });

        if !dists.contains_key(&to_inx) {
            return Err(NavigationError::PathNotFound { from, to });
        }

        let preds = get_shortest_path_predecessors(&self.graph, &dists, weight);
        debug!(
            from,
            to,
            %weight,
            reachable = dists.len(),
            "built shortest path predecessors"
        );

        Ok(Box::new(AllShortestPaths::new(
            &self.graph,
            preds,
            from_inx,
            to_inx,
        )))
    }

    fn edge_attribute(
        &self,
        path: &[i64],
        attribute: EdgeAttribute,
    ) -> Result<Vec<f64>> {
        let mut values = Vec::with_capacity(path.len().saturating_sub(1));

        for pair in path.windows(2) {
            let (src, dst) = (pair[0], pair[1]);
            let src_inx = self.get_index(src)?;
            let dst_inx = self.get_index(dst)?;

            match self.get_edge(src_inx, dst_inx) {
                Some(edge) => values.push(edge.attribute(attribute)),
                None => return Err(NavigationError::EdgeNotFound { src, dst }),
            }
        }

        Ok(values)
    }
}
