use crate::topo::post_order;
use crate::traits::NodeSet;

/// Whether the directed graph contains a cycle.
///
/// Depth-first from every unvisited node; an edge back to a node still on
/// the DFS stack is a cycle. Self-loops count.
pub fn has_cycle<G: NodeSet>(graph: &G) -> bool {
    let cyclic = post_order(graph).is_err();
    log::debug!("cycle check: {}", if cyclic { "cyclic" } else { "acyclic" });
    cyclic
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;
    use crate::topo::topological_sort;

    #[test]
    fn cycle_round_trip() {
        let mut g = DiGraph::from_adjacency([("A", vec!["B"]), ("B", vec!["C"]), ("C", vec!["A"])]);
        assert!(has_cycle(&g));

        assert!(g.remove_edge(&"C", &"A"));
        assert!(!has_cycle(&g));
        assert_eq!(topological_sort(&g).unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn diamond_is_not_a_cycle() {
        // Reaching `d` twice is a cross edge, not a back edge.
        let g = DiGraph::from_adjacency([
            ('a', vec!['b', 'c']),
            ('b', vec!['d']),
            ('c', vec!['d']),
            ('d', vec![]),
        ]);
        assert!(!has_cycle(&g));
    }

    #[test]
    fn cycle_away_from_first_root() {
        let g = DiGraph::from_adjacency([(0, vec![1]), (1, vec![]), (2, vec![3]), (3, vec![2])]);
        assert!(has_cycle(&g));
    }

    #[test]
    fn self_loop() {
        let mut g: DiGraph<char> = DiGraph::new();
        g.add_edge('x', 'x');
        assert!(has_cycle(&g));
    }

    #[test]
    fn undirected_edge_is_a_two_cycle() {
        let mut g: DiGraph<u8> = DiGraph::new();
        g.add_undirected_edge(1, 2, 1);
        assert!(has_cycle(&g));
    }
}
