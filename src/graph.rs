//! Incrementally discovered graph of configurations.
//!
//! Configurations get indices in discovery order. Edges live in a dense,
//! symmetric `N × N` boolean matrix that grows by one row and one column per
//! newly registered configuration. The matrix records explored topology; the
//! solver never reads it back.

use std::collections::HashMap;

use crate::puzzle::Configuration;

#[derive(Debug, Clone, Default)]
pub struct StateGraph {
    index: HashMap<Configuration, usize>,
    states: Vec<Configuration>,
    adjacency: Vec<Vec<bool>>,
}

impl StateGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `c`, assigning the next one if `c` is new.
    pub fn register(&mut self, c: Configuration) -> usize {
        if let Some(&idx) = self.index.get(&c) {
            return idx;
        }

        let idx = self.states.len();
        self.index.insert(c, idx);
        self.states.push(c);

        for row in &mut self.adjacency {
            row.push(false);
        }
        self.adjacency.push(vec![false; idx + 1]);

        idx
    }

    /// Records an undirected edge, registering either endpoint if needed.
    pub fn connect(&mut self, a: Configuration, b: Configuration) {
        let i = self.register(a);
        let j = self.register(b);
        self.adjacency[i][j] = true;
        self.adjacency[j][i] = true;
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn index_of(&self, c: &Configuration) -> Option<usize> {
        self.index.get(c).copied()
    }

    /// Reverse lookup by discovery index.
    pub fn configuration(&self, idx: usize) -> Option<&Configuration> {
        self.states.get(idx)
    }

    pub fn is_adjacent(&self, i: usize, j: usize) -> bool {
        self.adjacency
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(false)
    }

    /// Indices adjacent to `idx`, ascending.
    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(idx)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter_map(|(j, &edge)| edge.then_some(j))
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(i, row)| row[i..].iter().filter(|&&edge| edge).count())
            .sum()
    }

    pub fn adjacency(&self) -> &[Vec<bool>] {
        &self.adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::GOAL;

    fn assert_square_and_symmetric(graph: &StateGraph) {
        let n = graph.len();
        assert_eq!(graph.adjacency().len(), n);
        for i in 0..n {
            assert_eq!(graph.adjacency()[i].len(), n);
            for j in 0..n {
                assert_eq!(graph.is_adjacent(i, j), graph.is_adjacent(j, i));
            }
        }
    }

    #[test]
    fn register_is_idempotent() {
        let mut graph = StateGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.register(GOAL), 0);
        assert_eq!(graph.register(GOAL), 0);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.adjacency().len(), 1);
        assert_eq!(graph.adjacency()[0].len(), 1);
    }

    #[test]
    fn indices_follow_discovery_order() {
        let mut graph = StateGraph::new();
        let discovered: Vec<Configuration> = GOAL.neighbors().map(|(_, c)| c).collect();
        graph.register(GOAL);
        for (offset, &c) in discovered.iter().enumerate() {
            assert_eq!(graph.register(c), offset + 1);
        }
        assert_eq!(graph.configuration(0), Some(&GOAL));
        assert_eq!(graph.index_of(&discovered[1]), Some(2));
        assert_eq!(graph.configuration(99), None);
        assert_square_and_symmetric(&graph);
    }

    #[test]
    fn connect_records_both_directions() {
        let mut graph = StateGraph::new();
        let (_, a) = GOAL.neighbors().next().unwrap();
        graph.connect(GOAL, a);
        graph.connect(a, GOAL);

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.is_adjacent(0, 1));
        assert!(graph.is_adjacent(1, 0));
        assert!(!graph.is_adjacent(0, 0));
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1]);
        assert_square_and_symmetric(&graph);
    }

    #[test]
    fn stays_symmetric_while_growing() {
        let mut graph = StateGraph::new();
        let mut layer = vec![GOAL];
        for _ in 0..4 {
            let mut next_layer = Vec::new();
            for c in layer {
                for (_, n) in c.neighbors() {
                    graph.connect(c, n);
                    next_layer.push(n);
                }
            }
            layer = next_layer;
        }
        assert_square_and_symmetric(&graph);
        for i in 0..graph.len() {
            let c = graph.configuration(i).unwrap();
            for j in graph.neighbors(i) {
                let n = graph.configuration(j).unwrap();
                assert!(c.move_between(n).is_some());
            }
        }
    }
}
