//! A `View` is a read-only window on a `Graph` carrying the annotations a renderer needs: which
//! nodes and edges to hide and which nodes have an observed value. The `Graph` is never mutated.

use crate::util::{Result, ConceptualError};
use super::{dot, DotStyle, Edge, Graph, Node};

use indexmap::IndexMap;
use tracing::trace;

use std::collections::HashSet;
use std::io::Write;


/// Prefix of the type of the edges that carry an observation of a single node
pub const OBSERVED_PREFIX: &str = "Observed";


#[derive(Clone, Debug)]
pub struct View<'g> {
    graph: &'g Graph,
    hidden_nodes: HashSet<String>,
    hidden_edges: HashSet<String>,

    /// Node name -> observed value label
    observed: IndexMap<String, String>
}


impl<'g> View<'g> {

    /// A `View` of the whole `Graph`
    pub fn new(graph: &'g Graph) -> Self {
        View {
            graph,
            hidden_nodes: HashSet::new(),
            hidden_edges: HashSet::new(),
            observed: IndexMap::new()
        }
    }

    /// A `View` in which every observation edge is folded into its node.
    ///
    /// An observation edge is a unary edge whose type starts with `Observed`. The arg-max label of
    /// its potential becomes the observed value of the node, and the edge is hidden. Ties go to
    /// the first entry; an edge with an empty potential is left alone.
    pub fn observed(graph: &'g Graph) -> Self {
        let mut view = View::new(graph);

        for edge in graph.edges() {
            if !edge.kind().starts_with(OBSERVED_PREFIX) || edge.nodes().len() != 1 {
                continue;
            }

            if let Some(label) = argmax(edge) {
                trace!("{} observes {} = {}", edge.name(), edge.nodes()[0], label);
                view.observed.insert(edge.nodes()[0].clone(), String::from(label));
                view.hidden_edges.insert(String::from(edge.name()));
            }
        }

        view
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Hide a node and every line connecting to it
    ///
    /// # Errors
    /// * `ConceptualError::UnknownNode` if the graph has no such node
    pub fn hide_node(&mut self, name: &str) -> Result<()> {
        if self.graph.node(name).is_none() {
            return Err(ConceptualError::UnknownNode(String::from(name)));
        }
        self.hidden_nodes.insert(String::from(name));
        Ok(())
    }

    /// Hide an edge and its connecting lines
    ///
    /// # Errors
    /// * `ConceptualError::UnknownEdge` if the graph has no such edge
    pub fn hide_edge(&mut self, name: &str) -> Result<()> {
        if self.graph.edge(name).is_none() {
            return Err(ConceptualError::UnknownEdge(String::from(name)));
        }
        self.hidden_edges.insert(String::from(name));
        Ok(())
    }

    pub fn is_node_hidden(&self, name: &str) -> bool {
        self.hidden_nodes.contains(name)
    }

    pub fn is_edge_hidden(&self, name: &str) -> bool {
        self.hidden_edges.contains(name)
    }

    /// The observed value label of a node, if any
    pub fn observed_value(&self, node: &str) -> Option<&str> {
        self.observed.get(node).map(|s| s.as_str())
    }

    /// The visible `Node`s in insertion order
    pub fn nodes<'a>(&'a self) -> impl Iterator<Item = &'g Node> + 'a {
        self.graph.nodes().filter(move |n| !self.is_node_hidden(n.name()))
    }

    /// The visible `Edge`s in insertion order
    pub fn edges<'a>(&'a self) -> impl Iterator<Item = &'g Edge> + 'a {
        self.graph.edges().filter(move |e| !self.is_edge_hidden(e.name()))
    }

    /// Write the visible part of the graph as DOT with the default style
    pub fn save_as_dot<W: Write>(&self, sink: W) -> Result<()> {
        self.save_as_dot_with(&DotStyle::default(), sink)
    }

    pub fn save_as_dot_with<W: Write>(&self, style: &DotStyle, sink: W) -> Result<()> {
        dot::write(self, style, sink)
    }

}


/// The label of the highest weight in a unary potential
fn argmax(edge: &Edge) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (key, &w) in edge.potential() {
        match best {
            Some((_, b)) if !(w > b) => (),
            _ => best = key.first().map(|l| (l.as_str(), w))
        }
    }
    best.map(|(l, _)| l)
}
