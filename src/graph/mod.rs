//! Defines a `Graph`, the symbolic factor graph of a conceptual map.
//!
//! # Representation
//! The graph is bipartite. Its `Node`s are the variables of the conceptual map and its `Edge`s
//! are the factors; an `Edge` may be incident to any number of `Node`s. Nodes and edges are kept
//! in insertion order in two separate name spaces.

pub mod builder;
pub mod dot;
pub mod view;

pub use self::builder::build;
pub use self::dot::DotStyle;
pub use self::view::View;

use crate::util::{Result, ConceptualError};
use crate::variable::Domain;

use indexmap::IndexMap;


/// A symbolic potential: one value label per incident node, in node order, mapped to a weight.
/// Assignments missing from the source table are missing here as well.
pub type Potential = IndexMap<Vec<String>, f64>;


/// Type of the nodes holding room categories
pub const ROOM_CATEGORY: &str = "room_category";


/// Represents a given instance of a concept, e.g. a room category.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    name: String,
    kind: String,

    /// The enumerated values, present for variable nodes
    values: Option<Domain>,

    /// Names of the incident `Edge`s
    edges: Vec<String>
}


impl Node {

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn values(&self) -> Option<&Domain> {
        self.values.as_ref()
    }

    /// Names of the `Edge`s incident to this node, in the order they were added
    pub fn edges(&self) -> &[String] {
        &self.edges
    }

    pub(crate) fn set_values(&mut self, values: Domain) {
        self.values = Some(values);
    }

}


/// Represents a factor between nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    name: String,
    kind: String,

    /// The incident nodes. Their order is the order of the labels in every potential key.
    nodes: Vec<String>,

    potential: Potential
}


impl Edge {

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn potential(&self) -> &Potential {
        &self.potential
    }

    /// The weight of one assignment, given as one label per incident node
    pub fn weight(&self, labels: &[&str]) -> Option<f64> {
        let key: Vec<String> = labels.iter().map(|&l| String::from(l)).collect();
        self.potential.get(&key).cloned()
    }

    /// Add an entry to the potential.
    ///
    /// # Errors
    /// * `ConceptualError::Range` if the key does not hold one label per incident node
    pub(crate) fn insert_weight(&mut self, key: Vec<String>, weight: f64) -> Result<()> {
        if key.len() != self.nodes.len() {
            return Err(ConceptualError::Range(
                format!("potential key {:?} for edge {} of {} nodes", key, self.name, self.nodes.len())
            ));
        }

        self.potential.insert(key, weight);
        Ok(())
    }

}


#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    nodes: IndexMap<String, Node>,
    edges: IndexMap<String, Edge>
}


impl Graph {

    pub fn new() -> Self {
        Graph::default()
    }

    /// Add a `Node` without values.
    ///
    /// # Errors
    /// * `ConceptualError::DuplicateNode` if a node called `name` already exists
    pub fn add_node(&mut self, name: &str, kind: &str) -> Result<&mut Node> {
        if self.nodes.contains_key(name) {
            return Err(ConceptualError::DuplicateNode(String::from(name)));
        }

        let node = Node {
            name: String::from(name),
            kind: String::from(kind),
            values: None,
            edges: vec![]
        };

        let entry = self.nodes.entry(String::from(name)).or_insert(node);
        Ok(entry)
    }

    /// Add an `Edge` incident to `nodes` with an empty potential. The edge is appended to the
    /// edge list of each of its nodes.
    ///
    /// # Errors
    /// * `ConceptualError::DuplicateEdge` if an edge called `name` already exists
    /// * `ConceptualError::UnknownNode` if any of `nodes` is not in the graph
    pub fn add_edge<S: AsRef<str>>(&mut self, name: &str, kind: &str, nodes: &[S]) -> Result<&mut Edge> {
        if self.edges.contains_key(name) {
            return Err(ConceptualError::DuplicateEdge(String::from(name)));
        }

        if let Some(missing) = nodes.iter().map(|n| n.as_ref()).find(|n| !self.nodes.contains_key(*n)) {
            return Err(ConceptualError::UnknownNode(String::from(missing)));
        }

        for n in nodes {
            if let Some(node) = self.nodes.get_mut(n.as_ref()) {
                node.edges.push(String::from(name));
            }
        }

        let edge = Edge {
            name: String::from(name),
            kind: String::from(kind),
            nodes: nodes.iter().map(|n| String::from(n.as_ref())).collect(),
            potential: Potential::new()
        };

        let entry = self.edges.entry(String::from(name)).or_insert(edge);
        Ok(entry)
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    pub fn edge(&self, name: &str) -> Option<&Edge> {
        self.edges.get(name)
    }

    /// All `Node`s in insertion order
    pub fn nodes(&self) -> ::indexmap::map::Values<String, Node> {
        self.nodes.values()
    }

    /// All `Edge`s in insertion order
    pub fn edges(&self) -> ::indexmap::map::Values<String, Edge> {
        self.edges.values()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The `Node`s of the given type, in insertion order. Clone the iterator to restart it.
    pub fn nodes_by_type<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Node> + Clone + 'a {
        self.nodes.values().filter(move |n| n.kind == kind)
    }

    /// The `Edge`s of the given type, in insertion order. Clone the iterator to restart it.
    pub fn edges_by_type<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Edge> + Clone + 'a {
        self.edges.values().filter(move |e| e.kind == kind)
    }

    /// The room category nodes
    pub fn rooms<'a>(&'a self) -> impl Iterator<Item = &'a Node> + Clone + 'a {
        self.nodes_by_type(ROOM_CATEGORY)
    }

}
