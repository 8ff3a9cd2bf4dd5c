//! Export of a `Graph` in the DOT language.
//!
//! Nodes are drawn as ellipses and edges as boxes, with one line between every edge and each of
//! its nodes, the usual way of drawing a factor graph.

use crate::util::Result;
use super::{Graph, View};

use itertools::Itertools;

use std::borrow::Cow;
use std::io::Write;


/// The graph attributes written in the header of a DOT file
#[derive(Clone, Debug, PartialEq)]
pub struct DotStyle {
    /// Name of the graph
    pub name: String,

    /// Value of the `overlap` attribute
    pub overlap: String,

    /// Value of the `splines` attribute
    pub splines: bool
}


impl Default for DotStyle {

    fn default() -> Self {
        DotStyle {
            name: String::from("FactorGraph"),
            overlap: String::from("scalexy"),
            splines: true
        }
    }

}


const KEYWORDS: &[&str] = &["graph", "digraph", "subgraph", "node", "edge", "strict"];


/// Format `name` as a DOT identifier, quoting it unless it is a plain alphanumeric id
pub fn id(name: &str) -> Cow<str> {
    let mut chars = name.chars();
    let plain = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        },
        _ => false
    };

    if plain && !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(name)) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\"")))
    }
}


/// Write the visible part of `view` to `sink`
pub(crate) fn write<W: Write>(view: &View, style: &DotStyle, mut sink: W) -> Result<()> {
    writeln!(sink, "graph {} {{ overlap={}; splines={};", id(&style.name), id(&style.overlap), style.splines)?;

    writeln!(sink, "node[shape=ellipse];")?;
    for node in view.nodes() {
        writeln!(sink, "  {};", id(node.name()))?;
    }

    writeln!(sink, "node[shape=box];")?;
    for edge in view.edges() {
        writeln!(sink, "  {};", id(edge.name()))?;
    }

    for edge in view.edges() {
        for node in edge.nodes().iter().filter(|n| !view.is_node_hidden(n)) {
            writeln!(sink, "  {} -- {};", id(edge.name()), id(node))?;
        }
    }

    writeln!(sink, "}}")?;
    sink.flush()?;
    Ok(())
}


impl Graph {

    /// Write the whole `Graph` as DOT with the default style
    pub fn save_as_dot<W: Write>(&self, sink: W) -> Result<()> {
        View::new(self).save_as_dot(sink)
    }

    /// Write the whole `Graph` as DOT with the given style
    pub fn save_as_dot_with<W: Write>(&self, style: &DotStyle, sink: W) -> Result<()> {
        View::new(self).save_as_dot_with(style, sink)
    }

    /// The DOT text of the whole `Graph`
    pub fn to_dot(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.save_as_dot(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

}


/// One line per edge listing its incident nodes, for debugging output
pub fn summary(graph: &Graph) -> String {
    graph.edges()
         .map(|e| format!("{} [{}]: {}", e.name(), e.kind(), e.nodes().iter().join(", ")))
         .join("\n")
}
