pub mod util;
pub mod factor;
pub mod variable;
pub mod catalog;
pub mod io;
pub mod graph;
pub mod sequence;

pub use crate::util::{Result, ConceptualError};
pub use crate::graph::{Graph, Node, Edge};
