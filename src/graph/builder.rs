//! Assembles a `Graph` from a `RawFactorTable` and the `SymbolicCatalog` that names it.

use crate::catalog::SymbolicCatalog;
use crate::factor::{RawFactor, RawFactorTable};
use crate::util::{Result, ConceptualError};
use crate::variable::VariableInfo;
use super::{dot, Graph, Potential};

use tracing::{debug, trace};


/// The name given to the edge built from the factor at `position`
pub fn edge_name(position: usize) -> String {
    format!("f{}", position)
}


/// Build the `Graph` of a conceptual map.
///
/// Every variable of `catalog` becomes a `Node` named by its display name. Every factor of
/// `table` becomes an `Edge` named by `edge_name`, typed by the catalog's factor name and
/// incident to its variables in file order. Potentials are decoded entry by entry; entries
/// absent from the raw table stay absent.
///
/// # Errors
/// * `ConceptualError::UnknownFactor` if a factor position has no name in the catalog
/// * `ConceptualError::UnknownVariable` if a factor references an undeclared variable
/// * `ConceptualError::CardinalityMismatch` if a factor's cardinality for a variable differs from
///   the number of value labels of that variable
/// * `ConceptualError::UnknownValue` if a decoded value index has no label
/// * `ConceptualError::DuplicateNode` if two variables share a display name
///
/// Nothing is returned unless the whole table is consistent with the catalog.
pub fn build(table: &RawFactorTable, catalog: &SymbolicCatalog) -> Result<Graph> {
    let mut graph = Graph::new();

    for (_, var) in catalog.variables() {
        graph.add_node(var.name(), var.kind())?.set_values(var.values().clone());
    }

    for (position, factor) in table.iter().enumerate() {
        let kind = catalog.factor_name(position).ok_or(ConceptualError::UnknownFactor(position))?;
        let scope = scope(factor, catalog)?;
        let potential = potential(factor, &scope)?;

        let nodes: Vec<&str> = scope.iter().map(|&(_, v)| v.name()).collect();
        let edge = graph.add_edge(&edge_name(position), kind, &nodes)?;
        for (key, weight) in potential {
            edge.insert_weight(key, weight)?;
        }
    }

    debug!("built graph with {} nodes and {} edges", graph.num_nodes(), graph.num_edges());
    trace!("{}", dot::summary(&graph));
    Ok(graph)
}


/// Resolve the variables of a factor and check their cardinalities
fn scope<'c>(factor: &RawFactor, catalog: &'c SymbolicCatalog) -> Result<Vec<(usize, &'c VariableInfo)>> {
    factor.vars().iter().zip(factor.cardinalities()).map(|(&id, &declared)| {
        let var = catalog.variable(id).ok_or(ConceptualError::UnknownVariable(id))?;

        let labels = var.values().len();
        if labels != declared {
            return Err(ConceptualError::CardinalityMismatch { variable: id, declared, labels });
        }

        Ok((id, var))
    }).collect()
}


/// Translate the sparse numeric potential of a factor into value labels
fn potential(factor: &RawFactor, scope: &[(usize, &VariableInfo)]) -> Result<Potential> {
    let mut potential = Potential::with_capacity(factor.potential().len());

    for (digits, weight) in factor.entries() {

        let key = digits.iter().zip(scope).map(|(&index, &(id, var))| {
            var.values()
               .label(index)
               .map(String::from)
               .ok_or(ConceptualError::UnknownValue { variable: id, index })
        }).collect::<Result<Vec<String>>>()?;

        potential.insert(key, weight);
    }

    Ok(potential)
}
