//! Definition of the factor module
//!
//! A `RawFactor` is a factor exactly as it appears in a `.fg` file: numeric variable ids, their
//! cardinalities and a sparse table of weights keyed by linear index.

pub mod radix;

use crate::util::{Result, ConceptualError};

use indexmap::IndexMap;
use ndarray::{ArrayD, IxDyn, ShapeBuilder};

use std::collections::HashSet;


/// Alias f64 ndarray::ArrayD as Table
pub type Table = ArrayD<f64>;


#[derive(Clone, Debug, PartialEq)]
pub struct RawFactor {
    /// The variable ids in the scope of the factor. The order defines the digit order of the
    /// linear indices in `potential`.
    vars: Vec<usize>,

    /// The cardinality of each variable in `vars`
    cardinalities: Vec<usize>,

    /// The non-default entries of the table, in file order
    potential: IndexMap<usize, f64>
}


impl RawFactor {

    /// Create a new `RawFactor`
    ///
    /// # Errors
    /// * `ConceptualError::Range` if `vars` and `cardinalities` differ in length
    /// * `ConceptualError::Range` if a linear index of `potential` is outside the table, or the
    ///   table is too large to index
    /// * `ConceptualError::DuplicateIdentifier` if a variable appears twice in `vars`
    pub fn new(vars: Vec<usize>, cardinalities: Vec<usize>, potential: IndexMap<usize, f64>) -> Result<Self> {
        if vars.len() != cardinalities.len() {
            return Err(ConceptualError::Range(
                format!("{} variables given with {} cardinalities", vars.len(), cardinalities.len())
            ));
        }

        let mut seen = HashSet::new();
        if let Some(v) = vars.iter().find(|&v| !seen.insert(*v)) {
            return Err(ConceptualError::DuplicateIdentifier(format!("x{} in factor scope", v)));
        }

        let size = radix::size(&cardinalities)?;
        if let Some(linear) = potential.keys().find(|&&linear| linear >= size) {
            return Err(ConceptualError::Range(
                format!("linear index {} exceeds table of shape {:?}", linear, cardinalities)
            ));
        }

        Ok(RawFactor { vars, cardinalities, potential })
    }

    pub fn vars(&self) -> &[usize] {
        &self.vars
    }

    pub fn cardinalities(&self) -> &[usize] {
        &self.cardinalities
    }

    /// The sparse weights keyed by linear index
    pub fn potential(&self) -> &IndexMap<usize, f64> {
        &self.potential
    }

    /// The cardinality of variable `var` in this factor, if it is in scope
    pub fn cardinality_of(&self, var: usize) -> Option<usize> {
        self.vars.iter().position(|&v| v == var).map(|i| self.cardinalities[i])
    }

    /// Iterate over the entries of the table decoded into per-variable value indices.
    pub fn entries<'a>(&'a self) -> impl Iterator<Item = (Vec<usize>, f64)> + 'a {
        self.potential.iter().map(move |(&linear, &w)| (radix::digits(linear, &self.cardinalities), w))
    }

    /// Expand the sparse table into a dense one.
    ///
    /// Entries missing from the file are set to `fill`; choosing that value is the caller's
    /// missing-data policy. The table is laid out in Fortran order so its memory order matches
    /// the linear indices of the file.
    ///
    /// # Errors
    /// * `ConceptualError::Range` if the table has more entries than `ndarray` can address
    pub fn table(&self, fill: f64) -> Result<Table> {
        let size = radix::size(&self.cardinalities)?;
        if size > isize::MAX as usize {
            return Err(ConceptualError::Range(
                format!("table of shape {:?} is too large", self.cardinalities)
            ));
        }

        let mut tbl = ArrayD::from_elem(IxDyn(&self.cardinalities).f(), fill);
        for (digits, w) in self.entries() {
            tbl[&digits[..]] = w;
        }

        Ok(tbl)
    }

}


/// The ordered collection of factors read from a `.fg` file
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawFactorTable {
    factors: Vec<RawFactor>
}


impl RawFactorTable {

    pub fn new(factors: Vec<RawFactor>) -> Self {
        RawFactorTable { factors }
    }

    pub fn factors(&self) -> &[RawFactor] {
        &self.factors
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn iter(&self) -> ::std::slice::Iter<RawFactor> {
        self.factors.iter()
    }

}
