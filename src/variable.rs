//! Definition of the variable module
//!
//! A variable of a conceptual map is a discrete random variable with an enumerated set of named
//! values, e.g. a `room_category` taking the values `Kitchen`, `Corridor`, ...

use crate::util::{Result, ConceptualError};

use bidir_map::BidirMap;

use std::fmt;


/// Derive the type of a variable from its display name by removing every digit.
///
/// `room_category12` and `room1_category2` are both of type `room_category`.
pub fn guess_type(name: &str) -> String {
    name.chars().filter(|c| !c.is_ascii_digit()).collect()
}


/// The enumerated values of a variable. This is a two way lookup ```(index->label)``` and
/// ```(label->index)```.
pub struct Domain {
    values: BidirMap<usize, String>
}


impl Domain {

    pub fn new() -> Self {
        Domain { values: BidirMap::new() }
    }

    /// Build a `Domain` whose value indices are the positions of `labels`
    pub fn from_labels(labels: &[&str]) -> Result<Self> {
        let mut domain = Domain::new();
        for (i, l) in labels.iter().enumerate() {
            domain.insert(i, String::from(*l))?;
        }
        Ok(domain)
    }

    /// Add a value.
    ///
    /// # Errors
    /// * `ConceptualError::DuplicateIdentifier` if either the index or the label is already used
    pub fn insert(&mut self, index: usize, label: String) -> Result<()> {
        if self.values.contains_first_key(&index) {
            return Err(ConceptualError::DuplicateIdentifier(format!("value index {}", index)));
        }
        if self.index(&label).is_some() {
            return Err(ConceptualError::DuplicateIdentifier(format!("value label {}", label)));
        }

        self.values.insert(index, label);
        Ok(())
    }

    /// The number of values, i.e. the cardinality of the variable
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Lookup the label of a value index
    pub fn label(&self, index: usize) -> Option<&str> {
        self.values.get_by_first(&index).map(|s| s.as_str())
    }

    /// Lookup the index of a value label
    pub fn index(&self, label: &str) -> Option<usize> {
        self.values.get_by_second(&String::from(label)).cloned()
    }

    /// The labels ordered by value index
    pub fn labels(&self) -> Vec<&str> {
        let mut pairs: Vec<(usize, &str)> = self.values.iter().map(|(&i, l)| (i, l.as_str())).collect();
        pairs.sort_by_key(|&(i, _)| i);
        pairs.into_iter().map(|(_, l)| l).collect()
    }

}


impl Clone for Domain {

    fn clone(&self) -> Self {
        Domain { values: self.values.iter().map(|(&i, l)| (i, l.clone())).collect() }
    }

}


impl fmt::Debug for Domain {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }

}


impl PartialEq for Domain {

    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.values.iter().all(|(&i, l)| other.label(i) == Some(l.as_str()))
    }

}


/// A variable declared in a `.info` file
#[derive(Clone, Debug, PartialEq)]
pub struct VariableInfo {
    /// The display name of the variable
    name: String,

    /// The type of the variable, derived from its name
    kind: String,

    values: Domain
}


impl VariableInfo {

    /// Construct a new `VariableInfo`. The type is derived from `name` with `guess_type`.
    pub fn new(name: &str, values: Domain) -> Self {
        VariableInfo {
            name: String::from(name),
            kind: guess_type(name),
            values
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn values(&self) -> &Domain {
        &self.values
    }

    pub fn into_values(self) -> Domain {
        self.values
    }

}
