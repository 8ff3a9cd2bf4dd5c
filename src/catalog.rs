//! The symbolic side of a conceptual map: the names, types and value labels read from a `.info`
//! file, keyed by the numeric ids used in the matching `.fg` file.

use crate::util::{Result, ConceptualError};
use crate::variable::VariableInfo;

use indexmap::IndexMap;


#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolicCatalog {
    /// Variable id -> declaration, in file order
    variables: IndexMap<usize, VariableInfo>,

    /// Factor id -> display name, in file order
    factors: IndexMap<usize, String>
}


impl SymbolicCatalog {

    pub fn new() -> Self {
        SymbolicCatalog::default()
    }

    /// Declare the variable ```x<id>```.
    ///
    /// # Errors
    /// * `ConceptualError::DuplicateIdentifier` if the id is already declared
    pub fn add_variable(&mut self, id: usize, var: VariableInfo) -> Result<()> {
        if self.variables.contains_key(&id) {
            return Err(ConceptualError::DuplicateIdentifier(format!("x{}", id)));
        }

        self.variables.insert(id, var);
        Ok(())
    }

    /// Declare the factor ```f<id>```.
    ///
    /// # Errors
    /// * `ConceptualError::DuplicateIdentifier` if the id is already declared
    pub fn add_factor(&mut self, id: usize, name: &str) -> Result<()> {
        if self.factors.contains_key(&id) {
            return Err(ConceptualError::DuplicateIdentifier(format!("f{}", id)));
        }

        self.factors.insert(id, String::from(name));
        Ok(())
    }

    pub fn variable(&self, id: usize) -> Option<&VariableInfo> {
        self.variables.get(&id)
    }

    pub fn variables(&self) -> impl Iterator<Item = (usize, &VariableInfo)> {
        self.variables.iter().map(|(&id, v)| (id, v))
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// The display name of variable ```x<id>```
    pub fn var_name(&self, id: usize) -> Option<&str> {
        self.variables.get(&id).map(|v| v.name())
    }

    /// The type of variable ```x<id>```
    pub fn var_type(&self, id: usize) -> Option<&str> {
        self.variables.get(&id).map(|v| v.kind())
    }

    /// The ids of every variable of the given type
    pub fn vars_by_type<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.variables.iter().filter(move |&(_, v)| v.kind() == kind).map(|(&id, _)| id)
    }

    /// The display name of factor ```f<id>```
    pub fn factor_name(&self, id: usize) -> Option<&str> {
        self.factors.get(&id).map(|s| s.as_str())
    }

    pub fn num_factors(&self) -> usize {
        self.factors.len()
    }

}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::variable::Domain;

    fn room(name: &str) -> VariableInfo {
        VariableInfo::new(name, Domain::from_labels(&["Kitchen", "Hall"]).unwrap())
    }

    #[test]
    fn build_simple() {
        let mut c = SymbolicCatalog::new();
        c.add_variable(1, room("room_category0")).unwrap();
        c.add_variable(2, room("room_category1")).unwrap();
        c.add_variable(3, room("shape0")).unwrap();
        c.add_factor(0, "Adjacent").unwrap();

        assert_eq!(3, c.num_variables());
        assert_eq!(1, c.num_factors());
        assert_eq!(Some("room_category1"), c.var_name(2));
        assert_eq!(Some("shape"), c.var_type(3));
        assert_eq!(Some("Adjacent"), c.factor_name(0));
        assert_eq!(None, c.factor_name(1));
        assert_eq!(vec![1, 2], c.vars_by_type("room_category").collect::<Vec<_>>());
    }

    #[test]
    fn duplicates() {
        let mut c = SymbolicCatalog::new();
        c.add_variable(1, room("room_category0")).unwrap();
        c.add_factor(1, "Adjacent").unwrap();

        match c.add_variable(1, room("room_category1")).expect_err("missing error") {
            ConceptualError::DuplicateIdentifier(_) => assert!(true),
            _ => panic!("wrong error type")
        };

        match c.add_factor(1, "Observed").expect_err("missing error") {
            ConceptualError::DuplicateIdentifier(_) => assert!(true),
            _ => panic!("wrong error type")
        };

        // the original declarations are untouched
        assert_eq!(Some("room_category0"), c.var_name(1));
        assert_eq!(Some("Adjacent"), c.factor_name(1));
    }

}
