//! Parser for the `.info` file that names the variables and factors of a `.fg` file.
//!
//! ```text
//! x1 room_category0
//! 0 Kitchen
//! 1 Corridor
//!
//! f0 room_category_adjacency
//! ```
//!
//! A variable header is followed by its `<value index> <value label>` lines up to the next blank
//! line or the end of the stream. A factor header has no body.

use crate::catalog::SymbolicCatalog;
use crate::util::Result;
use crate::variable::{Domain, VariableInfo};
use super::{split, Lines};

use tracing::{debug, trace};

use std::io::BufRead;


/// The kind of object a header line declares
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Variable,
    Factor
}


/// Parse a `.info` stream into a `SymbolicCatalog`
///
/// # Errors
/// * `ConceptualError::Format` on a malformed header, an unknown kind character or a malformed
///   value line
/// * `ConceptualError::DuplicateIdentifier` if an id is declared twice, or a value index or label
///   repeats within one variable
/// * `ConceptualError::Io` if reading fails
pub fn parse<R: BufRead>(input: R) -> Result<SymbolicCatalog> {
    let mut lines = Lines::new(input);
    let mut catalog = SymbolicCatalog::new();

    while let Some(line) = lines.next_line()? {
        if line.trim().is_empty() {
            continue;
        }

        let (kind, id, name) = parse_header(&lines, &line)?;
        match kind {
            Kind::Variable => {
                let values = parse_values(&mut lines)?;
                trace!("x{} {}: {} values", id, name, values.len());
                catalog.add_variable(id, VariableInfo::new(&name, values))?;
            },
            Kind::Factor => {
                trace!("f{} {}", id, name);
                catalog.add_factor(id, &name)?;
            }
        }
    }

    debug!("parsed {} variables and {} factors", catalog.num_variables(), catalog.num_factors());
    Ok(catalog)
}


/// Parse a ```<kind><id> <displayName>``` header
fn parse_header<R: BufRead>(lines: &Lines<R>, line: &str) -> Result<(Kind, usize, String)> {
    let toks = split(line);
    if toks.len() != 2 {
        return Err(lines.error(format!("expected <kind><id> <name>, found {:?}", line)));
    }

    let obj = toks[0];
    let kind = match obj.chars().next() {
        Some('x') => Kind::Variable,
        Some('f') => Kind::Factor,
        _ => return Err(lines.error(format!("unknown kind in header {:?}", obj)))
    };

    let id = lines.token(&obj[1..], "identifier")?;
    Ok((kind, id, String::from(toks[1])))
}


/// Read value lines up to a blank line or the end of the stream
fn parse_values<R: BufRead>(lines: &mut Lines<R>) -> Result<Domain> {
    let mut values = Domain::new();

    while let Some(line) = lines.next_line()? {
        let toks = split(&line);
        if toks.is_empty() {
            break;
        } else if toks.len() != 2 {
            return Err(lines.error(format!("expected <index> <label>, found {:?}", line)));
        }

        let idx = lines.token(toks[0], "value index")?;
        values.insert(idx, String::from(toks[1]))?;
    }

    Ok(values)
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::util::ConceptualError;

    const ROOMS: &str =
        "x1 Room0\n0 Kitchen\n1 Hall\n\nx2 Room1\n0 Kitchen\n1 Hall\n\nf0 Adjacent\n";

    fn format_line(input: &str) -> usize {
        match parse(input.as_bytes()).expect_err("missing error") {
            ConceptualError::Format { line, .. } => line,
            e => panic!("wrong error type: {}", e)
        }
    }

    #[test]
    fn parse_rooms() {
        let c = parse(ROOMS.as_bytes()).unwrap();
        assert_eq!(2, c.num_variables());
        assert_eq!(1, c.num_factors());

        assert_eq!(Some("Room0"), c.var_name(1));
        assert_eq!(Some("Room"), c.var_type(2));
        assert_eq!(Some("Adjacent"), c.factor_name(0));

        let v = c.variable(2).unwrap();
        assert_eq!(vec!["Kitchen", "Hall"], v.values().labels());
        assert_eq!(Some(1), v.values().index("Hall"));
    }

    #[test]
    fn values_until_eof() {
        let c = parse("f3 Observed\n\n\nx7 shape12\n0 square\n1 round".as_bytes()).unwrap();
        assert_eq!(Some("Observed"), c.factor_name(3));
        assert_eq!(Some("shape"), c.var_type(7));
        assert_eq!(2, c.variable(7).unwrap().values().len());
    }

    #[test]
    fn variable_without_values() {
        let c = parse("x0 empty\n\nf0 Unit\n".as_bytes()).unwrap();
        assert!(c.variable(0).unwrap().values().is_empty());
    }

    #[test]
    fn bad_headers() {
        assert_eq!(1, format_line("y1 Room0\n"));
        assert_eq!(1, format_line("x1\n"));
        assert_eq!(1, format_line("x1 Room 0\n"));
        assert_eq!(1, format_line("xa Room0\n"));
        assert_eq!(3, format_line("f0 Adjacent\n\nx Room0\n"));
    }

    #[test]
    fn bad_values() {
        assert_eq!(2, format_line("x1 Room0\nKitchen\n"));
        assert_eq!(3, format_line("x1 Room0\n0 Kitchen\none Hall\n"));
    }

    #[test]
    fn duplicate_ids() {
        let input = "x1 Room0\n0 Kitchen\n\nx1 Room1\n0 Hall\n";
        match parse(input.as_bytes()).expect_err("missing error") {
            ConceptualError::DuplicateIdentifier(_) => assert!(true),
            _ => panic!("wrong error type")
        };

        // the same id may name a variable and a factor
        let c = parse("x1 Room0\n0 Kitchen\n\nf1 Adjacent\n".as_bytes()).unwrap();
        assert_eq!(Some("Adjacent"), c.factor_name(1));

        match parse("f0 A\nf0 B\n".as_bytes()).expect_err("missing error") {
            ConceptualError::DuplicateIdentifier(_) => assert!(true),
            _ => panic!("wrong error type")
        };
    }

    #[test]
    fn duplicate_values() {
        match parse("x1 Room0\n0 Kitchen\n0 Hall\n".as_bytes()).expect_err("missing error") {
            ConceptualError::DuplicateIdentifier(_) => assert!(true),
            _ => panic!("wrong error type")
        };
    }

}
