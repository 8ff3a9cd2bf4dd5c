//! Parser for the `.fg` factor graph format written by libDAI.
//!
//! ```text
//! <number of factors>
//!
//! <number of variables>
//! <variable ids>
//! <cardinalities>
//! <number of entries>
//! <linear index> <weight>
//! ...
//! ```
//!
//! Every factor block is preceded by a blank line. The parser reads exactly the declared counts
//! and ignores anything after the last factor. Counts only bound the loops, so a count larger
//! than the input ends in a format error at the end of the stream.

use crate::factor::{RawFactor, RawFactorTable};
use crate::util::Result;
use super::{split, Lines};

use indexmap::IndexMap;
use tracing::{debug, trace};

use std::io::BufRead;


/// Parse a `.fg` stream into a `RawFactorTable`
///
/// # Errors
/// * `ConceptualError::Format` if a blank separator is missing, a count is not numeric, a line
///   does not hold the declared number of tokens, an index repeats within a factor, or the stream
///   ends early
/// * `ConceptualError::DuplicateIdentifier` if a variable appears twice in a factor's scope
/// * `ConceptualError::Range` if a linear index is outside its factor's table
/// * `ConceptualError::Io` if reading fails
pub fn parse<R: BufRead>(input: R) -> Result<RawFactorTable> {
    let mut lines = Lines::new(input);

    let num_factors = lines.count("factor count")?;
    let mut factors = Vec::new();

    for f in 0..num_factors {
        factors.push(parse_factor(&mut lines, f)?);
    }

    debug!("parsed {} factors from {} lines", factors.len(), lines.line());
    Ok(RawFactorTable::new(factors))
}


fn parse_factor<R: BufRead>(lines: &mut Lines<R>, f: usize) -> Result<RawFactor> {
    let sep = lines.expect_line("blank line")?;
    if !sep.trim().is_empty() {
        return Err(lines.error(format!("expected a blank line before factor {}", f)));
    }

    let num_vars = lines.count("variable count")?;
    let vars: Vec<usize> = lines.tokens(num_vars, "variable ids")?;
    let cardinalities: Vec<usize> = lines.tokens(num_vars, "cardinalities")?;

    let num_entries = lines.count("entry count")?;
    let mut potential = IndexMap::new();
    for _ in 0..num_entries {
        let line = lines.expect_line("potential entry")?;
        let toks = split(&line);
        if toks.len() != 2 {
            return Err(lines.error(format!("expected <index> <weight>, found {:?}", line)));
        }

        let idx: usize = lines.token(toks[0], "linear index")?;
        let weight: f64 = lines.token(toks[1], "weight")?;
        if potential.insert(idx, weight).is_some() {
            return Err(lines.error(format!("linear index {} repeated in factor {}", idx, f)));
        }
    }

    trace!("factor {}: vars {:?}, cardinalities {:?}, {} entries", f, vars, cardinalities, potential.len());
    RawFactor::new(vars, cardinalities, potential)
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::util::ConceptualError;

    const PAIR: &str = "1\n\n2\n1 2\n2 2\n4\n0 0.1\n1 0.4\n2 0.2\n3 0.3\n";

    fn format_line(input: &str) -> usize {
        match parse(input.as_bytes()).expect_err("missing error") {
            ConceptualError::Format { line, .. } => line,
            e => panic!("wrong error type: {}", e)
        }
    }

    #[test]
    fn parse_pair() {
        let table = parse(PAIR.as_bytes()).unwrap();
        assert_eq!(1, table.len());

        let f = &table.factors()[0];
        assert_eq!(&[1, 2], f.vars());
        assert_eq!(&[2, 2], f.cardinalities());
        assert_eq!(4, f.potential().len());
        assert_eq!(Some(&0.4), f.potential().get(&1usize));
        assert_eq!(vec![0, 1, 2, 3], f.potential().keys().cloned().collect::<Vec<usize>>());
    }

    #[test]
    fn parse_several() {
        let input = "2\n\n1\n3\n3\n1\n2 1.5\n\n2\n3 4\n3 2\n0\ntrailing garbage\n";
        let table = parse(input.as_bytes()).unwrap();
        assert_eq!(2, table.len());

        let f0 = &table.factors()[0];
        assert_eq!(&[3], f0.vars());
        assert_eq!(Some(&1.5), f0.potential().get(&2usize));

        let f1 = &table.factors()[1];
        assert_eq!(&[3, 4], f1.vars());
        assert_eq!(&[3, 2], f1.cardinalities());
        assert!(f1.potential().is_empty());
    }

    #[test]
    fn parse_empty() {
        let table = parse("0\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn missing_separator() {
        assert_eq!(2, format_line("1\n2\n1 2\n2 2\n0\n"));
    }

    #[test]
    fn non_numeric_count() {
        assert_eq!(1, format_line("one\n"));
        assert_eq!(3, format_line("1\n\ntwo\n1 2\n2 2\n0\n"));
        assert_eq!(6, format_line("1\n\n2\n1 2\n2 2\nfour\n"));
    }

    #[test]
    fn token_count_mismatch() {
        // too few ids
        assert_eq!(4, format_line("1\n\n2\n1\n2 2\n0\n"));
        // too many cardinalities
        assert_eq!(5, format_line("1\n\n2\n1 2\n2 2 2\n0\n"));
        // entry with a missing weight
        assert_eq!(7, format_line("1\n\n1\n1\n2\n1\n0\n"));
    }

    #[test]
    fn bad_entry() {
        assert_eq!(7, format_line("1\n\n1\n1\n2\n1\n0 heavy\n"));
        assert_eq!(7, format_line("1\n\n1\n1\n2\n1\n-1 0.5\n"));
        // repeated linear index
        assert_eq!(8, format_line("1\n\n1\n1\n2\n2\n0 0.5\n0 0.7\n"));
    }

    #[test]
    fn truncated() {
        // declares two entries but ends after one
        assert_eq!(8, format_line("1\n\n1\n1\n2\n2\n0 0.5\n"));
        // declares two factors
        assert_eq!(8, format_line("2\n\n1\n1\n2\n1\n0 0.5\n"));
    }

    #[test]
    fn huge_counts() {
        assert_eq!(2, format_line("18446744073709551615\n"));
        assert_eq!(3, format_line("1000000000000\n\n"));
        assert_eq!(8, format_line("1\n\n1\n1\n2\n18446744073709551615\n0 0.5\n"));
        assert_eq!(3, format_line("1\n\n18446744073709551616\n"));
    }

    #[test]
    fn index_out_of_range() {
        match parse("1\n\n1\n1\n2\n1\n99 0.5\n".as_bytes()).expect_err("missing error") {
            ConceptualError::Range(_) => assert!(true),
            _ => panic!("wrong error type")
        };
    }

    #[test]
    fn duplicate_scope() {
        match parse("1\n\n2\n1 1\n2 2\n0\n".as_bytes()).expect_err("missing error") {
            ConceptualError::DuplicateIdentifier(_) => assert!(true),
            _ => panic!("wrong error type")
        };
    }

}
