//! Mixed-radix conversion between the linear index of a flat potential table and the per-variable
//! value indices it stands for.
//!
//! The first cardinality is the least significant digit, the convention used by libDAI when it
//! writes `.fg` files.

use crate::util::{Result, ConceptualError};

use itertools::Itertools;


/// The number of entries in a table with the given cardinalities.
///
/// # Errors
/// * `ConceptualError::Range` if the product overflows `usize`
pub fn size(cardinalities: &[usize]) -> Result<usize> {
    cardinalities.iter().try_fold(1usize, |acc, &c| {
        acc.checked_mul(c).ok_or_else(|| {
            ConceptualError::Range(format!("table of shape {:?} is too large", cardinalities))
        })
    })
}


/// Decode a linear index into one digit per cardinality.
///
/// # Args
/// * `linear`: the index into the flat table
/// * `cardinalities`: the domain size of each variable, in scope order
///
/// # Returns
/// the value index of each variable, in the same order as `cardinalities`
///
/// # Errors
/// * `ConceptualError::Range` if ```linear >= size(cardinalities)```
pub fn decode(linear: usize, cardinalities: &[usize]) -> Result<Vec<usize>> {
    let n = size(cardinalities)?;
    if linear >= n {
        return Err(ConceptualError::Range(
            format!("linear index {} exceeds table of shape {:?}", linear, cardinalities)
        ));
    }

    Ok(digits(linear, cardinalities))
}


/// Split an index already known to be below ```size(cardinalities)``` into its digits
pub(crate) fn digits(linear: usize, cardinalities: &[usize]) -> Vec<usize> {
    let mut rem = linear;
    let mut digits = Vec::with_capacity(cardinalities.len());
    for &c in cardinalities {
        digits.push(rem % c);
        rem /= c;
    }
    digits
}


/// Encode per-variable value indices into a linear index. Inverse of `decode`.
///
/// # Errors
/// * `ConceptualError::Range` if the number of digits differs from the number of cardinalities,
///   or if any digit is not smaller than its cardinality
pub fn encode(digits: &[usize], cardinalities: &[usize]) -> Result<usize> {
    if digits.len() != cardinalities.len() {
        return Err(ConceptualError::Range(
            format!("{} digits given for {} cardinalities", digits.len(), cardinalities.len())
        ));
    }

    // walk from the most significant digit down
    let mut linear = 0usize;
    for (&d, &c) in digits.iter().zip(cardinalities.iter()).rev() {
        if d >= c {
            return Err(ConceptualError::Range(
                format!("digit {} out of range for cardinality {}", d, c)
            ));
        }
        linear = linear.checked_mul(c)
                       .and_then(|l| l.checked_add(d))
                       .ok_or_else(|| ConceptualError::Range(
                           format!("table of shape {:?} is too large", cardinalities)
                       ))?;
    }

    Ok(linear)
}


/// Iterate over every digit tuple of a table, in linear-index order.
pub fn indices(cardinalities: &[usize]) -> Box<dyn Iterator<Item = Vec<usize>>> {
    if cardinalities.is_empty() {
        return Box::new(Some(vec![]).into_iter());
    }

    // multi_cartesian_product varies the last axis fastest, so feed it reversed
    let rev: Vec<usize> = cardinalities.iter().rev().cloned().collect();
    Box::new(
        rev.into_iter()
           .map(|c| 0..c)
           .multi_cartesian_product()
           .map(|mut digits| { digits.reverse(); digits })
    )
}
