//! Expelled-number sequence rows.
//!
//! Model
//! - Start from the line `1..=len`. At row k (0-based) the element at index k
//!   is expelled; the remainder is reordered by alternating the nearest
//!   element before the expelled one with the nearest element after it, then
//!   appending whatever the `after` side still holds.
//! - Rows advance while the expulsion index stays inside the shrinking line,
//!   so roughly the first half of the numbers ever get expelled; the rest
//!   survive the whole process.

use crate::error::SimError;
use std::collections::HashMap;

/// Next row after expelling the element at index `row`.
///
/// `row` must be a valid index into `line`.
pub fn next_row(line: &[u32], row: usize) -> Vec<u32> {
    let before = &line[..row];
    let after = &line[row + 1..];
    let mut next = Vec::with_capacity(line.len().saturating_sub(1));
    let mut remaining = after.iter();
    for &b in before.iter().rev() {
        next.push(b);
        if let Some(&a) = remaining.next() {
            next.push(a);
        }
    }
    next.extend(remaining.copied());
    next
}

/// Map each expelled number to the 1-based row at which it left the sequence.
pub fn expulsion_rows(len: usize) -> Result<HashMap<u32, usize>, SimError> {
    if len == 0 {
        return Err(SimError::invalid("sequence length must be at least 1"));
    }
    let mut line: Vec<u32> = (1..=len as u32).collect();
    let mut expelled = HashMap::new();
    let mut row = 0usize;
    while row < line.len() {
        expelled.insert(line[row], row + 1);
        line = next_row(&line, row);
        row += 1;
    }
    Ok(expelled)
}

/// Row at which `number` is expelled from the line `1..=len`, if it ever is.
pub fn row_of(number: u32, len: usize) -> Result<Option<usize>, SimError> {
    Ok(expulsion_rows(len)?.get(&number).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_drops_the_head_and_keeps_order() {
        assert_eq!(next_row(&[1, 2, 3, 4, 5], 0), vec![2, 3, 4, 5]);
    }

    #[test]
    fn interior_expulsion_alternates_around_the_gap() {
        // Expel 3 from [2,3,4,5]: nearest-before 2, nearest-after 4, tail 5.
        assert_eq!(next_row(&[2, 3, 4, 5], 1), vec![2, 4, 5]);
        // Expel the tail of [2,4,5]: only the before side remains, reversed.
        assert_eq!(next_row(&[2, 4, 5], 2), vec![4, 2]);
    }

    #[test]
    fn expulsion_rows_of_five_match_hand_trace() {
        let rows = expulsion_rows(5).unwrap();
        assert_eq!(rows.get(&1), Some(&1));
        assert_eq!(rows.get(&3), Some(&2));
        assert_eq!(rows.get(&5), Some(&3));
        // 2 and 4 survive: the expulsion index catches up with the line.
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn survivors_are_reported_as_never_expelled() {
        assert_eq!(row_of(4, 5).unwrap(), None);
        assert_eq!(row_of(1, 5).unwrap(), Some(1));
    }

    #[test]
    fn empty_sequence_is_invalid() {
        assert!(matches!(
            expulsion_rows(0),
            Err(SimError::InvalidConfig { .. })
        ));
    }
}
