//! Merge-based addition of sorted term lists.
//!
//! Works like the merge step of merge sort: two cursors advance through
//! descending term lists, terms with equal exponents are combined and
//! everything else is passed through in order.

use std::cmp::Ordering;

use intpoly_rings::Coefficient;

use crate::term::Term;
use crate::terms::TermList;

/// Adds two descending, duplicate-free term lists.
///
/// Combined terms whose coefficients cancel are dropped. The result is
/// descending and duplicate-free without any sorting pass.
#[must_use]
pub fn merge_add<C: Coefficient>(a: &TermList<C>, b: &TermList<C>) -> TermList<C> {
    if a.is_empty() {
        return b.clone();
    }
    if b.is_empty() {
        return a.clone();
    }

    let mut result = TermList::with_capacity(a.len() + b.len());
    let mut left = a.iter().peekable();
    let mut right = b.iter().peekable();

    loop {
        match (left.peek(), right.peek()) {
            (None, None) => break,
            (Some(&&l), Some(&&r)) => match l.exponent().cmp(&r.exponent()) {
                Ordering::Equal => {
                    result.push(Term::new(l.coeff().add_wrapping(&r.coeff()), l.exponent()));
                    left.next();
                    right.next();
                }
                Ordering::Greater => {
                    result.push(l);
                    left.next();
                }
                Ordering::Less => {
                    result.push(r);
                    right.next();
                }
            },
            (Some(&&l), None) => {
                result.push(l);
                left.next();
            }
            (None, Some(&&r)) => {
                result.push(r);
                right.next();
            }
        }
    }

    result
}
