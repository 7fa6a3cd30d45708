//! Term-list multiplication.
//!
//! Multiplying by a single term shifts every exponent by the same amount,
//! which preserves the descending order. The full product folds one such
//! partial product per term of the left operand into an accumulator with
//! [`merge_add`], so the accumulator never grows beyond the final term count.

use intpoly_rings::Coefficient;
use tracing::trace;

use crate::algorithms::merge::merge_add;
use crate::term::Term;
use crate::terms::TermList;

/// Multiplies every term of `terms` by `m`.
///
/// Products with a zero coefficient are dropped; in particular a null `m`
/// yields the empty list.
///
/// # Panics
///
/// Panics if a shifted exponent does not fit in a `u32`.
#[must_use]
pub fn scale_by_term<C: Coefficient>(m: &Term<C>, terms: &TermList<C>) -> TermList<C> {
    let mut result = TermList::with_capacity(terms.len());
    for t in terms {
        result.push(t.mul(m));
    }
    result
}

/// Multiplies two term lists.
///
/// # Panics
///
/// Panics if an exponent sum does not fit in a `u32`.
#[must_use]
pub fn multiply<C: Coefficient>(a: &TermList<C>, b: &TermList<C>) -> TermList<C> {
    if a.is_empty() || b.is_empty() {
        return TermList::new();
    }

    trace!(left = a.len(), right = b.len(), "multiplying term lists");

    a.iter()
        .fold(TermList::new(), |acc, t| merge_add(&acc, &scale_by_term(t, b)))
}
