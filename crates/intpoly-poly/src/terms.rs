//! Ordered term sequences.
//!
//! A `TermList` is an append-only sequence of terms kept in strictly
//! descending exponent order. Zero terms are dropped at the point of
//! insertion, so a list built through `push` never needs a cleanup pass.

use intpoly_rings::Coefficient;

use crate::error::PolyError;
use crate::term::Term;

/// An append-only sequence of terms.
///
/// Once handed to a `SparsePoly` the list is never mutated again; all
/// mutation happens while an operation builds its result.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct TermList<C: Coefficient = i64> {
    terms: Vec<Term<C>>,
}

impl<C: Coefficient> TermList<C> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates an empty list with room for `capacity` terms.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            terms: Vec::with_capacity(capacity),
        }
    }

    /// Wraps raw terms without any checking.
    ///
    /// Callers must run [`TermList::validate`] before publishing the list.
    pub(crate) fn from_raw(terms: Vec<Term<C>>) -> Self {
        Self { terms }
    }

    /// Appends a term at the end, silently dropping it if it is null.
    ///
    /// The caller is responsible for pushing in descending exponent order.
    pub fn push(&mut self, term: Term<C>) {
        if term.is_null() {
            return;
        }
        debug_assert!(
            self.last().map_or(true, |last| last.exponent() > term.exponent()),
            "terms must be pushed in strictly descending exponent order"
        );
        self.terms.push(term);
    }

    /// Returns true if the list holds no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns the leading (highest exponent) term.
    #[must_use]
    pub fn first(&self) -> Option<&Term<C>> {
        self.terms.first()
    }

    /// Returns the trailing (lowest exponent) term.
    #[must_use]
    pub fn last(&self) -> Option<&Term<C>> {
        self.terms.last()
    }

    /// Iterates from the leading term to the trailing one.
    pub fn iter(&self) -> std::slice::Iter<'_, Term<C>> {
        self.terms.iter()
    }

    /// Returns the terms as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Term<C>] {
        &self.terms
    }

    /// Consumes the list and returns its terms.
    #[must_use]
    pub fn into_vec(self) -> Vec<Term<C>> {
        self.terms
    }

    /// Checks the normalization invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a zero coefficient, or an
    /// exponent that is not strictly below its predecessor.
    pub fn validate(&self) -> Result<(), PolyError> {
        let mut previous: Option<u32> = None;
        for (index, term) in self.terms.iter().enumerate() {
            if term.is_null() {
                return Err(PolyError::ZeroCoefficient { index });
            }
            if let Some(previous) = previous {
                if term.exponent() >= previous {
                    return Err(PolyError::NotDescending {
                        index,
                        previous,
                        exponent: term.exponent(),
                    });
                }
            }
            previous = Some(term.exponent());
        }
        Ok(())
    }
}

impl<'a, C: Coefficient> IntoIterator for &'a TermList<C> {
    type Item = &'a Term<C>;
    type IntoIter = std::slice::Iter<'a, Term<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl<C: Coefficient> IntoIterator for TermList<C> {
    type Item = Term<C>;
    type IntoIter = std::vec::IntoIter<Term<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}
