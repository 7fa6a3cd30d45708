//! Sparse univariate polynomials.
//!
//! A polynomial is stored as its non-zero terms in strictly descending
//! exponent order. The zero polynomial is the empty term list. Every
//! operation reads its operands and returns a freshly built polynomial.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use intpoly_rings::Coefficient;
use tracing::{debug, trace};

use crate::algorithms::{merge_add, multiply, scale_by_term};
use crate::error::PolyError;
use crate::term::Term;
use crate::terms::TermList;

/// Degree reported for the zero polynomial.
pub const NO_DEGREE: i64 = -1;

/// A sparse univariate polynomial with integer coefficients.
///
/// The term list is normalized: exponents strictly decrease, no term has a
/// zero coefficient. Because this form is canonical, the derived `PartialEq`
/// and `Hash` compare polynomial values and agree with [`SparsePoly::equals`].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SparsePoly<C: Coefficient = i64> {
    /// Terms in descending exponent order.
    terms: TermList<C>,
}

impl<C: Coefficient> SparsePoly<C> {
    /// Creates the zero polynomial (empty term list).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            terms: TermList::new(),
        }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub const fn zero() -> Self {
        Self::empty()
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: C) -> Self {
        Self::monomial(c, 0)
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(C::one())
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(C::one(), 1)
    }

    /// Creates the monomial `c * x^exp`, or zero if `c` is zero.
    #[must_use]
    pub fn monomial(c: C, exp: u32) -> Self {
        let mut terms = TermList::with_capacity(1);
        terms.push(Term::new(c, exp));
        Self { terms }
    }

    /// Creates a polynomial from a pre-normalized term list.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError`] if a coefficient is zero or the exponents are
    /// not strictly descending.
    pub fn from_terms<I>(terms: I) -> Result<Self, PolyError>
    where
        I: IntoIterator,
        I::Item: Into<Term<C>>,
    {
        let terms = TermList::from_raw(terms.into_iter().map(Into::into).collect());
        if let Err(err) = terms.validate() {
            debug!(%err, "rejected term list");
            return Err(err);
        }
        Ok(Self { terms })
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of stored terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms, leading term first.
    #[must_use]
    pub fn terms(&self) -> &[Term<C>] {
        self.terms.as_slice()
    }

    /// Returns the underlying term list.
    #[must_use]
    pub fn term_list(&self) -> &TermList<C> {
        &self.terms
    }

    /// Consumes the polynomial and returns its terms.
    #[must_use]
    pub fn into_terms(self) -> Vec<Term<C>> {
        self.terms.into_vec()
    }

    /// Returns the leading term.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term<C>> {
        self.terms.first()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<C> {
        self.terms.first().map(Term::coeff)
    }

    /// Returns the exponent of the leading term.
    #[must_use]
    pub fn leading_exponent(&self) -> Option<u32> {
        self.terms.first().map(Term::exponent)
    }

    /// Returns the degree, or [`NO_DEGREE`] (-1) for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> i64 {
        self.leading_exponent().map_or(NO_DEGREE, i64::from)
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            terms: merge_add(&self.terms, &other.terms),
        }
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.scale(&Term::constant(C::minus_one()))
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies by a single term.
    ///
    /// # Panics
    ///
    /// Panics if a resulting exponent does not fit in a `u32`.
    #[must_use]
    pub fn scale(&self, m: &Term<C>) -> Self {
        Self {
            terms: scale_by_term(m, &self.terms),
        }
    }

    /// Multiplies two polynomials.
    ///
    /// # Panics
    ///
    /// Panics if a resulting exponent does not fit in a `u32`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            terms: multiply(&self.terms, &other.terms),
        }
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// `p^0` is the constant 1, including for the zero polynomial.
    ///
    /// # Panics
    ///
    /// Panics if a resulting exponent does not fit in a `u32`.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }
        if n == 1 {
            return self.clone();
        }

        trace!(terms = self.len(), n, "raising polynomial to power");

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Evaluates the polynomial at `value`.
    ///
    /// The zero polynomial evaluates to -1, not 0. Arithmetic wraps at the
    /// width of `C`.
    #[must_use]
    pub fn evaluate(&self, value: C) -> C {
        if self.is_zero() {
            return C::minus_one();
        }

        self.terms
            .iter()
            .fold(C::zero(), |acc, t| acc.add_wrapping(&t.eval(value)))
    }

    /// Returns true if both polynomials represent the same value.
    ///
    /// Defined as the difference having no degree.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.sub(other).degree() == NO_DEGREE
    }
}

impl<C: Coefficient> Default for SparsePoly<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C: Coefficient> TryFrom<Vec<Term<C>>> for SparsePoly<C> {
    type Error = PolyError;

    fn try_from(terms: Vec<Term<C>>) -> Result<Self, Self::Error> {
        Self::from_terms(terms)
    }
}

impl<C: Coefficient> From<Term<C>> for SparsePoly<C> {
    fn from(term: Term<C>) -> Self {
        Self::monomial(term.coeff(), term.exponent())
    }
}

/// Renders `0` for the zero polynomial, otherwise the terms in stored order
/// joined by `" + "`, e.g. `2x^3 + -9`.
impl<C: Coefficient> fmt::Display for SparsePoly<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

// Operators are implemented on references only, so method calls such as
// `p.add(&q)` keep resolving to the inherent by-reference methods.
impl<C: Coefficient> Add for &SparsePoly<C> {
    type Output = SparsePoly<C>;

    fn add(self, rhs: Self) -> Self::Output {
        SparsePoly::add(self, rhs)
    }
}

impl<C: Coefficient> Sub for &SparsePoly<C> {
    type Output = SparsePoly<C>;

    fn sub(self, rhs: Self) -> Self::Output {
        SparsePoly::sub(self, rhs)
    }
}

impl<C: Coefficient> Mul for &SparsePoly<C> {
    type Output = SparsePoly<C>;

    fn mul(self, rhs: Self) -> Self::Output {
        SparsePoly::mul(self, rhs)
    }
}

impl<C: Coefficient> Neg for &SparsePoly<C> {
    type Output = SparsePoly<C>;

    fn neg(self) -> Self::Output {
        SparsePoly::neg(self)
    }
}
