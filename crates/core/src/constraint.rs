//! Construction-time numeric constraints for element geometry.
//!
//! Areas entering a water balance must be physically meaningful before any
//! volume is derived from them: an element area may be zero (a drainage pipe
//! has no catchment of its own) but never negative, and a pond's water
//! surface must be strictly positive because it appears in a denominator.
//!
//! These invariants are expressed with the generic [`Constrained<T, C>`]
//! wrapper, where `C` is a marker type implementing [`Constraint<T>`]:
//!
//! - [`NonNegative`]: zero or greater
//! - [`StrictlyPositive`]: greater than zero
//!
//! Both work with plain `f64` and with `uom` quantities such as
//! `uom::si::f64::Area`.

mod non_negative;
mod strictly_positive;

use std::{marker::PhantomData, ops::Add};

use num_traits::Zero;
use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use watbal_core::constraint::{Constrained, NonNegative};
///
/// let area = Constrained::<_, NonNegative>::new(250.0).unwrap();
/// assert_eq!(area.into_inner(), 250.0);
///
/// assert!(Constrained::<f64, NonNegative>::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// Returns a copy of the inner value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value
    }
}

/// Summed element areas keep their constraint.
impl<T> Add for Constrained<T, NonNegative>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let value = self.value + rhs.value;
        debug_assert!(
            NonNegative::check(&value).is_ok(),
            "sum of non-negative values must be non-negative"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }
}
