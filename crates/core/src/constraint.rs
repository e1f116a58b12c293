//! Numeric constraints checked once at construction.
//!
//! Configuration values such as masses, lengths, and frame rates must satisfy
//! simple invariants. Wrapping them in [`Constrained<T, C>`] moves the check
//! to construction time, so a simulation never sees a value that violates it.
//!
//! # Provided Constraints
//!
//! - [`Finite`]: Not NaN or infinite
//! - [`NonNegative`]: Finite and zero or greater
//! - [`StrictlyPositive`]: Finite and greater than zero
//!
//! # Extending
//!
//! Custom invariants are zero-sized marker types implementing [`Constraint<T>`].

use std::marker::PhantomData;

use thiserror::Error;

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
    #[error("value must be finite")]
    Infinite,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use framesim_core::constraint::{Constrained, StrictlyPositive};
///
/// let mass = Constrained::<f64, StrictlyPositive>::new(2.5).unwrap();
/// assert_eq!(mass.into_inner(), 2.5);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
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

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Marker for values that are neither NaN nor infinite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

/// Marker for finite values that are zero or greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

/// Marker for finite values strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl Constraint<f64> for Finite {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}

impl Constraint<f64> for NonNegative {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        Finite::check(value)?;
        if *value < 0.0 {
            return Err(ConstraintError::Negative);
        }
        Ok(())
    }
}

impl Constraint<f64> for StrictlyPositive {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        NonNegative::check(value)?;
        if *value == 0.0 {
            return Err(ConstraintError::Zero);
        }
        Ok(())
    }
}

impl NonNegative {
    /// Constructs a non-negative `f64`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative, NaN, or infinite.
    pub fn new(value: f64) -> Result<Constrained<f64, NonNegative>, ConstraintError> {
        Constrained::new(value)
    }
}

impl StrictlyPositive {
    /// Constructs a strictly positive `f64`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, NaN, or infinite.
    pub fn new(value: f64) -> Result<Constrained<f64, StrictlyPositive>, ConstraintError> {
        Constrained::new(value)
    }
}

impl Finite {
    /// Constructs a finite `f64`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is NaN or infinite.
    pub fn new(value: f64) -> Result<Constrained<f64, Finite>, ConstraintError> {
        Constrained::new(value)
    }
}
