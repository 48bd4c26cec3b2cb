use std::cmp::Ordering;

use num_traits::Zero;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is zero or greater.
///
/// # Examples
///
/// ```
/// use watbal_core::constraint::NonNegative;
/// use uom::si::{area::square_meter, f64::Area};
///
/// let area = NonNegative::new(Area::new::<square_meter>(120.0)).unwrap();
/// assert_eq!(area.get().get::<square_meter>(), 120.0);
///
/// assert!(NonNegative::new(-0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs `Constrained<T, NonNegative>` if the value is non-negative.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Negative`] if the value is below zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            None => Err(ConstraintError::NotANumber),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{area::square_meter, f64::Area};

    #[test]
    #[allow(clippy::float_cmp)]
    fn floats() {
        assert_eq!(NonNegative::new(0.0).unwrap().into_inner(), 0.0);
        assert_eq!(NonNegative::new(3.5).unwrap().into_inner(), 3.5);
        assert_eq!(NonNegative::new(-1.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn areas_add_up() {
        let roof = NonNegative::new(Area::new::<square_meter>(400.0)).unwrap();
        let yard = NonNegative::new(Area::new::<square_meter>(100.0)).unwrap();

        let total: Constrained<Area, NonNegative> = roof + yard + roof;
        approx::assert_relative_eq!(total.get().get::<square_meter>(), 900.0);
    }

    #[test]
    fn negative_area_rejected() {
        assert!(matches!(
            NonNegative::new(Area::new::<square_meter>(-10.0)),
            Err(ConstraintError::Negative)
        ));
    }
}
