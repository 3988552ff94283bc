//! Boolean-like predicate results.

use alloc::string::String;

/// A value a predicate can return to accept or reject an element.
pub trait Truthy {
    /// Returns true if the element should be kept.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl Truthy for &str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_and_option() {
        assert!(true.is_truthy());
        assert!(!false.is_truthy());
        assert!(Some(0).is_truthy());
        assert!(!None::<i32>.is_truthy());
    }

    #[test]
    fn test_numbers() {
        assert!(1i32.is_truthy());
        assert!(!0u64.is_truthy());
        assert!((-0.5f64).is_truthy());
        assert!(!0.0f64.is_truthy());
        assert!(!(-0.0f32).is_truthy());
        assert!(!f64::NAN.is_truthy());
    }

    #[test]
    fn test_strings() {
        assert!("x".is_truthy());
        assert!(!"".is_truthy());
        assert!(!String::new().is_truthy());
    }
}
