//! Type-erased pipeline values.

use std::any::{Any, TypeId, type_name};
use std::fmt;

use crate::error::TypeMismatchError;

/// The identity of an element type, fixed when a stage is built.
///
/// Two `ElementType`s are equal exactly when they describe the same Rust
/// type; the name is only used in error messages.
///
/// ```rust
/// use seqpipe::pipeline::ElementType;
///
/// assert_eq!(ElementType::of::<i32>(), ElementType::of::<i32>());
/// assert_ne!(ElementType::of::<i32>(), ElementType::of::<u32>());
/// assert_eq!(ElementType::of::<u8>().name(), "u8");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ElementType {
    id: TypeId,
    name: &'static str,
}

impl ElementType {
    /// Returns the element type of `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Returns the name of the type as reported by [`std::any::type_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Fails unless `self` is `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatchError`] naming `expected` and `self`.
    pub fn ensure(self, expected: Self) -> Result<(), TypeMismatchError> {
        if self == expected {
            Ok(())
        } else {
            Err(TypeMismatchError::new(expected.name, self.name))
        }
    }
}

impl PartialEq for ElementType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ElementType {}

impl std::hash::Hash for ElementType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name)
    }
}

/// A value of any `'static` type flowing between pipeline stages.
///
/// `Element` remembers the [`ElementType`] it was built from, so a stage
/// expecting a different type can report both sides of the mismatch.
///
/// # Examples
///
/// ```rust
/// use seqpipe::pipeline::Element;
///
/// let element = Element::new(42_i32);
/// assert_eq!(element.type_name(), "i32");
/// assert_eq!(element.downcast_ref::<i32>(), Ok(&42));
/// assert!(element.downcast::<String>().is_err());
/// ```
pub struct Element {
    value: Box<dyn Any>,
    element_type: ElementType,
}

impl Element {
    /// Wraps `value`.
    #[must_use]
    pub fn new<T: 'static>(value: T) -> Self {
        Self {
            value: Box::new(value),
            element_type: ElementType::of::<T>(),
        }
    }

    /// Returns the type of the wrapped value.
    #[must_use]
    pub const fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Returns the name of the wrapped type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.element_type.name
    }

    /// Returns `true` if the wrapped value is a `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrows the wrapped value as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatchError`] if the value is not a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Result<&T, TypeMismatchError> {
        self.value
            .downcast_ref::<T>()
            .ok_or_else(|| TypeMismatchError::new(type_name::<T>(), self.type_name()))
    }

    /// Unwraps the value as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatchError`] if the value is not a `T`.
    pub fn downcast<T: 'static>(self) -> Result<T, TypeMismatchError> {
        let found = self.type_name();
        self.value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| TypeMismatchError::new(type_name::<T>(), found))
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Element")
            .field("type_name", &self.element_type.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downcast_wrong_type_names_both_sides() {
        let element = Element::new(1.5_f64);
        let error = element.downcast::<u8>().unwrap_err();
        assert_eq!(error, TypeMismatchError::new("u8", "f64"));
    }

    #[test]
    fn test_downcast_owned_value() {
        let element = Element::new(String::from("owned"));
        assert!(element.is::<String>());
        assert_eq!(element.downcast::<String>(), Ok(String::from("owned")));
    }

    #[test]
    fn test_element_type_compares_by_type() {
        assert_eq!(Element::new(1_i32).element_type(), ElementType::of::<i32>());
        assert_ne!(Element::new(1_i32).element_type(), ElementType::of::<i64>());
    }

    #[test]
    fn test_ensure_names_expected_then_found() {
        let error = ElementType::of::<u16>()
            .ensure(ElementType::of::<bool>())
            .unwrap_err();
        assert_eq!(error, TypeMismatchError::new("bool", "u16"));
        assert_eq!(ElementType::of::<u16>().ensure(ElementType::of::<u16>()), Ok(()));
    }

    #[test]
    fn test_debug_shows_type_name() {
        let element = Element::new(7_u32);
        let debug_string = format!("{element:?}");
        assert!(debug_string.contains("u32"));
    }
}
