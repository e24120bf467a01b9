/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::ops::Deref;

use crate::Error;

/// The value of a single declared property of a Graph model.
///
/// Graph responses only include the properties that were requested (or that
/// the service decided to return), and any of them may be `null`. Both cases
/// need to survive a round trip, so a property is either absent, explicitly
/// null, or a value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Property<T> {
    /// The property was never set, and wasn't present in the input.
    #[default]
    Absent,

    /// The property was present with a `null` value.
    Null,

    Value(T),
}

impl<T> Property<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Property::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Property::Null)
    }

    /// Whether the property was set at all, including to `null`.
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Property::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Property::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Property<&T> {
        match self {
            Property::Absent => Property::Absent,
            Property::Null => Property::Null,
            Property::Value(value) => Property::Value(value),
        }
    }

    pub fn as_mut(&mut self) -> Property<&mut T> {
        match self {
            Property::Absent => Property::Absent,
            Property::Null => Property::Null,
            Property::Value(value) => Property::Value(value),
        }
    }

    pub fn as_deref(&self) -> Property<&T::Target>
    where
        T: Deref,
    {
        self.as_ref().map(|value| value.deref())
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Property<U> {
        match self {
            Property::Absent => Property::Absent,
            Property::Null => Property::Null,
            Property::Value(value) => Property::Value(f(value)),
        }
    }

    pub fn try_map<U, E, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<Property<U>, E> {
        Ok(match self {
            Property::Absent => Property::Absent,
            Property::Null => Property::Null,
            Property::Value(value) => Property::Value(f(value)?),
        })
    }

    /// Take the property out, leaving it absent.
    pub fn take(&mut self) -> Property<T> {
        std::mem::take(self)
    }

    /// Read the property: [`Error::NotFound`] if it is absent, `None` if it is
    /// null.
    pub fn get(&self) -> Result<Option<&T>, Error> {
        match self {
            Property::Absent => Err(Error::NotFound),
            Property::Null => Ok(None),
            Property::Value(value) => Ok(Some(value)),
        }
    }

    pub fn get_copied(&self) -> Result<Option<T>, Error>
    where
        T: Copy,
    {
        self.get().map(|value| value.copied())
    }

    pub fn get_deref(&self) -> Result<Option<&T::Target>, Error>
    where
        T: Deref,
    {
        self.get().map(|value| value.map(Deref::deref))
    }
}

/// `None` becomes an explicit null.
impl<T> From<Option<T>> for Property<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Property::Value(value),
            None => Property::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Property;
    use crate::Error;

    #[test]
    fn absent_null_and_value_are_distinct() {
        let absent: Property<String> = Property::Absent;
        let null: Property<String> = Property::Null;
        let empty = Property::Value(String::new());

        assert!(matches!(absent.get_deref(), Err(Error::NotFound)));
        assert_eq!(null.get_deref().unwrap(), None);
        assert_eq!(empty.get_deref().unwrap(), Some(""));

        assert!(!absent.is_present());
        assert!(null.is_present());
        assert!(empty.is_present());
    }

    #[test]
    fn none_converts_to_null() {
        assert_eq!(Property::<bool>::from(None), Property::Null);
        assert_eq!(Property::from(Some(0)), Property::Value(0));
    }

    #[test]
    fn take_leaves_absent() {
        let mut property = Property::Value(7);
        assert_eq!(property.take(), Property::Value(7));
        assert!(property.is_absent());
    }

    #[test]
    fn try_map_short_circuits_on_error() {
        let value = Property::Value("x");
        let result: Result<Property<i32>, &str> = value.try_map(|_| Err("bad"));
        assert_eq!(result, Err("bad"));

        let null: Property<&str> = Property::Null;
        let result: Result<Property<i32>, &str> = null.try_map(|_| Err("bad"));
        assert_eq!(result, Ok(Property::Null));
    }
}
