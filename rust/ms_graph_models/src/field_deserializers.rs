/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Per-type tables mapping JSON property names to decoders.
//!
//! A table is built fresh for each object being decoded. Derived types start
//! from their base type's table (see [`FieldDeserializers::inherit`]) and add
//! their own properties on top.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::{Error, Parsable, ParseNode, Property};

/// Decodes one property from `node` into the model.
pub type FieldDeserializer<T> = Box<dyn Fn(&mut T, &ParseNode<'_>) -> Result<(), Error>>;

/// Projects a model onto the slot holding one of its declared properties.
pub type Slot<T, V> = fn(&mut T) -> &mut Property<V>;

pub struct FieldDeserializers<T: 'static> {
    entries: HashMap<&'static str, FieldDeserializer<T>>,
}

impl<T: 'static> Default for FieldDeserializers<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: 'static> fmt::Debug for FieldDeserializers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("FieldDeserializers")
            .field("names", &names)
            .finish()
    }
}

impl<T: 'static> FieldDeserializers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a derived type's table from its base type's table. `base` is the
    /// projection from the derived type to the embedded base instance.
    pub fn inherit<B: 'static>(inherited: FieldDeserializers<B>, base: fn(&mut T) -> &mut B) -> Self {
        let entries = inherited
            .entries
            .into_iter()
            .map(|(name, deserializer)| {
                let deserializer =
                    boxed(move |model: &mut T, node: &ParseNode<'_>| deserializer(base(model), node));
                (name, deserializer)
            })
            .collect();
        Self { entries }
    }

    /// Turn a family member's table into a table for the family enum.
    /// `variant` must return the member for any instance the table is used
    /// with.
    pub fn lift<F: 'static>(self, variant: fn(&mut F) -> Option<&mut T>) -> FieldDeserializers<F> {
        let entries = self
            .entries
            .into_iter()
            .map(|(name, deserializer)| {
                let deserializer = boxed(move |family: &mut F, node: &ParseNode<'_>| {
                    let model = variant(family).ok_or_else(|| {
                        Error::UnexpectedResponse(format!(
                            "property `{name}` does not belong to this variant"
                        ))
                    })?;
                    deserializer(model, node)
                });
                (name, deserializer)
            })
            .collect();
        FieldDeserializers { entries }
    }

    /// Register a decoder for `name`. A type must not redeclare a property of
    /// one of its ancestors.
    pub fn insert<D>(&mut self, name: &'static str, deserializer: D)
    where
        D: Fn(&mut T, &ParseNode<'_>) -> Result<(), Error> + 'static,
    {
        let previous = self.entries.insert(name, boxed(deserializer));
        if previous.is_some() {
            log::warn!("field deserializer for `{name}` replaced an inherited one");
        }
        debug_assert!(previous.is_none(), "duplicate field deserializer for `{name}`");
    }

    /// Register a decoder which stores the result of `decode` into `slot`. A
    /// JSON `null` is stored as [`Property::Null`].
    pub fn field<V: 'static>(
        mut self,
        name: &'static str,
        slot: Slot<T, V>,
        decode: fn(&ParseNode<'_>) -> Result<Option<V>, Error>,
    ) -> Self {
        self.insert(name, move |model: &mut T, node: &ParseNode<'_>| {
            *slot(model) = decode(node)?.into();
            Ok(())
        });
        self
    }

    pub fn string(self, name: &'static str, slot: Slot<T, String>) -> Self {
        self.field(name, slot, |node| node.string_value())
    }

    pub fn boolean(self, name: &'static str, slot: Slot<T, bool>) -> Self {
        self.field(name, slot, |node| node.bool_value())
    }

    pub fn int32(self, name: &'static str, slot: Slot<T, i32>) -> Self {
        self.field(name, slot, |node| node.i32_value())
    }

    pub fn int64(self, name: &'static str, slot: Slot<T, i64>) -> Self {
        self.field(name, slot, |node| node.i64_value())
    }

    pub fn float64(self, name: &'static str, slot: Slot<T, f64>) -> Self {
        self.field(name, slot, |node| node.f64_value())
    }

    pub fn time(self, name: &'static str, slot: Slot<T, OffsetDateTime>) -> Self {
        self.field(name, slot, |node| node.time_value())
    }

    pub fn date(self, name: &'static str, slot: Slot<T, Date>) -> Self {
        self.field(name, slot, |node| node.date_value())
    }

    pub fn uuid(self, name: &'static str, slot: Slot<T, Uuid>) -> Self {
        self.field(name, slot, |node| node.uuid_value())
    }

    pub fn enumeration<E: FromStr + 'static>(self, name: &'static str, slot: Slot<T, E>) -> Self {
        self.field(name, slot, |node| node.enum_value::<E>())
    }

    pub fn object<V: Parsable>(self, name: &'static str, slot: Slot<T, V>) -> Self {
        self.field(name, slot, |node| node.object_value::<V>())
    }

    pub fn objects<V: Parsable>(self, name: &'static str, slot: Slot<T, Vec<Option<V>>>) -> Self {
        self.field(name, slot, |node| {
            node.collection_of_object_values::<V>()
        })
    }

    pub fn strings(self, name: &'static str, slot: Slot<T, Vec<Option<String>>>) -> Self {
        self.field(name, slot, |node| node.collection_of_string_values())
    }

    pub fn get(&self, name: &str) -> Option<&FieldDeserializer<T>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn boxed<T, D>(deserializer: D) -> FieldDeserializer<T>
where
    D: Fn(&mut T, &ParseNode<'_>) -> Result<(), Error> + 'static,
{
    Box::new(deserializer)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::FieldDeserializers;
    use crate::{Error, ParseNode, Property};

    #[derive(Default)]
    struct Base {
        name: Property<String>,
    }

    #[derive(Default)]
    struct Derived {
        base: Base,
        count: Property<i32>,
    }

    fn base_table() -> FieldDeserializers<Base> {
        FieldDeserializers::<Base>::new().string("name", |m| &mut m.name)
    }

    fn derived_table() -> FieldDeserializers<Derived> {
        FieldDeserializers::<Derived>::inherit(base_table(), |m| &mut m.base)
            .int32("count", |m| &mut m.count)
    }

    #[test]
    fn inherited_entries_reach_the_base() {
        let table = derived_table();
        let mut names: Vec<_> = table.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["count", "name"]);

        let mut model = Derived::default();
        let value = json!("inner");
        let deserialize = table.get("name").expect("name should be inherited");
        deserialize(&mut model, &ParseNode::new(&value)).unwrap();
        assert_eq!(model.base.name, Property::Value("inner".to_string()));
    }

    #[test]
    fn null_is_stored_as_null() {
        let table = derived_table();
        let mut model = Derived::default();
        let deserialize = table.get("count").unwrap();
        deserialize(&mut model, &ParseNode::new(&json!(null))).unwrap();
        assert_eq!(model.count, Property::Null);
    }

    #[test]
    fn decode_errors_propagate() {
        let table = derived_table();
        let mut model = Derived::default();
        let deserialize = table.get("count").unwrap();
        let err = deserialize(&mut model, &ParseNode::new(&json!("seven"))).unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse(_)));
        assert!(model.count.is_absent());
    }

    #[test]
    #[should_panic(expected = "duplicate field deserializer")]
    #[cfg(debug_assertions)]
    fn redeclaring_an_inherited_property_is_rejected() {
        let _ = FieldDeserializers::<Derived>::inherit(base_table(), |m| &mut m.base)
            .string("name", |m| &mut m.base.name);
    }
}
