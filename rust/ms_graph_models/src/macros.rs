/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

/// Generates the accessors for a model's declared properties. Must be invoked
/// inside the model's `impl` block.
///
/// Each property is declared as `field: kind Type;`, where `kind` picks the
/// getter's return type:
///
/// - `copy`: `Result<Option<Type>, Error>`, for `Copy` values.
/// - `deref`: `Result<Option<&Type::Target>, Error>`, e.g. `&str` for a
///   `String` property or a slice for a `Vec`.
/// - `ref`: `Result<Option<&Type>, Error>`.
///
/// Getters return [`crate::Error::NotFound`] for an absent property and
/// `Ok(None)` for a null one. Alongside each getter this generates
/// `set_field(Option<Type>)` (`None` stores an explicit null),
/// `clear_field()` and `field_property()`.
macro_rules! property_accessors {
    (@get copy $(#[$doc:meta])* $field:ident: $ty:ty) => {
        $(#[$doc])*
        pub fn $field(&self) -> Result<Option<$ty>, $crate::Error> {
            self.$field.get_copied()
        }
    };
    (@get deref $(#[$doc:meta])* $field:ident: $ty:ty) => {
        $(#[$doc])*
        pub fn $field(&self) -> Result<Option<&<$ty as std::ops::Deref>::Target>, $crate::Error> {
            self.$field.get_deref()
        }
    };
    (@get ref $(#[$doc:meta])* $field:ident: $ty:ty) => {
        $(#[$doc])*
        pub fn $field(&self) -> Result<Option<&$ty>, $crate::Error> {
            self.$field.get()
        }
    };
    ($( $(#[$doc:meta])* $field:ident: $kind:ident $ty:ty; )*) => {
        $(
            property_accessors!(@get $kind $(#[$doc])* $field: $ty);

            paste::paste! {
                pub fn [<set_ $field>](&mut self, value: Option<$ty>) {
                    self.$field = value.into();
                }

                pub fn [<clear_ $field>](&mut self) {
                    self.$field = $crate::Property::Absent;
                }

                pub fn [<$field _property>](&self) -> &$crate::Property<$ty> {
                    &self.$field
                }
            }
        )*
    };
}

/// Declares the enum for a polymorphic family of entity types, with its
/// discriminator registry and [`crate::Parsable`] implementation. The first
/// variant is the family's base type, used when the discriminator is missing
/// or unknown.
///
/// Every member type needs a `DISCRIMINATOR` constant, a `new()` constructor
/// and an `AsRef<Entity>`/`AsMut<Entity>` implementation.
macro_rules! model_family {
    (
        $(#[$attr:meta])*
        $vis:vis enum $family:ident {
            $base:ident($base_ty:ty),
            $( $variant:ident($ty:ty), )+
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $family {
            $base($base_ty),
            $( $variant($ty), )+
        }

        impl $family {
            pub fn registry() -> &'static $crate::DiscriminatorRegistry<$family> {
                const ENTRIES: &[(&str, fn() -> $family)] = &[
                    $( (<$ty>::DISCRIMINATOR, || $family::$variant(<$ty>::new())), )+
                ];

                static REGISTRY: $crate::DiscriminatorRegistry<$family> =
                    $crate::DiscriminatorRegistry::new(
                        <$base_ty>::DISCRIMINATOR,
                        || $family::$base(<$base_ty>::new()),
                        ENTRIES,
                    );

                &REGISTRY
            }

            /// The `entity` part shared by every member of the family.
            pub fn entity(&self) -> &$crate::types::entity::Entity {
                match self {
                    $family::$base(model) => AsRef::as_ref(model),
                    $( $family::$variant(model) => AsRef::as_ref(model), )+
                }
            }

            pub fn entity_mut(&mut self) -> &mut $crate::types::entity::Entity {
                match self {
                    $family::$base(model) => AsMut::as_mut(model),
                    $( $family::$variant(model) => AsMut::as_mut(model), )+
                }
            }
        }

        impl Default for $family {
            fn default() -> Self {
                $family::$base(<$base_ty>::new())
            }
        }

        impl $crate::Parsable for $family {
            fn create_from_discriminator_value(
                node: &$crate::ParseNode<'_>,
            ) -> Result<Self, $crate::Error> {
                Self::registry().create_from_node(node)
            }

            fn field_deserializers(&self) -> $crate::FieldDeserializers<Self> {
                match self {
                    $family::$base(model) => $crate::Parsable::field_deserializers(model).lift::<$family>(|family| match family {
                        $family::$base(model) => Some(model),
                        _ => None,
                    }),
                    $(
                        $family::$variant(model) => $crate::Parsable::field_deserializers(model).lift::<$family>(|family| match family {
                            $family::$variant(model) => Some(model),
                            _ => None,
                        }),
                    )+
                }
            }

            fn serialize_properties<W: $crate::SerializationWriter>(
                &self,
                writer: &mut W,
            ) -> Result<(), $crate::Error> {
                match self {
                    $family::$base(model) => $crate::Parsable::serialize_properties(model, writer),
                    $( $family::$variant(model) => $crate::Parsable::serialize_properties(model, writer), )+
                }
            }

            fn additional_data(&self) -> &$crate::PropertyStore {
                match self {
                    $family::$base(model) => $crate::Parsable::additional_data(model),
                    $( $family::$variant(model) => $crate::Parsable::additional_data(model), )+
                }
            }

            fn additional_data_mut(&mut self) -> &mut $crate::PropertyStore {
                match self {
                    $family::$base(model) => $crate::Parsable::additional_data_mut(model),
                    $( $family::$variant(model) => $crate::Parsable::additional_data_mut(model), )+
                }
            }
        }

        impl From<$base_ty> for $family {
            fn from(model: $base_ty) -> Self {
                $family::$base(model)
            }
        }

        $(
            impl From<$ty> for $family {
                fn from(model: $ty) -> Self {
                    $family::$variant(model)
                }
            }
        )+

        impl_serde_via_parsable!($family);
    };
}

/// Implements `serde::Serialize` and `serde::Deserialize` for models by
/// going through their [`crate::Parsable`] implementation.
macro_rules! impl_serde_via_parsable {
    ($($model:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $model {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    let value = $crate::to_value(self).map_err(serde::ser::Error::custom)?;
                    serde::Serialize::serialize(&value, serializer)
                }
            }

            impl<'de> serde::Deserialize<'de> for $model {
                fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                    $crate::from_value(&value).map_err(serde::de::Error::custom)
                }
            }
        )+
    };
}
