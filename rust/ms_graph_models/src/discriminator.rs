/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Resolution of `@odata.type` discriminators to concrete model types.

use std::fmt;

use crate::{Error, ParseNode};

/// The property carrying the type of a polymorphic Graph object.
pub const ODATA_TYPE: &str = "@odata.type";

/// Maps the discriminators of a polymorphic family to constructors for the
/// family's members.
///
/// Registries are built once, as statics, and are never modified. Lookups
/// are exact, case-sensitive string matches. Anything not registered,
/// including a missing discriminator, resolves to the family's base type.
pub struct DiscriminatorRegistry<F: 'static> {
    base: &'static str,
    default: fn() -> F,
    entries: &'static [(&'static str, fn() -> F)],
}

impl<F: 'static> DiscriminatorRegistry<F> {
    /// `base` is the discriminator of the family's base type, which `default`
    /// constructs. `entries` must not repeat a discriminator.
    pub const fn new(
        base: &'static str,
        default: fn() -> F,
        entries: &'static [(&'static str, fn() -> F)],
    ) -> Self {
        Self {
            base,
            default,
            entries,
        }
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    /// The constructor registered for `discriminator`, if any.
    pub fn lookup(&self, discriminator: &str) -> Option<fn() -> F> {
        if discriminator == self.base {
            return Some(self.default);
        }

        self.entries
            .iter()
            .find(|(name, _)| *name == discriminator)
            .map(|(_, create)| *create)
    }

    /// Create an empty member of the family for `discriminator`.
    pub fn create(&self, discriminator: Option<&str>) -> F {
        let Some(discriminator) = discriminator else {
            return (self.default)();
        };

        match self.lookup(discriminator) {
            Some(create) => create(),
            None => {
                log::debug!(
                    "unknown discriminator `{discriminator}`, falling back to `{}`",
                    self.base
                );
                (self.default)()
            }
        }
    }

    /// Create an empty member of the family for the discriminator found in
    /// `node`. A discriminator which isn't a string is an error.
    pub fn create_from_node(&self, node: &ParseNode<'_>) -> Result<F, Error> {
        let discriminator = match node.child_node(ODATA_TYPE) {
            Some(child) => child.str_value().map_err(|err| err.in_property(ODATA_TYPE))?,
            None => None,
        };

        Ok(self.create(discriminator))
    }

    /// Every registered discriminator, the base type's first.
    pub fn discriminators(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.base).chain(self.entries.iter().map(|(name, _)| *name))
    }
}

impl<F: 'static> fmt::Debug for DiscriminatorRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.discriminators()).finish()
    }
}
