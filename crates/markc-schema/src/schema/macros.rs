// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Table-generating macros for the known-symbol schema.
//!
//! Each macro expands one declarative table into:
//! 1. A `#[repr(i16)]` identifier enum with `Unknown = 0` and a trailing `Max`
//! 2. A `static` row slice in ascending identifier order
//!
//! Rows must be listed with strictly ascending ids and `Max` must follow the
//! last row; `schema::verify_tables` asserts both.

/// Generate `KnownElement` and `ELEMENT_ROWS`.
///
/// Row syntax: `id => Name(Module, NAMESPACE, Kind, Base)` where `Base` is
/// another row's name or `Unknown` for roots.
macro_rules! known_elements {
    ( $( $id:literal => $variant:ident ( $module:ident, $ns:ident, $kind:ident, $base:ident ) ),* $(,)? ) => {
        /// Identifier of a type pre-registered in the schema.
        ///
        /// Values in `1..Max` are stable within one [`crate::config::SCHEMA_VERSION`].
        /// Missing values inside that range are reserved for removed entries.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(i16)]
        pub enum KnownElement {
            /// Not a known type; callers fall back to the general path.
            Unknown = 0,
            $( $variant = $id, )*
            /// Sentinel: first identifier past the known range.
            Max,
        }

        pub(crate) static ELEMENT_ROWS: &[ElementRow] = &[
            $(
                ElementRow {
                    id: KnownElement::$variant,
                    name: stringify!($variant),
                    namespace: ns::$ns,
                    module: ModuleKind::$module,
                    kind: ElementKind::$kind,
                    base: KnownElement::$base,
                },
            )*
        ];
    };
}

/// Generate `KnownProperty` and `PROPERTY_ROWS`.
///
/// Row syntax: `id => Owner_Member(Owner, "Member", ValueType)` with an
/// optional trailing `attached` marker.
macro_rules! known_properties {
    (@attached) => { false };
    (@attached attached) => { true };
    ( $( $id:literal => $variant:ident ( $owner:ident, $name:literal, $value:ident $(, $attached:ident)? ) ),* $(,)? ) => {
        /// Identifier of a (declaring type, member name) pair in the schema.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(i16)]
        #[allow(non_camel_case_types)]
        pub enum KnownProperty {
            Unknown = 0,
            $( $variant = $id, )*
            Max,
        }

        pub(crate) static PROPERTY_ROWS: &[PropertyRow] = &[
            $(
                PropertyRow {
                    id: KnownProperty::$variant,
                    owner: KnownElement::$owner,
                    name: $name,
                    value_type: KnownElement::$value,
                    attached: $crate::schema::macros::known_properties!(@attached $($attached)?),
                },
            )*
        ];
    };
}

pub(crate) use known_elements;
pub(crate) use known_properties;
