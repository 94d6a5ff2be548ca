// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Converter resolution.
//!
//! Answers "which string converter applies here" at two levels:
//!
//! 1. **Property level**: `(owner element, member name)` override rules, e.g.
//!    `Button.Width` uses the length converter rather than the plain double
//!    converter its value type would pick.
//! 2. **Type level**: the default converter for a value type.
//!
//! The property level always wins. `None` from both means the caller uses
//! generic reflection-driven conversion outside this crate. Converters are
//! themselves known elements deriving from `TypeConverter`.

mod rules;

pub use rules::ConverterRule;

use crate::schema::{KnownElement, KnownProperty};
use rules::{OWNER_RULES, TYPE_CONVERTERS};
use std::collections::HashMap;
use std::sync::OnceLock;

struct ConverterIndex {
    by_type: Vec<Option<KnownElement>>,
    by_owner: HashMap<KnownElement, &'static [ConverterRule]>,
}

fn index() -> &'static ConverterIndex {
    static INDEX: OnceLock<ConverterIndex> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut by_type = vec![None; KnownElement::COUNT];
        for &(value_type, converter) in TYPE_CONVERTERS {
            by_type[value_type as usize] = Some(converter);
        }
        let by_owner = OWNER_RULES.iter().copied().collect();
        ConverterIndex { by_type, by_owner }
    })
}

/// Default converter for values of `value_type`.
pub fn converter_for_type(value_type: KnownElement) -> Option<KnownElement> {
    if !value_type.is_known() {
        return None;
    }
    index().by_type[value_type as usize]
}

/// Override list that governs `owner`: its own, else the nearest ancestor's.
pub fn rules_for(owner: KnownElement) -> Option<&'static [ConverterRule]> {
    let by_owner = &index().by_owner;
    owner
        .ancestors()
        .find_map(|candidate| by_owner.get(&candidate).copied())
}

/// Property-level override for `member` used on an `owner` element.
pub fn converter_for_property(owner: KnownElement, member: &str) -> Option<KnownElement> {
    rules_for(owner)?
        .iter()
        .find_map(|rule| rule.apply(member))
}

/// Both levels composed: override rule, else the value type's default.
pub fn converter_for_member(
    owner: KnownElement,
    member: &str,
    value_type: KnownElement,
) -> Option<KnownElement> {
    converter_for_property(owner, member).or_else(|| converter_for_type(value_type))
}

/// Converter for a known property set on an element of type `element`.
///
/// `element` is where the attribute appears, which may be a subtype of the
/// property's declaring owner.
pub fn converter_for_known_property(
    element: KnownElement,
    property: KnownProperty,
) -> Option<KnownElement> {
    let element = if element.is_known() {
        element
    } else {
        property.owner()
    };
    converter_for_member(element, property.name(), property.value_type())
}

/// Check that every converter named by either table derives from
/// `TypeConverter` and that no owner or value type is listed twice.
pub fn verify_tables() -> Vec<String> {
    let mut violations = Vec::new();
    let not_converter = |converter: KnownElement| !converter.is_a(KnownElement::TypeConverter);

    let mut seen = std::collections::HashSet::new();
    for &(value_type, converter) in TYPE_CONVERTERS {
        if !seen.insert(value_type) {
            violations.push(format!("value type {} listed twice", value_type));
        }
        if not_converter(converter) {
            violations.push(format!("{} is not a converter", converter));
        }
    }

    let mut seen = std::collections::HashSet::new();
    for &(owner, list) in OWNER_RULES {
        if !seen.insert(owner) {
            violations.push(format!("owner {} listed twice", owner));
        }
        for rule in list {
            if not_converter(rule.converter()) {
                violations.push(format!("{} rule {:?} names a non-converter", owner, rule));
            }
        }
    }
    violations
}
