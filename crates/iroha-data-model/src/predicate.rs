// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Result filters.

use crate::convert::{tagged, FromValue, ToValue};
use crate::paths::*;
use iroha_schema::{SchemaBuilder, SchemaError, TypeSpec, Value, VariantSpec};

/// Match against the string form of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringPredicate {
    Contains(String),
    StartsWith(String),
    EndsWith(String),
    Is(String),
}

impl StringPredicate {
    pub fn applies(&self, input: &str) -> bool {
        match self {
            Self::Contains(s) => input.contains(s.as_str()),
            Self::StartsWith(s) => input.starts_with(s.as_str()),
            Self::EndsWith(s) => input.ends_with(s.as_str()),
            Self::Is(s) => input == s,
        }
    }
}

impl ToValue for StringPredicate {
    fn to_value(&self) -> Value {
        match self {
            Self::Contains(s) => tagged("Contains", 0, Value::from(s.as_str())),
            Self::StartsWith(s) => tagged("StartsWith", 1, Value::from(s.as_str())),
            Self::EndsWith(s) => tagged("EndsWith", 2, Value::from(s.as_str())),
            Self::Is(s) => tagged("Is", 3, Value::from(s.as_str())),
        }
    }
}

impl FromValue for StringPredicate {
    fn from_value(value: &Value) -> Option<Self> {
        let e = value.as_enum()?;
        let s = e.payload.as_str()?.to_string();
        match e.variant.as_str() {
            "Contains" => Some(Self::Contains(s)),
            "StartsWith" => Some(Self::StartsWith(s)),
            "EndsWith" => Some(Self::EndsWith(s)),
            "Is" => Some(Self::Is(s)),
            _ => None,
        }
    }
}

/// Predicate over a single result value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValuePredicate {
    Identifiable(StringPredicate),
    Display(StringPredicate),
    Pass,
}

impl ToValue for ValuePredicate {
    fn to_value(&self) -> Value {
        match self {
            Self::Identifiable(p) => tagged("Identifiable", 0, p.to_value()),
            Self::Display(p) => tagged("Display", 1, p.to_value()),
            Self::Pass => tagged("Pass", 2, Value::Unit),
        }
    }
}

impl FromValue for ValuePredicate {
    fn from_value(value: &Value) -> Option<Self> {
        let e = value.as_enum()?;
        match e.variant.as_str() {
            "Identifiable" => StringPredicate::from_value(&e.payload).map(Self::Identifiable),
            "Display" => StringPredicate::from_value(&e.payload).map(Self::Display),
            "Pass" => Some(Self::Pass),
            _ => None,
        }
    }
}

/// Boolean combination of value predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateBox {
    And(Vec<PredicateBox>),
    Or(Vec<PredicateBox>),
    Not(Box<PredicateBox>),
    Raw(ValuePredicate),
}

impl PredicateBox {
    /// The filter that accepts everything.
    pub fn pass() -> Self {
        Self::Raw(ValuePredicate::Pass)
    }
}

impl Default for PredicateBox {
    fn default() -> Self {
        Self::pass()
    }
}

impl ToValue for PredicateBox {
    fn to_value(&self) -> Value {
        match self {
            Self::And(items) => tagged("And", 0, items.to_value()),
            Self::Or(items) => tagged("Or", 1, items.to_value()),
            Self::Not(inner) => tagged("Not", 2, inner.to_value()),
            Self::Raw(p) => tagged("Raw", 3, p.to_value()),
        }
    }
}

impl FromValue for PredicateBox {
    fn from_value(value: &Value) -> Option<Self> {
        let e = value.as_enum()?;
        let payload = e.payload.as_ref();
        match e.variant.as_str() {
            "And" => Vec::from_value(payload).map(Self::And),
            "Or" => Vec::from_value(payload).map(Self::Or),
            "Not" => Self::from_value(payload).map(|p| Self::Not(Box::new(p))),
            "Raw" => ValuePredicate::from_value(payload).map(Self::Raw),
            _ => None,
        }
    }
}

pub(crate) fn declare(b: &mut SchemaBuilder) -> Result<(), SchemaError> {
    let list = b.vec_of(GENERIC_PREDICATE_BOX);
    b.make_enum(
        GENERIC_PREDICATE_BOX,
        [
            ("And", TypeSpec::from(&list)),
            ("Or", TypeSpec::from(list)),
            ("Not", TypeSpec::from(GENERIC_PREDICATE_BOX)),
            ("Raw", TypeSpec::from(VALUE_PREDICATE)),
        ],
    )?;
    b.make_enum(
        VALUE_PREDICATE,
        [
            VariantSpec::new("Identifiable", STRING_PREDICATE),
            VariantSpec::new("Display", STRING_PREDICATE),
            VariantSpec::unit("Pass"),
        ],
    )?;
    b.make_enum(
        STRING_PREDICATE,
        [
            ("Contains", "String"),
            ("StartsWith", "String"),
            ("EndsWith", "String"),
            ("Is", "String"),
        ],
    )?;
    Ok(())
}
