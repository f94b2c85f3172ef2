// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Expressions used as query arguments.
//!
//! `Expression` embeds `QueryBox`, and every query argument is an
//! `EvaluatesTo`, so this module and the query module reference each other.
//! Only the variants clients build are declared; query arguments are
//! normally `Raw` values. Each declared variant keeps its discriminant from
//! the full ledger enum, so the gaps belong to arithmetic and logic
//! variants left out here.

use crate::error::RequestError;
use crate::paths::*;
use iroha_schema::{EnumValue, Schema, SchemaBuilder, SchemaError, Value, VariantSpec};

/// `Expression::Raw(value)` as a dynamic value.
pub fn raw(schema: &Schema, value: Value) -> Result<Value, RequestError> {
    let ty = schema.type_id(EXPRESSION)?;
    Ok(schema.variant(ty, "Raw", value)?)
}

/// Wrap an expression as `EvaluatesTo`.
pub fn evaluates_to(expression: Value) -> Value {
    Value::structure([("expression", expression)])
}

/// `EvaluatesTo(Raw(value))`, the usual form of a query argument.
pub fn evaluates_to_raw(schema: &Schema, value: Value) -> Result<Value, RequestError> {
    raw(schema, value).map(evaluates_to)
}

/// The raw value inside `EvaluatesTo(Raw(_))`, if that is its shape.
pub fn raw_argument(argument: &Value) -> Option<&Value> {
    let EnumValue {
        variant, payload, ..
    } = argument.get_field("expression")?.as_enum()?;
    (variant == "Raw").then_some(payload.as_ref())
}

pub(crate) fn declare(b: &mut SchemaBuilder) -> Result<(), SchemaError> {
    b.make_struct(EVALUATES_TO, [("expression", EXPRESSION)])?;
    b.make_enum(
        EXPRESSION,
        [
            VariantSpec::new("Add", EXPR_ADD).with_index(0),
            VariantSpec::new("Equal", EXPR_EQUAL).with_index(8),
            VariantSpec::new("Not", EXPR_NOT).with_index(9),
            VariantSpec::new("If", EXPR_IF).with_index(12),
            VariantSpec::new("Raw", VALUE).with_index(13),
            VariantSpec::new("Query", QUERY_BOX).with_index(14),
        ],
    )?;
    b.make_struct(EXPR_ADD, [("left", EVALUATES_TO), ("right", EVALUATES_TO)])?;
    b.make_struct(EXPR_EQUAL, [("left", EVALUATES_TO), ("right", EVALUATES_TO)])?;
    b.make_struct(EXPR_NOT, [("expression", EVALUATES_TO)])?;
    b.make_struct(
        EXPR_IF,
        [
            ("condition", EVALUATES_TO),
            ("then_expression", EVALUATES_TO),
            ("else_expression", EVALUATES_TO),
        ],
    )?;
    Ok(())
}
