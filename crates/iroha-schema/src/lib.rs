// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Declarative schema layer with a SCALE wire codec.
//!
//! Types are declared programmatically on a [`SchemaBuilder`], in any order:
//! a field may name a type that is declared later, or the type it belongs to.
//! A single resolution pass binds every such forward reference and yields a
//! frozen [`Schema`], which then encodes, decodes and validates [`Value`]s
//! byte-for-byte compatibly with `parity-scale-codec`.
//!
//! ```rust
//! use iroha_schema::{SchemaBuilder, Value};
//!
//! let mut builder = SchemaBuilder::new();
//! builder.make_versioned("demo.VersionedPing", [("V1", "demo.Ping")]).unwrap();
//! builder.make_struct("demo.Ping", [("seq", "u32")]).unwrap();
//! let schema = builder.resolve_all().unwrap();
//!
//! let ty = schema.type_id("demo.VersionedPing").unwrap();
//! let ping = Value::structure([("seq", Value::U32(7))]);
//! let message = schema.wrap_version(ty, "V1", ping.clone()).unwrap();
//! let bytes = schema.encode(ty, &message).unwrap();
//! assert_eq!(bytes, [1, 7, 0, 0, 0]);
//! assert_eq!(schema.decode_version(ty, &bytes, "V1").unwrap(), ping);
//! ```

pub mod codec;
pub mod config;
pub mod envelope;
pub mod instance;
pub mod schema;
pub mod value;

pub use codec::CodecError;
pub use config::{CodecConfig, ConfigError};
pub use envelope::EnvelopeError;
pub use instance::Instance;
pub use schema::{
    EnumBuilder, Schema, SchemaBuilder, SchemaError, StructBuilder, TupleBuilder, TypeDescriptor,
    TypeId, TypeKind, TypeRef, TypeSpec, VariantSpec,
};
pub use value::{EnumValue, Value};
