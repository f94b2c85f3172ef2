// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema construction and resolution.
//!
//! # Lifecycle
//!
//! 1. Create a [`SchemaBuilder`] (primitives are pre-registered).
//! 2. Declare composites in any order with `make_struct`, `make_enum`,
//!    `make_tuple` and `make_versioned`. Names that are not defined yet
//!    become forward references.
//! 3. Call [`SchemaBuilder::resolve_all`] once. It either returns a frozen
//!    [`Schema`] or a single error naming every dangling reference.
//!
//! # Example
//!
//! ```rust
//! use iroha_schema::schema::SchemaBuilder;
//!
//! let mut builder = SchemaBuilder::new();
//! // `demo.Expr` is referenced before it is declared.
//! builder.make_enum("demo.Query", [("ById", "demo.Expr")]).unwrap();
//! builder
//!     .make_enum("demo.Expr", [("Raw", "u32"), ("Query", "demo.Query")])
//!     .unwrap();
//! let schema = builder.resolve_all().unwrap();
//! assert!(schema.lookup("demo.Expr").is_some());
//! ```

mod builder;
mod defaults;
mod error;
mod registry;
mod resolved;
mod type_descriptor;

pub use builder::{EnumBuilder, StructBuilder, TupleBuilder};
pub use error::SchemaError;
pub use registry::{ForwardRef, SchemaBuilder, TypeRef, TypeSpec, VariantSpec};
pub use resolved::Schema;
pub use type_descriptor::{
    EnumDescriptor, FieldDescriptor, PrimitiveKind, TypeDescriptor, TypeId, TypeKind,
    VariantDescriptor,
};
