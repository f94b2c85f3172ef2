// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder API for composite declarations.
//!
//! These collect a declaration and hand it to the matching
//! `SchemaBuilder::make_*` call, so validation happens in one place.

use super::{SchemaBuilder, SchemaError, TypeRef, TypeSpec, VariantSpec};

/// Builder for struct types.
#[derive(Debug)]
pub struct StructBuilder {
    name: String,
    fields: Vec<(String, TypeSpec)>,
}

impl StructBuilder {
    /// Create a new builder for a struct type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field. Order of calls is wire order.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<TypeSpec>) -> Self {
        self.fields.push((name.into(), ty.into()));
        self
    }

    /// Register the struct.
    pub fn register(self, schema: &mut SchemaBuilder) -> Result<TypeRef, SchemaError> {
        schema.make_struct(self.name, self.fields)
    }
}

/// Builder for enum types.
#[derive(Debug)]
pub struct EnumBuilder {
    name: String,
    variants: Vec<VariantSpec>,
}

impl EnumBuilder {
    /// Create a new enum builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
        }
    }

    /// Add a variant carrying a payload, numbered after the previous one.
    pub fn variant(mut self, name: impl Into<String>, payload: impl Into<TypeSpec>) -> Self {
        self.variants.push(VariantSpec::new(name, payload));
        self
    }

    /// Add a bare tag.
    pub fn unit_variant(mut self, name: impl Into<String>) -> Self {
        self.variants.push(VariantSpec::unit(name));
        self
    }

    /// Add a variant with an explicit discriminant; numbering continues from it.
    pub fn variant_with_index(
        mut self,
        name: impl Into<String>,
        index: u64,
        payload: Option<TypeSpec>,
    ) -> Self {
        let spec = match payload {
            Some(p) => VariantSpec::new(name, p),
            None => VariantSpec::unit(name),
        };
        self.variants.push(spec.with_index(index));
        self
    }

    /// Register the enum.
    pub fn register(self, schema: &mut SchemaBuilder) -> Result<TypeRef, SchemaError> {
        schema.make_enum(self.name, self.variants)
    }
}

/// Builder for tuple types.
#[derive(Debug)]
pub struct TupleBuilder {
    name: String,
    elements: Vec<TypeSpec>,
}

impl TupleBuilder {
    /// Create a new tuple builder (zero elements so far).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    /// Append an element type.
    pub fn element(mut self, ty: impl Into<TypeSpec>) -> Self {
        self.elements.push(ty.into());
        self
    }

    /// Register the tuple.
    pub fn register(self, schema: &mut SchemaBuilder) -> Result<TypeRef, SchemaError> {
        schema.make_tuple(self.name, self.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TypeKind;

    #[test]
    fn test_struct_builder() {
        let mut b = SchemaBuilder::new();
        let point = StructBuilder::new("geo.Point3D")
            .field("x", "i64")
            .field("y", "i64")
            .field("z", "i64")
            .register(&mut b)
            .expect("register");

        let desc = b.descriptor(&point).expect("desc");
        assert_eq!(desc.name, "geo.Point3D");
        let names: Vec<_> = desc
            .fields()
            .expect("fields")
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_enum_builder_numbering() {
        let mut b = SchemaBuilder::new();
        let status = EnumBuilder::new("net.Status")
            .unit_variant("Ok")
            .variant_with_index("NotFound", 40, None)
            .variant("Other", "String")
            .register(&mut b)
            .expect("register");

        let desc = b.descriptor(&status).expect("desc");
        let layout = desc.enum_descriptor().expect("enum");
        assert_eq!(layout.variant("Ok").map(|v| v.discriminant), Some(0));
        assert_eq!(layout.variant("NotFound").map(|v| v.discriminant), Some(40));
        assert_eq!(layout.variant("Other").map(|v| v.discriminant), Some(41));
    }

    #[test]
    fn test_tuple_builder() {
        let mut b = SchemaBuilder::new();
        let empty = TupleBuilder::new("q.FindAll").register(&mut b).expect("empty");
        let pair = TupleBuilder::new("q.Pair")
            .element("u8")
            .element("q.Later")
            .register(&mut b)
            .expect("pair");

        assert_eq!(
            b.descriptor(&empty).expect("desc").kind,
            TypeKind::Tuple(Vec::new())
        );
        match &b.descriptor(&pair).expect("desc").kind {
            TypeKind::Tuple(elements) => {
                assert_eq!(elements.len(), 2);
                assert!(elements[1].is_forward());
            }
            _ => panic!("Expected tuple"),
        }
    }

    #[test]
    fn test_nested_struct() {
        let mut b = SchemaBuilder::new();
        let point = StructBuilder::new("geo.Point")
            .field("x", "i32")
            .field("y", "i32")
            .register(&mut b)
            .expect("point");
        let rect = StructBuilder::new("geo.Rectangle")
            .field("top_left", &point)
            .field("bottom_right", point)
            .register(&mut b)
            .expect("rect");

        let desc = b.descriptor(&rect).expect("desc");
        assert_eq!(desc.fields().map(|f| f.len()), Some(2));
    }
}
