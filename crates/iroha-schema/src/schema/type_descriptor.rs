// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors for schema types.
//!
//! A descriptor is generic over the way it references other types: while the
//! schema is loading, references are [`TypeRef`](super::TypeRef) handles that
//! may still be forward references; once resolved they are plain [`TypeId`]
//! indices into the frozen type table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a type in the schema's type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub(crate) usize);

impl TypeId {
    /// Raw table index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Primitive type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Unit,
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
    /// SCALE compact unsigned integer.
    Compact,
    String,
}

impl PrimitiveKind {
    /// Every primitive, paired with the name it is registered under.
    pub const BUILTIN: [(&'static str, PrimitiveKind); 14] = [
        ("()", Self::Unit),
        ("bool", Self::Bool),
        ("u8", Self::U8),
        ("u16", Self::U16),
        ("u32", Self::U32),
        ("u64", Self::U64),
        ("u128", Self::U128),
        ("i8", Self::I8),
        ("i16", Self::I16),
        ("i32", Self::I32),
        ("i64", Self::I64),
        ("i128", Self::I128),
        ("Compact", Self::Compact),
        ("String", Self::String),
    ];

    /// Encoded size in bytes (None for variable-width kinds).
    pub fn size(&self) -> Option<usize> {
        match self {
            Self::Unit => Some(0),
            Self::Bool | Self::U8 | Self::I8 => Some(1),
            Self::U16 | Self::I16 => Some(2),
            Self::U32 | Self::I32 => Some(4),
            Self::U64 | Self::I64 => Some(8),
            Self::U128 | Self::I128 => Some(16),
            Self::Compact | Self::String => None,
        }
    }

    /// Registered name of this primitive.
    pub fn name(&self) -> &'static str {
        Self::BUILTIN
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("?")
    }
}

/// Type kind enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeKind<R> {
    /// Primitive type.
    Primitive(PrimitiveKind),
    /// Struct with named fields, in wire order.
    Struct(Vec<FieldDescriptor<R>>),
    /// Tagged union.
    Enum(EnumDescriptor<R>),
    /// Fixed-arity heterogeneous sequence.
    Tuple(Vec<R>),
    /// Length-prefixed sequence.
    Sequence(R),
    /// Fixed-length array.
    Array { element: R, length: usize },
    /// Optional value.
    Option(R),
    /// Length-prefixed key/value pairs.
    Map { key: R, value: R },
}

impl<R> TypeKind<R> {
    /// Rewrite every type reference held by this kind.
    pub fn try_map_refs<S, E>(
        self,
        f: &mut impl FnMut(R) -> Result<S, E>,
    ) -> Result<TypeKind<S>, E> {
        Ok(match self {
            Self::Primitive(p) => TypeKind::Primitive(p),
            Self::Struct(fields) => TypeKind::Struct(
                fields
                    .into_iter()
                    .map(|field| {
                        Ok(FieldDescriptor {
                            name: field.name,
                            type_ref: f(field.type_ref)?,
                        })
                    })
                    .collect::<Result<_, E>>()?,
            ),
            Self::Enum(e) => TypeKind::Enum(EnumDescriptor {
                versioned: e.versioned,
                variants: e
                    .variants
                    .into_iter()
                    .map(|v| {
                        Ok(VariantDescriptor {
                            name: v.name,
                            discriminant: v.discriminant,
                            payload: v.payload.map(&mut *f).transpose()?,
                        })
                    })
                    .collect::<Result<_, E>>()?,
            }),
            Self::Tuple(elements) => {
                TypeKind::Tuple(elements.into_iter().map(&mut *f).collect::<Result<_, E>>()?)
            }
            Self::Sequence(element) => TypeKind::Sequence(f(element)?),
            Self::Array { element, length } => TypeKind::Array {
                element: f(element)?,
                length,
            },
            Self::Option(inner) => TypeKind::Option(f(inner)?),
            Self::Map { key, value } => TypeKind::Map {
                key: f(key)?,
                value: f(value)?,
            },
        })
    }

    /// Every type reference held by this kind, in wire order.
    pub fn refs(&self) -> Vec<&R> {
        match self {
            Self::Primitive(_) => Vec::new(),
            Self::Struct(fields) => fields.iter().map(|f| &f.type_ref).collect(),
            Self::Enum(e) => e.variants.iter().filter_map(|v| v.payload.as_ref()).collect(),
            Self::Tuple(elements) => elements.iter().collect(),
            Self::Sequence(element) | Self::Array { element, .. } | Self::Option(element) => {
                vec![element]
            }
            Self::Map { key, value } => vec![key, value],
        }
    }

    /// Short label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Primitive(_) => "primitive",
            Self::Struct(_) => "struct",
            Self::Enum(e) if e.versioned => "versioned envelope",
            Self::Enum(_) => "enum",
            Self::Tuple(_) => "tuple",
            Self::Sequence(_) => "sequence",
            Self::Array { .. } => "array",
            Self::Option(_) => "option",
            Self::Map { .. } => "map",
        }
    }
}

/// A complete type descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor<R> {
    /// Fully-qualified type name.
    pub name: String,
    /// Type kind.
    pub kind: TypeKind<R>,
}

impl<R> TypeDescriptor<R> {
    /// Create a new type descriptor.
    pub fn new(name: impl Into<String>, kind: TypeKind<R>) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a primitive type descriptor.
    pub fn primitive(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self::new(name, TypeKind::Primitive(kind))
    }

    /// Check if this is a struct type.
    pub fn is_struct(&self) -> bool {
        matches!(self.kind, TypeKind::Struct(_))
    }

    /// Check if this is an enum (including versioned envelopes).
    pub fn is_enum(&self) -> bool {
        matches!(self.kind, TypeKind::Enum(_))
    }

    /// Get fields if this is a struct.
    pub fn fields(&self) -> Option<&[FieldDescriptor<R>]> {
        match &self.kind {
            TypeKind::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Get field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<R>> {
        self.fields()?.iter().find(|f| f.name == name)
    }

    /// Get field index by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields()?.iter().position(|f| f.name == name)
    }

    /// Get the enum layout if this is an enum.
    pub fn enum_descriptor(&self) -> Option<&EnumDescriptor<R>> {
        match &self.kind {
            TypeKind::Enum(e) => Some(e),
            _ => None,
        }
    }

    /// Rewrite every type reference held by this descriptor.
    pub fn try_map_refs<S, E>(
        self,
        mut f: impl FnMut(R) -> Result<S, E>,
    ) -> Result<TypeDescriptor<S>, E> {
        Ok(TypeDescriptor {
            name: self.name,
            kind: self.kind.try_map_refs(&mut f)?,
        })
    }
}

/// Field descriptor for struct members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor<R> {
    /// Field name.
    pub name: String,
    /// Field type.
    pub type_ref: R,
}

impl<R> FieldDescriptor<R> {
    /// Create a new field descriptor.
    pub fn new(name: impl Into<String>, type_ref: R) -> Self {
        Self {
            name: name.into(),
            type_ref,
        }
    }
}

/// Enumeration type descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDescriptor<R> {
    /// Variants in declaration order.
    pub variants: Vec<VariantDescriptor<R>>,
    /// Set on versioned envelopes; variant names are version labels.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub versioned: bool,
}

impl<R> EnumDescriptor<R> {
    /// Create enum descriptor.
    pub fn new(variants: Vec<VariantDescriptor<R>>) -> Self {
        Self {
            variants,
            versioned: false,
        }
    }

    /// Get variant by name.
    pub fn variant(&self, name: &str) -> Option<&VariantDescriptor<R>> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Get variant by wire discriminant.
    pub fn variant_by_discriminant(&self, discriminant: u8) -> Option<&VariantDescriptor<R>> {
        self.variants.iter().find(|v| v.discriminant == discriminant)
    }
}

/// Enum variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDescriptor<R> {
    /// Variant tag name.
    pub name: String,
    /// Wire discriminant.
    pub discriminant: u8,
    /// Payload type (None for a bare tag).
    pub payload: Option<R>,
}

impl<R> VariantDescriptor<R> {
    /// Create enum variant.
    pub fn new(name: impl Into<String>, discriminant: u8, payload: Option<R>) -> Self {
        Self {
            name: name.into(),
            discriminant,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_size() {
        assert_eq!(PrimitiveKind::Unit.size(), Some(0));
        assert_eq!(PrimitiveKind::Bool.size(), Some(1));
        assert_eq!(PrimitiveKind::U32.size(), Some(4));
        assert_eq!(PrimitiveKind::I128.size(), Some(16));
        assert_eq!(PrimitiveKind::Compact.size(), None);
        assert_eq!(PrimitiveKind::String.size(), None);
    }

    #[test]
    fn test_primitive_names() {
        assert_eq!(PrimitiveKind::Compact.name(), "Compact");
        assert_eq!(PrimitiveKind::Unit.name(), "()");
        assert_eq!(PrimitiveKind::U64.name(), "u64");
    }

    #[test]
    fn test_type_descriptor_struct() {
        let desc = TypeDescriptor::new(
            "Point",
            TypeKind::Struct(vec![
                FieldDescriptor::new("x", TypeId(3)),
                FieldDescriptor::new("y", TypeId(4)),
            ]),
        );
        assert!(desc.is_struct());
        assert_eq!(desc.fields().map(|f| f.len()), Some(2));
        assert_eq!(desc.field_index("y"), Some(1));
        assert!(desc.field("z").is_none());
    }

    #[test]
    fn test_enum_descriptor() {
        let e = EnumDescriptor::new(vec![
            VariantDescriptor::new("Red", 0, None),
            VariantDescriptor::new("Green", 1, Some(TypeId(1))),
            VariantDescriptor::new("Blue", 7, None),
        ]);
        assert_eq!(e.variant("Green").map(|v| v.discriminant), Some(1));
        assert_eq!(
            e.variant_by_discriminant(7).map(|v| v.name.as_str()),
            Some("Blue")
        );
        assert!(e.variant_by_discriminant(2).is_none());
    }

    #[test]
    fn test_map_refs_preserves_order() {
        let desc = TypeDescriptor::new(
            "Pair",
            TypeKind::Tuple(vec!["a".to_string(), "b".to_string()]),
        );
        let mapped = desc
            .try_map_refs(|name| Ok::<_, ()>(name.len()))
            .expect("map");
        assert_eq!(mapped.kind, TypeKind::Tuple(vec![1, 1]));
    }

    #[test]
    fn test_refs_skip_bare_variants() {
        let kind = TypeKind::Enum(EnumDescriptor::new(vec![
            VariantDescriptor::new("A", 0, None),
            VariantDescriptor::new("B", 1, Some(9u32)),
        ]));
        assert_eq!(kind.refs(), vec![&9]);
    }
}
