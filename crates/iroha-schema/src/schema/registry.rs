// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema builder: the type registry used while a schema is being declared.
//!
//! ## Forward references
//!
//! Declarations may name a type before it exists. [`SchemaBuilder::lookup`]
//! never fails: for an unknown name it reserves an arena slot under that
//! name and hands back a [`TypeRef::Forward`] pointing at it. A later
//! [`SchemaBuilder::register`] fills the slot. Because every handle is
//! backed by a slot index, mutually recursive declarations need no second
//! parsing pass.
//!
//! ## Resolution
//!
//! [`SchemaBuilder::resolve_all`] consumes the builder. It checks every
//! forward reference recorded during loading, reports all dangling names in
//! one [`SchemaError::Unresolved`], and otherwise rewrites each descriptor
//! into the frozen [`Schema`] where references are plain [`TypeId`]s.

use super::defaults::{default_value, TypeTable};
use super::{
    EnumDescriptor, FieldDescriptor, PrimitiveKind, Schema, SchemaError, TypeDescriptor, TypeId,
    TypeKind, VariantDescriptor,
};
use crate::value::Value;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Type references
// ---------------------------------------------------------------------------

/// Placeholder for a type named before it was defined.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForwardRef {
    path: Arc<str>,
    slot: TypeId,
}

impl ForwardRef {
    /// Symbolic path this reference was created for.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Arena slot reserved for the target.
    pub fn slot(&self) -> TypeId {
        self.slot
    }
}

/// Handle to a type inside a [`SchemaBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// The target was already defined when the handle was taken.
    Direct(TypeId),
    /// The target was not defined yet; bound by the resolution pass.
    Forward(ForwardRef),
}

impl TypeRef {
    /// Arena slot of the target.
    pub fn slot(&self) -> TypeId {
        match self {
            Self::Direct(id) => *id,
            Self::Forward(fwd) => fwd.slot,
        }
    }

    /// True for forward references.
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Forward(_))
    }
}

/// How a declaration names a member type: by dotted path or by handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpec {
    Path(String),
    Ref(TypeRef),
}

impl From<&str> for TypeSpec {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for TypeSpec {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<TypeRef> for TypeSpec {
    fn from(r: TypeRef) -> Self {
        Self::Ref(r)
    }
}

impl From<&TypeRef> for TypeSpec {
    fn from(r: &TypeRef) -> Self {
        Self::Ref(r.clone())
    }
}

impl From<PrimitiveKind> for TypeSpec {
    fn from(kind: PrimitiveKind) -> Self {
        Self::Path(kind.name().to_string())
    }
}

/// One enum variant as handed to [`SchemaBuilder::make_enum`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSpec {
    pub name: String,
    pub payload: Option<TypeSpec>,
    /// Explicit discriminant; None continues from the previous variant.
    pub index: Option<u64>,
}

impl VariantSpec {
    /// Variant carrying a payload.
    pub fn new(name: impl Into<String>, payload: impl Into<TypeSpec>) -> Self {
        Self {
            name: name.into(),
            payload: Some(payload.into()),
            index: None,
        }
    }

    /// Bare tag with no payload.
    pub fn unit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: None,
            index: None,
        }
    }

    /// Override the discriminant.
    pub fn with_index(mut self, index: u64) -> Self {
        self.index = Some(index);
        self
    }
}

impl<N: Into<String>, S: Into<TypeSpec>> From<(N, S)> for VariantSpec {
    fn from((name, payload): (N, S)) -> Self {
        Self::new(name, payload)
    }
}

// ---------------------------------------------------------------------------
// SchemaBuilder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Slot {
    name: String,
    descriptor: Option<TypeDescriptor<TypeRef>>,
}

/// Type registry used during the single schema-loading phase.
///
/// Not designed for concurrent writes: declare everything on one thread,
/// then call [`resolve_all`](Self::resolve_all) to obtain a shareable
/// [`Schema`].
#[derive(Clone)]
pub struct SchemaBuilder {
    slots: Vec<Slot>,
    index: HashMap<String, TypeId>,
    forward_refs: Vec<ForwardRef>,
}

impl fmt::Debug for SchemaBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaBuilder")
            .field("types", &self.slots.len())
            .field("forward_refs", &self.forward_refs.len())
            .finish()
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    /// Create a builder with every primitive pre-registered.
    pub fn new() -> Self {
        let mut builder = Self {
            slots: Vec::new(),
            index: HashMap::new(),
            forward_refs: Vec::new(),
        };
        for (name, kind) in PrimitiveKind::BUILTIN {
            builder.define(name, TypeKind::Primitive(kind));
        }
        builder
    }

    /// Bind `name` to a new descriptor.
    ///
    /// Fills the slot if `name` was forward-referenced earlier.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        kind: TypeKind<TypeRef>,
    ) -> Result<TypeRef, SchemaError> {
        let name = name.into();
        if self.is_defined(&name) {
            return Err(SchemaError::DuplicateType(name));
        }
        Ok(self.define(name, kind))
    }

    /// Handle to `name`, or a forward reference if it is not defined yet.
    pub fn lookup(&mut self, name: &str) -> TypeRef {
        if let Some(&id) = self.index.get(name) {
            if self.slots[id.0].descriptor.is_some() {
                return TypeRef::Direct(id);
            }
            return self.forward(name, id);
        }
        let id = self.reserve(name.to_string());
        self.forward(name, id)
    }

    /// Resolve a dotted symbolic path; same contract as [`lookup`](Self::lookup).
    pub fn get_class(&mut self, path: &str) -> TypeRef {
        self.lookup(path)
    }

    /// Turn a [`TypeSpec`] into a handle.
    pub fn spec(&mut self, spec: impl Into<TypeSpec>) -> TypeRef {
        match spec.into() {
            TypeSpec::Path(path) => self.lookup(&path),
            TypeSpec::Ref(r) => r,
        }
    }

    /// True once `name` has a descriptor.
    pub fn is_defined(&self, name: &str) -> bool {
        self.index
            .get(name)
            .is_some_and(|id| self.slots[id.0].descriptor.is_some())
    }

    /// Name the handle points at.
    pub fn name_of(&self, r: &TypeRef) -> &str {
        &self.slots[r.slot().0].name
    }

    /// Descriptor behind a handle.
    ///
    /// Fails with [`SchemaError::UnresolvedReference`] while the target is
    /// still undefined.
    pub fn descriptor(&self, r: &TypeRef) -> Result<&TypeDescriptor<TypeRef>, SchemaError> {
        let slot = &self.slots[r.slot().0];
        slot.descriptor
            .as_ref()
            .ok_or_else(|| SchemaError::UnresolvedReference(slot.name.clone()))
    }

    /// Default instance of a type, before resolution.
    pub fn default_value(&self, r: &TypeRef) -> Result<Value, SchemaError> {
        default_value(self, r)
    }

    /// Number of slots (defined or reserved).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the builder holds no types at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Names referenced but not defined so far, sorted.
    pub fn pending(&self) -> Vec<String> {
        self.slots
            .iter()
            .filter(|slot| slot.descriptor.is_none())
            .map(|slot| slot.name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    // -----------------------------------------------------------------------
    // Composite builders
    // -----------------------------------------------------------------------

    /// Declare a struct. Field order is the wire order.
    pub fn make_struct<N, S>(
        &mut self,
        name: impl Into<String>,
        fields: impl IntoIterator<Item = (N, S)>,
    ) -> Result<TypeRef, SchemaError>
    where
        N: Into<String>,
        S: Into<TypeSpec>,
    {
        let name = name.into();
        if self.is_defined(&name) {
            return Err(SchemaError::DuplicateType(name));
        }
        self.atomically(|b| {
            let mut seen = HashSet::new();
            let mut descriptors = Vec::new();
            for (field_name, spec) in fields {
                let field_name = field_name.into();
                if !seen.insert(field_name.clone()) {
                    return Err(SchemaError::DuplicateField {
                        type_name: name,
                        field: field_name,
                    });
                }
                let type_ref = b.spec(spec);
                descriptors.push(FieldDescriptor::new(field_name, type_ref));
            }
            b.register(name, TypeKind::Struct(descriptors))
        })
    }

    /// Declare an enum.
    ///
    /// Discriminants follow declaration order from zero; a variant with an
    /// explicit index resets the counter to that index.
    pub fn make_enum<V>(
        &mut self,
        name: impl Into<String>,
        variants: impl IntoIterator<Item = V>,
    ) -> Result<TypeRef, SchemaError>
    where
        V: Into<VariantSpec>,
    {
        let name = name.into();
        if self.is_defined(&name) {
            return Err(SchemaError::DuplicateType(name));
        }
        self.atomically(|b| {
            let mut names = HashSet::new();
            let mut discriminants = HashSet::new();
            let mut next: u64 = 0;
            let mut descriptors = Vec::new();
            for spec in variants {
                let spec = spec.into();
                let value = spec.index.unwrap_or(next);
                let discriminant =
                    u8::try_from(value).map_err(|_| SchemaError::DiscriminantOverflow {
                        type_name: name.clone(),
                        variant: spec.name.clone(),
                        discriminant: value,
                    })?;
                if !names.insert(spec.name.clone()) {
                    return Err(SchemaError::DuplicateVariant {
                        type_name: name,
                        variant: spec.name,
                    });
                }
                if !discriminants.insert(discriminant) {
                    return Err(SchemaError::DuplicateDiscriminant {
                        type_name: name,
                        discriminant,
                    });
                }
                next = value + 1;
                let payload = spec.payload.map(|p| b.spec(p));
                descriptors.push(VariantDescriptor::new(spec.name, discriminant, payload));
            }
            b.register(name, TypeKind::Enum(EnumDescriptor::new(descriptors)))
        })
    }

    /// Declare a tuple. Zero elements is legal and encodes to nothing.
    pub fn make_tuple<S>(
        &mut self,
        name: impl Into<String>,
        elements: impl IntoIterator<Item = S>,
    ) -> Result<TypeRef, SchemaError>
    where
        S: Into<TypeSpec>,
    {
        let name = name.into();
        if self.is_defined(&name) {
            return Err(SchemaError::DuplicateType(name));
        }
        self.atomically(|b| {
            let elements: Vec<TypeRef> = elements.into_iter().map(|s| b.spec(s)).collect();
            b.register(name, TypeKind::Tuple(elements))
        })
    }

    /// Declare a versioned envelope.
    ///
    /// Labels are `V1`..`V255`; the label number is the wire discriminant.
    pub fn make_versioned<N, S>(
        &mut self,
        name: impl Into<String>,
        versions: impl IntoIterator<Item = (N, S)>,
    ) -> Result<TypeRef, SchemaError>
    where
        N: Into<String>,
        S: Into<TypeSpec>,
    {
        let name = name.into();
        let mut specs = Vec::new();
        for (label, payload) in versions {
            let label = label.into();
            let Some(version) = parse_version_label(&label) else {
                return Err(SchemaError::InvalidVersionLabel {
                    type_name: name,
                    label,
                });
            };
            specs.push(VariantSpec::new(label, payload).with_index(u64::from(version)));
        }
        if specs.is_empty() {
            return Err(SchemaError::EmptyEnvelope(name));
        }

        let handle = self.make_enum(name, specs)?;
        if let Some(TypeDescriptor {
            kind: TypeKind::Enum(e),
            ..
        }) = self.slots[handle.slot().0].descriptor.as_mut()
        {
            e.versioned = true;
        }
        Ok(handle)
    }

    // -----------------------------------------------------------------------
    // Containers (registered structurally, on first use)
    // -----------------------------------------------------------------------

    /// `Vec<T>`.
    pub fn vec_of(&mut self, element: impl Into<TypeSpec>) -> TypeRef {
        let element = self.spec(element);
        let name = format!("Vec<{}>", self.name_of(&element));
        self.ensure(name, TypeKind::Sequence(element))
    }

    /// `Option<T>`.
    pub fn option_of(&mut self, inner: impl Into<TypeSpec>) -> TypeRef {
        let inner = self.spec(inner);
        let name = format!("Option<{}>", self.name_of(&inner));
        self.ensure(name, TypeKind::Option(inner))
    }

    /// `[T; N]`.
    pub fn array_of(&mut self, element: impl Into<TypeSpec>, length: usize) -> TypeRef {
        let element = self.spec(element);
        let name = format!("[{}; {}]", self.name_of(&element), length);
        self.ensure(name, TypeKind::Array { element, length })
    }

    /// `Map<K, V>`.
    pub fn map_of(&mut self, key: impl Into<TypeSpec>, value: impl Into<TypeSpec>) -> TypeRef {
        let key = self.spec(key);
        let value = self.spec(value);
        let name = format!("Map<{}, {}>", self.name_of(&key), self.name_of(&value));
        self.ensure(name, TypeKind::Map { key, value })
    }

    // -----------------------------------------------------------------------
    // Resolution pass
    // -----------------------------------------------------------------------

    /// Bind every forward reference and freeze the schema.
    ///
    /// References that were already direct are left as they are. All
    /// dangling names are reported together.
    pub fn resolve_all(self) -> Result<Schema, SchemaError> {
        let mut dangling = BTreeSet::new();
        let mut bound = 0usize;
        for fwd in &self.forward_refs {
            match self.index.get(fwd.path()) {
                Some(id) if self.slots[id.0].descriptor.is_some() => bound += 1,
                _ => {
                    dangling.insert(fwd.path().to_string());
                }
            }
        }
        if !dangling.is_empty() {
            let names: Vec<String> = dangling.into_iter().collect();
            tracing::warn!("Schema has {} dangling reference(s): {:?}", names.len(), names);
            return Err(SchemaError::Unresolved { names });
        }

        let index = self.index;
        let mut types = Vec::with_capacity(self.slots.len());
        for slot in self.slots {
            let descriptor = slot
                .descriptor
                .ok_or(SchemaError::UnresolvedReference(slot.name))?;
            types.push(descriptor.try_map_refs(|r| bind(&index, r))?);
        }

        tracing::info!(
            "Resolved schema: {} types, {} forward references bound",
            types.len(),
            bound
        );
        Ok(Schema::from_parts(types, index))
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Run a declaration; on error, drop the slots and forward references it
    /// created so the builder is as it was before the call.
    fn atomically<T>(
        &mut self,
        declare: impl FnOnce(&mut Self) -> Result<T, SchemaError>,
    ) -> Result<T, SchemaError> {
        let slots = self.slots.len();
        let forward_refs = self.forward_refs.len();
        let result = declare(self);
        if result.is_err() {
            for slot in self.slots.drain(slots..) {
                self.index.remove(&slot.name);
            }
            self.forward_refs.truncate(forward_refs);
        }
        result
    }

    fn reserve(&mut self, name: String) -> TypeId {
        let id = TypeId(self.slots.len());
        self.index.insert(name.clone(), id);
        self.slots.push(Slot {
            name,
            descriptor: None,
        });
        id
    }

    fn forward(&mut self, name: &str, slot: TypeId) -> TypeRef {
        tracing::debug!("Forward reference to `{}`", name);
        let fwd = ForwardRef {
            path: Arc::from(name),
            slot,
        };
        self.forward_refs.push(fwd.clone());
        TypeRef::Forward(fwd)
    }

    /// Store a descriptor without the duplicate check.
    fn define(&mut self, name: impl Into<String>, kind: TypeKind<TypeRef>) -> TypeRef {
        let name = name.into();
        let id = match self.index.get(&name) {
            Some(&id) => id,
            None => self.reserve(name.clone()),
        };
        tracing::debug!("Registered {} `{}` as {}", kind.label(), name, id);
        self.slots[id.0].descriptor = Some(TypeDescriptor::new(name, kind));
        TypeRef::Direct(id)
    }

    fn ensure(&mut self, name: String, kind: TypeKind<TypeRef>) -> TypeRef {
        match self.index.get(&name) {
            Some(&id) if self.slots[id.0].descriptor.is_some() => TypeRef::Direct(id),
            _ => self.define(name, kind),
        }
    }
}

impl TypeTable for SchemaBuilder {
    type Ref = TypeRef;

    fn describe(&self, r: &TypeRef) -> Result<&TypeDescriptor<TypeRef>, SchemaError> {
        self.descriptor(r)
    }
}

fn bind(index: &HashMap<String, TypeId>, r: TypeRef) -> Result<TypeId, SchemaError> {
    match r {
        TypeRef::Direct(id) => Ok(id),
        TypeRef::Forward(fwd) => index
            .get(fwd.path())
            .copied()
            .ok_or_else(|| SchemaError::UnresolvedReference(fwd.path().to_string())),
    }
}

/// Parse a `V<n>` version label.
pub(crate) fn parse_version_label(label: &str) -> Option<u8> {
    let digits = label.strip_prefix('V')?;
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    digits.parse::<u8>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives_preregistered() {
        let mut b = SchemaBuilder::new();
        for (name, _) in PrimitiveKind::BUILTIN {
            assert!(b.is_defined(name), "{name} missing");
            assert!(!b.lookup(name).is_forward());
        }
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut b = SchemaBuilder::new();
        b.make_struct("a.Point", [("x", "u32")]).expect("first");
        let err = b.make_struct("a.Point", [("y", "u32")]).unwrap_err();
        assert_eq!(err, SchemaError::DuplicateType("a.Point".into()));
    }

    #[test]
    fn test_rejected_declaration_leaves_no_references() {
        let mut b = SchemaBuilder::new();
        b.make_struct("a.P", [("x", "u32")]).expect("P");
        let before = b.len();

        assert!(matches!(
            b.make_struct("a.P", [("y", "a.Missing")]),
            Err(SchemaError::DuplicateType(_))
        ));
        assert!(matches!(
            b.make_struct("a.Q", [("y", "a.Gone"), ("y", "u8")]),
            Err(SchemaError::DuplicateField { .. })
        ));
        assert!(matches!(
            b.make_enum("a.E", [("A", "a.Lost"), ("A", "u8")]),
            Err(SchemaError::DuplicateVariant { .. })
        ));
        assert!(matches!(
            b.make_tuple("a.P", ["a.Stray"]),
            Err(SchemaError::DuplicateType(_))
        ));
        assert!(matches!(
            b.make_versioned("a.P", [("V1", "a.Orphan")]),
            Err(SchemaError::DuplicateType(_))
        ));

        assert_eq!(b.len(), before);
        assert!(b.pending().is_empty());
        assert!(b.resolve_all().is_ok());
    }

    #[test]
    fn test_failed_declaration_keeps_earlier_forward_refs() {
        let mut b = SchemaBuilder::new();
        b.make_struct("a.S", [("later", "a.Later")]).expect("S");
        assert!(b
            .make_struct("a.T", [("later", "a.Later"), ("later", "u8")])
            .is_err());
        assert_eq!(b.pending(), vec!["a.Later".to_string()]);

        b.make_tuple("a.Later", ["u8"]).expect("Later");
        assert!(b.resolve_all().is_ok());
    }

    #[test]
    fn test_distinct_names_independent() {
        let mut b = SchemaBuilder::new();
        let p = b.make_struct("a.P", [("x", "u8")]).expect("P");
        let q = b.make_struct("a.Q", [("x", "u8")]).expect("Q");
        assert_ne!(p.slot(), q.slot());
        let p_again = b.lookup("a.P");
        let q_again = b.lookup("a.Q");
        assert_eq!(b.name_of(&p_again), "a.P");
        assert_eq!(b.name_of(&q_again), "a.Q");
        assert_eq!(p_again.slot(), p.slot());
    }

    #[test]
    fn test_lookup_unknown_is_forward() {
        let mut b = SchemaBuilder::new();
        let r = b.lookup("later.Type");
        assert!(r.is_forward());
        assert_eq!(b.pending(), vec!["later.Type".to_string()]);

        let err = b.descriptor(&r).unwrap_err();
        assert_eq!(err, SchemaError::UnresolvedReference("later.Type".into()));
    }

    #[test]
    fn test_forward_then_define_shares_slot() {
        let mut b = SchemaBuilder::new();
        let fwd = b.get_class("later.Type");
        let defined = b.make_tuple("later.Type", ["u8"]).expect("define");
        assert_eq!(fwd.slot(), defined.slot());
        assert!(b.descriptor(&fwd).is_ok());
        assert!(b.pending().is_empty());
        assert!(!b.lookup("later.Type").is_forward());
    }

    #[test]
    fn test_default_value_before_resolution() {
        let mut b = SchemaBuilder::new();
        let s = b
            .make_struct("a.S", [("n", "u32"), ("later", "a.Later")])
            .expect("S");
        let err = b.default_value(&s).unwrap_err();
        assert_eq!(err, SchemaError::UnresolvedReference("a.Later".into()));

        b.make_tuple("a.Later", Vec::<TypeSpec>::new()).expect("Later");
        let value = b.default_value(&s).expect("default");
        assert_eq!(value.get_field("n"), Some(&Value::U32(0)));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let mut b = SchemaBuilder::new();
        let err = b
            .make_struct("a.S", [("x", "u8"), ("x", "u16")])
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateField {
                type_name: "a.S".into(),
                field: "x".into()
            }
        );
    }

    #[test]
    fn test_enum_discriminants_positional_and_override() {
        let mut b = SchemaBuilder::new();
        let e = b
            .make_enum(
                "a.E",
                [
                    VariantSpec::unit("A"),
                    VariantSpec::new("B", "u8"),
                    VariantSpec::unit("C").with_index(10),
                    VariantSpec::unit("D"),
                ],
            )
            .expect("enum");
        let desc = b.descriptor(&e).expect("desc");
        let layout = desc.enum_descriptor().expect("enum layout");
        let tags: Vec<_> = layout.variants.iter().map(|v| v.discriminant).collect();
        assert_eq!(tags, vec![0, 1, 10, 11]);
        assert!(layout.variants[0].payload.is_none());
    }

    #[test]
    fn test_enum_duplicate_discriminant_rejected() {
        let mut b = SchemaBuilder::new();
        let err = b
            .make_enum(
                "a.E",
                [VariantSpec::unit("A").with_index(1), VariantSpec::unit("B").with_index(1)],
            )
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateDiscriminant {
                type_name: "a.E".into(),
                discriminant: 1
            }
        );
    }

    #[test]
    fn test_enum_duplicate_variant_rejected() {
        let mut b = SchemaBuilder::new();
        let err = b
            .make_enum("a.E", [("A", "u8"), ("A", "u16")])
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateVariant { .. }));
    }

    #[test]
    fn test_enum_discriminant_overflow() {
        let mut b = SchemaBuilder::new();
        let err = b
            .make_enum("a.E", [VariantSpec::unit("A").with_index(255), VariantSpec::unit("B")])
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::DiscriminantOverflow { discriminant: 256, .. }
        ));
    }

    #[test]
    fn test_versioned_labels() {
        assert_eq!(parse_version_label("V1"), Some(1));
        assert_eq!(parse_version_label("V255"), Some(255));
        assert_eq!(parse_version_label("V0"), None);
        assert_eq!(parse_version_label("V01"), None);
        assert_eq!(parse_version_label("V256"), None);
        assert_eq!(parse_version_label("v1"), None);
        assert_eq!(parse_version_label("V"), None);
    }

    #[test]
    fn test_make_versioned() {
        let mut b = SchemaBuilder::new();
        let env = b
            .make_versioned("a.VersionedMsg", [("V1", "a.Msg")])
            .expect("envelope");
        let desc = b.descriptor(&env).expect("desc");
        let layout = desc.enum_descriptor().expect("enum layout");
        assert!(layout.versioned);
        assert_eq!(layout.variants[0].discriminant, 1);

        let err = b.make_versioned("a.Bad", [("v2", "u8")]).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidVersionLabel { .. }));

        let err = b
            .make_versioned("a.Empty", Vec::<(&str, &str)>::new())
            .unwrap_err();
        assert_eq!(err, SchemaError::EmptyEnvelope("a.Empty".into()));
    }

    #[test]
    fn test_containers_are_structural() {
        let mut b = SchemaBuilder::new();
        let v1 = b.vec_of("u8");
        let v2 = b.vec_of("u8");
        assert_eq!(v1, v2);
        assert_eq!(b.name_of(&v1), "Vec<u8>");

        let m = b.map_of("String", "a.Later");
        assert_eq!(b.name_of(&m), "Map<String, a.Later>");
        let arr = b.array_of("u8", 32);
        assert_eq!(b.name_of(&arr), "[u8; 32]");
        let opt = b.option_of(PrimitiveKind::Bool);
        assert_eq!(b.name_of(&opt), "Option<bool>");
    }

    #[test]
    fn test_container_fills_forward_reference_by_name() {
        let mut b = SchemaBuilder::new();
        let fwd = b.lookup("Vec<u32>");
        let v = b.vec_of("u32");
        assert_eq!(fwd.slot(), v.slot());
        assert!(b.pending().is_empty());
    }
}
