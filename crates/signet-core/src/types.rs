//! Declared type model.
//!
//! This module describes the types a resource method author can declare for a
//! header-bound parameter. The model is deliberately small: a closed set of
//! scalar kinds, arrays, records, unions, intersections, and the two marker
//! types (`()` for nil and `readonly`) that only ever appear inside a union or
//! an intersection.
//!
//! Types are usually built with the constructor helpers on [`DeclaredType`],
//! but they are also serializable so signature manifests can be loaded from
//! JSON or TOML.
//!
//! # Example
//!
//! ```
//! use signet_core::{DeclaredType, RecordType, TypeTag};
//!
//! // readonly & string?
//! let declared = DeclaredType::readonly_of(DeclaredType::optional(DeclaredType::string()));
//! assert_eq!(declared.tag(), TypeTag::Intersection);
//! assert_eq!(declared.name(), "readonly & string?");
//!
//! let headers = RecordType::new("RateLimitHeaders")
//!     .with_field("x-rate-limit-id", DeclaredType::string())
//!     .with_field("x-rate-limit-remaining", DeclaredType::optional(DeclaredType::int()));
//!
//! assert_eq!(headers.fields().len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar kinds a declared type can name directly.
///
/// Only some of these can be decoded from header text, see
/// [`TypeTag::is_basic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    /// Unicode string.
    String,
    /// Signed 64-bit integer.
    Int,
    /// Boolean.
    Boolean,
    /// Arbitrary precision decimal.
    Decimal,
    /// 64-bit floating point.
    Float,
    /// Single byte.
    Byte,
    /// JSON value.
    Json,
    /// XML value.
    Xml,
    /// Any plain data value.
    Anydata,
}

impl ScalarKind {
    /// Returns the name of the kind as written in a declaration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Boolean => "boolean",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::Byte => "byte",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Anydata => "anydata",
        }
    }

    /// Returns the tag for this kind.
    #[must_use]
    pub const fn tag(self) -> TypeTag {
        match self {
            Self::String => TypeTag::String,
            Self::Int => TypeTag::Int,
            Self::Boolean => TypeTag::Boolean,
            Self::Decimal => TypeTag::Decimal,
            Self::Float => TypeTag::Float,
            Self::Byte => TypeTag::Byte,
            Self::Json => TypeTag::Json,
            Self::Xml => TypeTag::Xml,
            Self::Anydata => TypeTag::Anydata,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of a [`DeclaredType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `string`
    String,
    /// `int`
    Int,
    /// `boolean`
    Boolean,
    /// `decimal`
    Decimal,
    /// `float`
    Float,
    /// `byte`
    Byte,
    /// `json`
    Json,
    /// `xml`
    Xml,
    /// `anydata`
    Anydata,
    /// `T[]`
    Array,
    /// Record with named fields.
    Record,
    /// `A|B`
    Union,
    /// `A & B`
    Intersection,
    /// `()`
    Nil,
    /// The `readonly` marker.
    Readonly,
}

impl TypeTag {
    /// Returns true for the scalar tags a header value can be decoded into:
    /// string, int, boolean, decimal and float.
    #[must_use]
    pub const fn is_basic(self) -> bool {
        matches!(
            self,
            Self::String | Self::Int | Self::Boolean | Self::Decimal | Self::Float
        )
    }
}

/// A declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeclaredType {
    /// A plain scalar type.
    Scalar {
        /// The scalar kind.
        scalar: ScalarKind,
    },
    /// An array of some element type.
    Array {
        /// The element type.
        element: Box<DeclaredType>,
    },
    /// A record type.
    Record(RecordType),
    /// A union type.
    Union(UnionType),
    /// An intersection type.
    Intersection(IntersectionType),
    /// The nil type `()`.
    Nil,
    /// The `readonly` marker type.
    Readonly,
}

impl DeclaredType {
    /// Creates a scalar type of the given kind.
    #[must_use]
    pub const fn scalar(scalar: ScalarKind) -> Self {
        Self::Scalar { scalar }
    }

    /// Creates a `string` type.
    #[must_use]
    pub const fn string() -> Self {
        Self::scalar(ScalarKind::String)
    }

    /// Creates an `int` type.
    #[must_use]
    pub const fn int() -> Self {
        Self::scalar(ScalarKind::Int)
    }

    /// Creates a `boolean` type.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::scalar(ScalarKind::Boolean)
    }

    /// Creates a `decimal` type.
    #[must_use]
    pub const fn decimal() -> Self {
        Self::scalar(ScalarKind::Decimal)
    }

    /// Creates a `float` type.
    #[must_use]
    pub const fn float() -> Self {
        Self::scalar(ScalarKind::Float)
    }

    /// Creates an array type `element[]`.
    #[must_use]
    pub fn array(element: DeclaredType) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    /// Creates an unnamed union of the given members.
    #[must_use]
    pub fn union(members: Vec<DeclaredType>) -> Self {
        Self::Union(UnionType::new(members))
    }

    /// Creates the nilable type `inner?`, i.e. the union `inner|()`.
    #[must_use]
    pub fn optional(inner: DeclaredType) -> Self {
        Self::union(vec![inner, Self::Nil])
    }

    /// Creates an unnamed intersection of the given constituents.
    #[must_use]
    pub fn intersection(constituents: Vec<DeclaredType>) -> Self {
        Self::Intersection(IntersectionType::new(constituents))
    }

    /// Creates the intersection `readonly & inner`.
    #[must_use]
    pub fn readonly_of(inner: DeclaredType) -> Self {
        Self::intersection(vec![Self::Readonly, inner])
    }

    /// Returns the tag of this type.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        match self {
            Self::Scalar { scalar } => scalar.tag(),
            Self::Array { .. } => TypeTag::Array,
            Self::Record(_) => TypeTag::Record,
            Self::Union(_) => TypeTag::Union,
            Self::Intersection(_) => TypeTag::Intersection,
            Self::Nil => TypeTag::Nil,
            Self::Readonly => TypeTag::Readonly,
        }
    }

    /// Returns true if this is the nil type.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns true if this is the `readonly` marker.
    #[must_use]
    pub const fn is_readonly(&self) -> bool {
        matches!(self, Self::Readonly)
    }

    /// Returns the element type of an array.
    #[must_use]
    pub fn element_type(&self) -> Option<&DeclaredType> {
        match self {
            Self::Array { element } => Some(element),
            _ => None,
        }
    }

    /// Returns the members of a union or the constituents of an intersection.
    #[must_use]
    pub fn members(&self) -> Option<&[DeclaredType]> {
        match self {
            Self::Union(union) => Some(union.members()),
            Self::Intersection(intersection) => Some(intersection.constituents()),
            _ => None,
        }
    }

    /// Returns the record type if this is a record.
    #[must_use]
    pub fn as_record(&self) -> Option<&RecordType> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the display name of this type.
    ///
    /// Named types (records and aliased unions or intersections) display their
    /// declared name. Anonymous types are rendered structurally, e.g.
    /// `string?`, `int|string|()`, `readonly & int`, `string[]`.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Scalar { scalar } => scalar.as_str().to_string(),
            Self::Array { element } => format!("{}[]", element.operand_name()),
            Self::Record(record) => record.name().to_string(),
            Self::Union(union) => match union.name() {
                Some(name) => name.to_string(),
                None => union.structural_name(),
            },
            Self::Intersection(intersection) => match intersection.name() {
                Some(name) => name.to_string(),
                None => intersection
                    .constituents()
                    .iter()
                    .map(DeclaredType::operand_name)
                    .collect::<Vec<_>>()
                    .join(" & "),
            },
            Self::Nil => "()".to_string(),
            Self::Readonly => "readonly".to_string(),
        }
    }

    // Name of this type when it appears inside another anonymous type.
    fn operand_name(&self) -> String {
        let compound = match self {
            Self::Union(union) => union.name().is_none() && union.optional_member().is_none(),
            Self::Intersection(intersection) => intersection.name().is_none(),
            _ => false,
        };

        if compound {
            format!("({})", self.name())
        } else {
            self.name()
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<ScalarKind> for DeclaredType {
    fn from(scalar: ScalarKind) -> Self {
        Self::scalar(scalar)
    }
}

impl From<RecordType> for DeclaredType {
    fn from(record: RecordType) -> Self {
        Self::Record(record)
    }
}

/// A record type: a named, ordered set of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordType {
    name: String,
    #[serde(default)]
    fields: Vec<RecordField>,
}

impl RecordType {
    /// Creates an empty record type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field. Fields keep their declaration order.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, declared: DeclaredType) -> Self {
        self.fields.push(RecordField::new(name, declared));
        self
    }

    /// Returns the record's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[RecordField] {
        &self.fields
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&RecordField> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// A single named field of a [`RecordType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordField {
    name: String,
    #[serde(rename = "type")]
    declared: DeclaredType,
}

impl RecordField {
    /// Creates a field.
    #[must_use]
    pub fn new(name: impl Into<String>, declared: DeclaredType) -> Self {
        Self {
            name: name.into(),
            declared,
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field's declared type.
    #[must_use]
    pub fn declared_type(&self) -> &DeclaredType {
        &self.declared
    }
}

/// A union type `A|B|...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    members: Vec<DeclaredType>,
}

impl UnionType {
    /// Creates an anonymous union.
    #[must_use]
    pub fn new(members: Vec<DeclaredType>) -> Self {
        Self {
            name: None,
            members,
        }
    }

    /// Creates a union declared through a named type alias.
    #[must_use]
    pub fn named(name: impl Into<String>, members: Vec<DeclaredType>) -> Self {
        Self {
            name: Some(name.into()),
            members,
        }
    }

    /// Returns the alias name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[DeclaredType] {
        &self.members
    }

    /// Iterates over the members that are not `()`, in declaration order.
    pub fn non_nil_members(&self) -> impl Iterator<Item = &DeclaredType> {
        self.members.iter().filter(|member| !member.is_nil())
    }

    /// Returns true if `()` is one of the members.
    #[must_use]
    pub fn contains_nil(&self) -> bool {
        self.members.iter().any(DeclaredType::is_nil)
    }

    // `T` when this union is exactly `T|()` or `()|T`.
    fn optional_member(&self) -> Option<&DeclaredType> {
        match self.members.as_slice() {
            [member, DeclaredType::Nil] | [DeclaredType::Nil, member] if !member.is_nil() => {
                Some(member)
            }
            _ => None,
        }
    }

    fn structural_name(&self) -> String {
        if let Some(member) = self.optional_member() {
            return format!("{}?", member.operand_name());
        }

        self.members
            .iter()
            .map(DeclaredType::operand_name)
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// An intersection type `A & B & ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersectionType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    constituents: Vec<DeclaredType>,
}

impl IntersectionType {
    /// Creates an anonymous intersection.
    #[must_use]
    pub fn new(constituents: Vec<DeclaredType>) -> Self {
        Self {
            name: None,
            constituents,
        }
    }

    /// Creates an intersection declared through a named type alias.
    #[must_use]
    pub fn named(name: impl Into<String>, constituents: Vec<DeclaredType>) -> Self {
        Self {
            name: Some(name.into()),
            constituents,
        }
    }

    /// Returns the alias name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the constituents in declaration order.
    #[must_use]
    pub fn constituents(&self) -> &[DeclaredType] {
        &self.constituents
    }
}
