//! Header field type resolution.
//!
//! A header field may be declared as a plain type, as a nilable union
//! (`string?`), as a readonly intersection (`readonly & int`), or as a
//! readonly intersection wrapping a nilable union (`readonly & string?`).
//! [`FieldResolver`] unwraps these declarations into the effective type the
//! header decoder works with, and records whether the field was `readonly`
//! and/or `nilable`.
//!
//! Resolution happens once, when the resource method is registered.
//!
//! # Example
//!
//! ```
//! use signet_core::DeclaredType;
//! use signet_extract::FieldResolver;
//!
//! let resolver = FieldResolver::default();
//!
//! let resolved = resolver
//!     .resolve("x-request-id", &DeclaredType::optional(DeclaredType::string()))
//!     .unwrap();
//!
//! assert_eq!(resolved.effective_type(), &DeclaredType::string());
//! assert!(resolved.is_nilable());
//! assert!(!resolved.is_readonly());
//! ```

use signet_core::{
    DeclaredType, IntersectionType, SignatureError, SignatureResult, TypeTag, UnionType,
    ValidationMode,
};

/// Resolution result for a single header field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResolution {
    effective_type: DeclaredType,
    readonly: bool,
    nilable: bool,
}

impl FieldResolution {
    fn plain(effective_type: DeclaredType) -> Self {
        Self {
            effective_type,
            readonly: false,
            nilable: false,
        }
    }

    /// Returns the type the header value is decoded into.
    #[must_use]
    pub fn effective_type(&self) -> &DeclaredType {
        &self.effective_type
    }

    /// Returns true if the field was declared `readonly & T`.
    #[must_use]
    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Returns true if the field was declared as a union with `()`.
    #[must_use]
    pub fn is_nilable(&self) -> bool {
        self.nilable
    }
}

/// Resolves declared header field types into [`FieldResolution`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldResolver {
    mode: ValidationMode,
}

impl FieldResolver {
    /// Creates a resolver with the given validation mode.
    #[must_use]
    pub const fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    /// Creates a resolver that rejects fields which do not resolve to a
    /// basic type.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(ValidationMode::Strict)
    }

    /// Returns the validation mode.
    #[must_use]
    pub const fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Resolves the declared type of the header field `field`.
    ///
    /// - A union marks the field nilable and resolves to its first non-nil
    ///   member. Any further members are ignored.
    /// - A readonly intersection marks the field readonly and resolves to its
    ///   other constituent. If that constituent is a union, the field is also
    ///   marked nilable but the union itself stays the effective type.
    /// - Anything else resolves to itself.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::InvalidDeclaration`] for an intersection of
    /// more than two types, and [`SignatureError::UnsupportedFieldType`] in
    /// strict mode when the result is not a basic type.
    pub fn resolve(
        &self,
        field: &str,
        declared: &DeclaredType,
    ) -> SignatureResult<FieldResolution> {
        let resolution = match declared {
            DeclaredType::Union(union) => resolve_union(declared, union),
            DeclaredType::Intersection(intersection) => {
                resolve_intersection(declared, intersection)?
            }
            _ => FieldResolution::plain(declared.clone()),
        };

        self.validate_basic_type(field, &resolution)?;

        tracing::debug!(
            field,
            declared = %declared,
            effective = %resolution.effective_type,
            readonly = resolution.readonly,
            nilable = resolution.nilable,
            "resolved header field type"
        );

        Ok(resolution)
    }

    // Only applied to non-record header fields, i.e. the output of `resolve`.
    fn validate_basic_type(
        &self,
        field: &str,
        resolution: &FieldResolution,
    ) -> SignatureResult<()> {
        if is_basic_type(&resolution.effective_type) {
            return Ok(());
        }

        match self.mode {
            ValidationMode::Permissive => {
                tracing::debug!(
                    field,
                    effective = %resolution.effective_type,
                    "header field does not resolve to a basic type, leaving it to the decoder"
                );
                Ok(())
            }
            ValidationMode::Strict => {
                if decodable_type(resolution).is_some_and(is_basic_type) {
                    return Ok(());
                }
                Err(SignatureError::unsupported_field_type(
                    field,
                    resolution.effective_type.name(),
                ))
            }
        }
    }
}

/// Returns true if `declared` is string, int, boolean, decimal or float, or
/// an array of one of those.
#[must_use]
pub fn is_basic_type(declared: &DeclaredType) -> bool {
    is_valid_basic_type(declared.tag())
        || declared
            .element_type()
            .is_some_and(|element| is_valid_basic_type(element.tag()))
}

/// Returns true if `tag` is one of the scalar tags a header decodes into.
#[must_use]
pub const fn is_valid_basic_type(tag: TypeTag) -> bool {
    tag.is_basic()
}

fn resolve_union(declared: &DeclaredType, union: &UnionType) -> FieldResolution {
    let effective_type = union.non_nil_members().next().unwrap_or(declared);

    FieldResolution {
        effective_type: effective_type.clone(),
        readonly: false,
        nilable: true,
    }
}

fn resolve_intersection(
    declared: &DeclaredType,
    intersection: &IntersectionType,
) -> SignatureResult<FieldResolution> {
    if intersection.constituents().len() > 2 {
        return Err(SignatureError::invalid_declaration(declared.name()));
    }

    let substantive = intersection
        .constituents()
        .iter()
        .find(|constituent| !constituent.is_readonly());

    let resolution = match substantive {
        // The union is resolved only for its nilability; it remains the
        // effective type.
        Some(constituent @ DeclaredType::Union(union)) => FieldResolution {
            effective_type: constituent.clone(),
            readonly: true,
            nilable: resolve_union(constituent, union).nilable,
        },
        Some(constituent) => FieldResolution {
            effective_type: constituent.clone(),
            readonly: true,
            nilable: false,
        },
        None => FieldResolution {
            effective_type: declared.clone(),
            readonly: true,
            nilable: false,
        },
    };

    Ok(resolution)
}

// What strict validation checks: the first non-nil member of a union left
// behind by a readonly intersection, otherwise nothing. A union that is the
// effective type of a plain union declaration gets no look-through.
fn decodable_type(resolution: &FieldResolution) -> Option<&DeclaredType> {
    match &resolution.effective_type {
        DeclaredType::Union(union) if resolution.readonly => union.non_nil_members().next(),
        _ => None,
    }
}
