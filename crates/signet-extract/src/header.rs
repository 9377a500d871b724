//! Header parameter descriptors.
//!
//! A resource method parameter bound to request headers is either a single
//! header ([`SingleHeaderParam`]) or a record whose fields each bind a
//! distinct header ([`HeaderGroupDescriptor`]). Both are built once, at
//! registration time, and are read-only afterwards.

use crate::resolver::{FieldResolution, FieldResolver};
use serde::{Deserialize, Serialize};
use signet_core::{DeclaredType, RecordType, SignatureResult};

/// A header-bound parameter as declared on a resource method.
///
/// # Example
///
/// ```
/// use signet_extract::HeaderDeclaration;
///
/// let json = r#"{
///     "token": "requestId",
///     "header_name": "x-request-id",
///     "type": { "kind": "scalar", "scalar": "string" }
/// }"#;
///
/// let declaration: HeaderDeclaration = serde_json::from_str(json).unwrap();
/// assert_eq!(declaration.token, "requestId");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderDeclaration {
    /// The parameter name.
    pub token: String,
    /// Header name override for a single header parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_name: Option<String>,
    /// The declared parameter type.
    #[serde(rename = "type")]
    pub declared: DeclaredType,
}

impl HeaderDeclaration {
    /// Creates a declaration without a header name override.
    #[must_use]
    pub fn new(token: impl Into<String>, declared: DeclaredType) -> Self {
        Self {
            token: token.into(),
            header_name: None,
            declared,
        }
    }

    /// Sets the header name the parameter is bound to.
    #[must_use]
    pub fn with_header_name(mut self, header_name: impl Into<String>) -> Self {
        self.header_name = Some(header_name.into());
        self
    }
}

/// A resolved header-bound parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderParam {
    /// A parameter bound to one header.
    Single(SingleHeaderParam),
    /// A record parameter whose fields bind one header each.
    Record(HeaderGroupDescriptor),
}

impl HeaderParam {
    /// Resolves a declaration.
    ///
    /// Record-typed declarations become a [`HeaderGroupDescriptor`],
    /// everything else a [`SingleHeaderParam`].
    ///
    /// # Errors
    ///
    /// Propagates the resolver's error for the offending field.
    pub fn from_declaration(
        declaration: &HeaderDeclaration,
        resolver: &FieldResolver,
    ) -> SignatureResult<Self> {
        match &declaration.declared {
            DeclaredType::Record(record) => {
                HeaderGroupDescriptor::build(&declaration.token, record.clone(), resolver)
                    .map(Self::Record)
            }
            declared => SingleHeaderParam::build(
                &declaration.token,
                declaration.header_name.clone(),
                declared,
                resolver,
            )
            .map(Self::Single),
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Single(param) => param.token(),
            Self::Record(group) => group.token(),
        }
    }

    /// Returns the group descriptor for a record parameter.
    #[must_use]
    pub fn as_record(&self) -> Option<&HeaderGroupDescriptor> {
        match self {
            Self::Record(group) => Some(group),
            Self::Single(_) => None,
        }
    }

    /// Returns the single header parameter.
    #[must_use]
    pub fn as_single(&self) -> Option<&SingleHeaderParam> {
        match self {
            Self::Single(param) => Some(param),
            Self::Record(_) => None,
        }
    }
}

/// A parameter bound to a single header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleHeaderParam {
    token: String,
    header_name: String,
    resolution: FieldResolution,
}

impl SingleHeaderParam {
    /// Resolves a single header parameter.
    ///
    /// The header name defaults to the token when no override is given.
    ///
    /// # Errors
    ///
    /// Propagates the resolver's error.
    pub fn build(
        token: impl Into<String>,
        header_name: Option<String>,
        declared: &DeclaredType,
        resolver: &FieldResolver,
    ) -> SignatureResult<Self> {
        let token = token.into();
        let header_name = header_name.unwrap_or_else(|| token.clone());
        let resolution = resolver.resolve(&header_name, declared)?;

        Ok(Self {
            token,
            header_name,
            resolution,
        })
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the header this parameter reads.
    #[must_use]
    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    /// Returns the resolved type and flags.
    #[must_use]
    pub fn resolution(&self) -> &FieldResolution {
        &self.resolution
    }
}

/// A record-typed header parameter.
///
/// Each record field binds the header named after it. `keys()[i]` is the
/// header described by `field(i)`.
///
/// # Example
///
/// ```
/// use signet_core::{DeclaredType, RecordType};
/// use signet_extract::{FieldResolver, HeaderGroupDescriptor};
///
/// let record = RecordType::new("Headers")
///     .with_field("a", DeclaredType::string())
///     .with_field("b", DeclaredType::optional(DeclaredType::int()));
///
/// let group = HeaderGroupDescriptor::build("headers", record, &FieldResolver::default()).unwrap();
///
/// assert_eq!(group.keys(), ["a", "b"]);
/// assert_eq!(group.field(1).unwrap().effective_type(), &DeclaredType::int());
/// assert!(group.field(1).unwrap().is_nilable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderGroupDescriptor {
    token: String,
    record_type: RecordType,
    keys: Vec<String>,
    fields: Vec<FieldResolution>,
}

impl HeaderGroupDescriptor {
    /// Resolves every field of `record_type` in declaration order.
    ///
    /// # Errors
    ///
    /// Returns the first field's resolution error. No descriptor is built in
    /// that case.
    pub fn build(
        token: impl Into<String>,
        record_type: RecordType,
        resolver: &FieldResolver,
    ) -> SignatureResult<Self> {
        let mut keys = Vec::with_capacity(record_type.fields().len());
        let mut fields = Vec::with_capacity(record_type.fields().len());

        for field in record_type.fields() {
            fields.push(resolver.resolve(field.name(), field.declared_type())?);
            keys.push(field.name().to_string());
        }

        Ok(Self {
            token: token.into(),
            record_type,
            keys,
            fields,
        })
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the declared record type.
    #[must_use]
    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    /// Returns the header keys in declaration order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the resolution of the field at `index`.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&FieldResolution> {
        self.fields.get(index)
    }

    /// Returns the resolution of the field bound to header `key`.
    #[must_use]
    pub fn field_by_key(&self, key: &str) -> Option<&FieldResolution> {
        self.keys
            .iter()
            .position(|k| k == key)
            .and_then(|index| self.field(index))
    }

    /// Returns the number of header fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over `(key, resolution)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldResolution)> {
        self.keys.iter().map(String::as_str).zip(&self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use signet_core::{IntersectionType, SignatureError};

    #[test]
    fn test_build_record_descriptor() {
        let record = RecordType::new("Headers")
            .with_field("a", DeclaredType::string())
            .with_field("b", DeclaredType::optional(DeclaredType::int()));

        let group =
            HeaderGroupDescriptor::build("headers", record.clone(), &FieldResolver::default())
                .unwrap();

        assert_eq!(group.token(), "headers");
        assert_eq!(group.record_type(), &record);
        assert_eq!(group.keys(), ["a", "b"]);

        let a = group.field(0).unwrap();
        assert_eq!(a.effective_type(), &DeclaredType::string());
        assert!(!a.is_readonly());
        assert!(!a.is_nilable());

        let b = group.field(1).unwrap();
        assert_eq!(b.effective_type(), &DeclaredType::int());
        assert!(!b.is_readonly());
        assert!(b.is_nilable());

        assert!(group.field(2).is_none());
    }

    #[test]
    fn test_build_empty_record() {
        let group = HeaderGroupDescriptor::build(
            "empty",
            RecordType::new("Empty"),
            &FieldResolver::default(),
        )
        .unwrap();

        assert!(group.is_empty());
        assert_eq!(group.len(), 0);
        assert!(group.field(0).is_none());
    }

    #[test]
    fn test_build_propagates_field_error() {
        let record = RecordType::new("Headers")
            .with_field("ok", DeclaredType::string())
            .with_field(
                "bad",
                DeclaredType::intersection(vec![
                    DeclaredType::Readonly,
                    DeclaredType::int(),
                    DeclaredType::string(),
                ]),
            );

        let err = HeaderGroupDescriptor::build("headers", record, &FieldResolver::default())
            .unwrap_err();
        assert_eq!(
            err,
            SignatureError::invalid_declaration("readonly & int & string")
        );
    }

    #[test]
    fn test_field_by_key_and_iter() {
        let record = RecordType::new("Headers")
            .with_field("x-id", DeclaredType::readonly_of(DeclaredType::int()))
            .with_field("x-tags", DeclaredType::array(DeclaredType::string()));

        let group =
            HeaderGroupDescriptor::build("headers", record, &FieldResolver::default()).unwrap();

        assert!(group.field_by_key("x-id").unwrap().is_readonly());
        assert!(group.field_by_key("x-missing").is_none());

        let keys: Vec<_> = group.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["x-id", "x-tags"]);
    }

    #[test]
    fn test_single_header_defaults_to_token() {
        let param = SingleHeaderParam::build(
            "x-api-key",
            None,
            &DeclaredType::string(),
            &FieldResolver::default(),
        )
        .unwrap();

        assert_eq!(param.token(), "x-api-key");
        assert_eq!(param.header_name(), "x-api-key");
        assert_eq!(param.resolution().effective_type(), &DeclaredType::string());
    }

    #[test]
    fn test_from_declaration_single() {
        let declaration = HeaderDeclaration::new(
            "retries",
            DeclaredType::optional(DeclaredType::array(DeclaredType::int())),
        )
        .with_header_name("x-retries");

        let param = HeaderParam::from_declaration(&declaration, &FieldResolver::default()).unwrap();
        let single = param.as_single().unwrap();

        assert_eq!(param.token(), "retries");
        assert_eq!(single.header_name(), "x-retries");
        assert_eq!(
            single.resolution().effective_type(),
            &DeclaredType::array(DeclaredType::int())
        );
        assert!(single.resolution().is_nilable());
        assert!(param.as_record().is_none());
    }

    #[test]
    fn test_from_declaration_record() {
        let record = RecordType::new("RateLimit")
            .with_field("x-limit", DeclaredType::int())
            .with_field("x-remaining", DeclaredType::optional(DeclaredType::int()));
        let declaration = HeaderDeclaration::new("rateLimit", DeclaredType::Record(record));

        let param = HeaderParam::from_declaration(&declaration, &FieldResolver::default()).unwrap();
        let group = param.as_record().unwrap();

        assert_eq!(param.token(), "rateLimit");
        assert_eq!(group.keys(), ["x-limit", "x-remaining"]);
    }

    #[test]
    fn test_from_declaration_single_error() {
        let declared = DeclaredType::Intersection(IntersectionType::named(
            "TooMuch",
            vec![DeclaredType::Readonly, DeclaredType::int(), DeclaredType::float()],
        ));
        let declaration = HeaderDeclaration::new("count", declared);

        let err =
            HeaderParam::from_declaration(&declaration, &FieldResolver::default()).unwrap_err();
        assert!(err.to_string().contains("'TooMuch'"));
    }

    #[test]
    fn test_strict_group_rejects_nested_record() {
        let record = RecordType::new("Headers")
            .with_field("x-nested", DeclaredType::Record(RecordType::new("Nested")));

        let err = HeaderGroupDescriptor::build("headers", record, &FieldResolver::strict())
            .unwrap_err();
        assert_eq!(
            err,
            SignatureError::unsupported_field_type("x-nested", "Nested")
        );
    }

    proptest! {
        #[test]
        fn prop_keys_and_fields_are_index_aligned(
            names in prop::collection::vec("[a-z]{1,8}", 0..8),
            nilable in prop::collection::vec(any::<bool>(), 8),
        ) {
            let record = names.iter().zip(&nilable).fold(
                RecordType::new("Generated"),
                |record, (name, &nilable)| {
                    let declared = if nilable {
                        DeclaredType::optional(DeclaredType::string())
                    } else {
                        DeclaredType::string()
                    };
                    record.with_field(name.clone(), declared)
                },
            );

            let resolver = FieldResolver::default();
            let group = HeaderGroupDescriptor::build("generated", record, &resolver).unwrap();

            prop_assert_eq!(group.len(), names.len());
            prop_assert_eq!(group.keys(), names.as_slice());
            for (index, flag) in nilable.iter().take(names.len()).enumerate() {
                let field = group.field(index).unwrap();
                prop_assert_eq!(field.is_nilable(), *flag);
                prop_assert_eq!(field.effective_type(), &DeclaredType::string());
            }
        }
    }
}
