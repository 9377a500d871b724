//! Registration of resource method header parameters.
//!
//! The [`SignatureRegistry`] owns the resolved header parameters of every
//! registered resource method. A resource method is registered all at once:
//! if any of its header parameters fails to resolve, nothing is recorded for
//! it and the error is returned so the caller can refuse to serve it.

use crate::header::{HeaderDeclaration, HeaderParam};
use crate::resolver::FieldResolver;
use indexmap::IndexMap;
use signet_core::{SignatureError, SignatureResult};

/// Resolved header parameters, keyed by resource method.
///
/// # Example
///
/// ```
/// use signet_core::{DeclaredType, RecordType};
/// use signet_extract::{FieldResolver, HeaderDeclaration, SignatureRegistry};
///
/// let mut registry = SignatureRegistry::new(FieldResolver::default());
///
/// let record = RecordType::new("Headers")
///     .with_field("a", DeclaredType::string())
///     .with_field("b", DeclaredType::optional(DeclaredType::int()));
///
/// registry
///     .register("GET /items", &[HeaderDeclaration::new("headers", record.into())])
///     .unwrap();
///
/// let group = registry.header_param("GET /items", "headers").unwrap().as_record().unwrap();
/// assert_eq!(group.keys(), ["a", "b"]);
/// ```
#[derive(Debug, Default)]
pub struct SignatureRegistry {
    resolver: FieldResolver,
    resources: IndexMap<String, Vec<HeaderParam>>,
}

impl SignatureRegistry {
    /// Creates an empty registry resolving with `resolver`.
    #[must_use]
    pub fn new(resolver: FieldResolver) -> Self {
        Self {
            resolver,
            resources: IndexMap::new(),
        }
    }

    /// Returns the resolver used for registration.
    #[must_use]
    pub fn resolver(&self) -> &FieldResolver {
        &self.resolver
    }

    /// Resolves and records the header parameters of a resource method.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::DuplicateResource`] if the resource is
    /// already registered, or the first resolution error among its
    /// declarations. The registry is unchanged on error.
    pub fn register(
        &mut self,
        resource: impl Into<String>,
        declarations: &[HeaderDeclaration],
    ) -> SignatureResult<&[HeaderParam]> {
        let resource = resource.into();

        if self.resources.contains_key(&resource) {
            let err = SignatureError::duplicate_resource(&resource);
            tracing::error!(resource = %resource, error_code = err.error_code(), "{err}");
            return Err(err);
        }

        let params = declarations
            .iter()
            .map(|declaration| HeaderParam::from_declaration(declaration, &self.resolver))
            .collect::<SignatureResult<Vec<_>>>()
            .map_err(|err| {
                tracing::error!(
                    resource = %resource,
                    error_code = err.error_code(),
                    "refusing to register resource: {err}"
                );
                err
            })?;

        tracing::info!(
            resource = %resource,
            header_params = params.len(),
            mode = %self.resolver.mode(),
            "registered header parameters"
        );

        let entry = self.resources.entry(resource).or_insert(params);
        Ok(entry.as_slice())
    }

    /// Returns the header parameters of a registered resource method.
    #[must_use]
    pub fn get(&self, resource: &str) -> Option<&[HeaderParam]> {
        self.resources.get(resource).map(Vec::as_slice)
    }

    /// Returns a resource method's header parameter by token.
    #[must_use]
    pub fn header_param(&self, resource: &str, token: &str) -> Option<&HeaderParam> {
        self.get(resource)?
            .iter()
            .find(|param| param.token() == token)
    }

    /// Returns true if the resource method is registered.
    #[must_use]
    pub fn contains(&self, resource: &str) -> bool {
        self.resources.contains_key(resource)
    }

    /// Iterates over registered resource methods in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[HeaderParam])> {
        self.resources
            .iter()
            .map(|(resource, params)| (resource.as_str(), params.as_slice()))
    }

    /// Returns the number of registered resource methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
