//! # Signet Extract
//!
//! Registration-time resolution of header-bound resource method parameters.
//!
//! A header parameter is declared either with a basic type or with a record
//! type whose fields each bind one header. The declared type of every header
//! may be wrapped in a nilable union (`string?`) or a readonly intersection
//! (`readonly & int`). This crate unwraps those declarations once, when the
//! resource method is registered, into the effective type the header decoder
//! uses for each header.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`FieldResolver`] | Resolves one declared field type |
//! | [`FieldResolution`] | Effective type plus `readonly`/`nilable` flags |
//! | [`HeaderGroupDescriptor`] | Record parameter: ordered keys and field resolutions |
//! | [`SingleHeaderParam`] | Parameter bound to a single header |
//! | [`SignatureRegistry`] | Header parameters of every registered resource method |
//!
//! ## Example
//!
//! ```rust
//! use signet_core::{DeclaredType, RecordType};
//! use signet_extract::{FieldResolver, HeaderGroupDescriptor};
//!
//! let record = RecordType::new("ClientHeaders")
//!     .with_field("x-client-id", DeclaredType::readonly_of(DeclaredType::int()))
//!     .with_field("x-trace", DeclaredType::optional(DeclaredType::string()));
//!
//! let group = HeaderGroupDescriptor::build("client", record, &FieldResolver::default()).unwrap();
//!
//! let client_id = group.field(0).unwrap();
//! assert_eq!(client_id.effective_type(), &DeclaredType::int());
//! assert!(client_id.is_readonly());
//! ```
//!
//! ## Error Handling
//!
//! Resolution only fails for intersections that combine more than one type
//! with `readonly`, or, under strict validation, for fields that do not
//! resolve to a basic type. Either way a [`SignatureError`] is returned and
//! the resource method must not be served.

#![doc(html_root_url = "https://docs.rs/signet-extract/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod header;
mod registry;
mod resolver;

pub use header::{HeaderDeclaration, HeaderGroupDescriptor, HeaderParam, SingleHeaderParam};
pub use registry::SignatureRegistry;
pub use resolver::{is_basic_type, is_valid_basic_type, FieldResolution, FieldResolver};

// Re-export useful types from signet-core
pub use signet_core::{DeclaredType, RecordType, SignatureError, SignatureResult, ValidationMode};
