//! # Signet Core
//!
//! Core types for the Signet header parameter resolver.
//!
//! This crate provides the foundational types shared by the other Signet crates:
//!
//! - [`DeclaredType`] - The declared type of a resource method parameter or record field
//! - [`RecordType`], [`UnionType`], [`IntersectionType`] - Structured type constituents
//! - [`TypeTag`] / [`ScalarKind`] - Discriminants used during resolution
//! - [`ValidationMode`] - How unsupported effective types are treated
//! - [`SignatureError`] - Registration-time error type

#![doc(html_root_url = "https://docs.rs/signet-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod types;
mod validation;

pub use error::{SignatureError, SignatureResult};
pub use types::{
    DeclaredType, IntersectionType, RecordField, RecordType, ScalarKind, TypeTag, UnionType,
};
pub use validation::ValidationMode;
