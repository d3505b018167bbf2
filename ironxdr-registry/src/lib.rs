//! # IronXDR Registry
//!
//! XDR type registry and descriptor model.
//!
//! This crate provides:
//! - Type descriptors carrying structural kind and pre-rendered code fragments
//! - Structured XDR type expressions with on-demand reference resolution
//! - An insertion-ordered registry of named types and constants
//! - Name-casing helpers for emitted identifiers

pub mod error;
pub mod names;
pub mod registry;
pub mod types;

pub use error::RegistryError;
pub use names::to_constant_case;
pub use registry::{ConstantTable, TypeRegistry};
pub use types::{TypeDescriptor, TypeKind, TypeRef};
