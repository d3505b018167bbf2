//! # IronXDR
//!
//! XDR code generator for Rust.
//!
//! IronXDR turns a pre-parsed registry of XDR type descriptors into Rust
//! source implementing those types and their binary codecs, together with the
//! static runtime the generated code depends on.
//!
//! ## Features
//!
//! - **Closure-resolved emission** - Every type transitively referenced by a
//!   requested root is emitted exactly once
//! - **Per-kind rendering** - Aliases resolve to type references; enums,
//!   structs, and unions get declarations plus codec implementations
//! - **Backend profiles** - std and `no_std` targets from one engine,
//!   differing only in preamble imports and the shipped runtime bundle
//! - **Single-write assembly** - The module is assembled in memory and
//!   persisted in one write; a failed run leaves no partial output
//!
//! ## Quick Start
//!
//! ```
//! use ironxdr::prelude::*;
//!
//! let mut registry = TypeRegistry::new();
//! registry.add_type("Hash", TypeDescriptor::alias(TypeRef::Opaque { length: 32 }));
//! registry.add_constant("hashSize", 32);
//!
//! let request = GenerationRequest::new("xdr.rs");
//! let module = ironxdr::codegen::generate_module(&registry, &request).unwrap();
//! assert!(module.contains("pub type Hash = [u8; 32];"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`registry`] - Type descriptors, type expressions, registry, constants
//! - [`codegen`] - Closure resolution, emission, profiles, bundle install

pub mod prelude;

/// Type registry and descriptor model.
pub mod registry {
    pub use ironxdr_registry::*;
}

/// Code generation from type registries.
pub mod codegen {
    pub use ironxdr_codegen::*;
}

// Re-export commonly used items at the crate root
pub use ironxdr_codegen::{
    BackendProfile, CodegenError, GenerationRequest, Generator, RootSet, generate_into,
    generate_module, install_bundle,
};
pub use ironxdr_registry::{
    ConstantTable, RegistryError, TypeDescriptor, TypeKind, TypeRef, TypeRegistry,
};
