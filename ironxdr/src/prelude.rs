//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```
//! use ironxdr::prelude::*;
//! ```

// Registry types
pub use ironxdr_registry::{
    ConstantTable, RegistryError, TypeDescriptor, TypeKind, TypeRef, TypeRegistry,
    to_constant_case,
};

// Codegen types
pub use ironxdr_codegen::{
    BackendProfile, BundleFile, CodegenError, GenerationRequest, Generator, RootSet,
    generate_into, generate_module, install_bundle,
};
