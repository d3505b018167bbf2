//! # IronXDR Codegen
//!
//! Dependency-closure resolution and Rust code emission for XDR type
//! registries.
//!
//! This crate provides:
//! - Closure resolution over type dependencies, each type emitted once
//! - Per-kind emission wrapping upstream declaration and codec fragments
//! - Constant emission and single-write module assembly
//! - Static runtime bundle installation per backend profile

pub mod bundle;
pub mod error;
pub mod generator;
pub mod profile;
pub mod request;
pub mod rust;

pub use bundle::install_bundle;
pub use error::CodegenError;
pub use generator::Generator;
pub use profile::{BackendProfile, BundleFile};
pub use request::{GENERATE_TYPES_VAR, GenerationRequest, MAIN_FILE_NAME_VAR, RootSet};

use std::path::{Path, PathBuf};

use ironxdr_registry::TypeRegistry;

/// Generates the output module text for a request.
///
/// # Arguments
/// * `registry` - Type registry and constant table
/// * `request` - Root set and output module name
///
/// # Returns
/// The assembled module source as a string.
///
/// # Errors
/// Returns `CodegenError` if a requested or referenced type is unknown.
pub fn generate_module(
    registry: &TypeRegistry,
    request: &GenerationRequest,
) -> Result<String, CodegenError> {
    Generator::new(registry).generate(request)
}

/// Runs a full generation: writes the module and installs the profile's
/// static bundle under `output_path`.
///
/// The bundle installation does not depend on resolution results.
///
/// # Arguments
/// * `registry` - Type registry and constant table
/// * `request` - Root set and output module name
/// * `profile` - Backend profile selecting preamble and bundle
/// * `output_path` - Output directory, created if absent
///
/// # Returns
/// The path of the generated module file.
///
/// # Errors
/// Returns `CodegenError` if generation or any filesystem step fails.
pub fn generate_into(
    registry: &TypeRegistry,
    request: &GenerationRequest,
    profile: BackendProfile,
    output_path: &Path,
) -> Result<PathBuf, CodegenError> {
    let generator = Generator::with_profile(registry, profile);
    let destination = generator.write(request, output_path)?;
    install_bundle(profile, output_path)?;
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironxdr_registry::{TypeDescriptor, TypeRef};

    #[test]
    fn test_generate_into_produces_module_and_bundle() {
        let mut registry = TypeRegistry::new();
        registry.add_type("Hash", TypeDescriptor::alias(TypeRef::Opaque { length: 32 }));
        registry.add_constant("hashSize", 32);

        let request = GenerationRequest::new("xdr.rs");
        let dir = tempfile::tempdir().unwrap();

        let destination =
            generate_into(&registry, &request, BackendProfile::NoStd, dir.path()).unwrap();

        let module = std::fs::read_to_string(destination).unwrap();
        assert!(module.contains("pub const HASH_SIZE: i32 = 32;"));
        assert!(module.contains("pub type Hash = [u8; 32];"));
        assert!(dir.path().join("xdr_codec.rs").exists());
        assert!(dir.path().join("streams.rs").exists());
        assert!(dir.path().join("compound_types.rs").exists());
        assert!(dir.path().join("lib.rs").exists());
    }
}
