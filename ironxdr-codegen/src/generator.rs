//! Module generation: closure resolution and assembly.
//!
//! The generator expands a root set to the full set of types reachable via
//! dependency edges, emits each exactly once, and assembles the preamble,
//! the constant block, and the type blocks into a single output module.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use ironxdr_registry::TypeRegistry;

use crate::error::CodegenError;
use crate::profile::BackendProfile;
use crate::request::{GenerationRequest, RootSet};
use crate::rust::consts::ConstEmitter;
use crate::rust::types::emit_type;

/// Generator for one output module.
pub struct Generator<'a> {
    registry: &'a TypeRegistry,
    profile: BackendProfile,
}

impl<'a> Generator<'a> {
    /// Creates a generator for the default (std) backend profile.
    #[must_use]
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self::with_profile(registry, BackendProfile::default())
    }

    /// Creates a generator for an explicit backend profile.
    #[must_use]
    pub fn with_profile(registry: &'a TypeRegistry, profile: BackendProfile) -> Self {
        Self { registry, profile }
    }

    /// Generates the complete output module for the given request.
    ///
    /// Emission order is LIFO discovery order over the dependency worklist,
    /// not a topological sort; forward references between top-level items
    /// are legal in the generated Rust.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` when a requested or transitively
    /// referenced name has no registry entry. The whole run fails; no
    /// partial module is produced.
    pub fn generate(&self, request: &GenerationRequest) -> Result<String, CodegenError> {
        let mut output = String::from(self.profile.preamble());
        output.push_str(&ConstEmitter::new(self.registry.constants()).generate());

        let mut pending: Vec<String> = match &request.roots {
            RootSet::All => self.registry.names().map(str::to_string).collect(),
            RootSet::Explicit(names) => names.clone(),
        };
        let mut emitted: HashSet<String> = HashSet::new();

        while let Some(name) = pending.pop() {
            let descriptor = self
                .registry
                .get(&name)
                .ok_or_else(|| CodegenError::unknown_type(&name))?;

            output.push_str(&emit_type(&name, descriptor)?);
            debug!(type_name = %name, kind = descriptor.kind().as_str(), "emitted type");

            // Mark emitted before inspecting dependencies so that cyclic
            // references cannot re-queue the type being processed.
            emitted.insert(name);
            for dependency in descriptor.dependencies() {
                if !emitted.contains(&dependency) && !pending.contains(&dependency) {
                    pending.push(dependency);
                }
            }
        }

        Ok(output)
    }

    /// Generates the module and persists it under `output_path`.
    ///
    /// Assembly happens entirely in memory first; nothing is written if
    /// generation fails. The output directory is created if absent, and
    /// creating it again on a repeated run succeeds silently.
    ///
    /// # Errors
    /// Returns generation errors from [`Generator::generate`] and IO errors
    /// from directory creation or the file write.
    pub fn write(
        &self,
        request: &GenerationRequest,
        output_path: &Path,
    ) -> Result<PathBuf, CodegenError> {
        let module = self.generate(request)?;

        fs::create_dir_all(output_path)?;
        let destination = output_path.join(&request.main_file_name);
        fs::write(&destination, module)?;
        info!(destination = %destination.display(), "wrote generated module");

        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironxdr_registry::{TypeDescriptor, TypeKind, TypeRef};

    fn named(name: &str) -> TypeRef {
        TypeRef::Named(name.to_string())
    }

    fn enum_descriptor(name: &str) -> TypeDescriptor {
        TypeDescriptor::aggregate(
            TypeKind::Enum,
            format!("pub enum {name} {{\n    V0 = 0,\n}}"),
            "\n    // enum codec",
            vec![],
        )
    }

    fn struct_descriptor(name: &str, references: Vec<TypeRef>) -> TypeDescriptor {
        TypeDescriptor::aggregate(
            TypeKind::Struct,
            format!("pub struct {name} {{ /* fields */ }}"),
            "\n    // struct codec",
            references,
        )
    }

    /// A struct depending on an enum, plus an alias of the same enum that is
    /// only reachable when requested directly.
    fn scenario_registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.add_type("Alpha", struct_descriptor("Alpha", vec![named("Beta")]));
        registry.add_type("Beta", enum_descriptor("Beta"));
        registry.add_type("Gamma", TypeDescriptor::alias(named("Beta")));
        registry
    }

    fn emitted_names(output: &str) -> Vec<&str> {
        let mut names: Vec<&str> = output
            .match_indices("impl XdrCodec for ")
            .map(|(at, marker)| {
                let rest = &output[at + marker.len()..];
                rest.split_whitespace().next().unwrap()
            })
            .collect();
        for line in output.lines() {
            if let Some(rest) = line.strip_prefix("pub type ") {
                names.push(rest.split_whitespace().next().unwrap());
            }
        }
        names
    }

    #[test]
    fn test_closure_from_struct_root() {
        let registry = scenario_registry();
        let request = GenerationRequest::new("xdr.rs").with_roots(["Alpha"]);
        let output = Generator::new(&registry).generate(&request).unwrap();

        let names = emitted_names(&output);
        assert!(names.contains(&"Alpha"));
        assert!(names.contains(&"Beta"));
        assert!(!names.contains(&"Gamma"), "Gamma is not reachable from Alpha");
    }

    #[test]
    fn test_closure_from_alias_root() {
        let registry = scenario_registry();
        let request = GenerationRequest::new("xdr.rs").with_roots(["Gamma"]);
        let output = Generator::new(&registry).generate(&request).unwrap();

        assert!(output.contains("pub type Gamma = Beta;"));
        assert!(output.contains("impl XdrCodec for Beta {"));
        assert!(!output.contains("Alpha"));
    }

    #[test]
    fn test_no_duplicate_emission_on_diamond() {
        let mut registry = TypeRegistry::new();
        registry.add_type(
            "Root",
            struct_descriptor("Root", vec![named("Left"), named("Right")]),
        );
        registry.add_type("Left", struct_descriptor("Left", vec![named("Shared")]));
        registry.add_type("Right", struct_descriptor("Right", vec![named("Shared")]));
        registry.add_type("Shared", enum_descriptor("Shared"));

        let request = GenerationRequest::new("xdr.rs").with_roots(["Root"]);
        let output = Generator::new(&registry).generate(&request).unwrap();

        assert_eq!(output.matches("impl XdrCodec for Shared ").count(), 1);
        assert_eq!(emitted_names(&output).len(), 4);
    }

    #[test]
    fn test_lifo_discovery_order() {
        let registry = scenario_registry();
        let request = GenerationRequest::new("xdr.rs").with_roots(["Alpha", "Beta"]);
        let output = Generator::new(&registry).generate(&request).unwrap();

        // The last-pushed root is popped first.
        let beta = output.find("impl XdrCodec for Beta ").unwrap();
        let alpha = output.find("impl XdrCodec for Alpha ").unwrap();
        assert!(beta < alpha);
    }

    #[test]
    fn test_all_roots_cover_registry() {
        let registry = scenario_registry();
        let request = GenerationRequest::new("xdr.rs");
        let output = Generator::new(&registry).generate(&request).unwrap();

        let names = emitted_names(&output);
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_unknown_root_fails() {
        let registry = scenario_registry();
        let request = GenerationRequest::new("xdr.rs").with_roots(["Missing"]);
        let err = Generator::new(&registry).generate(&request).unwrap_err();

        assert!(matches!(err, CodegenError::UnknownType { ref name } if name == "Missing"));
    }

    #[test]
    fn test_unknown_transitive_reference_fails() {
        let mut registry = TypeRegistry::new();
        registry.add_type(
            "Outer",
            struct_descriptor("Outer", vec![named("Dangling")]),
        );

        let request = GenerationRequest::new("xdr.rs").with_roots(["Outer"]);
        let err = Generator::new(&registry).generate(&request).unwrap_err();

        assert!(matches!(err, CodegenError::UnknownType { ref name } if name == "Dangling"));
    }

    #[test]
    fn test_empty_explicit_roots_emit_constants_only() {
        let mut registry = scenario_registry();
        registry.add_constant("maxOps", 100);

        let request = GenerationRequest::new("xdr.rs").with_roots(Vec::<String>::new());
        let output = Generator::new(&registry).generate(&request).unwrap();

        let expected = format!(
            "{}{}",
            BackendProfile::Std.preamble(),
            ConstEmitter::new(registry.constants()).generate()
        );
        assert_eq!(output, expected);
        assert!(output.contains("pub const MAX_OPS: i32 = 100;"));
    }

    #[test]
    fn test_determinism_byte_identical_runs() {
        let mut registry = scenario_registry();
        registry.add_constant("FOO", 1);
        registry.add_constant("BAR", 2);

        let request = GenerationRequest::new("xdr.rs");
        let generator = Generator::new(&registry);
        assert_eq!(
            generator.generate(&request).unwrap(),
            generator.generate(&request).unwrap()
        );
    }

    #[test]
    fn test_self_referential_type_terminates() {
        let mut registry = TypeRegistry::new();
        registry.add_type(
            "Node",
            struct_descriptor(
                "Node",
                vec![TypeRef::Optional {
                    element: Box::new(TypeRef::Boxed {
                        element: Box::new(named("Node")),
                    }),
                }],
            ),
        );

        let request = GenerationRequest::new("xdr.rs").with_roots(["Node"]);
        let output = Generator::new(&registry).generate(&request).unwrap();

        assert_eq!(output.matches("impl XdrCodec for Node ").count(), 1);
    }

    #[test]
    fn test_mutual_cycle_terminates() {
        let mut registry = TypeRegistry::new();
        registry.add_type("Ping", struct_descriptor("Ping", vec![named("Pong")]));
        registry.add_type("Pong", struct_descriptor("Pong", vec![named("Ping")]));

        let request = GenerationRequest::new("xdr.rs").with_roots(["Ping"]);
        let output = Generator::new(&registry).generate(&request).unwrap();

        assert_eq!(output.matches("impl XdrCodec for Ping ").count(), 1);
        assert_eq!(output.matches("impl XdrCodec for Pong ").count(), 1);
    }

    #[test]
    fn test_profile_selects_preamble() {
        let registry = scenario_registry();
        let request = GenerationRequest::new("xdr.rs").with_roots(Vec::<String>::new());

        let no_std = Generator::with_profile(&registry, BackendProfile::NoStd)
            .generate(&request)
            .unwrap();
        assert!(no_std.starts_with(BackendProfile::NoStd.preamble()));
    }

    #[test]
    fn test_write_persists_module() {
        let registry = scenario_registry();
        let request = GenerationRequest::new("xdr.rs");
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("generated");

        let destination = Generator::new(&registry)
            .write(&request, &output_path)
            .unwrap();

        assert_eq!(destination, output_path.join("xdr.rs"));
        let written = fs::read_to_string(&destination).unwrap();
        assert!(written.starts_with(BackendProfile::Std.preamble()));
        assert!(written.contains("impl XdrCodec for Alpha "));
    }

    #[test]
    fn test_failed_run_writes_nothing() {
        let registry = scenario_registry();
        let request = GenerationRequest::new("xdr.rs").with_roots(["Missing"]);
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("generated");

        let err = Generator::new(&registry).write(&request, &output_path).unwrap_err();
        assert!(matches!(err, CodegenError::UnknownType { .. }));
        assert!(!output_path.exists(), "no partial output on failure");
    }

    #[test]
    fn test_write_is_repeatable() {
        let registry = scenario_registry();
        let request = GenerationRequest::new("xdr.rs");
        let dir = tempfile::tempdir().unwrap();

        let generator = Generator::new(&registry);
        let first = generator.write(&request, dir.path()).unwrap();
        let second = generator.write(&request, dir.path()).unwrap();
        assert_eq!(first, second);
    }
}
