//! Generation request configuration.
//!
//! The engine never reads the process environment itself; the environment is
//! consulted once, at the entry point, to build an explicit
//! [`GenerationRequest`] that is then passed by value.

use std::env;

use crate::error::CodegenError;

/// Environment variable holding the comma-separated explicit root set.
pub const GENERATE_TYPES_VAR: &str = "GENERATE_TYPES";

/// Environment variable naming the generated module file. Required.
pub const MAIN_FILE_NAME_VAR: &str = "MAIN_FILE_NAME";

/// Root set of type names a run starts from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RootSet {
    /// Every name in the registry, in registry order.
    #[default]
    All,
    /// An explicit list of names, expanded to their dependency closure.
    Explicit(Vec<String>),
}

/// Parameters of one generation run. Immutable during the run.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Root set to expand.
    pub roots: RootSet,
    /// File name of the generated module inside the output directory.
    pub main_file_name: String,
}

impl GenerationRequest {
    /// Creates a request generating every registered type.
    #[must_use]
    pub fn new(main_file_name: impl Into<String>) -> Self {
        Self {
            roots: RootSet::All,
            main_file_name: main_file_name.into(),
        }
    }

    /// Restricts the request to the closure of the given root names.
    #[must_use]
    pub fn with_roots(mut self, roots: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.roots = RootSet::Explicit(roots.into_iter().map(Into::into).collect());
        self
    }

    /// Builds a request from the process environment.
    ///
    /// `GENERATE_TYPES` restricts generation to the closure of the listed
    /// names (comma-separated, whitespace-trimmed, empty segments ignored);
    /// when absent, every registered type is generated.
    ///
    /// # Errors
    /// Returns `CodegenError::MissingConfiguration` if `MAIN_FILE_NAME` is
    /// unset, before any output is written.
    pub fn from_env() -> Result<Self, CodegenError> {
        let main_file_name = env::var(MAIN_FILE_NAME_VAR)
            .map_err(|_| CodegenError::missing_configuration(MAIN_FILE_NAME_VAR))?;

        let roots = match env::var(GENERATE_TYPES_VAR) {
            Ok(list) => RootSet::Explicit(
                list.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            Err(_) => RootSet::All,
        };

        Ok(Self {
            roots,
            main_file_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // from_env tests mutate process-global state and must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_from_env_requires_main_file_name() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::remove_var(MAIN_FILE_NAME_VAR);
            env::remove_var(GENERATE_TYPES_VAR);
        }

        let err = GenerationRequest::from_env().unwrap_err();
        assert!(matches!(err, CodegenError::MissingConfiguration { .. }));
        assert!(err.to_string().contains(MAIN_FILE_NAME_VAR));
    }

    #[test]
    fn test_from_env_defaults_to_all_roots() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::set_var(MAIN_FILE_NAME_VAR, "xdr.rs");
            env::remove_var(GENERATE_TYPES_VAR);
        }

        let request = GenerationRequest::from_env().unwrap();
        assert_eq!(request.main_file_name, "xdr.rs");
        assert_eq!(request.roots, RootSet::All);

        unsafe {
            env::remove_var(MAIN_FILE_NAME_VAR);
        }
    }

    #[test]
    fn test_from_env_parses_explicit_roots() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::set_var(MAIN_FILE_NAME_VAR, "xdr.rs");
            env::set_var(GENERATE_TYPES_VAR, " TransactionEnvelope ,Hash,, ");
        }

        let request = GenerationRequest::from_env().unwrap();
        assert_eq!(
            request.roots,
            RootSet::Explicit(vec![
                "TransactionEnvelope".to_string(),
                "Hash".to_string()
            ])
        );

        unsafe {
            env::remove_var(MAIN_FILE_NAME_VAR);
            env::remove_var(GENERATE_TYPES_VAR);
        }
    }

    #[test]
    fn test_with_roots_builder() {
        let request = GenerationRequest::new("xdr.rs").with_roots(["Hash", "Uint256"]);
        assert_eq!(
            request.roots,
            RootSet::Explicit(vec!["Hash".to_string(), "Uint256".to_string()])
        );
    }
}
