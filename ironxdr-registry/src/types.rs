//! XDR type descriptors and type expressions.
//!
//! This module contains the data structures describing one named XDR type:
//! its structural kind, the pre-rendered declaration and codec fragments
//! produced upstream, and the type expressions it references directly.

use crate::error::RegistryError;

/// Structural kind of a registered XDR type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Alias or typedef-like form resolving to another type expression.
    Alias,
    /// Enumerated type with scalar discriminants.
    Enum,
    /// Record with named fields.
    Struct,
    /// Tagged union.
    Union,
}

impl TypeKind {
    /// Parses a kind from its upstream name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "alias" | "typedef" => Some(Self::Alias),
            "enum" => Some(Self::Enum),
            "struct" => Some(Self::Struct),
            "union" => Some(Self::Union),
            _ => None,
        }
    }

    /// Parses a kind name, rejecting anything outside the four known kinds.
    ///
    /// # Errors
    /// Returns `RegistryError::UnrecognizedKind` for unknown kind names.
    pub fn from_name(kind: &str, type_name: &str) -> Result<Self, RegistryError> {
        Self::parse(kind).ok_or_else(|| RegistryError::unrecognized_kind(kind, type_name))
    }

    /// Returns the canonical kind name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Alias => "alias",
            Self::Enum => "enum",
            Self::Struct => "struct",
            Self::Union => "union",
        }
    }

    /// Returns true for enum, struct, and union kinds.
    #[must_use]
    pub const fn is_aggregate(&self) -> bool {
        !matches!(self, Self::Alias)
    }
}

/// Structured XDR type expression.
///
/// Alias targets and field/arm types are carried in this form so that the
/// rendered Rust reference and the set of named types it mentions can both
/// be derived on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// Reference to a named registry type.
    Named(String),
    /// XDR `int`.
    Int,
    /// XDR `unsigned int`.
    UnsignedInt,
    /// XDR `hyper`.
    Hyper,
    /// XDR `unsigned hyper`.
    UnsignedHyper,
    /// XDR `bool`.
    Bool,
    /// Fixed-length opaque data.
    Opaque {
        /// Byte length.
        length: u32,
    },
    /// Variable-length opaque data.
    VarOpaque {
        /// Maximum byte length, unbounded if absent.
        limit: Option<i32>,
    },
    /// ASCII string.
    String {
        /// Maximum byte length, unbounded if absent.
        limit: Option<i32>,
    },
    /// Fixed-length array.
    Array {
        /// Element type.
        element: Box<TypeRef>,
        /// Element count.
        length: u32,
    },
    /// Variable-length array.
    VarArray {
        /// Element type.
        element: Box<TypeRef>,
        /// Maximum element count, unbounded if absent.
        limit: Option<i32>,
    },
    /// XDR optional (pointer).
    Optional {
        /// Wrapped type.
        element: Box<TypeRef>,
    },
    /// Heap indirection, used to break recursive layouts.
    Boxed {
        /// Wrapped type.
        element: Box<TypeRef>,
    },
}

impl TypeRef {
    /// Renders the Rust type reference for this expression.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Named(name) => name.clone(),
            Self::Int => "i32".to_string(),
            Self::UnsignedInt => "u32".to_string(),
            Self::Hyper => "i64".to_string(),
            Self::UnsignedHyper => "u64".to_string(),
            Self::Bool => "bool".to_string(),
            Self::Opaque { length } => format!("[u8; {length}]"),
            Self::VarOpaque { limit: Some(limit) } => format!("LimitedVarOpaque<{limit}>"),
            Self::VarOpaque { limit: None } => "UnlimitedVarOpaque".to_string(),
            Self::String { limit: Some(limit) } => format!("LimitedString<{limit}>"),
            Self::String { limit: None } => "UnlimitedString".to_string(),
            Self::Array { element, length } => format!("[{}; {length}]", element.render()),
            Self::VarArray {
                element,
                limit: Some(limit),
            } => format!("LimitedVarArray<{}, {limit}>", element.render()),
            Self::VarArray {
                element,
                limit: None,
            } => format!("UnlimitedVarArray<{}>", element.render()),
            Self::Optional { element } => format!("Option<{}>", element.render()),
            Self::Boxed { element } => format!("Box<{}>", element.render()),
        }
    }

    /// Appends the named types this expression mentions, outermost first.
    fn collect_named(&self, out: &mut Vec<String>) {
        match self {
            Self::Named(name) => out.push(name.clone()),
            Self::Array { element, .. }
            | Self::VarArray { element, .. }
            | Self::Optional { element }
            | Self::Boxed { element } => element.collect_named(out),
            _ => {}
        }
    }
}

/// Descriptor for one XDR type known to the registry.
///
/// Descriptors are produced and owned by the registry; the generation engine
/// only reads them.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    kind: TypeKind,
    declaration: String,
    codec_body: String,
    references: Vec<TypeRef>,
}

impl TypeDescriptor {
    /// Creates an alias descriptor resolving to the given target expression.
    #[must_use]
    pub fn alias(target: TypeRef) -> Self {
        Self {
            kind: TypeKind::Alias,
            declaration: String::new(),
            codec_body: String::new(),
            references: vec![target],
        }
    }

    /// Creates an aggregate (enum/struct/union) descriptor.
    ///
    /// `declaration` and `codec_body` are the raw fragments produced by the
    /// upstream per-kind generators; `references` lists the type expressions
    /// the declaration mentions directly (field types, union arm types).
    #[must_use]
    pub fn aggregate(
        kind: TypeKind,
        declaration: impl Into<String>,
        codec_body: impl Into<String>,
        references: Vec<TypeRef>,
    ) -> Self {
        debug_assert!(kind.is_aggregate());
        Self {
            kind,
            declaration: declaration.into(),
            codec_body: codec_body.into(),
            references,
        }
    }

    /// Returns the structural kind.
    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Returns the raw declaration fragment.
    #[must_use]
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// Returns the raw codec implementation body.
    #[must_use]
    pub fn codec_body(&self) -> &str {
        &self.codec_body
    }

    /// Returns the directly referenced type expressions.
    #[must_use]
    pub fn references(&self) -> &[TypeRef] {
        &self.references
    }

    /// Computes the names of registry types this descriptor references
    /// directly, in first-mention order without duplicates.
    #[must_use]
    pub fn dependencies(&self) -> Vec<String> {
        let mut mentioned = Vec::new();
        for reference in &self.references {
            reference.collect_named(&mut mentioned);
        }

        let mut result = Vec::with_capacity(mentioned.len());
        for name in mentioned {
            if !result.contains(&name) {
                result.push(name);
            }
        }
        result
    }

    /// Renders the target reference an alias resolves to.
    ///
    /// Returns `None` for aggregate kinds, which carry declarations rather
    /// than targets.
    #[must_use]
    pub fn target_reference(&self) -> Option<String> {
        match self.kind {
            TypeKind::Alias => self.references.first().map(TypeRef::render),
            _ => None,
        }
    }
}
