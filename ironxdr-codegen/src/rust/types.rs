//! Per-type code emission.
//!
//! Renders one descriptor into its source fragment: a type-alias line for
//! non-aggregate kinds, or the declaration plus a codec implementation block
//! for enums, structs, and unions.

use ironxdr_registry::{TypeDescriptor, TypeKind};

use crate::error::CodegenError;

/// Renders the source fragment for one type.
///
/// # Errors
/// Returns `CodegenError::MissingTarget` for an alias descriptor whose target
/// reference cannot be resolved.
pub fn emit_type(name: &str, descriptor: &TypeDescriptor) -> Result<String, CodegenError> {
    match descriptor.kind() {
        TypeKind::Alias => emit_alias(name, descriptor),
        TypeKind::Enum | TypeKind::Struct | TypeKind::Union => Ok(emit_aggregate(name, descriptor)),
    }
}

/// Emits a type-alias declaration. Aliases never get a codec block: codec
/// behavior is inherited from the aliased type.
fn emit_alias(name: &str, descriptor: &TypeDescriptor) -> Result<String, CodegenError> {
    let target = descriptor
        .target_reference()
        .ok_or_else(|| CodegenError::missing_target(name))?;
    Ok(format!("#[allow(dead_code)]\npub type {name} = {target};\n\n"))
}

/// Capability tags derivable for each aggregate kind. Enums are always
/// representable as small scalar discriminants and additionally get `Copy`.
fn derive_clause(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Enum => "Debug, Copy, Clone, Eq, PartialEq",
        _ => "Debug, Clone, Eq, PartialEq",
    }
}

/// Emits the declaration and the codec implementation block.
fn emit_aggregate(name: &str, descriptor: &TypeDescriptor) -> String {
    let mut output = String::new();
    output.push_str("#[allow(dead_code)]\n");
    output.push_str(&format!("#[derive({})]\n", derive_clause(descriptor.kind())));
    output.push_str(descriptor.declaration());
    output.push('\n');
    output.push_str(&format!(
        "impl XdrCodec for {name} {{{}\n}}\n\n",
        descriptor.codec_body()
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironxdr_registry::TypeRef;

    #[test]
    fn test_alias_emits_type_line_only() {
        let descriptor = TypeDescriptor::alias(TypeRef::Opaque { length: 32 });
        let output = emit_type("Hash", &descriptor).unwrap();

        assert_eq!(output, "#[allow(dead_code)]\npub type Hash = [u8; 32];\n\n");
        assert!(!output.contains("impl XdrCodec"));
    }

    #[test]
    fn test_enum_derives_include_copy() {
        let descriptor = TypeDescriptor::aggregate(
            TypeKind::Enum,
            "pub enum MemoType {\n    None = 0,\n    Text = 1,\n}",
            "\n    fn to_xdr_buffered(&self, write_stream: &mut WriteStream) -> Result<(), WriteStreamError> {\n        write_stream.write_next_i32(*self as i32);\n        Ok(())\n    }",
            vec![],
        );
        let output = emit_type("MemoType", &descriptor).unwrap();

        assert!(output.contains("#[derive(Debug, Copy, Clone, Eq, PartialEq)]"));
        assert!(output.contains("pub enum MemoType {"));
        assert!(output.contains("impl XdrCodec for MemoType {"));
        assert!(output.contains("write_next_i32"));
    }

    #[test]
    fn test_struct_derives_exclude_copy() {
        let descriptor = TypeDescriptor::aggregate(
            TypeKind::Struct,
            "pub struct Price {\n    pub n: i32,\n    pub d: i32,\n}",
            "",
            vec![],
        );
        let output = emit_type("Price", &descriptor).unwrap();

        assert!(output.contains("#[derive(Debug, Clone, Eq, PartialEq)]"));
        assert!(!output.contains("Copy"));
    }

    #[test]
    fn test_union_derives_match_struct() {
        let descriptor = TypeDescriptor::aggregate(
            TypeKind::Union,
            "pub enum Memo {\n    None,\n    Text(LimitedString<28>),\n}",
            "",
            vec![TypeRef::String { limit: Some(28) }],
        );
        let output = emit_type("Memo", &descriptor).unwrap();

        assert!(output.contains("#[derive(Debug, Clone, Eq, PartialEq)]"));
        assert!(output.contains("impl XdrCodec for Memo {"));
    }

    #[test]
    fn test_codec_body_wrapped_under_trait_header() {
        let descriptor = TypeDescriptor::aggregate(
            TypeKind::Struct,
            "pub struct Empty {}",
            "\n    // body",
            vec![],
        );
        let output = emit_type("Empty", &descriptor).unwrap();

        assert!(output.contains("impl XdrCodec for Empty {\n    // body\n}\n\n"));
    }
}
