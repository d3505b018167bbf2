//! Example generation run over a small hand-built registry.
//!
//! Run with: `cargo run --example generate`
//!
//! Writes the generated module and the std runtime bundle into
//! `target/generated-xdr/`.

use ironxdr::prelude::*;

fn build_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();

    registry.add_constant("maxOpsPerTx", 100);
    registry.add_constant("memoTextMaxSize", 28);

    registry.add_type("Hash", TypeDescriptor::alias(TypeRef::Opaque { length: 32 }));
    registry.add_type(
        "SequenceNumber",
        TypeDescriptor::alias(TypeRef::Hyper),
    );

    registry.add_type(
        "MemoType",
        TypeDescriptor::aggregate(
            TypeKind::Enum,
            "pub enum MemoType {\n    None = 0,\n    Text = 1,\n}",
            "\n    fn to_xdr_buffered(&self, write_stream: &mut WriteStream) -> Result<(), WriteStreamError> {\n        write_stream.write_next_i32(*self as i32);\n        Ok(())\n    }\n\n    fn from_xdr_buffered(read_stream: &mut ReadStream) -> Result<Self, ReadStreamError> {\n        match read_stream.read_next_i32()? {\n            0 => Ok(MemoType::None),\n            1 => Ok(MemoType::Text),\n            _ => Err(ReadStreamError::InvalidEnumDiscriminator {\n                at_position: read_stream.get_position(),\n            }),\n        }\n    }",
            vec![],
        ),
    );

    registry.add_type(
        "Memo",
        TypeDescriptor::aggregate(
            TypeKind::Union,
            "pub enum Memo {\n    None,\n    Text(LimitedString<28>),\n}",
            "\n    fn to_xdr_buffered(&self, write_stream: &mut WriteStream) -> Result<(), WriteStreamError> {\n        match self {\n            Memo::None => write_stream.write_next_i32(0),\n            Memo::Text(text) => {\n                write_stream.write_next_i32(1);\n                return text.to_xdr_buffered(write_stream);\n            }\n        }\n        Ok(())\n    }\n\n    fn from_xdr_buffered(read_stream: &mut ReadStream) -> Result<Self, ReadStreamError> {\n        match read_stream.read_next_i32()? {\n            0 => Ok(Memo::None),\n            1 => Ok(Memo::Text(LimitedString::from_xdr_buffered(read_stream)?)),\n            _ => Err(ReadStreamError::InvalidEnumDiscriminator {\n                at_position: read_stream.get_position(),\n            }),\n        }\n    }",
            vec![TypeRef::String { limit: Some(28) }, TypeRef::Named("MemoType".to_string())],
        ),
    );

    registry.add_type(
        "Transaction",
        TypeDescriptor::aggregate(
            TypeKind::Struct,
            "pub struct Transaction {\n    pub source: Hash,\n    pub seq_num: SequenceNumber,\n    pub memo: Memo,\n}",
            "\n    fn to_xdr_buffered(&self, write_stream: &mut WriteStream) -> Result<(), WriteStreamError> {\n        self.source.to_xdr_buffered(write_stream)?;\n        self.seq_num.to_xdr_buffered(write_stream)?;\n        self.memo.to_xdr_buffered(write_stream)\n    }\n\n    fn from_xdr_buffered(read_stream: &mut ReadStream) -> Result<Self, ReadStreamError> {\n        Ok(Transaction {\n            source: Hash::from_xdr_buffered(read_stream)?,\n            seq_num: SequenceNumber::from_xdr_buffered(read_stream)?,\n            memo: Memo::from_xdr_buffered(read_stream)?,\n        })\n    }",
            vec![
                TypeRef::Named("Hash".to_string()),
                TypeRef::Named("SequenceNumber".to_string()),
                TypeRef::Named("Memo".to_string()),
            ],
        ),
    );

    registry
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let registry = build_registry();
    let request = GenerationRequest::new("xdr.rs").with_roots(["Transaction"]);
    let output_path = std::path::Path::new("target/generated-xdr");

    let destination = generate_into(&registry, &request, BackendProfile::Std, output_path)?;
    println!("Generated module: {}", destination.display());
    for file in BackendProfile::Std.bundle() {
        println!("Installed: {}", output_path.join(file.path).display());
    }

    Ok(())
}
