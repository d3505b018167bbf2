//! Runtime support and generated types for XDR encoding and decoding.

pub mod compound_types;
pub mod streams;
pub mod xdr;
pub mod xdr_codec;
