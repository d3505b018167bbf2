//! Runtime support and generated types for XDR encoding and decoding.
//!
//! This crate is `no_std` and only requires `alloc`.

#![no_std]

extern crate alloc;

pub mod compound_types;
pub mod streams;
pub mod xdr;
pub mod xdr_codec;
