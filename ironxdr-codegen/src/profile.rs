//! Backend profiles.
//!
//! A profile selects the runtime environment the generated code targets. The
//! two profiles differ only in preamble import text and in the static bundle
//! manifest; the generation algorithm is shared.

/// One file of a profile's static support bundle.
#[derive(Debug, Clone, Copy)]
pub struct BundleFile {
    /// Destination path relative to the output directory.
    pub path: &'static str,
    /// Embedded file contents.
    pub contents: &'static str,
}

/// Runtime environment targeted by the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendProfile {
    /// General-purpose profile for std environments.
    #[default]
    Std,
    /// Constrained profile for `no_std` + `alloc` environments.
    NoStd,
}

impl BackendProfile {
    /// Parses a profile from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "std" => Some(Self::Std),
            "no_std" | "no-std" | "nostd" => Some(Self::NoStd),
            _ => None,
        }
    }

    /// Returns the import preamble of the generated module.
    #[must_use]
    pub const fn preamble(&self) -> &'static str {
        match self {
            Self::Std => STD_PREAMBLE,
            Self::NoStd => NO_STD_PREAMBLE,
        }
    }

    /// Returns the static support files this profile ships.
    #[must_use]
    pub const fn bundle(&self) -> &'static [BundleFile] {
        match self {
            Self::Std => STD_BUNDLE,
            Self::NoStd => NO_STD_BUNDLE,
        }
    }
}

const STD_PREAMBLE: &str = "\
#[allow(unused_imports)]
use crate::xdr_codec::XdrCodec;
#[allow(unused_imports)]
use crate::streams::{ReadStream, ReadStreamError, WriteStream, WriteStreamError};
#[allow(unused_imports)]
use crate::compound_types::{LimitedVarOpaque, LimitedString, LimitedVarArray, UnlimitedVarOpaque, UnlimitedString, UnlimitedVarArray};

";

const NO_STD_PREAMBLE: &str = "\
#[allow(unused_imports)]
use alloc::boxed::Box;
#[allow(unused_imports)]
use crate::xdr_codec::XdrCodec;
#[allow(unused_imports)]
use crate::streams::{ReadStream, ReadStreamError, WriteStream, WriteStreamError};
#[allow(unused_imports)]
use crate::compound_types::{LimitedVarOpaque, LimitedString, LimitedVarArray, UnlimitedVarOpaque, UnlimitedString, UnlimitedVarArray};

";

const STD_BUNDLE: &[BundleFile] = &[
    BundleFile {
        path: "lib.rs",
        contents: include_str!("../templates/std/lib.rs"),
    },
    BundleFile {
        path: "xdr_codec.rs",
        contents: include_str!("../templates/std/xdr_codec.rs"),
    },
    BundleFile {
        path: "streams.rs",
        contents: include_str!("../templates/std/streams.rs"),
    },
    BundleFile {
        path: "compound_types.rs",
        contents: include_str!("../templates/std/compound_types.rs"),
    },
];

const NO_STD_BUNDLE: &[BundleFile] = &[
    BundleFile {
        path: "lib.rs",
        contents: include_str!("../templates/no_std/lib.rs"),
    },
    BundleFile {
        path: "xdr_codec.rs",
        contents: include_str!("../templates/no_std/xdr_codec.rs"),
    },
    BundleFile {
        path: "streams.rs",
        contents: include_str!("../templates/no_std/streams.rs"),
    },
    BundleFile {
        path: "compound_types.rs",
        contents: include_str!("../templates/no_std/compound_types.rs"),
    },
];
