//! Core utilities for the RRC enumeration layer
//!
//! This crate provides the generic machinery behind every RRC ASN.1 enumeration:
//! - RrcEnum / RrcEnumNumber traits and the `rrc_enum!` declaration macro
//! - Enumerated<E>, the raw-tag field type with `nulltype` support
//! - Label and number lookups that log and degrade instead of failing
//! - EnumDescriptor for runtime, name-based handling and table verification
//! - Logging setup

pub mod debug;
pub mod descriptor;
pub mod enum_err;
pub mod enum_macros;
pub mod enumerated;
pub mod number;

// Re-export commonly used items
pub use descriptor::EnumDescriptor;
pub use enum_err::{EnumErr, EnumErrSink, LogSink};
pub use enumerated::*;
pub use number::EnumNumber;
