//! LTE RRC enumerations, grouped by the ASN.1 module that declares them
//!
//! Every type is declared through `rrc_core::rrc_enum!`, which provides the label table, the
//! optional number table and the conversions. The registry gives name-based access to all of
//! them for tooling.

pub mod asn1_common;
pub mod common;
pub mod common_ext;
pub mod dl_ccch_msg;
pub mod ho_cmd;
pub mod paging;
pub mod registry;
pub mod rr_common;
pub mod security;
pub mod si;
pub mod ul_ccch_msg;

pub use registry::{Registry, RegistryModule};
