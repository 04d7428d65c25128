//! Paging message enumerations

use rrc_core::{EnumDescriptor, rrc_enum};

rrc_enum! {
    /// PagingRecord
    pub enum PagingRecordCnDomain = "paging_record_s::cn_domain_e_" {
        Ps = "ps",
        Cs = "cs",
    }
}

pub fn descriptors() -> Vec<EnumDescriptor> {
    vec![
        EnumDescriptor::of::<PagingRecordCnDomain>(),
    ]
}
