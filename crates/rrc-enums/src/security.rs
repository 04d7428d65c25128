//! Security algorithm configuration

use rrc_core::{EnumDescriptor, rrc_enum};

rrc_enum! {
    /// SecurityAlgorithmConfig
    pub enum SecurityAlgorithmCfgIntegrityProtAlgorithm = "security_algorithm_cfg_s::integrity_prot_algorithm_e_", ext = 0 {
        Eia0V920 = "eia0-v920",
        Eia1 = "eia1",
        Eia2 = "eia2",
        Eia3V1130 = "eia3-v1130",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
    numbers: u8 = [0, 1, 2, 3];
}

pub fn descriptors() -> Vec<EnumDescriptor> {
    vec![
        EnumDescriptor::numbered::<SecurityAlgorithmCfgIntegrityProtAlgorithm>(),
    ]
}
