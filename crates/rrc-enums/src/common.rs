//! RRC common information elements shared by several messages
//!
//! PLMN identity info, CDMA2000 band classes, sidelink and WLAN quantities

use rrc_core::{EnumDescriptor, rrc_enum};

rrc_enum! {
    /// PLMN-IdentityInfo
    pub enum PlmnIdInfoCellReservedForOper = "plmn_id_info_s::cell_reserved_for_oper_e_" {
        Reserved = "reserved",
        NotReserved = "notReserved",
    }
}

rrc_enum! {
    /// Alpha-r12
    pub enum AlphaR12 = "alpha_r12_e" {
        Al0 = "al0",
        Al04 = "al04",
        Al05 = "al05",
        Al06 = "al06",
        Al07 = "al07",
        Al08 = "al08",
        Al09 = "al09",
        Al1 = "al1",
    }
    numbers: f32 = [0.0, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
}

rrc_enum! {
    /// BandclassCDMA2000
    pub enum BandclassCdma2000 = "bandclass_cdma2000_e", ext = 0 {
        Bc0 = "bc0",
        Bc1 = "bc1",
        Bc2 = "bc2",
        Bc3 = "bc3",
        Bc4 = "bc4",
        Bc5 = "bc5",
        Bc6 = "bc6",
        Bc7 = "bc7",
        Bc8 = "bc8",
        Bc9 = "bc9",
        Bc10 = "bc10",
        Bc11 = "bc11",
        Bc12 = "bc12",
        Bc13 = "bc13",
        Bc14 = "bc14",
        Bc15 = "bc15",
        Bc16 = "bc16",
        Bc17 = "bc17",
        Bc18V9a0 = "bc18-v9a0",
        Bc19V9a0 = "bc19-v9a0",
        Bc20V9a0 = "bc20-v9a0",
        Bc21V9a0 = "bc21-v9a0",
        Spare10 = "spare10",
        Spare9 = "spare9",
        Spare8 = "spare8",
        Spare7 = "spare7",
        Spare6 = "spare6",
        Spare5 = "spare5",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
    numbers: u8 = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21];
}

rrc_enum! {
    /// FilterCoefficient
    pub enum FiltCoef = "filt_coef_e", ext = 0 {
        Fc0 = "fc0",
        Fc1 = "fc1",
        Fc2 = "fc2",
        Fc3 = "fc3",
        Fc4 = "fc4",
        Fc5 = "fc5",
        Fc6 = "fc6",
        Fc7 = "fc7",
        Fc8 = "fc8",
        Fc9 = "fc9",
        Fc11 = "fc11",
        Fc13 = "fc13",
        Fc15 = "fc15",
        Fc17 = "fc17",
        Fc19 = "fc19",
        Spare1 = "spare1",
    }
    numbers: u8 = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 13, 15, 17, 19];
}

rrc_enum! {
    /// MBSFN-SubframeConfig
    pub enum MbsfnSfCfgRadioframeAllocPeriod = "mbsfn_sf_cfg_s::radioframe_alloc_period_e_" {
        N1 = "n1",
        N2 = "n2",
        N4 = "n4",
        N8 = "n8",
        N16 = "n16",
        N32 = "n32",
    }
    numbers: u8 = [1, 2, 4, 8, 16, 32];
}

rrc_enum! {
    /// CipheringAlgorithm-r12
    pub enum CipheringAlgorithmR12 = "ciphering_algorithm_r12_e", ext = 0 {
        Eea0 = "eea0",
        Eea1 = "eea1",
        Eea2 = "eea2",
        Eea3V1130 = "eea3-v1130",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
    numbers: u8 = [0, 1, 2, 3];
}

rrc_enum! {
    /// WLAN-BandIndicator-r13
    pub enum WlanBandIndR13 = "wlan_band_ind_r13_e", ext = 0 {
        Band2dot4 = "band2dot4",
        Band5 = "band5",
        Band60V1430 = "band60-v1430",
        Spare5 = "spare5",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
    numbers: f32 = [2.4, 5.0, 60.0];
}

pub fn descriptors() -> Vec<EnumDescriptor> {
    vec![
        EnumDescriptor::of::<PlmnIdInfoCellReservedForOper>(),
        EnumDescriptor::numbered::<AlphaR12>(),
        EnumDescriptor::numbered::<BandclassCdma2000>(),
        EnumDescriptor::numbered::<FiltCoef>(),
        EnumDescriptor::numbered::<MbsfnSfCfgRadioframeAllocPeriod>(),
        EnumDescriptor::numbered::<CipheringAlgorithmR12>(),
        EnumDescriptor::numbered::<WlanBandIndR13>(),
    ]
}
