//! Extension common information elements
//!
//! Mostly Rel-13 and later sidelink, V2X and WLAN parameters

use rrc_core::{EnumDescriptor, rrc_enum};

rrc_enum! {
    /// SL-PSSCH-TxParameters-r14
    pub enum SlPsschTxParamsR14AllowedRetxNumPsschR14 = "sl_pssch_tx_params_r14_s::allowed_retx_num_pssch_r14_e_" {
        N0 = "n0",
        N1 = "n1",
        Both = "both",
        Spare1 = "spare1",
    }
    numbers: u8 = [0, 1];
}

rrc_enum! {
    /// SL-RestrictResourceReservationPeriod-r14
    pub enum SlRestrictResReservPeriodR14 = "sl_restrict_res_reserv_period_r14_e" {
        V0dot2 = "v0dot2",
        V0dot5 = "v0dot5",
        V1 = "v1",
        V2 = "v2",
        V3 = "v3",
        V4 = "v4",
        V5 = "v5",
        V6 = "v6",
        V7 = "v7",
        V8 = "v8",
        V9 = "v9",
        V10 = "v10",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
    numbers: f32 = [0.2, 0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
}

rrc_enum! {
    /// SL-TypeTxSync-r14
    pub enum SlTypeTxSyncR14 = "sl_type_tx_sync_r14_e" {
        Gnss = "gnss",
        Enb = "enb",
        Ue = "ue",
    }
}

rrc_enum! {
    /// SL-CP-Len-r12
    pub enum SlCpLenR12 = "sl_cp_len_r12_e" {
        Normal = "normal",
        Extended = "extended",
    }
}

rrc_enum! {
    /// SL-PSSCH-TxConfig-r14
    pub enum SlPsschTxCfgR14ThresUeSpeedR14 = "sl_pssch_tx_cfg_r14_s::thres_ue_speed_r14_e_" {
        Kmph60 = "kmph60",
        Kmph80 = "kmph80",
        Kmph100 = "kmph100",
        Kmph120 = "kmph120",
        Kmph140 = "kmph140",
        Kmph160 = "kmph160",
        Kmph180 = "kmph180",
        Kmph200 = "kmph200",
    }
    numbers: u8 = [60, 80, 100, 120, 140, 160, 180, 200];
}

rrc_enum! {
    /// SL-CommResourcePoolV2X-r14
    pub enum SlCommResPoolV2XR14SizeSubchR14 = "sl_comm_res_pool_v2x_r14_s::size_subch_r14_e_" {
        N4 = "n4",
        N5 = "n5",
        N6 = "n6",
        N8 = "n8",
        N9 = "n9",
        N10 = "n10",
        N12 = "n12",
        N15 = "n15",
        N16 = "n16",
        N18 = "n18",
        N20 = "n20",
        N25 = "n25",
        N30 = "n30",
        N48 = "n48",
        N50 = "n50",
        N72 = "n72",
        N75 = "n75",
        N96 = "n96",
        N100 = "n100",
        Spare13 = "spare13",
        Spare12 = "spare12",
        Spare11 = "spare11",
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
    numbers: u8 = [4, 5, 6, 8, 9, 10, 12, 15, 16, 18, 20, 25, 30, 48, 50, 72, 75, 96, 100];
}

rrc_enum! {
    /// SL-CommResourcePoolV2X-r14
    pub enum SlCommResPoolV2XR14NumSubchR14 = "sl_comm_res_pool_v2x_r14_s::num_subch_r14_e_" {
        N1 = "n1",
        N3 = "n3",
        N5 = "n5",
        N8 = "n8",
        N10 = "n10",
        N15 = "n15",
        N20 = "n20",
        Spare1 = "spare1",
    }
    numbers: u8 = [1, 3, 5, 8, 10, 15, 20];
}

rrc_enum! {
    /// SL-SyncConfigNFreq-r13
    pub enum RxParamsR13DiscSyncWinR13 = "sl_sync_cfg_nfreq_r13_s::rx_params_r13_s_::disc_sync_win_r13_e_" {
        W1 = "w1",
        W2 = "w2",
    }
    numbers: u8 = [1, 2];
}

rrc_enum! {
    /// SL-CommTxPoolSensingConfig-r14
    pub enum SlCommTxPoolSensingCfgR14ProbResKeepR14 = "sl_comm_tx_pool_sensing_cfg_r14_s::prob_res_keep_r14_e_" {
        V0 = "v0",
        V0dot2 = "v0dot2",
        V0dot4 = "v0dot4",
        V0dot6 = "v0dot6",
        V0dot8 = "v0dot8",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
    numbers: f32 = [0.0, 0.2, 0.4, 0.6, 0.8];
}

rrc_enum! {
    /// SL-CommTxPoolSensingConfig-r14
    pub enum SlCommTxPoolSensingCfgR14SlReselectAfterR14 = "sl_comm_tx_pool_sensing_cfg_r14_s::sl_reselect_after_r14_e_" {
        N1 = "n1",
        N2 = "n2",
        N3 = "n3",
        N4 = "n4",
        N5 = "n5",
        N6 = "n6",
        N7 = "n7",
        N8 = "n8",
        N9 = "n9",
        Spare7 = "spare7",
        Spare6 = "spare6",
        Spare5 = "spare5",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
    numbers: u8 = [1, 2, 3, 4, 5, 6, 7, 8, 9];
}

rrc_enum! {
    /// SL-DiscResourcePool-r12
    pub enum SlDiscResPoolR12DiscPeriodR12 = "sl_disc_res_pool_r12_s::disc_period_r12_e_" {
        Rf32 = "rf32",
        Rf64 = "rf64",
        Rf128 = "rf128",
        Rf256 = "rf256",
        Rf512 = "rf512",
        Rf1024 = "rf1024",
        Rf16V1310 = "rf16-v1310",
        Spare = "spare",
    }
    numbers: u16 = [32, 64, 128, 256, 512, 1024, 16];
}

rrc_enum! {
    /// SL-DiscResourcePool-r12
    pub enum UeSelResCfgR12TxProbabilityR12 = "sl_disc_res_pool_r12_s::tx_params_r12_s_::ue_sel_res_cfg_r12_s_::tx_probability_r12_e_" {
        P25 = "p25",
        P50 = "p50",
        P75 = "p75",
        P100 = "p100",
    }
    numbers: u8 = [25, 50, 75, 100];
}

rrc_enum! {
    /// SL-DiscResourcePool-r12
    pub enum DiscPeriodV1310Setup = "sl_disc_res_pool_r12_s::disc_period_v1310_c_::setup_e_" {
        Rf4 = "rf4",
        Rf6 = "rf6",
        Rf7 = "rf7",
        Rf8 = "rf8",
        Rf12 = "rf12",
        Rf14 = "rf14",
        Rf24 = "rf24",
        Rf28 = "rf28",
    }
    numbers: u8 = [4, 6, 7, 8, 12, 14, 24, 28];
}

rrc_enum! {
    /// SL-DiscResourcePool-r12
    pub enum FreqInfoUlBw = "sl_disc_res_pool_r12_s::tx_params_add_neigh_freq_r13_c_::setup_s_::freq_info_s_::ul_bw_e_" {
        N6 = "n6",
        N15 = "n15",
        N25 = "n25",
        N50 = "n50",
        N75 = "n75",
        N100 = "n100",
    }
    numbers: u8 = [6, 15, 25, 50, 75, 100];
}

rrc_enum! {
    /// SL-ZoneConfig-r14
    pub enum SlZoneCfgR14ZoneLenR14 = "sl_zone_cfg_r14_s::zone_len_r14_e_" {
        M5 = "m5",
        M10 = "m10",
        M20 = "m20",
        M50 = "m50",
        M100 = "m100",
        M200 = "m200",
        M500 = "m500",
        Spare1 = "spare1",
    }
    numbers: u16 = [5, 10, 20, 50, 100, 200, 500];
}

rrc_enum! {
    /// SL-ZoneConfig-r14
    pub enum SlZoneCfgR14ZoneWidthR14 = "sl_zone_cfg_r14_s::zone_width_r14_e_" {
        M5 = "m5",
        M10 = "m10",
        M20 = "m20",
        M50 = "m50",
        M100 = "m100",
        M200 = "m200",
        M500 = "m500",
        Spare1 = "spare1",
    }
    numbers: u16 = [5, 10, 20, 50, 100, 200, 500];
}

rrc_enum! {
    /// PhysCellIdRange
    pub enum PciRangeRange = "pci_range_s::range_e_" {
        N4 = "n4",
        N8 = "n8",
        N12 = "n12",
        N16 = "n16",
        N24 = "n24",
        N32 = "n32",
        N48 = "n48",
        N64 = "n64",
        N84 = "n84",
        N96 = "n96",
        N128 = "n128",
        N168 = "n168",
        N252 = "n252",
        N504 = "n504",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
    numbers: u16 = [4, 8, 12, 16, 24, 32, 48, 64, 84, 96, 128, 168, 252, 504];
}

rrc_enum! {
    /// AllowedMeasBandwidth
    pub enum AllowedMeasBw = "allowed_meas_bw_e" {
        Mbw6 = "mbw6",
        Mbw15 = "mbw15",
        Mbw25 = "mbw25",
        Mbw50 = "mbw50",
        Mbw75 = "mbw75",
        Mbw100 = "mbw100",
    }
    numbers: u8 = [6, 15, 25, 50, 75, 100];
}

rrc_enum! {
    /// CellSelectionInfoNFreq-r13
    pub enum CellSelInfoNfreqR13QHystR13 = "cell_sel_info_nfreq_r13_s::q_hyst_r13_e_" {
        DB0 = "dB0",
        DB1 = "dB1",
        DB2 = "dB2",
        DB3 = "dB3",
        DB4 = "dB4",
        DB5 = "dB5",
        DB6 = "dB6",
        DB8 = "dB8",
        DB10 = "dB10",
        DB12 = "dB12",
        DB14 = "dB14",
        DB16 = "dB16",
        DB18 = "dB18",
        DB20 = "dB20",
        DB22 = "dB22",
        DB24 = "dB24",
    }
    numbers: u8 = [0, 1, 2, 3, 4, 5, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24];
}

rrc_enum! {
    /// MeasIdleCarrierEUTRA-r15
    pub enum MeasIdleCarrierEutraR15ReportQuantities = "meas_idle_carrier_eutra_r15_s::report_quantities_e_" {
        Rsrp = "rsrp",
        Rsrq = "rsrq",
        Both = "both",
    }
}

rrc_enum! {
    /// SL-HoppingConfigComm-r12
    pub enum SlHopCfgCommR12NumSubbandsR12 = "sl_hop_cfg_comm_r12_s::num_subbands_r12_e_" {
        Ns1 = "ns1",
        Ns2 = "ns2",
        Ns4 = "ns4",
    }
    numbers: u8 = [1, 2, 4];
}

rrc_enum! {
    /// SL-InterFreqInfoV2X-r14
    pub enum SlInterFreqInfoV2XR14SlBwR14 = "sl_inter_freq_info_v2x_r14_s::sl_bw_r14_e_" {
        N6 = "n6",
        N15 = "n15",
        N25 = "n25",
        N50 = "n50",
        N75 = "n75",
        N100 = "n100",
    }
    numbers: u8 = [6, 15, 25, 50, 75, 100];
}

rrc_enum! {
    /// SL-PeriodComm-r12
    pub enum SlPeriodCommR12 = "sl_period_comm_r12_e" {
        Sf40 = "sf40",
        Sf60 = "sf60",
        Sf70 = "sf70",
        Sf80 = "sf80",
        Sf120 = "sf120",
        Sf140 = "sf140",
        Sf160 = "sf160",
        Sf240 = "sf240",
        Sf280 = "sf280",
        Sf320 = "sf320",
        Spare6 = "spare6",
        Spare5 = "spare5",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare = "spare",
    }
    numbers: u16 = [40, 60, 70, 80, 120, 140, 160, 240, 280, 320];
}

rrc_enum! {
    /// SL-SyncConfig-r12
    pub enum RxParamsNcellR12DiscSyncWinR12 = "sl_sync_cfg_r12_s::rx_params_ncell_r12_s_::disc_sync_win_r12_e_" {
        W1 = "w1",
        W2 = "w2",
    }
    numbers: u8 = [1, 2];
}

rrc_enum! {
    /// WLAN-backhaulRate-r12
    pub enum WlanBackhaulRateR12 = "wlan_backhaul_rate_r12_e" {
        R0 = "r0",
        R4 = "r4",
        R8 = "r8",
        R16 = "r16",
        R32 = "r32",
        R64 = "r64",
        R128 = "r128",
        R256 = "r256",
        R512 = "r512",
        R1024 = "r1024",
        R2048 = "r2048",
        R4096 = "r4096",
        R8192 = "r8192",
        R16384 = "r16384",
        R32768 = "r32768",
        R65536 = "r65536",
        R131072 = "r131072",
        R262144 = "r262144",
        R524288 = "r524288",
        R1048576 = "r1048576",
        R2097152 = "r2097152",
        R4194304 = "r4194304",
        R8388608 = "r8388608",
        R16777216 = "r16777216",
        R33554432 = "r33554432",
        R67108864 = "r67108864",
        R134217728 = "r134217728",
        R268435456 = "r268435456",
        R536870912 = "r536870912",
        R1073741824 = "r1073741824",
        R2147483648 = "r2147483648",
        R4294967296 = "r4294967296",
    }
    numbers: u64 = [
        0, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768, 65536, 131072, 262144, 524288,
        1048576, 2097152, 4194304, 8388608, 16777216, 33554432, 67108864, 134217728, 268435456, 536870912, 1073741824,
        2147483648, 4294967296,
    ];
}

rrc_enum! {
    /// SL-GapPattern-r13
    pub enum SlGapPatternR13GapPeriodR13 = "sl_gap_pattern_r13_s::gap_period_r13_e_" {
        Sf40 = "sf40",
        Sf60 = "sf60",
        Sf70 = "sf70",
        Sf80 = "sf80",
        Sf120 = "sf120",
        Sf140 = "sf140",
        Sf160 = "sf160",
        Sf240 = "sf240",
        Sf280 = "sf280",
        Sf320 = "sf320",
        Sf640 = "sf640",
        Sf1280 = "sf1280",
        Sf2560 = "sf2560",
        Sf5120 = "sf5120",
        Sf10240 = "sf10240",
    }
    numbers: u16 = [40, 60, 70, 80, 120, 140, 160, 240, 280, 320, 640, 1280, 2560, 5120, 10240];
}

pub fn descriptors() -> Vec<EnumDescriptor> {
    vec![
        EnumDescriptor::numbered::<SlPsschTxParamsR14AllowedRetxNumPsschR14>(),
        EnumDescriptor::numbered::<SlRestrictResReservPeriodR14>(),
        EnumDescriptor::of::<SlTypeTxSyncR14>(),
        EnumDescriptor::of::<SlCpLenR12>(),
        EnumDescriptor::numbered::<SlPsschTxCfgR14ThresUeSpeedR14>(),
        EnumDescriptor::numbered::<SlCommResPoolV2XR14SizeSubchR14>(),
        EnumDescriptor::numbered::<SlCommResPoolV2XR14NumSubchR14>(),
        EnumDescriptor::numbered::<RxParamsR13DiscSyncWinR13>(),
        EnumDescriptor::numbered::<SlCommTxPoolSensingCfgR14ProbResKeepR14>(),
        EnumDescriptor::numbered::<SlCommTxPoolSensingCfgR14SlReselectAfterR14>(),
        EnumDescriptor::numbered::<SlDiscResPoolR12DiscPeriodR12>(),
        EnumDescriptor::numbered::<UeSelResCfgR12TxProbabilityR12>(),
        EnumDescriptor::numbered::<DiscPeriodV1310Setup>(),
        EnumDescriptor::numbered::<FreqInfoUlBw>(),
        EnumDescriptor::numbered::<SlZoneCfgR14ZoneLenR14>(),
        EnumDescriptor::numbered::<SlZoneCfgR14ZoneWidthR14>(),
        EnumDescriptor::numbered::<PciRangeRange>(),
        EnumDescriptor::numbered::<AllowedMeasBw>(),
        EnumDescriptor::numbered::<CellSelInfoNfreqR13QHystR13>(),
        EnumDescriptor::of::<MeasIdleCarrierEutraR15ReportQuantities>(),
        EnumDescriptor::numbered::<SlHopCfgCommR12NumSubbandsR12>(),
        EnumDescriptor::numbered::<SlInterFreqInfoV2XR14SlBwR14>(),
        EnumDescriptor::numbered::<SlPeriodCommR12>(),
        EnumDescriptor::numbered::<RxParamsNcellR12DiscSyncWinR12>(),
        EnumDescriptor::numbered::<WlanBackhaulRateR12>(),
        EnumDescriptor::numbered::<SlGapPatternR13GapPeriodR13>(),
    ]
}
