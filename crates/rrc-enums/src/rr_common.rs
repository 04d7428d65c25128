//! Radio resource configuration common to all UEs in a cell
//!
//! PHICH, PRACH, PUCCH, PUSCH, power control and RACH parameters, UE timers and constants

use rrc_core::{EnumDescriptor, rrc_enum};

rrc_enum! {
    /// PHICH-Config
    pub enum PhichCfgPhichDur = "phich_cfg_s::phich_dur_e_" {
        Normal = "normal",
        Extended = "extended",
    }
}

rrc_enum! {
    /// PHICH-Config
    pub enum PhichCfgPhichRes = "phich_cfg_s::phich_res_e_" {
        OneSixth = "oneSixth",
        Half = "half",
        One = "one",
        Two = "two",
    }
    numbers: f32 = [0.16666667, 0.5, 1.0, 2.0] as ["1/6", "0.5", "1", "2"];
}

rrc_enum! {
    /// PLMN-IdentityInfo-r15
    pub enum PlmnIdInfoR15CellReservedForOperR15 = "plmn_id_info_r15_s::cell_reserved_for_oper_r15_e_" {
        Reserved = "reserved",
        NotReserved = "notReserved",
    }
}

rrc_enum! {
    /// PLMN-IdentityInfo-r15
    pub enum PlmnIdInfoR15CellReservedForOperCrsR15 = "plmn_id_info_r15_s::cell_reserved_for_oper_crs_r15_e_" {
        Reserved = "reserved",
        NotReserved = "notReserved",
    }
}

rrc_enum! {
    /// TDD-Config
    pub enum TddCfgSfAssign = "tdd_cfg_s::sf_assign_e_" {
        Sa0 = "sa0",
        Sa1 = "sa1",
        Sa2 = "sa2",
        Sa3 = "sa3",
        Sa4 = "sa4",
        Sa5 = "sa5",
        Sa6 = "sa6",
    }
    numbers: u8 = [0, 1, 2, 3, 4, 5, 6];
}

rrc_enum! {
    /// TDD-Config
    pub enum TddCfgSpecialSfPatterns = "tdd_cfg_s::special_sf_patterns_e_" {
        Ssp0 = "ssp0",
        Ssp1 = "ssp1",
        Ssp2 = "ssp2",
        Ssp3 = "ssp3",
        Ssp4 = "ssp4",
        Ssp5 = "ssp5",
        Ssp6 = "ssp6",
        Ssp7 = "ssp7",
        Ssp8 = "ssp8",
    }
    numbers: u8 = [0, 1, 2, 3, 4, 5, 6, 7, 8];
}

rrc_enum! {
    /// TDD-Config-v1130
    pub enum TddCfgV1130SpecialSfPatternsV1130 = "tdd_cfg_v1130_s::special_sf_patterns_v1130_e_" {
        Ssp7 = "ssp7",
        Ssp9 = "ssp9",
    }
    numbers: u8 = [7, 9];
}

rrc_enum! {
    /// PRACH-ParametersCE-r13
    pub enum PrachParamsCeR13PrachStartSfR13 = "prach_params_ce_r13_s::prach_start_sf_r13_e_" {
        Sf2 = "sf2",
        Sf4 = "sf4",
        Sf8 = "sf8",
        Sf16 = "sf16",
        Sf32 = "sf32",
        Sf64 = "sf64",
        Sf128 = "sf128",
        Sf256 = "sf256",
    }
    numbers: u16 = [2, 4, 8, 16, 32, 64, 128, 256];
}

rrc_enum! {
    /// PRACH-ParametersCE-r13
    pub enum PrachParamsCeR13MaxNumPreambAttemptCeR13 = "prach_params_ce_r13_s::max_num_preamb_attempt_ce_r13_e_" {
        N3 = "n3",
        N4 = "n4",
        N5 = "n5",
        N6 = "n6",
        N7 = "n7",
        N8 = "n8",
        N10 = "n10",
    }
    numbers: u8 = [3, 4, 5, 6, 7, 8, 10];
}

rrc_enum! {
    /// PRACH-ParametersCE-r13
    pub enum PrachParamsCeR13NumRepeatPerPreambAttemptR13 = "prach_params_ce_r13_s::num_repeat_per_preamb_attempt_r13_e_" {
        N1 = "n1",
        N2 = "n2",
        N4 = "n4",
        N8 = "n8",
        N16 = "n16",
        N32 = "n32",
        N64 = "n64",
        N128 = "n128",
    }
    numbers: u8 = [1, 2, 4, 8, 16, 32, 64, 128];
}

rrc_enum! {
    /// PRACH-ParametersCE-r13
    pub enum PrachParamsCeR13MpdcchNumRepeatRaR13 = "prach_params_ce_r13_s::mpdcch_num_repeat_ra_r13_e_" {
        R1 = "r1",
        R2 = "r2",
        R4 = "r4",
        R8 = "r8",
        R16 = "r16",
        R32 = "r32",
        R64 = "r64",
        R128 = "r128",
        R256 = "r256",
    }
    numbers: u16 = [1, 2, 4, 8, 16, 32, 64, 128, 256];
}

rrc_enum! {
    /// PRACH-ParametersCE-r13
    pub enum PrachParamsCeR13PrachHopCfgR13 = "prach_params_ce_r13_s::prach_hop_cfg_r13_e_" {
        On = "on",
        Off = "off",
    }
}

rrc_enum! {
    /// RACH-CE-LevelInfo-r13
    pub enum RachCeLevelInfoR13RaRespWinSizeR13 = "rach_ce_level_info_r13_s::ra_resp_win_size_r13_e_" {
        Sf20 = "sf20",
        Sf50 = "sf50",
        Sf80 = "sf80",
        Sf120 = "sf120",
        Sf180 = "sf180",
        Sf240 = "sf240",
        Sf320 = "sf320",
        Sf400 = "sf400",
    }
    numbers: u16 = [20, 50, 80, 120, 180, 240, 320, 400];
}

rrc_enum! {
    /// RACH-CE-LevelInfo-r13
    pub enum RachCeLevelInfoR13MacContentionResolutionTimerR13 = "rach_ce_level_info_r13_s::mac_contention_resolution_timer_r13_e_" {
        Sf80 = "sf80",
        Sf100 = "sf100",
        Sf120 = "sf120",
        Sf160 = "sf160",
        Sf200 = "sf200",
        Sf240 = "sf240",
        Sf480 = "sf480",
        Sf960 = "sf960",
    }
    numbers: u16 = [80, 100, 120, 160, 200, 240, 480, 960];
}

rrc_enum! {
    /// RACH-CE-LevelInfo-r13
    pub enum RachCeLevelInfoR13RarHopCfgR13 = "rach_ce_level_info_r13_s::rar_hop_cfg_r13_e_" {
        On = "on",
        Off = "off",
    }
}

rrc_enum! {
    /// RACH-CE-LevelInfo-r13
    pub enum EdtParamsR15EdtTbsR15 = "rach_ce_level_info_r13_s::edt_params_r15_s_::edt_tbs_r15_e_" {
        B328 = "b328",
        B408 = "b408",
        B504 = "b504",
        B600 = "b600",
        B712 = "b712",
        B808 = "b808",
        B936 = "b936",
        B1000or456 = "b1000or456",
    }
    numbers: u16 = [328, 408, 504, 600, 712, 808, 936, 1000];
}

rrc_enum! {
    /// RACH-CE-LevelInfo-r13
    pub enum EdtParamsR15MacContentionResolutionTimerR15 = "rach_ce_level_info_r13_s::edt_params_r15_s_::mac_contention_resolution_timer_r15_e_" {
        Sf240 = "sf240",
        Sf480 = "sf480",
        Sf960 = "sf960",
        Sf1920 = "sf1920",
        Sf3840 = "sf3840",
        Sf5760 = "sf5760",
        Sf7680 = "sf7680",
        Sf10240 = "sf10240",
    }
    numbers: u16 = [240, 480, 960, 1920, 3840, 5760, 7680, 10240];
}

rrc_enum! {
    /// DeltaFList-PUCCH
    pub enum DeltaFlistPucchDeltaFPucchFormat1 = "delta_flist_pucch_s::delta_f_pucch_format1_e_" {
        DeltaFMinus2 = "deltaF-2",
        DeltaF0 = "deltaF0",
        DeltaF2 = "deltaF2",
    }
    numbers: i8 = [-2, 0, 2];
}

rrc_enum! {
    /// DeltaFList-PUCCH
    pub enum DeltaFlistPucchDeltaFPucchFormat1B = "delta_flist_pucch_s::delta_f_pucch_format1b_e_" {
        DeltaF1 = "deltaF1",
        DeltaF3 = "deltaF3",
        DeltaF5 = "deltaF5",
    }
    numbers: u8 = [1, 3, 5];
}

rrc_enum! {
    /// DeltaFList-PUCCH
    pub enum DeltaFlistPucchDeltaFPucchFormat2 = "delta_flist_pucch_s::delta_f_pucch_format2_e_" {
        DeltaFMinus2 = "deltaF-2",
        DeltaF0 = "deltaF0",
        DeltaF1 = "deltaF1",
        DeltaF2 = "deltaF2",
    }
    numbers: i8 = [-2, 0, 1, 2];
}

rrc_enum! {
    /// DeltaFList-PUCCH
    pub enum DeltaFlistPucchDeltaFPucchFormat2A = "delta_flist_pucch_s::delta_f_pucch_format2a_e_" {
        DeltaFMinus2 = "deltaF-2",
        DeltaF0 = "deltaF0",
        DeltaF2 = "deltaF2",
    }
    numbers: i8 = [-2, 0, 2];
}

rrc_enum! {
    /// DeltaFList-PUCCH
    pub enum DeltaFlistPucchDeltaFPucchFormat2B = "delta_flist_pucch_s::delta_f_pucch_format2b_e_" {
        DeltaFMinus2 = "deltaF-2",
        DeltaF0 = "deltaF0",
        DeltaF2 = "deltaF2",
    }
    numbers: i8 = [-2, 0, 2];
}

rrc_enum! {
    /// DeltaFList-SPUCCH-r15
    pub enum SetupDeltaFSlotSpucchFormat1R15 = "delta_flist_spucch_r15_c::setup_s_::delta_f_slot_spucch_format1_r15_e_" {
        DeltaFMinus1 = "deltaF-1",
        DeltaF0 = "deltaF0",
        DeltaF1 = "deltaF1",
        DeltaF2 = "deltaF2",
        DeltaF3 = "deltaF3",
        DeltaF4 = "deltaF4",
        DeltaF5 = "deltaF5",
        DeltaF6 = "deltaF6",
    }
    numbers: i8 = [-1, 0, 1, 2, 3, 4, 5, 6];
}

rrc_enum! {
    /// DeltaFList-SPUCCH-r15
    pub enum SetupDeltaFSlotSpucchFormat1AR15 = "delta_flist_spucch_r15_c::setup_s_::delta_f_slot_spucch_format1a_r15_e_" {
        DeltaF1 = "deltaF1",
        DeltaF2 = "deltaF2",
        DeltaF3 = "deltaF3",
        DeltaF4 = "deltaF4",
        DeltaF5 = "deltaF5",
        DeltaF6 = "deltaF6",
        DeltaF7 = "deltaF7",
        DeltaF8 = "deltaF8",
    }
    numbers: u8 = [1, 2, 3, 4, 5, 6, 7, 8];
}

rrc_enum! {
    /// DeltaFList-SPUCCH-r15
    pub enum SetupDeltaFSlotSpucchFormat1BR15 = "delta_flist_spucch_r15_c::setup_s_::delta_f_slot_spucch_format1b_r15_e_" {
        DeltaF3 = "deltaF3",
        DeltaF4 = "deltaF4",
        DeltaF5 = "deltaF5",
        DeltaF6 = "deltaF6",
        DeltaF7 = "deltaF7",
        DeltaF8 = "deltaF8",
        DeltaF9 = "deltaF9",
        DeltaF10 = "deltaF10",
    }
    numbers: u8 = [3, 4, 5, 6, 7, 8, 9, 10];
}

rrc_enum! {
    /// DeltaFList-SPUCCH-r15
    pub enum SetupDeltaFSlotSpucchFormat3R15 = "delta_flist_spucch_r15_c::setup_s_::delta_f_slot_spucch_format3_r15_e_" {
        DeltaF4 = "deltaF4",
        DeltaF5 = "deltaF5",
        DeltaF6 = "deltaF6",
        DeltaF7 = "deltaF7",
        DeltaF8 = "deltaF8",
        DeltaF9 = "deltaF9",
        DeltaF10 = "deltaF10",
        DeltaF11 = "deltaF11",
    }
    numbers: u8 = [4, 5, 6, 7, 8, 9, 10, 11];
}

rrc_enum! {
    /// DeltaFList-SPUCCH-r15
    pub enum SetupDeltaFSlotSpucchRmFormat4R15 = "delta_flist_spucch_r15_c::setup_s_::delta_f_slot_spucch_rm_format4_r15_e_" {
        DeltaF13 = "deltaF13",
        DeltaF14 = "deltaF14",
        DeltaF15 = "deltaF15",
        DeltaF16 = "deltaF16",
        DeltaF17 = "deltaF17",
        DeltaF18 = "deltaF18",
        DeltaF19 = "deltaF19",
        DeltaF20 = "deltaF20",
    }
    numbers: u8 = [13, 14, 15, 16, 17, 18, 19, 20];
}

rrc_enum! {
    /// DeltaFList-SPUCCH-r15
    pub enum SetupDeltaFSlotSpucchTbccFormat4R15 = "delta_flist_spucch_r15_c::setup_s_::delta_f_slot_spucch_tbcc_format4_r15_e_" {
        DeltaF10 = "deltaF10",
        DeltaF11 = "deltaF11",
        DeltaF12 = "deltaF12",
        DeltaF13 = "deltaF13",
        DeltaF14 = "deltaF14",
        DeltaF15 = "deltaF15",
        DeltaF16 = "deltaF16",
        DeltaF17 = "deltaF17",
    }
    numbers: u8 = [10, 11, 12, 13, 14, 15, 16, 17];
}

rrc_enum! {
    /// DeltaFList-SPUCCH-r15
    pub enum SetupDeltaFSubslotSpucchFormat1And1AR15 = "delta_flist_spucch_r15_c::setup_s_::delta_f_subslot_spucch_format1and1a_r15_e_" {
        DeltaF5 = "deltaF5",
        DeltaF6 = "deltaF6",
        DeltaF7 = "deltaF7",
        DeltaF8 = "deltaF8",
        DeltaF9 = "deltaF9",
        DeltaF10 = "deltaF10",
        DeltaF11 = "deltaF11",
        DeltaF12 = "deltaF12",
    }
    numbers: u8 = [5, 6, 7, 8, 9, 10, 11, 12];
}

rrc_enum! {
    /// DeltaFList-SPUCCH-r15
    pub enum SetupDeltaFSubslotSpucchFormat1BR15 = "delta_flist_spucch_r15_c::setup_s_::delta_f_subslot_spucch_format1b_r15_e_" {
        DeltaF6 = "deltaF6",
        DeltaF7 = "deltaF7",
        DeltaF8 = "deltaF8",
        DeltaF9 = "deltaF9",
        DeltaF10 = "deltaF10",
        DeltaF11 = "deltaF11",
        DeltaF12 = "deltaF12",
        DeltaF13 = "deltaF13",
    }
    numbers: u8 = [6, 7, 8, 9, 10, 11, 12, 13];
}

rrc_enum! {
    /// DeltaFList-SPUCCH-r15
    pub enum SetupDeltaFSubslotSpucchRmFormat4R15 = "delta_flist_spucch_r15_c::setup_s_::delta_f_subslot_spucch_rm_format4_r15_e_" {
        DeltaF15 = "deltaF15",
        DeltaF16 = "deltaF16",
        DeltaF17 = "deltaF17",
        DeltaF18 = "deltaF18",
        DeltaF19 = "deltaF19",
        DeltaF20 = "deltaF20",
        DeltaF21 = "deltaF21",
        DeltaF22 = "deltaF22",
    }
    numbers: u8 = [15, 16, 17, 18, 19, 20, 21, 22];
}

rrc_enum! {
    /// DeltaFList-SPUCCH-r15
    pub enum SetupDeltaFSubslotSpucchTbccFormat4R15 = "delta_flist_spucch_r15_c::setup_s_::delta_f_subslot_spucch_tbcc_format4_r15_e_" {
        DeltaF10 = "deltaF10",
        DeltaF11 = "deltaF11",
        DeltaF12 = "deltaF12",
        DeltaF13 = "deltaF13",
        DeltaF14 = "deltaF14",
        DeltaF15 = "deltaF15",
        DeltaF16 = "deltaF16",
        DeltaF17 = "deltaF17",
    }
    numbers: u8 = [10, 11, 12, 13, 14, 15, 16, 17];
}

rrc_enum! {
    /// EDT-PRACH-ParametersCE-r15
    pub enum EdtPrachParamsCeR15PrachStartSfR15 = "edt_prach_params_ce_r15_s::edt_prach_params_ce_r15_s_::prach_start_sf_r15_e_" {
        Sf2 = "sf2",
        Sf4 = "sf4",
        Sf8 = "sf8",
        Sf16 = "sf16",
        Sf32 = "sf32",
        Sf64 = "sf64",
        Sf128 = "sf128",
        Sf256 = "sf256",
    }
    numbers: u16 = [2, 4, 8, 16, 32, 64, 128, 256];
}

rrc_enum! {
    /// PowerRampingParameters
    pub enum PwrRampParamsPwrRampStep = "pwr_ramp_params_s::pwr_ramp_step_e_" {
        DB0 = "dB0",
        DB2 = "dB2",
        DB4 = "dB4",
        DB6 = "dB6",
    }
    numbers: u8 = [0, 2, 4, 6];
}

rrc_enum! {
    /// PowerRampingParameters
    pub enum PwrRampParamsPreambInitRxTargetPwr = "pwr_ramp_params_s::preamb_init_rx_target_pwr_e_" {
        DBmMinus120 = "dBm-120",
        DBmMinus118 = "dBm-118",
        DBmMinus116 = "dBm-116",
        DBmMinus114 = "dBm-114",
        DBmMinus112 = "dBm-112",
        DBmMinus110 = "dBm-110",
        DBmMinus108 = "dBm-108",
        DBmMinus106 = "dBm-106",
        DBmMinus104 = "dBm-104",
        DBmMinus102 = "dBm-102",
        DBmMinus100 = "dBm-100",
        DBmMinus98 = "dBm-98",
        DBmMinus96 = "dBm-96",
        DBmMinus94 = "dBm-94",
        DBmMinus92 = "dBm-92",
        DBmMinus90 = "dBm-90",
    }
    numbers: i8 = [-120, -118, -116, -114, -112, -110, -108, -106, -104, -102, -100, -98, -96, -94, -92, -90];
}

rrc_enum! {
    /// PreambleTransMax
    pub enum PreambTransMax = "preamb_trans_max_e" {
        N3 = "n3",
        N4 = "n4",
        N5 = "n5",
        N6 = "n6",
        N7 = "n7",
        N8 = "n8",
        N10 = "n10",
        N20 = "n20",
        N50 = "n50",
        N100 = "n100",
        N200 = "n200",
    }
    numbers: u8 = [3, 4, 5, 6, 7, 8, 10, 20, 50, 100, 200];
}

rrc_enum! {
    /// BCCH-Config
    pub enum BcchCfgModPeriodCoeff = "bcch_cfg_s::mod_period_coeff_e_" {
        N2 = "n2",
        N4 = "n4",
        N8 = "n8",
        N16 = "n16",
    }
    numbers: u8 = [2, 4, 8, 16];
}

rrc_enum! {
    /// FreqHoppingParameters-r13
    pub enum FreqHopParamsR13Dummy = "freq_hop_params_r13_s::dummy_e_" {
        Nb2 = "nb2",
        Nb4 = "nb4",
    }
    numbers: u8 = [2, 4];
}

rrc_enum! {
    /// FreqHoppingParameters-r13
    pub enum Dummy2IntervFddR13 = "freq_hop_params_r13_s::dummy2_c_::interv_fdd_r13_e_" {
        Int1 = "int1",
        Int2 = "int2",
        Int4 = "int4",
        Int8 = "int8",
    }
    numbers: u8 = [1, 2, 4, 8];
}

rrc_enum! {
    /// FreqHoppingParameters-r13
    pub enum Dummy2IntervTddR13 = "freq_hop_params_r13_s::dummy2_c_::interv_tdd_r13_e_" {
        Int1 = "int1",
        Int5 = "int5",
        Int10 = "int10",
        Int20 = "int20",
    }
    numbers: u8 = [1, 5, 10, 20];
}

rrc_enum! {
    /// FreqHoppingParameters-r13
    pub enum Dummy3IntervFddR13 = "freq_hop_params_r13_s::dummy3_c_::interv_fdd_r13_e_" {
        Int2 = "int2",
        Int4 = "int4",
        Int8 = "int8",
        Int16 = "int16",
    }
    numbers: u8 = [2, 4, 8, 16];
}

rrc_enum! {
    /// FreqHoppingParameters-r13
    pub enum Dummy3IntervTddR13 = "freq_hop_params_r13_s::dummy3_c_::interv_tdd_r13_e_" {
        Int5 = "int5",
        Int10 = "int10",
        Int20 = "int20",
        Int40 = "int40",
    }
    numbers: u8 = [5, 10, 20, 40];
}

rrc_enum! {
    /// FreqHoppingParameters-r13
    pub enum IntervUlHopCfgCommonModeAR13IntervFddR13 = "freq_hop_params_r13_s::interv_ul_hop_cfg_common_mode_a_r13_c_::interv_fdd_r13_e_" {
        Int1 = "int1",
        Int2 = "int2",
        Int4 = "int4",
        Int8 = "int8",
    }
    numbers: u8 = [1, 2, 4, 8];
}

rrc_enum! {
    /// FreqHoppingParameters-r13
    pub enum IntervUlHopCfgCommonModeAR13IntervTddR13 = "freq_hop_params_r13_s::interv_ul_hop_cfg_common_mode_a_r13_c_::interv_tdd_r13_e_" {
        Int1 = "int1",
        Int5 = "int5",
        Int10 = "int10",
        Int20 = "int20",
    }
    numbers: u8 = [1, 5, 10, 20];
}

rrc_enum! {
    /// FreqHoppingParameters-r13
    pub enum IntervUlHopCfgCommonModeBR13IntervFddR13 = "freq_hop_params_r13_s::interv_ul_hop_cfg_common_mode_b_r13_c_::interv_fdd_r13_e_" {
        Int2 = "int2",
        Int4 = "int4",
        Int8 = "int8",
        Int16 = "int16",
    }
    numbers: u8 = [2, 4, 8, 16];
}

rrc_enum! {
    /// FreqHoppingParameters-r13
    pub enum IntervUlHopCfgCommonModeBR13IntervTddR13 = "freq_hop_params_r13_s::interv_ul_hop_cfg_common_mode_b_r13_c_::interv_tdd_r13_e_" {
        Int5 = "int5",
        Int10 = "int10",
        Int20 = "int20",
        Int40 = "int40",
    }
    numbers: u8 = [5, 10, 20, 40];
}

rrc_enum! {
    /// PCCH-Config
    pub enum PcchCfgDefaultPagingCycle = "pcch_cfg_s::default_paging_cycle_e_" {
        Rf32 = "rf32",
        Rf64 = "rf64",
        Rf128 = "rf128",
        Rf256 = "rf256",
    }
    numbers: u16 = [32, 64, 128, 256];
}

rrc_enum! {
    /// PCCH-Config
    pub enum PcchCfgNb = "pcch_cfg_s::nb_e_" {
        FourT = "fourT",
        TwoT = "twoT",
        OneT = "oneT",
        HalfT = "halfT",
        QuarterT = "quarterT",
        OneEighthT = "oneEighthT",
        OneSixteenthT = "oneSixteenthT",
        OneThirtySecondT = "oneThirtySecondT",
    }
    numbers: f32 = [
        4.0, 2.0, 1.0, 0.5, 0.25, 0.125, 0.0625, 0.03125,
    ] as ["4", "2", "1", "0.5", "0.25", "1/8", "1/16", "1/32"];
}

rrc_enum! {
    /// PCCH-Config-v1310
    pub enum PcchCfgV1310MpdcchNumRepeatPagingR13 = "pcch_cfg_v1310_s::mpdcch_num_repeat_paging_r13_e_" {
        R1 = "r1",
        R2 = "r2",
        R4 = "r4",
        R8 = "r8",
        R16 = "r16",
        R32 = "r32",
        R64 = "r64",
        R128 = "r128",
        R256 = "r256",
    }
    numbers: u16 = [1, 2, 4, 8, 16, 32, 64, 128, 256];
}

rrc_enum! {
    /// PCCH-Config-v1310
    pub enum PcchCfgV1310NbV1310 = "pcch_cfg_v1310_s::nb_v1310_e_" {
        One64thT = "one64thT",
        One128thT = "one128thT",
        One256thT = "one256thT",
    }
    numbers: u16 = [64, 128, 256];
}

rrc_enum! {
    /// PDSCH-ConfigCommon-v1310
    pub enum PdschCfgCommonV1310PdschMaxNumRepeatCemodeAR13 = "pdsch_cfg_common_v1310_s::pdsch_max_num_repeat_cemode_a_r13_e_" {
        R16 = "r16",
        R32 = "r32",
    }
    numbers: u8 = [16, 32];
}

rrc_enum! {
    /// PDSCH-ConfigCommon-v1310
    pub enum PdschCfgCommonV1310PdschMaxNumRepeatCemodeBR13 = "pdsch_cfg_common_v1310_s::pdsch_max_num_repeat_cemode_b_r13_e_" {
        R192 = "r192",
        R256 = "r256",
        R384 = "r384",
        R512 = "r512",
        R768 = "r768",
        R1024 = "r1024",
        R1536 = "r1536",
        R2048 = "r2048",
    }
    numbers: u16 = [192, 256, 384, 512, 768, 1024, 1536, 2048];
}

rrc_enum! {
    /// PRACH-ConfigSIB-v1310
    pub enum MpdcchStartSfCssRaR13FddR13 = "prach_cfg_sib_v1310_s::mpdcch_start_sf_css_ra_r13_c_::fdd_r13_e_" {
        V1 = "v1",
        V1dot5 = "v1dot5",
        V2 = "v2",
        V2dot5 = "v2dot5",
        V4 = "v4",
        V5 = "v5",
        V8 = "v8",
        V10 = "v10",
    }
    numbers: f32 = [1.0, 1.5, 2.0, 2.5, 4.0, 5.0, 8.0, 10.0];
}

rrc_enum! {
    /// PRACH-ConfigSIB-v1310
    pub enum MpdcchStartSfCssRaR13TddR13 = "prach_cfg_sib_v1310_s::mpdcch_start_sf_css_ra_r13_c_::tdd_r13_e_" {
        V1 = "v1",
        V2 = "v2",
        V4 = "v4",
        V5 = "v5",
        V8 = "v8",
        V10 = "v10",
        V20 = "v20",
        Spare = "spare",
    }
    numbers: u8 = [1, 2, 4, 5, 8, 10, 20];
}

rrc_enum! {
    /// PUCCH-ConfigCommon
    pub enum PucchCfgCommonDeltaPucchShift = "pucch_cfg_common_s::delta_pucch_shift_e_" {
        Ds1 = "ds1",
        Ds2 = "ds2",
        Ds3 = "ds3",
    }
    numbers: u8 = [1, 2, 3];
}

rrc_enum! {
    /// PUCCH-ConfigCommon-v1310
    pub enum PucchCfgCommonV1310PucchNumRepeatCeMsg4Level0R13 = "pucch_cfg_common_v1310_s::pucch_num_repeat_ce_msg4_level0_r13_e_" {
        N1 = "n1",
        N2 = "n2",
        N4 = "n4",
        N8 = "n8",
    }
    numbers: u8 = [1, 2, 4, 8];
}

rrc_enum! {
    /// PUCCH-ConfigCommon-v1310
    pub enum PucchCfgCommonV1310PucchNumRepeatCeMsg4Level1R13 = "pucch_cfg_common_v1310_s::pucch_num_repeat_ce_msg4_level1_r13_e_" {
        N1 = "n1",
        N2 = "n2",
        N4 = "n4",
        N8 = "n8",
    }
    numbers: u8 = [1, 2, 4, 8];
}

rrc_enum! {
    /// PUCCH-ConfigCommon-v1310
    pub enum PucchCfgCommonV1310PucchNumRepeatCeMsg4Level2R13 = "pucch_cfg_common_v1310_s::pucch_num_repeat_ce_msg4_level2_r13_e_" {
        N4 = "n4",
        N8 = "n8",
        N16 = "n16",
        N32 = "n32",
    }
    numbers: u8 = [4, 8, 16, 32];
}

rrc_enum! {
    /// PUCCH-ConfigCommon-v1310
    pub enum PucchCfgCommonV1310PucchNumRepeatCeMsg4Level3R13 = "pucch_cfg_common_v1310_s::pucch_num_repeat_ce_msg4_level3_r13_e_" {
        N4 = "n4",
        N8 = "n8",
        N16 = "n16",
        N32 = "n32",
    }
    numbers: u8 = [4, 8, 16, 32];
}

rrc_enum! {
    /// PUCCH-ConfigCommon-v1430
    pub enum PucchCfgCommonV1430PucchNumRepeatCeMsg4Level3R14 = "pucch_cfg_common_v1430_s::pucch_num_repeat_ce_msg4_level3_r14_e_" {
        N64 = "n64",
        N128 = "n128",
    }
    numbers: u8 = [64, 128];
}

rrc_enum! {
    /// PUSCH-ConfigCommon
    pub enum PuschCfgBasicHopMode = "pusch_cfg_common_s::pusch_cfg_basic_s_::hop_mode_e_" {
        InterSubFrame = "interSubFrame",
        IntraAndInterSubFrame = "intraAndInterSubFrame",
    }
}

rrc_enum! {
    /// PUSCH-ConfigCommon-v1310
    pub enum PuschCfgCommonV1310PuschMaxNumRepeatCemodeAR13 = "pusch_cfg_common_v1310_s::pusch_max_num_repeat_cemode_a_r13_e_" {
        R8 = "r8",
        R16 = "r16",
        R32 = "r32",
    }
    numbers: u8 = [8, 16, 32];
}

rrc_enum! {
    /// PUSCH-ConfigCommon-v1310
    pub enum PuschCfgCommonV1310PuschMaxNumRepeatCemodeBR13 = "pusch_cfg_common_v1310_s::pusch_max_num_repeat_cemode_b_r13_e_" {
        R192 = "r192",
        R256 = "r256",
        R384 = "r384",
        R512 = "r512",
        R768 = "r768",
        R1024 = "r1024",
        R1536 = "r1536",
        R2048 = "r2048",
    }
    numbers: u16 = [192, 256, 384, 512, 768, 1024, 1536, 2048];
}

rrc_enum! {
    /// RACH-ConfigCommon
    pub enum PreambInfoNofRaPreambs = "rach_cfg_common_s::preamb_info_s_::nof_ra_preambs_e_" {
        N4 = "n4",
        N8 = "n8",
        N12 = "n12",
        N16 = "n16",
        N20 = "n20",
        N24 = "n24",
        N28 = "n28",
        N32 = "n32",
        N36 = "n36",
        N40 = "n40",
        N44 = "n44",
        N48 = "n48",
        N52 = "n52",
        N56 = "n56",
        N60 = "n60",
        N64 = "n64",
    }
    numbers: u8 = [4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48, 52, 56, 60, 64];
}

rrc_enum! {
    /// RACH-ConfigCommon
    pub enum PreambsGroupACfgSizeOfRaPreambsGroupA = "rach_cfg_common_s::preamb_info_s_::preambs_group_a_cfg_s_::size_of_ra_preambs_group_a_e_" {
        N4 = "n4",
        N8 = "n8",
        N12 = "n12",
        N16 = "n16",
        N20 = "n20",
        N24 = "n24",
        N28 = "n28",
        N32 = "n32",
        N36 = "n36",
        N40 = "n40",
        N44 = "n44",
        N48 = "n48",
        N52 = "n52",
        N56 = "n56",
        N60 = "n60",
    }
    numbers: u8 = [4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48, 52, 56, 60];
}

rrc_enum! {
    /// RACH-ConfigCommon
    pub enum PreambsGroupACfgMsgSizeGroupA = "rach_cfg_common_s::preamb_info_s_::preambs_group_a_cfg_s_::msg_size_group_a_e_" {
        B56 = "b56",
        B144 = "b144",
        B208 = "b208",
        B256 = "b256",
    }
    numbers: u16 = [56, 144, 208, 256];
}

rrc_enum! {
    /// RACH-ConfigCommon
    pub enum PreambsGroupACfgMsgPwrOffsetGroupB = "rach_cfg_common_s::preamb_info_s_::preambs_group_a_cfg_s_::msg_pwr_offset_group_b_e_" {
        MinusInfinity = "minusinfinity",
        DB0 = "dB0",
        DB5 = "dB5",
        DB8 = "dB8",
        DB10 = "dB10",
        DB12 = "dB12",
        DB15 = "dB15",
        DB18 = "dB18",
    }
    numbers: i8 = [-1, 0, 5, 8, 10, 12, 15, 18];
}

rrc_enum! {
    /// RACH-ConfigCommon
    pub enum RaSupervisionInfoRaRespWinSize = "rach_cfg_common_s::ra_supervision_info_s_::ra_resp_win_size_e_" {
        Sf2 = "sf2",
        Sf3 = "sf3",
        Sf4 = "sf4",
        Sf5 = "sf5",
        Sf6 = "sf6",
        Sf7 = "sf7",
        Sf8 = "sf8",
        Sf10 = "sf10",
    }
    numbers: u8 = [2, 3, 4, 5, 6, 7, 8, 10];
}

rrc_enum! {
    /// RACH-ConfigCommon
    pub enum RaSupervisionInfoMacContentionResolutionTimer = "rach_cfg_common_s::ra_supervision_info_s_::mac_contention_resolution_timer_e_" {
        Sf8 = "sf8",
        Sf16 = "sf16",
        Sf24 = "sf24",
        Sf32 = "sf32",
        Sf40 = "sf40",
        Sf48 = "sf48",
        Sf56 = "sf56",
        Sf64 = "sf64",
    }
    numbers: u8 = [8, 16, 24, 32, 40, 48, 56, 64];
}

rrc_enum! {
    /// RACH-ConfigCommon-v1250
    pub enum TxFailParamsR12ConnEstFailCountR12 = "rach_cfg_common_v1250_s::tx_fail_params_r12_s_::conn_est_fail_count_r12_e_" {
        N1 = "n1",
        N2 = "n2",
        N3 = "n3",
        N4 = "n4",
    }
    numbers: u8 = [1, 2, 3, 4];
}

rrc_enum! {
    /// RACH-ConfigCommon-v1250
    pub enum TxFailParamsR12ConnEstFailOffsetValidityR12 = "rach_cfg_common_v1250_s::tx_fail_params_r12_s_::conn_est_fail_offset_validity_r12_e_" {
        S30 = "s30",
        S60 = "s60",
        S120 = "s120",
        S240 = "s240",
        S300 = "s300",
        S420 = "s420",
        S600 = "s600",
        S900 = "s900",
    }
    numbers: u16 = [30, 60, 120, 240, 300, 420, 600, 900];
}

rrc_enum! {
    /// RSS-Config-r15
    pub enum RssCfgR15DurR15 = "rss_cfg_r15_s::dur_r15_e_" {
        Sf8 = "sf8",
        Sf16 = "sf16",
        Sf32 = "sf32",
        Sf40 = "sf40",
    }
    numbers: u8 = [8, 16, 32, 40];
}

rrc_enum! {
    /// RSS-Config-r15
    pub enum RssCfgR15PeriodicityR15 = "rss_cfg_r15_s::periodicity_r15_e_" {
        Ms160 = "ms160",
        Ms320 = "ms320",
        Ms640 = "ms640",
        Ms1280 = "ms1280",
    }
    numbers: u16 = [160, 320, 640, 1280];
}

rrc_enum! {
    /// RSS-Config-r15
    pub enum RssCfgR15PwrBoostR15 = "rss_cfg_r15_s::pwr_boost_r15_e_" {
        DB0 = "dB0",
        DB3 = "dB3",
        DB4dot8 = "dB4dot8",
        DB6 = "dB6",
    }
    numbers: f32 = [0.0, 3.0, 4.8, 6.0];
}

rrc_enum! {
    /// SoundingRS-UL-ConfigCommon
    pub enum SetupSrsBwCfg = "srs_ul_cfg_common_c::setup_s_::srs_bw_cfg_e_" {
        Bw0 = "bw0",
        Bw1 = "bw1",
        Bw2 = "bw2",
        Bw3 = "bw3",
        Bw4 = "bw4",
        Bw5 = "bw5",
        Bw6 = "bw6",
        Bw7 = "bw7",
    }
    numbers: u8 = [0, 1, 2, 3, 4, 5, 6, 7];
}

rrc_enum! {
    /// SoundingRS-UL-ConfigCommon
    pub enum SetupSrsSfCfg = "srs_ul_cfg_common_c::setup_s_::srs_sf_cfg_e_" {
        Sc0 = "sc0",
        Sc1 = "sc1",
        Sc2 = "sc2",
        Sc3 = "sc3",
        Sc4 = "sc4",
        Sc5 = "sc5",
        Sc6 = "sc6",
        Sc7 = "sc7",
        Sc8 = "sc8",
        Sc9 = "sc9",
        Sc10 = "sc10",
        Sc11 = "sc11",
        Sc12 = "sc12",
        Sc13 = "sc13",
        Sc14 = "sc14",
        Sc15 = "sc15",
    }
    numbers: u8 = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
}

rrc_enum! {
    /// UL-CyclicPrefixLength
    pub enum UlCpLen = "ul_cp_len_e" {
        Len1 = "len1",
        Len2 = "len2",
    }
    numbers: u8 = [1, 2];
}

rrc_enum! {
    /// UplinkPowerControlCommon-v1020
    pub enum UlPwrCtrlCommonV1020DeltaFPucchFormat3R10 = "ul_pwr_ctrl_common_v1020_s::delta_f_pucch_format3_r10_e_" {
        DeltaFMinus1 = "deltaF-1",
        DeltaF0 = "deltaF0",
        DeltaF1 = "deltaF1",
        DeltaF2 = "deltaF2",
        DeltaF3 = "deltaF3",
        DeltaF4 = "deltaF4",
        DeltaF5 = "deltaF5",
        DeltaF6 = "deltaF6",
    }
    numbers: i8 = [-1, 0, 1, 2, 3, 4, 5, 6];
}

rrc_enum! {
    /// UplinkPowerControlCommon-v1020
    pub enum UlPwrCtrlCommonV1020DeltaFPucchFormat1BCsR10 = "ul_pwr_ctrl_common_v1020_s::delta_f_pucch_format1b_cs_r10_e_" {
        DeltaF1 = "deltaF1",
        DeltaF2 = "deltaF2",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
    numbers: u8 = [1, 2];
}

rrc_enum! {
    /// WUS-Config-r15
    pub enum WusCfgR15MaxDurFactorR15 = "wus_cfg_r15_s::max_dur_factor_r15_e_" {
        One32th = "one32th",
        One16th = "one16th",
        One8th = "one8th",
        One4th = "one4th",
    }
    numbers: u8 = [32, 16, 8, 4];
}

rrc_enum! {
    /// WUS-Config-r15
    pub enum WusCfgR15NumPosR15 = "wus_cfg_r15_s::num_pos_r15_e_" {
        N1 = "n1",
        N2 = "n2",
        N4 = "n4",
        Spare1 = "spare1",
    }
    numbers: u8 = [1, 2, 4];
}

rrc_enum! {
    /// WUS-Config-r15
    pub enum WusCfgR15FreqLocationR15 = "wus_cfg_r15_s::freq_location_r15_e_" {
        N0 = "n0",
        N2 = "n2",
        N4 = "n4",
        Spare1 = "spare1",
    }
    numbers: u8 = [0, 2, 4];
}

rrc_enum! {
    /// WUS-Config-r15
    pub enum WusCfgR15TimeOffsetDrxR15 = "wus_cfg_r15_s::time_offset_drx_r15_e_" {
        Ms40 = "ms40",
        Ms80 = "ms80",
        Ms160 = "ms160",
        Ms240 = "ms240",
    }
    numbers: u8 = [40, 80, 160, 240];
}

rrc_enum! {
    /// WUS-Config-r15
    pub enum WusCfgR15TimeOffsetEDrxShortR15 = "wus_cfg_r15_s::time_offset_e_drx_short_r15_e_" {
        Ms40 = "ms40",
        Ms80 = "ms80",
        Ms160 = "ms160",
        Ms240 = "ms240",
    }
    numbers: u8 = [40, 80, 160, 240];
}

rrc_enum! {
    /// WUS-Config-r15
    pub enum WusCfgR15TimeOffsetEDrxLongR15 = "wus_cfg_r15_s::time_offset_e_drx_long_r15_e_" {
        Ms1000 = "ms1000",
        Ms2000 = "ms2000",
    }
    numbers: u16 = [1000, 2000];
}

rrc_enum! {
    /// WUS-Config-v1560
    pub enum WusCfgV1560PwrBoostR15 = "wus_cfg_v1560_s::pwr_boost_r15_e_" {
        DB0 = "dB0",
        DB1dot8 = "dB1dot8",
        DB3 = "dB3",
        DB4dot8 = "dB4dot8",
    }
    numbers: f32 = [0.0, 1.8, 3.0, 4.8];
}

rrc_enum! {
    /// TimeAlignmentTimer
    pub enum TimeAlignTimer = "time_align_timer_e" {
        Sf500 = "sf500",
        Sf750 = "sf750",
        Sf1280 = "sf1280",
        Sf1920 = "sf1920",
        Sf2560 = "sf2560",
        Sf5120 = "sf5120",
        Sf10240 = "sf10240",
        Infinity = "infinity",
    }
    numbers: i16 = [500, 750, 1280, 1920, 2560, 5120, 10240, -1];
}

rrc_enum! {
    /// AntennaInfoCommon
    pub enum AntInfoCommonAntPortsCount = "ant_info_common_s::ant_ports_count_e_" {
        An1 = "an1",
        An2 = "an2",
        An4 = "an4",
        Spare1 = "spare1",
    }
    numbers: u8 = [1, 2, 4];
}

rrc_enum! {
    /// UplinkPowerControlCommonSCell-v1310
    pub enum UlPwrCtrlCommonScellV1310DeltaFPucchFormat3R12 = "ul_pwr_ctrl_common_scell_v1310_s::delta_f_pucch_format3_r12_e_" {
        DeltaFMinus1 = "deltaF-1",
        DeltaF0 = "deltaF0",
        DeltaF1 = "deltaF1",
        DeltaF2 = "deltaF2",
        DeltaF3 = "deltaF3",
        DeltaF4 = "deltaF4",
        DeltaF5 = "deltaF5",
        DeltaF6 = "deltaF6",
    }
    numbers: i8 = [-1, 0, 1, 2, 3, 4, 5, 6];
}

rrc_enum! {
    /// UplinkPowerControlCommonSCell-v1310
    pub enum UlPwrCtrlCommonScellV1310DeltaFPucchFormat1BCsR12 = "ul_pwr_ctrl_common_scell_v1310_s::delta_f_pucch_format1b_cs_r12_e_" {
        DeltaF1 = "deltaF1",
        DeltaF2 = "deltaF2",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
    numbers: u8 = [1, 2];
}

rrc_enum! {
    /// UplinkPowerControlCommonSCell-v1310
    pub enum UlPwrCtrlCommonScellV1310DeltaFPucchFormat4R13 = "ul_pwr_ctrl_common_scell_v1310_s::delta_f_pucch_format4_r13_e_" {
        DeltaF16 = "deltaF16",
        DeltaF15 = "deltaF15",
        DeltaF14 = "deltaF14",
        DeltaF13 = "deltaF13",
        DeltaF12 = "deltaF12",
        DeltaF11 = "deltaF11",
        DeltaF10 = "deltaF10",
        Spare1 = "spare1",
    }
    numbers: u8 = [16, 15, 14, 13, 12, 11, 10];
}

rrc_enum! {
    /// UplinkPowerControlCommonSCell-v1310
    pub enum UlPwrCtrlCommonScellV1310DeltaFPucchFormat5R13 = "ul_pwr_ctrl_common_scell_v1310_s::delta_f_pucch_format5_minus13_e_" {
        DeltaF13 = "deltaF13",
        DeltaF12 = "deltaF12",
        DeltaF11 = "deltaF11",
        DeltaF10 = "deltaF10",
        DeltaF9 = "deltaF9",
        DeltaF8 = "deltaF8",
        DeltaF7 = "deltaF7",
        Spare1 = "spare1",
    }
    numbers: u8 = [13, 12, 11, 10, 9, 8, 7];
}

rrc_enum! {
    /// RadioResourceConfigCommonSCell-r10
    pub enum NonUlCfgR10DlBwR10 = "rr_cfg_common_scell_r10_s::non_ul_cfg_r10_s_::dl_bw_r10_e_" {
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
    /// RadioResourceConfigCommonSCell-r10
    pub enum UlFreqInfoR10UlBwR10 = "rr_cfg_common_scell_r10_s::ul_cfg_r10_s_::ul_freq_info_r10_s_::ul_bw_r10_e_" {
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
    /// RadioResourceConfigCommonSCell-r10
    pub enum UlFreqInfoR14UlBwR14 = "rr_cfg_common_scell_r10_s::ul_cfg_r14_s_::ul_freq_info_r14_s_::ul_bw_r14_e_" {
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
    /// RadioResourceConfigCommonSCell-r10
    pub enum RrCfgCommonScellR10HarqRefCfgR14 = "rr_cfg_common_scell_r10_s::harq_ref_cfg_r14_e_" {
        Sa2 = "sa2",
        Sa4 = "sa4",
        Sa5 = "sa5",
    }
    numbers: u8 = [2, 4, 5];
}

rrc_enum! {
    /// UplinkPowerControlCommon-v1310
    pub enum UlPwrCtrlCommonV1310DeltaFPucchFormat4R13 = "ul_pwr_ctrl_common_v1310_s::delta_f_pucch_format4_r13_e_" {
        DeltaF16 = "deltaF16",
        DeltaF15 = "deltaF15",
        DeltaF14 = "deltaF14",
        DeltaF13 = "deltaF13",
        DeltaF12 = "deltaF12",
        DeltaF11 = "deltaF11",
        DeltaF10 = "deltaF10",
        Spare1 = "spare1",
    }
    numbers: u8 = [16, 15, 14, 13, 12, 11, 10];
}

rrc_enum! {
    /// UplinkPowerControlCommon-v1310
    pub enum UlPwrCtrlCommonV1310DeltaFPucchFormat5R13 = "ul_pwr_ctrl_common_v1310_s::delta_f_pucch_format5_minus13_e_" {
        DeltaF13 = "deltaF13",
        DeltaF12 = "deltaF12",
        DeltaF11 = "deltaF11",
        DeltaF10 = "deltaF10",
        DeltaF9 = "deltaF9",
        DeltaF8 = "deltaF8",
        DeltaF7 = "deltaF7",
        Spare1 = "spare1",
    }
    numbers: u8 = [13, 12, 11, 10, 9, 8, 7];
}

rrc_enum! {
    /// PRACH-Config-v1310
    pub enum PrachCfgV1310MpdcchStartSfCssRaR13FddR13 = "prach_cfg_v1310_s::mpdcch_start_sf_css_ra_r13_c_::fdd_r13_e_" {
        V1 = "v1",
        V1dot5 = "v1dot5",
        V2 = "v2",
        V2dot5 = "v2dot5",
        V4 = "v4",
        V5 = "v5",
        V8 = "v8",
        V10 = "v10",
    }
    numbers: f32 = [1.0, 1.5, 2.0, 2.5, 4.0, 5.0, 8.0, 10.0];
}

rrc_enum! {
    /// PRACH-Config-v1310
    pub enum PrachCfgV1310MpdcchStartSfCssRaR13TddR13 = "prach_cfg_v1310_s::mpdcch_start_sf_css_ra_r13_c_::tdd_r13_e_" {
        V1 = "v1",
        V2 = "v2",
        V4 = "v4",
        V5 = "v5",
        V8 = "v8",
        V10 = "v10",
        V20 = "v20",
        Spare = "spare",
    }
    numbers: u8 = [1, 2, 4, 5, 8, 10, 20];
}

pub fn descriptors() -> Vec<EnumDescriptor> {
    vec![
        EnumDescriptor::of::<PhichCfgPhichDur>(),
        EnumDescriptor::numbered::<PhichCfgPhichRes>(),
        EnumDescriptor::of::<PlmnIdInfoR15CellReservedForOperR15>(),
        EnumDescriptor::of::<PlmnIdInfoR15CellReservedForOperCrsR15>(),
        EnumDescriptor::numbered::<TddCfgSfAssign>(),
        EnumDescriptor::numbered::<TddCfgSpecialSfPatterns>(),
        EnumDescriptor::numbered::<TddCfgV1130SpecialSfPatternsV1130>(),
        EnumDescriptor::numbered::<PrachParamsCeR13PrachStartSfR13>(),
        EnumDescriptor::numbered::<PrachParamsCeR13MaxNumPreambAttemptCeR13>(),
        EnumDescriptor::numbered::<PrachParamsCeR13NumRepeatPerPreambAttemptR13>(),
        EnumDescriptor::numbered::<PrachParamsCeR13MpdcchNumRepeatRaR13>(),
        EnumDescriptor::of::<PrachParamsCeR13PrachHopCfgR13>(),
        EnumDescriptor::numbered::<RachCeLevelInfoR13RaRespWinSizeR13>(),
        EnumDescriptor::numbered::<RachCeLevelInfoR13MacContentionResolutionTimerR13>(),
        EnumDescriptor::of::<RachCeLevelInfoR13RarHopCfgR13>(),
        EnumDescriptor::numbered::<EdtParamsR15EdtTbsR15>(),
        EnumDescriptor::numbered::<EdtParamsR15MacContentionResolutionTimerR15>(),
        EnumDescriptor::numbered::<DeltaFlistPucchDeltaFPucchFormat1>(),
        EnumDescriptor::numbered::<DeltaFlistPucchDeltaFPucchFormat1B>(),
        EnumDescriptor::numbered::<DeltaFlistPucchDeltaFPucchFormat2>(),
        EnumDescriptor::numbered::<DeltaFlistPucchDeltaFPucchFormat2A>(),
        EnumDescriptor::numbered::<DeltaFlistPucchDeltaFPucchFormat2B>(),
        EnumDescriptor::numbered::<SetupDeltaFSlotSpucchFormat1R15>(),
        EnumDescriptor::numbered::<SetupDeltaFSlotSpucchFormat1AR15>(),
        EnumDescriptor::numbered::<SetupDeltaFSlotSpucchFormat1BR15>(),
        EnumDescriptor::numbered::<SetupDeltaFSlotSpucchFormat3R15>(),
        EnumDescriptor::numbered::<SetupDeltaFSlotSpucchRmFormat4R15>(),
        EnumDescriptor::numbered::<SetupDeltaFSlotSpucchTbccFormat4R15>(),
        EnumDescriptor::numbered::<SetupDeltaFSubslotSpucchFormat1And1AR15>(),
        EnumDescriptor::numbered::<SetupDeltaFSubslotSpucchFormat1BR15>(),
        EnumDescriptor::numbered::<SetupDeltaFSubslotSpucchRmFormat4R15>(),
        EnumDescriptor::numbered::<SetupDeltaFSubslotSpucchTbccFormat4R15>(),
        EnumDescriptor::numbered::<EdtPrachParamsCeR15PrachStartSfR15>(),
        EnumDescriptor::numbered::<PwrRampParamsPwrRampStep>(),
        EnumDescriptor::numbered::<PwrRampParamsPreambInitRxTargetPwr>(),
        EnumDescriptor::numbered::<PreambTransMax>(),
        EnumDescriptor::numbered::<BcchCfgModPeriodCoeff>(),
        EnumDescriptor::numbered::<FreqHopParamsR13Dummy>(),
        EnumDescriptor::numbered::<Dummy2IntervFddR13>(),
        EnumDescriptor::numbered::<Dummy2IntervTddR13>(),
        EnumDescriptor::numbered::<Dummy3IntervFddR13>(),
        EnumDescriptor::numbered::<Dummy3IntervTddR13>(),
        EnumDescriptor::numbered::<IntervUlHopCfgCommonModeAR13IntervFddR13>(),
        EnumDescriptor::numbered::<IntervUlHopCfgCommonModeAR13IntervTddR13>(),
        EnumDescriptor::numbered::<IntervUlHopCfgCommonModeBR13IntervFddR13>(),
        EnumDescriptor::numbered::<IntervUlHopCfgCommonModeBR13IntervTddR13>(),
        EnumDescriptor::numbered::<PcchCfgDefaultPagingCycle>(),
        EnumDescriptor::numbered::<PcchCfgNb>(),
        EnumDescriptor::numbered::<PcchCfgV1310MpdcchNumRepeatPagingR13>(),
        EnumDescriptor::numbered::<PcchCfgV1310NbV1310>(),
        EnumDescriptor::numbered::<PdschCfgCommonV1310PdschMaxNumRepeatCemodeAR13>(),
        EnumDescriptor::numbered::<PdschCfgCommonV1310PdschMaxNumRepeatCemodeBR13>(),
        EnumDescriptor::numbered::<MpdcchStartSfCssRaR13FddR13>(),
        EnumDescriptor::numbered::<MpdcchStartSfCssRaR13TddR13>(),
        EnumDescriptor::numbered::<PucchCfgCommonDeltaPucchShift>(),
        EnumDescriptor::numbered::<PucchCfgCommonV1310PucchNumRepeatCeMsg4Level0R13>(),
        EnumDescriptor::numbered::<PucchCfgCommonV1310PucchNumRepeatCeMsg4Level1R13>(),
        EnumDescriptor::numbered::<PucchCfgCommonV1310PucchNumRepeatCeMsg4Level2R13>(),
        EnumDescriptor::numbered::<PucchCfgCommonV1310PucchNumRepeatCeMsg4Level3R13>(),
        EnumDescriptor::numbered::<PucchCfgCommonV1430PucchNumRepeatCeMsg4Level3R14>(),
        EnumDescriptor::of::<PuschCfgBasicHopMode>(),
        EnumDescriptor::numbered::<PuschCfgCommonV1310PuschMaxNumRepeatCemodeAR13>(),
        EnumDescriptor::numbered::<PuschCfgCommonV1310PuschMaxNumRepeatCemodeBR13>(),
        EnumDescriptor::numbered::<PreambInfoNofRaPreambs>(),
        EnumDescriptor::numbered::<PreambsGroupACfgSizeOfRaPreambsGroupA>(),
        EnumDescriptor::numbered::<PreambsGroupACfgMsgSizeGroupA>(),
        EnumDescriptor::numbered::<PreambsGroupACfgMsgPwrOffsetGroupB>(),
        EnumDescriptor::numbered::<RaSupervisionInfoRaRespWinSize>(),
        EnumDescriptor::numbered::<RaSupervisionInfoMacContentionResolutionTimer>(),
        EnumDescriptor::numbered::<TxFailParamsR12ConnEstFailCountR12>(),
        EnumDescriptor::numbered::<TxFailParamsR12ConnEstFailOffsetValidityR12>(),
        EnumDescriptor::numbered::<RssCfgR15DurR15>(),
        EnumDescriptor::numbered::<RssCfgR15PeriodicityR15>(),
        EnumDescriptor::numbered::<RssCfgR15PwrBoostR15>(),
        EnumDescriptor::numbered::<SetupSrsBwCfg>(),
        EnumDescriptor::numbered::<SetupSrsSfCfg>(),
        EnumDescriptor::numbered::<UlCpLen>(),
        EnumDescriptor::numbered::<UlPwrCtrlCommonV1020DeltaFPucchFormat3R10>(),
        EnumDescriptor::numbered::<UlPwrCtrlCommonV1020DeltaFPucchFormat1BCsR10>(),
        EnumDescriptor::numbered::<WusCfgR15MaxDurFactorR15>(),
        EnumDescriptor::numbered::<WusCfgR15NumPosR15>(),
        EnumDescriptor::numbered::<WusCfgR15FreqLocationR15>(),
        EnumDescriptor::numbered::<WusCfgR15TimeOffsetDrxR15>(),
        EnumDescriptor::numbered::<WusCfgR15TimeOffsetEDrxShortR15>(),
        EnumDescriptor::numbered::<WusCfgR15TimeOffsetEDrxLongR15>(),
        EnumDescriptor::numbered::<WusCfgV1560PwrBoostR15>(),
        EnumDescriptor::numbered::<TimeAlignTimer>(),
        EnumDescriptor::numbered::<AntInfoCommonAntPortsCount>(),
        EnumDescriptor::numbered::<UlPwrCtrlCommonScellV1310DeltaFPucchFormat3R12>(),
        EnumDescriptor::numbered::<UlPwrCtrlCommonScellV1310DeltaFPucchFormat1BCsR12>(),
        EnumDescriptor::numbered::<UlPwrCtrlCommonScellV1310DeltaFPucchFormat4R13>(),
        EnumDescriptor::numbered::<UlPwrCtrlCommonScellV1310DeltaFPucchFormat5R13>(),
        EnumDescriptor::numbered::<NonUlCfgR10DlBwR10>(),
        EnumDescriptor::numbered::<UlFreqInfoR10UlBwR10>(),
        EnumDescriptor::numbered::<UlFreqInfoR14UlBwR14>(),
        EnumDescriptor::numbered::<RrCfgCommonScellR10HarqRefCfgR14>(),
        EnumDescriptor::numbered::<UlPwrCtrlCommonV1310DeltaFPucchFormat4R13>(),
        EnumDescriptor::numbered::<UlPwrCtrlCommonV1310DeltaFPucchFormat5R13>(),
        EnumDescriptor::numbered::<PrachCfgV1310MpdcchStartSfCssRaR13FddR13>(),
        EnumDescriptor::numbered::<PrachCfgV1310MpdcchStartSfCssRaR13TddR13>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rrc_core::{EnumErr, Enumerated, RrcEnum, RrcEnumNumber, debug};

    #[test]
    fn test_phich_res_fraction_strings() {
        debug::setup_logging_verbose();
        assert_eq!(PhichCfgPhichRes::OneSixth.number_string(), "1/6");
        assert_eq!(PhichCfgPhichRes::Two.number(), 2.0);
        assert_eq!(PhichCfgPhichRes::from_number_string("0.5"), Some(PhichCfgPhichRes::Half));
        assert!((PhichCfgPhichRes::OneSixth.number() - 1.0 / 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_pcch_nb() {
        let nb = Enumerated::new(PcchCfgNb::OneThirtySecondT);
        assert_eq!(nb.to_str(), "oneThirtySecondT");
        assert_eq!(nb.to_number(), 0.03125);
        assert_eq!(nb.to_number_string(), "1/32");
        assert_eq!(PcchCfgNb::QuarterT.number_string(), "0.25");
    }

    #[test]
    fn test_signed_numbers() {
        assert_eq!(PwrRampParamsPreambInitRxTargetPwr::DBmMinus120.number(), -120);
        assert_eq!(PwrRampParamsPreambInitRxTargetPwr::DBmMinus120.to_string(), "dBm-120");
        assert_eq!(PreambsGroupACfgMsgPwrOffsetGroupB::MinusInfinity.number(), -1);
        assert_eq!(TimeAlignTimer::Infinity.number_string(), "-1");
        assert_eq!(TimeAlignTimer::from_number(10240), Some(TimeAlignTimer::Sf10240));
    }

    #[test]
    fn test_out_of_range_tag() {
        debug::setup_logging_verbose();
        let mut errs = Vec::new();
        let t = Enumerated::<TimeAlignTimer>::from_raw(TimeAlignTimer::NOF_TYPES + 3);
        assert_eq!(t.to_str_with(&mut |e: &EnumErr| errs.push(e.clone())), "");
        assert_eq!(t.to_number_with(&mut |e: &EnumErr| errs.push(e.clone())), 0);
        assert_eq!(errs.len(), 2);
        assert_eq!(
            errs[0].to_string(),
            "The enum value=11 of type time_align_timer_e is not valid (11>=8)"
        );
    }
}
