//! System information enumerations (MIB, SIB1 and SIB2..SIB26)

use rrc_core::{EnumDescriptor, rrc_enum};

rrc_enum! {
    /// MasterInformationBlock
    pub enum MibDlBw = "mib_s::dl_bw_e_" {
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
    /// GNSS-ID-r15
    pub enum GnssIdR15 = "gnss_id_r15_s::gnss_id_r15_e_", ext = 1 {
        Gps = "gps",
        Sbas = "sbas",
        Qzss = "qzss",
        Galileo = "galileo",
        Glonass = "glonass",
        Bds = "bds",
        NavicV1610 = "navic-v1610",
    }
}

rrc_enum! {
    /// SBAS-ID-r15
    pub enum SbasIdR15 = "sbas_id_r15_s::sbas_id_r15_e_", ext = 0 {
        Waas = "waas",
        Egnos = "egnos",
        Msas = "msas",
        Gagan = "gagan",
    }
}

rrc_enum! {
    /// PosSIB-Type-r15
    pub enum PosSibTypeR15 = "pos_sib_type_r15_s::pos_sib_type_r15_e_", ext = 11 {
        PosSibType11 = "posSibType1-1",
        PosSibType12 = "posSibType1-2",
        PosSibType13 = "posSibType1-3",
        PosSibType14 = "posSibType1-4",
        PosSibType15 = "posSibType1-5",
        PosSibType16 = "posSibType1-6",
        PosSibType17 = "posSibType1-7",
        PosSibType21 = "posSibType2-1",
        PosSibType22 = "posSibType2-2",
        PosSibType23 = "posSibType2-3",
        PosSibType24 = "posSibType2-4",
        PosSibType25 = "posSibType2-5",
        PosSibType26 = "posSibType2-6",
        PosSibType27 = "posSibType2-7",
        PosSibType28 = "posSibType2-8",
        PosSibType29 = "posSibType2-9",
        PosSibType210 = "posSibType2-10",
        PosSibType211 = "posSibType2-11",
        PosSibType212 = "posSibType2-12",
        PosSibType213 = "posSibType2-13",
        PosSibType214 = "posSibType2-14",
        PosSibType215 = "posSibType2-15",
        PosSibType216 = "posSibType2-16",
        PosSibType217 = "posSibType2-17",
        PosSibType218 = "posSibType2-18",
        PosSibType219 = "posSibType2-19",
        PosSibType31 = "posSibType3-1",
        PosSibType18V1610 = "posSibType1-8-v1610",
        PosSibType220V1610 = "posSibType2-20-v1610",
        PosSibType221V1610 = "posSibType2-21-v1610",
        PosSibType222V1610 = "posSibType2-22-v1610",
        PosSibType223V1610 = "posSibType2-23-v1610",
        PosSibType224V1610 = "posSibType2-24-v1610",
        PosSibType225V1610 = "posSibType2-25-v1610",
        PosSibType41V1610 = "posSibType4-1-v1610",
        PosSibType51V1610 = "posSibType5-1-v1610",
        PosSibType19V1700 = "posSibType1-9-v1700",
        PosSibType110V1700 = "posSibType1-10-v1700",
    }
}

rrc_enum! {
    /// SystemInformationBlockType1-v1700-IEs
    pub enum CellAccessRelatedInfoNtnR17CellBarredNtnR17 = "sib_type1_v1700_ies_s::cell_access_related_info_ntn_r17_s_::cell_barred_ntn_r17_e_" {
        Barred = "barred",
        NotBarred = "notBarred",
    }
}

rrc_enum! {
    /// PLMN-IdentityInfo-v1530
    pub enum PlmnIdInfoV1530CellReservedForOperCrsR15 = "plmn_id_info_v1530_s::cell_reserved_for_oper_crs_r15_e_" {
        Reserved = "reserved",
        NotReserved = "notReserved",
    }
}

rrc_enum! {
    /// PosSchedulingInfo-r15
    pub enum PosSchedInfoR15PosSiPeriodicityR15 = "pos_sched_info_r15_s::pos_si_periodicity_r15_e_" {
        Rf8 = "rf8",
        Rf16 = "rf16",
        Rf32 = "rf32",
        Rf64 = "rf64",
        Rf128 = "rf128",
        Rf256 = "rf256",
        Rf512 = "rf512",
    }
    numbers: u16 = [8, 16, 32, 64, 128, 256, 512];
}

rrc_enum! {
    /// CellSelectionInfoCE-v1530
    pub enum CellSelInfoCeV1530PwrClass14DbmOffsetR15 = "cell_sel_info_ce_v1530_s::pwr_class14dbm_offset_r15_e_" {
        DBMinus6 = "dB-6",
        DBMinus3 = "dB-3",
        DB3 = "dB3",
        DB6 = "dB6",
        DB9 = "dB9",
        DB12 = "dB12",
    }
    numbers: i8 = [-6, -3, 3, 6, 9, 12];
}

rrc_enum! {
    /// SystemInformationBlockType1-v1530-IEs
    pub enum CrsIntfMitigCfgR15CrsIntfMitigNumPrbs = "sib_type1_v1530_ies_s::crs_intf_mitig_cfg_r15_c_::crs_intf_mitig_num_prbs_e_" {
        N6 = "n6",
        N24 = "n24",
    }
    numbers: u8 = [6, 24];
}

rrc_enum! {
    /// SystemInformationBlockType1-v1530-IEs
    pub enum SibType1V1530IesCellBarredCrsR15 = "sib_type1_v1530_ies_s::cell_barred_crs_r15_e_" {
        Barred = "barred",
        NotBarred = "notBarred",
    }
}

rrc_enum! {
    /// SystemInformationBlockType1-v1530-IEs
    pub enum CellAccessRelatedInfo5gcR15CellBarred5gcR15 = "sib_type1_v1530_ies_s::cell_access_related_info_minus5_gc_r15_s_::cell_barred_minus5_gc_r15_e_" {
        Barred = "barred",
        NotBarred = "notBarred",
    }
}

rrc_enum! {
    /// SystemInformationBlockType1-v1530-IEs
    pub enum CellAccessRelatedInfo5gcR15CellBarred5gcCrsR15 = "sib_type1_v1530_ies_s::cell_access_related_info_minus5_gc_r15_s_::cell_barred_minus5_gc_crs_r15_e_" {
        Barred = "barred",
        NotBarred = "notBarred",
    }
}

rrc_enum! {
    /// SchedulingInfo-BR-r13
    pub enum SchedInfoBrR13SiTbsR13 = "sched_info_br_r13_s::si_tbs_r13_e_" {
        B152 = "b152",
        B208 = "b208",
        B256 = "b256",
        B328 = "b328",
        B408 = "b408",
        B504 = "b504",
        B600 = "b600",
        B712 = "b712",
        B808 = "b808",
        B936 = "b936",
    }
    numbers: u16 = [152, 208, 256, 328, 408, 504, 600, 712, 808, 936];
}

rrc_enum! {
    /// BarringPerACDC-Category-r13
    pub enum AcdcBarrCfgR13AcBarrFactorR13 = "barr_per_acdc_category_r13_s::acdc_barr_cfg_r13_s_::ac_barr_factor_r13_e_" {
        P00 = "p00",
        P05 = "p05",
        P10 = "p10",
        P15 = "p15",
        P20 = "p20",
        P25 = "p25",
        P30 = "p30",
        P40 = "p40",
        P50 = "p50",
        P60 = "p60",
        P70 = "p70",
        P75 = "p75",
        P80 = "p80",
        P85 = "p85",
        P90 = "p90",
        P95 = "p95",
    }
    numbers: f32 = [
        0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 7.0, 7.5, 8.0, 8.5, 9.0, 9.5,
    ] as [
        "0.0", "0.5", "1.0", "1.5", "2.0", "2.5", "3.0", "4.0", "5.0", "6.0", "7.0", "7.5", "8.0", "8.5", "9.0", "9.5",
    ];
}

rrc_enum! {
    /// BarringPerACDC-Category-r13
    pub enum AcdcBarrCfgR13AcBarrTimeR13 = "barr_per_acdc_category_r13_s::acdc_barr_cfg_r13_s_::ac_barr_time_r13_e_" {
        S4 = "s4",
        S8 = "s8",
        S16 = "s16",
        S32 = "s32",
        S64 = "s64",
        S128 = "s128",
        S256 = "s256",
        S512 = "s512",
    }
    numbers: u16 = [4, 8, 16, 32, 64, 128, 256, 512];
}

rrc_enum! {
    /// SystemInformationBlockType1-v1320-IEs
    pub enum FreqHopParamsDlR13MpdcchPdschHopNbR13 = "sib_type1_v1320_ies_s::freq_hop_params_dl_r13_s_::mpdcch_pdsch_hop_nb_r13_e_" {
        Nb2 = "nb2",
        Nb4 = "nb4",
    }
    numbers: u8 = [2, 4];
}

rrc_enum! {
    /// SystemInformationBlockType1-v1320-IEs
    pub enum IntervDlHopCfgCommonModeAR13IntervFddR13 = "sib_type1_v1320_ies_s::freq_hop_params_dl_r13_s_::interv_dl_hop_cfg_common_mode_a_r13_c_::interv_fdd_r13_e_" {
        Int1 = "int1",
        Int2 = "int2",
        Int4 = "int4",
        Int8 = "int8",
    }
    numbers: u8 = [1, 2, 4, 8];
}

rrc_enum! {
    /// SystemInformationBlockType1-v1320-IEs
    pub enum IntervDlHopCfgCommonModeAR13IntervTddR13 = "sib_type1_v1320_ies_s::freq_hop_params_dl_r13_s_::interv_dl_hop_cfg_common_mode_a_r13_c_::interv_tdd_r13_e_" {
        Int1 = "int1",
        Int5 = "int5",
        Int10 = "int10",
        Int20 = "int20",
    }
    numbers: u8 = [1, 5, 10, 20];
}

rrc_enum! {
    /// SystemInformationBlockType1-v1320-IEs
    pub enum IntervDlHopCfgCommonModeBR13IntervFddR13 = "sib_type1_v1320_ies_s::freq_hop_params_dl_r13_s_::interv_dl_hop_cfg_common_mode_b_r13_c_::interv_fdd_r13_e_" {
        Int2 = "int2",
        Int4 = "int4",
        Int8 = "int8",
        Int16 = "int16",
    }
    numbers: u8 = [2, 4, 8, 16];
}

rrc_enum! {
    /// SystemInformationBlockType1-v1320-IEs
    pub enum IntervDlHopCfgCommonModeBR13IntervTddR13 = "sib_type1_v1320_ies_s::freq_hop_params_dl_r13_s_::interv_dl_hop_cfg_common_mode_b_r13_c_::interv_tdd_r13_e_" {
        Int5 = "int5",
        Int10 = "int10",
        Int20 = "int20",
        Int40 = "int40",
    }
    numbers: u8 = [5, 10, 20, 40];
}

rrc_enum! {
    /// AC-BarringConfig
    pub enum AcBarrCfgAcBarrFactor = "ac_barr_cfg_s::ac_barr_factor_e_" {
        P00 = "p00",
        P05 = "p05",
        P10 = "p10",
        P15 = "p15",
        P20 = "p20",
        P25 = "p25",
        P30 = "p30",
        P40 = "p40",
        P50 = "p50",
        P60 = "p60",
        P70 = "p70",
        P75 = "p75",
        P80 = "p80",
        P85 = "p85",
        P90 = "p90",
        P95 = "p95",
    }
    numbers: f32 = [
        0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 7.0, 7.5, 8.0, 8.5, 9.0, 9.5,
    ] as [
        "0.0", "0.5", "1.0", "1.5", "2.0", "2.5", "3.0", "4.0", "5.0", "6.0", "7.0", "7.5", "8.0", "8.5", "9.0", "9.5",
    ];
}

rrc_enum! {
    /// AC-BarringConfig
    pub enum AcBarrCfgAcBarrTime = "ac_barr_cfg_s::ac_barr_time_e_" {
        S4 = "s4",
        S8 = "s8",
        S16 = "s16",
        S32 = "s32",
        S64 = "s64",
        S128 = "s128",
        S256 = "s256",
        S512 = "s512",
    }
    numbers: u16 = [4, 8, 16, 32, 64, 128, 256, 512];
}

rrc_enum! {
    /// SystemInformationBlockType1-v1310-IEs
    pub enum BwReducedAccessRelatedInfoR13SiWinLenBrR13 = "sib_type1_v1310_ies_s::bw_reduced_access_related_info_r13_s_::si_win_len_br_r13_e_" {
        Ms20 = "ms20",
        Ms40 = "ms40",
        Ms60 = "ms60",
        Ms80 = "ms80",
        Ms120 = "ms120",
        Ms160 = "ms160",
        Ms200 = "ms200",
        Spare = "spare",
    }
    numbers: u8 = [20, 40, 60, 80, 120, 160, 200];
}

rrc_enum! {
    /// SystemInformationBlockType1-v1310-IEs
    pub enum BwReducedAccessRelatedInfoR13SiRepeatPatternR13 = "sib_type1_v1310_ies_s::bw_reduced_access_related_info_r13_s_::si_repeat_pattern_r13_e_" {
        EveryRF = "everyRF",
        Every2ndRF = "every2ndRF",
        Every4thRF = "every4thRF",
        Every8thRF = "every8thRF",
    }
}

rrc_enum! {
    /// SystemInformationBlockType1-v1310-IEs
    pub enum BwReducedAccessRelatedInfoR13SiHopCfgCommonR13 = "sib_type1_v1310_ies_s::bw_reduced_access_related_info_r13_s_::si_hop_cfg_common_r13_e_" {
        On = "on",
        Off = "off",
    }
}

rrc_enum! {
    /// UDT-Restricting-r13
    pub enum UdtRestrictingR13UdtRestrictingTimeR13 = "udt_restricting_r13_s::udt_restricting_time_r13_e_" {
        S4 = "s4",
        S8 = "s8",
        S16 = "s16",
        S32 = "s32",
        S64 = "s64",
        S128 = "s128",
        S256 = "s256",
        S512 = "s512",
    }
    numbers: u16 = [4, 8, 16, 32, 64, 128, 256, 512];
}

rrc_enum! {
    /// SIB-Type
    pub enum SibType = "sib_type_e", ext = 10 {
        SibType3 = "sibType3",
        SibType4 = "sibType4",
        SibType5 = "sibType5",
        SibType6 = "sibType6",
        SibType7 = "sibType7",
        SibType8 = "sibType8",
        SibType9 = "sibType9",
        SibType10 = "sibType10",
        SibType11 = "sibType11",
        SibType12V920 = "sibType12-v920",
        SibType13V920 = "sibType13-v920",
        SibType14V1130 = "sibType14-v1130",
        SibType15V1130 = "sibType15-v1130",
        SibType16V1130 = "sibType16-v1130",
        SibType17V1250 = "sibType17-v1250",
        SibType18V1250 = "sibType18-v1250",
        SibType19V1250 = "sibType19-v1250",
        SibType20V1310 = "sibType20-v1310",
        SibType21V1430 = "sibType21-v1430",
        SibType24V1530 = "sibType24-v1530",
        SibType25V1530 = "sibType25-v1530",
        SibType26V1530 = "sibType26-v1530",
        SibType26aV1610 = "sibType26a-v1610",
        SibType27V1610 = "sibType27-v1610",
        SibType28V1610 = "sibType28-v1610",
        SibType29V1610 = "sibType29-v1610",
    }
}

rrc_enum! {
    /// SI-Periodicity-r12
    pub enum SiPeriodicityR12 = "si_periodicity_r12_e" {
        Rf8 = "rf8",
        Rf16 = "rf16",
        Rf32 = "rf32",
        Rf64 = "rf64",
        Rf128 = "rf128",
        Rf256 = "rf256",
        Rf512 = "rf512",
    }
    numbers: u16 = [8, 16, 32, 64, 128, 256, 512];
}

rrc_enum! {
    /// UE-TimersAndConstants
    pub enum UeTimersAndConstsT300 = "ue_timers_and_consts_s::t300_e_" {
        Ms100 = "ms100",
        Ms200 = "ms200",
        Ms300 = "ms300",
        Ms400 = "ms400",
        Ms600 = "ms600",
        Ms1000 = "ms1000",
        Ms1500 = "ms1500",
        Ms2000 = "ms2000",
    }
    numbers: u16 = [100, 200, 300, 400, 600, 1000, 1500, 2000];
}

rrc_enum! {
    /// UE-TimersAndConstants
    pub enum UeTimersAndConstsT301 = "ue_timers_and_consts_s::t301_e_" {
        Ms100 = "ms100",
        Ms200 = "ms200",
        Ms300 = "ms300",
        Ms400 = "ms400",
        Ms600 = "ms600",
        Ms1000 = "ms1000",
        Ms1500 = "ms1500",
        Ms2000 = "ms2000",
    }
    numbers: u16 = [100, 200, 300, 400, 600, 1000, 1500, 2000];
}

rrc_enum! {
    /// UE-TimersAndConstants
    pub enum UeTimersAndConstsT310 = "ue_timers_and_consts_s::t310_e_" {
        Ms0 = "ms0",
        Ms50 = "ms50",
        Ms100 = "ms100",
        Ms200 = "ms200",
        Ms500 = "ms500",
        Ms1000 = "ms1000",
        Ms2000 = "ms2000",
    }
    numbers: u16 = [0, 50, 100, 200, 500, 1000, 2000];
}

rrc_enum! {
    /// UE-TimersAndConstants
    pub enum UeTimersAndConstsN310 = "ue_timers_and_consts_s::n310_e_" {
        N1 = "n1",
        N2 = "n2",
        N3 = "n3",
        N4 = "n4",
        N6 = "n6",
        N8 = "n8",
        N10 = "n10",
        N20 = "n20",
    }
    numbers: u8 = [1, 2, 3, 4, 6, 8, 10, 20];
}

rrc_enum! {
    /// UE-TimersAndConstants
    pub enum UeTimersAndConstsT311 = "ue_timers_and_consts_s::t311_e_" {
        Ms1000 = "ms1000",
        Ms3000 = "ms3000",
        Ms5000 = "ms5000",
        Ms10000 = "ms10000",
        Ms15000 = "ms15000",
        Ms20000 = "ms20000",
        Ms30000 = "ms30000",
    }
    numbers: u16 = [1000, 3000, 5000, 10000, 15000, 20000, 30000];
}

rrc_enum! {
    /// UE-TimersAndConstants
    pub enum UeTimersAndConstsN311 = "ue_timers_and_consts_s::n311_e_" {
        N1 = "n1",
        N2 = "n2",
        N3 = "n3",
        N4 = "n4",
        N5 = "n5",
        N6 = "n6",
        N8 = "n8",
        N10 = "n10",
    }
    numbers: u8 = [1, 2, 3, 4, 5, 6, 8, 10];
}

rrc_enum! {
    /// UE-TimersAndConstants
    pub enum UeTimersAndConstsT300V1310 = "ue_timers_and_consts_s::t300_v1310_e_" {
        Ms2500 = "ms2500",
        Ms3000 = "ms3000",
        Ms3500 = "ms3500",
        Ms4000 = "ms4000",
        Ms5000 = "ms5000",
        Ms6000 = "ms6000",
        Ms8000 = "ms8000",
        Ms10000 = "ms10000",
    }
    numbers: u16 = [2500, 3000, 3500, 4000, 5000, 6000, 8000, 10000];
}

rrc_enum! {
    /// UE-TimersAndConstants
    pub enum UeTimersAndConstsT301V1310 = "ue_timers_and_consts_s::t301_v1310_e_" {
        Ms2500 = "ms2500",
        Ms3000 = "ms3000",
        Ms3500 = "ms3500",
        Ms4000 = "ms4000",
        Ms5000 = "ms5000",
        Ms6000 = "ms6000",
        Ms8000 = "ms8000",
        Ms10000 = "ms10000",
    }
    numbers: u16 = [2500, 3000, 3500, 4000, 5000, 6000, 8000, 10000];
}

rrc_enum! {
    /// UE-TimersAndConstants
    pub enum UeTimersAndConstsT310V1330 = "ue_timers_and_consts_s::t310_v1330_e_" {
        Ms4000 = "ms4000",
        Ms6000 = "ms6000",
    }
    numbers: u16 = [4000, 6000];
}

rrc_enum! {
    /// UE-TimersAndConstants
    pub enum UeTimersAndConstsT300R15 = "ue_timers_and_consts_s::t300_r15_e_" {
        Ms4000 = "ms4000",
        Ms6000 = "ms6000",
        Ms8000 = "ms8000",
        Ms10000 = "ms10000",
        Ms15000 = "ms15000",
        Ms25000 = "ms25000",
        Ms40000 = "ms40000",
        Ms60000 = "ms60000",
    }
    numbers: u16 = [4000, 6000, 8000, 10000, 15000, 25000, 40000, 60000];
}

rrc_enum! {
    /// SystemInformationBlockType2
    pub enum SibType2FreqInfoUlBw = "sib_type2_s::freq_info_s_::ul_bw_e_" {
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
    /// SystemInformationBlockType2
    pub enum SibType2MpdcchCqiReportR16 = "sib_type2_s::mpdcch_cqi_report_r16_e_" {
        FourBits = "fourBits",
        Both = "both",
    }
    numbers: u8 = [4];
}

rrc_enum! {
    /// SystemInformationBlockType1
    pub enum CellAccessRelatedInfoCellBarred = "sib_type1_s::cell_access_related_info_s_::cell_barred_e_" {
        Barred = "barred",
        NotBarred = "notBarred",
    }
}

rrc_enum! {
    /// SystemInformationBlockType1
    pub enum CellAccessRelatedInfoIntraFreqResel = "sib_type1_s::cell_access_related_info_s_::intra_freq_resel_e_" {
        Allowed = "allowed",
        NotAllowed = "notAllowed",
    }
}

rrc_enum! {
    /// SystemInformationBlockType1
    pub enum SibType1SiWinLen = "sib_type1_s::si_win_len_e_" {
        Ms1 = "ms1",
        Ms2 = "ms2",
        Ms5 = "ms5",
        Ms10 = "ms10",
        Ms15 = "ms15",
        Ms20 = "ms20",
        Ms40 = "ms40",
    }
    numbers: u8 = [1, 2, 5, 10, 15, 20, 40];
}

pub fn descriptors() -> Vec<EnumDescriptor> {
    vec![
        EnumDescriptor::numbered::<MibDlBw>(),
        EnumDescriptor::of::<GnssIdR15>(),
        EnumDescriptor::of::<SbasIdR15>(),
        EnumDescriptor::of::<PosSibTypeR15>(),
        EnumDescriptor::of::<CellAccessRelatedInfoNtnR17CellBarredNtnR17>(),
        EnumDescriptor::of::<PlmnIdInfoV1530CellReservedForOperCrsR15>(),
        EnumDescriptor::numbered::<PosSchedInfoR15PosSiPeriodicityR15>(),
        EnumDescriptor::numbered::<CellSelInfoCeV1530PwrClass14DbmOffsetR15>(),
        EnumDescriptor::numbered::<CrsIntfMitigCfgR15CrsIntfMitigNumPrbs>(),
        EnumDescriptor::of::<SibType1V1530IesCellBarredCrsR15>(),
        EnumDescriptor::of::<CellAccessRelatedInfo5gcR15CellBarred5gcR15>(),
        EnumDescriptor::of::<CellAccessRelatedInfo5gcR15CellBarred5gcCrsR15>(),
        EnumDescriptor::numbered::<SchedInfoBrR13SiTbsR13>(),
        EnumDescriptor::numbered::<AcdcBarrCfgR13AcBarrFactorR13>(),
        EnumDescriptor::numbered::<AcdcBarrCfgR13AcBarrTimeR13>(),
        EnumDescriptor::numbered::<FreqHopParamsDlR13MpdcchPdschHopNbR13>(),
        EnumDescriptor::numbered::<IntervDlHopCfgCommonModeAR13IntervFddR13>(),
        EnumDescriptor::numbered::<IntervDlHopCfgCommonModeAR13IntervTddR13>(),
        EnumDescriptor::numbered::<IntervDlHopCfgCommonModeBR13IntervFddR13>(),
        EnumDescriptor::numbered::<IntervDlHopCfgCommonModeBR13IntervTddR13>(),
        EnumDescriptor::numbered::<AcBarrCfgAcBarrFactor>(),
        EnumDescriptor::numbered::<AcBarrCfgAcBarrTime>(),
        EnumDescriptor::numbered::<BwReducedAccessRelatedInfoR13SiWinLenBrR13>(),
        EnumDescriptor::of::<BwReducedAccessRelatedInfoR13SiRepeatPatternR13>(),
        EnumDescriptor::of::<BwReducedAccessRelatedInfoR13SiHopCfgCommonR13>(),
        EnumDescriptor::numbered::<UdtRestrictingR13UdtRestrictingTimeR13>(),
        EnumDescriptor::of::<SibType>(),
        EnumDescriptor::numbered::<SiPeriodicityR12>(),
        EnumDescriptor::numbered::<UeTimersAndConstsT300>(),
        EnumDescriptor::numbered::<UeTimersAndConstsT301>(),
        EnumDescriptor::numbered::<UeTimersAndConstsT310>(),
        EnumDescriptor::numbered::<UeTimersAndConstsN310>(),
        EnumDescriptor::numbered::<UeTimersAndConstsT311>(),
        EnumDescriptor::numbered::<UeTimersAndConstsN311>(),
        EnumDescriptor::numbered::<UeTimersAndConstsT300V1310>(),
        EnumDescriptor::numbered::<UeTimersAndConstsT301V1310>(),
        EnumDescriptor::numbered::<UeTimersAndConstsT310V1330>(),
        EnumDescriptor::numbered::<UeTimersAndConstsT300R15>(),
        EnumDescriptor::numbered::<SibType2FreqInfoUlBw>(),
        EnumDescriptor::numbered::<SibType2MpdcchCqiReportR16>(),
        EnumDescriptor::of::<CellAccessRelatedInfoCellBarred>(),
        EnumDescriptor::of::<CellAccessRelatedInfoIntraFreqResel>(),
        EnumDescriptor::numbered::<SibType1SiWinLen>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rrc_core::{EnumErr, Enumerated, RrcEnum, RrcEnumNumber};

    #[test]
    fn test_mib_dl_bw() {
        let mut bw = Enumerated::<MibDlBw>::default();
        assert!(bw.is_null());
        assert_eq!(
            MibDlBw::try_from(bw.raw()),
            Err(EnumErr::NotInitialized { enum_type: "mib_s::dl_bw_e_" })
        );
        bw.set(MibDlBw::N50);
        assert_eq!(bw.to_number(), 50);
        assert_eq!(bw.to_number_string(), "50");
        assert_eq!(Enumerated::<MibDlBw>::from_number(100), Some(Enumerated::new(MibDlBw::N100)));
        assert_eq!(Enumerated::<MibDlBw>::from_number(20), None);
    }

    #[test]
    fn test_ac_barr_factor_numbers() {
        assert_eq!(AcBarrCfgAcBarrFactor::P00.number(), 0.0);
        assert_eq!(AcBarrCfgAcBarrFactor::P00.number_string(), "0.0");
        assert_eq!(AcBarrCfgAcBarrFactor::P05.number(), 0.5);
        assert_eq!(AcBarrCfgAcBarrFactor::P05.number_string(), "0.5");
        assert_eq!(AcBarrCfgAcBarrFactor::P10.number_string(), "1.0");
        assert_eq!(AcBarrCfgAcBarrFactor::P95.number(), 9.5);
        assert_eq!(AcdcBarrCfgR13AcBarrFactorR13::P75.number(), 7.5);
        assert_eq!(AcdcBarrCfgR13AcBarrFactorR13::P40.number_string(), "4.0");
        assert_eq!(AcBarrCfgAcBarrFactor::from_number_string("9.0"), Some(AcBarrCfgAcBarrFactor::P90));
        assert_eq!(AcBarrCfgAcBarrFactor::from_number_string("9"), None);
    }

    #[test]
    fn test_dl_hop_intervals() {
        let mut errs = Vec::new();
        let fdd = Enumerated::new(IntervDlHopCfgCommonModeAR13IntervFddR13::Int8);
        assert_eq!(fdd.to_str(), "int8");
        assert_eq!(fdd.to_number(), 8);
        assert_eq!(IntervDlHopCfgCommonModeAR13IntervTddR13::Int20.number(), 20);
        assert_eq!(IntervDlHopCfgCommonModeBR13IntervFddR13::from_number(16), Some(IntervDlHopCfgCommonModeBR13IntervFddR13::Int16));
        assert_eq!(IntervDlHopCfgCommonModeBR13IntervTddR13::Int5.number_string(), "5");

        let null = Enumerated::<IntervDlHopCfgCommonModeBR13IntervTddR13>::nulltype();
        assert_eq!(null.to_number_with(&mut |e: &EnumErr| errs.push(e.clone())), 0);
        assert_eq!(
            errs,
            vec![EnumErr::NotInitialized {
                enum_type: "sib_type1_v1320_ies_s::freq_hop_params_dl_r13_s_::interv_dl_hop_cfg_common_mode_b_r13_c_::interv_tdd_r13_e_"
            }]
        );
    }

    #[test]
    fn test_extension_markers() {
        assert!(SibType::HAS_EXT);
        assert_eq!(SibType::NOF_EXTS, 10);
        assert!(!MibDlBw::HAS_EXT);
        assert!(SibType2MpdcchCqiReportR16::Both.try_number().is_none());
        assert_eq!(SibType2MpdcchCqiReportR16::FourBits.number(), 4);
    }
}
