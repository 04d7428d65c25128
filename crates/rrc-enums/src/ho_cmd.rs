//! Handover command and handover preparation enumerations

use rrc_core::{EnumDescriptor, rrc_enum};

rrc_enum! {
    /// HandoverPreparationInformation-v920-IEs
    pub enum HoPrepInfoV920IesUeCfgReleaseR9 = "ho_prep_info_v920_ies_s::ue_cfg_release_r9_e_", ext = 4 {
        Rel9 = "rel9",
        Rel10 = "rel10",
        Rel11 = "rel11",
        Rel12 = "rel12",
        V10j0 = "v10j0",
        V11e0 = "v11e0",
        V1280 = "v1280",
        Rel13 = "rel13",
        Rel14 = "rel14",
        Rel15 = "rel15",
        Rel16 = "rel16",
        Rel17 = "rel17",
    }
}

rrc_enum! {
    /// RRM-Config
    pub enum RrmCfgUeInactiveTime = "rrm_cfg_s::ue_inactive_time_e_" {
        S1 = "s1",
        S2 = "s2",
        S3 = "s3",
        S5 = "s5",
        S7 = "s7",
        S10 = "s10",
        S15 = "s15",
        S20 = "s20",
        S25 = "s25",
        S30 = "s30",
        S40 = "s40",
        S50 = "s50",
        Min1 = "min1",
        Min1s20c = "min1s20c",
        Min1s40 = "min1s40",
        Min2 = "min2",
        Min2s30 = "min2s30",
        Min3 = "min3",
        Min3s30 = "min3s30",
        Min4 = "min4",
        Min5 = "min5",
        Min6 = "min6",
        Min7 = "min7",
        Min8 = "min8",
        Min9 = "min9",
        Min10 = "min10",
        Min12 = "min12",
        Min14 = "min14",
        Min17 = "min17",
        Min20 = "min20",
        Min24 = "min24",
        Min28 = "min28",
        Min33 = "min33",
        Min38 = "min38",
        Min44 = "min44",
        Min50 = "min50",
        Hr1 = "hr1",
        Hr1min30 = "hr1min30",
        Hr2 = "hr2",
        Hr2min30 = "hr2min30",
        Hr3 = "hr3",
        Hr3min30 = "hr3min30",
        Hr4 = "hr4",
        Hr5 = "hr5",
        Hr6 = "hr6",
        Hr8 = "hr8",
        Hr10 = "hr10",
        Hr13 = "hr13",
        Hr16 = "hr16",
        Hr20 = "hr20",
        Day1 = "day1",
        Day1hr12 = "day1hr12",
        Day2 = "day2",
        Day2hr12 = "day2hr12",
        Day3 = "day3",
        Day4 = "day4",
        Day5 = "day5",
        Day7 = "day7",
        Day10 = "day10",
        Day14 = "day14",
        Day19 = "day19",
        Day24 = "day24",
        Day30 = "day30",
        DayMoreThan30 = "dayMoreThan30",
    }
}

pub fn descriptors() -> Vec<EnumDescriptor> {
    vec![
        EnumDescriptor::of::<HoPrepInfoV920IesUeCfgReleaseR9>(),
        EnumDescriptor::of::<RrmCfgUeInactiveTime>(),
    ]
}
