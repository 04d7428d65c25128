//! DL-CCCH message enumerations

use rrc_core::{EnumDescriptor, rrc_enum};

rrc_enum! {
    /// RRCConnectionReject-v1130-IEs
    pub enum DeprioritReqR11DeprioritTypeR11 = "rrc_conn_reject_v1130_ies_s::depriorit_req_r11_s_::depriorit_type_r11_e_" {
        Frequency = "frequency",
        EUtra = "e-utra",
    }
}

rrc_enum! {
    /// RRCConnectionReject-v1130-IEs
    pub enum DeprioritReqR11DeprioritTimerR11 = "rrc_conn_reject_v1130_ies_s::depriorit_req_r11_s_::depriorit_timer_r11_e_" {
        Min5 = "min5",
        Min10 = "min10",
        Min15 = "min15",
        Min30 = "min30",
    }
    numbers: u8 = [5, 10, 15, 30];
}

rrc_enum! {
    /// IdleModeMobilityControlInfo
    pub enum IdleModeMobCtrlInfoT320 = "idle_mode_mob_ctrl_info_s::t320_e_" {
        Min5 = "min5",
        Min10 = "min10",
        Min20 = "min20",
        Min30 = "min30",
        Min60 = "min60",
        Min120 = "min120",
        Min180 = "min180",
        Spare1 = "spare1",
    }
    numbers: u8 = [5, 10, 20, 30, 60, 120, 180];
}

pub fn descriptors() -> Vec<EnumDescriptor> {
    vec![
        EnumDescriptor::of::<DeprioritReqR11DeprioritTypeR11>(),
        EnumDescriptor::numbered::<DeprioritReqR11DeprioritTimerR11>(),
        EnumDescriptor::numbered::<IdleModeMobCtrlInfoT320>(),
    ]
}
