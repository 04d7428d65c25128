//! UL-CCCH message enumerations
//!
//! Connection request and reestablishment causes

use rrc_core::{EnumDescriptor, rrc_enum};

rrc_enum! {
    /// EstablishmentCause
    pub enum EstablishmentCause = "establishment_cause_e" {
        Emergency = "emergency",
        HighPriorityAccess = "highPriorityAccess",
        MtAccess = "mt-Access",
        MoSignalling = "mo-Signalling",
        MoData = "mo-Data",
        DelayTolerantAccessV1020 = "delayTolerantAccess-v1020",
        MoVoiceCallV1280 = "mo-VoiceCall-v1280",
        Spare1 = "spare1",
    }
}

rrc_enum! {
    /// EstablishmentCause-5GC
    pub enum EstablishmentCause5gc = "establishment_cause_minus5_gc_e" {
        Emergency = "emergency",
        HighPriorityAccess = "highPriorityAccess",
        MtAccess = "mt-Access",
        MoSignalling = "mo-Signalling",
        MoData = "mo-Data",
        MoVoiceCall = "mo-VoiceCall",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

rrc_enum! {
    /// ReestablishmentCause
    pub enum ReestCause = "reest_cause_e" {
        ReconfigurationFailure = "reconfigurationFailure",
        HandoverFailure = "handoverFailure",
        OtherFailure = "otherFailure",
        Spare1 = "spare1",
    }
}

rrc_enum! {
    /// ResumeCause
    pub enum ResumeCause = "resume_cause_e" {
        Emergency = "emergency",
        HighPriorityAccess = "highPriorityAccess",
        MtAccess = "mt-Access",
        MoSignalling = "mo-Signalling",
        MoData = "mo-Data",
        DelayTolerantAccessV1020 = "delayTolerantAccess-v1020",
        MoVoiceCallV1280 = "mo-VoiceCall-v1280",
        Spare1 = "spare1",
    }
}

rrc_enum! {
    /// ResumeCause-r15
    pub enum ResumeCauseR15 = "resume_cause_r15_e" {
        Emergency = "emergency",
        HighPriorityAccess = "highPriorityAccess",
        MtAccess = "mt-Access",
        MoSignalling = "mo-Signalling",
        MoData = "mo-Data",
        RnaUpdate = "rna-Update",
        MoVoiceCall = "mo-VoiceCall",
        Spare1 = "spare1",
    }
}

rrc_enum! {
    /// RRCEarlyDataRequest-r15-IEs
    pub enum RrcEarlyDataRequestR15IesEstablishmentCauseR15 = "rrc_early_data_request_r15_ies_s::establishment_cause_r15_e_" {
        MoDataR15 = "mo-Data-r15",
        DelayTolerantAccessR15 = "delayTolerantAccess-r15",
    }
}

pub fn descriptors() -> Vec<EnumDescriptor> {
    vec![
        EnumDescriptor::of::<EstablishmentCause>(),
        EnumDescriptor::of::<EstablishmentCause5gc>(),
        EnumDescriptor::of::<ReestCause>(),
        EnumDescriptor::of::<ResumeCause>(),
        EnumDescriptor::of::<ResumeCauseR15>(),
        EnumDescriptor::of::<RrcEarlyDataRequestR15IesEstablishmentCauseR15>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rrc_core::{Enumerated, RrcEnum};

    #[test]
    fn test_establishment_cause_labels() {
        let cause = Enumerated::new(EstablishmentCause::MoSignalling);
        assert_eq!(cause.to_str(), "mo-Signalling");
        assert_eq!(format!("{:?}", cause), "EstablishmentCause(mo-Signalling)");
        assert_eq!(EstablishmentCause::from_name("mt-Access"), Some(EstablishmentCause::MtAccess));
        assert!(EstablishmentCause::Spare1.is_spare());
        assert_eq!(EstablishmentCause5gc::NOF_TYPES, 8);
    }
}
