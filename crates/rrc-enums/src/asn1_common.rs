//! Generic ASN.1 enumerations used by every RRC module: the setup/release choice,
//! criticality and presence.

use rrc_core::{EnumDescriptor, Enumerated, check_choice_type, rrc_enum};

rrc_enum! {
    /// Discriminant of a SetupRelease choice
    pub enum SetupReleaseTypes = "setup_release_c::types" {
        Release = "release",
        Setup = "setup",
    }
}

rrc_enum! {
    /// Criticality
    pub enum Crit = "crit_e" {
        Reject = "reject",
        Ignore = "ignore",
        Notify = "notify",
    }
}

rrc_enum! {
    /// Presence
    pub enum Presence = "presence_e" {
        Optional = "optional",
        Conditional = "conditional",
        Mandatory = "mandatory",
    }
}

/// SetupRelease { release NULL, setup T }
///
/// The discriminant starts out as `nulltype`. Accessing the setup payload while the choice
/// holds anything else is reported and yields None.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupRelease<T> {
    kind: Enumerated<SetupReleaseTypes>,
    payload: Option<T>,
}

impl<T> Default for SetupRelease<T> {
    fn default() -> Self {
        Self { kind: Enumerated::nulltype(), payload: None }
    }
}

impl<T> SetupRelease<T> {
    pub fn release() -> Self {
        Self { kind: Enumerated::new(SetupReleaseTypes::Release), payload: None }
    }

    pub fn setup(payload: T) -> Self {
        Self { kind: Enumerated::new(SetupReleaseTypes::Setup), payload: Some(payload) }
    }

    pub fn kind(&self) -> Enumerated<SetupReleaseTypes> {
        self.kind
    }

    pub fn set_release(&mut self) {
        self.kind.set(SetupReleaseTypes::Release);
        self.payload = None;
    }

    pub fn set_setup(&mut self, payload: T) {
        self.kind.set(SetupReleaseTypes::Setup);
        self.payload = Some(payload);
    }

    pub fn get_setup(&self) -> Option<&T> {
        if !check_choice_type(SetupReleaseTypes::Setup, self.kind, "setup_release_c") {
            return None;
        }
        self.payload.as_ref()
    }

    pub fn get_setup_mut(&mut self) -> Option<&mut T> {
        if !check_choice_type(SetupReleaseTypes::Setup, self.kind, "setup_release_c") {
            return None;
        }
        self.payload.as_mut()
    }
}

pub fn descriptors() -> Vec<EnumDescriptor> {
    vec![
        EnumDescriptor::of::<SetupReleaseTypes>(),
        EnumDescriptor::of::<Crit>(),
        EnumDescriptor::of::<Presence>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rrc_core::{EnumErr, RrcEnum, check_choice_type_with, debug};

    #[test]
    fn test_setup_release_access() {
        debug::setup_logging_verbose();
        let mut sr = SetupRelease::<u8>::default();
        assert!(sr.kind().is_null());
        assert_eq!(sr.kind().to_str_with(&mut |_: &EnumErr| {}), "");
        assert_eq!(sr.get_setup(), None);

        sr.set_setup(7);
        assert_eq!(sr.kind(), SetupReleaseTypes::Setup);
        assert_eq!(sr.get_setup(), Some(&7));
        if let Some(v) = sr.get_setup_mut() {
            *v = 9;
        }
        assert_eq!(sr.get_setup(), Some(&9));

        sr.set_release();
        assert_eq!(sr.kind().to_str(), "release");
        assert_eq!(sr.get_setup(), None);
        assert_eq!(SetupRelease::<u8>::release(), sr);
    }

    #[test]
    fn test_choice_access_is_reported() {
        let mut errs = Vec::new();
        let sr = SetupRelease::<u8>::release();
        let ok = check_choice_type_with(SetupReleaseTypes::Setup, sr.kind(), "setup_release_c", &mut |e: &EnumErr| {
            errs.push(e.to_string())
        });
        assert!(!ok);
        assert_eq!(
            errs,
            vec!["Invalid field access for choice type \"setup_release_c\" (\"setup\"!=\"release\")".to_string()]
        );
    }

    #[test]
    fn test_crit_and_presence() {
        assert_eq!(Crit::Notify.to_string(), "notify");
        assert_eq!(Crit::NOF_TYPES, 3);
        assert_eq!(Presence::from_name("conditional"), Some(Presence::Conditional));
        assert_eq!(Enumerated::<Presence>::from_raw(3).get(), None);
    }
}
