use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumErr {
    /// Raw value equals the option count, i.e. the enum still holds `nulltype`
    #[error("The enum of type {enum_type} was not initialized")]
    NotInitialized { enum_type: &'static str },

    #[error("The enum value={value} of type {enum_type} is not valid ({value}>={nof_types})")]
    InvalidValue { enum_type: &'static str, value: u32, nof_types: u32 },

    /// Valid option that carries no numeric meaning (spare, or a trailing label such as "both")
    #[error("The enum value={value} of type {enum_type} has no numeric equivalent")]
    NoNumber { enum_type: &'static str, value: u32 },

    #[error("No option of type {enum_type} matches \"{input}\"")]
    NoMatch { enum_type: &'static str, input: String },

    #[error("Unknown enumeration type \"{0}\"")]
    UnknownType(String),

    #[error("Inconsistent tables for {enum_type}: {reason}")]
    Inconsistent { enum_type: &'static str, reason: String },

    #[error("Invalid field access for choice type \"{choice_type}\" (\"{expected}\"!=\"{found}\")")]
    InvalidChoiceAccess { choice_type: &'static str, expected: &'static str, found: &'static str },
}

impl EnumErr {
    /// Classifies a raw value that fell outside `0..nof_types`
    pub fn out_of_range(enum_type: &'static str, value: u32, nof_types: u32) -> Self {
        if value == nof_types {
            EnumErr::NotInitialized { enum_type }
        } else {
            EnumErr::InvalidValue { enum_type, value, nof_types }
        }
    }

    /// Type label of the enumeration the error refers to, if any
    pub fn enum_type(&self) -> Option<&'static str> {
        match self {
            EnumErr::NotInitialized { enum_type }
            | EnumErr::InvalidValue { enum_type, .. }
            | EnumErr::NoNumber { enum_type, .. }
            | EnumErr::NoMatch { enum_type, .. }
            | EnumErr::Inconsistent { enum_type, .. } => Some(enum_type),
            EnumErr::InvalidChoiceAccess { choice_type, .. } => Some(choice_type),
            EnumErr::UnknownType(_) => None,
        }
    }
}

/// Receives the errors raised by the logging lookups (`convert_enum_idx`, `map_enum_number`, ..).
/// Closures taking `&EnumErr` can be passed directly.
pub trait EnumErrSink {
    fn report(&mut self, err: &EnumErr);
}

impl<F> EnumErrSink for F
where
    F: FnMut(&EnumErr),
{
    fn report(&mut self, err: &EnumErr) {
        self(err)
    }
}

/// Default sink, writes an error event to the tracing subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EnumErrSink for LogSink {
    fn report(&mut self, err: &EnumErr) {
        tracing::error!("{}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_classification() {
        assert_eq!(
            EnumErr::out_of_range("crit_e", 3, 3),
            EnumErr::NotInitialized { enum_type: "crit_e" }
        );
        assert_eq!(
            EnumErr::out_of_range("crit_e", 7, 3),
            EnumErr::InvalidValue { enum_type: "crit_e", value: 7, nof_types: 3 }
        );
    }

    #[test]
    fn test_error_messages() {
        let e = EnumErr::InvalidValue { enum_type: "phich_cfg_s::phich_res_e_", value: 9, nof_types: 4 };
        assert_eq!(e.to_string(), "The enum value=9 of type phich_cfg_s::phich_res_e_ is not valid (9>=4)");
        assert_eq!(e.enum_type(), Some("phich_cfg_s::phich_res_e_"));
        assert_eq!(EnumErr::UnknownType("foo".to_string()).enum_type(), None);
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |e: &EnumErr| seen.push(e.clone());
            sink.report(&EnumErr::NotInitialized { enum_type: "crit_e" });
        }
        assert_eq!(seen, vec![EnumErr::NotInitialized { enum_type: "crit_e" }]);
    }
}
