use rrc_core::{EnumErr, EnumErrSink};

/// Error sink for testing purposes
/// Collects all reported errors for later inspection
#[derive(Default)]
pub struct CollectSink {
    errs: Vec<EnumErr>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_errs(&mut self) -> Vec<EnumErr> {
        std::mem::take(&mut self.errs)
    }
}

impl EnumErrSink for CollectSink {
    fn report(&mut self, err: &EnumErr) {
        tracing::debug!("report: {}", err);
        self.errs.push(err.clone());
    }
}
