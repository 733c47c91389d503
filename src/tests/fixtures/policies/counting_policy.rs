use crate::modules::transitions::adapters::outbound::policy::{
    PolicyError, PolicyVerdict, TransitionPolicy,
};
use crate::modules::transitions::core::event::TransitionEvent;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns a fixed verdict and counts how often it was asked.
pub struct CountingPolicy {
    verdict: PolicyVerdict,
    calls: AtomicUsize,
}

impl CountingPolicy {
    pub fn new(verdict: PolicyVerdict) -> Self {
        Self {
            verdict,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransitionPolicy for CountingPolicy {
    async fn evaluate(&self, _event: &TransitionEvent) -> Result<PolicyVerdict, PolicyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.verdict.clone())
    }
}
