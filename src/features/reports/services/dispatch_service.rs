use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::core::config::DispatchConfig;
use crate::features::reports::models::ReportDraft;

/// Polarity of a dispatch attempt. The workflow never inspects why the
/// intake rejected a report, only whether it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Accepted,
    Rejected,
}

/// Hands a validated draft to the report intake.
///
/// Object-safe so the session service can run against a deterministic
/// implementation in tests.
#[async_trait]
pub trait ReportDispatcher: Send + Sync {
    async fn dispatch(&self, draft: &ReportDraft) -> DispatchOutcome;
}

/// Stand-in for the real municipal intake: waits a configured delay, then
/// accepts a configured fraction of reports drawn from a uniform source.
pub struct SimulatedDispatcher {
    delay: Duration,
    acceptance_rate: f64,
}

impl SimulatedDispatcher {
    pub fn new(config: &DispatchConfig) -> Self {
        Self {
            delay: config.delay,
            acceptance_rate: config.acceptance_rate,
        }
    }
}

#[async_trait]
impl ReportDispatcher for SimulatedDispatcher {
    async fn dispatch(&self, draft: &ReportDraft) -> DispatchOutcome {
        // ThreadRng is not Send; draw before the await point
        let roll: f64 = rand::thread_rng().gen();

        tokio::time::sleep(self.delay).await;

        if roll < self.acceptance_rate {
            tracing::info!(
                "Simulated intake accepted report (category: {:?})",
                draft.category
            );
            DispatchOutcome::Accepted
        } else {
            tracing::warn!(
                "Simulated intake rejected report (category: {:?})",
                draft.category
            );
            DispatchOutcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn rate_one_always_accepts() {
        let dispatcher = SimulatedDispatcher {
            delay: Duration::from_secs(2),
            acceptance_rate: 1.0,
        };

        let outcome = dispatcher.dispatch(&ReportDraft::default()).await;
        assert_eq!(outcome, DispatchOutcome::Accepted);
    }

    #[tokio::test(start_paused = true)]
    async fn rate_zero_always_rejects() {
        let dispatcher = SimulatedDispatcher {
            delay: Duration::from_secs(2),
            acceptance_rate: 0.0,
        };

        let outcome = dispatcher.dispatch(&ReportDraft::default()).await;
        assert_eq!(outcome, DispatchOutcome::Rejected);
    }
}
