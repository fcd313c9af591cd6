//! Rate-limited dispatch: one create call at a time, a fixed pause between
//! calls, per-entity failures absorbed into the stage outcome.

use std::future::Future;
use std::time::Duration;

use pipedrive::{ApiError, NewActivity, NewDeal, NewOrganization, NewPerson};
use tokio_util::sync::CancellationToken;

use crate::report::{CreateFailure, EntityKind};

/// Gives a payload a short human-readable handle for failure records.
pub trait Labeled {
    fn label(&self) -> String;
}

impl Labeled for NewOrganization {
    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Labeled for NewPerson {
    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Labeled for NewDeal {
    fn label(&self) -> String {
        self.title.clone()
    }
}

impl Labeled for NewActivity {
    fn label(&self) -> String {
        self.subject.clone()
    }
}

pub struct StageOutcome<T> {
    pub created: Vec<T>,
    pub failures: Vec<CreateFailure>,
    pub cancelled: bool,
}

/// Runs one stage's payloads through `create`, strictly sequentially.
///
/// Each call is awaited fully before the delay and the next call start.
/// A failed create is logged and recorded, never aborting the batch; the
/// one exception is an auth rejection, which invalidates the whole run and
/// propagates. Cancellation is checked before every iteration and ends the
/// stage early with whatever was created so far.
pub async fn run_stage<P, T, F, Fut>(
    kind: EntityKind,
    payloads: Vec<P>,
    delay: Duration,
    cancel: &CancellationToken,
    mut create: F,
) -> Result<StageOutcome<T>, ApiError>
where
    P: Labeled,
    F: FnMut(P) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let total = payloads.len();
    let mut created = Vec::with_capacity(total);
    let mut failures = Vec::new();

    for (index, payload) in payloads.into_iter().enumerate() {
        if cancel.is_cancelled() {
            tracing::warn!(%kind, dispatched = index, total, "cancelled mid-stage");
            return Ok(StageOutcome {
                created,
                failures,
                cancelled: true,
            });
        }

        if index > 0 {
            tokio::time::sleep(delay).await;
        }

        let label = payload.label();
        match create(payload).await {
            Ok(record) => created.push(record),
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                tracing::warn!(%kind, %label, error = %err, "create failed, continuing");
                failures.push(CreateFailure {
                    kind,
                    label,
                    error: err.to_string(),
                });
            }
        }
    }

    tracing::info!(%kind, created = created.len(), failed = failures.len(), "stage complete");
    Ok(StageOutcome {
        created,
        failures,
        cancelled: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct FakePayload(String);

    impl Labeled for FakePayload {
        fn label(&self) -> String {
            self.0.clone()
        }
    }

    fn payloads(n: usize) -> Vec<FakePayload> {
        (0..n).map(|i| FakePayload(format!("payload-{i}"))).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn dispatch_is_sequential_with_delay() {
        let cancel = CancellationToken::new();
        let delay = Duration::from_millis(150);
        let n = 10;

        let started = tokio::time::Instant::now();
        let outcome = run_stage(EntityKind::Organization, payloads(n), delay, &cancel, |p| {
            async move { Ok::<_, ApiError>(p.0) }
        })
        .await
        .unwrap();

        assert_eq!(outcome.created.len(), n);
        let elapsed = started.elapsed();
        assert!(
            elapsed >= delay * (n as u32 - 1),
            "elapsed {elapsed:?} under the sequential floor"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn failures_are_absorbed_in_order() {
        let cancel = CancellationToken::new();
        let mut calls = 0usize;

        let outcome = run_stage(
            EntityKind::Deal,
            payloads(9),
            Duration::from_millis(10),
            &cancel,
            |p| {
                calls += 1;
                let fail = calls % 3 == 0;
                async move {
                    if fail {
                        Err(ApiError::rejected(500, "synthetic failure"))
                    } else {
                        Ok(p.0)
                    }
                }
            },
        )
        .await
        .unwrap();

        assert_eq!(outcome.created.len(), 6);
        assert_eq!(outcome.failures.len(), 3);
        assert!(!outcome.cancelled);
        assert_eq!(outcome.failures[0].label, "payload-2");
        assert_eq!(outcome.failures[0].kind, EntityKind::Deal);
    }

    #[tokio::test(start_paused = true)]
    async fn auth_rejection_is_fatal() {
        let cancel = CancellationToken::new();
        let result = run_stage(
            EntityKind::Person,
            payloads(3),
            Duration::from_millis(10),
            &cancel,
            |_| async { Err::<String, _>(ApiError::unauthorized("bad token")) },
        )
        .await;

        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_stops_before_next_call() {
        let cancel = CancellationToken::new();
        let cancel_after = 2usize;
        let mut calls = 0usize;

        let outcome = run_stage(
            EntityKind::Activity,
            payloads(10),
            Duration::from_millis(10),
            &cancel,
            |p| {
                calls += 1;
                if calls == cancel_after {
                    cancel.cancel();
                }
                async move { Ok::<_, ApiError>(p.0) }
            },
        )
        .await
        .unwrap();

        assert!(outcome.cancelled);
        assert_eq!(outcome.created.len(), cancel_after);
    }
}
