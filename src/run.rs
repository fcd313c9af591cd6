//! Seeding orchestrator: Organizations → Persons → Deals → Activities, each
//! stage fully dispatched before the next begins, created records threaded
//! into the next stage's builders.

use std::fmt;

use pipedrive::{ApiError, CrmApi, NewActivity, NewDeal, NewOrganization, NewPerson};
use rand::Rng;
use tokio_util::sync::CancellationToken;

use crate::builders;
use crate::config::SeedConfig;
use crate::dispatch;
use crate::report::{EntityKind, SeedReport};

#[derive(Debug, Clone)]
pub enum SeedError {
    /// A hard CRM failure (credential rejection) that invalidates the run.
    Api(ApiError),
}

impl SeedError {
    pub fn message(&self) -> String {
        match self {
            SeedError::Api(err) => err.to_string(),
        }
    }
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SeedError {}

impl From<ApiError> for SeedError {
    fn from(err: ApiError) -> Self {
        SeedError::Api(err)
    }
}

/// Runs one full seeding pass against `client`.
///
/// Individual create failures are absorbed into the report; only hard
/// failures (see [`SeedError`]) propagate. Cancelling `cancel` ends the run
/// after the in-flight call and yields a partial report.
pub async fn run_seed<C, R>(
    client: &C,
    cfg: &SeedConfig,
    rng: &mut R,
    cancel: &CancellationToken,
) -> Result<SeedReport, SeedError>
where
    C: CrmApi,
    R: Rng,
{
    let mut report = SeedReport::default();

    tracing::info!(requested = cfg.organizations, "seeding organizations");
    let payloads: Vec<NewOrganization> = (0..cfg.organizations)
        .map(|i| builders::organization(i, rng))
        .collect();
    let outcome = dispatch::run_stage(EntityKind::Organization, payloads, cfg.delay, cancel, |p| {
        client.create_organization(p)
    })
    .await?;
    let orgs = outcome.created;
    report.counts.organizations = orgs.len();
    report.failures.extend(outcome.failures);
    if outcome.cancelled {
        report.cancelled = true;
        return Ok(report);
    }

    tracing::info!(requested = cfg.persons, "seeding persons");
    if orgs.is_empty() && cfg.persons > 0 {
        tracing::warn!("no organizations available, skipping persons");
    }
    let payloads: Vec<NewPerson> = (0..cfg.persons)
        .filter_map(|i| builders::person(i, &orgs, rng))
        .collect();
    let outcome = dispatch::run_stage(EntityKind::Person, payloads, cfg.delay, cancel, |p| {
        client.create_person(p)
    })
    .await?;
    let persons = outcome.created;
    report.counts.persons = persons.len();
    report.failures.extend(outcome.failures);
    if outcome.cancelled {
        report.cancelled = true;
        return Ok(report);
    }

    tracing::info!(requested = cfg.deals, "seeding deals");
    if (persons.is_empty() || orgs.is_empty()) && cfg.deals > 0 {
        tracing::warn!("missing upstream persons or organizations, skipping deals");
    }
    let payloads: Vec<NewDeal> = (0..cfg.deals)
        .filter_map(|_| builders::deal(&persons, &orgs, rng))
        .collect();
    let outcome = dispatch::run_stage(EntityKind::Deal, payloads, cfg.delay, cancel, |p| {
        client.create_deal(p)
    })
    .await?;
    let deals = outcome.created;
    report.counts.deals = deals.len();
    report.failures.extend(outcome.failures);
    if outcome.cancelled {
        report.cancelled = true;
        return Ok(report);
    }

    tracing::info!(requested = cfg.activities, "seeding activities");
    if (deals.is_empty() || persons.is_empty()) && cfg.activities > 0 {
        tracing::warn!("missing upstream deals or persons, skipping activities");
    }
    let payloads: Vec<NewActivity> = (0..cfg.activities)
        .filter_map(|_| builders::activity(&deals, &persons, cfg.completed_ratio, rng))
        .collect();
    let outcome = dispatch::run_stage(EntityKind::Activity, payloads, cfg.delay, cancel, |p| {
        client.create_activity(p)
    })
    .await?;
    report.counts.activities = outcome.created.len();
    report.failures.extend(outcome.failures);
    report.cancelled = outcome.cancelled;

    tracing::info!(
        organizations = report.counts.organizations,
        persons = report.counts.persons,
        deals = report.counts.deals,
        activities = report.counts.activities,
        failures = report.failures.len(),
        "seed run complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use pipedrive::{Activity, ApiResult, Deal, Organization, Person};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[derive(Clone, Copy)]
    enum FailureMode {
        None,
        EveryNth(usize),
        Always,
        Auth,
    }

    #[derive(Default)]
    struct MockState {
        next_id: i64,
        calls: usize,
        call_log: Vec<EntityKind>,
        orgs: Vec<Organization>,
        persons: Vec<Person>,
        deals: Vec<Deal>,
        activity_refs: Vec<(i64, i64)>,
    }

    struct MockCrm {
        mode: FailureMode,
        state: Mutex<MockState>,
    }

    impl MockCrm {
        fn new(mode: FailureMode) -> Self {
            Self {
                mode,
                state: Mutex::new(MockState::default()),
            }
        }

        fn begin(&self, kind: EntityKind) -> ApiResult<i64> {
            let mut state = self.state.lock().unwrap();
            state.calls += 1;
            state.call_log.push(kind);
            match self.mode {
                FailureMode::None => {}
                FailureMode::EveryNth(n) if state.calls % n != 0 => {}
                FailureMode::EveryNth(_) => {
                    return Err(ApiError::rejected(500, "synthetic failure"));
                }
                FailureMode::Always => {
                    return Err(ApiError::rejected(400, "success=false"));
                }
                FailureMode::Auth => {
                    return Err(ApiError::unauthorized("token revoked"));
                }
            }
            state.next_id += 1;
            Ok(state.next_id)
        }
    }

    #[async_trait]
    impl CrmApi for MockCrm {
        async fn create_organization(&self, payload: NewOrganization) -> ApiResult<Organization> {
            let id = self.begin(EntityKind::Organization)?;
            let record = Organization {
                id,
                name: payload.name,
            };
            self.state.lock().unwrap().orgs.push(record.clone());
            Ok(record)
        }

        async fn create_person(&self, payload: NewPerson) -> ApiResult<Person> {
            let id = self.begin(EntityKind::Person)?;
            let record = Person {
                id,
                name: payload.name,
                org_id: payload.org_id,
            };
            self.state.lock().unwrap().persons.push(record.clone());
            Ok(record)
        }

        async fn create_deal(&self, payload: NewDeal) -> ApiResult<Deal> {
            let id = self.begin(EntityKind::Deal)?;
            let record = Deal {
                id,
                title: payload.title,
                person_id: payload.person_id,
                org_id: payload.org_id,
            };
            self.state.lock().unwrap().deals.push(record.clone());
            Ok(record)
        }

        async fn create_activity(&self, payload: NewActivity) -> ApiResult<Activity> {
            let id = self.begin(EntityKind::Activity)?;
            self.state
                .lock()
                .unwrap()
                .activity_refs
                .push((payload.deal_id, payload.person_id));
            Ok(Activity {
                id,
                subject: payload.subject,
            })
        }
    }

    fn cfg(organizations: usize, persons: usize, deals: usize, activities: usize) -> SeedConfig {
        SeedConfig {
            organizations,
            persons,
            deals,
            activities,
            delay: Duration::from_millis(10),
            completed_ratio: 0.6,
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[tokio::test(start_paused = true)]
    async fn single_org_serves_all_persons() {
        let crm = MockCrm::new(FailureMode::None);
        let report = run_seed(&crm, &cfg(1, 3, 0, 0), &mut rng(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(report.counts.organizations, 1);
        assert_eq!(report.counts.persons, 3);
        assert_eq!(report.counts.deals, 0);
        assert_eq!(report.counts.activities, 0);
        assert!(report.failures.is_empty());

        let state = crm.state.lock().unwrap();
        let org_id = state.orgs[0].id;
        assert!(state.persons.iter().all(|p| p.org_id == org_id));
        assert_eq!(state.calls, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_upstream_cascades_to_zero() {
        let crm = MockCrm::new(FailureMode::None);
        let report = run_seed(&crm, &cfg(0, 5, 5, 5), &mut rng(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(report.total_created(), 0);
        assert!(report.failures.is_empty());
        assert_eq!(crm.state.lock().unwrap().calls, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stages_run_in_dependency_order() {
        let crm = MockCrm::new(FailureMode::None);
        run_seed(&crm, &cfg(3, 4, 5, 6), &mut rng(), &CancellationToken::new())
            .await
            .unwrap();

        let state = crm.state.lock().unwrap();
        let rank = |kind: &EntityKind| match kind {
            EntityKind::Organization => 0,
            EntityKind::Person => 1,
            EntityKind::Deal => 2,
            EntityKind::Activity => 3,
        };
        let ranks: Vec<u8> = state.call_log.iter().map(rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted, "stage calls interleaved: {:?}", state.call_log);
    }

    #[tokio::test(start_paused = true)]
    async fn created_references_exist_at_dispatch_time() {
        let crm = MockCrm::new(FailureMode::None);
        run_seed(&crm, &cfg(4, 8, 10, 10), &mut rng(), &CancellationToken::new())
            .await
            .unwrap();

        let state = crm.state.lock().unwrap();
        let org_ids: Vec<i64> = state.orgs.iter().map(|o| o.id).collect();
        let person_ids: Vec<i64> = state.persons.iter().map(|p| p.id).collect();
        let deal_ids: Vec<i64> = state.deals.iter().map(|d| d.id).collect();

        for deal in &state.deals {
            assert!(person_ids.contains(&deal.person_id));
            assert!(org_ids.contains(&deal.org_id));
        }
        for (deal_id, person_id) in &state.activity_refs {
            assert!(deal_ids.contains(deal_id));
            assert!(person_ids.contains(person_id));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn every_third_failure_still_completes() {
        let crm = MockCrm::new(FailureMode::EveryNth(3));
        let report = run_seed(&crm, &cfg(6, 6, 6, 6), &mut rng(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(report.counts.organizations, 4);
        assert_eq!(report.counts.persons, 4);
        assert_eq!(report.counts.deals, 4);
        assert_eq!(report.counts.activities, 4);
        assert_eq!(report.failures.len(), 8);
        assert!(!report.cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn all_rejected_yields_zero_counts() {
        let crm = MockCrm::new(FailureMode::Always);
        let report = run_seed(&crm, &cfg(3, 3, 3, 3), &mut rng(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(report.total_created(), 0);
        // Downstream stages never dispatched: no upstream records exist.
        assert_eq!(report.failures.len(), 3);
        assert!(
            report
                .failures
                .iter()
                .all(|f| f.kind == EntityKind::Organization)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn auth_rejection_aborts_the_run() {
        let crm = MockCrm::new(FailureMode::Auth);
        let result = run_seed(&crm, &cfg(3, 3, 3, 3), &mut rng(), &CancellationToken::new()).await;

        assert!(matches!(
            result,
            Err(SeedError::Api(ApiError::Unauthorized(_)))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn pre_cancelled_token_creates_nothing() {
        let crm = MockCrm::new(FailureMode::None);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let report = run_seed(&crm, &cfg(5, 5, 5, 5), &mut rng(), &cancel)
            .await
            .unwrap();

        assert!(report.cancelled);
        assert_eq!(report.total_created(), 0);
        assert_eq!(crm.state.lock().unwrap().calls, 0);
    }
}
