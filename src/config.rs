use std::time::Duration;

pub const DEFAULT_ORGANIZATIONS: usize = 20;
pub const DEFAULT_PERSONS: usize = 50;
pub const DEFAULT_DEALS: usize = 100;
pub const DEFAULT_ACTIVITIES: usize = 200;
pub const DEFAULT_DELAY_MS: u64 = 150;
pub const DEFAULT_COMPLETED_RATIO: f64 = 0.6;

/// Caller-supplied knobs for one seeding run. Counts are targets; the
/// report carries what was actually created.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub organizations: usize,
    pub persons: usize,
    pub deals: usize,
    pub activities: usize,
    /// Pause between consecutive create calls. Keeps the run under
    /// Pipedrive's request ceiling.
    pub delay: Duration,
    /// Fraction of activities marked done. Done activities get past due
    /// dates, open ones future due dates.
    pub completed_ratio: f64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            organizations: DEFAULT_ORGANIZATIONS,
            persons: DEFAULT_PERSONS,
            deals: DEFAULT_DEALS,
            activities: DEFAULT_ACTIVITIES,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            completed_ratio: DEFAULT_COMPLETED_RATIO,
        }
    }
}
