use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Organization,
    Person,
    Deal,
    Activity,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Organization => "organization",
            EntityKind::Person => "person",
            EntityKind::Deal => "deal",
            EntityKind::Activity => "activity",
        };
        f.write_str(name)
    }
}

/// One absorbed per-entity failure. Collected so callers can inspect partial
/// failures programmatically instead of scraping logs.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFailure {
    pub kind: EntityKind,
    pub label: String,
    pub error: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedCounts {
    pub organizations: usize,
    pub persons: usize,
    pub deals: usize,
    pub activities: usize,
}

/// Outcome of one seeding run. Counts are what was actually created, which
/// may be below the requested counts when creates fail or upstream stages
/// come up empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeedReport {
    pub counts: SeedCounts,
    pub failures: Vec<CreateFailure>,
    pub cancelled: bool,
}

impl SeedReport {
    pub fn total_created(&self) -> usize {
        self.counts.organizations + self.counts.persons + self.counts.deals + self.counts.activities
    }
}
