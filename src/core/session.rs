//! Session context: the selected server, the latest good snapshot, and the
//! disclosure state. Passed explicitly to every render path.

use crate::core::clock::{ServerClock, TimeSource};
use crate::core::disclosure::{Disclosure, ToggleOutcome};
use crate::core::resolver::resolve;
use crate::errors::AppError;
use crate::models::schedule::ResolvedBucket;
use crate::models::server::Server;
use crate::models::task_type::{TASK_TYPES, TaskType};
use crate::source::ScheduleSource;
use chrono::{NaiveDateTime, Timelike};
use std::collections::BTreeMap;
use std::rc::Rc;

/// One resolution result. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub resolved_at: NaiveDateTime,
    pub buckets: BTreeMap<String, ResolvedBucket>,
}

impl Snapshot {
    pub fn bucket(&self, key: &str) -> Option<&ResolvedBucket> {
        self.buckets.get(key)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ReloadOutcome {
    Updated,
    /// Load failed; the previous snapshot (if any) is still in place.
    Failed(String),
}

pub struct Session {
    server: Server,
    task_types: &'static [TaskType],
    snapshot: Option<Rc<Snapshot>>,
    load_failed: bool,
    disclosure: Disclosure,
}

impl Session {
    pub fn new(server: Server, cutoff_hour: u32) -> Self {
        Self {
            server,
            task_types: &TASK_TYPES,
            snapshot: None,
            load_failed: false,
            disclosure: Disclosure::new(TASK_TYPES.iter().map(|t| t.key), cutoff_hour),
        }
    }

    pub fn server(&self) -> Server {
        self.server
    }

    pub fn task_types(&self) -> &'static [TaskType] {
        self.task_types
    }

    /// Latest good snapshot. Cloning the `Rc` is all a reader needs.
    pub fn snapshot(&self) -> Option<Rc<Snapshot>> {
        self.snapshot.clone()
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn disclosure(&self) -> &Disclosure {
        &self.disclosure
    }

    /// Re-fetch rows and re-resolve at `now`. On success the snapshot cell
    /// is replaced and every group collapses; on failure nothing but the
    /// failure flag changes.
    pub fn reload<S: ScheduleSource + ?Sized>(&mut self, source: &S, now: NaiveDateTime) -> ReloadOutcome {
        match source.load() {
            Ok(rows) => {
                let buckets = resolve(&rows, now, self.task_types);
                self.snapshot = Some(Rc::new(Snapshot {
                    resolved_at: now,
                    buckets,
                }));
                self.load_failed = false;
                self.disclosure.reset();
                ReloadOutcome::Updated
            }
            Err(e) => {
                self.load_failed = true;
                let msg = match e {
                    AppError::LoadFailed(m) => m,
                    other => other.to_string(),
                };
                ReloadOutcome::Failed(msg)
            }
        }
    }

    /// Switch server, then re-resolve in the new server's time. The server
    /// (and so the labels) changes before the reload starts.
    pub fn toggle_server<S, T>(&mut self, source: &S, clock: &ServerClock<T>) -> ReloadOutcome
    where
        S: ScheduleSource + ?Sized,
        T: TimeSource,
    {
        self.server = self.server.toggled();
        let now = clock.now(self.server);
        self.reload(source, now)
    }

    /// Disclosure toggle for one group, judged against the last resolved hour.
    pub fn toggle_group(&mut self, key: &str) -> ToggleOutcome {
        let Some(snapshot) = self.snapshot.as_ref() else {
            return ToggleOutcome::Inert;
        };
        let hour = snapshot.resolved_at.hour();
        let has_remaining = snapshot
            .bucket(key)
            .is_some_and(|b| !b.remaining.is_empty());
        self.disclosure.toggle(key, hour, has_remaining)
    }
}
