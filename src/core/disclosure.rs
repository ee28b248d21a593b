//! Visibility of each group's "remaining" list.
//!
//! Every task-type group is either collapsed or expanded, and at most one
//! group is expanded at a time. From the cutoff hour on (server time) the
//! toggle is disabled and the presenter hides it.

/// Default cutoff: no expanding from 21:00 server time.
pub const DEFAULT_CUTOFF_HOUR: u32 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Expanded,
    Collapsed,
    /// Past the cutoff, unknown group, or nothing to show.
    Inert,
}

#[derive(Debug, Clone)]
pub struct Disclosure {
    groups: Vec<(String, GroupState)>,
    cutoff_hour: u32,
}

impl Disclosure {
    pub fn new<I, S>(keys: I, cutoff_hour: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            groups: keys
                .into_iter()
                .map(|k| (k.into(), GroupState::Collapsed))
                .collect(),
            cutoff_hour,
        }
    }

    pub fn cutoff_hour(&self) -> u32 {
        self.cutoff_hour
    }

    /// Whether the toggle is offered at all at `hour`.
    pub fn toggle_enabled(&self, hour: u32) -> bool {
        hour < self.cutoff_hour
    }

    pub fn state(&self, key: &str) -> GroupState {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, s)| *s)
            .unwrap_or(GroupState::Collapsed)
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.state(key) == GroupState::Expanded
    }

    pub fn expanded(&self) -> Option<&str> {
        self.groups
            .iter()
            .find(|(_, s)| *s == GroupState::Expanded)
            .map(|(k, _)| k.as_str())
    }

    /// User toggle on group `key`, with `hour` taken from the last resolved
    /// `now`. Any other expanded group is collapsed first.
    pub fn toggle(&mut self, key: &str, hour: u32, has_remaining: bool) -> ToggleOutcome {
        if !self.toggle_enabled(hour) {
            return ToggleOutcome::Inert;
        }
        let Some(idx) = self.groups.iter().position(|(k, _)| k == key) else {
            return ToggleOutcome::Inert;
        };

        let was_open = self.groups[idx].1 == GroupState::Expanded;
        self.collapse_all();

        if was_open {
            ToggleOutcome::Collapsed
        } else if has_remaining {
            self.groups[idx].1 = GroupState::Expanded;
            ToggleOutcome::Expanded
        } else {
            ToggleOutcome::Inert
        }
    }

    /// Called after every re-resolution.
    pub fn reset(&mut self) {
        self.collapse_all();
    }

    fn collapse_all(&mut self) {
        for (_, s) in &mut self.groups {
            *s = GroupState::Collapsed;
        }
    }
}
