//! Trading session windows — named time-of-day ranges in exchange time.

use serde::{Deserialize, Serialize};

/// A named `[start, end)` hour window, wrapping midnight when
/// `start > end` (e.g. Asia 18→3 covers 18:00–02:59).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionWindow {
    /// Stable lookup key, e.g. `"asia"`.
    pub key: String,
    /// Display name, e.g. `"Asia"`.
    pub name: String,
    pub start: u32,
    pub end: u32,
}

impl SessionWindow {
    pub fn new(key: &str, name: &str, start: u32, end: u32) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            start,
            end,
        }
    }

    /// Half-open membership test with midnight wraparound.
    pub fn contains(&self, hour: u32) -> bool {
        if self.start > self.end {
            hour >= self.start || hour < self.end
        } else {
            hour >= self.start && hour < self.end
        }
    }
}

/// Ordered table of session windows.
///
/// Order matters: `assign` gives a trade to the first window that
/// contains its hour, so overlapping windows (NY vs NY Lunch) resolve
/// by table position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTable {
    pub windows: Vec<SessionWindow>,
}

impl SessionTable {
    pub fn new(windows: Vec<SessionWindow>) -> Self {
        Self { windows }
    }

    /// Standard futures-journal table in US Eastern hours.
    pub fn default_eastern() -> Self {
        Self::new(vec![
            SessionWindow::new("asia", "Asia", 18, 3),
            SessionWindow::new("london", "London", 3, 12),
            SessionWindow::new("ny", "New York", 9, 16),
            SessionWindow::new("ny-lunch", "NY Lunch", 11, 14),
        ])
    }

    /// Look up a window by key. `None` for unknown keys — callers
    /// treat that as "no constraint".
    pub fn find(&self, key: &str) -> Option<&SessionWindow> {
        self.windows.iter().find(|w| w.key == key)
    }

    /// First window containing the hour; `None` means the "Other"
    /// bucket.
    pub fn assign(&self, hour: u32) -> Option<&SessionWindow> {
        self.windows.iter().find(|w| w.contains(hour))
    }
}

impl Default for SessionTable {
    fn default() -> Self {
        Self::default_eastern()
    }
}
