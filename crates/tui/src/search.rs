//! Search dispatcher: free-text query to command.
//!
//! Responsibilities:
//! - Hold the ordered table of (token, command) entries.
//! - Resolve a query to the first entry whose token it contains.
//!
//! Does NOT handle:
//! - The flash animation or navigation (the app schedules both on a match).
//! - Notifying the user about misses (the app raises the toast).
//!
//! Invariants:
//! - Matching is substring containment on the lowercased query.
//! - Entries are tried in declaration order; the first hit wins.

use crate::command::Command;
use crate::screen::ScreenId;

/// One row of the search table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub token: String,
    pub command: Command,
}

impl SearchEntry {
    pub fn new(token: impl Into<String>, command: Command) -> Self {
        Self {
            token: token.into().to_lowercase(),
            command,
        }
    }
}

/// Outcome of looking a query up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Matched { token: String, command: Command },
    NoMatch { query: String },
}

impl SearchOutcome {
    /// Text of the notification shown for a miss.
    pub fn no_match_message(query: &str) -> String {
        format!("No results found for '{query}'")
    }
}

/// Ordered token table.
#[derive(Debug, Clone)]
pub struct SearchDispatcher {
    entries: Vec<SearchEntry>,
}

impl Default for SearchDispatcher {
    fn default() -> Self {
        let display = || Command::OpenSystemFeature("Display".to_string());
        Self::new(vec![
            SearchEntry::new("user", Command::NavigateTo(ScreenId::Accounts)),
            SearchEntry::new("account", Command::NavigateTo(ScreenId::Accounts)),
            SearchEntry::new("bluetooth", Command::NavigateTo(ScreenId::BluetoothDevices)),
            SearchEntry::new("devices", Command::NavigateTo(ScreenId::BluetoothDevices)),
            SearchEntry::new("system", Command::NavigateTo(ScreenId::System)),
            SearchEntry::new("taskbar", display()),
            SearchEntry::new("display", display()),
            SearchEntry::new("windows update", Command::NavigateTo(ScreenId::WindowsUpdate)),
            SearchEntry::new("update", Command::NavigateTo(ScreenId::WindowsUpdate)),
            SearchEntry::new("personalize", display()),
        ])
    }
}

impl SearchDispatcher {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn lookup(&self, query: &str) -> SearchOutcome {
        let needle = query.to_lowercase();
        match self.entries.iter().find(|e| needle.contains(e.token.as_str())) {
            Some(entry) => {
                tracing::debug!(query, token = %entry.token, "Search matched");
                SearchOutcome::Matched {
                    token: entry.token.clone(),
                    command: entry.command.clone(),
                }
            }
            None => {
                tracing::debug!(query, "Search found no match");
                SearchOutcome::NoMatch {
                    query: query.to_string(),
                }
            }
        }
    }
}
