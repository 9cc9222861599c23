//! Crew and site reference data.
//!
//! Workers and sites are read-only inputs to the engine. They are passed
//! in explicitly as a [`Roster`] rather than looked up from shared state.

use serde::{Deserialize, Serialize};

/// A field worker who can be assigned tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Team label.
    pub group: String,
    /// Job title.
    pub title: String,
}

/// A location where work takes place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Unique site identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
}

impl Worker {
    /// Creates a worker with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            group: String::new(),
            title: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the team label.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Sets the job title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Site {
    /// Creates a site.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
        }
    }

    /// Sets the address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

/// Reference data for one crew: its workers and the sites they visit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Workers, in display order.
    pub workers: Vec<Worker>,
    /// Known sites.
    pub sites: Vec<Site>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a worker.
    pub fn with_worker(mut self, worker: Worker) -> Self {
        self.workers.push(worker);
        self
    }

    /// Adds a site.
    pub fn with_site(mut self, site: Site) -> Self {
        self.sites.push(site);
        self
    }

    /// Finds a worker by ID.
    pub fn worker(&self, id: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    /// Finds a site by ID.
    pub fn site(&self, id: &str) -> Option<&Site> {
        self.sites.iter().find(|s| s.id == id)
    }

    /// Whether a worker with this ID exists.
    pub fn has_worker(&self, id: &str) -> bool {
        self.worker(id).is_some()
    }

    /// Workers belonging to a team, in roster order.
    pub fn workers_in_group(&self, group: &str) -> Vec<&Worker> {
        self.workers.iter().filter(|w| w.group == group).collect()
    }
}
