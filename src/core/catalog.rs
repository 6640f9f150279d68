//! Loads a directory of start list files into an ordered event catalog.
//!
//! Loading is all-or-nothing: one malformed file aborts the whole load so a
//! half-parsed meet program is never shown.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::scb::{self, SCB_EXTENSION};
use crate::domain::model::Event;
use crate::domain::ports::{StartListFile, StartListSource};
use crate::utils::error::{Result, StartListError};

/// The parsed start lists for a whole meet, ordered by event number.
/// Built once at startup; read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Orders the given events and wraps them in a catalog. Numeric event
    /// numbers sort numerically and ahead of non-numeric ones; the sort is
    /// stable, so equal numbers keep their discovery order.
    pub fn from_events(mut events: Vec<Event>) -> Self {
        events.sort_by(|a, b| compare_event_ids(&a.event, &b.event));
        Self { events }
    }

    /// Parses every file the source yields. The first failure aborts the
    /// load; the error already carries the offending file name.
    pub fn from_source(source: &impl StartListSource) -> Result<Self> {
        let mut events = Vec::new();
        for file in source.start_lists()? {
            let event = scb::parse_event(&file.lines, &file.name)?;
            tracing::debug!(
                "parsed {}: event {} with {} heats",
                file.name,
                event.event,
                event.num_heats()
            );
            events.push(event);
        }
        Ok(Self::from_events(events))
    }

    /// Loads all `.scb` files found directly in `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_source(&DirectorySource::new(dir))
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }
}

fn compare_event_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Scans a directory for `.scb` files. Matching is case-sensitive and does
/// not recurse.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl StartListSource for DirectorySource {
    fn start_lists(&self) -> Result<Vec<StartListFile>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| io_error(&self.dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(&self.dir, e))?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SCB_EXTENSION) {
                continue;
            }
            let text = fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
            files.push(StartListFile {
                name: entry.file_name().to_string_lossy().into_owned(),
                lines: text.lines().map(str::to_string).collect(),
            });
        }
        Ok(files)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StartListError {
    StartListError::Io {
        path: path.display().to_string(),
        source,
    }
}
