//! Builder for creating and configuring Tracker instances.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use super::Tracker;
use crate::{
    clock::{Clock, SystemClock},
    error::{Result, TrackerError},
    models::TaskSeed,
    task_list::TaskList,
};

/// File name looked up in the XDG config directory when no seed path is set.
pub const SEED_FILE_NAME: &str = "tasks.json";

#[derive(Debug, Clone)]
enum SeedSource {
    /// Seed file from XDG config if present, otherwise the demo tasks
    Default,
    /// Always the demo tasks
    Demo,
    /// An explicit seed file
    File(PathBuf),
    /// Seeds supplied in memory
    Seeds(Vec<TaskSeed>),
}

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone)]
pub struct TrackerBuilder<C = SystemClock> {
    source: SeedSource,
    clock: C,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            source: SeedSource::Default,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> TrackerBuilder<C> {
    /// Sets a seed file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/shiftboard/tasks.json` when it exists, and the
    /// built-in demo tasks otherwise.
    pub fn with_seed_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.source = SeedSource::File(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the built-in demo tasks regardless of any config file.
    pub fn with_demo_tasks(mut self) -> Self {
        self.source = SeedSource::Demo;
        self
    }

    /// Uses the given seeds.
    pub fn with_seeds(mut self, seeds: Vec<TaskSeed>) -> Self {
        self.source = SeedSource::Seeds(seeds);
        self
    }

    /// Replaces the clock used to timestamp transitions.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> TrackerBuilder<C2> {
        TrackerBuilder {
            source: self.source,
            clock,
        }
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the seed file cannot be read
    /// Returns `TrackerError::Serialization` if the seed file is not valid
    /// JSON
    /// Returns `TrackerError::InvalidSeed` if the seeds violate a task list
    /// constraint
    pub fn build(self) -> Result<Tracker<C>> {
        let seeds = match self.source {
            SeedSource::Default => match Self::default_seed_path() {
                Some(path) => Self::read_seed_file(&path)?,
                None => {
                    info!("No seed file configured, using demo tasks");
                    TaskSeed::demo()
                }
            },
            SeedSource::Demo => TaskSeed::demo(),
            SeedSource::File(path) => Self::read_seed_file(&path)?,
            SeedSource::Seeds(seeds) => seeds,
        };

        let tasks = TaskList::from_seeds(seeds)?;
        info!("Tracker ready with {} tasks", tasks.len());

        Ok(Tracker::new(tasks, self.clock))
    }

    /// Reads a JSON array of task seeds.
    pub fn read_seed_file(path: &Path) -> Result<Vec<TaskSeed>> {
        info!("Loading tasks from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| TrackerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Returns the seed file in the XDG config directory, if one exists.
    fn default_seed_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("shiftboard").find_config_file(SEED_FILE_NAME)
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
