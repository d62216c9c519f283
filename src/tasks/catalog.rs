use crate::errors::{CatalogError, GameError};
use crate::scoring::distance::{is_valid_latitude, is_valid_longitude};
use crate::tasks::models::Task;
use crate::tasks::seed::LANDMARKS;
use rand::Rng;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Immutable set of tasks players are assigned from. Never empty.
#[derive(Debug)]
pub struct TaskCatalog {
    tasks: Vec<Task>,
}

impl TaskCatalog {
    pub fn new(tasks: Vec<Task>) -> Result<Self, CatalogError> {
        if tasks.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen_names = HashSet::with_capacity(tasks.len());
        for (index, task) in tasks.iter().enumerate() {
            if task.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if !seen_names.insert(task.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: task.name.clone(),
                });
            }
            if !is_valid_latitude(task.latitude) {
                return Err(CatalogError::LatitudeOutOfRange {
                    name: task.name.clone(),
                    latitude: task.latitude,
                });
            }
            if !is_valid_longitude(task.longitude) {
                return Err(CatalogError::LongitudeOutOfRange {
                    name: task.name.clone(),
                    longitude: task.longitude,
                });
            }
        }
        Ok(Self { tasks })
    }

    pub fn seeded() -> Result<Self, CatalogError> {
        let tasks = LANDMARKS
            .iter()
            .map(|&(name, latitude, longitude)| Task {
                name: name.to_string(),
                latitude,
                longitude,
            })
            .collect();
        Self::new(tasks)
    }

    /// Reads one JSON task per line, skipping blank lines.
    pub fn from_ndjson(path: &Path) -> Result<Self, CatalogError> {
        let io_error = |source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file_reader = BufReader::new(File::open(path).map_err(io_error)?);
        let mut tasks = Vec::new();
        for (index, line) in file_reader.lines().enumerate() {
            let line = line.map_err(io_error)?;
            if line.trim().is_empty() {
                continue;
            }
            let task = serde_json::from_str::<Task>(&line).map_err(|source| {
                CatalogError::Malformed {
                    path: path.to_path_buf(),
                    line: index + 1,
                    source,
                }
            })?;
            tasks.push(task);
        }
        Self::new(tasks)
    }

    pub fn random_task(&self) -> &Task {
        let index = rand::thread_rng().gen_range(0..self.tasks.len());
        &self.tasks[index]
    }

    pub fn find_task(&self, name: &str) -> Result<&Task, GameError> {
        self.tasks
            .iter()
            .find(|task| task.name == name)
            .ok_or_else(|| GameError::NotFound(String::from("Task not found")))
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}
