//! File-based data source.
//!
//! Reads a sensor reading from a JSON file, e.g. one written periodically by
//! a gateway script or a recorded sample for offline demos.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::{DataSource, FetchError, PollOutcome, SensorReading};

/// A data source that reads sensor readings from a JSON file.
///
/// The source tracks the file's modification time and only yields a new
/// outcome when the file has been updated. Errors are reported once per
/// distinct failure so a missing file does not flood the caller.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<FetchError>,
    last_modified: Option<SystemTime>,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
        }
    }

    /// Returns the path being watched.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn get_modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    fn read_file(&self) -> PollOutcome {
        let content = fs::read_to_string(&self.path)?;
        SensorReading::from_json(&content)
    }

    /// Suppress repeats of the error reported on the previous poll.
    fn report(&mut self, outcome: PollOutcome) -> Option<PollOutcome> {
        match outcome {
            Ok(reading) => {
                self.last_error = None;
                Some(Ok(reading))
            }
            Err(e) if self.last_error.as_ref() == Some(&e) => None,
            Err(e) => {
                self.last_error = Some(e.clone());
                Some(Err(e))
            }
        }
    }
}

impl DataSource for FileSource {
    fn poll(&mut self) -> Option<PollOutcome> {
        let current_modified = self.get_modified_time();

        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,        // Nothing read successfully yet
            (Some(_), None) => false, // File disappeared, keep last reading
            (Some(last), Some(current)) => current > last,
        };

        if !file_changed {
            return None;
        }

        let outcome = self.read_file();
        if outcome.is_ok() {
            self.last_modified = current_modified;
        }
        self.report(outcome)
    }

    fn description(&self) -> &str {
        &self.description
    }
}
