//! Profile persistence
//!
//! The whole profile is one JSON document, read and written wholesale.
//! Writes go to a temp file first and are moved into place atomically;
//! file locks guard concurrent access from other tickit processes.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use fs2::FileExt;

use crate::domain::Profile;

/// Store for the user profile blob
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Creates a store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the store at the platform data directory
    pub fn default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("dev", "tickit", "tickit")
            .context("Could not determine data directory")?;
        Ok(Self::new(dirs.data_dir().join("profile.json")))
    }

    /// Returns the path to the profile file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the profile, or a default one if the file does not exist
    pub fn load(&self) -> Result<Profile> {
        if !self.path.exists() {
            return Ok(Profile::default());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open profile: {}", self.path.display()))?;

        file.lock_shared()
            .context("Failed to acquire read lock on profile")?;

        let reader = BufReader::new(&file);
        let profile = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse profile: {}", self.path.display()))?;

        // Lock is released when file is dropped
        Ok(profile)
    }

    /// Writes the profile (full rewrite, atomic rename)
    pub fn save(&self, profile: &Profile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let temp_path = self.path.with_extension("json.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on profile")?;

            let mut writer = BufWriter::new(&file);
            serde_json::to_writer_pretty(&mut writer, profile)
                .context("Failed to serialize profile")?;
            writer.flush().context("Failed to flush profile")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
