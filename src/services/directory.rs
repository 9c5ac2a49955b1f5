use crate::models::{MentorProfile, StartupProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur while loading the profile directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to read profiles file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON profiles: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid TOML profiles: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unsupported profiles format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid profile {id}: {reason}")]
    InvalidProfile { id: String, reason: String },

    #[error("Duplicate profile id: {0}")]
    DuplicateId(String),
}

/// Read-only source of mentor and startup profiles
///
/// Collections are small, so every lookup is a full scan.
pub trait ProfileDirectory: Send + Sync {
    fn mentors(&self) -> &[MentorProfile];

    fn startups(&self) -> &[StartupProfile];

    fn mentor(&self, id: &str) -> Option<&MentorProfile> {
        self.mentors().iter().find(|mentor| mentor.id == id)
    }

    fn startup(&self, id: &str) -> Option<&StartupProfile> {
        self.startups().iter().find(|startup| startup.id == id)
    }
}

/// On-disk fixture layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ProfilesFile {
    #[serde(default)]
    mentors: Vec<MentorProfile>,
    #[serde(default)]
    startups: Vec<StartupProfile>,
}

/// Profile directory held entirely in memory, immutable after load
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    mentors: Vec<MentorProfile>,
    startups: Vec<StartupProfile>,
}

impl InMemoryDirectory {
    /// Build a directory, validating every profile and rejecting duplicate ids
    pub fn new(
        mentors: Vec<MentorProfile>,
        startups: Vec<StartupProfile>,
    ) -> Result<Self, DirectoryError> {
        let mut mentor_ids = HashSet::new();
        for mentor in &mentors {
            mentor.validate().map_err(|e| DirectoryError::InvalidProfile {
                id: mentor.id.clone(),
                reason: e.to_string(),
            })?;
            if !mentor_ids.insert(mentor.id.as_str()) {
                return Err(DirectoryError::DuplicateId(mentor.id.clone()));
            }
        }

        let mut startup_ids = HashSet::new();
        for startup in &startups {
            startup.validate().map_err(|e| DirectoryError::InvalidProfile {
                id: startup.id.clone(),
                reason: e.to_string(),
            })?;
            if !startup_ids.insert(startup.id.as_str()) {
                return Err(DirectoryError::DuplicateId(startup.id.clone()));
            }
        }

        Ok(Self { mentors, startups })
    }

    pub fn from_json_str(json: &str) -> Result<Self, DirectoryError> {
        let file: ProfilesFile = serde_json::from_str(json)?;
        Self::new(file.mentors, file.startups)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, DirectoryError> {
        let file: ProfilesFile = toml::from_str(raw)?;
        Self::new(file.mentors, file.startups)
    }

    /// Load profiles from a `.json` or `.toml` fixture file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let parse = parser_for(path)?;

        let raw = std::fs::read_to_string(path)?;
        let directory = parse(&raw)?;
        directory.log_loaded(path);

        Ok(directory)
    }

    /// Async variant of [`InMemoryDirectory::load`] for use inside the runtime
    pub async fn load_async<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let parse = parser_for(path)?;

        let raw = tokio::fs::read_to_string(path).await?;
        let directory = parse(&raw)?;
        directory.log_loaded(path);

        Ok(directory)
    }

    fn log_loaded(&self, path: &Path) {
        tracing::info!(
            "Loaded {} mentors and {} startups from {}",
            self.mentors.len(),
            self.startups.len(),
            path.display()
        );
    }
}

type Parser = fn(&str) -> Result<InMemoryDirectory, DirectoryError>;

/// Pick a parser from the file extension
fn parser_for(path: &Path) -> Result<Parser, DirectoryError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(InMemoryDirectory::from_json_str),
        Some("toml") => Ok(InMemoryDirectory::from_toml_str),
        _ => Err(DirectoryError::UnsupportedFormat(path.display().to_string())),
    }
}

impl ProfileDirectory for InMemoryDirectory {
    fn mentors(&self) -> &[MentorProfile] {
        &self.mentors
    }

    fn startups(&self) -> &[StartupProfile] {
        &self.startups
    }
}
