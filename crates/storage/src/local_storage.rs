use std::{
    collections::VecDeque,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use sportif_app::{Settings, SettingsRepository, log};
use strum::AsRefStr;

const MAX_LOG_ENTRIES: usize = 100;

/// JSON files in a directory, one file per key.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &Key) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_ref()))
    }

    fn get<T: DeserializeOwned>(&self, key: &Key) -> Result<Option<T>, LocalStorageError> {
        match fs::read_to_string(self.path(key)) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set<T: Serialize>(&self, key: &Key, value: &T) -> Result<(), LocalStorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), serde_json::to_string(value)?)?;
        Ok(())
    }
}

#[derive(AsRefStr)]
enum Key {
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "log")]
    Log,
}

#[derive(thiserror::Error, Debug)]
pub enum LocalStorageError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SettingsRepository for LocalStorage {
    async fn read_settings(&self) -> Result<Settings, String> {
        self.get(&Key::Settings)
            .map(Option::unwrap_or_default)
            .map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        self.set(&Key::Settings, &settings).map_err(|err| err.to_string())
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.get(&Key::Log)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_LOG_ENTRIES);
        self.set(&Key::Log, &entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
