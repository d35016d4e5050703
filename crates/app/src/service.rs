use std::collections::VecDeque;

use crate::{Settings, SettingsRepository, SettingsService, log};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    async fn get_settings(&self) -> Result<Settings, String> {
        self.repository.read_settings().await
    }

    async fn set_settings(&self, settings: Settings) -> Result<(), String> {
        self.repository.write_settings(settings).await
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, sync::Mutex};

    use ::log::{Level, LevelFilter};
    use pretty_assertions::assert_eq;
    use sportif_domain::ValidationPolicy;

    use crate::log::{self, Service as _};

    use super::*;

    #[derive(Default)]
    struct Memory {
        settings: Cell<Option<Settings>>,
    }

    impl SettingsRepository for Memory {
        async fn read_settings(&self) -> Result<Settings, String> {
            Ok(self.settings.get().unwrap_or_default())
        }

        async fn write_settings(&self, settings: Settings) -> Result<(), String> {
            self.settings.set(Some(settings));
            Ok(())
        }
    }

    #[derive(Default)]
    struct Entries(Mutex<VecDeque<log::Entry>>);

    impl log::Repository for Entries {
        fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
            self.0
                .lock()
                .map(|entries| entries.clone())
                .map_err(|err| log::Error::Unknown(err.to_string()))
        }

        fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
            self.0
                .lock()
                .map(|mut entries| entries.push_front(entry))
                .map_err(|err| log::Error::Unknown(err.to_string()))
        }
    }

    #[tokio::test]
    async fn test_settings() {
        let service = Service::new(Memory::default());

        assert_eq!(service.get_settings().await, Ok(Settings::default()));

        let settings = Settings {
            validation: ValidationPolicy::Error,
            log_level: LevelFilter::Debug,
        };
        service.set_settings(settings).await.unwrap();

        assert_eq!(service.get_settings().await, Ok(settings));
    }

    #[test]
    fn test_log_entries() {
        let service = Service::new(Entries::default());

        service
            .add_log_entry(log::Entry::new(Level::Info, "A".to_string()))
            .unwrap();
        service
            .add_log_entry(log::Entry::new(Level::Error, "B".to_string()))
            .unwrap();

        assert_eq!(
            service
                .get_log_entries()
                .unwrap()
                .iter()
                .map(|e| (e.level, e.message.as_str()))
                .collect::<Vec<_>>(),
            vec![(Level::Error, "B"), (Level::Info, "A")]
        );
    }
}
