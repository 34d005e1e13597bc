use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn new(
        config_content_provider: FileContentConfigProvider,
        config_serializer: YamlConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    /// Cached config, else the stored one, else `TConfig::default()`.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let config_data_result = self.config_content_provider.get_config_content()?;
        if let Some(config_data) = config_data_result {
            let config = self.config_serializer.deserialize(&config_data)?;

            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Difficulty, GameMode, Mark, TicTacToeSettings};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_settings_{}.yaml", random_number))
    }

    #[test]
    fn test_settings_round_trip_through_manager() {
        let settings = TicTacToeSettings {
            mode: GameMode::MultiPlayer,
            human_mark: Mark::O,
            difficulty: Difficulty::Medium,
            bot_move_delay_ms: 0,
            end_of_round_delay_ms: 250,
        };
        let manager = ConfigManager::from_yaml_file(get_temp_file_path());

        manager.set_config(&settings).unwrap();
        assert_eq!(manager.get_config().unwrap(), settings);
    }

    #[test]
    fn test_missing_file_returns_default() {
        let manager: ConfigManager<_, TicTacToeSettings, _> =
            ConfigManager::from_yaml_file("this_settings_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), TicTacToeSettings::default());
    }

    #[test]
    fn test_invalid_settings_are_not_saved() {
        let settings = TicTacToeSettings {
            bot_move_delay_ms: 999_999,
            ..TicTacToeSettings::default()
        };
        let path = get_temp_file_path();
        let manager = ConfigManager::from_yaml_file(path.clone());

        assert!(manager.set_config(&settings).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_stored_settings_failing_validation_are_rejected() {
        let path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(path.clone());
        provider
            .set_config_content(
                "mode: SinglePlayer\nhuman_mark: X\ndifficulty: Hard\nbot_move_delay_ms: 20000\nend_of_round_delay_ms: 0\n",
            )
            .unwrap();

        let manager: ConfigManager<_, TicTacToeSettings, _> = ConfigManager::from_yaml_file(path);
        assert!(manager.get_config().is_err());
    }
}
