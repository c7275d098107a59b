pub mod config_service;
pub mod dto;
pub mod group_settings_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::group_settings_repository::FileGroupSettingsRepository;
pub use crate::paths::ModelGroupsPaths;
