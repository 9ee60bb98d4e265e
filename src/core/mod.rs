/// コアシステムモジュール
pub mod app_controller;
pub mod config;
pub mod config_validation;

pub use app_controller::AppController;
pub use config::{AppConfig, ConfigError};
