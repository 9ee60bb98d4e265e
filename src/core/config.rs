use crate::core::config_validation::{
    parse_brightness, parse_contrast, parse_exposure, parse_frame_size, parse_gain,
    parse_jpeg_quality, ValidationError,
};
use crate::hardware::camera::FrameSize;

/// アプリケーション設定
///
/// この構造体はビルド時に`cfg.toml`ファイルから
/// 読み込まれた設定を保持します。
#[toml_cfg::toml_config]
pub struct Config {
    #[default(0)]
    camera_gain: u8,

    #[default(0)]
    camera_exposure: u16,

    #[default(false)]
    camera_invert_image: bool,

    #[default(0)]
    camera_brightness: i8,

    #[default(0)]
    camera_contrast: i8,

    #[default("XGA")]
    frame_size: &'static str,

    #[default(10)] // 0-63, 小さいほど高品質
    jpeg_quality: u8,
}

/// 設定エラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("フレームサイズ指定が無効です: {0}")]
    InvalidFrameSize(String),
    #[error("jpeg_quality の値が無効です (0-63): {0}")]
    InvalidJpegQuality(u8),
    #[error("camera_gain の値が無効です (0-30): {0}")]
    InvalidGain(u8),
    #[error("camera_exposure の値が無効です (0-1200): {0}")]
    InvalidExposure(u16),
    #[error("camera_brightness の値が無効です (-2..=2): {0}")]
    InvalidBrightness(i8),
    #[error("camera_contrast の値が無効です (-2..=2): {0}")]
    InvalidContrast(i8),
}

/// アプリケーション設定を表す構造体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 手動ゲイン (0-30)
    pub camera_gain: u8,

    /// 手動露出 (0-1200)
    pub camera_exposure: u16,

    /// 画像の上下反転
    pub camera_invert_image: bool,

    /// 明るさ (-2..=2)
    pub camera_brightness: i8,

    /// コントラスト (-2..=2)
    pub camera_contrast: i8,

    /// フレームサイズ
    pub frame_size: FrameSize,

    /// JPEG品質 (0-63)
    pub jpeg_quality: u8,
}

impl AppConfig {
    /// 設定ファイルから設定をロードします
    pub fn load() -> Result<Self, ConfigError> {
        // toml_cfg によって生成された定数
        let config = CONFIG;

        // カメラ調整値を検証して取得
        let camera_gain = parse_gain(config.camera_gain).map_err(map_validation_error)?;
        let camera_exposure =
            parse_exposure(config.camera_exposure).map_err(map_validation_error)?;
        let camera_brightness =
            parse_brightness(config.camera_brightness).map_err(map_validation_error)?;
        let camera_contrast =
            parse_contrast(config.camera_contrast).map_err(map_validation_error)?;

        // 撮影設定を検証して取得
        let frame_size = parse_frame_size(config.frame_size).map_err(map_validation_error)?;
        let jpeg_quality = parse_jpeg_quality(config.jpeg_quality).map_err(map_validation_error)?;

        Ok(AppConfig {
            camera_gain,
            camera_exposure,
            camera_invert_image: config.camera_invert_image,
            camera_brightness,
            camera_contrast,
            frame_size,
            jpeg_quality,
        })
    }
}

fn map_validation_error(err: ValidationError) -> ConfigError {
    match err {
        ValidationError::InvalidFrameSize(v) => ConfigError::InvalidFrameSize(v),
        ValidationError::InvalidJpegQuality(v) => ConfigError::InvalidJpegQuality(v),
        ValidationError::InvalidGain(v) => ConfigError::InvalidGain(v),
        ValidationError::InvalidExposure(v) => ConfigError::InvalidExposure(v),
        ValidationError::InvalidBrightness(v) => ConfigError::InvalidBrightness(v),
        ValidationError::InvalidContrast(v) => ConfigError::InvalidContrast(v),
    }
}
