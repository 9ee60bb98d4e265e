/*!
 * # AI-Thinker ESP32-CAM Initializer Library
 *
 * ESP32カメラモジュールを起動し、センサーレジスタを調整するためのライブラリ
 *
 * ## モジュール構成
 * - `core`: アプリケーションの核となる機能（設定、起動シーケンス制御）
 * - `hardware`: ハードウェア制御（カメラドライバ境界、ピン設定）
 */

// 公開モジュール
pub mod core;
pub mod hardware;

// 内部で使用する型をまとめてエクスポート
pub use crate::core::{AppConfig, AppController, ConfigError};
pub use crate::hardware::camera::{
    CameraDriver, CaptureConfig, FrameSize, GainCeiling, HardwareInitializer, InitResult,
    PixelFormat, SensorControls, SensorTuner, TuningProfile,
};
pub use crate::hardware::pins::PinMap;

#[cfg(feature = "esp")]
pub use crate::hardware::camera::esp::EspCameraDriver;
#[cfg(not(feature = "esp"))]
pub use crate::hardware::camera::mock::MockCameraDriver;

/// ライブラリのバージョン情報
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
