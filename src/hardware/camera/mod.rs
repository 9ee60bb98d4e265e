/// カメラ制御モジュール
///
/// - `driver`: 外部カメラドライバ (esp32-camera) との境界トレイト
/// - `config`: 撮影設定（ピクセル形式・フレームサイズ・`CaptureConfig`）
/// - `initializer`: バス初期化シーケンス
/// - `tuner`: センサーレジスタ調整とウォームアップキャプチャ
pub mod config;
pub mod driver;
pub mod initializer;
pub mod tuner;

#[cfg(feature = "esp")]
pub mod esp;

// Mock実装（テストとnon-espビルドで使用可能）
#[cfg(not(feature = "esp"))]
pub mod mock;

pub use config::{CaptureConfig, FrameSize, GainCeiling, PixelFormat};
pub use driver::{CameraDriver, SensorControls};
pub use initializer::{HardwareInitializer, InitResult};
pub use tuner::{SensorTuner, TuningProfile};
