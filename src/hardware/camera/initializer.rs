use std::fmt;

use log::{error, info};

use crate::hardware::camera::config::{CaptureConfig, FrameSize, PixelFormat};
use crate::hardware::camera::driver::{CameraDriver, STATUS_OK};
use crate::hardware::pins::PinMap;

/// マスタークロック周波数 (20MHz。OV2640のフレームレート倍増実験時は10MHz)
pub const XCLK_FREQ_HZ: u32 = 20_000_000;

/// フレームバッファ数（2以上は継続モードになりJPEG専用）
pub const FB_COUNT: u8 = 1;

/// 起動シーケンスの終端結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitResult {
    /// バス初期化とセンサー調整が完了
    Success,
    /// ドライバがバス初期化を拒否した（生のステータスコードを保持）
    HardwareInitFailed(i32),
    /// バスは初期化できたがセンサーチップを識別できなかった
    SensorUnavailable,
}

impl fmt::Display for InitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitResult::Success => write!(f, "カメラ初期化に成功しました"),
            InitResult::HardwareInitFailed(code) => {
                write!(f, "カメラ初期化に失敗しました (エラーコード: {:#x})", code)
            }
            InitResult::SensorUnavailable => {
                write!(f, "カメラセンサーを識別できませんでした")
            }
        }
    }
}

/// バス初期化を担当するコンポーネント
pub struct HardwareInitializer;

impl HardwareInitializer {
    /// 撮影設定を組み立ててドライバへ一括で渡す
    ///
    /// ピン配置とマスタークロックは配線に固定された定数、フレームサイズと
    /// JPEG品質は配備時定数（`cfg.toml` 由来）。失敗した場合、ドライバの
    /// セッション状態は不定なので、センサー調整へ進んではならない。
    pub fn initialize_hardware<D: CameraDriver>(
        driver: &mut D,
        frame_size: FrameSize,
        jpeg_quality: u8,
    ) -> InitResult {
        let config = CaptureConfig {
            pins: PinMap::ai_thinker(),
            xclk_freq_hz: XCLK_FREQ_HZ,
            pixel_format: PixelFormat::Jpeg,
            frame_size,
            jpeg_quality,
            fb_count: FB_COUNT,
        };
        debug_assert!(config.buffering_is_valid());

        let status = driver.init(&config);
        if status == STATUS_OK {
            info!(
                "カメラバスを初期化しました ({:?}, JPEG品質: {})",
                frame_size, jpeg_quality
            );
            InitResult::Success
        } else {
            let result = InitResult::HardwareInitFailed(status);
            error!("{}", result);
            result
        }
    }
}
