use log::info;

use crate::core::config::AppConfig;
use crate::hardware::camera::{
    CameraDriver, HardwareInitializer, InitResult, SensorTuner, TuningProfile,
};

/// カメラ起動シーケンスを管理するモジュール
pub struct AppController;

impl AppController {
    /// カメラを起動し、センサー調整まで実行する
    ///
    /// `HardwareInitializer` が成功した場合のみ `SensorTuner` を実行します。
    /// バスは初期化できたがセンサーが識別できなかった場合は部分成功として
    /// `SensorUnavailable` を返します。再試行はしません（判断は呼び出し側）。
    pub fn bring_up_camera<D: CameraDriver>(driver: &mut D, config: &AppConfig) -> InitResult {
        let result =
            HardwareInitializer::initialize_hardware(driver, config.frame_size, config.jpeg_quality);
        if result != InitResult::Success {
            return result;
        }

        // 調整プロファイルは呼び出しのたびに設定値から組み立てる
        let profile = TuningProfile::from_settings(
            config.camera_gain,
            config.camera_exposure,
            config.camera_invert_image,
            config.camera_brightness,
            config.camera_contrast,
        );

        if SensorTuner::apply_tuning(driver, &profile) {
            info!("カメラ起動シーケンスが完了しました");
            InitResult::Success
        } else {
            InitResult::SensorUnavailable
        }
    }
}
