/// 起動シーケンス全体の統合テスト
///
/// AppController がバス初期化とセンサー調整を固定順で実行し、
/// 途中失敗時に後続を打ち切ることを検証します。
use camera_initializer::core::{AppConfig, AppController};
use camera_initializer::{FrameSize, InitResult, MockCameraDriver};

fn test_config() -> AppConfig {
    AppConfig {
        camera_gain: 0,
        camera_exposure: 0,
        camera_invert_image: false,
        camera_brightness: 0,
        camera_contrast: 0,
        frame_size: FrameSize::Xga,
        jpeg_quality: 10,
    }
}

#[test]
fn test_full_sequence_success() {
    let mut driver = MockCameraDriver::new();

    let result = AppController::bring_up_camera(&mut driver, &test_config());

    assert_eq!(result, InitResult::Success);
    assert_eq!(driver.init_configs.len(), 1);
    // ウォームアップの取得・返却が1回ずつ
    assert_eq!(driver.acquired_frames, 1);
    assert_eq!(driver.released_frames, 1);
}

#[test]
fn test_init_failure_skips_tuning() {
    let mut driver = MockCameraDriver::new().with_init_status(0x105);

    let result = AppController::bring_up_camera(&mut driver, &test_config());

    assert_eq!(result, InitResult::HardwareInitFailed(0x105));
    // センサー調整は一切実行されない
    assert!(driver.sensor_writes().is_empty());
    assert_eq!(driver.acquired_frames, 0);
    assert_eq!(driver.released_frames, 0);
}

#[test]
fn test_missing_sensor_reports_partial_success() {
    let mut driver = MockCameraDriver::new().without_sensor();

    let result = AppController::bring_up_camera(&mut driver, &test_config());

    // バスは初期化済みだがセンサー側は縮退
    assert_eq!(result, InitResult::SensorUnavailable);
    assert_eq!(driver.init_configs.len(), 1);
    assert!(driver.sensor_writes().is_empty());
    assert_eq!(driver.acquired_frames, 0);
}

#[test]
fn test_default_config_loads() {
    // cfg.toml が無い環境では既定値が使われる
    let config = AppConfig::load().expect("既定値のロードに失敗");
    assert_eq!(config.frame_size, FrameSize::Xga);
    assert_eq!(config.jpeg_quality, 10);
    assert_eq!(config.camera_gain, 0);
    assert_eq!(config.camera_exposure, 0);
    assert!(!config.camera_invert_image);
}
