use esp_idf_svc::hal::delay::FreeRtos;
use log::{error, info};

use camera_initializer::core::{AppConfig, AppController};
use camera_initializer::hardware::camera::esp::EspCameraDriver;
use camera_initializer::{CameraDriver, InitResult};

/// アプリケーションのメインエントリーポイント
fn main() -> anyhow::Result<()> {
    // ESP-IDFの基本初期化
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    // 設定ファイル読み込み
    let app_config = AppConfig::load().map_err(|e| {
        error!("設定ファイルの読み込みに失敗しました: {}", e);
        anyhow::anyhow!("設定ファイルの読み込みエラー: {}", e)
    })?;

    // フレームバッファ確保前の空きヒープを記録しておく
    info!("空きヒープ: {} bytes", unsafe {
        esp_idf_sys::esp_get_free_heap_size()
    });

    // カメラ起動シーケンス
    let mut driver = EspCameraDriver::new();
    let result = AppController::bring_up_camera(&mut driver, &app_config);

    match result {
        InitResult::Success => {
            // カメラの安定化を待ってから動作確認キャプチャを行う
            FreeRtos::delay_ms(100);
            match driver.acquire_frame() {
                Some(frame) => {
                    info!("動作確認キャプチャ: {} bytes", unsafe { (*frame).len });
                    driver.release_frame(frame);
                }
                None => error!("動作確認キャプチャに失敗しました"),
            }
        }
        InitResult::HardwareInitFailed(_) => {
            return Err(anyhow::anyhow!("{}", result));
        }
        InitResult::SensorUnavailable => {
            // バスセッションは生きているので縮退状態で継続する
            error!("{}", result);
        }
    }

    Ok(())
}
