use log::{error, warn};

use crate::hardware::camera::config::GainCeiling;
use crate::hardware::camera::driver::{CameraDriver, SensorControls};

/// センサー属性の調整値一式
///
/// 属性はセンサーハンドルへ固定順で書き込まれる。自動ゲイン・自動露出を
/// 有効にすると手動ゲイン・手動露出ほか多くの属性が効かなくなるため、
/// 既定値では両方を無効にしてから手動値を書き込む。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuningProfile {
    /// 自動ゲイン制御
    pub auto_gain_enabled: bool,
    /// 自動露出制御
    pub auto_exposure_enabled: bool,
    /// 手動ゲイン (0-30)
    pub manual_gain: u8,
    /// 手動露出 (0-1200)
    pub manual_exposure: u16,
    /// 上下反転
    pub vertical_flip: bool,
    /// JPEG品質 (0-63)
    pub quality: u8,
    /// アナログゲイン上限
    pub gain_ceiling: GainCeiling,
    /// 明るさ (-2..=2)
    pub brightness: i8,
    /// レンズ補正
    pub lens_correction: bool,
    /// 彩度 (-2..=2)
    pub saturation: i8,
    /// コントラスト (-2..=2)
    pub contrast: i8,
    /// シャープネス (-2..=2)
    pub sharpness: i8,
    /// 左右反転
    pub horizontal_mirror: bool,
    /// テストパターン表示
    pub test_pattern: bool,
    /// 特殊効果 (0-6)
    pub special_effect: u8,
    /// 黒点補正
    pub black_pixel_correction: bool,
    /// 白点補正
    pub white_pixel_correction: bool,
}

impl Default for TuningProfile {
    fn default() -> Self {
        Self {
            auto_gain_enabled: false,
            auto_exposure_enabled: false,
            manual_gain: 0,
            manual_exposure: 0,
            vertical_flip: false,
            quality: 10,
            gain_ceiling: GainCeiling::X32,
            brightness: 0,
            lens_correction: true,
            saturation: 0,
            contrast: 0,
            sharpness: 0,
            horizontal_mirror: false,
            test_pattern: false,
            special_effect: 0,
            black_pixel_correction: false,
            white_pixel_correction: false,
        }
    }
}

impl TuningProfile {
    /// 設定ファイル由来の調整値と既定値からプロファイルを組み立てる
    ///
    /// 調整要求のたびに新しく構築され、保持はされない。
    pub fn from_settings(
        gain: u8,
        exposure: u16,
        invert: bool,
        brightness: i8,
        contrast: i8,
    ) -> Self {
        Self {
            manual_gain: gain,
            manual_exposure: exposure,
            vertical_flip: invert,
            brightness,
            contrast,
            ..Self::default()
        }
    }
}

/// センサーレジスタ調整を担当するコンポーネント
pub struct SensorTuner;

impl SensorTuner {
    /// センサーハンドルへプロファイルを適用し、ウォームアップキャプチャを行う
    ///
    /// `HardwareInitializer` が成功した後にのみ呼び出せる。センサーハンドルが
    /// 取得できた場合は `sensor-tuning` フィーチャーの有無にかかわらず true を
    /// 返し、取得できなかった場合のみ false を返す。
    pub fn apply_tuning<D: CameraDriver>(driver: &mut D, profile: &TuningProfile) -> bool {
        let Some(sensor) = driver.sensor() else {
            error!("カメラセンサーの設定取得に失敗しました");
            return false;
        };

        write_profile(sensor, profile);

        // 一部の属性は次のフレーム境界でしか反映されないため、1枚取得して
        // すぐに返却し、境界を強制的に発生させる
        match driver.acquire_frame() {
            Some(frame) => driver.release_frame(frame),
            None => warn!("ウォームアップキャプチャに失敗しました（調整の反映が1フレーム遅れます）"),
        }

        true
    }
}

/// プロファイルの属性を固定順でセンサーへ書き込む
///
/// 自動ゲイン・自動露出の無効化を先頭に置くことで、同一プロファイル内の
/// 手動値が打ち消されないようにしている。戻り値のステータスは解釈しない。
#[cfg(feature = "sensor-tuning")]
fn write_profile<S: SensorControls>(sensor: &mut S, profile: &TuningProfile) {
    sensor.set_gain_ctrl(profile.auto_gain_enabled as i32);
    sensor.set_exposure_ctrl(profile.auto_exposure_enabled as i32);
    sensor.set_agc_gain(i32::from(profile.manual_gain));
    sensor.set_aec_value(i32::from(profile.manual_exposure));
    sensor.set_vflip(profile.vertical_flip as i32);
    sensor.set_quality(i32::from(profile.quality));
    sensor.set_gainceiling(profile.gain_ceiling.level());
    sensor.set_brightness(i32::from(profile.brightness));
    sensor.set_lenc(profile.lens_correction as i32);
    sensor.set_saturation(i32::from(profile.saturation));
    sensor.set_contrast(i32::from(profile.contrast));
    sensor.set_sharpness(i32::from(profile.sharpness));
    sensor.set_hmirror(profile.horizontal_mirror as i32);
    sensor.set_colorbar(profile.test_pattern as i32);
    sensor.set_special_effect(i32::from(profile.special_effect));
    sensor.set_bpc(profile.black_pixel_correction as i32);
    sensor.set_wpc(profile.white_pixel_correction as i32);
    log::info!("センサーレジスタ調整を適用しました");
}

/// `sensor-tuning` 無効ビルド用の何もしない実装
///
/// ウォームアップキャプチャは `apply_tuning` 側で必ず実行される。
#[cfg(not(feature = "sensor-tuning"))]
fn write_profile<S: SensorControls>(_sensor: &mut S, _profile: &TuningProfile) {}
