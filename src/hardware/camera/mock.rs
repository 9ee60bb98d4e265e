use crate::hardware::camera::config::CaptureConfig;
use crate::hardware::camera::driver::{CameraDriver, SensorControls, STATUS_OK};

/// Mockセンサーへの書き込み対象属性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorAttribute {
    GainCtrl,
    ExposureCtrl,
    AgcGain,
    AecValue,
    Vflip,
    Quality,
    GainCeiling,
    Brightness,
    Lenc,
    Saturation,
    Contrast,
    Sharpness,
    Hmirror,
    Colorbar,
    SpecialEffect,
    Bpc,
    Wpc,
}

/// テスト用のセンサーハンドルMock
///
/// 書き込まれた属性と値を順序どおりに記録し、テストで検証できます。
#[derive(Debug, Default)]
pub struct MockSensor {
    /// 書き込みの記録 (属性, 値)
    pub writes: Vec<(SensorAttribute, i32)>,
}

impl MockSensor {
    /// テスト用: 指定属性への最初の書き込み位置を返す
    pub fn position_of(&self, attribute: SensorAttribute) -> Option<usize> {
        self.writes.iter().position(|(a, _)| *a == attribute)
    }

    /// テスト用: 指定属性へ最初に書き込まれた値を返す
    pub fn first_value_of(&self, attribute: SensorAttribute) -> Option<i32> {
        self.writes
            .iter()
            .find(|(a, _)| *a == attribute)
            .map(|(_, v)| *v)
    }
}

impl SensorControls for MockSensor {
    fn set_gain_ctrl(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::GainCtrl, value));
        STATUS_OK
    }

    fn set_exposure_ctrl(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::ExposureCtrl, value));
        STATUS_OK
    }

    fn set_agc_gain(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::AgcGain, value));
        STATUS_OK
    }

    fn set_aec_value(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::AecValue, value));
        STATUS_OK
    }

    fn set_vflip(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::Vflip, value));
        STATUS_OK
    }

    fn set_quality(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::Quality, value));
        STATUS_OK
    }

    fn set_gainceiling(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::GainCeiling, value));
        STATUS_OK
    }

    fn set_brightness(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::Brightness, value));
        STATUS_OK
    }

    fn set_lenc(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::Lenc, value));
        STATUS_OK
    }

    fn set_saturation(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::Saturation, value));
        STATUS_OK
    }

    fn set_contrast(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::Contrast, value));
        STATUS_OK
    }

    fn set_sharpness(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::Sharpness, value));
        STATUS_OK
    }

    fn set_hmirror(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::Hmirror, value));
        STATUS_OK
    }

    fn set_colorbar(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::Colorbar, value));
        STATUS_OK
    }

    fn set_special_effect(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::SpecialEffect, value));
        STATUS_OK
    }

    fn set_bpc(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::Bpc, value));
        STATUS_OK
    }

    fn set_wpc(&mut self, value: i32) -> i32 {
        self.writes.push((SensorAttribute::Wpc, value));
        STATUS_OK
    }
}

/// Mockのフレームバッファ参照
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockFrame;

/// テスト用のカメラドライバMock
///
/// 実際のesp32-cameraドライバを使わずに初期化・キャプチャ呼び出しを
/// シミュレートします。渡された撮影設定と呼び出し回数を記録し、
/// テストで検証できます。
#[derive(Debug)]
pub struct MockCameraDriver {
    /// init に渡された設定の記録
    pub init_configs: Vec<CaptureConfig>,
    /// init が返すステータスコード
    pub init_status: i32,
    /// センサーチップが識別できたかどうか
    pub sensor_present: bool,
    /// フレーム取得を失敗させるフラグ
    pub fail_acquire: bool,
    /// acquire_frame の成功回数
    pub acquired_frames: usize,
    /// release_frame の呼び出し回数
    pub released_frames: usize,
    sensor: MockSensor,
}

impl Default for MockCameraDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCameraDriver {
    /// 新しいMockCameraDriverインスタンスを作成します
    pub fn new() -> Self {
        Self {
            init_configs: Vec::new(),
            init_status: STATUS_OK,
            sensor_present: true,
            fail_acquire: false,
            acquired_frames: 0,
            released_frames: 0,
            sensor: MockSensor::default(),
        }
    }

    /// テスト用: init に指定の失敗コードを返させる
    pub fn with_init_status(mut self, status: i32) -> Self {
        self.init_status = status;
        self
    }

    /// テスト用: センサー識別失敗をシミュレート
    pub fn without_sensor(mut self) -> Self {
        self.sensor_present = false;
        self
    }

    /// テスト用: フレーム取得失敗をシミュレート
    pub fn with_acquire_failure(mut self) -> Self {
        self.fail_acquire = true;
        self
    }

    /// テスト用: 記録されたセンサー書き込みを参照する
    pub fn sensor_writes(&self) -> &[(SensorAttribute, i32)] {
        &self.sensor.writes
    }

    /// テスト用: Mockセンサーを参照する
    pub fn mock_sensor(&self) -> &MockSensor {
        &self.sensor
    }
}

impl CameraDriver for MockCameraDriver {
    type Sensor = MockSensor;
    type Frame = MockFrame;

    fn init(&mut self, config: &CaptureConfig) -> i32 {
        self.init_configs.push(config.clone());
        self.init_status
    }

    fn sensor(&mut self) -> Option<&mut MockSensor> {
        if self.sensor_present {
            Some(&mut self.sensor)
        } else {
            None
        }
    }

    fn acquire_frame(&mut self) -> Option<MockFrame> {
        if self.fail_acquire {
            return None;
        }
        self.acquired_frames += 1;
        Some(MockFrame)
    }

    fn release_frame(&mut self, _frame: MockFrame) {
        self.released_frames += 1;
    }
}
