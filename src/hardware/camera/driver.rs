use crate::hardware::camera::config::CaptureConfig;

/// ドライバ初期化の成功ステータス (ESP_OK 相当)
pub const STATUS_OK: i32 = 0;

/// 外部カメラドライバとの境界トレイト
///
/// このトレイトを実装することで、実機用(esp32-camera)とテスト用(Mock)の
/// 実装を切り替えることができます。
pub trait CameraDriver {
    /// センサーハンドル型（属性セッターの集合）
    type Sensor: SensorControls;
    /// ドライバ所有のフレームバッファ参照
    type Frame;

    /// 撮影設定を一括で渡してバスセッションを確立する
    ///
    /// 戻り値 0 は成功。それ以外は不透明な失敗コード。
    /// 起動ごとに一度だけ呼び出すこと。
    fn init(&mut self, config: &CaptureConfig) -> i32;

    /// 稼働中のセンサーハンドルを取得する
    ///
    /// バス初期化が成功してもセンサーチップを識別できなかった場合は None。
    /// ハンドルはドライバ所有であり、呼び出し側で解放してはならない。
    fn sensor(&mut self) -> Option<&mut Self::Sensor>;

    /// フレームバッファを1枚取得する
    ///
    /// ドライバ内部のタイムアウトにより失敗しうる。取得したバッファは
    /// 速やかに `release_frame` で返却すること。
    fn acquire_frame(&mut self) -> Option<Self::Frame>;

    /// フレームバッファをドライバへ返却する
    fn release_frame(&mut self, frame: Self::Frame);
}

/// センサーハンドルの属性セッター集合
///
/// 各セッターはドライバのステータスを返すが、書き込みはベストエフォートで
/// あり、呼び出し側は戻り値を解釈しない。
pub trait SensorControls {
    /// 自動ゲイン制御 {0,1}
    fn set_gain_ctrl(&mut self, value: i32) -> i32;
    /// 自動露出制御 {0,1}
    fn set_exposure_ctrl(&mut self, value: i32) -> i32;
    /// 手動ゲイン [0,30]
    fn set_agc_gain(&mut self, value: i32) -> i32;
    /// 手動露出 [0,1200]
    fn set_aec_value(&mut self, value: i32) -> i32;
    /// 上下反転 {0,1}
    fn set_vflip(&mut self, value: i32) -> i32;
    /// JPEG品質 [0,63]
    fn set_quality(&mut self, value: i32) -> i32;
    /// アナログゲイン上限（離散レベル 0-6 = x2..x128）
    fn set_gainceiling(&mut self, value: i32) -> i32;
    /// 明るさ [-2,2]
    fn set_brightness(&mut self, value: i32) -> i32;
    /// レンズ補正 {0,1}
    fn set_lenc(&mut self, value: i32) -> i32;
    /// 彩度 [-2,2]
    fn set_saturation(&mut self, value: i32) -> i32;
    /// コントラスト [-2,2]
    fn set_contrast(&mut self, value: i32) -> i32;
    /// シャープネス [-2,2]
    fn set_sharpness(&mut self, value: i32) -> i32;
    /// 左右反転 {0,1}
    fn set_hmirror(&mut self, value: i32) -> i32;
    /// テストパターン表示 {0,1}
    fn set_colorbar(&mut self, value: i32) -> i32;
    /// 特殊効果 [0,6]
    fn set_special_effect(&mut self, value: i32) -> i32;
    /// 黒点補正 {0,1}
    fn set_bpc(&mut self, value: i32) -> i32;
    /// 白点補正 {0,1}
    fn set_wpc(&mut self, value: i32) -> i32;
}
