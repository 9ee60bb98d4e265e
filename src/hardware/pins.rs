/// カメラ信号線とGPIOの対応表
///
/// AI-Thinker ESP32-CAM の配線は固定なので、対応表は定数として保持する。
/// 配線されていない信号線は `NOT_WIRED` で表す。

/// 「配線なし」を表す番兵値
pub const NOT_WIRED: i32 = -1;

/// 論理信号線 → 物理GPIO番号の対応表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap {
    /// パラレルデータ線 D0 (Y2)
    pub d0: i32,
    /// パラレルデータ線 D1 (Y3)
    pub d1: i32,
    /// パラレルデータ線 D2 (Y4)
    pub d2: i32,
    /// パラレルデータ線 D3 (Y5)
    pub d3: i32,
    /// パラレルデータ線 D4 (Y6)
    pub d4: i32,
    /// パラレルデータ線 D5 (Y7)
    pub d5: i32,
    /// パラレルデータ線 D6 (Y8)
    pub d6: i32,
    /// パラレルデータ線 D7 (Y9)
    pub d7: i32,
    /// ピクセルクロック
    pub pclk: i32,
    /// 垂直同期
    pub vsync: i32,
    /// 水平同期
    pub href: i32,
    /// SCCB (I2C) データ
    pub sda: i32,
    /// SCCB (I2C) クロック
    pub scl: i32,
    /// パワーダウン
    pub pwdn: i32,
    /// リセット
    pub reset: i32,
    /// マスタークロック
    pub xclk: i32,
}

impl PinMap {
    /// AI-Thinker ESP32-CAM (CAMERA_MODEL_AI_THINKER) の配線
    pub const fn ai_thinker() -> Self {
        Self {
            d0: 5,
            d1: 18,
            d2: 19,
            d3: 21,
            d4: 36,
            d5: 39,
            d6: 34,
            d7: 35,
            pclk: 22,
            vsync: 25,
            href: 23,
            sda: 26,
            scl: 27,
            pwdn: 32,
            reset: NOT_WIRED, // リセット線は配線されていない
            xclk: 0,
        }
    }
}
