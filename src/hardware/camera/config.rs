use crate::hardware::pins::PinMap;

/// ピクセル符号化形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// JPEG圧縮（継続モードで使用できる唯一の形式）
    Jpeg,
    Yuv422,
    Grayscale,
    Rgb565,
    Rgb888,
}

/// フレームサイズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSize {
    /// 320x240
    Qvga,
    /// 400x296
    Cif,
    /// 640x480
    Vga,
    /// 800x600
    Svga,
    /// 1024x768
    Xga,
    /// 1280x1024
    Sxga,
    /// 1600x1200
    Uxga,
}

impl FrameSize {
    /// 設定ファイルの表記からパースする
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "QVGA" => Some(FrameSize::Qvga),
            "CIF" => Some(FrameSize::Cif),
            "VGA" => Some(FrameSize::Vga),
            "SVGA" => Some(FrameSize::Svga),
            "XGA" => Some(FrameSize::Xga),
            "SXGA" => Some(FrameSize::Sxga),
            "UXGA" => Some(FrameSize::Uxga),
            _ => None,
        }
    }

    /// ピクセル寸法 (幅, 高さ)
    pub fn dimensions(self) -> (u16, u16) {
        match self {
            FrameSize::Qvga => (320, 240),
            FrameSize::Cif => (400, 296),
            FrameSize::Vga => (640, 480),
            FrameSize::Svga => (800, 600),
            FrameSize::Xga => (1024, 768),
            FrameSize::Sxga => (1280, 1024),
            FrameSize::Uxga => (1600, 1200),
        }
    }
}

/// ドライバ初期化時に一括で渡す撮影設定
///
/// グローバルには保持せず、`HardwareInitializer` がローカルに組み立てて
/// そのままドライバへ渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    pub pins: PinMap,
    /// マスタークロック周波数 (Hz)
    pub xclk_freq_hz: u32,
    pub pixel_format: PixelFormat,
    pub frame_size: FrameSize,
    /// JPEG品質 (0-63, 小さいほど高品質)
    pub jpeg_quality: u8,
    /// フレームバッファ数。2以上は継続モードになる
    pub fb_count: u8,
}

impl CaptureConfig {
    /// フレームバッファ数が2以上のときはJPEG以外を許可しない
    ///
    /// この組み合わせはドライバが拒否するか黙って誤動作するため、
    /// 呼び出し側で必ず守ること。
    pub fn buffering_is_valid(&self) -> bool {
        self.fb_count <= 1 || self.pixel_format == PixelFormat::Jpeg
    }
}

/// アナログゲイン上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GainCeiling {
    X2,
    X4,
    X8,
    X16,
    X32,
    X64,
    X128,
}

impl GainCeiling {
    /// ドライバへ渡す離散レベル値
    pub fn level(self) -> i32 {
        match self {
            GainCeiling::X2 => 0,
            GainCeiling::X4 => 1,
            GainCeiling::X8 => 2,
            GainCeiling::X16 => 3,
            GainCeiling::X32 => 4,
            GainCeiling::X64 => 5,
            GainCeiling::X128 => 6,
        }
    }
}
