use esp_idf_svc::sys::camera::{
    camera_config_t, camera_fb_t, esp_camera_fb_get, esp_camera_fb_return, esp_camera_init,
    esp_camera_sensor_get, framesize_t, framesize_t_FRAMESIZE_CIF, framesize_t_FRAMESIZE_QVGA,
    framesize_t_FRAMESIZE_SVGA, framesize_t_FRAMESIZE_SXGA, framesize_t_FRAMESIZE_UXGA,
    framesize_t_FRAMESIZE_VGA, framesize_t_FRAMESIZE_XGA, ledc_channel_t_LEDC_CHANNEL_0,
    ledc_timer_t_LEDC_TIMER_0, pixformat_t, pixformat_t_PIXFORMAT_GRAYSCALE,
    pixformat_t_PIXFORMAT_JPEG, pixformat_t_PIXFORMAT_RGB565, pixformat_t_PIXFORMAT_RGB888,
    pixformat_t_PIXFORMAT_YUV422, sensor_t,
};

use crate::hardware::camera::config::{CaptureConfig, FrameSize, PixelFormat};
use crate::hardware::camera::driver::{CameraDriver, SensorControls};

/// esp32-cameraドライバの実機実装
///
/// `esp_camera_init` で確立したバスセッションを保持する。センサーハンドルと
/// フレームバッファはドライバ所有であり、ここでは解放・保持しない。
pub struct EspCameraDriver {
    sensor: Option<EspSensor>,
}

impl EspCameraDriver {
    pub fn new() -> Self {
        Self { sensor: None }
    }
}

impl Default for EspCameraDriver {
    fn default() -> Self {
        Self::new()
    }
}

fn pixformat_raw(format: PixelFormat) -> pixformat_t {
    match format {
        PixelFormat::Jpeg => pixformat_t_PIXFORMAT_JPEG,
        PixelFormat::Yuv422 => pixformat_t_PIXFORMAT_YUV422,
        PixelFormat::Grayscale => pixformat_t_PIXFORMAT_GRAYSCALE,
        PixelFormat::Rgb565 => pixformat_t_PIXFORMAT_RGB565,
        PixelFormat::Rgb888 => pixformat_t_PIXFORMAT_RGB888,
    }
}

fn framesize_raw(size: FrameSize) -> framesize_t {
    match size {
        FrameSize::Qvga => framesize_t_FRAMESIZE_QVGA,
        FrameSize::Cif => framesize_t_FRAMESIZE_CIF,
        FrameSize::Vga => framesize_t_FRAMESIZE_VGA,
        FrameSize::Svga => framesize_t_FRAMESIZE_SVGA,
        FrameSize::Xga => framesize_t_FRAMESIZE_XGA,
        FrameSize::Sxga => framesize_t_FRAMESIZE_SXGA,
        FrameSize::Uxga => framesize_t_FRAMESIZE_UXGA,
    }
}

impl CameraDriver for EspCameraDriver {
    type Sensor = EspSensor;
    type Frame = *mut camera_fb_t;

    fn init(&mut self, config: &CaptureConfig) -> i32 {
        let mut raw = camera_config_t::default();
        raw.pin_pwdn = config.pins.pwdn;
        raw.pin_reset = config.pins.reset;
        raw.pin_xclk = config.pins.xclk;
        raw.pin_d0 = config.pins.d0;
        raw.pin_d1 = config.pins.d1;
        raw.pin_d2 = config.pins.d2;
        raw.pin_d3 = config.pins.d3;
        raw.pin_d4 = config.pins.d4;
        raw.pin_d5 = config.pins.d5;
        raw.pin_d6 = config.pins.d6;
        raw.pin_d7 = config.pins.d7;
        raw.pin_vsync = config.pins.vsync;
        raw.pin_href = config.pins.href;
        raw.pin_pclk = config.pins.pclk;
        raw.xclk_freq_hz = config.xclk_freq_hz as i32;
        raw.ledc_timer = ledc_timer_t_LEDC_TIMER_0;
        raw.ledc_channel = ledc_channel_t_LEDC_CHANNEL_0;
        raw.pixel_format = pixformat_raw(config.pixel_format);
        raw.frame_size = framesize_raw(config.frame_size);
        raw.jpeg_quality = i32::from(config.jpeg_quality);
        raw.fb_count = usize::from(config.fb_count);

        unsafe {
            // SCCBピンはunionフィールドのためunsafe代入になる
            raw.__bindgen_anon_1.pin_sccb_sda = config.pins.sda;
            raw.__bindgen_anon_2.pin_sccb_scl = config.pins.scl;

            esp_camera_init(&raw)
        }
    }

    fn sensor(&mut self) -> Option<&mut EspSensor> {
        if self.sensor.is_none() {
            let raw = unsafe { esp_camera_sensor_get() };
            if raw.is_null() {
                return None;
            }
            self.sensor = Some(EspSensor { raw });
        }
        self.sensor.as_mut()
    }

    fn acquire_frame(&mut self) -> Option<*mut camera_fb_t> {
        let fb = unsafe { esp_camera_fb_get() };
        if fb.is_null() {
            None
        } else {
            Some(fb)
        }
    }

    fn release_frame(&mut self, frame: *mut camera_fb_t) {
        unsafe { esp_camera_fb_return(frame) };
    }
}

/// `sensor_t` の関数ポインタ呼び出しを包む実機センサーハンドル
pub struct EspSensor {
    raw: *mut sensor_t,
}

impl EspSensor {
    /// セッターの関数ポインタが未実装のセンサーもあるため、
    /// その場合は失敗ステータスを返す
    fn call(&mut self, setter: Option<unsafe extern "C" fn(*mut sensor_t, i32) -> i32>, value: i32) -> i32 {
        match setter {
            Some(f) => unsafe { f(self.raw, value) },
            None => -1,
        }
    }
}

impl SensorControls for EspSensor {
    fn set_gain_ctrl(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_gain_ctrl };
        self.call(setter, value)
    }

    fn set_exposure_ctrl(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_exposure_ctrl };
        self.call(setter, value)
    }

    fn set_agc_gain(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_agc_gain };
        self.call(setter, value)
    }

    fn set_aec_value(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_aec_value };
        self.call(setter, value)
    }

    fn set_vflip(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_vflip };
        self.call(setter, value)
    }

    fn set_quality(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_quality };
        self.call(setter, value)
    }

    fn set_gainceiling(&mut self, value: i32) -> i32 {
        // gainceiling_t を取るため他のセッターと型が揃わない
        match unsafe { (*self.raw).set_gainceiling } {
            Some(f) => unsafe { f(self.raw, value as u32) },
            None => -1,
        }
    }

    fn set_brightness(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_brightness };
        self.call(setter, value)
    }

    fn set_lenc(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_lenc };
        self.call(setter, value)
    }

    fn set_saturation(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_saturation };
        self.call(setter, value)
    }

    fn set_contrast(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_contrast };
        self.call(setter, value)
    }

    fn set_sharpness(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_sharpness };
        self.call(setter, value)
    }

    fn set_hmirror(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_hmirror };
        self.call(setter, value)
    }

    fn set_colorbar(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_colorbar };
        self.call(setter, value)
    }

    fn set_special_effect(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_special_effect };
        self.call(setter, value)
    }

    fn set_bpc(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_bpc };
        self.call(setter, value)
    }

    fn set_wpc(&mut self, value: i32) -> i32 {
        let setter = unsafe { (*self.raw).set_wpc };
        self.call(setter, value)
    }
}
