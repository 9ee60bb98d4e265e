use crate::hardware::camera::FrameSize;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InvalidFrameSize(String),
    InvalidJpegQuality(u8),
    InvalidGain(u8),
    InvalidExposure(u16),
    InvalidBrightness(i8),
    InvalidContrast(i8),
}

pub fn parse_frame_size(value: &str) -> Result<FrameSize, ValidationError> {
    FrameSize::from_name(value).ok_or_else(|| ValidationError::InvalidFrameSize(value.to_string()))
}

pub fn parse_jpeg_quality(value: u8) -> Result<u8, ValidationError> {
    if value <= 63 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidJpegQuality(value))
    }
}

pub fn parse_gain(value: u8) -> Result<u8, ValidationError> {
    if value <= 30 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidGain(value))
    }
}

pub fn parse_exposure(value: u16) -> Result<u16, ValidationError> {
    if value <= 1200 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidExposure(value))
    }
}

pub fn parse_brightness(value: i8) -> Result<i8, ValidationError> {
    if (-2..=2).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidBrightness(value))
    }
}

pub fn parse_contrast(value: i8) -> Result<i8, ValidationError> {
    if (-2..=2).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidContrast(value))
    }
}
