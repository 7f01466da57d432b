/*!
    Stream descriptor types.
*/

use std::fmt;

use crate::{PixelFormat, Rational};

/**
    Pixel dimensions of a video stream.

    Fixed for the lifetime of the stream; the display texture is created at
    exactly this size and there is no resize path.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
}

impl Geometry {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/**
    Video codecs the descriptor can name.

    Informational only; decoder lookup happens on the raw container codec
    identifier, so an unrecognized codec still decodes if FFmpeg knows it.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CodecId {
    H264,
    H265,
    Vp8,
    Vp9,
    Av1,
    Mpeg4,
    Mpeg2Video,
}

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::H264 => "h264",
            Self::H265 => "hevc",
            Self::Vp8 => "vp8",
            Self::Vp9 => "vp9",
            Self::Av1 => "av1",
            Self::Mpeg4 => "mpeg4",
            Self::Mpeg2Video => "mpeg2video",
        };
        f.write_str(name)
    }
}

/**
    Descriptor of the selected video stream.

    Extracted once when the input is opened and immutable afterwards. Owned
    by the playback driver and dropped with the input.
*/
#[derive(Clone, Debug)]
pub struct VideoStreamInfo {
    /// Index of this stream within the container.
    pub index: usize,
    /// Pixel geometry of decoded frames.
    pub geometry: Geometry,
    /// Nominal frame rate, when the container declares one.
    pub frame_rate: Option<Rational>,
    /// Time base for packet and frame timestamps.
    pub time_base: Rational,
    /// Source pixel format, when it maps to a known planar format.
    pub pixel_format: Option<PixelFormat>,
    /// Codec, when recognized.
    pub codec_id: Option<CodecId>,
}

impl VideoStreamInfo {
    /**
        The nominal frame rate as frames per second, when available.
    */
    pub fn fps(&self) -> Option<f64> {
        self.frame_rate.map(Rational::to_f64).filter(|fps| *fps > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> VideoStreamInfo {
        VideoStreamInfo {
            index: 0,
            geometry: Geometry::new(1920, 1080),
            frame_rate: Some(Rational::new(30, 1)),
            time_base: Rational::new(1, 90000),
            pixel_format: Some(PixelFormat::Yuv420p),
            codec_id: Some(CodecId::H264),
        }
    }

    #[test]
    fn fps_from_frame_rate() {
        assert_eq!(descriptor().fps(), Some(30.0));
    }

    #[test]
    fn fps_absent_or_degenerate_is_none() {
        let mut info = descriptor();
        info.frame_rate = None;
        assert_eq!(info.fps(), None);

        info.frame_rate = Some(Rational::new(0, 1));
        assert_eq!(info.fps(), None);
    }

    #[test]
    fn geometry_display_and_aspect() {
        let g = Geometry::new(1920, 1080);
        assert_eq!(g.to_string(), "1920x1080");
        assert!((g.aspect_ratio() - 16.0 / 9.0).abs() < 0.01);
    }

    #[test]
    fn codec_names() {
        assert_eq!(CodecId::H264.to_string(), "h264");
        assert_eq!(CodecId::H265.to_string(), "hevc");
    }
}
