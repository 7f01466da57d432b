/*!
    Conversions between ffmpeg-next types and media-types vocabulary.
*/

use media_types::{CodecId, PixelFormat, Rational};

/**
    Convert an ffmpeg_next rational to ours.
*/
pub fn rational_from_ffmpeg(r: ffmpeg_next::Rational) -> Rational {
    Rational::new(r.numerator(), r.denominator())
}

/**
    Map an ffmpeg_next pixel format onto the planar subset we carry.

    Returns `None` for formats outside the subset; the decoder normalizes
    those to planar YUV 4:2:0 before frames leave it.
*/
pub fn pixel_format_from_ffmpeg(format: ffmpeg_next::format::Pixel) -> Option<PixelFormat> {
    use ffmpeg_next::format::Pixel;

    match format {
        Pixel::YUV420P => Some(PixelFormat::Yuv420p),
        Pixel::YUV422P => Some(PixelFormat::Yuv422p),
        Pixel::YUV444P => Some(PixelFormat::Yuv444p),
        Pixel::NV12 => Some(PixelFormat::Nv12),
        Pixel::YUV420P10LE | Pixel::YUV420P10BE => Some(PixelFormat::Yuv420p10),
        _ => None,
    }
}

/**
    Map an ffmpeg_next codec id onto the descriptor vocabulary.
*/
pub fn codec_id_from_ffmpeg(id: ffmpeg_next::codec::Id) -> Option<CodecId> {
    use ffmpeg_next::codec::Id;

    match id {
        Id::H264 => Some(CodecId::H264),
        Id::HEVC => Some(CodecId::H265),
        Id::VP8 => Some(CodecId::Vp8),
        Id::VP9 => Some(CodecId::Vp9),
        Id::AV1 => Some(CodecId::Av1),
        Id::MPEG4 => Some(CodecId::Mpeg4),
        Id::MPEG2VIDEO => Some(CodecId::Mpeg2Video),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rational_preserves_num_and_den() {
        let r = rational_from_ffmpeg(ffmpeg_next::Rational::new(24000, 1001));
        assert_eq!(r, Rational::new(24000, 1001));
    }

    #[test]
    fn planar_formats_map() {
        use ffmpeg_next::format::Pixel;

        assert_eq!(
            pixel_format_from_ffmpeg(Pixel::YUV420P),
            Some(PixelFormat::Yuv420p)
        );
        assert_eq!(pixel_format_from_ffmpeg(Pixel::NV12), Some(PixelFormat::Nv12));
        assert_eq!(
            pixel_format_from_ffmpeg(Pixel::YUV420P10LE),
            Some(PixelFormat::Yuv420p10)
        );
        assert_eq!(pixel_format_from_ffmpeg(Pixel::RGB24), None);
    }

    #[test]
    fn codec_ids_map() {
        use ffmpeg_next::codec::Id;

        assert_eq!(codec_id_from_ffmpeg(Id::H264), Some(CodecId::H264));
        assert_eq!(codec_id_from_ffmpeg(Id::HEVC), Some(CodecId::H265));
        assert_eq!(codec_id_from_ffmpeg(Id::AAC), None);
    }
}
