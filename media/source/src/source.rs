/*!
    Media source implementation.
*/

use std::path::Path;

use ffmpeg_next::{format::context::Input as InputContext, media::Type};

use media_types::{Error, Geometry, Packet, Result, VideoStreamInfo};

use crate::codec_config::CodecConfig;
use crate::convert::{codec_id_from_ffmpeg, pixel_format_from_ffmpeg, rational_from_ffmpeg};

/**
    An opened media file that produces compressed packets.

    Opening probes the container, selects the video stream (the first stream
    in container index order whose media type is video), and captures its
    descriptor. Packets from every stream are yielded in file order; the
    caller filters on [`Packet::stream_index`].
*/
pub struct Source {
    input: InputContext,
    stream: VideoStreamInfo,
    codec_config: Option<CodecConfig>,
}

impl Source {
    /**
        Open a media file and select its video stream.
    */
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        ffmpeg_next::init().map_err(|e| Error::Open(e.to_string()))?;

        let input =
            ffmpeg_next::format::input(&path).map_err(|e| Error::Open(e.to_string()))?;

        let (stream, codec_config) = select_video_stream(&input)?;

        Ok(Self {
            input,
            stream,
            codec_config: Some(codec_config),
        })
    }

    /**
        Descriptor of the selected video stream.
    */
    pub fn stream(&self) -> &VideoStreamInfo {
        &self.stream
    }

    /**
        Take the codec configuration for the selected stream.

        Consumed once, by decoder construction.
    */
    pub fn take_codec_config(&mut self) -> Option<CodecConfig> {
        self.codec_config.take()
    }

    /**
        Read the next packet from the container.

        Returns `None` at end of input. A failed read also ends the stream,
        matching demuxer behavior where any negative read result terminates
        consumption.
    */
    pub fn next_packet(&mut self) -> Option<Packet> {
        let (stream, packet) = self.input.packets().next()?;

        Some(Packet::new(
            packet.data().map(|d| d.to_vec()).unwrap_or_default(),
            stream.index(),
            packet.pts(),
            packet.dts(),
            packet.is_key(),
        ))
    }
}

/**
    Scan streams in index order and build the descriptor of the first video
    stream.

    A decoder context is constructed (but used only here) to resolve the
    geometry and pixel format the codec parameters imply.
*/
fn select_video_stream(input: &InputContext) -> Result<(VideoStreamInfo, CodecConfig)> {
    let stream = input
        .streams()
        .find(|s| s.parameters().medium() == Type::Video)
        .ok_or(Error::NoVideoStream)?;

    let codec_name = format!("{:?}", stream.parameters().id()).to_lowercase();

    let decoder = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
        .map_err(|e| Error::StreamProbe(e.to_string()))?
        .decoder()
        .video()
        .map_err(|e| match e {
            ffmpeg_next::Error::DecoderNotFound => Error::UnsupportedCodec(codec_name),
            other => Error::StreamProbe(other.to_string()),
        })?;

    // Real frame rate first, average as fallback.
    let frame_rate = if stream.rate().numerator() != 0 {
        Some(rational_from_ffmpeg(stream.rate()))
    } else if stream.avg_frame_rate().numerator() != 0 {
        Some(rational_from_ffmpeg(stream.avg_frame_rate()))
    } else {
        None
    };

    let info = VideoStreamInfo {
        index: stream.index(),
        geometry: Geometry::new(decoder.width(), decoder.height()),
        frame_rate,
        time_base: rational_from_ffmpeg(stream.time_base()),
        pixel_format: pixel_format_from_ffmpeg(decoder.format()),
        codec_id: codec_id_from_ffmpeg(stream.parameters().id()),
    };

    Ok((info, CodecConfig::new(stream.parameters())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_a_missing_path_fails_with_open() {
        let result = Source::open("/nonexistent/surely-not-a-video.mp4");
        assert!(matches!(result, Err(Error::Open(_))));
    }
}
