/*!
    Video decoder implementation.
*/

use std::time::Duration;

use ffmpeg_next::{
    codec::{self, decoder::Video as FFmpegDecoder},
    ffi,
    format::Pixel,
    software::scaling::{context::Context as ScalerContext, flag::Flags as ScalerFlags},
    util::frame::video::Video as FFmpegFrame,
};

use media_source::{CodecConfig, pixel_format_from_ffmpeg};
use media_types::{Error, Geometry, Packet, Rational, Result, VideoFrame};

/**
    Decoder for the selected video stream.

    Bound 1:1 to the stream's codec. One scratch frame is reused across
    iterations; each decoded image is copied out into a tightly packed
    [`VideoFrame`] before it leaves the decoder.
*/
pub struct VideoDecoder {
    decoder: FFmpegDecoder,
    time_base: Rational,
    /// Reused for every receive call; overwritten each decode.
    scratch: FFmpegFrame,
    /// Lazily created when the decoder output needs conversion to 4:2:0.
    scaler: Option<Scaler>,
}

struct Scaler {
    context: ScalerContext,
    src_format: Pixel,
    src_width: u32,
    src_height: u32,
}

impl VideoDecoder {
    /**
        Look up, allocate, and open a decoder for the stream's codec.
    */
    pub fn new(config: CodecConfig, time_base: Rational) -> Result<Self> {
        ffmpeg_next::init().map_err(|e| Error::DecoderAlloc(e.to_string()))?;

        let codec_name = config.codec_name();
        let parameters = config.into_parameters();

        let codec = ffmpeg_next::codec::decoder::find(parameters.id())
            .ok_or(Error::UnsupportedCodec(codec_name))?;

        let decoder = codec::context::Context::from_parameters(parameters)
            .map_err(|e| Error::DecoderAlloc(e.to_string()))?
            .decoder()
            .open_as(codec)
            .map_err(|e| Error::DecoderOpen(e.to_string()))?
            .video()
            .map_err(|e| Error::DecoderOpen(e.to_string()))?;

        Ok(Self {
            decoder,
            time_base,
            scratch: FFmpegFrame::empty(),
            scaler: None,
        })
    }

    /**
        Pixel geometry the decoder produces.
    */
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.decoder.width(), self.decoder.height())
    }

    /**
        Decode one packet.

        A failed submit returns [`Error::DecodeSubmit`] without attempting
        extraction. Extraction stops normally on would-block or end-of-stream
        and may yield zero, one, or multiple frames per packet (B-frame
        reordering buffers inside the codec).
    */
    pub fn decode(&mut self, packet: &Packet) -> Result<Vec<VideoFrame>> {
        let mut submitted = if packet.data.is_empty() {
            ffmpeg_next::Packet::empty()
        } else {
            ffmpeg_next::Packet::copy(&packet.data)
        };
        submitted.set_pts(packet.pts);
        submitted.set_dts(packet.dts);

        self.decoder
            .send_packet(&submitted)
            .map_err(|e| Error::DecodeSubmit(e.to_string()))?;

        self.receive_frames()
    }

    /**
        Signal end-of-stream and drain the frames the codec still buffers.
    */
    pub fn flush(&mut self) -> Result<Vec<VideoFrame>> {
        match self.decoder.send_eof() {
            Ok(()) | Err(ffmpeg_next::Error::Eof) => {}
            Err(e) => return Err(Error::DecodeExtract(e.to_string())),
        }

        self.receive_frames()
    }

    fn receive_frames(&mut self) -> Result<Vec<VideoFrame>> {
        let mut frames = Vec::new();

        loop {
            match self.decoder.receive_frame(&mut self.scratch) {
                Ok(()) => frames.push(self.take_frame()?),
                Err(ffmpeg_next::Error::Other { errno }) if errno == ffi::EAGAIN => break,
                Err(ffmpeg_next::Error::Eof) => break,
                Err(e) => return Err(Error::DecodeExtract(e.to_string())),
            }
        }

        Ok(frames)
    }

    /**
        Copy the scratch frame out, converting to planar 4:2:0 if needed.
    */
    fn take_frame(&mut self) -> Result<VideoFrame> {
        let pts = presentation_time(self.scratch.pts(), self.time_base);

        if self.scratch.format() == Pixel::YUV420P {
            return pack_frame(&self.scratch, pts);
        }

        let scaler = scaler_for(&mut self.scaler, &self.scratch)?;
        let mut converted = FFmpegFrame::empty();
        scaler
            .run(&self.scratch, &mut converted)
            .map_err(|e| Error::DecodeExtract(e.to_string()))?;

        pack_frame(&converted, pts)
    }
}

impl std::fmt::Debug for VideoDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoDecoder")
            .field("geometry", &self.geometry())
            .field("time_base", &self.time_base)
            .finish_non_exhaustive()
    }
}

/**
    Scaler converting the source frame's format to planar 4:2:0, reused
    while the source format and dimensions are stable.
*/
fn scaler_for<'a>(
    slot: &'a mut Option<Scaler>,
    source: &FFmpegFrame,
) -> Result<&'a mut ScalerContext> {
    let (format, width, height) = (source.format(), source.width(), source.height());

    let state = match slot.take() {
        Some(s) if s.src_format == format && s.src_width == width && s.src_height == height => s,
        _ => {
            let context = ScalerContext::get(
                format,
                width,
                height,
                Pixel::YUV420P,
                width,
                height,
                ScalerFlags::BILINEAR,
            )
            .map_err(|e| Error::DecodeExtract(e.to_string()))?;
            Scaler {
                context,
                src_format: format,
                src_width: width,
                src_height: height,
            }
        }
    };

    Ok(&mut slot.insert(state).context)
}

/**
    Copy an ffmpeg frame into a tightly packed plane buffer.
*/
fn pack_frame(frame: &FFmpegFrame, pts: Option<Duration>) -> Result<VideoFrame> {
    let format = pixel_format_from_ffmpeg(frame.format()).ok_or_else(|| {
        Error::DecodeExtract(format!("unsupported pixel format {:?}", frame.format()))
    })?;

    let (width, height) = (frame.width(), frame.height());
    if width == 0 || height == 0 {
        return Err(Error::DecodeExtract("frame has zero dimensions".into()));
    }

    let mut data = Vec::with_capacity(format.frame_size(width, height));
    for plane in 0..format.plane_count() {
        let (row_bytes, rows) = format.plane_dimensions(plane, width, height);
        let stride = frame.stride(plane);
        let plane_data = frame.data(plane);

        for row in 0..rows {
            let start = row * stride;
            data.extend_from_slice(&plane_data[start..start + row_bytes]);
        }
    }

    Ok(VideoFrame::new(
        data,
        Geometry::new(width, height),
        format,
        pts,
    ))
}

/**
    Presentation time of a timestamp in the stream time base.
*/
fn presentation_time(pts: Option<i64>, time_base: Rational) -> Option<Duration> {
    let pts = pts?;
    if pts < 0 || time_base.num <= 0 || time_base.den <= 0 {
        return None;
    }
    Some(Duration::from_secs_f64(
        pts as f64 * time_base.num as f64 / time_base.den as f64,
    ))
}
