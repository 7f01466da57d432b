/*!
    Container input and demuxing for the vidplay media pipeline.

    This crate owns the input side: it opens a media file, selects the video
    stream, extracts the stream descriptor, and yields compressed packets.
    ffmpeg-next types stay behind this boundary; downstream crates see only
    `media-types` vocabulary plus the opaque [`CodecConfig`].
*/

mod codec_config;
mod convert;
mod source;

pub use codec_config::CodecConfig;
pub use convert::{codec_id_from_ffmpeg, pixel_format_from_ffmpeg, rational_from_ffmpeg};
pub use source::Source;
