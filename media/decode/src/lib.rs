/*!
    Video decoding for the vidplay media pipeline.

    This crate turns compressed packets into raw frames. Decoded frames are
    normalized to planar YUV 4:2:0 on the way out, so the display side never
    sees a pixel format it cannot upload.
*/

mod video;

pub use video::VideoDecoder;
