/*!
    Shared types for the vidplay media pipeline.

    This crate defines the vocabulary that crosses crate boundaries: stream
    descriptors, packets, frames, pixel formats and the error taxonomy. It has
    no dependency on FFmpeg or SDL, so consumers can depend on it without
    pulling in native bindings.
*/

mod error;
mod format;
mod frame;
mod packet;
mod rational;
mod stream;

pub use error::Error;
pub use format::PixelFormat;
pub use frame::VideoFrame;
pub use packet::Packet;
pub use rational::Rational;
pub use stream::{CodecId, Geometry, VideoStreamInfo};

/// Result alias used across the pipeline crates.
pub type Result<T> = std::result::Result<T, Error>;
