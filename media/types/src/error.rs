/*!
    The error taxonomy shared by every stage of the pipeline.
*/

use thiserror::Error;

/**
    Errors produced while setting up or running playback.

    Setup-phase variants (`Open` through `DisplayInit`) are fatal: the caller
    unwinds through cleanup of whatever was acquired so far. Loop-phase
    variants (`DecodeSubmit`, `DecodeExtract`, `Render`) stop the read loop
    but still reach teardown.
*/
#[derive(Debug, Error)]
pub enum Error {
    /// The input path is missing, unreadable, or not a recognized container.
    #[error("cannot open input: {0}")]
    Open(String),

    /// Stream metadata could not be probed from an opened container.
    #[error("cannot read stream information: {0}")]
    StreamProbe(String),

    /// The container carries no stream with video media type.
    #[error("no video stream in input")]
    NoVideoStream,

    /// No decoder is available for the stream's codec.
    #[error("unsupported codec: {0}")]
    UnsupportedCodec(String),

    /// The decoder context could not be allocated or configured.
    #[error("cannot allocate decoder context: {0}")]
    DecoderAlloc(String),

    /// The decoder was found but refused to open.
    #[error("cannot open decoder: {0}")]
    DecoderOpen(String),

    /// Window, renderer, or texture creation failed.
    #[error("cannot initialize display: {0}")]
    DisplayInit(String),

    /// A frame could not be uploaded or presented.
    #[error("cannot render frame: {0}")]
    Render(String),

    /// The decoder rejected a submitted packet.
    #[error("cannot send packet to decoder: {0}")]
    DecodeSubmit(String),

    /// The decoder failed while a frame was being extracted.
    #[error("cannot receive frame from decoder: {0}")]
    DecodeExtract(String),

    /// A frame buffer could not be allocated.
    #[error("cannot allocate frame buffer: {0}")]
    FrameAlloc(String),

    /// A packet buffer could not be allocated.
    #[error("cannot allocate packet buffer: {0}")]
    PacketAlloc(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings_are_single_line() {
        let errors = [
            Error::Open("bad.mp4".into()),
            Error::NoVideoStream,
            Error::UnsupportedCodec("codec id 86018".into()),
            Error::DecodeSubmit("invalid data".into()),
        ];

        for e in errors {
            let text = e.to_string();
            assert!(!text.contains('\n'), "{text:?}");
            assert!(!text.is_empty());
        }
    }

    #[test]
    fn io_errors_pass_through() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e = Error::from(io);
        assert!(matches!(e, Error::Io(_)));
        assert_eq!(e.to_string(), "gone");
    }
}
