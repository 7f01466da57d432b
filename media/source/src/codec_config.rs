/*!
    Opaque codec configuration handed from the source to the decoder.
*/

use ffmpeg_next::codec;

/**
    Codec parameters of the selected video stream.

    Intentionally opaque so that ffmpeg-next types do not leak into the
    public API; `media-decode` consumes it to construct the decoder.
*/
pub struct CodecConfig {
    parameters: codec::Parameters,
}

impl CodecConfig {
    pub(crate) fn new(parameters: codec::Parameters) -> Self {
        Self { parameters }
    }

    /**
        Lower-case name of the codec, for diagnostics.
    */
    pub fn codec_name(&self) -> String {
        format!("{:?}", self.parameters.id()).to_lowercase()
    }

    /**
        Consume the config, yielding the raw parameters.
    */
    pub fn into_parameters(self) -> codec::Parameters {
        self.parameters
    }
}

impl Clone for CodecConfig {
    fn clone(&self) -> Self {
        Self {
            parameters: self.parameters.clone(),
        }
    }
}

impl std::fmt::Debug for CodecConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecConfig")
            .field("codec_id", &self.parameters.id())
            .finish_non_exhaustive()
    }
}
