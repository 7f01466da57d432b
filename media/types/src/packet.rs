/*!
    Compressed packet type.
*/

/**
    One demuxed unit of compressed data.

    Created for each read from the input and dropped at the end of the loop
    iteration regardless of outcome. `stream_index` identifies which
    container stream the payload belongs to; the driver compares it against
    the selected video stream before decoding.
*/
#[derive(Clone, Debug)]
pub struct Packet {
    /// Compressed payload.
    pub data: Vec<u8>,
    /// Index of the container stream this packet belongs to.
    pub stream_index: usize,
    /// Presentation timestamp in the stream time base.
    pub pts: Option<i64>,
    /// Decode timestamp in the stream time base.
    pub dts: Option<i64>,
    /// True when the packet starts a keyframe.
    pub keyframe: bool,
}

impl Packet {
    pub fn new(
        data: Vec<u8>,
        stream_index: usize,
        pts: Option<i64>,
        dts: Option<i64>,
        keyframe: bool,
    ) -> Self {
        Self {
            data,
            stream_index,
            pts,
            dts,
            keyframe,
        }
    }
}
