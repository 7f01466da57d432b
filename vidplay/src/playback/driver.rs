use std::path::Path;

use media_decode::VideoDecoder;
use media_source::Source;
use media_types::{Error, Result};

use crate::display::DisplaySink;

use super::pipeline;

/// How the read loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopOutcome {
    /// The container ran out of packets.
    EndOfStream,
    /// The user asked to quit.
    Quit,
    /// The pipeline failed mid-stream and playback stopped early.
    DecodeError,
}

/// Open the input, build the decoder and the display, and run the
/// read-decode-present loop until end of stream, quit, or error.
///
/// Resources release in reverse-acquisition order on every exit path: the
/// display sink first, then the decoder, then the input.
pub fn play(path: &Path) -> Result<LoopOutcome> {
    let mut source = Source::open(path)?;

    let stream = source.stream().clone();
    let codec_config = source
        .take_codec_config()
        .ok_or_else(|| Error::StreamProbe("codec parameters missing".into()))?;

    let mut decoder = VideoDecoder::new(codec_config, stream.time_base)?;

    let mut sink = DisplaySink::open(decoder.geometry(), &window_title(path))?;

    let codec = stream
        .codec_id
        .map(|c| c.to_string())
        .unwrap_or_else(|| "unknown codec".into());
    match stream.fps() {
        Some(fps) => println!(
            "[vidplay] playing stream #{}: {} {} at {:.3} fps",
            stream.index, codec, stream.geometry, fps
        ),
        None => println!(
            "[vidplay] playing stream #{}: {} {}",
            stream.index, codec, stream.geometry
        ),
    }

    let frame_delay = pipeline::frame_delay(stream.frame_rate);

    let mut outcome = loop {
        let Some(packet) = source.next_packet() else {
            break LoopOutcome::EndOfStream;
        };

        if sink.drain_events() {
            break LoopOutcome::Quit;
        }

        if packet.stream_index == stream.index {
            if let Err(e) = pipeline::process(&mut decoder, &packet, &mut sink, frame_delay) {
                eprintln!("[playback] {e}");
                break LoopOutcome::DecodeError;
            }
        }
        // The packet drops here, every iteration, whatever happened above.
    };

    // Only a cleanly exhausted input gets the buffered tail of the stream.
    if outcome == LoopOutcome::EndOfStream {
        if let Err(e) = pipeline::drain(&mut decoder, &mut sink, frame_delay) {
            eprintln!("[playback] {e}");
            outcome = LoopOutcome::DecodeError;
        }
    }

    Ok(outcome)
}

fn window_title(path: &Path) -> String {
    path.file_name()
        .map(|name| format!("vidplay - {}", name.to_string_lossy()))
        .unwrap_or_else(|| "vidplay".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_title_carries_the_file_name() {
        assert_eq!(
            window_title(Path::new("/videos/movie.mp4")),
            "vidplay - movie.mp4"
        );
    }

    #[test]
    fn window_title_without_a_file_name() {
        assert_eq!(window_title(Path::new("/")), "vidplay");
    }
}
