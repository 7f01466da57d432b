use std::time::Duration;

use media_decode::VideoDecoder;
use media_types::{Packet, Rational, Result, VideoFrame};

use crate::display::FrameSink;

/// Delay between presented frames for a stream of the given nominal rate.
///
/// Unknown or degenerate rates disable pacing; vsync still throttles
/// presentation.
pub fn frame_delay(frame_rate: Option<Rational>) -> Duration {
    frame_rate
        .and_then(Rational::interval)
        .unwrap_or(Duration::ZERO)
}

/// Decode one packet and present every frame it yields.
///
/// A packet may yield zero, one, or multiple frames; nothing is presented
/// beyond what the decoder actually extracted.
pub fn process(
    decoder: &mut VideoDecoder,
    packet: &Packet,
    sink: &mut impl FrameSink,
    frame_delay: Duration,
) -> Result<()> {
    let frames = decoder.decode(packet)?;
    present_all(&frames, sink, frame_delay)
}

/// Flush the decoder at end of input and present what it still buffered.
pub fn drain(
    decoder: &mut VideoDecoder,
    sink: &mut impl FrameSink,
    frame_delay: Duration,
) -> Result<()> {
    let frames = decoder.flush()?;
    present_all(&frames, sink, frame_delay)
}

fn present_all(
    frames: &[VideoFrame],
    sink: &mut impl FrameSink,
    frame_delay: Duration,
) -> Result<()> {
    for frame in frames {
        sink.present(Some(frame), frame_delay)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use media_types::{Geometry, PixelFormat};

    #[derive(Default)]
    struct CountingSink {
        presented: usize,
        empty_presents: usize,
    }

    impl FrameSink for CountingSink {
        fn present(&mut self, frame: Option<&VideoFrame>, _delay: Duration) -> Result<()> {
            match frame {
                Some(_) => self.presented += 1,
                None => self.empty_presents += 1,
            }
            Ok(())
        }
    }

    fn frame() -> VideoFrame {
        let data = vec![0u8; PixelFormat::Yuv420p.frame_size(4, 2)];
        VideoFrame::new(data, Geometry::new(4, 2), PixelFormat::Yuv420p, None)
    }

    #[test]
    fn presents_once_per_extracted_frame() {
        let frames = vec![frame(), frame(), frame()];
        let mut sink = CountingSink::default();

        present_all(&frames, &mut sink, Duration::ZERO).unwrap();

        assert_eq!(sink.presented, 3);
        assert_eq!(sink.empty_presents, 0);
    }

    #[test]
    fn zero_frames_present_nothing() {
        let mut sink = CountingSink::default();

        present_all(&[], &mut sink, Duration::ZERO).unwrap();

        assert_eq!(sink.presented, 0);
    }

    #[test]
    fn frame_delay_is_the_frame_interval() {
        assert_eq!(
            frame_delay(Some(Rational::new(25, 1))),
            Duration::from_millis(40)
        );

        let ntsc = frame_delay(Some(Rational::new(24000, 1001)));
        assert!(ntsc > Duration::from_millis(41) && ntsc < Duration::from_millis(42));
    }

    #[test]
    fn unknown_rate_disables_pacing() {
        assert_eq!(frame_delay(None), Duration::ZERO);
        assert_eq!(frame_delay(Some(Rational::new(0, 1))), Duration::ZERO);
        assert_eq!(frame_delay(Some(Rational::new(30, 0))), Duration::ZERO);
    }
}
