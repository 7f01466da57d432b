/*!
    Decoded frame type.
*/

use std::time::Duration;

use crate::{Geometry, PixelFormat};

/**
    One decoded, uncompressed image.

    Planes are stored tightly packed in one contiguous buffer, in plane
    order; strides therefore equal each plane's row byte count. The sink
    reads planes and strides but never owns the frame.
*/
#[derive(Clone, Debug)]
pub struct VideoFrame {
    data: Vec<u8>,
    geometry: Geometry,
    format: PixelFormat,
    pts: Option<Duration>,
}

impl VideoFrame {
    /**
        Wrap a tightly packed plane buffer.

        `data` must be exactly `format.frame_size(geometry)` bytes.
    */
    pub fn new(
        data: Vec<u8>,
        geometry: Geometry,
        format: PixelFormat,
        pts: Option<Duration>,
    ) -> Self {
        assert_eq!(
            data.len(),
            format.frame_size(geometry.width, geometry.height),
            "plane buffer does not match {format} at {geometry}"
        );
        Self {
            data,
            geometry,
            format,
            pts,
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Presentation time relative to the stream start, when known.
    pub fn pts(&self) -> Option<Duration> {
        self.pts
    }

    /**
        The tightly packed bytes of one plane.
    */
    pub fn plane(&self, index: usize) -> &[u8] {
        let (offset, len) = self.plane_span(index);
        &self.data[offset..offset + len]
    }

    /**
        Row stride of one plane in bytes.
    */
    pub fn stride(&self, index: usize) -> usize {
        self.format
            .plane_dimensions(index, self.geometry.width, self.geometry.height)
            .0
    }

    fn plane_span(&self, index: usize) -> (usize, usize) {
        let mut offset = 0;
        for plane in 0..index {
            let (row_bytes, rows) =
                self.format
                    .plane_dimensions(plane, self.geometry.width, self.geometry.height);
            offset += row_bytes * rows;
        }
        let (row_bytes, rows) =
            self.format
                .plane_dimensions(index, self.geometry.width, self.geometry.height);
        (offset, row_bytes * rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_frame() -> VideoFrame {
        // Luma bytes 0, first chroma plane 1, second chroma plane 2.
        let g = Geometry::new(4, 2);
        let mut data = vec![0u8; 4 * 2];
        data.extend(vec![1u8; 2 * 1]);
        data.extend(vec![2u8; 2 * 1]);
        VideoFrame::new(data, g, PixelFormat::Yuv420p, None)
    }

    #[test]
    fn planes_slice_at_the_right_offsets() {
        let frame = filled_frame();
        assert!(frame.plane(0).iter().all(|b| *b == 0));
        assert!(frame.plane(1).iter().all(|b| *b == 1));
        assert!(frame.plane(2).iter().all(|b| *b == 2));
        assert_eq!(frame.plane(0).len(), 8);
        assert_eq!(frame.plane(1).len(), 2);
    }

    #[test]
    fn strides_match_packed_rows() {
        let frame = filled_frame();
        assert_eq!(frame.stride(0), 4);
        assert_eq!(frame.stride(1), 2);
        assert_eq!(frame.stride(2), 2);
    }

    #[test]
    fn pts_is_carried() {
        let g = Geometry::new(2, 2);
        let data = vec![0u8; PixelFormat::Yuv420p.frame_size(2, 2)];
        let frame = VideoFrame::new(
            data,
            g,
            PixelFormat::Yuv420p,
            Some(Duration::from_millis(40)),
        );
        assert_eq!(frame.pts(), Some(Duration::from_millis(40)));
    }

    #[test]
    #[should_panic(expected = "plane buffer")]
    fn wrong_buffer_size_is_rejected() {
        VideoFrame::new(vec![0u8; 3], Geometry::new(4, 2), PixelFormat::Yuv420p, None);
    }
}
