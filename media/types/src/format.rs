/*!
    Pixel formats and plane geometry.
*/

use std::fmt;

/**
    Planar video pixel formats.

    This is the subset of formats the pipeline actually handles: what common
    video decoders emit, and what the display texture consumes. All variants
    are planar; packed RGB formats never appear in this player.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PixelFormat {
    /// Planar YUV 4:2:0, 8-bit. The display format.
    Yuv420p,
    /// Planar YUV 4:2:2, 8-bit.
    Yuv422p,
    /// Planar YUV 4:4:4, 8-bit.
    Yuv444p,
    /// Semi-planar YUV 4:2:0, 8-bit (hardware decoder output).
    Nv12,
    /// Planar YUV 4:2:0, 10-bit in 16-bit storage.
    Yuv420p10,
}

impl PixelFormat {
    /**
        Number of planes a frame of this format carries.
    */
    pub const fn plane_count(self) -> usize {
        match self {
            Self::Yuv420p | Self::Yuv422p | Self::Yuv444p | Self::Yuv420p10 => 3,
            Self::Nv12 => 2,
        }
    }

    /**
        Size of one plane of a tightly packed frame, as (row bytes, rows).

        Chroma dimensions round up, matching how decoders lay out frames with
        odd luma dimensions.
    */
    pub fn plane_dimensions(self, plane: usize, width: u32, height: u32) -> (usize, usize) {
        assert!(plane < self.plane_count(), "plane {plane} out of range");

        let (w, h) = (width as usize, height as usize);
        let half_w = w.div_ceil(2);
        let half_h = h.div_ceil(2);

        match (self, plane) {
            (Self::Yuv420p, 0) => (w, h),
            (Self::Yuv420p, _) => (half_w, half_h),
            (Self::Yuv422p, 0) => (w, h),
            (Self::Yuv422p, _) => (half_w, h),
            (Self::Yuv444p, _) => (w, h),
            // NV12 interleaves both chroma components in one plane.
            (Self::Nv12, 0) => (w, h),
            (Self::Nv12, _) => (half_w * 2, half_h),
            (Self::Yuv420p10, 0) => (w * 2, h),
            (Self::Yuv420p10, _) => (half_w * 2, half_h),
        }
    }

    /**
        Total byte size of a tightly packed frame of this format.
    */
    pub fn frame_size(self, width: u32, height: u32) -> usize {
        (0..self.plane_count())
            .map(|p| {
                let (row_bytes, rows) = self.plane_dimensions(p, width, height);
                row_bytes * rows
            })
            .sum()
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Yuv420p => "yuv420p",
            Self::Yuv422p => "yuv422p",
            Self::Yuv444p => "yuv444p",
            Self::Nv12 => "nv12",
            Self::Yuv420p10 => "yuv420p10",
        };
        f.write_str(name)
    }
}
