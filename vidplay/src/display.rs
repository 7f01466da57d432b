use std::time::Duration;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureAccess};
use sdl2::video::Window;
use sdl2::{EventPump, Sdl};

use media_types::{Error, Geometry, PixelFormat, Result, VideoFrame};

/// Anything that can show decoded frames.
pub trait FrameSink {
    fn present(&mut self, frame: Option<&VideoFrame>, frame_delay: Duration) -> Result<()>;
}

/// SDL window, renderer, and streaming texture for one video stream.
///
/// The window opens at half the stream resolution; the texture stays at full
/// resolution and must match the stream geometry for both lifetimes (there
/// is no resize path).
pub struct DisplaySink {
    // Texture memory is released with the renderer when the canvas drops.
    texture: Texture,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    geometry: Geometry,
    _sdl: Sdl,
}

impl DisplaySink {
    pub fn open(geometry: Geometry, title: &str) -> Result<Self> {
        let sdl = sdl2::init().map_err(Error::DisplayInit)?;
        let video = sdl.video().map_err(Error::DisplayInit)?;

        let window = video
            .window(
                title,
                (geometry.width / 2).max(1),
                (geometry.height / 2).max(1),
            )
            .position_centered()
            .allow_highdpi()
            .opengl()
            .build()
            .map_err(|e| Error::DisplayInit(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| Error::DisplayInit(e.to_string()))?;

        let texture = canvas
            .texture_creator()
            .create_texture(
                PixelFormatEnum::IYUV,
                TextureAccess::Streaming,
                geometry.width,
                geometry.height,
            )
            .map_err(|e| Error::DisplayInit(e.to_string()))?;

        let event_pump = sdl.event_pump().map_err(Error::DisplayInit)?;

        Ok(Self {
            texture,
            canvas,
            event_pump,
            geometry,
            _sdl: sdl,
        })
    }

    /// Drain pending UI events; true when a quit was requested.
    pub fn drain_events(&mut self) -> bool {
        let mut quit = false;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => quit = true,
                _ => {}
            }
        }
        quit
    }
}

impl FrameSink for DisplaySink {
    fn present(&mut self, frame: Option<&VideoFrame>, frame_delay: Duration) -> Result<()> {
        let Some(frame) = frame else {
            return Ok(());
        };

        if frame.format() != PixelFormat::Yuv420p {
            return Err(Error::Render(format!(
                "texture accepts yuv420p, got {}",
                frame.format()
            )));
        }

        // Pace to the nominal frame rate before touching the texture.
        std::thread::sleep(frame_delay);

        let rect = Rect::new(0, 0, self.geometry.width, self.geometry.height);
        self.texture
            .update_yuv(
                rect,
                frame.plane(0),
                frame.stride(0),
                frame.plane(1),
                frame.stride(1),
                frame.plane(2),
                frame.stride(2),
            )
            .map_err(|e| Error::Render(e.to_string()))?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, None)
            .map_err(Error::Render)?;
        self.canvas.present();

        Ok(())
    }
}
