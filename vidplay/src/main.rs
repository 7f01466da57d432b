/*!
    vidplay, a minimal command-line video player.

    Opens a container file, selects the video stream, decodes it with FFmpeg,
    and blits frames to an SDL window at the stream's native frame rate.

    Prerequisites: FFmpeg and SDL2 libraries installed on the system.

    Usage:
      vidplay /path/to/video.mp4
      vidplay --exit-policy strict /path/to/video.mp4
*/

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod display;
mod playback;

use cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    match args.run() {
        Ok(outcome) => {
            if cli::playback_failed(outcome, args.exit_policy) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("vidplay: {e:#}");
            ExitCode::FAILURE
        }
    }
}
