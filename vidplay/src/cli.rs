use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::playback::{self, LoopOutcome};

#[derive(Parser, Debug)]
#[command(name = "vidplay")]
#[command(about = "Minimal video player: decode a file and blit it to a window")]
pub struct Args {
    /// Path to the media file to play
    pub input: PathBuf,

    /// Exit status when playback stops on a mid-stream decode error
    #[arg(long, value_enum, default_value_t = ExitPolicy::BestEffort)]
    pub exit_policy: ExitPolicy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExitPolicy {
    /// Report success even when playback stopped on a decode error
    BestEffort,
    /// Report failure when playback stopped on a decode error
    Strict,
}

impl Args {
    pub fn run(&self) -> Result<LoopOutcome> {
        playback::play(&self.input)
            .with_context(|| format!("cannot play {}", self.input.display()))
    }
}

/// True when the loop outcome should produce a failing exit status.
pub fn playback_failed(outcome: LoopOutcome, policy: ExitPolicy) -> bool {
    policy == ExitPolicy::Strict && outcome == LoopOutcome::DecodeError
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_required() {
        assert!(Args::try_parse_from(["vidplay"]).is_err());
    }

    #[test]
    fn parses_path_with_default_policy() {
        let args = Args::try_parse_from(["vidplay", "movie.mp4"]).unwrap();
        assert_eq!(args.input, PathBuf::from("movie.mp4"));
        assert_eq!(args.exit_policy, ExitPolicy::BestEffort);
    }

    #[test]
    fn parses_strict_policy() {
        let args =
            Args::try_parse_from(["vidplay", "--exit-policy", "strict", "movie.mp4"]).unwrap();
        assert_eq!(args.exit_policy, ExitPolicy::Strict);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(Args::try_parse_from(["vidplay", "--exit-policy", "lenient", "movie.mp4"]).is_err());
    }

    #[test]
    fn only_strict_decode_errors_fail() {
        assert!(playback_failed(LoopOutcome::DecodeError, ExitPolicy::Strict));
        assert!(!playback_failed(LoopOutcome::DecodeError, ExitPolicy::BestEffort));
        assert!(!playback_failed(LoopOutcome::EndOfStream, ExitPolicy::Strict));
        assert!(!playback_failed(LoopOutcome::Quit, ExitPolicy::Strict));
    }
}
