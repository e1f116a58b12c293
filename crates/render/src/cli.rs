use std::{num::NonZeroU64, path::PathBuf};

use anyhow::{Result, bail};
use clap::Parser;

/// Render snapshots of a framesim scene as JSON lines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Scene file (TOML) with a `kind` of pendulum, collision, wave, spring, or orbit
    #[arg(value_name = "FILE")]
    pub scene: PathBuf,

    /// First frame to render
    #[arg(long, value_name = "FRAME", default_value_t = 0, allow_negative_numbers = true)]
    pub start: i64,

    /// Last frame to render, inclusive (defaults to the first frame)
    #[arg(long, value_name = "FRAME", allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// Render every Nth frame
    #[arg(long, value_name = "N", default_value = "1")]
    pub stride: NonZeroU64,

    /// Worker threads (defaults to one per core)
    #[arg(long, value_name = "COUNT")]
    pub threads: Option<usize>,
}

impl Args {
    /// Expands the frame range options into the list of frames to render.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is empty.
    pub fn frames(&self) -> Result<Vec<i64>> {
        let end = self.end.unwrap_or(self.start);
        if end < self.start {
            bail!("--end ({end}) is before --start ({})", self.start);
        }

        let stride = usize::try_from(self.stride.get())?;
        Ok((self.start..=end).step_by(stride).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("framesim-render").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn single_frame_by_default() {
        let args = parse(&["scene.toml"]);

        assert_eq!(args.frames().unwrap(), vec![0]);
        assert_eq!(args.threads, None);
    }

    #[test]
    fn strided_range() {
        let args = parse(&["scene.toml", "--start", "10", "--end", "20", "--stride", "4"]);

        assert_eq!(args.frames().unwrap(), vec![10, 14, 18]);
    }

    #[test]
    fn reversed_range_is_an_error() {
        let args = parse(&["scene.toml", "--start", "5", "--end", "2"]);

        assert!(args.frames().is_err());
    }

    #[test]
    fn zero_stride_is_rejected() {
        let result = Args::try_parse_from(["framesim-render", "scene.toml", "--stride", "0"]);

        assert!(result.is_err());
    }
}
