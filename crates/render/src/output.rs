use std::io::Write;

use anyhow::{Context, Result};
use framesim_scenes::{Error, Scene, render_frames};
use rayon::ThreadPool;
use serde::Serialize;
use tracing::debug;

use crate::scene_file::LoadedScene;

/// Frames rendered before their snapshots are written and dropped.
const BATCH_SIZE: usize = 64;

/// One line of output.
#[derive(Serialize)]
struct FrameRecord<'a, T> {
    frame: i64,
    snapshot: &'a T,
}

/// Renders frames on an optional dedicated thread pool.
pub struct Renderer {
    pool: Option<ThreadPool>,
}

impl Renderer {
    /// Creates a renderer with `threads` workers, or the global pool if `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread pool cannot be built.
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = threads
            .map(|n| {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .context("failed to build thread pool")
            })
            .transpose()?;
        Ok(Self { pool })
    }

    fn render<S: Scene>(&self, scene: &S, frames: &[i64]) -> Vec<Result<S::Snapshot, Error>> {
        match &self.pool {
            Some(pool) => pool.install(|| render_frames(scene, frames)),
            None => render_frames(scene, frames),
        }
    }

    /// Writes one JSON line per frame of `scene`, in the order of `frames`.
    ///
    /// # Errors
    ///
    /// Returns an error on the first frame that fails to render or write.
    pub fn write(&self, scene: &LoadedScene, frames: &[i64], out: &mut impl Write) -> Result<()> {
        match scene {
            LoadedScene::Pendulum(scene) => self.write_frames(scene, frames, out),
            LoadedScene::Collision(scene) => self.write_frames(scene, frames, out),
            LoadedScene::Wave(scene) => self.write_frames(scene, frames, out),
            LoadedScene::Spring(scene) => self.write_frames(scene, frames, out),
            LoadedScene::Orbit(scene) => self.write_frames(scene, frames, out),
        }
    }

    fn write_frames<S>(&self, scene: &S, frames: &[i64], out: &mut impl Write) -> Result<()>
    where
        S: Scene,
        S::Snapshot: Serialize,
    {
        for batch in frames.chunks(BATCH_SIZE) {
            debug!(first = batch[0], len = batch.len(), "rendering batch");

            for (&frame, result) in batch.iter().zip(self.render(scene, batch)) {
                let snapshot = result.with_context(|| format!("failed to render frame {frame}"))?;
                serde_json::to_writer(
                    &mut *out,
                    &FrameRecord {
                        frame,
                        snapshot: &snapshot,
                    },
                )?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
