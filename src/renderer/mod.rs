//! Presentation boundary
//!
//! The simulation never draws. After each tick the host captures a [`Frame`]
//! and hands it to a [`Presenter`].

mod frame;
mod text;

pub use frame::{Frame, RectView};
pub use text::TextRenderer;

use std::io::Write;

use thiserror::Error;

/// Errors raised by presenter sinks
#[derive(Error, Debug)]
pub enum PresentError {
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode frame: {0}")]
    Json(#[from] serde_json::Error),
}

/// Receives one frame per tick
pub trait Presenter {
    fn present(&mut self, frame: &Frame) -> Result<(), PresentError>;
}

/// Logs score milestones and the end of the run
#[derive(Debug, Default)]
pub struct LogPresenter {
    last_score: Option<u64>,
    /// Log every this many points (0 = only game over)
    pub score_step: u64,
    finished: bool,
}

impl LogPresenter {
    pub fn new(score_step: u64) -> Self {
        Self {
            score_step,
            ..Default::default()
        }
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &Frame) -> Result<(), PresentError> {
        if !frame.running {
            if !self.finished {
                log::info!("Game over at tick {} - score {}", frame.tick, frame.score);
                self.finished = true;
            }
            return Ok(());
        }

        if self.score_step > 0
            && self.last_score != Some(frame.score)
            && frame.score % self.score_step == 0
        {
            log::info!(
                "Score {} (tick {}, {} obstacles on screen)",
                frame.score,
                frame.tick,
                frame.visible_obstacles().count()
            );
        }
        self.last_score = Some(frame.score);
        Ok(())
    }
}

/// Writes each frame as one JSON line
#[derive(Debug)]
pub struct JsonLinesPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonLinesPresenter<W> {
    fn present(&mut self, frame: &Frame) -> Result<(), PresentError> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}
