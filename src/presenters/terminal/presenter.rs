use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::trace;

use crate::controllers::interactive::errors::presenter::PresenterError;
use crate::controllers::interactive::events::sort_event::SortEvent;
use crate::controllers::interactive::ports::presenter::SortPresenterPort;
use crate::core::metrics::tracker::MetricsSnapshot;
use crate::presenters::terminal::render::{render_states, render_values};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writes frames as text lines. Tones have no terminal rendition and are
/// only traced.
pub struct TerminalPresenter<W: Write + Send> {
    out: Mutex<W>,
    show_frames: bool,
    frames_written: Mutex<u64>,
    last_metrics: Mutex<Option<MetricsSnapshot>>,
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W, show_frames: bool) -> Self {
        Self {
            out: Mutex::new(out),
            show_frames,
            frames_written: Mutex::new(0),
            last_metrics: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn frames_written(&self) -> u64 {
        *lock(&self.frames_written)
    }

    #[must_use]
    pub fn last_metrics(&self) -> Option<MetricsSnapshot> {
        lock(&self.last_metrics).clone()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, line: &str) -> Result<(), PresenterError> {
        let mut out = lock(&self.out);
        writeln!(out, "{line}")?;
        Ok(())
    }
}

impl<W: Write + Send> SortPresenterPort for TerminalPresenter<W> {
    fn present(&self, event: SortEvent) -> Result<(), PresenterError> {
        match event {
            SortEvent::Frame(frame) => {
                if !self.show_frames || frame.elements.is_empty() {
                    return Ok(());
                }

                self.write_line(&render_values(&frame.elements, frame.visual_mode))?;
                self.write_line(&render_states(&frame.elements))?;

                *lock(&self.frames_written) += 1;
            }
            SortEvent::Tone { frequency } => {
                trace!(frequency, "tone");
            }
            SortEvent::Metrics(snapshot) => {
                *lock(&self.last_metrics) = Some(snapshot);
            }
            SortEvent::RunFinished { token } => {
                if self.show_frames {
                    self.write_line(&format!("-- {token} finished --"))?;
                }
            }
        }

        Ok(())
    }
}
