use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::animation::particles::ParticleField;
use crate::deck::card::CardDescriptor;
use crate::deck::colors::CardColors;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex, Rgba8, Rng64};
use crate::foundation::error::{TarotError, TarotResult};
use crate::render::backend::{FrameRGBA, RenderSettings};
use crate::render::composite::over_in_place;
use crate::render::cpu::CpuRasterizer;
use crate::render::plan::CardScene;
use crate::text::layout::FontBook;

/// What a running session is bound to; any change resets the particle batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionKey {
    /// Card name.
    pub card_name: String,
    /// Card creation instant, distinguishing two summons of the same card.
    pub timestamp_ms: u64,
    /// Whether the card is face-down.
    pub flipped: bool,
}

impl SessionKey {
    /// Key for `card` in the given flip state.
    pub fn new(card: &CardDescriptor, flipped: bool) -> Self {
        Self {
            card_name: card.name.clone(),
            timestamp_ms: card.timestamp_ms,
            flipped,
        }
    }
}

#[derive(Debug)]
enum SessionState {
    Idle,
    Running {
        key: SessionKey,
        field: ParticleField,
        accent: Rgba8,
    },
}

/// Particle overlay state machine: `Idle` until bound, `Running` afterwards.
///
/// Rebinding to a different card or flip state discards the whole batch.
#[derive(Debug)]
pub struct ParticleSession {
    state: SessionState,
    rng: Rng64,
    resets: u64,
}

impl ParticleSession {
    /// Idle session drawing randomness from `rng`.
    pub fn new(rng: Rng64) -> Self {
        Self {
            state: SessionState::Idle,
            rng,
            resets: 0,
        }
    }

    /// Bind to a card. Returns `true` when a fresh batch was created.
    pub fn bind(&mut self, card: &CardDescriptor, colors: &CardColors, flipped: bool) -> bool {
        let key = SessionKey::new(card, flipped);
        if let SessionState::Running { key: current, .. } = &self.state
            && *current == key
        {
            return false;
        }

        let effect = Some(card.deck().mystical_effect);
        tracing::debug!(card = %key.card_name, flipped, ?effect, "particle session reset");
        self.state = SessionState::Running {
            field: ParticleField::new(effect, &mut self.rng),
            accent: colors.accent,
            key,
        };
        self.resets += 1;
        true
    }

    /// Advance one frame and return the overlay, or `None` while idle.
    pub fn tick(&mut self, elapsed_ms: f64) -> Option<CardScene> {
        match &mut self.state {
            SessionState::Idle => None,
            SessionState::Running { field, accent, .. } => {
                field.step(elapsed_ms, &mut self.rng);
                Some(field.overlay_scene(*accent))
            }
        }
    }

    /// Stop the session; the batch is dropped.
    pub fn teardown(&mut self) {
        if matches!(self.state, SessionState::Running { .. }) {
            tracing::debug!("particle session torn down");
        }
        self.state = SessionState::Idle;
    }

    /// Whether a batch is bound.
    pub fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running { .. })
    }

    /// Current batch, if running.
    pub fn field(&self) -> Option<&ParticleField> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Running { field, .. } => Some(field),
        }
    }

    /// Key the session is bound to, if running.
    pub fn key(&self) -> Option<&SessionKey> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Running { key, .. } => Some(key),
        }
    }

    /// Number of batches created so far.
    pub fn resets(&self) -> u64 {
        self.resets
    }
}

/// Inputs for rendering a run of overlay frames.
#[derive(Clone, Debug)]
pub struct OverlayJob {
    /// Card the overlay belongs to.
    pub card: CardDescriptor,
    /// Resolved colors; particles use `accent`.
    pub colors: CardColors,
    /// Face-down state.
    pub flipped: bool,
    /// Frame rate used for elapsed time and sink timing.
    pub fps: Fps,
    /// Particle seed.
    pub seed: u64,
    /// Optional card raster the overlay is composited onto.
    pub backdrop: Option<FrameRGBA>,
}

/// Render `frames` overlay frames from a fresh session into `sink`.
///
/// Frame `i` is stepped with `elapsed_ms = i * 1000 / fps`, so output depends only on the job.
#[tracing::instrument(skip(job, raster, sink), fields(card = %job.card.name))]
pub fn render_overlay_frames(
    job: &OverlayJob,
    frames: u64,
    raster: &mut CpuRasterizer,
    sink: &mut dyn FrameSink,
) -> TarotResult<u64> {
    let mut session = ParticleSession::new(Rng64::new(job.seed));
    session.bind(&job.card, &job.colors, job.flipped);
    begin_sink(sink, raster, job.fps)?;
    for i in 0..frames {
        let idx = FrameIndex(i);
        let frame = overlay_frame(&mut session, raster, job, idx)?;
        sink.push_frame(idx, &frame)?;
    }
    sink.end()?;
    Ok(frames)
}

fn begin_sink(sink: &mut dyn FrameSink, raster: &CpuRasterizer, fps: Fps) -> TarotResult<()> {
    let (width, height) = raster.settings().pixel_size()?;
    sink.begin(SinkConfig {
        width: u32::from(width),
        height: u32::from(height),
        fps,
    })
}

fn overlay_frame(
    session: &mut ParticleSession,
    raster: &mut CpuRasterizer,
    job: &OverlayJob,
    idx: FrameIndex,
) -> TarotResult<FrameRGBA> {
    let scene = session
        .tick(job.fps.frame_to_ms(idx))
        .ok_or_else(|| TarotError::animation("particle session is not running"))?;
    let overlay = raster.rasterize(&scene)?;
    composite_onto(job.backdrop.as_ref(), overlay)
}

/// Composite an overlay frame over an optional backdrop of the same size.
pub fn composite_onto(backdrop: Option<&FrameRGBA>, overlay: FrameRGBA) -> TarotResult<FrameRGBA> {
    let Some(backdrop) = backdrop else {
        return Ok(overlay);
    };
    if backdrop.width != overlay.width || backdrop.height != overlay.height {
        return Err(TarotError::validation(format!(
            "backdrop is {}x{} but overlay is {}x{}",
            backdrop.width, backdrop.height, overlay.width, overlay.height
        )));
    }
    let mut out = backdrop.clone();
    over_in_place(&mut out.data, &overlay.data, 1.0)?;
    Ok(out)
}

/// Background thread that owns one particle session and streams frames to a sink in real time.
///
/// Cancelling (explicitly or by dropping the task) stops it before the next frame.
pub struct AnimationTask {
    cancel: Arc<AtomicBool>,
    handle: Option<JoinHandle<TarotResult<u64>>>,
}

impl AnimationTask {
    /// Start the task. `limit` bounds the number of frames; `None` runs until cancelled.
    pub fn spawn(
        job: OverlayJob,
        settings: RenderSettings,
        limit: Option<u64>,
        mut sink: Box<dyn FrameSink>,
    ) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let token = Arc::clone(&cancel);
        let handle = std::thread::spawn(move || -> TarotResult<u64> {
            let mut raster = CpuRasterizer::new(settings, FontBook::empty());
            let mut session = ParticleSession::new(Rng64::new(job.seed));
            session.bind(&job.card, &job.colors, job.flipped);
            begin_sink(sink.as_mut(), &raster, job.fps)?;

            let frame_dur = Duration::from_secs_f64(job.fps.frame_duration_secs());
            let start = Instant::now();
            let mut pushed = 0u64;
            while !token.load(Ordering::Acquire) && limit.is_none_or(|n| pushed < n) {
                let idx = FrameIndex(pushed);
                let frame = overlay_frame(&mut session, &mut raster, &job, idx)?;
                sink.push_frame(idx, &frame)?;
                pushed += 1;

                let due = start + frame_dur.saturating_mul(pushed as u32);
                if let Some(wait) = due.checked_duration_since(Instant::now()) {
                    std::thread::sleep(wait);
                }
            }
            session.teardown();
            sink.end()?;
            Ok(pushed)
        });
        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Request the task to stop. Idempotent.
    pub fn cancel(&self) {
        if !self.cancel.swap(true, Ordering::AcqRel) {
            tracing::debug!("animation task cancelled");
        }
    }

    /// Whether the worker thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the task to exit and return how many frames it pushed.
    pub fn join(mut self) -> TarotResult<u64> {
        let handle = self
            .handle
            .take()
            .ok_or_else(|| TarotError::animation("animation task already joined"))?;
        handle
            .join()
            .map_err(|_| TarotError::animation("animation task panicked"))?
    }
}

impl Drop for AnimationTask {
    fn drop(&mut self) {
        self.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/session.rs"]
mod tests;
