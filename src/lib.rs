//! Tarot Forge renders procedurally generated tarot cards.
//!
//! A card is drawn from the static catalog, a sigil is derived from the user's intention, and the
//! face or back is composed into a display list and rasterized on the CPU:
//!
//! - Summon a card with [`Forge::summon`]
//! - Wrap it in a [`CardView`] to render, flip and export PNGs
//! - Drive the particle overlay with a [`ParticleSession`] or stream it from an [`AnimationTask`]
//!   into a [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod animation;
/// Asset decoding.
pub mod assets;
/// Runtime configuration.
pub mod config;
pub mod deck;
pub mod encode;
pub mod forge;
/// Value types and errors shared by every module.
pub mod foundation;
pub mod geometry;
pub mod render;
/// Sigil data model and generator seams.
pub mod sigil;
/// Text shaping and wrapping.
pub mod text;
pub mod view;

pub use crate::foundation::core::{
    Affine, BezPath, CARD_CENTER, CARD_HEIGHT, CARD_WIDTH, Fps, FrameIndex, Point, Rect, Rgba8,
    Rng64,
};
pub use crate::foundation::error::{TarotError, TarotResult};

pub use crate::animation::particles::{PARTICLE_COUNT, Particle, ParticleField};
pub use crate::animation::session::{
    AnimationTask, OverlayJob, ParticleSession, render_overlay_frames,
};
pub use crate::config::ForgeConfig;
pub use crate::deck::card::{CardDescriptor, Suit};
pub use crate::deck::catalog::{DECKS, DeckKey, DeckVariant};
pub use crate::deck::colors::CardColors;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use crate::forge::oracle::{FileOracle, ImageOracle};
pub use crate::forge::summon::{ArcanaChoice, Forge, SummonRequest, SummonState, Summoned};
pub use crate::render::backend::{FrameRGBA, RenderSettings};
pub use crate::render::cpu::CpuRasterizer;
pub use crate::sigil::model::SigilData;
pub use crate::text::layout::FontBook;
pub use crate::view::CardView;
