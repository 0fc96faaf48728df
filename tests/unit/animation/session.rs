use super::*;
use crate::deck::card::MAJOR_ARCANA;
use crate::encode::sink::InMemorySink;

fn card(variant: &str, ts: u64) -> CardDescriptor {
    CardDescriptor::major(&MAJOR_ARCANA[1], variant, "clarity", ts)
}

fn small() -> RenderSettings {
    RenderSettings {
        device_pixel_ratio: 0.1,
    }
}

fn job(seed: u64) -> OverlayJob {
    OverlayJob {
        card: card("thoth", 1),
        colors: CardColors::FALLBACK,
        flipped: false,
        fps: Fps::default(),
        seed,
        backdrop: None,
    }
}

#[test]
fn idle_session_produces_nothing() {
    let mut s = ParticleSession::new(Rng64::new(1));
    assert!(!s.is_running());
    assert!(s.tick(0.0).is_none());
}

#[test]
fn rebinding_same_card_keeps_batch() {
    let mut s = ParticleSession::new(Rng64::new(1));
    let c = card("rider-waite", 5);
    assert!(s.bind(&c, &CardColors::FALLBACK, false));
    let before = s.field().unwrap().particles().to_vec();
    assert!(!s.bind(&c, &CardColors::FALLBACK, false));
    assert_eq!(s.field().unwrap().particles(), before.as_slice());
    assert_eq!(s.resets(), 1);
}

#[test]
fn flip_or_new_card_resets_batch() {
    let mut s = ParticleSession::new(Rng64::new(1));
    let c = card("rider-waite", 5);
    s.bind(&c, &CardColors::FALLBACK, false);
    for i in 0..10 {
        s.tick(f64::from(i) * 16.0);
    }
    assert!(s.bind(&c, &CardColors::FALLBACK, true));
    assert!(s.bind(&card("rider-waite", 6), &CardColors::FALLBACK, true));
    assert_eq!(s.resets(), 3);
    assert_eq!(s.field().unwrap().particles().len(), 50);
    assert!(s.key().unwrap().flipped);
}

#[test]
fn effect_follows_deck_and_unknown_deck_uses_default() {
    let mut s = ParticleSession::new(Rng64::new(1));
    s.bind(&card("visconti", 1), &CardColors::FALLBACK, false);
    assert_eq!(
        s.field().unwrap().effect(),
        Some(crate::deck::catalog::MysticalEffect::GoldenMist)
    );
    s.bind(&card("nonesuch", 1), &CardColors::FALLBACK, false);
    assert_eq!(
        s.field().unwrap().effect(),
        Some(crate::deck::catalog::MysticalEffect::Starfall)
    );
}

#[test]
fn teardown_returns_to_idle() {
    let mut s = ParticleSession::new(Rng64::new(1));
    s.bind(&card("marseilles", 1), &CardColors::FALLBACK, false);
    assert!(s.tick(0.0).is_some());
    s.teardown();
    assert!(!s.is_running());
    assert!(s.tick(16.0).is_none());
}

#[test]
fn offline_frames_are_deterministic() {
    let mut raster = CpuRasterizer::new(small(), FontBook::empty());
    let mut a = InMemorySink::new();
    let mut b = InMemorySink::new();
    assert_eq!(render_overlay_frames(&job(9), 4, &mut raster, &mut a).unwrap(), 4);
    render_overlay_frames(&job(9), 4, &mut raster, &mut b).unwrap();

    assert!(a.ended());
    assert_eq!(a.config().unwrap().width, 40);
    assert_eq!(a.frames().len(), 4);
    assert_eq!(a.frames(), b.frames());
}

#[test]
fn composite_onto_checks_sizes() {
    let overlay = FrameRGBA::transparent(2, 2);
    let mut backdrop = FrameRGBA::transparent(2, 2);
    backdrop.data.fill(255);
    let out = composite_onto(Some(&backdrop), overlay.clone()).unwrap();
    assert_eq!(out, backdrop);
    assert!(composite_onto(Some(&FrameRGBA::transparent(3, 2)), overlay).is_err());
}

#[test]
fn task_stops_at_limit() {
    let task = AnimationTask::spawn(
        OverlayJob {
            fps: Fps::new(240, 1).unwrap(),
            ..job(2)
        },
        small(),
        Some(3),
        Box::new(InMemorySink::new()),
    );
    assert_eq!(task.join().unwrap(), 3);
}

#[test]
fn cancelled_task_exits() {
    let task = AnimationTask::spawn(job(2), small(), None, Box::new(InMemorySink::new()));
    task.cancel();
    task.cancel();
    let pushed = task.join().unwrap();
    assert!(pushed < 1_000);
}

#[test]
fn dropping_task_joins_worker() {
    let task = AnimationTask::spawn(job(2), small(), None, Box::new(InMemorySink::new()));
    drop(task);
}
