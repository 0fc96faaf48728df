use super::*;

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::default(),
    }
}

#[test]
fn in_memory_sink_captures_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    for i in 0..3 {
        sink.push_frame(FrameIndex(i), &FrameRGBA::transparent(2, 2))
            .unwrap();
    }
    sink.end().unwrap();

    assert!(sink.ended());
    assert_eq!(sink.config(), Some(cfg()));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2]);
}

#[test]
fn png_sequence_writes_numbered_files() {
    let dir = std::env::temp_dir().join(format!("tarot-forge-seq-{}", std::process::id()));
    let mut sink = PngSequenceSink::new(&dir, "aura");
    assert!(
        sink.push_frame(FrameIndex(0), &FrameRGBA::transparent(2, 2))
            .is_err()
    );

    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(7), &FrameRGBA::transparent(2, 2))
        .unwrap();
    sink.end().unwrap();

    let path = sink.frame_path(FrameIndex(7));
    assert!(path.ends_with("aura-00007.png"));
    assert!(path.exists());
    assert_eq!(sink.written(), 1);
    let _ = std::fs::remove_dir_all(&dir);
}
