use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "framecast_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn cfg() -> SinkConfig {
    SinkConfig {
        composition: "Test".to_string(),
        width: 2,
        height: 1,
        fps: Fps::new(30, 1).unwrap(),
    }
}

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![128, 0, 0, 128, 0, 255, 0, 255],
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_captures_everything() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(3), &frame()).unwrap();
    sink.push_frame(FrameIndex(4), &frame()).unwrap();
    assert!(!sink.is_finished());
    sink.end().unwrap();

    assert!(sink.is_finished());
    assert_eq!(sink.config(), Some(&cfg()));
    let idx: Vec<_> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, [3, 4]);
}

#[test]
fn begin_resets_in_memory_state() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame()).unwrap();
    sink.end().unwrap();
    sink.begin(cfg()).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_finished());
}

#[test]
fn png_sequence_writes_numbered_straight_alpha_files() {
    let dir = temp_dir("png_sequence");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(7), &frame()).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.written(), 1);

    let path = dir.join("frame_00007.png");
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 255, 0, 255]);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn png_sequence_rejects_out_of_order_frames() {
    let dir = temp_dir("png_order");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(2), &frame()).unwrap();
    let err = sink.push_frame(FrameIndex(2), &frame()).unwrap_err();
    assert!(matches!(err, FramecastError::Render(_)));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn file_names_are_zero_padded() {
    assert_eq!(PngSequenceSink::file_name(FrameIndex(0)), "frame_00000.png");
    assert_eq!(PngSequenceSink::file_name(FrameIndex(2699)), "frame_02699.png");
}
