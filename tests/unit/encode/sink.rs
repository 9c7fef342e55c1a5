use super::*;

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: rgba.repeat((width * height) as usize),
        premultiplied: true,
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_sink").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let mut px = [64u8, 0, 32, 128, 0, 0, 0, 0, 255, 255, 255, 255];
    unpremultiply_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 0, 64, 128]);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..], &[255, 255, 255, 255]);
}

#[test]
fn png_sink_clears_directory_and_pads_names() {
    let dir = scratch_dir("pads");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("stale.png"), b"old").unwrap();

    let mut sink = PngSequenceSink::new(PngSequenceOpts {
        dir: dir.clone(),
        ..PngSequenceOpts::default()
    });
    sink.begin(SinkConfig {
        width: 4,
        height: 4,
    })
    .unwrap();
    assert!(!dir.join("stale.png").exists());

    sink.push_frame(FrameIndex(0), &solid(4, 4, [0, 0, 0, 255]))
        .unwrap();
    sink.push_frame(FrameIndex(12), &solid(4, 4, [255, 0, 0, 255]))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(sink.frames_written(), 2);
    assert!(dir.join("00000.png").exists());
    let img = image::open(dir.join("00012.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 4));
    assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 255]);
}

#[test]
fn png_sink_rejects_frames_before_begin_or_of_wrong_size() {
    let dir = scratch_dir("reject");
    let mut sink = PngSequenceSink::new(PngSequenceOpts {
        dir,
        ..PngSequenceOpts::default()
    });
    let frame = solid(2, 2, [0, 0, 0, 255]);
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());

    sink.begin(SinkConfig {
        width: 3,
        height: 3,
    })
    .unwrap();
    let err = sink.push_frame(FrameIndex(0), &frame).unwrap_err();
    assert!(matches!(err, MazeError::Render(_)));
}

#[test]
fn in_memory_sink_keeps_order() {
    let mut sink = InMemorySink::new();
    sink.begin(SinkConfig {
        width: 1,
        height: 1,
    })
    .unwrap();
    for i in 0..3 {
        sink.push_frame(FrameIndex(i), &solid(1, 1, [0, 0, 0, 255]))
            .unwrap();
    }
    sink.end().unwrap();
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2]);
    assert!(sink.ended());
}
