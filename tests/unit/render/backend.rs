use super::*;

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![128, 64, 0, 128, 0, 0, 255, 255],
        premultiplied: true,
    }
}

#[test]
fn pixel_reads_row_major() {
    let f = frame();
    assert_eq!(f.pixel(1, 0), Some([0, 0, 255, 255]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}

#[test]
fn straight_conversion_only_touches_premultiplied_frames() {
    let f = frame();
    assert_eq!(&f.to_straight_rgba8()[0..4], &[255, 128, 0, 128]);

    let straight = FrameRGBA {
        premultiplied: false,
        ..frame()
    };
    assert_eq!(straight.to_straight_rgba8(), straight.data);
}

#[test]
fn png_encoding_decodes_back_to_same_size() {
    let png = frame().encode_png().unwrap();
    assert_eq!(&png[1..4], b"PNG");
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 1));
    assert_eq!(decoded.get_pixel(1, 0).0, [0, 0, 255, 255]);
}

#[test]
fn malformed_buffers_are_rejected() {
    let f = FrameRGBA {
        data: vec![0; 3],
        ..frame()
    };
    assert!(f.encode_png().is_err());
}
