use feedbackflow_icon::icon::{create_icon, mic_glyph_contains};

fn is_glyph(px: &[u8]) -> bool {
    px[3] > 0 && px[..3] == [255, 255, 255]
}

#[test]
fn outside_disk_is_fully_transparent() {
    for size in [16u32, 32, 100] {
        let buf = create_icon(size);
        assert_eq!(buf.len(), (size * size * 4) as usize);

        let c = size as f32 / 2.0;
        let radius = size as f32 * 0.45;
        for y in 0..size {
            for x in 0..size {
                let i = ((y * size + x) * 4) as usize;
                let (dx, dy) = (x as f32 - c, y as f32 - c);
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > radius {
                    assert_eq!(&buf[i..i + 4], &[0, 0, 0, 0], "({x}, {y}) size {size}");
                } else if radius - dist >= 0.1 {
                    assert!(buf[i + 3] > 0, "({x}, {y}) size {size} should be visible");
                }
                if radius - dist >= 1.5 {
                    assert_eq!(buf[i + 3], 255, "({x}, {y}) size {size} should be opaque");
                }
            }
        }
    }
}

#[test]
fn rendered_glyph_mask_is_mirror_symmetric() {
    for size in [16u32, 31, 64, 128] {
        let buf = create_icon(size);
        let mut glyph_pixels = 0;
        for y in 0..size {
            // Pixel x mirrors to size - x about the centre line; column 0 has no partner.
            for x in 1..size {
                let a = ((y * size + x) * 4) as usize;
                let b = ((y * size + (size - x)) * 4) as usize;
                assert_eq!(
                    is_glyph(&buf[a..a + 4]),
                    is_glyph(&buf[b..b + 4]),
                    "size {size} row {y} col {x}"
                );
                if is_glyph(&buf[a..a + 4]) {
                    glyph_pixels += 1;
                }
            }
        }
        assert!(glyph_pixels > 0, "size {size} drew no glyph");
    }
}

#[test]
fn glyph_stays_inside_central_region() {
    // Nothing of the microphone reaches the outer rim of the disk.
    for iy in -100..=100 {
        for ix in -100..=100 {
            let (nx, ny) = (ix as f32 / 100.0, iy as f32 / 100.0);
            if (nx * nx + ny * ny).sqrt() > 0.8 {
                assert!(!mic_glyph_contains(nx, ny), "({nx}, {ny})");
            }
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(create_icon(48), create_icon(48));
}
