use channel_painter::brush::{half_width, stamp};
use channel_painter::{Channel, PixelBuffer};
use egui::Pos2;

const BASE: [u8; 4] = [10, 20, 30, 40];

fn painted(buffer: &PixelBuffer, channel: Channel, value: u8) -> Vec<(usize, usize)> {
    let mut pixels = Vec::new();
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            if buffer.pixel(x, y).unwrap()[channel.offset()] == value {
                pixels.push((x, y));
            }
        }
    }
    pixels
}

#[test]
fn test_footprint_matches_cosine_profile() {
    for radius in [0.4_f32, 1.0, 2.5, 3.0, 7.3, 12.0] {
        let mut buffer = PixelBuffer::new(40, 40, BASE);
        let (cx, cy) = (20, 20);
        stamp(&mut buffer, Pos2::new(cx as f32, cy as f32), radius, Channel::R, 255);

        let r = (radius as f64).round() as i32;
        let mut expected = Vec::new();
        for y in 0..40_i32 {
            let dy = y - cy;
            if dy.abs() > r {
                continue;
            }
            let w = half_width(dy, f64::from(radius));
            for x in 0..40_i32 {
                if (x - cx).abs() <= w {
                    expected.push((x as usize, y as usize));
                }
            }
        }
        assert_eq!(painted(&buffer, Channel::R, 255), expected, "radius {}", radius);
    }
}

#[test]
fn test_radius_three_shape() {
    let mut buffer = PixelBuffer::new(7, 7, BASE);
    stamp(&mut buffer, Pos2::new(3.0, 3.0), 3.0, Channel::A, 0);

    // Half-widths for r = 3 are 0, 1, 3, 3, 3, 1, 0: flatter than a true circle
    let rows: Vec<String> = (0..7)
        .map(|y| {
            (0..7)
                .map(|x| if buffer.pixel(x, y).unwrap()[3] == 0 { '#' } else { '.' })
                .collect()
        })
        .collect();
    assert_eq!(
        rows,
        vec!["...#...", "..###..", "#######", "#######", "#######", "..###..", "...#..."]
    );
}

#[test]
fn test_other_channels_untouched() {
    let mut buffer = PixelBuffer::new(16, 16, BASE);
    stamp(&mut buffer, Pos2::new(8.0, 8.0), 5.0, Channel::G, 200);

    for px in buffer.data().chunks_exact(4) {
        assert_eq!(px[0], BASE[0]);
        assert_eq!(px[2], BASE[2]);
        assert_eq!(px[3], BASE[3]);
        assert!(px[1] == BASE[1] || px[1] == 200);
    }
}

#[test]
fn test_writes_are_clamped_to_edges() {
    let mut buffer = PixelBuffer::new(10, 10, BASE);
    stamp(&mut buffer, Pos2::new(0.0, 0.0), 4.0, Channel::B, 1);

    let pixels = painted(&buffer, Channel::B, 1);
    assert!(pixels.contains(&(0, 0)));
    // Nothing past the footprint's right and bottom extent
    assert!(pixels.iter().all(|&(x, y)| x <= 4 && y <= 4));
    assert_eq!(buffer.data().len(), 10 * 10 * 4);
}

#[test]
fn test_far_outside_center_paints_corner() {
    let mut buffer = PixelBuffer::new(5, 5, BASE);
    stamp(&mut buffer, Pos2::new(100.0, 100.0), 2.0, Channel::R, 9);
    assert_eq!(painted(&buffer, Channel::R, 9), vec![(4, 4)]);
}

#[test]
fn test_stamping_twice_is_idempotent() {
    let mut once = PixelBuffer::new(20, 20, BASE);
    stamp(&mut once, Pos2::new(6.5, 12.2), 6.0, Channel::A, 128);

    let mut twice = once.clone();
    stamp(&mut twice, Pos2::new(6.5, 12.2), 6.0, Channel::A, 128);

    assert_eq!(once, twice);
}

#[test]
fn test_fractional_center_truncates() {
    let mut buffer = PixelBuffer::new(5, 5, BASE);
    stamp(&mut buffer, Pos2::new(2.9, 1.6), 0.0, Channel::R, 77);
    assert_eq!(painted(&buffer, Channel::R, 77), vec![(2, 1)]);
}
