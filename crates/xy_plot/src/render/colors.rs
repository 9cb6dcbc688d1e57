use crate::constants::{ANGLE_MAX, ANGLE_MIN};
use image::Rgb;

/// 色定義
pub struct Colors;

impl Colors {
    pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    pub const DARK_GRAY: Rgb<u8> = Rgb([64, 64, 64]);
    pub const NODE_BLUE: Rgb<u8> = Rgb([31, 119, 180]);
}

/// Cyclic palette: light at both ends, blue in the first half,
/// dark purple at the middle, red in the second half.
const TWILIGHT: [(f64, [u8; 3]); 9] = [
    (0.0, [226, 217, 226]),
    (0.125, [156, 179, 204]),
    (0.25, [96, 124, 192]),
    (0.375, [89, 64, 158]),
    (0.5, [47, 20, 60]),
    (0.625, [116, 38, 92]),
    (0.75, [175, 79, 85]),
    (0.875, [210, 156, 137]),
    (1.0, [226, 217, 226]),
];

/// Samples the palette at `t`, clipped to [0, 1]. NaN maps to 0.
pub fn twilight(t: f64) -> Rgb<u8> {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    for pair in TWILIGHT.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let w = (t - t0) / (t1 - t0);
            let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * w).round() as u8;
            return Rgb([lerp(c0[0], c1[0]), lerp(c0[1], c1[1]), lerp(c0[2], c1[2])]);
        }
    }
    Rgb(TWILIGHT[TWILIGHT.len() - 1].1)
}

/// Maps an angle onto the palette with fixed bounds [0, 2π]
pub fn angle_color(angle: f64) -> Rgb<u8> {
    twilight((angle - ANGLE_MIN) / (ANGLE_MAX - ANGLE_MIN))
}
