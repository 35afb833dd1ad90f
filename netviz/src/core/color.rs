//! Colors and the deterministic pastel palette used for clusters.

/// The number of distinct hues that keys are spread over.
pub const HUE_BUCKETS: u64 = 255;

const PASTEL_LIGHTNESS: f64 = 0.8;
const PASTEL_SATURATION: f64 = 0.7;

const FNV1A_OFFSET: u64 = 0xcbf29ce484222325;
const FNV1A_PRIME: u64 = 0x100000001b3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts a color from the HLS space. All components are in [0..1].
    pub fn from_hls(hue: f64, lightness: f64, saturation: f64) -> Self {
        if saturation == 0.0 {
            let c = channel(lightness);
            return Self::new(c, c, c);
        }
        let m2 = if lightness <= 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let m1 = 2.0 * lightness - m2;
        Self::new(
            channel(hls_value(m1, m2, hue + 1.0 / 3.0)),
            channel(hls_value(m1, m2, hue)),
            channel(hls_value(m1, m2, hue - 1.0 / 3.0)),
        )
    }

    pub fn to_web_color(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn hls_value(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        return m1 + (m2 - m1) * hue * 6.0;
    }
    if hue < 0.5 {
        return m2;
    }
    if hue < 2.0 / 3.0 {
        return m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0;
    }
    m1
}

/// Scales a [0..1] component to a byte, truncating like the classic
/// `int(c * 255)`.
fn channel(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0) as u8
}

/// 64-bit FNV-1a over the UTF-8 bytes of \p key. This is the digest that
/// seeds the palette, so it must never change.
pub fn fnv1a(key: &str) -> u64 {
    let mut h = FNV1A_OFFSET;
    for b in key.as_bytes() {
        h ^= u64::from(*b);
        h = h.wrapping_mul(FNV1A_PRIME);
    }
    h
}

/// Maps \p key to a hue in [0..1).
pub fn hue_of(key: &str) -> f64 {
    (fnv1a(key) % HUE_BUCKETS) as f64 / HUE_BUCKETS as f64
}

/// Returns a light color for \p hue, suitable as a cluster background.
pub fn pastel_from_hue(hue: f64) -> Color {
    Color::from_hls(hue, PASTEL_LIGHTNESS, PASTEL_SATURATION)
}

/// Returns the pastel color of \p key. The same key always gets the same
/// color, in this process and in any other.
pub fn pastel(key: &str) -> Color {
    pastel_from_hue(hue_of(key))
}
