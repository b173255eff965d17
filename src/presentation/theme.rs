//! Colour derivation from strings.
//!
//! Every category gets a stable hue from its name, and the accent colours of
//! the whole UI come from the user's signature.

/// Deterministic 32-bit string hash (`h = h * 31 + c`, wrapping)
pub fn hash_string(s: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in s.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit));
    }
    h.unsigned_abs()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Convert HSL (hue in degrees, saturation and lightness in percent) to RGB
pub fn hsl_to_rgb(hue: u32, saturation: u8, lightness: u8) -> Rgb {
    let h = f64::from(hue % 360);
    let s = f64::from(saturation.min(100)) / 100.0;
    let l = f64::from(lightness.min(100)) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u32 / 60 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb(channel(r), channel(g), channel(b))
}

/// Accent colours derived from a signature string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent_hue: u32,
    pub accent2_hue: u32,
}

impl Theme {
    pub fn from_signature(signature: &str) -> Self {
        let accent_hue = hash_string(signature) % 360;
        let accent2_hue = (accent_hue + 40 + hash_string(&format!("{signature}x")) % 80) % 360;
        Self {
            accent_hue,
            accent2_hue,
        }
    }

    pub fn accent(&self) -> Rgb {
        hsl_to_rgb(self.accent_hue, 85, 58)
    }

    pub fn accent2(&self) -> Rgb {
        hsl_to_rgb(self.accent2_hue, 85, 58)
    }
}

/// Background colour of a category badge
pub fn badge_color(category: &str) -> Rgb {
    hsl_to_rgb(hash_string(category) % 360, 60, 20)
}
