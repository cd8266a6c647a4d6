use rand::Rng;

/// The four gold hues a particle can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gold {
    Bright,
    Pale,
    Metallic,
    Dark,
}

impl Gold {
    pub const ALL: [Gold; 4] = [Gold::Bright, Gold::Pale, Gold::Metallic, Gold::Dark];

    pub fn hex(self) -> &'static str {
        match self {
            Gold::Bright => "#ffd700",
            Gold::Pale => "#f7e27d",
            Gold::Metallic => "#d4af37",
            Gold::Dark => "#b8860b",
        }
    }

    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Gold {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    #[inline]
    pub fn rgba(self, alpha: f64) -> String {
        hex_to_rgba(self.hex(), alpha)
    }
}

/// `"#rrggbb"` to a CSS `rgba(r,g,b,a)` string. Unparseable input yields black.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let n = u32::from_str_radix(hex.trim_start_matches('#'), 16).unwrap_or(0);
    let r = (n >> 16) & 255;
    let g = (n >> 8) & 255;
    let b = n & 255;
    format!("rgba({},{},{},{})", r, g, b, alpha)
}

#[inline]
pub fn rgb_to_rgba([r, g, b]: [u8; 3], alpha: f64) -> String {
    format!("rgba({},{},{},{})", r, g, b, alpha)
}
