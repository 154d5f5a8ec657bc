use serde::{Deserialize, Serialize};

use crate::error::{PressError, PressResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Straight-alpha RGBA8 color.
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Component-wise linear interpolation, `t` clamped to [0, 1].
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let af = f64::from(a);
            let bf = f64::from(b);
            (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Premultiplied RGBA8 bytes, the layout vello_cpu pixmaps expect.
    pub fn to_premul(self) -> [u8; 4] {
        let a = u16::from(self.a);
        let premul = |c: u8| -> u8 { ((u16::from(c) * a + 127) / 255) as u8 };
        [premul(self.r), premul(self.g), premul(self.b), self.a]
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` hex notation.
pub fn parse_hex(s: &str) -> PressResult<Rgba8> {
    let hex = s
        .strip_prefix('#')
        .ok_or_else(|| PressError::validation(format!("color '{s}' must start with '#'")))?;

    let nibble = |c: u8| -> PressResult<u8> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(PressError::validation(format!(
                "color '{s}' has a non-hex digit"
            ))),
        }
    };
    let byte = |hi: u8, lo: u8| -> PressResult<u8> { Ok((nibble(hi)? << 4) | nibble(lo)?) };

    let b = hex.as_bytes();
    match b.len() {
        3 => Ok(Rgba8::rgb(
            byte(b[0], b[0])?,
            byte(b[1], b[1])?,
            byte(b[2], b[2])?,
        )),
        6 => Ok(Rgba8::rgb(
            byte(b[0], b[1])?,
            byte(b[2], b[3])?,
            byte(b[4], b[5])?,
        )),
        8 => Ok(Rgba8::rgba(
            byte(b[0], b[1])?,
            byte(b[2], b[3])?,
            byte(b[4], b[5])?,
            byte(b[6], b[7])?,
        )),
        _ => Err(PressError::validation(format!(
            "color '{s}' must be #rgb, #rrggbb or #rrggbbaa"
        ))),
    }
}

impl Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_forms() {
        assert_eq!(parse_hex("#fff").unwrap(), Rgba8::rgb(255, 255, 255));
        assert_eq!(parse_hex("#22c55e").unwrap(), Rgba8::rgb(0x22, 0xc5, 0x5e));
        assert_eq!(
            parse_hex("#0f172a80").unwrap(),
            Rgba8::rgba(0x0f, 0x17, 0x2a, 0x80)
        );
    }

    #[test]
    fn parse_hex_rejects_garbage() {
        assert!(parse_hex("fff").is_err());
        assert!(parse_hex("#zzz").is_err());
        assert!(parse_hex("#12345").is_err());
    }

    #[test]
    fn hex_roundtrip_through_serde() {
        let c: Rgba8 = serde_json::from_str("\"#1e3a5f\"").unwrap();
        assert_eq!(c, Rgba8::rgb(0x1e, 0x3a, 0x5f));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#1e3a5f\"");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Rgba8::rgb(0, 0, 0);
        let b = Rgba8::rgb(255, 255, 255);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5).r, 128);
    }

    #[test]
    fn premul_scales_by_alpha() {
        let c = Rgba8::rgba(100, 50, 200, 128);
        assert_eq!(
            c.to_premul(),
            [
                ((100u16 * 128 + 127) / 255) as u8,
                ((50u16 * 128 + 127) / 255) as u8,
                ((200u16 * 128 + 127) / 255) as u8,
                128
            ]
        );
    }
}
