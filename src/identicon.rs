//! Blockies identicons
//!
//! Deterministic 8x8 mirrored pixel grids seeded from an address, the same
//! scheme wallets and block explorers use, rendered as inline SVG.

use alloy_primitives::Address;
use std::fmt::Write;

/// Grid width and height in cells
pub const DEFAULT_SIZE: usize = 8;

/// Pixels per cell
pub const DEFAULT_SCALE: usize = 16;

/// xorshift generator seeded from a string, bit-compatible with blockies
struct SeedRng {
    state: [i32; 4],
}

impl SeedRng {
    fn new(seed: &str) -> Self {
        let mut state = [0i32; 4];
        for (i, unit) in seed.encode_utf16().enumerate() {
            let s = &mut state[i % 4];
            *s = s.wrapping_shl(5).wrapping_sub(*s).wrapping_add(unit as i32);
        }
        Self { state }
    }

    fn next(&mut self) -> f64 {
        let t = self.state[0] ^ self.state[0].wrapping_shl(11);
        self.state[0] = self.state[1];
        self.state[1] = self.state[2];
        self.state[2] = self.state[3];
        self.state[3] = self.state[3] ^ (self.state[3] >> 19) ^ t ^ (t >> 8);
        (self.state[3] as u32) as f64 / 2_147_483_648.0
    }

    fn color(&mut self) -> Hsl {
        let h = (self.next() * 360.0).floor();
        let s = self.next() * 60.0 + 40.0;
        let l = (self.next() + self.next() + self.next() + self.next()) * 25.0;
        Hsl { h, s, l }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsl({},{:.2}%,{:.2}%)", self.h, self.s, self.l)
    }
}

/// Cell value: 0 background, 1 foreground, anything higher is a spot
#[derive(Debug, Clone, PartialEq)]
pub struct Blockies {
    pub size: usize,
    pub color: Hsl,
    pub background: Hsl,
    pub spot: Hsl,
    pub cells: Vec<u8>,
}

impl Blockies {
    pub fn new(seed: &str, size: usize) -> Self {
        let mut rng = SeedRng::new(seed);
        let color = rng.color();
        let background = rng.color();
        let spot = rng.color();

        let data_width = (size + 1) / 2;
        let mirror_width = size - data_width;
        let mut cells = Vec::with_capacity(size * size);
        for _ in 0..size {
            let row: Vec<u8> = (0..data_width)
                .map(|_| (rng.next() * 2.3).floor() as u8)
                .collect();
            cells.extend_from_slice(&row);
            cells.extend(row[..mirror_width].iter().rev());
        }

        Self {
            size,
            color,
            background,
            spot,
            cells,
        }
    }

    /// Render as an SVG document with `scale` pixels per cell
    pub fn to_svg(&self, scale: usize) -> String {
        let side = self.size * scale;
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{side}\" height=\"{side}\" \
             viewBox=\"0 0 {side} {side}\" shape-rendering=\"crispEdges\">\
             <rect width=\"{side}\" height=\"{side}\" fill=\"{}\"/>",
            self.background
        );

        for (i, cell) in self.cells.iter().enumerate() {
            let fill = match cell {
                0 => continue,
                1 => self.color,
                _ => self.spot,
            };
            let x = (i % self.size) * scale;
            let y = (i / self.size) * scale;
            let _ = write!(
                svg,
                "<rect x=\"{x}\" y=\"{y}\" width=\"{scale}\" height=\"{scale}\" fill=\"{fill}\"/>"
            );
        }

        svg.push_str("</svg>");
        svg
    }

    /// Render as a `data:` URL usable in an `<img src>`
    pub fn to_data_url(&self, scale: usize) -> String {
        format!(
            "data:image/svg+xml;utf8,{}",
            urlencoding::encode(&self.to_svg(scale))
        )
    }
}

/// Identicon for an address, seeded from its checksum form
pub fn identicon_url(address: &Address) -> String {
    Blockies::new(&address.to_string(), DEFAULT_SIZE).to_data_url(DEFAULT_SCALE)
}
