// src/types.rs
use std::fmt;

/// Lead byte of every JPEG marker.
pub const MARKER_PREFIX: u8 = 0xFF;

/// Start-of-image signature every JFIF stream begins with.
pub const SOI_SIGNATURE: [u8; 2] = [MARKER_PREFIX, Marker::SOI.0];

/// JPEG marker tag byte (the byte following `0xFF`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Marker(pub u8);

impl Marker {
    pub const SOF0: Marker = Marker(0xC0);
    pub const SOF1: Marker = Marker(0xC1);
    pub const SOF2: Marker = Marker(0xC2);
    pub const SOF3: Marker = Marker(0xC3);
    pub const DHT: Marker = Marker(0xC4);
    pub const SOF5: Marker = Marker(0xC5);
    pub const SOF6: Marker = Marker(0xC6);
    pub const SOF7: Marker = Marker(0xC7);
    pub const JPG: Marker = Marker(0xC8);
    pub const SOF9: Marker = Marker(0xC9);
    pub const SOF10: Marker = Marker(0xCA);
    pub const SOF11: Marker = Marker(0xCB);
    pub const DAC: Marker = Marker(0xCC);
    pub const SOF13: Marker = Marker(0xCD);
    pub const SOF14: Marker = Marker(0xCE);
    pub const SOF15: Marker = Marker(0xCF);
    pub const SOI: Marker = Marker(0xD8);
    pub const EOI: Marker = Marker(0xD9);
    pub const SOS: Marker = Marker(0xDA);
    pub const DQT: Marker = Marker(0xDB);
    pub const DRI: Marker = Marker(0xDD);
    pub const APP0: Marker = Marker(0xE0);
    pub const APP1: Marker = Marker(0xE1);
    pub const APP14: Marker = Marker(0xEE);
    pub const COM: Marker = Marker(0xFE);

    pub fn new(tag: u8) -> Self {
        Marker(tag)
    }

    pub fn tag(&self) -> u8 {
        self.0
    }

    /// The two bytes this marker occupies in a stream.
    pub fn to_bytes(&self) -> [u8; 2] {
        [MARKER_PREFIX, self.0]
    }

    /// SOS and EOI end the run of length-prefixed segments.
    pub fn is_terminal(&self) -> bool {
        matches!(*self, Marker::SOS | Marker::EOI)
    }

    /// Whether a 2-byte big-endian length field follows the marker.
    pub fn has_length(&self) -> bool {
        !self.is_terminal()
    }

    /// Human readable name, `"Unknown Tag"` for markers outside the table
    pub fn name(&self) -> &'static str {
        match self.0 {
            0xD8 => "SOI (Start of Image)",
            0xE0 => "APP0 (JFIF tag)",
            0xCC => "DAC (Definition of Arithmetic Coding)",
            0xDB => "DQT (Definition of Quantization Tables)",
            0xDD => "DRI (Define Restart Interval)",
            0xE1 => "APP1 (Exif Data)",
            0xEE => "APP14 (Often used for Copyright Entries)",
            0xFE => "COM (Comments)",
            0xDA => "SOS (Start of Scan)",
            0xD9 => "EOI (End of Image)",
            0xC0 => "SOF0 (Baseline DCT)",
            0xC1 => "SOF1 (Extended Sequential DCT)",
            0xC2 => "SOF2 (Progressive DCT)",
            0xC3 => "SOF3 (Lossless, Sequential)",
            0xC4 => "DHT (Huffman Table Definition)",
            0xC5 => "SOF5 (Differential Sequential DCT)",
            0xC6 => "SOF6 (Differential Progressive DCT)",
            0xC7 => "SOF7 (Differential Lossless, Sequential)",
            0xC8 => "JPG (Reserved for JPEG Extensions)",
            0xC9 => "SOF9 (Extended Sequential DCT)",
            0xCA => "SOF10 (Progressive DCT)",
            0xCB => "SOF11 (Lossless, Sequential)",
            0xCD => "SOF13 (Differential Sequential DCT)",
            0xCE => "SOF14 (Differential Progressive DCT)",
            0xCF => "SOF15 (Differential Lossless, Sequential)",
            _ => "Unknown Tag",
        }
    }
}

impl From<u8> for Marker {
    fn from(tag: u8) -> Self {
        Marker(tag)
    }
}

impl fmt::LowerHex for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0xFF{:02X}", self.0)
    }
}
