//! USB BCD versions (`bcdUSB`, `bcdDevice`).
use core::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct Version(pub u16);
impl From<u16> for Version {
    fn from(i: u16) -> Self {
        Version(i)
    }
}
impl From<Version> for u16 {
    fn from(v: Version) -> Self {
        v.0
    }
}
impl Version {
    /// USB 2.0, the most common `bcdUSB` value.
    pub const USB_2_0: Version = Version(0x0200);
    /// Creates a new BCD version `A.B.C`. `A` is 8 bits while `B` and `C` are only 4 bits.
    /// # Panics
    /// Panics if `minor > 0x0F_u8 || sub_minor > 0x0F_u8`
    pub fn new(major: u8, minor: u8, sub_minor: u8) -> Version {
        assert!(
            minor <= 0x0F_u8 && sub_minor <= 0x0F_u8,
            "minor or sub_minor greater than 0x0F"
        );
        Version(u16::from(major) << 8 | u16::from(minor << 4) | u16::from(sub_minor))
    }
    pub const fn major(self) -> u8 {
        ((self.0 & 0xFF00_u16) >> 8) as u8
    }
    pub const fn minor(self) -> u8 {
        ((self.0 & 0x00F0_u16) >> 4) as u8
    }
    pub const fn sub_minor(self) -> u8 {
        (self.0 & 0x000F_u16) as u8
    }
}
/// Dumps print the raw BCD word, e.g. `200` for USB 2.0.
impl fmt::LowerHex for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.sub_minor())
    }
}
