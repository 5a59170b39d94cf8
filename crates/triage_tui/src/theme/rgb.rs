//! RGB color for theme. Plain u8 triplet, usable with any terminal color API.

/// RGB triplet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    /// Tuple for ratatui/crossterm: `(r, g, b)`.
    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        c.tuple()
    }
}
