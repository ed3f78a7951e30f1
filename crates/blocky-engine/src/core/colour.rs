use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ParseColourError, ParsePaletteError};

/// An RGB colour of a leaf block.
///
/// Colours display and parse as `#rrggbb` (case-insensitive on input).
///
/// # Example
///
/// ```
/// use blocky_engine::Colour;
///
/// let colour: Colour = "#0180b5".parse().unwrap();
/// assert_eq!(colour, Colour::PACIFIC_POINT);
/// assert_eq!(colour.name(), "Pacific Point");
/// assert_eq!(colour.to_string(), "#0180b5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl Colour {
    pub const PACIFIC_POINT: Self = Self::new(1, 128, 181);
    pub const REAL_RED: Self = Self::new(199, 44, 58);
    pub const OLD_OLIVE: Self = Self::new(138, 151, 71);
    pub const DAFFODIL_DELIGHT: Self = Self::new(255, 211, 92);

    const NAMED: [(Self, &'static str); 4] = [
        (Self::PACIFIC_POINT, "Pacific Point"),
        (Self::REAL_RED, "Real Red"),
        (Self::OLD_OLIVE, "Old Olive"),
        (Self::DAFFODIL_DELIGHT, "Daffodil Delight"),
    ];

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Returns the human-readable name of this colour.
    ///
    /// The four game colours have proper names; any other colour is named by
    /// its `#rrggbb` form.
    #[must_use]
    pub fn name(self) -> String {
        Self::NAMED
            .iter()
            .find(|(colour, _)| *colour == self)
            .map_or_else(|| self.to_string(), |(_, name)| (*name).to_owned())
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Colour {
    type Err = ParseColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColourError::MissingHash {
                input: s.to_owned(),
            })?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColourError::InvalidLength {
                input: s.to_owned(),
            });
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColourError::InvalidHex {
                input: s.to_owned(),
            })
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Colour {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The fixed set of colours leaves and goals are drawn from.
///
/// A palette is never empty and never contains the same colour twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colours: vec![
                Colour::PACIFIC_POINT,
                Colour::REAL_RED,
                Colour::OLD_OLIVE,
                Colour::DAFFODIL_DELIGHT,
            ],
        }
    }
}

impl Palette {
    /// Creates a palette from the given colours.
    pub fn new(colours: Vec<Colour>) -> Result<Self, ParsePaletteError> {
        if colours.is_empty() {
            return Err(ParsePaletteError::Empty);
        }
        for (i, colour) in colours.iter().enumerate() {
            if colours[..i].contains(colour) {
                return Err(ParsePaletteError::Duplicate { colour: *colour });
            }
        }
        Ok(Self { colours })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    #[must_use]
    pub fn contains(&self, colour: Colour) -> bool {
        self.colours.contains(&colour)
    }

    /// Picks a colour uniformly at random.
    pub fn choose<R>(&self, rng: &mut R) -> Colour
    where
        R: Rng + ?Sized,
    {
        self.colours[rng.random_range(0..self.colours.len())]
    }
}

impl FromStr for Palette {
    type Err = ParsePaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colours = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Colour>, _>>()
            .map_err(ParsePaletteError::Colour)?;
        Self::new(colours)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_parse_and_display() {
        let colour: Colour = "#C72C3A".parse().unwrap();
        assert_eq!(colour, Colour::REAL_RED);
        assert_eq!(colour.to_string(), "#c72c3a");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "0180b5".parse::<Colour>(),
            Err(ParseColourError::MissingHash { .. })
        ));
        assert!(matches!(
            "#0180b".parse::<Colour>(),
            Err(ParseColourError::InvalidLength { .. })
        ));
        assert!(matches!(
            "#0180zz".parse::<Colour>(),
            Err(ParseColourError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_name_of_unnamed_colour_is_hex() {
        assert_eq!(Colour::OLD_OLIVE.name(), "Old Olive");
        assert_eq!(Colour::new(0, 0, 0).name(), "#000000");
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Colour::DAFFODIL_DELIGHT).unwrap();
        assert_eq!(json, "\"#ffd35c\"");
        let back: Colour = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Colour::DAFFODIL_DELIGHT);
        assert!(serde_json::from_str::<Colour>("\"red\"").is_err());
    }

    #[test]
    fn test_palette_parse() {
        let palette: Palette = "#0180b5, #c72c3a".parse().unwrap();
        assert_eq!(
            palette.colours(),
            &[Colour::PACIFIC_POINT, Colour::REAL_RED]
        );
        assert!(matches!("".parse::<Palette>(), Err(ParsePaletteError::Empty)));
        assert!(matches!(
            "#0180b5,#0180b5".parse::<Palette>(),
            Err(ParsePaletteError::Duplicate { .. })
        ));
        assert!(matches!(
            "#0180b5,nope".parse::<Palette>(),
            Err(ParsePaletteError::Colour(_))
        ));
    }

    #[test]
    fn test_choose_stays_in_palette() {
        let palette = Palette::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            assert!(palette.contains(palette.choose(&mut rng)));
        }
    }
}
