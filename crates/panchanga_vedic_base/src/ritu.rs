//! Ritu (season) and Ayana (solar half-year).

use serde::Serialize;

use crate::rashi::Rashi;

/// Six two-month seasons; Vasant spans Meena and Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ritu {
    Vasant,
    Grishma,
    Varsha,
    Sharad,
    Hemant,
    Shishir,
}

const ALL_RITUS: [Ritu; 6] = [
    Ritu::Vasant,
    Ritu::Grishma,
    Ritu::Varsha,
    Ritu::Sharad,
    Ritu::Hemant,
    Ritu::Shishir,
];

impl Ritu {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vasant => "Vasant",
            Self::Grishma => "Grishma",
            Self::Varsha => "Varsha",
            Self::Sharad => "Sharad",
            Self::Hemant => "Hemant",
            Self::Shishir => "Shishir",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Vasant => "Spring",
            Self::Grishma => "Summer",
            Self::Varsha => "Monsoon",
            Self::Sharad => "Autumn",
            Self::Hemant => "Pre-winter",
            Self::Shishir => "Winter",
        }
    }
}

/// Ritu for the Sun's sidereal rashi.
pub const fn ritu_from_sun_rashi(rashi: Rashi) -> Ritu {
    ALL_RITUS[(((rashi.index() + 1) % 12) / 2) as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ayana {
    /// From Makara Sankranti to Karka Sankranti.
    Uttarayana,
    /// From Karka Sankranti to Makara Sankranti.
    Dakshinayana,
}

impl Ayana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uttarayana => "Uttarayana",
            Self::Dakshinayana => "Dakshinayana",
        }
    }

    /// Rashi whose Sankranti opens this ayana.
    pub const fn opening_rashi(self) -> Rashi {
        match self {
            Self::Uttarayana => Rashi::Makara,
            Self::Dakshinayana => Rashi::Karka,
        }
    }
}

/// Ayana for the Sun's sidereal longitude.
pub fn ayana_from_sun_longitude(sidereal_lon: f64) -> Ayana {
    let lon = crate::util::normalize_360(sidereal_lon);
    if (90.0..270.0).contains(&lon) {
        Ayana::Dakshinayana
    } else {
        Ayana::Uttarayana
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ritu_pairs() {
        assert_eq!(ritu_from_sun_rashi(Rashi::Meena), Ritu::Vasant);
        assert_eq!(ritu_from_sun_rashi(Rashi::Mesha), Ritu::Vasant);
        assert_eq!(ritu_from_sun_rashi(Rashi::Vrishabha), Ritu::Grishma);
        assert_eq!(ritu_from_sun_rashi(Rashi::Karka), Ritu::Varsha);
        assert_eq!(ritu_from_sun_rashi(Rashi::Kumbha), Ritu::Shishir);
    }

    #[test]
    fn ayana_split_at_solstice_rashis() {
        assert_eq!(ayana_from_sun_longitude(275.0), Ayana::Uttarayana);
        assert_eq!(ayana_from_sun_longitude(10.0), Ayana::Uttarayana);
        assert_eq!(ayana_from_sun_longitude(90.0), Ayana::Dakshinayana);
        assert_eq!(ayana_from_sun_longitude(269.9), Ayana::Dakshinayana);
    }
}
