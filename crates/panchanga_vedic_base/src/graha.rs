//! The nine grahas and their natural (naisargika) friendships.
//!
//! Friendship table follows BPHS Ch. 3. The relation is asymmetric:
//! Mercury counts the Moon an enemy while the Moon counts Mercury a friend.

use serde::Serialize;

/// The nine grahas in traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The seven classical grahas (no nodes).
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }
}

/// Natural relationship of one graha toward another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Maitri {
    Friend,
    Neutral,
    Enemy,
}

/// How `graha` regards `other`. A graha is its own friend; nodes are neutral.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> Maitri {
    use Graha::*;
    use Maitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        (Surya, Surya) | (Chandra, Chandra) | (Mangal, Mangal) | (Buddh, Buddh) => Friend,
        (Guru, Guru) | (Shukra, Shukra) | (Shani, Shani) => Friend,

        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,
        (Surya, Buddh) => Neutral,

        (Chandra, Surya | Buddh) => Friend,
        (Chandra, _) => Neutral,

        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,
        (Mangal, _) => Neutral,

        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,
        (Buddh, _) => Neutral,

        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,
        (Guru, _) => Neutral,

        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,
        (Shukra, _) => Neutral,

        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,
        (Shani, _) => Neutral,
    }
}
