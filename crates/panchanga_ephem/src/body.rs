//! Bodies the gateway can place on the ecliptic.

/// Geocentric bodies of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    /// Mean ascending lunar node (Rahu).
    MeanNode,
}

impl Body {
    pub const ALL: [Body; 8] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::MeanNode,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::MeanNode => "Mean Node",
        }
    }

    /// Planets whose position comes from the Keplerian element table.
    pub const fn is_planet(self) -> bool {
        matches!(
            self,
            Self::Mercury | Self::Venus | Self::Mars | Self::Jupiter | Self::Saturn
        )
    }
}
