//! `Zone` — French administrative/geographic zone enum.

use jf_core::errors::{Error, Result};

/// A French administrative/geographic zone with its own holiday variant.
///
/// This is a closed enumeration: exactly the 13 zones recognized by the
/// French administration. Parsing any other name fails with
/// [`Error::InvalidZone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Zone {
    /// Métropole (default zone).
    #[default]
    Metropole,
    /// Alsace-Moselle.
    AlsaceMoselle,
    /// Guadeloupe.
    Guadeloupe,
    /// Guyane.
    Guyane,
    /// Martinique.
    Martinique,
    /// Mayotte.
    Mayotte,
    /// Nouvelle-Calédonie.
    NouvelleCaledonie,
    /// La Réunion.
    LaReunion,
    /// Polynésie Française.
    PolynesieFrancaise,
    /// Saint-Barthélémy.
    SaintBarthelemy,
    /// Saint-Martin.
    SaintMartin,
    /// Wallis-et-Futuna.
    WallisEtFutuna,
    /// Saint-Pierre-et-Miquelon.
    SaintPierreEtMiquelon,
}

impl Zone {
    /// All 13 zones, in the order the French administration lists them.
    pub const ALL: [Zone; 13] = [
        Zone::Metropole,
        Zone::AlsaceMoselle,
        Zone::Guadeloupe,
        Zone::Guyane,
        Zone::Martinique,
        Zone::Mayotte,
        Zone::NouvelleCaledonie,
        Zone::LaReunion,
        Zone::PolynesieFrancaise,
        Zone::SaintBarthelemy,
        Zone::SaintMartin,
        Zone::WallisEtFutuna,
        Zone::SaintPierreEtMiquelon,
    ];

    /// The official French name of the zone.
    pub fn name(&self) -> &'static str {
        match self {
            Zone::Metropole => "Métropole",
            Zone::AlsaceMoselle => "Alsace-Moselle",
            Zone::Guadeloupe => "Guadeloupe",
            Zone::Guyane => "Guyane",
            Zone::Martinique => "Martinique",
            Zone::Mayotte => "Mayotte",
            Zone::NouvelleCaledonie => "Nouvelle-Calédonie",
            Zone::LaReunion => "La Réunion",
            Zone::PolynesieFrancaise => "Polynésie Française",
            Zone::SaintBarthelemy => "Saint-Barthélémy",
            Zone::SaintMartin => "Saint-Martin",
            Zone::WallisEtFutuna => "Wallis-et-Futuna",
            Zone::SaintPierreEtMiquelon => "Saint-Pierre-et-Miquelon",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Zone {
    type Err = Error;

    /// Parse an official zone name; this is the validation boundary where an
    /// unknown zone surfaces as [`Error::InvalidZone`].
    fn from_str(s: &str) -> Result<Self> {
        Zone::ALL
            .into_iter()
            .find(|z| z.name() == s)
            .ok_or_else(|| Error::InvalidZone {
                given: s.to_owned(),
                expected: Zone::ALL.map(|z| z.name()).join(", "),
            })
    }
}
