//! Holiday rules ("jours fériés") and per-holiday query functions.
//!
//! Each holiday is one [`Regle`] record in the [`REGLES`] table: a fixed
//! French label plus a resolver gated by a year-validity window and/or a
//! zone-applicability predicate.  A rule that does not apply to a given
//! (year, zone) pair resolves to `None` — that day is simply not a holiday,
//! never an error.
//!
//! The validity windows track legal history: e.g. May 8 was a holiday from
//! 1953 to 1959, abolished, and reinstated in 1982.

use crate::date::Date;
use crate::easter::paques;
use crate::zone::Zone;

/// A single holiday rule: a label and a pure resolver over (year, zone).
#[derive(Clone, Copy)]
pub struct Regle {
    /// The fixed French name of the holiday.
    pub nom: &'static str,
    resolve: fn(u16, Zone) -> Option<Date>,
}

impl Regle {
    /// Evaluate the rule for a (year, zone) pair.
    pub fn resoudre(&self, year: u16, zone: Zone) -> Option<Date> {
        (self.resolve)(year, zone)
    }
}

impl std::fmt::Debug for Regle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Regle").field("nom", &self.nom).finish()
    }
}

/// The full rule table, one entry per holiday.
pub const REGLES: [Regle; 14] = [
    Regle { nom: "Jour de l’an", resolve: |y, _| jour_de_l_an(y) },
    Regle { nom: "Lundi de Pâques", resolve: |y, _| lundi_de_paques(y) },
    Regle { nom: "Fête du Travail", resolve: |y, _| fete_du_travail(y) },
    Regle { nom: "Victoire de 1945", resolve: |y, _| victoire_1945(y) },
    Regle { nom: "Ascension", resolve: |y, _| ascension(y) },
    Regle { nom: "Lundi de Pentecôte", resolve: |y, _| lundi_de_pentecote(y) },
    Regle { nom: "Fête Nationale", resolve: |y, _| fete_nationale(y) },
    Regle { nom: "Assomption", resolve: |y, _| assomption(y) },
    Regle { nom: "Toussaint", resolve: |y, _| toussaint(y) },
    Regle { nom: "Armistice", resolve: |y, _| armistice(y) },
    Regle { nom: "Jour de Noël", resolve: |y, _| noel(y) },
    Regle { nom: "Vendredi saint", resolve: vendredi_saint },
    Regle { nom: "2ème jour de Noël", resolve: deuxieme_jour_de_noel },
    Regle { nom: "Abolition de l'esclavage", resolve: abolition_esclavage },
];

/// A fixed month/day in `year`, or `None` if outside the representable range.
fn fixe(year: u16, month: u8, day: u8) -> Option<Date> {
    Date::from_ymd(year, month, day).ok()
}

/// Jour de l'an (Jan 1), holiday since 1811.
pub fn jour_de_l_an(year: u16) -> Option<Date> {
    if year > 1810 {
        fixe(year, 1, 1)
    } else {
        None
    }
}

/// Lundi de Pâques (Easter + 1 day).
pub fn lundi_de_paques(year: u16) -> Option<Date> {
    paques(year)?.add_days(1).ok()
}

/// Fête du Travail (May 1), holiday since 1920.
pub fn fete_du_travail(year: u16) -> Option<Date> {
    if year > 1919 {
        fixe(year, 5, 1)
    } else {
        None
    }
}

/// Victoire de 1945 (May 8), holiday 1953–1959 and again since 1982.
pub fn victoire_1945(year: u16) -> Option<Date> {
    if (1953..=1959).contains(&year) || year > 1981 {
        fixe(year, 5, 8)
    } else {
        None
    }
}

/// Ascension (Easter + 39 days), holiday since 1802.
pub fn ascension(year: u16) -> Option<Date> {
    if year >= 1802 {
        paques(year)?.add_days(39).ok()
    } else {
        None
    }
}

/// Lundi de Pentecôte (Easter + 50 days), holiday since 1886.
pub fn lundi_de_pentecote(year: u16) -> Option<Date> {
    if year >= 1886 {
        paques(year)?.add_days(50).ok()
    } else {
        None
    }
}

/// Fête Nationale (Jul 14), holiday since 1880.
pub fn fete_nationale(year: u16) -> Option<Date> {
    if year >= 1880 {
        fixe(year, 7, 14)
    } else {
        None
    }
}

/// Assomption (Aug 15), holiday since 1802.
pub fn assomption(year: u16) -> Option<Date> {
    if year >= 1802 {
        fixe(year, 8, 15)
    } else {
        None
    }
}

/// Toussaint (Nov 1), holiday since 1802.
pub fn toussaint(year: u16) -> Option<Date> {
    if year >= 1802 {
        fixe(year, 11, 1)
    } else {
        None
    }
}

/// Armistice (Nov 11), holiday since 1918.
pub fn armistice(year: u16) -> Option<Date> {
    if year >= 1918 {
        fixe(year, 11, 11)
    } else {
        None
    }
}

/// Jour de Noël (Dec 25), holiday since 1802.
pub fn noel(year: u16) -> Option<Date> {
    if year >= 1802 {
        fixe(year, 12, 25)
    } else {
        None
    }
}

/// Vendredi saint (Easter − 2 days), Alsace-Moselle only.
pub fn vendredi_saint(year: u16, zone: Zone) -> Option<Date> {
    if zone == Zone::AlsaceMoselle {
        paques(year)?.add_days(-2).ok()
    } else {
        None
    }
}

/// 2ème jour de Noël (Dec 26), Alsace-Moselle only.
pub fn deuxieme_jour_de_noel(year: u16, zone: Zone) -> Option<Date> {
    if zone == Zone::AlsaceMoselle {
        fixe(year, 12, 26)
    } else {
        None
    }
}

/// Abolition de l'esclavage, on a zone-specific date.
///
/// Saint-Martin commemorates on May 27 before 2018 and May 28 from 2018 on;
/// La Réunion only since 1981.  Zones without an abolition holiday return
/// `None`.
pub fn abolition_esclavage(year: u16, zone: Zone) -> Option<Date> {
    match zone {
        Zone::Mayotte => fixe(year, 4, 27),
        Zone::Martinique => fixe(year, 5, 22),
        Zone::Guadeloupe => fixe(year, 5, 27),
        Zone::SaintMartin => fixe(year, 5, if year >= 2018 { 28 } else { 27 }),
        Zone::Guyane => fixe(year, 6, 10),
        Zone::SaintBarthelemy => fixe(year, 10, 9),
        Zone::LaReunion => {
            if year >= 1981 {
                fixe(year, 12, 20)
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_relative_rules_2023() {
        // Easter Sunday 2023: April 9
        assert_eq!(lundi_de_paques(2023), Some(date(2023, 4, 10)));
        assert_eq!(ascension(2023), Some(date(2023, 5, 18)));
        assert_eq!(lundi_de_pentecote(2023), Some(date(2023, 5, 29)));
        assert_eq!(
            vendredi_saint(2023, Zone::AlsaceMoselle),
            Some(date(2023, 4, 7))
        );
        assert_eq!(vendredi_saint(2023, Zone::Metropole), None);
    }

    #[test]
    fn validity_windows() {
        assert_eq!(jour_de_l_an(1810), None);
        assert_eq!(jour_de_l_an(1811), Some(date(1811, 1, 1)));
        assert_eq!(fete_du_travail(1919), None);
        assert_eq!(fete_du_travail(1920), Some(date(1920, 5, 1)));
        assert_eq!(fete_nationale(1879), None);
        assert_eq!(fete_nationale(1880), Some(date(1880, 7, 14)));
        assert_eq!(armistice(1917), None);
        assert_eq!(armistice(1918), Some(date(1918, 11, 11)));
        assert_eq!(noel(1801), None);
        assert_eq!(noel(1802), Some(date(1802, 12, 25)));
    }

    #[test]
    fn victoire_1945_windows() {
        assert_eq!(victoire_1945(1952), None);
        assert_eq!(victoire_1945(1953), Some(date(1953, 5, 8)));
        assert_eq!(victoire_1945(1959), Some(date(1959, 5, 8)));
        assert_eq!(victoire_1945(1960), None);
        assert_eq!(victoire_1945(1981), None);
        assert_eq!(victoire_1945(1982), Some(date(1982, 5, 8)));
    }

    #[test]
    fn easter_relative_rules_absent_before_1886() {
        // Rules valid from 1802 but Easter-relative are silently absent
        // while the computus is undefined.
        assert_eq!(ascension(1885), None);
        assert_eq!(lundi_de_paques(1885), None);
        assert_eq!(lundi_de_pentecote(1885), None);
        // Fixed-date rules of the same era are unaffected.
        assert_eq!(assomption(1885), Some(date(1885, 8, 15)));
    }

    #[test]
    fn abolition_2020_per_zone() {
        let expected = [
            (Zone::Mayotte, date(2020, 4, 27)),
            (Zone::Martinique, date(2020, 5, 22)),
            (Zone::Guadeloupe, date(2020, 5, 27)),
            (Zone::SaintMartin, date(2020, 5, 28)),
            (Zone::Guyane, date(2020, 6, 10)),
            (Zone::SaintBarthelemy, date(2020, 10, 9)),
            (Zone::LaReunion, date(2020, 12, 20)),
        ];
        for (zone, d) in expected {
            assert_eq!(abolition_esclavage(2020, zone), Some(d), "{zone}");
        }
        for zone in [
            Zone::Metropole,
            Zone::AlsaceMoselle,
            Zone::NouvelleCaledonie,
            Zone::PolynesieFrancaise,
            Zone::WallisEtFutuna,
            Zone::SaintPierreEtMiquelon,
        ] {
            assert_eq!(abolition_esclavage(2020, zone), None, "{zone}");
        }
    }

    #[test]
    fn abolition_saint_martin_2018_switch() {
        assert_eq!(
            abolition_esclavage(2017, Zone::SaintMartin),
            Some(date(2017, 5, 27))
        );
        assert_eq!(
            abolition_esclavage(2018, Zone::SaintMartin),
            Some(date(2018, 5, 28))
        );
    }

    #[test]
    fn abolition_la_reunion_since_1981() {
        assert_eq!(abolition_esclavage(1980, Zone::LaReunion), None);
        assert_eq!(
            abolition_esclavage(1981, Zone::LaReunion),
            Some(date(1981, 12, 20))
        );
    }

    #[test]
    fn boxing_day_alsace_moselle_only() {
        assert_eq!(
            deuxieme_jour_de_noel(2019, Zone::AlsaceMoselle),
            Some(date(2019, 12, 26))
        );
        assert_eq!(deuxieme_jour_de_noel(2019, Zone::Metropole), None);
    }

    #[test]
    fn table_covers_every_rule_once() {
        let mut noms: Vec<_> = REGLES.iter().map(|r| r.nom).collect();
        noms.sort_unstable();
        noms.dedup();
        assert_eq!(noms.len(), REGLES.len());
    }
}
