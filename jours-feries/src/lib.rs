//! # jours-feries
//!
//! French public holidays ("jours fériés") per year and zone, and date
//! arithmetic over the legal day-counting regimes (jours calendaires,
//! ouvrables, ouvrés, francs).
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `jf-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! jours-feries = "0.1"
//! ```
//!
//! ```rust
//! use jours_feries::{est_ferie, for_year, Date, Zone};
//!
//! let noel = Date::from_ymd(2020, 12, 25)?;
//! assert!(est_ferie(noel, Zone::Metropole));
//! assert_eq!(for_year(2020, Zone::Metropole)?.len(), 11);
//! # Ok::<(), jours_feries::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types.
pub use jf_core as core;

/// Date, zone, holiday, and administrative-day types.
pub use jf_time as time;

pub use jf_core::errors::{Error, Result};
pub use jf_time::{
    add_jour_calendaire, add_jour_franc, add_jour_ouvrable, add_jour_ouvre, est_ferie, for_year,
    paques, prochain_ferie, sub_jour_calendaire, sub_jour_ouvrable, sub_jour_ouvre, Calendrier,
    Date, JoursFeries, Weekday, Zone,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_parse_failure_surfaces_invalid_zone() {
        // Unknown zone names are rejected at the parse boundary; the typed
        // API cannot be called with an invalid zone.
        let err = "foo".parse::<Zone>().unwrap_err();
        assert!(matches!(err, Error::InvalidZone { .. }));
        let zone: Zone = "Alsace-Moselle".parse().unwrap();
        assert!(for_year(2018, zone).is_ok());
    }

    #[test]
    fn end_to_end_deadline() {
        let depot = Date::from_ymd(2020, 12, 9).unwrap();
        let limite = add_jour_franc(depot, 10, Zone::Metropole).unwrap();
        assert_eq!(
            limite,
            Date::from_ymd_hms(2020, 12, 21, 23, 59, 59).unwrap()
        );
    }
}
