//! Per-zone holiday calendar.
//!
//! [`for_year`] evaluates the whole rule table for a (year, zone) pair and
//! returns the applicable [`JoursFeries`] set.  [`Calendrier`] wraps the same
//! evaluation behind a per-year memoization cache, which the day-by-day scans
//! ([`prochain_ferie`], the administrative walkers) rely on to avoid
//! recomputing a year's set once per candidate day.  Cached and uncached
//! evaluation return identical values.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use crate::date::Date;
use crate::feries::REGLES;
use crate::zone::Zone;
use jf_core::errors::{Error, Result};

/// The set of jours fériés of one (year, zone) pair.
///
/// An ordered name → date mapping; all dates are at midnight.  A pure value,
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoursFeries {
    data: BTreeMap<&'static str, Date>,
}

impl JoursFeries {
    /// Return the date of the holiday named `nom`, if present.
    pub fn get(&self, nom: &str) -> Option<Date> {
        self.data.get(nom).copied()
    }

    /// Return `true` if `date` falls on one of the set's holidays,
    /// comparing by calendar value only.
    pub fn contains_date(&self, date: Date) -> bool {
        self.data.values().any(|d| d.same_day(date))
    }

    /// Return the name of the holiday falling on `date`, if any.
    pub fn name_of(&self, date: Date) -> Option<&'static str> {
        self.data
            .iter()
            .find(|(_, d)| d.same_day(date))
            .map(|(nom, _)| *nom)
    }

    /// Iterate over (name, date) pairs, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Date)> + '_ {
        self.data.iter().map(|(nom, d)| (*nom, *d))
    }

    /// Iterate over the holiday dates.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.data.values().copied()
    }

    /// Number of holidays in the set.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl FromIterator<(&'static str, Date)> for JoursFeries {
    fn from_iter<I: IntoIterator<Item = (&'static str, Date)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

/// Evaluate the rule table for a year known to be representable.
fn evalue(year: u16, zone: Zone) -> JoursFeries {
    REGLES
        .iter()
        .filter_map(|regle| regle.resoudre(year, zone).map(|d| (regle.nom, d)))
        .collect()
}

/// Return the jours fériés of `year` in `zone`.
///
/// Deterministic and side-effect-free.  Fails with [`Error::Date`] only when
/// `year` is outside the representable range ([`Date::MIN_YEAR`] ..=
/// [`Date::MAX_YEAR`]); rules that do not apply to the pair are simply
/// omitted from the set.
pub fn for_year(year: u16, zone: Zone) -> Result<JoursFeries> {
    if !(Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year) {
        return Err(Error::Date(format!(
            "year {year} out of range [{}, {}]",
            Date::MIN_YEAR,
            Date::MAX_YEAR
        )));
    }
    Ok(evalue(year, zone))
}

/// Return `true` if `date` is a jour férié in `zone`.
///
/// The time-of-day of `date` is ignored.
pub fn est_ferie(date: Date, zone: Zone) -> bool {
    evalue(date.year(), zone).contains_date(date)
}

/// Return the first jour férié at or after `date` in `zone`, as a
/// (name, date) pair with the date at midnight.
///
/// Scans forward one day at a time; total in practice because Christmas is
/// unconditional from 1802 on.  Fails only if the scan would leave the
/// representable date range (i.e. starting after the last holiday of
/// [`Date::MAX_YEAR`]).
pub fn prochain_ferie(date: Date, zone: Zone) -> Result<(&'static str, Date)> {
    Calendrier::new(zone).prochain_ferie(date)
}

/// A holiday calendar for one zone, memoizing per-year holiday sets.
///
/// The cache is a performance device only: results are identical to the free
/// functions.  It is guarded by a `Mutex`, so a `Calendrier` can be shared
/// across threads.
#[derive(Debug, Default)]
pub struct Calendrier {
    zone: Zone,
    cache: Mutex<HashMap<u16, Arc<JoursFeries>>>,
}

impl Calendrier {
    /// Create a calendar for `zone` with an empty cache.
    pub fn new(zone: Zone) -> Self {
        Self {
            zone,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The zone this calendar serves.
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Cached rule-table evaluation for a representable year.
    fn feries(&self, year: u16) -> Arc<JoursFeries> {
        let mut cache = self.cache.lock().expect("calendar cache mutex poisoned");
        Arc::clone(
            cache
                .entry(year)
                .or_insert_with(|| Arc::new(evalue(year, self.zone))),
        )
    }

    /// Return the jours fériés of `year`; see [`for_year`].
    pub fn for_year(&self, year: u16) -> Result<Arc<JoursFeries>> {
        if !(Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Date::MIN_YEAR,
                Date::MAX_YEAR
            )));
        }
        Ok(self.feries(year))
    }

    /// Return `true` if `date` is a jour férié; see [`est_ferie`].
    pub fn est_ferie(&self, date: Date) -> bool {
        self.feries(date.year()).contains_date(date)
    }

    /// Return the first jour férié at or after `date`; see [`prochain_ferie`].
    pub fn prochain_ferie(&self, date: Date) -> Result<(&'static str, Date)> {
        let mut d = date.midnight();
        loop {
            if let Some(nom) = self.feries(d.year()).name_of(d) {
                return Ok((nom, d));
            }
            d = d.add_days(1)?;
        }
    }
}
