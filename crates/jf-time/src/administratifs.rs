//! Administrative day arithmetic.
//!
//! Implements the four legal day-counting regimes on top of the holiday
//! calendar:
//!
//! * **jour calendaire** — every day counts;
//! * **jour ouvrable** — Sundays and jours fériés are skipped (Saturdays
//!   count);
//! * **jour ouvré** — Saturdays, Sundays, and jours fériés are skipped;
//! * **jour franc** — a calendar-day offset followed by one full ouvré day,
//!   the deadline expiring at 23:59:59.
//!
//! All operations take the date by value and return the stepped date; inputs
//! are never mutated.

use crate::calendrier::Calendrier;
use crate::date::Date;
use crate::weekday::Weekday;
use crate::zone::Zone;
use jf_core::ensure;
use jf_core::errors::Result;

/// Weekdays rejected under the "jour ouvrable" regime.
const REJET_OUVRABLE: [Weekday; 1] = [Weekday::Sunday];

/// Weekdays rejected under the "jour ouvré" regime.
const REJET_OUVRE: [Weekday; 2] = [Weekday::Saturday, Weekday::Sunday];

/// Step `date` one calendar day at a time in the sign of `days`, counting
/// only accepted days, until `abs(days)` accepted steps have been taken.
///
/// A stepped day is accepted iff its weekday is not in `reject_days` and
/// (`!reject_feries` or it is not a férié in `zone`).  Fails only when a
/// step leaves the representable date range.
fn walk_jours(
    mut date: Date,
    days: i32,
    reject_days: &[Weekday],
    reject_feries: bool,
    zone: Zone,
) -> Result<Date> {
    let calendrier = Calendrier::new(zone);
    let step: i32 = if days >= 0 { 1 } else { -1 };
    let mut accepted = 0;
    while accepted < days.abs() {
        date = date.add_days(step)?;
        if !reject_days.contains(&date.weekday())
            && (!reject_feries || !calendrier.est_ferie(date))
        {
            accepted += 1;
        }
    }
    Ok(date)
}

/// Add `days` calendar days to `date` (every day counts).
pub fn add_jour_calendaire(date: Date, days: i32) -> Result<Date> {
    date.add_days(days)
}

/// Subtract `days` calendar days from `date`.
pub fn sub_jour_calendaire(date: Date, days: i32) -> Result<Date> {
    date.add_days(-days.abs())
}

/// Add `days` jours ouvrables to `date`: Sundays and fériés in `zone` do not
/// count.
pub fn add_jour_ouvrable(date: Date, days: i32, zone: Zone) -> Result<Date> {
    walk_jours(date, days, &REJET_OUVRABLE, true, zone)
}

/// Subtract `days` jours ouvrables from `date`.
pub fn sub_jour_ouvrable(date: Date, days: i32, zone: Zone) -> Result<Date> {
    walk_jours(date, -days.abs(), &REJET_OUVRABLE, true, zone)
}

/// Add `days` jours ouvrés to `date`: Saturdays, Sundays, and fériés in
/// `zone` do not count.
pub fn add_jour_ouvre(date: Date, days: i32, zone: Zone) -> Result<Date> {
    walk_jours(date, days, &REJET_OUVRE, true, zone)
}

/// Subtract `days` jours ouvrés from `date`.
pub fn sub_jour_ouvre(date: Date, days: i32, zone: Zone) -> Result<Date> {
    walk_jours(date, -days.abs(), &REJET_OUVRE, true, zone)
}

/// Add `days` jours francs to `date`.
///
/// Two phases: `days` unconditional calendar days, then exactly one further
/// accepted ouvré day (skipping Saturdays, Sundays, and fériés in `zone`).
/// The returned deadline is at 23:59:59.  With `days = 0` the second phase
/// still advances to the next accepted day.
///
/// Jours francs are only defined going forward: a negative `days` fails with
/// an invalid-argument error, and there is no `sub` variant.
pub fn add_jour_franc(date: Date, days: i32, zone: Zone) -> Result<Date> {
    ensure!(
        days >= 0,
        "jours francs are only defined forward, got {days}"
    );
    let reached = date.add_days(days)?;
    let deadline = walk_jours(reached, 1, &REJET_OUVRE, true, zone)?;
    Ok(deadline.end_of_day())
}
