//! # jf-time
//!
//! Date, weekday, zone, holiday-rule, and administrative day-walking types
//! for French legal/administrative date computations.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Administrative day arithmetic (jours calendaires, ouvrables, ouvrés, francs).
pub mod administratifs;

/// Per-zone holiday calendar with an optional per-year cache.
pub mod calendrier;

/// `Date` type.
pub mod date;

/// Easter Sunday computation.
pub mod easter;

/// Holiday rules ("jours fériés") and per-holiday query functions.
pub mod feries;

/// `Weekday` — day of the week.
pub mod weekday;

/// `Zone` — French administrative/geographic zone.
pub mod zone;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use administratifs::{
    add_jour_calendaire, add_jour_franc, add_jour_ouvrable, add_jour_ouvre,
    sub_jour_calendaire, sub_jour_ouvrable, sub_jour_ouvre,
};
pub use calendrier::{est_ferie, for_year, prochain_ferie, Calendrier, JoursFeries};
pub use date::Date;
pub use easter::paques;
pub use weekday::Weekday;
pub use zone::Zone;
