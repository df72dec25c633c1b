//! Easter Sunday computation.

use crate::date::Date;

/// Return Easter Sunday ("Pâques") for `year`.
///
/// Uses the Anonymous Gregorian computus (Meeus/Jones/Butcher).  Returns
/// `None` for `year < 1886`, the documented lower bound of the algorithm's
/// use in this library: Easter-relative holiday rules are simply absent
/// below that year, not an error.  Years past [`Date::MAX_YEAR`] also return
/// `None`.
pub fn paques(year: u16) -> Option<Date> {
    if year < 1886 {
        return None;
    }
    let y = i32::from(year);
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8).ok()
}
