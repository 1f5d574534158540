//! Three-field records.
//!
//! A triad is any value made of exactly three ordered integers. [`Date`] and
//! [`Time`] are the two kinds; both can be bumped with
//! [`Triad::increase`] and rendered with [`Triad::display`]. Only dates are
//! ordered.
//!
//! `increase` adds one to every field and does no calendar or clock
//! normalisation: `Date::new(31, 12, 2001)` becomes `32/13/2002`.

use std::cmp::Ordering;
use std::fmt;

pub trait Triad {
    /// The three fields in declaration order.
    fn fields(&self) -> (i32, i32, i32);

    /// Adds one to each field.
    fn increase(&mut self);

    fn display(&self) -> String;
}

#[derive(Debug, Clone, Copy, Eq)]
pub struct Date {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl Date {
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Three-way comparison on (year, month, day).
    pub fn compare(&self, other: &Date) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }

    pub fn describe_comparison(&self, other: &Date) -> &'static str {
        if self == other {
            "Dates are equal"
        } else {
            "Dates are not equal"
        }
    }
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Triad for Date {
    fn fields(&self) -> (i32, i32, i32) {
        (self.day, self.month, self.year)
    }

    fn increase(&mut self) {
        self.day += 1;
        self.month += 1;
        self.year += 1;
    }

    fn display(&self) -> String {
        format!("Date: {}/{}/{}", self.day, self.month, self.year)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Triad::display(self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl Time {
    pub fn new(hour: i32, minute: i32, second: i32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

impl Triad for Time {
    fn fields(&self) -> (i32, i32, i32) {
        (self.hour, self.minute, self.second)
    }

    fn increase(&mut self) {
        self.hour += 1;
        self.minute += 1;
        self.second += 1;
    }

    fn display(&self) -> String {
        format!("Time: {}:{}:{}", self.hour, self.minute, self.second)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Triad::display(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_displays_day_month_year() {
        assert_eq!(Date::new(17, 3, 2001).display(), "Date: 17/3/2001");
    }

    #[test]
    fn date_increase_bumps_every_field() {
        let mut date = Date::new(17, 3, 2001);
        date.increase();
        assert_eq!(date.fields(), (18, 4, 2002));
        assert_eq!(date.to_string(), "Date: 18/4/2002");
    }

    #[test]
    fn increase_does_not_normalise() {
        let mut date = Date::new(31, 12, 2001);
        date.increase();
        assert_eq!(date.fields(), (32, 13, 2002));
    }

    #[test]
    fn year_outranks_month_and_day() {
        let earlier = Date::new(31, 12, 2000);
        let later = Date::new(1, 1, 2001);
        assert_eq!(earlier.compare(&later), Ordering::Less);
        assert!(later > earlier);
        assert!(earlier <= later);
        assert!(earlier != later);
    }

    #[test]
    fn month_outranks_day() {
        assert!(Date::new(1, 4, 2001) > Date::new(30, 3, 2001));
    }

    #[test]
    fn equality_follows_ordering() {
        let a = Date::new(17, 3, 2001);
        let b = Date::new(17, 3, 2001);
        assert_eq!(a.compare(&b), Ordering::Equal);
        assert_eq!(a, b);
        assert!(a >= b && a <= b);
        assert_eq!(a.describe_comparison(&b), "Dates are equal");
    }

    #[test]
    fn increased_date_no_longer_equals_original() {
        let original = Date::new(17, 3, 2001);
        let mut bumped = original;
        bumped.increase();
        assert!(bumped > original);
        assert_eq!(bumped.describe_comparison(&original), "Dates are not equal");
    }

    #[test]
    fn time_displays_and_increases() {
        let mut time = Time::new(12, 30, 45);
        assert_eq!(time.display(), "Time: 12:30:45");
        time.increase();
        assert_eq!(time.fields(), (13, 31, 46));
        assert_eq!(time.to_string(), "Time: 13:31:46");
    }

    #[test]
    fn triads_work_behind_the_trait() {
        let mut triads: Vec<Box<dyn Triad>> =
            vec![Box::new(Date::new(1, 2, 3)), Box::new(Time::new(4, 5, 6))];
        for t in triads.iter_mut() {
            t.increase();
        }
        let shown: Vec<String> = triads.iter().map(|t| t.display()).collect();
        assert_eq!(shown, vec!["Date: 2/3/4", "Time: 5:6:7"]);
    }
}
