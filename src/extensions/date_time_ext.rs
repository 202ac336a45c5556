use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// The calendar day of a point in time, as the user sees it in its own time zone.
pub trait ToCalendarDate {
    fn to_calendar_date(&self) -> NaiveDate;
}

impl<Tz: TimeZone> ToCalendarDate for DateTime<Tz> {
    fn to_calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl ToCalendarDate for NaiveDateTime {
    fn to_calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl ToCalendarDate for NaiveDate {
    fn to_calendar_date(&self) -> NaiveDate {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn ignores_the_time_of_day() {
        let morning = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 1).unwrap();
        let evening = Utc.with_ymd_and_hms(2025, 6, 1, 23, 59, 59).unwrap();

        assert_eq!(morning.to_calendar_date(), evening.to_calendar_date());
        assert_eq!(morning.to_calendar_date(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn uses_the_local_day_of_the_offset() {
        let new_york = FixedOffset::west_opt(4 * 3600).unwrap();
        let late_evening = new_york.with_ymd_and_hms(2025, 5, 31, 22, 0, 0).unwrap();

        assert_eq!(late_evening.to_calendar_date(), NaiveDate::from_ymd_opt(2025, 5, 31).unwrap());
        assert_eq!(
            late_evening.with_timezone(&Utc).to_calendar_date(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
    }

    #[test]
    fn naive_date_times_drop_their_time() {
        let picked = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap().and_hms_opt(15, 30, 0).unwrap();

        assert_eq!(picked.to_calendar_date(), NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
    }
}
