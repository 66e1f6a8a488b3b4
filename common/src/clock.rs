use chrono::{Datelike, Local};

pub trait Clock {
    fn year(&self) -> i32;
}

// clock handed to components; Fixed exists so renders can be pinned to a year
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SiteClock {
    #[default]
    System,
    Fixed(i32),
}

impl Clock for SiteClock {
    fn year(&self) -> i32 {
        match self {
            SiteClock::System => Local::now().year(),
            SiteClock::Fixed(year) => *year,
        }
    }
}

// callers must not cache this; the year has to be read on every render
pub fn copyright_line(clock: &impl Clock, brand: &str, motto: &str) -> String {
    format!("© {} {brand} · {motto}", clock.year())
}
