mod day_count;

pub use day_count::DayCount;
