//! The primary date and duration components provided by `chronal`.

pub mod shift;

mod date;
mod datetime;
mod duration;
mod names;
mod timestamp;

#[doc(inline)]
pub use date::{Calendar, CalendarDate, CompareTarget, PartialDate};
#[doc(inline)]
pub use datetime::{DateTime, Time};
#[doc(inline)]
pub use duration::Duration;
#[doc(inline)]
pub use names::{Month, Weekday};
#[doc(inline)]
pub use shift::{ShiftOffset, ShiftPlan, Shiftable};
#[doc(inline)]
pub use timestamp::Timestamp;
