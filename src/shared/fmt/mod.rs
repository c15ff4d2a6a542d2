//! Display formatting: currency amounts, percentages, dates and times.

pub mod num;
pub mod time;

pub use num::{
    format_number, format_percent_change, format_price, format_price_2, format_price_4,
    format_usd,
};
pub use time::{
    format_date, format_date_in, format_date_time, format_date_time_in, format_time,
    format_time_in,
};
