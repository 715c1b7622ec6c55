pub mod chart;
pub mod error;
pub mod health;
pub mod horoscope;
