// src/test_util.rs

use crate::{Ohlc, Price};
use chrono::{Days, NaiveDate};

/// Asserts that two `f64` values are approximately equal using a
/// relative epsilon of `4 * f64::EPSILON`.
macro_rules! assert_approx {
    ($actual:expr, $expected:expr) => {{
        let (a, e) = ($actual, $expected);
        assert!(
            (a - e).abs() < e.abs() * 4.0 * f64::EPSILON,
            "assert_approx failed: actual={a}, expected={e}, diff={}",
            (a - e).abs(),
        );
    }};
}

pub(crate) use assert_approx;

pub struct Bar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adj_close: f64,
    pub date: NaiveDate,
}

impl Bar {
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
            adj_close: close,
            date: epoch(),
        }
    }

    pub fn adj(mut self, adj_close: f64) -> Self {
        self.adj_close = adj_close;
        self
    }

    /// Places the bar `day` days after the test epoch.
    pub fn on(mut self, day: u64) -> Self {
        self.date = epoch() + Days::new(day);
        self
    }
}

/// Convenience: bar with every price equal to `price`, `day` days after
/// the test epoch.
pub fn flat_bar(price: f64, day: u64) -> Bar {
    Bar::new(price, price, price, price).on(day)
}

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

impl Ohlc for Bar {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn open(&self) -> Price {
        self.open
    }
    fn high(&self) -> Price {
        self.high
    }
    fn low(&self) -> Price {
        self.low
    }
    fn close(&self) -> Price {
        self.close
    }
    fn adj_close(&self) -> Price {
        self.adj_close
    }
}
