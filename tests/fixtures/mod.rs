#![allow(dead_code)]

use chrono::NaiveDate;
use serde::{Deserialize, de::DeserializeOwned};
use volcone::{Ohlc, Price};

/// Daily OHLC + adjusted close bar parsed from the fixture CSV.
///
/// The series carries a 2-for-1 split partway through: quoted prices
/// halve while `adj_close` stays continuous, so the adjustment factor is
/// exercised on real data.
#[derive(Debug, Clone, Deserialize)]
pub struct RefBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adj_close: f64,
}

impl Ohlc for RefBar {
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

/// One row of an expected cone table: a statistic across the default
/// windows.
#[derive(Debug, Deserialize)]
pub struct RefConeRow {
    pub stat: String,
    pub w30: f64,
    pub w60: f64,
    pub w90: f64,
    pub w120: f64,
}

impl RefConeRow {
    /// Expected values in default window order.
    pub fn cells(&self) -> [f64; 4] {
        [self.w30, self.w60, self.w90, self.w120]
    }
}

const OHLC_PATH: &str = "tests/fixtures/data/daily-ohlc.csv";

/// Load the daily OHLC fixture series.
pub fn load_reference_bars() -> Vec<RefBar> {
    load_records(OHLC_PATH, "invalid OHLC record")
}

/// Load an expected cone table (five statistic rows).
pub fn load_cone_ref(path: &str) -> Vec<RefConeRow> {
    load_records(path, "invalid cone reference record")
}

/// Assert two f64 values are within tolerance.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.12}, got {actual:.12}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
