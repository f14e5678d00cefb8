//! Volatility cones for daily OHLC data.
//!
//! A volatility cone summarizes how annualized historical volatility has
//! ranged at several rolling horizons (30/60/90/120 trading days by
//! default): for each window length, the maximum, quartiles, median and
//! minimum of the rolling annualized volatility series. Analysts read
//! current implied or realized volatility against the cone as a
//! historical reference band.
//!
//! Input is any slice of types implementing [`Ohlc`] — one bar per
//! trading day, sorted by date, with an adjusted close reflecting splits
//! and dividends. Long histories are usually filtered to a trailing
//! range (say, the last two years) by the caller before computing a
//! cone; the engine itself consumes whatever slice it is handed.
//!
//! Estimators are the closed [`Estimator`] set: close-to-close log
//! returns, Parkinson, Garman-Klass and Rogers-Satchell-Yoon (Yang-Zhang
//! is recognized but unimplemented and fails with a typed error).
//!
//! # Example
//!
//! ```
//! use std::num::NonZero;
//! use chrono::{Days, NaiveDate};
//! use volcone::{ConeConfig, Estimator, Ohlc, Price, compute_cone};
//!
//! struct DailyBar {
//!     date: NaiveDate,
//!     open: f64,
//!     high: f64,
//!     low: f64,
//!     close: f64,
//! }
//!
//! impl Ohlc for DailyBar {
//!     fn date(&self) -> NaiveDate { self.date }
//!     fn open(&self) -> Price { self.open }
//!     fn high(&self) -> Price { self.high }
//!     fn low(&self) -> Price { self.low }
//!     fn close(&self) -> Price { self.close }
//! }
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let bars: Vec<DailyBar> = (0..40)
//!     .map(|i| DailyBar {
//!         date: start + Days::new(i),
//!         open: 100.0,
//!         high: 102.0,
//!         low: 99.0,
//!         close: 101.0,
//!     })
//!     .collect();
//!
//! let config = ConeConfig::builder()
//!     .estimator(Estimator::Parkinson)
//!     .windows([NonZero::new(10).unwrap(), NonZero::new(20).unwrap()])
//!     .build();
//!
//! let summary = compute_cone(&bars, &config).unwrap();
//! println!("{summary}");
//! assert!(summary.stats_for(NonZero::new(20).unwrap()).is_some());
//! ```

mod cone;
mod error;
mod estimator;
mod ohlc;
mod stats;
mod summary;

pub use crate::cone::{
    ConeConfig, ConeConfigBuilder, DEFAULT_WINDOWS, TRADING_DAYS_PER_YEAR, compute_cone,
    rolling_volatility,
};
pub use crate::error::ConeError;
pub use crate::estimator::Estimator;
pub use crate::ohlc::{Ohlc, Price};
pub use crate::summary::{ConeColumn, ConeSummary, WindowStats};

#[cfg(test)]
mod test_util;
