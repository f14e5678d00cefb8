use std::{fmt::Display, num::NonZero};

use crate::{
    ConeError, Estimator, Ohlc, Price,
    estimator::Reduction,
    stats,
    summary::{ConeColumn, ConeSummary, WindowStats},
};

/// Trading days per year used to annualize a per-window statistic.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Default rolling window lengths, in trading days.
pub const DEFAULT_WINDOWS: [NonZero<usize>; 4] = [
    NonZero::new(30).unwrap(),
    NonZero::new(60).unwrap(),
    NonZero::new(90).unwrap(),
    NonZero::new(120).unwrap(),
];

/// Configuration for a volatility cone computation.
///
/// Holds the estimator and the window lengths. Windows default to
/// [`DEFAULT_WINDOWS`] and are evaluated in the order given; the output
/// columns preserve that order.
///
/// # Example
///
/// ```
/// use std::num::NonZero;
/// use volcone::{ConeConfig, Estimator};
///
/// let config = ConeConfig::builder()
///     .estimator(Estimator::GarmanKlass)
///     .windows([NonZero::new(20).unwrap(), NonZero::new(40).unwrap()])
///     .build();
///
/// assert_eq!(config.estimator(), Estimator::GarmanKlass);
/// assert_eq!(config.windows().len(), 2);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct ConeConfig {
    estimator: Estimator,
    windows: Vec<NonZero<usize>>,
}

impl ConeConfig {
    /// Returns a new builder with default windows.
    #[must_use]
    pub fn builder() -> ConeConfigBuilder {
        ConeConfigBuilder::new()
    }

    /// Close-to-close cone over the default windows.
    #[must_use]
    pub fn close_to_close() -> Self {
        Self::of(Estimator::CloseToClose)
    }

    /// Parkinson cone over the default windows.
    #[must_use]
    pub fn parkinson() -> Self {
        Self::of(Estimator::Parkinson)
    }

    /// Garman-Klass cone over the default windows.
    #[must_use]
    pub fn garman_klass() -> Self {
        Self::of(Estimator::GarmanKlass)
    }

    /// Rogers-Satchell-Yoon cone over the default windows.
    #[must_use]
    pub fn rogers_satchell_yoon() -> Self {
        Self::of(Estimator::RogersSatchellYoon)
    }

    fn of(estimator: Estimator) -> Self {
        Self::builder().estimator(estimator).build()
    }

    /// The configured estimator.
    #[inline]
    #[must_use]
    pub fn estimator(&self) -> Estimator {
        self.estimator
    }

    /// The configured window lengths, in output column order.
    #[inline]
    #[must_use]
    pub fn windows(&self) -> &[NonZero<usize>] {
        &self.windows
    }
}

impl Display for ConeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConeConfig({}, [", self.estimator)?;
        for (i, window) in self.windows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{window}")?;
        }
        write!(f, "])")
    }
}

/// Builder for [`ConeConfig`].
///
/// Defaults: windows = [`DEFAULT_WINDOWS`]. The estimator must be set
/// before calling [`build`](ConeConfigBuilder::build).
pub struct ConeConfigBuilder {
    estimator: Option<Estimator>,
    windows: Vec<NonZero<usize>>,
}

impl ConeConfigBuilder {
    fn new() -> Self {
        Self {
            estimator: None,
            windows: DEFAULT_WINDOWS.to_vec(),
        }
    }

    /// Sets the estimator.
    #[inline]
    #[must_use]
    pub fn estimator(mut self, estimator: Estimator) -> Self {
        self.estimator.replace(estimator);
        self
    }

    /// Replaces the window set. Order is preserved in the output.
    #[inline]
    #[must_use]
    pub fn windows(mut self, windows: impl IntoIterator<Item = NonZero<usize>>) -> Self {
        self.windows = windows.into_iter().collect();
        self
    }

    /// Builds the config. Panics if the estimator is missing.
    #[must_use]
    pub fn build(self) -> ConeConfig {
        ConeConfig {
            estimator: self.estimator.expect("estimator is required"),
            windows: self.windows,
        }
    }
}

/// Computes the volatility cone for `bars` under `config`.
///
/// The estimator series is computed once, then reduced per requested
/// window into annualized rolling volatilities whose order statistics
/// form one [`ConeSummary`] column each.
///
/// # Errors
///
/// - [`ConeError::Unimplemented`] if the configured estimator is a stub.
/// - [`ConeError::InsufficientData`] if any requested window is at least
///   as long as the estimator series. Checked for every window before any
///   aggregation runs, so a summary is never partially computed.
///
/// # Example
///
/// ```
/// use std::num::NonZero;
/// use chrono::{Days, NaiveDate};
/// use volcone::{ConeConfig, Estimator, Ohlc, Price, compute_cone};
///
/// struct Day(NaiveDate, f64, f64);
///
/// impl Ohlc for Day {
///     fn date(&self) -> NaiveDate { self.0 }
///     fn open(&self) -> Price { self.1 }
///     fn high(&self) -> Price { self.2 }
///     fn low(&self) -> Price { self.1 }
///     fn close(&self) -> Price { self.2 }
/// }
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let bars: Vec<Day> = (0..10)
///     .map(|i| Day(start + Days::new(i), 100.0, 101.0))
///     .collect();
///
/// let config = ConeConfig::builder()
///     .estimator(Estimator::Parkinson)
///     .windows([NonZero::new(5).unwrap()])
///     .build();
///
/// let summary = compute_cone(&bars, &config).unwrap();
/// assert_eq!(summary.columns().len(), 1);
/// ```
pub fn compute_cone<B: Ohlc>(bars: &[B], config: &ConeConfig) -> Result<ConeSummary, ConeError> {
    debug_assert_dates_ascending(bars);

    let series = config.estimator().contributions(bars)?;

    for &window in config.windows() {
        ensure_window_fits(window, series.len())?;
    }

    let columns = config
        .windows()
        .iter()
        .map(|&window| {
            let values = windowed(&series, config.estimator(), window);
            ConeColumn::new(window, WindowStats::from_values(&values))
        })
        .collect();

    Ok(ConeSummary::new(config.estimator(), columns))
}

/// Computes the annualized rolling volatility series for a single window
/// length.
///
/// The result has exactly `series_len - window` values, where
/// `series_len` is the estimator series length (`bars.len()` for
/// range-based estimators, `bars.len() - 1` for close-to-close).
///
/// # Errors
///
/// Same conditions as [`compute_cone`], for this one window.
pub fn rolling_volatility<B: Ohlc>(
    bars: &[B],
    estimator: Estimator,
    window: NonZero<usize>,
) -> Result<Vec<Price>, ConeError> {
    debug_assert_dates_ascending(bars);

    let series = estimator.contributions(bars)?;
    ensure_window_fits(window, series.len())?;

    Ok(windowed(&series, estimator, window))
}

/// Rolling reduction over the estimator series.
///
/// Start indices run over `0..len - window`: the last admissible start is
/// `len - window - 1`, so the output carries `len - window` values, one
/// fewer than the number of full windows the series admits. Downstream
/// consumers rely on exactly this count.
fn windowed(series: &[f64], estimator: Estimator, window: NonZero<usize>) -> Vec<Price> {
    let width = window.get();
    let reduce: fn(&[f64]) -> f64 = match estimator.reduction() {
        Reduction::Mean => stats::mean,
        Reduction::SampleStd => stats::sample_std,
    };

    (0..series.len() - width)
        .map(|start| (TRADING_DAYS_PER_YEAR * reduce(&series[start..start + width])).sqrt())
        .collect()
}

fn ensure_window_fits(window: NonZero<usize>, available: usize) -> Result<(), ConeError> {
    if window.get() >= available {
        return Err(ConeError::InsufficientData {
            window: window.get(),
            available,
        });
    }
    Ok(())
}

fn debug_assert_dates_ascending<B: Ohlc>(bars: &[B]) {
    debug_assert!(
        bars.windows(2).all(|pair| pair[0].date() < pair[1].date()),
        "bars must be sorted by date ascending without duplicates",
    );
}
