use std::{fmt::Display, num::NonZero};

use crate::{Estimator, Price, stats};

/// Five order statistics of one windowed volatility series.
///
/// Values are annualized volatilities; always `min <= p25 <= median <=
/// p75 <= max` when finite. A NaN anywhere in the underlying series
/// poisons all five statistics of the column rather than being dropped.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct WindowStats {
    max: Price,
    p75: Price,
    median: Price,
    p25: Price,
    min: Price,
}

impl WindowStats {
    pub(crate) fn from_values(values: &[Price]) -> Self {
        debug_assert!(!values.is_empty(), "window statistics over empty series");

        if values.iter().any(|v| v.is_nan()) {
            return Self {
                max: f64::NAN,
                p75: f64::NAN,
                median: f64::NAN,
                p25: f64::NAN,
                min: f64::NAN,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);

        Self {
            max: sorted[sorted.len() - 1],
            p75: stats::percentile(&sorted, 0.75),
            median: stats::percentile(&sorted, 0.5),
            p25: stats::percentile(&sorted, 0.25),
            min: sorted[0],
        }
    }

    /// Highest windowed volatility.
    #[inline]
    #[must_use]
    pub fn max(&self) -> Price {
        self.max
    }

    /// 75th percentile (linear interpolation).
    #[inline]
    #[must_use]
    pub fn p75(&self) -> Price {
        self.p75
    }

    /// Median windowed volatility.
    #[inline]
    #[must_use]
    pub fn median(&self) -> Price {
        self.median
    }

    /// 25th percentile (linear interpolation).
    #[inline]
    #[must_use]
    pub fn p25(&self) -> Price {
        self.p25
    }

    /// Lowest windowed volatility.
    #[inline]
    #[must_use]
    pub fn min(&self) -> Price {
        self.min
    }
}

/// One column of a [`ConeSummary`]: the statistics for a single window
/// length.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct ConeColumn {
    window: NonZero<usize>,
    stats: WindowStats,
}

impl ConeColumn {
    pub(crate) fn new(window: NonZero<usize>, stats: WindowStats) -> Self {
        Self { window, stats }
    }

    /// Window length of this column, in trading days.
    #[inline]
    #[must_use]
    pub fn window(&self) -> NonZero<usize> {
        self.window
    }

    /// The five order statistics for this window length.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> &WindowStats {
        &self.stats
    }
}

/// The volatility cone: one [`ConeColumn`] per requested window length,
/// in requested order.
///
/// `Display` renders the cone as an aligned text table, columns = window
/// lengths, rows = max / 75% / median / 25% / min.
#[derive(PartialEq, Clone, Debug)]
pub struct ConeSummary {
    estimator: Estimator,
    columns: Vec<ConeColumn>,
}

impl ConeSummary {
    pub(crate) fn new(estimator: Estimator, columns: Vec<ConeColumn>) -> Self {
        Self { estimator, columns }
    }

    /// The estimator this cone was computed with.
    #[inline]
    #[must_use]
    pub fn estimator(&self) -> Estimator {
        self.estimator
    }

    /// Columns in requested window order.
    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[ConeColumn] {
        &self.columns
    }

    /// Statistics for one window length, if it was requested.
    #[must_use]
    pub fn stats_for(&self, window: NonZero<usize>) -> Option<&WindowStats> {
        self.columns
            .iter()
            .find(|column| column.window == window)
            .map(ConeColumn::stats)
    }
}

impl Display for ConeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const ROWS: [(&str, fn(&WindowStats) -> Price); 5] = [
            ("max", WindowStats::max),
            ("75%", WindowStats::p75),
            ("median", WindowStats::median),
            ("25%", WindowStats::p25),
            ("min", WindowStats::min),
        ];

        writeln!(f, "Volatility Cone ({})", self.estimator)?;

        write!(f, "{:<6}", "")?;
        for column in &self.columns {
            write!(f, "{:>9}", column.window)?;
        }
        writeln!(f)?;

        for (label, stat) in ROWS {
            write!(f, "{label:<6}")?;
            for column in &self.columns {
                write!(f, "{:>9.4}", stat(&column.stats))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
