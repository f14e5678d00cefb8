use std::{fmt::Display, str::FromStr};

use crate::{ConeError, Ohlc, Price};

/// Scaling constant of the Parkinson estimator: `1 / (4 ln 2)`.
const PARKINSON_SCALE: f64 = 1.0 / (4.0 * std::f64::consts::LN_2);

/// Weight of the drift correction term in the Garman-Klass estimator.
const GK_DRIFT_WEIGHT: f64 = 0.3862;

/// Historical volatility estimator.
///
/// Each variant maps one daily bar (or a pair of adjacent bars for
/// [`CloseToClose`](Estimator::CloseToClose)) to a per-bar variance
/// contribution. The cone engine reduces those contributions over rolling
/// windows: the close-to-close series is reduced by sample standard
/// deviation, all range-based series by arithmetic mean.
///
/// Estimators that read open/high/low first rebase those fields onto the
/// adjusted-close price basis by multiplying with the bar's adjustment
/// factor `adj_close / close`, recomputed fresh on every call.
///
/// Tags parse via [`FromStr`]:
///
/// ```
/// use volcone::Estimator;
///
/// let estimator: Estimator = "park".parse().unwrap();
/// assert_eq!(estimator, Estimator::Parkinson);
/// assert!("ewma".parse::<Estimator>().is_err());
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Estimator {
    /// Close-to-close log returns: `ln(close_t / close_{t-1})`, on
    /// unadjusted closes. Tag `c2c`.
    CloseToClose,
    /// Parkinson high-low range estimator:
    /// `(1 / (4 ln 2)) · ln(high / low)²`. Tag `park`.
    Parkinson,
    /// Garman-Klass estimator:
    /// `ln(open/close)² + 0.5 · ln(high/low)² − 0.3862 · ln(close/open)²`.
    /// The weighted subtraction can dip below zero on unusual bars. Tag
    /// `gk`.
    GarmanKlass,
    /// Rogers-Satchell-Yoon drift-independent estimator. Tag `rsy`.
    RogersSatchellYoon,
    /// Yang-Zhang estimator. Recognized but not implemented: it combines
    /// already-aggregated volatilities rather than per-bar contributions,
    /// and selecting it fails with [`ConeError::Unimplemented`]. Tag `yz`.
    YangZhang,
}

/// How a window of contributions collapses to one statistic.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub(crate) enum Reduction {
    Mean,
    SampleStd,
}

impl Estimator {
    /// Every recognized estimator, in tag order.
    pub const ALL: [Self; 5] = [
        Self::CloseToClose,
        Self::Parkinson,
        Self::GarmanKlass,
        Self::RogersSatchellYoon,
        Self::YangZhang,
    ];

    /// The short tag this estimator parses from.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::CloseToClose => "c2c",
            Self::Parkinson => "park",
            Self::GarmanKlass => "gk",
            Self::RogersSatchellYoon => "rsy",
            Self::YangZhang => "yz",
        }
    }

    #[inline]
    pub(crate) fn reduction(self) -> Reduction {
        match self {
            Self::CloseToClose => Reduction::SampleStd,
            _ => Reduction::Mean,
        }
    }

    /// Computes the per-bar contribution series for `bars`.
    ///
    /// The result has one value per bar, except for
    /// [`CloseToClose`](Estimator::CloseToClose) which needs the previous
    /// close and therefore yields one value per adjacent pair
    /// (`bars.len() - 1`).
    ///
    /// Zero or negative prices produce non-finite values in the series;
    /// they are propagated, not rejected.
    ///
    /// # Errors
    ///
    /// [`ConeError::Unimplemented`] for
    /// [`YangZhang`](Estimator::YangZhang).
    pub fn contributions<B: Ohlc>(self, bars: &[B]) -> Result<Vec<Price>, ConeError> {
        match self {
            Self::CloseToClose => Ok(bars
                .windows(2)
                .map(|pair| close_to_close(&pair[1], &pair[0]))
                .collect()),
            Self::Parkinson => Ok(per_bar(bars, parkinson)),
            Self::GarmanKlass => Ok(per_bar(bars, garman_klass)),
            Self::RogersSatchellYoon => Ok(per_bar(bars, rogers_satchell_yoon)),
            Self::YangZhang => Err(ConeError::Unimplemented { estimator: self }),
        }
    }
}

impl Display for Estimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Estimator {
    type Err = ConeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "c2c" => Ok(Self::CloseToClose),
            "park" => Ok(Self::Parkinson),
            "gk" => Ok(Self::GarmanKlass),
            "rsy" => Ok(Self::RogersSatchellYoon),
            "yz" => Ok(Self::YangZhang),
            _ => Err(ConeError::InvalidEstimator {
                tag: tag.to_owned(),
            }),
        }
    }
}

#[inline]
fn adjustment_factor(bar: &impl Ohlc) -> f64 {
    bar.adj_close() / bar.close()
}

fn per_bar<B: Ohlc>(bars: &[B], contribution: fn(&B, f64) -> Price) -> Vec<Price> {
    bars.iter()
        .map(|bar| contribution(bar, adjustment_factor(bar)))
        .collect()
}

fn close_to_close<B: Ohlc>(today: &B, yesterday: &B) -> Price {
    (today.close() / yesterday.close()).ln()
}

fn parkinson<B: Ohlc>(bar: &B, factor: f64) -> Price {
    let log_hl = ((factor * bar.high()) / (factor * bar.low())).ln();
    PARKINSON_SCALE * log_hl * log_hl
}

fn garman_klass<B: Ohlc>(bar: &B, factor: f64) -> Price {
    let open = factor * bar.open();
    let close = factor * bar.close();
    let log_hl = ((factor * bar.high()) / (factor * bar.low())).ln();
    let log_co = (close / open).ln();
    let log_oc = (open / close).ln();
    log_oc * log_oc + 0.5 * log_hl * log_hl - GK_DRIFT_WEIGHT * log_co * log_co
}

fn rogers_satchell_yoon<B: Ohlc>(bar: &B, factor: f64) -> Price {
    let open = factor * bar.open();
    let log_ho = ((factor * bar.high()) / open).ln();
    let log_lo = ((factor * bar.low()) / open).ln();
    let log_co = ((factor * bar.close()) / open).ln();
    log_ho * (log_ho - log_co) + log_lo * (log_lo - log_co)
}
