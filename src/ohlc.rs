use chrono::NaiveDate;

/// A price value.
///
/// Semantic alias for [`f64`]. Documents intent in function signatures
/// without introducing newtype construction overhead.
pub type Price = f64;

/// One daily price bar used as input to the cone engine.
///
/// Implement this on your own bar/record type to avoid per-call
/// conversion. The engine accepts `&[impl Ohlc]` and borrows the slice
/// read-only for the duration of one computation.
///
/// # Ordering
///
/// A bar slice handed to the engine must be sorted by [`date`](Ohlc::date)
/// ascending with no duplicate dates. Gaps are fine (irregular trading
/// calendars are tolerated); ordering is checked by `debug_assert!` only.
///
/// # Well-formedness
///
/// For real market data `high >= max(open, close)`,
/// `min(open, close) >= low` and `low > 0`. The engine does not validate
/// this: a zero or negative price produces non-finite estimator values
/// that propagate into the summary instead of raising an error.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use volcone::{Ohlc, Price};
///
/// struct MyBar {
///     date: NaiveDate,
///     o: f64, h: f64, l: f64, c: f64,
///     adj_c: f64,
/// }
///
/// impl Ohlc for MyBar {
///     fn date(&self) -> NaiveDate { self.date }
///     fn open(&self) -> Price { self.o }
///     fn high(&self) -> Price { self.h }
///     fn low(&self) -> Price { self.l }
///     fn close(&self) -> Price { self.c }
///     fn adj_close(&self) -> Price { self.adj_c }
/// }
/// ```
pub trait Ohlc {
    /// Trading date of the bar. Ordering key only, never used in the
    /// estimator math.
    fn date(&self) -> NaiveDate;

    /// Opening price of the day.
    fn open(&self) -> Price;

    /// Highest price during the day.
    fn high(&self) -> Price;

    /// Lowest price during the day.
    fn low(&self) -> Price;

    /// Closing price of the day, as quoted.
    fn close(&self) -> Price;

    /// Closing price retroactively adjusted for splits and dividends.
    ///
    /// The ratio `adj_close / close` is the per-bar adjustment factor
    /// used to rebase open/high/low onto the adjusted price basis.
    /// Defaults to [`close`](Ohlc::close) for series without corporate
    /// actions.
    fn adj_close(&self) -> Price {
        self.close()
    }
}
