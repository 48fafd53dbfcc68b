//! Fixed-width histograms of ULP distances.

use std::fmt;
use std::ops::{Add, AddAssign};

use itertools::{Itertools, Position};

/// Counts samples into `N` bins, the last of which collects every value of
/// `N - 1` or more.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram<const N: usize> {
    bins: [u64; N],
}

impl<const N: usize> Histogram<N> {
    const NONEMPTY: () = assert!(N > 0, "a histogram needs at least one bin");

    pub fn new() -> Histogram<N> {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONEMPTY;

        Histogram { bins: [0; N] }
    }

    /// Records one sample with the given value.
    #[inline]
    pub fn record(&mut self, value: u64) {
        self.record_count(value, 1);
    }

    /// Records `count` samples with the given value.
    #[inline]
    pub fn record_count(&mut self, value: u64, count: u64) {
        let idx = value.min(N as u64 - 1) as usize;
        self.bins[idx] += count;
    }

    /// Adds the counts of `other` bin by bin.
    pub fn merge(&mut self, other: &Histogram<N>) {
        for (bin, count) in self.bins.iter_mut().zip(other.bins) {
            *bin += count;
        }
    }

    pub fn bins(&self) -> &[u64; N] {
        &self.bins
    }

    /// Number of samples observed.
    pub fn total(&self) -> u64 {
        self.bins.iter().sum()
    }

    /// Share of all samples falling into bin `idx`, in percent.
    pub fn percent(&self, idx: usize) -> f64 {
        match self.total() {
            0 => 0.0,
            total => 100.0 * self.bins[idx] as f64 / total as f64,
        }
    }
}

impl<const N: usize> Default for Histogram<N> {
    fn default() -> Self {
        Histogram::new()
    }
}

impl<const N: usize> AddAssign<&Histogram<N>> for Histogram<N> {
    fn add_assign(&mut self, rhs: &Histogram<N>) {
        self.merge(rhs);
    }
}

impl<const N: usize> Add for Histogram<N> {
    type Output = Self;

    fn add(mut self, rhs: Histogram<N>) -> Histogram<N> {
        self.merge(&rhs);
        self
    }
}

impl<const N: usize> fmt::Display for Histogram<N> {
    /// One line per bin with its index, share, and count. The final line
    /// aggregates the overflow bin.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (pos, (idx, count)) in self.bins.iter().enumerate().with_position() {
            let percent = self.percent(idx);

            if matches!(pos, Position::Last | Position::Only) {
                writeln!(f, "Other: {percent:06.3}% - {count:08}")?;
            } else {
                writeln!(f, "{idx:02}) {percent:06.3}% - {count:08}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled<const N: usize>(values: &[u64]) -> Histogram<N> {
        let mut hist = Histogram::new();

        for &value in values {
            hist.record(value);
        }

        hist
    }

    #[test]
    fn clamps_to_last_bin() {
        let hist: Histogram<4> = filled(&[0, 1, 1, 3, 4, 1000, u64::MAX]);

        assert_eq!(hist.bins(), &[1, 2, 0, 4]);
        assert_eq!(hist.total(), 7);
    }

    #[test]
    fn merge_is_order_independent() {
        let values: Vec<u64> = (0..200).map(|i| (i * 7919) % 23).collect();

        let whole: Histogram<16> = filled(&values);

        let parts: Vec<Histogram<16>> =
            values.chunks(37).map(filled::<16>).collect();

        let forward = parts.iter().fold(Histogram::new(), |mut acc, part| {
            acc += part;
            acc
        });
        let backward =
            parts.iter().rev().fold(Histogram::new(), |mut acc, part| {
                acc += part;
                acc
            });
        let nested = parts[0].clone()
            + (parts[1].clone() + parts[2].clone())
            + parts[3..].iter().cloned().fold(Histogram::new(), Add::add);

        assert_eq!(forward, whole);
        assert_eq!(backward, whole);
        assert_eq!(nested, whole);
        assert_eq!(whole.total(), values.len() as u64);
    }

    #[test]
    fn report_format() {
        let mut hist: Histogram<3> = Histogram::new();
        hist.record_count(0, 3);
        hist.record(9);

        let report = hist.to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            [
                "00) 75.000% - 00000003",
                "01) 00.000% - 00000000",
                "Other: 25.000% - 00000001",
            ]
        );
    }

    #[test]
    fn record_with_add_in_scope() {
        let mut hist: Histogram<4> = Histogram::new();
        hist.record(2);
        hist.record_count(7, 5);

        let sum = hist.clone() + hist;

        assert_eq!(sum.bins(), &[0, 0, 2, 10]);
    }

    #[test]
    fn empty_percentages() {
        let hist: Histogram<2> = Histogram::new();
        assert_eq!(hist.percent(0), 0.0);
        assert_eq!(hist.total(), 0);
    }
}
