//! Exhaustive comparison of two single-precision functions.

use std::num::NonZeroUsize;
use std::ops::Range;
use std::time::Instant;
use std::{error, fmt, panic, thread};

use super::histogram::Histogram;
use super::ulp::ulp_difference;
use crate::float::bits::from_bit_pattern;

/// Number of distinct f32 bit patterns.
pub const DOMAIN_SIZE: u64 = 1 << 32;

/// Bin count used by [`verify`].
pub const DEFAULT_BINS: usize = 16;

/// Evaluates `candidate` and `reference` on every bit pattern in `range` and
/// records their ULP distances.
pub fn scan<const N: usize, C, R>(
    range: Range<u64>,
    candidate: &C,
    reference: &R,
) -> Histogram<N>
where
    C: Fn(f32) -> f32,
    R: Fn(f32) -> f32,
{
    let mut hist = Histogram::new();

    for bits in range {
        let val = from_bit_pattern::<f32>(bits as u32);
        let ulp = ulp_difference(candidate(val), reference(val));

        hist.record(u64::from(ulp));
    }

    hist
}

/// Splits `domain` into at most `parts` contiguous ranges of near-equal
/// length. Earlier ranges absorb the remainder.
pub fn partition(domain: Range<u64>, parts: NonZeroUsize) -> Vec<Range<u64>> {
    let len = domain.end.saturating_sub(domain.start);
    let parts = (parts.get() as u64).min(len);

    if parts == 0 {
        return Vec::new();
    }

    let chunk = len / parts;
    let extra = len % parts;

    (0..parts)
        .scan(domain.start, |start, i| {
            let end = *start + chunk + u64::from(i < extra);
            let range = *start..end;
            *start = end;

            Some(range)
        })
        .collect()
}

/// Runs the comparison on a fixed number of scoped worker threads.
///
/// Each worker owns the histogram for its slice of the domain; the partial
/// histograms are merged after all workers have been joined.
#[derive(Clone, Copy, Debug)]
pub struct Verifier {
    workers: NonZeroUsize,
}

impl Verifier {
    pub fn new(workers: usize) -> Result<Verifier, VerifyError> {
        let workers = NonZeroUsize::new(workers).ok_or(VerifyError::NoWorkers)?;

        Ok(Verifier { workers })
    }

    /// One worker per available hardware thread.
    pub fn with_available_parallelism() -> Verifier {
        let workers = thread::available_parallelism().unwrap_or_else(|err| {
            log::warn!("Cannot query available parallelism: {err}");
            NonZeroUsize::MIN
        });

        Verifier { workers }
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    /// Compares the functions over all 2^32 bit patterns.
    pub fn run<const N: usize, C, R>(
        &self,
        candidate: C,
        reference: R,
    ) -> Histogram<N>
    where
        C: Fn(f32) -> f32 + Sync,
        R: Fn(f32) -> f32 + Sync,
    {
        self.run_parts(0..DOMAIN_SIZE, &candidate, &reference)
    }

    /// Compares the functions over the bit patterns in `domain`.
    pub fn run_range<const N: usize, C, R>(
        &self,
        domain: Range<u64>,
        candidate: C,
        reference: R,
    ) -> Result<Histogram<N>, VerifyError>
    where
        C: Fn(f32) -> f32 + Sync,
        R: Fn(f32) -> f32 + Sync,
    {
        if domain.end > DOMAIN_SIZE {
            return Err(VerifyError::OutOfDomain { end: domain.end });
        } else if domain.is_empty() {
            return Err(VerifyError::EmptyDomain);
        }

        Ok(self.run_parts(domain, &candidate, &reference))
    }

    fn run_parts<const N: usize, C, R>(
        &self,
        domain: Range<u64>,
        candidate: &C,
        reference: &R,
    ) -> Histogram<N>
    where
        C: Fn(f32) -> f32 + Sync,
        R: Fn(f32) -> f32 + Sync,
    {
        let parts = partition(domain.clone(), self.workers);

        log::info!(
            "Comparing {} values on {} workers",
            domain.end - domain.start,
            parts.len()
        );

        let started = Instant::now();

        let partials: Vec<Histogram<N>> = thread::scope(|scope| {
            let handles: Vec<_> = parts
                .into_iter()
                .enumerate()
                .map(|(i, range)| {
                    log::debug!(
                        "Worker {i}: {:#010x}..{:#011x}",
                        range.start,
                        range.end
                    );

                    scope.spawn(move || {
                        scan::<N, C, R>(range, candidate, reference)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|err| panic::resume_unwind(err))
                })
                .collect()
        });

        let merged = partials.iter().fold(Histogram::new(), |mut acc, part| {
            acc += part;
            acc
        });

        log::info!("Finished in {:.2?}", started.elapsed());

        merged
    }
}

/// Compares `candidate` against `reference` over the full f32 domain using all
/// available hardware threads.
pub fn verify<C, R>(candidate: C, reference: R) -> Histogram<DEFAULT_BINS>
where
    C: Fn(f32) -> f32 + Sync,
    R: Fn(f32) -> f32 + Sync,
{
    Verifier::with_available_parallelism().run(candidate, reference)
}

/// Invalid verifier configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyError {
    NoWorkers,
    EmptyDomain,
    OutOfDomain { end: u64 },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VerifyError::NoWorkers => {
                write!(f, "at least one worker is required")
            }
            VerifyError::EmptyDomain => write!(f, "the domain is empty"),
            VerifyError::OutOfDomain { end } => write!(
                f,
                "domain end {end:#x} exceeds the f32 domain of {DOMAIN_SIZE:#x}"
            ),
        }
    }
}

impl error::Error for VerifyError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::exp::{fast_exp, reference_exp};
    use crate::functions::log::{fast_log_f64, reference_log};

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn partition_covers_domain() {
        let parts = partition(0..DOMAIN_SIZE, nz(64));

        assert_eq!(parts.len(), 64);
        assert_eq!(parts[0].start, 0);
        assert_eq!(parts[63].end, DOMAIN_SIZE);
        assert!(parts.windows(2).all(|w| w[0].end == w[1].start));
        assert!(parts.iter().all(|r| r.end - r.start == 1 << 26));
    }

    #[test]
    fn partition_uneven() {
        let parts = partition(10..21, nz(3));

        assert_eq!(parts, [10..14, 14..18, 18..21]);
        assert_eq!(partition(5..7, nz(8)), [5..6, 6..7]);
        assert!(partition(5..5, nz(8)).is_empty());
    }

    #[test]
    fn rejects_bad_configuration() {
        assert_eq!(Verifier::new(0).unwrap_err(), VerifyError::NoWorkers);

        let verifier = Verifier::new(2).unwrap();

        assert_eq!(
            verifier
                .run_range::<4, _, _>(7..7, |x| x, |x| x)
                .unwrap_err(),
            VerifyError::EmptyDomain
        );
        assert_eq!(
            verifier
                .run_range::<4, _, _>(0..DOMAIN_SIZE + 1, |x| x, |x| x)
                .unwrap_err(),
            VerifyError::OutOfDomain {
                end: DOMAIN_SIZE + 1
            }
        );
    }

    #[test]
    fn identical_functions_have_zero_distance() {
        let verifier = Verifier::new(4).unwrap();
        let hist: Histogram<8> = verifier
            .run_range(0x7f000000..0x80100000, |x| x * 3.0, |x| x * 3.0)
            .unwrap();

        assert_eq!(hist.total(), 0x80100000 - 0x7f000000);
        assert_eq!(hist.bins()[0], hist.total());
    }

    #[test]
    fn sign_flip_lands_in_last_bin() {
        let verifier = Verifier::new(3).unwrap();
        let hist: Histogram<8> =
            verifier.run_range(0x3f800000..0x3f810000, |x| x, |x| -x).unwrap();

        assert_eq!(hist.bins()[7], 0x10000);
    }

    #[test]
    fn worker_count_does_not_change_result() {
        let domain = 0x42000000..0x42100000;

        let single: Histogram<16> = Verifier::new(1)
            .unwrap()
            .run_range(domain.clone(), fast_exp, reference_exp)
            .unwrap();
        let many: Histogram<16> = Verifier::new(7)
            .unwrap()
            .run_range(domain.clone(), fast_exp, reference_exp)
            .unwrap();

        assert_eq!(single, many);
        assert_eq!(single, scan(domain, &fast_exp, &reference_exp));
    }

    #[test]
    fn nan_encodings_match() {
        let hist: Histogram<4> = Verifier::new(2)
            .unwrap()
            .run_range(0x7f800001..0x7f880000, fast_exp, reference_exp)
            .unwrap();

        assert_eq!(hist.bins()[0], hist.total());

        let hist: Histogram<4> = Verifier::new(2)
            .unwrap()
            .run_range(0xff800001..0xff880000, fast_log_f64, reference_log)
            .unwrap();

        assert_eq!(hist.bins()[0], hist.total());
    }

    #[test]
    fn exp_is_tight_over_dense_ranges() {
        let verifier = Verifier::new(4).unwrap();

        // [1, 2), [-2, -1), and the positive subnormals.
        for domain in [
            0x3f800000..0x40000000,
            0xbf800000..0xc0000000,
            0x00000000..0x00800000,
        ] {
            let hist: Histogram<16> = verifier
                .run_range(domain.clone(), fast_exp, reference_exp)
                .unwrap();

            let within_two: u64 = hist.bins()[..3].iter().sum();

            assert_eq!(within_two, hist.total(), "{domain:x?}");
        }
    }

    #[test]
    #[ignore = "scans all 2^32 inputs; run in release mode"]
    fn exp_full_domain() {
        let hist = verify(fast_exp, reference_exp);

        assert_eq!(hist.total(), DOMAIN_SIZE);
        assert_eq!(hist.bins()[DEFAULT_BINS - 1], 0);
        assert!(hist.percent(0) + hist.percent(1) > 99.0);
    }
}
