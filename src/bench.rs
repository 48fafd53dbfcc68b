//! Throughput and error scans for the approximations.

use std::fmt;
use std::hint::black_box;
use std::ops::AddAssign;
use std::time::{Duration, Instant};

use rand::distributions::uniform::SampleUniform;
use rand::distributions::Uniform;
use rand::Rng;

use crate::functions::exp::libm_exp;
use crate::functions::{
    fast_exp, fast_exp_approx, fast_log, fast_log_approx, fast_log_f64,
};

/// Returns `count` uniformly distributed values in `[start, end)`.
pub fn generate_test_vector<T, R>(
    rng: &mut R,
    start: T,
    end: T,
    count: usize,
) -> Vec<T>
where
    T: SampleUniform,
    R: Rng,
{
    let dist = Uniform::new(start, end);

    (0..count).map(|_| rng.sample(&dist)).collect()
}

pub struct BenchResult<T> {
    pub name: String,
    pub sum: T,
    pub elapsed: Duration,
}

impl<T: fmt::Display> fmt::Display for BenchResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "name = {}, sum = {}, time = {}ms",
            self.name,
            self.sum,
            self.elapsed.as_millis()
        )
    }
}

/// Applies `handle` to every element of `iv`, `iterations` times over, and
/// measures the elapsed time. The results are summed so that the calls cannot
/// be optimized away.
pub fn bench<T, F>(
    name: &str,
    handle: F,
    iv: &[T],
    iterations: usize,
) -> BenchResult<T>
where
    T: Copy + Default + AddAssign,
    F: Fn(T) -> T,
{
    let started = Instant::now();
    let mut sum = T::default();

    for _ in 0..iterations {
        for &elem in iv {
            sum += handle(black_box(elem));
        }
    }

    let elapsed = started.elapsed();

    log::debug!("{name}: {} calls", iterations * iv.len());

    BenchResult {
        name: name.to_owned(),
        sum,
        elapsed,
    }
}

fn nop(_: f64) -> f64 {
    0.00001
}

/// Benchmarks the approximations and their libm counterparts on random test
/// vectors of `count` elements.
pub fn run_suite<R: Rng>(
    rng: &mut R,
    count: usize,
    iterations: usize,
) -> (Vec<BenchResult<f64>>, Vec<BenchResult<f32>>) {
    let exp_iv = generate_test_vector(rng, -10.0, 10.0, count);
    let log_iv = generate_test_vector(rng, 0.5, 10.0, count);

    let double = vec![
        bench("nop", nop, &exp_iv, iterations),
        bench("trunc", f64::trunc, &exp_iv, iterations),
        bench("fast_exp_approx", fast_exp_approx, &exp_iv, iterations),
        bench("libm_exp", f64::exp, &exp_iv, iterations),
        bench("fast_log_approx", fast_log_approx, &log_iv, iterations),
        bench("libm_log", f64::ln, &log_iv, iterations),
    ];

    let exp_iv: Vec<f32> = exp_iv.iter().map(|&x| x as f32).collect();
    let log_iv: Vec<f32> = log_iv.iter().map(|&x| x as f32).collect();

    let single = vec![
        bench("fast_exp", fast_exp, &exp_iv, iterations),
        bench("libm_expf", libm_exp, &exp_iv, iterations),
        bench("fast_log", fast_log, &log_iv, iterations),
        bench("fast_log_f64", fast_log_f64, &log_iv, iterations),
        bench("libm_logf", f32::ln, &log_iv, iterations),
    ];

    (double, single)
}

/// Largest absolute error of an approximation found by [`validate_error`].
#[derive(Debug)]
pub struct ErrorReport {
    pub validated: usize,
    pub max_range: f64,
    pub max_error: f64,
    pub at: f64,
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Tested {} values [0..{}]",
            self.validated, self.max_range
        )?;
        writeln!(f, "Max error {:e} at {}", self.max_error, self.at)?;
        write!(f, "# {} vs {}", self.at.ln(), fast_log_approx(self.at))
    }
}

/// Finds the largest absolute error of [`fast_log_approx`] against
/// `f64::ln`, over an even grid of `(0, max_range)` followed by the values in
/// `iv`.
pub fn validate_error(
    iv: &[f64],
    max_range: f64,
    iterations: u32,
) -> ErrorReport {
    let grid = (1..iterations).map(|i| grid_point(max_range, i, iterations));

    let mut report = ErrorReport {
        validated: 0,
        max_range,
        max_error: 0.0,
        at: 0.0,
    };

    for val in grid.chain(iv.iter().copied()) {
        report.validated += 1;

        let err = (val.ln() - fast_log_approx(val)).abs();

        if err > report.max_error {
            report.max_error = err;
            report.at = val;
        }
    }

    report
}

fn grid_point(max_range: f64, i: u32, iterations: u32) -> f64 {
    max_range * f64::from(i) / f64::from(iterations)
}

/// Result of [`validate_monotonic`].
#[derive(Debug)]
pub struct MonotonicReport {
    pub tested: u32,
    pub max_range: f64,
    pub non_monotonic: u32,
}

impl fmt::Display for MonotonicReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Tested {} values [0..{}]", self.tested, self.max_range)?;
        write!(f, "Found {} non-monotonic values", self.non_monotonic)
    }
}

/// Counts the steps of an even grid over `[0, max_range)` at which
/// [`fast_log_approx`] decreases.
pub fn validate_monotonic(max_range: f64, iterations: u32) -> MonotonicReport {
    let mut prev = fast_log_approx(0.0);
    let mut non_monotonic = 0;

    for i in 1..iterations {
        let val = fast_log_approx(grid_point(max_range, i, iterations));

        if prev > val {
            non_monotonic += 1;
        }

        prev = val;
    }

    MonotonicReport {
        tested: iterations,
        max_range,
        non_monotonic,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_vector_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let iv = generate_test_vector(&mut rng, 0.5, 10.0, 1000);

        assert_eq!(iv.len(), 1000);
        assert!(iv.iter().all(|x| (0.5..10.0).contains(x)));
    }

    #[test]
    fn bench_sums_results() {
        let iv = [1.0, 2.0, 3.0];
        let result = bench("double", |x: f64| 2.0 * x, &iv[..], 4);

        assert_eq!(result.sum, 48.0);
        assert!(result
            .to_string()
            .starts_with("name = double, sum = 48, time = "));
    }

    #[test]
    fn coarse_log_error_is_bounded() {
        let mut rng = StdRng::seed_from_u64(11);
        let iv = generate_test_vector(&mut rng, 0.5, 10.0, 500);
        let report = validate_error(&iv, 20.0, 2000);

        assert_eq!(report.validated, 1999 + 500);
        assert!(report.max_error < 2e-3, "{report}");
        assert!(report.at > 0.0);
    }

    #[test]
    fn coarse_log_drops_at_powers_of_two() {
        let report = validate_monotonic(20.0, 10000);

        assert_eq!(report.tested, 10000);
        assert_eq!(report.non_monotonic, 3);
        assert!(report
            .to_string()
            .ends_with("Found 3 non-monotonic values"));

        let coarse = validate_monotonic(20.0, 2000);
        assert_eq!(coarse.non_monotonic, 0);
    }

    #[test]
    fn suite_covers_all_engines() {
        let mut rng = StdRng::seed_from_u64(3);
        let (double, single) = run_suite(&mut rng, 16, 2);

        assert_eq!(double.len(), 6);
        assert_eq!(single.len(), 5);
        assert!(single.iter().all(|r| r.sum.is_finite()));

        let libm = single.iter().find(|r| r.name == "libm_expf").unwrap();
        let fast = single.iter().find(|r| r.name == "fast_exp").unwrap();
        assert!((libm.sum - fast.sum).abs() <= 1e-4 * libm.sum.abs());
    }
}
