//! Minimax polynomials and their Horner evaluation.
//!
//! Coefficients were fitted offline with Sollya's `fpminimax` and are carried
//! as double-precision literals. Each polynomial is only valid over the narrow
//! interval it was fitted on.

/// A polynomial with coefficients in ascending order of degree.
#[derive(Clone, Copy, Debug)]
pub struct Polynomial<const N: usize> {
    pub coeffs: [f64; N],
}

impl<const N: usize> Polynomial<N> {
    pub const fn new(coeffs: [f64; N]) -> Polynomial<N> {
        Polynomial { coeffs }
    }

    /// Evaluates the polynomial at `x` in nested multiply-add form.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::functions::poly::Polynomial;
    /// #
    /// let p = Polynomial::new([1.0, -2.0, 3.0]);
    ///
    /// assert_eq!(p.eval(2.0), 9.0);
    /// ```
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rfold(0.0, |acc, &c| acc * x + c)
    }
}

/// `fpminimax(exp(x), 5, [|D...|], [-0.0039, 0.0039])`.
#[allow(clippy::excessive_precision)]
pub const EXP_NEAR_ZERO: Polynomial<6> = Polynomial::new([
    1.0,
    1.0,
    0.49999999999985944576508245518198236823081970214844,
    0.166666666666697105281258473041816614568233489990234,
    4.1666696240209417922972789938285131938755512237549e-2,
    8.3333337622652735310335714302709675393998622894287e-3,
]);

/// Least-squares cubic for `exp(x)` over `[0, 1]`.
pub const EXP_UNIT: Polynomial<4> =
    Polynomial::new([1.00020947, 1.01273643, 0.425302, 0.28033708]);

/// `fpminimax(log(1 + x), 5, [|D...|], [0, 0.01])`.
#[allow(clippy::excessive_precision)]
pub const LOG1P_NEAR_ZERO: Polynomial<6> = Polynomial::new([
    -8.0159120687014415322143784594351322561698644901218e-21,
    0.99999999999996291855097751977154985070228576660156,
    -0.49999999982958548416789312796026933938264846801758,
    0.33333320027787793904394675337243825197219848632812,
    -0.249963278288175078101218673509720247238874435424805,
    0.195840954071922368484592880122363567352294921875,
]);

/// Least-squares cubic for `log2(x)` over `[0.5, 1]`.
pub const LOG2_HALF_UNIT: Polynomial<4> =
    Polynomial::new([-3.21430967, 6.30371424, -4.42852392, 1.33755322]);

#[cfg(test)]
mod tests {
    use super::*;

    fn max_abs_error<const N: usize>(
        p: &Polynomial<N>,
        f: impl Fn(f64) -> f64,
        lo: f64,
        hi: f64,
    ) -> f64 {
        (0..=1000)
            .map(|i| lo + (hi - lo) * f64::from(i) / 1000.0)
            .map(|x| (p.eval(x) - f(x)).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn horner_matches_naive_evaluation() {
        let p = Polynomial::new([0.5, -1.25, 2.0, 0.75]);

        for x in [-2.0, -0.5, 0.0, 0.125, 3.0] {
            let naive = 0.5 - 1.25 * x + 2.0 * x * x + 0.75 * x * x * x;
            assert!((p.eval(x) - naive).abs() <= 1e-12 * naive.abs().max(1.0));
        }

    }

    #[test]
    fn exp_near_zero_accuracy() {
        let err = max_abs_error(&EXP_NEAR_ZERO, f64::exp, -0.0039, 0.0039);
        assert!(err < 1e-15, "{err:e}");
    }

    #[test]
    fn log1p_near_zero_accuracy() {
        let err = max_abs_error(&LOG1P_NEAR_ZERO, f64::ln_1p, 0.0, 0.01);
        assert!(err < 1e-15, "{err:e}");
    }

    #[test]
    fn coarse_fits() {
        let err = max_abs_error(&EXP_UNIT, f64::exp, 0.0, 1.0);
        assert!(err < 2e-3, "{err:e}");

        let err = max_abs_error(&LOG2_HALF_UNIT, f64::log2, 0.5, 1.0);
        assert!(err < 1e-2, "{err:e}");
    }
}
