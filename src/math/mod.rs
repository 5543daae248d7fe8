//! Standard-normal distribution helpers and a generic Newton-Raphson root
//! finder. These are the only numerical kernels the formula modules share.

/// Errors from the generic numerical routines.
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// Iteration limit reached without meeting the tolerance.
    NonConvergence,
    /// Derivative too close to zero to take a Newton step.
    ZeroDerivative,
    InvalidInput(&'static str),
}

/// Standard normal probability density `N'(x)`.
///
/// Uses the full-precision `1/sqrt(2*pi)` constant rather than an 8-digit
/// truncation; the difference shows up around the 9th decimal of Gamma/Vega.
pub fn normal_pdf(x: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal cumulative distribution `N(x)`.
///
/// Abramowitz & Stegun 7.1.26 rational polynomial; max absolute error is
/// about 7.5e-8. Callers must not assume exactness beyond that. Defined for
/// all real `x`.
pub fn normal_cdf(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.231_641_9 * z);
    let poly = t
        * (0.319_381_530
            + t * (-0.356_563_782
                + t * (1.781_477_937 + t * (-1.821_255_978 + t * 1.330_274_429))));
    let approx = 1.0 - normal_pdf(z) * poly;
    if x >= 0.0 { approx } else { 1.0 - approx }
}

/// Inverse standard normal CDF via Acklam's rational approximation.
///
/// Relative error is below 1.15e-9 over the open unit interval. Returns
/// `-inf`/`+inf` at the endpoints and NaN outside `[0, 1]`.
pub fn normal_inv_cdf(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838,
        -2.549_732_539_343_734,
        4.374_664_141_464_968,
        2.938_163_982_698_783,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996,
        3.754_408_661_907_416,
    ];
    const P_LOW: f64 = 0.024_25;

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    }
}

/// Newton-Raphson root finder for a scalar function with analytic derivative.
pub fn newton_raphson<F, G>(
    f: F,
    df: G,
    x0: f64,
    tol: f64,
    max_iter: usize,
) -> Result<f64, MathError>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    if tol <= 0.0 {
        return Err(MathError::InvalidInput("tol must be positive"));
    }
    if max_iter == 0 {
        return Err(MathError::InvalidInput("max_iter must be > 0"));
    }

    let mut x = x0;
    for _ in 0..max_iter {
        let fx = f(x);
        if fx.abs() <= tol {
            return Ok(x);
        }
        let dfx = df(x);
        if dfx.abs() <= 1e-14 {
            return Err(MathError::ZeroDerivative);
        }
        let x_next = x - fx / dfx;
        if (x_next - x).abs() <= tol {
            return Ok(x_next);
        }
        x = x_next;
    }

    Err(MathError::NonConvergence)
}
