//! Single-value draws and flat strings built from them.

use chance_core::pool::POOL_EMPTY;
use chance_core::{CharacterPoolOptions, Error, Result, build_pool, ensure_range};

use crate::random::RandomSource;

pub const DEFAULT_LIKELIHOOD: i64 = 50;

const LIKELIHOOD_RANGE: &str = "likelihood accepts values from 0 to 100";

/// `true` with probability `likelihood / 100`.
///
/// Draws an integer in `1..=100` and compares it with `likelihood`, so 0
/// never yields `true` and 100 always does.
pub fn boolean<S>(rng: &mut S, likelihood: i64) -> Result<bool>
where
    S: RandomSource + ?Sized,
{
    ensure_range(!(0..=100).contains(&likelihood), LIKELIHOOD_RANGE)?;
    Ok(rng.random_int(1, 100) <= likelihood)
}

/// Uniform integer `N` with `start <= N <= end`.
pub fn integer<S>(rng: &mut S, start: i64, end: i64) -> Result<i64>
where
    S: RandomSource + ?Sized,
{
    ensure_range(start > end, "integer start must be <= end")?;
    Ok(rng.random_int(start, end))
}

/// Uniform float `N` with `start <= N <= end`.
pub fn floating<S>(rng: &mut S, start: f64, end: f64) -> Result<f64>
where
    S: RandomSource + ?Sized,
{
    ensure_range(
        !start.is_finite() || !end.is_finite(),
        "floating bounds must be finite",
    )?;
    ensure_range(start > end, "floating start must be <= end")?;
    Ok(rng.random_float(start, end))
}

/// One character drawn uniformly from the pool described by `options`.
pub fn character<S>(rng: &mut S, options: &CharacterPoolOptions) -> Result<char>
where
    S: RandomSource + ?Sized,
{
    let pool = build_pool(options)?;
    draw(rng, &pool)
}

/// `length` independent character draws from the same pool.
///
/// The pool only depends on `options`, so it is built once per call.
pub fn randstring<S>(
    rng: &mut S,
    length: usize,
    options: &CharacterPoolOptions,
) -> Result<String>
where
    S: RandomSource + ?Sized,
{
    let pool = build_pool(options)?;
    let mut value = String::with_capacity(length);
    for _ in 0..length {
        value.push(draw(rng, &pool)?);
    }
    Ok(value)
}

pub(crate) fn draw<S>(rng: &mut S, pool: &[char]) -> Result<char>
where
    S: RandomSource + ?Sized,
{
    rng.choice(pool).ok_or_else(|| Error::Range(POOL_EMPTY.to_string()))
}
