//! Point formulas, one per activity.
//!
//! Every function here is pure and assumes its inputs already passed
//! [`ActivityMetrics::validate`]. Only [`score`] validates.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::models::{ActivityMetrics, ClimbDifficulty};

/// Base points per climbing difficulty tier, easiest first.
const CLIMB_BASE_POINTS: [i64; 6] = [0, 1, 3, 9, 27, 75];

/// Bonus multiplier per attempt count, in hundredths. Index 0 is "no attempts".
/// Counts past the end reuse the last value.
const ATTEMPT_BONUS_HUNDREDTHS: [i64; 7] = [0, 300, 225, 150, 75, 30, 10];

/// `max(K - D/2 + A*0.65, 0)`
pub fn combat_points(kills: u32, deaths: u32, assists: u32) -> Decimal {
    let raw = Decimal::from(kills) - Decimal::from(deaths) / Decimal::TWO
        + Decimal::from(assists) * Decimal::new(65, 2);

    raw.max(Decimal::ZERO)
}

/// `round(distance_km * 10 + duration_seconds / 200)`
pub fn cycling_points(distance_km: Decimal, duration_seconds: u32) -> Decimal {
    let raw = distance_km * Decimal::TEN + Decimal::from(duration_seconds) / Decimal::from(200);

    round_half_up(raw)
}

/// Average speed in km/h, or `None` when the duration is not positive.
pub fn running_speed_kmh(distance_km: Decimal, duration_minutes: Decimal) -> Option<Decimal> {
    if duration_minutes <= Decimal::ZERO {
        return None;
    }

    let hours = duration_minutes.checked_div(Decimal::from(60))?;
    distance_km.checked_div(hours)
}

/// `floor(distance_km * 4 + speed_kmh)`, or `None` when the speed is undefined or out of range.
pub fn running_points(distance_km: Decimal, duration_minutes: Decimal) -> Option<Decimal> {
    let speed = running_speed_kmh(distance_km, duration_minutes)?;

    distance_km
        .checked_mul(Decimal::from(4))?
        .checked_add(speed)
        .map(|points| points.floor())
}

/// `floor((reps/2) * (sets/2) * (1 + weight_kg/100))`
pub fn strength_points(reps: u32, sets: u32, weight_kg: Decimal) -> Decimal {
    let load = Decimal::ONE + weight_kg / Decimal::ONE_HUNDRED;

    (Decimal::from(reps) / Decimal::TWO * (Decimal::from(sets) / Decimal::TWO) * load).floor()
}

pub fn climb_base_points(difficulty: ClimbDifficulty) -> Decimal {
    Decimal::from(CLIMB_BASE_POINTS[difficulty.tier()])
}

pub fn attempt_bonus(attempts: u32) -> Decimal {
    let last = ATTEMPT_BONUS_HUNDREDTHS.len() - 1;
    let index = (attempts as usize).min(last);

    Decimal::new(ATTEMPT_BONUS_HUNDREDTHS[index], 2)
}

/// `base(difficulty) * (1 + bonus(attempts)) * climb_count`
pub fn climbing_points(difficulty: ClimbDifficulty, attempts: u32, climb_count: u32) -> Decimal {
    climb_base_points(difficulty) * (Decimal::ONE + attempt_bonus(attempts))
        * Decimal::from(climb_count)
}

/// Full reward when finished within the limit, nothing otherwise.
pub fn timed_challenge_points(duration_seconds: u32, limit_seconds: u32, reward: u32) -> Decimal {
    if duration_seconds <= limit_seconds {
        Decimal::from(reward)
    } else {
        Decimal::ZERO
    }
}

/// Validates the metrics and computes their point value.
pub fn score(metrics: &ActivityMetrics) -> Result<Decimal> {
    metrics.validate().map_err(EngineError::InvalidInput)?;

    let points = match *metrics {
        ActivityMetrics::Combat {
            kills,
            deaths,
            assists,
        } => combat_points(kills, deaths, assists),
        ActivityMetrics::Cycling {
            distance_km,
            duration_seconds,
        } => cycling_points(distance_km, duration_seconds),
        ActivityMetrics::Running {
            distance_km,
            duration_minutes,
        } => running_points(distance_km, duration_minutes).ok_or_else(|| {
            EngineError::InvalidInput("running speed is undefined for this duration".to_string())
        })?,
        ActivityMetrics::Strength {
            reps,
            sets,
            weight_kg,
        } => strength_points(reps, sets, weight_kg),
        ActivityMetrics::Climbing {
            difficulty,
            attempts,
            climb_count,
        } => climbing_points(difficulty, attempts, climb_count),
        ActivityMetrics::TimedChallenge {
            duration_seconds,
            limit_seconds,
            reward,
        } => timed_challenge_points(duration_seconds, limit_seconds, reward),
    };

    debug!(kind = metrics.kind().as_str(), %points, "Scored activity");

    Ok(points)
}

fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
