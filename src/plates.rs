//! Barbell plate math: how to load a bar for a target total weight.

use std::fmt;

pub const BAR_WEIGHT: f64 = 45.0;

/// Plate denominations available per side, largest first.
pub const AVAILABLE_PLATES: [f64; 6] = [45.0, 35.0, 25.0, 10.0, 5.0, 2.5];

/// Leftover per-side weight below this counts as an exact load.
const TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateCount {
    pub weight: f64,
    pub count: u32,
}

impl fmt::Display for PlateCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.count, format_plate(self.weight))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlateLoad {
    /// Target is lighter than the empty bar.
    BelowMinimum,
    BarOnly,
    /// Plates to put on each side, largest first.
    PerSide(Vec<PlateCount>),
    /// The available plates cannot reach the target exactly.
    CannotMakeExact,
}

impl PlateLoad {
    /// Short form for tight layouts; `None` when there is nothing useful to show.
    pub fn compact(&self) -> Option<String> {
        match self {
            PlateLoad::BarOnly => Some("Bar only".to_string()),
            PlateLoad::PerSide(plates) => Some(join_plates(plates)),
            PlateLoad::BelowMinimum | PlateLoad::CannotMakeExact => None,
        }
    }

    pub fn per_side_weight(&self) -> Option<f64> {
        match self {
            PlateLoad::BarOnly => Some(0.0),
            PlateLoad::PerSide(plates) => Some(
                plates
                    .iter()
                    .map(|p| p.weight * f64::from(p.count))
                    .sum(),
            ),
            PlateLoad::BelowMinimum | PlateLoad::CannotMakeExact => None,
        }
    }

    /// Bar plus both sides, when the load is exact.
    pub fn total_weight(&self) -> Option<f64> {
        self.per_side_weight().map(|side| BAR_WEIGHT + 2.0 * side)
    }
}

impl fmt::Display for PlateLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlateLoad::BelowMinimum => write!(f, "Weight too low for barbell"),
            PlateLoad::BarOnly => write!(f, "Bar only ({} lbs)", format_plate(BAR_WEIGHT)),
            PlateLoad::PerSide(plates) => write!(f, "Load per side: {}", join_plates(plates)),
            PlateLoad::CannotMakeExact => write!(f, "Can't make exact weight"),
        }
    }
}

pub struct PlateCalculator;

impl PlateCalculator {
    pub fn calculate(total_weight: f64) -> PlateLoad {
        if total_weight.is_nan() || total_weight < BAR_WEIGHT {
            return PlateLoad::BelowMinimum;
        }
        if total_weight.is_infinite() {
            return PlateLoad::CannotMakeExact;
        }

        let per_side = (total_weight - BAR_WEIGHT) / 2.0;
        if per_side == 0.0 {
            return PlateLoad::BarOnly;
        }

        let mut remaining = per_side;
        let mut plates = Vec::new();

        for plate in AVAILABLE_PLATES {
            let count = (remaining / plate).floor() as u32;
            if count > 0 {
                plates.push(PlateCount {
                    weight: plate,
                    count,
                });
                remaining -= f64::from(count) * plate;
            }
        }

        if remaining > TOLERANCE {
            return PlateLoad::CannotMakeExact;
        }

        if plates.is_empty() {
            PlateLoad::BarOnly
        } else {
            PlateLoad::PerSide(plates)
        }
    }
}

fn format_plate(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{}", weight as i64)
    } else {
        format!("{:.1}", weight)
    }
}

fn join_plates(plates: &[PlateCount]) -> String {
    plates
        .iter()
        .map(PlateCount::to_string)
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_totals() {
        assert_eq!(PlateCalculator::calculate(f64::NAN), PlateLoad::BelowMinimum);
        assert_eq!(
            PlateCalculator::calculate(f64::NEG_INFINITY),
            PlateLoad::BelowMinimum
        );
        assert_eq!(
            PlateCalculator::calculate(f64::INFINITY),
            PlateLoad::CannotMakeExact
        );
    }

    #[test]
    fn test_below_bar_weight() {
        let load = PlateCalculator::calculate(40.0);
        assert_eq!(load, PlateLoad::BelowMinimum);
        assert_eq!(load.to_string(), "Weight too low for barbell");
        assert_eq!(load.compact(), None);
    }

    #[test]
    fn test_bar_only() {
        let load = PlateCalculator::calculate(45.0);
        assert_eq!(load, PlateLoad::BarOnly);
        assert_eq!(load.to_string(), "Bar only (45 lbs)");
        assert_eq!(load.compact().as_deref(), Some("Bar only"));
    }

    #[test]
    fn test_greedy_breakdown() {
        // 315 = 45 + 2 × 135
        let load = PlateCalculator::calculate(315.0);
        assert_eq!(load.to_string(), "Load per side: 3×45");

        let load = PlateCalculator::calculate(225.0);
        assert_eq!(load.to_string(), "Load per side: 2×45");

        let load = PlateCalculator::calculate(185.0);
        assert_eq!(load.to_string(), "Load per side: 1×45 + 1×25");
        assert_eq!(load.per_side_weight(), Some(70.0));
    }

    #[test]
    fn test_fractional_plate_formatting() {
        let load = PlateCalculator::calculate(140.0);
        assert_eq!(load.to_string(), "Load per side: 1×45 + 1×2.5");
        assert_eq!(load.compact().as_deref(), Some("1×45 + 1×2.5"));
    }

    #[test]
    fn test_cannot_make_exact_weight() {
        let load = PlateCalculator::calculate(46.0);
        assert_eq!(load, PlateLoad::CannotMakeExact);
        assert_eq!(load.to_string(), "Can't make exact weight");
        assert_eq!(load.total_weight(), None);
    }

    #[test]
    fn test_constructible_totals_reconstruct_exactly() {
        // Every per-side combination up to 2 of each plate.
        let mut checked = 0;
        for a in 0..3u32 {
            for b in 0..2u32 {
                for c in 0..2u32 {
                    for d in 0..2u32 {
                        for e in 0..2u32 {
                            for g in 0..2u32 {
                                let side = 45.0 * f64::from(a)
                                    + 35.0 * f64::from(b)
                                    + 25.0 * f64::from(c)
                                    + 10.0 * f64::from(d)
                                    + 5.0 * f64::from(e)
                                    + 2.5 * f64::from(g);
                                let total = BAR_WEIGHT + 2.0 * side;
                                let load = PlateCalculator::calculate(total);
                                assert_eq!(load.total_weight(), Some(total), "total {}", total);
                                checked += 1;
                            }
                        }
                    }
                }
            }
        }
        assert_eq!(checked, 96);
    }
}
