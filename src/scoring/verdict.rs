use crate::scoring::consts::{BONUS_POINTS, BONUS_RADIUS_KM, SUCCESS_RADIUS_KM};
use crate::scoring::distance::distance_km;
use crate::tasks::models::Task;

/// Outcome of comparing a guess with the true position of a task.
#[derive(Clone, Debug, PartialEq)]
pub struct Verdict {
    pub success: bool,
    /// Distance rounded to two decimals.
    pub distance_km: f64,
    pub bonus_points: u64,
    pub message: String,
}

impl Verdict {
    /// Thresholds apply to the exact distance; only the reported value is rounded.
    pub fn from_distance(distance_km: f64) -> Self {
        let success = distance_km < SUCCESS_RADIUS_KM;
        let bonus_points = if distance_km <= BONUS_RADIUS_KM {
            BONUS_POINTS
        } else {
            0
        };
        let reported_km = round_to_hundredths(distance_km);
        let message = if success {
            format!("Task completed! You were {reported_km:.2} km away.")
        } else {
            format!("Not close enough. You are {reported_km:.2} km away. Keep searching!")
        };
        Verdict {
            success,
            distance_km: reported_km,
            bonus_points,
            message,
        }
    }
}

pub fn evaluate(player_lat: f64, player_lon: f64, task: &Task) -> Verdict {
    let distance = distance_km(player_lat, player_lon, task.latitude, task.longitude);
    Verdict::from_distance(distance)
}

/// Rounds from the exact decimal expansion, so exact ties go to the even digit.
fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn eiffel_tower() -> Task {
        Task {
            name: String::from("Eiffel Tower"),
            latitude: 48.8584,
            longitude: 2.2945,
        }
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(99.999, true)]
    #[case(100.0, false)]
    #[case(100.001, false)]
    #[case(20_000.0, false)]
    fn test_success_threshold_is_strict(#[case] distance: f64, #[case] success: bool) {
        assert_eq!(Verdict::from_distance(distance).success, success);
    }

    #[rstest]
    #[case(0.0, 50)]
    #[case(9.999, 50)]
    #[case(10.0, 50)]
    #[case(10.001, 0)]
    #[case(99.0, 0)]
    fn test_bonus_threshold_is_inclusive(#[case] distance: f64, #[case] bonus_points: u64) {
        assert_eq!(Verdict::from_distance(distance).bonus_points, bonus_points);
    }

    #[test]
    fn test_thresholds_use_unrounded_distance() {
        // Rounds to 100.00 for display but is still inside the radius.
        let verdict = Verdict::from_distance(99.996);

        assert!(verdict.success);
        assert_eq!(verdict.distance_km, 100.0);
    }

    #[test]
    fn test_exact_guess_on_the_eiffel_tower() {
        let verdict = evaluate(48.8584, 2.2945, &eiffel_tower());

        assert_eq!(
            verdict,
            Verdict {
                success: true,
                distance_km: 0.0,
                bonus_points: 50,
                message: String::from("Task completed! You were 0.00 km away."),
            }
        );
    }

    #[test]
    fn test_guess_150_km_away_fails_without_bonus() {
        // 150 km due north along a meridian.
        let offset_deg = 150.0 / crate::scoring::consts::EARTH_RADIUS_KM * 180.0
            / std::f64::consts::PI;
        let task = eiffel_tower();

        let verdict = evaluate(task.latitude + offset_deg, task.longitude, &task);

        assert!(!verdict.success);
        assert_eq!(verdict.bonus_points, 0);
        assert_eq!(verdict.distance_km, 150.0);
        assert_eq!(
            verdict.message,
            "Not close enough. You are 150.00 km away. Keep searching!",
        );
    }

    #[rstest]
    #[case(0.125, 0.12, "0.12")]
    #[case(12.125, 12.12, "12.12")]
    #[case(0.375, 0.38, "0.38")]
    fn test_reported_distance_matches_message_on_ties(
        #[case] distance: f64,
        #[case] reported: f64,
        #[case] shown: &str,
    ) {
        let verdict = Verdict::from_distance(distance);

        assert_eq!(verdict.distance_km, reported);
        assert_eq!(
            verdict.message,
            format!("Task completed! You were {shown} km away.")
        );
    }

    #[test]
    fn test_distance_is_rounded_to_two_decimals() {
        assert_eq!(Verdict::from_distance(12.3456).distance_km, 12.35);
        assert_eq!(Verdict::from_distance(12.3449).distance_km, 12.34);
    }
}
