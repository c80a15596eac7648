use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed rating vocabulary shared by the three evaluation criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Average,
    Poor,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Average => "Average",
            Rating::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid rating provided. Ratings must be Excellent, Average, or Poor")]
pub struct InvalidRating(pub String);

impl std::str::FromStr for Rating {
    type Err = InvalidRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Excellent" => Ok(Rating::Excellent),
            "Average" => Ok(Rating::Average),
            "Poor" => Ok(Rating::Poor),
            other => Err(InvalidRating(other.to_string())),
        }
    }
}

/// The three criteria plus the missed-days count. Constructing one
/// enforces the coupling: missed days are required exactly when presence
/// is Poor, and can never be negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRatings {
    pub discipline: Rating,
    pub interest: Rating,
    pub presence: Rating,
    pub missed_days: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RatingsError {
    #[error("Discipline, interest, and presence ratings are required for validation")]
    MissingRating,

    #[error("{0}")]
    InvalidRating(#[from] InvalidRating),

    #[error("Number of missed days is required when presence is Poor")]
    MissedDaysRequired,

    #[error("Number of missed days must be a non-negative number")]
    NegativeMissedDays,
}

impl EvaluationRatings {
    pub fn new(
        discipline: Option<&str>,
        interest: Option<&str>,
        presence: Option<&str>,
        missed_days: Option<i32>,
    ) -> Result<Self, RatingsError> {
        use std::str::FromStr;

        let (discipline, interest, presence) = match (discipline, interest, presence) {
            (Some(d), Some(i), Some(p)) => (
                Rating::from_str(d)?,
                Rating::from_str(i)?,
                Rating::from_str(p)?,
            ),
            _ => return Err(RatingsError::MissingRating),
        };

        if let Some(days) = missed_days {
            if days < 0 {
                return Err(RatingsError::NegativeMissedDays);
            }
        }

        if presence == Rating::Poor && missed_days.is_none() {
            return Err(RatingsError::MissedDaysRequired);
        }

        Ok(Self {
            discipline,
            interest,
            presence,
            missed_days,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub id: i32,
    pub internship_id: i32,
    pub supervisor_id: i32,
    pub evaluated_on: NaiveDate,
    pub missed_days: Option<i32>,
    pub comments: Option<String>,
    pub discipline: Option<Rating>,
    pub interest: Option<Rating>,
    pub presence: Option<Rating>,
    pub validated_by: Option<i32>,
    pub validated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Department-head queue row with the display context joined in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingEvaluationItem {
    pub evaluation_id: i32,
    pub internship_id: i32,
    pub evaluated_on: NaiveDate,
    pub missed_days: Option<i32>,
    pub comments: Option<String>,
    pub discipline: Option<String>,
    pub interest: Option<String>,
    pub presence: Option<String>,
    pub supervisor_id: i32,
    pub supervisor_name: Option<String>,
    pub student_first_name: Option<String>,
    pub student_last_name: Option<String>,
    pub subject_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_accept_the_full_set() {
        let ratings = EvaluationRatings::new(
            Some("Excellent"),
            Some("Average"),
            Some("Excellent"),
            None,
        )
        .unwrap();

        assert_eq!(ratings.discipline, Rating::Excellent);
        assert_eq!(ratings.missed_days, None);
    }

    #[test]
    fn poor_presence_requires_missed_days() {
        let result =
            EvaluationRatings::new(Some("Excellent"), Some("Excellent"), Some("Poor"), None);

        assert!(matches!(result, Err(RatingsError::MissedDaysRequired)));
    }

    #[test]
    fn poor_presence_with_missed_days_passes() {
        let ratings = EvaluationRatings::new(
            Some("Excellent"),
            Some("Excellent"),
            Some("Poor"),
            Some(2),
        )
        .unwrap();

        assert_eq!(ratings.missed_days, Some(2));
    }

    #[test]
    fn negative_missed_days_are_rejected() {
        let result = EvaluationRatings::new(
            Some("Excellent"),
            Some("Excellent"),
            Some("Poor"),
            Some(-1),
        );

        assert!(matches!(result, Err(RatingsError::NegativeMissedDays)));
    }

    #[test]
    fn missing_criterion_is_rejected() {
        let result = EvaluationRatings::new(Some("Excellent"), None, Some("Average"), None);
        assert!(matches!(result, Err(RatingsError::MissingRating)));
    }

    #[test]
    fn unknown_rating_word_is_rejected() {
        let result =
            EvaluationRatings::new(Some("Great"), Some("Average"), Some("Average"), None);
        assert!(matches!(result, Err(RatingsError::InvalidRating(_))));
    }
}
