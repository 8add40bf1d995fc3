use serde::{Deserialize, Serialize};

/// Qualitative band for a 0–100 match score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Excellent, // ≥ 80
    Good,      // 60 – 79
    Basic,     // 40 – 59
    Low,       // < 40
}

impl Feedback {
    pub fn message(self) -> &'static str {
        match self {
            Feedback::Excellent => {
                "Excellent match! Your skills align strongly with the required keywords for this role."
            }
            Feedback::Good => {
                "Good potential. Your profile shows good alignment. Consider highlighting more relevant skills."
            }
            Feedback::Basic => {
                "Basic alignment. You meet some core requirements. Focus on bridging the skill gaps."
            }
            Feedback::Low => {
                "Low match. A significant gap exists between your resume and the target role's requirements."
            }
        }
    }
}

/// Maps a score to its feedback band.
pub fn classify(score: u32) -> Feedback {
    if score >= 80 {
        Feedback::Excellent
    } else if score >= 60 {
        Feedback::Good
    } else if score >= 40 {
        Feedback::Basic
    } else {
        Feedback::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify(100), Feedback::Excellent);
        assert_eq!(classify(80), Feedback::Excellent);
        assert_eq!(classify(79), Feedback::Good);
        assert_eq!(classify(60), Feedback::Good);
        assert_eq!(classify(59), Feedback::Basic);
        assert_eq!(classify(40), Feedback::Basic);
        assert_eq!(classify(39), Feedback::Low);
        assert_eq!(classify(0), Feedback::Low);
    }

    #[test]
    fn test_messages_start_with_band_label() {
        assert!(classify(80).message().starts_with("Excellent match!"));
        assert!(classify(79).message().starts_with("Good potential."));
        assert!(classify(40).message().starts_with("Basic alignment."));
        assert!(classify(39).message().starts_with("Low match."));
    }

    #[test]
    fn test_bands_never_improve_as_score_drops() {
        let rank = |f: Feedback| match f {
            Feedback::Excellent => 3,
            Feedback::Good => 2,
            Feedback::Basic => 1,
            Feedback::Low => 0,
        };
        for s in 1..=100 {
            assert!(rank(classify(s - 1)) <= rank(classify(s)));
        }
    }

    #[test]
    fn test_feedback_serde_snake_case() {
        let json = serde_json::to_string(&Feedback::Excellent).unwrap();
        assert_eq!(json, r#""excellent""#);
    }
}
