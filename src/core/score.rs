use std::fmt;

/// Discrete value-for-money rating. Variants are ordered from best to worst
/// deal; a lower score always maps to an earlier variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreRating {
    Steal,
    GreatDeal,
    GoodDeal,
    AboveAverage,
    Average,
    BelowAverage,
    Bad,
    Overpriced,
}

/// Inclusive upper bounds of the finite buckets, ascending. Anything above
/// the last threshold is `Overpriced`.
const BUCKETS: [(f64, ScoreRating); 7] = [
    (35.0, ScoreRating::Steal),
    (40.0, ScoreRating::GreatDeal),
    (45.0, ScoreRating::GoodDeal),
    (50.0, ScoreRating::AboveAverage),
    (55.0, ScoreRating::Average),
    (60.0, ScoreRating::BelowAverage),
    (70.0, ScoreRating::Bad),
];

/// Maps a score to its rating bucket. Total over all finite inputs: the scan
/// returns at the first threshold the score does not exceed.
pub fn classify(score: f64) -> ScoreRating {
    for (bound, rating) in BUCKETS {
        if score <= bound {
            return rating;
        }
    }
    ScoreRating::Overpriced
}

impl ScoreRating {
    pub fn label(self) -> &'static str {
        match self {
            ScoreRating::Steal => "STEAL! Buy immediately!",
            ScoreRating::GreatDeal => "Great deal!",
            ScoreRating::GoodDeal => "Good deal",
            ScoreRating::AboveAverage => "Above average deal",
            ScoreRating::Average => "Average deal",
            ScoreRating::BelowAverage => "Below average",
            ScoreRating::Bad => "Bad deal",
            ScoreRating::Overpriced => "Overpriced",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreRating::Steal => "#39e9d6",
            ScoreRating::GreatDeal => "#1bb641",
            ScoreRating::GoodDeal => "#6db61b",
            ScoreRating::AboveAverage => "#a6ce1d",
            ScoreRating::Average => "#dcdc1c",
            ScoreRating::BelowAverage => "#dc9f1c",
            ScoreRating::Bad => "#dc391c",
            ScoreRating::Overpriced => "#af1c1c",
        }
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
