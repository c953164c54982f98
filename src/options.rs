//! Advisor configuration options.

use core::fmt;
use core::str::FromStr;

use crate::error::UnknownRanking;

/// Statistic used to order ranked recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Ranking {
    /// Highest mean score first.
    #[default]
    Mean,
    /// Highest median score first.
    Median,
    /// Highest maximum score first.
    Max,
    /// Highest minimum score first.
    Min,
}

impl Ranking {
    /// All rankings.
    pub const ALL: [Self; 4] = [Self::Mean, Self::Median, Self::Max, Self::Min];

    /// Returns the lowercase name of the ranking.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Max => "max",
            Self::Min => "min",
        }
    }
}

impl FromStr for Ranking {
    type Err = UnknownRanking;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ranking| ranking.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownRanking)
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration options for a discard advisor.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::{AdvisorOptions, Ranking};
///
/// let options = AdvisorOptions::default()
///     .with_ranking(Ranking::Max)
///     .with_top(5)
///     .with_precision(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisorOptions {
    /// Statistic used to order the ranked recommendations.
    pub ranking: Ranking,
    /// Number of ranked recommendations to keep (at most 15).
    pub top: usize,
    /// Decimal places used when displaying mean scores.
    pub precision: u8,
}

impl Default for AdvisorOptions {
    fn default() -> Self {
        Self {
            ranking: Ranking::Mean,
            top: 3,
            precision: 2,
        }
    }
}

impl AdvisorOptions {
    /// Sets the ranking statistic.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{AdvisorOptions, Ranking};
    ///
    /// let options = AdvisorOptions::default().with_ranking(Ranking::Median);
    /// assert_eq!(options.ranking, Ranking::Median);
    /// ```
    #[must_use]
    pub const fn with_ranking(mut self, ranking: Ranking) -> Self {
        self.ranking = ranking;
        self
    }

    /// Sets how many ranked recommendations to keep.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::AdvisorOptions;
    ///
    /// let options = AdvisorOptions::default().with_top(15);
    /// assert_eq!(options.top, 15);
    /// ```
    #[must_use]
    pub const fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    /// Sets the display precision of mean scores.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::AdvisorOptions;
    ///
    /// let options = AdvisorOptions::default().with_precision(0);
    /// assert_eq!(options.precision, 0);
    /// ```
    #[must_use]
    pub const fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }
}
