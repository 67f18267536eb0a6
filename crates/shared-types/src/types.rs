use std::cmp::Ordering;

/// Outcome of a single check, ordered `Pass < Warning < Error`.
///
/// Serialized as its rank (`0`, `1`, `2`); the results page switches on the
/// numeric status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Pass,
    Warning,
    Error,
}

impl Severity {
    /// Explicit rank used for ordering; independent of declaration order.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Pass => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Severity::Pass),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            _ => None,
        }
    }
}

impl serde::Serialize for Severity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.rank())
    }
}

impl<'de> serde::Deserialize<'de> for Severity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rank = <u8 as serde::Deserialize>::deserialize(deserializer)?;
        Severity::from_rank(rank).ok_or_else(|| {
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Unsigned(u64::from(rank)),
                &"a severity rank of 0, 1 or 2",
            )
        })
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Pass => "Pass",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        };
        f.write_str(label)
    }
}

/// A single diagnostic emitted by a check.
///
/// `comments` carries every detail needed to act on the result (slide
/// number, expected and provided text, similarity score).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CheckResult {
    pub title: String,
    pub status: Severity,
    pub comments: String,
}

impl CheckResult {
    pub fn new(title: impl Into<String>, status: Severity, comments: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status,
            comments: comments.into(),
        }
    }

    pub fn pass(title: impl Into<String>, comments: impl Into<String>) -> Self {
        Self::new(title, Severity::Pass, comments)
    }

    pub fn warning(title: impl Into<String>, comments: impl Into<String>) -> Self {
        Self::new(title, Severity::Warning, comments)
    }

    pub fn error(title: impl Into<String>, comments: impl Into<String>) -> Self {
        Self::new(title, Severity::Error, comments)
    }
}

/// Results for one uploaded deck.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FileResults {
    pub filename: String,
    pub results: Vec<CheckResult>,
}

/// Sorts results worst-first (Error, Warning, Pass). Stable: ties keep
/// emission order.
pub fn sort_worst_first(results: &mut [CheckResult]) {
    results.sort_by(|a, b| b.status.cmp(&a.status));
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn severity_strategy() -> impl Strategy<Value = Severity> {
        prop_oneof![
            Just(Severity::Pass),
            Just(Severity::Warning),
            Just(Severity::Error),
        ]
    }

    proptest! {
        /// Property: after sorting, severities never increase
        #[test]
        fn sorted_results_are_worst_first(
            statuses in prop::collection::vec(severity_strategy(), 0..40),
        ) {
            let mut results: Vec<CheckResult> = statuses
                .iter()
                .enumerate()
                .map(|(i, s)| CheckResult::new(format!("check {}", i), *s, ""))
                .collect();
            sort_worst_first(&mut results);

            for pair in results.windows(2) {
                prop_assert!(pair[0].status >= pair[1].status);
            }
            prop_assert_eq!(results.len(), statuses.len());
        }
    }
}
