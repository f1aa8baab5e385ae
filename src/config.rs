use anyhow::{Context, Result};

/// Topic count to use when the framework supplies no explicit argument.
pub const DEFAULT_NUM_TOPICS: usize = 5;

/// Training arguments parsed at `open` time from the framework's
/// positional argument list.
///
/// The first argument is reserved by the framework; the second, when
/// present, is the topic count. Fewer than two arguments means the
/// default topic count — but a second argument that does not parse as an
/// integer is an error, never a silent default. The two paths are
/// deliberately asymmetric; downstream jobs rely on a bad argument
/// failing loudly.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TrainingConfig {
    pub num_topics: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_topics: DEFAULT_NUM_TOPICS,
        }
    }
}

impl TrainingConfig {
    /// Parse the framework argument list.
    ///
    /// A zero topic count parses fine here and fails later, inside
    /// training, like any other degenerate hyperparameter.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let num_topics = match args.get(1) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("invalid topic count argument: {raw:?}"))?,
            None => DEFAULT_NUM_TOPICS,
        };
        Ok(Self { num_topics })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_when_fewer_than_two_args() {
        assert_eq!(TrainingConfig::from_args(&[]).unwrap().num_topics, 5);
        assert_eq!(
            TrainingConfig::from_args(&args(&["reserved"])).unwrap().num_topics,
            5
        );
    }

    #[test]
    fn parses_second_arg_as_topic_count() {
        let cfg = TrainingConfig::from_args(&args(&["reserved", "12"])).unwrap();
        assert_eq!(cfg.num_topics, 12);
    }

    #[test]
    fn malformed_second_arg_is_an_error() {
        let err = TrainingConfig::from_args(&args(&["reserved", "abc"])).unwrap_err();
        assert!(err.to_string().contains("invalid topic count"));
    }

    #[test]
    fn negative_second_arg_is_an_error() {
        assert!(TrainingConfig::from_args(&args(&["reserved", "-3"])).is_err());
    }

    #[test]
    fn zero_parses_and_is_deferred_to_training() {
        let cfg = TrainingConfig::from_args(&args(&["reserved", "0"])).unwrap();
        assert_eq!(cfg.num_topics, 0);
    }
}
