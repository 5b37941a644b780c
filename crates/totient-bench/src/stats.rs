//! Timing samples and the statistics derived from them.

use std::time::Duration;

use serde::{Serialize, Serializer};

/// One elapsed-time measurement of a single `compute` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimingSample {
    /// 0-based position of the run within its `run_n` call.
    pub iteration: u32,
    #[serde(rename = "seconds", serialize_with = "as_secs_f64")]
    pub duration: Duration,
}

/// Summary statistics over a set of durations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub count: u32,
    #[serde(serialize_with = "as_secs_f64")]
    pub min: Duration,
    #[serde(serialize_with = "as_secs_f64")]
    pub max: Duration,
    #[serde(serialize_with = "as_secs_f64")]
    pub mean: Duration,
    #[serde(serialize_with = "as_secs_f64")]
    pub median: Duration,
    /// Population standard deviation.
    #[serde(serialize_with = "as_secs_f64")]
    pub std_dev: Duration,
}

impl Statistics {
    /// Compute statistics over `durations`. Returns `None` when empty.
    #[must_use]
    pub fn from_durations(durations: &[Duration]) -> Option<Self> {
        let count = u32::try_from(durations.len()).ok().filter(|&c| c > 0)?;

        let mut sorted = durations.to_vec();
        sorted.sort();

        let min = sorted[0];
        let max = sorted[sorted.len() - 1];
        let median = if sorted.len() % 2 == 1 {
            sorted[sorted.len() / 2]
        } else {
            let mid = sorted.len() / 2;
            (sorted[mid - 1] + sorted[mid]) / 2
        };
        let total: Duration = sorted.iter().sum();
        let mean = total / count;

        let mean_secs = mean.as_secs_f64();
        let variance = sorted
            .iter()
            .map(|d| {
                let diff = d.as_secs_f64() - mean_secs;
                diff * diff
            })
            .sum::<f64>()
            / f64::from(count);

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            std_dev: Duration::from_secs_f64(variance.sqrt()),
        })
    }

    /// Compute statistics over the durations of `samples`.
    #[must_use]
    pub fn from_samples(samples: &[TimingSample]) -> Option<Self> {
        let durations: Vec<Duration> = samples.iter().map(|s| s.duration).collect();
        Self::from_durations(&durations)
    }
}

/// Serialize a `Duration` as fractional seconds.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn as_secs_f64<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(d.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn empty_has_no_statistics() {
        assert!(Statistics::from_durations(&[]).is_none());
        assert!(Statistics::from_samples(&[]).is_none());
    }

    #[test]
    fn single_sample() {
        let stats = Statistics::from_durations(&[ms(7)]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, ms(7));
        assert_eq!(stats.max, ms(7));
        assert_eq!(stats.mean, ms(7));
        assert_eq!(stats.median, ms(7));
        assert_eq!(stats.std_dev, Duration::ZERO);
    }

    #[test]
    fn odd_count_median_and_mean() {
        let stats = Statistics::from_durations(&[ms(30), ms(10), ms(20)]).unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, ms(10));
        assert_eq!(stats.max, ms(30));
        assert_eq!(stats.median, ms(20));
        assert_eq!(stats.mean, ms(20));
    }

    #[test]
    fn even_count_median_is_midpoint() {
        let stats = Statistics::from_durations(&[ms(40), ms(10), ms(20), ms(30)]).unwrap();
        assert_eq!(stats.median, ms(25));
        assert_eq!(stats.mean, ms(25));
    }

    #[test]
    fn std_dev_population() {
        // values 2,4,4,4,5,5,7,9 have population std dev 2
        let stats = Statistics::from_durations(
            &[2, 4, 4, 4, 5, 5, 7, 9].map(Duration::from_secs),
        )
        .unwrap();
        assert!((stats.std_dev.as_secs_f64() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn ordering_invariants() {
        let stats =
            Statistics::from_durations(&[ms(3), ms(1), ms(4), ms(1), ms(5), ms(9)]).unwrap();
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        assert!(stats.min <= stats.median && stats.median <= stats.max);
    }

    #[test]
    fn from_samples_uses_durations() {
        let samples = [
            TimingSample {
                iteration: 0,
                duration: ms(5),
            },
            TimingSample {
                iteration: 1,
                duration: ms(15),
            },
        ];
        let stats = Statistics::from_samples(&samples).unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, ms(10));
    }

    #[test]
    fn serializes_durations_as_seconds() {
        let sample = TimingSample {
            iteration: 2,
            duration: Duration::from_millis(1500),
        };
        let json = serde_json::to_value(sample).unwrap();
        assert_eq!(json["iteration"], 2);
        assert_eq!(json["seconds"], 1.5);
    }
}
