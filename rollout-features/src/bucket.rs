//! User bucketing
//!
//! A user id is hashed with CRC-32 (IEEE, reflected polynomial `0xEDB88320`)
//! and reduced modulo [`BUCKET_COUNT`]. There is no seed, so a given id lands
//! in the same bucket on every call and across restarts.

/// Number of buckets users are spread over
pub const BUCKET_COUNT: u32 = 100;

/// CRC-32 checksum of the raw bytes of `user_id`
#[inline]
pub fn checksum(user_id: &str) -> u32 {
    crc32fast::hash(user_id.as_bytes())
}

/// Bucket (0-99) that `user_id` falls into
#[inline]
pub fn bucket(user_id: &str) -> u32 {
    checksum(user_id) % BUCKET_COUNT
}

/// Check whether `user_id` is inside a rollout of `percentage`
///
/// True iff `percentage` is strictly greater than the user's bucket, so 0
/// includes nobody and 100 includes everybody. Raising the percentage only
/// ever adds users. A NaN percentage includes nobody.
#[inline]
pub fn in_rollout(percentage: f64, user_id: &str) -> bool {
    percentage > f64::from(bucket(user_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_matches_ieee_crc32() {
        // Standard CRC-32 check value
        assert_eq!(checksum("123456789"), 0xCBF4_3926);
        assert_eq!(checksum(""), 0);
    }

    #[test]
    fn test_known_buckets() {
        assert_eq!(bucket("d0b7b9df-9fa8-4f72-885b-3f1cd0d705d5"), 61);
        assert_eq!(bucket("8975b460-4446-4af2-965a-ba020092e1ca"), 25);
        assert_eq!(bucket("123456789"), 62);
    }

    #[test]
    fn test_threshold_is_strict() {
        // bucket("8975b460-...") == 25
        let id = "8975b460-4446-4af2-965a-ba020092e1ca";
        assert!(!in_rollout(25.0, id));
        assert!(in_rollout(25.5, id));
        assert!(in_rollout(26.0, id));
    }

    #[test]
    fn test_out_of_range_percentages() {
        for i in 0..200 {
            let id = format!("user-{}", i);
            assert!(in_rollout(100.0, &id));
            assert!(in_rollout(250.0, &id));
            assert!(!in_rollout(0.0, &id));
            assert!(!in_rollout(-10.0, &id));
            assert!(!in_rollout(f64::NAN, &id));
        }
    }

    #[test]
    fn test_distribution_is_roughly_uniform() {
        let included = (0..10_000)
            .filter(|i| in_rollout(50.0, &format!("user-{}", i)))
            .count();

        assert!((4_500..=5_500).contains(&included));
    }
}
