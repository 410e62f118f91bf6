//! Collision resolution for generated short codes.
//!
//! The resolver checks a candidate code against a caller-supplied existence
//! oracle (normally a storage lookup) and, on collision, derives replacement
//! candidates deterministically by appending a fixed suffix to the colliding
//! string and re-hashing. Uniqueness is ultimately enforced by the storage
//! layer's unique constraint; the resolver only optimizes for the common
//! zero-collision case.

use std::future::Future;

use crate::utils::code_generator::generate_code;

/// Maximum number of replacement candidates tried after the first collision.
pub const MAX_ATTEMPTS: usize = 10;

/// Suffix appended to the colliding string before re-hashing.
const RETRY_SUFFIX: char = '1';

/// Resolves a candidate code against an existence oracle.
///
/// Returns `candidate` unchanged when the oracle reports it free (the
/// overwhelming majority of calls). Otherwise derives up to [`MAX_ATTEMPTS`]
/// replacements by re-hashing the growing string `candidate + "1"`,
/// `candidate + "11"`, and so on, returning the first one the oracle
/// reports free.
///
/// When every attempt collides, the last-tried candidate is returned anyway:
/// exhaustion is a best-effort degradation, not an error, because the storage
/// layer's uniqueness constraint is the real guard. It is logged and counted
/// (`shortener_code_collision_exhausted`) so operators can see it happening.
pub async fn resolve<F, Fut>(candidate: String, mut exists: F) -> String
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = bool>,
{
    if !exists(candidate.clone()).await {
        return candidate;
    }

    let mut seed = candidate.clone();
    let mut code = candidate;

    for _ in 0..MAX_ATTEMPTS {
        seed.push(RETRY_SUFFIX);
        code = generate_code(&seed);

        if !exists(code.clone()).await {
            return code;
        }
    }

    tracing::warn!(code = %code, attempts = MAX_ATTEMPTS, "collision retries exhausted, deferring to storage constraint");
    metrics::counter!("shortener_code_collision_exhausted").increment(1);

    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_free_candidate_returned_unchanged() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in = calls.clone();

        let code = resolve("4ZyG5E7z".to_string(), move |_| {
            calls_in.fetch_add(1, Ordering::SeqCst);
            async { false }
        })
        .await;

        assert_eq!(code, "4ZyG5E7z");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retries_until_oracle_reports_free() {
        // First three candidates collide, the fourth is free.
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in = calls.clone();

        let code = resolve("4ZyG5E7z".to_string(), move |_| {
            let n = calls_in.fetch_add(1, Ordering::SeqCst);
            async move { n < 3 }
        })
        .await;

        // Third retry round: seed is the original candidate plus "111".
        assert_eq!(code, generate_code("4ZyG5E7z111"));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_retry_candidates_are_deterministic() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen_in = seen.clone();

        resolve("1BYWBNb1".to_string(), move |c| {
            seen_in.lock().unwrap().push(c);
            async { true }
        })
        .await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], "1BYWBNb1");
        assert_eq!(seen[1], generate_code("1BYWBNb11"));
        assert_eq!(seen[2], generate_code("1BYWBNb111"));
    }

    #[tokio::test]
    async fn test_exhaustion_terminates_and_returns_a_code() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in = calls.clone();

        let code = resolve("4ZyG5E7z".to_string(), move |_| {
            calls_in.fetch_add(1, Ordering::SeqCst);
            async { true }
        })
        .await;

        assert_eq!(code.len(), 8);
        // Initial check plus MAX_ATTEMPTS retries.
        assert_eq!(calls.load(Ordering::SeqCst), 1 + MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_retry_candidates_stay_in_code_space() {
        let seen = Arc::new(std::sync::Mutex::new(HashSet::new()));
        let seen_in = seen.clone();

        resolve("abcdefgh".to_string(), move |c| {
            seen_in.lock().unwrap().insert(c);
            async { true }
        })
        .await;

        for code in seen.lock().unwrap().iter() {
            assert_eq!(code.len(), 8);
        }
    }
}
