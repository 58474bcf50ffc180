//! Numeric helpers and the priority-score heuristic.
//!
//! All functions are pure. The score only biases a task's priority at
//! creation time; it is never stored on the task.

use thiserror::Error;

use crate::model::Priority;

/// Score above which a new task is promoted to `High`.
pub const HIGH_PRIORITY_THRESHOLD: u32 = 50;
/// Score below which a new task is demoted to `Low`.
pub const LOW_PRIORITY_THRESHOLD: u32 = 20;

/// Keyword bonuses, checked independently against the lowercased text.
const KEYWORD_BONUSES: &[(&str, u32)] = &[("urgent", 30), ("important", 20), ("high", 15)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Invalid argument: factorial of negative number {0}")]
    InvalidArgument(i64),

    #[error("Overflow: factorial of {0} does not fit in 64 bits")]
    Overflow(i64),
}

/// `n!` for `n >= 0`.
///
/// # Errors
/// `InvalidArgument` for negative `n`, `Overflow` once the product exceeds `u64` (n > 20).
pub fn factorial(n: i64) -> Result<u64, ScoringError> {
    if n < 0 {
        return Err(ScoringError::InvalidArgument(n));
    }
    let mut result: u64 = 1;
    for i in 2..=n as u64 {
        result = result.checked_mul(i).ok_or(ScoringError::Overflow(n))?;
    }
    Ok(result)
}

/// n-th Fibonacci number, computed iteratively. `0` for `n <= 0`.
///
/// Saturates at `u64::MAX` past F(93).
pub fn fibonacci(n: i64) -> u64 {
    if n <= 0 {
        return 0;
    }
    if n <= 2 {
        return 1;
    }
    let (mut a, mut b) = (1u64, 1u64);
    for _ in 3..=n {
        let next = a.saturating_add(b);
        a = b;
        b = next;
    }
    b
}

/// Trial division by odd divisors up to `sqrt(n)`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Reverse by Unicode scalar value, so multi-byte characters stay intact.
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

pub fn array_sum(xs: &[i32]) -> i64 {
    xs.iter().map(|&x| i64::from(x)).sum()
}

/// Greatest common divisor of the absolute values.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Least common multiple; `0` if either argument is `0`.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b) * b).abs()
}

/// Heuristic score over a task's text.
///
/// `factorial(len(title) % 10) % 50` plus a bonus for each keyword found in
/// `lowercase(title + " " + description)`. Lengths count characters; an empty
/// title contributes no base.
pub fn priority_score(title: &str, description: &str) -> u32 {
    let title_len = title.chars().count() as i64;
    let base = if title_len > 0 {
        // The argument is at most 9, so factorial cannot fail here.
        factorial(title_len % 10).map(|f| (f % 50) as u32).unwrap_or(0)
    } else {
        0
    };

    let combined = format!("{} {}", title, description).to_lowercase();
    let bonus: u32 = KEYWORD_BONUSES
        .iter()
        .filter(|(keyword, _)| combined.contains(keyword))
        .map(|(_, points)| points)
        .sum();

    base + bonus
}

/// Fixed policy table mapping a score onto the requested priority.
///
/// Both thresholds are exclusive: a score of exactly 50 or 20 keeps the request.
pub fn adjust_priority(requested: Priority, score: u32) -> Priority {
    if score > HIGH_PRIORITY_THRESHOLD && requested != Priority::High {
        Priority::High
    } else if score < LOW_PRIORITY_THRESHOLD && requested != Priority::Low {
        Priority::Low
    } else {
        requested
    }
}
