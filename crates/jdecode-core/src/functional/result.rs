//! `bind`, `map` and `apply` over `Result<T, E>`.
//!
//! Same shape as [`super::option`], but a failure keeps its cause. When
//! several inputs fail, the leftmost failure wins, so the reported error is
//! always the first one in evaluation order.

/// Sequential composition: runs `f` on the success value, if any.
///
/// `f` is never called on `Err`.
#[inline]
pub fn bind<A, B, E>(a: Result<A, E>, f: impl FnOnce(A) -> Result<B, E>) -> Result<B, E> {
    match a {
        Ok(x) => f(x),
        Err(e) => Err(e),
    }
}

/// Lifts a plain function over a success value.
#[inline]
pub fn map<A, B, E>(f: impl FnOnce(A) -> B, a: Result<A, E>) -> Result<B, E> {
    match a {
        Ok(x) => Ok(f(x)),
        Err(e) => Err(e),
    }
}

/// Applies a contained function to a contained argument.
///
/// Succeeds iff both sides succeed. If `f` already failed its error is
/// returned and `a` is discarded unexamined.
///
/// # Examples
///
/// ```
/// use jdecode_core::functional::{curry2, result::{apply, map}};
///
/// let pair = curry2(|a: u8, b: u8| (a, b));
/// let left: Result<u8, &str> = Err("left");
/// let right: Result<u8, &str> = Err("right");
/// assert_eq!(apply(map(pair, left), right), Err("left"));
/// ```
#[inline]
pub fn apply<A, B, E, F>(f: Result<F, E>, a: Result<A, E>) -> Result<B, E>
where
    F: FnOnce(A) -> B,
{
    match (f, a) {
        (Ok(f), Ok(x)) => Ok(f(x)),
        (Err(e), _) | (Ok(_), Err(e)) => Err(e),
    }
}

/// Attaches a cause to an absent value, bridging `Option` into `Result`.
#[inline]
pub fn require<T, E>(a: Option<T>, cause: impl FnOnce() -> E) -> Result<T, E> {
    match a {
        Some(x) => Ok(x),
        None => Err(cause()),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::functional::curry3;

    #[test]
    fn test_bind_skips_f_on_err() {
        let calls = Cell::new(0);
        let result: Result<i32, &str> = bind(Err("boom"), |x: i32| {
            calls.set(calls.get() + 1);
            Ok(x)
        });
        assert_eq!(result, Err("boom"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_map_preserves_error() {
        let result: Result<i32, &str> = map(|x: i32| x + 1, Err("kept"));
        assert_eq!(result, Err("kept"));
    }

    #[test]
    fn test_apply_reports_leftmost_failure() {
        let triple = |a: i32, b: i32, c: i32| a + b + c;
        let result = apply(
            apply(map(curry3(triple), Ok(1)), Err("second")),
            Err("third"),
        );
        assert_eq!(result, Err("second"));
    }

    #[test]
    fn test_apply_all_ok() {
        let triple = |a: i32, b: i32, c: i32| a * b * c;
        let result: Result<i32, &str> =
            apply(apply(map(curry3(triple), Ok(2)), Ok(3)), Ok(4));
        assert_eq!(result, Ok(24));
    }

    #[test]
    fn test_require_bridges_option() {
        assert_eq!(require(Some(1), || "absent"), Ok(1));
        assert_eq!(require(None::<i32>, || "absent"), Err("absent"));
    }
}
