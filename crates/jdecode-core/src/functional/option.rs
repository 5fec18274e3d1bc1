//! `bind`, `map` and `apply` over `Option<T>`.
//!
//! Absence is explicit and carries no cause. Every combinator propagates
//! `None` untouched and never invokes the supplied function on it.

/// Sequential composition: runs `f` on the contained value, if any.
///
/// `f` is never called when `a` is `None`.
///
/// # Examples
///
/// ```
/// use jdecode_core::functional::option::bind;
///
/// let first = |v: Vec<i32>| v.first().copied();
/// assert_eq!(bind(Some(vec![7, 8]), first), Some(7));
/// assert_eq!(bind(Some(Vec::new()), first), None);
/// assert_eq!(bind(None, first), None);
/// ```
#[inline]
pub fn bind<A, B>(a: Option<A>, f: impl FnOnce(A) -> Option<B>) -> Option<B> {
    match a {
        Some(x) => f(x),
        None => None,
    }
}

/// Lifts a plain function into the optional context.
///
/// # Examples
///
/// ```
/// use jdecode_core::functional::option::map;
///
/// assert_eq!(map(|n: i32| n + 1, Some(1)), Some(2));
/// assert_eq!(map(|n: i32| n + 1, None), None);
/// ```
#[inline]
pub fn map<A, B>(f: impl FnOnce(A) -> B, a: Option<A>) -> Option<B> {
    match a {
        Some(x) => Some(f(x)),
        None => None,
    }
}

/// Applies a contained function to a contained argument.
///
/// Present iff both `f` and `a` are present.
///
/// # Examples
///
/// ```
/// use jdecode_core::functional::{curry2, option::{apply, map}};
///
/// let add = curry2(|a: i32, b: i32| a + b);
/// assert_eq!(apply(map(add, Some(2)), Some(3)), Some(5));
///
/// let add = curry2(|a: i32, b: i32| a + b);
/// assert_eq!(apply(map(add, Some(2)), None), None);
/// ```
#[inline]
pub fn apply<A, B, F>(f: Option<F>, a: Option<A>) -> Option<B>
where
    F: FnOnce(A) -> B,
{
    match (f, a) {
        (Some(f), Some(x)) => Some(f(x)),
        _ => None,
    }
}
