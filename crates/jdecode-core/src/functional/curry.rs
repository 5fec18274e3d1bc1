//! Partial application for multi-argument constructors.
//!
//! `apply` feeds one argument at a time, so an `n`-ary constructor has to be
//! turned into a chain of one-argument closures first. The closures are boxed
//! because each stage captures the arguments already supplied.

/// One-argument closure produced by currying.
pub type Stage<'a, A, B> = Box<dyn FnOnce(A) -> B + 'a>;

/// A curried two-argument function: `A -> B -> C`.
pub type Curried2<'a, A, B, C> = Stage<'a, A, Stage<'a, B, C>>;

/// A curried three-argument function: `A -> B -> C -> D`.
pub type Curried3<'a, A, B, C, D> = Stage<'a, A, Stage<'a, B, Stage<'a, C, D>>>;

/// Curries a two-argument function.
///
/// ```
/// use jdecode_core::functional::curry2;
///
/// let add = curry2(|a: i32, b: i32| a + b);
/// assert_eq!(add(1)(2), 3);
/// ```
pub fn curry2<'a, A, B, C, F>(f: F) -> Curried2<'a, A, B, C>
where
    A: 'a,
    F: FnOnce(A, B) -> C + 'a,
{
    Box::new(move |a: A| -> Stage<'a, B, C> { Box::new(move |b: B| f(a, b)) })
}

/// Curries a three-argument function.
///
/// ```
/// use jdecode_core::functional::curry3;
///
/// let join = curry3(|a: &str, b: &str, c: &str| format!("{a}{b}{c}"));
/// assert_eq!(join("x")("y")("z"), "xyz");
/// ```
pub fn curry3<'a, A, B, C, D, F>(f: F) -> Curried3<'a, A, B, C, D>
where
    A: 'a,
    B: 'a,
    F: FnOnce(A, B, C) -> D + 'a,
{
    Box::new(move |a: A| -> Curried2<'a, B, C, D> {
        Box::new(move |b: B| -> Stage<'a, C, D> { Box::new(move |c: C| f(a, b, c)) })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curry2_equals_direct_call() {
        let sub = |a: i32, b: i32| a - b;
        assert_eq!(curry2(sub)(10)(3), sub(10, 3));
    }

    #[test]
    fn test_curry3_preserves_argument_order() {
        let triple = |a: u8, b: u8, c: u8| (a, b, c);
        assert_eq!(curry3(triple)(1)(2)(3), (1, 2, 3));
    }

    #[test]
    fn test_curry_borrows_non_static_arguments() {
        let owned = String::from("borrowed");
        let pick = curry2(|a: &str, b: usize| a.len() + b);
        assert_eq!(pick(owned.as_str())(2), 10);
    }
}
