//! Functional programming patterns and utilities.
//!
//! Three combinators make fallible computation composable without manual
//! branching:
//!
//! - **bind**: sequence two fallible steps, short-circuiting on failure
//! - **map**: lift a plain function into the container
//! - **apply**: feed a contained argument to a contained function
//!
//! [`option`] implements them for `Option<T>` (absence carries no cause) and
//! [`result`] for `Result<T, E>` (the first failure cause is preserved).
//! [`curry`] partially binds multi-argument constructors so they can be
//! threaded through `map` and `apply` one argument at a time.

pub mod curry;
pub mod option;
pub mod result;

pub use curry::{curry2, curry3};

/// Composes two fallible `Option` steps into one.
///
/// `compose(f, g)(x)` is `option::bind(f(x), g)`: `g` only runs when `f`
/// produced a value.
pub fn compose<A, B, C>(
    f: impl Fn(A) -> Option<B>,
    g: impl Fn(B) -> Option<C>,
) -> impl Fn(A) -> Option<C> {
    move |x| option::bind(f(x), &g)
}
