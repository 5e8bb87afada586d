//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// Combined with the curried functions of
/// [`outcome::pipeable`](crate::outcome::pipeable), this gives a data-flow
/// style for outcome pipelines where each step reads in the order it runs.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Each function only needs to implement [`FnOnce`].
///
/// # Examples
///
/// ```
/// use resultflow::outcome::{Outcome, pipeable};
/// use resultflow::pipe;
///
/// fn non_negative(n: i32) -> Outcome<String, i32> {
///     if n >= 0 { Outcome::success(n) } else { Outcome::failure(format!("{n} is negative")) }
/// }
///
/// let outcome = pipe!(
///     Outcome::<String, i32>::success(4),
///     pipeable::map(|n: i32| n - 10),
///     pipeable::flat_map(non_negative),
/// );
/// assert_eq!(outcome, Outcome::Failure("-6 is negative".to_string()));
/// ```
///
/// Plain functions mix freely with pipeable ones:
///
/// ```
/// use resultflow::outcome::{Outcome, pipeable};
/// use resultflow::pipe;
///
/// fn player_name(id: u32) -> Option<&'static str> {
///     (id == 1).then_some("ada")
/// }
///
/// let greeting = pipe!(
///     1,
///     player_name,
///     pipeable::from_nullable("unknown player"),
///     pipeable::map(|name: &str| format!("hello, {name}")),
///     pipeable::fold(str::to_string, |greeting: String| greeting),
/// );
/// assert_eq!(greeting, "hello, ada");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
