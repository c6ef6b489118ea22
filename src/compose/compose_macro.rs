//! The `compose!` macro, the variadic form of `compose2`..`compose9`.

/// Composes any number of functions from left to right.
///
/// `compose!(f, g, h)(x)` is equivalent to `h(g(f(x)))`, which is also what
/// [`compose3`](crate::compose::compose3)`(f, g, h)(x)` computes. The first
/// function listed is applied first.
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `move |x| g(f(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use funk::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // double runs after add_one
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 12);
/// ```
///
/// Types change from stage to stage:
///
/// ```
/// use funk::compose;
///
/// let composed = compose!(|x: i32| x.to_string(), |s: String| s.len(), |n: usize| n * 10);
/// assert_eq!(composed(12345), 50);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::compose!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}
