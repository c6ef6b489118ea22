//! Fixed-arity composition functions, `compose2` through `compose9`.
//!
//! Each function takes its components in application order and returns a
//! single closure. The types of adjacent components are checked by the
//! compiler, so a stage whose output does not match the next stage's input
//! is a type error at the call site.
//!
//! ```text
//! composeN(f1, f2, ..., fN)(x) = fN(...f2(f1(x)))
//! ```
//!
//! Components may own anything, including values that are not `Clone`.
//! Where a cloneable function is required, such as a restartable
//! `lazily::map`, pass `&composed`: a shared reference to a
//! function is itself a `Copy` function.

/// Generates one `composeN` function.
///
/// Every stage is written as `name: FunctionType(Input) -> Output`; the
/// returned closure threads the value through the stages in order.
macro_rules! define_compose {
    (
        $(#[$meta:meta])*
        $name:ident<$input:ident -> $output:ident>(
            $($function:ident: $function_type:ident($from:ident) -> $to:ident),+ $(,)?
        )
    ) => {
        $(#[$meta])*
        #[inline]
        pub fn $name<$input, $($to, $function_type),+>(
            $($function: $function_type),+
        ) -> impl Fn($input) -> $output
        where
            $($function_type: Fn($from) -> $to),+
        {
            move |value: $input| {
                $(let value = $function(value);)+
                value
            }
        }
    };
}

define_compose! {
    /// Composes two functions left to right: `compose2(f, g)(x) == g(f(x))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use funk::compose::compose2;
    ///
    /// let parse = |text: &str| text.parse::<i64>().unwrap_or_default();
    /// let double = |x: i64| x * 2;
    ///
    /// let parse_and_double = compose2(parse, double);
    /// assert_eq!(parse_and_double("1234"), 2468);
    /// ```
    compose2<A -> C>(first: F1(A) -> B, second: F2(B) -> C)
}

define_compose! {
    /// Composes three functions left to right.
    compose3<A -> D>(first: F1(A) -> B, second: F2(B) -> C, third: F3(C) -> D)
}

define_compose! {
    /// Composes four functions left to right.
    compose4<A -> E>(
        first: F1(A) -> B,
        second: F2(B) -> C,
        third: F3(C) -> D,
        fourth: F4(D) -> E,
    )
}

define_compose! {
    /// Composes five functions left to right.
    compose5<A -> G>(
        first: F1(A) -> B,
        second: F2(B) -> C,
        third: F3(C) -> D,
        fourth: F4(D) -> E,
        fifth: F5(E) -> G,
    )
}

define_compose! {
    /// Composes six functions left to right.
    compose6<A -> H>(
        first: F1(A) -> B,
        second: F2(B) -> C,
        third: F3(C) -> D,
        fourth: F4(D) -> E,
        fifth: F5(E) -> G,
        sixth: F6(G) -> H,
    )
}

define_compose! {
    /// Composes seven functions left to right.
    compose7<A -> I>(
        first: F1(A) -> B,
        second: F2(B) -> C,
        third: F3(C) -> D,
        fourth: F4(D) -> E,
        fifth: F5(E) -> G,
        sixth: F6(G) -> H,
        seventh: F7(H) -> I,
    )
}

define_compose! {
    /// Composes eight functions left to right.
    compose8<A -> J>(
        first: F1(A) -> B,
        second: F2(B) -> C,
        third: F3(C) -> D,
        fourth: F4(D) -> E,
        fifth: F5(E) -> G,
        sixth: F6(G) -> H,
        seventh: F7(H) -> I,
        eighth: F8(I) -> J,
    )
}

define_compose! {
    /// Composes nine functions left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use funk::compose::compose9;
    ///
    /// let add_one = |x: i32| x + 1;
    /// let composed = compose9(
    ///     add_one, add_one, add_one, add_one, add_one,
    ///     add_one, add_one, add_one, |x: i32| x.to_string(),
    /// );
    /// assert_eq!(composed(0), "8");
    /// ```
    compose9<A -> K>(
        first: F1(A) -> B,
        second: F2(B) -> C,
        third: F3(C) -> D,
        fourth: F4(D) -> E,
        fifth: F5(E) -> G,
        sixth: F6(G) -> H,
        seventh: F7(H) -> I,
        eighth: F8(I) -> J,
        ninth: F9(J) -> K,
    )
}
