//! `matf-assert` - Build-time boolean assertions with zero runtime footprint.
//!
//! This crate provides:
//! - A `build_assert!` macro that evaluates a constant boolean expression
//!   during compilation and fails the build if it is false
//! - No runtime checks, no code size contribution, no side effects on success
//!
//! Each invocation expands to an anonymous constant (`const _`), so any
//! number of assertions can share a scope, or even a source line, without
//! name collisions.

/// Asserts that a boolean constant expression holds at build time.
///
/// Expands to an anonymous `const` whose initializer evaluates the
/// expression during constant evaluation. A false expression aborts the
/// build with a diagnostic pointing at the invocation; a true expression
/// compiles to nothing.
///
/// An optional second argument supplies a custom message. It must be a
/// string literal: format arguments are not evaluable in const context.
///
/// # Examples
///
/// ```
/// matf_assert::build_assert!(core::mem::size_of::<f32>() == 4);
/// matf_assert::build_assert!(u8::MAX as usize == 255, "u8 must be 8 bits");
/// ```
///
/// A false condition fails the build:
///
/// ```compile_fail
/// matf_assert::build_assert!(2 + 2 == 5);
/// ```
///
/// The macro is usable in item position: at module scope or inside a
/// function body. It cannot appear in expression position.
#[macro_export]
macro_rules! build_assert {
    ($cond:expr $(,)?) => {
        const _: () = ::core::assert!($cond);
    };
    ($cond:expr, $msg:literal $(,)?) => {
        const _: () = ::core::assert!($cond, $msg);
    };
}

#[cfg(test)]
mod tests {
    // Module scope, repeated on one line: the anonymous-const expansion
    // cannot collide.
    build_assert!(true);
    build_assert!(1 + 1 == 2); build_assert!(2 + 2 == 4);
    build_assert!(usize::BITS >= 32, "16-bit targets are unsupported");

    #[test]
    fn usable_inside_function_bodies() {
        build_assert!(core::mem::size_of::<f32>() == 4);
        build_assert!(f32::MANTISSA_DIGITS == 24);
    }

    #[test]
    fn tolerates_trailing_comma() {
        build_assert!(true,);
        build_assert!(true, "message",);
    }
}
