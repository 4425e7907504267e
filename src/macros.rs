//! Utility macros.

/// Implements a binary operator for every combination of owned and borrowed
/// operands by duplicating the left operand and applying the given
/// compound-assignment operator to the duplicate.
macro_rules! impl_binop_via_assign {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $tl:ty, $tr:ty) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $tl;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let mut result = *self;
                ::std::ops::$assign_op::$assign_method(&mut result, rhs);
                result
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $tl;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $tl;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $tl;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                ::std::ops::$op::$method(self, &rhs);
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f64;

            fn default_epsilon() -> Self::Epsilon {
                <f64 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <f64 as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}
