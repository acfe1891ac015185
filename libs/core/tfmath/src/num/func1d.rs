// -----------------------------------------------------------------------------
// Func1d
// -----------------------------------------------------------------------------
/// A function of one variable which can be evaluated everywhere on its argument type.
pub trait Func1d<Arg> {
    type Output;

    fn eval(&self, arg: &Arg) -> Self::Output;
}

// -----------------------------------------------------------------------------
// DerX1d
// -----------------------------------------------------------------------------
/// A [`Func1d`] which also provides its first derivative.
pub trait DerX1d<Arg>: Func1d<Arg> {
    type DerX;

    fn der_x(&self, arg: &Arg) -> Self::DerX;

    #[inline]
    fn der_0_x(&self, arg: &Arg) -> (Self::Output, Self::DerX) {
        (self.eval(arg), self.der_x(arg))
    }
}

impl<F: Func1d<Arg>, Arg> Func1d<Arg> for &F {
    type Output = F::Output;

    #[inline]
    fn eval(&self, arg: &Arg) -> Self::Output {
        F::eval(*self, arg)
    }
}

impl<F: DerX1d<Arg>, Arg> DerX1d<Arg> for &F {
    type DerX = F::DerX;

    #[inline]
    fn der_x(&self, arg: &Arg) -> Self::DerX {
        F::der_x(*self, arg)
    }
}
