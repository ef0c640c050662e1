#[cfg(not(feature = "std"))]
pub(crate) mod libm;
