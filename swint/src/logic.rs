mod bitwise;
mod div;
mod mul;
#[cfg(feature = "rand_support")]
mod rand;
mod shift;
mod std_ops;
