//! Diverging traps for the soft-float intrinsics
//!
//! The target this crate supports has no floating point capability at all,
//! hardware or software. When floating point code sneaks into a build, the
//! compiler still emits calls to the standard soft-float intrinsics;
//! linking those calls against these traps makes the mistake loud at the
//! first call instead of silently miscomputing. Each trap reports its own
//! intrinsic name and diverges. None of the arithmetic in this crate calls
//! into this module.

/// Reports the name of the soft-float intrinsic that was reached.
#[cold]
#[track_caller]
fn trap(name: &'static str) -> ! {
    panic!("reached a floating point intrinsic stub: {name}");
}

macro_rules! float_trap {
    ($($fn_name:ident, $sym:literal);*;) => {
        $(
            /// Trap for the soft-float intrinsic of the same symbol name
            pub fn $fn_name() -> ! {
                trap($sym)
            }
        )*
    };
}

float_trap!(
    addsf3, "__addsf3";
    fixsfsi, "__fixsfsi";
    fixunssfsi, "__fixunssfsi";
    floatsisf, "__floatsisf";
    floatunsisf, "__floatunsisf";
    gesf2, "__gesf2";
    gtsf2, "__gtsf2";
    ltsf2, "__ltsf2";
    mulsf3, "__mulsf3";
    nesf2, "__nesf2";
);
