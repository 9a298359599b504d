//! This crate exists to test `swint` from the outside; see the `tests`
//! directory.
