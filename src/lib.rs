//! Labtrack is a labelling-based backtracking solver for Dung's abstract argumentation frameworks.
//!
//! It decides the verification, credulous acceptance and skeptical acceptance problems
//! under the preferred and the stable semantics.

#![warn(missing_docs)]

pub mod aa;

pub mod io;

pub mod sets;

pub mod solvers;
