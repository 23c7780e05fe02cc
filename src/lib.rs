//! # u-combin
//!
//! Combinatorial counting primitives for the U-Engine ecosystem.
//!
//! This crate provides factorial, permutation-count, and combination-count
//! functions over `f64`. It is domain-agnostic: it knows nothing about
//! scheduling, nesting, geometry, or any consumer domain.
//!
//! ## Modules
//!
//! - [`counting`] — Factorial, `P(n, r)`, and `C(n, r)` with an explicit
//!   numeric edge-case policy
//!
//! ## Design Philosophy
//!
//! - **Numeric range first**: combination counts are computed as a running
//!   product of per-step ratios, never as a quotient of factorials, so
//!   results stay finite far beyond where the factorials overflow
//! - **Overflow is a value, not an error**: counts too large for a double
//!   saturate to `f64::INFINITY`
//! - **Rejections are values too**: invalid input collapses to `0.0` on the
//!   plain functions; the `try_` variants report the same rejections as a
//!   structured [`counting::CountError`]
//! - **Property-based testing**: mathematical invariants verified via
//!   proptest

pub mod counting;
