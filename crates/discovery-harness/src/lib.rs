//! Conformance harness for discovery sources.
//!
//! A suite is a list of declarative [`TestCase`]s. The runner dispatches each
//! case against a [`discovery_sources::Source`], then checks the outcome:
//! - [`expect_error`]: kind, scope and message of the returned query error;
//! - [`expect_items`]: item count, structural validity, attribute values.
//!
//! Check failures are collected per case rather than aborting the run.
//! Misconfigured cases (unrecognized method, Search against a source without
//! the capability) abort only the case they belong to.

pub mod case;
pub mod compare;
pub mod dispatch;
pub mod expect_error;
pub mod expect_items;
pub mod failure;
pub mod report;
pub mod runner;
pub mod suite;

pub use case::{CaseMethod, Expectation, ExpectedError, ExpectedItems, MessagePattern, TestCase};
pub use compare::attribute_values_equal;
pub use dispatch::{Dispatched, dispatch};
pub use failure::{CheckFailure, CheckKind, HarnessFault};
pub use report::{CaseReport, CaseVerdict, SuiteReport, render_suite_logs};
pub use runner::{assert_source_conformance, run_case, run_source_tests};
pub use suite::{Suite, SuiteFormat, load_suite, parse_suite};
