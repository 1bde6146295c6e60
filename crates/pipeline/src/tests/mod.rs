//! End-to-end pipeline tests.

mod scenarios;
