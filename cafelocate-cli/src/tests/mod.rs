//! Shared test harness modules for the cafelocate CLI.

use super::*;

mod helpers;
