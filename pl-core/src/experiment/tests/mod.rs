mod lifecycle_test;
mod name_test;

use pl_testutils::*;
use rstest::*;

use super::*;
use crate::macros::*;
use crate::prelude::*;
