
use rstest::*;

use super::*;
use crate::macros::*;
use crate::prelude::*;
