mod util;

pub use util::*;

use crate::errors::*;

err_impl! {KubernetesError,
    #[error("cluster API call exceeded its deadline: {0}")]
    DeadlineExceeded(String),
}

#[cfg(test)]
pub mod tests;
