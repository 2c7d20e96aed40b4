//! Constants related to the general configuration of the service and its deployment.

use std::{env::var, sync::LazyLock};

/// The socket address the HTTP listener binds to.
pub static BIND_ADDR: LazyLock<String> =
    LazyLock::new(|| var("RECSDI_BIND_ADDR").unwrap_or(String::from("0.0.0.0:8080")));
