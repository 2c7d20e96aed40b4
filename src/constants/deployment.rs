//! Constants identifying the deployment this instance belongs to.

use std::{env::var, sync::LazyLock};

/// The name of the deployment environment (e.g. "production", "staging").
pub static ENVIRONMENT_NAME: LazyLock<Option<String>> =
    LazyLock::new(|| var("RECSDI_ENV").ok());

/// The base URL for reaching the backend API from this deployment.
pub static API_BASE_URL: LazyLock<Option<String>> =
    LazyLock::new(|| var("RECSDI_API_URL").ok());
