// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PEFI_LOG";

static INIT: Once = Once::new();

/// Install the stderr subscriber. `PEFI_LOG` wins over `verbose`.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "pefi=debug" } else { "pefi=warn" };
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
