// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error reporting for absorbed storage failures
//!
//! Storage failures never fail a load or an append; the manager hands them to
//! an [`ErrorSink`] and carries on with whatever is in memory.

use tracing::error;

use crate::errors::StoreError;
use crate::store::StoreOperation;

/// Receives storage-layer failures the manager has absorbed
pub trait ErrorSink: Send + Sync {
    fn report(&self, operation: StoreOperation, error: &StoreError);
}

/// Logs every reported failure at `error` level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn report(&self, operation: StoreOperation, error: &StoreError) {
        error!(operation = %operation, error = %error, "Highscore store failure");
    }
}
