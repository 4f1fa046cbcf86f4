//! Application Context
//!
//! Fault and notice signals shared by every widget via the Leptos Context API.

use leptos::prelude::*;
use log::{error, warn};
use pocket_core::{StoreError, StoreResult};

/// App-wide message signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Integrity fault that needs manual repair - read
    pub fault: ReadSignal<Option<String>>,
    /// Integrity fault - write
    set_fault: WriteSignal<Option<String>>,
    /// Rejected input, dismissable - read
    pub notice: ReadSignal<Option<String>>,
    /// Rejected input - write
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        fault: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            fault: fault.0,
            set_fault: fault.1,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Show a store error: fatal ones in the banner, the rest as a notice.
    pub fn report(&self, err: &StoreError) {
        if err.is_fatal() {
            error!("[APP] {}", err);
            self.set_fault.set(Some(err.to_string()));
        } else {
            warn!("[APP] {}", err);
            self.set_notice.set(Some(err.to_string()));
        }
    }

    /// Unwrap the outcome of a store mutation run through `try_update`,
    /// reporting any error. A successful mutation clears the notice.
    pub fn settle<T>(&self, outcome: Option<StoreResult<T>>) -> Option<T> {
        match outcome? {
            Ok(value) => {
                self.clear_notice();
                Some(value)
            }
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }

    pub fn clear_notice(&self) {
        self.set_notice.set(None);
    }

    /// Forget both messages, e.g. when switching widgets
    pub fn clear(&self) {
        self.set_fault.set(None);
        self.set_notice.set(None);
    }
}
