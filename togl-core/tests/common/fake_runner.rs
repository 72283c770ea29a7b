//! A deterministic in-process stand-in for `SystemRunner`.
//!
//! * From the test's perspective
//!   * Script the outcome with `FakeRunner::ok(...)` or
//!     `FakeRunner::fail(...)`.
//!   * Inspect every invocation the component made via the handle
//!     returned by `calls()`.
//!
//! * Why this exists: it lets tests exercise the real directory and
//!   dialer logic without touching powershell.exe or rasdial.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use togl_core::vpn::{CommandRunner, ProcessFailure};

/// One recorded invocation: program plus arguments
pub type Invocation = (String, Vec<String>);

pub struct FakeRunner {
    /// Scripted result returned for every invocation
    result: Result<String, ProcessFailure>,
    /// Every invocation made through this runner, kept for assertions
    calls: Arc<Mutex<Vec<Invocation>>>,
}

impl FakeRunner {
    /// Runner whose every invocation succeeds with the given stdout
    pub fn ok(stdout: &str) -> Self {
        Self {
            result: Ok(stdout.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Runner whose every invocation fails with the given message
    pub fn fail(message: &str) -> Self {
        Self {
            result: Err(ProcessFailure::new(message)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the recorded invocations, valid after the runner is
    /// boxed and handed to a component
    pub fn calls(&self) -> Arc<Mutex<Vec<Invocation>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<String, ProcessFailure> {
        self.calls.lock().unwrap().push((
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
        ));
        self.result.clone()
    }
}
