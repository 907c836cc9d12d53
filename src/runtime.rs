//! Distributed-runtime lifecycle.
//!
//! The legacy frontend relies on ambient `MPI_Init`/`MPI_Finalize` calls and
//! skips finalization on two of its error exits. Here the context is an
//! explicit object behind the [`ProcessRuntime`] trait, acquired through an
//! RAII [`RuntimeGuard`] so that every exit path releases it exactly once.
//! The trait seam also lets the bootstrap be tested without a real
//! multi-process environment.

use crate::error::{LaunchError, LaunchResult};

/// Process-group coordination facility.
///
/// Initialized exactly once at process start, before any argument-dependent
/// logic, and released exactly once before normal termination. The actual
/// multi-process launch (one process per rank) is driven by an external
/// process launcher; this trait only exposes the lifecycle.
pub trait ProcessRuntime {
    /// Acquire the process-wide context.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeInit` if the context cannot be established.
    fn init(&mut self) -> LaunchResult<()>;

    /// Release the context.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeTeardown` if the context does not release cleanly.
    fn finalize(&mut self) -> LaunchResult<()>;
}

/// RAII guard around an initialized runtime context.
///
/// Dropping the guard finalizes the context; a teardown failure on the drop
/// path is logged and swallowed, since drop cannot report it. Call
/// [`RuntimeGuard::release`] on the normal path to observe teardown errors.
pub struct RuntimeGuard<'a, R: ProcessRuntime + ?Sized> {
    runtime: &'a mut R,
    released: bool,
}

impl<'a, R: ProcessRuntime + ?Sized> RuntimeGuard<'a, R> {
    /// Initialize the runtime and wrap it in a guard.
    ///
    /// # Errors
    ///
    /// Propagates the runtime's init failure.
    pub fn acquire(runtime: &'a mut R) -> LaunchResult<Self> {
        runtime.init()?;
        Ok(Self {
            runtime,
            released: false,
        })
    }

    /// Explicitly finalize the runtime, consuming the guard.
    ///
    /// # Errors
    ///
    /// Propagates the runtime's teardown failure.
    pub fn release(mut self) -> LaunchResult<()> {
        self.released = true;
        self.runtime.finalize()
    }
}

impl<R: ProcessRuntime + ?Sized> Drop for RuntimeGuard<'_, R> {
    fn drop(&mut self) {
        if !self.released {
            if let Err(e) = self.runtime.finalize() {
                log::warn!("runtime teardown on early exit failed: {e}");
            }
        }
    }
}

/// Single-process runtime used when no external process launcher drives the
/// program.
///
/// Tracks lifecycle state so that a double init or a finalize without init
/// is detected instead of silently accepted.
#[derive(Debug, Default)]
pub struct LocalRuntime {
    initialized: bool,
}

impl ProcessRuntime for LocalRuntime {
    fn init(&mut self) -> LaunchResult<()> {
        if self.initialized {
            return Err(LaunchError::RuntimeInit(
                "context already initialized".to_string(),
            ));
        }
        self.initialized = true;
        log::debug!("local runtime context initialized");
        Ok(())
    }

    fn finalize(&mut self) -> LaunchResult<()> {
        if !self.initialized {
            return Err(LaunchError::RuntimeTeardown(
                "context not initialized".to_string(),
            ));
        }
        self.initialized = false;
        log::debug!("local runtime context released");
        Ok(())
    }
}
