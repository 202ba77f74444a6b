//! Signal dispositions for the interpreter and its children.
//!
//! The interpreter itself ignores SIGINT for its whole lifetime; foreground
//! children restore the default disposition between fork and exec, and
//! background children keep the inherited ignore. SIGTSTP toggles
//! foreground-only mode.

use std::sync::atomic::{AtomicBool, Ordering};

use failure::ResultExt;
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};

use crate::errors::{ErrorKind, Result};

static FOREGROUND_ONLY: AtomicBool = AtomicBool::new(false);

const ENTERING_MESSAGE: &[u8] = b"Entering Foreground only mode\n";
const EXITING_MESSAGE: &[u8] = b"Exiting Foreground only mode\n";

/// Installs the interpreter's signal dispositions. Called once at startup.
pub fn initialize() -> Result<()> {
    unsafe {
        signal::signal(Signal::SIGINT, SigHandler::SigIgn).context(ErrorKind::Nix)?;
    }

    let action = SigAction::new(
        SigHandler::Handler(handle_sigtstp),
        SaFlags::SA_RESTART,
        SigSet::all(),
    );
    unsafe {
        signal::sigaction(Signal::SIGTSTP, &action).context(ErrorKind::Nix)?;
    }

    Ok(())
}

/// Whether a stop-request signal has put the interpreter in foreground-only
/// mode. Read by the main loop once per cycle, written only by the SIGTSTP
/// handler.
pub fn foreground_only() -> bool {
    FOREGROUND_ONLY.load(Ordering::SeqCst)
}

/// Restores the default SIGINT disposition. Runs in the child between fork
/// and exec; signal(2) only fails on programmer error here (invalid signal
/// number).
pub fn restore_default_interrupt_handler() {
    unsafe {
        signal::signal(Signal::SIGINT, SigHandler::SigDfl)
            .expect("failed to set SIGINT signal handler");
    }
}

// Only the atomic flip and a direct write(2) happen here; both are
// async-signal-safe, unlike buffered stdout.
extern "C" fn handle_sigtstp(_signal: libc::c_int) {
    let was_foreground_only = FOREGROUND_ONLY.fetch_xor(true, Ordering::SeqCst);
    let message = if was_foreground_only {
        EXITING_MESSAGE
    } else {
        ENTERING_MESSAGE
    };
    unsafe {
        libc::write(
            libc::STDOUT_FILENO,
            message.as_ptr() as *const libc::c_void,
            message.len(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigtstp_toggles_foreground_only_mode() {
        assert!(!foreground_only());
        handle_sigtstp(libc::SIGTSTP);
        assert!(foreground_only());
        handle_sigtstp(libc::SIGTSTP);
        assert!(!foreground_only());
    }
}
