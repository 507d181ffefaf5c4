//! Termination signal hooks.
//!
//! On SIGINT, SIGTERM, SIGABRT or SIGILL the process shows the cursor again
//! and exits with status 0 immediately. The handler touches terminal state
//! only, so it is safe at any point of an in-progress frame.

use anyhow::{Context, Result};
use log::debug;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

/// Signals that trigger cleanup.
pub const CLEANUP_SIGNALS: [Signal; 4] = [
    Signal::SIGINT,
    Signal::SIGTERM,
    Signal::SIGABRT,
    Signal::SIGILL,
];

/// Cursor-show escape sequence.
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";

/// Bytes written raw from the signal handler: CAN aborts any escape sequence
/// the interrupted frame left half-written, then the cursor is shown.
pub const RESTORE_SEQUENCE: &[u8] = b"\x18\x1b[?25h";

extern "C" fn restore_cursor_and_exit(_signal: libc::c_int) {
    // Only async-signal-safe calls: no locks, no allocation, no stdout buffer.
    unsafe {
        libc::write(
            libc::STDOUT_FILENO,
            RESTORE_SEQUENCE.as_ptr().cast(),
            RESTORE_SEQUENCE.len(),
        );
        libc::_exit(0);
    }
}

/// Register the cursor-restoring exit handler for [`CLEANUP_SIGNALS`].
///
/// Installing twice is harmless; the same handler replaces itself.
pub fn install_cleanup_hooks() -> Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(restore_cursor_and_exit),
        SaFlags::empty(),
        SigSet::empty(),
    );
    for signal in CLEANUP_SIGNALS {
        // SAFETY: the handler only calls write(2) and _exit(2).
        unsafe { sigaction(signal, &action) }
            .with_context(|| format!("failed to install {signal:?} handler"))?;
    }
    debug!("cleanup hooks installed for {:?}", CLEANUP_SIGNALS);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::{cursor, QueueableCommand};

    #[test]
    fn raw_sequence_matches_crossterm_show() {
        let mut out = Vec::new();
        out.queue(cursor::Show).unwrap();
        assert_eq!(out, SHOW_CURSOR);
    }

    #[test]
    fn restore_cancels_then_shows_cursor() {
        assert_eq!(RESTORE_SEQUENCE[0], 0x18);
        assert!(RESTORE_SEQUENCE.ends_with(SHOW_CURSOR));
        assert_eq!(RESTORE_SEQUENCE.len(), SHOW_CURSOR.len() + 1);
    }

    #[test]
    fn covers_interrupt_and_termination() {
        assert!(CLEANUP_SIGNALS.contains(&Signal::SIGINT));
        assert!(CLEANUP_SIGNALS.contains(&Signal::SIGTERM));
        assert!(CLEANUP_SIGNALS.contains(&Signal::SIGABRT));
        assert!(CLEANUP_SIGNALS.contains(&Signal::SIGILL));
    }
}
