//! Run the real binary and stop it with a termination signal: the process
//! must exit 0 and leave the cursor visible.

#![cfg(unix)]

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

use tui_torus::term::signals::{RESTORE_SEQUENCE, SHOW_CURSOR};

const HIDE_CURSOR: &[u8] = b"\x1b[?25l";

struct Running {
    child: Child,
    output: Arc<Mutex<Vec<u8>>>,
    reader: JoinHandle<()>,
}

fn spawn() -> Running {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tui-torus"))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn tui-torus");

    let mut stdout = child.stdout.take().expect("piped stdout");
    let output = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&output);
    // Keep draining so the child never blocks on a full pipe.
    let reader = thread::spawn(move || {
        let mut chunk = [0u8; 8192];
        loop {
            match stdout.read(&mut chunk) {
                Ok(0) | Err(_) => break,
                Ok(n) => sink.lock().unwrap().extend_from_slice(&chunk[..n]),
            }
        }
    });
    Running {
        child,
        output,
        reader,
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Wait until the cursor is hidden and at least one frame follows it.
fn wait_for_frames(run: &mut Running) {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        {
            let out = run.output.lock().unwrap();
            if contains(&out, HIDE_CURSOR) && out.len() > 50 * 22 {
                return;
            }
        }
        if Instant::now() > deadline {
            let _ = run.child.kill();
            let _ = run.child.wait();
            panic!("tui-torus produced no frames within 10s");
        }
        thread::sleep(Duration::from_millis(20));
    }
}

fn stop_with(signal: Signal) -> (ExitStatus, Vec<u8>) {
    let mut run = spawn();
    wait_for_frames(&mut run);

    kill(Pid::from_raw(run.child.id() as i32), signal).unwrap();
    let status = run.child.wait().unwrap();
    run.reader.join().unwrap();
    let output = Arc::try_unwrap(run.output).unwrap().into_inner().unwrap();
    (status, output)
}

#[test]
fn sigint_shows_cursor_and_exits_zero() {
    let (status, out) = stop_with(Signal::SIGINT);
    assert_eq!(status.code(), Some(0), "status: {status:?}");
    assert!(out.ends_with(RESTORE_SEQUENCE));
    assert!(out.ends_with(SHOW_CURSOR));
}

#[test]
fn sigterm_shows_cursor_and_exits_zero() {
    let (status, out) = stop_with(Signal::SIGTERM);
    assert_eq!(status.code(), Some(0), "status: {status:?}");
    assert!(out.ends_with(RESTORE_SEQUENCE));
    assert!(out.ends_with(SHOW_CURSOR));
}
