//! License host reachability.
//!
//! The license server sits behind the office VPN; a single ICMP probe
//! before opening the engine session turns a 30-second vendor timeout into
//! an immediate, explainable failure. The probe shells out to the platform
//! `ping` utility (count flag `-n` on Windows, `-c` elsewhere) and relies
//! on the OS-default timeout.

use std::process::{Command, Stdio};

/// Reachability probe seam, mockable in tests.
pub trait Pinger {
    /// One probe; true when the host answered.
    fn ping(&self, host: &str) -> bool;
}

/// Probe via the system `ping` utility.
#[derive(Debug, Default)]
pub struct SystemPing;

impl Pinger for SystemPing {
    fn ping(&self, host: &str) -> bool {
        let count_flag = if cfg!(target_os = "windows") { "-n" } else { "-c" };

        let status = Command::new("ping")
            .args([count_flag, "1", host])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => status.success(),
            Err(e) => {
                tracing::warn!("ping could not be spawned: {}", e);
                false
            }
        }
    }
}

/// Fixed-answer pinger for tests and `--skip-ping`.
#[derive(Debug, Clone, Copy)]
pub struct StaticPing(pub bool);

impl Pinger for StaticPing {
    fn ping(&self, _host: &str) -> bool {
        self.0
    }
}
