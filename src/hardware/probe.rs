// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Raw hardware signal sources
//!
//! [`CapabilityProbe`] is the seam between the detector and the machine.
//! [`HostProbe`] queries the real system (sysinfo, num_cpus, procfs and the
//! vendor diagnostic tools); [`StaticProbe`] replays canned answers so the
//! detection logic can be exercised without a GPU or a particular OS.

use std::collections::HashMap;
use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use sysinfo::System;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// CPU facts reported by the operating system
#[derive(Debug, Clone, PartialEq)]
pub struct CpuSignals {
    pub brand: String,
    pub physical_cores: usize,
    pub logical_cores: usize,
    /// Maximum frequency, or the current one when no maximum is exposed
    pub frequency_mhz: u64,
}

/// System memory statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub total_gb: f64,
    pub available_gb: f64,
    pub percent_used: f64,
}

impl MemoryInfo {
    /// Build memory statistics from byte counts.
    pub fn from_bytes(total: u64, available: u64) -> Self {
        let percent_used = if total == 0 {
            0.0
        } else {
            (total.saturating_sub(available) as f64 / total as f64) * 100.0
        };
        Self {
            total_gb: total as f64 / BYTES_PER_GB,
            available_gb: available as f64 / BYTES_PER_GB,
            percent_used,
        }
    }
}

/// Operating system identification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// OS family name ("Linux", "Windows", "Darwin", ...)
    pub system: String,
    /// OS release (kernel version on Linux)
    pub release: String,
    /// Machine architecture string
    pub machine: String,
}

impl PlatformInfo {
    pub fn is_windows(&self) -> bool {
        self.system.eq_ignore_ascii_case("windows")
    }

    pub fn is_linux(&self) -> bool {
        self.system.eq_ignore_ascii_case("linux")
    }
}

/// Source of raw hardware signals.
///
/// Implementations must not panic; a failed query is reported as `None`
/// and the detector substitutes its documented fallback.
pub trait CapabilityProbe {
    /// Core counts, brand and frequency, or `None` if the OS query failed.
    fn cpu_signals(&self) -> Option<CpuSignals>;

    /// Kernel-exposed CPU feature text (`/proc/cpuinfo` on Linux).
    fn cpu_feature_text(&self) -> Option<String>;

    fn memory(&self) -> MemoryInfo;

    fn platform(&self) -> PlatformInfo;

    /// Run a diagnostic tool and return its stdout.
    ///
    /// A missing executable, a non-zero exit status and a timeout all
    /// yield `None`.
    fn run_tool(&self, program: &str, args: &[&str], timeout: Duration) -> Option<String>;
}

/// Probe backed by the running machine
#[derive(Debug, Default, Clone, Copy)]
pub struct HostProbe;

impl HostProbe {
    pub fn new() -> Self {
        Self
    }

    #[cfg(target_os = "linux")]
    fn max_frequency_mhz() -> Option<u64> {
        // Reported in kHz
        let raw =
            std::fs::read_to_string("/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq")
                .ok()?;
        raw.trim().parse::<u64>().ok().map(|khz| khz / 1000)
    }

    #[cfg(not(target_os = "linux"))]
    fn max_frequency_mhz() -> Option<u64> {
        None
    }
}

impl CapabilityProbe for HostProbe {
    fn cpu_signals(&self) -> Option<CpuSignals> {
        let mut sys = System::new();
        sys.refresh_cpu_all();

        let cpus = sys.cpus();
        let first = cpus.first()?;
        let brand = match first.brand().trim() {
            "" => "Unknown CPU".to_string(),
            brand => brand.to_string(),
        };
        let current_mhz = cpus.iter().map(|cpu| cpu.frequency()).max().unwrap_or(0);

        Some(CpuSignals {
            brand,
            physical_cores: num_cpus::get_physical().max(1),
            logical_cores: num_cpus::get().max(1),
            frequency_mhz: Self::max_frequency_mhz().unwrap_or(current_mhz),
        })
    }

    fn cpu_feature_text(&self) -> Option<String> {
        std::fs::read_to_string("/proc/cpuinfo").ok()
    }

    fn memory(&self) -> MemoryInfo {
        let mut sys = System::new();
        sys.refresh_memory();
        MemoryInfo::from_bytes(sys.total_memory(), sys.available_memory())
    }

    fn platform(&self) -> PlatformInfo {
        let system = match std::env::consts::OS {
            "linux" => "Linux".to_string(),
            "windows" => "Windows".to_string(),
            "macos" => "Darwin".to_string(),
            other => other.to_string(),
        };
        PlatformInfo {
            system,
            release: System::kernel_version().unwrap_or_default(),
            machine: std::env::consts::ARCH.to_string(),
        }
    }

    fn run_tool(&self, program: &str, args: &[&str], timeout: Duration) -> Option<String> {
        let mut child = match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                tracing::debug!("{} not available: {}", program, e);
                return None;
            }
        };

        // Drain stdout while the tool runs so a full pipe cannot stall it.
        let Some(mut pipe) = child.stdout.take() else {
            let _ = child.kill();
            let _ = child.wait();
            return None;
        };
        let reader = thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            buf
        });

        let status = wait_with_timeout(&mut child, timeout);
        let Some(status) = status else {
            tracing::debug!("{} timed out after {:?}", program, timeout);
            return None;
        };
        if !status.success() {
            tracing::debug!("{} exited with {:?}", program, status.code());
            return None;
        }

        match reader.join() {
            Ok(stdout) => Some(String::from_utf8_lossy(&stdout).into_owned()),
            Err(_) => {
                tracing::debug!("{} output reader panicked", program);
                None
            }
        }
    }
}

/// Wait for a child process, killing it once `timeout` elapses.
fn wait_with_timeout(
    child: &mut std::process::Child,
    timeout: Duration,
) -> Option<std::process::ExitStatus> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(50);

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Some(status),
            Ok(None) => {
                if start.elapsed() > timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return None;
                }
                thread::sleep(poll_interval);
            }
            Err(e) => {
                tracing::debug!("failed to wait for diagnostic tool: {}", e);
                let _ = child.kill();
                return None;
            }
        }
    }
}

/// Canned answer for a diagnostic tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResponse {
    /// Tool ran and printed this to stdout
    Output(String),
    /// Tool ran past its timeout
    TimedOut,
    /// Tool exited non-zero
    Failed,
}

/// Deterministic probe for tests and offline demos.
///
/// Tools without a registered response behave as if they are not installed.
#[derive(Debug)]
pub struct StaticProbe {
    cpu: Option<CpuSignals>,
    feature_text: Option<String>,
    memory: MemoryInfo,
    platform: PlatformInfo,
    tools: HashMap<String, ToolResponse>,
    invoked: Mutex<Vec<String>>,
}

impl StaticProbe {
    /// An 8-core x86_64 Linux machine with 16 GB RAM and no GPU tools.
    pub fn new() -> Self {
        Self {
            cpu: Some(CpuSignals {
                brand: "Test CPU".to_string(),
                physical_cores: 8,
                logical_cores: 16,
                frequency_mhz: 3600,
            }),
            feature_text: Some("flags\t\t: fpu sse4_1 sse4_2 avx avx2".to_string()),
            memory: MemoryInfo {
                total_gb: 16.0,
                available_gb: 12.0,
                percent_used: 25.0,
            },
            platform: PlatformInfo {
                system: "Linux".to_string(),
                release: "6.1.0".to_string(),
                machine: "x86_64".to_string(),
            },
            tools: HashMap::new(),
            invoked: Mutex::new(Vec::new()),
        }
    }

    /// Builder: set CPU signals (`None` simulates a failed OS query)
    pub fn with_cpu(mut self, cpu: Option<CpuSignals>) -> Self {
        self.cpu = cpu;
        self
    }

    /// Builder: set the CPU feature text (`None` simulates a read failure)
    pub fn with_feature_text(mut self, text: Option<&str>) -> Self {
        self.feature_text = text.map(str::to_string);
        self
    }

    /// Builder: set total RAM, leaving 75% available
    pub fn with_ram_gb(mut self, total_gb: f64) -> Self {
        self.memory = MemoryInfo {
            total_gb,
            available_gb: total_gb * 0.75,
            percent_used: 25.0,
        };
        self
    }

    /// Builder: set the platform triple
    pub fn with_platform(mut self, system: &str, release: &str, machine: &str) -> Self {
        self.platform = PlatformInfo {
            system: system.to_string(),
            release: release.to_string(),
            machine: machine.to_string(),
        };
        self
    }

    /// Builder: register a response for a diagnostic tool
    pub fn with_tool(mut self, program: &str, response: ToolResponse) -> Self {
        self.tools.insert(program.to_string(), response);
        self
    }

    /// Names of the tools that were invoked, in call order.
    pub fn invoked_tools(&self) -> Vec<String> {
        self.invoked
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl Default for StaticProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityProbe for StaticProbe {
    fn cpu_signals(&self) -> Option<CpuSignals> {
        self.cpu.clone()
    }

    fn cpu_feature_text(&self) -> Option<String> {
        self.feature_text.clone()
    }

    fn memory(&self) -> MemoryInfo {
        self.memory.clone()
    }

    fn platform(&self) -> PlatformInfo {
        self.platform.clone()
    }

    fn run_tool(&self, program: &str, _args: &[&str], _timeout: Duration) -> Option<String> {
        if let Ok(mut calls) = self.invoked.lock() {
            calls.push(program.to_string());
        }
        match self.tools.get(program)? {
            ToolResponse::Output(stdout) => Some(stdout.clone()),
            ToolResponse::TimedOut | ToolResponse::Failed => None,
        }
    }
}
