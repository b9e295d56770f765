//! Host metrics sampling

use std::path::Path;
use std::thread;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use sysinfo::{Disks, System, MINIMUM_CPU_UPDATE_INTERVAL};

/// Window over which CPU usage is averaged
const CPU_WINDOW: Duration = Duration::from_secs(1);

/// One reading of the host
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Average CPU usage over the sample window, percent
    pub cpu_usage: f32,
    /// Memory available to new processes, MiB
    pub mem_free_mb: f64,
    /// Memory in use, percent
    pub ram_usage: f32,
    /// Root filesystem in use, percent
    pub disk_usage: f32,
    /// Local wall-clock time of the reading
    pub taken_at: NaiveDateTime,
}

/// Collects [`Sample`]s from the running system
pub struct Sampler {
    system: System,
}

impl Sampler {
    pub fn new() -> Self {
        let mut system = System::new();
        // First refresh sets the baseline for CPU deltas
        system.refresh_cpu_usage();
        Self { system }
    }

    /// Take a reading; blocks for the CPU sample window
    pub fn sample(&mut self) -> Sample {
        thread::sleep(CPU_WINDOW.max(MINIMUM_CPU_UPDATE_INTERVAL));
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();

        let total = self.system.total_memory();
        let available = self.system.available_memory();

        Sample {
            cpu_usage: self.system.global_cpu_usage(),
            mem_free_mb: available as f64 / 1024.0 / 1024.0,
            ram_usage: used_percent(total, available),
            disk_usage: root_disk_usage(),
            taken_at: Local::now().naive_local(),
        }
    }
}

/// Share of `total` not `available`, in percent
pub fn used_percent(total: u64, available: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    let used = total.saturating_sub(available);
    (used as f64 * 100.0 / total as f64) as f32
}

/// Usage of the disk mounted at `/`, or the first disk listed
fn root_disk_usage() -> f32 {
    let disks = Disks::new_with_refreshed_list();
    let root = disks
        .list()
        .iter()
        .find(|disk| disk.mount_point() == Path::new("/"))
        .or_else(|| disks.list().first());

    match root {
        Some(disk) => used_percent(disk.total_space(), disk.available_space()),
        None => {
            log::warn!("No disks found; reporting 0% disk usage");
            0.0
        }
    }
}
