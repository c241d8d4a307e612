#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use hostpulse_core::sys::cpu::{usage_percent, CoreTimes};

fn core(user: u64, idle: u64) -> CoreTimes {
    CoreTimes {
        user,
        idle,
        ..CoreTimes::default()
    }
}

#[test]
fn mixed_load_stays_in_range() {
    let cores = [core(400, 600), core(900, 100)];
    let pct = usage_percent(&cores);
    assert!((0.0..=100.0).contains(&pct));
    assert!((pct - 65.0).abs() < 1e-9);
}

#[test]
fn all_idle_reports_zero() {
    assert_eq!(usage_percent(&[core(0, 1000)]), 0.0);
}

#[test]
fn no_idle_reports_hundred() {
    assert_eq!(usage_percent(&[core(1000, 0)]), 100.0);
}

#[test]
fn all_buckets_contribute_to_total() {
    let busy = CoreTimes {
        user: 10,
        nice: 10,
        system: 10,
        idle: 30,
        irq: 10,
    };
    // 40 active ticks out of 70 total
    let pct = usage_percent(&[busy]);
    assert!((pct - 4000.0 / 70.0).abs() < 1e-9);
}

#[test]
fn empty_core_list_is_degenerate() {
    assert!(usage_percent(&[]).is_nan());
}

#[cfg(target_os = "linux")]
#[test]
fn live_kernel_counters_are_in_range() {
    let cores = hostpulse_core::sys::cpu::read_core_times().expect("probe /proc/stat");
    let pct = usage_percent(&cores);
    assert!((0.0..=100.0).contains(&pct));
}
