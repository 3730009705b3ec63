//! Process CPU time, as reported by `times(2)`
//!
//! User plus system time of this process and its waited-for children. The
//! cputime command is advisory, so clock failures surface as `None` and the
//! command answers with an empty response rather than an error.

/// Consumed CPU time in seconds, or `None` if the clock is unavailable.
pub fn cpu_seconds() -> Option<f64> {
    let ticks_per_sec = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
    if ticks_per_sec <= 0 {
        return None;
    }

    let mut usage: libc::tms = unsafe { std::mem::zeroed() };
    let ret = unsafe { libc::times(&mut usage) };
    if ret == -1 as libc::clock_t {
        return None;
    }

    let ticks = usage.tms_utime + usage.tms_stime + usage.tms_cutime + usage.tms_cstime;
    Some(ticks as f64 / ticks_per_sec as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_time_is_available_and_sane() {
        let t = cpu_seconds().expect("times() should work here");
        assert!(t >= 0.0);
        // A fresh test process cannot have burned an hour of CPU.
        assert!(t < 3600.0);
    }

    #[test]
    fn cpu_time_is_monotonic() {
        let before = cpu_seconds().unwrap();
        // Burn a little CPU.
        let mut acc = 0u64;
        for i in 0..2_000_000u64 {
            acc = acc.wrapping_mul(6364136223846793005).wrapping_add(i);
        }
        std::hint::black_box(acc);
        let after = cpu_seconds().unwrap();
        assert!(after >= before);
    }
}
