use crate::systems::physics::Pass;

use super::perf_stats::PerfStats;

/// Milliseconds on a monotonic-enough clock: `Date.now()` in the browser,
/// `Instant` since first use on native.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Splits one ballpit frame into per-pass timings.
///
/// Started before the stepper runs; every finished [`Pass`] (and the render
/// refresh after it) is charged the time since the previous mark.
pub(crate) struct FrameClock {
    frame_start: f64,
    mark: f64,
}

impl FrameClock {
    pub(crate) fn start() -> Self {
        let now = now_ms();
        FrameClock {
            frame_start: now,
            mark: now,
        }
    }

    fn lap(&mut self) -> f64 {
        let now = now_ms();
        let ms = (now - self.mark).max(0.0);
        self.mark = now;
        ms
    }

    pub(crate) fn finish_pass(&mut self, pass: Pass, stats: &mut PerfStats) {
        let ms = self.lap();
        match pass {
            Pass::Integrate => stats.integrate_ms = ms,
            Pass::Collide => stats.collide_ms = ms,
            Pass::Contain => stats.contain_ms = ms,
        }
    }

    /// Charge the instance buffer refresh and close the frame.
    pub(crate) fn finish_frame(&mut self, stats: &mut PerfStats) {
        stats.render_ms = self.lap();
        stats.step_ms = (self.mark - self.frame_start).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_timings_add_up_to_the_frame() {
        let mut clock = FrameClock::start();
        let mut stats = PerfStats::default();
        for pass in [Pass::Integrate, Pass::Collide, Pass::Contain] {
            clock.finish_pass(pass, &mut stats);
        }
        clock.finish_frame(&mut stats);

        let parts = stats.integrate_ms + stats.collide_ms + stats.contain_ms + stats.render_ms;
        assert!(stats.integrate_ms >= 0.0 && stats.render_ms >= 0.0);
        assert!((parts - stats.step_ms).abs() < 1e-9);
    }
}
