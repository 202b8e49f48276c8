//! Composable timeline phases.

use super::easing::Easing;

/// How many times a [`Phase::Repeat`] plays its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatCount {
    Times(u32),
    Infinite,
}

/// One node of a timeline.
///
/// Timelines are evaluated, never stepped: [`Phase::value_at`] computes
/// the value from the start value and the elapsed time alone, so two
/// evaluations at the same time always agree.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Move from the incoming value to `target` over `duration_ms`.
    Timed {
        target: f32,
        duration_ms: f64,
        easing: Easing,
    },
    /// Hold the incoming value.
    Delay { duration_ms: f64 },
    /// Play phases back to back; each starts where the previous ended.
    Sequence(Vec<Phase>),
    /// Replay `body`. Mirrored repeats run every odd cycle backwards;
    /// plain repeats restart every cycle from the start value.
    Repeat {
        body: Box<Phase>,
        count: RepeatCount,
        mirror: bool,
    },
}

impl Phase {
    pub fn timed(target: f32, duration_ms: f64, easing: Easing) -> Self {
        Phase::Timed {
            target,
            duration_ms,
            easing,
        }
    }

    /// Timed transition with the default quad in-out curve.
    pub fn to(target: f32, duration_ms: f64) -> Self {
        Self::timed(target, duration_ms, Easing::default())
    }

    pub fn delay(duration_ms: f64) -> Self {
        Phase::Delay { duration_ms }
    }

    pub fn sequence(phases: impl IntoIterator<Item = Phase>) -> Self {
        Phase::Sequence(phases.into_iter().collect())
    }

    pub fn repeat(self, count: RepeatCount, mirror: bool) -> Self {
        Phase::Repeat {
            body: Box::new(self),
            count,
            mirror,
        }
    }

    /// Repeat forever, restarting from the start value each cycle.
    pub fn looped(self) -> Self {
        self.repeat(RepeatCount::Infinite, false)
    }

    /// Repeat forever, alternating forward and backward.
    pub fn ping_pong(self) -> Self {
        self.repeat(RepeatCount::Infinite, true)
    }

    /// Append a delay so the phase lasts at least `total_ms`.
    pub fn padded_to(self, total_ms: f64) -> Self {
        let d = self.duration_ms();
        if d >= total_ms {
            return self;
        }
        match self {
            Phase::Sequence(mut phases) => {
                phases.push(Phase::delay(total_ms - d));
                Phase::Sequence(phases)
            }
            other => Phase::Sequence(vec![other, Phase::delay(total_ms - d)]),
        }
    }

    /// Total length in milliseconds; infinite for endless repeats.
    pub fn duration_ms(&self) -> f64 {
        match self {
            Phase::Timed { duration_ms, .. } | Phase::Delay { duration_ms } => duration_ms.max(0.0),
            Phase::Sequence(phases) => phases.iter().map(Phase::duration_ms).sum(),
            Phase::Repeat { body, count, .. } => match count {
                RepeatCount::Infinite => f64::INFINITY,
                RepeatCount::Times(n) => body.duration_ms() * f64::from(*n),
            },
        }
    }

    /// Value once the phase has fully played.
    pub fn end_value(&self, start: f32) -> f32 {
        match self {
            Phase::Timed { target, .. } => *target,
            Phase::Delay { .. } => start,
            Phase::Sequence(phases) => phases.iter().fold(start, |v, p| p.end_value(v)),
            Phase::Repeat {
                body, count, mirror, ..
            } => match count {
                RepeatCount::Times(0) => start,
                RepeatCount::Times(n) if *mirror && n % 2 == 0 => start,
                _ => body.end_value(start),
            },
        }
    }

    /// Value at `elapsed_ms` for a timeline that started at `start`.
    pub fn value_at(&self, start: f32, elapsed_ms: f64) -> f32 {
        let t = elapsed_ms.max(0.0);
        match self {
            Phase::Timed {
                target,
                duration_ms,
                easing,
            } => {
                if *duration_ms <= 0.0 || t >= *duration_ms {
                    return *target;
                }
                let progress = (t / duration_ms) as f32;
                let value = start + (target - start) * easing.apply(progress);
                // Keep rounding from stepping past either endpoint.
                value.clamp(start.min(*target), start.max(*target))
            }
            Phase::Delay { .. } => start,
            Phase::Sequence(phases) => {
                let mut value = start;
                let mut remaining = t;
                for phase in phases {
                    let d = phase.duration_ms();
                    if remaining < d {
                        return phase.value_at(value, remaining);
                    }
                    remaining -= d;
                    value = phase.end_value(value);
                }
                value
            }
            Phase::Repeat {
                body,
                count,
                mirror,
            } => {
                let d = body.duration_ms();
                if d <= 0.0 || !d.is_finite() {
                    return body.value_at(start, t);
                }
                let cycle = (t / d).floor();
                if let RepeatCount::Times(n) = count {
                    if cycle >= f64::from(*n) {
                        return self.end_value(start);
                    }
                }
                let local = t - cycle * d;
                if *mirror && cycle % 2.0 == 1.0 {
                    body.value_at(start, d - local)
                } else {
                    body.value_at(start, local)
                }
            }
        }
    }

    /// Every explicit target value in the tree.
    pub fn targets(&self) -> Vec<f32> {
        let mut out = Vec::new();
        self.collect_targets(&mut out);
        out
    }

    fn collect_targets(&self, out: &mut Vec<f32>) {
        match self {
            Phase::Timed { target, .. } => out.push(*target),
            Phase::Delay { .. } => {}
            Phase::Sequence(phases) => phases.iter().for_each(|p| p.collect_targets(out)),
            Phase::Repeat { body, .. } => body.collect_targets(out),
        }
    }
}
