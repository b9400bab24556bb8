/*
Ladder Filter Core
==================

A discretized Moog-style 4-pole low-pass ladder. Four one-pole stages in
series, with the fourth stage's previous output fed back (inverted) into the
input to produce resonance.

Per sample, with cutoff in [0, 1] and resonance in [0, 4]:

    fl = cutoff * 1.16
    fb = resonance * (1 - 0.15 * fl²)
    x  = (input - out4 * fb) * 0.35013 * fl⁴
    out_k = in_k + 0.3 * in_k_prev + (1 - fl) * out_k_prev   (k = 1..4)

Output is the fourth stage. The stage registers are the filter's entire
memory and use f64: the recursive feedback path accumulates rounding error
in f32 audibly at low cutoffs. The result narrows back to f32 at the buffer
boundary.

Stability is handled by clamping at the inputs: cutoff and resonance are
clamped into their stable ranges before deriving coefficients, and the
post-feedback sample is clamped to a range far outside audio level so that
runaway self-oscillation at maximum resonance stays finite. Non-finite
output is a bug, never a runtime state to detect.
*/

/// Values past this magnitude are runaway feedback, not signal.
const FEEDBACK_LIMIT: f64 = 1.0e3;

#[derive(Debug, Clone, Default)]
pub struct LadderFilter {
    input: [f64; 4],
    output: [f64; 4],
}

impl LadderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one sample through the four-pole cascade.
    #[inline]
    pub fn next_sample(&mut self, sample: f32, cutoff: f32, resonance: f32) -> f32 {
        let fl = f64::from(cutoff.clamp(0.0, 1.0)) * 1.16;
        let fb = f64::from(resonance.clamp(0.0, 4.0)) * (1.0 - 0.15 * fl * fl);

        let mut x = f64::from(sample) - self.output[3] * fb;
        x = x.clamp(-FEEDBACK_LIMIT, FEEDBACK_LIMIT);
        x *= 0.35013 * (fl * fl) * (fl * fl);

        for k in 0..4 {
            let out = x + 0.3 * self.input[k] + (1.0 - fl) * self.output[k];
            self.input[k] = x;
            self.output[k] = out;
            x = out;
        }

        self.output[3] as f32
    }

    /// Clear all stage registers.
    pub fn reset(&mut self) {
        self.input = [0.0; 4];
        self.output = [0.0; 4];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_filter_kills_the_signal() {
        let mut filter = LadderFilter::new();
        let mut energy = 0.0f32;
        for i in 0..512 {
            let input = if i % 2 == 0 { 1.0 } else { -1.0 };
            let out = filter.next_sample(input, 0.0, 0.0);
            energy += out * out;
        }
        assert!(energy < 1e-9, "cutoff 0 should pass nothing, energy {energy}");
    }

    #[test]
    fn open_filter_passes_dc() {
        let mut filter = LadderFilter::new();
        let mut out = 0.0;
        for _ in 0..4096 {
            out = filter.next_sample(1.0, 1.0, 0.0);
        }
        assert!(out.is_finite());
        assert!(out > 0.5, "wide-open filter should pass DC, got {out}");
    }

    #[test]
    fn finite_over_full_clamp_domain() {
        // Sweep the whole (cutoff, resonance) grid, including the
        // self-oscillating corner, with a worst-case square-ish input.
        for ci in 0..=10 {
            for ri in 0..=8 {
                let cutoff = ci as f32 / 10.0;
                let resonance = ri as f32 / 2.0;
                let mut filter = LadderFilter::new();
                let mut phase = 0.0f32;
                for _ in 0..4096 {
                    phase += 0.3;
                    let input = if phase.sin() >= 0.0 { 1.0 } else { -1.0 };
                    let out = filter.next_sample(input, cutoff, resonance);
                    assert!(
                        out.is_finite(),
                        "non-finite output at cutoff {cutoff}, resonance {resonance}"
                    );
                }
            }
        }
    }

    #[test]
    fn out_of_range_controls_are_clamped() {
        let mut a = LadderFilter::new();
        let mut b = LadderFilter::new();
        for i in 0..128 {
            let input = (i as f32 * 0.37).sin();
            let clamped = a.next_sample(input, 1.0, 4.0);
            let wild = b.next_sample(input, 7.5, 100.0);
            assert_eq!(clamped, wild);
        }
    }

    #[test]
    fn reset_clears_history() {
        let mut filter = LadderFilter::new();
        for _ in 0..64 {
            filter.next_sample(1.0, 0.8, 0.5);
        }
        filter.reset();
        let out = filter.next_sample(0.0, 0.8, 0.5);
        assert_eq!(out, 0.0);
    }
}
