//! Piecewise-linear range mapping.

/// What to do with values outside the input range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Continue the first/last segment's slope.
    #[default]
    Extend,
    /// Hold the first/last output value.
    Clamp,
}

/// Map `value` through the piecewise-linear function defined by the
/// breakpoints `input -> output`.
///
/// `input` must be ascending and the same length as `output`. With fewer
/// than two breakpoints the first output (or `value` itself) is returned.
pub fn interpolate(value: f32, input: &[f32], output: &[f32], extrapolate: Extrapolate) -> f32 {
    let n = input.len().min(output.len());
    if n < 2 {
        return output.first().copied().unwrap_or(value);
    }

    if extrapolate == Extrapolate::Clamp {
        if value <= input[0] {
            return output[0];
        }
        if value >= input[n - 1] {
            return output[n - 1];
        }
    }

    // Segment containing `value`; out-of-range values use the end segments.
    let seg = (1..n - 1).find(|&i| value < input[i]).map_or(n - 2, |i| i - 1);

    let (in0, in1) = (input[seg], input[seg + 1]);
    let (out0, out1) = (output[seg], output[seg + 1]);
    let span = in1 - in0;
    if span == 0.0 {
        return out0;
    }
    out0 + (value - in0) / span * (out1 - out0)
}
