/*
 * // Copyright (c) 2026 planfft contributors. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::{try_vec, FftError};
use crate::plan::DftPlan;
use crate::traits::FftSample;
use crate::util::compute_twiddle;
use crate::FftDirection;
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Packed layout of a real signal's spectrum. A real transform of even size
/// N has Hermitian symmetry, so only bins 0..=N/2 are stored, and the DC and
/// Nyquist bins are purely real.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PackFormat {
    /// Slot 0 packs the DC real part and the Nyquist real part together as
    /// one complex value; N/2 slots total.
    Perm,
    /// DC and Nyquist are ordinary bins with explicit zero imaginary parts;
    /// N/2 + 1 slots total.
    CCs,
}

/// Real-valued transform plan of even size N, built on a complex plan of
/// size N/2.
///
/// Forward, the even/odd samples are packed as the real/imaginary halves of
/// a half-length complex signal, transformed, and the result is rewritten
/// into the packed spectral layout with one twiddle pass. Inverse runs the
/// algebraic mirror of that pass and the half-length inverse transform. The
/// inverse is unnormalized, so a forward/inverse round trip scales by N.
pub struct RealDftPlan<T> {
    size: usize,
    format: PackFormat,
    inner: DftPlan<T>,
    fwd_twiddles: Vec<Complex<T>>,
    inv_twiddles: Vec<Complex<T>>,
}

impl<T: FftSample> RealDftPlan<T>
where
    f64: AsPrimitive<T>,
{
    /// Builds a plan for an even transform size and a packing format fixed
    /// for the plan's lifetime.
    pub fn new(size: usize, format: PackFormat) -> Result<RealDftPlan<T>, FftError> {
        if size == 0 {
            return Err(FftError::ZeroSizedFft);
        }
        if size % 2 != 0 {
            return Err(FftError::RealSizeMustBeEven(size));
        }
        let inner = DftPlan::new(size / 2)?;

        // One twiddle per conjugate bin pair; the DC/Nyquist slot and the
        // self-paired center bin are handled outside the pair loop.
        let twiddle_count = if size % 4 == 0 { size / 4 } else { size / 4 + 1 } - 1;
        let mut fwd_twiddles = try_vec![Complex::<T>::zero(); twiddle_count];
        let mut inv_twiddles = try_vec![Complex::<T>::zero(); twiddle_count];
        for (i, twiddle) in fwd_twiddles.iter_mut().enumerate() {
            *twiddle = compute_twiddle::<T>(i + 1, size, FftDirection::Forward) * 0.5f64.as_();
        }
        for (i, twiddle) in inv_twiddles.iter_mut().enumerate() {
            *twiddle = compute_twiddle(i + 1, size, FftDirection::Inverse);
        }

        Ok(RealDftPlan {
            size,
            format,
            inner,
            fwd_twiddles,
            inv_twiddles,
        })
    }

    /// Transform size in real samples.
    pub fn real_length(&self) -> usize {
        self.size
    }

    /// Packed spectrum size in complex slots.
    pub fn complex_length(&self) -> usize {
        match self.format {
            PackFormat::Perm => self.size / 2,
            PackFormat::CCs => self.size / 2 + 1,
        }
    }

    /// Packing format fixed at construction.
    pub fn format(&self) -> PackFormat {
        self.format
    }

    /// Required scratch length in complex elements for either direction.
    pub fn scratch_length(&self) -> usize {
        self.size / 2 + self.inner.scratch_length()
    }

    /// Forward real-to-complex transform into the packed layout.
    pub fn execute_forward(
        &self,
        input: &[T],
        output: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        if input.len() != self.size {
            return Err(FftError::InvalidBufferLength(self.size, input.len()));
        }
        if output.len() != self.complex_length() {
            return Err(FftError::InvalidBufferLength(
                self.complex_length(),
                output.len(),
            ));
        }
        if scratch.len() < self.scratch_length() {
            return Err(FftError::ScratchBufferIsTooSmall(
                scratch.len(),
                self.scratch_length(),
            ));
        }
        let half = self.size / 2;

        // Adjacent sample pairs become the real and imaginary parts of the
        // half-length complex signal.
        for (dst, pair) in output.iter_mut().zip(input.chunks_exact(2)) {
            *dst = Complex::new(pair[0], pair[1]);
        }
        self.inner
            .execute(&mut output[..half], scratch, FftDirection::Forward)?;

        let z0 = output[0];
        let dc = z0.re + z0.im;
        let nyquist = z0.re - z0.im;
        match self.format {
            PackFormat::Perm => output[0] = Complex::new(dc, nyquist),
            PackFormat::CCs => {
                output[0] = Complex::new(dc, T::zero());
                output[half] = Complex::new(nyquist, T::zero());
            }
        }

        let one_half: T = 0.5f64.as_();
        for (k, twiddle) in self.fwd_twiddles.iter().enumerate() {
            let i = k + 1;
            let j = half - i;
            let sum = output[i] + output[j];
            let diff = output[i] - output[j];

            // The mirror bin's twiddle is this one with the real part
            // negated, so a single factor covers both writes.
            let twiddled_re_sum = sum.im * twiddle.re;
            let twiddled_im_sum = sum.im * twiddle.im;
            let twiddled_re_diff = diff.re * twiddle.re;
            let twiddled_im_diff = diff.re * twiddle.im;
            let half_sum_re = one_half * sum.re;
            let half_diff_im = one_half * diff.im;

            let twiddled_real = twiddled_re_sum + twiddled_im_diff;
            let twiddled_im = twiddled_im_sum - twiddled_re_diff;

            output[i] = Complex {
                re: half_sum_re + twiddled_real,
                im: half_diff_im + twiddled_im,
            };
            output[j] = Complex {
                re: half_sum_re - twiddled_real,
                im: twiddled_im - half_diff_im,
            };
        }

        // Self-paired center bin, present when the half size is even.
        if half % 2 == 0 {
            output[half / 2] = output[half / 2].conj();
        }
        Ok(())
    }

    /// Inverse complex-to-real transform from the packed layout.
    pub fn execute_inverse(
        &self,
        input: &[Complex<T>],
        output: &mut [T],
        scratch: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        if input.len() != self.complex_length() {
            return Err(FftError::InvalidBufferLength(
                self.complex_length(),
                input.len(),
            ));
        }
        if output.len() != self.size {
            return Err(FftError::InvalidBufferLength(self.size, output.len()));
        }
        if scratch.len() < self.scratch_length() {
            return Err(FftError::ScratchBufferIsTooSmall(
                scratch.len(),
                self.scratch_length(),
            ));
        }
        let half = self.size / 2;
        let (work, inner_scratch) = scratch.split_at_mut(half);

        let (dc, nyquist) = match self.format {
            PackFormat::Perm => (input[0].re, input[0].im),
            PackFormat::CCs => (input[0].re, input[half].re),
        };
        work[0] = Complex::new(dc + nyquist, dc - nyquist);

        for (k, twiddle) in self.inv_twiddles.iter().enumerate() {
            let i = k + 1;
            let j = half - i;
            let sum = input[i] + input[j];
            let diff = input[i] - input[j];

            let twiddled_re_sum = sum.im * twiddle.re;
            let twiddled_im_sum = sum.im * twiddle.im;
            let twiddled_re_diff = diff.re * twiddle.re;
            let twiddled_im_diff = diff.re * twiddle.im;

            let twiddled_real = twiddled_re_sum + twiddled_im_diff;
            let twiddled_im = twiddled_im_sum - twiddled_re_diff;

            work[i] = Complex {
                re: sum.re - twiddled_real,
                im: diff.im - twiddled_im,
            };
            work[j] = Complex {
                re: sum.re + twiddled_real,
                im: -twiddled_im - diff.im,
            };
        }

        if half % 2 == 0 {
            let center = input[half / 2];
            work[half / 2] = (center + center).conj();
        }

        self.inner
            .execute(work, inner_scratch, FftDirection::Inverse)?;

        for (pair, src) in output.chunks_exact_mut(2).zip(work.iter()) {
            pair[0] = src.re;
            pair[1] = src.im;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn naive_real_spectrum(input: &[f64]) -> Vec<Complex<f64>> {
        let n = input.len();
        (0..=n / 2)
            .map(|k| {
                let mut sum = Complex::<f64>::default();
                for (j, &x) in input.iter().enumerate() {
                    let angle = -2.0 * std::f64::consts::PI * (k * j) as f64 / n as f64;
                    sum += Complex::from_polar(x, angle);
                }
                sum
            })
            .collect()
    }

    fn random_real(n: usize) -> Vec<f64> {
        let mut rng = rand::rng();
        (0..n).map(|_| rng.random::<f64>() - 0.5).collect()
    }

    #[test]
    fn test_perm_packs_dc_and_nyquist_exactly() {
        // x[n] = 2 + (-1)^n: DC bin = 2n, Nyquist bin = n, all else zero,
        // and both values are exact in floating point.
        let n = 8usize;
        let input: Vec<f64> = (0..n).map(|i| 2.0 + if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let plan = RealDftPlan::<f64>::new(n, PackFormat::Perm).unwrap();
        let mut spectrum = vec![Complex::<f64>::default(); plan.complex_length()];
        let mut scratch = vec![Complex::<f64>::default(); plan.scratch_length()];
        plan.execute_forward(&input, &mut spectrum, &mut scratch)
            .unwrap();
        assert_eq!(spectrum[0], Complex::new(16.0, 8.0));
        for bin in spectrum.iter().skip(1) {
            assert!(bin.re.abs() < 1e-12 && bin.im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_ccs_has_explicit_nyquist_slot() {
        let n = 8usize;
        let input: Vec<f64> = (0..n).map(|i| 2.0 + if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let plan = RealDftPlan::<f64>::new(n, PackFormat::CCs).unwrap();
        assert_eq!(plan.complex_length(), 5);
        let mut spectrum = vec![Complex::<f64>::default(); plan.complex_length()];
        let mut scratch = vec![Complex::<f64>::default(); plan.scratch_length()];
        plan.execute_forward(&input, &mut spectrum, &mut scratch)
            .unwrap();
        assert_eq!(spectrum[0], Complex::new(16.0, 0.0));
        assert_eq!(spectrum[4], Complex::new(8.0, 0.0));
    }

    #[test]
    fn test_forward_matches_naive_ccs() {
        for &n in &[2usize, 4, 6, 8, 16, 24, 100] {
            let input = random_real(n);
            let plan = RealDftPlan::<f64>::new(n, PackFormat::CCs).unwrap();
            let mut spectrum = vec![Complex::<f64>::default(); plan.complex_length()];
            let mut scratch = vec![Complex::<f64>::default(); plan.scratch_length()];
            plan.execute_forward(&input, &mut spectrum, &mut scratch)
                .unwrap();
            let expected = naive_real_spectrum(&input);
            for (k, (a, b)) in spectrum.iter().zip(expected.iter()).enumerate() {
                assert!(
                    (a.re - b.re).abs() < 1e-9 && (a.im - b.im).abs() < 1e-9,
                    "bin {k} mismatch for n={n}: {a} != {b}"
                );
            }
        }
    }

    #[test]
    fn test_forward_matches_naive_perm() {
        for &n in &[4usize, 6, 8, 16, 24, 100] {
            let input = random_real(n);
            let plan = RealDftPlan::<f64>::new(n, PackFormat::Perm).unwrap();
            let mut spectrum = vec![Complex::<f64>::default(); plan.complex_length()];
            let mut scratch = vec![Complex::<f64>::default(); plan.scratch_length()];
            plan.execute_forward(&input, &mut spectrum, &mut scratch)
                .unwrap();
            let expected = naive_real_spectrum(&input);
            assert!((spectrum[0].re - expected[0].re).abs() < 1e-9);
            assert!((spectrum[0].im - expected[n / 2].re).abs() < 1e-9);
            for k in 1..n / 2 {
                assert!(
                    (spectrum[k].re - expected[k].re).abs() < 1e-9
                        && (spectrum[k].im - expected[k].im).abs() < 1e-9,
                    "bin {k} mismatch for n={n}"
                );
            }
        }
    }

    #[test]
    fn test_round_trip_both_formats() {
        for format in [PackFormat::Perm, PackFormat::CCs] {
            for &n in &[2usize, 4, 6, 8, 32, 100, 480] {
                let input = random_real(n);
                let plan = RealDftPlan::<f64>::new(n, format).unwrap();
                let mut spectrum = vec![Complex::<f64>::default(); plan.complex_length()];
                let mut scratch = vec![Complex::<f64>::default(); plan.scratch_length()];
                plan.execute_forward(&input, &mut spectrum, &mut scratch)
                    .unwrap();
                let mut recovered = vec![0.0f64; n];
                plan.execute_inverse(&spectrum, &mut recovered, &mut scratch)
                    .unwrap();
                let scale = 1.0 / n as f64;
                for (i, (a, b)) in recovered.iter().zip(input.iter()).enumerate() {
                    assert!(
                        (a * scale - b).abs() < 1e-9,
                        "sample {i} mismatch for n={n}, {format:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_round_trip_f32() {
        let n = 64usize;
        let mut rng = rand::rng();
        let input: Vec<f32> = (0..n).map(|_| rng.random::<f32>() - 0.5).collect();
        let plan = RealDftPlan::<f32>::new(n, PackFormat::Perm).unwrap();
        let mut spectrum = vec![Complex::<f32>::default(); plan.complex_length()];
        let mut scratch = vec![Complex::<f32>::default(); plan.scratch_length()];
        plan.execute_forward(&input, &mut spectrum, &mut scratch)
            .unwrap();
        let mut recovered = vec![0.0f32; n];
        plan.execute_inverse(&spectrum, &mut recovered, &mut scratch)
            .unwrap();
        let scale = 1.0 / n as f32;
        for (a, b) in recovered.iter().zip(input.iter()) {
            assert!((a * scale - b).abs() < 1e-4);
        }
    }

    #[test]
    fn test_error_paths() {
        assert!(matches!(
            RealDftPlan::<f64>::new(7, PackFormat::Perm),
            Err(FftError::RealSizeMustBeEven(7))
        ));
        assert!(matches!(
            RealDftPlan::<f64>::new(0, PackFormat::CCs),
            Err(FftError::ZeroSizedFft)
        ));

        let plan = RealDftPlan::<f64>::new(16, PackFormat::Perm).unwrap();
        let mut scratch = vec![Complex::<f64>::default(); plan.scratch_length()];
        let input = vec![0.0f64; 16];
        let mut wrong = vec![Complex::<f64>::default(); 9];
        assert!(matches!(
            plan.execute_forward(&input, &mut wrong, &mut scratch),
            Err(FftError::InvalidBufferLength(8, 9))
        ));
        let mut spectrum = vec![Complex::<f64>::default(); 8];
        let mut tiny = vec![Complex::<f64>::default(); 1];
        assert!(matches!(
            plan.execute_forward(&input, &mut spectrum, &mut tiny),
            Err(FftError::ScratchBufferIsTooSmall(1, _))
        ));
    }
}
