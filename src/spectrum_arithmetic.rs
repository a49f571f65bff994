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
//! Elementwise products over packed real-transform spectra.
//!
//! In the `Perm` layout slot 0 carries two unrelated real values, the DC and
//! Nyquist bins, so the generic complex product would cross-multiply them.
//! That slot is computed componentwise instead. `CCs` spectra need no
//! special case.
use crate::complex_fma::{c_mul_add_fast, c_mul_fast};
use crate::err::FftError;
use crate::r2c::PackFormat;
use crate::traits::FftSample;
use num_complex::Complex;

fn check_lengths<T>(
    dst: &[Complex<T>],
    a: &[Complex<T>],
    b: &[Complex<T>],
) -> Result<(), FftError> {
    if a.len() != b.len() {
        return Err(FftError::MismatchedSpectrumLengths(a.len(), b.len()));
    }
    if dst.len() != a.len() {
        return Err(FftError::MismatchedSpectrumLengths(dst.len(), a.len()));
    }
    Ok(())
}

/// dst = a * b, elementwise.
pub fn fft_multiply<T: FftSample>(
    dst: &mut [Complex<T>],
    a: &[Complex<T>],
    b: &[Complex<T>],
    format: PackFormat,
) -> Result<(), FftError> {
    check_lengths(dst, a, b)?;
    let skip = match format {
        PackFormat::Perm if !dst.is_empty() => {
            dst[0] = Complex::new(a[0].re * b[0].re, a[0].im * b[0].im);
            1
        }
        _ => 0,
    };
    for ((dst, &a), &b) in dst
        .iter_mut()
        .zip(a.iter())
        .zip(b.iter())
        .skip(skip)
    {
        *dst = c_mul_fast(a, b);
    }
    Ok(())
}

/// dst += a * b, elementwise.
pub fn fft_multiply_accumulate<T: FftSample>(
    dst: &mut [Complex<T>],
    a: &[Complex<T>],
    b: &[Complex<T>],
    format: PackFormat,
) -> Result<(), FftError> {
    check_lengths(dst, a, b)?;
    let skip = match format {
        PackFormat::Perm if !dst.is_empty() => {
            dst[0] = Complex::new(
                a[0].re.mul_add(b[0].re, dst[0].re),
                a[0].im.mul_add(b[0].im, dst[0].im),
            );
            1
        }
        _ => 0,
    };
    for ((dst, &a), &b) in dst
        .iter_mut()
        .zip(a.iter())
        .zip(b.iter())
        .skip(skip)
    {
        *dst = c_mul_add_fast(a, b, *dst);
    }
    Ok(())
}

/// dst = a + b * c, elementwise.
pub fn fft_multiply_add<T: FftSample>(
    dst: &mut [Complex<T>],
    a: &[Complex<T>],
    b: &[Complex<T>],
    c: &[Complex<T>],
    format: PackFormat,
) -> Result<(), FftError> {
    check_lengths(dst, b, c)?;
    if a.len() != dst.len() {
        return Err(FftError::MismatchedSpectrumLengths(a.len(), dst.len()));
    }
    let skip = match format {
        PackFormat::Perm if !dst.is_empty() => {
            dst[0] = Complex::new(
                b[0].re.mul_add(c[0].re, a[0].re),
                b[0].im.mul_add(c[0].im, a[0].im),
            );
            1
        }
        _ => 0,
    };
    for (((dst, &a), &b), &c) in dst
        .iter_mut()
        .zip(a.iter())
        .zip(b.iter())
        .zip(c.iter())
        .skip(skip)
    {
        *dst = c_mul_add_fast(b, c, a);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r2c::RealDftPlan;

    #[test]
    fn test_perm_bin0_is_componentwise() {
        let a = vec![Complex::new(2.0f64, 3.0), Complex::new(1.0, 1.0)];
        let b = vec![Complex::new(5.0f64, 7.0), Complex::new(2.0, 0.0)];
        let mut dst = vec![Complex::<f64>::default(); 2];
        fft_multiply(&mut dst, &a, &b, PackFormat::Perm).unwrap();
        // (2*5, 3*7), never the complex product (2*5-3*7, 2*7+3*5)
        assert_eq!(dst[0], Complex::new(10.0, 21.0));
        assert_eq!(dst[1], Complex::new(2.0, 2.0));
    }

    #[test]
    fn test_ccs_bin0_is_generic_product() {
        let a = vec![Complex::new(2.0f64, 3.0), Complex::new(1.0, 1.0)];
        let b = vec![Complex::new(5.0f64, 7.0), Complex::new(2.0, 0.0)];
        let mut dst = vec![Complex::<f64>::default(); 2];
        fft_multiply(&mut dst, &a, &b, PackFormat::CCs).unwrap();
        assert_eq!(dst[0], Complex::new(2.0 * 5.0 - 3.0 * 7.0, 2.0 * 7.0 + 3.0 * 5.0));
    }

    #[test]
    fn test_accumulate_keeps_existing_bin0() {
        let a = vec![Complex::new(2.0f64, 3.0)];
        let b = vec![Complex::new(5.0f64, 7.0)];
        let mut dst = vec![Complex::new(100.0f64, -1.0)];
        fft_multiply_accumulate(&mut dst, &a, &b, PackFormat::Perm).unwrap();
        assert_eq!(dst[0], Complex::new(110.0, 20.0));
    }

    #[test]
    fn test_multiply_add_three_operand() {
        let a = vec![Complex::new(1.0f64, 2.0), Complex::new(0.5, 0.5)];
        let b = vec![Complex::new(2.0f64, 3.0), Complex::new(1.0, -1.0)];
        let c = vec![Complex::new(5.0f64, 7.0), Complex::new(2.0, 2.0)];
        let mut dst = vec![Complex::<f64>::default(); 2];
        fft_multiply_add(&mut dst, &a, &b, &c, PackFormat::Perm).unwrap();
        assert_eq!(dst[0], Complex::new(1.0 + 10.0, 2.0 + 21.0));
        let generic = a[1] + b[1] * c[1];
        assert!((dst[1].re - generic.re).abs() < 1e-12);
        assert!((dst[1].im - generic.im).abs() < 1e-12);
    }

    #[test]
    fn test_length_mismatch_is_reported() {
        let a = vec![Complex::<f64>::default(); 4];
        let b = vec![Complex::<f64>::default(); 5];
        let mut dst = vec![Complex::<f64>::default(); 4];
        assert!(matches!(
            fft_multiply(&mut dst, &a, &b, PackFormat::CCs),
            Err(FftError::MismatchedSpectrumLengths(4, 5))
        ));
    }

    #[test]
    fn test_circular_convolution_via_perm_spectra() {
        // Multiplying two Perm spectra and inverting must equal the direct
        // circular convolution scaled by n.
        let n = 16usize;
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.7).sin()).collect();
        let y: Vec<f64> = (0..n).map(|i| 1.0 / (1.0 + i as f64)).collect();

        let plan = RealDftPlan::<f64>::new(n, PackFormat::Perm).unwrap();
        let mut scratch = vec![Complex::<f64>::default(); plan.scratch_length()];
        let mut fx = vec![Complex::<f64>::default(); plan.complex_length()];
        let mut fy = vec![Complex::<f64>::default(); plan.complex_length()];
        plan.execute_forward(&x, &mut fx, &mut scratch).unwrap();
        plan.execute_forward(&y, &mut fy, &mut scratch).unwrap();

        let mut product = vec![Complex::<f64>::default(); plan.complex_length()];
        fft_multiply(&mut product, &fx, &fy, PackFormat::Perm).unwrap();
        let mut got = vec![0.0f64; n];
        plan.execute_inverse(&product, &mut got, &mut scratch)
            .unwrap();

        for k in 0..n {
            let direct: f64 = (0..n).map(|j| x[j] * y[(n + k - j) % n]).sum();
            assert!(
                (got[k] / n as f64 - direct).abs() < 1e-9,
                "convolution sample {k} mismatch"
            );
        }
    }
}
