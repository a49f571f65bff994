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
use crate::complex_fma::{c_mul_add_fast, c_mul_conj_fast};
use crate::err::{try_vec, FftError};
use crate::traits::FftSample;
use crate::util::compute_twiddle;
use crate::FftDirection;
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Direct O(n^2) DFT over a precomputed twiddle row.
///
/// Serves both as the whole plan for small and prime sizes and as the leaf
/// kernel at the bottom of a recursive decomposition. Forward twiddles are
/// stored; the inverse conjugates them on the fly, so one table serves both
/// directions.
pub(crate) struct DftKernel<T> {
    twiddles: Vec<Complex<T>>,
    size: usize,
}

impl<T: FftSample> DftKernel<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(size: usize) -> Result<DftKernel<T>, FftError> {
        let mut twiddles = try_vec![Complex::<T>::zero(); size];
        for (k, dst) in twiddles.iter_mut().enumerate() {
            *dst = compute_twiddle(k, size, FftDirection::Forward);
        }
        Ok(DftKernel { twiddles, size })
    }

    pub fn data_bytes(&self) -> usize {
        self.twiddles.len() * size_of::<Complex<T>>()
    }

    fn process(&self, src: &[Complex<T>], dst: &mut [Complex<T>], direction: FftDirection) {
        for (k, out) in dst.iter_mut().enumerate() {
            let mut sum = Complex::<T>::zero();
            let mut twiddle_idx = 0usize;
            for value in src.iter() {
                let w = unsafe { *self.twiddles.get_unchecked(twiddle_idx) };
                sum = match direction {
                    FftDirection::Forward => c_mul_add_fast(*value, w, sum),
                    FftDirection::Inverse => c_mul_conj_fast(*value, w) + sum,
                };
                twiddle_idx += k;
                if twiddle_idx >= self.twiddles.len() {
                    twiddle_idx -= self.twiddles.len();
                }
            }
            *out = sum;
        }
    }

    pub fn execute_out_of_place(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
        _temp: &mut [Complex<T>],
        direction: FftDirection,
    ) {
        debug_assert_eq!(src.len(), self.size);
        debug_assert_eq!(dst.len(), self.size);
        self.process(src, dst, direction);
    }

    pub fn execute_in_place(
        &self,
        buf: &mut [Complex<T>],
        temp: &mut [Complex<T>],
        direction: FftDirection,
    ) {
        debug_assert_eq!(buf.len(), self.size);
        let staging = &mut temp[..self.size];
        staging.copy_from_slice(buf);
        self.process(staging, buf, direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dft_round_trip() {
        for size in 1..24usize {
            let mut input = vec![Complex::<f64>::default(); size];
            for (i, z) in input.iter_mut().enumerate() {
                *z = Complex::new(i as f64 * 0.25 - 1.0, (size - i) as f64 * 0.5);
            }
            let src = input.clone();
            let kernel = DftKernel::new(size).unwrap();
            let mut temp = vec![Complex::<f64>::default(); size];
            kernel.execute_in_place(&mut input, &mut temp, FftDirection::Forward);
            kernel.execute_in_place(&mut input, &mut temp, FftDirection::Inverse);
            for (a, b) in input.iter().zip(src.iter()) {
                let scale = 1.0 / size as f64;
                assert!(
                    (a.re * scale - b.re).abs() < 1e-9,
                    "re mismatch for size {size}"
                );
                assert!(
                    (a.im * scale - b.im).abs() < 1e-9,
                    "im mismatch for size {size}"
                );
            }
        }
    }

    #[test]
    fn test_dft_impulse() {
        let kernel = DftKernel::new(8).unwrap();
        let src = {
            let mut v = vec![Complex::<f64>::default(); 8];
            v[0] = Complex::new(1.0, 0.0);
            v
        };
        let mut dst = vec![Complex::<f64>::default(); 8];
        let mut temp = vec![Complex::<f64>::default(); 8];
        kernel.execute_out_of_place(&src, &mut dst, &mut temp, FftDirection::Forward);
        for bin in dst.iter() {
            assert!((bin.re - 1.0).abs() < 1e-12);
            assert!(bin.im.abs() < 1e-12);
        }
    }
}
