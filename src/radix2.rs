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
use crate::complex_fma::{c_mul_conj_fast, c_mul_fast};
use crate::err::{try_vec, FftError};
use crate::traits::FftSample;
use crate::util::{digit_reverse_indices, permute_inplace, compute_twiddle};
use crate::FftDirection;
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Bit-reversal permutation stage for the flat power-of-two path.
///
/// Bit reversal is an involution, so the in-place variant is a plain swap
/// walk over the lookup table.
pub(crate) struct BitReverseKernel {
    permutations: Vec<usize>,
}

impl BitReverseKernel {
    pub fn new(size: usize) -> Result<BitReverseKernel, FftError> {
        assert!(size.is_power_of_two(), "input length must be a power of 2");
        Ok(BitReverseKernel {
            permutations: digit_reverse_indices(size, 2)?,
        })
    }

    pub fn data_bytes(&self) -> usize {
        self.permutations.len() * size_of::<usize>()
    }

    pub fn execute_in_place<T: Copy>(&self, buf: &mut [Complex<T>]) {
        permute_inplace(buf, &self.permutations);
    }

    pub fn execute_out_of_place<T: Copy>(&self, src: &[Complex<T>], dst: &mut [Complex<T>]) {
        for (out, &rev) in dst.iter_mut().zip(self.permutations.iter()) {
            *out = src[rev];
        }
    }
}

/// One decimation-in-time butterfly level of a radix-2 transform.
///
/// `len` is the butterfly span of this level; a plan runs one pass kernel
/// per level, 2, 4, ..., n, over the whole (bit-reversed) buffer.
pub(crate) struct Radix2PassKernel<T> {
    twiddles: Vec<Complex<T>>,
    len: usize,
}

impl<T: FftSample> Radix2PassKernel<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(len: usize) -> Result<Radix2PassKernel<T>, FftError> {
        let half = len / 2;
        let mut twiddles = try_vec![Complex::<T>::zero(); half];
        for (j, dst) in twiddles.iter_mut().enumerate() {
            *dst = compute_twiddle(j, len, FftDirection::Forward);
        }
        Ok(Radix2PassKernel { twiddles, len })
    }

    pub fn data_bytes(&self) -> usize {
        self.twiddles.len() * size_of::<Complex<T>>()
    }

    pub fn execute_in_place(&self, buf: &mut [Complex<T>], direction: FftDirection) {
        let half = self.len / 2;
        for data in buf.chunks_exact_mut(self.len) {
            for j in 0..half {
                let u = data[j];
                let tw = unsafe { *self.twiddles.get_unchecked(j) };
                let t = match direction {
                    FftDirection::Forward => c_mul_fast(tw, data[j + half]),
                    FftDirection::Inverse => c_mul_conj_fast(data[j + half], tw),
                };
                data[j] = u + t;
                data[j + half] = u - t;
            }
        }
    }

    pub fn execute_out_of_place(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
        direction: FftDirection,
    ) {
        dst.copy_from_slice(src);
        self.execute_in_place(dst, direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_radix2_levels_round_trip() {
        for i in 1..12u32 {
            let size = 2usize.pow(i);
            let mut input = vec![Complex::<f32>::default(); size];
            for z in input.iter_mut() {
                *z = Complex {
                    re: rand::rng().random(),
                    im: rand::rng().random(),
                };
            }
            let src = input.to_vec();

            let reverse = BitReverseKernel::new(size).unwrap();
            let mut passes = Vec::new();
            let mut len = 2;
            while len <= size {
                passes.push(Radix2PassKernel::<f32>::new(len).unwrap());
                len *= 2;
            }

            reverse.execute_in_place(&mut input);
            for pass in passes.iter() {
                pass.execute_in_place(&mut input, FftDirection::Forward);
            }
            reverse.execute_in_place(&mut input);
            for pass in passes.iter() {
                pass.execute_in_place(&mut input, FftDirection::Inverse);
            }

            input = input
                .iter()
                .map(|&x| x * (1.0 / input.len() as f32))
                .collect();

            input.iter().zip(src.iter()).for_each(|(a, b)| {
                assert!(
                    (a.re - b.re).abs() < 1e-4,
                    "a_re {} != b_re {} for size {}",
                    a.re,
                    b.re,
                    size
                );
                assert!(
                    (a.im - b.im).abs() < 1e-4,
                    "a_im {} != b_im {} for size {}",
                    a.im,
                    b.im,
                    size
                );
            });
        }
    }
}
