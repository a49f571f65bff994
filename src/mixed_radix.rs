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
use crate::util::compute_twiddle;
use crate::FftDirection;
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Widest radix a single DIF split stage may carry. The factory merges prime
/// factors into composite split radices but never past this bound, so the
/// butterfly gather fits a fixed stack buffer.
pub(crate) const MAX_SPLIT_RADIX: usize = 32;

/// One decimation-in-frequency split of a length-`len` block into `radix`
/// sub-blocks of `len / radix` elements.
///
/// For n in 0..len/radix the kernel gathers the strided r-tuple, applies the
/// r-point butterfly, multiplies block c by w_len^(n*c) and scatters the
/// results back to the same positions, so the stage is in-place safe. Block
/// c then holds the input of an independent sub-transform producing bins
/// {q*radix + c}.
pub(crate) struct DifSplitKernel<T> {
    twiddles: Vec<Complex<T>>,
    roots: Vec<Complex<T>>,
    radix: usize,
    len: usize,
}

impl<T: FftSample> DifSplitKernel<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(len: usize, radix: usize) -> Result<DifSplitKernel<T>, FftError> {
        assert!(radix >= 2 && radix <= MAX_SPLIT_RADIX);
        assert_eq!(len % radix, 0);
        let h = len / radix;

        let mut roots = try_vec![Complex::<T>::zero(); radix];
        for (j, dst) in roots.iter_mut().enumerate() {
            *dst = compute_twiddle(j, radix, FftDirection::Forward);
        }

        let mut twiddles = try_vec![Complex::<T>::zero(); h * (radix - 1)];
        for n in 0..h {
            for c in 1..radix {
                twiddles[n * (radix - 1) + (c - 1)] =
                    compute_twiddle(n * c, len, FftDirection::Forward);
            }
        }

        Ok(DifSplitKernel {
            twiddles,
            roots,
            radix,
            len,
        })
    }

    pub fn data_bytes(&self) -> usize {
        (self.twiddles.len() + self.roots.len()) * size_of::<Complex<T>>()
    }

    #[inline]
    fn butterfly(
        &self,
        gathered: &[Complex<T>],
        n: usize,
        dst: &mut [Complex<T>],
        direction: FftDirection,
    ) {
        let r = self.radix;
        let h = self.len / r;
        for c in 0..r {
            let mut acc = gathered[0];
            for (p, &value) in gathered.iter().enumerate().skip(1) {
                let w = self.roots[(p * c) % r];
                acc = acc
                    + match direction {
                        FftDirection::Forward => c_mul_fast(value, w),
                        FftDirection::Inverse => c_mul_conj_fast(value, w),
                    };
            }
            if c > 0 {
                let tw = self.twiddles[n * (r - 1) + (c - 1)];
                acc = match direction {
                    FftDirection::Forward => c_mul_fast(acc, tw),
                    FftDirection::Inverse => c_mul_conj_fast(acc, tw),
                };
            }
            dst[c * h + n] = acc;
        }
    }

    pub fn execute_in_place(&self, buf: &mut [Complex<T>], direction: FftDirection) {
        debug_assert_eq!(buf.len(), self.len);
        let r = self.radix;
        let h = self.len / r;
        let mut gathered = [Complex::<T>::zero(); MAX_SPLIT_RADIX];
        for n in 0..h {
            for (p, slot) in gathered[..r].iter_mut().enumerate() {
                *slot = buf[n + p * h];
            }
            self.butterfly(&gathered[..r], n, buf, direction);
        }
    }

    pub fn execute_out_of_place(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
        direction: FftDirection,
    ) {
        debug_assert_eq!(src.len(), self.len);
        debug_assert_eq!(dst.len(), self.len);
        let r = self.radix;
        let h = self.len / r;
        let mut gathered = [Complex::<T>::zero(); MAX_SPLIT_RADIX];
        for n in 0..h {
            for (p, slot) in gathered[..r].iter_mut().enumerate() {
                *slot = src[n + p * h];
            }
            self.butterfly(&gathered[..r], n, dst, direction);
        }
    }
}

/// Final digit-reversal stage that maps the recursive run's internal block
/// order back to natural bin order: dst[q] = src[positions[q]].
pub(crate) struct ReorderKernel {
    positions: Vec<usize>,
}

impl ReorderKernel {
    pub fn new(size: usize, splits: &[usize]) -> Result<ReorderKernel, FftError> {
        let mut positions = try_vec![0usize; size];
        for (q, dst) in positions.iter_mut().enumerate() {
            *dst = internal_position(size, splits, q);
        }
        Ok(ReorderKernel::from_positions(positions))
    }

    pub fn from_positions(positions: Vec<usize>) -> ReorderKernel {
        ReorderKernel { positions }
    }

    pub fn data_bytes(&self) -> usize {
        self.positions.len() * size_of::<usize>()
    }

    pub fn execute_out_of_place<T: Copy>(&self, src: &[Complex<T>], dst: &mut [Complex<T>]) {
        for (out, &pos) in dst.iter_mut().zip(self.positions.iter()) {
            *out = src[pos];
        }
    }

    pub fn execute_in_place<T: Copy>(&self, buf: &mut [Complex<T>], temp: &mut [Complex<T>]) {
        let staging = &mut temp[..buf.len()];
        staging.copy_from_slice(buf);
        self.execute_out_of_place(staging, buf);
    }
}

/// Position of natural bin `q` inside the recursive run's output: a DIF
/// split by r leaves bin q in sub-block q % r at sub-bin q / r, and the leaf
/// transform emits natural order within its block.
fn internal_position(size: usize, splits: &[usize], q: usize) -> usize {
    match splits.split_first() {
        None => q,
        Some((&r, rest)) => (q % r) * (size / r) + internal_position(size / r, rest, q / r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft::DftKernel;

    #[test]
    fn test_internal_position_single_split() {
        // size 12 split by 3 with a natural-order leaf of 4
        let expected: Vec<usize> = (0..12).map(|q| (q % 3) * 4 + q / 3).collect();
        let got: Vec<usize> = (0..12).map(|q| internal_position(12, &[3], q)).collect();
        assert_eq!(expected, got);
    }

    #[test]
    fn test_split_plus_leaves_matches_direct_dft() {
        // One radix-3 split of 6 into two-point leaves, reordered, must equal
        // the direct transform.
        let size = 6usize;
        let input: Vec<Complex<f64>> = (0..size)
            .map(|i| Complex::new(0.3 * i as f64 - 1.0, 1.7 - 0.45 * i as f64))
            .collect();

        let mut staged = input.clone();
        let split = DifSplitKernel::<f64>::new(size, 3).unwrap();
        split.execute_in_place(&mut staged, FftDirection::Forward);
        let leaf = DftKernel::<f64>::new(2).unwrap();
        let mut temp = vec![Complex::<f64>::default(); size];
        for block in staged.chunks_exact_mut(2) {
            leaf.execute_in_place(block, &mut temp, FftDirection::Forward);
        }
        let reorder = ReorderKernel::new(size, &[3]).unwrap();
        let mut got = vec![Complex::<f64>::default(); size];
        reorder.execute_out_of_place(&staged, &mut got);

        let direct = DftKernel::<f64>::new(size).unwrap();
        let mut expected = vec![Complex::<f64>::default(); size];
        direct.execute_out_of_place(&input, &mut expected, &mut temp, FftDirection::Forward);

        for (a, b) in got.iter().zip(expected.iter()) {
            assert!((a.re - b.re).abs() < 1e-10);
            assert!((a.im - b.im).abs() < 1e-10);
        }
    }

    #[test]
    fn test_split_in_place_matches_out_of_place() {
        let size = 20usize;
        let input: Vec<Complex<f64>> = (0..size)
            .map(|i| Complex::new((i * i % 7) as f64, -(i as f64) * 0.2))
            .collect();
        let split = DifSplitKernel::<f64>::new(size, 5).unwrap();

        let mut inplace = input.clone();
        split.execute_in_place(&mut inplace, FftDirection::Forward);

        let mut oop = vec![Complex::<f64>::default(); size];
        split.execute_out_of_place(&input, &mut oop, FftDirection::Forward);

        assert_eq!(inplace.len(), oop.len());
        for (a, b) in inplace.iter().zip(oop.iter()) {
            assert!((a.re - b.re).abs() < 1e-12);
            assert!((a.im - b.im).abs() < 1e-12);
        }
    }
}
