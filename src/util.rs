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
use crate::err::FftError;
use crate::traits::FftTrigonometry;
use crate::FftDirection;
use num_complex::Complex;
use num_traits::{AsPrimitive, Float};

pub(crate) fn compute_twiddle<T: Float + FftTrigonometry + 'static>(
    index: usize,
    fft_len: usize,
    direction: FftDirection,
) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let angle = (-2. * index as f64 / fft_len as f64).as_();
    let (v_sin, v_cos) = angle.sincos_pi();

    let result = Complex {
        re: v_cos,
        im: v_sin,
    };

    match direction {
        FftDirection::Forward => result,
        FftDirection::Inverse => result.conj(),
    }
}

/// Digit-reversal permutation in base `radix`
pub(crate) fn digit_reverse_indices(n: usize, radix: usize) -> Result<Vec<usize>, FftError> {
    assert!(radix >= 2, "radix must be at least 2");

    let mut indices = Vec::new();
    indices
        .try_reserve_exact(n)
        .map_err(|_| FftError::OutOfMemory(n))?;

    let mut digits = 0;
    let mut tmp = n;
    while tmp > 1 {
        tmp /= radix;
        digits += 1;
    }

    for i in 0..n {
        let mut x = i;
        let mut rev = 0;

        for _ in 0..digits {
            rev = rev * radix + (x % radix);
            x /= radix;
        }

        indices.push(rev);
    }

    Ok(indices)
}

/// In-place application of an involutory permutation (swaps each i < lut[i] pair).
pub(crate) fn permute_inplace<T: Copy + Clone>(table: &mut [T], lut: &[usize]) {
    for (i, &j) in lut.iter().enumerate() {
        if i < j {
            table.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_twiddle_quarter_turn() {
        let w: Complex<f64> = compute_twiddle(1, 4, FftDirection::Forward);
        assert!((w.re - 0.0).abs() < 1e-15);
        assert!((w.im - (-1.0)).abs() < 1e-15);
        let wi: Complex<f64> = compute_twiddle(1, 4, FftDirection::Inverse);
        assert!((wi.im - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_digit_reverse_is_involution_for_pow2() {
        for &n in &[2usize, 8, 16, 64] {
            let rev = digit_reverse_indices(n, 2).unwrap();
            for (i, &r) in rev.iter().enumerate() {
                assert_eq!(rev[r], i, "bit reversal must be an involution for n={n}");
            }
        }
    }

    #[test]
    fn test_permute_inplace_roundtrip() {
        let rev = digit_reverse_indices(8, 2).unwrap();
        let mut data: Vec<usize> = (0..8).collect();
        permute_inplace(&mut data, &rev);
        assert_eq!(data, vec![0, 4, 2, 6, 1, 5, 3, 7]);
        permute_inplace(&mut data, &rev);
        assert_eq!(data, (0..8).collect::<Vec<_>>());
    }
}
