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
use num_complex::Complex;
use num_traits::Float;

/// a * b, FMA-shaped so the backend can contract it.
#[inline(always)]
pub(crate) fn c_mul_fast<T: Float>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    Complex {
        re: a.re.mul_add(b.re, -(a.im * b.im)),
        im: a.re.mul_add(b.im, a.im * b.re),
    }
}

/// a * b + acc
#[inline(always)]
pub(crate) fn c_mul_add_fast<T: Float>(
    a: Complex<T>,
    b: Complex<T>,
    acc: Complex<T>,
) -> Complex<T> {
    Complex {
        re: a.re.mul_add(b.re, acc.re) - a.im * b.im,
        im: a.re.mul_add(b.im, acc.im) + a.im * b.re,
    }
}

/// a * b.conj()
#[inline(always)]
pub(crate) fn c_mul_conj_fast<T: Float>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    Complex {
        re: a.re.mul_add(b.re, a.im * b.im),
        im: a.im.mul_add(b.re, -(a.re * b.im)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_matches_operator() {
        let a = Complex::new(1.5f64, -2.25);
        let b = Complex::new(-0.75f64, 3.5);
        let fast = c_mul_fast(a, b);
        let exact = a * b;
        assert!((fast.re - exact.re).abs() < 1e-12);
        assert!((fast.im - exact.im).abs() < 1e-12);
    }

    #[test]
    fn test_mul_conj() {
        let a = Complex::new(2.0f64, 1.0);
        let b = Complex::new(0.5f64, -0.25);
        let got = c_mul_conj_fast(a, b);
        let exact = a * b.conj();
        assert!((got.re - exact.re).abs() < 1e-12);
        assert!((got.im - exact.im).abs() < 1e-12);
    }

    #[test]
    fn test_mul_add() {
        let a = Complex::new(-1.0f64, 4.0);
        let b = Complex::new(2.5f64, 0.5);
        let acc = Complex::new(10.0f64, -3.0);
        let got = c_mul_add_fast(a, b, acc);
        let exact = a * b + acc;
        assert!((got.re - exact.re).abs() < 1e-12);
        assert!((got.im - exact.im).abs() < 1e-12);
    }
}
