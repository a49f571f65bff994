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
//! Plan-driven mixed-radix DFT.
//!
//! A [`DftPlan`] owns an ordered list of transform stages for one size and
//! executes them over caller buffers, ping-ponging through a caller-supplied
//! scratch region. [`RealDftPlan`] wraps a half-size complex plan for
//! real-valued signals and packs the Hermitian spectrum into one of two
//! layouts ([`PackFormat`]). Spectra produced that way can be combined with
//! the [`fft_multiply`] family for fast convolution.
mod complex_fma;
mod dft;
mod err;
mod factory;
mod mixed_radix;
mod plan;
mod prime_factors;
mod r2c;
mod radix2;
mod spectrum_arithmetic;
mod stage;
mod traits;
mod util;

pub use err::FftError;
pub use plan::DftPlan;
pub use r2c::{PackFormat, RealDftPlan};
pub use spectrum_arithmetic::{fft_multiply, fft_multiply_accumulate, fft_multiply_add};
pub use traits::{FftSample, FftTrigonometry};

/// Transform direction. The inverse is unnormalized: running a forward and
/// an inverse transform back to back scales the signal by its length.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    Forward,
    Inverse,
}
