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
use crate::dft::DftKernel;
use crate::mixed_radix::{DifSplitKernel, ReorderKernel};
use crate::radix2::{BitReverseKernel, Radix2PassKernel};
use crate::traits::FftSample;
use crate::FftDirection;
use num_complex::Complex;
use num_traits::AsPrimitive;

/// The closed set of transform steps the factory can emit. Dispatch is a
/// plain match on an inline tag rather than a virtual call per stage.
pub(crate) enum StageKernel<T> {
    Dft(DftKernel<T>),
    BitReverse(BitReverseKernel),
    Radix2Pass(Radix2PassKernel<T>),
    DifSplit(DifSplitKernel<T>),
    Reorder(ReorderKernel),
}

impl<T: FftSample> StageKernel<T>
where
    f64: AsPrimitive<T>,
{
    pub fn execute_in_place(
        &self,
        buf: &mut [Complex<T>],
        temp: &mut [Complex<T>],
        direction: FftDirection,
    ) {
        match self {
            StageKernel::Dft(kernel) => kernel.execute_in_place(buf, temp, direction),
            StageKernel::BitReverse(kernel) => kernel.execute_in_place(buf),
            StageKernel::Radix2Pass(kernel) => kernel.execute_in_place(buf, direction),
            StageKernel::DifSplit(kernel) => kernel.execute_in_place(buf, direction),
            StageKernel::Reorder(kernel) => kernel.execute_in_place(buf, temp),
        }
    }

    pub fn execute_out_of_place(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
        temp: &mut [Complex<T>],
        direction: FftDirection,
    ) {
        match self {
            StageKernel::Dft(kernel) => kernel.execute_out_of_place(src, dst, temp, direction),
            StageKernel::BitReverse(kernel) => kernel.execute_out_of_place(src, dst),
            StageKernel::Radix2Pass(kernel) => kernel.execute_out_of_place(src, dst, direction),
            StageKernel::DifSplit(kernel) => kernel.execute_out_of_place(src, dst, direction),
            StageKernel::Reorder(kernel) => kernel.execute_out_of_place(src, dst),
        }
    }

    pub fn data_bytes(&self) -> usize {
        match self {
            StageKernel::Dft(kernel) => kernel.data_bytes(),
            StageKernel::BitReverse(kernel) => kernel.data_bytes(),
            StageKernel::Radix2Pass(kernel) => kernel.data_bytes(),
            StageKernel::DifSplit(kernel) => kernel.data_bytes(),
            StageKernel::Reorder(kernel) => kernel.data_bytes(),
        }
    }
}

/// One executable step of a factored transform, with the scheduling metadata
/// the plan traversal consumes. The stage list is immutable once the factory
/// has populated it.
pub(crate) struct DftStage<T> {
    pub kernel: StageKernel<T>,
    pub name: &'static str,
    /// Radix factor this stage applies (diagnostic).
    pub radix: usize,
    /// Number of complex elements the stage transforms per execution.
    pub stage_size: usize,
    /// Times this stage fires per firing of its parent in a recursive run.
    pub repeats: usize,
    /// Element offset added to the traversal accumulator after each firing.
    pub out_offset: usize,
    /// Butterfly groups per execution (diagnostic).
    pub blocks: usize,
    /// Stage-private temp requirement in complex elements.
    pub temp_len: usize,
    /// Bytes of precomputed tables owned by the kernel.
    pub data_size: usize,
    /// Participates in the nested (recursive) traversal.
    pub recursion: bool,
    /// Safe to execute with aliasing input and output.
    pub can_inplace: bool,
    /// Configured by the factory to run in place in this plan.
    pub inplace: bool,
    /// Output lands in the scratch window instead of the out buffer.
    pub to_scratch: bool,
    /// Output order still needs a reorder stage downstream.
    pub need_reorder: bool,
}

impl<T> DftStage<T> {
    /// Formats the stage's static parameters, one line.
    pub fn dump(&self) -> String {
        format!(
            "{}: radix {:>3}, size {:>7}, repeats {:>5}, out_offset {:>7}, blocks {:>6}, data {:>8}, temp {:>7}, recursion {}, can_inplace {}, inplace {}, to_scratch {}, need_reorder {}",
            self.name,
            self.radix,
            self.stage_size,
            self.repeats,
            self.out_offset,
            self.blocks,
            self.data_size,
            self.temp_len,
            self.recursion as u8,
            self.can_inplace as u8,
            self.inplace as u8,
            self.to_scratch as u8,
            self.need_reorder as u8,
        )
    }
}
