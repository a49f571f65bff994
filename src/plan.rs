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
use crate::factory;
use crate::stage::DftStage;
use crate::traits::FftSample;
use crate::FftDirection;
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Maximum nesting depth of a recursive stage run. Split radices are at
/// least 2, so this covers every transform size addressable by `usize`.
pub(crate) const RECURSION_STACK_DEPTH: usize = 32;

/// Which buffer a stage reads from; the write side is the stage's
/// `to_scratch` flag.
#[derive(Copy, Clone)]
enum Sel {
    Input,
    Out,
    Scratch,
}

/// Drives a contiguous recursion-flagged stage run starting at `entry`,
/// iteratively, with one repeat counter per depth. `visit` receives the
/// stage index and the element offset for each firing; the accumulator
/// grows by the fired stage's `out_offset`. Returns the deepest stage index
/// reached, so flat traversal can resume after the run.
///
/// The run finishes when the counters unwind past the entry stage, i.e. the
/// entry stage itself fires `repeats` times.
pub(crate) fn recursive_run<T>(
    stages: &[DftStage<T>],
    entry: usize,
    visit: &mut impl FnMut(usize, usize),
) -> usize {
    let mut stack = [0usize; RECURSION_STACK_DEPTH];
    let mut offset = 0usize;
    let mut rdepth = entry;
    let mut maxdepth = entry;

    loop {
        if stack[rdepth] == stages[rdepth].repeats {
            stack[rdepth] = 0;
            if rdepth == entry {
                break;
            }
            rdepth -= 1;
        } else {
            visit(rdepth, offset);
            offset += stages[rdepth].out_offset;
            stack[rdepth] += 1;
            if rdepth + 1 < stages.len() && stages[rdepth + 1].recursion {
                rdepth += 1;
            } else {
                maxdepth = rdepth;
            }
        }
    }

    maxdepth
}

/// An executable transform plan: an ordered, immutable stage list plus the
/// scratch sizing needed to run it.
///
/// The plan is read-only during execution, so a single instance may be
/// shared across threads as long as every call brings its own scratch
/// buffer of at least [`DftPlan::scratch_length`] complex elements.
pub struct DftPlan<T> {
    pub(crate) size: usize,
    pub(crate) temp_len: usize,
    pub(crate) data_size: usize,
    pub(crate) stages: Vec<DftStage<T>>,
}

impl<T: FftSample> DftPlan<T>
where
    f64: AsPrimitive<T>,
{
    /// Builds a plan for the given transform size. Fails on zero size or
    /// when any stage's precomputed tables cannot be allocated; a partially
    /// initialized plan is never returned.
    pub fn new(size: usize) -> Result<DftPlan<T>, FftError> {
        let parts = factory::plan_stages::<T>(size)?;
        Ok(DftPlan {
            size,
            temp_len: parts.temp_len,
            data_size: parts.data_size,
            stages: parts.stages,
        })
    }

    /// Transform size in complex samples.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Required scratch length in complex elements: the widest per-stage
    /// temp area plus one ping-pong window of `size` elements at the tail.
    pub fn scratch_length(&self) -> usize {
        self.temp_len
    }

    /// Total bytes of precomputed stage tables.
    pub fn data_size(&self) -> usize {
        self.data_size
    }

    /// Formats every stage's static parameters, one line per stage.
    pub fn dump(&self) -> String {
        self.stages
            .iter()
            .map(|s| s.dump())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Executes the transform in place.
    pub fn execute(
        &self,
        in_place: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
        direction: FftDirection,
    ) -> Result<(), FftError> {
        if in_place.len() != self.size {
            return Err(FftError::InvalidBufferLength(self.size, in_place.len()));
        }
        if scratch.len() < self.temp_len {
            return Err(FftError::ScratchBufferIsTooSmall(
                scratch.len(),
                self.temp_len,
            ));
        }
        self.execute_dft(in_place, None, scratch, direction);
        Ok(())
    }

    /// Executes the transform from `src` into `dst`.
    pub fn execute_out_of_place(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
        direction: FftDirection,
    ) -> Result<(), FftError> {
        if src.len() != self.size {
            return Err(FftError::InvalidBufferLength(self.size, src.len()));
        }
        if dst.len() != self.size {
            return Err(FftError::InvalidBufferLength(self.size, dst.len()));
        }
        if scratch.len() < self.temp_len {
            return Err(FftError::ScratchBufferIsTooSmall(
                scratch.len(),
                self.temp_len,
            ));
        }
        self.execute_dft(dst, Some(src), scratch, direction);
        Ok(())
    }

    /// The execution core. `input` is `None` for in-place calls, in which
    /// case the external input lives in `out`. Buffer lengths are already
    /// validated by the public entry points.
    fn execute_dft(
        &self,
        out: &mut [Complex<T>],
        input: Option<&[Complex<T>]>,
        temp: &mut [Complex<T>],
        direction: FftDirection,
    ) {
        // Single-stage fast path: no traversal, no ping-pong bookkeeping.
        if self.stages.len() == 1 && (self.stages[0].can_inplace || input.is_some()) {
            let stage_temp = &mut temp[..self.temp_len - self.size];
            return match input {
                Some(src) => {
                    self.stages[0]
                        .kernel
                        .execute_out_of_place(src, out, stage_temp, direction)
                }
                None => self.stages[0]
                    .kernel
                    .execute_in_place(out, stage_temp, direction),
            };
        }

        // Head of the temp region is the shared stage-private area, the
        // last `size` elements are the ping-pong scratch window.
        let temp = &mut temp[..self.temp_len];
        let (stage_temp, scratch) = temp.split_at_mut(self.temp_len - self.size);

        let in_scratch = input.is_none() && !self.stages[0].can_inplace;
        if in_scratch {
            scratch.copy_from_slice(out);
        }

        let stages = &self.stages;
        let mut run = |k: usize, offset: usize| {
            let stage = &stages[k];
            let len = stage.stage_size;
            let src = if k == 0 {
                if in_scratch {
                    Sel::Scratch
                } else if input.is_some() {
                    Sel::Input
                } else {
                    Sel::Out
                }
            } else if stages[k - 1].to_scratch {
                Sel::Scratch
            } else {
                Sel::Out
            };
            match (src, stage.to_scratch) {
                (Sel::Out, false) => {
                    debug_assert!(stage.can_inplace);
                    stage.kernel.execute_in_place(
                        &mut out[offset..offset + len],
                        stage_temp,
                        direction,
                    )
                }
                (Sel::Scratch, true) => {
                    debug_assert!(stage.can_inplace);
                    stage.kernel.execute_in_place(
                        &mut scratch[offset..offset + len],
                        stage_temp,
                        direction,
                    )
                }
                (Sel::Out, true) => stage.kernel.execute_out_of_place(
                    &out[offset..offset + len],
                    &mut scratch[offset..offset + len],
                    stage_temp,
                    direction,
                ),
                (Sel::Scratch, false) => stage.kernel.execute_out_of_place(
                    &scratch[offset..offset + len],
                    &mut out[offset..offset + len],
                    stage_temp,
                    direction,
                ),
                (Sel::Input, to_scratch) => {
                    if let Some(external) = input {
                        let dst_slice = if to_scratch {
                            &mut scratch[offset..offset + len]
                        } else {
                            &mut out[offset..offset + len]
                        };
                        stage.kernel.execute_out_of_place(
                            &external[offset..offset + len],
                            dst_slice,
                            stage_temp,
                            direction,
                        )
                    }
                }
            }
        };

        let count = stages.len();
        let mut depth = 0;
        while depth < count {
            if stages[depth].recursion {
                let maxdepth = recursive_run(stages, depth, &mut run);
                depth = maxdepth + 1;
            } else {
                run(depth, 0);
                depth += 1;
            }
        }
    }
}
