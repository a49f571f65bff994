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
use crate::err::FftError;
use crate::mixed_radix::{DifSplitKernel, ReorderKernel, MAX_SPLIT_RADIX};
use crate::plan::RECURSION_STACK_DEPTH;
use crate::prime_factors::{is_prime, prime_factors};
use crate::radix2::{BitReverseKernel, Radix2PassKernel};
use crate::stage::{DftStage, StageKernel};
use crate::traits::FftSample;
use num_traits::AsPrimitive;

/// Largest leaf transform handed to the direct DFT kernel at the bottom of a
/// recursive decomposition. Prime factors above this bound still become the
/// leaf on their own.
const MAX_LEAF: usize = 8;

/// The factory's output: a populated stage list and the plan-level sizing
/// derived from it.
pub(crate) struct PlanParts<T> {
    pub stages: Vec<DftStage<T>>,
    pub temp_len: usize,
    pub data_size: usize,
}

/// Fills in the sizing attributes once the stage list is final. The scratch
/// window of `size` elements always sits past the widest per-stage temp area.
fn seal<T>(size: usize, stages: Vec<DftStage<T>>) -> PlanParts<T> {
    let stage_temp = stages.iter().map(|s| s.temp_len).max().unwrap_or(0);
    let data_size = stages.iter().map(|s| s.data_size).sum();
    PlanParts {
        temp_len: size + stage_temp,
        data_size,
        stages,
    }
}

fn direct_stage<T: FftSample>(size: usize) -> Result<DftStage<T>, FftError>
where
    f64: AsPrimitive<T>,
{
    let kernel = StageKernel::Dft(DftKernel::new(size)?);
    let data_size = kernel.data_bytes();
    Ok(DftStage {
        kernel,
        name: "dft",
        radix: size,
        stage_size: size,
        repeats: 1,
        out_offset: 0,
        blocks: 1,
        temp_len: size,
        data_size,
        recursion: false,
        can_inplace: true,
        inplace: true,
        to_scratch: false,
        need_reorder: false,
    })
}

/// Flat power-of-two chain: one bit-reversal permutation followed by one
/// decimation-in-time butterfly level per power, 2 up to `size`. Every stage
/// runs in place over the out buffer.
fn pow2_stages<T: FftSample>(size: usize) -> Result<Vec<DftStage<T>>, FftError>
where
    f64: AsPrimitive<T>,
{
    let mut stages = Vec::with_capacity(size.trailing_zeros() as usize + 1);
    let kernel = StageKernel::BitReverse(BitReverseKernel::new(size)?);
    let data_size = kernel.data_bytes();
    stages.push(DftStage {
        kernel,
        name: "bit-reverse",
        radix: 2,
        stage_size: size,
        repeats: 1,
        out_offset: 0,
        blocks: 1,
        temp_len: 0,
        data_size,
        recursion: false,
        can_inplace: true,
        inplace: true,
        to_scratch: false,
        need_reorder: false,
    });

    let mut len = 2;
    while len <= size {
        let kernel = StageKernel::Radix2Pass(Radix2PassKernel::new(len)?);
        let data_size = kernel.data_bytes();
        stages.push(DftStage {
            kernel,
            name: "radix-2",
            radix: 2,
            stage_size: size,
            repeats: 1,
            out_offset: 0,
            blocks: size / len,
            temp_len: 0,
            data_size,
            recursion: false,
            can_inplace: true,
            inplace: true,
            to_scratch: false,
            need_reorder: false,
        });
        len *= 2;
    }
    Ok(stages)
}

/// Chooses the recursive decomposition of a composite size: the split radices
/// applied top-down, and the leaf size the direct kernel handles. The leaf is
/// the largest suffix product of the ascending prime factors that stays
/// within `MAX_LEAF`; split radices past `MAX_SPLIT_RADIX` fold back into the
/// leaf since the split kernel cannot carry them.
fn decompose(size: usize) -> (Vec<usize>, usize) {
    let factors = prime_factors(size);
    let mut k = factors.len() - 1;
    let mut leaf = factors[k];
    while k > 0 && leaf * factors[k - 1] <= MAX_LEAF {
        k -= 1;
        leaf *= factors[k];
    }
    let mut splits = factors[..k].to_vec();
    while let Some(&radix) = splits.last() {
        if radix > MAX_SPLIT_RADIX {
            leaf *= radix;
            splits.pop();
        } else {
            break;
        }
    }
    // The recursion run must fit the bounded traversal stack; merge
    // neighboring radices until the chain is short enough.
    while splits.len() + 1 > RECURSION_STACK_DEPTH {
        let mut i = 0;
        while i + 1 < splits.len() && splits[i] * splits[i + 1] > MAX_SPLIT_RADIX {
            i += 1;
        }
        if i + 1 == splits.len() {
            break;
        }
        let merged = splits.remove(i + 1);
        splits[i] *= merged;
    }
    (splits, leaf)
}

/// Recursive run for a composite size: a chain of decimation-in-frequency
/// splits, a direct-DFT leaf, and a final digit-reversal reorder.
///
/// Every recursion stage writes to the scratch window; the reorder gathers
/// from scratch back into the out buffer in natural bin order. A stage fires
/// `repeats` times per firing of its parent, which is the parent's split
/// radix; only the leaf advances the traversal offset, by its own size, so
/// each subtree sweeps exactly its parent's block.
fn recursive_stages<T: FftSample>(
    size: usize,
    splits: &[usize],
    leaf: usize,
) -> Result<Vec<DftStage<T>>, FftError>
where
    f64: AsPrimitive<T>,
{
    let mut stages = Vec::with_capacity(splits.len() + 2);
    let mut sub = size;
    let mut repeats = 1;
    for (level, &radix) in splits.iter().enumerate() {
        let kernel = StageKernel::DifSplit(DifSplitKernel::new(sub, radix)?);
        let data_size = kernel.data_bytes();
        stages.push(DftStage {
            kernel,
            name: "dif-split",
            radix,
            stage_size: sub,
            repeats,
            out_offset: 0,
            blocks: sub / radix,
            temp_len: 0,
            data_size,
            recursion: true,
            can_inplace: true,
            inplace: level > 0,
            to_scratch: true,
            need_reorder: true,
        });
        repeats = radix;
        sub /= radix;
    }
    debug_assert_eq!(sub, leaf);

    let kernel = StageKernel::Dft(DftKernel::new(leaf)?);
    let data_size = kernel.data_bytes();
    stages.push(DftStage {
        kernel,
        name: "dft",
        radix: leaf,
        stage_size: leaf,
        repeats,
        out_offset: leaf,
        blocks: 1,
        temp_len: leaf,
        data_size,
        recursion: true,
        can_inplace: true,
        inplace: true,
        to_scratch: true,
        need_reorder: true,
    });

    let kernel = StageKernel::Reorder(ReorderKernel::new(size, splits)?);
    let data_size = kernel.data_bytes();
    stages.push(DftStage {
        kernel,
        name: "reorder",
        radix: 1,
        stage_size: size,
        repeats: 1,
        out_offset: 0,
        blocks: 1,
        temp_len: 0,
        data_size,
        recursion: false,
        can_inplace: false,
        inplace: false,
        to_scratch: false,
        need_reorder: false,
    });
    Ok(stages)
}

/// Populates the stage list for a transform size. Small sizes and primes run
/// as a single direct stage, powers of two take the flat radix-2 chain, and
/// remaining composites take the recursive mixed-radix run.
pub(crate) fn plan_stages<T: FftSample>(size: usize) -> Result<PlanParts<T>, FftError>
where
    f64: AsPrimitive<T>,
{
    if size == 0 {
        return Err(FftError::ZeroSizedFft);
    }
    if size == 1 || is_prime(size) {
        return Ok(seal(size, vec![direct_stage(size)?]));
    }
    if size.is_power_of_two() {
        return Ok(seal(size, pow2_stages(size)?));
    }
    let (splits, leaf) = decompose(size);
    if splits.is_empty() {
        return Ok(seal(size, vec![direct_stage(size)?]));
    }
    Ok(seal(size, recursive_stages(size, &splits, leaf)?))
}
