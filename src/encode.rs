// Copyright (c) 2025 Syswonder
// hugetlb-encode is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//     http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR
// FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.
//
// Syswonder Website:
//      https://www.syswonder.org
//
// Authors:
//
use alloc::format;
use core::ops::Range;

use bit_field::BitField;

use crate::consts::{HUGETLB_FLAG_ENCODE_MASK, HUGETLB_FLAG_ENCODE_SHIFT};
use crate::error::EncodeResult;

/// The size field in place, bits [26:31] of the flags word.
pub const HUGETLB_FLAG_ENCODE_FIELD: u32 = HUGETLB_FLAG_ENCODE_MASK << HUGETLB_FLAG_ENCODE_SHIFT;

fn field_bits() -> Range<usize> {
    let end = <u32 as BitField>::BIT_LENGTH;
    HUGETLB_FLAG_ENCODE_SHIFT as usize..end
}

/// Place a magnitude code into the size field.
///
/// Nothing is checked: bits pushed past bit 31 are lost, just like the
/// 32-bit unsigned shift the kernel headers perform.
pub const fn encode(magnitude: u32) -> u32 {
    magnitude << HUGETLB_FLAG_ENCODE_SHIFT
}

/// Extract the magnitude code from a flags word.
pub const fn decode(flags: u32) -> u32 {
    (flags >> HUGETLB_FLAG_ENCODE_SHIFT) & HUGETLB_FLAG_ENCODE_MASK
}

/// Like [`encode`], but refuses magnitudes that do not fit the 6-bit field.
pub fn try_encode(magnitude: u32) -> EncodeResult<u32> {
    if magnitude > HUGETLB_FLAG_ENCODE_MASK {
        debug!("huge page magnitude {} does not fit the size field", magnitude);
        return encode_result_err!(
            ERANGE,
            format!(
                "magnitude {} exceeds field mask {:#x}",
                magnitude, HUGETLB_FLAG_ENCODE_MASK
            )
        );
    }
    Ok(encode(magnitude))
}

/// Overwrite the size field of `flags`, keeping every other bit.
/// Only the low 6 bits of `magnitude` are used.
pub fn replace_magnitude(flags: u32, magnitude: u32) -> u32 {
    let mut flags = flags;
    flags.set_bits(field_bits(), magnitude & HUGETLB_FLAG_ENCODE_MASK);
    flags
}

pub fn clear_magnitude(flags: u32) -> u32 {
    flags & !HUGETLB_FLAG_ENCODE_FIELD
}
