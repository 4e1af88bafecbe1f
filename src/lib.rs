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
//! Huge page size encoding for system call flag words.
//!
//! mmap, shmget and memfd_create accept a huge page size hint in bits
//! [26:31] of their flags argument: the log2 of the page size, shifted by
//! [`HUGETLB_FLAG_ENCODE_SHIFT`]. This crate carries that encoding, the
//! thirteen sizes the kernel defines, and typed flag words built on them.
//!
//! ```
//! use hugetlb_encode::{decode, encode, HugePageSize, HUGETLB_FLAG_ENCODE_2MB};
//!
//! assert_eq!(encode(21), HUGETLB_FLAG_ENCODE_2MB);
//! assert_eq!(decode(0x5400_0000), 21);
//! assert_eq!(HugePageSize::Size2M.encoded(), 0x5400_0000);
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;
#[macro_use]
extern crate log;
#[macro_use]
pub mod error;

#[cfg(test)]
mod logging;

pub mod consts;
pub mod encode;
pub mod mman;
pub mod size;

pub use consts::*;
pub use encode::{
    clear_magnitude, decode, encode, replace_magnitude, try_encode, HUGETLB_FLAG_ENCODE_FIELD,
};
pub use error::{EncodeError, EncodeErrorNum, EncodeResult};
pub use mman::{HugeTlbFlags, HugeTlbRequest, MapFlags, MemfdFlags, ShmFlags};
pub use size::HugePageSize;
