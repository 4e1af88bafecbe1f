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
//! Flag words of the system calls that take a huge page size selection.

use alloc::format;

use bitflags::bitflags;

use crate::consts::*;
use crate::encode::{clear_magnitude, decode, replace_magnitude, HUGETLB_FLAG_ENCODE_FIELD};
use crate::error::EncodeResult;
use crate::size::HugePageSize;

macro_rules! huge_size_aliases {
    ($shift: ident, $mask: ident, [$($alias: ident = $encoded: ident),* $(,)?]) => {
        pub const $shift: u32 = HUGETLB_FLAG_ENCODE_SHIFT;
        pub const $mask: u32 = HUGETLB_FLAG_ENCODE_MASK;
        $(pub const $alias: u32 = $encoded;)*
    };
}

huge_size_aliases!(MAP_HUGE_SHIFT, MAP_HUGE_MASK, [
    MAP_HUGE_16KB = HUGETLB_FLAG_ENCODE_16KB,
    MAP_HUGE_64KB = HUGETLB_FLAG_ENCODE_64KB,
    MAP_HUGE_512KB = HUGETLB_FLAG_ENCODE_512KB,
    MAP_HUGE_1MB = HUGETLB_FLAG_ENCODE_1MB,
    MAP_HUGE_2MB = HUGETLB_FLAG_ENCODE_2MB,
    MAP_HUGE_8MB = HUGETLB_FLAG_ENCODE_8MB,
    MAP_HUGE_16MB = HUGETLB_FLAG_ENCODE_16MB,
    MAP_HUGE_32MB = HUGETLB_FLAG_ENCODE_32MB,
    MAP_HUGE_256MB = HUGETLB_FLAG_ENCODE_256MB,
    MAP_HUGE_512MB = HUGETLB_FLAG_ENCODE_512MB,
    MAP_HUGE_1GB = HUGETLB_FLAG_ENCODE_1GB,
    MAP_HUGE_2GB = HUGETLB_FLAG_ENCODE_2GB,
    MAP_HUGE_16GB = HUGETLB_FLAG_ENCODE_16GB,
]);

huge_size_aliases!(SHM_HUGE_SHIFT, SHM_HUGE_MASK, [
    SHM_HUGE_16KB = HUGETLB_FLAG_ENCODE_16KB,
    SHM_HUGE_64KB = HUGETLB_FLAG_ENCODE_64KB,
    SHM_HUGE_512KB = HUGETLB_FLAG_ENCODE_512KB,
    SHM_HUGE_1MB = HUGETLB_FLAG_ENCODE_1MB,
    SHM_HUGE_2MB = HUGETLB_FLAG_ENCODE_2MB,
    SHM_HUGE_8MB = HUGETLB_FLAG_ENCODE_8MB,
    SHM_HUGE_16MB = HUGETLB_FLAG_ENCODE_16MB,
    SHM_HUGE_32MB = HUGETLB_FLAG_ENCODE_32MB,
    SHM_HUGE_256MB = HUGETLB_FLAG_ENCODE_256MB,
    SHM_HUGE_512MB = HUGETLB_FLAG_ENCODE_512MB,
    SHM_HUGE_1GB = HUGETLB_FLAG_ENCODE_1GB,
    SHM_HUGE_2GB = HUGETLB_FLAG_ENCODE_2GB,
    SHM_HUGE_16GB = HUGETLB_FLAG_ENCODE_16GB,
]);

huge_size_aliases!(MFD_HUGE_SHIFT, MFD_HUGE_MASK, [
    MFD_HUGE_16KB = HUGETLB_FLAG_ENCODE_16KB,
    MFD_HUGE_64KB = HUGETLB_FLAG_ENCODE_64KB,
    MFD_HUGE_512KB = HUGETLB_FLAG_ENCODE_512KB,
    MFD_HUGE_1MB = HUGETLB_FLAG_ENCODE_1MB,
    MFD_HUGE_2MB = HUGETLB_FLAG_ENCODE_2MB,
    MFD_HUGE_8MB = HUGETLB_FLAG_ENCODE_8MB,
    MFD_HUGE_16MB = HUGETLB_FLAG_ENCODE_16MB,
    MFD_HUGE_32MB = HUGETLB_FLAG_ENCODE_32MB,
    MFD_HUGE_256MB = HUGETLB_FLAG_ENCODE_256MB,
    MFD_HUGE_512MB = HUGETLB_FLAG_ENCODE_512MB,
    MFD_HUGE_1GB = HUGETLB_FLAG_ENCODE_1GB,
    MFD_HUGE_2GB = HUGETLB_FLAG_ENCODE_2GB,
    MFD_HUGE_16GB = HUGETLB_FLAG_ENCODE_16GB,
]);

pub const MAP_HUGETLB: u32 = 0x40000;
pub const SHM_HUGETLB: u32 = 0o4000;
pub const MFD_HUGETLB: u32 = 0x0004;

bitflags! {
    /// `flags` argument of mmap.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct MapFlags: u32 {
        const SHARED =          0x01;
        const PRIVATE =         0x02;
        const SHARED_VALIDATE = 0x03;
        const FIXED =           0x10;
        const ANONYMOUS =       0x20;
        const GROWSDOWN =       0x0100;
        const DENYWRITE =       0x0800;
        const EXECUTABLE =      0x1000;
        const LOCKED =          0x2000;
        const NORESERVE =       0x4000;
        const POPULATE =        0x8000;
        const NONBLOCK =        0x10000;
        const STACK =           0x20000;
        const HUGETLB =         MAP_HUGETLB;
        const SYNC =            0x80000;
        const FIXED_NOREPLACE = 0x100000;
        /// Huge page size field, bits [26:31].
        const HUGE_SIZE =       HUGETLB_FLAG_ENCODE_FIELD;
    }
}

bitflags! {
    /// `shmflg` argument of shmget.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct ShmFlags: u32 {
        /// Permission bits of the segment.
        const MODE =      0o777;
        const IPC_CREAT = 0o1000;
        const IPC_EXCL =  0o2000;
        const HUGETLB =   SHM_HUGETLB;
        const NORESERVE = 0o10000;
        const HUGE_SIZE = HUGETLB_FLAG_ENCODE_FIELD;
    }
}

bitflags! {
    /// `flags` argument of memfd_create.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct MemfdFlags: u32 {
        const CLOEXEC =       0x0001;
        const ALLOW_SEALING = 0x0002;
        const HUGETLB =       MFD_HUGETLB;
        const NOEXEC_SEAL =   0x0008;
        const EXEC =          0x0010;
        const HUGE_SIZE =     HUGETLB_FLAG_ENCODE_FIELD;
    }
}

/// What a flags word asks the kernel for, huge page wise.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum HugeTlbRequest {
    /// Regular pages.
    NotRequested,
    /// Huge pages of the system default size.
    Default,
    Size(HugePageSize),
}

impl HugeTlbRequest {
    pub fn size(&self) -> Option<HugePageSize> {
        match *self {
            HugeTlbRequest::Size(size) => Some(size),
            _ => None,
        }
    }
}

/// A flags word carrying a huge page request bit and the size field.
pub trait HugeTlbFlags: Copy {
    /// The bit that makes the kernel look at the size field.
    const HUGETLB_BIT: u32;

    fn raw(self) -> u32;

    fn from_raw(bits: u32) -> Self;

    fn with_huge_page_size(self, size: HugePageSize) -> Self {
        Self::from_raw(replace_magnitude(self.raw(), size.magnitude()) | Self::HUGETLB_BIT)
    }

    fn with_default_huge_page_size(self) -> Self {
        Self::from_raw(clear_magnitude(self.raw()) | Self::HUGETLB_BIT)
    }

    fn without_huge_pages(self) -> Self {
        Self::from_raw(clear_magnitude(self.raw()) & !Self::HUGETLB_BIT)
    }

    fn huge_request(self) -> EncodeResult<HugeTlbRequest> {
        let bits = self.raw();
        let magnitude = decode(bits);
        let requested = bits & Self::HUGETLB_BIT != 0;
        match (requested, magnitude) {
            (false, 0) => Ok(HugeTlbRequest::NotRequested),
            (false, m) => {
                warn!("flags {:#x}: huge page size {} without request bit", bits, m);
                encode_result_err!(
                    EINVAL,
                    format!("size field {} set without {:#x}", m, Self::HUGETLB_BIT)
                )
            }
            (true, 0) => Ok(HugeTlbRequest::Default),
            (true, m) => HugePageSize::try_from(m)
                .map(HugeTlbRequest::Size)
                .map_err(|m| {
                    warn!("flags {:#x}: unsupported huge page magnitude {}", bits, m);
                    encode_err!(EINVAL, format!("unsupported huge page magnitude {}", m))
                }),
        }
    }
}

macro_rules! impl_hugetlb_flags {
    ($($flags: ty),*) => {
        $(
            impl HugeTlbFlags for $flags {
                const HUGETLB_BIT: u32 = <$flags>::HUGETLB.bits();

                fn raw(self) -> u32 {
                    self.bits()
                }

                fn from_raw(bits: u32) -> Self {
                    Self::from_bits_retain(bits)
                }
            }
        )*
    };
}

impl_hugetlb_flags!(MapFlags, ShmFlags, MemfdFlags);

#[cfg(test)]
mod tests;
