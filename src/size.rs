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
use core::fmt::{Display, Formatter};
use core::str::FromStr;

use numeric_enum_macro::numeric_enum;

use crate::consts::*;
use crate::encode::decode;
use crate::error::{EncodeError, EncodeResult};

numeric_enum! {
    #[repr(u32)]
    /// A huge page size the kernel knows how to encode.
    /// The discriminant is the magnitude code, log2 of the size in bytes.
    #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
    pub enum HugePageSize {
        Size16K = 14,
        Size64K = 16,
        Size512K = 19,
        Size1M = 20,
        Size2M = 21,
        Size8M = 23,
        Size16M = 24,
        Size32M = 25,
        Size256M = 28,
        Size512M = 29,
        Size1G = 30,
        Size2G = 31,
        Size16G = 34,
    }
}

impl HugePageSize {
    /// Every supported size, smallest first.
    pub const ALL: [HugePageSize; 13] = [
        Self::Size16K,
        Self::Size64K,
        Self::Size512K,
        Self::Size1M,
        Self::Size2M,
        Self::Size8M,
        Self::Size16M,
        Self::Size32M,
        Self::Size256M,
        Self::Size512M,
        Self::Size1G,
        Self::Size2G,
        Self::Size16G,
    ];

    pub const fn magnitude(self) -> u32 {
        self as u32
    }

    /// The value to OR into a flags word to request this size.
    pub const fn encoded(self) -> u32 {
        match self {
            Self::Size16K => HUGETLB_FLAG_ENCODE_16KB,
            Self::Size64K => HUGETLB_FLAG_ENCODE_64KB,
            Self::Size512K => HUGETLB_FLAG_ENCODE_512KB,
            Self::Size1M => HUGETLB_FLAG_ENCODE_1MB,
            Self::Size2M => HUGETLB_FLAG_ENCODE_2MB,
            Self::Size8M => HUGETLB_FLAG_ENCODE_8MB,
            Self::Size16M => HUGETLB_FLAG_ENCODE_16MB,
            Self::Size32M => HUGETLB_FLAG_ENCODE_32MB,
            Self::Size256M => HUGETLB_FLAG_ENCODE_256MB,
            Self::Size512M => HUGETLB_FLAG_ENCODE_512MB,
            Self::Size1G => HUGETLB_FLAG_ENCODE_1GB,
            Self::Size2G => HUGETLB_FLAG_ENCODE_2GB,
            Self::Size16G => HUGETLB_FLAG_ENCODE_16GB,
        }
    }

    pub const fn bytes(self) -> u64 {
        1 << self.magnitude()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Size16K => "16KB",
            Self::Size64K => "64KB",
            Self::Size512K => "512KB",
            Self::Size1M => "1MB",
            Self::Size2M => "2MB",
            Self::Size8M => "8MB",
            Self::Size16M => "16MB",
            Self::Size32M => "32MB",
            Self::Size256M => "256MB",
            Self::Size512M => "512MB",
            Self::Size1G => "1GB",
            Self::Size2G => "2GB",
            Self::Size16G => "16GB",
        }
    }

    pub fn from_bytes(bytes: u64) -> EncodeResult<Self> {
        if !bytes.is_power_of_two() {
            return encode_result_err!(
                EINVAL,
                format!("{:#x} is not a power of two", bytes)
            );
        }
        let magnitude = bytes.trailing_zeros();
        Self::try_from(magnitude).map_err(|m| {
            debug!("no huge page size with magnitude {}", m);
            encode_err!(EINVAL, format!("unsupported huge page size {:#x}", bytes))
        })
    }

    /// Look up the size selected by the field of an encoded flags word.
    /// Returns `None` for an empty field or an unknown magnitude.
    pub fn from_flags(flags: u32) -> Option<Self> {
        Self::try_from(decode(flags)).ok()
    }
}

impl Display for HugePageSize {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HugePageSize {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|size| size.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| encode_err!(EINVAL, format!("unknown huge page size {:?}", s)))
    }
}
