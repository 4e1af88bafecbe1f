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
use super::*;
use crate::error::EncodeErrorNum;
use crate::logging;
use crate::size::HugePageSize;

#[test]
fn aliases_share_the_encoding() {
    assert_eq!(MAP_HUGE_SHIFT, 26);
    assert_eq!(SHM_HUGE_MASK, 0x3f);
    assert_eq!(MFD_HUGE_SHIFT, MAP_HUGE_SHIFT);
    assert_eq!(MAP_HUGE_2MB, 0x5400_0000);
    assert_eq!(SHM_HUGE_1GB, HUGETLB_FLAG_ENCODE_1GB);
    assert_eq!(MFD_HUGE_16GB, 0x8800_0000);
    assert_eq!(MFD_HUGE_64KB, HugePageSize::Size64K.encoded());
}

#[test]
fn mmap_request() {
    let flags = (MapFlags::PRIVATE | MapFlags::ANONYMOUS).with_huge_page_size(HugePageSize::Size2M);
    assert_eq!(flags.bits(), 0x5404_0022);
    assert_eq!(flags.bits(), 0x22 | MAP_HUGETLB | MAP_HUGE_2MB);
    assert!(flags.contains(MapFlags::HUGETLB));
    assert_eq!(
        flags.huge_request().unwrap(),
        HugeTlbRequest::Size(HugePageSize::Size2M)
    );
    assert_eq!(
        MapFlags::ANONYMOUS
            .with_huge_page_size(HugePageSize::Size2M)
            .bits(),
        0x5404_0020
    );
}

#[test]
fn size_can_be_changed_later() {
    let flags = MapFlags::SHARED.with_huge_page_size(HugePageSize::Size1G);
    let flags = flags.with_huge_page_size(HugePageSize::Size2M);
    assert_eq!(flags.bits(), 0x01 | MAP_HUGETLB | MAP_HUGE_2MB);
    let flags = flags.with_default_huge_page_size();
    assert_eq!(flags.bits(), 0x01 | MAP_HUGETLB);
    assert_eq!(flags.huge_request().unwrap(), HugeTlbRequest::Default);
    assert_eq!(flags.huge_request().unwrap().size(), None);
    let flags = flags.without_huge_pages();
    assert_eq!(flags, MapFlags::SHARED);
    assert_eq!(flags.huge_request().unwrap(), HugeTlbRequest::NotRequested);
}

#[test]
fn size_field_survives_truncation() {
    let flags = MapFlags::from_bits_truncate(0x5404_0022);
    assert_eq!(flags.bits(), 0x5404_0022);
    assert_eq!(
        flags.huge_request().unwrap().size(),
        Some(HugePageSize::Size2M)
    );
}

#[test]
fn malformed_requests() {
    logging::init();
    let orphan = MapFlags::from_bits_retain(MAP_HUGE_2MB | 0x22);
    assert_eq!(orphan.huge_request().unwrap_err().num, EncodeErrorNum::EINVAL);

    let unknown = MapFlags::from_bits_retain(MAP_HUGETLB | (22 << MAP_HUGE_SHIFT));
    let err = unknown.huge_request().unwrap_err();
    assert_eq!(err.num, EncodeErrorNum::EINVAL);
    assert_eq!(err.code(), -22);
}

#[test]
fn shmget_request() {
    let flags = (ShmFlags::IPC_CREAT | ShmFlags::from_bits_retain(0o600))
        .with_huge_page_size(HugePageSize::Size1G);
    assert_eq!(flags.bits(), 0o1600 | SHM_HUGETLB | SHM_HUGE_1GB);
    assert_eq!(
        flags.huge_request().unwrap(),
        HugeTlbRequest::Size(HugePageSize::Size1G)
    );
    let orphan = ShmFlags::from_bits_retain(0o600 | SHM_HUGE_2MB);
    assert!(orphan.huge_request().is_err());
}

#[test]
fn memfd_request() {
    let flags = MemfdFlags::CLOEXEC.with_huge_page_size(HugePageSize::Size16G);
    assert_eq!(flags.bits(), 0x8800_0005);
    assert_eq!(
        MemfdFlags::from_bits_retain(MFD_HUGETLB)
            .huge_request()
            .unwrap(),
        HugeTlbRequest::Default
    );
}
