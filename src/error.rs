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
use alloc::string::String;
use core::fmt::{Debug, Display, Formatter, Result};

#[repr(u32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
/// POSIX errno
pub enum EncodeErrorNum {
    EINVAL = 22, // Invalid argument.
    ERANGE = 34, // Result too large.
}

pub struct EncodeError {
    pub num: EncodeErrorNum,
    pub loc_line: u32,
    pub loc_col: u32,
    pub loc_file: &'static str,
    pub msg: Option<String>,
}

pub type EncodeResult<T = ()> = core::result::Result<T, EncodeError>;

impl EncodeErrorNum {
    pub fn as_str(&self) -> &'static str {
        use EncodeErrorNum::*;
        match *self {
            EINVAL => "Invalid argument",
            ERANGE => "Math result not representable",
        }
    }
}

impl EncodeError {
    pub fn new(
        num: EncodeErrorNum,
        loc_file: &'static str,
        loc_line: u32,
        loc_col: u32,
        msg: Option<String>,
    ) -> Self {
        Self {
            num,
            loc_file,
            loc_line,
            loc_col,
            msg,
        }
    }

    /// Negated errno, the way a system call would report it.
    pub fn code(&self) -> isize {
        -(self.num as usize as isize)
    }
}

impl Debug for EncodeError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "[{}:{}:{}] {}",
            self.loc_file,
            self.loc_line,
            self.loc_col,
            self.num.as_str()
        )?;
        if let Some(ref msg) = self.msg {
            write!(f, ": {}", msg)?;
        }
        Ok(())
    }
}

impl Display for EncodeError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.write_str(self.num.as_str())?;
        if let Some(ref msg) = self.msg {
            write!(f, ": {}", msg)?;
        }
        Ok(())
    }
}

/// Generate an EncodeError according to errno and msg.
#[macro_export]
macro_rules! encode_err {
    ($num: ident) => {{
        use $crate::error::{EncodeError, EncodeErrorNum::*};
        EncodeError::new($num, file!(), line!(), column!(), None)
    }};
    ($num: ident, $msg: expr) => {{
        use $crate::error::{EncodeError, EncodeErrorNum::*};
        EncodeError::new($num, file!(), line!(), column!(), Some($msg.into()))
    }};
}

/// Generate an Err including an EncodeError struct
#[macro_export]
macro_rules! encode_result_err {
    ($num: ident) => {
        Err($crate::encode_err!($num))
    };
    ($num: ident, $msg: expr) => {
        Err($crate::encode_err!($num, $msg))
    };
}
