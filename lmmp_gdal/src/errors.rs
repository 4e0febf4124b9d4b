/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
use std::ffi::CStr;
use lmmp_common::define_error;

pub type Result<T> = std::result::Result<T, LmmpGdalError>;

define_error!{ pub LmmpGdalError =
    GdalError(#[from] gdal::errors::GdalError) : "GDAL error: {0}",
    CplError(String) : "GDAL CPL error: {0}",
    IOError(#[from] std::io::Error) : "IO error: {0}",
    NulError(#[from] std::ffi::NulError) : "invalid C string argument: {0}",
    UnsupportedDriver(String) : "unsupported GDAL driver: {0}",
    DimensionMismatch(String) : "raster dimension mismatch: {0}",
    MiscError(String) : "GDAL operation failed: {0}"
}

pub fn misc_error<S: ToString> (msg: S) -> LmmpGdalError {
    LmmpGdalError::MiscError(msg.to_string())
}

pub fn unsupported_driver<S: ToString> (name: S) -> LmmpGdalError {
    LmmpGdalError::UnsupportedDriver(name.to_string())
}

pub fn dimension_mismatch<S: ToString> (msg: S) -> LmmpGdalError {
    LmmpGdalError::DimensionMismatch(msg.to_string())
}

/// turn the last CPL error message into a LmmpGdalError and reset the CPL error state.
/// Use this after raw gdal_sys calls that signal failure through their return value
pub fn last_gdal_error () -> LmmpGdalError {
    let msg = unsafe {
        let pc_msg = gdal_sys::CPLGetLastErrorMsg();
        let msg = if pc_msg.is_null() { String::new() } else { CStr::from_ptr(pc_msg).to_string_lossy().to_string() };
        gdal_sys::CPLErrorReset();
        msg
    };

    if msg.is_empty() {
        LmmpGdalError::CplError("unknown error".into())
    } else {
        LmmpGdalError::CplError(msg)
    }
}
