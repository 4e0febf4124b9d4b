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
use std::path::Path;
use lmmp_common::define_error;
use lmmp_gdal::LmmpGdalError;

pub type Result<T> = std::result::Result<T, LmmpConfidenceError>;

define_error!{ pub LmmpConfidenceError =
    GdalError(#[from] LmmpGdalError) : "{0}",
    IOError(#[from] std::io::Error) : "IO error: {0}",
    OpenFailed(String) : "cannot open input raster {0}",
    CreateFailed(String) : "cannot create output raster {0}",
    DomainError(usize,usize,usize,i32) : "FOM value {3} at band {0}, row {1}, column {2} is outside of the remap table domain"
}

pub fn open_failed (path: impl AsRef<Path>, cause: impl ToString) -> LmmpConfidenceError {
    LmmpConfidenceError::OpenFailed( format!("{:?}: {}", path.as_ref(), cause.to_string()))
}

pub fn create_failed (path: impl AsRef<Path>, cause: impl ToString) -> LmmpConfidenceError {
    LmmpConfidenceError::CreateFailed( format!("{:?}: {}", path.as_ref(), cause.to_string()))
}

pub fn domain_error (band: usize, row: usize, col: usize, fom: i32) -> LmmpConfidenceError {
    LmmpConfidenceError::DomainError(band, row, col, fom)
}
