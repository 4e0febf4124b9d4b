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
#![allow(unused)]

//! remapping of stereo correlation Figure-Of-Merit (FOM) rasters into LMMP confidence rasters

pub mod errors;
pub mod codes;
pub mod table;
pub mod remap;
pub mod config;
pub mod cli;

pub use errors::{Result, LmmpConfidenceError};
pub use codes::ConfidenceCode;
pub use table::{FOM_MAX, FOM_TABLE, FOM_TABLE_LEN, FomDomain, classify, confidence_code};
pub use remap::{BandStats, DomainPolicy, RemapSummary, remap_raster, remap_row};
pub use config::{RemapConfig, finish_output, remap_file};
