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
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use lmmp_common::fs::{path_to_lossy_string, remove_file_with_sidecars, writable_parent_dir};
use lmmp_gdal::{
    Dataset, NoProgress, PixelType, RowSink, Shaped, TermProgress,
    copy_georef, create_dataset, open_readonly, resolve_output_driver, set_nodata_all_bands, to_csl_string_list
};

use crate::errors::{Result, create_failed, open_failed};
use crate::remap::{DomainPolicy, RemapSummary, remap_raster};

/// sidecar files GDAL might have written next to a dataset we have to remove
const SIDECAR_SUFFIXES: [&str; 2] = ["aux.xml", "ovr"];

/// the immutable parameters of a remap run
#[derive(Debug,Clone,PartialEq)]
pub struct RemapConfig {
    pub src_path: PathBuf,
    pub tgt_path: PathBuf,

    /// GDAL driver short name. If not set this is derived from the target file extension
    pub format: Option<String>,
    pub pixel_type: PixelType,

    /// declared nodata value of the input. The table has its own no-data semantics so this is only reported
    pub src_nodata: Option<f64>,
    /// nodata value to set on all output bands
    pub tgt_nodata: Option<f64>,

    pub create_options: Vec<String>,
    pub quiet: bool,
    pub domain_policy: DomainPolicy,
}

impl RemapConfig {
    pub fn new (src_path: impl Into<PathBuf>, tgt_path: impl Into<PathBuf>) -> Self {
        RemapConfig {
            src_path: src_path.into(),
            tgt_path: tgt_path.into(),
            format: None,
            pixel_type: PixelType::Byte,
            src_nodata: None,
            tgt_nodata: None,
            create_options: Vec::new(),
            quiet: false,
            domain_policy: DomainPolicy::Lenient,
        }
    }
}

fn is_virtual_path (path: &Path) -> bool {
    path_to_lossy_string(path).starts_with("/vsi")
}

/// remap the FOM raster at `config.src_path` into a new confidence raster at `config.tgt_path`.
/// Nothing is created if the input cannot be opened or the output driver is not usable. If the remap
/// fails after the output was created the output file is removed again
pub fn remap_file (config: &RemapConfig) -> Result<RemapSummary> {
    if let Some(nodata) = config.src_nodata {
        warn!("input nodata value {} ignored, all input values are remapped through the FOM table", nodata);
    }

    let src = open_readonly( &config.src_path).map_err( |e| open_failed( &config.src_path, e))?;
    let shape = src.shape();
    info!("input {:?}: {}x{} pixels, {} bands", config.src_path, shape.cols, shape.rows, shape.bands);

    let tgt_path = config.tgt_path.as_path();
    if !is_virtual_path( tgt_path) {
        writable_parent_dir( tgt_path).map_err( |e| create_failed( tgt_path, e))?;
    }
    let driver = resolve_output_driver( config.format.as_deref(), tgt_path).map_err( |e| create_failed( tgt_path, e))?;
    let create_opts = to_csl_string_list( &config.create_options)?;
    let pre_existing = tgt_path.exists();

    let mut tgt = match create_dataset( &driver, tgt_path, shape.cols, shape.rows, shape.bands, config.pixel_type, create_opts.as_ref()) {
        Ok(ds) => ds,
        Err(e) => {
            if !pre_existing { remove_output( tgt_path) }
            return Err( create_failed( tgt_path, e))
        }
    };
    debug!("created {:?} as {} {}", tgt_path, driver.short_name(), config.pixel_type);
    if config.pixel_type.is_complex() {
        warn!("complex output type {}, codes are stored in the real part", config.pixel_type);
    }

    let result = fill_output( &src, &mut tgt, config);
    let result = finish_output( tgt, result);

    if result.is_err() {
        remove_output( tgt_path);
    }
    result
}

fn fill_output (src: &Dataset, tgt: &mut Dataset, config: &RemapConfig) -> Result<RemapSummary> {
    copy_georef( src, tgt)?;

    if let Some(nodata) = config.tgt_nodata {
        set_nodata_all_bands( tgt, nodata)?;
    }

    if config.quiet {
        remap_raster( src, tgt, config.domain_policy, &mut NoProgress)
    } else {
        remap_raster( src, tgt, config.domain_policy, &mut TermProgress)
    }
}

/// close `tgt` and merge the close result into the result of filling it. Drivers flush cached
/// blocks on close so a successful fill is only a successful run if the close succeeds too
pub fn finish_output<T: RowSink> (tgt: T, result: Result<RemapSummary>) -> Result<RemapSummary> {
    let closed = tgt.finish();
    let summary = result?;
    closed.map_err( |e| {
        warn!("closing output failed: {}", e);
        e
    })?;
    Ok(summary)
}

fn remove_output (path: &Path) {
    match remove_file_with_sidecars( path, &SIDECAR_SUFFIXES) {
        Ok(n) if n > 0 => debug!("removed incomplete output {:?}", path),
        Ok(_) => {}
        Err(e) => warn!("failed to remove incomplete output {:?}: {}", path, e)
    }
}
