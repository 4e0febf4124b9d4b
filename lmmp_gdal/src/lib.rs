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

pub mod errors;
pub mod pixel_type;
pub mod rows;
pub mod progress;

use std::{collections::HashMap, ffi::CString, path::Path};
use gdal::{errors::CplErrType, DatasetOptions, GdalOpenFlags};
use lazy_static::lazy_static;
use libc::c_int;
use tracing::{debug, trace, warn};

// we re-export these so that other crates don't need a direct gdal dependency
pub use gdal::{self, Driver, DriverManager, Metadata, Dataset, GeoTransform, cpl::CslStringList};
pub use gdal::raster::{GdalType, GdalDataType, RasterBand, Buffer};

pub use errors::{Result, LmmpGdalError};
pub use pixel_type::PixelType;
pub use rows::{RasterShape, Shaped, RowSource, RowSink, read_row, write_row};
pub use progress::{ProgressMonitor, NoProgress, TermProgress};

use lmmp_common::fs::{lowercase_extension, path_to_lossy_string};
use crate::errors::{last_gdal_error, misc_error, unsupported_driver};

/// driver used if there is neither an explicit format nor a known output file extension
pub const DEFAULT_DRIVER: &str = "GTiff";

lazy_static! {
    // we can't populate this by iterating over DriverManager since some drivers share extensions
    static ref EXT_MAP: HashMap<&'static str, &'static str> = HashMap::from( [ // file extension -> driver short name
        ("tif", "GTiff"),
        ("tiff", "GTiff"),
        ("img", "HFA"),
        ("cub", "ISIS3"),
        ("nc", "netCDF"),
        ("kea", "KEA"),
        ("png", "PNG"),
        ("jp2", "JP2OpenJPEG"),
    ]);
}

/// route GDAL's CPL messages into tracing instead of stderr. Failures are only logged at debug
/// level since they also come back as error values
pub fn init_error_handler () {
    gdal::config::set_error_handler(log_cpl_error);
}

fn log_cpl_error (cpl_et: CplErrType, ec: i32, msg: &str) {
    match cpl_et {
        CplErrType::Warning => warn!("GDAL: {}", msg),
        CplErrType::Failure | CplErrType::Fatal => debug!("GDAL error {}: {}", ec, msg),
        CplErrType::Debug => trace!("GDAL: {}", msg),
        CplErrType::None => {}
    }
}

pub fn get_driver_name_for_extension (ext: &str) -> Option<&'static str> {
    EXT_MAP.get( ext.to_ascii_lowercase().as_str()).map(|v| &**v)
}

pub fn get_driver_name_from_filename (path: impl AsRef<Path>) -> Option<&'static str> {
    lowercase_extension(path).and_then( |ext| get_driver_name_for_extension( &ext))
}

pub fn has_meta_info_item<M> (meta: &M, domain: &str, key: &str, expected_val: Option<&str>) -> bool where M: Metadata {
    if let Some(val) = meta.metadata_item( key, domain) {
        if let Some(expected_val) = expected_val {
            if !expected_val.eq_ignore_ascii_case( &val) { return false }
        }
        true
    } else {
        false
    }
}

/// does the driver support creating new datasets with `GDALCreate` (as opposed to only CreateCopy)
pub fn can_create (driver: &Driver) -> bool {
    has_meta_info_item( driver, "", "DCAP_CREATE", Some("YES"))
}

/// can we create a dataset with this driver and fill it row by row. VRT bands only reference sources
pub fn can_create_rows (driver: &Driver) -> bool {
    can_create( driver) && driver.short_name() != "VRT"
}

/// get the driver for a new output dataset. An explicit format takes precedence and has to support
/// `Create`. Otherwise we use the driver for the filename extension if it can create rows from scratch,
/// and fall back to DEFAULT_DRIVER if it can't (e.g. PNG or JPEG2000 only support CreateCopy)
pub fn resolve_output_driver (format: Option<&str>, path: impl AsRef<Path>) -> Result<Driver> {
    let driver = match format {
        Some(name) => {
            let driver = DriverManager::get_driver_by_name(name).map_err( |_| unsupported_driver(name))?;
            if !can_create_rows( &driver) {
                return Err( unsupported_driver( format!("{} (no create capability)", name)))
            }
            driver
        }
        None => match get_driver_name_from_filename( &path) {
            Some(name) => match DriverManager::get_driver_by_name(name) {
                Ok(driver) if can_create_rows( &driver) => driver,
                _ => {
                    warn!("cannot create {} output for {:?}, using {}", name, path.as_ref(), DEFAULT_DRIVER);
                    default_driver()?
                }
            }
            None => default_driver()?
        }
    };

    debug!("using output driver {}", driver.short_name());
    Ok(driver)
}

fn default_driver () -> Result<Driver> {
    DriverManager::get_driver_by_name( DEFAULT_DRIVER).map_err( |_| unsupported_driver( DEFAULT_DRIVER))
}

pub fn open_readonly<P:AsRef<Path>> (path: P) -> Result<Dataset> {
    let dso = DatasetOptions {
        open_flags: GdalOpenFlags::GDAL_OF_READONLY | GdalOpenFlags::GDAL_OF_RASTER,
        allowed_drivers: None,
        open_options: None,
        sibling_files: None
    };
    Ok( Dataset::open_ex(path, dso)? )
}

pub fn to_csl_string_list (strings: &[String]) -> Result<Option<CslStringList>> {
    if ! strings.is_empty() { // don't allocate if there is nothing to convert
        let mut co_list = CslStringList::new();
        for s in strings {
            co_list.add_string(s.as_str())?;
        }
        Ok(Some(co_list))
    } else {
        Ok(None)
    }
}

/// create a new dataset of the given pixel type. We go through GDALCreate directly since the gdal
/// crate only creates bands of real `GdalType`s, and we also have to support complex output types
pub fn create_dataset<P> (driver: &Driver, path: P, width: usize, height: usize, n_bands: usize,
                          pixel_type: PixelType, create_opts: Option<&CslStringList>) -> Result<Dataset>
    where P: AsRef<Path>
{
    let c_path = CString::new( path_to_lossy_string( &path))?;
    let c_size = |n: usize| c_int::try_from(n).map_err( |_| misc_error( format!("raster size {} exceeds GDAL limits", n)));
    let (c_width, c_height, c_bands) = (c_size(width)?, c_size(height)?, c_size(n_bands)?);
    let no_opts = CslStringList::new();
    let opts = create_opts.unwrap_or( &no_opts);

    unsafe {
        let c_ds = gdal_sys::GDALCreate( driver.c_driver(), c_path.as_ptr(),
                                         c_width, c_height, c_bands,
                                         pixel_type.gdal_type(), opts.as_ptr());
        if c_ds.is_null() {
            Err( last_gdal_error())
        } else {
            Ok( Dataset::from_c_dataset(c_ds))
        }
    }
}

/// copy geotransform and projection from `src` to `tgt`. Missing source values are not copied
pub fn copy_georef (src: &Dataset, tgt: &mut Dataset) -> Result<()> {
    if let Ok(geo_transform) = src.geo_transform() {
        tgt.set_geo_transform( &geo_transform)?;
    }

    let projection = src.projection();
    if !projection.is_empty() {
        tgt.set_projection( projection.as_str())?;
    }

    Ok(())
}

pub fn set_nodata_all_bands (ds: &mut Dataset, nodata: f64) -> Result<()> {
    for i in 1..=ds.raster_count() {
        let mut band = ds.rasterband(i)?;
        band.set_no_data_value( Some(nodata))?;
    }
    Ok(())
}
