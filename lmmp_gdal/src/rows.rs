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
//! row streaming access to rasters. The remapper only sees these traits, which keeps it
//! independent of GDAL and lets tests run against in-memory rasters

use gdal::Dataset;
use gdal::raster::{Buffer, GdalType, RasterBand};

use crate::errors::{Result, dimension_mismatch};

#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct RasterShape {
    pub cols: usize,
    pub rows: usize,
    pub bands: usize,
}

impl RasterShape {
    pub fn new (cols: usize, rows: usize, bands: usize) -> Self {
        RasterShape { cols, rows, bands }
    }

    pub fn n_pixels (&self) -> usize {
        self.cols * self.rows * self.bands
    }

    /// fail if `other` does not have the same number of columns, rows and bands
    pub fn check_same (&self, other: &RasterShape) -> Result<()> {
        if self == other {
            Ok(())
        } else {
            Err( dimension_mismatch( format!("{}x{}x{} != {}x{}x{}",
                self.cols, self.rows, self.bands, other.cols, other.rows, other.bands)))
        }
    }
}

pub trait Shaped {
    fn shape (&self) -> RasterShape;
}

/// band indices are 1-based (as in GDAL), row indices are 0-based
pub trait RowSource: Shaped {
    fn read_row (&self, band: usize, row: usize, buf: &mut [i32]) -> Result<()>;
}

pub trait RowSink: Shaped {
    fn write_row (&mut self, band: usize, row: usize, values: &[u8]) -> Result<()>;

    /// flush and close the sink. Drivers might only write cached blocks here so this can fail
    /// even if all `write_row` calls succeeded
    fn finish (self) -> Result<()> where Self: Sized;
}

impl Shaped for Dataset {
    fn shape (&self) -> RasterShape {
        let (cols, rows) = self.raster_size();
        RasterShape { cols, rows, bands: self.raster_count() }
    }
}

impl RowSource for Dataset {
    fn read_row (&self, band: usize, row: usize, buf: &mut [i32]) -> Result<()> {
        let band = self.rasterband(band)?;
        read_row( &band, row, buf)
    }
}

impl RowSink for Dataset {
    fn write_row (&mut self, band: usize, row: usize, values: &[u8]) -> Result<()> {
        let mut band = self.rasterband(band)?;
        let mut buf = Buffer::new( (values.len(), 1), values.to_vec()); // gdal only writes from owned buffers
        write_row( &mut band, row, &mut buf)
    }

    fn finish (self) -> Result<()> {
        Ok( self.close()? )
    }
}

/// read a full row into `buf`, converting to T. The buffer length determines the number of columns
pub fn read_row <T: Copy + GdalType> (band: &RasterBand, row: usize, buf: &mut [T]) -> Result<()> {
    let cols = buf.len();
    Ok( band.read_into_slice( (0, row as isize), (cols,1), (cols,1), buf, None)? )
}

/// write a single row buffer (of shape (cols,1)) to `row`
pub fn write_row <T: Copy + GdalType> (band: &mut RasterBand, row: usize, buf: &mut Buffer<T>) -> Result<()> {
    let cols = buf.data().len();
    Ok( band.write( (0, row as isize), (cols,1), buf)? )
}
