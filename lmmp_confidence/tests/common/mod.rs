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

use std::cell::RefCell;
use std::path::Path;

use lmmp_gdal::*;
use lmmp_gdal::errors::{Result, misc_error};

/// in-memory FOM raster that counts row reads
pub struct FomGrid {
    pub shape: RasterShape,
    pub values: Vec<i32>, // band-major, then row-major
    pub reads: RefCell<Vec<usize>>, // per (band,row)
}

impl FomGrid {
    /// bands[band][row][col]
    pub fn from_bands (bands: &[Vec<Vec<i32>>]) -> Self {
        let rows = bands[0].len();
        let cols = bands[0][0].len();
        let shape = RasterShape::new( cols, rows, bands.len());
        let values: Vec<i32> = bands.iter().flatten().flatten().copied().collect();
        assert_eq!( values.len(), shape.n_pixels());

        FomGrid { shape, values, reads: RefCell::new( vec![0; shape.bands * shape.rows]) }
    }

    pub fn single_row (values: &[i32]) -> Self {
        FomGrid::from_bands( &[vec![values.to_vec()]])
    }
}

impl Shaped for FomGrid {
    fn shape (&self) -> RasterShape { self.shape }
}

impl RowSource for FomGrid {
    fn read_row (&self, band: usize, row: usize, buf: &mut [i32]) -> Result<()> {
        if band < 1 || band > self.shape.bands || row >= self.shape.rows { return Err( misc_error("row out of range")) }
        let start = ((band-1) * self.shape.rows + row) * self.shape.cols;
        buf.copy_from_slice( &self.values[start..start + self.shape.cols]);
        self.reads.borrow_mut()[(band-1) * self.shape.rows + row] += 1;
        Ok(())
    }
}

/// in-memory confidence raster that counts row writes
pub struct CodeGrid {
    pub shape: RasterShape,
    pub codes: Vec<u8>,
    pub writes: Vec<usize>,
    pub fail_on_finish: bool, // simulates a failed flush on close
}

impl CodeGrid {
    pub fn new (shape: RasterShape) -> Self {
        CodeGrid { shape, codes: vec![255; shape.n_pixels()], writes: vec![0; shape.bands * shape.rows], fail_on_finish: false }
    }

    pub fn row (&self, band: usize, row: usize) -> &[u8] {
        let start = ((band-1) * self.shape.rows + row) * self.shape.cols;
        &self.codes[start..start + self.shape.cols]
    }
}

impl Shaped for CodeGrid {
    fn shape (&self) -> RasterShape { self.shape }
}

impl RowSink for CodeGrid {
    fn write_row (&mut self, band: usize, row: usize, values: &[u8]) -> Result<()> {
        let start = ((band-1) * self.shape.rows + row) * self.shape.cols;
        self.codes[start..start + self.shape.cols].copy_from_slice( values);
        self.writes[(band-1) * self.shape.rows + row] += 1;
        Ok(())
    }

    fn finish (self) -> Result<()> {
        if self.fail_on_finish { Err( misc_error("flush failed")) } else { Ok(()) }
    }
}

/// progress monitor that records all notifications
#[derive(Default)]
pub struct RecordingProgress {
    pub bands: Vec<(usize,usize)>,
    pub fractions: Vec<Vec<f64>>,
}

impl ProgressMonitor for RecordingProgress {
    fn start_band (&mut self, band: usize, n_bands: usize) {
        self.bands.push( (band, n_bands));
        self.fractions.push( Vec::new());
    }

    fn update (&mut self, fraction: f64) {
        self.fractions.last_mut().unwrap().push( fraction);
    }
}

pub const TEST_GEOTRANSFORM: GeoTransform = [-1500.0, 2.0, 0.0, 3000.0, 0.0, -2.0];

/// write a GeoTIFF FOM raster with bands[band][row][col] values
pub fn write_fom_tif (path: &Path, pixel_type: PixelType, bands: &[Vec<Vec<i32>>]) {
    let rows = bands[0].len();
    let cols = bands[0][0].len();
    let driver = DriverManager::get_driver_by_name("GTiff").unwrap();
    let mut ds = create_dataset( &driver, path, cols, rows, bands.len(), pixel_type, None).unwrap();
    ds.set_geo_transform( &TEST_GEOTRANSFORM).unwrap();

    for (b, band_values) in bands.iter().enumerate() {
        let mut band = ds.rasterband(b+1).unwrap();
        for (row, row_values) in band_values.iter().enumerate() {
            let mut buf = Buffer::new( (cols,1), row_values.clone());
            write_row( &mut band, row, &mut buf).unwrap();
        }
    }
}

/// read all bands of a raster as bands[band][row][col]
pub fn read_raster (path: &Path) -> Vec<Vec<Vec<i32>>> {
    let ds = open_readonly(path).unwrap();
    let shape = ds.shape();
    let mut result = Vec::new();

    for b in 1..=shape.bands {
        let mut band_values = Vec::new();
        for row in 0..shape.rows {
            let mut buf = vec![0i32; shape.cols];
            ds.read_row( b, row, &mut buf).unwrap();
            band_values.push( buf);
        }
        result.push( band_values);
    }
    result
}
