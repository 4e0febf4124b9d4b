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
use std::ptr::{null, null_mut};

/// receiver for progress notifications of long running raster operations
pub trait ProgressMonitor {
    /// called before the first row of `band` (1-based) is processed
    fn start_band (&mut self, _band: usize, _n_bands: usize) {}

    /// fraction of rows completed within the current band, in [0..1] and non-decreasing per band
    fn update (&mut self, fraction: f64);
}

/// the quiet monitor
#[derive(Debug,Default)]
pub struct NoProgress;

impl ProgressMonitor for NoProgress {
    fn update (&mut self, _fraction: f64) {}
}

/// console progress through GDAL's "0...10...20...30" line, which restarts for each band
#[derive(Debug,Default)]
pub struct TermProgress;

impl ProgressMonitor for TermProgress {
    fn update (&mut self, fraction: f64) {
        let fraction = fraction.clamp( 0.0, 1.0);
        unsafe { gdal_sys::GDALTermProgress( fraction, null(), null_mut()); }
    }
}
