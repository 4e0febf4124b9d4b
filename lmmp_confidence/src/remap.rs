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
use clap::ValueEnum;
use tracing::{debug, info, warn};
use lmmp_gdal::{ProgressMonitor, RasterShape, RowSink, RowSource, Shaped};

use crate::codes::{ConfidenceCode, MAX_CODE};
use crate::errors::{Result, domain_error};
use crate::table::{FomDomain, classify, confidence_code};

/// how to treat negative FOM values, which no FOM raster should contain. Values above the
/// table range always silently map to no-data
#[derive(Debug,Copy,Clone,PartialEq,Eq,Default,ValueEnum)]
pub enum DomainPolicy {
    /// map to no-data and report the number of occurrences
    #[default]
    Lenient,
    /// abort the remap at the first negative value
    Strict,
}

#[derive(Debug,Clone,PartialEq,Eq)]
pub struct BandStats {
    pub band: usize,
    pub n_pixels: usize,
    /// values in the 100..=137 no-data pad of the table
    pub n_pad: usize,
    /// values above the table
    pub n_beyond: usize,
    pub n_negative: usize,
    /// number of output pixels per confidence code value
    pub histogram: [usize; MAX_CODE as usize + 1],
}

impl BandStats {
    pub fn new (band: usize) -> Self {
        BandStats { band, n_pixels: 0, n_pad: 0, n_beyond: 0, n_negative: 0, histogram: [0; MAX_CODE as usize + 1] }
    }

    pub fn count (&self, code: ConfidenceCode) -> usize {
        self.histogram[code.value() as usize]
    }

    pub fn n_out_of_domain (&self) -> usize {
        self.n_pad + self.n_beyond + self.n_negative
    }

    /// number of pixels with one of the graded correlation success codes
    pub fn n_correlated (&self) -> usize {
        self.histogram.iter().enumerate()
            .filter( |(v,_)| ConfidenceCode::from_value( *v as u8).is_some_and( |c| c.is_fit_success()))
            .map( |(_,n)| *n)
            .sum()
    }
}

#[derive(Debug,Clone,PartialEq,Eq)]
pub struct RemapSummary {
    pub shape: RasterShape,
    pub bands: Vec<BandStats>,
}

impl RemapSummary {
    pub fn n_out_of_domain (&self) -> usize {
        self.bands.iter().map( |b| b.n_out_of_domain()).sum()
    }

    pub fn n_negative (&self) -> usize {
        self.bands.iter().map( |b| b.n_negative).sum()
    }

    pub fn log (&self) {
        info!("remapped {} bands of {}x{} pixels", self.shape.bands, self.shape.cols, self.shape.rows);
        for b in &self.bands {
            let counts: Vec<String> = b.histogram.iter().enumerate()
                .filter( |(_,n)| **n > 0)
                .map( |(code,n)| format!("{code}:{n}"))
                .collect();
            info!("band {}: codes [{}], {} of {} pixels correlated", b.band, counts.join(", "), b.n_correlated(), b.n_pixels);

            if b.n_pad + b.n_beyond > 0 {
                warn!("band {}: {} FOM values above {} mapped to no-data", b.band, b.n_pad + b.n_beyond, crate::table::FOM_MAX);
            }
        }
    }
}

/// remap one row of FOM values into confidence codes, updating `stats`.
/// Returns the column of the first negative value, if any
pub fn remap_row (fom_values: &[i32], codes: &mut [u8], stats: &mut BandStats) -> Option<usize> {
    let mut first_negative: Option<usize> = None;

    for (col, (fom, code)) in fom_values.iter().zip( codes.iter_mut()).enumerate() {
        let fom = i64::from(*fom);
        let cc = confidence_code(fom);
        *code = cc.value();
        stats.histogram[cc.value() as usize] += 1;

        match classify(fom) {
            FomDomain::Mapped => {}
            FomDomain::Pad => stats.n_pad += 1,
            FomDomain::Beyond => stats.n_beyond += 1,
            FomDomain::Negative => {
                stats.n_negative += 1;
                if first_negative.is_none() { first_negative = Some(col) }
            }
        }
    }

    stats.n_pixels += fom_values.len();
    first_negative
}

/// stream all bands of `src` row by row through the FOM table into `tgt`, which has to have the same
/// shape. Each source row is read once and each target row is written once. The remap itself holds one
/// FOM row and one code row, sinks may copy a row for writing it
pub fn remap_raster<S,T,P> (src: &S, tgt: &mut T, policy: DomainPolicy, progress: &mut P) -> Result<RemapSummary>
    where S: RowSource + ?Sized, T: RowSink + ?Sized, P: ProgressMonitor + ?Sized
{
    let shape = src.shape();
    shape.check_same( &tgt.shape())?;

    let mut fom_row: Vec<i32> = vec![0; shape.cols];
    let mut code_row: Vec<u8> = vec![0; shape.cols];
    let mut bands: Vec<BandStats> = Vec::with_capacity( shape.bands);

    for band in 1..=shape.bands {
        debug!("remapping band {}/{}", band, shape.bands);
        progress.start_band( band, shape.bands);
        let mut stats = BandStats::new(band);

        for row in 0..shape.rows {
            src.read_row( band, row, &mut fom_row)?;

            if let Some(col) = remap_row( &fom_row, &mut code_row, &mut stats) {
                if policy == DomainPolicy::Strict {
                    return Err( domain_error( band, row, col, fom_row[col]))
                }
            }

            tgt.write_row( band, row, &code_row)?;
            progress.update( (row + 1) as f64 / shape.rows as f64);
        }

        if stats.n_negative > 0 {
            warn!("band {}: {} negative FOM values mapped to no-data", band, stats.n_negative);
        }
        bands.push(stats);
    }

    Ok( RemapSummary { shape, bands })
}
