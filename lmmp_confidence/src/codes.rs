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
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// the LMMP confidence classification of a DEM pixel. Discriminants are the values stored in
/// confidence rasters
#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash,PartialOrd,Ord,EnumIter)]
pub enum ConfidenceCode {
    NoData = 0,
    Shadowed = 1,
    Saturated = 2,
    Suspicious = 3,
    Interpolated = 4,
    FitPoor = 10,
    FitFair = 11,
    FitMedium = 12,
    FitGood = 13,
    FitBest = 14,
    ManuallyInterpolated = 15,
    /// points tied to external references (e.g. LOLA shots). Assigned by other pipeline
    /// stages, never by the FOM remap
    SeedPoint = 17,
}

/// largest code value, used to size code histograms
pub const MAX_CODE: u8 = ConfidenceCode::SeedPoint as u8;

impl ConfidenceCode {
    #[inline]
    pub const fn value (self) -> u8 { self as u8 }

    pub fn from_value (value: u8) -> Option<ConfidenceCode> {
        ConfidenceCode::iter().find( |c| c.value() == value)
    }

    pub fn description (&self) -> &'static str {
        use ConfidenceCode::*;
        match *self {
            NoData => "no data / outside boundary",
            Shadowed => "shadowed",
            Saturated => "saturated",
            Suspicious => "suspicious (edge, corner, no correlation), don't use",
            Interpolated => "interpolated / extrapolated from neighbor pixels",
            FitPoor => "correlation success, poor linear fit",
            FitFair => "correlation success, fair linear fit",
            FitMedium => "correlation success, medium linear fit",
            FitGood => "correlation success, good linear fit",
            FitBest => "correlation success, best linear fit",
            ManuallyInterpolated => "manually interpolated (mass-point edit)",
            SeedPoint => "seed point",
        }
    }

    /// is this one of the graded correlation success codes 10..14
    pub fn is_fit_success (&self) -> bool {
        (ConfidenceCode::FitPoor.value()..=ConfidenceCode::FitBest.value()).contains( &self.value())
    }
}

impl From<ConfidenceCode> for u8 {
    fn from (code: ConfidenceCode) -> u8 { code.value() }
}

impl fmt::Display for ConfidenceCode {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt( &self.value(), f) // keep width/alignment of the format spec
    }
}
