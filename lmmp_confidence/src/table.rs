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
//! the fixed Figure-Of-Merit (FOM) to confidence code table.
//!
//! FOM values are produced by the stereo correlator in the range 0..99. The table is padded up to
//! index 137 with no-data entries for legacy inputs that carry unexpected high values. Lookups of
//! indices past the pad (and of negative values) do not index into the table but fall back to
//! `ConfidenceCode::NoData`.
//!
//! Note that remapping is not idempotent: confidence codes are valid FOM inputs but do not map to
//! themselves (e.g. 10..15 map to `Suspicious`, 1 maps to `NoData`).

use std::ops::RangeInclusive;
use crate::codes::ConfidenceCode::{self, *};

/// largest FOM value the correlator produces
pub const FOM_MAX: i64 = 99;

/// number of table entries including the no-data pad above FOM_MAX
pub const FOM_TABLE_LEN: usize = 138;

#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum FomDomain {
    /// 0..=99, documented correlator values
    Mapped,
    /// 100..=137, not expected but covered by the table
    Pad,
    /// beyond the table
    Beyond,
    Negative,
}

const fn fom_entry (fom: usize) -> ConfidenceCode {
    match fom {
        0..=1 => NoData,
        2 => Shadowed,
        3 | 5..=20 | 28 | 31..=39 => Suspicious,
        4 | 30 => Interpolated,
        21 => Saturated,
        22..=27 | 29 => ManuallyInterpolated,
        40..=59 => FitPoor,
        60..=69 => FitFair,
        70..=79 => FitMedium,
        80..=89 => FitGood,
        90..=99 => FitBest,
        _ => NoData
    }
}

const fn build_table () -> [ConfidenceCode; FOM_TABLE_LEN] {
    let mut table = [NoData; FOM_TABLE_LEN];
    let mut i = 0;
    while i < FOM_TABLE_LEN {
        table[i] = fom_entry(i);
        i += 1;
    }
    table
}

pub static FOM_TABLE: [ConfidenceCode; FOM_TABLE_LEN] = build_table();

/// the confidence code for a FOM value. Total over all integers - anything outside of the table maps to NoData
#[inline]
pub fn confidence_code (fom: i64) -> ConfidenceCode {
    if fom < 0 {
        NoData
    } else {
        usize::try_from(fom).ok()
            .and_then( |i| FOM_TABLE.get(i))
            .copied()
            .unwrap_or(NoData)
    }
}

pub fn classify (fom: i64) -> FomDomain {
    if fom < 0 {
        FomDomain::Negative
    } else if fom <= FOM_MAX {
        FomDomain::Mapped
    } else if fom < FOM_TABLE_LEN as i64 {
        FomDomain::Pad
    } else {
        FomDomain::Beyond
    }
}

/// contiguous FOM ranges within 0..=FOM_MAX that share a confidence code, in ascending FOM order
pub fn fom_ranges () -> Vec<(RangeInclusive<i64>, ConfidenceCode)> {
    let mut ranges: Vec<(RangeInclusive<i64>, ConfidenceCode)> = Vec::new();

    for fom in 0..=FOM_MAX {
        let code = confidence_code(fom);
        match ranges.last_mut() {
            Some((range, last_code)) if *last_code == code => *range = *range.start()..=fom,
            _ => ranges.push( (fom..=fom, code))
        }
    }
    ranges
}

/// all FOM values (within 0..=FOM_MAX) that map to `code`
pub fn fom_values_for (code: ConfidenceCode) -> Vec<i64> {
    (0..=FOM_MAX).filter( |fom| confidence_code(*fom) == code).collect()
}
