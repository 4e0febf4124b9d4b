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

use strum::IntoEnumIterator;
use lmmp_confidence::*;
use lmmp_confidence::table::{fom_ranges, fom_values_for};

// run with "cargo test test_xx -- --nocapture"

// the published FOM -> LMMP confidence table, one entry per FOM value 0..99
const EXPECTED: [u8; 100] = [
//  0  1  2  3  4  5  6  7  8  9
    0, 0, 1, 3, 4, 3, 3, 3, 3, 3,   // 0..
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3,   // 10..
    3, 2,15,15,15,15,15,15, 3,15,   // 20..
    4, 3, 3, 3, 3, 3, 3, 3, 3, 3,   // 30..
   10,10,10,10,10,10,10,10,10,10,   // 40..
   10,10,10,10,10,10,10,10,10,10,   // 50..
   11,11,11,11,11,11,11,11,11,11,   // 60..
   12,12,12,12,12,12,12,12,12,12,   // 70..
   13,13,13,13,13,13,13,13,13,13,   // 80..
   14,14,14,14,14,14,14,14,14,14,   // 90..
];

#[test]
fn test_all_fom_values() {
    for fom in 0..=99i64 {
        assert_eq!( confidence_code(fom).value(), EXPECTED[fom as usize], "FOM {fom}");
        assert_eq!( FOM_TABLE[fom as usize].value(), EXPECTED[fom as usize], "table entry {fom}");
        assert_eq!( classify(fom), FomDomain::Mapped);
    }
}

#[test]
fn test_documented_boundaries() {
    assert_eq!( confidence_code(4), ConfidenceCode::Interpolated);
    assert_eq!( confidence_code(30), ConfidenceCode::Interpolated);
    assert_eq!( confidence_code(21), ConfidenceCode::Saturated);
    assert_eq!( confidence_code(25), ConfidenceCode::ManuallyInterpolated);
    assert_eq!( confidence_code(28), ConfidenceCode::Suspicious);
    assert_eq!( confidence_code(39), ConfidenceCode::Suspicious);
    assert_eq!( confidence_code(40), ConfidenceCode::FitPoor);
    assert_eq!( confidence_code(59), ConfidenceCode::FitPoor);
    assert_eq!( confidence_code(60), ConfidenceCode::FitFair);
    assert_eq!( confidence_code(65), ConfidenceCode::FitFair);
    assert_eq!( confidence_code(79), ConfidenceCode::FitMedium);
    assert_eq!( confidence_code(89), ConfidenceCode::FitGood);
    assert_eq!( confidence_code(99), ConfidenceCode::FitBest);
}

#[test]
fn test_values_above_table_range() {
    assert_eq!( FOM_TABLE_LEN, 138);

    for fom in 100..FOM_TABLE_LEN as i64 {
        assert_eq!( confidence_code(fom), ConfidenceCode::NoData, "pad FOM {fom}");
        assert_eq!( classify(fom), FomDomain::Pad);
    }

    for fom in [138i64, 200, 255, 256, 1000, 65535, i32::MAX as i64, i64::MAX] {
        assert_eq!( confidence_code(fom), ConfidenceCode::NoData, "FOM {fom}");
        assert_eq!( classify(fom), FomDomain::Beyond);
    }
}

#[test]
fn test_negative_values() {
    for fom in [-1i64, -99, -32768, i64::MIN] {
        assert_eq!( confidence_code(fom), ConfidenceCode::NoData);
        assert_eq!( classify(fom), FomDomain::Negative);
    }
}

#[test]
fn test_lookup_is_pure() {
    let first: Vec<ConfidenceCode> = (-5..150).map( confidence_code).collect();
    // interleave lookups of other values, results must not change
    for fom in (-5..150).rev() { confidence_code(fom); }
    let second: Vec<ConfidenceCode> = (-5..150).map( confidence_code).collect();
    assert_eq!( first, second);
}

#[test]
fn test_remapped_codes_are_no_fixed_point() {
    // all output codes are valid input, but the remap is not idempotent
    let codomain = [0u8, 1, 2, 3, 4, 10, 11, 12, 13, 14, 15];
    let remapped: Vec<u8> = codomain.iter().map( |v| confidence_code(*v as i64).value()).collect();
    assert_eq!( remapped, vec![0, 0, 1, 3, 4, 3, 3, 3, 3, 3, 3]);
}

#[test]
fn test_seed_point_never_produced() {
    for fom in -10..1000i64 {
        assert_ne!( confidence_code(fom), ConfidenceCode::SeedPoint);
    }
    assert!( fom_values_for( ConfidenceCode::SeedPoint).is_empty());
    assert_eq!( ConfidenceCode::SeedPoint.value(), 17);
}

#[test]
fn test_codes() {
    let values: Vec<u8> = ConfidenceCode::iter().map( |c| c.value()).collect();
    assert_eq!( values, vec![0, 1, 2, 3, 4, 10, 11, 12, 13, 14, 15, 17]);

    for c in ConfidenceCode::iter() {
        assert_eq!( ConfidenceCode::from_value( c.value()), Some(c));
        assert!( !c.description().is_empty());
        assert_eq!( u8::from(c), c.value());
    }
    assert_eq!( ConfidenceCode::from_value(5), None);
    assert_eq!( ConfidenceCode::from_value(16), None);

    assert!( ConfidenceCode::FitMedium.is_fit_success());
    assert!( !ConfidenceCode::ManuallyInterpolated.is_fit_success());
    assert_eq!( format!("{:>3}", ConfidenceCode::FitBest), " 14");
}

#[test]
fn test_fom_ranges() {
    let ranges = fom_ranges();
    println!("{ranges:?}");

    assert_eq!( ranges.first(), Some(&(0..=1, ConfidenceCode::NoData)));
    assert_eq!( ranges.last(), Some(&(90..=99, ConfidenceCode::FitBest)));
    assert!( ranges.contains( &(22..=27, ConfidenceCode::ManuallyInterpolated)));
    assert!( ranges.contains( &(31..=39, ConfidenceCode::Suspicious)));
    assert!( ranges.contains( &(40..=59, ConfidenceCode::FitPoor)));

    // ranges are contiguous and cover 0..=99
    let mut next = 0;
    for (range, code) in &ranges {
        assert_eq!( *range.start(), next);
        next = range.end() + 1;
    }
    assert_eq!( next, FOM_MAX + 1);

    assert_eq!( fom_values_for( ConfidenceCode::Interpolated), vec![4, 30]);
    assert_eq!( fom_values_for( ConfidenceCode::ManuallyInterpolated), vec![22, 23, 24, 25, 26, 27, 29]);
}
