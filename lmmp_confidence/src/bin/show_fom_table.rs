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
use anyhow::Result;
use clap::Parser;
use strum::IntoEnumIterator;

use lmmp_confidence::{ConfidenceCode, FOM_MAX, FOM_TABLE_LEN};
use lmmp_confidence::table::{fom_ranges, fom_values_for};

#[derive(Parser, Debug)]
#[command(version, about = "show_fom_table - print the FOM to LMMP confidence code table")]
struct Args {
    /// list confidence codes with all their FOM values instead of FOM ranges
    #[arg(long)]
    by_code: bool,
}

fn main () -> Result<()> {
    let args = Args::parse();

    if args.by_code {
        for code in ConfidenceCode::iter() {
            let foms = fom_values_for(code);
            let foms = if foms.is_empty() {
                "n/a".to_string()
            } else {
                foms.iter().map( |v| v.to_string()).collect::<Vec<String>>().join(",")
            };
            println!("{:>2}  {:<52} {}", code, code.description(), foms);
        }

    } else {
        println!("{:<8} {:>4}  description", "FOM", "code");
        for (range, code) in fom_ranges() {
            let foms = if range.start() == range.end() { range.start().to_string() } else { format!("{}-{}", range.start(), range.end()) };
            println!("{:<8} {:>4}  {}", foms, code, code.description());
        }
        println!("{:<8} {:>4}  {}", format!("{}-{}", FOM_MAX + 1, FOM_TABLE_LEN - 1), ConfidenceCode::NoData, "unexpected FOM values");
        println!("{:<8} {:>4}  {} (not assigned by FOM)", "n/a", ConfidenceCode::SeedPoint, ConfidenceCode::SeedPoint.description());
    }

    Ok(())
}
