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
use tracing_subscriber::EnvFilter;

use lmmp_confidence::{cli::Args, remap_file};

fn main () -> Result<()> {
    // usage errors exit here, before any file is touched
    let args = Args::parse_normalized();

    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("warn"))) // use RUST_LOG to set max level
        .with_writer( std::io::stderr)
        .init();
    lmmp_gdal::init_error_handler();

    let config = args.into_config();
    let summary = remap_file( &config)?;
    summary.log();

    Ok(())
}
