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
use std::ffi::OsString;
use std::path::PathBuf;
use clap::Parser;
use lmmp_gdal::PixelType;

use crate::config::RemapConfig;
use crate::remap::DomainPolicy;

/// options that are traditionally spelled with a single dash (as in GDAL utilities)
const SINGLE_DASH_OPTIONS: [&str; 5] = ["-innd", "-outnd", "-of", "-ot", "-co"];

#[derive(Parser,Debug)]
#[command(name = "remap_confidence", version,
          about = "remap a stereo correlation Figure-Of-Merit (FOM) raster into an LMMP confidence raster")]
pub struct Args {
    /// input nodata value (accepted for compatibility, FOM values are remapped regardless)
    #[arg(long, value_name = "FLOAT", allow_hyphen_values = true)]
    pub innd: Option<f64>,

    /// nodata value to set on all output bands
    #[arg(long, value_name = "FLOAT", allow_hyphen_values = true)]
    pub outnd: Option<f64>,

    /// output GDAL driver (default derived from output extension, GTiff otherwise)
    #[arg(long = "of", value_name = "FORMAT")]
    pub format: Option<String>,

    /// output pixel type {Byte,Int16,UInt16,Int32,UInt32,Float32,Float64,CInt16,CInt32,CFloat32,CFloat64}, unknown types fall back to Byte
    #[arg(long = "ot", value_name = "TYPE", default_value = "Byte")]
    pub pixel_type: String,

    /// output creation option (can be repeated)
    #[arg(long = "co", value_name = "NAME=VALUE")]
    pub create_options: Vec<String>,

    /// don't show progress
    #[arg(short, long)]
    pub quiet: bool,

    /// how to handle negative FOM values
    #[arg(long, value_enum, default_value_t = DomainPolicy::Lenient)]
    pub domain_policy: DomainPolicy,

    /// input FOM raster
    pub infile: PathBuf,

    /// output confidence raster
    pub outfile: PathBuf,
}

impl Args {
    /// parse the process arguments, exiting with usage information if they are not valid
    pub fn parse_normalized () -> Args {
        Args::parse_from( normalize_args( std::env::args_os()))
    }

    pub fn try_parse_normalized<I,T> (args: I) -> Result<Args, clap::Error>
        where I: IntoIterator<Item=T>, T: Into<OsString>
    {
        Args::try_parse_from( normalize_args(args))
    }

    pub fn into_config (self) -> RemapConfig {
        RemapConfig {
            src_path: self.infile,
            tgt_path: self.outfile,
            format: self.format,
            pixel_type: PixelType::parse_or_byte( &self.pixel_type),
            src_nodata: self.innd,
            tgt_nodata: self.outnd,
            create_options: self.create_options,
            quiet: self.quiet,
            domain_policy: self.domain_policy,
        }
    }
}

/// turn GDAL style single dash long options ("-of") into their clap spelling ("--of")
pub fn normalize_args<I,T> (args: I) -> Vec<OsString> where I: IntoIterator<Item=T>, T: Into<OsString> {
    args.into_iter().map( |arg| {
        let arg: OsString = arg.into();
        match arg.to_str() {
            Some(s) if SINGLE_DASH_OPTIONS.contains( &s) => OsString::from( format!("-{s}")),
            _ => arg
        }
    }).collect()
}
