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
use std::str::FromStr;
use gdal_sys::GDALDataType;
use strum::{Display, EnumIter, EnumString};
use tracing::warn;

/// the output pixel types that can be requested on the command line. Names are the GDAL type
/// names, complex types included
#[derive(Debug,Copy,Clone,PartialEq,Eq,Default,Display,EnumString,EnumIter)]
pub enum PixelType {
    #[default]
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Float32,
    Float64,
    CInt16,
    CInt32,
    CFloat32,
    CFloat64,
}

impl PixelType {
    /// parse a GDAL type name. Unknown names fall back to Byte, which can hold every confidence code
    pub fn parse_or_byte (name: &str) -> PixelType {
        PixelType::from_str(name).unwrap_or_else( |_| {
            warn!("unknown pixel type '{}', using {}", name, PixelType::Byte);
            PixelType::Byte
        })
    }

    pub fn gdal_type (&self) -> GDALDataType::Type {
        use PixelType::*;
        match *self {
            Byte     => GDALDataType::GDT_Byte,
            Int16    => GDALDataType::GDT_Int16,
            UInt16   => GDALDataType::GDT_UInt16,
            Int32    => GDALDataType::GDT_Int32,
            UInt32   => GDALDataType::GDT_UInt32,
            Float32  => GDALDataType::GDT_Float32,
            Float64  => GDALDataType::GDT_Float64,
            CInt16   => GDALDataType::GDT_CInt16,
            CInt32   => GDALDataType::GDT_CInt32,
            CFloat32 => GDALDataType::GDT_CFloat32,
            CFloat64 => GDALDataType::GDT_CFloat64,
        }
    }

    pub fn is_complex (&self) -> bool {
        matches!( self, PixelType::CInt16 | PixelType::CInt32 | PixelType::CFloat32 | PixelType::CFloat64)
    }
}
