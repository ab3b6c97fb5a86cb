use std::fmt;
use std::str::FromStr;

use super::errors::TabletError;

// Declares a closed enum whose variants map one-to-one onto the wire names
// the server uses in DDL statements and tablet payloads.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $err:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TabletError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(TabletError::$err(other.to_string())),
                }
            }
        }
    };
}

wire_enum! {
    /// Value type of a measurement column.
    TSDataType, UnsupportedDataType {
        Boolean => "BOOLEAN",
        Int32 => "INT32",
        Int64 => "INT64",
        Float => "FLOAT",
        Double => "DOUBLE",
        Text => "TEXT",
    }
}

wire_enum! {
    /// Server-side encoding requested when a timeseries is created.
    TSEncoding, UnsupportedEncoding {
        Plain => "PLAIN",
        Dictionary => "DICTIONARY",
        Rle => "RLE",
        Diff => "DIFF",
        Ts2Diff => "TS_2DIFF",
        Bitmap => "BITMAP",
        GorillaV1 => "GORILLA_V1",
        Regular => "REGULAR",
        Gorilla => "GORILLA",
        Zigzag => "ZIGZAG",
        Chimp => "CHIMP",
        Sprintz => "SPRINTZ",
        Rlbe => "RLBE",
    }
}

wire_enum! {
    /// Server-side compressor requested when a timeseries is created.
    CompressionType, UnsupportedCompression {
        Uncompressed => "UNCOMPRESSED",
        Snappy => "SNAPPY",
        Gzip => "GZIP",
        Lzo => "LZO",
        Sdt => "SDT",
        Paa => "PAA",
        Pla => "PLA",
        Lz4 => "LZ4",
        Zstd => "ZSTD",
        Lzma2 => "LZMA2",
    }
}

impl TSDataType {
    /// Fixed per-row footprint on the wire. TEXT is variable width.
    pub fn byte_width(&self) -> Option<usize> {
        match self {
            TSDataType::Boolean => Some(1),
            TSDataType::Int32 | TSDataType::Float => Some(4),
            TSDataType::Int64 | TSDataType::Double => Some(8),
            TSDataType::Text => None,
        }
    }
}
