// Dweve perfcmp - Storage Benchmark Comparison Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unit conversion constants and x-axis label formatting.

use serde::{Deserialize, Serialize};

/// Bytes per GiB.
pub const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Operations per Mop.
pub const MOPS: f64 = 1000.0 * 1000.0;

/// Per-family conversion divisors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitConfig {
    /// Divisor turning bytes/sec into GiB/s.
    pub gib_divisor: f64,
    /// Divisor turning items/sec into Mops/s.
    pub mops_divisor: f64,
}

impl Default for UnitConfig {
    fn default() -> Self {
        Self {
            gib_divisor: GIB,
            mops_divisor: MOPS,
        }
    }
}

/// Time unit reported alongside latency fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    /// Nanoseconds.
    #[default]
    Nanos,
    /// Microseconds.
    Micros,
    /// Milliseconds.
    Millis,
    /// Seconds.
    Seconds,
}

impl TimeUnit {
    /// Parse the short form used by benchmark reports (`ns`, `us`, `ms`, `s`).
    pub fn parse(unit: &str) -> Option<Self> {
        match unit {
            "ns" => Some(Self::Nanos),
            "us" => Some(Self::Micros),
            "ms" => Some(Self::Millis),
            "s" => Some(Self::Seconds),
            _ => None,
        }
    }

    /// Convert a value in this unit to microseconds.
    pub fn to_micros(self, value: f64) -> f64 {
        match self {
            Self::Nanos => value / 1000.0,
            Self::Micros => value,
            Self::Millis => value * 1000.0,
            Self::Seconds => value * 1_000_000.0,
        }
    }
}

/// Collapse a byte count into a short bucket label.
///
/// Multiples of 1024 become kibibyte labels; anything else is kept verbatim.
///
/// # Examples
///
/// ```
/// use perfcmp_core::units::format_bytes;
///
/// assert_eq!(format_bytes(4096), "4K");
/// assert_eq!(format_bytes(100), "100");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes % 1024 == 0 {
        format!("{}K", bytes / 1024)
    } else {
        bytes.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(1024), "1K");
        assert_eq!(format_bytes(2 * 1024 * 1024), "2048K");
        assert_eq!(format_bytes(1000), "1000");
        assert_eq!(format_bytes(0), "0K");
    }

    #[test]
    fn test_default_divisors() {
        let units = UnitConfig::default();
        assert_eq!(1_073_741_824.0 / units.gib_divisor, 1.0);
        assert_eq!(2_000_000.0 / units.mops_divisor, 2.0);
    }

    #[test]
    fn test_time_units() {
        assert_eq!(TimeUnit::parse("ns"), Some(TimeUnit::Nanos));
        assert_eq!(TimeUnit::parse("fortnight"), None);
        assert_eq!(TimeUnit::Nanos.to_micros(1500.0), 1.5);
        assert_eq!(TimeUnit::Millis.to_micros(2.0), 2000.0);
        assert_eq!(TimeUnit::Seconds.to_micros(1.0), 1_000_000.0);
        assert_eq!(TimeUnit::default().to_micros(1000.0), 1.0);
    }
}
