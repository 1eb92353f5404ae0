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

//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

/// Default directive without `--verbose`.
pub const DEFAULT_DIRECTIVE: &str = "perfcmp=info";

/// Directive with `--verbose`.
pub const VERBOSE_DIRECTIVE: &str = "perfcmp=debug";

/// Directive for the requested verbosity.
pub fn directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    }
}

/// Install the global subscriber, writing to stderr.
///
/// stdout stays reserved for the printed pivots.
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(directive(verbose).parse().expect("valid log directive")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::Directive;

    #[test]
    fn test_directives_parse() {
        for verbose in [false, true] {
            assert!(directive(verbose).parse::<Directive>().is_ok());
        }
    }

    #[test]
    fn test_verbose_directive() {
        assert_eq!(directive(true), "perfcmp=debug");
        assert_eq!(directive(false), "perfcmp=info");
    }
}
