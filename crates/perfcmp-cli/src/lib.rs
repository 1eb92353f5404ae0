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

//! perfcmp CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Comparison
//!
//! One command per benchmark campaign, each taking the result root:
//!
//! - **micro-st**: single-threaded I/O size sweep (GiB/s)
//! - **micro-mt**: multi-threaded scalability sweep (Mops/s)
//! - **micro-meta**: metadata latency sweep (us)
//! - **ycsb**: YCSB workloads a-f (Mops/s)
//! - **tpcc**: TPC-C transaction types and mix (k txns/s)
//!
//! ## Reporting
//!
//! - **show**: rebuild and print pivots from an exported `result.csv`
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`. The default level is `info`
//! (`debug` with `--verbose`); `RUST_LOG` adds further directives.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
