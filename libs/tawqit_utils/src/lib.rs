// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for tawqit crates.

mod merge;

pub use merge::{merge_in_place, merge_sorted};
