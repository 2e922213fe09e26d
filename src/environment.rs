// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//server
pub const ENV_TAWQIT_BIND: &str = "TAWQIT_BIND";
pub const ENV_TAWQIT_PORT: &str = "TAWQIT_PORT";
