// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use tracing::warn;

use crate::environment;

const DEFAULT_PORT: u16 = 8000;

pub fn build_bind_addr() -> SocketAddr {
    SocketAddr::new(build_bind_ip(), build_port())
}

fn build_bind_ip() -> IpAddr {
    let Ok(env_value) = env::var(environment::ENV_TAWQIT_BIND) else {
        return IpAddr::V4(Ipv4Addr::UNSPECIFIED);
    };
    match env_value.parse() {
        Ok(ip) => ip,
        Err(_) => {
            warn!(
                r#""{}" is not a valid bind address, using 0.0.0.0"#,
                env_value
            );
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        },
    }
}

fn build_port() -> u16 {
    let Ok(env_value) = env::var(environment::ENV_TAWQIT_PORT) else {
        return DEFAULT_PORT;
    };
    let Ok(port) = env_value.parse() else {
        warn!(
            r#""{}" is not a valid port, using {}"#,
            env_value, DEFAULT_PORT
        );
        return DEFAULT_PORT;
    };
    port
}
