// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `bytestr config` command: print the effective configuration.

use super::CliConfig;

pub fn execute(config: &CliConfig) -> anyhow::Result<()> {
    let budget = config.budget()?;
    tracing::info!(%budget, "effective arena budget");

    print!("{}", toml::to_string_pretty(config)?);
    println!("# arena budget resolves to {} bytes ({budget})", budget.as_bytes());
    Ok(())
}
