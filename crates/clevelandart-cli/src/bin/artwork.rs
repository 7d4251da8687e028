// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Result;
use clevelandart_cli::{bootstrap, parse_identifier, render_json};

fn main() -> Result<()> {
    let id = parse_identifier(std::env::args().skip(1))?;
    let client = bootstrap()?;
    let artwork = client.artwork(id)?;
    println!("{}", render_json(&artwork)?);
    Ok(())
}
