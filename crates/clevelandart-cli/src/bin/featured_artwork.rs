// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Result;
use clevelandart_cli::{bootstrap, render_featured, FEATURED_ACCESSION};

fn main() -> Result<()> {
    let client = bootstrap()?;
    let artwork = client.artwork(FEATURED_ACCESSION)?;
    println!("{}", render_featured(&artwork));
    Ok(())
}
