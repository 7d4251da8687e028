// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Result;
use clevelandart_cli::{bootstrap, parse_with_image_flag, render_json};

fn main() -> Result<()> {
    let with_image = parse_with_image_flag(std::env::args().skip(1))?;
    let client = bootstrap()?;
    let artwork = client.random_artwork(with_image)?;
    println!("{}", render_json(&artwork)?);
    Ok(())
}
