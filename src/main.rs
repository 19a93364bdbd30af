// Copyright 2026 The HorizTree Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use anyhow::{Context, Result};
use log::info;

use horiztree_icon::IconConfig;

const OUTPUT_PATH: &str = "app-icon.png";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = IconConfig::default();
    info!("Rendering {}x{} icon.", config.size, config.size);

    horiztree_icon::render_to_file(&config, OUTPUT_PATH)
        .with_context(|| format!("failed to write icon to {}", OUTPUT_PATH))?;

    Ok(())
}
