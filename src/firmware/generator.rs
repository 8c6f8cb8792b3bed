//! PRK Firmware `keymap.rb` generation.
//!
//! This module renders a `KeymapConfig` into the Ruby script PRK Firmware
//! loads at boot, and writes it to disk atomically.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::constants::{MOD_KEY_REPUSH_THRESHOLD_MS, MOD_KEY_TAP_THRESHOLD_MS, PADDING_TOKEN};
use crate::models::{KeymapConfig, Layer};

/// Waits for the firmware's mutex before touching the keyboard object.
const PREAMBLE: &str = "while !$mutex
  relinquish
end

kbd = Keyboard.new

";

const TRAILER: &str = "
kbd.start!
";

/// Renders keymap scripts.
pub struct CodeGenerator<'a> {
    config: &'a KeymapConfig,
}

impl<'a> CodeGenerator<'a> {
    /// Creates a new generator for `config`.
    #[must_use]
    pub const fn new(config: &'a KeymapConfig) -> Self {
        Self { config }
    }

    /// Renders the complete script.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(PREAMBLE);
        output.push_str(&format!("kbd.split = {}\n\n", self.config.is_split));
        output.push_str(&self.generate_init_pins());

        for layer in &self.config.layers {
            output.push_str(&generate_layer(layer));
        }

        for layer in self.config.layers.non_base() {
            output.push_str(&generate_mod_key(layer));
        }

        output.push_str(TRAILER);
        output
    }

    /// Renders the script and writes it to `path`.
    ///
    /// The text is written to a temp file next to `path` and then renamed
    /// over it, so an existing file is either fully replaced or left alone.
    pub fn save(&self, path: &Path) -> Result<()> {
        let script = self.render();
        debug!(bytes = script.len(), "rendered keymap script");
        atomic_write(path, &script)?;
        info!(path = %path.display(), layers = self.config.layers.len(), "wrote keymap script");
        Ok(())
    }

    fn generate_init_pins(&self) -> String {
        format!(
            "kbd.init_pins(\n  [ {} ],\n  [ {} ]\n)\n\n",
            join_pins(&self.config.row_pins),
            join_pins(&self.config.col_pins)
        )
    }
}

fn join_pins(pins: &[u8]) -> String {
    pins.iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `kbd.add_layer :name, %i[ ... ]` followed by a blank line.
fn generate_layer(layer: &Layer) -> String {
    let mut output = format!("kbd.add_layer :{}, %i[\n", layer.symbol());
    for row in &layer.rows {
        output.push_str("  ");
        output.push_str(&row.join(" "));
        output.push('\n');
    }
    output.push_str("]\n\n");
    output
}

fn generate_mod_key(layer: &Layer) -> String {
    format!(
        "kbd.define_mod_key :{}, [ :{}, :{}, {}, {} ]\n",
        layer.mod_key_name(),
        PADDING_TOKEN,
        layer.symbol(),
        MOD_KEY_TAP_THRESHOLD_MS,
        MOD_KEY_REPUSH_THRESHOLD_MS
    )
}

/// Writes `content` to `path` via temp file + rename.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    write_via_temp(path, |file| file.write_all(content.as_bytes()))
}

/// Runs `write` against `<path>.tmp`, then renames it over `path`.
///
/// The temp file is removed if any step fails.
fn write_via_temp<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid output path: {}", path.display()))?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let written = File::create(&temp_path).and_then(|mut file| {
        write(&mut file)?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()));
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| format!("Failed to replace {}", path.display()));
    }

    Ok(())
}
