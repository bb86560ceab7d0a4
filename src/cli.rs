use std::io::Write;

use clap::builder::styling::AnsiColor;
use clap::{builder::Styles, Parser};
use snafu::ResultExt;

use crate::asset::AssetRecord;
use crate::error::IoSnafu;
use crate::prelude::*;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Debug, Parser)]
#[command(name = "arsimto", version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Collects asset data from hosts and reports it as JSON")]
#[command(styles = STYLES)]
pub struct Cli {
    /// URI (typically user@host) to collect asset data from
    #[arg(long, value_name = "URI", default_value = "")]
    pub collect: String,

    /// Colourise the output
    #[arg(short = 'c', long = "colour")]
    pub colour: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Runs the collection sequence, writing the report to `out`.
    ///
    /// `out` is the report channel, so a failed record serialization is
    /// reported there as well and the run still returns `Ok`.
    pub fn execute(&self, out: &mut impl Write) -> Result<()> {
        if !self.collect.is_empty() {
            tracing::debug!(uri = %self.collect, "collection target given");
            writeln!(out, "Collecting from  {}", self.collect).context(IoSnafu)?;
        } else {
            writeln!(out, "Not collecting!").context(IoSnafu)?;
        }

        if self.colour {
            writeln!(out, "We will do colour").context(IoSnafu)?;
        } else {
            writeln!(out, "We will do plain black n white").context(IoSnafu)?;
        }

        let record = AssetRecord::sample();
        match record.to_json() {
            Ok(json) => writeln!(out, "Object:{json}").context(IoSnafu)?,
            Err(e) => writeln!(out, "error: {e}").context(IoSnafu)?,
        }

        Ok(())
    }
}
