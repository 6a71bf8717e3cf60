//! `redactie tasks`

use anyhow::Result;
use redactie_core::ai::Splice;
use redactie_core::TaskKind;

use crate::cli::Settings;

pub fn run(settings: &Settings) -> Result<()> {
    let config = settings.resolve()?;
    for task in TaskKind::ALL {
        let effect = match task.splice_policy() {
            Splice::Replace => "replaces document",
            Splice::Prepend => "adds suggestion above document",
        };
        println!("{:<8} {}", task.tag(), effect);
        println!("         {}", task.instruction(config.language));
    }
    Ok(())
}
