use std::io::{self, Write};

use anyhow::Result;

use feeding_plan::quick_rules;

pub fn run() -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    for (index, rule) in quick_rules().iter().enumerate() {
        writeln!(output, "{}. {rule}", index + 1)?;
    }
    output.flush()?;
    Ok(())
}
