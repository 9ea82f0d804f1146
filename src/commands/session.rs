use crate::cli::Cli;
use crate::domain::models::Vehicle;
use crate::services::output::write_assessment;
use crate::services::prompt::Prompter;
use crate::services::registry::RiskRegistry;
use std::io::{BufRead, Write};

/// Interactive assessment loop: read a vehicle, score it, show the registry,
/// repeat until the user declines.
pub struct ConsoleSession<R, W> {
    prompter: Prompter<R, W>,
    registry: RiskRegistry,
    json: bool,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, output: W, registry: RiskRegistry, json: bool) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            registry,
            json,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let vehicle = self.read_vehicle()?;
            self.registry.assess(&vehicle);

            let entries = self.registry.render_all();
            write_assessment(self.prompter.output(), self.json, &entries)?;

            let again = self
                .prompter
                .yes_no("Do you want to assess another vehicle")?;
            self.prompter.write("\n")?;
            if !again {
                return Ok(());
            }
        }
    }

    fn read_vehicle(&mut self) -> anyhow::Result<Vehicle> {
        let make = self.prompter.line("Enter vehicle make: ", "vehicle make")?;
        let model = self.prompter.line("Enter vehicle model: ", "vehicle model")?;
        let year = self.prompter.year()?;
        let vehicle_type = self.prompter.vehicle_type()?;
        let accident_count = self.prompter.accident_count()?;
        let is_commercial = self.prompter.yes_no("Is this a commercial vehicle")?;

        Ok(Vehicle::new(&make, &model, year, vehicle_type)
            .with_accidents(accident_count)
            .commercial(is_commercial))
    }

    pub fn into_parts(self) -> (RiskRegistry, W) {
        (self.registry, self.prompter.into_output())
    }
}

pub fn handle_session(cli: &Cli) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session =
        ConsoleSession::new(stdin.lock(), stdout.lock(), RiskRegistry::new(), cli.json);
    session.run()?;
    let (registry, _) = session.into_parts();
    tracing::debug!(
        assessed = registry.len(),
        empty = registry.is_empty(),
        "session finished"
    );
    Ok(())
}
