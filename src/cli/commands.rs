use tracing::{debug, instrument};

use crate::catalog::{find_assembly, standard_build};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::tree_traits::TreeRender;
use crate::visitor::MemoryPriceVisitor;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Report) | None => _report(),
        Some(Commands::Total) => _total(),
        Some(Commands::Price { assembly }) => _price(assembly),
        Some(Commands::Parts) => _parts(),
        Some(Commands::Tree) => _tree(),
    }
}

#[instrument]
fn _report() -> CliResult<()> {
    let build = standard_build();
    let mut visitor = MemoryPriceVisitor::new();
    build.accept(&mut visitor);
    for entry in visitor.entries() {
        output::info(entry);
    }
    output::info(&format!(
        "Total price of memory components: {} AED",
        visitor.total()
    ));
    Ok(())
}

#[instrument]
fn _total() -> CliResult<()> {
    let build = standard_build();
    output::info(&format!("Total build price: {} AED", build.total_price()));
    Ok(())
}

#[instrument]
fn _price(assembly: &str) -> CliResult<()> {
    debug!("assembly: {:?}", assembly);
    let build = standard_build();
    let id = find_assembly(&build, assembly)?;
    output::info(&format!(
        "{}: {} AED",
        build.assembly_name(id),
        build.assembly_price(id)
    ));
    Ok(())
}

#[instrument]
fn _parts() -> CliResult<()> {
    let build = standard_build();
    output::header("Atomic parts");
    for part in build.parts() {
        output::detail(part);
    }
    Ok(())
}

#[instrument]
fn _tree() -> CliResult<()> {
    let build = standard_build();
    output::info(&build.to_tree_string());
    Ok(())
}
