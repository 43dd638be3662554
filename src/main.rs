use json_swift_model::{cli, logging};

fn main() -> anyhow::Result<()> {
    let command_line_interface = cli::CommandLineInterface::load();
    logging::init(command_line_interface.verbosity());
    command_line_interface.run()
}
