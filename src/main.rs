mod cli;

fn main() {
    env_logger::init();
    let command_line_interface = cli::CommandLineInterface::load();
    log::debug!("{command_line_interface:?}");
    if let Err(error) = command_line_interface.run() {
        cli::report(&error);
        std::process::exit(1);
    }
}
