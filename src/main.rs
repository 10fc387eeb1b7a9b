fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the constellation viewer
    constellation_tool::run_app()
}
