mod app;
mod command;
mod commands;
mod config;
mod console;
mod error;
mod history;
mod registry;
#[cfg(test)]
mod test_utils;

fn main() -> std::io::Result<()> {
    env_logger::init();
    app::run()
}
