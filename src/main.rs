mod app;
mod audio;
mod blog;
mod brief;
mod config;
mod content;
mod route;
mod runtime;
mod storage;
mod theme;
mod ui;

#[cfg(test)]
mod test_utils;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Warnings during startup reach stderr before the alternate screen is
    // entered; the configured level takes over once the UI starts.
    runtime::init_logging()?;

    runtime::run()
}
