//! Binary entry point: seed the store, mount, run, restore the terminal.

use std::io;

use typofix::state::store;
use typofix::{checker, logging, pipeline};

fn main() -> io::Result<()> {
    let _guard = logging::init();

    store::load(checker::fetch_misspellings(), checker::SEED_SENTENCE);

    let handle = pipeline::mount()?;
    let result = pipeline::run(&handle);
    handle.unmount();

    result
}
