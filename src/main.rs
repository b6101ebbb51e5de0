// argdump: dump load addresses, argv and envp, then exit

use std::io::{self, BufWriter};

use argdump::logging;
use argdump::printer::DiagnosticPrinter;
use argdump::process::{LoadAddresses, ProcessVectors};

fn main() {
    if let Err(e) = logging::init_from_env() {
        eprintln!("Warning: Failed to install logger: {}", e);
    }
    log::info!("dump starting");

    // Capture everything before the first write
    let vectors = ProcessVectors::capture();
    let addresses = LoadAddresses::probe(main as *const () as usize);
    log::debug!(
        "{} arguments, {} environment entries",
        vectors.args().len(),
        vectors.env().len()
    );
    match addresses.entry {
        Some(entry) => log::debug!("_start at {:#x}, main at {:#x}", entry, addresses.main),
        None => log::debug!("_start not available, main at {:#x}", addresses.main),
    }

    // A stdout that refuses writes does not change the exit status, same as C stdio
    let stdout = io::stdout();
    let mut printer = DiagnosticPrinter::new(BufWriter::new(stdout.lock()));
    if let Err(e) = printer.run(&addresses, &vectors) {
        log::debug!("output dropped: {}", e);
    }

    log::info!("dump finished");
}
