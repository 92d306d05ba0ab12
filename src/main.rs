fn main() {
    if let Err(e) = verlet_fluid::core::Simulation::run_from_env() {
        eprintln!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}
